//! Progress and points operations for the Tracker.

use log::debug;

use super::Tracker;
use crate::{
    error::Result,
    models::{ClaimReceipt, MissionDefinition, MissionProgress},
};

impl Tracker {
    /// Stored progress of a user on each of `missions`, in the same order.
    /// Missions never touched yield `None`.
    pub async fn get_progress(
        &self,
        user_id: &str,
        missions: &[&MissionDefinition],
    ) -> Result<Vec<Option<MissionProgress>>> {
        let user_id = user_id.to_string();
        let mission_ids: Vec<u64> = missions.iter().map(|mission| mission.id).collect();

        debug!("Loading progress of {user_id} on {} mission(s)", mission_ids.len());
        self.with_database(move |db| db.get_progress_many(&user_id, &mission_ids))
            .await
    }

    /// Flips one task and returns the stored progress afterwards.
    pub async fn flip_task(
        &self,
        user_id: &str,
        definition: &MissionDefinition,
        task_index: usize,
    ) -> Result<MissionProgress> {
        let user_id = user_id.to_string();
        let definition = definition.clone();

        self.with_database(move |db| db.toggle_task(&user_id, &definition, task_index))
            .await
    }

    /// Records a claim and credits the mission's points.
    pub async fn record_claim(
        &self,
        user_id: &str,
        definition: &MissionDefinition,
        claimant: &str,
    ) -> Result<ClaimReceipt> {
        let user_id = user_id.to_string();
        let claimant = claimant.to_string();
        let definition = definition.clone();

        self.with_database(move |db| db.claim_mission(&user_id, &definition, &claimant))
            .await
    }

    /// Total points credited to a user.
    pub async fn points_of(&self, user_id: &str) -> Result<u64> {
        let user_id = user_id.to_string();
        self.with_database(move |db| db.user_points(&user_id)).await
    }
}
