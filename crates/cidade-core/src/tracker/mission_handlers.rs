//! Mission handler operations that return formatted wrapper types for the
//! Tracker.

use rand::{rngs::StdRng, SeedableRng};

use super::Tracker;
use crate::{
    display::{ClaimResult, MissionSummaries, UpdateResult},
    error::Result,
    models::{MissionDefinition, MissionKind, MissionSummary},
    params::{ClaimReward, ListMissions, MissionRef, ToggleTask, UserRef},
};

impl Tracker {
    /// Handle listing a development's missions with the resident's progress.
    ///
    /// Daily missions are a fresh sample of at most three on every call
    /// unless `params.seed` pins the draw. Evolution missions are listed in
    /// full.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// # use cidade_core::{params::ListMissions, MissionKind, TrackerBuilder};
    /// # async {
    /// let tracker = TrackerBuilder::new().build().await?;
    /// let params = ListMissions {
    ///     user_id: "maria".to_string(),
    ///     development_id: "cidade_inteligente".to_string(),
    ///     kind: MissionKind::Daily,
    ///     seed: Some(7),
    /// };
    /// let missions = tracker.list_missions(&params).await?;
    /// # Result::<(), cidade_core::CoreError>::Ok(())
    /// # };
    /// ```
    pub async fn list_missions(&self, params: &ListMissions) -> Result<MissionSummaries> {
        let missions = self.select_missions(params);
        self.summarize(&params.user_id, &missions).await
    }

    /// Handle listing the whole catalog with the resident's progress.
    pub async fn list_all_missions(&self, params: &UserRef) -> Result<MissionSummaries> {
        let missions = self.catalog.all_missions();
        self.summarize(&params.user_id, &missions).await
    }

    /// Handle showing one mission card.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::MissionNotFound` for an ID missing from the
    /// catalog.
    pub async fn show_mission(&self, params: &MissionRef) -> Result<MissionSummary> {
        let definition = self.mission_definition(params.mission_id)?;
        let progress = self.get_progress(&params.user_id, &[definition]).await?;

        Ok(MissionSummary::new(
            definition.clone(),
            progress.into_iter().next().flatten().as_ref(),
        ))
    }

    /// Handle flipping one task, returning the updated card and the change
    /// made. Toggles on a claimed mission change nothing and report no
    /// changes.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::MissionNotFound` for an unknown mission and
    /// `CoreError::InvalidArgument` for an out-of-range task index.
    pub async fn toggle_task(&self, params: &ToggleTask) -> Result<UpdateResult<MissionSummary>> {
        let definition = self.mission_definition(params.mission_id)?;
        let progress = self
            .flip_task(&params.user_id, definition, params.task_index)
            .await?;

        let mut changes = Vec::new();
        if !progress.is_claimed() {
            if let Some(task) = definition.tasks.get(params.task_index) {
                let done = progress
                    .tasks
                    .get(params.task_index)
                    .copied()
                    .unwrap_or(false);
                changes.push(format!(
                    "Task {} '{task}' marked {}",
                    params.task_index,
                    if done { "done" } else { "not done" }
                ));
            }
        }

        Ok(UpdateResult::with_changes(
            MissionSummary::new(definition.clone(), Some(&progress)),
            changes,
        ))
    }

    /// Handle claiming a completed mission's reward.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::AlreadyClaimed` when the reward was collected
    /// before, `CoreError::NotCompletable` while tasks remain and
    /// `CoreError::MissionNotFound` for an unknown mission.
    pub async fn claim_reward(&self, params: &ClaimReward) -> Result<ClaimResult> {
        let definition = self.mission_definition(params.mission_id)?;
        let receipt = self
            .record_claim(&params.user_id, definition, params.claimant())
            .await?;

        let summary = MissionSummary::new(definition.clone(), Some(&receipt.progress));
        Ok(ClaimResult::new(summary, receipt))
    }

    /// Handle reading a resident's points balance.
    pub async fn user_points(&self, params: &UserRef) -> Result<u64> {
        self.points_of(&params.user_id).await
    }

    fn select_missions(&self, params: &ListMissions) -> Vec<&MissionDefinition> {
        let development_id = params.development_id.as_str();
        match (params.kind, params.seed) {
            (MissionKind::Daily, Some(seed)) => self
                .catalog
                .daily_missions_for(development_id, &mut StdRng::seed_from_u64(seed)),
            (MissionKind::Daily, None) => self
                .catalog
                .daily_missions_for(development_id, &mut rand::thread_rng()),
            (MissionKind::Evolution, _) => self.catalog.evolution_missions_for(development_id),
        }
    }

    async fn summarize(
        &self,
        user_id: &str,
        missions: &[&MissionDefinition],
    ) -> Result<MissionSummaries> {
        let progress = self.get_progress(user_id, missions).await?;

        Ok(MissionSummaries(
            missions
                .iter()
                .zip(progress)
                .map(|(mission, stored)| MissionSummary::new((*mission).clone(), stored.as_ref()))
                .collect(),
        ))
    }
}
