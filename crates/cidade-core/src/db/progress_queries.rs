//! Mission progress and points queries.

use jiff::Timestamp;
use log::{debug, info, warn};
use rusqlite::{params, Connection, OptionalExtension, TransactionBehavior};

use crate::{
    engine,
    error::{DatabaseResultExt, Result},
    models::{ClaimReceipt, MissionDefinition, MissionProgress},
};

const SELECT_PROGRESS_SQL: &str =
    "SELECT tasks, completed_by FROM mission_progress WHERE user_id = ?1 AND mission_id = ?2";
const UPSERT_PROGRESS_SQL: &str = "INSERT INTO mission_progress (user_id, mission_id, tasks, updated_at) VALUES (?1, ?2, ?3, ?4) \
     ON CONFLICT (user_id, mission_id) DO UPDATE SET tasks = excluded.tasks, updated_at = excluded.updated_at \
     WHERE completed_by IS NULL";
const CLAIM_PROGRESS_SQL: &str = "INSERT INTO mission_progress (user_id, mission_id, tasks, completed_by, claimed_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?5) \
     ON CONFLICT (user_id, mission_id) DO UPDATE SET tasks = excluded.tasks, completed_by = excluded.completed_by, \
     claimed_at = excluded.claimed_at, updated_at = excluded.updated_at WHERE completed_by IS NULL";
const CREDIT_POINTS_SQL: &str = "INSERT INTO user_points (user_id, total, updated_at) VALUES (?1, ?2, ?3) \
     ON CONFLICT (user_id) DO UPDATE SET total = total + excluded.total, updated_at = excluded.updated_at";
const SELECT_POINTS_SQL: &str = "SELECT total FROM user_points WHERE user_id = ?1";

/// Read one progress row. Undecodable task flags are returned empty so that
/// normalization treats the record as malformed.
fn read_progress(
    connection: &Connection,
    user_id: &str,
    mission_id: u64,
) -> Result<Option<MissionProgress>> {
    let row = connection
        .query_row(
            SELECT_PROGRESS_SQL,
            params![user_id, mission_id as i64],
            |row| Ok((row.get::<_, String>(0)?, row.get::<_, Option<String>>(1)?)),
        )
        .optional()
        .db_context("Failed to query mission progress")?;

    Ok(row.map(|(tasks_json, completed_by)| {
        let tasks = serde_json::from_str::<Vec<bool>>(&tasks_json).unwrap_or_else(|e| {
            warn!("Undecodable task flags for user {user_id}, mission {mission_id}: {e}");
            Vec::new()
        });
        MissionProgress {
            mission_id,
            tasks,
            completed_by,
        }
    }))
}

impl super::Database {
    /// Retrieves the stored progress of a user on a mission, as stored.
    pub fn get_progress(&self, user_id: &str, mission_id: u64) -> Result<Option<MissionProgress>> {
        read_progress(&self.connection, user_id, mission_id)
    }

    /// Retrieves the stored progress of a user on several missions, in the
    /// order of `mission_ids`.
    pub fn get_progress_many(
        &self,
        user_id: &str,
        mission_ids: &[u64],
    ) -> Result<Vec<Option<MissionProgress>>> {
        mission_ids
            .iter()
            .map(|mission_id| read_progress(&self.connection, user_id, *mission_id))
            .collect()
    }

    /// Flips one task of a user's progress and stores the result.
    ///
    /// Claimed progress is returned unchanged. The read, toggle and write
    /// happen in one immediate transaction so a concurrent claim cannot be
    /// overwritten.
    pub fn toggle_task(
        &mut self,
        user_id: &str,
        definition: &MissionDefinition,
        task_index: usize,
    ) -> Result<MissionProgress> {
        let tx = self
            .connection
            .transaction_with_behavior(TransactionBehavior::Immediate)
            .db_context("Failed to begin transaction")?;

        let stored = read_progress(&tx, user_id, definition.id)?;
        let mut progress = engine::normalize(definition, stored.as_ref());

        if !engine::toggle_task(&mut progress, task_index)? {
            debug!(
                "Ignoring toggle on claimed mission {} for user {user_id}",
                definition.id
            );
            return Ok(progress);
        }

        tx.execute(
            UPSERT_PROGRESS_SQL,
            params![
                user_id,
                definition.id as i64,
                serde_json::to_string(&progress.tasks)?,
                Timestamp::now().to_string()
            ],
        )
        .db_context("Failed to store mission progress")?;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(progress)
    }

    /// Claims a mission's reward: validates the claim against the stored
    /// progress, freezes the record and credits the mission's points, all in
    /// one transaction.
    ///
    /// # Errors
    ///
    /// Propagates [`crate::CoreError::AlreadyClaimed`] and
    /// [`crate::CoreError::NotCompletable`] from the progress engine.
    pub fn claim_mission(
        &mut self,
        user_id: &str,
        definition: &MissionDefinition,
        claimant: &str,
    ) -> Result<ClaimReceipt> {
        let tx = self
            .connection
            .transaction_with_behavior(TransactionBehavior::Immediate)
            .db_context("Failed to begin transaction")?;

        let stored = read_progress(&tx, user_id, definition.id)?;
        let mut progress = engine::normalize(definition, stored.as_ref());
        engine::claim_reward(definition, &mut progress, claimant)?;

        let claimed_at = Timestamp::now();
        let claimed_at_str = claimed_at.to_string();

        tx.execute(
            CLAIM_PROGRESS_SQL,
            params![
                user_id,
                definition.id as i64,
                serde_json::to_string(&progress.tasks)?,
                progress.completed_by.as_deref(),
                &claimed_at_str
            ],
        )
        .db_context("Failed to store claimed mission")?;

        tx.execute(
            CREDIT_POINTS_SQL,
            params![user_id, i64::from(definition.points), &claimed_at_str],
        )
        .db_context("Failed to credit points")?;

        let total: i64 = tx
            .query_row(SELECT_POINTS_SQL, params![user_id], |row| row.get(0))
            .db_context("Failed to read points total")?;

        tx.commit().db_context("Failed to commit transaction")?;

        info!(
            "User {user_id} claimed mission {} (+{} points, total {total})",
            definition.id, definition.points
        );

        Ok(ClaimReceipt {
            progress,
            points_awarded: definition.points,
            total_points: total.max(0) as u64,
            claimed_at,
        })
    }

    /// Total points credited to a user; zero when none were ever credited.
    pub fn user_points(&self, user_id: &str) -> Result<u64> {
        let total: Option<i64> = self
            .connection
            .query_row(SELECT_POINTS_SQL, params![user_id], |row| row.get(0))
            .optional()
            .db_context("Failed to query points total")?;

        Ok(total.unwrap_or(0).max(0) as u64)
    }
}
