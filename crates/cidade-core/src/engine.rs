//! Mission progress engine.
//!
//! Pure functions over a [`MissionDefinition`] and a caller-owned
//! [`MissionProgress`]. Nothing here persists state or awards points; the
//! store layer ([`crate::db`]) does that after the engine has validated a
//! claim.
//!
//! ```text
//!   toggle_task            all tasks done            claim_reward
//! ┌─────────────┐        ┌─────────────┐           ┌─────────────┐
//! │ InProgress  │◀──────▶│ Completable │──────────▶│   Claimed   │
//! └─────────────┘        └─────────────┘           └─────────────┘
//! ```
//!
//! A mission with no tasks reads as 100% complete: there is nothing left to
//! do, so it is immediately [`MissionState::Completable`].

use log::warn;

use crate::{
    error::{CoreError, Result},
    models::{MissionDefinition, MissionProgress, MissionState},
};

/// Percentage reported for a mission without tasks.
pub const EMPTY_MISSION_PERCENT: u8 = 100;

/// Return a progress record that is safe to compute on.
///
/// A missing record, a record for another mission, or a record whose task
/// list does not match the definition's length becomes a fresh all-open,
/// unclaimed record. The one exception is a claimed record of this mission
/// whose task list no longer matches (the mission was edited after the
/// claim): the claim is terminal, so it is kept and every task reads done.
pub fn normalize(
    definition: &MissionDefinition,
    progress: Option<&MissionProgress>,
) -> MissionProgress {
    match progress {
        Some(p) if p.mission_id == definition.id && p.tasks.len() == definition.task_count() => {
            p.clone()
        }
        Some(p) if p.mission_id == definition.id && p.is_claimed() => {
            warn!(
                "Claimed progress for mission {} has {} flags for {} tasks; keeping the claim",
                definition.id,
                p.tasks.len(),
                definition.task_count()
            );
            MissionProgress {
                mission_id: definition.id,
                tasks: vec![true; definition.task_count()],
                completed_by: p.completed_by.clone(),
            }
        }
        Some(p) => {
            warn!(
                "Discarding malformed progress for mission {} ({} flags for {} tasks)",
                definition.id,
                p.tasks.len(),
                definition.task_count()
            );
            MissionProgress::new(definition.id, definition.task_count())
        }
        None => MissionProgress::new(definition.id, definition.task_count()),
    }
}

/// Completion percentage, `round(100 * done / total)`, halves rounding up.
///
/// Malformed progress counts as nothing done.
pub fn completion_percent(definition: &MissionDefinition, progress: &MissionProgress) -> u8 {
    let total = definition.task_count();
    if total == 0 {
        return EMPTY_MISSION_PERCENT;
    }
    if progress.tasks.len() != total {
        return 0;
    }

    let done = progress.completed_count();
    let rounded = (200 * done + total) / (2 * total);
    rounded.min(100) as u8
}

/// Current lifecycle state of a progress record.
pub fn state(definition: &MissionDefinition, progress: &MissionProgress) -> MissionState {
    if progress.is_claimed() {
        MissionState::Claimed
    } else if completion_percent(definition, progress) == 100 {
        MissionState::Completable
    } else {
        MissionState::InProgress
    }
}

/// Flip the task at `task_index`.
///
/// Claimed records are left untouched and `Ok(false)` is returned. Returns
/// `Ok(true)` when a flag was flipped.
///
/// # Errors
///
/// Returns [`CoreError::InvalidArgument`] when `task_index` is out of range.
pub fn toggle_task(progress: &mut MissionProgress, task_index: usize) -> Result<bool> {
    if progress.is_claimed() {
        return Ok(false);
    }

    let task_count = progress.tasks.len();
    let flag = progress.tasks.get_mut(task_index).ok_or_else(|| {
        CoreError::invalid_argument("task_index").with_reason(format!(
            "index {task_index} is out of range for a mission with {task_count} task(s)"
        ))
    })?;
    *flag = !*flag;
    Ok(true)
}

/// Validate and record a reward claim, freezing the record.
///
/// # Errors
///
/// - [`CoreError::AlreadyClaimed`] when `completed_by` is already set.
/// - [`CoreError::NotCompletable`] when the mission is below 100%.
/// - [`CoreError::InvalidArgument`] when `claimant` is blank.
pub fn claim_reward(
    definition: &MissionDefinition,
    progress: &mut MissionProgress,
    claimant: &str,
) -> Result<()> {
    if let Some(claimed_by) = &progress.completed_by {
        return Err(CoreError::AlreadyClaimed {
            mission_id: definition.id,
            claimed_by: claimed_by.clone(),
        });
    }

    if completion_percent(definition, progress) < 100 {
        let remaining = if progress.tasks.len() == definition.task_count() {
            definition.task_count() - progress.completed_count()
        } else {
            definition.task_count()
        };
        return Err(CoreError::NotCompletable {
            mission_id: definition.id,
            remaining,
        });
    }

    let claimant = claimant.trim();
    if claimant.is_empty() {
        return Err(CoreError::invalid_argument("claimant").with_reason("must not be empty"));
    }

    progress.completed_by = Some(claimant.to_string());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MissionKind;

    fn mission(tasks: &[&str]) -> MissionDefinition {
        MissionDefinition {
            id: 7,
            kind: MissionKind::Daily,
            title: "Caminhada".to_string(),
            description: String::new(),
            icon: "walk".to_string(),
            points: 20,
            tasks: tasks.iter().map(|t| t.to_string()).collect(),
            development_ids: None,
        }
    }

    fn progress(tasks: &[bool], completed_by: Option<&str>) -> MissionProgress {
        MissionProgress {
            mission_id: 7,
            tasks: tasks.to_vec(),
            completed_by: completed_by.map(String::from),
        }
    }

    #[test]
    fn test_half_done_is_fifty_percent() {
        let def = mission(&["a", "b"]);
        assert_eq!(completion_percent(&def, &progress(&[true, false], None)), 50);
    }

    #[test]
    fn test_percent_rounds_to_nearest() {
        let def = mission(&["a", "b", "c"]);
        assert_eq!(completion_percent(&def, &progress(&[true, false, false], None)), 33);
        assert_eq!(completion_percent(&def, &progress(&[true, true, false], None)), 67);

        let eighths = mission(&["1", "2", "3", "4", "5", "6", "7", "8"]);
        let one_of_eight = progress(&[true, false, false, false, false, false, false, false], None);
        assert_eq!(completion_percent(&eighths, &one_of_eight), 13);
    }

    #[test]
    fn test_empty_mission_reads_complete() {
        let def = mission(&[]);
        let fresh = normalize(&def, None);
        assert_eq!(completion_percent(&def, &fresh), 100);
        assert_eq!(state(&def, &fresh), MissionState::Completable);
    }

    #[test]
    fn test_mismatched_progress_counts_as_nothing_done() {
        let def = mission(&["a", "b"]);
        let bad = progress(&[true, true, true], None);
        assert_eq!(completion_percent(&def, &bad), 0);

        let normalized = normalize(&def, Some(&bad));
        assert_eq!(normalized.tasks, vec![false, false]);
        assert!(!normalized.is_claimed());
    }

    #[test]
    fn test_normalize_rejects_record_for_other_mission() {
        let def = mission(&["a"]);
        let mut other = progress(&[true], Some("Ana"));
        other.mission_id = 99;

        let normalized = normalize(&def, Some(&other));
        assert_eq!(normalized.mission_id, 7);
        assert_eq!(normalized.tasks, vec![false]);
        assert_eq!(normalized.completed_by, None);
    }

    #[test]
    fn test_normalize_keeps_claim_on_reshaped_mission() {
        let def = mission(&["a", "b", "c"]);
        let claimed = progress(&[true, true], Some("Maria"));

        let normalized = normalize(&def, Some(&claimed));
        assert_eq!(normalized.tasks, vec![true, true, true]);
        assert_eq!(normalized.completed_by.as_deref(), Some("Maria"));
        assert_eq!(state(&def, &normalized), MissionState::Claimed);
    }

    #[test]
    fn test_normalize_keeps_wellformed_record() {
        let def = mission(&["a", "b"]);
        let good = progress(&[true, false], None);
        assert_eq!(normalize(&def, Some(&good)), good);
    }

    #[test]
    fn test_toggle_flips_and_unflips() {
        let mut p = progress(&[false, false], None);
        assert!(toggle_task(&mut p, 1).unwrap());
        assert_eq!(p.tasks, vec![false, true]);
        assert!(toggle_task(&mut p, 1).unwrap());
        assert_eq!(p.tasks, vec![false, false]);
    }

    #[test]
    fn test_toggle_out_of_range_is_invalid_argument() {
        let mut p = progress(&[false, false], None);
        let err = toggle_task(&mut p, 2).unwrap_err();
        assert!(matches!(err, CoreError::InvalidArgument { ref field, .. } if field == "task_index"));
        assert_eq!(p.tasks, vec![false, false]);
    }

    #[test]
    fn test_claimed_record_is_frozen() {
        let mut p = progress(&[true, true], Some("Maria"));
        for index in 0..5 {
            assert!(!toggle_task(&mut p, index).unwrap());
            assert_eq!(p.tasks, vec![true, true]);
        }
    }

    #[test]
    fn test_percent_is_monotonic_while_completing() {
        let def = mission(&["a", "b", "c", "d", "e"]);
        let mut p = normalize(&def, None);
        let mut last = completion_percent(&def, &p);
        for index in [3, 0, 4, 1, 2] {
            toggle_task(&mut p, index).unwrap();
            let now = completion_percent(&def, &p);
            assert!(now >= last, "{now} < {last}");
            last = now;
        }
        assert_eq!(last, 100);
    }

    #[test]
    fn test_claim_on_already_claimed_fails() {
        let def = mission(&["a", "b"]);
        let mut p = progress(&[true, true], Some("Maria"));
        let err = claim_reward(&def, &mut p, "João").unwrap_err();
        match err {
            CoreError::AlreadyClaimed { claimed_by, .. } => assert_eq!(claimed_by, "Maria"),
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(p.completed_by.as_deref(), Some("Maria"));
    }

    #[test]
    fn test_claim_before_completion_fails() {
        let def = mission(&["a"]);
        let mut p = progress(&[false], None);
        let err = claim_reward(&def, &mut p, "Maria").unwrap_err();
        assert!(matches!(err, CoreError::NotCompletable { remaining: 1, .. }));
        assert!(!p.is_claimed());
    }

    #[test]
    fn test_claim_freezes_completed_mission() {
        let def = mission(&["a", "b"]);
        let mut p = progress(&[true, true], None);
        assert_eq!(state(&def, &p), MissionState::Completable);

        claim_reward(&def, &mut p, " Maria ").unwrap();
        assert_eq!(p.completed_by.as_deref(), Some("Maria"));
        assert_eq!(state(&def, &p), MissionState::Claimed);

        assert!(!toggle_task(&mut p, 0).unwrap());
        assert_eq!(p.tasks, vec![true, true]);
    }

    #[test]
    fn test_claim_requires_claimant() {
        let def = mission(&["a"]);
        let mut p = progress(&[true], None);
        assert!(matches!(
            claim_reward(&def, &mut p, "  "),
            Err(CoreError::InvalidArgument { .. })
        ));
        assert!(!p.is_claimed());
    }

    #[test]
    fn test_empty_mission_can_be_claimed() {
        let def = mission(&[]);
        let mut p = normalize(&def, None);
        claim_reward(&def, &mut p, "Maria").unwrap();
        assert!(p.is_claimed());
    }
}
