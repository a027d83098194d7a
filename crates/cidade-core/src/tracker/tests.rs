//! Tests for the tracker module.

use std::collections::BTreeMap;

use tempfile::TempDir;

use super::*;
use crate::{
    display::MissionSummaries,
    models::{MissionKind, MissionState},
    params::{ClaimReward, CreatePoi, ListMissions, ListPois, MissionRef, ToggleTask, UserRef},
};

const DEV: &str = "cidade_inteligente";

/// Helper function to create a test tracker
async fn create_test_tracker() -> (TempDir, Tracker) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let tracker = TrackerBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("Failed to create tracker");
    (temp_dir, tracker)
}

fn toggle(mission_id: u64, task_index: usize) -> ToggleTask {
    ToggleTask {
        user_id: "maria".to_string(),
        mission_id,
        task_index,
    }
}

fn claim(mission_id: u64) -> ClaimReward {
    ClaimReward {
        user_id: "maria".to_string(),
        mission_id,
        claimant: None,
    }
}

fn poi(name: &str, category: &str) -> CreatePoi {
    CreatePoi {
        development_id: DEV.to_string(),
        name: name.to_string(),
        category: category.to_string(),
        ..Default::default()
    }
}

#[tokio::test]
async fn test_daily_missions_are_seeded() {
    let (_temp_dir, tracker) = create_test_tracker().await;

    let params = ListMissions {
        user_id: "maria".to_string(),
        development_id: DEV.to_string(),
        kind: MissionKind::Daily,
        seed: Some(42),
    };
    let first = tracker.list_missions(&params).await.expect("Failed to list");
    let second = tracker.list_missions(&params).await.expect("Failed to list");

    assert_eq!(first.len(), 3);
    let ids = |s: &MissionSummaries| s.iter().map(|m| m.mission.id).collect::<Vec<_>>();
    assert_eq!(ids(&first), ids(&second));
    assert!(first.iter().all(|m| m.mission.kind == MissionKind::Daily));
    assert!(first.iter().all(|m| m.percent == 0));
}

#[tokio::test]
async fn test_evolution_missions_carry_progress() {
    let (_temp_dir, tracker) = create_test_tracker().await;

    tracker.toggle_task(&toggle(201, 0)).await.expect("Failed to toggle");

    let missions = tracker
        .list_missions(&ListMissions {
            user_id: "maria".to_string(),
            development_id: DEV.to_string(),
            kind: MissionKind::Evolution,
            seed: None,
        })
        .await
        .expect("Failed to list");

    assert_eq!(missions.len(), 2);
    assert_eq!(missions[0].mission.id, 201);
    assert_eq!(missions[0].percent, 33);
    assert_eq!(missions[1].percent, 0);
}

#[tokio::test]
async fn test_list_all_missions_in_registry_order() {
    let (_temp_dir, tracker) = create_test_tracker().await;

    let all = tracker
        .list_all_missions(&UserRef {
            user_id: "maria".to_string(),
        })
        .await
        .expect("Failed to list");

    let ids: Vec<u64> = all.iter().map(|m| m.mission.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5, 101, 102, 201, 202]);
}

#[tokio::test]
async fn test_show_unknown_mission() {
    let (_temp_dir, tracker) = create_test_tracker().await;

    let result = tracker
        .show_mission(&MissionRef {
            user_id: "maria".to_string(),
            mission_id: 999,
        })
        .await;

    assert!(matches!(result, Err(CoreError::MissionNotFound { id: 999 })));
}

#[tokio::test]
async fn test_toggle_reports_change() {
    let (_temp_dir, tracker) = create_test_tracker().await;

    let result = tracker.toggle_task(&toggle(1, 1)).await.expect("Failed to toggle");
    assert_eq!(result.resource.progress.tasks, vec![false, true]);
    assert_eq!(result.resource.percent, 50);
    assert_eq!(result.changes.len(), 1);
    assert!(result.changes[0].contains("marked done"));

    let result = tracker.toggle_task(&toggle(1, 1)).await.expect("Failed to toggle");
    assert_eq!(result.resource.percent, 0);
    assert!(result.changes[0].contains("marked not done"));
}

#[tokio::test]
async fn test_toggle_out_of_range() {
    let (_temp_dir, tracker) = create_test_tracker().await;

    let result = tracker.toggle_task(&toggle(1, 5)).await;
    assert!(matches!(result, Err(CoreError::InvalidArgument { .. })));
}

#[tokio::test]
async fn test_claim_flow() {
    let (_temp_dir, tracker) = create_test_tracker().await;

    let early = tracker.claim_reward(&claim(201)).await;
    assert!(matches!(
        early,
        Err(CoreError::NotCompletable {
            mission_id: 201,
            remaining: 3
        })
    ));

    for index in 0..3 {
        tracker
            .toggle_task(&toggle(201, index))
            .await
            .expect("Failed to toggle");
    }

    let result = tracker.claim_reward(&claim(201)).await.expect("Failed to claim");
    assert_eq!(result.receipt.points_awarded, 100);
    assert_eq!(result.receipt.total_points, 100);
    assert_eq!(result.summary.state, MissionState::Claimed);
    assert_eq!(result.summary.progress.completed_by.as_deref(), Some("maria"));

    let again = tracker.claim_reward(&claim(201)).await;
    assert!(matches!(again, Err(CoreError::AlreadyClaimed { .. })));

    let points = tracker
        .user_points(&UserRef {
            user_id: "maria".to_string(),
        })
        .await
        .expect("Failed to read points");
    assert_eq!(points, 100);
}

#[tokio::test]
async fn test_toggle_after_claim_changes_nothing() {
    let (_temp_dir, tracker) = create_test_tracker().await;

    tracker.toggle_task(&toggle(4, 0)).await.expect("Failed to toggle");
    tracker.claim_reward(&claim(4)).await.expect("Failed to claim");

    let result = tracker.toggle_task(&toggle(4, 0)).await.expect("Failed to toggle");
    assert!(result.changes.is_empty());
    assert_eq!(result.resource.progress.tasks, vec![true]);
    assert_eq!(result.resource.state, MissionState::Claimed);
}

#[tokio::test]
async fn test_claim_with_explicit_claimant() {
    let (_temp_dir, tracker) = create_test_tracker().await;

    tracker.toggle_task(&toggle(4, 0)).await.expect("Failed to toggle");
    let result = tracker
        .claim_reward(&ClaimReward {
            claimant: Some("  Maria Silva ".to_string()),
            ..claim(4)
        })
        .await
        .expect("Failed to claim");

    assert_eq!(
        result.summary.progress.completed_by.as_deref(),
        Some("Maria Silva")
    );
}

#[tokio::test]
async fn test_custom_catalog() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let catalog = MissionCatalog::new(
        vec![crate::models::MissionDefinition {
            id: 9,
            kind: MissionKind::Daily,
            title: "Regar as plantas".to_string(),
            points: 5,
            ..Default::default()
        }],
        BTreeMap::new(),
    )
    .expect("Failed to build catalog");

    let tracker = TrackerBuilder::new()
        .with_database_path(Some(temp_dir.path().join("custom.db")))
        .with_catalog(catalog)
        .build()
        .await
        .expect("Failed to create tracker");

    // No tasks: claimable straight away.
    let result = tracker.claim_reward(&claim(9)).await.expect("Failed to claim");
    assert_eq!(result.receipt.total_points, 5);
    assert!(tracker.mission_definition(1).is_err());
}

#[tokio::test]
async fn test_add_and_list_pois() {
    let (_temp_dir, tracker) = create_test_tracker().await;

    tracker
        .add_poi(&poi("Farmácia Saúde+", "Saúde"))
        .await
        .expect("Failed to add");
    tracker
        .add_poi(&poi("Padaria Pão Quente", "Alimentação"))
        .await
        .expect("Failed to add");
    tracker
        .add_poi(&poi("Clínica Vida", "Saúde"))
        .await
        .expect("Failed to add");

    let all = tracker
        .list_pois(&ListPois {
            development_id: DEV.to_string(),
            ..Default::default()
        })
        .await
        .expect("Failed to list");
    let names: Vec<&str> = all.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Clínica Vida", "Farmácia Saúde+", "Padaria Pão Quente"]);

    let health = tracker
        .list_pois(&ListPois {
            development_id: DEV.to_string(),
            category: Some("Saúde".to_string()),
            search: Some("farm".to_string()),
        })
        .await
        .expect("Failed to list");
    assert_eq!(health.len(), 1);
    assert_eq!(health[0].name, "Farmácia Saúde+");
}

#[tokio::test]
async fn test_add_poi_validation() {
    let (_temp_dir, tracker) = create_test_tracker().await;

    let blank = tracker.add_poi(&poi("   ", "Saúde")).await;
    assert!(matches!(
        blank,
        Err(CoreError::InvalidArgument { ref field, .. }) if field == "name"
    ));

    let out_of_range = tracker
        .add_poi(&CreatePoi {
            latitude: Some(91.0),
            ..poi("Praça", "Lazer")
        })
        .await;
    assert!(matches!(out_of_range, Err(CoreError::InvalidArgument { .. })));

    let first = tracker
        .add_poi(&CreatePoi {
            id: Some("praca".to_string()),
            ..poi("Praça", "Lazer")
        })
        .await
        .expect("Failed to add");
    assert_eq!(first.id, "praca");

    let duplicate = tracker
        .add_poi(&CreatePoi {
            id: Some("praca".to_string()),
            ..poi("Praça Nova", "Lazer")
        })
        .await;
    assert!(matches!(duplicate, Err(CoreError::InvalidArgument { .. })));
}
