//! Integration tests comparing CLI output with the core Display
//! implementations the MCP server also returns.

use std::process::Command;

use cidade_core::{
    params::{ListMissions, MissionRef, ToggleTask},
    MissionKind, Tracker, TrackerBuilder,
};
use tempfile::TempDir;

/// Helper function to create a test tracker with temporary database
async fn create_test_tracker() -> (Tracker, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");
    let db_path = temp_dir.path().join("test.db");

    let tracker = TrackerBuilder::new()
        .with_database_path(Some(db_path))
        .build()
        .await
        .expect("Failed to create tracker");

    (tracker, temp_dir)
}

/// Run a CLI command and capture its output
fn run_cli_command(temp_dir: &TempDir, args: &[&str]) -> String {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_cidade"));
    cmd.arg("--no-color")
        .arg("--database-file")
        .arg(temp_dir.path().join("test.db"));

    for arg in args {
        cmd.arg(arg);
    }

    let output = cmd.output().expect("Failed to run CLI command");
    String::from_utf8(output.stdout).expect("Invalid UTF-8 in CLI output")
}

#[tokio::test]
async fn test_show_mission_consistency() {
    let (tracker, temp_dir) = create_test_tracker().await;

    tracker
        .toggle_task(&ToggleTask {
            user_id: "maria".to_string(),
            mission_id: 3,
            task_index: 1,
        })
        .await
        .expect("Failed to toggle");

    let cli_output = run_cli_command(&temp_dir, &["mission", "show", "maria", "3"]);
    let direct = tracker
        .show_mission(&MissionRef {
            user_id: "maria".to_string(),
            mission_id: 3,
        })
        .await
        .expect("Failed to show");

    assert_eq!(cli_output, direct.to_string());
    assert!(cli_output.contains("- [x] 1. Incluir salada no almoço"));
}

#[tokio::test]
async fn test_toggle_from_cli_visible_to_tracker() {
    let (tracker, temp_dir) = create_test_tracker().await;

    run_cli_command(&temp_dir, &["mission", "toggle", "joao", "201", "2"]);

    let summary = tracker
        .show_mission(&MissionRef {
            user_id: "joao".to_string(),
            mission_id: 201,
        })
        .await
        .expect("Failed to show");
    assert_eq!(summary.progress.tasks, vec![false, false, true]);
    assert_eq!(summary.percent, 33);
}

#[tokio::test]
async fn test_seeded_daily_consistency() {
    let (tracker, temp_dir) = create_test_tracker().await;

    let cli_output = run_cli_command(
        &temp_dir,
        &["mission", "daily", "maria", "cidade_inteligente", "--seed", "11"],
    );
    let direct = tracker
        .list_missions(&ListMissions {
            user_id: "maria".to_string(),
            development_id: "cidade_inteligente".to_string(),
            kind: MissionKind::Daily,
            seed: Some(11),
        })
        .await
        .expect("Failed to list");

    assert_eq!(
        cli_output,
        format!("# Daily missions for cidade_inteligente\n\n{direct}")
    );
}
