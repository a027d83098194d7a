use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Helper function to create a temporary directory for CLI tests
fn create_cli_test_environment() -> TempDir {
    TempDir::new().expect("Failed to create temporary directory")
}

/// Helper function to create a Command with --no-color and a test database
fn cidade_cmd(temp_dir: &TempDir) -> Command {
    let db_path = temp_dir.path().join("cli_test.db");
    let mut cmd = Command::cargo_bin("cidade").expect("Failed to find cidade binary");
    cmd.arg("--no-color")
        .arg("--database-file")
        .arg(db_path);
    cmd
}

#[test]
fn test_cli_daily_missions_seeded() {
    let temp_dir = create_cli_test_environment();

    let first = cidade_cmd(&temp_dir)
        .args(["mission", "daily", "maria", "cidade_inteligente", "--seed", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Daily missions for cidade_inteligente"))
        .get_output()
        .stdout
        .clone();

    let second = cidade_cmd(&temp_dir)
        .args(["mission", "daily", "maria", "cidade_inteligente", "--seed", "3"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    assert_eq!(first, second);
    let output = String::from_utf8(first).expect("Invalid UTF-8");
    assert_eq!(output.matches("\n## ").count(), 3);
}

#[test]
fn test_cli_evolution_missions() {
    let temp_dir = create_cli_test_environment();

    cidade_cmd(&temp_dir)
        .args(["mission", "evolution", "maria", "cidade_inteligente"])
        .assert()
        .success()
        .stdout(predicate::str::contains("## 201. Morador engajado"))
        .stdout(predicate::str::contains("## 202."));

    cidade_cmd(&temp_dir)
        .args(["mission", "evolution", "maria", "outro_bairro"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No missions found."));
}

#[test]
fn test_cli_toggle_and_claim() {
    let temp_dir = create_cli_test_environment();

    cidade_cmd(&temp_dir)
        .args(["mission", "toggle", "maria", "1", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated mission 1"))
        .stdout(predicate::str::contains("- Progress: 50% (1/2)"));

    cidade_cmd(&temp_dir)
        .args(["mission", "claim", "maria", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Finish the remaining 1 task(s)"));

    cidade_cmd(&temp_dir)
        .args(["mission", "toggle", "maria", "1", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(★ Ready to claim)"));

    cidade_cmd(&temp_dir)
        .args(["mission", "claim", "maria", "1", "--claimant", "Maria Silva"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Claimed mission 1: +10 points"))
        .stdout(predicate::str::contains("- Claimed by: Maria Silva"));

    cidade_cmd(&temp_dir)
        .args(["mission", "claim", "maria", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already collected by Maria Silva"));

    cidade_cmd(&temp_dir)
        .args(["points", "maria"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Points for maria: 10"));
}

#[test]
fn test_cli_toggle_out_of_range() {
    let temp_dir = create_cli_test_environment();

    cidade_cmd(&temp_dir)
        .args(["mission", "toggle", "maria", "4", "3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("task_index"));
}

#[test]
fn test_cli_show_unknown_mission() {
    let temp_dir = create_cli_test_environment();

    cidade_cmd(&temp_dir)
        .args(["mission", "show", "maria", "999"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Mission with ID 999 not found"));
}

#[test]
fn test_cli_all_missions() {
    let temp_dir = create_cli_test_environment();

    cidade_cmd(&temp_dir)
        .args(["mission", "all", "maria"])
        .assert()
        .success()
        .stdout(predicate::str::contains("## 1. Hidratação"))
        .stdout(predicate::str::contains("## 202."));
}

#[test]
fn test_cli_poi_add_and_list() {
    let temp_dir = create_cli_test_environment();

    cidade_cmd(&temp_dir)
        .args([
            "poi",
            "add",
            "cidade_inteligente",
            "Farmácia Saúde+",
            "Saúde",
            "--latitude",
            "-23.5505",
            "--longitude",
            "-46.6333",
            "--id",
            "farmacia",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Registered point of interest with ID: farmacia",
        ))
        .stdout(predicate::str::contains("-23.550500, -46.633300"));

    cidade_cmd(&temp_dir)
        .args(["poi", "add", "cidade_inteligente", "Padaria Pão Quente", "Alimentação"])
        .assert()
        .success();

    cidade_cmd(&temp_dir)
        .args(["poi", "list", "cidade_inteligente", "--search", "FARM"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Farmácia Saúde+"))
        .stdout(predicate::str::contains("Padaria").not());

    cidade_cmd(&temp_dir)
        .args(["poi", "list", "cidade_inteligente", "--category", "Lazer"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No points of interest found."));
}

#[test]
fn test_cli_poi_blank_name_rejected() {
    let temp_dir = create_cli_test_environment();

    cidade_cmd(&temp_dir)
        .args(["poi", "add", "cidade_inteligente", " ", "Saúde"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("name"));
}

#[test]
fn test_cli_catalog_export_and_reload() {
    let temp_dir = create_cli_test_environment();

    let exported = cidade_cmd(&temp_dir)
        .args(["catalog", "export"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"developments\""))
        .get_output()
        .stdout
        .clone();

    let catalog_path = temp_dir.path().join("catalog.json");
    std::fs::write(&catalog_path, exported).expect("Failed to write catalog");

    cidade_cmd(&temp_dir)
        .arg("--catalog-file")
        .arg(&catalog_path)
        .args(["mission", "show", "maria", "201"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Morador engajado"));
}

#[test]
fn test_cli_missing_catalog_file() {
    let temp_dir = create_cli_test_environment();

    cidade_cmd(&temp_dir)
        .args(["--catalog-file", "/nonexistent/catalog.json", "points", "maria"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to initialize tracker"));
}

#[test]
fn test_cli_help() {
    Command::cargo_bin("cidade")
        .expect("Failed to find cidade binary")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("mission"))
        .stdout(predicate::str::contains("poi"))
        .stdout(predicate::str::contains("serve"));
}
