use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Helper function to create a temporary directory for CLI tests
fn create_cli_test_environment() -> TempDir {
    TempDir::new().expect("Failed to create temporary directory")
}

/// Helper function to create a Command with --no-color flag for testing
fn wayfarer_cmd() -> Command {
    let mut cmd = Command::cargo_bin("wayfarer").expect("Failed to find wayfarer binary");
    cmd.arg("--no-color");
    cmd
}

#[test]
fn test_cli_recommend_with_seed() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    wayfarer_cmd()
        .args([
            "--database-file",
            db_path.to_str().unwrap(),
            "recommend",
            "--emotion",
            "stressed",
            "--change",
            "peace",
            "--group",
            "solo",
            "--seed",
            "42",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Recommended for you"))
        .stdout(predicate::str::contains("% match"));
}

#[test]
fn test_cli_recommend_seeded_runs_are_reproducible() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();

    let run = |db_arg: &str| {
        wayfarer_cmd()
            .args([
                "--database-file",
                db_arg,
                "recommend",
                "--emotion",
                "excited",
                "--seed",
                "7",
            ])
            .assert()
            .success()
            .get_output()
            .stdout
            .clone()
    };

    assert_eq!(run(db_arg), run(db_arg));
}

#[test]
fn test_cli_recommend_returns_two_or_three_picks() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    let output = wayfarer_cmd()
        .args([
            "--database-file",
            db_path.to_str().unwrap(),
            "recommend",
            "--seed",
            "3",
        ])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let output_str = String::from_utf8(output).expect("Invalid UTF-8");
    let picks = output_str.matches("% match").count();
    assert!((2..=3).contains(&picks), "expected 2-3 picks, got {picks}");
}

#[test]
fn test_cli_destinations_listing() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    wayfarer_cmd()
        .args([
            "--database-file",
            db_path.to_str().unwrap(),
            "destinations",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Destination Catalog"))
        .stdout(predicate::str::contains("Munnar"))
        .stdout(predicate::str::contains("Nandi Hills"));
}

#[test]
fn test_cli_destinations_filtered_by_region() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    wayfarer_cmd()
        .args([
            "--database-file",
            db_path.to_str().unwrap(),
            "destinations",
            "--region",
            "kerala",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Destinations in Kerala"))
        .stdout(predicate::str::contains("Munnar"))
        .stdout(predicate::str::contains("Ooty").not());
}

#[test]
fn test_cli_plan_add_success() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    wayfarer_cmd()
        .args([
            "--database-file",
            db_path.to_str().unwrap(),
            "plan",
            "add",
            "Munnar",
            "--region",
            "kerala",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added plan with ID: 1"))
        .stdout(predicate::str::contains("Munnar"))
        .stdout(predicate::str::contains("○ Selected"));
}

#[test]
fn test_cli_plan_add_duplicate_is_noop_with_notice() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();

    wayfarer_cmd()
        .args(["--database-file", db_arg, "plan", "add", "Munnar", "--region", "kerala"])
        .assert()
        .success();

    wayfarer_cmd()
        .args(["--database-file", db_arg, "plan", "add", "Munnar", "--region", "kerala"])
        .assert()
        .success()
        .stdout(predicate::str::contains("already in your travel plan"));

    // Still exactly one plan
    wayfarer_cmd()
        .args(["--database-file", db_arg, "plan", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ID: 1"))
        .stdout(predicate::str::contains("ID: 2").not());
}

#[test]
fn test_cli_plan_add_unknown_destination_fails() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    wayfarer_cmd()
        .args([
            "--database-file",
            db_path.to_str().unwrap(),
            "plan",
            "add",
            "Atlantis",
            "--region",
            "kerala",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No destination named 'Atlantis'"));
}

#[test]
fn test_cli_list_empty_plans() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    wayfarer_cmd()
        .args(["--database-file", db_path.to_str().unwrap(), "plan", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No plans yet"));
}

#[test]
fn test_cli_bare_invocation_lists_plans() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    wayfarer_cmd()
        .args(["--database-file", db_path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Travel Plans"));
}

#[test]
fn test_cli_plan_show_checklist() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();

    wayfarer_cmd()
        .args(["--database-file", db_arg, "plan", "add", "Ooty", "--region", "tamil-nadu"])
        .assert()
        .success();

    wayfarer_cmd()
        .args(["--database-file", db_arg, "plan", "show", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# 1. Ooty (Tamil Nadu)"))
        .stdout(predicate::str::contains("- [ ] Transport ← current"))
        .stdout(predicate::str::contains("- [ ] Trip Report"))
        .stdout(predicate::str::contains("Progress: 0% (0/6 steps)"));
}

#[test]
fn test_cli_wizard_step_flow() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();

    wayfarer_cmd()
        .args(["--database-file", db_arg, "plan", "add", "Munnar", "--region", "kerala"])
        .assert()
        .success();

    // Save transport data; the wizard advances to the stay step
    wayfarer_cmd()
        .args([
            "--database-file",
            db_arg,
            "plan",
            "step",
            "1",
            "transport",
            "train",
            "--departure",
            "2026-02-01",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Recorded Transport step data"))
        .stdout(predicate::str::contains("Moved to Stay step"));

    // Progress reflects one of six steps
    wayfarer_cmd()
        .args(["--database-file", db_arg, "plan", "progress", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Plan 1 is 17% planned"));

    // Save stay data without advancing
    wayfarer_cmd()
        .args([
            "--database-file",
            db_arg,
            "plan",
            "step",
            "1",
            "--stay",
            "room",
            "homestay",
            "--nights",
            "3",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Recorded Stay step data"))
        .stdout(predicate::str::contains("Moved to").not());

    wayfarer_cmd()
        .args(["--database-file", db_arg, "plan", "progress", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Plan 1 is 33% planned"));
}

#[test]
fn test_cli_plan_current_free_navigation() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();

    wayfarer_cmd()
        .args(["--database-file", db_arg, "plan", "add", "Varkala", "--region", "kerala"])
        .assert()
        .success();

    wayfarer_cmd()
        .args(["--database-file", db_arg, "plan", "current", "1", "report"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Now on Trip Report step"));
}

#[test]
fn test_cli_journey_lifecycle() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();

    wayfarer_cmd()
        .args(["--database-file", db_arg, "plan", "add", "Wayanad", "--region", "kerala"])
        .assert()
        .success();

    wayfarer_cmd()
        .args(["--database-file", db_arg, "plan", "start", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Journey to Wayanad is underway"));

    wayfarer_cmd()
        .args(["--database-file", db_arg, "plan", "list", "--status", "ongoing"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wayanad"));

    // Completion is accepted at any progress
    wayfarer_cmd()
        .args(["--database-file", db_arg, "plan", "complete", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Trip to Wayanad marked complete"));

    wayfarer_cmd()
        .args(["--database-file", db_arg, "plan", "list", "--status", "completed"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wayanad"))
        .stdout(predicate::str::contains("✓ Completed"));
}

#[test]
fn test_cli_plan_remove_and_missing_id() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();

    wayfarer_cmd()
        .args(["--database-file", db_arg, "plan", "add", "Lalbagh", "--region", "bangalore"])
        .assert()
        .success();

    wayfarer_cmd()
        .args(["--database-file", db_arg, "plan", "remove", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed plan 'Lalbagh' (ID: 1)"));

    // Removing again is a quiet no-op with a notice, not a failure
    wayfarer_cmd()
        .args(["--database-file", db_arg, "plan", "remove", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Error: No plan with ID 1"));
}

#[test]
fn test_cli_progress_unknown_plan_reads_zero() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    wayfarer_cmd()
        .args([
            "--database-file",
            db_path.to_str().unwrap(),
            "plan",
            "progress",
            "99",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Plan 99 is 0% planned"));
}

#[test]
fn test_cli_plans_persist_across_invocations() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();

    wayfarer_cmd()
        .args(["--database-file", db_arg, "plan", "add", "Munnar", "--region", "kerala"])
        .assert()
        .success();

    // Fresh process, same database
    wayfarer_cmd()
        .args(["--database-file", db_arg, "plan", "show", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Munnar"));
}
