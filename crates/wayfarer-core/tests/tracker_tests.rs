//! Integration tests for the tracker's handler layer.

use tempfile::TempDir;

use wayfarer_core::models::{EmotionPlan, ReportPlan, StepData, StepId};
use wayfarer_core::params::{AddPlan, Id, ListPlans, UpdateStepData};
use wayfarer_core::{Catalog, PlanStatus, Region, Tracker, TrackerBuilder, TrackerError};

async fn create_test_tracker() -> (TempDir, Tracker, Catalog) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let tracker = TrackerBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("Failed to create tracker");
    let catalog = Catalog::builtin().expect("builtin catalog");
    (temp_dir, tracker, catalog)
}

fn add_munnar() -> AddPlan {
    AddPlan {
        destination: "Munnar".to_string(),
        region: Region::Kerala,
    }
}

#[tokio::test]
async fn test_add_plan_result_snapshots_catalog_entry() {
    let (_temp_dir, tracker, catalog) = create_test_tracker().await;

    let result = tracker
        .add_plan_result(&catalog, &add_munnar())
        .await
        .expect("add plan");
    assert!(result.is_added());

    let output = format!("{result}");
    assert!(output.contains("Added plan with ID: 1"));
    assert!(output.contains("Munnar"));
    assert!(output.contains("Kerala"));
}

#[tokio::test]
async fn test_add_plan_result_duplicate_notice() {
    let (_temp_dir, tracker, catalog) = create_test_tracker().await;

    tracker
        .add_plan_result(&catalog, &add_munnar())
        .await
        .expect("first add");
    let second = tracker
        .add_plan_result(&catalog, &add_munnar())
        .await
        .expect("second add");

    assert!(!second.is_added());
    let output = format!("{second}");
    assert!(output.contains("already in your travel plan"));

    let summaries = tracker
        .list_plans_summary(&ListPlans::default())
        .await
        .expect("list");
    assert_eq!(summaries.len(), 1);
}

#[tokio::test]
async fn test_add_plan_result_unknown_destination() {
    let (_temp_dir, tracker, catalog) = create_test_tracker().await;

    let error = tracker
        .add_plan_result(
            &catalog,
            &AddPlan {
                destination: "Atlantis".to_string(),
                region: Region::Kerala,
            },
        )
        .await
        .expect_err("unknown destination must be rejected");

    match error {
        TrackerError::InvalidInput { field, reason } => {
            assert_eq!(field, "destination");
            assert!(reason.contains("Atlantis"));
        }
        other => panic!("Expected InvalidInput error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_list_plans_summary_filters_by_status() {
    let (_temp_dir, tracker, catalog) = create_test_tracker().await;

    tracker
        .add_plan_result(&catalog, &add_munnar())
        .await
        .expect("add munnar");
    tracker
        .add_plan_result(
            &catalog,
            &AddPlan {
                destination: "Ooty".to_string(),
                region: Region::TamilNadu,
            },
        )
        .await
        .expect("add ooty");

    tracker
        .start_journey(&Id { id: 1 })
        .await
        .expect("start journey")
        .expect("plan exists");

    let ongoing = tracker
        .list_plans_summary(&ListPlans {
            status: Some(PlanStatus::Ongoing),
            region: None,
        })
        .await
        .expect("list ongoing");
    assert_eq!(ongoing.len(), 1);

    let kerala = tracker
        .list_plans_summary(&ListPlans {
            status: None,
            region: Some(Region::Kerala),
        })
        .await
        .expect("list kerala");
    assert_eq!(kerala.len(), 1);
    assert_eq!(kerala.iter().next().map(|s| s.destination.as_str()), Some("Munnar"));
}

#[tokio::test]
async fn test_save_step_advances_wizard_pointer() {
    let (_temp_dir, tracker, catalog) = create_test_tracker().await;

    tracker
        .add_plan_result(&catalog, &add_munnar())
        .await
        .expect("add plan");

    let result = tracker
        .save_step(
            &UpdateStepData {
                id: 1,
                data: StepData::Transport(Default::default()),
            },
            true,
        )
        .await
        .expect("save step")
        .expect("plan exists");

    assert_eq!(result.resource.current_step, StepId::Room);
    let output = format!("{result}");
    assert!(output.contains("Recorded Transport step data"));
    assert!(output.contains("Moved to Stay step"));
}

#[tokio::test]
async fn test_save_step_without_advance_keeps_pointer() {
    let (_temp_dir, tracker, catalog) = create_test_tracker().await;

    tracker
        .add_plan_result(&catalog, &add_munnar())
        .await
        .expect("add plan");

    let result = tracker
        .save_step(
            &UpdateStepData {
                id: 1,
                data: StepData::Emotion(EmotionPlan {
                    current_mood: "stressed".to_string(),
                    desired_outcome: "calm".to_string(),
                    intention: None,
                }),
            },
            false,
        )
        .await
        .expect("save step")
        .expect("plan exists");

    // Data recorded out of order, pointer untouched
    assert_eq!(result.resource.current_step, StepId::Transport);
    assert_eq!(result.resource.steps_filled(), 1);
}

#[tokio::test]
async fn test_save_step_on_last_step_stays_put() {
    let (_temp_dir, tracker, catalog) = create_test_tracker().await;

    tracker
        .add_plan_result(&catalog, &add_munnar())
        .await
        .expect("add plan");

    let result = tracker
        .save_step(
            &UpdateStepData {
                id: 1,
                data: StepData::Report(ReportPlan {
                    headline: "Wonderful trip".to_string(),
                    rating: 5,
                    highlights: vec!["tea gardens".to_string()],
                    would_return: true,
                }),
            },
            true,
        )
        .await
        .expect("save step")
        .expect("plan exists");

    // Report is the last step; advancing goes nowhere
    assert_eq!(result.resource.current_step, StepId::Transport);
    let output = format!("{result}");
    assert!(output.contains("Recorded Trip Report step data"));
    assert!(!output.contains("Moved to"));
}

#[tokio::test]
async fn test_save_step_unknown_plan_is_noop() {
    let (_temp_dir, tracker, _catalog) = create_test_tracker().await;

    let result = tracker
        .save_step(
            &UpdateStepData {
                id: 42,
                data: StepData::Transport(Default::default()),
            },
            true,
        )
        .await
        .expect("save step must not error");
    assert!(result.is_none());
}

#[tokio::test]
async fn test_journey_status_shortcuts() {
    let (_temp_dir, tracker, catalog) = create_test_tracker().await;

    tracker
        .add_plan_result(&catalog, &add_munnar())
        .await
        .expect("add plan");

    let started = tracker
        .start_journey(&Id { id: 1 })
        .await
        .expect("start")
        .expect("plan exists");
    assert_eq!(started.status, PlanStatus::Ongoing);

    // Completion is accepted regardless of wizard progress
    let completed = tracker
        .mark_completed(&Id { id: 1 })
        .await
        .expect("complete")
        .expect("plan exists");
    assert_eq!(completed.status, PlanStatus::Completed);
    assert_eq!(completed.progress_percent(), 0);
}

#[tokio::test]
async fn test_remove_plan_result() {
    let (_temp_dir, tracker, catalog) = create_test_tracker().await;

    tracker
        .add_plan_result(&catalog, &add_munnar())
        .await
        .expect("add plan");

    let removed = tracker
        .remove_plan_result(&Id { id: 1 })
        .await
        .expect("remove")
        .expect("plan existed");
    assert!(format!("{removed}").contains("Removed plan 'Munnar' (ID: 1)"));

    let missing = tracker
        .remove_plan_result(&Id { id: 1 })
        .await
        .expect("second remove");
    assert!(missing.is_none());
}
