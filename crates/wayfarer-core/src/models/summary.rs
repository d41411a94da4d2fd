//! Plan summary types and functionality.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::{Plan, PlanStatus, Region, StepId, STEP_SEQUENCE};

/// Summary information about a plan with wizard progress.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanSummary {
    /// Plan ID
    pub id: u64,
    /// Destination name
    pub destination: String,
    /// Destination region
    pub region: Region,
    /// Mood label snapshot
    pub emotional_match: String,
    /// Plan status
    pub status: PlanStatus,
    /// Creation timestamp
    pub date_added: Timestamp,
    /// Wizard position pointer
    pub current_step: StepId,
    /// Number of wizard steps with recorded data
    pub steps_filled: usize,
    /// Total number of wizard steps
    pub steps_total: usize,
    /// Rounded completion percentage
    pub progress_percent: u8,
}

impl From<&Plan> for PlanSummary {
    fn from(plan: &Plan) -> Self {
        Self {
            id: plan.id,
            destination: plan.destination.clone(),
            region: plan.region,
            emotional_match: plan.emotional_match.clone(),
            status: plan.status,
            date_added: plan.date_added,
            current_step: plan.current_step,
            steps_filled: plan.steps_filled(),
            steps_total: STEP_SEQUENCE.len(),
            progress_percent: plan.progress_percent(),
        }
    }
}
