//! Plan model definition and related functionality.

use std::collections::BTreeMap;

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::{Destination, GroupSize, PlanStatus, PriceTier, Region, StepData, StepId, STEP_SEQUENCE};

/// A saved intent to visit a destination, with wizard state.
///
/// A plan snapshots the source destination's descriptive fields at add-time;
/// later catalog edits never affect existing plans. The serde defaults on
/// `status`, `current_step` and `steps_data` keep records written by older
/// versions loading cleanly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Plan {
    /// Unique identifier for the plan
    pub id: u64,

    /// Snapshot of the destination name
    pub destination: String,

    /// Snapshot of the destination region
    pub region: Region,

    /// Snapshot of the mood label
    pub emotional_match: String,

    /// Snapshot of the match percentage as it read when added
    pub match_percentage: u8,

    /// Snapshot of the destination description
    pub description: String,

    /// Snapshot of the suited party size
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ideal_group_size: Option<GroupSize>,

    /// Snapshot of the safety note
    pub safety_level: String,

    /// Snapshot of the best season to visit
    pub best_time: String,

    /// Snapshot of the cost band
    pub price_tier: PriceTier,

    /// Coarse lifecycle phase of the plan
    #[serde(default)]
    pub status: PlanStatus,

    /// Timestamp when the plan was created (UTC)
    pub date_added: Timestamp,

    /// Wizard position pointer; defaults to the first step on records
    /// saved before the wizard existed
    #[serde(default)]
    pub current_step: StepId,

    /// Recorded data per wizard step; absent key means not yet filled
    #[serde(default)]
    pub steps_data: BTreeMap<StepId, StepData>,
}

impl Plan {
    /// Creates a fresh plan from a destination snapshot.
    pub fn from_snapshot(id: u64, destination: &Destination, date_added: Timestamp) -> Self {
        Self {
            id,
            destination: destination.name.clone(),
            region: destination.region,
            emotional_match: destination.emotional_match.clone(),
            match_percentage: destination.match_percentage,
            description: destination.description.clone(),
            ideal_group_size: destination.ideal_group_size,
            safety_level: destination.safety_level.clone(),
            best_time: destination.best_time.clone(),
            price_tier: destination.price_tier,
            status: PlanStatus::Selected,
            date_added,
            current_step: StepId::Transport,
            steps_data: BTreeMap::new(),
        }
    }

    /// Whether this plan was created from the given destination identity.
    ///
    /// Plans are unique by (name, region); the name comparison ignores case
    /// so a re-add with different capitalization is still a duplicate.
    pub fn is_for(&self, name: &str, region: Region) -> bool {
        self.region == region && self.destination.eq_ignore_ascii_case(name)
    }

    /// Rounded completion percentage over the six wizard steps.
    ///
    /// Recomputed on every call; a step counts once its key exists in
    /// `steps_data`, regardless of the payload's contents.
    pub fn progress_percent(&self) -> u8 {
        let filled = self.steps_data.len();
        let total = STEP_SEQUENCE.len();
        ((filled as f64 / total as f64) * 100.0).round() as u8
    }

    /// Number of wizard steps with recorded data.
    pub fn steps_filled(&self) -> usize {
        self.steps_data.len()
    }
}
