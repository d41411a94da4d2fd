//! The traveler's stated emotional profile.

use serde::{Deserialize, Serialize};

use super::GroupSize;

/// Transient input to the recommendation engine.
///
/// None of the fields are validated: unknown emotion tokens and an
/// unrecognized desired change are treated as no-op modifiers, never as
/// errors. The profile is not persisted by this crate.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EmotionProfile {
    /// Short mood tokens, e.g. "stressed", "excited", "peaceful"
    #[serde(default)]
    pub emotions: Vec<String>,

    /// Single goal token, e.g. "peace", "adventure", "joy"
    pub desired_change: Option<String>,

    /// Travel party size
    pub group_size: Option<GroupSize>,
}

impl EmotionProfile {
    /// Profile with only a desired change set.
    pub fn seeking(desired_change: impl Into<String>) -> Self {
        Self {
            desired_change: Some(desired_change.into()),
            ..Self::default()
        }
    }
}
