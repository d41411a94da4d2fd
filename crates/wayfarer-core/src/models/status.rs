//! Status and wizard-step enumerations for plans.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Type-safe enumeration of plan statuses.
///
/// The normal flow is one-directional (selected, then ongoing, then
/// completed), but the tracker accepts direct sets of any of the three
/// values; transition legality is the caller's concern.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum PlanStatus {
    /// Plan has been saved but the journey has not started
    #[default]
    Selected,

    /// The journey is underway
    Ongoing,

    /// The journey has been marked complete by the traveler
    Completed,
}

impl FromStr for PlanStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "selected" => Ok(PlanStatus::Selected),
            "ongoing" => Ok(PlanStatus::Ongoing),
            "completed" => Ok(PlanStatus::Completed),
            _ => Err(format!("Invalid plan status: {s}")),
        }
    }
}

impl PlanStatus {
    /// Convert to the persisted string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            PlanStatus::Selected => "selected",
            PlanStatus::Ongoing => "ongoing",
            PlanStatus::Completed => "completed",
        }
    }

    /// Get status with consistent icon formatting for display.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use wayfarer_core::models::PlanStatus;
    ///
    /// assert_eq!(PlanStatus::Selected.with_icon(), "○ Selected");
    /// assert_eq!(PlanStatus::Ongoing.with_icon(), "➤ Ongoing");
    /// assert_eq!(PlanStatus::Completed.with_icon(), "✓ Completed");
    /// ```
    pub fn with_icon(&self) -> &'static str {
        match self {
            PlanStatus::Selected => "○ Selected",
            PlanStatus::Ongoing => "➤ Ongoing",
            PlanStatus::Completed => "✓ Completed",
        }
    }
}

/// Identifier of one of the six fixed wizard steps.
///
/// The declaration order is the wizard order; it drives "save and advance"
/// navigation and must not be reordered.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum StepId {
    /// How the traveler gets there
    #[default]
    Transport,

    /// Where the traveler stays
    Room,

    /// Emotional goals for the trip
    Emotion,

    /// Local awareness: weather, customs, advisories
    Awareness,

    /// Cultural itinerary
    Culture,

    /// Post-trip report
    Report,
}

/// The fixed wizard sequence, in navigation order.
pub const STEP_SEQUENCE: [StepId; 6] = [
    StepId::Transport,
    StepId::Room,
    StepId::Emotion,
    StepId::Awareness,
    StepId::Culture,
    StepId::Report,
];

impl FromStr for StepId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "transport" => Ok(StepId::Transport),
            "room" | "stay" => Ok(StepId::Room),
            "emotion" => Ok(StepId::Emotion),
            "awareness" => Ok(StepId::Awareness),
            "culture" => Ok(StepId::Culture),
            "report" => Ok(StepId::Report),
            _ => Err(format!("Invalid step: {s}")),
        }
    }
}

impl StepId {
    /// Convert to the persisted string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            StepId::Transport => "transport",
            StepId::Room => "room",
            StepId::Emotion => "emotion",
            StepId::Awareness => "awareness",
            StepId::Culture => "culture",
            StepId::Report => "report",
        }
    }

    /// Human-readable step title for display.
    pub fn title(&self) -> &'static str {
        match self {
            StepId::Transport => "Transport",
            StepId::Room => "Stay",
            StepId::Emotion => "Emotion Goals",
            StepId::Awareness => "Awareness",
            StepId::Culture => "Culture",
            StepId::Report => "Trip Report",
        }
    }

    /// Zero-based position of this step in the wizard sequence.
    pub fn position(&self) -> usize {
        *self as usize
    }

    /// The step after this one in the wizard, or `None` on the last step.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use wayfarer_core::models::StepId;
    ///
    /// assert_eq!(StepId::Transport.next(), Some(StepId::Room));
    /// assert_eq!(StepId::Report.next(), None);
    /// ```
    pub fn next(&self) -> Option<StepId> {
        STEP_SEQUENCE.get(self.position() + 1).copied()
    }
}
