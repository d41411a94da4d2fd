//! Typed per-step wizard data.
//!
//! Each wizard step records its own form shape, so the step payload is a
//! tagged union keyed by the step identifier rather than an untyped blob.
//! Writing a variant for a step counts that step as "filled" for progress
//! purposes, even when every field inside it is empty or default.

use serde::{Deserialize, Serialize};

use super::StepId;

/// Transport arrangements for reaching the destination.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TransportPlan {
    /// Travel mode, e.g. "train", "flight", "bus"
    pub mode: String,
    /// Planned departure, free-form
    pub departure: Option<String>,
    /// Booking or PNR reference once reserved
    pub booking_reference: Option<String>,
    pub notes: Option<String>,
}

/// Accommodation arrangements.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RoomPlan {
    /// Kind of stay, e.g. "homestay", "resort", "hostel"
    pub stay_type: String,
    pub check_in: Option<String>,
    pub nights: Option<u32>,
    /// Nightly budget in whole currency units
    pub budget_per_night: Option<u32>,
}

/// The traveler's emotional goals for the trip.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct EmotionPlan {
    /// How the traveler feels now
    pub current_mood: String,
    /// How they want to feel after the trip
    pub desired_outcome: String,
    pub intention: Option<String>,
}

/// Pre-trip awareness checklist.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AwarenessPlan {
    pub weather_checked: bool,
    pub customs_reviewed: bool,
    /// Travel advisories the traveler noted
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub advisories: Vec<String>,
}

/// Cultural itinerary for the destination.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CulturePlan {
    /// Sites and landmarks to visit
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sites: Vec<String>,
    /// Local dishes to try
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub cuisines: Vec<String>,
    pub notes: Option<String>,
}

/// Post-trip self report.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ReportPlan {
    /// One-line summary of the trip
    pub headline: String,
    /// Rating out of 5
    pub rating: u8,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub highlights: Vec<String>,
    pub would_return: bool,
}

/// Data recorded for one wizard step.
///
/// The serde tag keeps persisted records self-describing, so older saves
/// hydrate into the right variant without positional assumptions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "step", rename_all = "lowercase")]
pub enum StepData {
    Transport(TransportPlan),
    Room(RoomPlan),
    Emotion(EmotionPlan),
    Awareness(AwarenessPlan),
    Culture(CulturePlan),
    Report(ReportPlan),
}

impl StepData {
    /// The wizard step this payload belongs to.
    pub fn step_id(&self) -> StepId {
        match self {
            StepData::Transport(_) => StepId::Transport,
            StepData::Room(_) => StepId::Room,
            StepData::Emotion(_) => StepId::Emotion,
            StepData::Awareness(_) => StepId::Awareness,
            StepData::Culture(_) => StepId::Culture,
            StepData::Report(_) => StepId::Report,
        }
    }

    /// An empty payload for the given step.
    ///
    /// Useful for marking a step as visited before any fields are filled;
    /// an empty payload still counts toward progress once written.
    pub fn empty_for(step: StepId) -> StepData {
        match step {
            StepId::Transport => StepData::Transport(TransportPlan::default()),
            StepId::Room => StepData::Room(RoomPlan::default()),
            StepId::Emotion => StepData::Emotion(EmotionPlan::default()),
            StepId::Awareness => StepData::Awareness(AwarenessPlan::default()),
            StepId::Culture => StepData::Culture(CulturePlan::default()),
            StepId::Report => StepData::Report(ReportPlan::default()),
        }
    }
}
