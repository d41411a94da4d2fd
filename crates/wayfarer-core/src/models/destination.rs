//! Destination catalog entry and related enumerations.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Geographic region a destination belongs to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum Region {
    TamilNadu,
    Kerala,
    Bangalore,
}

impl FromStr for Region {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "tamil-nadu" | "tamilnadu" | "tamil nadu" => Ok(Region::TamilNadu),
            "kerala" => Ok(Region::Kerala),
            "bangalore" => Ok(Region::Bangalore),
            _ => Err(format!("Invalid region: {s}")),
        }
    }
}

impl Region {
    /// Convert to the persisted string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Region::TamilNadu => "tamil-nadu",
            Region::Kerala => "kerala",
            Region::Bangalore => "bangalore",
        }
    }

    /// Human-readable region name for display.
    pub fn title(&self) -> &'static str {
        match self {
            Region::TamilNadu => "Tamil Nadu",
            Region::Kerala => "Kerala",
            Region::Bangalore => "Bangalore",
        }
    }
}

/// Travel party size a destination suits best.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum GroupSize {
    Solo,
    Couple,
    SmallGroup,
    LargeGroup,
}

impl FromStr for GroupSize {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "solo" => Ok(GroupSize::Solo),
            "couple" => Ok(GroupSize::Couple),
            "small-group" | "small_group" => Ok(GroupSize::SmallGroup),
            "large-group" | "large_group" => Ok(GroupSize::LargeGroup),
            _ => Err(format!("Invalid group size: {s}")),
        }
    }
}

impl GroupSize {
    /// Convert to the persisted string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            GroupSize::Solo => "solo",
            GroupSize::Couple => "couple",
            GroupSize::SmallGroup => "small-group",
            GroupSize::LargeGroup => "large-group",
        }
    }
}

/// Rough cost band for a destination.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PriceTier {
    Budget,
    Moderate,
    Premium,
}

impl PriceTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            PriceTier::Budget => "budget",
            PriceTier::Moderate => "moderate",
            PriceTier::Premium => "premium",
        }
    }
}

/// A curated destination as supplied by the catalog.
///
/// Catalog entries are immutable; the scoring engine works on copies and
/// saved plans snapshot the descriptive fields at add-time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Destination {
    /// Destination name, unique within its region
    pub name: String,

    /// Region the destination belongs to
    pub region: Region,

    /// Free-text mood label, e.g. "Peaceful & Rejuvenating".
    /// Matched by substring during scoring; deliberately not an enum.
    pub emotional_match: String,

    /// Baseline relevance score, 0-100. Recommendation results carry the
    /// recomputed score in this field.
    pub match_percentage: u8,

    /// Party size the destination suits best, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ideal_group_size: Option<GroupSize>,

    /// Short description shown to the traveler
    pub description: String,

    /// Notable cultural highlights
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub cultural_highlights: Vec<String>,

    /// Free-text safety note
    pub safety_level: String,

    /// Best season or months to visit
    pub best_time: String,

    /// Rough cost band
    pub price_tier: PriceTier,

    /// Optional image reference
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}
