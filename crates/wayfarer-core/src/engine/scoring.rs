//! Deterministic destination scoring.
//!
//! Scoring is a pure function of one destination and one profile: baseline
//! match percentage, plus fixed additive bonuses for desired-change,
//! group-size and per-emotion keyword matches, clamped to 100. The random
//! part of recommendation (pool sampling) lives in the parent module so
//! the two can be tested independently.

use crate::models::{Destination, EmotionProfile};

/// Bonus when the desired-change keyword appears in the mood label.
pub const CHANGE_BONUS: u16 = 10;

/// Bonus when the destination's ideal group size matches the profile's.
pub const GROUP_BONUS: u16 = 5;

/// Bonus per emotion token whose keyword appears in the mood label.
pub const EMOTION_BONUS: u16 = 8;

/// Scores never exceed this, regardless of stacked bonuses.
pub const MAX_SCORE: u16 = 100;

/// Keyword searched in the mood label for a desired-change token.
///
/// Unrecognized tokens are no-op modifiers, not errors.
fn change_keyword(token: &str) -> Option<&'static str> {
    match token.to_lowercase().as_str() {
        "peace" | "tranquil" => Some("peace"),
        "adventure" => Some("adventure"),
        "joy" => Some("joy"),
        _ => None,
    }
}

/// Keyword searched in the mood label for an emotion token.
fn emotion_keyword(token: &str) -> Option<&'static str> {
    match token.to_lowercase().as_str() {
        "stressed" => Some("peace"),
        "excited" => Some("adventurous"),
        "peaceful" => Some("peace"),
        _ => None,
    }
}

/// Computes the relevance score of a destination for a profile.
///
/// Deterministic: identical inputs always produce the identical score.
pub fn score(destination: &Destination, profile: &EmotionProfile) -> u8 {
    let label = destination.emotional_match.to_lowercase();
    let mut total = u16::from(destination.match_percentage);

    if let Some(keyword) = profile.desired_change.as_deref().and_then(change_keyword) {
        if label.contains(keyword) {
            total += CHANGE_BONUS;
        }
    }

    if let (Some(ideal), Some(group)) = (destination.ideal_group_size, profile.group_size) {
        if ideal == group {
            total += GROUP_BONUS;
        }
    }

    for emotion in &profile.emotions {
        if let Some(keyword) = emotion_keyword(emotion) {
            if label.contains(keyword) {
                total += EMOTION_BONUS;
            }
        }
    }

    total.min(MAX_SCORE) as u8
}

/// Scores every catalog entry and returns copies sorted by score,
/// descending.
///
/// The sort is stable, so destinations with equal scores keep their
/// catalog order; each returned copy carries its recomputed score in
/// `match_percentage`.
pub fn rank(catalog: &[Destination], profile: &EmotionProfile) -> Vec<Destination> {
    let mut ranked: Vec<Destination> = catalog
        .iter()
        .map(|destination| {
            let mut scored = destination.clone();
            scored.match_percentage = score(destination, profile);
            scored
        })
        .collect();

    ranked.sort_by(|a, b| b.match_percentage.cmp(&a.match_percentage));
    ranked
}
