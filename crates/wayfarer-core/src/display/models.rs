//! Display implementations for domain models.
//!
//! All output is markdown for rich terminal rendering: plans show their
//! metadata and a step checklist, destinations show their mood label and
//! highlights, summaries compress to a few lines for lists.

use std::fmt;

use super::datetime::LocalDateTime;
use crate::models::{
    Destination, GroupSize, Plan, PlanStatus, PlanSummary, Region, StepId, STEP_SEQUENCE,
};

impl fmt::Display for PlanStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for StepId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title())
    }
}

impl fmt::Display for GroupSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Plan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}. {} ({})", self.id, self.destination, self.region)?;
        writeln!(f)?;

        // Metadata section
        writeln!(f, "- Status: {}", self.status.with_icon())?;
        writeln!(
            f,
            "- Match: {}% — {}",
            self.match_percentage, self.emotional_match
        )?;
        if let Some(group) = self.ideal_group_size {
            writeln!(f, "- Ideal group: {group}")?;
        }
        writeln!(f, "- Best time: {}", self.best_time)?;
        writeln!(f, "- Added: {}", LocalDateTime(&self.date_added))?;
        writeln!(
            f,
            "- Progress: {}% ({}/{} steps)",
            self.progress_percent(),
            self.steps_filled(),
            STEP_SEQUENCE.len()
        )?;

        writeln!(f)?;
        writeln!(f, "{}", self.description)?;

        writeln!(f, "\n## Steps")?;
        writeln!(f)?;
        for step in STEP_SEQUENCE {
            let mark = if self.steps_data.contains_key(&step) {
                "x"
            } else {
                " "
            };
            let pointer = if step == self.current_step {
                " ← current"
            } else {
                ""
            };
            writeln!(f, "- [{mark}] {}{pointer}", step.title())?;
        }

        Ok(())
    }
}

impl fmt::Display for PlanSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "## {} (ID: {}) — {}",
            self.destination,
            self.id,
            self.status.with_icon()
        )?;
        writeln!(f)?;
        writeln!(f, "- **Region**: {}", self.region)?;
        writeln!(
            f,
            "- **Progress**: {}% ({}/{} steps), next up: {}",
            self.progress_percent,
            self.steps_filled,
            self.steps_total,
            self.current_step.title()
        )?;
        writeln!(f, "- **Added**: {}", LocalDateTime(&self.date_added))?;
        writeln!(f)?;

        Ok(())
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "## {} ({}) — {}% match",
            self.name, self.region, self.match_percentage
        )?;
        writeln!(f)?;
        writeln!(f, "*{}*", self.emotional_match)?;
        writeln!(f)?;
        writeln!(f, "{}", self.description)?;
        writeln!(f)?;

        if !self.cultural_highlights.is_empty() {
            writeln!(f, "- Highlights: {}", self.cultural_highlights.join(", "))?;
        }
        if let Some(group) = self.ideal_group_size {
            writeln!(f, "- Ideal group: {group}")?;
        }
        writeln!(f, "- Best time: {}", self.best_time)?;
        writeln!(f, "- Safety: {}", self.safety_level)?;
        writeln!(f, "- Price tier: {}", self.price_tier.as_str())?;
        writeln!(f)?;

        Ok(())
    }
}
