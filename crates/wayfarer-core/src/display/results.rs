//! Result wrapper types for displaying operation outcomes.

use std::fmt;

use crate::models::Plan;
use crate::tracker::AddOutcome;

/// Wrapper type for displaying the result of an add operation.
///
/// Formats both outcomes: a created plan renders its full details, a
/// duplicate renders the "already planned" notice with the existing
/// plan's ID so the traveler can jump to it.
#[derive(Debug)]
pub struct AddResult {
    pub outcome: AddOutcome,
}

impl AddResult {
    /// Create a new AddResult wrapper.
    pub fn new(outcome: AddOutcome) -> Self {
        Self { outcome }
    }

    /// Whether a new plan was created.
    pub fn is_added(&self) -> bool {
        self.outcome.is_added()
    }
}

impl fmt::Display for AddResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.outcome {
            AddOutcome::Added(plan) => {
                writeln!(f, "Added plan with ID: {}", plan.id)?;
                writeln!(f)?;
                write!(f, "{plan}")
            }
            AddOutcome::AlreadyPlanned(plan) => {
                writeln!(
                    f,
                    "{} is already in your travel plan (ID: {})",
                    plan.destination, plan.id
                )
            }
        }
    }
}

/// Wrapper type for displaying the result of a remove operation.
pub struct RemoveResult {
    pub resource: Plan,
}

impl RemoveResult {
    /// Create a new RemoveResult wrapper.
    pub fn new(resource: Plan) -> Self {
        Self { resource }
    }
}

impl fmt::Display for RemoveResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Removed plan '{}' (ID: {})",
            self.resource.destination, self.resource.id
        )
    }
}

/// Wrapper type for displaying the result of update operations.
///
/// Tracks the specific changes made so the traveler gets clear feedback
/// about what a wizard action did.
pub struct UpdateResult<T> {
    pub resource: T,
    pub changes: Vec<String>,
}

impl<T> UpdateResult<T> {
    /// Create a new UpdateResult wrapper.
    pub fn new(resource: T) -> Self {
        Self {
            resource,
            changes: Vec::new(),
        }
    }

    /// Create an UpdateResult with a list of changes made.
    pub fn with_changes(resource: T, changes: Vec<String>) -> Self {
        Self { resource, changes }
    }
}

impl fmt::Display for UpdateResult<Plan> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Updated plan with ID: {}", self.resource.id)?;

        if !self.changes.is_empty() {
            writeln!(f)?;
            writeln!(f, "Changes made:")?;
            for change in &self.changes {
                writeln!(f, "- {change}")?;
            }
        }

        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}
