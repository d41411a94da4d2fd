//! Parameter structures for wayfarer operations
//!
//! Shared parameter structures usable across interfaces (CLI today, other
//! front ends later) without framework-specific derives. Interface layers
//! wrap these with their own derives (clap `Args`, etc.) and convert via
//! `Into`, keeping the core free of UI framework dependencies.

use serde::{Deserialize, Serialize};

use crate::models::{PlanStatus, Region, StepData, StepId};

/// Generic parameters for operations requiring just a plan ID.
///
/// Used for get_plan, remove_plan, plan_progress and the status shortcuts.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Id {
    /// The ID of the plan to operate on
    pub id: u64,
}

/// Parameters for adding a destination to the plan list.
///
/// Identifies a catalog entry by name and region; the tracker snapshots
/// the resolved destination's descriptive fields at add-time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddPlan {
    /// Destination name as it appears in the catalog
    pub destination: String,
    /// Region the destination belongs to
    pub region: Region,
}

/// Parameters for listing plans.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ListPlans {
    /// Only plans in this status, when set
    pub status: Option<PlanStatus>,
    /// Only plans in this region, when set
    pub region: Option<Region>,
}

/// Parameters for setting a plan's status directly.
///
/// No transition validation happens in the core; the caller owns the
/// decision of which transitions it offers.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct UpdateStatus {
    /// Plan ID to update
    pub id: u64,
    /// New status for the plan
    pub status: PlanStatus,
}

/// Parameters for recording one wizard step's data.
///
/// The payload's variant determines which step is written; the stored
/// entry for that step is replaced whole, not merged.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateStepData {
    /// Plan ID to update
    pub id: u64,
    /// Complete step payload to store
    pub data: StepData,
}

/// Parameters for moving a plan's wizard pointer.
///
/// Navigation is free: no check that earlier steps are complete.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SetCurrentStep {
    /// Plan ID to update
    pub id: u64,
    /// Step to point the wizard at
    pub step: StepId,
}
