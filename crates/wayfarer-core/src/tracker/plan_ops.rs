//! Plan operations for the Tracker.
//!
//! Every mutation follows the same shape: mutate the in-memory list under
//! the lock, then push the full list to the store best-effort. Unknown
//! plan IDs are silent no-ops (`Ok(None)`), never errors.

use std::sync::Arc;

use jiff::Timestamp;
use log::warn;
use tokio::task;

use super::{AddOutcome, Tracker};
use crate::error::Result;
use crate::models::{Destination, Plan, PlanFilter, PlanStatus, Region};
use crate::params::{Id, SetCurrentStep, UpdateStatus, UpdateStepData};

impl Tracker {
    /// Adds a destination snapshot to the plan list.
    ///
    /// Plans are unique by (destination name, region): adding a duplicate
    /// creates nothing and returns the existing plan as
    /// [`AddOutcome::AlreadyPlanned`]. A new plan starts as `selected`,
    /// pointed at the first wizard step, with no step data.
    pub async fn add_plan(&self, snapshot: &Destination) -> Result<AddOutcome> {
        let outcome = self.with_plans(|plans| {
            if let Some(existing) = plans
                .iter()
                .find(|p| p.is_for(&snapshot.name, snapshot.region))
            {
                return AddOutcome::AlreadyPlanned(existing.clone());
            }

            // Max-id + 1 keeps IDs unique and stable even under rapid
            // repeated creation.
            let id = plans.iter().map(|p| p.id).max().unwrap_or(0) + 1;
            let plan = Plan::from_snapshot(id, snapshot, Timestamp::now());
            plans.push(plan.clone());
            AddOutcome::Added(plan)
        })?;

        if outcome.is_added() {
            self.persist().await;
        }
        Ok(outcome)
    }

    /// Removes a plan. Idempotent: removing an unknown ID is a no-op
    /// returning `Ok(None)`.
    pub async fn remove_plan(&self, params: &Id) -> Result<Option<Plan>> {
        let removed = self.with_plans(|plans| {
            let index = plans.iter().position(|p| p.id == params.id)?;
            Some(plans.remove(index))
        })?;

        if removed.is_some() {
            self.persist().await;
        }
        Ok(removed)
    }

    /// Sets a plan's status directly, without transition validation.
    pub async fn update_plan_status(&self, params: &UpdateStatus) -> Result<Option<Plan>> {
        let updated = self.with_plans(|plans| {
            let plan = plans.iter_mut().find(|p| p.id == params.id)?;
            plan.status = params.status;
            Some(plan.clone())
        })?;

        if updated.is_some() {
            self.persist().await;
        }
        Ok(updated)
    }

    /// Records data for one wizard step, replacing any previous entry for
    /// that step whole. The payload's variant selects the step.
    pub async fn update_plan_step_data(&self, params: &UpdateStepData) -> Result<Option<Plan>> {
        let updated = self.with_plans(|plans| {
            let plan = plans.iter_mut().find(|p| p.id == params.id)?;
            plan.steps_data
                .insert(params.data.step_id(), params.data.clone());
            Some(plan.clone())
        })?;

        if updated.is_some() {
            self.persist().await;
        }
        Ok(updated)
    }

    /// Moves a plan's wizard pointer. Navigation is free; earlier steps
    /// need not be complete.
    pub async fn set_plan_current_step(&self, params: &SetCurrentStep) -> Result<Option<Plan>> {
        let updated = self.with_plans(|plans| {
            let plan = plans.iter_mut().find(|p| p.id == params.id)?;
            plan.current_step = params.step;
            Some(plan.clone())
        })?;

        if updated.is_some() {
            self.persist().await;
        }
        Ok(updated)
    }

    /// Rounded completion percentage for a plan; 0 for unknown IDs.
    ///
    /// Recomputed on demand from the step-data map, never cached.
    pub async fn plan_progress(&self, params: &Id) -> Result<u8> {
        self.with_plans(|plans| {
            plans
                .iter()
                .find(|p| p.id == params.id)
                .map(Plan::progress_percent)
                .unwrap_or(0)
        })
    }

    /// Retrieves a plan by its ID.
    pub async fn get_plan(&self, params: &Id) -> Result<Option<Plan>> {
        self.with_plans(|plans| plans.iter().find(|p| p.id == params.id).cloned())
    }

    /// Lists plans, optionally filtered, in creation order.
    pub async fn list_plans(&self, filter: Option<&PlanFilter>) -> Result<Vec<Plan>> {
        self.with_plans(|plans| {
            plans
                .iter()
                .filter(|p| filter.map_or(true, |f| f.matches(p)))
                .cloned()
                .collect()
        })
    }

    /// Plans currently in the given status.
    pub async fn plans_by_status(&self, status: PlanStatus) -> Result<Vec<Plan>> {
        self.list_plans(Some(&PlanFilter::for_status(status))).await
    }

    /// Plans for destinations in the given region.
    pub async fn plans_by_region(&self, region: Region) -> Result<Vec<Plan>> {
        self.list_plans(Some(&PlanFilter::for_region(region))).await
    }

    /// Pushes the full plan list to the store, best-effort.
    ///
    /// The write runs on a blocking task; failures are logged and
    /// swallowed so in-memory state stays authoritative and the calling
    /// mutation still succeeds.
    async fn persist(&self) {
        let snapshot = match self.with_plans(|plans| plans.clone()) {
            Ok(snapshot) => snapshot,
            Err(e) => {
                warn!("skipping persistence, plan state unavailable: {e}");
                return;
            }
        };

        let store = Arc::clone(&self.store);
        match task::spawn_blocking(move || store.save(&snapshot)).await {
            Ok(Ok(())) => {}
            Ok(Err(e)) => warn!("failed to persist plan list: {e}"),
            Err(e) => warn!("plan persistence task failed: {e}"),
        }
    }
}
