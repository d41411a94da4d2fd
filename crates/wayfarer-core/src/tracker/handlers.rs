//! Handler operations that return formatted wrapper types for the Tracker.
//!
//! This is the interface-facing layer: it resolves catalog lookups,
//! applies the wizard's navigation conventions, and wraps results in
//! display types so front ends render consistently.

use super::{AddOutcome, Tracker};
use crate::catalog::Catalog;
use crate::display::{AddResult, PlanSummaries, RemoveResult, UpdateResult};
use crate::error::{Result, TrackerError};
use crate::models::{Plan, PlanFilter, PlanStatus, PlanSummary};
use crate::params::{AddPlan, Id, ListPlans, SetCurrentStep, UpdateStatus, UpdateStepData};

impl Tracker {
    /// Handle adding a catalog destination to the plan list.
    ///
    /// Resolves the (name, region) pair against the catalog and snapshots
    /// the match. A duplicate is not an error; the returned wrapper
    /// renders the "already planned" notice instead.
    ///
    /// # Errors
    ///
    /// Returns `TrackerError::InvalidInput` when the destination is not in
    /// the catalog.
    pub async fn add_plan_result(&self, catalog: &Catalog, params: &AddPlan) -> Result<AddResult> {
        let destination = catalog
            .find(&params.destination, params.region)
            .ok_or_else(|| {
                TrackerError::invalid_input(
                    "destination",
                    format!(
                        "No destination named '{}' in {}",
                        params.destination,
                        params.region.title()
                    ),
                )
            })?;

        let outcome = self.add_plan(destination).await?;
        Ok(AddResult::new(outcome))
    }

    /// Handle listing plans as summaries with wizard progress.
    pub async fn list_plans_summary(&self, params: &ListPlans) -> Result<PlanSummaries> {
        let filter = PlanFilter::from(params);
        let plans = self.list_plans(Some(&filter)).await?;
        let summaries: Vec<PlanSummary> = plans.iter().map(Into::into).collect();
        Ok(PlanSummaries(summaries))
    }

    /// Handle showing a complete plan with its step data.
    pub async fn show_plan(&self, params: &Id) -> Result<Option<Plan>> {
        self.get_plan(params).await
    }

    /// Handle removing a plan, returning the removed plan for
    /// confirmation display, or `None` if the ID was unknown.
    pub async fn remove_plan_result(&self, params: &Id) -> Result<Option<RemoveResult>> {
        Ok(self.remove_plan(params).await?.map(RemoveResult::new))
    }

    /// Handle the wizard's "save step" action.
    ///
    /// Stores the step payload and, when `advance` is set and the written
    /// step has a successor in the fixed sequence, moves the wizard
    /// pointer to that successor. On the last step the pointer stays put.
    pub async fn save_step(
        &self,
        params: &UpdateStepData,
        advance: bool,
    ) -> Result<Option<UpdateResult<Plan>>> {
        let step = params.data.step_id();
        let Some(mut plan) = self.update_plan_step_data(params).await? else {
            return Ok(None);
        };

        let mut changes = vec![format!("Recorded {} step data", step.title())];

        if advance {
            if let Some(next) = step.next() {
                if let Some(advanced) = self
                    .set_plan_current_step(&SetCurrentStep {
                        id: params.id,
                        step: next,
                    })
                    .await?
                {
                    plan = advanced;
                    changes.push(format!("Moved to {} step", next.title()));
                }
            }
        }

        Ok(Some(UpdateResult::with_changes(plan, changes)))
    }

    /// Handle the "start journey" action: plan moves to `ongoing`.
    pub async fn start_journey(&self, params: &Id) -> Result<Option<Plan>> {
        self.update_plan_status(&UpdateStatus {
            id: params.id,
            status: PlanStatus::Ongoing,
        })
        .await
    }

    /// Handle the "mark complete" action: plan moves to `completed`.
    ///
    /// Deliberately independent of step progress: a traveler can report a
    /// trip complete with unfilled wizard steps.
    pub async fn mark_completed(&self, params: &Id) -> Result<Option<Plan>> {
        self.update_plan_status(&UpdateStatus {
            id: params.id,
            status: PlanStatus::Completed,
        })
        .await
    }
}

impl AddOutcome {
    /// Render-ready notice line for this outcome.
    pub fn notice(&self) -> String {
        match self {
            AddOutcome::Added(plan) => {
                format!("Added {} to your travel plan", plan.destination)
            }
            AddOutcome::AlreadyPlanned(plan) => {
                format!("{} is already in your travel plan", plan.destination)
            }
        }
    }
}
