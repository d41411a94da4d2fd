//! Filter types for querying plans.

use super::{PlanStatus, Region};

/// Filter options for querying the plan list.
///
/// All criteria are conjunctive; `None` means "don't filter on this".
#[derive(Debug, Clone, Copy, Default)]
pub struct PlanFilter {
    /// Filter by lifecycle status
    pub status: Option<PlanStatus>,

    /// Filter by destination region
    pub region: Option<Region>,
}

impl PlanFilter {
    /// Filter for plans in a given status.
    pub fn for_status(status: PlanStatus) -> Self {
        Self {
            status: Some(status),
            region: None,
        }
    }

    /// Filter for plans in a given region.
    pub fn for_region(region: Region) -> Self {
        Self {
            status: None,
            region: Some(region),
        }
    }

    /// Whether the given plan passes this filter.
    pub fn matches(&self, plan: &super::Plan) -> bool {
        self.status.map_or(true, |s| plan.status == s)
            && self.region.map_or(true, |r| plan.region == r)
    }
}

impl From<&crate::params::ListPlans> for PlanFilter {
    fn from(params: &crate::params::ListPlans) -> Self {
        Self {
            status: params.status,
            region: params.region,
        }
    }
}
