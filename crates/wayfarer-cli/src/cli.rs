//! Command-line interface definitions using clap
//!
//! This module defines the CLI structure using clap's derive API, following
//! the parameter wrapper pattern: each command has a CLI-specific argument
//! struct with clap derives that converts into the framework-free core
//! parameter type via `From`. Value enums mirror the core's region, status
//! and step enums so help text and validation stay in the CLI layer.

use anyhow::Result;
use clap::{Args, Subcommand, ValueEnum};
use rand::rngs::StdRng;
use rand::SeedableRng;

use wayfarer_core::display::{OperationStatus, Recommendations, UpdateResult};
use wayfarer_core::engine;
use wayfarer_core::models::{
    AwarenessPlan, CulturePlan, EmotionPlan, EmotionProfile, GroupSize, PlanStatus, Region,
    ReportPlan, RoomPlan, StepData, StepId, TransportPlan,
};
use wayfarer_core::params::{AddPlan, Id, ListPlans, SetCurrentStep, UpdateStatus, UpdateStepData};
use wayfarer_core::{Catalog, Tracker};

use crate::renderer::TerminalRenderer;

/// Dispatches parsed commands against the tracker and catalog.
pub struct Cli {
    tracker: Tracker,
    catalog: Catalog,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(tracker: Tracker, catalog: Catalog, renderer: TerminalRenderer) -> Self {
        Self {
            tracker,
            catalog,
            renderer,
        }
    }

    /// Score the catalog against the given mood and render a sampled
    /// subset.
    pub async fn handle_recommend(self, args: RecommendArgs) -> Result<()> {
        let mut rng = match args.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let profile = EmotionProfile::from(args);

        let picks = engine::recommend(self.catalog.destinations(), &profile, &mut rng);

        self.renderer.render("# Recommended for you\n")?;
        self.renderer.render(&Recommendations(picks).to_string())
    }

    /// Render the catalog, optionally narrowed to one region.
    pub fn handle_destinations(self, args: DestinationsArgs) -> Result<()> {
        let mut output = String::new();
        match args.region {
            Some(region) => {
                let region = Region::from(region);
                output.push_str(&format!("# Destinations in {}\n\n", region.title()));
                for destination in self.catalog.by_region(region) {
                    output.push_str(&destination.to_string());
                }
            }
            None => {
                output.push_str("# Destination Catalog\n\n");
                for destination in self.catalog.destinations() {
                    output.push_str(&destination.to_string());
                }
            }
        }
        self.renderer.render(&output)
    }

    /// Dispatch a plan subcommand.
    pub async fn handle_plan_command(self, command: PlanCommands) -> Result<()> {
        use PlanCommands::*;

        match command {
            Add(args) => {
                let result = self
                    .tracker
                    .add_plan_result(&self.catalog, &args.into())
                    .await?;
                self.renderer.render(&result.to_string())
            }
            List(args) => self.list_plans(&args.into()).await,
            Show(args) => {
                let id = args.id;
                match self.tracker.show_plan(&args.into()).await? {
                    Some(plan) => self.renderer.render(&plan.to_string()),
                    None => self.render_missing(id),
                }
            }
            Remove(args) => {
                let id = args.id;
                match self.tracker.remove_plan_result(&args.into()).await? {
                    Some(result) => self.renderer.render(&result.to_string()),
                    None => self.render_missing(id),
                }
            }
            Status(args) => {
                let params = UpdateStatus::from(&args);
                match self.tracker.update_plan_status(&params).await? {
                    Some(plan) => {
                        let changes = vec![format!("Status set to {}", params.status)];
                        self.renderer
                            .render(&UpdateResult::with_changes(plan, changes).to_string())
                    }
                    None => self.render_missing(args.id),
                }
            }
            Start(args) => {
                let id = args.id;
                match self.tracker.start_journey(&args.into()).await? {
                    Some(plan) => {
                        let message = format!("Journey to {} is underway", plan.destination);
                        self.renderer
                            .render(&OperationStatus::success(message).to_string())
                    }
                    None => self.render_missing(id),
                }
            }
            Complete(args) => {
                let id = args.id;
                match self.tracker.mark_completed(&args.into()).await? {
                    Some(plan) => {
                        let message = format!("Trip to {} marked complete", plan.destination);
                        self.renderer
                            .render(&OperationStatus::success(message).to_string())
                    }
                    None => self.render_missing(id),
                }
            }
            Step(args) => {
                let advance = !args.stay;
                let params = UpdateStepData {
                    id: args.id,
                    data: args.data.into(),
                };
                match self.tracker.save_step(&params, advance).await? {
                    Some(result) => self.renderer.render(&result.to_string()),
                    None => self.render_missing(params.id),
                }
            }
            Current(args) => {
                let params = SetCurrentStep::from(&args);
                match self.tracker.set_plan_current_step(&params).await? {
                    Some(plan) => {
                        let changes = vec![format!("Now on {} step", params.step.title())];
                        self.renderer
                            .render(&UpdateResult::with_changes(plan, changes).to_string())
                    }
                    None => self.render_missing(args.id),
                }
            }
            Progress(args) => {
                let id = args.id;
                let progress = self.tracker.plan_progress(&args.into()).await?;
                let message = format!("Plan {id} is {progress}% planned");
                self.renderer
                    .render(&OperationStatus::success(message).to_string())
            }
        }
    }

    /// Render the plan list with optional filters.
    pub async fn list_plans(&self, params: &ListPlans) -> Result<()> {
        let summaries = self.tracker.list_plans_summary(params).await?;
        self.renderer.render("# Travel Plans\n")?;
        self.renderer.render(&summaries.to_string())
    }

    fn render_missing(&self, id: u64) -> Result<()> {
        self.renderer
            .render(&OperationStatus::failure(format!("No plan with ID {id}")).to_string())
    }
}

// ============================================================================
// CLI Argument Wrapper Implementations
// ============================================================================

/// Recommend destinations for how you feel
#[derive(Args)]
pub struct RecommendArgs {
    /// Current mood token, repeatable (e.g. --emotion stressed --emotion excited)
    #[arg(short, long = "emotion", value_name = "EMOTION")]
    pub emotions: Vec<String>,

    /// What you want out of the trip (peace, adventure, joy)
    #[arg(short, long = "change")]
    pub desired_change: Option<String>,

    /// Who is traveling
    #[arg(short, long = "group")]
    pub group_size: Option<GroupSizeArg>,

    /// Seed for reproducible sampling; omit for a fresh shuffle each run
    #[arg(long)]
    pub seed: Option<u64>,
}

impl From<RecommendArgs> for EmotionProfile {
    fn from(val: RecommendArgs) -> Self {
        EmotionProfile {
            emotions: val.emotions,
            desired_change: val.desired_change,
            group_size: val.group_size.map(Into::into),
        }
    }
}

/// Browse the destination catalog
#[derive(Args)]
pub struct DestinationsArgs {
    /// Only show destinations in this region
    #[arg(short, long)]
    pub region: Option<RegionArg>,
}

/// Save a catalog destination as a travel plan
#[derive(Args)]
pub struct AddPlanArgs {
    /// Destination name as listed in the catalog
    pub destination: String,
    /// Region the destination belongs to
    #[arg(short, long)]
    pub region: RegionArg,
}

impl From<AddPlanArgs> for AddPlan {
    fn from(val: AddPlanArgs) -> Self {
        AddPlan {
            destination: val.destination,
            region: val.region.into(),
        }
    }
}

/// List saved travel plans
#[derive(Args)]
pub struct ListPlansArgs {
    /// Only plans in this status
    #[arg(short, long)]
    pub status: Option<PlanStatusArg>,
    /// Only plans in this region
    #[arg(short, long)]
    pub region: Option<RegionArg>,
}

impl From<ListPlansArgs> for ListPlans {
    fn from(val: ListPlansArgs) -> Self {
        ListPlans {
            status: val.status.map(Into::into),
            region: val.region.map(Into::into),
        }
    }
}

/// Operations addressing a plan by its ID
#[derive(Args)]
pub struct PlanIdArgs {
    /// Unique identifier of the plan
    pub id: u64,
}

impl From<PlanIdArgs> for Id {
    fn from(val: PlanIdArgs) -> Self {
        Id { id: val.id }
    }
}

/// Set a plan's status directly
#[derive(Args)]
pub struct UpdateStatusArgs {
    /// Unique identifier of the plan
    pub id: u64,
    /// New status (selected, ongoing, completed)
    pub status: PlanStatusArg,
}

impl From<&UpdateStatusArgs> for UpdateStatus {
    fn from(val: &UpdateStatusArgs) -> Self {
        UpdateStatus {
            id: val.id,
            status: val.status.into(),
        }
    }
}

/// Record data for one wizard step
#[derive(Args)]
pub struct SaveStepArgs {
    /// Unique identifier of the plan
    pub id: u64,

    /// Keep the wizard pointer where it is instead of advancing to the
    /// next step
    #[arg(long)]
    pub stay: bool,

    #[command(subcommand)]
    pub data: StepDataCommands,
}

/// Move a plan's wizard pointer
#[derive(Args)]
pub struct SetCurrentStepArgs {
    /// Unique identifier of the plan
    pub id: u64,
    /// Step to jump to
    pub step: StepArg,
}

impl From<&SetCurrentStepArgs> for SetCurrentStep {
    fn from(val: &SetCurrentStepArgs) -> Self {
        SetCurrentStep {
            id: val.id,
            step: val.step.into(),
        }
    }
}

#[derive(Subcommand)]
pub enum PlanCommands {
    /// Save a catalog destination as a travel plan
    #[command(alias = "a")]
    Add(AddPlanArgs),
    /// List saved travel plans
    #[command(aliases = ["l", "ls"])]
    List(ListPlansArgs),
    /// Show a plan with its wizard checklist
    #[command(alias = "s")]
    Show(PlanIdArgs),
    /// Remove a plan
    #[command(aliases = ["d", "rm"])]
    Remove(PlanIdArgs),
    /// Set a plan's status directly
    Status(UpdateStatusArgs),
    /// Start the journey (status becomes ongoing)
    Start(PlanIdArgs),
    /// Mark the trip complete (status becomes completed)
    Complete(PlanIdArgs),
    /// Record data for one wizard step and advance
    Step(SaveStepArgs),
    /// Move the wizard pointer without saving anything
    Current(SetCurrentStepArgs),
    /// Show a plan's completion percentage
    Progress(PlanIdArgs),
}

/// Per-step form data for the trip wizard
#[derive(Subcommand)]
pub enum StepDataCommands {
    /// How you plan to get there
    Transport {
        /// Travel mode, e.g. train, flight, bus
        mode: String,
        #[arg(long, help = "Planned departure date or time")]
        departure: Option<String>,
        #[arg(long, help = "Booking or PNR reference")]
        booking_reference: Option<String>,
        #[arg(long)]
        notes: Option<String>,
    },
    /// Where you plan to stay
    Room {
        /// Kind of stay, e.g. homestay, resort, hostel
        stay_type: String,
        #[arg(long, help = "Check-in date")]
        check_in: Option<String>,
        #[arg(long, help = "Number of nights")]
        nights: Option<u32>,
        #[arg(long, help = "Nightly budget in whole currency units")]
        budget_per_night: Option<u32>,
    },
    /// Your emotional goals for the trip
    Emotion {
        /// How you feel now
        current_mood: String,
        /// How you want to feel afterwards
        desired_outcome: String,
        #[arg(long)]
        intention: Option<String>,
    },
    /// Pre-trip awareness checklist
    Awareness {
        #[arg(long)]
        weather_checked: bool,
        #[arg(long)]
        customs_reviewed: bool,
        #[arg(long, value_delimiter = ',', help = "Advisories as comma-separated list")]
        advisories: Vec<String>,
    },
    /// Cultural itinerary
    Culture {
        #[arg(long, value_delimiter = ',', help = "Sites to visit as comma-separated list")]
        sites: Vec<String>,
        #[arg(long, value_delimiter = ',', help = "Dishes to try as comma-separated list")]
        cuisines: Vec<String>,
        #[arg(long)]
        notes: Option<String>,
    },
    /// Post-trip report
    Report {
        /// One-line summary of the trip
        headline: String,
        #[arg(long, help = "Rating out of 5")]
        rating: u8,
        #[arg(long, value_delimiter = ',', help = "Highlights as comma-separated list")]
        highlights: Vec<String>,
        #[arg(long)]
        would_return: bool,
    },
}

impl From<StepDataCommands> for StepData {
    fn from(val: StepDataCommands) -> Self {
        match val {
            StepDataCommands::Transport {
                mode,
                departure,
                booking_reference,
                notes,
            } => StepData::Transport(TransportPlan {
                mode,
                departure,
                booking_reference,
                notes,
            }),
            StepDataCommands::Room {
                stay_type,
                check_in,
                nights,
                budget_per_night,
            } => StepData::Room(RoomPlan {
                stay_type,
                check_in,
                nights,
                budget_per_night,
            }),
            StepDataCommands::Emotion {
                current_mood,
                desired_outcome,
                intention,
            } => StepData::Emotion(EmotionPlan {
                current_mood,
                desired_outcome,
                intention,
            }),
            StepDataCommands::Awareness {
                weather_checked,
                customs_reviewed,
                advisories,
            } => StepData::Awareness(AwarenessPlan {
                weather_checked,
                customs_reviewed,
                advisories,
            }),
            StepDataCommands::Culture {
                sites,
                cuisines,
                notes,
            } => StepData::Culture(CulturePlan {
                sites,
                cuisines,
                notes,
            }),
            StepDataCommands::Report {
                headline,
                rating,
                highlights,
                would_return,
            } => StepData::Report(ReportPlan {
                headline,
                rating,
                highlights,
                would_return,
            }),
        }
    }
}

/// Command-line argument representation of regions
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum RegionArg {
    /// Tamil Nadu
    TamilNadu,
    /// Kerala
    Kerala,
    /// Bangalore
    Bangalore,
}

impl From<RegionArg> for Region {
    fn from(val: RegionArg) -> Self {
        match val {
            RegionArg::TamilNadu => Region::TamilNadu,
            RegionArg::Kerala => Region::Kerala,
            RegionArg::Bangalore => Region::Bangalore,
        }
    }
}

/// Command-line argument representation of travel party sizes
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum GroupSizeArg {
    Solo,
    Couple,
    SmallGroup,
    LargeGroup,
}

impl From<GroupSizeArg> for GroupSize {
    fn from(val: GroupSizeArg) -> Self {
        match val {
            GroupSizeArg::Solo => GroupSize::Solo,
            GroupSizeArg::Couple => GroupSize::Couple,
            GroupSizeArg::SmallGroup => GroupSize::SmallGroup,
            GroupSizeArg::LargeGroup => GroupSize::LargeGroup,
        }
    }
}

/// Command-line argument representation of plan status values
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum PlanStatusArg {
    /// Saved but not started
    Selected,
    /// Journey underway
    Ongoing,
    /// Trip reported complete
    Completed,
}

impl From<PlanStatusArg> for PlanStatus {
    fn from(val: PlanStatusArg) -> Self {
        match val {
            PlanStatusArg::Selected => PlanStatus::Selected,
            PlanStatusArg::Ongoing => PlanStatus::Ongoing,
            PlanStatusArg::Completed => PlanStatus::Completed,
        }
    }
}

/// Command-line argument representation of wizard steps
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum StepArg {
    Transport,
    Room,
    Emotion,
    Awareness,
    Culture,
    Report,
}

impl From<StepArg> for StepId {
    fn from(val: StepArg) -> Self {
        match val {
            StepArg::Transport => StepId::Transport,
            StepArg::Room => StepId::Room,
            StepArg::Emotion => StepId::Emotion,
            StepArg::Awareness => StepId::Awareness,
            StepArg::Culture => StepId::Culture,
            StepArg::Report => StepId::Report,
        }
    }
}
