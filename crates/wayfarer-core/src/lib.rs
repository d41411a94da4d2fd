//! Core library for the Wayfarer travel planning application.
//!
//! This crate provides the business logic for emotion-aware destination
//! recommendation and travel plan tracking: a curated destination catalog,
//! a scoring/sampling recommendation engine, and a plan tracker that owns
//! the six-step trip wizard and persists its state.
//!
//! # Architecture
//!
//! - **Catalog** ([`catalog`]): immutable, ordered destination data.
//! - **Engine** ([`engine`]): deterministic scoring plus random sampling
//!   over an injected rng; the two halves are separable for testing.
//! - **Tracker** ([`tracker`]): authoritative in-memory plan list with a
//!   write-behind persistence adapter ([`store`]).
//! - **Display** ([`display`]): markdown formatting via `Display` impls
//!   and wrapper types, consumed by the CLI's terminal renderer.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use wayfarer_core::{engine, Catalog, EmotionProfile, TrackerBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let catalog = Catalog::builtin()?;
//!
//! // Score and sample recommendations for a stressed solo traveler
//! let profile = EmotionProfile {
//!     emotions: vec!["stressed".to_string()],
//!     desired_change: Some("peace".to_string()),
//!     group_size: None,
//! };
//! let mut rng = rand::thread_rng();
//! let picks = engine::recommend(catalog.destinations(), &profile, &mut rng);
//!
//! // Save the first pick as a plan
//! let tracker = TrackerBuilder::new().build().await?;
//! if let Some(destination) = picks.first() {
//!     let outcome = tracker.add_plan(destination).await?;
//!     println!("{}", outcome.notice());
//! }
//! # Ok(())
//! # }
//! ```

pub mod catalog;
pub mod display;
pub mod engine;
pub mod error;
pub mod models;
pub mod params;
pub mod store;
pub mod tracker;

// Re-export commonly used types
pub use catalog::Catalog;
pub use display::{AddResult, OperationStatus, PlanSummaries, Recommendations, RemoveResult, UpdateResult};
pub use error::{Result, TrackerError};
pub use models::{
    Destination, EmotionProfile, GroupSize, Plan, PlanFilter, PlanStatus, PlanSummary, PriceTier,
    Region, StepData, StepId, STEP_SEQUENCE,
};
pub use store::{Database, PlanStore, SqliteStore};
pub use tracker::{AddOutcome, Tracker, TrackerBuilder};
