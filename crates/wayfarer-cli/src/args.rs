use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{DestinationsArgs, PlanCommands, RecommendArgs};

/// Main command-line interface for the Wayfarer travel planning tool
///
/// Wayfarer recommends destinations that match how you feel and tracks
/// your saved travel plans through a six-step trip wizard (transport,
/// stay, emotion goals, awareness, culture, trip report). Plans persist
/// locally between invocations.
#[derive(Parser)]
#[command(version, about, name = "wayfarer")]
pub struct Args {
    /// Path to the SQLite state database. Defaults to
    /// $XDG_DATA_HOME/wayfarer/wayfarer.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Path to a destination catalog JSON file, replacing the builtin
    /// catalog
    #[arg(long, global = true)]
    pub catalog_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Wayfarer CLI
///
/// The CLI is organized into three command categories:
/// - `recommend`: score the catalog against your mood and sample a few picks
/// - `destinations`: browse the curated catalog
/// - `plan`: manage saved travel plans and their wizard steps
#[derive(Subcommand)]
pub enum Commands {
    /// Recommend destinations for how you feel
    #[command(alias = "r")]
    Recommend(RecommendArgs),
    /// Browse the destination catalog
    #[command(aliases = ["d", "dest"])]
    Destinations(DestinationsArgs),
    /// Manage travel plans
    #[command(alias = "p")]
    Plan {
        #[command(subcommand)]
        command: PlanCommands,
    },
}
