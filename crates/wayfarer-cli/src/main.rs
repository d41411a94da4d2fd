//! Wayfarer CLI Application
//!
//! Command-line interface for the wayfarer travel planning tool.

mod args;
mod cli;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use renderer::TerminalRenderer;
use wayfarer_core::{params::ListPlans, Catalog, TrackerBuilder};
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        catalog_file,
        no_color,
        command,
    } = Args::parse();

    let tracker = TrackerBuilder::new()
        .with_database_path(database_file)
        .build()
        .await
        .context("Failed to initialize plan tracker")?;

    let catalog = match catalog_file {
        Some(path) => Catalog::from_path(path).context("Failed to load catalog file")?,
        None => Catalog::builtin().context("Failed to load builtin catalog")?,
    };

    let renderer = TerminalRenderer::new(!no_color);

    info!("Wayfarer started with {} destinations", catalog.len());

    match command {
        Some(Recommend(args)) => {
            Cli::new(tracker, catalog, renderer)
                .handle_recommend(args)
                .await
        }
        Some(Destinations(args)) => Cli::new(tracker, catalog, renderer).handle_destinations(args),
        Some(Plan { command }) => {
            Cli::new(tracker, catalog, renderer)
                .handle_plan_command(command)
                .await
        }
        None => {
            Cli::new(tracker, catalog, renderer)
                .list_plans(&ListPlans::default())
                .await
        }
    }
}
