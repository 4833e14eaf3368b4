//! Reality Lab CLI Application
//!
//! Command-line interface for saving, forking, comparing, and merging
//! career realities.

mod args;
mod cli;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Capacity, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use realitylab_core::{store::DEFAULT_CAPACITY, LabBuilder};
use renderer::TerminalRenderer;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        capacity,
        no_color,
        command,
    } = Args::parse();

    let lab = LabBuilder::new()
        .with_database_path(database_file)
        .with_capacity(capacity.map_or(Some(DEFAULT_CAPACITY), Capacity::bytes))
        .build()
        .await
        .context("Failed to initialize reality lab")?;

    let renderer = TerminalRenderer::new(!no_color);
    let cli = Cli::new(lab, renderer);

    info!("Reality lab started");

    match command {
        Some(Reality { command }) => cli.handle_reality_command(command).await,
        Some(Compare(args)) => cli.compare(&args.into()).await,
        Some(Merge(args)) => cli.merge(&args.into()).await,
        Some(Profile { command }) => cli.handle_profile_command(command).await,
        Some(Request(args)) => cli.request(args).await,
        Some(Storage) => cli.storage().await,
        Some(Clear(args)) => cli.clear(&args).await,
        None => cli.list_realities().await,
    }
}
