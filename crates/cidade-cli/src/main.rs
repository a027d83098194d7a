//! Cidade CLI Application
//!
//! Command-line and MCP front end for resident missions, rewards and
//! points of interest.

mod args;
mod cli;
mod mcp;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use cidade_core::TrackerBuilder;
use clap::Parser;
use cli::Cli;
use log::info;
use mcp::{run_stdio_server, CidadeMcpServer};
use renderer::TerminalRenderer;
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
        .with_catalog_file(catalog_file)
        .build()
        .await
        .context("Failed to initialize tracker")?;

    let renderer = TerminalRenderer::new(!no_color);

    info!("Cidade started");

    match command {
        Mission { command } => {
            Cli::new(tracker, renderer)
                .handle_mission_command(command)
                .await
        }
        Points(args) => Cli::new(tracker, renderer).show_points(args).await,
        Poi { command } => Cli::new(tracker, renderer).handle_poi_command(command).await,
        Catalog { command } => Cli::new(tracker, renderer).handle_catalog_command(command),
        Serve => {
            info!("Starting Cidade MCP server");
            run_stdio_server(CidadeMcpServer::new(tracker))
                .await
                .context("MCP server failed")
        }
    }
}
