use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{CatalogCommands, MissionCommands, PoiCommands, PointsArgs};

/// Command-line interface for the Cidade Inteligente resident app
///
/// Residents complete daily and evolution missions task by task and collect
/// points when a mission is finished. The tool also keeps each development's
/// directory of points of interest. It works as a local CLI or as an MCP
/// (Model Context Protocol) server for AI assistants.
#[derive(Parser)]
#[command(version, about, name = "cidade")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/cidade/cidade.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// JSON mission catalog replacing the built-in one
    #[arg(long, global = true)]
    pub catalog_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands for the Cidade CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Browse missions, toggle tasks and claim rewards
    #[command(alias = "m")]
    Mission {
        #[command(subcommand)]
        command: MissionCommands,
    },
    /// Show a resident's points balance
    Points(PointsArgs),
    /// Manage a development's points of interest
    #[command(alias = "p")]
    Poi {
        #[command(subcommand)]
        command: PoiCommands,
    },
    /// Inspect the mission catalog
    Catalog {
        #[command(subcommand)]
        command: CatalogCommands,
    },
    /// Start the MCP server
    Serve,
}
