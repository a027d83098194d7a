//! Command-line argument wrappers and command handlers.
//!
//! Each clap argument struct converts into the matching core parameter type,
//! keeping clap attributes out of `cidade-core`:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Tracker
//! ```

use anyhow::{anyhow, Context, Result};
use cidade_core::{
    display::{CreateResult, OperationStatus},
    params::*,
    Tracker,
};
use clap::{Args, Subcommand};
use log::debug;

use crate::renderer::TerminalRenderer;

/// List today's daily missions
///
/// Draws at most three daily missions available to the development. Pass
/// `--seed` to get the same draw again.
#[derive(Args)]
pub struct DailyMissionsArgs {
    /// Resident identifier
    pub user_id: String,
    /// Development the resident lives in
    pub development_id: String,
    /// Seed for a reproducible draw
    #[arg(long)]
    pub seed: Option<u64>,
}

impl From<DailyMissionsArgs> for ListMissions {
    fn from(val: DailyMissionsArgs) -> Self {
        DailyMissions {
            user_id: val.user_id,
            development_id: val.development_id,
            seed: val.seed,
        }
        .into()
    }
}

/// List the development's evolution missions
#[derive(Args)]
pub struct EvolutionMissionsArgs {
    /// Resident identifier
    pub user_id: String,
    /// Development the resident lives in
    pub development_id: String,
}

impl From<EvolutionMissionsArgs> for ListMissions {
    fn from(val: EvolutionMissionsArgs) -> Self {
        EvolutionMissions {
            user_id: val.user_id,
            development_id: val.development_id,
        }
        .into()
    }
}

/// Arguments naming only a resident
#[derive(Args)]
pub struct PointsArgs {
    /// Resident identifier
    pub user_id: String,
}

impl From<PointsArgs> for UserRef {
    fn from(val: PointsArgs) -> Self {
        UserRef {
            user_id: val.user_id,
        }
    }
}

/// Show one mission with the resident's progress
#[derive(Args)]
pub struct ShowMissionArgs {
    /// Resident identifier
    pub user_id: String,
    /// Catalog ID of the mission
    pub mission_id: u64,
}

impl From<ShowMissionArgs> for MissionRef {
    fn from(val: ShowMissionArgs) -> Self {
        MissionRef {
            user_id: val.user_id,
            mission_id: val.mission_id,
        }
    }
}

/// Mark a task done, or undo it
#[derive(Args)]
pub struct ToggleTaskArgs {
    /// Resident identifier
    pub user_id: String,
    /// Catalog ID of the mission
    pub mission_id: u64,
    /// 0-based position of the task in the mission
    pub task_index: usize,
}

impl From<ToggleTaskArgs> for ToggleTask {
    fn from(val: ToggleTaskArgs) -> Self {
        ToggleTask {
            user_id: val.user_id,
            mission_id: val.mission_id,
            task_index: val.task_index,
        }
    }
}

/// Collect the reward of a completed mission
#[derive(Args)]
pub struct ClaimRewardArgs {
    /// Resident identifier
    pub user_id: String,
    /// Catalog ID of the mission
    pub mission_id: u64,
    /// Name recorded on the claim (defaults to the resident identifier)
    #[arg(long)]
    pub claimant: Option<String>,
}

impl From<ClaimRewardArgs> for ClaimReward {
    fn from(val: ClaimRewardArgs) -> Self {
        ClaimReward {
            user_id: val.user_id,
            mission_id: val.mission_id,
            claimant: val.claimant,
        }
    }
}

/// Register a point of interest
#[derive(Args)]
pub struct AddPoiArgs {
    /// Development the entry belongs to
    pub development_id: String,
    /// Display name
    pub name: String,
    /// Category label, e.g. "Saúde"
    pub category: String,
    /// Latitude in degrees
    #[arg(long, allow_negative_numbers = true)]
    pub latitude: Option<f64>,
    /// Longitude in degrees
    #[arg(long, allow_negative_numbers = true)]
    pub longitude: Option<f64>,
    /// Explicit identifier (generated when omitted)
    #[arg(long)]
    pub id: Option<String>,
}

impl From<AddPoiArgs> for CreatePoi {
    fn from(val: AddPoiArgs) -> Self {
        CreatePoi {
            id: val.id,
            development_id: val.development_id,
            name: val.name,
            category: val.category,
            latitude: val.latitude,
            longitude: val.longitude,
        }
    }
}

/// Search a development's points of interest
#[derive(Args)]
pub struct ListPoisArgs {
    /// Development to search in
    pub development_id: String,
    /// Exact category, or "all"
    #[arg(short, long)]
    pub category: Option<String>,
    /// Case-insensitive part of the name
    #[arg(short, long)]
    pub search: Option<String>,
}

impl From<ListPoisArgs> for ListPois {
    fn from(val: ListPoisArgs) -> Self {
        ListPois {
            development_id: val.development_id,
            category: val.category,
            search: val.search,
        }
    }
}

#[derive(Subcommand)]
pub enum MissionCommands {
    /// List today's daily missions
    #[command(alias = "d")]
    Daily(DailyMissionsArgs),
    /// List evolution missions
    #[command(alias = "e")]
    Evolution(EvolutionMissionsArgs),
    /// List every mission in the catalog
    #[command(alias = "a")]
    All(PointsArgs),
    /// Show one mission
    #[command(alias = "s")]
    Show(ShowMissionArgs),
    /// Toggle one task
    #[command(alias = "t")]
    Toggle(ToggleTaskArgs),
    /// Claim a completed mission's reward
    #[command(alias = "c")]
    Claim(ClaimRewardArgs),
}

#[derive(Subcommand)]
pub enum PoiCommands {
    /// Register a point of interest
    #[command(alias = "a")]
    Add(AddPoiArgs),
    /// Search points of interest
    #[command(aliases = ["l", "ls"])]
    List(ListPoisArgs),
}

#[derive(Subcommand)]
pub enum CatalogCommands {
    /// Print the active catalog as JSON, in the --catalog-file format
    Export,
}

/// Command handlers bound to one tracker and one renderer.
pub struct Cli {
    tracker: Tracker,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(tracker: Tracker, renderer: TerminalRenderer) -> Self {
        Self { tracker, renderer }
    }

    pub async fn handle_mission_command(&self, command: MissionCommands) -> Result<()> {
        match command {
            MissionCommands::Daily(args) => {
                let params = ListMissions::from(args);
                let missions = self.tracker.list_missions(&params).await;
                let missions = report(missions, "Failed to list daily missions")?;
                self.renderer.render(&format!(
                    "# Daily missions for {}\n\n{missions}",
                    params.development_id
                ))
            }
            MissionCommands::Evolution(args) => {
                let params = ListMissions::from(args);
                let missions = self.tracker.list_missions(&params).await;
                let missions = report(missions, "Failed to list evolution missions")?;
                self.renderer.render(&format!(
                    "# Evolution missions for {}\n\n{missions}",
                    params.development_id
                ))
            }
            MissionCommands::All(args) => {
                let missions = self.tracker.list_all_missions(&args.into()).await;
                let missions = report(missions, "Failed to list missions")?;
                self.renderer.render(&missions.to_string())
            }
            MissionCommands::Show(args) => {
                let summary = self.tracker.show_mission(&args.into()).await;
                let summary = report(summary, "Failed to show mission")?;
                self.renderer.render(&summary.to_string())
            }
            MissionCommands::Toggle(args) => {
                let result = self.tracker.toggle_task(&args.into()).await;
                let result = report(result, "Failed to toggle task")?;
                self.renderer.render(&result.to_string())
            }
            MissionCommands::Claim(args) => {
                let result = self.tracker.claim_reward(&args.into()).await;
                let result = report(result, "Failed to claim reward")?;
                self.renderer.render(&result.to_string())
            }
        }
    }

    pub async fn show_points(&self, args: PointsArgs) -> Result<()> {
        let params = UserRef::from(args);
        let points = report(
            self.tracker.user_points(&params).await,
            "Failed to read points",
        )?;
        self.renderer
            .render(&format!("Points for {}: {points}\n", params.user_id))
    }

    pub async fn handle_poi_command(&self, command: PoiCommands) -> Result<()> {
        match command {
            PoiCommands::Add(args) => {
                let poi = self.tracker.add_poi(&args.into()).await;
                let poi = report(poi, "Failed to add point of interest")?;
                self.renderer.render(&CreateResult::new(poi).to_string())
            }
            PoiCommands::List(args) => {
                let pois = self.tracker.list_pois(&args.into()).await;
                let pois = report(pois, "Failed to list points of interest")?;
                self.renderer.render(&pois.to_string())
            }
        }
    }

    pub fn handle_catalog_command(&self, command: CatalogCommands) -> Result<()> {
        match command {
            CatalogCommands::Export => {
                let json = serde_json::to_string_pretty(&self.tracker.catalog().to_file())
                    .context("Failed to serialize catalog")?;
                println!("{json}");
                Ok(())
            }
        }
    }
}

/// Turns a core failure into the CLI error. Conditions a resident can act on
/// get their plain wording; anything else keeps the context and its source.
fn report<T>(result: cidade_core::Result<T>, context: &'static str) -> Result<T> {
    result.or_else(|e| {
        debug!("{context}: {e:?}");
        if e.is_recoverable() || e.is_invalid_input() {
            Err(anyhow!(OperationStatus::from(&e).message))
        } else {
            Err(e).context(context)
        }
    })
}
