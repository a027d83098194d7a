//! Core library for the Cidade Inteligente resident app.
//!
//! This crate holds the business rules behind the mission screens and the
//! point-of-interest directory: the mission catalog, the progress engine
//! (task toggles, completion percentage, reward claims), the
//! point-of-interest filter, and a SQLite store standing in for the hosted
//! backend.
//!
//! # Display Architecture
//!
//! - **Domain Models** ([`models`]): Implement [`std::fmt::Display`] for direct
//!   formatting
//! - **Display Wrappers** ([`display`]): Collections and operation results
//! - **Terminal Rendering**: Rich markdown output via the CLI's terminal
//!   renderer
//!
//! # Quick Start
//!
//! ```rust
//! use cidade_core::{
//!     params::{ClaimReward, ToggleTask},
//!     TrackerBuilder,
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let tracker = TrackerBuilder::new()
//!     .with_database_path(Some("test.db"))
//!     .build()
//!     .await?;
//!
//! // "Momento de leitura" has a single task
//! let toggled = tracker
//!     .toggle_task(&ToggleTask {
//!         user_id: "maria".to_string(),
//!         mission_id: 4,
//!         task_index: 0,
//!     })
//!     .await?;
//! println!("{toggled}");
//!
//! let claim = tracker
//!     .claim_reward(&ClaimReward {
//!         user_id: "maria".to_string(),
//!         mission_id: 4,
//!         claimant: None,
//!     })
//!     .await?;
//! println!("Total points: {}", claim.receipt.total_points);
//! # Ok(())
//! # }
//! ```

pub mod catalog;
pub mod db;
pub mod display;
pub mod engine;
pub mod error;
pub mod models;
pub mod params;
pub mod poi;
pub mod tracker;

// Re-export commonly used types
pub use catalog::{CatalogFile, MissionCatalog, DAILY_MISSION_COUNT};
pub use db::Database;
pub use display::{
    ClaimResult, CreateResult, LocalDateTime, MissionSummaries, OperationStatus,
    PointsOfInterest, UpdateResult,
};
pub use error::{CoreError, Result};
pub use models::{
    CategoryFilter, ClaimReceipt, MissionDefinition, MissionKind, MissionProgress, MissionState,
    MissionSummary, PointOfInterest,
};
pub use params::{
    ClaimReward, CreatePoi, DailyMissions, EvolutionMissions, ListMissions, ListPois, MissionRef,
    ToggleTask, UserRef,
};
pub use poi::filter_pois;
pub use tracker::{Tracker, TrackerBuilder};
