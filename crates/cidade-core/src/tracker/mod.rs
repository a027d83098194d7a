//! High-level tracker API for missions, rewards and points of interest.
//!
//! [`Tracker`] is the single entry point the CLI and the MCP server talk to.
//! It joins the in-memory [`MissionCatalog`] with the progress stored in the
//! database and runs every blocking store call on tokio's blocking pool.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │    Handlers     │    │   Operations    │    │    Database     │
//! │ (mission_hand., │───▶│ (mission_ops,   │───▶│   (via db/)     │
//! │  poi_ops)       │    │  engine, poi)   │    │                 │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//!   Display wrappers       Business rules        Data persistence
//! ```
//!
//! ## Submodules
//!
//! - [`builder`]: Factory for [`Tracker`] instances
//! - [`mission_ops`]: Store access for progress and points
//! - [`mission_handlers`]: Mission listings, toggles and claims returning
//!   display wrappers
//! - [`poi_ops`]: Point-of-interest registration and search
//!
//! # Usage
//!
//! ```rust
//! use cidade_core::{params::ListMissions, MissionKind, TrackerBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let tracker = TrackerBuilder::new()
//!     .with_database_path(Some("/tmp/cidade.db"))
//!     .build()
//!     .await?;
//!
//! let missions = tracker
//!     .list_missions(&ListMissions {
//!         user_id: "maria".to_string(),
//!         development_id: "cidade_inteligente".to_string(),
//!         kind: MissionKind::Evolution,
//!         seed: None,
//!     })
//!     .await?;
//! println!("{missions}");
//! # Ok(())
//! # }
//! ```

use std::{path::PathBuf, sync::Arc};

use tokio::task;

use crate::{
    catalog::MissionCatalog,
    db::Database,
    error::{CoreError, Result},
    models::MissionDefinition,
};

pub mod builder;
pub mod mission_handlers;
pub mod mission_ops;
pub mod poi_ops;

#[cfg(test)]
mod tests;

pub use builder::TrackerBuilder;

/// Main interface for mission progress and the point-of-interest directory.
#[derive(Clone)]
pub struct Tracker {
    pub(crate) db_path: PathBuf,
    pub(crate) catalog: Arc<MissionCatalog>,
}

impl Tracker {
    /// Creates a tracker over an initialized database.
    pub(crate) fn new(db_path: PathBuf, catalog: MissionCatalog) -> Self {
        Self {
            db_path,
            catalog: Arc::new(catalog),
        }
    }

    /// The mission catalog this tracker serves.
    pub fn catalog(&self) -> &MissionCatalog {
        &self.catalog
    }

    /// Looks up a mission definition by ID.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::MissionNotFound`] for an unknown ID.
    pub fn mission_definition(&self, mission_id: u64) -> Result<&MissionDefinition> {
        self.catalog
            .mission(mission_id)
            .ok_or(CoreError::MissionNotFound { id: mission_id })
    }

    /// Opens the database on the blocking pool and runs `op` against it.
    pub(crate) async fn with_database<T, F>(&self, op: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(&mut Database) -> Result<T> + Send + 'static,
    {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            op(&mut db)
        })
        .await
        .map_err(|e| CoreError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }
}
