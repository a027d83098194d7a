//! Builder for creating and configuring Tracker instances.

use std::path::{Path, PathBuf};

use log::info;
use tokio::task;

use super::Tracker;
use crate::{
    catalog::MissionCatalog,
    db::Database,
    error::{CoreError, Result},
};

/// Builder for creating and configuring Tracker instances.
#[derive(Debug, Clone, Default)]
pub struct TrackerBuilder {
    database_path: Option<PathBuf>,
    catalog_path: Option<PathBuf>,
    catalog: Option<MissionCatalog>,
}

impl TrackerBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/cidade/cidade.db` or `~/.local/share/cidade/cidade.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Loads the mission catalog from a JSON file instead of the built-in
    /// one.
    pub fn with_catalog_file<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.catalog_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Uses an already constructed catalog. Takes precedence over
    /// [`TrackerBuilder::with_catalog_file`].
    pub fn with_catalog(mut self, catalog: MissionCatalog) -> Self {
        self.catalog = Some(catalog);
        self
    }

    /// Builds the configured tracker instance.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::FileSystem` if the database path or the catalog
    /// file is unusable, `CoreError::Serialization` or
    /// `CoreError::InvalidArgument` for a bad catalog file, and
    /// `CoreError::Database` if database initialization fails.
    pub async fn build(self) -> Result<Tracker> {
        let catalog = match (self.catalog, self.catalog_path) {
            (Some(catalog), _) => catalog,
            (None, Some(path)) => {
                info!("Loading mission catalog from {}", path.display());
                MissionCatalog::from_file(&path)?
            }
            (None, None) => MissionCatalog::builtin()?,
        };

        let db_path = if let Some(path) = self.database_path {
            path
        } else {
            Self::default_database_path()?
        };

        if let Some(parent) = db_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| CoreError::FileSystem {
                    path: parent.to_path_buf(),
                    source: e,
                })?;
            }
        }

        let db_path_clone = db_path.clone();
        task::spawn_blocking(move || {
            let _db = Database::new(&db_path_clone)?;
            Ok::<(), CoreError>(())
        })
        .await
        .map_err(|e| CoreError::Configuration {
            message: format!("Task join error: {e}"),
        })??;

        info!("Using database at {}", db_path.display());
        Ok(Tracker::new(db_path, catalog))
    }

    /// Returns the default database path following XDG Base Directory
    /// specification.
    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("cidade")
            .place_data_file("cidade.db")
            .map_err(|e| CoreError::XdgDirectory(e.to_string()))
    }
}
