//! Mission catalog: the read-only registry of mission definitions.
//!
//! Missions are sharded the way they are authored: one `general` list that
//! applies to every development, plus one list per development identifier.
//! A lookup for a development filters every list by the missions'
//! development restriction, so a mission authored under one development may
//! also be offered to others.
//!
//! ```text
//! ┌──────────────────────────┐
//! │ general                  │──┐
//! └──────────────────────────┘  │   ┌──────────────────────────┐
//!                               ├──▶│ missions in scope for    │
//! ┌──────────────────────────┐  │   │ "cidade_inteligente"     │
//! │ developments[            │──┘   └──────────────────────────┘
//! │   "cidade_inteligente"]  │
//! └──────────────────────────┘
//! ```
//!
//! The catalog is built once at startup and shared read-only.

use std::{
    collections::{BTreeMap, BTreeSet, HashSet},
    path::Path,
};

use log::debug;
use rand::{seq::SliceRandom, Rng};
use serde::{Deserialize, Serialize};

use crate::{
    error::{CoreError, Result},
    models::{MissionDefinition, MissionKind},
};

mod builtin;


/// Number of daily missions offered per day.
pub const DAILY_MISSION_COUNT: usize = 3;

/// On-disk representation of a catalog.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogFile {
    /// Missions that apply to every development
    #[serde(default)]
    pub general: Vec<MissionDefinition>,

    /// Missions keyed by the development that owns them
    #[serde(default)]
    pub developments: BTreeMap<String, Vec<MissionDefinition>>,
}

/// Registry of all mission definitions.
#[derive(Debug, Clone)]
pub struct MissionCatalog {
    general: Vec<MissionDefinition>,
    developments: BTreeMap<String, Vec<MissionDefinition>>,
}

impl MissionCatalog {
    /// Build a catalog from its general list and per-development lists.
    ///
    /// Missions registered under a development without an explicit
    /// restriction are restricted to that development.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidArgument`] when two missions share an ID.
    pub fn new(
        general: Vec<MissionDefinition>,
        developments: BTreeMap<String, Vec<MissionDefinition>>,
    ) -> Result<Self> {
        let developments: BTreeMap<String, Vec<MissionDefinition>> = developments
            .into_iter()
            .map(|(development_id, missions)| {
                let missions = missions
                    .into_iter()
                    .map(|mut mission| {
                        if mission.development_ids.is_none() {
                            mission.development_ids =
                                Some(BTreeSet::from([development_id.clone()]));
                        }
                        mission
                    })
                    .collect();
                (development_id, missions)
            })
            .collect();

        let mut seen = HashSet::new();
        for mission in general.iter().chain(developments.values().flatten()) {
            if !seen.insert(mission.id) {
                return Err(CoreError::invalid_argument("id")
                    .with_reason(format!("mission ID {} is registered twice", mission.id)));
            }
        }

        debug!(
            "Mission catalog loaded: {} general, {} development list(s)",
            general.len(),
            developments.len()
        );

        Ok(Self {
            general,
            developments,
        })
    }

    /// The catalog shipped with the application.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidArgument`] if the shipped lists ever
    /// register an ID twice.
    pub fn builtin() -> Result<Self> {
        Self::new(builtin::general_missions(), builtin::development_missions())
    }

    /// Parse a catalog from its JSON representation.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Serialization`] on malformed JSON and
    /// [`CoreError::InvalidArgument`] on duplicate mission IDs.
    pub fn from_json(json: &str) -> Result<Self> {
        let file: CatalogFile = serde_json::from_str(json)?;
        Self::new(file.general, file.developments)
    }

    /// Load a catalog from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::FileSystem`] when the file cannot be read, plus
    /// the errors of [`MissionCatalog::from_json`].
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| CoreError::FileSystem {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_json(&json)
    }

    /// Serializable form of this catalog.
    pub fn to_file(&self) -> CatalogFile {
        CatalogFile {
            general: self.general.clone(),
            developments: self.developments.clone(),
        }
    }

    /// Every mission of `kind` visible to residents of `development_id`,
    /// whichever list it was registered under.
    fn in_scope(&self, development_id: &str, kind: MissionKind) -> Vec<&MissionDefinition> {
        self.all_missions()
            .into_iter()
            .filter(|mission| mission.kind == kind && mission.applies_to(development_id))
            .collect()
    }

    /// Today's daily missions: a random sample without replacement of at most
    /// [`DAILY_MISSION_COUNT`] daily missions in scope for the development.
    ///
    /// Unknown developments only see general missions.
    pub fn daily_missions_for<R: Rng + ?Sized>(
        &self,
        development_id: &str,
        rng: &mut R,
    ) -> Vec<&MissionDefinition> {
        let eligible = self.in_scope(development_id, MissionKind::Daily);

        eligible
            .choose_multiple(rng, DAILY_MISSION_COUNT)
            .copied()
            .collect()
    }

    /// Every evolution mission in scope for the development, in catalog
    /// order. Empty when the development has none yet.
    pub fn evolution_missions_for(&self, development_id: &str) -> Vec<&MissionDefinition> {
        self.in_scope(development_id, MissionKind::Evolution)
    }

    /// The full registry: general missions first, then each development's
    /// list in identifier order.
    pub fn all_missions(&self) -> Vec<&MissionDefinition> {
        self.general
            .iter()
            .chain(self.developments.values().flatten())
            .collect()
    }

    /// Look up a mission by ID.
    pub fn mission(&self, id: u64) -> Option<&MissionDefinition> {
        self.general
            .iter()
            .chain(self.developments.values().flatten())
            .find(|mission| mission.id == id)
    }
}
