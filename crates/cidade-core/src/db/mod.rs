//! SQLite storage for mission progress, points and points of interest.
//!
//! This module stands in for the hosted backend the mobile app talks to. It
//! keeps the same observable contract: one progress row per (user, mission),
//! a points total credited atomically when a mission is claimed, and a
//! directory of points of interest per development.

use std::path::Path;

use rusqlite::Connection;

use crate::error::{DatabaseResultExt, Result};

pub mod migrations;
pub mod poi_queries;
pub mod progress_queries;

/// Database connection and operations handler.
pub struct Database {
    connection: Connection,
}

impl Database {
    /// Creates a new database connection and initializes the schema.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = Connection::open(path).db_context("Failed to open database connection")?;

        let db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }
}
