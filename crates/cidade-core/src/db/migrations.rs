//! Database schema initialization and migrations.

use crate::error::{DatabaseResultExt, Result};

impl super::Database {
    /// Initializes the database schema using the embedded SQL file.
    pub(super) fn initialize_schema(&self) -> Result<()> {
        // Concurrent CLI and MCP processes may share one file
        self.connection
            .busy_timeout(std::time::Duration::from_secs(5))
            .db_context("Failed to set busy timeout")?;

        let schema_sql = include_str!("../../assets/schema.sql");
        self.connection
            .execute_batch(schema_sql)
            .db_context("Failed to initialize database schema")?;

        self.apply_migrations()?;

        Ok(())
    }

    /// Apply database migrations for existing databases
    fn apply_migrations(&self) -> Result<()> {
        // Databases created before claims were timestamped lack `claimed_at`
        let has_claimed_at: bool = self
            .connection
            .query_row(
                "SELECT COUNT(*) FROM pragma_table_info('mission_progress') WHERE name = 'claimed_at'",
                [],
                |row| row.get(0),
            )
            .map(|count: i64| count > 0)
            .db_context("Failed to inspect mission_progress columns")?;

        if !has_claimed_at {
            log::info!("Adding claimed_at column to mission_progress");
            self.connection
                .execute("ALTER TABLE mission_progress ADD COLUMN claimed_at TEXT", [])
                .db_context("Failed to add claimed_at column to mission_progress table")?;
        }

        Ok(())
    }
}
