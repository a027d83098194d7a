//! Point-of-interest directory queries.

use jiff::Timestamp;
use rusqlite::{params, ErrorCode};

use crate::{
    error::{CoreError, DatabaseResultExt, Result},
    models::PointOfInterest,
};

const INSERT_POI_SQL: &str = "INSERT INTO points_of_interest (id, development_id, name, category, latitude, longitude, created_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)";
const SELECT_POIS_SQL: &str = "SELECT id, development_id, name, category, latitude, longitude FROM points_of_interest WHERE development_id = ?1 ORDER BY name COLLATE NOCASE, id";

impl super::Database {
    /// Stores a new point of interest.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidArgument`] when the ID is already taken.
    pub fn insert_poi(&mut self, poi: &PointOfInterest) -> Result<()> {
        let result = self.connection.execute(
            INSERT_POI_SQL,
            params![
                poi.id,
                poi.development_id,
                poi.name,
                poi.category,
                poi.latitude,
                poi.longitude,
                Timestamp::now().to_string()
            ],
        );

        match result {
            Ok(_) => Ok(()),
            Err(rusqlite::Error::SqliteFailure(e, _)) if e.code == ErrorCode::ConstraintViolation => {
                Err(CoreError::invalid_argument("id")
                    .with_reason(format!("point of interest '{}' already exists", poi.id)))
            }
            Err(e) => Err(CoreError::database("Failed to insert point of interest", e)),
        }
    }

    /// Lists the points of interest of a development, ordered by name.
    pub fn list_pois(&self, development_id: &str) -> Result<Vec<PointOfInterest>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_POIS_SQL)
            .db_context("Failed to prepare query")?;

        let rows = stmt
            .query_map(params![development_id], |row| {
                Ok(PointOfInterest {
                    id: row.get(0)?,
                    development_id: row.get(1)?,
                    name: row.get(2)?,
                    category: row.get(3)?,
                    latitude: row.get(4)?,
                    longitude: row.get(5)?,
                })
            })
            .db_context("Failed to query points of interest")?;

        rows.collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to read points of interest")
    }
}
