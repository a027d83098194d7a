//! Point-of-interest operations for the Tracker.

use log::debug;

use super::Tracker;
use crate::{
    display::PointsOfInterest,
    error::{CoreError, Result},
    models::{CategoryFilter, PointOfInterest},
    params::{CreatePoi, ListPois},
    poi::filter_pois,
};

/// Trimmed value of a required text field.
fn required(field: &str, value: &str) -> Result<String> {
    let value = value.trim();
    if value.is_empty() {
        return Err(CoreError::invalid_argument(field).with_reason("must not be empty"));
    }
    Ok(value.to_string())
}

fn check_range(field: &str, value: Option<f64>, limit: f64) -> Result<()> {
    match value {
        Some(v) if !(-limit..=limit).contains(&v) => Err(CoreError::invalid_argument(field)
            .with_reason(format!("{v} is outside -{limit} to {limit}"))),
        _ => Ok(()),
    }
}

impl Tracker {
    /// Registers a point of interest in a development's directory.
    ///
    /// An ID is generated when none is given.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidArgument` for a blank required field,
    /// out-of-range coordinates or an ID that is already taken.
    pub async fn add_poi(&self, params: &CreatePoi) -> Result<PointOfInterest> {
        let id = match params.id.as_deref() {
            Some(id) => required("id", id)?,
            None => format!("{:016x}", rand::random::<u64>()),
        };
        check_range("latitude", params.latitude, 90.0)?;
        check_range("longitude", params.longitude, 180.0)?;

        let poi = PointOfInterest {
            id,
            development_id: required("development_id", &params.development_id)?,
            name: required("name", &params.name)?,
            category: required("category", &params.category)?,
            latitude: params.latitude,
            longitude: params.longitude,
        };

        debug!("Registering point of interest {} in {}", poi.id, poi.development_id);
        let stored = poi.clone();
        self.with_database(move |db| db.insert_poi(&stored)).await?;
        Ok(poi)
    }

    /// Searches a development's directory by category and name.
    pub async fn list_pois(&self, params: &ListPois) -> Result<PointsOfInterest> {
        let development_id = params.development_id.clone();
        let pois = self
            .with_database(move |db| db.list_pois(&development_id))
            .await?;

        let category = CategoryFilter::from(params.category.clone());
        let search = params.search.as_deref().unwrap_or_default();
        debug!(
            "Filtering {} point(s) of interest by category {category}",
            pois.len()
        );
        Ok(PointsOfInterest(filter_pois(&pois, &category, search)))
    }
}
