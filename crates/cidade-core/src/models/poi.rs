//! Point-of-interest model.

use serde::{Deserialize, Serialize};

/// Directory entry for an amenity or business inside a development.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PointOfInterest {
    /// Unique identifier of the entry
    pub id: String,

    /// Development the entry belongs to
    pub development_id: String,

    /// Display name, used for search
    pub name: String,

    /// Category label (e.g. "Saúde", "Alimentação")
    pub category: String,

    /// Latitude, absent when not captured at intake
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,

    /// Longitude, absent when not captured at intake
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
}

impl PointOfInterest {
    /// Both coordinates, when the entry is geo-located.
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        self.latitude.zip(self.longitude)
    }
}
