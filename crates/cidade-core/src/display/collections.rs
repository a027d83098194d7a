//! Collection wrapper types for displaying groups of domain objects.

use std::{fmt, ops::Index};

use crate::models::{MissionSummary, PointOfInterest};

/// Newtype wrapper for displaying a list of mission cards.
///
/// # Examples
///
/// ```rust
/// use cidade_core::{display::MissionSummaries, MissionCatalog, MissionSummary};
///
/// let catalog = MissionCatalog::builtin().unwrap();
/// let mission = catalog.mission(1).unwrap().clone();
/// let missions = MissionSummaries(vec![MissionSummary::new(mission, None)]);
///
/// let output = format!("{}", missions);
/// assert!(output.contains("Hidratação"));
/// ```
pub struct MissionSummaries(pub Vec<MissionSummary>);

impl MissionSummaries {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of missions in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Get an iterator over the missions.
    pub fn iter(&self) -> std::slice::Iter<'_, MissionSummary> {
        self.0.iter()
    }

    /// Points still waiting to be collected from unclaimed missions.
    pub fn unclaimed_points(&self) -> u64 {
        self.0
            .iter()
            .filter(|summary| !summary.progress.is_claimed())
            .map(|summary| u64::from(summary.mission.points))
            .sum()
    }
}

impl Index<usize> for MissionSummaries {
    type Output = MissionSummary;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl IntoIterator for MissionSummaries {
    type Item = MissionSummary;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a MissionSummaries {
    type Item = &'a MissionSummary;
    type IntoIter = std::slice::Iter<'a, MissionSummary>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for MissionSummaries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No missions found.")
        } else {
            for mission in &self.0 {
                write!(f, "{mission}")?;
            }
            Ok(())
        }
    }
}

/// Newtype wrapper for displaying a point-of-interest directory.
pub struct PointsOfInterest(pub Vec<PointOfInterest>);

impl PointsOfInterest {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of entries in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Get an iterator over the entries.
    pub fn iter(&self) -> std::slice::Iter<'_, PointOfInterest> {
        self.0.iter()
    }
}

impl Index<usize> for PointsOfInterest {
    type Output = PointOfInterest;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl<'a> IntoIterator for &'a PointsOfInterest {
    type Item = &'a PointOfInterest;
    type IntoIter = std::slice::Iter<'a, PointOfInterest>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for PointsOfInterest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No points of interest found.")
        } else {
            for poi in &self.0 {
                write!(f, "{poi}")?;
            }
            Ok(())
        }
    }
}
