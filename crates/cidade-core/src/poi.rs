//! Point-of-interest search.

use crate::models::{CategoryFilter, PointOfInterest};

/// Filter points of interest by category and by a case-insensitive
/// substring of their name.
///
/// Both predicates must hold. An empty `search_term` matches every name.
/// Input order is preserved and the input slice is left untouched.
///
/// # Examples
///
/// ```rust
/// use cidade_core::{models::{CategoryFilter, PointOfInterest}, poi::filter_pois};
///
/// let pois = vec![PointOfInterest {
///     id: "1".to_string(),
///     development_id: "cidade_inteligente".to_string(),
///     name: "Farmácia Saúde+".to_string(),
///     category: "Saúde".to_string(),
///     latitude: None,
///     longitude: None,
/// }];
///
/// let found = filter_pois(&pois, &CategoryFilter::All, "FARM");
/// assert_eq!(found.len(), 1);
/// ```
pub fn filter_pois(
    pois: &[PointOfInterest],
    category: &CategoryFilter,
    search_term: &str,
) -> Vec<PointOfInterest> {
    let needle = search_term.to_lowercase();
    pois.iter()
        .filter(|poi| category.matches(&poi.category))
        .filter(|poi| needle.is_empty() || poi.name.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}
