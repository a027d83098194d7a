//! Filter types for querying points of interest.

use std::fmt;

/// Sentinel accepted from callers to disable the category restriction.
pub const ALL_CATEGORIES: &str = "all";

/// Category restriction applied by [`crate::poi::filter_pois`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    /// No category restriction
    #[default]
    All,

    /// Exact category match
    Category(String),
}

impl CategoryFilter {
    /// Whether a point-of-interest category passes this filter.
    pub fn matches(&self, category: &str) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Category(expected) => expected == category,
        }
    }
}

impl From<Option<String>> for CategoryFilter {
    /// Map a caller-supplied category, treating the `"all"` sentinel and an
    /// absent value as [`CategoryFilter::All`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cidade_core::models::CategoryFilter;
    ///
    /// assert_eq!(CategoryFilter::from(Some("all".to_string())), CategoryFilter::All);
    /// assert_eq!(
    ///     CategoryFilter::from(Some("Saúde".to_string())),
    ///     CategoryFilter::Category("Saúde".to_string())
    /// );
    /// ```
    fn from(category: Option<String>) -> Self {
        match category {
            Some(c) if c != ALL_CATEGORIES => CategoryFilter::Category(c),
            _ => CategoryFilter::All,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => write!(f, "{ALL_CATEGORIES}"),
            CategoryFilter::Category(c) => write!(f, "{c}"),
        }
    }
}
