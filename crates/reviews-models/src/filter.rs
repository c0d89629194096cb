use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

pub const MIN_RATING: f64 = 0.0;
pub const MAX_RATING: f64 = 10.0;

/// Criteria a record must satisfy to be shown.
///
/// Criteria combine with AND; values inside `genres` and
/// `class_recommendations` combine with OR. Empty sets and an empty search
/// query mean "no constraint".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterSpec {
    pub genres: BTreeSet<String>,
    pub class_recommendations: BTreeSet<String>,
    pub min_rating: f64,
    pub max_rating: f64,
    pub search_query: String,
}

impl FilterSpec {
    pub fn new() -> Self {
        Self {
            genres: BTreeSet::new(),
            class_recommendations: BTreeSet::new(),
            min_rating: MIN_RATING,
            max_rating: MAX_RATING,
            search_query: String::new(),
        }
    }

    pub fn with_search(mut self, query: impl Into<String>) -> Self {
        self.search_query = query.into();
        self
    }

    pub fn with_genre(mut self, genre: impl Into<String>) -> Self {
        self.genres.insert(genre.into());
        self
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class_recommendations.insert(class.into());
        self
    }

    pub fn with_rating_range(mut self, min_rating: f64, max_rating: f64) -> Self {
        self.min_rating = min_rating;
        self.max_rating = max_rating;
        self
    }

    /// Number of narrowing criteria set, as shown on the filter badge.
    ///
    /// The search query is not counted; each selected genre and class counts once.
    pub fn active_filter_count(&self) -> usize {
        self.genres.len()
            + self.class_recommendations.len()
            + usize::from(self.min_rating > MIN_RATING)
            + usize::from(self.max_rating < MAX_RATING)
    }

    /// True when the spec lets every record through
    pub fn is_unconstrained(&self) -> bool {
        self.active_filter_count() == 0 && self.search_query.is_empty()
    }
}

impl Default for FilterSpec {
    fn default() -> Self {
        Self::new()
    }
}
