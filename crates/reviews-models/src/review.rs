use serde::{Deserialize, Serialize};
use crate::class_recommendation::ClassRecommendation;

/// Canonical review record as served to readers.
///
/// Stored documents may use older field names; they are mapped onto this shape
/// by the normalizer in `reviews-core` before anything else looks at them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReviewRecord {
    pub id: String,
    pub title: String,
    pub release_date: String, // YYYY-MM-DD, only the year is shown in practice
    #[serde(default)]
    pub genres: Vec<String>,
    pub rating: f64, // 0-10, one decimal by convention
    pub class_recommendation: ClassRecommendation,
    #[serde(default)]
    pub intended_audience: String,
    #[serde(default)]
    pub rewatchability: String,
    #[serde(default)]
    pub best_character_winner: String,
    #[serde(default)]
    pub review: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spoiler_review: Option<String>,
    #[serde(default)]
    pub review_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tmdb_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub poster_path: Option<String>,
}

impl ReviewRecord {
    /// Year component of the release date, if it parses
    pub fn release_year(&self) -> Option<i32> {
        self.release_date
            .split('-')
            .next()
            .and_then(|year| year.trim().parse().ok())
    }

    pub fn has_spoilers(&self) -> bool {
        self.spoiler_review
            .as_deref()
            .map(|s| !s.trim().is_empty())
            .unwrap_or(false)
    }
}
