use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortField {
    Rating,
    ReleaseDate,
    ReviewDate,
    Title,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// Display order for the catalog, carried around as a single token such as `rating-desc`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortKey {
    #[serde(rename = "rating-desc")]
    RatingDesc,
    #[serde(rename = "rating-asc")]
    RatingAsc,
    #[serde(rename = "release-desc")]
    ReleaseDesc,
    #[serde(rename = "release-asc")]
    ReleaseAsc,
    #[serde(rename = "review-desc")]
    ReviewDesc,
    #[serde(rename = "review-asc")]
    ReviewAsc,
    #[serde(rename = "title-asc")]
    TitleAsc,
    #[serde(rename = "title-desc")]
    TitleDesc,
}

impl SortKey {
    pub const ALL: [SortKey; 8] = [
        SortKey::RatingDesc,
        SortKey::RatingAsc,
        SortKey::ReleaseDesc,
        SortKey::ReleaseAsc,
        SortKey::ReviewDesc,
        SortKey::ReviewAsc,
        SortKey::TitleAsc,
        SortKey::TitleDesc,
    ];

    pub fn token(&self) -> &'static str {
        match self {
            SortKey::RatingDesc => "rating-desc",
            SortKey::RatingAsc => "rating-asc",
            SortKey::ReleaseDesc => "release-desc",
            SortKey::ReleaseAsc => "release-asc",
            SortKey::ReviewDesc => "review-desc",
            SortKey::ReviewAsc => "review-asc",
            SortKey::TitleAsc => "title-asc",
            SortKey::TitleDesc => "title-desc",
        }
    }

    /// Parse a token. Unknown tokens give `None`; callers then keep the
    /// filtered order as-is instead of failing.
    pub fn from_token(token: &str) -> Option<SortKey> {
        Self::ALL.iter().copied().find(|key| key.token() == token.trim())
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortKey::RatingDesc => "Highest Rated",
            SortKey::RatingAsc => "Lowest Rated",
            SortKey::ReleaseDesc => "Newest Release",
            SortKey::ReleaseAsc => "Oldest Release",
            SortKey::ReviewDesc => "Recently Reviewed",
            SortKey::ReviewAsc => "Oldest Review",
            SortKey::TitleAsc => "Title A-Z",
            SortKey::TitleDesc => "Title Z-A",
        }
    }

    pub fn field(&self) -> SortField {
        match self {
            SortKey::RatingDesc | SortKey::RatingAsc => SortField::Rating,
            SortKey::ReleaseDesc | SortKey::ReleaseAsc => SortField::ReleaseDate,
            SortKey::ReviewDesc | SortKey::ReviewAsc => SortField::ReviewDate,
            SortKey::TitleAsc | SortKey::TitleDesc => SortField::Title,
        }
    }

    pub fn direction(&self) -> SortDirection {
        match self {
            SortKey::RatingAsc | SortKey::ReleaseAsc | SortKey::ReviewAsc | SortKey::TitleAsc => {
                SortDirection::Ascending
            }
            SortKey::RatingDesc | SortKey::ReleaseDesc | SortKey::ReviewDesc | SortKey::TitleDesc => {
                SortDirection::Descending
            }
        }
    }
}

impl Default for SortKey {
    fn default() -> Self {
        SortKey::RatingDesc
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.token())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownSortKey(pub String);

impl fmt::Display for UnknownSortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown sort key: {}", self.0)
    }
}

impl std::error::Error for UnknownSortKey {}

impl FromStr for SortKey {
    type Err = UnknownSortKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortKey::from_token(s).ok_or_else(|| UnknownSortKey(s.to_string()))
    }
}
