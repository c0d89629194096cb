pub mod class_recommendation;
pub mod filter;
pub mod genre;
pub mod review;
pub mod sort;
pub mod tmdb;

pub use class_recommendation::{ClassRecommendation, LEGACY_CLASS_RECOMMENDATIONS};
pub use filter::FilterSpec;
pub use genre::{is_known_genre, GENRES};
pub use review::ReviewRecord;
pub use sort::{SortDirection, SortField, SortKey, UnknownSortKey};
pub use tmdb::{TmdbMovie, TmdbSearchResponse};
