pub mod catalog;
pub mod error;
pub mod new_review;
pub mod normalize;
pub mod query;

pub use catalog::{AddedReview, Catalog, ClassOption, ImportFailure, ImportReport};
pub use error::{CatalogError, ValidationError};
pub use new_review::{prepare_document, review_id, slug};
pub use normalize::{normalize, normalize_all};
pub use query::{distinct_genres, filter_records, parse_date, query, query_with_token, sort_records};
