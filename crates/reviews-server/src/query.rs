//! Query string parameters for the review listing.

use reviews_models::FilterSpec;
use serde::Deserialize;

/// `GET /reviews?q=&genres=&classes=&min_rating=&max_rating=&sort=`
///
/// `genres` and `classes` are comma-separated. Omitted parameters leave the
/// matching criterion unconstrained.
#[derive(Debug, Default, Deserialize)]
pub struct ReviewListParams {
    pub q: Option<String>,
    pub genres: Option<String>,
    pub classes: Option<String>,
    pub min_rating: Option<f64>,
    pub max_rating: Option<f64>,
    pub sort: Option<String>,
}

impl ReviewListParams {
    pub fn filter(&self) -> FilterSpec {
        let mut filter = FilterSpec::new();
        if let Some(q) = &self.q {
            filter.search_query = q.clone();
        }
        filter.genres.extend(split_list(self.genres.as_deref()));
        filter.class_recommendations.extend(split_list(self.classes.as_deref()));
        if let Some(min) = self.min_rating {
            filter.min_rating = min;
        }
        if let Some(max) = self.max_rating {
            filter.max_rating = max;
        }
        filter
    }
}

/// Search movies on TMDB (`GET /search/movies?query=`)
#[derive(Debug, Deserialize)]
pub struct MovieSearchParams {
    #[serde(default)]
    pub query: String,
}

fn split_list(value: Option<&str>) -> impl Iterator<Item = String> + '_ {
    value
        .unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
}
