use reqwest::Client;
use reviews_config::TmdbConfig;
use reviews_models::{TmdbMovie, TmdbSearchResponse};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

use crate::error::TmdbError;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

fn create_tmdb_client() -> Client {
    Client::builder()
        .user_agent(concat!("movie-reviews/", env!("CARGO_PKG_VERSION")))
        .timeout(REQUEST_TIMEOUT)
        .build()
        .unwrap_or_else(|_| Client::new())
}

#[derive(Clone)]
pub struct TmdbClient {
    client: Arc<Client>,
    api_key: String,
    base_url: String,
}

impl TmdbClient {
    pub fn new(api_key: String, base_url: String) -> Self {
        Self {
            client: Arc::new(create_tmdb_client()),
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn from_config(config: &TmdbConfig) -> Result<Self, TmdbError> {
        let api_key = config.api_key().ok_or(TmdbError::MissingApiKey)?;
        Ok(Self::new(api_key.to_string(), config.base_url.clone()))
    }

    /// Search movies by title.
    ///
    /// A blank query returns no results without calling the API.
    pub async fn search_movies(&self, query: &str) -> Result<Vec<TmdbMovie>, TmdbError> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(Vec::new());
        }

        let url = format!("{}/search/movie", self.base_url);
        debug!(operation = "tmdb_search", query = query, "Searching TMDB");

        let response = self
            .client
            .get(&url)
            .query(&[
                ("api_key", self.api_key.as_str()),
                ("query", query),
                ("include_adult", "false"),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(TmdbError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let search: TmdbSearchResponse = response.json().await?;
        info!(
            operation = "tmdb_search",
            query = query,
            results = search.results.len(),
            "TMDB search complete"
        );
        Ok(search.results)
    }
}
