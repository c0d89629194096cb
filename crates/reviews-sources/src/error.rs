use thiserror::Error;

/// Failures talking to the document collection
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Store I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Stored collection is not valid JSON: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Stored collection at {path} is not a JSON array")]
    NotACollection { path: String },

    #[error("Unsupported store location: {0}")]
    UnsupportedLocation(String),
}

/// Failures talking to the TMDB API
#[derive(Debug, Error)]
pub enum TmdbError {
    #[error("TMDB API key is not configured")]
    MissingApiKey,

    #[error("TMDB request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("TMDB returned status {status}: {body}")]
    Status { status: u16, body: String },
}
