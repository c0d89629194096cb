use std::sync::Arc;

use reviews_config::{Config, ServerConfig};
use reviews_core::Catalog;
use reviews_sources::{PosterMap, ReviewStore, TmdbClient, TmdbImages};
use tracing::{info, warn};

/// Shared state handed to every handler through `State<AppState>`.
///
/// Cheap to clone: everything sits behind an `Arc` or is already shared.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    /// Absent when no API key is configured; search then answers 503
    pub tmdb: Option<TmdbClient>,
    pub images: Arc<TmdbImages>,
    pub posters: Arc<PosterMap>,
    pub config: Arc<ServerConfig>,
}

impl AppState {
    /// Assemble state from configuration around an already opened store.
    ///
    /// A missing API key or an unreadable poster map only disables the
    /// feature that needs it.
    pub fn from_config(config: &Config, store: Arc<dyn ReviewStore>) -> Self {
        let tmdb = match TmdbClient::from_config(&config.tmdb) {
            Ok(client) => Some(client),
            Err(e) => {
                info!(reason = %e, "Movie search disabled");
                None
            }
        };

        let posters = match &config.tmdb.poster_map {
            Some(path) => PosterMap::load(path).unwrap_or_else(|e| {
                warn!(path = %path.display(), error = %e, "Failed to load poster map, continuing without it");
                PosterMap::default()
            }),
            None => PosterMap::default(),
        };

        Self {
            catalog: Arc::new(Catalog::new(store)),
            tmdb,
            images: Arc::new(TmdbImages::from_config(&config.tmdb)),
            posters: Arc::new(posters),
            config: Arc::new(config.server.clone()),
        }
    }
}
