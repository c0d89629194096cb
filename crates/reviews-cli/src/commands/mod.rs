pub mod add;
pub mod config;
pub mod export;
pub mod genres;
pub mod import;
pub mod list;
pub mod search;
pub mod serve;
pub mod show;

use color_eyre::eyre::{eyre, WrapErr};
use color_eyre::Result;
use reviews_config::{Config, CredentialStore, PathManager};
use reviews_core::Catalog;
use reviews_sources::{open_location, open_store, PosterMap, ReviewStore, StoreLocation, TmdbClient};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::debug;

/// Resolved configuration and paths shared by every command
pub struct AppContext {
    pub config: Config,
    pub paths: PathManager,
    pub config_path: PathBuf,
    pub in_memory: bool,
}

impl AppContext {
    /// Load `config.toml` (or the `--config` file), apply environment
    /// overrides, fill the TMDB key from the credential store and pick up
    /// the default poster map when present.
    pub fn load(config_path: Option<PathBuf>, in_memory: bool) -> Result<Self> {
        let paths = PathManager::default();
        let config_path = config_path.unwrap_or_else(|| paths.config_file());

        let mut config = Config::load_or_default(&config_path)
            .map_err(|e| eyre!("Failed to load config from {}: {}", config_path.display(), e))?;
        config.apply_env_overrides().map_err(|e| eyre!("{}", e))?;

        if config.tmdb.api_key().is_none() {
            let mut credentials = CredentialStore::new(paths.credentials_file());
            credentials.load().map_err(|e| eyre!("Failed to load credentials: {}", e))?;
            if let Some(key) = credentials.get_tmdb_api_key() {
                debug!("Using TMDB API key from credential store");
                config.tmdb.api_key = Some(key.clone());
            }
        }

        if config.tmdb.poster_map.is_none() && paths.poster_map_file().exists() {
            config.tmdb.poster_map = Some(paths.poster_map_file());
        }

        config.validate().map_err(|e| eyre!("Invalid configuration: {}", e))?;

        Ok(Self {
            config,
            paths,
            config_path,
            in_memory,
        })
    }

    pub fn open_store(&self) -> Result<Arc<dyn ReviewStore>> {
        let store = if self.in_memory {
            open_location(&StoreLocation::Memory, &self.config.store)
        } else {
            open_store(&self.config.store, &self.paths)
        };
        store.wrap_err("Failed to open review store")
    }

    pub fn catalog(&self) -> Result<Catalog> {
        Ok(Catalog::new(self.open_store()?))
    }

    pub fn tmdb_client(&self) -> Result<TmdbClient> {
        TmdbClient::from_config(&self.config.tmdb).wrap_err(
            "Set TMDB_API_KEY, tmdb.api_key in config.toml, or run 'movie-reviews config set-tmdb-key'",
        )
    }

    /// Poster map from config; an unreadable file is reported, not fatal
    pub fn poster_map(&self) -> PosterMap {
        match &self.config.tmdb.poster_map {
            Some(path) => PosterMap::load(path).unwrap_or_else(|e| {
                tracing::warn!(path = %path.display(), error = %e, "Failed to load poster map");
                PosterMap::default()
            }),
            None => PosterMap::default(),
        }
    }
}

/// Keep the first and last two characters of a secret
pub fn mask_secret(s: &str) -> String {
    if s.is_empty() {
        return "<not set>".to_string();
    }
    let chars: Vec<char> = s.chars().collect();
    if chars.len() <= 4 {
        return "*".repeat(chars.len());
    }
    let head: String = chars[..2].iter().collect();
    let tail: String = chars[chars.len() - 2..].iter().collect();
    format!("{}***{}", head, tail)
}

/// Cut to `max` characters, marking the cut with an ellipsis
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(max.saturating_sub(1)).collect();
    cut.push('…');
    cut
}
