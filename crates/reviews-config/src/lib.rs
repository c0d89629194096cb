pub mod config;
pub mod credentials;
pub mod paths;

pub use config::{Config, LoggingConfig, ServerConfig, StoreConfig, TmdbConfig, DEFAULT_DATABASE, DEFAULT_TMDB_BASE_URL, DEFAULT_TMDB_IMAGE_BASE_URL};
pub use credentials::CredentialStore;
pub use paths::{PathManager, container_base_path};
