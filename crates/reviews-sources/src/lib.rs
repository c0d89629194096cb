pub mod error;
pub mod factory;
pub mod posters;
pub mod store;
pub mod tmdb;
pub mod traits;

pub use error::{StoreError, TmdbError};
pub use factory::{open_location, open_store, StoreLocation};
pub use posters::PosterMap;
pub use store::{JsonFileStore, MemoryStore};
pub use tmdb::{BackdropSize, PosterSize, TmdbClient, TmdbImages};
pub use traits::ReviewStore;
