pub mod health;
pub mod metadata;
pub mod reviews;

use axum::Router;

use crate::state::AppState;

/// Catalog and metadata routes (health is mounted separately)
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(reviews::router())
        .merge(metadata::router())
}
