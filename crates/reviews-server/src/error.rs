use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use reviews_core::CatalogError;
use reviews_sources::TmdbError;
use serde_json::json;

/// Error type for HTTP handlers.
///
/// Renders as `{"error": <message>, "code": <CODE>}`. Internal failures are
/// logged and answered with a generic message.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Tmdb(#[from] TmdbError),

    #[error("Bad request: {0}")]
    BadRequest(String),
}

pub type AppResult<T> = Result<T, AppError>;

const INTERNAL_MESSAGE: &str = "An internal error occurred";

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Catalog(catalog) => match catalog {
                CatalogError::Validation(e) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", e.to_string()),
                CatalogError::Conflict(_) => (StatusCode::CONFLICT, "CONFLICT", catalog.to_string()),
                CatalogError::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND", catalog.to_string()),
                CatalogError::Store(e) => {
                    tracing::error!(error = %e, "Store error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "INTERNAL_ERROR",
                        INTERNAL_MESSAGE.to_string(),
                    )
                }
            },

            AppError::Tmdb(TmdbError::MissingApiKey) => (
                StatusCode::SERVICE_UNAVAILABLE,
                "TMDB_NOT_CONFIGURED",
                "Movie search is not configured".to_string(),
            ),
            AppError::Tmdb(e) => {
                tracing::warn!(error = %e, "TMDB request failed");
                (
                    StatusCode::BAD_GATEWAY,
                    "TMDB_ERROR",
                    "Failed to search movies".to_string(),
                )
            }

            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}
