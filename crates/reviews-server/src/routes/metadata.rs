use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use reviews_core::{Catalog, ClassOption};
use reviews_models::TmdbMovie;
use reviews_sources::TmdbError;

use crate::error::{AppError, AppResult};
use crate::query::MovieSearchParams;
use crate::state::AppState;

/// GET /genres -- genres present in the catalog, sorted
async fn list_genres(State(state): State<AppState>) -> AppResult<Json<Vec<String>>> {
    Ok(Json(state.catalog.genres().await?))
}

/// GET /class-recommendations
async fn list_class_recommendations() -> Json<Vec<ClassOption>> {
    Json(Catalog::class_recommendations())
}

/// GET /search/movies?query=
async fn search_movies(
    State(state): State<AppState>,
    params: Result<Query<MovieSearchParams>, QueryRejection>,
) -> AppResult<Json<Vec<TmdbMovie>>> {
    let Query(params) = params.map_err(|e| AppError::BadRequest(e.body_text()))?;
    let client = state.tmdb.as_ref().ok_or(TmdbError::MissingApiKey)?;
    Ok(Json(client.search_movies(&params.query).await?))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/genres", get(list_genres))
        .route("/class-recommendations", get(list_class_recommendations))
        .route("/search/movies", get(search_movies))
}
