use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use reviews_models::ReviewRecord;
use reviews_sources::PosterSize;
use serde::Serialize;
use serde_json::{json, Value};

use crate::error::{AppError, AppResult};
use crate::query::ReviewListParams;
use crate::state::AppState;

/// A single review with its poster resolved to a full URL
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewDetail {
    #[serde(flatten)]
    pub record: ReviewRecord,
    pub poster_url: String,
}

/// GET /reviews
///
/// Without parameters every review is returned in store order.
async fn list_reviews(
    State(state): State<AppState>,
    params: Result<Query<ReviewListParams>, QueryRejection>,
) -> AppResult<Json<Vec<ReviewRecord>>> {
    let Query(params) = params.map_err(|e| AppError::BadRequest(e.body_text()))?;
    let filter = params.filter();
    let records = match params.sort.as_deref() {
        Some(token) => state.catalog.list_with_token(&filter, token).await?,
        None => state.catalog.list(&filter, None).await?,
    };
    Ok(Json(records))
}

/// POST /reviews
async fn create_review(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> AppResult<(StatusCode, Json<Value>)> {
    let Json(body) = body.map_err(|e| AppError::BadRequest(e.body_text()))?;
    let added = state.catalog.add(body).await?;
    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "Review added successfully",
            "review": added.document,
        })),
    ))
}

/// GET /reviews/{id}
async fn get_review(State(state): State<AppState>, Path(id): Path<String>) -> AppResult<Json<ReviewDetail>> {
    let record = state.catalog.get(&id).await?;
    let poster_path = state.posters.resolve_poster_path(&record);
    let poster_url = state.images.poster_url(poster_path.as_deref(), PosterSize::default());
    Ok(Json(ReviewDetail { record, poster_url }))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/reviews", get(list_reviews).post(create_review))
        .route("/reviews/{id}", get(get_review))
}
