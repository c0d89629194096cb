#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use reviews_config::{Config, ServerConfig};
use reviews_core::Catalog;
use reviews_server::{build_app_router, AppState};
use reviews_sources::{MemoryStore, PosterMap, TmdbClient, TmdbImages};
use serde_json::Value;
use tower::ServiceExt;

pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:3000".to_string()],
        request_timeout_secs: 30,
    }
}

pub fn test_state(documents: Vec<Value>, tmdb: Option<TmdbClient>) -> AppState {
    let config = Config::default();
    AppState {
        catalog: Arc::new(Catalog::new(Arc::new(MemoryStore::with_documents(documents)))),
        tmdb,
        images: Arc::new(TmdbImages::from_config(&config.tmdb)),
        posters: Arc::new(PosterMap::from_entries([(949, "/heat-mapped.jpg".to_string())])),
        config: Arc::new(test_config()),
    }
}

/// Router over an in-memory catalog, without movie search
pub fn build_test_app(documents: Vec<Value>) -> Router {
    build_app_router(test_state(documents, None), &test_config())
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
