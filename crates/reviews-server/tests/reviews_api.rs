//! Integration tests for the review endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_test_app, get, post_json};
use serde_json::{json, Value};

fn seed() -> Vec<Value> {
    vec![
        json!({"_id": {"$oid": "65f0"}, "title": "Heat", "releaseDate": "1995-12-15", "genres": ["Action", "Thriller"],
               "rating": 9.1, "classRecommendation": "Council Class", "reviewComments": "The diner scene.", "tmdbId": 949}),
        json!({"id": "alien-1979", "title": "Alien", "releaseDate": "1979-05-25", "genres": ["Horror", "Sci-Fi"],
               "rating": 9.6, "classRecommendation": "Masterclass", "review": "Perfect.", "posterPath": "/alien.jpg"}),
        json!({"id": "cats-2019", "title": "Cats", "releaseDate": "2019-12-20", "genres": ["Family"],
               "rating": 2.0, "classRecommendation": "Meme", "review": "Why."}),
    ]
}

fn ids(json: &Value) -> Vec<&str> {
    json.as_array()
        .unwrap()
        .iter()
        .map(|r| r["id"].as_str().unwrap())
        .collect()
}

#[tokio::test]
async fn list_without_params_returns_store_order() {
    let response = get(build_test_app(seed()), "/reviews").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(ids(&json), vec!["65f0", "alien-1979", "cats-2019"]);
    assert_eq!(json[0]["review"], "The diner scene.");
    assert!(json[0].get("spoilerReview").is_none());
}

#[tokio::test]
async fn list_applies_filters_and_sort() {
    let app = build_test_app(seed());

    let json = body_json(get(app.clone(), "/reviews?sort=rating-asc").await).await;
    assert_eq!(ids(&json), vec!["cats-2019", "65f0", "alien-1979"]);

    let json = body_json(get(app.clone(), "/reviews?min_rating=8&sort=title-asc").await).await;
    assert_eq!(ids(&json), vec!["alien-1979", "65f0"]);

    let json = body_json(get(app.clone(), "/reviews?genres=Horror,Family&sort=release-desc").await).await;
    assert_eq!(ids(&json), vec!["cats-2019", "alien-1979"]);

    let json = body_json(get(app.clone(), "/reviews?q=DINER").await).await;
    assert_eq!(ids(&json), vec!["65f0"]);

    let json = body_json(get(app, "/reviews?classes=Meme,Masterclass&sort=bogus").await).await;
    assert_eq!(ids(&json), vec!["alien-1979", "cats-2019"]);
}

#[tokio::test]
async fn list_rejects_malformed_query_with_json_error() {
    let response = get(build_test_app(seed()), "/reviews?min_rating=abc").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["code"], "BAD_REQUEST");
    assert!(json["error"].as_str().unwrap().starts_with("Failed to deserialize query string"));
}

#[tokio::test]
async fn list_search_keeps_surrounding_spaces() {
    let app = build_test_app(seed());

    // Only a title starting the text with "heat" could match " heat"
    let json = body_json(get(app.clone(), "/reviews?q=%20diner").await).await;
    assert_eq!(ids(&json), vec!["65f0"]);

    let json = body_json(get(app, "/reviews?q=%20heat").await).await;
    assert!(ids(&json).is_empty());
}

#[tokio::test]
async fn create_review_returns_201_with_document() {
    let app = build_test_app(vec![]);
    let response = post_json(
        app.clone(),
        "/reviews",
        r#"{"title": "The Thing", "rating": 9.3, "releaseDate": "1982-06-25", "genres": ["Horror"]}"#,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_eq!(json["message"], "Review added successfully");
    assert_eq!(json["review"]["id"], "the-thing-1982");
    assert!(json["review"]["reviewDate"].is_string());
    assert!(json["review"]["_id"].is_string());

    let listed = body_json(get(app, "/reviews").await).await;
    assert_eq!(ids(&listed), vec!["the-thing-1982"]);
}

#[tokio::test]
async fn create_review_requires_title_and_rating() {
    let app = build_test_app(vec![]);

    let response = post_json(app.clone(), "/reviews", r#"{"title": "No rating"}"#).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Title and rating are required");
    assert_eq!(json["code"], "VALIDATION_ERROR");

    let response = post_json(app, "/reviews", "{not json").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn create_review_rejects_duplicate_id() {
    let response = post_json(
        build_test_app(seed()),
        "/reviews",
        r#"{"id": "alien-1979", "title": "Alien", "rating": 9}"#,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
    assert_eq!(body_json(response).await["code"], "CONFLICT");
}

#[tokio::test]
async fn get_review_resolves_poster_url() {
    let app = build_test_app(seed());

    let json = body_json(get(app.clone(), "/reviews/alien-1979").await).await;
    assert_eq!(json["title"], "Alien");
    assert_eq!(json["posterUrl"], "https://image.tmdb.org/t/p/w500/alien.jpg");

    let json = body_json(get(app.clone(), "/reviews/65f0").await).await;
    assert_eq!(json["posterUrl"], "https://image.tmdb.org/t/p/w500/heat-mapped.jpg");

    let json = body_json(get(app.clone(), "/reviews/cats-2019").await).await;
    assert_eq!(json["posterUrl"], "/placeholder-poster.jpg");

    let response = get(app, "/reviews/missing").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["code"], "NOT_FOUND");
}
