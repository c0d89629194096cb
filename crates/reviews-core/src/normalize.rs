//! Mapping of stored documents onto the canonical [`ReviewRecord`] shape.
//!
//! Catalogs written by older tooling use different field names for some
//! columns and occasionally store numbers as strings. Normalization absorbs
//! those differences and never fails: anything missing or unusable degrades
//! to an empty string, zero, or `None`.

use reviews_models::{ClassRecommendation, ReviewRecord};
use serde_json::{Map, Value};

/// `(canonical, legacy)` field name pairs
const BEST_CHARACTER: (&str, &str) = ("bestCharacterWinner", "bestCharacter");
const REVIEW: (&str, &str) = ("review", "reviewComments");
const SPOILER_REVIEW: (&str, &str) = ("spoilerReview", "spoilerComments");

const INTERNAL_ID: &str = "_id";

pub fn normalize(document: &Value) -> ReviewRecord {
    let empty = Map::new();
    let fields = document.as_object().unwrap_or(&empty);

    ReviewRecord {
        id: record_id(fields),
        title: string_field(fields, "title"),
        release_date: string_field(fields, "releaseDate"),
        genres: genres(fields.get("genres")),
        rating: number(fields.get("rating")).unwrap_or(0.0),
        class_recommendation: ClassRecommendation::from(string_field(fields, "classRecommendation")),
        intended_audience: string_field(fields, "intendedAudience"),
        rewatchability: string_field(fields, "rewatchability"),
        best_character_winner: aliased(fields, BEST_CHARACTER).unwrap_or_default(),
        review: aliased(fields, REVIEW).unwrap_or_default(),
        spoiler_review: aliased(fields, SPOILER_REVIEW),
        review_date: string_field(fields, "reviewDate"),
        tmdb_id: integer(fields.get("tmdbId")),
        poster_path: non_empty(fields.get("posterPath")),
    }
}

pub fn normalize_all(documents: &[Value]) -> Vec<ReviewRecord> {
    documents.iter().map(normalize).collect()
}

fn record_id(fields: &Map<String, Value>) -> String {
    if let Some(id) = non_empty(fields.get("id")) {
        return id;
    }
    match fields.get(INTERNAL_ID) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Object(oid)) => oid
            .get("$oid")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string(),
        _ => String::new(),
    }
}

/// Text of a scalar field; numbers and booleans are rendered, everything else is absent
fn text(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn non_empty(value: Option<&Value>) -> Option<String> {
    text(value).filter(|s| !s.is_empty())
}

fn string_field(fields: &Map<String, Value>, name: &str) -> String {
    text(fields.get(name)).unwrap_or_default()
}

fn aliased(fields: &Map<String, Value>, (canonical, legacy): (&str, &str)) -> Option<String> {
    non_empty(fields.get(canonical)).or_else(|| non_empty(fields.get(legacy)))
}

fn number(value: Option<&Value>) -> Option<f64> {
    match value? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
        _ => None,
    }
}

fn integer(value: Option<&Value>) -> Option<i64> {
    match value? {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().filter(|f| f.fract() == 0.0).map(|f| f as i64)),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn genres(value: Option<&Value>) -> Vec<String> {
    match value {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(Value::as_str)
            .map(str::to_string)
            .collect(),
        Some(Value::String(s)) if !s.is_empty() => vec![s.clone()],
        _ => Vec::new(),
    }
}
