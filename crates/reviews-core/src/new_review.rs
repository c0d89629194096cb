use chrono::NaiveDate;
use serde_json::{Map, Value};

use crate::error::ValidationError;

/// Check a submitted review body and fill in the derived fields.
///
/// `title` must be a non-empty string and `rating` a number (a numeric
/// string is accepted). A missing `id` is derived from the title and release
/// year, a missing `reviewDate` becomes `today`. Every other field is kept
/// as submitted.
pub fn prepare_document(body: Value, today: NaiveDate) -> Result<Map<String, Value>, ValidationError> {
    let Value::Object(mut document) = body else {
        return Err(ValidationError::NotAnObject);
    };

    let title = document
        .get("title")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|title| !title.is_empty())
        .ok_or(ValidationError::MissingRequired)?
        .to_string();

    if !has_rating(document.get("rating")) {
        return Err(ValidationError::MissingRequired);
    }

    if is_blank(document.get("id")) {
        let release_date = document.get("releaseDate").and_then(Value::as_str).unwrap_or_default();
        document.insert("id".to_string(), Value::String(review_id(&title, release_date)));
    }

    if is_blank(document.get("reviewDate")) {
        document.insert(
            "reviewDate".to_string(),
            Value::String(today.format("%Y-%m-%d").to_string()),
        );
    }

    Ok(document)
}

fn has_rating(value: Option<&Value>) -> bool {
    match value {
        Some(Value::Number(_)) => true,
        Some(Value::String(s)) => s.trim().parse::<f64>().map(f64::is_finite).unwrap_or(false),
        _ => false,
    }
}

fn is_blank(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.trim().is_empty(),
        Some(_) => false,
    }
}

/// `"The Dark Knight", "2008-07-18"` becomes `the-dark-knight-2008`
pub fn review_id(title: &str, release_date: &str) -> String {
    let year = release_date
        .split('-')
        .next()
        .map(str::trim)
        .filter(|year| !year.is_empty())
        .unwrap_or("unknown");
    format!("{}-{}", slug(title), year)
}

/// Lowercase, runs outside `[a-z0-9]` collapsed to `-`, no leading or trailing `-`
pub fn slug(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_dash = false;
    for c in text.to_lowercase().chars() {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c);
        } else {
            pending_dash = true;
        }
    }
    slug
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 1).unwrap()
    }

    #[test]
    fn test_fills_id_and_review_date() {
        let document = prepare_document(
            json!({"title": "The Dark Knight", "rating": 9.7, "releaseDate": "2008-07-18"}),
            today(),
        )
        .unwrap();
        assert_eq!(document["id"], "the-dark-knight-2008");
        assert_eq!(document["reviewDate"], "2024-05-01");
        assert_eq!(document["rating"], 9.7);
    }

    #[test]
    fn test_keeps_given_id_and_extra_fields() {
        let document = prepare_document(
            json!({"id": "tdk", "title": "The Dark Knight", "rating": 9, "reviewDate": "2023-01-01", "mood": "grim"}),
            today(),
        )
        .unwrap();
        assert_eq!(document["id"], "tdk");
        assert_eq!(document["reviewDate"], "2023-01-01");
        assert_eq!(document["mood"], "grim");
    }

    #[test]
    fn test_missing_release_date_uses_unknown() {
        let document = prepare_document(json!({"title": "Untitled!", "rating": "6.5"}), today()).unwrap();
        assert_eq!(document["id"], "untitled-unknown");
    }

    #[test]
    fn test_rating_zero_is_accepted() {
        assert!(prepare_document(json!({"title": "Cats", "rating": 0}), today()).is_ok());
    }

    #[test]
    fn test_rejects_missing_title_or_rating() {
        assert_eq!(
            prepare_document(json!({"rating": 8}), today()).unwrap_err(),
            ValidationError::MissingRequired
        );
        assert_eq!(
            prepare_document(json!({"title": "  ", "rating": 8}), today()).unwrap_err(),
            ValidationError::MissingRequired
        );
        assert_eq!(
            prepare_document(json!({"title": "Heat"}), today()).unwrap_err(),
            ValidationError::MissingRequired
        );
        assert_eq!(
            prepare_document(json!({"title": "Heat", "rating": "great"}), today()).unwrap_err(),
            ValidationError::MissingRequired
        );
        assert_eq!(
            prepare_document(json!(["Heat"]), today()).unwrap_err(),
            ValidationError::NotAnObject
        );
    }

    #[test]
    fn test_slug() {
        assert_eq!(slug("Spider-Man: Across the Spider-Verse"), "spider-man-across-the-spider-verse");
        assert_eq!(slug("  WALL·E  "), "wall-e");
        assert_eq!(slug("2001: A Space Odyssey"), "2001-a-space-odyssey");
        assert_eq!(slug("!!!"), "");
    }

    #[test]
    fn test_review_id() {
        assert_eq!(review_id("Heat", "1995-12-15"), "heat-1995");
        assert_eq!(review_id("Heat", "1995"), "heat-1995");
        assert_eq!(review_id("Heat", ""), "heat-unknown");
    }
}
