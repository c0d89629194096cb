use chrono::{DateTime, NaiveDate};
use reviews_models::{FilterSpec, ReviewRecord, SortDirection, SortField, SortKey};
use std::cmp::Ordering;
use std::collections::BTreeSet;
use tracing::debug;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Filter then sort. `None` keeps the filtered records in input order.
pub fn query(records: &[ReviewRecord], filter: &FilterSpec, sort: Option<SortKey>) -> Vec<ReviewRecord> {
    let filtered = filter_records(records, filter);
    match sort {
        Some(key) => sort_records(&filtered, key),
        None => filtered,
    }
}

/// Like [`query`], taking the sort as a raw token. Unknown tokens leave the
/// filtered order untouched rather than failing.
pub fn query_with_token(records: &[ReviewRecord], filter: &FilterSpec, token: &str) -> Vec<ReviewRecord> {
    let sort = SortKey::from_token(token);
    if sort.is_none() {
        debug!(operation = "catalog_query", sort = token, "Unknown sort key, keeping filtered order");
    }
    query(records, filter, sort)
}

pub fn filter_records(records: &[ReviewRecord], filter: &FilterSpec) -> Vec<ReviewRecord> {
    let search = filter.search_query.to_lowercase();
    records
        .iter()
        .filter(|record| matches_search(record, &search))
        .filter(|record| matches_genres(record, filter))
        .filter(|record| matches_class(record, filter))
        .filter(|record| record.rating >= filter.min_rating && record.rating <= filter.max_rating)
        .cloned()
        .collect()
}

fn matches_search(record: &ReviewRecord, search: &str) -> bool {
    if search.is_empty() {
        return true;
    }
    record.title.to_lowercase().contains(search)
        || record.review.to_lowercase().contains(search)
        || record.genres.iter().any(|genre| genre.to_lowercase().contains(search))
}

fn matches_genres(record: &ReviewRecord, filter: &FilterSpec) -> bool {
    filter.genres.is_empty() || record.genres.iter().any(|genre| filter.genres.contains(genre))
}

fn matches_class(record: &ReviewRecord, filter: &FilterSpec) -> bool {
    filter.class_recommendations.is_empty()
        || filter
            .class_recommendations
            .contains(record.class_recommendation.as_str())
}

/// Stable sort: records with equal keys keep their relative order in either direction.
pub fn sort_records(records: &[ReviewRecord], key: SortKey) -> Vec<ReviewRecord> {
    let mut sorted = records.to_vec();
    let compare: fn(&ReviewRecord, &ReviewRecord) -> Ordering = match key.field() {
        SortField::Rating => |a, b| a.rating.total_cmp(&b.rating),
        SortField::ReleaseDate => |a, b| parse_date(&a.release_date).cmp(&parse_date(&b.release_date)),
        SortField::ReviewDate => |a, b| parse_date(&a.review_date).cmp(&parse_date(&b.review_date)),
        SortField::Title => |a, b| compare_titles(&a.title, &b.title),
    };

    match key.direction() {
        SortDirection::Ascending => sorted.sort_by(compare),
        SortDirection::Descending => sorted.sort_by(|a, b| compare(b, a)),
    }
    sorted
}

/// Calendar date from `YYYY-MM-DD`, an RFC 3339 timestamp, `YYYY-MM` or `YYYY`.
///
/// Unparsable values yield `None`, which orders before every real date.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(value) {
        return Some(timestamp.date_naive());
    }
    if let Ok(date) = NaiveDate::parse_from_str(&format!("{}-01", value), "%Y-%m-%d") {
        return Some(date);
    }
    let year: i32 = value.parse().ok()?;
    NaiveDate::from_ymd_opt(year, 1, 1)
}

/// Collation in the manner of the Unicode root locale: base letters decide
/// first, then accents (unaccented first), then case (lowercase first). Raw
/// strings only break ties between titles that collate equal.
fn compare_titles(a: &str, b: &str) -> Ordering {
    let a_decomposed: String = a.nfd().collect();
    let b_decomposed: String = b.nfd().collect();

    base_letters(&a_decomposed)
        .cmp(&base_letters(&b_decomposed))
        .then_with(|| a_decomposed.to_lowercase().cmp(&b_decomposed.to_lowercase()))
        .then_with(|| case_pattern(&a_decomposed).cmp(&case_pattern(&b_decomposed)))
        .then_with(|| a.cmp(b))
}

fn base_letters(decomposed: &str) -> String {
    decomposed
        .chars()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

fn case_pattern(decomposed: &str) -> Vec<bool> {
    decomposed.chars().map(char::is_uppercase).collect()
}

/// Sorted distinct genres present in the records
pub fn distinct_genres(records: &[ReviewRecord]) -> Vec<String> {
    records
        .iter()
        .flat_map(|record| record.genres.iter().cloned())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests;

#[cfg(test)]
mod property_tests;
