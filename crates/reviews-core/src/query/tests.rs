use super::*;
use reviews_models::ClassRecommendation;

fn create_record(title: &str, rating: f64, release_date: &str) -> ReviewRecord {
    ReviewRecord {
        id: title.to_lowercase(),
        title: title.to_string(),
        release_date: release_date.to_string(),
        genres: vec![],
        rating,
        class_recommendation: ClassRecommendation::suggest_for_rating(rating),
        intended_audience: String::new(),
        rewatchability: String::new(),
        best_character_winner: String::new(),
        review: String::new(),
        spoiler_review: None,
        review_date: String::new(),
        tmdb_id: None,
        poster_path: None,
    }
}

fn with_genres(mut record: ReviewRecord, genres: &[&str]) -> ReviewRecord {
    record.genres = genres.iter().map(|g| g.to_string()).collect();
    record
}

fn titles(records: &[ReviewRecord]) -> Vec<&str> {
    records.iter().map(|r| r.title.as_str()).collect()
}

fn sample() -> Vec<ReviewRecord> {
    vec![
        create_record("A", 9.0, "2020-01-01"),
        create_record("B", 7.0, "2021-01-01"),
    ]
}

#[test]
fn test_rating_desc_orders_highest_first() {
    let result = query(&sample(), &FilterSpec::default(), Some(SortKey::RatingDesc));
    assert_eq!(titles(&result), vec!["A", "B"]);
}

#[test]
fn test_min_rating_excludes_lower_ratings() {
    let filter = FilterSpec::new().with_rating_range(8.0, 10.0);
    let result = query(&sample(), &filter, Some(SortKey::RatingDesc));
    assert_eq!(titles(&result), vec!["A"]);
}

#[test]
fn test_search_is_case_insensitive_on_title() {
    let filter = FilterSpec::new().with_search("b");
    let result = query(&sample(), &filter, None);
    assert_eq!(titles(&result), vec!["B"]);
}

#[test]
fn test_genre_filter_without_genres_is_empty() {
    let filter = FilterSpec::new().with_genre("Horror");
    assert!(query(&sample(), &filter, Some(SortKey::RatingDesc)).is_empty());
}

#[test]
fn test_title_desc() {
    let result = query(&sample(), &FilterSpec::default(), Some(SortKey::TitleDesc));
    assert_eq!(titles(&result), vec!["B", "A"]);
}

#[test]
fn test_empty_input_gives_empty_output() {
    for key in SortKey::ALL {
        assert!(query(&[], &FilterSpec::default(), Some(key)).is_empty());
    }
    assert!(query_with_token(&[], &FilterSpec::new().with_search("x"), "bogus").is_empty());
}

#[test]
fn test_unknown_token_keeps_filtered_order() {
    let records = vec![
        create_record("B", 7.0, "2021-01-01"),
        create_record("C", 8.0, "2019-01-01"),
        create_record("A", 9.0, "2020-01-01"),
    ];
    let result = query_with_token(&records, &FilterSpec::new().with_rating_range(7.5, 10.0), "popularity");
    assert_eq!(titles(&result), vec!["C", "A"]);

    let sorted = query_with_token(&records, &FilterSpec::default(), " title-asc ");
    assert_eq!(titles(&sorted), vec!["A", "B", "C"]);
}

#[test]
fn test_sort_is_stable_in_both_directions() {
    let records = vec![
        create_record("First", 8.0, ""),
        create_record("Top", 9.0, ""),
        create_record("Second", 8.0, ""),
        create_record("Third", 8.0, ""),
    ];
    let desc = sort_records(&records, SortKey::RatingDesc);
    assert_eq!(titles(&desc), vec!["Top", "First", "Second", "Third"]);

    let asc = sort_records(&records, SortKey::RatingAsc);
    assert_eq!(titles(&asc), vec!["First", "Second", "Third", "Top"]);
}

#[test]
fn test_sort_does_not_mutate_input() {
    let records = sample();
    let _ = sort_records(&records, SortKey::RatingAsc);
    assert_eq!(titles(&records), vec!["A", "B"]);
}

#[test]
fn test_release_date_sort_is_chronological() {
    let records = vec![
        create_record("Mid", 5.0, "1999-03-30"),
        create_record("Unknown", 5.0, "soon"),
        create_record("Late", 5.0, "2010-07"),
        create_record("Early", 5.0, "1979"),
    ];
    let asc = sort_records(&records, SortKey::ReleaseAsc);
    assert_eq!(titles(&asc), vec!["Unknown", "Early", "Mid", "Late"]);

    let desc = sort_records(&records, SortKey::ReleaseDesc);
    assert_eq!(titles(&desc), vec!["Late", "Mid", "Early", "Unknown"]);
}

#[test]
fn test_review_date_sort() {
    let mut older = create_record("Older", 5.0, "");
    older.review_date = "2023-11-02".to_string();
    let mut newer = create_record("Newer", 5.0, "");
    newer.review_date = "2024-01-15T20:00:00Z".to_string();

    let result = sort_records(&[older, newer], SortKey::ReviewDesc);
    assert_eq!(titles(&result), vec!["Newer", "Older"]);
}

#[test]
fn test_title_sort_ignores_case() {
    let records = vec![
        create_record("beta", 5.0, ""),
        create_record("Alpha", 5.0, ""),
        create_record("Gamma", 5.0, ""),
    ];
    let result = sort_records(&records, SortKey::TitleAsc);
    assert_eq!(titles(&result), vec!["Alpha", "beta", "Gamma"]);
}

#[test]
fn test_title_sort_places_accented_letters_with_their_base() {
    let records = vec![
        create_record("Zodiac", 5.0, ""),
        create_record("Éclair", 5.0, ""),
        create_record("Amélie", 5.0, ""),
        create_record("Amelia", 5.0, ""),
    ];
    let asc = sort_records(&records, SortKey::TitleAsc);
    assert_eq!(titles(&asc), vec!["Amelia", "Amélie", "Éclair", "Zodiac"]);

    let desc = sort_records(&records, SortKey::TitleDesc);
    assert_eq!(titles(&desc), vec!["Zodiac", "Éclair", "Amélie", "Amelia"]);
}

#[test]
fn test_title_ties_unaccented_then_lowercase_first() {
    let records = vec![
        create_record("Amélie", 5.0, ""),
        create_record("Alien", 5.0, ""),
        create_record("Amelie", 5.0, ""),
        create_record("alien", 5.0, ""),
    ];
    let result = sort_records(&records, SortKey::TitleAsc);
    assert_eq!(titles(&result), vec!["alien", "Alien", "Amelie", "Amélie"]);
}

#[test]
fn test_search_matches_review_and_genres() {
    let mut ghost = with_genres(create_record("Ghost Story", 6.0, ""), &["Drama"]);
    ghost.review = "Quietly devastating.".to_string();
    let scream = with_genres(create_record("Scream", 7.5, ""), &["Horror"]);
    let records = vec![ghost, scream];

    let by_review = filter_records(&records, &FilterSpec::new().with_search("DEVASTATING"));
    assert_eq!(titles(&by_review), vec!["Ghost Story"]);

    let by_genre = filter_records(&records, &FilterSpec::new().with_search("horr"));
    assert_eq!(titles(&by_genre), vec!["Scream"]);

    let empty = filter_records(&records, &FilterSpec::new().with_search(""));
    assert_eq!(empty.len(), 2);
}

#[test]
fn test_criteria_combine_with_and_values_with_or() {
    let records = vec![
        with_genres(create_record("Alien", 9.6, ""), &["Horror", "Sci-Fi"]),
        with_genres(create_record("Heat", 9.1, ""), &["Action", "Thriller"]),
        with_genres(create_record("Paddington", 8.0, ""), &["Family", "Comedy"]),
        with_genres(create_record("The Room", 2.0, ""), &["Drama"]),
    ];

    let filter = FilterSpec::new().with_genre("Horror").with_genre("Action");
    assert_eq!(titles(&filter_records(&records, &filter)), vec!["Alien", "Heat"]);

    let filter = filter.with_class("Masterclass");
    assert_eq!(titles(&filter_records(&records, &filter)), vec!["Alien"]);

    let filter = FilterSpec::new().with_class("Meme").with_class("Recommendable");
    assert_eq!(titles(&filter_records(&records, &filter)), vec!["Paddington", "The Room"]);
}

#[test]
fn test_rating_bounds_are_inclusive() {
    let records = vec![
        create_record("Low", 6.0, ""),
        create_record("Mid", 7.0, ""),
        create_record("High", 8.0, ""),
    ];
    let filter = FilterSpec::new().with_rating_range(6.0, 7.0);
    assert_eq!(titles(&filter_records(&records, &filter)), vec!["Low", "Mid"]);
}

#[test]
fn test_legacy_class_filter_matches_verbatim() {
    let mut record = create_record("Old", 8.0, "");
    record.class_recommendation = ClassRecommendation::from("Must Watch");
    let filter = FilterSpec::new().with_class("Must Watch");
    assert_eq!(filter_records(&[record], &filter).len(), 1);
}

#[test]
fn test_parse_date_forms() {
    assert_eq!(parse_date("1995-12-15"), NaiveDate::from_ymd_opt(1995, 12, 15));
    assert_eq!(parse_date("1995-12"), NaiveDate::from_ymd_opt(1995, 12, 1));
    assert_eq!(parse_date("1995"), NaiveDate::from_ymd_opt(1995, 1, 1));
    assert_eq!(parse_date(""), None);
    assert_eq!(parse_date("next summer"), None);
}

#[test]
fn test_distinct_genres_sorted() {
    let records = vec![
        with_genres(create_record("A", 1.0, ""), &["Horror", "Drama"]),
        with_genres(create_record("B", 1.0, ""), &["Drama", "Action"]),
    ];
    assert_eq!(distinct_genres(&records), vec!["Action", "Drama", "Horror"]);
}
