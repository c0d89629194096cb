//! Property-based tests using proptest.
//!
//! Filtering and sorting invariants checked over generated catalogs.

use super::*;
use proptest::prelude::*;
use reviews_models::ClassRecommendation;

const TITLES: [&str; 9] = ["Alien", "alien", "Amélie", "Amelie", "Éclair", "Zodiac", "zodiac", "The Room", ""];
const GENRE_POOL: [&str; 5] = ["Action", "Comedy", "Drama", "Horror", "Sci-Fi"];
const CLASS_POOL: [&str; 5] = ["Masterclass", "Council Class", "Meme", "Must Watch", ""];
const DATES: [&str; 6] = ["", "1979", "1999-03-30", "2010-07", "2024-01-15T20:00:00Z", "soon"];
const REVIEWS: [&str; 4] = ["", "Quietly devastating.", "A ghost of a film", "Big dumb fun"];
const SEARCHES: [&str; 8] = ["", "a", "AL", "dr", "ghost", " b", "é", " "];

// Tenths only, so equal ratings are common
fn rating() -> impl Strategy<Value = f64> {
    (0u8..=100).prop_map(|tenths| f64::from(tenths) / 10.0)
}

fn arb_record() -> impl Strategy<Value = ReviewRecord> {
    (
        prop::sample::select(TITLES.to_vec()),
        rating(),
        prop::sample::subsequence(GENRE_POOL.to_vec(), 0..=3),
        prop::sample::select(CLASS_POOL.to_vec()),
        prop::sample::select(DATES.to_vec()),
        prop::sample::select(DATES.to_vec()),
        prop::sample::select(REVIEWS.to_vec()),
    )
        .prop_map(|(title, rating, genres, class, release_date, review_date, review)| ReviewRecord {
            id: String::new(),
            title: title.to_string(),
            release_date: release_date.to_string(),
            genres: genres.into_iter().map(str::to_string).collect(),
            rating,
            class_recommendation: ClassRecommendation::from(class),
            intended_audience: String::new(),
            rewatchability: String::new(),
            best_character_winner: String::new(),
            review: review.to_string(),
            spoiler_review: None,
            review_date: review_date.to_string(),
            tmdb_id: None,
            poster_path: None,
        })
}

/// Records whose id is their input position
fn arb_records() -> impl Strategy<Value = Vec<ReviewRecord>> {
    prop::collection::vec(arb_record(), 0..24).prop_map(|mut records| {
        for (index, record) in records.iter_mut().enumerate() {
            record.id = index.to_string();
        }
        records
    })
}

fn arb_filter() -> impl Strategy<Value = FilterSpec> {
    (
        prop::sample::subsequence(GENRE_POOL.to_vec(), 0..=2),
        prop::sample::subsequence(CLASS_POOL.to_vec(), 0..=2),
        rating(),
        rating(),
        prop::sample::select(SEARCHES.to_vec()),
    )
        .prop_map(|(genres, classes, min_rating, max_rating, search)| {
            let mut filter = FilterSpec::new()
                .with_rating_range(min_rating, max_rating)
                .with_search(search);
            for genre in genres {
                filter = filter.with_genre(genre);
            }
            for class in classes {
                filter = filter.with_class(class);
            }
            filter
        })
}

fn satisfies_all(record: &ReviewRecord, filter: &FilterSpec) -> bool {
    let search = filter.search_query.to_lowercase();
    let search_ok = search.is_empty()
        || record.title.to_lowercase().contains(&search)
        || record.review.to_lowercase().contains(&search)
        || record.genres.iter().any(|genre| genre.to_lowercase().contains(&search));
    let genre_ok = filter.genres.is_empty() || record.genres.iter().any(|genre| filter.genres.contains(genre));
    let class_ok = filter.class_recommendations.is_empty()
        || filter
            .class_recommendations
            .contains(record.class_recommendation.as_str());
    let rating_ok = filter.min_rating <= record.rating && record.rating <= filter.max_rating;

    search_ok && genre_ok && class_ok && rating_ok
}

fn compare_by_field(field: SortField, a: &ReviewRecord, b: &ReviewRecord) -> Ordering {
    match field {
        SortField::Rating => a.rating.total_cmp(&b.rating),
        SortField::ReleaseDate => parse_date(&a.release_date).cmp(&parse_date(&b.release_date)),
        SortField::ReviewDate => parse_date(&a.review_date).cmp(&parse_date(&b.review_date)),
        SortField::Title => compare_titles(&a.title, &b.title),
    }
}

fn position(record: &ReviewRecord) -> usize {
    record.id.parse().unwrap()
}

proptest! {
    /// Every kept record meets every active criterion, every dropped record
    /// misses at least one, and kept records stay in input order
    #[test]
    fn filter_keeps_exactly_the_matching_records(records in arb_records(), filter in arb_filter()) {
        let kept: Vec<String> = filter_records(&records, &filter)
            .into_iter()
            .map(|record| record.id)
            .collect();

        for record in &records {
            let was_kept = kept.contains(&record.id);
            prop_assert_eq!(
                was_kept,
                satisfies_all(record, &filter),
                "record {} ({:?}) against {:?}",
                record.id,
                record.title,
                filter
            );
        }

        let expected: Vec<String> = records
            .iter()
            .filter(|record| satisfies_all(record, &filter))
            .map(|record| record.id.clone())
            .collect();
        prop_assert_eq!(kept, expected);
    }

    /// Each sort key yields ordered output, and records with equal keys keep
    /// their input order in both directions
    #[test]
    fn sort_is_ordered_and_stable(records in arb_records()) {
        for key in SortKey::ALL {
            let sorted = sort_records(&records, key);
            prop_assert_eq!(sorted.len(), records.len());

            for pair in sorted.windows(2) {
                let ordering = match key.direction() {
                    SortDirection::Ascending => compare_by_field(key.field(), &pair[0], &pair[1]),
                    SortDirection::Descending => compare_by_field(key.field(), &pair[1], &pair[0]),
                };
                prop_assert_ne!(ordering, Ordering::Greater, "{} put {} before {}", key, pair[0].id, pair[1].id);
                if ordering == Ordering::Equal {
                    prop_assert!(
                        position(&pair[0]) < position(&pair[1]),
                        "{} reordered equal records {} and {}",
                        key,
                        pair[0].id,
                        pair[1].id
                    );
                }
            }
        }
    }

    /// The engine never adds, drops or rewrites records when only sorting
    #[test]
    fn sort_is_a_permutation(records in arb_records(), key in prop::sample::select(SortKey::ALL.to_vec())) {
        let mut sorted_ids: Vec<usize> = sort_records(&records, key).iter().map(position).collect();
        sorted_ids.sort_unstable();
        prop_assert_eq!(sorted_ids, (0..records.len()).collect::<Vec<_>>());
    }
}
