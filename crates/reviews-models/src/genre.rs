/// Genres offered when writing a review. Stored documents are not checked against this.
pub const GENRES: [&str; 13] = [
    "Action",
    "Comedy",
    "Coming-of-age",
    "Documentary",
    "Drama",
    "Family",
    "Fantasy",
    "Hollywood",
    "Horror",
    "Romance",
    "Sci-Fi",
    "Superhero",
    "Thriller",
];

pub fn is_known_genre(genre: &str) -> bool {
    GENRES.contains(&genre)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_known_genre() {
        assert!(is_known_genre("Sci-Fi"));
        assert!(is_known_genre("Coming-of-age"));
        assert!(!is_known_genre("sci-fi"));
        assert!(!is_known_genre("Western"));
    }
}
