use reviews_config::{TmdbConfig, DEFAULT_TMDB_IMAGE_BASE_URL};

/// Shown when a review has no poster path
pub const PLACEHOLDER_POSTER: &str = "/placeholder-poster.jpg";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PosterSize {
    W342,
    #[default]
    W500,
    W780,
    Original,
}

impl PosterSize {
    pub fn as_str(&self) -> &'static str {
        match self {
            PosterSize::W342 => "w342",
            PosterSize::W500 => "w500",
            PosterSize::W780 => "w780",
            PosterSize::Original => "original",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BackdropSize {
    W780,
    #[default]
    W1280,
    Original,
}

impl BackdropSize {
    pub fn as_str(&self) -> &'static str {
        match self {
            BackdropSize::W780 => "w780",
            BackdropSize::W1280 => "w1280",
            BackdropSize::Original => "original",
        }
    }
}

/// Builds image URLs from the relative paths TMDB hands out (`/abc.jpg`)
#[derive(Debug, Clone)]
pub struct TmdbImages {
    base_url: String,
}

impl TmdbImages {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn from_config(config: &TmdbConfig) -> Self {
        Self::new(config.image_base_url.clone())
    }

    pub fn poster_url(&self, poster_path: Option<&str>, size: PosterSize) -> String {
        match non_empty(poster_path) {
            Some(path) => self.join(size.as_str(), path),
            None => PLACEHOLDER_POSTER.to_string(),
        }
    }

    /// Empty string when there is no backdrop
    pub fn backdrop_url(&self, backdrop_path: Option<&str>, size: BackdropSize) -> String {
        match non_empty(backdrop_path) {
            Some(path) => self.join(size.as_str(), path),
            None => String::new(),
        }
    }

    fn join(&self, size: &str, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}/{}{}", self.base_url, size, path)
        } else {
            format!("{}/{}/{}", self.base_url, size, path)
        }
    }
}

impl Default for TmdbImages {
    fn default() -> Self {
        Self::new(DEFAULT_TMDB_IMAGE_BASE_URL)
    }
}

fn non_empty(path: Option<&str>) -> Option<&str> {
    path.map(str::trim).filter(|p| !p.is_empty())
}

pub fn poster_url(poster_path: Option<&str>, size: PosterSize) -> String {
    TmdbImages::default().poster_url(poster_path, size)
}

pub fn backdrop_url(backdrop_path: Option<&str>, size: BackdropSize) -> String {
    TmdbImages::default().backdrop_url(backdrop_path, size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_poster_url() {
        assert_eq!(
            poster_url(Some("/f89U3ADr1oiB1s9GkdPOEpXUk5H.jpg"), PosterSize::default()),
            "https://image.tmdb.org/t/p/w500/f89U3ADr1oiB1s9GkdPOEpXUk5H.jpg"
        );
        assert_eq!(
            poster_url(Some("/x.jpg"), PosterSize::Original),
            "https://image.tmdb.org/t/p/original/x.jpg"
        );
    }

    #[test]
    fn test_missing_poster_uses_placeholder() {
        assert_eq!(poster_url(None, PosterSize::W342), PLACEHOLDER_POSTER);
        assert_eq!(poster_url(Some(""), PosterSize::W342), PLACEHOLDER_POSTER);
    }

    #[test]
    fn test_backdrop_url() {
        assert_eq!(
            backdrop_url(Some("/bd.jpg"), BackdropSize::default()),
            "https://image.tmdb.org/t/p/w1280/bd.jpg"
        );
        assert_eq!(backdrop_url(None, BackdropSize::W780), "");
    }

    #[test]
    fn test_custom_base_and_path_without_slash() {
        let images = TmdbImages::new("http://images.local/t/p/");
        assert_eq!(images.poster_url(Some("a.jpg"), PosterSize::W780), "http://images.local/t/p/w780/a.jpg");
    }
}
