mod client;
mod images;

pub use client::TmdbClient;
pub use images::{backdrop_url, poster_url, BackdropSize, PosterSize, TmdbImages, PLACEHOLDER_POSTER};
