use anyhow::{Context, Result};
use reviews_models::ReviewRecord;
use serde_json::Value;
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, warn};

/// Curated TMDB id to poster path table, used for records stored without a `posterPath`.
///
/// The file is a JSON object keyed by TMDB id: `{"949": "/rrBuGu0Pjq7Y2BWSI6teGfZzviY.jpg"}`.
#[derive(Debug, Clone, Default)]
pub struct PosterMap {
    entries: HashMap<i64, String>,
}

impl PosterMap {
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (i64, String)>,
    {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read poster map {}", path.display()))?;
        let raw: HashMap<String, Value> = serde_json::from_str(&content)
            .with_context(|| format!("Poster map {} is not a JSON object", path.display()))?;

        let mut entries = HashMap::with_capacity(raw.len());
        for (key, value) in raw {
            let (Ok(tmdb_id), Some(poster_path)) = (key.trim().parse::<i64>(), value.as_str()) else {
                warn!(path = %path.display(), key = %key, "Skipping malformed poster map entry");
                continue;
            };
            entries.insert(tmdb_id, poster_path.to_string());
        }

        debug!(path = %path.display(), count = entries.len(), "Loaded poster map");
        Ok(Self { entries })
    }

    pub fn get(&self, tmdb_id: i64) -> Option<&str> {
        self.entries.get(&tmdb_id).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The record's own poster path wins; otherwise look it up by TMDB id.
    pub fn resolve_poster_path(&self, record: &ReviewRecord) -> Option<String> {
        record
            .poster_path
            .as_deref()
            .filter(|path| !path.trim().is_empty())
            .or_else(|| record.tmdb_id.and_then(|id| self.get(id)))
            .map(str::to_string)
    }
}
