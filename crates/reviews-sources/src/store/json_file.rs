use async_trait::async_trait;
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use tokio::sync::{Mutex, OnceCell};
use tracing::{debug, info, warn};

use super::assign_internal_id;
use crate::error::StoreError;
use crate::traits::ReviewStore;

/// Collection persisted as a JSON array at `<root>/<database>/<collection>.json`.
///
/// The file is read once, on first access, and kept in memory for the life
/// of the handle. Every insert rewrites the file through a temporary sibling
/// followed by a rename, so readers never observe a half-written collection.
pub struct JsonFileStore {
    path: PathBuf,
    documents: OnceCell<Mutex<Vec<Value>>>,
}

impl JsonFileStore {
    pub fn new(root: &Path, database: &str, collection: &str) -> Self {
        Self::at_path(root.join(database).join(format!("{}.json", collection)))
    }

    pub fn at_path(path: PathBuf) -> Self {
        Self {
            path,
            documents: OnceCell::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn collection(&self) -> Result<&Mutex<Vec<Value>>, StoreError> {
        self.documents
            .get_or_try_init(|| async {
                let documents = load_collection(&self.path).await?;
                info!(
                    operation = "store_open",
                    path = %self.path.display(),
                    count = documents.len(),
                    "Opened review collection"
                );
                Ok::<_, StoreError>(Mutex::new(documents))
            })
            .await
    }
}

async fn load_collection(path: &Path) -> Result<Vec<Value>, StoreError> {
    let content = match tokio::fs::read_to_string(path).await {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "Collection file does not exist yet, starting empty");
            return Ok(Vec::new());
        }
        Err(e) => return Err(e.into()),
    };

    if content.trim().is_empty() {
        return Ok(Vec::new());
    }

    match serde_json::from_str::<Value>(&content)? {
        Value::Array(documents) => Ok(documents),
        _ => Err(StoreError::NotACollection {
            path: path.display().to_string(),
        }),
    }
}

async fn persist_collection(path: &Path, documents: &[Value]) -> Result<(), StoreError> {
    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent).await?;
    }
    let content = serde_json::to_vec_pretty(documents)?;
    let tmp_path = path.with_extension("json.tmp");
    tokio::fs::write(&tmp_path, content).await?;
    tokio::fs::rename(&tmp_path, path).await?;
    Ok(())
}

#[async_trait]
impl ReviewStore for JsonFileStore {
    fn store_name(&self) -> &str {
        "json-file"
    }

    async fn fetch_all(&self) -> Result<Vec<Value>, StoreError> {
        let documents = self.collection().await?.lock().await;
        Ok(documents.clone())
    }

    async fn insert_one(&self, mut document: Map<String, Value>) -> Result<Value, StoreError> {
        assign_internal_id(&mut document);
        let stored = Value::Object(document);

        let mut documents = self.collection().await?.lock().await;
        documents.push(stored.clone());
        if let Err(e) = persist_collection(&self.path, &documents).await {
            warn!(
                operation = "store_insert",
                path = %self.path.display(),
                error = %e,
                "Failed to persist collection, discarding insert"
            );
            documents.pop();
            return Err(e);
        }

        debug!(
            operation = "store_insert",
            path = %self.path.display(),
            count = documents.len(),
            "Inserted document"
        );
        Ok(stored)
    }

    async fn count(&self) -> Result<usize, StoreError> {
        Ok(self.collection().await?.lock().await.len())
    }
}
