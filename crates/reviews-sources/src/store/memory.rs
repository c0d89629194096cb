use async_trait::async_trait;
use serde_json::{Map, Value};
use tokio::sync::RwLock;
use tracing::debug;

use super::assign_internal_id;
use crate::error::StoreError;
use crate::traits::ReviewStore;

/// Collection held in process memory; contents are lost on exit
#[derive(Default)]
pub struct MemoryStore {
    documents: RwLock<Vec<Value>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with the given documents, stored as-is
    pub fn with_documents(documents: Vec<Value>) -> Self {
        Self {
            documents: RwLock::new(documents),
        }
    }
}

#[async_trait]
impl ReviewStore for MemoryStore {
    fn store_name(&self) -> &str {
        "memory"
    }

    async fn fetch_all(&self) -> Result<Vec<Value>, StoreError> {
        Ok(self.documents.read().await.clone())
    }

    async fn insert_one(&self, mut document: Map<String, Value>) -> Result<Value, StoreError> {
        assign_internal_id(&mut document);
        let stored = Value::Object(document);
        let mut documents = self.documents.write().await;
        documents.push(stored.clone());
        debug!(store = "memory", count = documents.len(), "Inserted document");
        Ok(stored)
    }

    async fn count(&self) -> Result<usize, StoreError> {
        Ok(self.documents.read().await.len())
    }
}
