use async_trait::async_trait;
use serde_json::{Map, Value};
use crate::error::StoreError;

/// Gateway to the collection holding review documents.
///
/// Documents are opaque JSON objects; their shape is only interpreted when
/// read back through the normalizer. Implementations own their connection
/// lifecycle and may open it lazily on first use.
#[async_trait]
pub trait ReviewStore: Send + Sync {
    // Store metadata, used in logs
    fn store_name(&self) -> &str;

    /// Every stored document, in insertion order
    async fn fetch_all(&self) -> Result<Vec<Value>, StoreError>;

    /// Insert a document and return it as stored (including the store's internal `_id`)
    async fn insert_one(&self, document: Map<String, Value>) -> Result<Value, StoreError>;

    /// Number of stored documents
    async fn count(&self) -> Result<usize, StoreError> {
        Ok(self.fetch_all().await?.len())
    }
}
