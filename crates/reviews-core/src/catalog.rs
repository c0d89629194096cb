use chrono::{Local, NaiveDate};
use futures::lock::Mutex;
use reviews_models::{ClassRecommendation, FilterSpec, ReviewRecord, SortKey};
use reviews_sources::ReviewStore;
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::error::CatalogError;
use crate::new_review::prepare_document;
use crate::normalize::{normalize, normalize_all};
use crate::query::{distinct_genres, query, query_with_token};

/// A review accepted by [`Catalog::add`]
#[derive(Debug, Clone)]
pub struct AddedReview {
    /// The document exactly as stored, including the store's `_id`
    pub document: Value,
    pub record: ReviewRecord,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportFailure {
    pub index: usize,
    pub id: Option<String>,
    pub reason: String,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportReport {
    pub added: Vec<String>,
    pub failed: Vec<ImportFailure>,
}

impl ImportReport {
    pub fn total(&self) -> usize {
        self.added.len() + self.failed.len()
    }
}

/// Canonical class with its nominal rating range, for pickers and legends
#[derive(Debug, Clone, Serialize)]
pub struct ClassOption {
    pub value: ClassRecommendation,
    pub range: &'static str,
}

/// Review catalog backed by a store.
///
/// Reads go through the normalizer so callers only ever see canonical
/// records. Writes are serialized so the duplicate-id check and the insert
/// cannot interleave with another writer.
pub struct Catalog {
    store: Arc<dyn ReviewStore>,
    write_lock: Mutex<()>,
}

impl Catalog {
    pub fn new(store: Arc<dyn ReviewStore>) -> Self {
        Self {
            store,
            write_lock: Mutex::new(()),
        }
    }

    pub fn store_name(&self) -> &str {
        self.store.store_name()
    }

    /// Every record in store order
    pub async fn all(&self) -> Result<Vec<ReviewRecord>, CatalogError> {
        let documents = self.store.fetch_all().await?;
        Ok(normalize_all(&documents))
    }

    pub async fn list(&self, filter: &FilterSpec, sort: Option<SortKey>) -> Result<Vec<ReviewRecord>, CatalogError> {
        let records = self.all().await?;
        let result = query(&records, filter, sort);
        debug!(
            operation = "catalog_list",
            total = records.len(),
            matched = result.len(),
            sort = sort.map(|key| key.token()).unwrap_or("none"),
            "Listed reviews"
        );
        Ok(result)
    }

    pub async fn list_with_token(&self, filter: &FilterSpec, token: &str) -> Result<Vec<ReviewRecord>, CatalogError> {
        let records = self.all().await?;
        Ok(query_with_token(&records, filter, token))
    }

    pub async fn get(&self, id: &str) -> Result<ReviewRecord, CatalogError> {
        self.all()
            .await?
            .into_iter()
            .find(|record| record.id == id)
            .ok_or_else(|| CatalogError::NotFound(id.to_string()))
    }

    pub async fn add(&self, body: Value) -> Result<AddedReview, CatalogError> {
        self.add_on(body, Local::now().date_naive()).await
    }

    /// Add with an explicit date for a missing `reviewDate`
    pub async fn add_on(&self, body: Value, today: NaiveDate) -> Result<AddedReview, CatalogError> {
        let document = prepare_document(body, today)?;
        let id = document
            .get("id")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();

        let _guard = self.write_lock.lock().await;
        if self.all().await?.iter().any(|record| record.id == id) {
            warn!(operation = "catalog_add", id = %id, "Rejected duplicate review id");
            return Err(CatalogError::Conflict(id));
        }

        let stored = self.store.insert_one(document).await?;
        let record = normalize(&stored);
        info!(
            operation = "catalog_add",
            store = self.store.store_name(),
            id = %record.id,
            title = %record.title,
            "Review added"
        );
        Ok(AddedReview {
            document: stored,
            record,
        })
    }

    /// Add each document in turn. One bad document does not stop the rest.
    pub async fn import(&self, documents: Vec<Value>) -> Result<ImportReport, CatalogError> {
        let mut report = ImportReport::default();
        for (index, document) in documents.into_iter().enumerate() {
            let id = document.get("id").and_then(Value::as_str).map(str::to_string);
            match self.add(document).await {
                Ok(added) => report.added.push(added.record.id),
                Err(CatalogError::Store(e)) => return Err(CatalogError::Store(e)),
                Err(e) => {
                    debug!(operation = "catalog_import", index = index, error = %e, "Skipped document");
                    report.failed.push(ImportFailure {
                        index,
                        id,
                        reason: e.to_string(),
                    });
                }
            }
        }
        info!(
            operation = "catalog_import",
            added = report.added.len(),
            failed = report.failed.len(),
            "Import complete"
        );
        Ok(report)
    }

    /// Distinct genres present in the catalog, sorted
    pub async fn genres(&self) -> Result<Vec<String>, CatalogError> {
        Ok(distinct_genres(&self.all().await?))
    }

    pub fn class_recommendations() -> Vec<ClassOption> {
        ClassRecommendation::CANONICAL
            .iter()
            .map(|class| ClassOption {
                value: class.clone(),
                range: class.range_label().unwrap_or_default(),
            })
            .collect()
    }
}
