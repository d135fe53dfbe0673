//! Ordered in-memory record collection

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::models::Record;

/// Process-local collection of records kept in insertion order.
///
/// Lookups scan left to right and stop at the first record whose identifier
/// matches. Writers take the lock exclusively, so concurrent requests never
/// observe a half-applied mutation.
#[derive(Clone)]
pub struct MemoryRepository<T> {
    records: Arc<RwLock<Vec<T>>>,
}

impl<T: Record> Default for MemoryRepository<T> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<T: Record> MemoryRepository<T> {
    pub fn new(records: Vec<T>) -> Self {
        Self {
            records: Arc::new(RwLock::new(records)),
        }
    }

    /// All records, in insertion order
    pub async fn list(&self) -> Vec<T> {
        self.records.read().await.clone()
    }

    /// Append a record and return it as submitted.
    ///
    /// Identifiers are not checked for uniqueness.
    pub async fn create(&self, record: T) -> T {
        self.records.write().await.push(record.clone());
        record
    }

    /// First record with the given identifier
    pub async fn find(&self, id: &str) -> Option<T> {
        self.records
            .read()
            .await
            .iter()
            .find(|r| r.id() == id)
            .cloned()
    }

    /// Whether a record with the given identifier exists
    pub async fn exists(&self, id: &str) -> bool {
        self.records.read().await.iter().any(|r| r.id() == id)
    }

    /// Replace the first record with the given identifier
    pub async fn update(&self, id: &str, record: T) -> Option<T> {
        let mut records = self.records.write().await;
        let idx = records.iter().position(|r| r.id() == id)?;
        records[idx] = record.clone();
        Some(record)
    }

    /// Remove the first record with the given identifier and return it
    pub async fn delete(&self, id: &str) -> Option<T> {
        let mut records = self.records.write().await;
        let idx = records.iter().position(|r| r.id() == id)?;
        Some(records.remove(idx))
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}
