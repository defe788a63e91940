//! In-memory key-value store.

use std::collections::{BTreeMap, HashMap};

use async_trait::async_trait;
use tokio::sync::RwLock;

use wishlist_core::store::{AttributeChange, KeyValueStore, Record, RecordKey};
use wishlist_core::storage::{RepositoryError, Result};

/// Rows of a partition, ordered by sort key.
type Partition = BTreeMap<String, HashMap<String, String>>;

/// Process-local store backend for tests and dependency-free builds.
///
/// Partitions are nested maps behind a `tokio::sync::RwLock`; the
/// `BTreeMap` keeps queries ordered by sort key, matching the table's
/// ordering. Data is lost when the store is dropped.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    partitions: RwLock<HashMap<String, Partition>>,
}

impl InMemoryStore {
    /// Creates a new empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KeyValueStore for InMemoryStore {
    async fn query(&self, partition: &str, sort_prefix: &str) -> Result<Vec<Record>> {
        let partitions = self.partitions.read().await;
        let Some(rows) = partitions.get(partition) else {
            return Ok(Vec::new());
        };

        Ok(rows
            .iter()
            .filter(|(sort, _)| sort.starts_with(sort_prefix))
            .map(|(sort, attributes)| Record {
                key: RecordKey::new(partition, sort.clone()),
                attributes: attributes.clone(),
            })
            .collect())
    }

    async fn query_by_index(&self, sort_key: &str) -> Result<Option<Record>> {
        let partitions = self.partitions.read().await;

        for (partition, rows) in partitions.iter() {
            if let Some(attributes) = rows.get(sort_key) {
                return Ok(Some(Record {
                    key: RecordKey::new(partition.clone(), sort_key),
                    attributes: attributes.clone(),
                }));
            }
        }

        Ok(None)
    }

    async fn put(&self, record: Record) -> Result<()> {
        let mut partitions = self.partitions.write().await;
        partitions
            .entry(record.key.partition)
            .or_default()
            .insert(record.key.sort, record.attributes);
        Ok(())
    }

    async fn update(
        &self,
        key: RecordKey,
        changes: Vec<(String, AttributeChange)>,
    ) -> Result<Record> {
        let mut partitions = self.partitions.write().await;
        let attributes = partitions
            .get_mut(&key.partition)
            .and_then(|rows| rows.get_mut(&key.sort))
            .ok_or_else(|| RepositoryError::NotFound {
                entity_type: "record",
                id: format!("{}/{}", key.partition, key.sort),
            })?;

        for (name, change) in changes {
            match change {
                AttributeChange::Set(value) => {
                    attributes.insert(name, value);
                }
                AttributeChange::Remove => {
                    attributes.remove(&name);
                }
            }
        }

        Ok(Record {
            attributes: attributes.clone(),
            key,
        })
    }

    async fn delete(&self, key: RecordKey) -> Result<()> {
        let mut partitions = self.partitions.write().await;
        if let Some(rows) = partitions.get_mut(&key.partition) {
            rows.remove(&key.sort);
            if rows.is_empty() {
                partitions.remove(&key.partition);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(partition: &str, sort: &str) -> Record {
        Record::new(RecordKey::new(partition, sort)).with_attribute("name", sort)
    }

    #[tokio::test]
    async fn test_query_filters_by_prefix() {
        let store = InMemoryStore::new();
        store.put(record("p", "wishlist_1")).await.unwrap();
        store.put(record("p", "wishlist_2")).await.unwrap();
        store.put(record("p", "item_1")).await.unwrap();

        let records = store.query("p", "wishlist_").await.unwrap();
        assert_eq!(records.len(), 2);
        assert!(records.iter().all(|r| r.key.sort.starts_with("wishlist_")));
    }

    #[tokio::test]
    async fn test_query_with_empty_prefix_matches_partition() {
        let store = InMemoryStore::new();
        store.put(record("p", "wishlist_1")).await.unwrap();
        store.put(record("p", "item_1")).await.unwrap();
        store.put(record("other", "item_2")).await.unwrap();

        let records = store.query("p", "").await.unwrap();
        assert_eq!(records.len(), 2);
    }

    #[tokio::test]
    async fn test_query_is_ordered_by_sort_key() {
        let store = InMemoryStore::new();
        store.put(record("p", "item_b")).await.unwrap();
        store.put(record("p", "item_a")).await.unwrap();

        let records = store.query("p", "").await.unwrap();
        let sorts: Vec<&str> = records.iter().map(|r| r.key.sort.as_str()).collect();
        assert_eq!(sorts, vec!["item_a", "item_b"]);
    }

    #[tokio::test]
    async fn test_query_unknown_partition_is_empty() {
        let store = InMemoryStore::new();
        assert!(store.query("missing", "").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_query_by_index_finds_across_partitions() {
        let store = InMemoryStore::new();
        store.put(record("a@x.com", "wishlist_1")).await.unwrap();
        store.put(record("b@y.com", "wishlist_2")).await.unwrap();

        let found = store.query_by_index("wishlist_2").await.unwrap().unwrap();
        assert_eq!(found.key.partition, "b@y.com");

        assert_eq!(store.query_by_index("wishlist_3").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_put_overwrites() {
        let store = InMemoryStore::new();
        let key = RecordKey::new("p", "s");
        store
            .put(Record::new(key.clone()).with_attribute("name", "old"))
            .await
            .unwrap();
        store
            .put(Record::new(key).with_attribute("name", "new"))
            .await
            .unwrap();

        let records = store.query("p", "").await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].attribute("name"), Some("new"));
    }

    #[tokio::test]
    async fn test_update_merges_and_returns_record() {
        let store = InMemoryStore::new();
        let key = RecordKey::new("p", "s");
        store
            .put(
                Record::new(key.clone())
                    .with_attribute("description", "Book")
                    .with_attribute("url", "https://example.com"),
            )
            .await
            .unwrap();

        let merged = store
            .update(
                key,
                vec![
                    (
                        "description".to_string(),
                        AttributeChange::Set("Hardcover".to_string()),
                    ),
                    ("url".to_string(), AttributeChange::Remove),
                ],
            )
            .await
            .unwrap();

        assert_eq!(merged.attribute("description"), Some("Hardcover"));
        assert_eq!(merged.attribute("url"), None);
    }

    #[tokio::test]
    async fn test_update_missing_key_is_not_found() {
        let store = InMemoryStore::new();
        let result = store.update(RecordKey::new("p", "s"), Vec::new()).await;
        assert!(matches!(result, Err(RepositoryError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_delete_is_idempotent() {
        let store = InMemoryStore::new();
        let key = RecordKey::new("p", "s");
        store.put(Record::new(key.clone())).await.unwrap();

        store.delete(key.clone()).await.unwrap();
        store.delete(key).await.unwrap();

        assert!(store.query("p", "").await.unwrap().is_empty());
    }
}
