use async_trait::async_trait;

use crate::storage::Result;

use super::{AttributeChange, Record, RecordKey};

/// A generic key-value table with a composite partition/sort key and a
/// secondary index keyed by sort key alone.
///
/// No retries are performed at this layer; a transient failure from the
/// underlying store propagates to the caller.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Returns every record in the partition whose sort key starts with
    /// the given prefix, ordered by sort key. An empty prefix matches the
    /// whole partition; no matches yield an empty vec.
    async fn query(&self, partition: &str, sort_prefix: &str) -> Result<Vec<Record>>;

    /// Point lookup on the secondary index: the first record whose sort
    /// key equals the given value, regardless of partition.
    async fn query_by_index(&self, sort_key: &str) -> Result<Option<Record>>;

    /// Writes a record, overwriting any existing record with the same
    /// key. Idempotent.
    async fn put(&self, record: Record) -> Result<()>;

    /// Applies a partial update to an existing record and returns the
    /// merged result. Updating a key that does not exist fails with
    /// `RepositoryError::NotFound`; this is never an upsert.
    async fn update(
        &self,
        key: RecordKey,
        changes: Vec<(String, AttributeChange)>,
    ) -> Result<Record>;

    /// Deletes a record. Deleting an absent key is not an error.
    async fn delete(&self, key: RecordKey) -> Result<()>;
}
