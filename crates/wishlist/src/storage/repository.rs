//! Repository implementation over a generic key-value store.
//!
//! `StoreRepository` composes keys, maps records to domain entities and
//! enforces the ownership rules. It is generic over the store so the
//! same logic runs against DynamoDB in production and the in-memory
//! store in tests.

use std::sync::Arc;

use async_trait::async_trait;

use wishlist_core::store::{AttributeChange, KeyValueStore, RecordKey};
use wishlist_core::storage::{ItemRepository, ListRepository, RepositoryError, Result};
use wishlist_core::wishlist::{ItemDraft, Wishlist, WishlistItem};

use super::keys;
use super::record::{
    item_to_record, list_to_record, record_to_item, record_to_list, ATTR_DESCRIPTION, ATTR_NAME,
    ATTR_PRICE, ATTR_URL,
};

/// Repository for wishlists and items over any `KeyValueStore`.
pub struct StoreRepository<S> {
    store: Arc<S>,
}

impl<S: KeyValueStore> StoreRepository<S> {
    /// Creates a new repository over the given store.
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Resolves a list through the index and verifies the caller owns it.
    ///
    /// Every item mutation and the cascade delete go through this check
    /// before any write.
    async fn check_owner(&self, list_id: &str, owner: &str) -> Result<Wishlist> {
        let list = self
            .get_list(list_id)
            .await?
            .ok_or_else(|| RepositoryError::NotFound {
                entity_type: "Wishlist",
                id: list_id.to_string(),
            })?;

        if list.owner != owner {
            return Err(RepositoryError::AccessDenied {
                entity_type: "Wishlist",
                id: list_id.to_string(),
            });
        }

        Ok(list)
    }
}

// ============================================================================
// ListRepository implementation
// ============================================================================

#[async_trait]
impl<S: KeyValueStore> ListRepository for StoreRepository<S> {
    async fn get_lists(&self, owner: &str) -> Result<Vec<Wishlist>> {
        let records = self
            .store
            .query(&keys::list_partition(owner), keys::WISHLIST_PREFIX)
            .await?;

        records.iter().map(record_to_list).collect()
    }

    async fn get_list(&self, id: &str) -> Result<Option<Wishlist>> {
        match self.store.query_by_index(&keys::list_sort(id)).await? {
            Some(record) => Ok(Some(record_to_list(&record)?)),
            None => Ok(None),
        }
    }

    async fn create_list(&self, name: &str, owner: &str) -> Result<Wishlist> {
        let list = Wishlist::new(name, owner);

        self.store.put(list_to_record(&list)).await?;

        Ok(list)
    }

    async fn update_list(&self, id: &str, name: &str, owner: &str) -> Result<Wishlist> {
        // The owner is part of the key: a caller that does not own the
        // list addresses a key that does not exist, and the conditional
        // update reports it as not found without touching stored state.
        let key = RecordKey::new(keys::list_partition(owner), keys::list_sort(id));
        let changes = vec![(
            ATTR_NAME.to_string(),
            AttributeChange::Set(name.to_string()),
        )];

        let record = self
            .store
            .update(key, changes)
            .await
            .map_err(|err| match err {
                RepositoryError::NotFound { .. } => RepositoryError::NotFound {
                    entity_type: "Wishlist",
                    id: id.to_string(),
                },
                other => other,
            })?;

        record_to_list(&record)
    }

    async fn delete_list(&self, id: &str, owner: &str) -> Result<()> {
        // The cascade must never run for a non-owner, so ownership is
        // resolved through the index before anything is deleted.
        self.check_owner(id, owner).await?;

        self.store
            .delete(RecordKey::new(
                keys::list_partition(owner),
                keys::list_sort(id),
            ))
            .await?;

        // Best-effort cascade: attempt every item, log failures, report
        // how many were left behind. No rollback.
        let items = self.store.query(&keys::item_partition(id), "").await?;
        let mut failed = 0usize;

        for record in items {
            if let Err(err) = self.store.delete(record.key.clone()).await {
                tracing::warn!(
                    list_id = %id,
                    sort_key = %record.key.sort,
                    error = %err,
                    "Failed to delete item during cascade"
                );
                failed += 1;
            }
        }

        if failed > 0 {
            return Err(RepositoryError::QueryFailed(format!(
                "cascade delete of wishlist {id} left {failed} item(s) behind"
            )));
        }

        Ok(())
    }
}

// ============================================================================
// ItemRepository implementation
// ============================================================================

#[async_trait]
impl<S: KeyValueStore> ItemRepository for StoreRepository<S> {
    async fn get_items(&self, list_id: &str) -> Result<Vec<WishlistItem>> {
        let records = self
            .store
            .query(&keys::item_partition(list_id), keys::ITEM_PREFIX)
            .await?;

        records.iter().map(record_to_item).collect()
    }

    async fn create_item(
        &self,
        list_id: &str,
        owner: &str,
        draft: ItemDraft,
    ) -> Result<WishlistItem> {
        self.check_owner(list_id, owner).await?;

        let item = WishlistItem::from_draft(draft);

        self.store.put(item_to_record(list_id, &item)).await?;

        Ok(item)
    }

    async fn update_item(
        &self,
        list_id: &str,
        item_id: &str,
        owner: &str,
        draft: ItemDraft,
    ) -> Result<WishlistItem> {
        self.check_owner(list_id, owner).await?;

        let key = RecordKey::new(keys::item_partition(list_id), keys::item_sort(item_id));

        // Description is always set; present optionals are set, absent
        // ones are removed outright so an update can clear a previously
        // stored attribute.
        let mut changes = vec![(
            ATTR_DESCRIPTION.to_string(),
            AttributeChange::Set(draft.description),
        )];
        changes.push(match draft.url {
            Some(url) => (ATTR_URL.to_string(), AttributeChange::Set(url)),
            None => (ATTR_URL.to_string(), AttributeChange::Remove),
        });
        changes.push(match draft.price {
            Some(price) => (ATTR_PRICE.to_string(), AttributeChange::Set(price)),
            None => (ATTR_PRICE.to_string(), AttributeChange::Remove),
        });

        let record = self
            .store
            .update(key, changes)
            .await
            .map_err(|err| match err {
                RepositoryError::NotFound { .. } => RepositoryError::NotFound {
                    entity_type: "Item",
                    id: item_id.to_string(),
                },
                other => other,
            })?;

        record_to_item(&record)
    }

    async fn delete_item(&self, list_id: &str, item_id: &str, owner: &str) -> Result<()> {
        self.check_owner(list_id, owner).await?;

        // Idempotent: deleting an absent item is not an error.
        self.store
            .delete(RecordKey::new(
                keys::item_partition(list_id),
                keys::item_sort(item_id),
            ))
            .await
    }
}
