use async_trait::async_trait;

use crate::wishlist::{ItemDraft, Wishlist, WishlistItem};

use super::Result;

/// Repository for wishlist operations.
///
/// Lists are keyed by their owner; `get_list` is the one lookup that
/// resolves a list by id alone, independent of the owner partition.
#[async_trait]
pub trait ListRepository: Send + Sync {
    /// Gets all wishlists owned by the given identity.
    async fn get_lists(&self, owner: &str) -> Result<Vec<Wishlist>>;

    /// Gets a wishlist by its id, whoever owns it.
    async fn get_list(&self, id: &str) -> Result<Option<Wishlist>>;

    /// Creates a new wishlist owned by the given identity.
    async fn create_list(&self, name: &str, owner: &str) -> Result<Wishlist>;

    /// Renames a wishlist. The owner is part of the storage key: a caller
    /// that does not own the list addresses a key that does not exist,
    /// which surfaces as `NotFound`, never as a silent no-op.
    async fn update_list(&self, id: &str, name: &str, owner: &str) -> Result<Wishlist>;

    /// Deletes a wishlist and cascades to all its items. The cascade is
    /// best-effort and non-atomic; see the implementation for the
    /// partial-failure policy.
    async fn delete_list(&self, id: &str, owner: &str) -> Result<()>;
}

/// Repository for wishlist item operations.
///
/// Every mutation resolves the parent list and compares its owner to the
/// caller before any write; a mismatch fails with `AccessDenied`.
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// Gets all items of a wishlist. An unknown list yields an empty vec.
    async fn get_items(&self, list_id: &str) -> Result<Vec<WishlistItem>>;

    /// Adds an item to a wishlist owned by the caller.
    async fn create_item(&self, list_id: &str, owner: &str, draft: ItemDraft)
        -> Result<WishlistItem>;

    /// Updates an item: `description` is always set; `url` and `price`
    /// are set when present in the draft and removed from the stored
    /// record when absent.
    async fn update_item(
        &self,
        list_id: &str,
        item_id: &str,
        owner: &str,
        draft: ItemDraft,
    ) -> Result<WishlistItem>;

    /// Deletes an item. Idempotent: deleting an already-deleted item
    /// succeeds.
    async fn delete_item(&self, list_id: &str, item_id: &str, owner: &str) -> Result<()>;
}
