//! Key composition for the single-table layout.
//!
//! Pure functions for building partition and sort keys. Wishlists live
//! under their owner's partition; items live under the list's partition,
//! so the cascade delete and the item listing are single-partition
//! queries. All functions are sync and have no side effects.

/// Sort-key prefix for wishlist records.
pub const WISHLIST_PREFIX: &str = "wishlist_";

/// Sort-key prefix for item records.
pub const ITEM_PREFIX: &str = "item_";

/// Partition key for a wishlist: the owner identity.
///
/// Pattern: `<owner>`
pub fn list_partition(owner: &str) -> String {
    owner.to_string()
}

/// Sort key for a wishlist.
///
/// Pattern: `wishlist_<id>`
pub fn list_sort(id: &str) -> String {
    format!("{WISHLIST_PREFIX}{id}")
}

/// Partition key for the items of a wishlist.
///
/// Pattern: `wishlist_<list_id>`
pub fn item_partition(list_id: &str) -> String {
    format!("{WISHLIST_PREFIX}{list_id}")
}

/// Sort key for an item.
///
/// Pattern: `item_<id>`
pub fn item_sort(id: &str) -> String {
    format!("{ITEM_PREFIX}{id}")
}

/// Extracts the entity id from a prefixed sort key.
///
/// Ids are hex and never contain `_`, so splitting on the first
/// underscore is unambiguous.
pub fn id_from_sort(sort: &str) -> Option<&str> {
    sort.split_once('_').map(|(_, id)| id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_keys() {
        assert_eq!(list_partition("a@x.com"), "a@x.com");
        assert_eq!(list_sort("abc123"), "wishlist_abc123");
    }

    #[test]
    fn test_item_keys() {
        assert_eq!(item_partition("abc123"), "wishlist_abc123");
        assert_eq!(item_sort("def456"), "item_def456");
    }

    #[test]
    fn test_id_from_sort() {
        assert_eq!(id_from_sort("wishlist_abc123"), Some("abc123"));
        assert_eq!(id_from_sort("item_def456"), Some("def456"));
        assert_eq!(id_from_sort("no-underscore"), None);
    }

    #[test]
    fn test_prefixes() {
        assert!(list_sort("x").starts_with(WISHLIST_PREFIX));
        assert!(item_sort("x").starts_with(ITEM_PREFIX));
    }
}
