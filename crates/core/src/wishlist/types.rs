use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Generates an opaque 32-character hex identifier.
///
/// Derived from a random UUID; content-independent, not content-addressed.
/// No uniqueness check is performed against existing ids: the id space
/// makes a collision negligible.
pub fn new_resource_id() -> String {
    Uuid::new_v4().simple().to_string()
}

/// A wishlist owned by a single user.
///
/// The owner is the authenticated identity (email) that created the list
/// and is immutable after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wishlist {
    pub id: String,
    pub name: String,
    pub owner: String,
}

impl Wishlist {
    /// Creates a new wishlist with a freshly generated id.
    pub fn new(name: impl Into<String>, owner: impl Into<String>) -> Self {
        Self {
            id: new_resource_id(),
            name: name.into(),
            owner: owner.into(),
        }
    }
}

/// A single item on a wishlist.
///
/// `url` and `price` are genuinely optional: an absent value serializes
/// as `null` and is never conflated with an empty string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WishlistItem {
    pub id: String,
    pub description: String,
    pub url: Option<String>,
    pub price: Option<String>,
}

impl WishlistItem {
    /// Creates a new item from a draft, generating a fresh id.
    pub fn from_draft(draft: ItemDraft) -> Self {
        Self {
            id: new_resource_id(),
            description: draft.description,
            url: draft.url,
            price: draft.price,
        }
    }
}

/// The caller-supplied fields of an item, before it has an id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemDraft {
    pub description: String,
    pub url: Option<String>,
    pub price: Option<String>,
}

impl ItemDraft {
    /// Creates a draft, treating empty strings as absent values.
    pub fn new(description: impl Into<String>, url: Option<String>, price: Option<String>) -> Self {
        Self {
            description: description.into(),
            url: url.filter(|s| !s.is_empty()),
            price: price.filter(|s| !s.is_empty()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_id_shape() {
        let id = new_resource_id();
        assert_eq!(id.len(), 32);
        assert!(id.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_resource_ids_are_distinct() {
        assert_ne!(new_resource_id(), new_resource_id());
    }

    #[test]
    fn test_wishlist_new() {
        let list = Wishlist::new("Birthday", "a@x.com");
        assert_eq!(list.name, "Birthday");
        assert_eq!(list.owner, "a@x.com");
        assert_eq!(list.id.len(), 32);
    }

    #[test]
    fn test_item_draft_treats_empty_strings_as_absent() {
        let draft = ItemDraft::new("Book", Some(String::new()), Some(String::new()));
        assert_eq!(draft.url, None);
        assert_eq!(draft.price, None);
    }

    #[test]
    fn test_item_draft_keeps_present_values() {
        let draft = ItemDraft::new(
            "Book",
            Some("https://example.com/book".to_string()),
            Some("19.99".to_string()),
        );
        assert_eq!(draft.url.as_deref(), Some("https://example.com/book"));
        assert_eq!(draft.price.as_deref(), Some("19.99"));
    }

    #[test]
    fn test_item_from_draft() {
        let item = WishlistItem::from_draft(ItemDraft::new("Book", None, Some("Any".to_string())));
        assert_eq!(item.description, "Book");
        assert_eq!(item.url, None);
        assert_eq!(item.price.as_deref(), Some("Any"));
        assert_eq!(item.id.len(), 32);
    }
}
