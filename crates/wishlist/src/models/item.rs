use serde::Deserialize;

use wishlist_core::wishlist::{validate_item, ItemDraft};

/// Request payload for creating or updating an item.
#[derive(Debug, Deserialize)]
pub struct ItemPayload {
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub price: Option<String>,
}

impl ItemPayload {
    /// Validates the payload, returning one message per violation.
    pub fn validate(&self) -> Vec<String> {
        validate_item(&self.description, self.url.as_deref())
    }

    /// Converts the payload into a draft, treating empty strings as
    /// absent values.
    pub fn into_draft(self) -> ItemDraft {
        ItemDraft::new(self.description, self.url, self.price)
    }
}
