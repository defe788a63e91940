mod types;
mod validation;

pub use types::{new_resource_id, ItemDraft, Wishlist, WishlistItem};
pub use validation::{validate_item, validate_list_name};
