//! Record conversion between domain entities and the key-value layout.
//!
//! Pure functions, testable without any store. Optional item attributes
//! are written only when present: an absent attribute is distinct from
//! an empty string and reads back as `None`.

use wishlist_core::store::{Record, RecordKey};
use wishlist_core::storage::{RepositoryError, Result};
use wishlist_core::wishlist::{Wishlist, WishlistItem};

use super::keys;

pub const ATTR_NAME: &str = "name";
pub const ATTR_DESCRIPTION: &str = "description";
pub const ATTR_URL: &str = "url";
pub const ATTR_PRICE: &str = "price";

/// Convert a Wishlist to its stored record.
pub fn list_to_record(list: &Wishlist) -> Record {
    Record::new(RecordKey::new(
        keys::list_partition(&list.owner),
        keys::list_sort(&list.id),
    ))
    .with_attribute(ATTR_NAME, list.name.clone())
}

/// Convert a stored record back to a Wishlist.
///
/// The id comes from the sort key and the owner from the partition key;
/// only the name is a plain attribute.
pub fn record_to_list(record: &Record) -> Result<Wishlist> {
    let id = keys::id_from_sort(&record.key.sort).ok_or_else(|| {
        RepositoryError::InvalidData(format!("malformed wishlist sort key: {}", record.key.sort))
    })?;

    Ok(Wishlist {
        id: id.to_string(),
        name: get_attribute(record, ATTR_NAME)?,
        owner: record.key.partition.clone(),
    })
}

/// Convert a WishlistItem to its stored record.
pub fn item_to_record(list_id: &str, item: &WishlistItem) -> Record {
    let mut record = Record::new(RecordKey::new(
        keys::item_partition(list_id),
        keys::item_sort(&item.id),
    ))
    .with_attribute(ATTR_DESCRIPTION, item.description.clone());

    if let Some(url) = &item.url {
        record = record.with_attribute(ATTR_URL, url.clone());
    }
    if let Some(price) = &item.price {
        record = record.with_attribute(ATTR_PRICE, price.clone());
    }

    record
}

/// Convert a stored record back to a WishlistItem, tolerating missing
/// optional attributes.
pub fn record_to_item(record: &Record) -> Result<WishlistItem> {
    let id = keys::id_from_sort(&record.key.sort).ok_or_else(|| {
        RepositoryError::InvalidData(format!("malformed item sort key: {}", record.key.sort))
    })?;

    Ok(WishlistItem {
        id: id.to_string(),
        description: get_attribute(record, ATTR_DESCRIPTION)?,
        url: record.attribute(ATTR_URL).map(str::to_string),
        price: record.attribute(ATTR_PRICE).map(str::to_string),
    })
}

/// Get a required attribute.
fn get_attribute(record: &Record, name: &str) -> Result<String> {
    record
        .attribute(name)
        .map(str::to_string)
        .ok_or_else(|| RepositoryError::InvalidData(format!("Missing or invalid field: {name}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use wishlist_core::wishlist::{ItemDraft, Wishlist, WishlistItem};

    fn sample_list() -> Wishlist {
        Wishlist {
            id: "0f8fad5bd9cb469fa165b7ac009d5f81".to_string(),
            name: "Birthday".to_string(),
            owner: "a@x.com".to_string(),
        }
    }

    fn sample_item() -> WishlistItem {
        WishlistItem {
            id: "7c9e6679742540de944be07fc1f90ae7".to_string(),
            description: "Book".to_string(),
            url: Some("https://example.com/book".to_string()),
            price: Some("19.99".to_string()),
        }
    }

    #[test]
    fn test_list_round_trip() {
        let list = sample_list();
        let record = list_to_record(&list);
        let parsed = record_to_list(&record).unwrap();

        assert_eq!(parsed, list);
    }

    #[test]
    fn test_list_record_has_correct_keys() {
        let record = list_to_record(&sample_list());

        assert_eq!(record.key.partition, "a@x.com");
        assert_eq!(
            record.key.sort,
            "wishlist_0f8fad5bd9cb469fa165b7ac009d5f81"
        );
        assert_eq!(record.attribute("name"), Some("Birthday"));
    }

    #[test]
    fn test_item_round_trip() {
        let item = sample_item();
        let record = item_to_record("0f8fad5bd9cb469fa165b7ac009d5f81", &item);
        let parsed = record_to_item(&record).unwrap();

        assert_eq!(parsed, item);
    }

    #[test]
    fn test_item_record_has_correct_keys() {
        let record = item_to_record("0f8fad5bd9cb469fa165b7ac009d5f81", &sample_item());

        assert_eq!(
            record.key.partition,
            "wishlist_0f8fad5bd9cb469fa165b7ac009d5f81"
        );
        assert_eq!(record.key.sort, "item_7c9e6679742540de944be07fc1f90ae7");
    }

    #[test]
    fn test_absent_optionals_are_not_written() {
        let item = WishlistItem::from_draft(ItemDraft::new("Book", None, None));
        let record = item_to_record("list1", &item);

        assert_eq!(record.attribute(ATTR_URL), None);
        assert_eq!(record.attribute(ATTR_PRICE), None);

        let parsed = record_to_item(&record).unwrap();
        assert_eq!(parsed.url, None);
        assert_eq!(parsed.price, None);
    }

    #[test]
    fn test_record_without_description_is_invalid() {
        let record = Record::new(RecordKey::new("wishlist_l", "item_i"));
        assert!(matches!(
            record_to_item(&record),
            Err(RepositoryError::InvalidData(_))
        ));
    }

    #[test]
    fn test_malformed_sort_key_is_invalid() {
        let record = Record::new(RecordKey::new("a@x.com", "garbage")).with_attribute("name", "x");
        assert!(matches!(
            record_to_list(&record),
            Err(RepositoryError::InvalidData(_))
        ));
    }
}
