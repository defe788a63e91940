use serde::Deserialize;

use wishlist_core::wishlist::validate_list_name;

/// Request payload for creating or renaming a wishlist.
///
/// `name` defaults to empty so a missing field reaches validation and
/// yields a 400 with a message instead of a deserialization failure.
#[derive(Debug, Deserialize)]
pub struct ListPayload {
    #[serde(default)]
    pub name: String,
}

impl ListPayload {
    /// Validates the payload, returning one message per violation.
    pub fn validate(&self) -> Vec<String> {
        validate_list_name(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_payload() {
        let payload: ListPayload = serde_json::from_str(r#"{"name":"Birthday"}"#).unwrap();
        assert!(payload.validate().is_empty());
    }

    #[test]
    fn test_missing_name_fails_validation() {
        let payload: ListPayload = serde_json::from_str("{}").unwrap();
        assert_eq!(payload.validate().len(), 1);
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let payload: ListPayload =
            serde_json::from_str(r#"{"name":"Birthday","extra":true}"#).unwrap();
        assert!(payload.validate().is_empty());
    }
}
