//! Request payload validation.
//!
//! Pure functions returning one human-readable message per violation.
//! An empty vec means the payload is valid.

use url::Url;

/// Validates a wishlist name. Required, non-empty.
pub fn validate_list_name(name: &str) -> Vec<String> {
    let mut errors = Vec::new();
    if name.trim().is_empty() {
        errors.push("\"name\" is not allowed to be empty".to_string());
    }
    errors
}

/// Validates the caller-supplied item fields.
///
/// `description` is required and non-empty; `url` must parse as an
/// absolute URI when present (an empty string counts as absent);
/// `price` is free-form and not validated.
pub fn validate_item(description: &str, url: Option<&str>) -> Vec<String> {
    let mut errors = Vec::new();

    if description.trim().is_empty() {
        errors.push("\"description\" is not allowed to be empty".to_string());
    }

    if let Some(url) = url.filter(|u| !u.is_empty()) {
        if Url::parse(url).is_err() {
            errors.push("\"url\" must be a valid uri".to_string());
        }
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_list_name() {
        assert!(validate_list_name("Birthday").is_empty());
    }

    #[test]
    fn test_empty_list_name() {
        let errors = validate_list_name("");
        assert_eq!(errors, vec!["\"name\" is not allowed to be empty"]);
    }

    #[test]
    fn test_whitespace_list_name() {
        assert_eq!(validate_list_name("   ").len(), 1);
    }

    #[test]
    fn test_valid_item() {
        assert!(validate_item("Book", Some("https://example.com/book")).is_empty());
    }

    #[test]
    fn test_item_without_optional_fields() {
        assert!(validate_item("Book", None).is_empty());
    }

    #[test]
    fn test_empty_description() {
        let errors = validate_item("", None);
        assert_eq!(errors, vec!["\"description\" is not allowed to be empty"]);
    }

    #[test]
    fn test_invalid_url() {
        let errors = validate_item("Book", Some("not a uri"));
        assert_eq!(errors, vec!["\"url\" must be a valid uri"]);
    }

    #[test]
    fn test_empty_url_counts_as_absent() {
        assert!(validate_item("Book", Some("")).is_empty());
    }

    #[test]
    fn test_multiple_violations() {
        let errors = validate_item("", Some("also not a uri"));
        assert_eq!(errors.len(), 2);
    }
}
