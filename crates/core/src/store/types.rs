//! Neutral record representation for the key-value store.
//!
//! Backends translate these types to and from their native attribute
//! representation; everything above the store works in terms of them.

use std::collections::HashMap;

/// Composite key addressing a single record.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RecordKey {
    /// Primary grouping key; related records share a partition.
    pub partition: String,
    /// Orders and distinguishes records within a partition.
    pub sort: String,
}

impl RecordKey {
    /// Creates a key from its partition and sort components.
    pub fn new(partition: impl Into<String>, sort: impl Into<String>) -> Self {
        Self {
            partition: partition.into(),
            sort: sort.into(),
        }
    }
}

/// A stored record: a key plus a flat map of string attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub key: RecordKey,
    pub attributes: HashMap<String, String>,
}

impl Record {
    /// Creates an empty record under the given key.
    pub fn new(key: RecordKey) -> Self {
        Self {
            key,
            attributes: HashMap::new(),
        }
    }

    /// Adds an attribute, builder-style.
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// Looks up an attribute by name.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }
}

/// A single entry of a partial update: set an attribute to a new value,
/// or remove it from the record outright.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttributeChange {
    Set(String),
    Remove,
}
