//! DynamoDB implementation of the key-value store.

use std::collections::HashMap;

use async_trait::async_trait;
use aws_sdk_dynamodb::types::{AttributeValue, ReturnValue};
use aws_sdk_dynamodb::Client;

use wishlist_core::store::{AttributeChange, KeyValueStore, Record, RecordKey};
use wishlist_core::storage::{RepositoryError, Result};

use super::error::{map_delete_error, map_put_error, map_query_error, map_update_error};

/// Attribute names of the table's composite primary key.
const PK: &str = "pk";
const SK: &str = "sk";

/// Key-value store backed by a single DynamoDB table.
///
/// The table uses `pk`/`sk` as its composite primary key; the secondary
/// index resolves a record by `sk` alone.
pub struct DynamoDbStore {
    client: Client,
    table_name: String,
    index_name: String,
}

impl DynamoDbStore {
    /// Creates a new store over the given client, table and index.
    pub fn new(
        client: Client,
        table_name: impl Into<String>,
        index_name: impl Into<String>,
    ) -> Self {
        Self {
            client,
            table_name: table_name.into(),
            index_name: index_name.into(),
        }
    }
}

#[async_trait]
impl KeyValueStore for DynamoDbStore {
    async fn query(&self, partition: &str, sort_prefix: &str) -> Result<Vec<Record>> {
        let mut request = self
            .client
            .query()
            .table_name(&self.table_name)
            .expression_attribute_values(":pk", AttributeValue::S(partition.to_string()));

        if sort_prefix.is_empty() {
            request = request.key_condition_expression("pk = :pk");
        } else {
            request = request
                .key_condition_expression("pk = :pk AND begins_with(sk, :prefix)")
                .expression_attribute_values(":prefix", AttributeValue::S(sort_prefix.to_string()));
        }

        let result = request.send().await.map_err(map_query_error)?;

        let items = result.items.unwrap_or_default();
        items.iter().map(item_to_record).collect()
    }

    async fn query_by_index(&self, sort_key: &str) -> Result<Option<Record>> {
        let result = self
            .client
            .query()
            .table_name(&self.table_name)
            .index_name(&self.index_name)
            .key_condition_expression("sk = :sk")
            .expression_attribute_values(":sk", AttributeValue::S(sort_key.to_string()))
            .send()
            .await
            .map_err(map_query_error)?;

        let items = result.items.unwrap_or_default();
        match items.first() {
            Some(item) => Ok(Some(item_to_record(item)?)),
            None => Ok(None),
        }
    }

    async fn put(&self, record: Record) -> Result<()> {
        let item = record_to_item(&record);

        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(item))
            .send()
            .await
            .map_err(|e| map_put_error(e, &record.key))?;

        Ok(())
    }

    async fn update(
        &self,
        key: RecordKey,
        changes: Vec<(String, AttributeChange)>,
    ) -> Result<Record> {
        let (expression, names, values) = build_update_expression(&changes);

        let mut request = self
            .client
            .update_item()
            .table_name(&self.table_name)
            .key(PK, AttributeValue::S(key.partition.clone()))
            .key(SK, AttributeValue::S(key.sort.clone()))
            .update_expression(expression)
            .condition_expression("attribute_exists(pk)")
            .return_values(ReturnValue::AllNew);

        for (placeholder, name) in names {
            request = request.expression_attribute_names(placeholder, name);
        }
        for (placeholder, value) in values {
            request = request.expression_attribute_values(placeholder, AttributeValue::S(value));
        }

        let result = request.send().await.map_err(|e| map_update_error(e, &key))?;

        // ALL_NEW returns the full merged item, key attributes included.
        let attributes = result.attributes.unwrap_or_default();
        item_to_record(&attributes)
    }

    async fn delete(&self, key: RecordKey) -> Result<()> {
        self.client
            .delete_item()
            .table_name(&self.table_name)
            .key(PK, AttributeValue::S(key.partition.clone()))
            .key(SK, AttributeValue::S(key.sort.clone()))
            .send()
            .await
            .map_err(map_delete_error)?;

        Ok(())
    }
}

// ============================================================================
// Item conversions and expression building
// ============================================================================

/// Convert a DynamoDB item to a neutral record. Non-string attributes
/// are skipped; this table only ever holds strings.
fn item_to_record(item: &HashMap<String, AttributeValue>) -> Result<Record> {
    let partition = get_key_attribute(item, PK)?;
    let sort = get_key_attribute(item, SK)?;

    let mut record = Record::new(RecordKey::new(partition, sort));
    for (name, value) in item {
        if name == PK || name == SK {
            continue;
        }
        if let Ok(s) = value.as_s() {
            record = record.with_attribute(name.clone(), s.clone());
        }
    }

    Ok(record)
}

/// Convert a neutral record to a DynamoDB item.
fn record_to_item(record: &Record) -> HashMap<String, AttributeValue> {
    let mut item = HashMap::new();

    item.insert(
        PK.to_string(),
        AttributeValue::S(record.key.partition.clone()),
    );
    item.insert(SK.to_string(), AttributeValue::S(record.key.sort.clone()));

    for (name, value) in &record.attributes {
        item.insert(name.clone(), AttributeValue::S(value.clone()));
    }

    item
}

fn get_key_attribute(item: &HashMap<String, AttributeValue>, key: &str) -> Result<String> {
    item.get(key)
        .and_then(|v| v.as_s().ok())
        .map(|s| s.to_string())
        .ok_or_else(|| {
            RepositoryError::InvalidData(format!("Missing or invalid key attribute: {key}"))
        })
}

/// Builds `SET`/`REMOVE` clauses with placeholder names for every
/// attribute in the change set. Attribute names go through placeholders
/// because `name` and `url` collide with DynamoDB reserved words.
fn build_update_expression(
    changes: &[(String, AttributeChange)],
) -> (String, Vec<(String, String)>, Vec<(String, String)>) {
    let mut sets = Vec::new();
    let mut removes = Vec::new();
    let mut names = Vec::new();
    let mut values = Vec::new();

    for (index, (name, change)) in changes.iter().enumerate() {
        let name_placeholder = format!("#a{index}");
        names.push((name_placeholder.clone(), name.clone()));

        match change {
            AttributeChange::Set(value) => {
                let value_placeholder = format!(":v{index}");
                sets.push(format!("{name_placeholder} = {value_placeholder}"));
                values.push((value_placeholder, value.clone()));
            }
            AttributeChange::Remove => removes.push(name_placeholder),
        }
    }

    let mut expression = String::new();
    if !sets.is_empty() {
        expression.push_str("SET ");
        expression.push_str(&sets.join(", "));
    }
    if !removes.is_empty() {
        if !expression.is_empty() {
            expression.push(' ');
        }
        expression.push_str("REMOVE ");
        expression.push_str(&removes.join(", "));
    }

    (expression, names, values)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_round_trip() {
        let record = Record::new(RecordKey::new("a@x.com", "wishlist_1"))
            .with_attribute("name", "Birthday");

        let item = record_to_item(&record);
        assert_eq!(item.get(PK).unwrap().as_s().unwrap(), "a@x.com");
        assert_eq!(item.get(SK).unwrap().as_s().unwrap(), "wishlist_1");

        let parsed = item_to_record(&item).unwrap();
        assert_eq!(parsed, record);
    }

    #[test]
    fn test_item_without_keys_is_invalid() {
        let item = HashMap::new();
        assert!(matches!(
            item_to_record(&item),
            Err(RepositoryError::InvalidData(_))
        ));
    }

    #[test]
    fn test_update_expression_set_only() {
        let changes = vec![(
            "name".to_string(),
            AttributeChange::Set("Birthday".to_string()),
        )];

        let (expression, names, values) = build_update_expression(&changes);

        assert_eq!(expression, "SET #a0 = :v0");
        assert_eq!(names, vec![("#a0".to_string(), "name".to_string())]);
        assert_eq!(values, vec![(":v0".to_string(), "Birthday".to_string())]);
    }

    #[test]
    fn test_update_expression_set_and_remove() {
        let changes = vec![
            (
                "description".to_string(),
                AttributeChange::Set("Book".to_string()),
            ),
            ("url".to_string(), AttributeChange::Remove),
            (
                "price".to_string(),
                AttributeChange::Set("19.99".to_string()),
            ),
        ];

        let (expression, names, values) = build_update_expression(&changes);

        assert_eq!(expression, "SET #a0 = :v0, #a2 = :v2 REMOVE #a1");
        assert_eq!(names.len(), 3);
        assert_eq!(values.len(), 2);
    }

    #[test]
    fn test_update_expression_remove_only() {
        let changes = vec![("url".to_string(), AttributeChange::Remove)];

        let (expression, _, values) = build_update_expression(&changes);

        assert_eq!(expression, "REMOVE #a0");
        assert!(values.is_empty());
    }
}
