/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Whole-record serialization: items, keys, update action maps, and
//! conditional-write preconditions.
//!
//! Every operation here is a pure function of its schema and record
//! arguments; output maps are freshly allocated per call and nothing is
//! cached, so the functions are safe to call concurrently.

use crate::codec;
use crate::error::SerializerError;
use crate::schema::Schema;
use crate::update::{AttributeAction, AttributeUpdate, UpdateRecord, UpdateValue};
use aws_sdk_dynamodb_item_types::{AttributeValue, Value};
use std::collections::HashMap;

/// A wire-level item: attribute name → encoded value.
pub type Item = HashMap<String, AttributeValue>;

/// An application-level record: attribute name → value.
pub type Record = HashMap<String, Value>;

/// Options for [`serialize_item`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SerializeOptions {
    convert_sets: bool,
    return_nulls: bool,
}

impl SerializeOptions {
    /// Creates the default options: sets encode as sets, null encodes are
    /// omitted.
    pub fn new() -> Self {
        Self::default()
    }

    /// Encode set-typed attributes as their scalar counterpart. Used when
    /// the value is known to be singular, e.g. a key condition on a
    /// secondary index over a set member.
    pub fn convert_sets(mut self, convert_sets: bool) -> Self {
        self.convert_sets = convert_sets;
        self
    }

    /// Include attributes whose encoding produced no wire value, as explicit
    /// nulls.
    pub fn return_nulls(mut self, return_nulls: bool) -> Self {
        self.return_nulls = return_nulls;
        self
    }
}

/// An attribute equality precondition for conditional writes.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpectedAttributeValue {
    value: AttributeValue,
}

impl ExpectedAttributeValue {
    /// Returns the value the attribute is expected to hold.
    pub fn value(&self) -> &AttributeValue {
        &self.value
    }
}

/// Builds the primary-key item for bare key values.
///
/// The `range_value` is ignored when the schema declares no range key.
pub fn build_key(
    schema: &Schema,
    hash_value: impl Into<Value>,
    range_value: Option<Value>,
) -> Result<Item, SerializerError> {
    let mut key = Record::new();
    key.insert(schema.hash_key().to_string(), hash_value.into());
    if let (Some(range_key), Some(range_value)) = (schema.range_key(), range_value) {
        key.insert(range_key.to_string(), range_value);
    }
    serialize_item(schema, &key, SerializeOptions::default())
}

/// Builds the primary-key item from a record-shaped value, extracting only
/// the key attributes by their schema-declared names.
pub fn build_key_from_item(schema: &Schema, item: &Record) -> Result<Item, SerializerError> {
    let mut key = Record::new();
    if let Some(hash_value) = item.get(schema.hash_key()) {
        key.insert(schema.hash_key().to_string(), hash_value.clone());
    }
    if let Some(range_key) = schema.range_key() {
        if let Some(range_value) = item.get(range_key) {
            key.insert(range_key.to_string(), range_value.clone());
        }
    }
    serialize_item(schema, &key, SerializeOptions::default())
}

/// Encodes every schema-declared attribute present in the record.
///
/// Attributes absent from the record, or present in the record but not
/// declared in the schema, are omitted entirely. Attributes whose encoding
/// produced no wire value are omitted too, unless
/// [`return_nulls`](SerializeOptions::return_nulls) asks for explicit nulls.
pub fn serialize_item(
    schema: &Schema,
    item: &Record,
    options: SerializeOptions,
) -> Result<Item, SerializerError> {
    let mut serialized = Item::new();
    for (name, descriptor) in schema.attrs() {
        let Some(value) = item.get(name) else {
            continue;
        };
        let encoded = codec::serialize_attribute(value, descriptor, options.convert_sets)
            .map_err(|err| err.for_attribute(name))?;
        match encoded {
            Some(encoded) => {
                serialized.insert(name.to_string(), encoded);
            }
            None if options.return_nulls => {
                serialized.insert(name.to_string(), AttributeValue::Null(true));
            }
            None => {}
        }
    }
    Ok(serialized)
}

/// Encodes the record as equality preconditions for a conditional write:
/// every encoded attribute is wrapped as an expected value.
pub fn serialize_expected(
    schema: &Schema,
    item: &Record,
) -> Result<HashMap<String, ExpectedAttributeValue>, SerializerError> {
    let serialized = serialize_item(schema, item, SerializeOptions::default())?;
    Ok(serialized
        .into_iter()
        .map(|(name, value)| (name, ExpectedAttributeValue { value }))
        .collect())
}

/// Builds the attribute-updates action map for a partial update.
///
/// Key attributes are never mutable through an update and are excluded even
/// when present in the record. Plain values are written with the
/// caller-supplied default `action`; the other [`UpdateValue`] directives
/// carry their own.
pub fn serialize_item_for_update(
    schema: &Schema,
    action: AttributeAction,
    item: &UpdateRecord,
) -> Result<HashMap<String, AttributeUpdate>, SerializerError> {
    let mut updates = HashMap::new();
    for (name, descriptor) in schema.attrs() {
        if schema.is_key_attribute(name) {
            if item.contains_key(name) {
                tracing::trace!(attribute = name, "ignoring key attribute in update record");
            }
            continue;
        }
        let Some(directive) = item.get(name) else {
            continue;
        };
        let update = match directive {
            UpdateValue::Delete | UpdateValue::Value(Value::Null) => {
                AttributeUpdate::new(AttributeAction::Delete, None)
            }
            UpdateValue::Add(value) => AttributeUpdate::new(
                AttributeAction::Add,
                codec::serialize_attribute(value, descriptor, false)
                    .map_err(|err| err.for_attribute(name))?,
            ),
            UpdateValue::DeleteElements(value) => AttributeUpdate::new(
                AttributeAction::Delete,
                codec::serialize_attribute(value, descriptor, false)
                    .map_err(|err| err.for_attribute(name))?,
            ),
            UpdateValue::Value(value) => AttributeUpdate::new(
                action,
                codec::serialize_attribute(value, descriptor, false)
                    .map_err(|err| err.for_attribute(name))?,
            ),
        };
        updates.insert(name.to_string(), update);
    }
    Ok(updates)
}

/// Decodes every schema-declared attribute of a wire item.
///
/// Wire attributes the item does not carry decode to null through the
/// codec's tolerance rules, so the result always holds every declared
/// attribute. An empty wire item yields `None`.
pub fn deserialize_item(schema: &Schema, item: &Item) -> Result<Option<Record>, SerializerError> {
    if item.is_empty() {
        tracing::trace!("empty wire item; nothing to decode");
        return Ok(None);
    }
    let mut record = Record::new();
    for (name, descriptor) in schema.attrs() {
        let value = codec::deserialize_attribute(item.get(name), descriptor)
            .map_err(|err| err.for_attribute(name))?;
        record.insert(name.to_string(), value);
    }
    Ok(Some(record))
}

/// Decodes only the key attributes of a wire item.
///
/// Used on the evaluated-key cursors returned by range and scan operations,
/// which carry just the primary key.
pub fn deserialize_keys(schema: &Schema, item: &Item) -> Result<Record, SerializerError> {
    let mut keys = Record::new();
    decode_key_attribute(schema, item, schema.hash_key(), &mut keys)?;
    if let Some(range_key) = schema.range_key() {
        decode_key_attribute(schema, item, range_key, &mut keys)?;
    }
    Ok(keys)
}

// A key attribute with no schema descriptor decodes to null rather than
// faulting, mirroring the tolerance of the attribute codec.
fn decode_key_attribute(
    schema: &Schema,
    item: &Item,
    name: &str,
    into: &mut Record,
) -> Result<(), SerializerError> {
    let value = match schema.attr(name) {
        Some(descriptor) => codec::deserialize_attribute(item.get(name), descriptor)
            .map_err(|err| err.for_attribute(name))?,
        None => Value::Null,
    };
    into.insert(name.to_string(), value);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::AttributeType;
    use aws_sdk_dynamodb_item_types::DateTime;

    fn person_schema() -> Schema {
        Schema::builder()
            .hash_key("id")
            .attr("id", AttributeType::String)
            .attr("age", AttributeType::Number)
            .attr("scores", AttributeType::NumberSet)
            .attr("names", AttributeType::StringSet)
            .attr("active", AttributeType::Boolean)
            .attr("created", AttributeType::Date)
            .build()
    }

    fn log_schema() -> Schema {
        Schema::builder()
            .hash_key("name")
            .range_key("ts")
            .attr("name", AttributeType::String)
            .attr("ts", AttributeType::Number)
            .attr("line", AttributeType::String)
            .build()
    }

    fn record(entries: Vec<(&str, Value)>) -> Record {
        entries
            .into_iter()
            .map(|(name, value)| (name.to_string(), value))
            .collect()
    }

    #[test]
    fn serialize_item_encodes_declared_attributes() {
        let item = serialize_item(
            &person_schema(),
            &record(vec![("id", Value::from("a1")), ("age", Value::from(30))]),
            SerializeOptions::default(),
        )
        .unwrap();

        assert_eq!(item.len(), 2);
        assert_eq!(item["id"], AttributeValue::S("a1".to_string()));
        assert_eq!(item["age"], AttributeValue::N("30".to_string()));
    }

    #[test]
    fn serialize_item_omits_undeclared_attributes() {
        let item = serialize_item(
            &person_schema(),
            &record(vec![
                ("id", Value::from("a1")),
                ("nickname", Value::from("ace")),
            ]),
            SerializeOptions::default(),
        )
        .unwrap();

        assert!(!item.contains_key("nickname"));
        assert_eq!(item.len(), 1);
    }

    #[test]
    fn serialize_item_null_handling() {
        let input = record(vec![("id", Value::from("a1")), ("age", Value::Null)]);

        let item = serialize_item(&person_schema(), &input, SerializeOptions::default()).unwrap();
        assert!(!item.contains_key("age"));

        let item = serialize_item(
            &person_schema(),
            &input,
            SerializeOptions::new().return_nulls(true),
        )
        .unwrap();
        assert_eq!(item["age"], AttributeValue::Null(true));
    }

    #[test]
    fn serialize_item_convert_sets() {
        let item = serialize_item(
            &person_schema(),
            &record(vec![("names", Value::from("x"))]),
            SerializeOptions::new().convert_sets(true),
        )
        .unwrap();
        assert_eq!(item["names"], AttributeValue::S("x".to_string()));
    }

    #[test]
    fn serialize_item_reports_unsupported_types() {
        let schema = Schema::builder()
            .hash_key("id")
            .attr("id", AttributeType::String)
            .attr("payload", AttributeType::from("Binary"))
            .build();
        let err = serialize_item(
            &schema,
            &record(vec![("payload", Value::from("x"))]),
            SerializeOptions::default(),
        )
        .unwrap_err();
        assert_eq!(err.attribute(), Some("payload"));
    }

    #[test]
    fn serialize_expected_wraps_encoded_values() {
        let expected =
            serialize_expected(&person_schema(), &record(vec![("age", Value::from(30))])).unwrap();
        assert_eq!(expected.len(), 1);
        assert_eq!(
            expected["age"].value(),
            &AttributeValue::N("30".to_string())
        );
    }

    #[test]
    fn build_key_with_bare_values() {
        let key = build_key(&log_schema(), "web", Some(Value::from(123))).unwrap();
        assert_eq!(key.len(), 2);
        assert_eq!(key["name"], AttributeValue::S("web".to_string()));
        assert_eq!(key["ts"], AttributeValue::N("123".to_string()));
    }

    #[test]
    fn build_key_ignores_range_value_without_range_key() {
        let key = build_key(&person_schema(), "a1", Some(Value::from(123))).unwrap();
        assert_eq!(key.len(), 1);
        assert_eq!(key["id"], AttributeValue::S("a1".to_string()));
    }

    #[test]
    fn build_key_from_item_extracts_keys_only() {
        let key = build_key_from_item(
            &log_schema(),
            &record(vec![
                ("name", Value::from("web")),
                ("ts", Value::from(123)),
                ("line", Value::from("GET /")),
            ]),
        )
        .unwrap();
        assert_eq!(key.len(), 2);
        assert!(key.contains_key("name"));
        assert!(key.contains_key("ts"));
        assert!(!key.contains_key("line"));
    }

    #[test]
    fn update_excludes_key_attributes() {
        let updates = serialize_item_for_update(
            &log_schema(),
            AttributeAction::Put,
            &record(vec![
                ("name", Value::from("web")),
                ("ts", Value::from(123)),
                ("line", Value::from("GET /")),
            ])
            .into_iter()
            .map(|(name, value)| (name, UpdateValue::Value(value)))
            .collect(),
        )
        .unwrap();

        assert_eq!(updates.len(), 1);
        let update = &updates["line"];
        assert_eq!(update.action(), AttributeAction::Put);
        assert_eq!(update.value(), Some(&AttributeValue::S("GET /".to_string())));
    }

    #[test]
    fn update_null_and_delete_directives() {
        let mut item = UpdateRecord::new();
        item.insert("age".to_string(), UpdateValue::Value(Value::Null));
        item.insert("names".to_string(), UpdateValue::Delete);

        let updates =
            serialize_item_for_update(&person_schema(), AttributeAction::Put, &item).unwrap();
        for name in ["age", "names"] {
            let update = &updates[name];
            assert_eq!(update.action(), AttributeAction::Delete);
            assert_eq!(update.value(), None);
        }
    }

    #[test]
    fn update_add_and_delete_elements_directives() {
        let mut item = UpdateRecord::new();
        item.insert("age".to_string(), UpdateValue::Add(Value::from(5)));
        item.insert(
            "names".to_string(),
            UpdateValue::DeleteElements(Value::from(vec!["old"])),
        );

        let updates =
            serialize_item_for_update(&person_schema(), AttributeAction::Put, &item).unwrap();

        let add = &updates["age"];
        assert_eq!(add.action(), AttributeAction::Add);
        assert_eq!(add.value(), Some(&AttributeValue::N("5".to_string())));

        let del = &updates["names"];
        assert_eq!(del.action(), AttributeAction::Delete);
        assert_eq!(
            del.value(),
            Some(&AttributeValue::Ss(vec!["old".to_string()]))
        );
    }

    #[test]
    fn deserialize_item_round_trips_example() {
        let schema = person_schema();
        let input = record(vec![("id", Value::from("a1")), ("age", Value::from(30))]);
        let item = serialize_item(&schema, &input, SerializeOptions::default()).unwrap();

        let decoded = deserialize_item(&schema, &item).unwrap().expect("non-empty");
        assert_eq!(decoded["id"], Value::from("a1"));
        assert_eq!(decoded["age"], Value::from(30));
        // Every declared attribute is present, absent ones as null.
        assert_eq!(decoded["created"], Value::Null);
        assert_eq!(decoded.len(), 6);
    }

    #[test]
    fn deserialize_item_empty_yields_none() {
        assert_eq!(
            deserialize_item(&person_schema(), &Item::new()).unwrap(),
            None
        );
    }

    #[test]
    fn deserialize_keys_reads_cursor() {
        let schema = log_schema();
        let mut cursor = Item::new();
        cursor.insert("name".to_string(), AttributeValue::S("web".to_string()));
        cursor.insert("ts".to_string(), AttributeValue::N("123".to_string()));
        // Cursors may carry projected attributes; only keys are decoded.
        cursor.insert("line".to_string(), AttributeValue::S("GET /".to_string()));

        let keys = deserialize_keys(&schema, &cursor).unwrap();
        assert_eq!(keys.len(), 2);
        assert_eq!(keys["name"], Value::from("web"));
        assert_eq!(keys["ts"], Value::from(123));
    }

    #[test]
    fn full_record_round_trip() {
        let schema = person_schema();
        let created = DateTime::from_secs(1576540098);
        let input = record(vec![
            ("id", Value::from("a1")),
            ("age", Value::from(30)),
            ("scores", Value::List(vec![Value::from(1), Value::from(2)])),
            ("names", Value::from(vec!["ann", "bob"])),
            ("created", Value::DateTime(created)),
        ]);

        let item = serialize_item(&schema, &input, SerializeOptions::default()).unwrap();
        let decoded = deserialize_item(&schema, &item).unwrap().expect("non-empty");

        assert_eq!(decoded["id"], input["id"]);
        assert_eq!(decoded["age"], input["age"]);
        assert_eq!(decoded["scores"], input["scores"]);
        assert_eq!(decoded["names"], input["names"]);
        assert_eq!(decoded["created"], Value::DateTime(created));
    }
}
