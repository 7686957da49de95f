/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Schema-driven serializer between application records and DynamoDB item
//! attribute maps.
//!
//! A [`Schema`] declares a table's key attributes and the semantic type of
//! each attribute. Given a schema, the serializer converts whole records
//! (attribute name → [`Value`]) to and from the wire-level attribute map
//! (attribute name → [`AttributeValue`]), builds primary-key maps, partial
//! update action maps, and conditional-write preconditions.
//!
//! The transport that carries the resulting maps to the service, and table
//! lifecycle administration, are the caller's concern.
//!
//! # Example
//!
//! ```
//! use aws_sdk_dynamodb_item_mapper::{
//!     deserialize_item, serialize_item, AttributeType, Schema, SerializeOptions, Value,
//! };
//! use std::collections::HashMap;
//!
//! let schema = Schema::builder()
//!     .hash_key("id")
//!     .attr("id", AttributeType::String)
//!     .attr("age", AttributeType::Number)
//!     .build();
//!
//! let mut record = HashMap::new();
//! record.insert("id".to_string(), Value::from("a1"));
//! record.insert("age".to_string(), Value::from(30));
//!
//! let item = serialize_item(&schema, &record, SerializeOptions::default())?;
//! assert_eq!(item["id"].as_s(), Some("a1"));
//! assert_eq!(item["age"].as_n(), Some("30"));
//!
//! let decoded = deserialize_item(&schema, &item)?.expect("non-empty item");
//! assert_eq!(decoded, record);
//! # Ok::<_, aws_sdk_dynamodb_item_mapper::SerializerError>(())
//! ```

#![warn(missing_docs)]

mod codec;
pub mod error;
mod schema;
mod serializer;
mod update;

pub use aws_sdk_dynamodb_item_types::{AttributeValue, DateTime, Number, Value};
pub use error::SerializerError;
pub use schema::{AttributeDescriptor, AttributeType, ScalarType, Schema, SchemaBuilder};
pub use serializer::{
    build_key, build_key_from_item, deserialize_item, deserialize_keys, serialize_expected,
    serialize_item, serialize_item_for_update, ExpectedAttributeValue, Item, Record,
    SerializeOptions,
};
pub use update::{AttributeAction, AttributeUpdate, UpdateRecord, UpdateValue};
