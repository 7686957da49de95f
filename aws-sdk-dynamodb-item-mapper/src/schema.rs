/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Table schemas and attribute type declarations.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// The semantic type declared for an attribute.
///
/// The `Unknown` variant carries tags this version does not recognize, so
/// that schemas deserialized from untrusted configuration still construct;
/// the codec raises
/// [`UnsupportedType`](crate::error::SerializerErrorKind::UnsupportedType)
/// when such an attribute is actually encoded or decoded.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AttributeType {
    /// A UTF-8 string.
    String,
    /// A UUID, carried in its textual form.
    Uuid,
    /// A time-based UUID, carried in its textual form.
    TimeUuid,
    /// A number.
    Number,
    /// A date-time, stored as RFC-3339 text.
    Date,
    /// A boolean, stored as the number 0 or 1.
    Boolean,
    /// A set of numbers.
    NumberSet,
    /// A set of strings.
    StringSet,
    /// A tag not recognized by this version.
    Unknown(std::string::String),
}

impl AttributeType {
    /// Returns the type's tag text.
    pub fn as_str(&self) -> &str {
        match self {
            AttributeType::String => "String",
            AttributeType::Uuid => "UUID",
            AttributeType::TimeUuid => "TimeUUID",
            AttributeType::Number => "Number",
            AttributeType::Date => "Date",
            AttributeType::Boolean => "Boolean",
            AttributeType::NumberSet => "NumberSet",
            AttributeType::StringSet => "StringSet",
            AttributeType::Unknown(tag) => tag.as_str(),
        }
    }

    /// Returns all recognized tag texts.
    pub fn values() -> &'static [&'static str] {
        &[
            "Boolean",
            "Date",
            "Number",
            "NumberSet",
            "String",
            "StringSet",
            "TimeUUID",
            "UUID",
        ]
    }

    /// The store scalar type used for this attribute in table-administration
    /// calls. `None` for unrecognized tags.
    pub fn scalar_type(&self) -> Option<ScalarType> {
        match self {
            AttributeType::String
            | AttributeType::Uuid
            | AttributeType::TimeUuid
            | AttributeType::Date => Some(ScalarType::S),
            AttributeType::Number | AttributeType::Boolean => Some(ScalarType::N),
            AttributeType::StringSet => Some(ScalarType::Ss),
            AttributeType::NumberSet => Some(ScalarType::Ns),
            AttributeType::Unknown(_) => None,
        }
    }
}

impl From<&str> for AttributeType {
    fn from(tag: &str) -> Self {
        match tag {
            "String" => AttributeType::String,
            "UUID" => AttributeType::Uuid,
            "TimeUUID" => AttributeType::TimeUuid,
            "Number" => AttributeType::Number,
            "Date" => AttributeType::Date,
            "Boolean" => AttributeType::Boolean,
            "NumberSet" => AttributeType::NumberSet,
            "StringSet" => AttributeType::StringSet,
            other => AttributeType::Unknown(other.to_string()),
        }
    }
}

impl FromStr for AttributeType {
    type Err = std::convert::Infallible;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        Ok(AttributeType::from(tag))
    }
}

impl fmt::Display for AttributeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Scalar storage type codes used in table-administration calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarType {
    /// String storage.
    S,
    /// Number storage.
    N,
    /// String-set storage.
    Ss,
    /// Number-set storage.
    Ns,
}

impl ScalarType {
    /// Returns the wire code for this scalar type.
    pub fn as_str(&self) -> &'static str {
        match self {
            ScalarType::S => "S",
            ScalarType::N => "N",
            ScalarType::Ss => "SS",
            ScalarType::Ns => "NS",
        }
    }
}

impl fmt::Display for ScalarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Schema metadata for one attribute.
#[derive(Debug, Clone, PartialEq)]
pub struct AttributeDescriptor {
    attribute_type: AttributeType,
}

impl AttributeDescriptor {
    /// Creates a descriptor for the given attribute type.
    pub fn new(attribute_type: AttributeType) -> Self {
        Self { attribute_type }
    }

    /// Returns the declared attribute type.
    pub fn attribute_type(&self) -> &AttributeType {
        &self.attribute_type
    }

    /// Returns the store scalar type for this attribute.
    pub fn scalar_type(&self) -> Option<ScalarType> {
        self.attribute_type.scalar_type()
    }
}

/// A table schema: the key attributes and the declared type of every
/// attribute the serializer should handle.
///
/// The serializer reads schemas and never mutates them; validation of
/// records against the schema happens in the layers above.
#[derive(Debug, Clone)]
pub struct Schema {
    hash_key: String,
    range_key: Option<String>,
    attrs: HashMap<String, AttributeDescriptor>,
    secondary_indexes: Vec<String>,
}

impl Schema {
    /// Creates a [`SchemaBuilder`].
    pub fn builder() -> SchemaBuilder {
        SchemaBuilder::default()
    }

    /// Returns the hash key attribute name.
    pub fn hash_key(&self) -> &str {
        &self.hash_key
    }

    /// Returns the range key attribute name, if the table has one.
    pub fn range_key(&self) -> Option<&str> {
        self.range_key.as_deref()
    }

    /// Returns the descriptor declared for `name`, if any.
    pub fn attr(&self, name: &str) -> Option<&AttributeDescriptor> {
        self.attrs.get(name)
    }

    /// Iterates over all declared attributes.
    pub fn attrs(&self) -> impl Iterator<Item = (&str, &AttributeDescriptor)> {
        self.attrs
            .iter()
            .map(|(name, descriptor)| (name.as_str(), descriptor))
    }

    /// Returns the attribute names carrying local secondary indexes.
    pub fn secondary_indexes(&self) -> &[String] {
        &self.secondary_indexes
    }

    /// Returns true if `name` is the hash or range key attribute.
    pub fn is_key_attribute(&self, name: &str) -> bool {
        name == self.hash_key || self.range_key.as_deref() == Some(name)
    }
}

/// Builder for [`Schema`].
#[derive(Debug, Default)]
pub struct SchemaBuilder {
    hash_key: Option<String>,
    range_key: Option<String>,
    attrs: HashMap<String, AttributeDescriptor>,
    secondary_indexes: Vec<String>,
}

impl SchemaBuilder {
    /// Sets the hash key attribute name.
    pub fn hash_key(mut self, name: impl Into<String>) -> Self {
        self.hash_key = Some(name.into());
        self
    }

    /// Sets the range key attribute name.
    pub fn range_key(mut self, name: impl Into<String>) -> Self {
        self.range_key = Some(name.into());
        self
    }

    /// Declares an attribute and its type.
    pub fn attr(mut self, name: impl Into<String>, attribute_type: AttributeType) -> Self {
        self.attrs
            .insert(name.into(), AttributeDescriptor::new(attribute_type));
        self
    }

    /// Declares a local secondary index on `name`.
    pub fn secondary_index(mut self, name: impl Into<String>) -> Self {
        self.secondary_indexes.push(name.into());
        self
    }

    /// Builds the schema.
    pub fn build(self) -> Schema {
        Schema {
            hash_key: self.hash_key.unwrap_or_default(),
            range_key: self.range_key,
            attrs: self.attrs,
            secondary_indexes: self.secondary_indexes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_assembles_schema() {
        let schema = Schema::builder()
            .hash_key("id")
            .range_key("ts")
            .attr("id", AttributeType::Uuid)
            .attr("ts", AttributeType::Date)
            .attr("scores", AttributeType::NumberSet)
            .secondary_index("scores")
            .build();

        assert_eq!(schema.hash_key(), "id");
        assert_eq!(schema.range_key(), Some("ts"));
        assert_eq!(
            schema.attr("scores").map(|d| d.attribute_type()),
            Some(&AttributeType::NumberSet)
        );
        assert!(schema.attr("missing").is_none());
        assert_eq!(schema.secondary_indexes(), ["scores".to_string()]);
        assert!(schema.is_key_attribute("id"));
        assert!(schema.is_key_attribute("ts"));
        assert!(!schema.is_key_attribute("scores"));
    }

    #[test]
    fn type_tags_parse_round_trip() {
        for tag in AttributeType::values() {
            assert_eq!(AttributeType::from(*tag).as_str(), *tag);
        }
        assert_eq!(
            AttributeType::from("Binary"),
            AttributeType::Unknown("Binary".to_string())
        );
        let parsed: AttributeType = "TimeUUID".parse().unwrap();
        assert_eq!(parsed, AttributeType::TimeUuid);
    }

    #[test]
    fn scalar_types() {
        assert_eq!(AttributeType::Uuid.scalar_type(), Some(ScalarType::S));
        assert_eq!(AttributeType::Date.scalar_type(), Some(ScalarType::S));
        assert_eq!(AttributeType::Boolean.scalar_type(), Some(ScalarType::N));
        assert_eq!(AttributeType::NumberSet.scalar_type(), Some(ScalarType::Ns));
        assert_eq!(ScalarType::Ss.as_str(), "SS");
        assert_eq!(AttributeType::Unknown("Binary".into()).scalar_type(), None);
    }
}
