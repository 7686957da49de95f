/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Wire-level attribute values.

/// A DynamoDB attribute value in its wire representation.
///
/// Exactly one tag is present per value. Numbers and number-set members are
/// carried as decimal text; the service, not the client, interprets them
/// numerically.
#[derive(Debug, Clone, PartialEq)]
pub enum AttributeValue {
    /// A string value.
    S(String),
    /// A number value, as decimal text.
    N(String),
    /// A set of strings.
    Ss(Vec<String>),
    /// A set of numbers, each member as decimal text.
    Ns(Vec<String>),
    /// The explicit null marker.
    Null(bool),
}

impl AttributeValue {
    /// Returns the string value if this is an `S`.
    pub fn as_s(&self) -> Option<&str> {
        match self {
            AttributeValue::S(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the number text if this is an `N`.
    pub fn as_n(&self) -> Option<&str> {
        match self {
            AttributeValue::N(n) => Some(n),
            _ => None,
        }
    }

    /// Returns the members if this is an `SS`.
    pub fn as_ss(&self) -> Option<&[String]> {
        match self {
            AttributeValue::Ss(members) => Some(members),
            _ => None,
        }
    }

    /// Returns the members if this is an `NS`.
    pub fn as_ns(&self) -> Option<&[String]> {
        match self {
            AttributeValue::Ns(members) => Some(members),
            _ => None,
        }
    }

    /// Returns true if this is the explicit null marker.
    pub fn is_null(&self) -> bool {
        matches!(self, AttributeValue::Null(_))
    }

    /// Returns the wire name of this value's tag.
    pub fn type_name(&self) -> &'static str {
        match self {
            AttributeValue::S(_) => "S",
            AttributeValue::N(_) => "N",
            AttributeValue::Ss(_) => "SS",
            AttributeValue::Ns(_) => "NS",
            AttributeValue::Null(_) => "NULL",
        }
    }
}
