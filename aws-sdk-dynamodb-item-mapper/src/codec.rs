/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Conversion between one application value and one wire attribute value,
//! dispatched on the attribute's schema-declared type.

use crate::error::SerializerError;
use crate::schema::{AttributeDescriptor, AttributeType};
use aws_sdk_dynamodb_item_types::{AttributeValue, DateTime, Number, Value};

/// Encodes a single value per the attribute's declared type.
///
/// A null value encodes to `None` without consulting the type rules. With
/// `convert_sets`, set-typed attributes encode as their scalar counterpart,
/// for callers that know the value is singular.
pub(crate) fn serialize_attribute(
    value: &Value,
    descriptor: &AttributeDescriptor,
    convert_sets: bool,
) -> Result<Option<AttributeValue>, SerializerError> {
    if value.is_null() {
        return Ok(None);
    }

    let encoded = match descriptor.attribute_type() {
        AttributeType::String | AttributeType::Uuid | AttributeType::TimeUuid => {
            serialize_string(value)
        }
        AttributeType::Number => serialize_number(value),
        AttributeType::Date => serialize_date(value),
        AttributeType::Boolean => serialize_boolean(value),
        AttributeType::NumberSet if convert_sets => serialize_number(value),
        AttributeType::NumberSet => serialize_number_set(value),
        AttributeType::StringSet if convert_sets => serialize_string(value),
        AttributeType::StringSet => serialize_string_set(value),
        AttributeType::Unknown(tag) => {
            return Err(SerializerError::unsupported_type(tag.clone()));
        }
    };
    Ok(encoded)
}

/// Decodes a single wire value per the attribute's declared type.
///
/// Decoding is tolerant of cross-tag wire input: items written by looser
/// historical encodings may carry a different tag than the schema declares,
/// so each type tries a defined precedence of wire tags and degrades to
/// null (or an empty set) instead of failing. A missing wire value decodes
/// to null before the type is even examined.
pub(crate) fn deserialize_attribute(
    value: Option<&AttributeValue>,
    descriptor: &AttributeDescriptor,
) -> Result<Value, SerializerError> {
    let value = match value {
        Some(value) if !value.is_null() => value,
        _ => return Ok(Value::Null),
    };

    Ok(match descriptor.attribute_type() {
        AttributeType::String | AttributeType::Uuid | AttributeType::TimeUuid => {
            deserialize_string(value)
        }
        AttributeType::Number => deserialize_number(value),
        AttributeType::Date => deserialize_date(value),
        AttributeType::Boolean => deserialize_boolean(value),
        AttributeType::NumberSet => deserialize_number_set(value),
        AttributeType::StringSet => deserialize_string_set(value),
        AttributeType::Unknown(tag) => {
            return Err(SerializerError::unsupported_type(tag.clone()));
        }
    })
}

fn serialize_string(value: &Value) -> Option<AttributeValue> {
    Some(AttributeValue::S(value.to_text()))
}

fn serialize_number(value: &Value) -> Option<AttributeValue> {
    Some(AttributeValue::N(value.to_text()))
}

fn serialize_date(value: &Value) -> Option<AttributeValue> {
    // Not every value is a date; an uninterpretable one is treated like null
    // rather than an error.
    let date_time = value.as_date_time()?;
    date_time.to_rfc3339().ok().map(AttributeValue::S)
}

fn serialize_boolean(value: &Value) -> Option<AttributeValue> {
    // The literal text "false" is falsy here; the literal text "0" is not.
    let false_text = matches!(value, Value::String(s) if s == "false");
    let flag = if value.is_truthy() && !false_text {
        "1"
    } else {
        "0"
    };
    Some(AttributeValue::N(flag.to_string()))
}

fn serialize_string_set(value: &Value) -> Option<AttributeValue> {
    let members = match value {
        Value::List(members) => members.iter().map(Value::to_text).collect(),
        single => vec![single.to_text()],
    };
    Some(AttributeValue::Ss(members))
}

fn serialize_number_set(value: &Value) -> Option<AttributeValue> {
    let members = match value {
        Value::List(members) => members.iter().map(coerced_number_text).collect(),
        single => vec![coerced_number_text(single)],
    };
    Some(AttributeValue::Ns(members))
}

fn coerced_number_text(value: &Value) -> String {
    Number::Float(value.coerce_f64()).to_string()
}

fn deserialize_string(value: &AttributeValue) -> Value {
    if let Some(s) = value.as_s() {
        Value::String(s.to_string())
    } else if let Some(n) = value.as_n() {
        Value::String(n.to_string())
    } else {
        Value::Null
    }
}

fn deserialize_number(value: &AttributeValue) -> Value {
    let text = value.as_n().or_else(|| value.as_s());
    match text.and_then(Number::parse) {
        Some(number) => Value::Number(number),
        None => Value::Null,
    }
}

fn deserialize_boolean(value: &AttributeValue) -> Value {
    if let Some(n) = value.as_n() {
        let truthy = n.trim().parse::<f64>().map(|v| v != 0.0).unwrap_or(false);
        Value::Bool(truthy)
    } else if let Some(s) = value.as_s() {
        Value::Bool(s == "true")
    } else {
        Value::Bool(false)
    }
}

fn deserialize_date(value: &AttributeValue) -> Value {
    if let Some(s) = value.as_s() {
        DateTime::parse_rfc3339(s)
            .map(Value::DateTime)
            .unwrap_or(Value::Null)
    } else if let Some(n) = value.as_n() {
        Number::parse(n)
            .map(Value::Number)
            .and_then(|v| v.as_date_time())
            .map(Value::DateTime)
            .unwrap_or(Value::Null)
    } else {
        Value::Null
    }
}

fn deserialize_number_set(value: &AttributeValue) -> Value {
    let parse_members = |members: &[String]| {
        Value::List(
            members
                .iter()
                .filter_map(|text| Number::parse(text))
                .map(Value::Number)
                .collect(),
        )
    };
    let parse_single =
        |text: &str| Value::List(Number::parse(text).map(Value::Number).into_iter().collect());
    if let Some(members) = value.as_ns() {
        parse_members(members)
    } else if let Some(members) = value.as_ss() {
        parse_members(members)
    } else if let Some(s) = value.as_s() {
        parse_single(s)
    } else if let Some(n) = value.as_n() {
        parse_single(n)
    } else {
        Value::List(Vec::new())
    }
}

fn deserialize_string_set(value: &AttributeValue) -> Value {
    let as_strings = |members: &[String]| {
        Value::List(
            members
                .iter()
                .map(|member| Value::String(member.clone()))
                .collect(),
        )
    };
    if let Some(members) = value.as_ss() {
        as_strings(members)
    } else if let Some(members) = value.as_ns() {
        as_strings(members)
    } else if let Some(s) = value.as_s() {
        Value::List(vec![Value::String(s.to_string())])
    } else if let Some(n) = value.as_n() {
        Value::List(vec![Value::String(n.to_string())])
    } else {
        Value::List(Vec::new())
    }
}
