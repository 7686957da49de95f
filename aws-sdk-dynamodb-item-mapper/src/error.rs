/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Error types for item serialization.

use std::fmt;

/// Error raised by the item codec and record serializer.
///
/// Serialization has a single failure mode: an attribute whose declared
/// schema type is not one the codec supports. Malformed wire data never
/// errors; the decode paths degrade to null or empty collections instead.
/// Callers should treat this as a configuration problem (a bad schema), not
/// a transient one.
#[derive(Debug)]
pub struct SerializerError {
    kind: SerializerErrorKind,
    attribute: Option<String>,
}

/// The kind of serializer error that occurred.
#[derive(Debug)]
#[non_exhaustive]
pub enum SerializerErrorKind {
    /// The attribute's declared type tag is outside the supported set.
    UnsupportedType {
        /// The unrecognized type tag.
        type_tag: String,
    },
}

impl SerializerError {
    /// Creates an error for an unsupported schema type tag.
    pub fn unsupported_type(type_tag: impl Into<String>) -> Self {
        Self {
            kind: SerializerErrorKind::UnsupportedType {
                type_tag: type_tag.into(),
            },
            attribute: None,
        }
    }

    /// Attaches the name of the attribute the error occurred on.
    pub fn for_attribute(mut self, attribute: impl Into<String>) -> Self {
        self.attribute = Some(attribute.into());
        self
    }

    /// Returns the kind of error.
    pub fn kind(&self) -> &SerializerErrorKind {
        &self.kind
    }

    /// Returns the attribute name if available.
    pub fn attribute(&self) -> Option<&str> {
        self.attribute.as_deref()
    }
}

impl fmt::Display for SerializerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let SerializerErrorKind::UnsupportedType { type_tag } = &self.kind;
        match &self.attribute {
            Some(attribute) => write!(
                f,
                "unsupported schema type '{}' for attribute '{}'",
                type_tag, attribute
            ),
            None => write!(f, "unsupported schema type '{}'", type_tag),
        }
    }
}

impl std::error::Error for SerializerError {}
