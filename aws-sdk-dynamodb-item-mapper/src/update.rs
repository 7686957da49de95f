/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Partial-update directives and the attribute action map they produce.

use aws_sdk_dynamodb_item_types::{AttributeValue, Value};
use std::collections::HashMap;

/// A record of update directives, keyed by attribute name.
pub type UpdateRecord = HashMap<String, UpdateValue>;

/// The action applied to one attribute in a partial update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttributeAction {
    /// Add to a number or union into a set.
    Add,
    /// Remove the attribute, or members from a set.
    Delete,
    /// Replace the whole attribute.
    Put,
}

impl AttributeAction {
    /// Returns the wire name of this action.
    pub fn as_str(&self) -> &'static str {
        match self {
            AttributeAction::Add => "ADD",
            AttributeAction::Delete => "DELETE",
            AttributeAction::Put => "PUT",
        }
    }
}

impl std::fmt::Display for AttributeAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A caller-supplied directive for one attribute of a partial update.
///
/// Directives are explicit variants rather than sentinel keys on the value
/// itself, so a record value can never be mistaken for an update
/// instruction.
#[derive(Debug, Clone, PartialEq)]
pub enum UpdateValue {
    /// Write the value with the operation's default action. A null value
    /// removes the attribute, like [`UpdateValue::Delete`].
    Value(Value),
    /// Increment a number attribute or union members into a set attribute.
    Add(Value),
    /// Remove the attribute entirely.
    Delete,
    /// Remove the given members from a set attribute.
    DeleteElements(Value),
}

impl From<Value> for UpdateValue {
    fn from(value: Value) -> Self {
        UpdateValue::Value(value)
    }
}

/// One entry of an attribute-updates action map.
#[derive(Debug, Clone, PartialEq)]
pub struct AttributeUpdate {
    action: AttributeAction,
    value: Option<AttributeValue>,
}

impl AttributeUpdate {
    pub(crate) fn new(action: AttributeAction, value: Option<AttributeValue>) -> Self {
        Self { action, value }
    }

    /// Returns the action to apply.
    pub fn action(&self) -> AttributeAction {
        self.action
    }

    /// Returns the encoded value the action carries, if any. `DELETE`
    /// without a value removes the whole attribute.
    pub fn value(&self) -> Option<&AttributeValue> {
        self.value.as_ref()
    }
}
