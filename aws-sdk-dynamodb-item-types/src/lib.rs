/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Value types for the schema-driven DynamoDB item mapper.
//!
//! This crate holds the leaf types the mapper converts between: the wire-level
//! [`AttributeValue`] tagged variant and the application-level [`Value`], along
//! with the [`Number`] and [`DateTime`] representations both sides share. It
//! has no knowledge of schemas or whole items; see the
//! `aws-sdk-dynamodb-item-mapper` crate for those.

#![allow(clippy::derive_partial_eq_without_eq)]
#![warn(
    missing_docs,
    rustdoc::missing_crate_level_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]

mod attr;
pub mod date_time;
mod number;
mod value;

pub use attr::AttributeValue;
pub use date_time::DateTime;
pub use number::Number;
pub use value::Value;
