/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Numeric values and their store-native decimal-text form.

use std::fmt;

// 2^53; integers at or above this lose precision in an f64, so they are
// formatted through ryu rather than cast to i64.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_992_f64;

/// A numeric value.
///
/// Integers are kept in the widest matching integer variant so that values
/// outside the exact range of an `f64` survive a parse/format round trip.
/// Equality is numeric rather than representational: `PosInt(1)`,
/// `NegInt(1)`, and `Float(1.0)` all compare equal.
#[derive(Debug, Clone, Copy)]
pub enum Number {
    /// An unsigned integer.
    PosInt(u64),
    /// A signed integer.
    NegInt(i64),
    /// A floating point value.
    Float(f64),
}

impl Number {
    /// Converts to an `f64`, possibly losing precision for large integers.
    pub fn to_f64_lossy(self) -> f64 {
        match self {
            Number::PosInt(v) => v as f64,
            Number::NegInt(v) => v as f64,
            Number::Float(v) => v,
        }
    }

    /// Parses decimal text, preferring lossless integer representations.
    ///
    /// Tries `u64`, then `i64`, then `f64`. Returns `None` for text that is
    /// not numeric (including `NaN`, which carries no value).
    pub fn parse(text: &str) -> Option<Number> {
        let text = text.trim();
        if let Ok(v) = text.parse::<u64>() {
            return Some(Number::PosInt(v));
        }
        if let Ok(v) = text.parse::<i64>() {
            return Some(Number::NegInt(v));
        }
        text.parse::<f64>()
            .ok()
            .filter(|v| !v.is_nan())
            .map(Number::Float)
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        match (*self, *other) {
            (Number::PosInt(a), Number::PosInt(b)) => a == b,
            (Number::NegInt(a), Number::NegInt(b)) => a == b,
            (Number::Float(a), Number::Float(b)) => a == b,
            (Number::PosInt(a), Number::NegInt(b)) | (Number::NegInt(b), Number::PosInt(a)) => {
                i64::try_from(a).map(|a| a == b).unwrap_or(false)
            }
            (Number::PosInt(a), Number::Float(b)) | (Number::Float(b), Number::PosInt(a)) => {
                a as f64 == b
            }
            (Number::NegInt(a), Number::Float(b)) | (Number::Float(b), Number::NegInt(a)) => {
                a as f64 == b
            }
        }
    }
}

impl fmt::Display for Number {
    /// Writes the store-native decimal text.
    ///
    /// Floats with no fractional part print without one (`1`, not `1.0`),
    /// matching the textual form items were historically written with.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Number::PosInt(v) => f.write_str(itoa::Buffer::new().format(v)),
            Number::NegInt(v) => f.write_str(itoa::Buffer::new().format(v)),
            Number::Float(v) => {
                if v.is_nan() {
                    f.write_str("NaN")
                } else if v.is_infinite() {
                    f.write_str(if v > 0.0 { "Infinity" } else { "-Infinity" })
                } else if v.fract() == 0.0 && v.abs() < MAX_SAFE_INTEGER {
                    f.write_str(itoa::Buffer::new().format(v as i64))
                } else {
                    f.write_str(ryu::Buffer::new().format_finite(v))
                }
            }
        }
    }
}

impl From<u64> for Number {
    fn from(value: u64) -> Self {
        Number::PosInt(value)
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Number::NegInt(value)
    }
}

impl From<i32> for Number {
    fn from(value: i32) -> Self {
        Number::NegInt(value as i64)
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Number::Float(value)
    }
}
