/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Date-time values for item attributes.
//!
//! Unlike [`std::time::Instant`], this value is not opaque: the time inside
//! it can be read and modified, and it parses and formats the RFC-3339 form
//! date attributes are stored in.

use num_integer::{div_mod_floor, Integer};
use std::error::Error as StdError;
use std::fmt;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

const MILLIS_PER_SECOND: i64 = 1000;
const NANOS_PER_MILLI: u32 = 1_000_000;
const NANOS_PER_SECOND: i128 = 1_000_000_000;

/// Instant in time, as seconds and sub-second nanos since the Unix epoch
/// (January 1, 1970 at midnight UTC/GMT).
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct DateTime {
    seconds: i64,
    subsecond_nanos: u32,
}

impl DateTime {
    /// Creates a `DateTime` from a number of seconds since the Unix epoch.
    pub fn from_secs(epoch_seconds: i64) -> Self {
        DateTime {
            seconds: epoch_seconds,
            subsecond_nanos: 0,
        }
    }

    /// Creates a `DateTime` from a number of milliseconds since the Unix epoch.
    pub fn from_millis(epoch_millis: i64) -> Self {
        let (seconds, millis) = div_mod_floor(epoch_millis, MILLIS_PER_SECOND);
        DateTime::from_secs_and_nanos(seconds, millis as u32 * NANOS_PER_MILLI)
    }

    /// Creates a `DateTime` from a number of seconds and sub-second nanos
    /// since the Unix epoch.
    ///
    /// # Panics
    /// Panics if `subsecond_nanos` is a full second or more.
    pub fn from_secs_and_nanos(seconds: i64, subsecond_nanos: u32) -> Self {
        if subsecond_nanos >= 1_000_000_000 {
            panic!("{} is > 1_000_000_000", subsecond_nanos)
        }
        DateTime {
            seconds,
            subsecond_nanos,
        }
    }

    /// Returns the epoch seconds component.
    ///
    /// _Note: this does not include the sub-second nanos._
    pub fn secs(&self) -> i64 {
        self.seconds
    }

    /// Returns the sub-second nanos component.
    pub fn subsec_nanos(&self) -> u32 {
        self.subsecond_nanos
    }

    /// Returns the value as fractional seconds since the Unix epoch.
    ///
    /// _Note: this conversion loses precision for distant instants._
    pub fn as_secs_f64(&self) -> f64 {
        self.seconds as f64 + self.subsecond_nanos as f64 / 1_000_000_000_f64
    }

    /// Converts to the number of milliseconds since the Unix epoch.
    ///
    /// This is fallible since `DateTime` holds more range than an `i64` count
    /// of milliseconds can represent.
    pub fn to_millis(self) -> Result<i64, DateTimeError> {
        let subsec_millis =
            Integer::div_floor(&i64::from(self.subsecond_nanos), &(NANOS_PER_MILLI as i64));
        if self.seconds < 0 {
            self.seconds
                .checked_add(1)
                .and_then(|seconds| seconds.checked_mul(MILLIS_PER_SECOND))
                .and_then(|millis| millis.checked_sub(1000 - subsec_millis))
        } else {
            self.seconds
                .checked_mul(MILLIS_PER_SECOND)
                .and_then(|millis| millis.checked_add(subsec_millis))
        }
        .ok_or(DateTimeError::OutOfRange(
            "value too large to fit into i64 epoch millis",
        ))
    }

    /// Parses a `DateTime` from an RFC-3339 date-time string.
    pub fn parse_rfc3339(s: &str) -> Result<Self, DateTimeError> {
        let parsed = OffsetDateTime::parse(s, &Rfc3339)
            .map_err(|err| DateTimeError::Parse(err.to_string()))?;
        Self::from_nanos(parsed.unix_timestamp_nanos())
    }

    /// Formats the `DateTime` as an RFC-3339 date-time string.
    ///
    /// Fails for instants whose year falls outside the representable
    /// calendar range.
    pub fn to_rfc3339(&self) -> Result<String, DateTimeError> {
        let date_time = OffsetDateTime::from_unix_timestamp_nanos(self.as_nanos())
            .map_err(|_| DateTimeError::OutOfRange("value is outside the formattable range"))?;
        date_time
            .format(&Rfc3339)
            .map_err(|_| DateTimeError::OutOfRange("value is outside the formattable range"))
    }

    fn from_nanos(epoch_nanos: i128) -> Result<Self, DateTimeError> {
        let (seconds, subsecond_nanos) = div_mod_floor(epoch_nanos, NANOS_PER_SECOND);
        let seconds = i64::try_from(seconds)
            .map_err(|_| DateTimeError::OutOfRange("epoch nanos are too large for a DateTime"))?;
        // safe cast because of the modulus
        Ok(DateTime {
            seconds,
            subsecond_nanos: subsecond_nanos as u32,
        })
    }

    fn as_nanos(&self) -> i128 {
        self.seconds as i128 * NANOS_PER_SECOND + self.subsecond_nanos as i128
    }
}

/// Failure to parse, format, or convert a [`DateTime`].
#[derive(Debug)]
#[non_exhaustive]
pub enum DateTimeError {
    /// The input was not a valid RFC-3339 date-time.
    Parse(String),
    /// The value does not fit the requested representation.
    OutOfRange(&'static str),
}

impl fmt::Display for DateTimeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateTimeError::Parse(message) => write!(f, "invalid date-time: {}", message),
            DateTimeError::OutOfRange(message) => write!(f, "{}", message),
        }
    }
}

impl StdError for DateTimeError {}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn parse_and_format() {
        let date_time = DateTime::parse_rfc3339("2019-12-16T23:48:18Z").expect("valid");
        assert_eq!(date_time.secs(), 1576540098);
        assert_eq!(date_time.subsec_nanos(), 0);
        assert_eq!(date_time.to_rfc3339().expect("valid"), "2019-12-16T23:48:18Z");

        let date_time = DateTime::parse_rfc3339("2021-07-30T21:20:04.123Z").expect("valid");
        assert_eq!(date_time.secs(), 1627680004);
        assert_eq!(date_time.subsec_nanos(), 123_000_000);
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(DateTime::parse_rfc3339("not a date").is_err());
        assert!(DateTime::parse_rfc3339("2019-12-16").is_err());
    }

    #[test]
    fn millis_conversions() {
        let date_time = DateTime::from_millis(1627680004123);
        assert_eq!(date_time.secs(), 1627680004);
        assert_eq!(date_time.subsec_nanos(), 123_000_000);

        let date_time = DateTime::from_millis(-1627680004123);
        assert_eq!(date_time.secs(), -1627680005);
        assert_eq!(date_time.subsec_nanos(), 877_000_000);

        assert!(DateTime::from_secs_and_nanos(i64::MAX, 0).to_millis().is_err());
    }

    #[test]
    fn format_out_of_calendar_range() {
        assert!(DateTime::from_secs(i64::MAX).to_rfc3339().is_err());
    }

    proptest! {
        #[test]
        fn millis_round_trip(millis in -62_135_596_800_000_i64..253_402_300_799_999) {
            let date_time = DateTime::from_millis(millis);
            prop_assert_eq!(date_time.to_millis().unwrap(), millis);
        }

        #[test]
        fn rfc3339_round_trip(millis in -62_135_596_800_000_i64..253_402_300_799_999) {
            let date_time = DateTime::from_millis(millis);
            let text = date_time.to_rfc3339().unwrap();
            prop_assert_eq!(DateTime::parse_rfc3339(&text).unwrap(), date_time);
        }
    }
}
