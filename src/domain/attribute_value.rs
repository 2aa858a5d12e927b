// SPDX-License-Identifier: MIT OR Apache-2.0

//! Typed coercion of raw attribute strings.
//!
//! This module provides the `FromAttribute` trait, which converts the raw string of
//! an attribute into a typed value, and the timestamp parser used by the datetime
//! accessors. Conversions are all-or-nothing: a value either parses completely or
//! the underlying parse error is returned.

use crate::domain::errors::BoxError;
use chrono::format::{Fixed, Item, Numeric, ParseErrorKind, StrftimeItems};
use chrono::{NaiveDate, NaiveDateTime};
use thiserror::Error;

/// The value is not one of the accepted boolean literals.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("'{0}' is not a valid boolean literal, expected 'true' or 'false'")]
pub struct InvalidBoolean(pub String);

/// A type that can be coerced from a raw attribute value.
///
/// # Examples
///
/// ```
/// use ebook_filter::domain::FromAttribute;
///
/// assert_eq!(i32::from_attribute(" 42 ").unwrap(), 42);
/// assert_eq!(bool::from_attribute("TRUE").unwrap(), true);
/// assert!(bool::from_attribute("yes").is_err());
/// ```
pub trait FromAttribute: Sized {
    /// Name of the type as it appears in error messages.
    const TYPE_NAME: &'static str;

    /// Converts the raw attribute value.
    fn from_attribute(raw: &str) -> Result<Self, BoxError>;
}

impl FromAttribute for String {
    const TYPE_NAME: &'static str = "string";

    fn from_attribute(raw: &str) -> Result<Self, BoxError> {
        Ok(raw.to_string())
    }
}

impl FromAttribute for i32 {
    const TYPE_NAME: &'static str = "integer";

    fn from_attribute(raw: &str) -> Result<Self, BoxError> {
        raw.trim().parse::<i32>().map_err(BoxError::from)
    }
}

impl FromAttribute for i64 {
    const TYPE_NAME: &'static str = "long";

    fn from_attribute(raw: &str) -> Result<Self, BoxError> {
        raw.trim().parse::<i64>().map_err(BoxError::from)
    }
}

impl FromAttribute for bool {
    const TYPE_NAME: &'static str = "boolean";

    /// Accepts `true` and `false` in any letter case, ignoring surrounding
    /// whitespace. Every other token is rejected.
    fn from_attribute(raw: &str) -> Result<Self, BoxError> {
        let token = raw.trim();
        if token.eq_ignore_ascii_case("true") {
            Ok(true)
        } else if token.eq_ignore_ascii_case("false") {
            Ok(false)
        } else {
            Err(Box::new(InvalidBoolean(raw.to_string())))
        }
    }
}

/// Parses a timestamp against a `strftime`-style format.
///
/// A format that only describes a calendar date yields midnight of that date. A
/// format with any time field must be satisfied in full.
///
/// # Examples
///
/// ```
/// use ebook_filter::domain::attribute_value::parse_datetime;
///
/// let ts = parse_datetime("2015-03-09 11:25", "%Y-%m-%d %H:%M").unwrap();
/// assert_eq!(ts.to_string(), "2015-03-09 11:25:00");
///
/// let day = parse_datetime("2015-03-09", "%Y-%m-%d").unwrap();
/// assert_eq!(day.to_string(), "2015-03-09 00:00:00");
/// ```
pub fn parse_datetime(raw: &str, format: &str) -> Result<NaiveDateTime, chrono::ParseError> {
    match NaiveDateTime::parse_from_str(raw, format) {
        Ok(timestamp) => Ok(timestamp),
        Err(e) if e.kind() == ParseErrorKind::NotEnough && !has_time_fields(format) => {
            let date = NaiveDate::parse_from_str(raw, format)?;
            date.and_hms_opt(0, 0, 0).ok_or(e)
        }
        Err(e) => Err(e),
    }
}

fn has_time_fields(format: &str) -> bool {
    StrftimeItems::new(format).any(|item| {
        matches!(
            item,
            Item::Numeric(
                Numeric::Hour
                    | Numeric::Hour12
                    | Numeric::Minute
                    | Numeric::Second
                    | Numeric::Nanosecond
                    | Numeric::Timestamp,
                _
            ) | Item::Fixed(
                Fixed::LowerAmPm
                    | Fixed::UpperAmPm
                    | Fixed::Nanosecond
                    | Fixed::Nanosecond3
                    | Fixed::Nanosecond6
                    | Fixed::Nanosecond9
            )
        )
    })
}

/// Name of a datetime target type as it appears in error messages.
pub(crate) fn datetime_type_name(format: &str) -> String {
    format!("DateTime(\"{}\")", format)
}
