//! Field validators and the fixed-order validation pipeline.
//!
//! Every check returns the first problem it finds as a [`ValidationError`];
//! deciding what to print and how to exit is left to the caller.

use chrono::NaiveDate;

use crate::{
    args::parse_args,
    error::ValidationError,
    model::{RawArgs, Request},
};

/// `chrono` format matching `DD-MM-YYYY`.
pub const DATE_FORMAT: &str = "%d-%m-%Y";

/// Parse a `DD-MM-YYYY` date.
///
/// The shape is checked before handing the text to chrono, which on its own
/// would also accept single-digit days or months and longer years.
pub fn validate_date(value: &str) -> Result<NaiveDate, ValidationError> {
    let invalid = || ValidationError::DateFormat {
        value: value.to_owned(),
    };

    if !has_date_shape(value) {
        return Err(invalid());
    }

    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|_| invalid())
}

fn has_date_shape(value: &str) -> bool {
    let bytes = value.as_bytes();

    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            2 | 5 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}

pub fn validate_date_order(start: NaiveDate, end: NaiveDate) -> Result<(), ValidationError> {
    if start > end {
        return Err(ValidationError::DateOrder { start, end });
    }
    Ok(())
}

/// A country must start with an uppercase letter and be purely alphabetic.
pub fn validate_country(value: &str) -> Result<&str, ValidationError> {
    let starts_upper = value.chars().next().is_some_and(char::is_uppercase);

    if !starts_upper || !value.chars().all(char::is_alphabetic) {
        return Err(ValidationError::CountryFormat {
            value: value.to_owned(),
        });
    }
    Ok(value)
}

/// Run every check on already split fields: start date, end date, order,
/// then country.
pub fn validate_raw(raw: RawArgs) -> Result<Request, ValidationError> {
    let start = validate_date(&raw.start)?;
    let end = validate_date(&raw.end)?;
    validate_date_order(start, end)?;
    validate_country(&raw.country)?;

    Ok(Request::new(raw.country, start, end))
}

/// Full pipeline from raw command-line tokens (program name first).
pub fn validate_args<S: AsRef<str>>(tokens: &[S]) -> Result<Request, ValidationError> {
    let raw = parse_args(tokens)?;
    validate_raw(raw)
}
