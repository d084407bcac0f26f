use std::num::ParseIntError;

use fee_core::models::MAX_QUANTITY;
use thiserror::Error;

/// Error returned when page input is not a usable whole number.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseCountError {
    #[error("'{input}' is not a whole number: {source}")]
    Invalid {
        input: String,
        #[source]
        source: ParseIntError,
    },

    #[error("{value} is above the limit of {max}")]
    TooLarge { value: u32, max: u32 },
}

/// Trims whitespace and removes commas (thousands separator).
fn normalize_count_input(s: &str) -> String {
    s.trim().replace(',', "")
}

fn parse_count(s: &str) -> Result<u32, ParseCountError> {
    normalize_count_input(s).parse().map_err(|e| {
        tracing::warn!(input = %s, "invalid count: {}", e);
        ParseCountError::Invalid {
            input: s.to_string(),
            source: e,
        }
    })
}

/// Parses a deliverable quantity in `0..=MAX_QUANTITY`.
pub fn parse_quantity(s: &str) -> Result<u32, ParseCountError> {
    let value = parse_count(s)?;
    if value > MAX_QUANTITY {
        tracing::warn!(value, "quantity above limit");
        return Err(ParseCountError::TooLarge {
            value,
            max: MAX_QUANTITY,
        });
    }
    Ok(value)
}

/// Parses a project duration in whole hours. Handles comma as thousands
/// separator (e.g. `"1,200"`).
pub fn parse_hours(s: &str) -> Result<u32, ParseCountError> {
    parse_count(s)
}
