//! Field parsing utilities for measurement strings
//!
//! This module provides one parser per field of the composite
//! `"<wind> (<gust>) mph <direction>"` string, with proper error handling
//! and validation.

use crate::{Error, Result};

/// Positions of the single parenthesized group in a measurement string
struct Parens {
    open: usize,
    close: usize,
}

/// Validate that the string has exactly one `(` followed by exactly one `)`
fn locate_parens(raw: &str) -> Result<Parens> {
    let opens = raw.matches('(').count();
    let closes = raw.matches(')').count();
    if opens != 1 || closes != 1 {
        return Err(Error::malformed_measurement(
            raw,
            format!(
                "expected exactly one '(' and one ')', found {} and {}",
                opens, closes
            ),
        ));
    }

    // Counts checked above
    let open = raw.find('(').unwrap_or_default();
    let close = raw.find(')').unwrap_or_default();
    if close < open {
        return Err(Error::malformed_measurement(raw, "')' appears before '('"));
    }

    Ok(Parens { open, close })
}

/// Parse an integer speed token, naming the field on failure
fn parse_speed(raw: &str, token: &str, field_name: &str) -> Result<u32> {
    token.parse::<u32>().map_err(|e| {
        Error::malformed_measurement(
            raw,
            format!("invalid {} value '{}' ({})", field_name, token, e),
        )
    })
}

/// Parse the average wind speed from the text before `(`
///
/// That text must end with a space and hold either the bare number or one
/// label token followed by the number (`"12 "` or `"Wind 12 "`).
pub fn parse_wind_speed(raw: &str) -> Result<u32> {
    let parens = locate_parens(raw)?;
    let prefix = &raw[..parens.open];

    if !prefix.ends_with(' ') {
        return Err(Error::malformed_measurement(raw, "no space before '('"));
    }

    let tokens: Vec<&str> = prefix.split_whitespace().collect();
    let token = match tokens.as_slice() {
        [value] | [_, value] => *value,
        [] => return Err(Error::malformed_measurement(raw, "no wind value before '('")),
        _ => {
            return Err(Error::malformed_measurement(
                raw,
                format!("invalid wind value '{}'", prefix.trim()),
            ));
        }
    };

    parse_speed(raw, token, "wind")
}

/// Parse the gust speed: the token after the last space inside the parentheses
pub fn parse_gust_speed(raw: &str) -> Result<u32> {
    let parens = locate_parens(raw)?;

    let inner = &raw[parens.open + 1..parens.close];
    let token = match inner.rfind(' ') {
        Some(pos) => &inner[pos + 1..],
        None => inner,
    };
    if token.is_empty() {
        return Err(Error::malformed_measurement(raw, "empty gust value"));
    }

    parse_speed(raw, token, "gust")
}

/// Parse the wind direction: everything after the last space
pub fn parse_direction(raw: &str) -> Result<String> {
    let pos = raw
        .rfind(' ')
        .ok_or_else(|| Error::malformed_measurement(raw, "no space before direction"))?;

    let direction = &raw[pos + 1..];
    if direction.is_empty() {
        return Err(Error::malformed_measurement(raw, "empty direction"));
    }

    Ok(direction.to_string())
}
