//! Test utilities for measurement string parsing
//!
//! Shared helpers for building measurement strings in the two shapes seen
//! on forecast pages.

// Test modules
mod field_parser_tests;

/// Compass tokens used when generating measurement strings
pub const DIRECTIONS: &[&str] = &[
    "N", "NNE", "NE", "ENE", "E", "ESE", "SE", "SSE", "S", "SSW", "SW", "WSW", "W", "WNW", "NW",
    "NNW",
];

/// Helper to build a bare `"<n> (<g>) mph <d>"` string
pub fn bare_measurement(wind: u32, gust: u32, direction: &str) -> String {
    format!("{} ({}) mph {}", wind, gust, direction)
}

/// Helper to build a page-style `"Wind <n> (gust <g>) mph <d>"` string
pub fn labelled_measurement(wind: u32, gust: u32, direction: &str) -> String {
    format!("Wind {} (gust {}) mph {}", wind, gust, direction)
}
