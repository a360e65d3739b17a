//! Forecast table extraction from an HTML page
//!
//! The forecast page renders an hourly table whose body rows are, in order:
//! day labels, hour labels and wind cells. The wind cell text is a bar, the
//! composite measurement string lives in each cell's `title` attribute.

use crate::app::models::RawForecast;
use crate::constants::table_rows;
use crate::{Error, Result};
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

static TABLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?is)<table\b([^>]*)>(.*?)</table>"#).expect("valid regex"));
static CLASS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)\bclass\s*=\s*"([^"]*)""#).expect("valid regex"));
static TBODY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?is)<tbody\b[^>]*>(.*?)</tbody>"#).expect("valid regex"));
static ROW_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?is)<tr\b[^>]*>(.*?)</tr>"#).expect("valid regex"));
static CELL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?is)<td\b([^>]*)>(.*?)</td>"#).expect("valid regex"));
static TITLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)\btitle\s*=\s*"([^"]*)""#).expect("valid regex"));
static TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<[^>]*>").expect("valid regex"));

/// One table cell: its attribute text and inner HTML
struct Cell<'a> {
    attrs: &'a str,
    inner: &'a str,
}

/// Extract the three flat lists from the forecast table in `html`
///
/// The table is the first `<table>` whose class list contains `table_class`.
pub fn extract_forecast(html: &str, table_class: &str) -> Result<RawForecast> {
    let body = find_table_body(html, table_class)?;

    let rows: Vec<Vec<Cell<'_>>> = ROW_RE
        .captures_iter(body)
        .map(|row| {
            let row_html = row.get(1).map_or("", |m| m.as_str());
            CELL_RE
                .captures_iter(row_html)
                .map(|c| Cell {
                    attrs: c.get(1).map_or("", |m| m.as_str()),
                    inner: c.get(2).map_or("", |m| m.as_str()),
                })
                .collect()
        })
        .collect();

    if rows.len() <= table_rows::MEASUREMENTS {
        return Err(Error::table_not_found(format!(
            "expected at least {} rows in '{}' table, found {}",
            table_rows::MEASUREMENTS + 1,
            table_class,
            rows.len()
        )));
    }

    let day_labels: Vec<String> = rows[table_rows::DAYS].iter().map(cell_text).collect();
    let hour_labels: Vec<String> = rows[table_rows::HOURS].iter().map(cell_text).collect();
    let measurements: Vec<String> = rows[table_rows::MEASUREMENTS]
        .iter()
        .map(cell_title)
        .collect();

    debug!(
        "Extracted {} day labels, {} hour labels, {} measurements",
        day_labels.len(),
        hour_labels.len(),
        measurements.len()
    );

    Ok(RawForecast::new(day_labels, hour_labels, measurements))
}

/// Locate the matching table and return its body (or whole content without a tbody)
fn find_table_body<'a>(html: &'a str, table_class: &str) -> Result<&'a str> {
    let content = TABLE_RE
        .captures_iter(html)
        .find(|t| {
            let attrs = t.get(1).map_or("", |m| m.as_str());
            CLASS_RE
                .captures(attrs)
                .and_then(|c| c.get(1))
                .is_some_and(|classes| classes.as_str().split_whitespace().any(|c| c == table_class))
        })
        .and_then(|t| t.get(2))
        .map(|m| m.as_str())
        .ok_or_else(|| {
            Error::table_not_found(format!("no <table> with class '{}' in page", table_class))
        })?;

    Ok(TBODY_RE
        .captures(content)
        .and_then(|b| b.get(1))
        .map_or(content, |m| m.as_str()))
}

fn cell_text(cell: &Cell<'_>) -> String {
    normalize(&TAG_RE.replace_all(cell.inner, " "))
}

fn cell_title(cell: &Cell<'_>) -> String {
    TITLE_RE
        .captures(cell.attrs)
        .and_then(|c| c.get(1))
        .map(|m| normalize(m.as_str()))
        .unwrap_or_default()
}

/// Decode the common entities and collapse whitespace
fn normalize(s: &str) -> String {
    let decoded = s
        .replace("&nbsp;", " ")
        .replace("&#160;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&");
    decoded.split_whitespace().collect::<Vec<_>>().join(" ")
}
