//! Result set returned by `showtable.json`
//!
//! On the wire rows are keyed by a zero-padded id:
//! ```text
//! {"h": {"hd": ["id", "name"]}, "d": {"r000": ["1", "Alice"], "r001": ["2", "Bob"]}}
//! ```
//! In memory they are a plain ordered `Vec`, so row `g` is `rows[g]`.
//! The key format only lives in [`row_key`] / [`parse_row_key`].

use crate::error::ClientError;
use crate::text::sanitize;
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;

/// Minimum digit count of a row key (`r000`)
pub const ROW_KEY_WIDTH: usize = 3;

/// Wire key for global row `g`: `r` followed by `g` zero-padded to three digits.
///
/// Wider numbers are written in full (`r1000`), like the server's `%03d`.
pub fn row_key(g: usize) -> String {
    format!("r{:0width$}", g, width = ROW_KEY_WIDTH)
}

/// Inverse of [`row_key`]
pub fn parse_row_key(key: &str) -> Result<usize, ClientError> {
    let digits = key
        .strip_prefix('r')
        .ok_or_else(|| ClientError::RowKey(key.to_string()))?;
    if digits.len() < ROW_KEY_WIDTH || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ClientError::RowKey(key.to_string()));
    }
    digits
        .parse()
        .map_err(|_| ClientError::RowKey(key.to_string()))
}

#[derive(Debug, Deserialize)]
struct WireHeader {
    #[serde(default)]
    hd: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct WireResultSet {
    #[serde(default)]
    h: Option<WireHeader>,
    #[serde(default)]
    d: HashMap<String, Vec<Value>>,
}

/// A decoded query result, cached until the next query replaces it
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultSet {
    /// Column names; `None` when the query was sent with `viscols = 0`
    pub headers: Option<Vec<String>>,
    /// Rows in global row order
    pub rows: Vec<Vec<String>>,
}

impl ResultSet {
    /// Decode a `showtable.json` response body
    pub fn from_json(body: &str) -> Result<Self, ClientError> {
        let wire: WireResultSet = serde_json::from_str(body)?;

        let mut keyed = wire
            .d
            .into_iter()
            .map(|(key, cells)| Ok((parse_row_key(&key)?, cells)))
            .collect::<Result<Vec<_>, ClientError>>()?;
        keyed.sort_by_key(|(g, _)| *g);

        let mut rows = Vec::with_capacity(keyed.len());
        for (expected, (g, cells)) in keyed.into_iter().enumerate() {
            if g != expected {
                return Err(ClientError::MissingRow(row_key(expected)));
            }
            rows.push(cells.iter().map(cell_text).collect());
        }

        Ok(Self {
            headers: wire
                .h
                .map(|h| h.hd.iter().map(|name| sanitize(name)).collect()),
            rows,
        })
    }

    /// Total row count `T`
    pub fn total_rows(&self) -> usize {
        self.rows.len()
    }

    /// Row at global index `g`
    pub fn row(&self, g: usize) -> Option<&[String]> {
        self.rows.get(g).map(Vec::as_slice)
    }
}

/// Cells are strings on the wire; anything else is shown in its JSON form
fn cell_text(value: &Value) -> String {
    match value {
        Value::String(s) => sanitize(s),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
