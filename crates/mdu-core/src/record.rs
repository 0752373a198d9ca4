//! Dataset rows as returned by the search API.
//!
//! A [`Record`] is kept as the raw JSON object rather than a typed struct:
//! the API is an external collaborator and the view must tolerate missing
//! columns, numbers sent as strings, and extra keys, and it must write the
//! exact payload back to the session store.

use crate::error::SearchError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One row of the user-behaviour dataset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(Map<String, Value>);

impl Record {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Numeric value of a column with JavaScript `Number()` coercion.
    ///
    /// Absent keys, objects, arrays and unparseable strings yield `NaN`;
    /// `null` and the empty string yield `0`.
    pub fn number(&self, key: &str) -> f64 {
        match self.0.get(key) {
            None => f64::NAN,
            Some(value) => coerce_number(value),
        }
    }

    /// Display text of a column. Absent and `null` render as empty.
    pub fn text(&self, key: &str) -> String {
        match self.0.get(key) {
            None | Some(Value::Null) => String::new(),
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
        }
    }
}

impl From<Map<String, Value>> for Record {
    fn from(fields: Map<String, Value>) -> Self {
        Self(fields)
    }
}

/// Decode a search response body into records.
///
/// Anything other than a JSON array of JSON objects is a contract violation.
pub fn parse_records(body: &[u8]) -> Result<Vec<Record>, SearchError> {
    serde_json::from_slice(body).map_err(|e| SearchError::MalformedResponse(e.to_string()))
}

fn coerce_number(value: &Value) -> f64 {
    match value {
        Value::Null => 0.0,
        Value::Bool(b) => f64::from(u8::from(*b)),
        Value::Number(n) => n.as_f64().unwrap_or(f64::NAN),
        Value::String(s) => coerce_str(s),
        Value::Array(_) | Value::Object(_) => f64::NAN,
    }
}

fn coerce_str(s: &str) -> f64 {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    match trimmed {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }
    let prefixed = [("0x", 16), ("0X", 16), ("0o", 8), ("0O", 8), ("0b", 2), ("0B", 2)];
    for (prefix, radix) in prefixed {
        if let Some(digits) = trimmed.strip_prefix(prefix) {
            return parse_radix(digits, radix);
        }
    }
    // Rust also accepts "inf" / "nan"; JavaScript does not.
    if !trimmed
        .bytes()
        .all(|b| b.is_ascii_digit() || matches!(b, b'+' | b'-' | b'.' | b'e' | b'E'))
    {
        return f64::NAN;
    }
    // Overflow to ±inf is kept, as in JavaScript.
    trimmed.parse::<f64>().unwrap_or(f64::NAN)
}

/// Unsigned integer literal in `radix`; no sign, no fraction.
fn parse_radix(digits: &str, radix: u32) -> f64 {
    if digits.is_empty() {
        return f64::NAN;
    }
    digits
        .chars()
        .try_fold(0.0_f64, |acc, c| {
            c.to_digit(radix).map(|d| acc * f64::from(radix) + f64::from(d))
        })
        .unwrap_or(f64::NAN)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
