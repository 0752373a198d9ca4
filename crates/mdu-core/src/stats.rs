//! Aggregate statistics and number formatting for the search view.
//!
//! Rounding and formatting reproduce what a browser shows for the same data:
//! averages round half toward +∞ (`Math.round`), fixed-point output rounds
//! ties away from zero on the exact binary value (`toFixed`), and whole
//! numbers get `en-US` thousands separators.

use crate::fields::{Field, NumericField};
use crate::record::Record;

/// Enough digits to print any finite `f64` exactly.
const EXACT_DIGITS: usize = 1100;
/// `toFixed` rejects more than this many fraction digits.
const MAX_FIXED_DIGITS: usize = 100;

// ---------------------------------------------------------------------------
// Average / median
// ---------------------------------------------------------------------------

/// Mean of `field` over `records`, rounded to the nearest integer.
///
/// Non-numeric and missing values count as `0` but still count towards the
/// divisor. An empty slice averages to `0`. Infinite cells carry through, so
/// the mean may be `±Infinity` or `NaN`.
pub fn average(records: &[Record], field: NumericField) -> f64 {
    if records.is_empty() {
        return 0.0;
    }
    let sum: f64 = records
        .iter()
        .map(|r| {
            let n = r.number(field.as_str());
            if n.is_nan() {
                0.0
            } else {
                n
            }
        })
        .sum();
    round_half_up(sum / records.len() as f64)
}

/// Median of `field`, either the bare `0` or a fixed-point string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Median {
    Zero,
    Fixed(String),
}

impl std::fmt::Display for Median {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Median::Zero => f.write_str("0"),
            Median::Fixed(s) => f.write_str(s),
        }
    }
}

/// Median of the numeric values of `field`, formatted to `decimal_places`.
///
/// Non-numeric values are discarded before sorting. With no numeric values,
/// or a median of exactly zero, the result is [`Median::Zero`].
pub fn median(records: &[Record], field: NumericField, decimal_places: usize) -> Median {
    let mut values: Vec<f64> = records
        .iter()
        .map(|r| r.number(field.as_str()))
        .filter(|n| !n.is_nan())
        .collect();
    if values.is_empty() {
        return Median::Zero;
    }
    values.sort_by(f64::total_cmp);

    let middle = values.len() / 2;
    let median = if values.len() % 2 == 0 {
        (values[middle - 1] + values[middle]) / 2.0
    } else {
        values[middle]
    };

    if median == 0.0 {
        Median::Zero
    } else {
        Median::Fixed(to_fixed(median, decimal_places))
    }
}

// ---------------------------------------------------------------------------
// Formatting
// ---------------------------------------------------------------------------

/// Display form used for statistics and table cells alike.
///
/// Whole numbers with `decimal_places == 0` are digit-grouped (`12,345`);
/// everything else is fixed-point.
pub fn format_number(value: f64, decimal_places: usize) -> String {
    if decimal_places == 0 && value.is_finite() && value.fract() == 0.0 {
        group_thousands(value)
    } else {
        to_fixed(value, decimal_places)
    }
}

/// Fixed-point rendering with ties rounded away from zero.
pub fn to_fixed(value: f64, decimal_places: usize) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    let places = decimal_places.min(MAX_FIXED_DIGITS);
    let exact = format!("{:.*}", EXACT_DIGITS, value.abs());
    let (int_part, frac_part) = exact.split_once('.').unwrap_or((exact.as_str(), ""));

    let mut digits: Vec<u8> = int_part
        .bytes()
        .chain(frac_part.bytes().take(places))
        .map(|b| b - b'0')
        .collect();
    let mut int_len = int_part.len();

    if frac_part.as_bytes().get(places).is_some_and(|&b| b >= b'5') {
        let mut carry = true;
        for d in digits.iter_mut().rev() {
            if *d == 9 {
                *d = 0;
            } else {
                *d += 1;
                carry = false;
                break;
            }
        }
        if carry {
            digits.insert(0, 1);
            int_len += 1;
        }
    }

    let mut out = String::with_capacity(digits.len() + 2);
    if value < 0.0 {
        out.push('-');
    }
    for (i, d) in digits.iter().enumerate() {
        if i == int_len {
            out.push('.');
        }
        out.push(char::from(b'0' + d));
    }
    out
}

fn group_thousands(value: f64) -> String {
    let digits = format!("{:.0}", value.abs());
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0.0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// `Math.round`: nearest integer, halves toward +∞.
fn round_half_up(x: f64) -> f64 {
    let floor = x.floor();
    if x - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

// ---------------------------------------------------------------------------
// View summaries
// ---------------------------------------------------------------------------

/// One statistic card of the search view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatCard {
    pub field: NumericField,
    pub unit: &'static str,
    /// Formatted average: a digit-grouped integer, or `Infinity` / `NaN`.
    pub average: String,
    pub median: Median,
}

impl StatCard {
    pub fn title(&self) -> &'static str {
        self.field.as_str()
    }
}

/// (field, median decimal places, unit) for each card, left to right.
const CARDS: [(NumericField, usize, &str); 4] = [
    (NumericField::AppUsageTime, 1, "Minutes"),
    (NumericField::ScreenOnTime, 1, "Hours"),
    (NumericField::AppsInstalled, 0, "Apps"),
    (NumericField::Age, 0, "Years Old"),
];

/// Build the four statistic cards for the current results.
///
/// While the view is in its no-results state the medians read `0`; the
/// averages are always computed over `results`, which may still hold the
/// previous successful search.
pub fn summarize(results: &[Record], no_results: bool) -> Vec<StatCard> {
    CARDS
        .iter()
        .map(|&(field, places, unit)| StatCard {
            field,
            unit,
            average: format_number(average(results, field), 0),
            median: if no_results {
                Median::Zero
            } else {
                median(results, field, places)
            },
        })
        .collect()
}

/// The eleven display cells of a results-table row.
pub fn format_row(record: &Record) -> Vec<String> {
    Field::ALL
        .iter()
        .map(|&field| match field.numeric() {
            Some(numeric) => format_number(record.number(numeric.as_str()), 0),
            None => record.text(field.as_str()),
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
