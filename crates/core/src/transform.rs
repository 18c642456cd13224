//! Value transforms declared on vendor schema mappings.
//!
//! Each mapping may carry one transform applied to the raw cell value before
//! it is stored under the canonical column. Transforms are pure and total:
//! malformed input degrades to the original value, never to an error.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Default source date pattern (PHP notation) when a `date_format` rule
/// omits `from`.
pub const DEFAULT_DATE_FROM: &str = "m/d/Y";

/// Default target date pattern when a `date_format` rule omits `to`.
pub const DEFAULT_DATE_TO: &str = "Y-m-d";

fn default_date_from() -> String {
    DEFAULT_DATE_FROM.to_string()
}

fn default_date_to() -> String {
    DEFAULT_DATE_TO.to_string()
}

fn default_factor() -> f64 {
    1.0
}

/// A declared value transform, stored as JSON on the mapping row
/// (`{"type": "multiply", "factor": 0.01}`).
///
/// Unrecognized `type` values deserialize to [`TransformRule::Unknown`],
/// which passes values through unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TransformRule {
    Uppercase,
    Trim,
    DateFormat {
        #[serde(default = "default_date_from")]
        from: String,
        #[serde(default = "default_date_to")]
        to: String,
    },
    Multiply {
        #[serde(default = "default_factor")]
        factor: f64,
    },
    #[serde(other)]
    Unknown,
}

impl TransformRule {
    /// Parse a transform rule from its stored JSON config.
    ///
    /// `None` (no rule declared) and malformed configs both yield `None`;
    /// a well-formed config with an unrecognized `type` yields `Unknown`.
    pub fn from_config(config: Option<&Value>) -> Option<Self> {
        let config = config?;
        if config.is_null() {
            return None;
        }
        serde_json::from_value(config.clone()).ok()
    }

    /// Apply this transform to a single raw value.
    ///
    /// Non-string inputs pass through untouched. `multiply` is the only
    /// transform that changes the value's type (string to number).
    pub fn apply(&self, value: &Value) -> Value {
        let Some(s) = value.as_str() else {
            return value.clone();
        };

        match self {
            TransformRule::Uppercase => Value::String(s.to_uppercase()),
            TransformRule::Trim => Value::String(s.trim().to_string()),
            TransformRule::DateFormat { from, to } => {
                Value::String(reformat_date(s, from, to))
            }
            TransformRule::Multiply { factor } => {
                let product = lenient_f64(s) * factor;
                serde_json::Number::from_f64(product)
                    .map(Value::Number)
                    .unwrap_or_else(|| value.clone())
            }
            TransformRule::Unknown => value.clone(),
        }
    }
}

/// Reformat a date string from one PHP-style pattern to another.
///
/// On parse failure the input is returned unchanged (silent fallback).
fn reformat_date(value: &str, from: &str, to: &str) -> String {
    let from_fmt = php_pattern_to_chrono(from);
    let to_fmt = php_pattern_to_chrono(to);

    let parsed = NaiveDateTime::parse_from_str(value, &from_fmt)
        .ok()
        .or_else(|| {
            NaiveDate::parse_from_str(value, &from_fmt)
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        });

    match parsed {
        Some(dt) => dt.format(&to_fmt).to_string(),
        None => value.to_string(),
    }
}

/// Translate the PHP `DateTime` format tokens used in mapping configs
/// (`m/d/Y`, `Y-m-d`, ...) into chrono strftime specifiers.
///
/// Unrecognized characters are copied through as literals; a literal `%`
/// is escaped so it cannot be misread as a specifier.
fn php_pattern_to_chrono(pattern: &str) -> String {
    let mut out = String::with_capacity(pattern.len() * 2);
    for ch in pattern.chars() {
        match ch {
            'd' => out.push_str("%d"),
            'j' => out.push_str("%-d"),
            'm' => out.push_str("%m"),
            'n' => out.push_str("%-m"),
            'y' => out.push_str("%y"),
            'Y' => out.push_str("%Y"),
            'H' => out.push_str("%H"),
            'G' => out.push_str("%-H"),
            'i' => out.push_str("%M"),
            's' => out.push_str("%S"),
            '%' => out.push_str("%%"),
            other => out.push(other),
        }
    }
    out
}

/// Numeric coercion matching the original import pipeline: a fully numeric
/// string parses normally, a string with a numeric prefix parses that
/// prefix, anything else coerces to `0.0`.
fn lenient_f64(s: &str) -> f64 {
    let trimmed = s.trim();
    if let Ok(n) = trimmed.parse::<f64>() {
        return n;
    }

    // Longest parseable numeric prefix.
    let mut end = 0;
    for (idx, ch) in trimmed.char_indices() {
        if ch.is_ascii_digit() || "+-.eE".contains(ch) {
            end = idx + ch.len_utf8();
        } else {
            break;
        }
    }
    trimmed[..end].parse::<f64>().unwrap_or(0.0)
}
