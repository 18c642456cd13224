//! Per-brand compliance rule validation.
//!
//! Rules are stored per brand with a typed kind and a JSON config. The
//! validator evaluates active rules in retrieval order and concatenates
//! their violations; an empty result means fully compliant. Malformed
//! configs and unknown rule kinds contribute zero violations.

use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A brand compliance rule loaded from configuration.
#[derive(Debug, Clone)]
pub struct ComplianceRule {
    pub brand: String,
    pub kind: RuleKind,
    pub is_active: bool,
}

/// Closed set of rule kinds with typed configs. Unrecognized `rule_type`
/// values map to [`RuleKind::Unknown`], a forward-compatible no-op.
#[derive(Debug, Clone, PartialEq)]
pub enum RuleKind {
    RequiredField {
        fields: Vec<String>,
    },
    NamingConvention {
        field: Option<String>,
        pattern: Option<String>,
    },
    PriceRange {
        min_msrp: Option<f64>,
        max_msrp: Option<f64>,
        max_cost_ratio: Option<f64>,
    },
    Unknown,
}

impl RuleKind {
    /// Build a typed rule kind from the stored `rule_type` discriminator and
    /// its JSON config. Missing config keys degrade to empty/absent values,
    /// never to an error.
    pub fn from_parts(rule_type: &str, config: &Value) -> Self {
        match rule_type {
            "required_field" => {
                let fields = config
                    .get("fields")
                    .and_then(Value::as_array)
                    .map(|arr| {
                        arr.iter()
                            .filter_map(Value::as_str)
                            .map(str::to_string)
                            .collect()
                    })
                    .unwrap_or_default();
                RuleKind::RequiredField { fields }
            }
            "naming_convention" => RuleKind::NamingConvention {
                field: config
                    .get("field")
                    .and_then(Value::as_str)
                    .map(str::to_string),
                pattern: config
                    .get("pattern")
                    .and_then(Value::as_str)
                    .map(str::to_string),
            },
            "price_range" => RuleKind::PriceRange {
                min_msrp: config.get("min_msrp").and_then(Value::as_f64),
                max_msrp: config.get("max_msrp").and_then(Value::as_f64),
                max_cost_ratio: config.get("max_cost_ratio").and_then(Value::as_f64),
            },
            _ => RuleKind::Unknown,
        }
    }
}

/// One failed compliance check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Violation {
    pub rule_type: String,
    pub field: String,
    pub message: String,
}

impl Violation {
    fn new(rule_type: &str, field: &str, message: String) -> Self {
        Self {
            rule_type: rule_type.to_string(),
            field: field.to_string(),
            message,
        }
    }
}

/// Evaluate a brand's active rules against a mapped record.
///
/// Rules scoped to other brands and inactive rules are skipped; the rest
/// are evaluated in slice order.
pub fn validate_brand_compliance(
    rules: &[ComplianceRule],
    brand: &str,
    record: &Map<String, Value>,
) -> Vec<Violation> {
    let mut violations = Vec::new();

    for rule in rules {
        if !rule.is_active || rule.brand != brand {
            continue;
        }
        match &rule.kind {
            RuleKind::RequiredField { fields } => {
                check_required_fields(fields, record, &mut violations)
            }
            RuleKind::NamingConvention { field, pattern } => {
                check_naming_convention(field.as_deref(), pattern.as_deref(), record, &mut violations)
            }
            RuleKind::PriceRange {
                min_msrp,
                max_msrp,
                max_cost_ratio,
            } => check_price_range(*min_msrp, *max_msrp, *max_cost_ratio, record, &mut violations),
            RuleKind::Unknown => {}
        }
    }

    violations
}

fn check_required_fields(fields: &[String], record: &Map<String, Value>, out: &mut Vec<Violation>) {
    for field in fields {
        let blank = match record.get(field) {
            None | Some(Value::Null) => true,
            Some(Value::String(s)) => s.is_empty(),
            Some(_) => false,
        };
        if blank {
            out.push(Violation::new(
                "required_field",
                field,
                format!("Required field '{field}' is missing or empty"),
            ));
        }
    }
}

fn check_naming_convention(
    field: Option<&str>,
    pattern: Option<&str>,
    record: &Map<String, Value>,
    out: &mut Vec<Violation>,
) {
    let (Some(field), Some(pattern)) = (field, pattern) else {
        return;
    };
    // Absent field: no violation (the rule only constrains values that are
    // present; required_field covers presence).
    let Some(value) = record.get(field) else {
        return;
    };
    if value.is_null() {
        return;
    }

    let text = display_value(value);
    let Some(re) = compile_pattern(pattern) else {
        return;
    };
    if !re.is_match(&text) {
        out.push(Violation::new(
            "naming_convention",
            field,
            format!("Value '{text}' does not match pattern {pattern}"),
        ));
    }
}

fn check_price_range(
    min_msrp: Option<f64>,
    max_msrp: Option<f64>,
    max_cost_ratio: Option<f64>,
    record: &Map<String, Value>,
    out: &mut Vec<Violation>,
) {
    let msrp = record.get("msrp").filter(|v| !v.is_null()).map(numeric);

    if let Some(msrp) = msrp {
        if let Some(min) = min_msrp {
            if msrp < min {
                out.push(Violation::new(
                    "price_range",
                    "msrp",
                    format!("MSRP {msrp} below minimum {min}"),
                ));
            }
        }
        if let Some(max) = max_msrp {
            if msrp > max {
                out.push(Violation::new(
                    "price_range",
                    "msrp",
                    format!("MSRP {msrp} above maximum {max}"),
                ));
            }
        }
    }

    let cost = record.get("cost").filter(|v| !v.is_null()).map(numeric);
    if let (Some(cost), Some(msrp), Some(max_ratio)) = (cost, msrp, max_cost_ratio) {
        // Epsilon-guarded denominator: a zero MSRP must not divide by zero.
        let ratio = cost / msrp.max(0.01);
        if ratio > max_ratio {
            out.push(Violation::new(
                "price_range",
                "cost",
                format!("Cost/MSRP ratio {ratio} exceeds max {max_ratio}"),
            ));
        }
    }
}

/// Coerce a record value to f64 the way the import pipeline does: numbers
/// pass through, strings parse leniently, everything else is 0.0.
fn numeric(value: &Value) -> f64 {
    match value {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => s.trim().parse::<f64>().unwrap_or(0.0),
        _ => 0.0,
    }
}

/// Render a record value for pattern matching and violation messages
/// (strings unquoted, numbers via their JSON form).
fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Compile a rule pattern, stripping PCRE-style delimiters
/// (`/^B1-\d{6}$/i`) carried over from legacy rule configs.
fn compile_pattern(pattern: &str) -> Option<Regex> {
    let (body, flags) = strip_preg_delimiters(pattern);
    let source = if flags.contains('i') {
        format!("(?i){body}")
    } else {
        body.to_string()
    };
    Regex::new(&source).ok()
}

fn strip_preg_delimiters(pattern: &str) -> (&str, &str) {
    let mut chars = pattern.chars();
    match chars.next() {
        Some(delim @ ('/' | '#' | '~')) if pattern.len() >= 2 => {
            if let Some(end) = pattern.rfind(delim) {
                if end > 0 {
                    return (&pattern[1..end], &pattern[end + 1..]);
                }
            }
            (pattern, "")
        }
        _ => (pattern, ""),
    }
}
