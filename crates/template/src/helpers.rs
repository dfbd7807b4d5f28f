//! Defines the registry and built-in implementations for template helpers.
//!
//! Helpers receive already-resolved argument values and never fail: a
//! non-numeric argument coerces to `0`, an unparseable date renders empty.
//! The set is closed; templates cannot register their own.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use hoadon_context::display;
use serde_json::{Value, json};
use std::collections::HashMap;

/// The signature for a template helper implementation.
pub type HelperFn = fn(args: Vec<Value>) -> Value;

/// A registry holding all helpers available to the renderer.
pub struct HelperRegistry {
    helpers: HashMap<String, HelperFn>,
}

impl HelperRegistry {
    /// Creates a new, empty helper registry.
    pub fn new() -> Self {
        Self { helpers: HashMap::new() }
    }

    /// Registers a helper.
    pub fn register(&mut self, name: &str, func: HelperFn) {
        self.helpers.insert(name.to_lowercase(), func);
    }

    /// Finds a helper by name (case-insensitive).
    pub fn get(&self, name: &str) -> Option<&HelperFn> {
        self.helpers.get(&name.to_lowercase())
    }
}

impl Default for HelperRegistry {
    /// Creates a registry populated with the built-in helper set.
    fn default() -> Self {
        let mut registry = Self::new();
        registry.register("currency", currency);
        registry.register("uppercase", uppercase);
        registry.register("lowercase", lowercase);
        registry.register("inc", inc);
        registry.register("datetime", datetime);
        registry
    }
}

// --- Coercion helpers ---

fn to_number(value: Option<&Value>) -> f64 {
    match value {
        Some(Value::Number(n)) => n.as_f64().unwrap_or(0.0),
        Some(Value::String(s)) => s.trim().parse().unwrap_or(0.0),
        _ => 0.0,
    }
}

// --- Built-in helper implementations ---

/// Formats an amount as Vietnamese đồng: dot thousands separator, rounded
/// to whole đồng, `₫` suffix. `1690000` becomes `1.690.000 ₫`.
fn currency(args: Vec<Value>) -> Value {
    let amount = to_number(args.first());
    let negative = amount < 0.0;
    let digits = format!("{}", amount.abs().round() as u64);
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    if negative {
        json!(format!("-{} ₫", grouped))
    } else {
        json!(format!("{} ₫", grouped))
    }
}

fn uppercase(args: Vec<Value>) -> Value {
    json!(args.first().map(display).unwrap_or_default().to_uppercase())
}

fn lowercase(args: Vec<Value>) -> Value {
    json!(args.first().map(display).unwrap_or_default().to_lowercase())
}

/// Adds one. Used to render 1-based row numbers from the 0-based `@index`.
fn inc(args: Vec<Value>) -> Value {
    let n = to_number(args.first()) + 1.0;
    if n.fract() == 0.0 {
        json!(n as i64)
    } else {
        json!(n)
    }
}

/// Formats a date as `dd/mm/yyyy HH:MM`. Falsy or unparseable input
/// renders empty.
fn datetime(args: Vec<Value>) -> Value {
    let parsed = match args.first() {
        Some(Value::String(s)) if !s.is_empty() => parse_datetime(s),
        Some(Value::Number(n)) => match n.as_i64() {
            Some(0) | None => None,
            Some(ms) => DateTime::from_timestamp_millis(ms).map(|dt| dt.naive_utc()),
        },
        _ => None,
    };
    match parsed {
        Some(dt) => json!(dt.format("%d/%m/%Y %H:%M").to_string()),
        None => json!(""),
    }
}

/// Lenient datetime parsing: RFC 3339 first (the wall clock of the given
/// offset is kept), then the common unzoned shapes, then a bare date.
fn parse_datetime(text: &str) -> Option<NaiveDateTime> {
    let text = text.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.naive_local());
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%d %H:%M"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(text, format) {
            return Some(dt);
        }
    }
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}
