//! Lookup-with-fallback accessors over a flat parameter map.
//!
//! None of the `parse_*`/`lookup_*` functions fail: a key that is absent or
//! whose value cannot be coerced yields the caller's default.

use anyhow::{Context, Result, bail};
use serde_json::Value;
use std::collections::HashMap;
use std::fmt::Debug;
use tracing::debug;

/// Host supplied `key -> value` parameters, e.g. `"vistar.width" -> "1920"`.
pub type ParamMap = HashMap<String, String>;

/// Coerced value plus whether the default had to stand in for it.
#[derive(Debug, Clone, PartialEq)]
pub struct Lookup<T> {
    pub value: T,
    pub used_default: bool,
}

impl<T> Lookup<T> {
    fn found(value: T) -> Self {
        Self {
            value,
            used_default: false,
        }
    }

    fn fallback(value: T) -> Self {
        Self {
            value,
            used_default: true,
        }
    }
}

pub fn lookup_string(params: &ParamMap, key: &str, default: &str) -> Lookup<String> {
    match params.get(key) {
        Some(raw) => Lookup::found(raw.clone()),
        None => Lookup::fallback(default.to_string()),
    }
}

/// Comma separated list; pieces are trimmed and blanks dropped.
/// A value made only of separators and whitespace counts as absent.
pub fn lookup_array(params: &ParamMap, key: &str, default: &[String]) -> Lookup<Vec<String>> {
    let Some(raw) = params.get(key) else {
        return Lookup::fallback(default.to_vec());
    };

    let items: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(String::from)
        .collect();

    if items.is_empty() {
        debug!(key, raw = %raw, "blank list parameter, using default");
        return Lookup::fallback(default.to_vec());
    }

    Lookup::found(items)
}

pub fn lookup_int(params: &ParamMap, key: &str, default: i64) -> Lookup<i64> {
    lookup_with(params, key, default, |raw| raw.parse::<i64>().ok())
}

pub fn lookup_float(params: &ParamMap, key: &str, default: f64) -> Lookup<f64> {
    lookup_with(params, key, default, |raw| raw.parse::<f64>().ok())
}

pub fn lookup_bool(params: &ParamMap, key: &str, default: bool) -> Lookup<bool> {
    lookup_with(params, key, default, bool_literal)
}

pub fn parse_string(params: &ParamMap, key: &str, default: &str) -> String {
    lookup_string(params, key, default).value
}

pub fn parse_array(params: &ParamMap, key: &str, default: &[String]) -> Vec<String> {
    lookup_array(params, key, default).value
}

pub fn parse_int(params: &ParamMap, key: &str, default: i64) -> i64 {
    lookup_int(params, key, default).value
}

pub fn parse_float(params: &ParamMap, key: &str, default: f64) -> f64 {
    lookup_float(params, key, default).value
}

pub fn parse_bool(params: &ParamMap, key: &str, default: bool) -> bool {
    lookup_bool(params, key, default).value
}

fn lookup_with<T, F>(params: &ParamMap, key: &str, default: T, coerce: F) -> Lookup<T>
where
    T: Debug,
    F: FnOnce(&str) -> Option<T>,
{
    let Some(raw) = params.get(key) else {
        return Lookup::fallback(default);
    };

    match coerce(raw.as_str()) {
        Some(value) => Lookup::found(value),
        None => {
            debug!(key, raw = %raw, ?default, "malformed parameter, using default");
            Lookup::fallback(default)
        }
    }
}

fn bool_literal(raw: &str) -> Option<bool> {
    match raw {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
        _ => None,
    }
}

/// Builds a [`ParamMap`] from a flat JSON object.
/// ```JSON
/// { "vistar.api_key": "abc", "vistar.width": 1920, "vistar.allow_audio": true }
/// ```
/// Numbers and booleans are kept in their textual form; nested values are rejected.
pub fn from_json(json: &str) -> Result<ParamMap> {
    let object: serde_json::Map<String, Value> = serde_json::from_str(json)
        .with_context(|| "Invalid JSON: expected a flat object of parameters")?;

    let mut params = ParamMap::with_capacity(object.len());
    for (key, value) in object {
        let raw = match value {
            Value::String(s) => s,
            Value::Number(n) => n.to_string(),
            Value::Bool(b) => b.to_string(),
            Value::Null => bail!("Parameter '{}' is null", key),
            Value::Array(_) | Value::Object(_) => {
                bail!("Parameter '{}' must be a string, number or bool", key)
            }
        };
        params.insert(key, raw);
    }

    Ok(params)
}
