//! Shared validation helpers used by the concrete packages.

use crate::params::{ParamValue, ParameterSet};
use std::collections::BTreeMap;

/// 3-digit, 6-digit or 8-digit (alpha) hex colour, `#` optional.
pub(super) fn is_hex_color(value: &str) -> bool {
    regex!(r"^#?(?:[0-9a-fA-F]{3}|[0-9a-fA-F]{6}|[0-9a-fA-F]{8})$").is_match(value)
}

/// Require an integer within `[min, max]` when `key` is present.
pub(super) fn check_int_range(
    errors: &mut BTreeMap<String, String>,
    params: &ParameterSet,
    key: &str,
    min: i64,
    max: i64,
) {
    let Some(value) = params.get(key) else {
        return;
    };
    match value.as_i64() {
        Some(n) if (min..=max).contains(&n) => {}
        Some(n) => {
            errors.insert(key.to_string(), format!("must be between {min} and {max}, got {n}"));
        }
        None => {
            errors.insert(key.to_string(), format!("must be an integer between {min} and {max}"));
        }
    }
}

/// Require one of a fixed set of string values when `key` is present.
pub(super) fn check_one_of(errors: &mut BTreeMap<String, String>, params: &ParameterSet, key: &str, allowed: &[&str]) {
    let Some(value) = params.get(key) else {
        return;
    };
    let ok = value.as_str().map(|s| allowed.contains(&s)).unwrap_or(false);
    if !ok {
        errors.insert(key.to_string(), format!("must be one of: {}", allowed.join(", ")));
    }
}

/// Require a hex colour string when `key` is present.
pub(super) fn check_hex_color(errors: &mut BTreeMap<String, String>, params: &ParameterSet, key: &str) {
    let Some(value) = params.get(key) else {
        return;
    };
    let ok = value.as_str().map(is_hex_color).unwrap_or(false);
    if !ok {
        errors.insert(key.to_string(), "must be a hex colour like #fff or #ffcc00".to_string());
    }
}

/// Require a non-empty string when `key` is present.
pub(super) fn check_non_empty_str(errors: &mut BTreeMap<String, String>, params: &ParameterSet, key: &str) {
    let Some(value) = params.get(key) else {
        return;
    };
    if !matches!(value, ParamValue::Str(s) if !s.trim().is_empty()) {
        errors.insert(key.to_string(), "must be a non-empty string".to_string());
    }
}

/// Require a boolean-ish value when `key` is present.
pub(super) fn check_bool(errors: &mut BTreeMap<String, String>, params: &ParameterSet, key: &str) {
    let Some(value) = params.get(key) else {
        return;
    };
    if value.as_bool().is_none() {
        errors.insert(key.to_string(), "must be a boolean".to_string());
    }
}
