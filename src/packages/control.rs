//! Output-control parameters: quality, format, caching.

use super::helpers::{check_bool, check_int_range, check_one_of};
use super::ParameterPackage;
use crate::duration::{self, DurationContext, validate_for_context};
use crate::params::{ParamValue, ParameterSet};
use std::collections::BTreeMap;

const OWNED: &[&str] = &["quality", "format", "progressive", "dpr", "cache"];

const FORMATS: &[&str] = &["jpg", "jpeg", "png", "gif", "webp", "avif"];

pub struct ControlPackage;

impl ParameterPackage for ControlPackage {
    fn category(&self) -> &'static str {
        "control"
    }

    fn owned_parameters(&self) -> &'static [&'static str] {
        OWNED
    }

    fn priority(&self) -> u16 {
        10
    }

    fn validate_parameters(&self, params: &ParameterSet) -> BTreeMap<String, String> {
        let mut errors = BTreeMap::new();
        check_int_range(&mut errors, params, "quality", 1, 100);
        check_one_of(&mut errors, params, "format", FORMATS);
        check_bool(&mut errors, params, "progressive");
        check_int_range(&mut errors, params, "dpr", 1, 8);
        check_cache(&mut errors, params);
        errors
    }
}

/// `cache` is a duration-typed parameter: any expression the duration engine
/// accepts, constrained to the cache context (-1 and 0 are meaningful).
fn check_cache(errors: &mut BTreeMap<String, String>, params: &ParameterSet) {
    let Some(value) = params.get("cache") else {
        return;
    };
    let raw = match value {
        ParamValue::Str(s) => s.clone(),
        ParamValue::Int(n) => n.to_string(),
        _ => {
            errors.insert("cache".to_string(), "must be a duration string or a number of seconds".to_string());
            return;
        }
    };
    match duration::parse_seconds(&raw) {
        Ok(seconds) => {
            let validation = validate_for_context(seconds, DurationContext::Cache);
            if let Some(message) = validation.error {
                errors.insert("cache".to_string(), message);
            }
        }
        Err(err) => {
            errors.insert("cache".to_string(), err.to_string());
        }
    }
}
