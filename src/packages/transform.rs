//! Pixel transformations: rotation, flips, filters.

use super::ParameterPackage;
use super::helpers::{check_int_range, check_one_of};
use crate::params::ParameterSet;
use std::collections::BTreeMap;

const OWNED: &[&str] = &["rotate", "flip", "blur", "sharpen", "brightness"];

pub struct TransformPackage;

impl ParameterPackage for TransformPackage {
    fn category(&self) -> &'static str {
        "transformational"
    }

    fn owned_parameters(&self) -> &'static [&'static str] {
        OWNED
    }

    fn priority(&self) -> u16 {
        30
    }

    fn validate_parameters(&self, params: &ParameterSet) -> BTreeMap<String, String> {
        let mut errors = BTreeMap::new();
        check_rotate(&mut errors, params);
        check_one_of(&mut errors, params, "flip", &["h", "v", "both"]);
        check_int_range(&mut errors, params, "blur", 0, 100);
        check_int_range(&mut errors, params, "sharpen", 0, 100);
        check_int_range(&mut errors, params, "brightness", -100, 100);
        errors
    }
}

// Only quarter turns; arbitrary angles change the canvas size.
fn check_rotate(errors: &mut BTreeMap<String, String>, params: &ParameterSet) {
    let Some(value) = params.get("rotate") else {
        return;
    };
    match value.as_i64() {
        Some(0) | Some(90) | Some(180) | Some(270) => {}
        _ => {
            errors.insert("rotate".to_string(), "must be 0, 90, 180 or 270".to_string());
        }
    }
}
