//! Decorative effects: borders, rounded corners, reflections.

use super::ParameterPackage;
use super::helpers::{check_hex_color, check_int_range};
use crate::params::{ParamValue, ParameterSet};
use std::collections::BTreeMap;

pub struct BorderPackage;

impl ParameterPackage for BorderPackage {
    fn category(&self) -> &'static str {
        "border"
    }

    fn owned_parameters(&self) -> &'static [&'static str] {
        &["border_width", "border_color"]
    }

    fn priority(&self) -> u16 {
        70
    }

    fn validate_parameters(&self, params: &ParameterSet) -> BTreeMap<String, String> {
        let mut errors = BTreeMap::new();
        check_int_range(&mut errors, params, "border_width", 0, 500);
        check_hex_color(&mut errors, params, "border_color");
        errors
    }
}

pub struct RoundedCornersPackage;

impl ParameterPackage for RoundedCornersPackage {
    fn category(&self) -> &'static str {
        "rounded-corners"
    }

    fn owned_parameters(&self) -> &'static [&'static str] {
        &["radius"]
    }

    fn priority(&self) -> u16 {
        80
    }

    fn validate_parameters(&self, params: &ParameterSet) -> BTreeMap<String, String> {
        let mut errors = BTreeMap::new();
        let Some(value) = params.get("radius") else {
            return errors;
        };

        // "max" means a full circle/ellipse.
        if value.as_str() == Some("max") {
            return errors;
        }
        match value.as_i64() {
            Some(r) if (0..=2000).contains(&r) => {}
            _ => {
                errors.insert("radius".to_string(), "must be between 0 and 2000 pixels, or \"max\"".to_string());
            }
        }
        errors
    }
}

pub struct ReflectionPackage;

impl ParameterPackage for ReflectionPackage {
    fn category(&self) -> &'static str {
        "reflection"
    }

    fn owned_parameters(&self) -> &'static [&'static str] {
        &["reflection_height", "reflection_opacity"]
    }

    fn priority(&self) -> u16 {
        90
    }

    fn validate_parameters(&self, params: &ParameterSet) -> BTreeMap<String, String> {
        let mut errors = BTreeMap::new();
        check_reflection_height(&mut errors, params);
        check_int_range(&mut errors, params, "reflection_opacity", 0, 100);
        errors
    }
}

// Height is either pixels or a percentage of the source ("40%").
fn check_reflection_height(errors: &mut BTreeMap<String, String>, params: &ParameterSet) {
    let Some(value) = params.get("reflection_height") else {
        return;
    };

    if let ParamValue::Str(s) = value {
        if let Some(caps) = regex!(r"^(\d+)%$").captures(s) {
            let ok = caps[1].parse::<i64>().map(|p| (1..=100).contains(&p)).unwrap_or(false);
            if !ok {
                errors.insert("reflection_height".to_string(), "percentage must be between 1% and 100%".to_string());
            }
            return;
        }
    }
    match value.as_i64() {
        Some(h) if (1..=1000).contains(&h) => {}
        _ => {
            errors.insert(
                "reflection_height".to_string(),
                "must be 1-1000 pixels or a percentage like \"40%\"".to_string(),
            );
        }
    }
}
