//! Crop parameter: named gravity or explicit x,y,w,h coordinates.

use super::ParameterPackage;
use crate::params::ParameterSet;
use std::collections::BTreeMap;

const OWNED: &[&str] = &["crop"];

const GRAVITIES: &[&str] = &["top", "bottom", "left", "right", "center", "smart"];

pub struct CropPackage;

impl ParameterPackage for CropPackage {
    fn category(&self) -> &'static str {
        "crop"
    }

    fn owned_parameters(&self) -> &'static [&'static str] {
        OWNED
    }

    fn priority(&self) -> u16 {
        40
    }

    fn validate_parameters(&self, params: &ParameterSet) -> BTreeMap<String, String> {
        let mut errors = BTreeMap::new();
        let Some(value) = params.get("crop") else {
            return errors;
        };

        let Some(raw) = value.as_str() else {
            errors.insert("crop".to_string(), crop_error());
            return errors;
        };

        if GRAVITIES.contains(&raw) {
            return errors;
        }

        if let Some(caps) = regex!(r"^(\d+),(\d+),(\d+),(\d+)$").captures(raw) {
            let width_ok = caps[3].parse::<i64>().map(|w| w > 0).unwrap_or(false);
            let height_ok = caps[4].parse::<i64>().map(|h| h > 0).unwrap_or(false);
            if width_ok && height_ok {
                return errors;
            }
            errors.insert("crop".to_string(), "coordinate crop needs a positive width and height".to_string());
            return errors;
        }

        errors.insert("crop".to_string(), crop_error());
        errors
    }
}

fn crop_error() -> String {
    format!("must be one of {} or \"x,y,w,h\" coordinates", GRAVITIES.join(", "))
}
