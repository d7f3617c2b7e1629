//! Overlay parameters: text captions and image watermarks.

use super::ParameterPackage;
use super::helpers::{check_hex_color, check_int_range, check_non_empty_str, check_one_of};
use crate::params::ParameterSet;
use std::collections::BTreeMap;

const POSITIONS: &[&str] =
    &["top-left", "top", "top-right", "left", "center", "right", "bottom-left", "bottom", "bottom-right"];

pub struct TextPackage;

impl ParameterPackage for TextPackage {
    fn category(&self) -> &'static str {
        "text"
    }

    fn owned_parameters(&self) -> &'static [&'static str] {
        &["text", "text_size", "text_color", "text_position"]
    }

    fn priority(&self) -> u16 {
        50
    }

    fn validate_parameters(&self, params: &ParameterSet) -> BTreeMap<String, String> {
        let mut errors = BTreeMap::new();
        check_non_empty_str(&mut errors, params, "text");
        check_int_range(&mut errors, params, "text_size", 1, 500);
        check_hex_color(&mut errors, params, "text_color");
        check_one_of(&mut errors, params, "text_position", POSITIONS);
        errors
    }
}

pub struct WatermarkPackage;

impl ParameterPackage for WatermarkPackage {
    fn category(&self) -> &'static str {
        "watermark"
    }

    fn owned_parameters(&self) -> &'static [&'static str] {
        &["watermark", "watermark_opacity", "watermark_position"]
    }

    fn priority(&self) -> u16 {
        60
    }

    fn validate_parameters(&self, params: &ParameterSet) -> BTreeMap<String, String> {
        let mut errors = BTreeMap::new();
        check_non_empty_str(&mut errors, params, "watermark");
        check_int_range(&mut errors, params, "watermark_opacity", 0, 100);
        check_one_of(&mut errors, params, "watermark_position", POSITIONS);
        errors
    }
}
