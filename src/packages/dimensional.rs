//! Output dimensions: width, height, fit mode.

use super::ParameterPackage;
use super::helpers::{check_int_range, check_one_of};
use crate::params::ParameterSet;
use std::collections::BTreeMap;

const OWNED: &[&str] = &["width", "height", "fit"];

const FIT_MODES: &[&str] = &["contain", "cover", "fill", "scale-down", "stretch"];

// Generous upper bound; anything past this is a typo or abuse.
const MAX_DIMENSION: i64 = 10_000;

pub struct DimensionalPackage;

impl ParameterPackage for DimensionalPackage {
    fn category(&self) -> &'static str {
        "dimensional"
    }

    fn owned_parameters(&self) -> &'static [&'static str] {
        OWNED
    }

    fn priority(&self) -> u16 {
        20
    }

    fn validate_parameters(&self, params: &ParameterSet) -> BTreeMap<String, String> {
        let mut errors = BTreeMap::new();
        check_int_range(&mut errors, params, "width", 1, MAX_DIMENSION);
        check_int_range(&mut errors, params, "height", 1, MAX_DIMENSION);
        check_one_of(&mut errors, params, "fit", FIT_MODES);
        errors
    }
}
