//! Parameter validation packages.
//!
//! Validation of an image-processing parameter set is split across pluggable
//! "packages", one per semantic category (control, dimensional,
//! transformational, ...). Each package claims a category name, enumerates
//! the parameter names it owns, reports a priority for conflict resolution,
//! and validates the subset of a [`ParameterSet`] it recognizes.
//!
//! The resolver never needs concrete package identities, only this capability
//! surface. Packages are registered explicitly at startup via a
//! [`PackageSet`] bit mask rather than discovered dynamically, and iterated
//! in ascending priority order.
//!
//! Validation errors from all packages are unioned; when two packages emit an
//! error for the same parameter key, the later (higher-priority) package's
//! message wins. That last-write behavior is preserved for compatibility with
//! existing callers.

#[path = "packages/helpers.rs"]
mod helpers;

#[path = "packages/control.rs"]
mod control;
#[path = "packages/crop.rs"]
mod crop;
#[path = "packages/dimensional.rs"]
mod dimensional;
#[path = "packages/effects.rs"]
mod effects;
#[path = "packages/overlay.rs"]
mod overlay;
#[path = "packages/transform.rs"]
mod transform;


pub use control::ControlPackage;
pub use crop::CropPackage;
pub use dimensional::DimensionalPackage;
pub use effects::{BorderPackage, ReflectionPackage, RoundedCornersPackage};
pub use overlay::{TextPackage, WatermarkPackage};
pub use transform::TransformPackage;

use crate::params::ParameterSet;
use bitflags::bitflags;
use std::collections::BTreeMap;

/// A pluggable validator for a category of parameters.
pub trait ParameterPackage: Send + Sync {
    /// Category name, e.g. `"dimensional"`.
    fn category(&self) -> &'static str;

    /// The parameter names this package owns.
    fn owned_parameters(&self) -> &'static [&'static str];

    /// Priority for conflict resolution; higher wins when multiple packages
    /// claim the same parameter name.
    fn priority(&self) -> u16;

    /// Validate the parameters this package recognizes. Returns a map from
    /// parameter name to error message; an empty map means all owned
    /// parameters that are present are acceptable. Parameters the package
    /// does not own are ignored.
    fn validate_parameters(&self, params: &ParameterSet) -> BTreeMap<String, String>;
}

bitflags! {
    /// Which built-in packages a registry enables.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct PackageSet: u32 {
        const CONTROL = 1 << 0;
        const DIMENSIONAL = 1 << 1;
        const TRANSFORM = 1 << 2;
        const CROP = 1 << 3;
        const TEXT = 1 << 4;
        const WATERMARK = 1 << 5;
        const BORDER = 1 << 6;
        const ROUNDED_CORNERS = 1 << 7;
        const REFLECTION = 1 << 8;
    }
}

/// The set of enabled packages, built once at startup and iterated in
/// ascending priority order.
pub struct PackageRegistry {
    packages: Vec<Box<dyn ParameterPackage>>,
}

impl PackageRegistry {
    /// Build a registry with the built-in packages selected by `set`.
    pub fn with_packages(set: PackageSet) -> Self {
        let mut packages: Vec<Box<dyn ParameterPackage>> = Vec::new();
        if set.contains(PackageSet::CONTROL) {
            packages.push(Box::new(ControlPackage));
        }
        if set.contains(PackageSet::DIMENSIONAL) {
            packages.push(Box::new(DimensionalPackage));
        }
        if set.contains(PackageSet::TRANSFORM) {
            packages.push(Box::new(TransformPackage));
        }
        if set.contains(PackageSet::CROP) {
            packages.push(Box::new(CropPackage));
        }
        if set.contains(PackageSet::TEXT) {
            packages.push(Box::new(TextPackage));
        }
        if set.contains(PackageSet::WATERMARK) {
            packages.push(Box::new(WatermarkPackage));
        }
        if set.contains(PackageSet::BORDER) {
            packages.push(Box::new(BorderPackage));
        }
        if set.contains(PackageSet::ROUNDED_CORNERS) {
            packages.push(Box::new(RoundedCornersPackage));
        }
        if set.contains(PackageSet::REFLECTION) {
            packages.push(Box::new(ReflectionPackage));
        }

        let mut registry = PackageRegistry { packages };
        registry.sort();
        registry
    }

    /// All built-in packages.
    pub fn all() -> Self {
        Self::with_packages(PackageSet::all())
    }

    /// Register an additional (caller-defined) package.
    pub fn register(&mut self, package: Box<dyn ParameterPackage>) {
        self.packages.push(package);
        self.sort();
    }

    fn sort(&mut self) {
        self.packages.sort_by_key(|p| p.priority());
    }

    /// Enabled packages in ascending priority order.
    pub fn packages(&self) -> &[Box<dyn ParameterPackage>] {
        &self.packages
    }

    /// The package owning `name`, highest priority winning on conflicts.
    pub fn owner_of(&self, name: &str) -> Option<&dyn ParameterPackage> {
        // packages are sorted ascending, so the last claimant wins.
        self.packages.iter().rev().find(|p| p.owned_parameters().contains(&name)).map(|p| p.as_ref())
    }

    /// Run every package over `params` and union the error maps. Later
    /// packages overwrite earlier messages for a shared key.
    pub fn validate_all(&self, params: &ParameterSet) -> BTreeMap<String, String> {
        let mut errors = BTreeMap::new();
        for package in &self.packages {
            errors.extend(package.validate_parameters(params));
        }
        errors
    }

    pub fn len(&self) -> usize {
        self.packages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }
}
