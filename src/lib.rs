//! Duration parsing and preset parameter resolution for image-processing
//! pipelines.
//!
//! Two loosely related engines, both pure computation over structured data:
//!
//! - [`parse_duration`] / [`format_duration`] / [`validate_for_context`]:
//!   natural-language, numeric and ISO-8601 duration strings to and from a
//!   canonical integer-seconds representation, with context-aware bounds
//!   (cache TTLs, timeouts, audit intervals).
//! - [`PresetResolver`]: given a named preset and call-time parameters,
//!   loads the preset from an external store, merges (call-time wins),
//!   validates through pluggable parameter packages, and returns either the
//!   merged set or the original parameters as a safe fallback; never an
//!   error.

#[macro_use]
mod macros;

mod api;
mod duration;
mod packages;
mod params;
mod resolver;

pub use api::{ParsedDuration, parse_duration};
pub use duration::{
    ContextValidation, DurationContext, ParseError, duration_examples, format_duration, format_duration_basic,
    validate_for_context,
};
pub use packages::{
    BorderPackage, ControlPackage, CropPackage, DimensionalPackage, PackageRegistry, PackageSet, ParameterPackage,
    ReflectionPackage, RoundedCornersPackage, TextPackage, TransformPackage, WatermarkPackage,
};
pub use params::{ParamValue, ParameterSet};
pub use resolver::{
    AnalyticsSink, MergeStats, PRESET_APPLIED_KEY, PRESET_KEY, PRESET_NAME_KEY, Preset, PresetResolver, PresetStore,
    ResolutionTrace, ResolveError, StatsSnapshot, TraceOutcome, TraceStep,
};
