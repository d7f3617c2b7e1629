//! Preset resolution engine.
//!
//! Turns `{preset: name, ...explicit params}` into a fully resolved,
//! validated [`ParameterSet`](crate::params::ParameterSet). Never fails from
//! the caller's point of view: on any problem (missing preset, store failure,
//! validation errors) it degrades to returning the original call-time
//! parameters unchanged.
//!
//! Resolving one call is a pipeline:
//!
//! ```text
//! tag parameters ──┬─ no "preset" key ──────────────────────► unchanged (fast path)
//!                  │
//!                  └─ cache lookup (cache.rs)
//!                        │ hit (positive or negative)
//!                        │ miss ─► preset store ─► cache fill
//!                        ▼
//!                     overlay merge (merge.rs)
//!                        preset values first, explicit values win
//!                        ▼
//!                     package validation (packages.rs)
//!                        union of every registered package's errors
//!                        ▼
//!            errors? ──► original parameters (all-or-nothing)
//!            clean?  ──► merged + bookkeeping keys
//! ```
//!
//! Every control path feeds the stats accumulator (stats.rs) and, on the
//! traced path, a per-call [`ResolutionTrace`] (trace.rs). Analytics calls
//! are best-effort side channels: their failures are logged and can never
//! alter the returned parameter set.

#[path = "resolver/cache.rs"]
mod cache;
#[path = "resolver/merge.rs"]
mod merge;
#[path = "resolver/resolve.rs"]
mod resolve;
#[path = "resolver/stats.rs"]
mod stats;
#[path = "resolver/trace.rs"]
mod trace;

#[cfg(test)]
#[path = "resolver/tests.rs"]
mod tests;

pub use merge::MergeStats;
pub use resolve::{
    AnalyticsSink, PRESET_APPLIED_KEY, PRESET_KEY, PRESET_NAME_KEY, Preset, PresetResolver, PresetStore, ResolveError,
};
pub use stats::StatsSnapshot;
pub use trace::{ResolutionTrace, TraceOutcome, TraceStep};
