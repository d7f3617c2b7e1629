//! Per-call resolution traces.
//!
//! A trace is an ephemeral record of one resolution's steps, created at call
//! start and handed back at call end; nothing is persisted. The hot path
//! (`resolve_parameters`) records nothing; only the traced variant allocates.

use super::merge::MergeStats;
use chrono::NaiveDateTime;
use std::collections::BTreeMap;
use std::time::Duration;

/// One step in a resolution, in the order it happened.
#[derive(Debug, Clone, PartialEq)]
pub enum TraceStep {
    CacheHit,
    /// The cache remembered this preset name as absent.
    NegativeCacheHit,
    CacheMiss,
    StoreLoaded { preset_id: i64 },
    StoreMissing,
    StoreFailed { message: String },
    Merged { stats: MergeStats },
    Validated,
    ValidationFailed { errors: BTreeMap<String, String> },
}

/// How a resolution ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraceOutcome {
    /// Preset found, merged and validated; merged set returned.
    Applied,
    /// No preset key on the call; parameters passed through untouched.
    Passthrough,
    /// Preset name unknown; original parameters returned.
    NotFound,
    /// Merged parameters failed validation; original parameters returned.
    Invalid,
}

/// The full record of one traced resolution.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolutionTrace {
    /// Preset name the call asked for; empty on the passthrough path.
    pub preset: String,
    pub started_at: NaiveDateTime,
    pub steps: Vec<TraceStep>,
    pub outcome: TraceOutcome,
    pub elapsed: Duration,
}

/// Internal step collector. Disabled recorders drop steps on the floor so the
/// hot path stays allocation-free.
pub(super) struct Recorder {
    enabled: bool,
    preset: String,
    started_at: NaiveDateTime,
    steps: Vec<TraceStep>,
}

impl Recorder {
    pub fn new(enabled: bool, preset: &str) -> Self {
        Recorder { enabled, preset: preset.to_string(), started_at: chrono::Local::now().naive_local(), steps: Vec::new() }
    }

    pub fn step(&mut self, step: TraceStep) {
        if self.enabled {
            self.steps.push(step);
        }
    }

    pub fn finish(self, outcome: TraceOutcome, elapsed: Duration) -> Option<ResolutionTrace> {
        if !self.enabled {
            return None;
        }
        Some(ResolutionTrace {
            preset: self.preset,
            started_at: self.started_at,
            steps: self.steps,
            outcome,
            elapsed,
        })
    }
}
