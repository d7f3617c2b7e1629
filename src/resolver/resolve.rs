//! The resolver core: cache, store, merge, validate, degrade.

use super::cache::{CacheEntry, ResolutionCache};
use super::merge::overlay;
use super::stats::{CacheOutcome, ResolverStats};
use super::trace::{Recorder, ResolutionTrace, TraceOutcome, TraceStep};
use crate::packages::PackageRegistry;
use crate::params::{ParamValue, ParameterSet};
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::{debug, warn};

/// The call-time parameter that names a preset.
pub const PRESET_KEY: &str = "preset";

/// Bookkeeping key marking that a preset was applied. Downstream cache-key
/// generation needs it so preset-derived results stay distinguishable from
/// ad-hoc parameter combinations.
pub const PRESET_APPLIED_KEY: &str = "_preset_applied";

/// Bookkeeping key naming the applied preset.
pub const PRESET_NAME_KEY: &str = "_preset_name";

/// A named, persisted bundle of default parameter values. Owned by an
/// external persistence layer; this crate only reads it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preset {
    pub id: i64,
    pub name: String,
    pub parameters: ParameterSet,
}

/// Failures from the external collaborators. These never escape the
/// resolver; they are logged and degraded locally.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    #[error("preset store failure: {0}")]
    Store(String),

    #[error("analytics sink failure: {0}")]
    Analytics(String),
}

/// External preset persistence. The lookup is the only potentially blocking
/// call in a resolution; any timeout policy belongs to the implementation.
pub trait PresetStore: Send + Sync {
    fn get_preset(&self, name: &str) -> Result<Option<Preset>, ResolveError>;
}

/// Usage-tracking sink. Both calls are fire-and-forget: a failure is logged
/// and can never affect the resolution outcome.
pub trait AnalyticsSink: Send + Sync {
    fn track_preset_usage(&self, preset_id: i64, elapsed: Duration) -> Result<(), ResolveError>;
    fn track_preset_error(&self, preset_id: i64, message: &str) -> Result<(), ResolveError>;
}

/// Long-lived resolution service. Owns the cache and the performance
/// counters explicitly (no globals); both are mutex-guarded so one instance
/// can serve concurrent requests.
pub struct PresetResolver {
    store: Box<dyn PresetStore>,
    registry: PackageRegistry,
    analytics: Option<Box<dyn AnalyticsSink>>,
    cache: ResolutionCache,
    stats: ResolverStats,
}

impl PresetResolver {
    pub fn new(store: Box<dyn PresetStore>, registry: PackageRegistry) -> Self {
        PresetResolver { store, registry, analytics: None, cache: ResolutionCache::default(), stats: ResolverStats::default() }
    }

    pub fn with_analytics(mut self, sink: Box<dyn AnalyticsSink>) -> Self {
        self.analytics = Some(sink);
        self
    }

    /// Resolve call-time parameters against their named preset.
    ///
    /// Never fails: on a missing preset, a store failure or validation
    /// errors the original `tag_parameters` come back unchanged, so the
    /// caller always holds a usable parameter set.
    pub fn resolve_parameters(&self, tag_parameters: &ParameterSet) -> ParameterSet {
        self.resolve_inner(tag_parameters, false).0
    }

    /// Same semantics as [`resolve_parameters`](Self::resolve_parameters),
    /// plus a step-by-step [`ResolutionTrace`] for diagnosis.
    pub fn resolve_parameters_traced(&self, tag_parameters: &ParameterSet) -> (ParameterSet, ResolutionTrace) {
        let (resolved, trace) = self.resolve_inner(tag_parameters, true);
        let trace = trace.unwrap_or(ResolutionTrace {
            preset: String::new(),
            started_at: chrono::Local::now().naive_local(),
            steps: Vec::new(),
            outcome: TraceOutcome::Passthrough,
            elapsed: Duration::ZERO,
        });
        (resolved, trace)
    }

    fn resolve_inner(&self, tag_parameters: &ParameterSet, traced: bool) -> (ParameterSet, Option<ResolutionTrace>) {
        let start = Instant::now();

        // Fast path: nothing to resolve. Still counted in the stats.
        let preset_name = match tag_parameters.get(PRESET_KEY).and_then(ParamValue::as_str) {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => {
                let elapsed = start.elapsed();
                self.stats.record(elapsed, CacheOutcome::Skipped);
                let trace = Recorder::new(traced, "").finish(TraceOutcome::Passthrough, elapsed);
                return (tag_parameters.clone(), trace);
            }
        };

        let mut recorder = Recorder::new(traced, &preset_name);
        debug!(preset = %preset_name, "resolving preset parameters");

        let (preset, outcome) = self.lookup(&preset_name, &mut recorder);

        let Some(preset) = preset else {
            debug!(preset = %preset_name, "preset not found; returning parameters unchanged");
            let elapsed = start.elapsed();
            self.stats.record(elapsed, outcome);
            return (tag_parameters.clone(), recorder.finish(TraceOutcome::NotFound, elapsed));
        };

        let mut explicit = tag_parameters.clone();
        explicit.remove(PRESET_KEY);

        let (mut merged, merge_stats) = overlay(&preset.parameters, &explicit);
        recorder.step(TraceStep::Merged { stats: merge_stats });
        debug!(
            preset = %preset_name,
            preset_only = merge_stats.preset_only,
            explicit_only = merge_stats.explicit_only,
            overridden = merge_stats.overridden,
            "merged preset and explicit parameters"
        );

        let errors = self.registry.validate_all(&merged);
        if !errors.is_empty() {
            // All-or-nothing: an invalid merge means the preset is not
            // applied at all, never partially.
            warn!(preset = %preset_name, ?errors, "preset parameter validation failed; preset not applied");
            let message =
                errors.iter().map(|(key, msg)| format!("{key}: {msg}")).collect::<Vec<_>>().join("; ");
            self.track_error(preset.id, &message);
            recorder.step(TraceStep::ValidationFailed { errors });

            let elapsed = start.elapsed();
            self.stats.record(elapsed, outcome);
            return (tag_parameters.clone(), recorder.finish(TraceOutcome::Invalid, elapsed));
        }
        recorder.step(TraceStep::Validated);

        merged.insert(PRESET_APPLIED_KEY.to_string(), ParamValue::Bool(true));
        merged.insert(PRESET_NAME_KEY.to_string(), ParamValue::Str(preset_name.clone()));

        let elapsed = start.elapsed();
        self.track_usage(preset.id, elapsed);
        self.stats.record(elapsed, outcome);
        debug!(preset = %preset_name, ?elapsed, "preset applied");

        (merged, recorder.finish(TraceOutcome::Applied, elapsed))
    }

    /// Cache-first preset lookup with negative caching. Store errors are
    /// treated as not-found for this call but are NOT cached, so a transient
    /// failure cannot poison the cache.
    fn lookup(&self, name: &str, recorder: &mut Recorder) -> (Option<Preset>, CacheOutcome) {
        match self.cache.get(name) {
            Some(CacheEntry::Found(preset)) => {
                recorder.step(TraceStep::CacheHit);
                (Some(preset), CacheOutcome::Hit)
            }
            Some(CacheEntry::Missing) => {
                recorder.step(TraceStep::NegativeCacheHit);
                (None, CacheOutcome::Hit)
            }
            None => {
                recorder.step(TraceStep::CacheMiss);
                match self.store.get_preset(name) {
                    Ok(Some(preset)) => {
                        recorder.step(TraceStep::StoreLoaded { preset_id: preset.id });
                        self.cache.insert(name, CacheEntry::Found(preset.clone()));
                        (Some(preset), CacheOutcome::Miss)
                    }
                    Ok(None) => {
                        recorder.step(TraceStep::StoreMissing);
                        self.cache.insert(name, CacheEntry::Missing);
                        (None, CacheOutcome::Miss)
                    }
                    Err(err) => {
                        warn!(preset = %name, error = %err, "preset store lookup failed");
                        recorder.step(TraceStep::StoreFailed { message: err.to_string() });
                        (None, CacheOutcome::Miss)
                    }
                }
            }
        }
    }

    fn track_usage(&self, preset_id: i64, elapsed: Duration) {
        if let Some(sink) = &self.analytics {
            if let Err(err) = sink.track_preset_usage(preset_id, elapsed) {
                warn!(preset_id, error = %err, "analytics usage tracking failed; ignoring");
            }
        }
    }

    fn track_error(&self, preset_id: i64, message: &str) {
        if let Some(sink) = &self.analytics {
            if let Err(err) = sink.track_preset_error(preset_id, message) {
                warn!(preset_id, error = %err, "analytics error tracking failed; ignoring");
            }
        }
    }

    /// Drop every cached entry, positive and negative.
    pub fn clear_cache(&self) {
        self.cache.clear();
    }

    /// Drop one preset's cache entry; the next resolution hits the store.
    pub fn invalidate(&self, name: &str) {
        self.cache.invalidate(name);
    }

    /// Number of cached entries (negative entries included).
    pub fn cached_entries(&self) -> usize {
        self.cache.len()
    }

    /// Point-in-time performance counters.
    pub fn stats(&self) -> super::stats::StatsSnapshot {
        self.stats.snapshot()
    }
}
