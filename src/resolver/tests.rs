use super::*;
use crate::packages::PackageRegistry;
use crate::params::{ParamValue, ParameterSet};
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

fn set(entries: &[(&str, ParamValue)]) -> ParameterSet {
    entries.iter().map(|(k, v)| (k.to_string(), v.clone())).collect()
}

/// In-memory preset store that counts lookups.
struct MemoryStore {
    presets: HashMap<String, Preset>,
    calls: Mutex<usize>,
}

impl MemoryStore {
    fn new(presets: Vec<Preset>) -> Self {
        MemoryStore { presets: presets.into_iter().map(|p| (p.name.clone(), p)).collect(), calls: Mutex::new(0) }
    }

    fn calls(&self) -> usize {
        *self.calls.lock().unwrap()
    }
}

impl PresetStore for &MemoryStore {
    fn get_preset(&self, name: &str) -> Result<Option<Preset>, ResolveError> {
        *self.calls.lock().unwrap() += 1;
        Ok(self.presets.get(name).cloned())
    }
}

struct FailingStore;

impl PresetStore for FailingStore {
    fn get_preset(&self, _name: &str) -> Result<Option<Preset>, ResolveError> {
        Err(ResolveError::Store("connection refused".into()))
    }
}

/// Sink that records calls and can be told to fail.
struct RecordingSink {
    usages: Mutex<Vec<(i64, Duration)>>,
    errors: Mutex<Vec<(i64, String)>>,
    fail: bool,
}

impl RecordingSink {
    fn new(fail: bool) -> Self {
        RecordingSink { usages: Mutex::new(Vec::new()), errors: Mutex::new(Vec::new()), fail }
    }
}

impl AnalyticsSink for &RecordingSink {
    fn track_preset_usage(&self, preset_id: i64, elapsed: Duration) -> Result<(), ResolveError> {
        if self.fail {
            return Err(ResolveError::Analytics("sink offline".into()));
        }
        self.usages.lock().unwrap().push((preset_id, elapsed));
        Ok(())
    }

    fn track_preset_error(&self, preset_id: i64, message: &str) -> Result<(), ResolveError> {
        if self.fail {
            return Err(ResolveError::Analytics("sink offline".into()));
        }
        self.errors.lock().unwrap().push((preset_id, message.to_string()));
        Ok(())
    }
}

fn thumbnail_preset() -> Preset {
    Preset {
        id: 7,
        name: "thumbnail".into(),
        parameters: set(&[("width", ParamValue::Int(100)), ("quality", ParamValue::Int(80))]),
    }
}

fn broken_preset() -> Preset {
    // quality 999 fails the control package.
    Preset { id: 9, name: "broken".into(), parameters: set(&[("quality", ParamValue::Int(999))]) }
}

fn resolver(store: &'static MemoryStore) -> PresetResolver {
    PresetResolver::new(Box::new(store), PackageRegistry::all())
}

fn leak_store(presets: Vec<Preset>) -> &'static MemoryStore {
    Box::leak(Box::new(MemoryStore::new(presets)))
}

#[test]
fn merge_precedence_explicit_wins() {
    let store = leak_store(vec![thumbnail_preset()]);
    let resolver = resolver(store);

    let tag = set(&[("preset", "thumbnail".into()), ("quality", ParamValue::Int(90))]);
    let resolved = resolver.resolve_parameters(&tag);

    assert_eq!(resolved.get("width"), Some(&ParamValue::Int(100)));
    assert_eq!(resolved.get("quality"), Some(&ParamValue::Int(90)));
    assert_eq!(resolved.get(PRESET_APPLIED_KEY), Some(&ParamValue::Bool(true)));
    assert_eq!(resolved.get(PRESET_NAME_KEY), Some(&ParamValue::Str("thumbnail".into())));
    assert!(!resolved.contains_key(PRESET_KEY));
}

#[test]
fn fast_path_without_preset_key() {
    let store = leak_store(vec![thumbnail_preset()]);
    let resolver = resolver(store);

    let tag = set(&[("quality", ParamValue::Int(90))]);
    assert_eq!(resolver.resolve_parameters(&tag), tag);
    assert_eq!(store.calls(), 0);

    // Fast path is still counted.
    assert_eq!(resolver.stats().resolutions, 1);
}

#[test]
fn empty_preset_value_is_fast_path() {
    let store = leak_store(vec![thumbnail_preset()]);
    let resolver = resolver(store);

    let tag = set(&[("preset", "".into()), ("quality", ParamValue::Int(90))]);
    assert_eq!(resolver.resolve_parameters(&tag), tag);
    assert_eq!(store.calls(), 0);
}

#[test]
fn unknown_preset_returns_parameters_unchanged() {
    let store = leak_store(vec![]);
    let resolver = resolver(store);

    let tag = set(&[("preset", "nonexistent".into()), ("a", ParamValue::Int(1))]);
    assert_eq!(resolver.resolve_parameters(&tag), tag);
}

#[test]
fn validation_failure_rolls_back_completely() {
    let store = leak_store(vec![broken_preset()]);
    let resolver = resolver(store);

    let tag = set(&[("preset", "broken".into()), ("width", ParamValue::Int(640))]);
    let resolved = resolver.resolve_parameters(&tag);

    // Exactly the original parameters, preset key included, no bookkeeping.
    assert_eq!(resolved, tag);
}

#[test]
fn cache_prevents_repeat_store_lookups() {
    let store = leak_store(vec![thumbnail_preset()]);
    let resolver = resolver(store);

    let tag = set(&[("preset", "thumbnail".into())]);
    resolver.resolve_parameters(&tag);
    resolver.resolve_parameters(&tag);
    assert_eq!(store.calls(), 1);

    resolver.invalidate("thumbnail");
    resolver.resolve_parameters(&tag);
    assert_eq!(store.calls(), 2);

    resolver.clear_cache();
    resolver.resolve_parameters(&tag);
    assert_eq!(store.calls(), 3);
}

#[test]
fn negative_caching_remembers_absent_presets() {
    let store = leak_store(vec![]);
    let resolver = resolver(store);

    let tag = set(&[("preset", "ghost".into())]);
    resolver.resolve_parameters(&tag);
    resolver.resolve_parameters(&tag);

    assert_eq!(store.calls(), 1);
    assert_eq!(resolver.cached_entries(), 1);
}

#[test]
fn store_errors_degrade_and_are_not_cached() {
    let resolver = PresetResolver::new(Box::new(FailingStore), PackageRegistry::all());

    let tag = set(&[("preset", "thumbnail".into()), ("quality", ParamValue::Int(90))]);
    assert_eq!(resolver.resolve_parameters(&tag), tag);
    assert_eq!(resolver.cached_entries(), 0);

    let (_, trace) = resolver.resolve_parameters_traced(&tag);
    assert_eq!(trace.outcome, TraceOutcome::NotFound);
    assert!(trace.steps.iter().any(|s| matches!(s, TraceStep::StoreFailed { .. })));
}

#[test]
fn analytics_usage_and_error_events() {
    let store = leak_store(vec![thumbnail_preset(), broken_preset()]);
    let sink: &'static RecordingSink = Box::leak(Box::new(RecordingSink::new(false)));
    let resolver = PresetResolver::new(Box::new(store), PackageRegistry::all()).with_analytics(Box::new(sink));

    resolver.resolve_parameters(&set(&[("preset", "thumbnail".into())]));
    resolver.resolve_parameters(&set(&[("preset", "broken".into())]));

    let usages = sink.usages.lock().unwrap();
    assert_eq!(usages.len(), 1);
    assert_eq!(usages[0].0, 7);

    let errors = sink.errors.lock().unwrap();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].0, 9);
    assert!(errors[0].1.contains("quality"));
}

#[test]
fn analytics_failure_never_affects_the_result() {
    let store = leak_store(vec![thumbnail_preset()]);
    let sink: &'static RecordingSink = Box::leak(Box::new(RecordingSink::new(true)));
    let resolver = PresetResolver::new(Box::new(store), PackageRegistry::all()).with_analytics(Box::new(sink));

    let tag = set(&[("preset", "thumbnail".into()), ("quality", ParamValue::Int(90))]);
    let resolved = resolver.resolve_parameters(&tag);

    assert_eq!(resolved.get("width"), Some(&ParamValue::Int(100)));
    assert_eq!(resolved.get("quality"), Some(&ParamValue::Int(90)));
    assert_eq!(resolved.get(PRESET_APPLIED_KEY), Some(&ParamValue::Bool(true)));
}

#[test]
fn stats_count_every_path() {
    let store = leak_store(vec![thumbnail_preset()]);
    let resolver = resolver(store);

    resolver.resolve_parameters(&set(&[])); // fast path
    resolver.resolve_parameters(&set(&[("preset", "thumbnail".into())])); // miss
    resolver.resolve_parameters(&set(&[("preset", "thumbnail".into())])); // hit

    let stats = resolver.stats();
    assert_eq!(stats.resolutions, 3);
    assert_eq!(stats.cache_misses, 1);
    assert_eq!(stats.cache_hits, 1);
    assert!((stats.cache_hit_rate - 0.5).abs() < f64::EPSILON);
    assert!(stats.cumulative >= stats.average);
}

#[test]
fn traced_resolution_records_the_pipeline() {
    let store = leak_store(vec![thumbnail_preset()]);
    let resolver = resolver(store);

    let tag = set(&[("preset", "thumbnail".into()), ("quality", ParamValue::Int(90))]);
    let (resolved, trace) = resolver.resolve_parameters_traced(&tag);

    assert_eq!(trace.preset, "thumbnail");
    assert_eq!(trace.outcome, TraceOutcome::Applied);
    assert!(resolved.contains_key(PRESET_APPLIED_KEY));

    assert!(trace.steps.contains(&TraceStep::CacheMiss));
    assert!(trace.steps.iter().any(|s| matches!(s, TraceStep::StoreLoaded { preset_id: 7 })));
    assert!(trace.steps.contains(&TraceStep::Merged {
        stats: MergeStats { preset_only: 1, explicit_only: 0, overridden: 1 }
    }));
    assert!(trace.steps.contains(&TraceStep::Validated));

    // Second call: cache hit shows up in the trace.
    let (_, trace) = resolver.resolve_parameters_traced(&tag);
    assert!(trace.steps.contains(&TraceStep::CacheHit));
}

#[test]
fn traced_validation_failure() {
    let store = leak_store(vec![broken_preset()]);
    let resolver = resolver(store);

    let tag = set(&[("preset", "broken".into())]);
    let (resolved, trace) = resolver.resolve_parameters_traced(&tag);

    assert_eq!(resolved, tag);
    assert_eq!(trace.outcome, TraceOutcome::Invalid);
    assert!(trace.steps.iter().any(|s| matches!(s, TraceStep::ValidationFailed { errors } if errors.contains_key("quality"))));
}
