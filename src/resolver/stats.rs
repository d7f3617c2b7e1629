//! Resolution performance accounting.
//!
//! A small always-on accumulator in the spirit of a run-metrics struct:
//! every `resolve_parameters` call records its elapsed time and cache
//! outcome, and `snapshot` derives the average resolution time and cache hit
//! rate. Bookkeeping only; it never influences the functional result.

use std::sync::Mutex;
use std::time::Duration;

#[derive(Debug, Default)]
pub(super) struct ResolverStats {
    inner: Mutex<StatsInner>,
}

#[derive(Debug, Default, Clone)]
struct StatsInner {
    resolutions: u64,
    cumulative: Duration,
    cache_hits: u64,
    cache_misses: u64,
}

/// How a resolution interacted with the cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum CacheOutcome {
    Hit,
    Miss,
    /// Fast path: no preset key, no cache lookup performed.
    Skipped,
}

impl ResolverStats {
    pub fn record(&self, elapsed: Duration, outcome: CacheOutcome) {
        let mut inner = self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        inner.resolutions += 1;
        inner.cumulative += elapsed;
        match outcome {
            CacheOutcome::Hit => inner.cache_hits += 1,
            CacheOutcome::Miss => inner.cache_misses += 1,
            CacheOutcome::Skipped => {}
        }
    }

    pub fn snapshot(&self) -> StatsSnapshot {
        let inner = self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner()).clone();

        let average =
            if inner.resolutions == 0 { Duration::ZERO } else { inner.cumulative / inner.resolutions as u32 };
        let lookups = inner.cache_hits + inner.cache_misses;
        let cache_hit_rate = if lookups == 0 { 0.0 } else { inner.cache_hits as f64 / lookups as f64 };

        StatsSnapshot {
            resolutions: inner.resolutions,
            cumulative: inner.cumulative,
            average,
            cache_hits: inner.cache_hits,
            cache_misses: inner.cache_misses,
            cache_hit_rate,
        }
    }
}

/// Point-in-time view of the resolver's performance counters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatsSnapshot {
    pub resolutions: u64,
    pub cumulative: Duration,
    pub average: Duration,
    pub cache_hits: u64,
    pub cache_misses: u64,
    /// Hits over total cache lookups; 0.0 before any lookup happened.
    pub cache_hit_rate: f64,
}
