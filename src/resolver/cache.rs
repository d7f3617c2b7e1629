//! Process-wide resolution cache with negative entries.
//!
//! Keyed by preset name. Once a name has been confirmed absent it is
//! remembered as absent (`Missing`) so repeat lookups skip the store. Entries
//! never expire on their own; they live until explicitly invalidated or the
//! process restarts, so stores that mutate presets at runtime should call
//! [`ResolutionCache::invalidate`] on writes.

use super::resolve::Preset;
use std::collections::HashMap;
use std::sync::Mutex;

#[derive(Debug, Clone)]
pub(super) enum CacheEntry {
    Found(Preset),
    /// Negative entry: the store confirmed this name does not exist.
    Missing,
}

#[derive(Debug, Default)]
pub(super) struct ResolutionCache {
    entries: Mutex<HashMap<String, CacheEntry>>,
}

impl ResolutionCache {
    pub fn get(&self, name: &str) -> Option<CacheEntry> {
        self.lock().get(name).cloned()
    }

    pub fn insert(&self, name: &str, entry: CacheEntry) {
        self.lock().insert(name.to_string(), entry);
    }

    pub fn invalidate(&self, name: &str) {
        self.lock().remove(name);
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    // A poisoned lock only means another thread panicked mid-insert; the map
    // itself is still coherent for our usage, so recover it.
    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, CacheEntry>> {
        self.entries.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
