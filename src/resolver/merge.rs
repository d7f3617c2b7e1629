//! Overlay merge of preset and call-time parameters.

use crate::params::ParameterSet;

/// What an overlay merge did, recorded for tracing.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MergeStats {
    /// Keys that only the preset supplied.
    pub preset_only: usize,
    /// Keys that only the explicit call-time parameters supplied.
    pub explicit_only: usize,
    /// Keys where an explicit value overrode the preset's.
    pub overridden: usize,
}

/// Preset parameters populate defaults; explicit parameters layered on top
/// win. Keys present on only one side survive untouched.
pub(super) fn overlay(preset: &ParameterSet, explicit: &ParameterSet) -> (ParameterSet, MergeStats) {
    let mut merged = preset.clone();
    let mut stats = MergeStats::default();

    for (key, value) in explicit {
        if merged.insert(key.clone(), value.clone()).is_some() {
            stats.overridden += 1;
        } else {
            stats.explicit_only += 1;
        }
    }
    stats.preset_only = preset.len() - stats.overridden;

    (merged, stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::ParamValue;

    fn set(entries: &[(&str, i64)]) -> ParameterSet {
        entries.iter().map(|(k, v)| (k.to_string(), ParamValue::Int(*v))).collect()
    }

    #[test]
    fn explicit_wins_preset_fills() {
        let preset = set(&[("width", 100), ("quality", 80)]);
        let explicit = set(&[("quality", 90)]);

        let (merged, stats) = overlay(&preset, &explicit);

        assert_eq!(merged, set(&[("width", 100), ("quality", 90)]));
        assert_eq!(stats, MergeStats { preset_only: 1, explicit_only: 0, overridden: 1 });
    }

    #[test]
    fn disjoint_keys_both_survive() {
        let preset = set(&[("width", 100)]);
        let explicit = set(&[("blur", 5)]);

        let (merged, stats) = overlay(&preset, &explicit);

        assert_eq!(merged, set(&[("width", 100), ("blur", 5)]));
        assert_eq!(stats, MergeStats { preset_only: 1, explicit_only: 1, overridden: 0 });
    }

    #[test]
    fn empty_sides() {
        let empty = ParameterSet::new();
        let some = set(&[("width", 100)]);

        assert_eq!(overlay(&empty, &some).0, some);
        assert_eq!(overlay(&some, &empty).0, some);
        assert_eq!(overlay(&empty, &empty).0, empty);
    }
}
