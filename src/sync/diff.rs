//! Which parameters did the user change relative to a baseline.

use std::collections::{BTreeMap, BTreeSet};

use crate::{
    animation::kind::AnimationType,
    animation::params::ParameterSet,
    animation::registry::MotionRegistry,
    foundation::core::Position,
};

/// Knobs of [`diff`].
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct DiffOpts {
    /// Absolute tolerance applied to every float; `0.0` requires exact equality.
    pub tolerance: f64,
}

impl Default for DiffOpts {
    fn default() -> Self {
        Self { tolerance: 1e-6 }
    }
}

/// Per-key modification flags: `true` when `current` differs from `baseline`.
///
/// Covers the keys `kind` declares plus every key present in either bag, except
/// engine-internal `_`-prefixed keys. A key present on one side only counts as modified.
pub fn diff(
    kind: AnimationType,
    current: &ParameterSet,
    baseline: &ParameterSet,
    opts: DiffOpts,
) -> BTreeMap<String, bool> {
    let mut keys: BTreeSet<String> = MotionRegistry::builtin()
        .entry(kind)
        .declared_keys()
        .into_iter()
        .collect();
    keys.extend(current.keys().map(str::to_owned));
    keys.extend(baseline.keys().map(str::to_owned));

    keys.into_iter()
        .filter(|k| !k.starts_with('_'))
        .map(|k| {
            let changed = match (current.get(&k), baseline.get(&k)) {
                (Some(a), Some(b)) => !a.approx_eq(b, opts.tolerance),
                (None, None) => false,
                _ => true,
            };
            (k, changed)
        })
        .collect()
}

/// Baseline for [`diff`]: the parameters recorded when the animation was created if any,
/// else the defaults of `kind` at `reference`.
pub fn resolve_baseline(
    registry: &MotionRegistry,
    kind: AnimationType,
    original: Option<&ParameterSet>,
    reference: Position,
) -> ParameterSet {
    match original {
        Some(original) => original.clone(),
        None => registry.default_parameters(kind, reference),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/sync/diff.rs"]
mod tests;
