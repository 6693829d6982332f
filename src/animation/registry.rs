use std::sync::OnceLock;

use crate::{
    animation::kind::AnimationType,
    animation::models::{MODEL_SPECS, ModelSpec, MotionParams, fallback_position},
    animation::params::ParameterSet,
    foundation::core::{Plane, Position},
    foundation::error::TrajectoryResult,
};

/// Outcome of a single checked sample.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sampled {
    /// Sampled position; the fallback path when `used_fallback` is set.
    pub position: Position,
    /// True when the parameters could not be resolved or produced a non-finite point.
    pub used_fallback: bool,
}

/// Table from [`AnimationType`] to its model description.
///
/// Immutable after construction; share it by reference across threads.
#[derive(Clone, Debug)]
pub struct MotionRegistry {
    entries: Vec<ModelSpec>,
}

impl Default for MotionRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl MotionRegistry {
    /// Registry holding every built-in model.
    pub fn new() -> Self {
        Self {
            entries: MODEL_SPECS.to_vec(),
        }
    }

    /// Process-wide built-in registry.
    pub fn builtin() -> &'static MotionRegistry {
        static BUILTIN: OnceLock<MotionRegistry> = OnceLock::new();
        BUILTIN.get_or_init(MotionRegistry::new)
    }

    /// Registered model descriptions, in declaration order.
    pub fn entries(&self) -> &[ModelSpec] {
        &self.entries
    }

    /// Description of `kind`.
    pub fn entry(&self, kind: AnimationType) -> &ModelSpec {
        // Built from the closed table, so every type is present at its declaration index.
        &self.entries[kind as usize]
    }

    /// Look up a model by its string tag, failing fast on unknown tags.
    pub fn lookup(&self, tag: &str) -> TrajectoryResult<&ModelSpec> {
        let kind: AnimationType = tag.parse()?;
        Ok(self.entry(kind))
    }

    /// Anchor parameter of `kind`.
    pub fn anchor_key(&self, kind: AnimationType) -> &'static str {
        self.entry(kind).anchor_key
    }

    /// Default parameters of `kind` positioned at `reference`.
    pub fn default_parameters(&self, kind: AnimationType, reference: Position) -> ParameterSet {
        self.entry(kind).default_parameters(reference)
    }

    /// Typed parameters of `kind`, or the reason they could not be read.
    pub fn resolve(
        &self,
        kind: AnimationType,
        parameters: &ParameterSet,
    ) -> TrajectoryResult<MotionParams> {
        MotionParams::resolve(kind, parameters)
    }

    /// Position of `kind` at normalized time `t`.
    ///
    /// Never fails: unusable parameters yield the fallback path and a warning.
    pub fn sample(&self, kind: AnimationType, parameters: &ParameterSet, t: f64) -> Position {
        self.sample_checked(kind, parameters, t, None).position
    }

    /// Like [`MotionRegistry::sample`], optionally seen from editor plane `view`, reporting
    /// whether the fallback path was used.
    pub fn sample_checked(
        &self,
        kind: AnimationType,
        parameters: &ParameterSet,
        t: f64,
        view: Option<Plane>,
    ) -> Sampled {
        match MotionParams::resolve(kind, parameters) {
            Ok(model) => sample_model(&model, t, view),
            Err(err) => {
                tracing::warn!(%kind, %err, "unusable parameters, sampling fallback path");
                Sampled {
                    position: fallback_position(t),
                    used_fallback: true,
                }
            }
        }
    }
}

pub(crate) fn sample_model(model: &MotionParams, t: f64, view: Option<Plane>) -> Sampled {
    let position = match view {
        Some(view) => model.sample_in_view(t, view),
        None => model.sample(t),
    };
    if position.is_finite() {
        Sampled {
            position,
            used_fallback: false,
        }
    } else {
        tracing::warn!(kind = %model.kind(), t, "non-finite sample replaced by fallback path");
        Sampled {
            position: fallback_position(t),
            used_fallback: true,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/registry.rs"]
mod tests;
