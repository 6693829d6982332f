use crate::{
    animation::ease::Ease,
    animation::kind::AnimationType,
    animation::models::{MotionParams, fallback_position},
    animation::params::ParameterSet,
    animation::registry::{MotionRegistry, sample_model},
    foundation::core::{Plane, Position},
    foundation::error::{TrajectoryError, TrajectoryResult},
};

/// One animation as authored: a typed, timed motion over a parameter bag.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnimationSpec {
    /// Motion model.
    #[serde(rename = "type")]
    pub kind: AnimationType,
    /// Model parameters.
    #[serde(default)]
    pub parameters: ParameterSet,
    /// Length of one pass in seconds, `> 0`.
    pub duration: f64,
    /// Restart after each pass.
    #[serde(rename = "loop", default)]
    pub looping: bool,
    /// Alternate direction on every pass.
    #[serde(default)]
    pub ping_pong: bool,
    /// Remapping of normalized time before sampling.
    #[serde(default)]
    pub ease: Ease,
}

impl AnimationSpec {
    /// Non-looping linear-time spec.
    pub fn new(kind: AnimationType, parameters: ParameterSet, duration: f64) -> Self {
        Self {
            kind,
            parameters,
            duration,
            looping: false,
            ping_pong: false,
            ease: Ease::Linear,
        }
    }

    /// Check the timing fields.
    pub fn validate(&self) -> TrajectoryResult<()> {
        if !self.duration.is_finite() || self.duration <= 0.0 {
            return Err(TrajectoryError::validation(format!(
                "animation duration must be finite and > 0, got {}",
                self.duration
            )));
        }
        Ok(())
    }
}

/// Knobs of [`sample_path`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PathOptions {
    /// Number of steps; the path holds `num_samples + 1` points.
    pub num_samples: usize,
    /// Editor plane the path is previewed in, if any.
    pub view: Option<Plane>,
}

impl Default for PathOptions {
    fn default() -> Self {
        Self {
            num_samples: 100,
            view: None,
        }
    }
}

impl PathOptions {
    /// Default options with `num_samples` steps.
    pub fn with_samples(num_samples: usize) -> Self {
        Self {
            num_samples,
            ..Self::default()
        }
    }
}

/// Preview path of `spec`: `num_samples + 1` points at `t = i / num_samples`.
///
/// Pure: identical inputs give identical output, seeded models included. Parameters that
/// cannot be resolved produce the fallback path instead of an error.
#[tracing::instrument(skip(spec), fields(kind = %spec.kind))]
pub fn sample_path(spec: &AnimationSpec, opts: PathOptions) -> TrajectoryResult<Vec<Position>> {
    Ok(PathIter::for_spec(spec, opts)?.collect())
}

/// Restartable iterator over a preview path.
#[derive(Clone, Debug)]
pub struct PathIter {
    model: Option<MotionParams>,
    ease: Ease,
    view: Option<Plane>,
    steps: usize,
    next: usize,
}

impl PathIter {
    fn new(model: Option<MotionParams>, ease: Ease, view: Option<Plane>, steps: usize) -> Self {
        Self {
            model,
            ease,
            view,
            steps,
            next: 0,
        }
    }

    /// Iterator over the preview path of `spec`, or the fallback path if its parameters are
    /// unusable.
    pub fn for_spec(spec: &AnimationSpec, opts: PathOptions) -> TrajectoryResult<Self> {
        spec.validate()?;
        if opts.num_samples == 0 {
            return Err(TrajectoryError::validation("num_samples must be > 0"));
        }
        let model = match MotionRegistry::builtin().resolve(spec.kind, &spec.parameters) {
            Ok(model) => Some(model),
            Err(err) => {
                tracing::warn!(
                    kind = %spec.kind,
                    %err,
                    "unusable parameters, previewing fallback path"
                );
                None
            }
        };
        Ok(Self::new(model, spec.ease, opts.view, opts.num_samples))
    }

    /// True when the parameters could not be resolved and the fallback path is produced.
    pub fn used_fallback(&self) -> bool {
        self.model.is_none()
    }
}

impl Iterator for PathIter {
    type Item = Position;

    fn next(&mut self) -> Option<Position> {
        if self.next > self.steps {
            return None;
        }
        let t = self.next as f64 / self.steps as f64;
        self.next += 1;
        let t = self.ease.apply(t);
        Some(match &self.model {
            Some(model) => sample_model(model, t, self.view).position,
            None => fallback_position(t),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = (self.steps + 1).saturating_sub(self.next);
        (left, Some(left))
    }
}

impl ExactSizeIterator for PathIter {}

#[cfg(test)]
#[path = "../../tests/unit/animation/sampler.rs"]
mod tests;
