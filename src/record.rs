//! Stored shape of a saved animation.

use std::collections::BTreeSet;

use crate::{
    animation::ease::Ease,
    animation::kind::AnimationType,
    animation::params::ParameterSet,
    animation::registry::MotionRegistry,
    animation::sampler::AnimationSpec,
    foundation::core::Position,
    foundation::error::{TrajectoryError, TrajectoryResult},
    sync::transform::Transform,
};

/// A saved animation together with its per-track plan.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnimationRecord {
    /// Stable id.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Motion model.
    #[serde(rename = "type")]
    pub kind: AnimationType,
    /// Length of one pass in seconds.
    pub duration: f64,
    /// Restart after each pass.
    #[serde(rename = "loop", default)]
    pub looping: bool,
    /// Alternate direction on every pass.
    #[serde(default)]
    pub ping_pong: bool,
    /// Time remapping.
    #[serde(default)]
    pub ease: Ease,
    /// Base parameters.
    #[serde(default)]
    pub parameters: ParameterSet,
    /// Tracks the animation applies to, in selection order.
    #[serde(default)]
    pub track_ids: Vec<String>,
    /// Per-track plan.
    #[serde(default)]
    pub transform: Transform,
    /// Parameters as first created; baseline for detecting user edits.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_parameters: Option<ParameterSet>,
}

impl AnimationRecord {
    /// Record for `spec` applied to `track_ids` through `transform`.
    ///
    /// The current parameters become the recorded original.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        spec: AnimationSpec,
        track_ids: Vec<String>,
        transform: Transform,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind: spec.kind,
            duration: spec.duration,
            looping: spec.looping,
            ping_pong: spec.ping_pong,
            ease: spec.ease,
            original_parameters: Some(spec.parameters.clone()),
            parameters: spec.parameters,
            track_ids,
            transform,
        }
    }

    /// The animation spec carried by this record.
    pub fn spec(&self) -> AnimationSpec {
        AnimationSpec {
            kind: self.kind,
            parameters: self.parameters.clone(),
            duration: self.duration,
            looping: self.looping,
            ping_pong: self.ping_pong,
            ease: self.ease,
        }
    }

    /// Check timing, track list, and plan consistency.
    pub fn validate(&self) -> TrajectoryResult<()> {
        if self.id.trim().is_empty() {
            return Err(TrajectoryError::validation("animation id must be non-empty"));
        }
        self.spec().validate()?;

        let mut seen = BTreeSet::new();
        for id in &self.track_ids {
            if !seen.insert(id.as_str()) {
                return Err(TrajectoryError::validation(format!(
                    "track '{id}' listed twice"
                )));
            }
        }
        for (id, plan) in &self.transform.per_track {
            if !seen.contains(id.as_str()) {
                return Err(TrajectoryError::validation(format!(
                    "transform references unselected track '{id}'"
                )));
            }
            let offset = plan.start_time_offset_seconds;
            if !offset.is_finite() || offset < 0.0 {
                return Err(TrajectoryError::validation(format!(
                    "track '{id}' start offset must be finite and >= 0"
                )));
            }
        }
        if self.transform.mode.staggers() {
            let mut last = 0.0;
            for id in &self.track_ids {
                let offset = self.transform.start_offset(id);
                if offset < last {
                    return Err(TrajectoryError::validation(format!(
                        "start offsets must not decrease in selection order (track '{id}')"
                    )));
                }
                last = offset;
            }
        }
        Ok(())
    }

    /// Playback position of `track_id` at `elapsed` seconds, or `None` before it starts.
    pub fn position_at_time(
        &self,
        registry: &MotionRegistry,
        track_id: &str,
        elapsed: f64,
    ) -> Option<Position> {
        self.transform
            .position_at_time(registry, &self.spec(), track_id, elapsed)
    }
}

#[cfg(test)]
#[path = "../tests/unit/record.rs"]
mod tests;
