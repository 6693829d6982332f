use std::collections::BTreeMap;

use crate::{
    animation::params::ParameterSet,
    animation::playback::normalized_time,
    animation::registry::MotionRegistry,
    animation::sampler::AnimationSpec,
    foundation::core::Position,
    foundation::error::{TrajectoryError, TrajectoryResult},
};

/// Patch key holding the shared centroid of a formation plan.
pub const ISOBARYCENTER_KEY: &str = "_isobarycenter";
/// Patch key holding a track's rigid offset from the formation reference.
pub const TRACK_OFFSET_KEY: &str = "_trackOffset";

/// How one base animation is distributed across the selected tracks.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SyncMode {
    /// Every track shares the parameters and starts together.
    #[default]
    Identical,
    /// Shared parameters, starts staggered in selection order.
    PhaseOffset,
    /// Each track re-anchored on its own position.
    PositionRelative,
    /// Re-anchored and staggered.
    PhaseOffsetRelative,
    /// Rigid offsets from the centroid of the tracks, which follows the base path.
    #[serde(alias = "isobarycenter")]
    Formation,
    /// Rigid offsets from a caller-chosen point.
    Centered,
}

impl SyncMode {
    /// Every mode, in declaration order.
    pub const ALL: [SyncMode; 6] = [
        Self::Identical,
        Self::PhaseOffset,
        Self::PositionRelative,
        Self::PhaseOffsetRelative,
        Self::Formation,
        Self::Centered,
    ];

    /// Kebab-case tag.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Identical => "identical",
            Self::PhaseOffset => "phase-offset",
            Self::PositionRelative => "position-relative",
            Self::PhaseOffsetRelative => "phase-offset-relative",
            Self::Formation => "formation",
            Self::Centered => "centered",
        }
    }

    /// Start times are staggered.
    pub fn staggers(self) -> bool {
        matches!(self, Self::PhaseOffset | Self::PhaseOffsetRelative)
    }

    /// Tracks are re-anchored on their own positions.
    pub fn re_anchors(self) -> bool {
        matches!(self, Self::PositionRelative | Self::PhaseOffsetRelative)
    }

    /// Tracks keep rigid offsets from a shared reference point.
    pub fn is_rigid(self) -> bool {
        matches!(self, Self::Formation | Self::Centered)
    }

    /// Needs at least two tracks to differ from [`SyncMode::Identical`].
    pub fn needs_group(self) -> bool {
        self.re_anchors() || self.is_rigid()
    }
}

impl std::fmt::Display for SyncMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for SyncMode {
    type Err = TrajectoryError;

    fn from_str(s: &str) -> TrajectoryResult<Self> {
        match s.trim() {
            "isobarycenter" => Ok(Self::Formation),
            tag => Self::ALL
                .iter()
                .copied()
                .find(|m| m.as_str() == tag)
                .ok_or_else(|| TrajectoryError::validation(format!("unknown sync mode '{tag}'"))),
        }
    }
}

/// What one track does differently from the base animation.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackPlan {
    /// Parameters written over the base bag for this track.
    #[serde(default)]
    pub parameter_patch: ParameterSet,
    /// Delay before this track starts, seconds, `>= 0`.
    #[serde(default)]
    pub start_time_offset_seconds: f64,
}

/// Durable per-track plan of a multi-track animation.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transform {
    /// Mode the plan was built with (after degeneration to `identical`).
    pub mode: SyncMode,
    /// Plan per track id.
    #[serde(default)]
    pub per_track: BTreeMap<String, TrackPlan>,
    /// Reference point of rigid plans.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub centroid: Option<Position>,
    /// Stagger step of staggered plans.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phase_offset_seconds: Option<f64>,
}

impl Transform {
    /// Plan of `track_id`, if the track is part of this transform.
    pub fn plan(&self, track_id: &str) -> Option<&TrackPlan> {
        self.per_track.get(track_id)
    }

    /// Start delay of `track_id`; `0` for unknown tracks.
    pub fn start_offset(&self, track_id: &str) -> f64 {
        self.plan(track_id)
            .map_or(0.0, |p| p.start_time_offset_seconds)
    }

    /// Rigid offset of `track_id` from the base path; zero outside rigid plans.
    pub fn track_offset(&self, track_id: &str) -> Position {
        self.plan(track_id)
            .and_then(|p| p.parameter_patch.position(TRACK_OFFSET_KEY))
            .unwrap_or(Position::ZERO)
    }

    /// Effective parameters of `track_id`: its patch over `base`, internal keys excluded.
    pub fn parameters_for(&self, track_id: &str, base: &ParameterSet) -> ParameterSet {
        match self.plan(track_id) {
            Some(plan) => base.merged(&plan.parameter_patch.without_internal()),
            None => base.clone(),
        }
    }

    /// Playback position of `track_id` at normalized time `t`.
    pub fn position_at(
        &self,
        registry: &MotionRegistry,
        spec: &AnimationSpec,
        track_id: &str,
        t: f64,
    ) -> Position {
        let params = self.parameters_for(track_id, &spec.parameters);
        registry.sample(spec.kind, &params, spec.ease.apply(t)) + self.track_offset(track_id)
    }

    /// Playback position of `track_id` at `elapsed` seconds, or `None` before it starts.
    pub fn position_at_time(
        &self,
        registry: &MotionRegistry,
        spec: &AnimationSpec,
        track_id: &str,
        elapsed: f64,
    ) -> Option<Position> {
        let t = normalized_time(elapsed, spec, self.start_offset(track_id))?;
        Some(self.position_at(registry, spec, track_id, t))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/sync/transform.rs"]
mod tests;
