use std::collections::{BTreeMap, BTreeSet};

use crate::{
    animation::kind::AnimationType,
    animation::params::{ParamValue, ParameterSet},
    animation::registry::MotionRegistry,
    foundation::core::Position,
    foundation::error::{TrajectoryError, TrajectoryResult},
    sync::barycentric::{centroid, offsets, weighted_centroid},
    sync::diff::{DiffOpts, diff, resolve_baseline},
    sync::transform::{ISOBARYCENTER_KEY, SyncMode, TRACK_OFFSET_KEY, TrackPlan, Transform},
};

/// Read-only view of one selected track.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackSnapshot {
    /// Track id.
    pub id: String,
    /// Where the track is now.
    pub current_position: Position,
    /// Where the track was before any animation moved it.
    pub initial_position: Position,
}

impl TrackSnapshot {
    /// Snapshot of a track resting at `position`.
    pub fn at(id: impl Into<String>, position: Position) -> Self {
        Self {
            id: id.into(),
            current_position: position,
            initial_position: position,
        }
    }

    /// Position selected by `source`.
    pub fn position(&self, source: PositionSource) -> Position {
        match source {
            PositionSource::Current => self.current_position,
            PositionSource::Initial => self.initial_position,
        }
    }
}

/// Which track position the composer works from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PositionSource {
    /// [`TrackSnapshot::current_position`].
    #[default]
    Current,
    /// [`TrackSnapshot::initial_position`].
    Initial,
}

/// Knobs of [`TransformComposer`].
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ComposerOpts {
    /// Stagger step used when a request carries none.
    pub default_phase_offset_seconds: f64,
    /// Track position used for anchors and centroids.
    pub position_source: PositionSource,
    /// Float tolerance of the user-modification check.
    pub tolerance: f64,
}

impl Default for ComposerOpts {
    fn default() -> Self {
        Self {
            default_phase_offset_seconds: 0.5,
            position_source: PositionSource::Current,
            tolerance: 1e-6,
        }
    }
}

/// Everything needed to distribute one animation across tracks.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransformRequest {
    /// Requested synchronization mode.
    pub mode: SyncMode,
    /// Selected tracks, in selection order.
    pub tracks: Vec<TrackSnapshot>,
    /// Base animation type.
    #[serde(rename = "type")]
    pub kind: AnimationType,
    /// Base animation parameters.
    #[serde(default)]
    pub parameters: ParameterSet,
    /// Reference point of [`SyncMode::Centered`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_center: Option<Position>,
    /// Stagger step of the phase-offset modes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phase_offset_seconds: Option<f64>,
    /// Parameters captured when the animation was first created.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_parameters: Option<ParameterSet>,
    /// Per-track weights of the formation center, in track order; must sum to 1.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weights: Option<Vec<f64>>,
}

impl TransformRequest {
    /// Request with no custom center, stagger step, or recorded original.
    pub fn new(
        mode: SyncMode,
        tracks: Vec<TrackSnapshot>,
        kind: AnimationType,
        parameters: ParameterSet,
    ) -> Self {
        Self {
            mode,
            tracks,
            kind,
            parameters,
            custom_center: None,
            phase_offset_seconds: None,
            original_parameters: None,
            weights: None,
        }
    }

    /// Set the reference point of centered plans.
    pub fn custom_center(mut self, center: Position) -> Self {
        self.custom_center = Some(center);
        self
    }

    /// Set the stagger step.
    pub fn phase_offset_seconds(mut self, seconds: f64) -> Self {
        self.phase_offset_seconds = Some(seconds);
        self
    }

    /// Set the parameters recorded at creation, used as the modification baseline.
    pub fn original_parameters(mut self, original: ParameterSet) -> Self {
        self.original_parameters = Some(original);
        self
    }

    /// Weight the formation center instead of using the plain mean.
    pub fn weights(mut self, weights: Vec<f64>) -> Self {
        self.weights = Some(weights);
        self
    }
}

/// Builds [`Transform`]s from [`TransformRequest`]s.
#[derive(Clone, Copy, Debug)]
pub struct TransformComposer<'a> {
    registry: &'a MotionRegistry,
    opts: ComposerOpts,
}

impl<'a> TransformComposer<'a> {
    /// Composer over `registry` with default options.
    pub fn new(registry: &'a MotionRegistry) -> Self {
        Self::with_opts(registry, ComposerOpts::default())
    }

    /// Composer over `registry` with `opts`.
    pub fn with_opts(registry: &'a MotionRegistry, opts: ComposerOpts) -> Self {
        Self { registry, opts }
    }

    /// Options in use.
    pub fn opts(&self) -> ComposerOpts {
        self.opts
    }

    /// Distribute the request's animation across its tracks.
    ///
    /// Fewer than two tracks turn the relative and rigid modes into
    /// [`SyncMode::Identical`]. Fails only on malformed input: duplicate track ids,
    /// non-finite positions, or formation weights that do not fit the tracks.
    #[tracing::instrument(
        skip(self, req),
        fields(mode = %req.mode, kind = %req.kind, tracks = req.tracks.len())
    )]
    pub fn build(&self, req: &TransformRequest) -> TrajectoryResult<Transform> {
        validate_tracks(&req.tracks)?;
        let positions: Vec<Position> = req
            .tracks
            .iter()
            .map(|t| t.position(self.opts.position_source))
            .collect();

        let mode = if req.mode.needs_group() && req.tracks.len() < 2 {
            tracing::debug!(requested = %req.mode, "single track, using identical plan");
            SyncMode::Identical
        } else {
            req.mode
        };

        let step = if mode.staggers() {
            Some(self.stagger_step(req.phase_offset_seconds))
        } else {
            None
        };

        let mut transform = Transform {
            mode,
            per_track: BTreeMap::new(),
            centroid: None,
            phase_offset_seconds: step,
        };

        let patches = if mode.re_anchors() {
            self.relative_patches(req, &positions)
        } else if mode.is_rigid() {
            let center = match (mode, req.custom_center) {
                (SyncMode::Centered, Some(c)) if c.is_finite() => c,
                (SyncMode::Centered, _) => {
                    tracing::warn!("centered mode without a usable custom center, using centroid");
                    group_center(req, &positions)?
                }
                _ => group_center(req, &positions)?,
            };
            transform.centroid = Some(center);
            rigid_patches(center, &positions)
        } else {
            vec![ParameterSet::new(); positions.len()]
        };

        for (i, (track, patch)) in req.tracks.iter().zip(patches).enumerate() {
            transform.per_track.insert(
                track.id.clone(),
                TrackPlan {
                    parameter_patch: patch,
                    start_time_offset_seconds: step.map_or(0.0, |s| s * i as f64),
                },
            );
        }
        Ok(transform)
    }

    fn stagger_step(&self, requested: Option<f64>) -> f64 {
        let step = requested.unwrap_or(self.opts.default_phase_offset_seconds);
        if step.is_finite() && step >= 0.0 {
            step
        } else {
            tracing::warn!(step, "phase offset must be finite and >= 0, clamping to 0");
            0.0
        }
    }

    fn relative_patches(
        &self,
        req: &TransformRequest,
        positions: &[Position],
    ) -> Vec<ParameterSet> {
        let spec = self.registry.entry(req.kind);
        let anchor_key = spec.anchor_key;
        // The base animation is authored at the first selected track.
        let reference = positions.first().copied().unwrap_or(Position::ZERO);
        let baseline = resolve_baseline(
            self.registry,
            req.kind,
            req.original_parameters.as_ref(),
            reference,
        );
        let modified = diff(
            req.kind,
            &req.parameters,
            &baseline,
            DiffOpts {
                tolerance: self.opts.tolerance,
            },
        );
        let anchor_value = req.parameters.get(anchor_key);
        // A missing anchor is unusable input, not a user edit.
        let anchor_modified =
            anchor_value.is_some() && modified.get(anchor_key).copied().unwrap_or(false);
        if anchor_modified {
            tracing::debug!(anchor_key, "anchor edited by user, tracks share it");
        }

        positions
            .iter()
            .enumerate()
            .map(|(i, pos)| {
                // Each track replays the group's motion shifted by its offset from the
                // authoring point.
                let delta = *pos - reference;
                let mut patch = ParameterSet::new();
                match anchor_value {
                    Some(_) if i == 0 || anchor_modified => {}
                    Some(value) => {
                        if let Some(moved) = value.translated(delta) {
                            patch.insert(anchor_key, moved);
                        }
                        for key in spec.linked_keys {
                            if let Some(moved) =
                                req.parameters.get(key).and_then(|v| v.translated(delta))
                            {
                                patch.insert(*key, moved);
                            }
                        }
                    }
                    None => {
                        let moved = baseline
                            .get(anchor_key)
                            .and_then(|v| v.translated(delta))
                            .unwrap_or(ParamValue::Position(*pos));
                        patch.insert(anchor_key, moved);
                    }
                }
                patch
            })
            .collect()
    }
}

/// Formation center: weighted when the request carries weights, else the plain mean.
fn group_center(req: &TransformRequest, positions: &[Position]) -> TrajectoryResult<Position> {
    match &req.weights {
        Some(weights) => weighted_centroid(positions, weights),
        None => Ok(centroid(positions)),
    }
}

fn rigid_patches(center: Position, positions: &[Position]) -> Vec<ParameterSet> {
    offsets(positions, center)
        .into_iter()
        .map(|offset| {
            ParameterSet::new()
                .with(ISOBARYCENTER_KEY, center)
                .with(TRACK_OFFSET_KEY, offset)
        })
        .collect()
}

fn validate_tracks(tracks: &[TrackSnapshot]) -> TrajectoryResult<()> {
    let mut seen = BTreeSet::new();
    for track in tracks {
        if !seen.insert(track.id.as_str()) {
            return Err(TrajectoryError::validation(format!(
                "track '{}' selected twice",
                track.id
            )));
        }
        if !track.current_position.is_finite() || !track.initial_position.is_finite() {
            return Err(TrajectoryError::validation(format!(
                "track '{}' has a non-finite position",
                track.id
            )));
        }
    }
    Ok(())
}

/// Build a [`Transform`] with the built-in registry and default options.
///
/// `kind` is the animation type tag; unknown tags fail with
/// [`TrajectoryError::UnknownAnimationType`].
pub fn build_transform(
    mode: SyncMode,
    tracks: &[TrackSnapshot],
    kind: &str,
    parameters: &ParameterSet,
    custom_center: Option<Position>,
    phase_offset_seconds: Option<f64>,
) -> TrajectoryResult<Transform> {
    let kind: AnimationType = kind.parse()?;
    let req = TransformRequest {
        mode,
        tracks: tracks.to_vec(),
        kind,
        parameters: parameters.clone(),
        custom_center,
        phase_offset_seconds,
        original_parameters: None,
        weights: None,
    };
    TransformComposer::new(MotionRegistry::builtin()).build(&req)
}

#[cfg(test)]
#[path = "../../tests/unit/sync/composer.rs"]
mod tests;
