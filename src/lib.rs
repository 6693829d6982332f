//! Trajectory is an animation trajectory and multi-track transform engine.
//!
//! It maps `(animation type, parameters, normalized time)` to 3D positions for playback and
//! live preview, and distributes one base animation across several tracks.
//!
//! # Pipeline overview
//!
//! 1. **Resolve**: `AnimationType + ParameterSet -> MotionParams` (typed, validated parameters)
//! 2. **Sample**: `AnimationSpec -> Vec<Position>` via [`sample_path`] (preview paths)
//! 3. **Compose**: `TransformRequest -> Transform` via [`TransformComposer`] (per-track patches
//!    and start offsets)
//! 4. **Play back**: `Transform + elapsed seconds -> Position` via [`Transform::position_at_time`]
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Pure**: sampling and composition hold no state; identical inputs give identical output,
//!   seeded stochastic models included.
//! - **Always usable**: unusable parameters yield a bounded fallback path and a `tracing`
//!   warning instead of an error; too few tracks collapse to the identical plan.
//! - **Fail fast on bad tags**: unknown animation types are reported as
//!   [`TrajectoryError::UnknownAnimationType`].
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod foundation;
mod record;
mod sync;

pub use animation::ease::Ease;
pub use animation::kind::AnimationType;
pub use animation::models::{
    AttractRepelParams, BezierParams, BounceParams, CatmullRomParams, CircularParams,
    CircularScanParams, CustomParams, CycloidKind, DopplerParams, EllipticalParams,
    EpicycloidParams, FormationParams, HelixParams, LinearParams, LissajousParams, ModelSpec,
    MotionParams, OrbitParams, PendulumParams, PerlinNoiseParams, RandomParams, RoseCurveParams,
    SpiralParams, SpringParams, WaveParams, WaveShape, ZigzagParams, ZoomParams,
    fallback_position,
};
pub use animation::params::{ParamValue, ParameterSet};
pub use animation::playback::{CycleMode, is_complete, normalized_time};
pub use animation::registry::{MotionRegistry, Sampled};
pub use animation::sampler::{AnimationSpec, PathIter, PathOptions, sample_path};
pub use foundation::core::{Axis, Lerp, Plane, Position, Vec2};
pub use foundation::error::{TrajectoryError, TrajectoryResult};
pub use record::AnimationRecord;
pub use sync::barycentric::{centroid, offsets, weighted_centroid};
pub use sync::composer::{
    ComposerOpts, PositionSource, TrackSnapshot, TransformComposer, TransformRequest,
    build_transform,
};
pub use sync::diff::{DiffOpts, diff, resolve_baseline};
pub use sync::transform::{ISOBARYCENTER_KEY, SyncMode, TRACK_OFFSET_KEY, TrackPlan, Transform};
