//! Typed parameter shapes and closed-form sampling for every [`AnimationType`].

pub(crate) mod curves;
pub(crate) mod physics;
pub(crate) mod planar;
pub(crate) mod procedural;

use std::f64::consts::PI;

use crate::{
    animation::kind::AnimationType,
    animation::params::{ParamReader, ParameterSet},
    foundation::core::{Plane, Position},
    foundation::error::TrajectoryResult,
};

pub use curves::{
    BezierParams, CatmullRomParams, CustomParams, DopplerParams, FormationParams, HelixParams,
    LinearParams, ZigzagParams,
};
pub use physics::{
    AttractRepelParams, BounceParams, LissajousParams, PendulumParams, SpringParams, WaveParams,
    WaveShape, ZoomParams,
};
pub use planar::{
    CircularParams, CircularScanParams, CycloidKind, EllipticalParams, EpicycloidParams,
    OrbitParams, RoseCurveParams, SpiralParams,
};
pub use procedural::{PerlinNoiseParams, RandomParams};

/// Bounded, visibly oscillating path returned when a model cannot be resolved.
pub fn fallback_position(t: f64) -> Position {
    Position::new(t * 2.0 - 1.0, (4.0 * PI * t).sin(), (6.0 * PI * t).cos())
}

/// Static description of one motion model.
#[derive(Clone, Copy, Debug)]
pub struct ModelSpec {
    /// Type tag.
    pub kind: AnimationType,
    /// Parameter holding where the animation is centered or starts.
    pub anchor_key: &'static str,
    /// Parameters that move rigidly with the anchor when it is re-positioned.
    pub linked_keys: &'static [&'static str],
    defaults: fn(Position) -> ParameterSet,
}

impl ModelSpec {
    const fn new(
        kind: AnimationType,
        anchor_key: &'static str,
        linked_keys: &'static [&'static str],
        defaults: fn(Position) -> ParameterSet,
    ) -> Self {
        Self {
            kind,
            anchor_key,
            linked_keys,
            defaults,
        }
    }

    /// Default parameters centered on (or starting at) `reference`.
    pub fn default_parameters(&self, reference: Position) -> ParameterSet {
        (self.defaults)(reference)
    }

    /// Keys this model reads, in sorted order.
    pub fn declared_keys(&self) -> Vec<String> {
        self.default_parameters(Position::ZERO)
            .keys()
            .map(str::to_owned)
            .collect()
    }
}

use AnimationType as T;

pub(crate) const MODEL_SPECS: [ModelSpec; 24] = [
    ModelSpec::new(T::Linear, "startPosition", &["endPosition"], LinearParams::defaults),
    ModelSpec::new(T::Circular, "center", &[], CircularParams::defaults),
    ModelSpec::new(T::Elliptical, "center", &[], EllipticalParams::defaults),
    ModelSpec::new(T::Spiral, "center", &[], SpiralParams::defaults),
    ModelSpec::new(T::Random, "center", &[], RandomParams::defaults),
    ModelSpec::new(T::Custom, "waypoints", &[], CustomParams::defaults),
    ModelSpec::new(T::Pendulum, "anchorPoint", &[], PendulumParams::defaults),
    ModelSpec::new(T::Bounce, "centerPoint", &[], BounceParams::defaults),
    ModelSpec::new(T::Spring, "restPosition", &[], SpringParams::defaults),
    ModelSpec::new(T::Wave, "center", &[], WaveParams::defaults),
    ModelSpec::new(T::Lissajous, "center", &[], LissajousParams::defaults),
    ModelSpec::new(T::Helix, "axisStart", &["axisEnd"], HelixParams::defaults),
    ModelSpec::new(
        T::Bezier,
        "bezierStart",
        &["bezierControl1", "bezierControl2", "bezierEnd"],
        BezierParams::defaults,
    ),
    ModelSpec::new(T::CatmullRom, "controlPoints", &[], CatmullRomParams::defaults),
    ModelSpec::new(T::Zigzag, "zigzagStart", &["zigzagEnd"], ZigzagParams::defaults),
    ModelSpec::new(T::PerlinNoise, "center", &[], PerlinNoiseParams::defaults),
    ModelSpec::new(T::RoseCurve, "center", &[], RoseCurveParams::defaults),
    ModelSpec::new(T::Epicycloid, "center", &[], EpicycloidParams::defaults),
    ModelSpec::new(T::Orbit, "center", &[], OrbitParams::defaults),
    ModelSpec::new(T::Formation, "center", &["destination"], FormationParams::defaults),
    ModelSpec::new(T::AttractRepel, "startPosition", &[], AttractRepelParams::defaults),
    ModelSpec::new(T::Doppler, "pathStart", &["pathEnd"], DopplerParams::defaults),
    ModelSpec::new(T::CircularScan, "center", &[], CircularScanParams::defaults),
    ModelSpec::new(T::Zoom, "zoomCenter", &[], ZoomParams::defaults),
];

/// Validated parameters of one animation, one variant per [`AnimationType`].
#[derive(Clone, Debug, PartialEq)]
#[allow(missing_docs)]
pub enum MotionParams {
    Linear(LinearParams),
    Circular(CircularParams),
    Elliptical(EllipticalParams),
    Spiral(SpiralParams),
    Random(RandomParams),
    Custom(CustomParams),
    Pendulum(PendulumParams),
    Bounce(BounceParams),
    Spring(SpringParams),
    Wave(WaveParams),
    Lissajous(LissajousParams),
    Helix(HelixParams),
    Bezier(BezierParams),
    CatmullRom(CatmullRomParams),
    Zigzag(ZigzagParams),
    PerlinNoise(PerlinNoiseParams),
    RoseCurve(RoseCurveParams),
    Epicycloid(EpicycloidParams),
    Orbit(OrbitParams),
    Formation(FormationParams),
    AttractRepel(AttractRepelParams),
    Doppler(DopplerParams),
    CircularScan(CircularScanParams),
    Zoom(ZoomParams),
}

impl MotionParams {
    /// Read and validate the parameters of `kind` out of `set`.
    ///
    /// Fails with [`crate::TrajectoryError::MissingParameter`] when a required key is absent
    /// or malformed. Unknown keys are ignored.
    pub fn resolve(kind: AnimationType, set: &ParameterSet) -> TrajectoryResult<Self> {
        let r = ParamReader::new(kind, set);
        Ok(match kind {
            T::Linear => Self::Linear(LinearParams::resolve(&r)?),
            T::Circular => Self::Circular(CircularParams::resolve(&r)?),
            T::Elliptical => Self::Elliptical(EllipticalParams::resolve(&r)?),
            T::Spiral => Self::Spiral(SpiralParams::resolve(&r)?),
            T::Random => Self::Random(RandomParams::resolve(&r)?),
            T::Custom => Self::Custom(CustomParams::resolve(&r)?),
            T::Pendulum => Self::Pendulum(PendulumParams::resolve(&r)?),
            T::Bounce => Self::Bounce(BounceParams::resolve(&r)?),
            T::Spring => Self::Spring(SpringParams::resolve(&r)?),
            T::Wave => Self::Wave(WaveParams::resolve(&r)?),
            T::Lissajous => Self::Lissajous(LissajousParams::resolve(&r)?),
            T::Helix => Self::Helix(HelixParams::resolve(&r)?),
            T::Bezier => Self::Bezier(BezierParams::resolve(&r)?),
            T::CatmullRom => Self::CatmullRom(CatmullRomParams::resolve(&r)?),
            T::Zigzag => Self::Zigzag(ZigzagParams::resolve(&r)?),
            T::PerlinNoise => Self::PerlinNoise(PerlinNoiseParams::resolve(&r)?),
            T::RoseCurve => Self::RoseCurve(RoseCurveParams::resolve(&r)?),
            T::Epicycloid => Self::Epicycloid(EpicycloidParams::resolve(&r)?),
            T::Orbit => Self::Orbit(OrbitParams::resolve(&r)?),
            T::Formation => Self::Formation(FormationParams::resolve(&r)?),
            T::AttractRepel => Self::AttractRepel(AttractRepelParams::resolve(&r)?),
            T::Doppler => Self::Doppler(DopplerParams::resolve(&r)?),
            T::CircularScan => Self::CircularScan(CircularScanParams::resolve(&r)?),
            T::Zoom => Self::Zoom(ZoomParams::resolve(&r)?),
        })
    }

    /// Type tag of these parameters.
    pub fn kind(&self) -> AnimationType {
        match self {
            Self::Linear(_) => T::Linear,
            Self::Circular(_) => T::Circular,
            Self::Elliptical(_) => T::Elliptical,
            Self::Spiral(_) => T::Spiral,
            Self::Random(_) => T::Random,
            Self::Custom(_) => T::Custom,
            Self::Pendulum(_) => T::Pendulum,
            Self::Bounce(_) => T::Bounce,
            Self::Spring(_) => T::Spring,
            Self::Wave(_) => T::Wave,
            Self::Lissajous(_) => T::Lissajous,
            Self::Helix(_) => T::Helix,
            Self::Bezier(_) => T::Bezier,
            Self::CatmullRom(_) => T::CatmullRom,
            Self::Zigzag(_) => T::Zigzag,
            Self::PerlinNoise(_) => T::PerlinNoise,
            Self::RoseCurve(_) => T::RoseCurve,
            Self::Epicycloid(_) => T::Epicycloid,
            Self::Orbit(_) => T::Orbit,
            Self::Formation(_) => T::Formation,
            Self::AttractRepel(_) => T::AttractRepel,
            Self::Doppler(_) => T::Doppler,
            Self::CircularScan(_) => T::CircularScan,
            Self::Zoom(_) => T::Zoom,
        }
    }

    /// Position at normalized time `t`.
    pub fn sample(&self, t: f64) -> Position {
        match self {
            Self::Linear(m) => m.sample(t),
            Self::Circular(m) => m.sample(t),
            Self::Elliptical(m) => m.sample(t),
            Self::Spiral(m) => m.sample(t),
            Self::Random(m) => m.sample(t),
            Self::Custom(m) => m.sample(t),
            Self::Pendulum(m) => m.sample(t),
            Self::Bounce(m) => m.sample(t),
            Self::Spring(m) => m.sample(t),
            Self::Wave(m) => m.sample(t),
            Self::Lissajous(m) => m.sample(t),
            Self::Helix(m) => m.sample(t),
            Self::Bezier(m) => m.sample(t),
            Self::CatmullRom(m) => m.sample(t),
            Self::Zigzag(m) => m.sample(t),
            Self::PerlinNoise(m) => m.sample(t),
            Self::RoseCurve(m) => m.sample(t),
            Self::Epicycloid(m) => m.sample(t),
            Self::Orbit(m) => m.sample(t),
            Self::Formation(m) => m.sample(t),
            Self::AttractRepel(m) => m.sample(t),
            Self::Doppler(m) => m.sample(t),
            Self::CircularScan(m) => m.sample(t),
            Self::Zoom(m) => m.sample(t),
        }
    }

    /// Position as seen from the editor plane `view`.
    ///
    /// Only the flat closed curves (`circular`, `elliptical`) react to the view; every other
    /// model samples as [`MotionParams::sample`].
    pub fn sample_in_view(&self, t: f64, view: Plane) -> Position {
        match self {
            Self::Circular(m) => m.sample_in_view(t, view),
            Self::Elliptical(m) => m.sample_in_view(t, view),
            _ => self.sample(t),
        }
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/animation/models/mod.rs"]
mod tests;
