use crate::foundation::error::{TrajectoryError, TrajectoryResult};

/// Closed set of motion model tags.
///
/// Serialized as the kebab-case tag (`"catmull-rom"`, `"perlin-noise"`, ...).
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum AnimationType {
    /// Straight segment between two points.
    Linear,
    /// Full or partial circle in an axis-aligned plane.
    Circular,
    /// Ellipse in an axis-aligned plane.
    Elliptical,
    /// Planar spiral with optional drift along the plane normal.
    Spiral,
    /// Seeded random walk between waypoints inside a box.
    Random,
    /// User-drawn polyline through waypoints.
    Custom,
    /// Swinging pendulum hanging from an anchor point.
    Pendulum,
    /// Decaying vertical bounces.
    Bounce,
    /// Damped spring oscillation around a rest position.
    Spring,
    /// Periodic oscillation around a center (sine/square/triangle/sawtooth).
    Wave,
    /// Lissajous figure.
    Lissajous,
    /// Helix wound around an arbitrary axis.
    Helix,
    /// Cubic Bezier curve.
    Bezier,
    /// Catmull-Rom spline through control points.
    CatmullRom,
    /// Zigzag between two points.
    Zigzag,
    /// Seeded fractal value noise around a center.
    PerlinNoise,
    /// Rose (rhodonea) curve.
    RoseCurve,
    /// Epicycloid or hypocycloid.
    Epicycloid,
    /// Inclined circular orbit.
    Orbit,
    /// Eased translation of a formation reference point.
    Formation,
    /// Oscillation between a start point and an attractor.
    AttractRepel,
    /// Fly-by pass with a fast middle section.
    Doppler,
    /// Circular sweep at a fixed elevation.
    CircularScan,
    /// Approach or retreat along a direction from a center.
    Zoom,
}

impl AnimationType {
    /// Every registered type, in declaration order.
    pub const ALL: [AnimationType; 24] = [
        Self::Linear,
        Self::Circular,
        Self::Elliptical,
        Self::Spiral,
        Self::Random,
        Self::Custom,
        Self::Pendulum,
        Self::Bounce,
        Self::Spring,
        Self::Wave,
        Self::Lissajous,
        Self::Helix,
        Self::Bezier,
        Self::CatmullRom,
        Self::Zigzag,
        Self::PerlinNoise,
        Self::RoseCurve,
        Self::Epicycloid,
        Self::Orbit,
        Self::Formation,
        Self::AttractRepel,
        Self::Doppler,
        Self::CircularScan,
        Self::Zoom,
    ];

    /// Kebab-case tag.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::Circular => "circular",
            Self::Elliptical => "elliptical",
            Self::Spiral => "spiral",
            Self::Random => "random",
            Self::Custom => "custom",
            Self::Pendulum => "pendulum",
            Self::Bounce => "bounce",
            Self::Spring => "spring",
            Self::Wave => "wave",
            Self::Lissajous => "lissajous",
            Self::Helix => "helix",
            Self::Bezier => "bezier",
            Self::CatmullRom => "catmull-rom",
            Self::Zigzag => "zigzag",
            Self::PerlinNoise => "perlin-noise",
            Self::RoseCurve => "rose-curve",
            Self::Epicycloid => "epicycloid",
            Self::Orbit => "orbit",
            Self::Formation => "formation",
            Self::AttractRepel => "attract-repel",
            Self::Doppler => "doppler",
            Self::CircularScan => "circular-scan",
            Self::Zoom => "zoom",
        }
    }
}

impl std::fmt::Display for AnimationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for AnimationType {
    type Err = TrajectoryError;

    fn from_str(s: &str) -> TrajectoryResult<Self> {
        let tag = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str() == tag)
            .ok_or_else(|| TrajectoryError::unknown_type(tag))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/kind.rs"]
mod tests;
