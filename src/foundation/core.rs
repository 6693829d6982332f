use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

use crate::foundation::error::{TrajectoryError, TrajectoryResult};

pub use kurbo::Vec2;

/// Linear interpolation between two values of the same type.
pub trait Lerp: Sized {
    /// Interpolate from `a` (at `t = 0`) to `b` (at `t = 1`).
    fn lerp(a: &Self, b: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        a + (b - a) * t
    }
}

impl Lerp for Position {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Position::new(
            a.x + (b.x - a.x) * t,
            a.y + (b.y - a.y) * t,
            a.z + (b.z - a.z) * t,
        )
    }
}

/// A point in 3-D space, in meters.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Position {
    /// X coordinate.
    pub x: f64,
    /// Y coordinate.
    pub y: f64,
    /// Z coordinate.
    pub z: f64,
}

impl Position {
    /// The origin.
    pub const ZERO: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    /// Build a position from its components.
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Dot product.
    pub fn dot(self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Cross product.
    pub fn cross(self, other: Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Euclidean length.
    pub fn length(self) -> f64 {
        self.dot(self).sqrt()
    }

    /// Unit vector in the same direction, or `None` when the length is (near) zero.
    pub fn normalized(self) -> Option<Self> {
        let len = self.length();
        if !len.is_finite() || len < 1e-12 {
            return None;
        }
        Some(self / len)
    }

    /// True when every component is finite.
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    /// Componentwise comparison with an absolute tolerance.
    pub fn approx_eq(self, other: Self, tolerance: f64) -> bool {
        (self.x - other.x).abs() <= tolerance
            && (self.y - other.y).abs() <= tolerance
            && (self.z - other.z).abs() <= tolerance
    }

    /// Read the component along `axis`.
    pub fn get(self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
        }
    }
}

impl Add for Position {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl AddAssign for Position {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for Position {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl SubAssign for Position {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl Neg for Position {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

impl Mul<f64> for Position {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl Div<f64> for Position {
    type Output = Self;

    fn div(self, rhs: f64) -> Self {
        Self::new(self.x / rhs, self.y / rhs, self.z / rhs)
    }
}

/// Cartesian axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// X axis.
    X,
    /// Y axis.
    Y,
    /// Z axis.
    Z,
}

impl Axis {
    /// Unit vector along this axis.
    pub fn unit(self) -> Position {
        match self {
            Self::X => Position::new(1.0, 0.0, 0.0),
            Self::Y => Position::new(0.0, 1.0, 0.0),
            Self::Z => Position::new(0.0, 0.0, 1.0),
        }
    }
}

/// Axis-aligned plane used by planar motion models and 2-D editor views.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Plane {
    /// Horizontal plane spanned by X and Y.
    #[default]
    Xy,
    /// Vertical plane spanned by X and Z.
    Xz,
    /// Vertical plane spanned by Y and Z.
    Yz,
}

impl Plane {
    /// In-plane axes `(u, v)` in canonical order.
    pub fn axes(self) -> (Axis, Axis) {
        match self {
            Self::Xy => (Axis::X, Axis::Y),
            Self::Xz => (Axis::X, Axis::Z),
            Self::Yz => (Axis::Y, Axis::Z),
        }
    }

    /// Axis perpendicular to the plane.
    pub fn normal(self) -> Axis {
        match self {
            Self::Xy => Axis::Z,
            Self::Xz => Axis::Y,
            Self::Yz => Axis::X,
        }
    }

    /// Place the in-plane coordinates `uv` relative to `origin`.
    pub fn embed(self, origin: Position, uv: Vec2) -> Position {
        let (u, v) = self.axes();
        origin + u.unit() * uv.x + v.unit() * uv.y
    }

    /// Project a position onto the in-plane coordinates.
    pub fn project(self, p: Position) -> Vec2 {
        let (u, v) = self.axes();
        Vec2::new(p.get(u), p.get(v))
    }

    /// First in-plane axis of `self` that also lies in `other`.
    ///
    /// Two distinct axis-aligned planes always share exactly one axis.
    pub fn shared_axis(self, other: Plane) -> Axis {
        let (u, v) = self.axes();
        let (ou, ov) = other.axes();
        if u == ou || u == ov { u } else { v }
    }

    /// Lowercase tag as used in parameter bags.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Xy => "xy",
            Self::Xz => "xz",
            Self::Yz => "yz",
        }
    }
}

impl std::str::FromStr for Plane {
    type Err = TrajectoryError;

    fn from_str(s: &str) -> TrajectoryResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "xy" => Ok(Self::Xy),
            "xz" => Ok(Self::Xz),
            "yz" => Ok(Self::Yz),
            other => Err(TrajectoryError::validation(format!(
                "unknown plane '{other}' (expected xy, xz or yz)"
            ))),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
