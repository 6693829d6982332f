//! Closed-form curves living in an axis-aligned plane around a center.

use std::f64::consts::TAU;

use crate::{
    animation::params::{ParamReader, ParameterSet},
    foundation::core::{Lerp, Plane, Position, Vec2},
    foundation::error::TrajectoryResult,
    foundation::math::{deg_to_rad, turns},
};

fn angle_at(start_deg: f64, end_deg: f64, t: f64) -> f64 {
    deg_to_rad(<f64 as Lerp>::lerp(&start_deg, &end_deg, t))
}

/// Degenerate 1-D projection used when a planar curve is viewed from a plane it does
/// not live in: the diameter along the axis both planes share.
fn diameter(center: Position, plane: Plane, view: Plane, half_extent: f64, t: f64) -> Position {
    let axis = plane.shared_axis(view).unit();
    Position::lerp(
        &(center - axis * half_extent),
        &(center + axis * half_extent),
        t,
    )
}

#[derive(Clone, Debug, PartialEq)]
/// `circular`: arc of a circle in `plane`.
pub struct CircularParams {
    /// Circle center.
    pub center: Position,
    /// Circle radius.
    pub radius: f64,
    /// Angle at `t = 0`, degrees.
    pub start_angle: f64,
    /// Angle at `t = 1`, degrees.
    pub end_angle: f64,
    /// Plane of the circle.
    pub plane: Plane,
}

impl CircularParams {
    pub(crate) fn resolve(r: &ParamReader<'_>) -> TrajectoryResult<Self> {
        Ok(Self {
            center: r.position("center")?,
            radius: r.number("radius")?.abs(),
            start_angle: r.number_or("startAngle", 0.0),
            end_angle: r.number_or("endAngle", 360.0),
            plane: r.plane_or("plane", Plane::Xy),
        })
    }

    pub(crate) fn defaults(reference: Position) -> ParameterSet {
        ParameterSet::new()
            .with("center", reference)
            .with("radius", 3.0)
            .with("startAngle", 0.0)
            .with("endAngle", 360.0)
            .with("plane", Plane::Xy)
    }

    /// Position at normalized time `t`.
    pub fn sample(&self, t: f64) -> Position {
        let a = angle_at(self.start_angle, self.end_angle, t);
        self.plane.embed(
            self.center,
            Vec2::new(self.radius * a.cos(), self.radius * a.sin()),
        )
    }

    /// Position as seen from the editor plane `view`.
    pub fn sample_in_view(&self, t: f64, view: Plane) -> Position {
        if view == self.plane {
            self.sample(t)
        } else {
            diameter(self.center, self.plane, view, self.radius, t)
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
/// `elliptical`: ellipse in `plane` with independent semi-axes.
pub struct EllipticalParams {
    /// Ellipse center.
    pub center: Position,
    /// Semi-axis along the first in-plane axis.
    pub radius_x: f64,
    /// Semi-axis along the second in-plane axis.
    pub radius_y: f64,
    /// Angle at `t = 0`, degrees.
    pub start_angle: f64,
    /// Angle at `t = 1`, degrees.
    pub end_angle: f64,
    /// Plane of the ellipse.
    pub plane: Plane,
}

impl EllipticalParams {
    pub(crate) fn resolve(r: &ParamReader<'_>) -> TrajectoryResult<Self> {
        Ok(Self {
            center: r.position("center")?,
            radius_x: r.number("radiusX")?.abs(),
            radius_y: r.number("radiusY")?.abs(),
            start_angle: r.number_or("startAngle", 0.0),
            end_angle: r.number_or("endAngle", 360.0),
            plane: r.plane_or("plane", Plane::Xy),
        })
    }

    pub(crate) fn defaults(reference: Position) -> ParameterSet {
        ParameterSet::new()
            .with("center", reference)
            .with("radiusX", 4.0)
            .with("radiusY", 2.0)
            .with("startAngle", 0.0)
            .with("endAngle", 360.0)
            .with("plane", Plane::Xy)
    }

    /// Position at normalized time `t`.
    pub fn sample(&self, t: f64) -> Position {
        let a = angle_at(self.start_angle, self.end_angle, t);
        self.plane.embed(
            self.center,
            Vec2::new(self.radius_x * a.cos(), self.radius_y * a.sin()),
        )
    }

    /// Position as seen from the editor plane `view`.
    pub fn sample_in_view(&self, t: f64, view: Plane) -> Position {
        if view == self.plane {
            return self.sample(t);
        }
        let shared = self.plane.shared_axis(view);
        let half = if shared == self.plane.axes().0 {
            self.radius_x
        } else {
            self.radius_y
        };
        diameter(self.center, self.plane, view, half, t)
    }
}

#[derive(Clone, Debug, PartialEq)]
/// `spiral`: radius moves linearly from `start_radius` to `end_radius` over `rotations`.
pub struct SpiralParams {
    /// Spiral center.
    pub center: Position,
    /// Radius at `t = 0`.
    pub start_radius: f64,
    /// Radius at `t = 1`.
    pub end_radius: f64,
    /// Full turns over the animation.
    pub rotations: f64,
    /// Total drift along the plane normal over the animation.
    pub pitch: f64,
    /// Plane of the spiral.
    pub plane: Plane,
}

impl SpiralParams {
    pub(crate) fn resolve(r: &ParamReader<'_>) -> TrajectoryResult<Self> {
        Ok(Self {
            center: r.position("center")?,
            start_radius: r.number("startRadius")?,
            end_radius: r.number("endRadius")?,
            rotations: r.number_or("rotations", 3.0),
            pitch: r.number_or("pitch", 0.0),
            plane: r.plane_or("plane", Plane::Xy),
        })
    }

    pub(crate) fn defaults(reference: Position) -> ParameterSet {
        ParameterSet::new()
            .with("center", reference)
            .with("startRadius", 0.5)
            .with("endRadius", 4.0)
            .with("rotations", 3.0)
            .with("pitch", 0.0)
            .with("plane", Plane::Xy)
    }

    /// Position at normalized time `t`.
    pub fn sample(&self, t: f64) -> Position {
        let a = turns(t, self.rotations);
        let r = <f64 as Lerp>::lerp(&self.start_radius, &self.end_radius, t);
        self.plane
            .embed(self.center, Vec2::new(r * a.cos(), r * a.sin()))
            + self.plane.normal().unit() * (self.pitch * t)
    }
}

#[derive(Clone, Debug, PartialEq)]
/// `rose-curve`: rhodonea `r = R cos(k θ)`.
pub struct RoseCurveParams {
    /// Curve center.
    pub center: Position,
    /// Petal length.
    pub radius: f64,
    /// `k` in `cos(k θ)`.
    pub petal_count: f64,
    /// Rotation of the whole figure, degrees.
    pub rotation: f64,
    /// Plane of the curve.
    pub plane: Plane,
}

impl RoseCurveParams {
    pub(crate) fn resolve(r: &ParamReader<'_>) -> TrajectoryResult<Self> {
        Ok(Self {
            center: r.position("center")?,
            radius: r.number("radius")?,
            petal_count: r.number_or("petalCount", 4.0),
            rotation: r.number_or("rotation", 0.0),
            plane: r.plane_or("plane", Plane::Xy),
        })
    }

    pub(crate) fn defaults(reference: Position) -> ParameterSet {
        ParameterSet::new()
            .with("center", reference)
            .with("radius", 3.0)
            .with("petalCount", 4.0)
            .with("rotation", 0.0)
            .with("plane", Plane::Xy)
    }

    /// Position at normalized time `t`.
    pub fn sample(&self, t: f64) -> Position {
        let theta = TAU * t;
        let r = self.radius * (self.petal_count * theta).cos();
        let a = theta + deg_to_rad(self.rotation);
        self.plane
            .embed(self.center, Vec2::new(r * a.cos(), r * a.sin()))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Rolling direction of an [`EpicycloidParams`] curve.
pub enum CycloidKind {
    /// Circle rolling outside the fixed circle.
    Epicycloid,
    /// Circle rolling inside the fixed circle.
    Hypocycloid,
}

#[derive(Clone, Debug, PartialEq)]
/// `epicycloid`: trace of a point on a circle rolling around a fixed circle.
pub struct EpicycloidParams {
    /// Center of the fixed circle.
    pub center: Position,
    /// Fixed circle radius `R`.
    pub outer_radius: f64,
    /// Rolling circle radius `r`.
    pub inner_radius: f64,
    /// Revolutions of the rolling circle's center.
    pub speed: f64,
    /// Outside or inside rolling.
    pub kind: CycloidKind,
    /// Plane of the curve.
    pub plane: Plane,
}

impl EpicycloidParams {
    pub(crate) fn resolve(r: &ParamReader<'_>) -> TrajectoryResult<Self> {
        let kind = match r.text_or("curveType", "epicycloid") {
            "hypocycloid" => CycloidKind::Hypocycloid,
            _ => CycloidKind::Epicycloid,
        };
        Ok(Self {
            center: r.position("center")?,
            outer_radius: r.number("outerRadius")?,
            inner_radius: r.number("innerRadius")?,
            speed: r.number_or("speed", 1.0),
            kind,
            plane: r.plane_or("plane", Plane::Xy),
        })
    }

    pub(crate) fn defaults(reference: Position) -> ParameterSet {
        ParameterSet::new()
            .with("center", reference)
            .with("outerRadius", 3.0)
            .with("innerRadius", 1.0)
            .with("speed", 1.0)
            .with("curveType", "epicycloid")
            .with("plane", Plane::Xy)
    }

    /// Position at normalized time `t`.
    pub fn sample(&self, t: f64) -> Position {
        let theta = turns(t, self.speed);
        let big = self.outer_radius;
        let small = self.inner_radius;
        // A vanishing rolling circle degenerates to the fixed circle.
        let uv = if small.abs() < 1e-9 {
            Vec2::new(big * theta.cos(), big * theta.sin())
        } else {
            match self.kind {
                CycloidKind::Epicycloid => {
                    let k = (big + small) / small;
                    Vec2::new(
                        (big + small) * theta.cos() - small * (k * theta).cos(),
                        (big + small) * theta.sin() - small * (k * theta).sin(),
                    )
                }
                CycloidKind::Hypocycloid => {
                    let k = (big - small) / small;
                    Vec2::new(
                        (big - small) * theta.cos() + small * (k * theta).cos(),
                        (big - small) * theta.sin() - small * (k * theta).sin(),
                    )
                }
            }
        };
        self.plane.embed(self.center, uv)
    }
}

#[derive(Clone, Debug, PartialEq)]
/// `orbit`: circle tilted about the X axis by `inclination`.
pub struct OrbitParams {
    /// Orbit center.
    pub center: Position,
    /// Orbit radius.
    pub radius: f64,
    /// Tilt of the orbital plane, degrees.
    pub inclination: f64,
    /// Orbits over the animation.
    pub speed: f64,
    /// Starting phase, degrees.
    pub phase: f64,
}

impl OrbitParams {
    pub(crate) fn resolve(r: &ParamReader<'_>) -> TrajectoryResult<Self> {
        Ok(Self {
            center: r.position("center")?,
            radius: r.number("radius")?.abs(),
            inclination: r.number_or("inclination", 0.0),
            speed: r.number_or("speed", 1.0),
            phase: r.number_or("phase", 0.0),
        })
    }

    pub(crate) fn defaults(reference: Position) -> ParameterSet {
        ParameterSet::new()
            .with("center", reference)
            .with("radius", 4.0)
            .with("inclination", 30.0)
            .with("speed", 1.0)
            .with("phase", 0.0)
    }

    /// Position at normalized time `t`.
    pub fn sample(&self, t: f64) -> Position {
        let theta = turns(t, self.speed) + deg_to_rad(self.phase);
        let inc = deg_to_rad(self.inclination);
        let (s, c) = theta.sin_cos();
        self.center
            + Position::new(
                self.radius * c,
                self.radius * s * inc.cos(),
                self.radius * s * inc.sin(),
            )
    }
}

#[derive(Clone, Debug, PartialEq)]
/// `circular-scan`: repeated circular sweeps at a fixed height above `plane`.
pub struct CircularScanParams {
    /// Sweep center.
    pub center: Position,
    /// Sweep radius.
    pub radius: f64,
    /// Offset along the plane normal.
    pub height: f64,
    /// Full sweeps over the animation.
    pub sweep_count: f64,
    /// Angle at `t = 0`, degrees.
    pub start_angle: f64,
    /// Plane of the sweep.
    pub plane: Plane,
}

impl CircularScanParams {
    pub(crate) fn resolve(r: &ParamReader<'_>) -> TrajectoryResult<Self> {
        Ok(Self {
            center: r.position("center")?,
            radius: r.number("radius")?.abs(),
            height: r.number_or("height", 0.0),
            sweep_count: r.number_or("sweepCount", 1.0),
            start_angle: r.number_or("startAngle", 0.0),
            plane: r.plane_or("plane", Plane::Xy),
        })
    }

    pub(crate) fn defaults(reference: Position) -> ParameterSet {
        ParameterSet::new()
            .with("center", reference)
            .with("radius", 5.0)
            .with("height", 0.0)
            .with("sweepCount", 1.0)
            .with("startAngle", 0.0)
            .with("plane", Plane::Xy)
    }

    /// Position at normalized time `t`.
    pub fn sample(&self, t: f64) -> Position {
        let a = deg_to_rad(self.start_angle) + turns(t, self.sweep_count);
        self.plane.embed(
            self.center,
            Vec2::new(self.radius * a.cos(), self.radius * a.sin()),
        ) + self.plane.normal().unit() * self.height
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/animation/models/planar.rs"]
mod tests;
