//! Models defined by explicit control geometry: segments, splines, helices.

use crate::{
    animation::ease::Ease,
    animation::params::{ParamReader, ParameterSet},
    foundation::core::{Lerp, Plane, Position},
    foundation::error::TrajectoryResult,
    foundation::math::turns,
};

#[derive(Clone, Debug, PartialEq)]
/// `linear`: straight segment from `startPosition` to `endPosition`.
pub struct LinearParams {
    /// Position at `t = 0`.
    pub start: Position,
    /// Position at `t = 1`.
    pub end: Position,
}

impl LinearParams {
    pub(crate) fn resolve(r: &ParamReader<'_>) -> TrajectoryResult<Self> {
        Ok(Self {
            start: r.position("startPosition")?,
            end: r.position("endPosition")?,
        })
    }

    pub(crate) fn defaults(reference: Position) -> ParameterSet {
        ParameterSet::new()
            .with("startPosition", reference)
            .with("endPosition", reference + Position::new(5.0, 0.0, 0.0))
    }

    /// Position at normalized time `t`.
    pub fn sample(&self, t: f64) -> Position {
        Position::lerp(&self.start, &self.end, t)
    }
}

#[derive(Clone, Debug, PartialEq)]
/// `bezier`: cubic Bezier curve in Bernstein form.
pub struct BezierParams {
    /// `P0`, reached at `t = 0`.
    pub start: Position,
    /// `P1`.
    pub control1: Position,
    /// `P2`.
    pub control2: Position,
    /// `P3`, reached at `t = 1`.
    pub end: Position,
}

impl BezierParams {
    pub(crate) fn resolve(r: &ParamReader<'_>) -> TrajectoryResult<Self> {
        Ok(Self {
            start: r.position("bezierStart")?,
            control1: r.position("bezierControl1")?,
            control2: r.position("bezierControl2")?,
            end: r.position("bezierEnd")?,
        })
    }

    pub(crate) fn defaults(reference: Position) -> ParameterSet {
        ParameterSet::new()
            .with("bezierStart", reference)
            .with("bezierControl1", reference + Position::new(1.0, 3.0, 0.0))
            .with("bezierControl2", reference + Position::new(3.0, -3.0, 0.0))
            .with("bezierEnd", reference + Position::new(4.0, 0.0, 0.0))
    }

    /// `B(t) = (1-t)^3 P0 + 3(1-t)^2 t P1 + 3(1-t) t^2 P2 + t^3 P3`.
    pub fn sample(&self, t: f64) -> Position {
        let u = 1.0 - t;
        self.start * (u * u * u)
            + self.control1 * (3.0 * u * u * t)
            + self.control2 * (3.0 * u * t * t)
            + self.end * (t * t * t)
    }
}

#[derive(Clone, Debug, PartialEq)]
/// `catmull-rom`: cardinal spline passing through every control point.
pub struct CatmullRomParams {
    /// Interpolated points, at least two.
    pub control_points: Vec<Position>,
    /// Tangent scale; `0.5` is the classic Catmull-Rom spline.
    pub tension: f64,
    /// Join the last point back to the first.
    pub closed: bool,
}

impl CatmullRomParams {
    pub(crate) fn resolve(r: &ParamReader<'_>) -> TrajectoryResult<Self> {
        Ok(Self {
            control_points: r.positions("controlPoints", 2)?,
            tension: r.number_or("tension", 0.5),
            closed: r.flag_or("closedLoop", false),
        })
    }

    pub(crate) fn defaults(reference: Position) -> ParameterSet {
        ParameterSet::new()
            .with(
                "controlPoints",
                vec![
                    reference,
                    reference + Position::new(2.0, 2.0, 0.0),
                    reference + Position::new(4.0, -2.0, 0.0),
                    reference + Position::new(6.0, 0.0, 0.0),
                ],
            )
            .with("tension", 0.5)
            .with("closedLoop", false)
    }

    fn point(&self, i: isize) -> Position {
        let n = self.control_points.len() as isize;
        let idx = if self.closed {
            i.rem_euclid(n)
        } else {
            i.clamp(0, n - 1)
        };
        self.control_points[idx as usize]
    }

    /// Position at normalized time `t`.
    pub fn sample(&self, t: f64) -> Position {
        let n = self.control_points.len();
        let segments = if self.closed { n } else { n - 1 };
        let t = t.clamp(0.0, 1.0);
        if t >= 1.0 {
            return self.point(segments as isize);
        }

        let x = t * segments as f64;
        let seg = x.floor() as isize;
        let u = x - seg as f64;

        let p0 = self.point(seg - 1);
        let p1 = self.point(seg);
        let p2 = self.point(seg + 1);
        let p3 = self.point(seg + 2);
        let m1 = (p2 - p0) * self.tension;
        let m2 = (p3 - p1) * self.tension;

        // Cubic Hermite basis.
        let u2 = u * u;
        let u3 = u2 * u;
        p1 * (2.0 * u3 - 3.0 * u2 + 1.0)
            + m1 * (u3 - 2.0 * u2 + u)
            + p2 * (-2.0 * u3 + 3.0 * u2)
            + m2 * (u3 - u2)
    }
}

#[derive(Clone, Debug, PartialEq)]
/// `custom`: polyline through user waypoints at constant speed.
pub struct CustomParams {
    /// Waypoints in travel order, at least one.
    pub waypoints: Vec<Position>,
}

impl CustomParams {
    pub(crate) fn resolve(r: &ParamReader<'_>) -> TrajectoryResult<Self> {
        Ok(Self {
            waypoints: r.positions("waypoints", 1)?,
        })
    }

    pub(crate) fn defaults(reference: Position) -> ParameterSet {
        ParameterSet::new().with(
            "waypoints",
            vec![
                reference,
                reference + Position::new(2.0, 0.0, 0.0),
                reference + Position::new(2.0, 2.0, 0.0),
                reference + Position::new(0.0, 2.0, 0.0),
            ],
        )
    }

    /// Position at normalized time `t`, parameterized by arc length.
    pub fn sample(&self, t: f64) -> Position {
        let first = self.waypoints[0];
        let total: f64 = self
            .waypoints
            .windows(2)
            .map(|w| (w[1] - w[0]).length())
            .sum();
        if total <= f64::EPSILON {
            return first;
        }

        let mut remaining = t.clamp(0.0, 1.0) * total;
        for w in self.waypoints.windows(2) {
            let len = (w[1] - w[0]).length();
            if remaining <= len && len > 0.0 {
                return Position::lerp(&w[0], &w[1], remaining / len);
            }
            remaining -= len;
        }
        self.waypoints[self.waypoints.len() - 1]
    }
}

#[derive(Clone, Debug, PartialEq)]
/// `zigzag`: segment with a triangular lateral offset inside `plane`.
pub struct ZigzagParams {
    /// Start of the base segment.
    pub start: Position,
    /// End of the base segment.
    pub end: Position,
    /// Number of full zig-zag periods.
    pub count: f64,
    /// Lateral peak offset.
    pub amplitude: f64,
    /// Plane the offset lives in.
    pub plane: Plane,
}

impl ZigzagParams {
    pub(crate) fn resolve(r: &ParamReader<'_>) -> TrajectoryResult<Self> {
        Ok(Self {
            start: r.position("zigzagStart")?,
            end: r.position("zigzagEnd")?,
            count: r.number_or("zigzagCount", 5.0),
            amplitude: r.number_or("amplitude", 1.0),
            plane: r.plane_or("plane", Plane::Xy),
        })
    }

    pub(crate) fn defaults(reference: Position) -> ParameterSet {
        ParameterSet::new()
            .with("zigzagStart", reference)
            .with("zigzagEnd", reference + Position::new(6.0, 0.0, 0.0))
            .with("zigzagCount", 5.0)
            .with("amplitude", 1.0)
            .with("plane", Plane::Xy)
    }

    /// Position at normalized time `t`.
    pub fn sample(&self, t: f64) -> Position {
        let base = Position::lerp(&self.start, &self.end, t);
        let normal = self.plane.normal().unit();
        // Segments parallel to the plane normal have no in-plane perpendicular.
        let lateral = (self.end - self.start)
            .cross(normal)
            .normalized()
            .unwrap_or_else(|| self.plane.axes().1.unit());
        let x = t * self.count;
        let tri = 1.0 - 4.0 * ((x + 0.25).rem_euclid(1.0) - 0.5).abs();
        base + lateral * (self.amplitude * tri)
    }
}

#[derive(Clone, Debug, PartialEq)]
/// `helix`: coil around the axis from `axisStart` to `axisEnd`.
pub struct HelixParams {
    /// Axis origin, reached (plus radius) at `t = 0`.
    pub axis_start: Position,
    /// Axis end.
    pub axis_end: Position,
    /// Coil radius.
    pub radius: f64,
    /// Full turns over the animation.
    pub rotations: f64,
    /// Wind clockwise when seen from `axis_end`.
    pub clockwise: bool,
}

impl HelixParams {
    pub(crate) fn resolve(r: &ParamReader<'_>) -> TrajectoryResult<Self> {
        Ok(Self {
            axis_start: r.position("axisStart")?,
            axis_end: r.position("axisEnd")?,
            radius: r.number_or("radius", 1.0),
            rotations: r.number_or("rotations", 3.0),
            clockwise: r.flag_or("clockwise", false),
        })
    }

    pub(crate) fn defaults(reference: Position) -> ParameterSet {
        ParameterSet::new()
            .with("axisStart", reference)
            .with("axisEnd", reference + Position::new(0.0, 0.0, 4.0))
            .with("radius", 1.0)
            .with("rotations", 3.0)
            .with("clockwise", false)
    }

    /// Position at normalized time `t`.
    pub fn sample(&self, t: f64) -> Position {
        // A zero-length axis collapses to a vertical one.
        let dir = (self.axis_end - self.axis_start)
            .normalized()
            .unwrap_or(Position::new(0.0, 0.0, 1.0));
        let helper = if dir.z.abs() < 0.9 {
            Position::new(0.0, 0.0, 1.0)
        } else {
            Position::new(1.0, 0.0, 0.0)
        };
        let u = dir.cross(helper).normalized().unwrap_or(Position::new(1.0, 0.0, 0.0));
        let v = dir.cross(u);

        let sign = if self.clockwise { -1.0 } else { 1.0 };
        let theta = sign * turns(t, self.rotations);
        Position::lerp(&self.axis_start, &self.axis_end, t)
            + (u * theta.cos() + v * theta.sin()) * self.radius
    }
}

#[derive(Clone, Debug, PartialEq)]
/// `doppler`: fly-by that is slow at both ends and fast through the middle.
pub struct DopplerParams {
    /// Entry point.
    pub path_start: Position,
    /// Exit point.
    pub path_end: Position,
    /// Sharpness of the speed-up around the midpoint; `0` is constant speed.
    pub pass_speed: f64,
}

impl DopplerParams {
    pub(crate) fn resolve(r: &ParamReader<'_>) -> TrajectoryResult<Self> {
        Ok(Self {
            path_start: r.position("pathStart")?,
            path_end: r.position("pathEnd")?,
            pass_speed: r.number_or("passSpeed", 4.0),
        })
    }

    pub(crate) fn defaults(reference: Position) -> ParameterSet {
        ParameterSet::new()
            .with("pathStart", reference + Position::new(-10.0, 0.0, 0.0))
            .with("pathEnd", reference + Position::new(10.0, 0.0, 0.0))
            .with("passSpeed", 4.0)
    }

    fn progress(&self, t: f64) -> f64 {
        let k = self.pass_speed.abs();
        if k < 1e-6 {
            return t;
        }
        0.5 + 0.5 * (k * (t - 0.5)).tanh() / (k * 0.5).tanh()
    }

    /// Position at normalized time `t`.
    pub fn sample(&self, t: f64) -> Position {
        Position::lerp(&self.path_start, &self.path_end, self.progress(t))
    }
}

#[derive(Clone, Debug, PartialEq)]
/// `formation`: eased translation of a formation reference point.
pub struct FormationParams {
    /// Start of the reference point.
    pub center: Position,
    /// Where the reference point ends up.
    pub destination: Position,
    /// Time remapping of the move.
    pub easing: Ease,
}

impl FormationParams {
    pub(crate) fn resolve(r: &ParamReader<'_>) -> TrajectoryResult<Self> {
        let center = r.position("center")?;
        Ok(Self {
            center,
            destination: r.position_or("destination", center),
            easing: Ease::from_tag(r.text_or("easing", "in-out-cubic")).unwrap_or(Ease::InOutCubic),
        })
    }

    pub(crate) fn defaults(reference: Position) -> ParameterSet {
        ParameterSet::new()
            .with("center", reference)
            .with("destination", reference + Position::new(0.0, 4.0, 0.0))
            .with("easing", "in-out-cubic")
    }

    /// Position at normalized time `t`.
    pub fn sample(&self, t: f64) -> Position {
        Position::lerp(&self.center, &self.destination, self.easing.apply(t))
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/animation/models/curves.rs"]
mod tests;
