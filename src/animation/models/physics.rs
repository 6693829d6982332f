//! Oscillators and physically-flavored motions.

use std::f64::consts::{PI, TAU};

use crate::{
    animation::ease::Ease,
    animation::params::{ParamReader, ParameterSet},
    foundation::core::{Lerp, Plane, Position, Vec2},
    foundation::error::TrajectoryResult,
    foundation::math::{deg_to_rad, turns},
};

#[derive(Clone, Debug, PartialEq)]
/// `pendulum`: bob hanging `length` below `anchor_point`, swinging inside `plane`.
pub struct PendulumParams {
    /// Pivot.
    pub anchor_point: Position,
    /// Rod length.
    pub length: f64,
    /// Peak swing angle, degrees.
    pub initial_angle: f64,
    /// Exponential decay rate of the swing over the animation.
    pub damping: f64,
    /// Swing plane; the bob hangs along the negative second axis.
    pub plane: Plane,
}

impl PendulumParams {
    pub(crate) fn resolve(r: &ParamReader<'_>) -> TrajectoryResult<Self> {
        Ok(Self {
            anchor_point: r.position("anchorPoint")?,
            length: r.number("length")?.abs(),
            initial_angle: r.number_or("initialAngle", 45.0),
            damping: r.number_or("damping", 0.0).max(0.0),
            plane: r.plane_or("plane", Plane::Xz),
        })
    }

    pub(crate) fn defaults(reference: Position) -> ParameterSet {
        ParameterSet::new()
            .with("anchorPoint", reference + Position::new(0.0, 0.0, 3.0))
            .with("length", 3.0)
            .with("initialAngle", 45.0)
            .with("damping", 0.0)
            .with("plane", Plane::Xz)
    }

    /// Swing angle in radians at normalized time `t`.
    pub fn angle(&self, t: f64) -> f64 {
        deg_to_rad(self.initial_angle) * (TAU * t).sin() * (-self.damping * t).exp()
    }

    /// Position at normalized time `t`.
    pub fn sample(&self, t: f64) -> Position {
        let theta = self.angle(t);
        self.plane.embed(
            self.anchor_point,
            Vec2::new(self.length * theta.sin(), -self.length * theta.cos()),
        )
    }
}

#[derive(Clone, Debug, PartialEq)]
/// `bounce`: vertical bounces on top of `center_point`, losing height each contact.
pub struct BounceParams {
    /// Ground contact point.
    pub center_point: Position,
    /// Drop height above the contact point.
    pub start_height: f64,
    /// Height ratio kept after each contact, in `[0, 1]`.
    pub bounciness: f64,
    /// Number of ground contacts over the animation.
    pub bounce_count: f64,
}

impl BounceParams {
    pub(crate) fn resolve(r: &ParamReader<'_>) -> TrajectoryResult<Self> {
        Ok(Self {
            center_point: r.position("centerPoint")?,
            start_height: r.number_or("startHeight", 3.0),
            bounciness: r.number_or("bounciness", 0.6).clamp(0.0, 1.0),
            bounce_count: r.number_or("bounceCount", 3.0).max(0.0),
        })
    }

    pub(crate) fn defaults(reference: Position) -> ParameterSet {
        ParameterSet::new()
            .with("centerPoint", reference)
            .with("startHeight", 3.0)
            .with("bounciness", 0.6)
            .with("bounceCount", 3.0)
    }

    /// Position at normalized time `t`.
    pub fn sample(&self, t: f64) -> Position {
        // Contacts happen at half-integer phases; the amplitude only steps there so the
        // height stays continuous.
        let phase = self.bounce_count * t;
        let arc = (phase + 0.5).floor();
        let amplitude = self.start_height * self.bounciness.powf(arc);
        let height = amplitude * (PI * phase).cos().abs();
        self.center_point + Position::new(0.0, 0.0, height)
    }
}

#[derive(Clone, Debug, PartialEq)]
/// `spring`: damped oscillation of a displacement around `rest_position`.
pub struct SpringParams {
    /// Equilibrium point.
    pub rest_position: Position,
    /// Offset from rest at `t = 0`.
    pub initial_displacement: Position,
    /// Spring constant.
    pub stiffness: f64,
    /// Damping coefficient.
    pub damping: f64,
    /// Mass on the spring.
    pub mass: f64,
}

impl SpringParams {
    pub(crate) fn resolve(r: &ParamReader<'_>) -> TrajectoryResult<Self> {
        let mass = r.number_or("mass", 1.0);
        Ok(Self {
            rest_position: r.position("restPosition")?,
            initial_displacement: r
                .position_or("initialDisplacement", Position::new(0.0, 0.0, 2.0)),
            stiffness: r.number_or("stiffness", 10.0).max(0.0),
            damping: r.number_or("dampingCoefficient", 0.5).max(0.0),
            // A massless spring has no period; treat it as unit mass.
            mass: if mass > 1e-9 { mass } else { 1.0 },
        })
    }

    pub(crate) fn defaults(reference: Position) -> ParameterSet {
        ParameterSet::new()
            .with("restPosition", reference)
            .with("initialDisplacement", Position::new(0.0, 0.0, 2.0))
            .with("stiffness", 10.0)
            .with("dampingCoefficient", 0.5)
            .with("mass", 1.0)
    }

    /// Position at normalized time `t`.
    pub fn sample(&self, t: f64) -> Position {
        let omega = (self.stiffness / self.mass).sqrt();
        let envelope = (-self.damping * omega * t).exp();
        self.rest_position + self.initial_displacement * (envelope * (TAU * omega * t).cos())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Waveform of a [`WaveParams`] oscillator.
pub enum WaveShape {
    /// Sine.
    Sine,
    /// Square.
    Square,
    /// Triangle.
    Triangle,
    /// Rising sawtooth.
    Sawtooth,
}

impl WaveShape {
    fn eval(self, phase: f64) -> f64 {
        let cycle = (phase / TAU).rem_euclid(1.0);
        match self {
            Self::Sine => phase.sin(),
            Self::Square => {
                if cycle < 0.5 {
                    1.0
                } else {
                    -1.0
                }
            }
            Self::Triangle => 1.0 - 4.0 * ((cycle + 0.25).rem_euclid(1.0) - 0.5).abs(),
            Self::Sawtooth => 2.0 * cycle - 1.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
/// `wave`: per-axis periodic oscillation around `center`.
pub struct WaveParams {
    /// Rest point.
    pub center: Position,
    /// Peak offset per axis.
    pub amplitude: Position,
    /// Cycles over the animation.
    pub frequency: f64,
    /// Phase offset, degrees.
    pub phase_offset: f64,
    /// Waveform.
    pub shape: WaveShape,
}

impl WaveParams {
    pub(crate) fn resolve(r: &ParamReader<'_>) -> TrajectoryResult<Self> {
        let shape = match r.text_or("waveType", "sine") {
            "square" => WaveShape::Square,
            "triangle" => WaveShape::Triangle,
            "sawtooth" => WaveShape::Sawtooth,
            _ => WaveShape::Sine,
        };
        Ok(Self {
            center: r.position("center")?,
            amplitude: r.position_or("amplitude", Position::new(0.0, 0.0, 1.0)),
            frequency: r.number_or("frequency", 2.0),
            phase_offset: r.number_or("phaseOffset", 0.0),
            shape,
        })
    }

    pub(crate) fn defaults(reference: Position) -> ParameterSet {
        ParameterSet::new()
            .with("center", reference)
            .with("amplitude", Position::new(0.0, 0.0, 1.0))
            .with("frequency", 2.0)
            .with("phaseOffset", 0.0)
            .with("waveType", "sine")
    }

    /// Position at normalized time `t`.
    pub fn sample(&self, t: f64) -> Position {
        let w = self
            .shape
            .eval(turns(t, self.frequency) + deg_to_rad(self.phase_offset));
        self.center + self.amplitude * w
    }
}

#[derive(Clone, Debug, PartialEq)]
/// `lissajous`: `x = Ax sin(a 2πt + φ)`, `y = Ay sin(b 2πt)`, `z = Az sin(2πt)`.
pub struct LissajousParams {
    /// Figure center.
    pub center: Position,
    /// X amplitude.
    pub amplitude_x: f64,
    /// Y amplitude.
    pub amplitude_y: f64,
    /// Z amplitude.
    pub amplitude_z: f64,
    /// X frequency ratio `a`.
    pub frequency_ratio_a: f64,
    /// Y frequency ratio `b`.
    pub frequency_ratio_b: f64,
    /// Phase `φ` of the X component, degrees.
    pub phase_difference: f64,
}

impl LissajousParams {
    pub(crate) fn resolve(r: &ParamReader<'_>) -> TrajectoryResult<Self> {
        Ok(Self {
            center: r.position("center")?,
            amplitude_x: r.number_or("amplitudeX", 2.0),
            amplitude_y: r.number_or("amplitudeY", 2.0),
            amplitude_z: r.number_or("amplitudeZ", 0.0),
            frequency_ratio_a: r.number_or("frequencyRatioA", 3.0),
            frequency_ratio_b: r.number_or("frequencyRatioB", 2.0),
            phase_difference: r.number_or("phaseDifference", 90.0),
        })
    }

    pub(crate) fn defaults(reference: Position) -> ParameterSet {
        ParameterSet::new()
            .with("center", reference)
            .with("amplitudeX", 2.0)
            .with("amplitudeY", 2.0)
            .with("amplitudeZ", 0.0)
            .with("frequencyRatioA", 3.0)
            .with("frequencyRatioB", 2.0)
            .with("phaseDifference", 90.0)
    }

    /// Position at normalized time `t`.
    pub fn sample(&self, t: f64) -> Position {
        let phi = deg_to_rad(self.phase_difference);
        self.center
            + Position::new(
                self.amplitude_x * (self.frequency_ratio_a * TAU * t + phi).sin(),
                self.amplitude_y * (self.frequency_ratio_b * TAU * t).sin(),
                self.amplitude_z * (TAU * t).sin(),
            )
    }
}

#[derive(Clone, Debug, PartialEq)]
/// `attract-repel`: pulls toward `attractor` and back to `start` each cycle.
pub struct AttractRepelParams {
    /// Rest point, at `t = 0`.
    pub start: Position,
    /// Attractor.
    pub attractor: Position,
    /// Fraction of the distance covered at peak attraction, in `[0, 1]`.
    pub strength: f64,
    /// Attract/release cycles over the animation.
    pub cycles: f64,
}

impl AttractRepelParams {
    pub(crate) fn resolve(r: &ParamReader<'_>) -> TrajectoryResult<Self> {
        Ok(Self {
            start: r.position("startPosition")?,
            attractor: r.position("attractorPosition")?,
            strength: r.number_or("strength", 0.8).clamp(0.0, 1.0),
            cycles: r.number_or("cycles", 1.0),
        })
    }

    pub(crate) fn defaults(reference: Position) -> ParameterSet {
        ParameterSet::new()
            .with("startPosition", reference)
            .with("attractorPosition", Position::ZERO)
            .with("strength", 0.8)
            .with("cycles", 1.0)
    }

    /// Position at normalized time `t`.
    pub fn sample(&self, t: f64) -> Position {
        let pull = self.strength * (1.0 - turns(t, self.cycles).cos()) * 0.5;
        Position::lerp(&self.start, &self.attractor, pull)
    }
}

#[derive(Clone, Debug, PartialEq)]
/// `zoom`: moves along `direction` from `start_distance` to `end_distance` off `center`.
pub struct ZoomParams {
    /// Zoom focus.
    pub center: Position,
    /// Distance from the focus at `t = 0`.
    pub start_distance: f64,
    /// Distance from the focus at `t = 1`.
    pub end_distance: f64,
    /// Unit travel direction away from the focus.
    pub direction: Position,
    /// Time remapping of the move.
    pub easing: Ease,
}

impl ZoomParams {
    pub(crate) fn resolve(r: &ParamReader<'_>) -> TrajectoryResult<Self> {
        let fallback_dir = Position::new(0.0, 1.0, 0.0);
        Ok(Self {
            center: r.position("zoomCenter")?,
            start_distance: r.number_or("startDistance", 8.0),
            end_distance: r.number_or("endDistance", 1.0),
            direction: r
                .position_or("direction", fallback_dir)
                .normalized()
                .unwrap_or(fallback_dir),
            easing: Ease::from_tag(r.text_or("easing", "in-out-quad")).unwrap_or(Ease::InOutQuad),
        })
    }

    pub(crate) fn defaults(reference: Position) -> ParameterSet {
        ParameterSet::new()
            .with("zoomCenter", reference)
            .with("startDistance", 8.0)
            .with("endDistance", 1.0)
            .with("direction", Position::new(0.0, 1.0, 0.0))
            .with("easing", "in-out-quad")
    }

    /// Position at normalized time `t`.
    pub fn sample(&self, t: f64) -> Position {
        let d = <f64 as Lerp>::lerp(&self.start_distance, &self.end_distance, self.easing.apply(t));
        self.center + self.direction * d
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/animation/models/physics.rs"]
mod tests;
