//! Seeded stochastic motions. Deterministic for a given `seed`.

use crate::{
    animation::params::{ParamReader, ParameterSet},
    foundation::core::{Lerp, Position},
    foundation::error::TrajectoryResult,
    foundation::math::{Rng64, smoothstep, value_noise},
};

fn seed_of(r: &ParamReader<'_>) -> u64 {
    r.number_or("seed", 0.0).trunc() as i64 as u64
}

// Distinct noise streams per axis.
fn axis_seed(seed: u64, axis: u64) -> u64 {
    seed.wrapping_add(axis.wrapping_mul(0x9E37_79B9_7F4A_7C15))
}

#[derive(Clone, Debug, PartialEq)]
/// `random`: smooth walk through seeded waypoints scattered inside `bounds` around `center`.
pub struct RandomParams {
    /// Box center and first waypoint.
    pub center: Position,
    /// Half extents of the box per axis.
    pub bounds: Position,
    /// Waypoints visited, including the starting center.
    pub waypoint_count: usize,
    /// Generator seed.
    pub seed: u64,
}

impl RandomParams {
    pub(crate) fn resolve(r: &ParamReader<'_>) -> TrajectoryResult<Self> {
        Ok(Self {
            center: r.position("center")?,
            bounds: r.position_or("bounds", Position::new(2.0, 2.0, 1.0)),
            waypoint_count: r.number_or("waypointCount", 8.0).clamp(2.0, 256.0) as usize,
            seed: seed_of(r),
        })
    }

    pub(crate) fn defaults(reference: Position) -> ParameterSet {
        ParameterSet::new()
            .with("center", reference)
            .with("bounds", Position::new(2.0, 2.0, 1.0))
            .with("waypointCount", 8.0)
            .with("seed", 0.0)
    }

    /// The generated waypoints; the first one is always `center`.
    pub fn waypoints(&self) -> Vec<Position> {
        let mut rng = Rng64::new(self.seed);
        let mut out = Vec::with_capacity(self.waypoint_count);
        out.push(self.center);
        for _ in 1..self.waypoint_count {
            out.push(
                self.center
                    + Position::new(
                        self.bounds.x * rng.next_signed(),
                        self.bounds.y * rng.next_signed(),
                        self.bounds.z * rng.next_signed(),
                    ),
            );
        }
        out
    }

    /// Position at normalized time `t`.
    pub fn sample(&self, t: f64) -> Position {
        let pts = self.waypoints();
        let segments = pts.len().saturating_sub(1);
        if segments == 0 {
            return self.center;
        }
        let s = t.clamp(0.0, 1.0) * segments as f64;
        let i = (s.floor() as usize).min(segments - 1);
        Position::lerp(&pts[i], &pts[i + 1], smoothstep(s - i as f64))
    }
}

#[derive(Clone, Debug, PartialEq)]
/// `perlin-noise`: fractal value noise per axis, scaled into `bounds` around `center`.
pub struct PerlinNoiseParams {
    /// Box center.
    pub center: Position,
    /// Half extents of the box per axis.
    pub bounds: Position,
    /// Base noise frequency over the animation.
    pub frequency: f64,
    /// Octave count, `1..=8`.
    pub octaves: u32,
    /// Amplitude ratio between consecutive octaves.
    pub persistence: f64,
    /// Generator seed.
    pub seed: u64,
}

impl PerlinNoiseParams {
    pub(crate) fn resolve(r: &ParamReader<'_>) -> TrajectoryResult<Self> {
        Ok(Self {
            center: r.position("center")?,
            bounds: r.position_or("bounds", Position::new(2.0, 2.0, 1.0)),
            frequency: r.number_or("frequency", 1.0).abs(),
            octaves: r.number_or("octaves", 3.0).clamp(1.0, 8.0) as u32,
            persistence: r.number_or("persistence", 0.5).clamp(0.0, 1.0),
            seed: seed_of(r),
        })
    }

    pub(crate) fn defaults(reference: Position) -> ParameterSet {
        ParameterSet::new()
            .with("center", reference)
            .with("bounds", Position::new(2.0, 2.0, 1.0))
            .with("frequency", 1.0)
            .with("octaves", 3.0)
            .with("persistence", 0.5)
            .with("seed", 0.0)
    }

    fn fbm(&self, seed: u64, x: f64) -> f64 {
        let mut sum = 0.0;
        let mut norm = 0.0;
        let mut amp = 1.0;
        let mut freq = 1.0;
        for octave in 0..self.octaves {
            sum += amp * value_noise(axis_seed(seed, 16 + u64::from(octave)), x * freq);
            norm += amp;
            amp *= self.persistence;
            freq *= 2.0;
        }
        if norm > 0.0 { sum / norm } else { 0.0 }
    }

    /// Position at normalized time `t`.
    pub fn sample(&self, t: f64) -> Position {
        // A few lattice cells per unit frequency keeps the motion visibly wandering.
        let x = t * self.frequency * 4.0;
        self.center
            + Position::new(
                self.bounds.x * self.fbm(axis_seed(self.seed, 0), x),
                self.bounds.y * self.fbm(axis_seed(self.seed, 1), x),
                self.bounds.z * self.fbm(axis_seed(self.seed, 2), x),
            )
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/animation/models/procedural.rs"]
mod tests;
