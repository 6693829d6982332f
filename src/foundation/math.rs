use std::f64::consts::TAU;

/// Deterministic SplitMix64 generator used by the stochastic motion models.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Rng64 {
    state: u64,
}

impl Rng64 {
    pub(crate) fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    pub(crate) fn next_u64(&mut self) -> u64 {
        // SplitMix64
        self.state = self.state.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }

    pub(crate) fn next_f64_01(&mut self) -> f64 {
        // 53 bits of precision.
        let v = self.next_u64() >> 11;
        (v as f64) * (1.0 / ((1u64 << 53) as f64))
    }

    /// Uniform sample in `[-1, 1)`.
    pub(crate) fn next_signed(&mut self) -> f64 {
        self.next_f64_01() * 2.0 - 1.0
    }
}

/// Lattice value in `[-1, 1)` for integer coordinate `x` on stream `seed`.
pub(crate) fn lattice(seed: u64, x: i64) -> f64 {
    let mut rng = Rng64::new(seed ^ (x as u64).wrapping_mul(0xD6E8_FEB8_6659_FD93));
    rng.next_signed()
}

/// Smoothly interpolated 1-D value noise in `[-1, 1]`.
pub(crate) fn value_noise(seed: u64, x: f64) -> f64 {
    let i0 = x.floor();
    let t = smoothstep(x - i0);
    let i0 = i0 as i64;
    let a = lattice(seed, i0);
    let b = lattice(seed, i0 + 1);
    a + (b - a) * t
}

/// Cubic Hermite ease on `[0, 1]`.
pub(crate) fn smoothstep(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

pub(crate) fn deg_to_rad(deg: f64) -> f64 {
    deg.to_radians()
}

/// Phase in radians after `turns` full revolutions at normalized time `t`.
pub(crate) fn turns(t: f64, turns: f64) -> f64 {
    TAU * turns * t
}

pub(crate) fn approx_eq(a: f64, b: f64, tolerance: f64) -> bool {
    if a == b {
        return true;
    }
    (a - b).abs() <= tolerance
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
