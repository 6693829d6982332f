//! Mapping from wall-clock seconds to normalized animation time.

use crate::animation::sampler::AnimationSpec;

/// How one pass of an animation repeats.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CycleMode {
    /// Play once and hold the end.
    OneShot,
    /// Restart from `t = 0` after every pass.
    Loop,
    /// Travel `0 -> 1 -> 0` within every pass.
    PingPong,
}

impl CycleMode {
    /// Cycle mode encoded by the `loop`/`pingPong` flags of `spec`.
    pub fn of(spec: &AnimationSpec) -> Self {
        if spec.ping_pong {
            Self::PingPong
        } else if spec.looping {
            Self::Loop
        } else {
            Self::OneShot
        }
    }
}

/// Normalized time of `spec` at `elapsed` seconds for a track starting `start_offset`
/// seconds late.
///
/// `None` before the track starts. A non-looping ping-pong animation plays one round trip
/// and then rests at `t = 0`.
pub fn normalized_time(elapsed: f64, spec: &AnimationSpec, start_offset: f64) -> Option<f64> {
    if !elapsed.is_finite() || spec.duration <= 0.0 || !spec.duration.is_finite() {
        return None;
    }
    let local = elapsed - start_offset.max(0.0);
    if local < 0.0 {
        return None;
    }
    let pass = local / spec.duration;
    let t = match CycleMode::of(spec) {
        CycleMode::OneShot => pass.min(1.0),
        CycleMode::Loop => pass.fract(),
        CycleMode::PingPong => {
            if !spec.looping && pass >= 1.0 {
                0.0
            } else {
                let phase = (pass * 2.0) % 2.0;
                if phase <= 1.0 { phase } else { 2.0 - phase }
            }
        }
    };
    Some(t)
}

/// True once a one-shot (or single round-trip) animation has finished for this track.
pub fn is_complete(elapsed: f64, spec: &AnimationSpec, start_offset: f64) -> bool {
    if spec.looping {
        return false;
    }
    elapsed - start_offset.max(0.0) >= spec.duration
}

#[cfg(test)]
#[path = "../../tests/unit/animation/playback.rs"]
mod tests;
