use super::*;
use crate::animation::kind::AnimationType;

const EPS: f64 = 1e-9;

fn p(x: f64, y: f64, z: f64) -> Position {
    Position::new(x, y, z)
}

#[test]
fn linear_hits_endpoints_and_midpoint() {
    let m = LinearParams {
        start: p(0.0, 0.0, 0.0),
        end: p(5.0, 0.0, 0.0),
    };
    assert_eq!(m.sample(0.0), p(0.0, 0.0, 0.0));
    assert_eq!(m.sample(1.0), p(5.0, 0.0, 0.0));
    assert!(m.sample(0.5).approx_eq(p(2.5, 0.0, 0.0), EPS));
}

#[test]
fn bezier_matches_bernstein_form() {
    let m = BezierParams {
        start: p(0.0, 0.0, 0.0),
        control1: p(1.0, 2.0, 0.0),
        control2: p(3.0, 2.0, 1.0),
        end: p(4.0, 0.0, 0.0),
    };
    assert_eq!(m.sample(0.0), m.start);
    assert_eq!(m.sample(1.0), m.end);
    // At t = 0.5 the weights are 1/8, 3/8, 3/8, 1/8.
    let mid = (m.start + m.control1 * 3.0 + m.control2 * 3.0 + m.end) / 8.0;
    assert!(m.sample(0.5).approx_eq(mid, EPS));
}

#[test]
fn catmull_rom_passes_through_control_points() {
    let pts = vec![
        p(0.0, 0.0, 0.0),
        p(1.0, 1.0, 0.0),
        p(2.0, 0.0, 0.0),
        p(3.0, 1.0, 0.0),
    ];
    let m = CatmullRomParams {
        control_points: pts.clone(),
        tension: 0.5,
        closed: false,
    };
    assert!(m.sample(0.0).approx_eq(pts[0], EPS));
    assert!(m.sample(1.0 / 3.0).approx_eq(pts[1], 1e-9));
    assert!(m.sample(2.0 / 3.0).approx_eq(pts[2], 1e-9));
    assert_eq!(m.sample(1.0), pts[3]);

    let closed = CatmullRomParams {
        closed: true,
        ..m
    };
    assert_eq!(closed.sample(1.0), pts[0]);
}

#[test]
fn custom_is_arc_length_parameterized() {
    let m = CustomParams {
        waypoints: vec![p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0), p(1.0, 3.0, 0.0)],
    };
    // Total length 4, so t = 0.25 is the first corner.
    assert!(m.sample(0.25).approx_eq(p(1.0, 0.0, 0.0), EPS));
    assert!(m.sample(0.5).approx_eq(p(1.0, 1.0, 0.0), EPS));
    assert_eq!(m.sample(1.0), p(1.0, 3.0, 0.0));

    let single = CustomParams {
        waypoints: vec![p(2.0, 2.0, 2.0)],
    };
    assert_eq!(single.sample(0.7), p(2.0, 2.0, 2.0));
}

#[test]
fn zigzag_returns_to_base_line_at_ends() {
    let m = ZigzagParams {
        start: p(0.0, 0.0, 0.0),
        end: p(4.0, 0.0, 0.0),
        count: 2.0,
        amplitude: 1.0,
        plane: Plane::Xy,
    };
    assert!(m.sample(0.0).approx_eq(p(0.0, 0.0, 0.0), EPS));
    assert!(m.sample(1.0).approx_eq(p(4.0, 0.0, 0.0), EPS));
    // First peak a quarter period in.
    let peak = m.sample(0.125);
    assert!((peak.y.abs() - 1.0).abs() < EPS);
    assert_eq!(peak.z, 0.0);
}

#[test]
fn helix_keeps_constant_distance_from_axis() {
    let m = HelixParams {
        axis_start: p(0.0, 0.0, 0.0),
        axis_end: p(0.0, 0.0, 4.0),
        radius: 2.0,
        rotations: 3.0,
        clockwise: false,
    };
    for i in 0..=20 {
        let t = i as f64 / 20.0;
        let s = m.sample(t);
        assert!(((s.x * s.x + s.y * s.y).sqrt() - 2.0).abs() < 1e-9);
        assert!((s.z - 4.0 * t).abs() < 1e-9);
    }
}

#[test]
fn helix_with_zero_axis_still_samples() {
    let m = HelixParams {
        axis_start: p(1.0, 1.0, 1.0),
        axis_end: p(1.0, 1.0, 1.0),
        radius: 1.0,
        rotations: 1.0,
        clockwise: true,
    };
    assert!(m.sample(0.3).is_finite());
}

#[test]
fn doppler_is_monotonic_and_hits_endpoints() {
    let m = DopplerParams {
        path_start: p(-10.0, 0.0, 0.0),
        path_end: p(10.0, 0.0, 0.0),
        pass_speed: 6.0,
    };
    assert!(m.sample(0.0).approx_eq(m.path_start, EPS));
    assert!(m.sample(1.0).approx_eq(m.path_end, EPS));
    let mut last = f64::NEG_INFINITY;
    for i in 0..=50 {
        let x = m.sample(i as f64 / 50.0).x;
        assert!(x >= last);
        last = x;
    }
}

#[test]
fn formation_defaults_resolve() {
    let set = FormationParams::defaults(p(1.0, 0.0, 0.0));
    let m = FormationParams::resolve(&ParamReader::new(AnimationType::Formation, &set)).unwrap();
    assert_eq!(m.easing, Ease::InOutCubic);
    assert_eq!(m.sample(0.0), p(1.0, 0.0, 0.0));
    assert!(m.sample(1.0).approx_eq(p(1.0, 4.0, 0.0), EPS));
}
