use super::*;

#[test]
fn position_arithmetic() {
    let a = Position::new(1.0, 2.0, 3.0);
    let b = Position::new(0.5, -1.0, 2.0);
    assert_eq!(a + b, Position::new(1.5, 1.0, 5.0));
    assert_eq!(a - b, Position::new(0.5, 3.0, 1.0));
    assert_eq!(a * 2.0, Position::new(2.0, 4.0, 6.0));
    assert_eq!(-a, Position::new(-1.0, -2.0, -3.0));
    assert_eq!(a.cross(b).dot(a), 0.0);
}

#[test]
fn normalized_rejects_zero_length() {
    assert!(Position::ZERO.normalized().is_none());
    let n = Position::new(3.0, 0.0, 4.0).normalized().unwrap();
    assert!((n.length() - 1.0).abs() < 1e-12);
}

#[test]
fn position_lerp_hits_endpoints_and_midpoint() {
    let a = Position::new(0.0, 0.0, 0.0);
    let b = Position::new(5.0, -2.0, 1.0);
    assert_eq!(Position::lerp(&a, &b, 0.0), a);
    assert_eq!(Position::lerp(&a, &b, 1.0), b);
    assert!(Position::lerp(&a, &b, 0.5).approx_eq(Position::new(2.5, -1.0, 0.5), 1e-12));
}

#[test]
fn plane_embed_and_project_are_consistent() {
    let origin = Position::new(1.0, 2.0, 3.0);
    for plane in [Plane::Xy, Plane::Xz, Plane::Yz] {
        let p = plane.embed(origin, Vec2::new(0.5, -0.25));
        let uv = plane.project(p - origin);
        assert!((uv.x - 0.5).abs() < 1e-12);
        assert!((uv.y + 0.25).abs() < 1e-12);
        assert_eq!(p.get(plane.normal()), origin.get(plane.normal()));
    }
}

#[test]
fn distinct_planes_share_one_axis() {
    assert_eq!(Plane::Xy.shared_axis(Plane::Xz), Axis::X);
    assert_eq!(Plane::Xy.shared_axis(Plane::Yz), Axis::Y);
    assert_eq!(Plane::Xz.shared_axis(Plane::Yz), Axis::Z);
}

#[test]
fn plane_parses_and_serializes_lowercase() {
    assert_eq!("XZ".parse::<Plane>().unwrap(), Plane::Xz);
    assert!("xw".parse::<Plane>().is_err());
    assert_eq!(serde_json::to_string(&Plane::Yz).unwrap(), "\"yz\"");
}
