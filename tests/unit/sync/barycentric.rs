use super::*;

fn p(x: f64, y: f64, z: f64) -> Position {
    Position::new(x, y, z)
}

#[test]
fn formation_offsets_sum_to_zero() {
    let tracks = [p(0.0, 0.0, 0.0), p(2.0, 0.0, 0.0), p(4.0, 0.0, 0.0)];
    let c = centroid(&tracks);
    assert_eq!(c, p(2.0, 0.0, 0.0));
    let offs = offsets(&tracks, c);
    assert_eq!(offs, vec![p(-2.0, 0.0, 0.0), p(0.0, 0.0, 0.0), p(2.0, 0.0, 0.0)]);
    let sum = offs.iter().fold(Position::ZERO, |acc, o| acc + *o);
    assert!(sum.approx_eq(Position::ZERO, 1e-12));
}

#[test]
fn offsets_against_custom_center_need_not_cancel() {
    let tracks = [p(1.0, 0.0, 0.0), p(3.0, 0.0, 0.0)];
    let offs = offsets(&tracks, p(0.0, 0.0, 0.0));
    assert_eq!(offs, tracks.to_vec());
}

#[test]
fn degenerate_inputs() {
    assert_eq!(centroid(&[]), Position::ZERO);
    assert!(offsets(&[], p(1.0, 1.0, 1.0)).is_empty());
    let single = [p(3.0, -1.0, 2.0)];
    assert_eq!(offsets(&single, centroid(&single)), vec![Position::ZERO]);
}

#[test]
fn weighted_centroid_matches_explicit_weights() {
    let pair = [p(0.0, 0.0, 0.0), p(2.0, 2.0, 2.0)];
    assert_eq!(weighted_centroid(&pair, &[0.5, 0.5]).unwrap(), p(1.0, 1.0, 1.0));
    assert_eq!(weighted_centroid(&pair, &[1.0, 0.0]).unwrap(), p(0.0, 0.0, 0.0));
    let c = weighted_centroid(&pair, &[0.25, 0.75]).unwrap();
    assert!(c.approx_eq(p(1.5, 1.5, 1.5), 1e-12));
}

#[test]
fn weighted_centroid_rejects_bad_weights() {
    let pair = [p(0.0, 0.0, 0.0), p(2.0, 2.0, 2.0)];
    assert!(weighted_centroid(&pair, &[1.0]).is_err());
    assert!(weighted_centroid(&pair, &[0.5, 0.6]).is_err());
    assert!(weighted_centroid(&pair, &[f64::NAN, 0.5]).is_err());
    assert!(weighted_centroid(&[], &[]).is_err());
}
