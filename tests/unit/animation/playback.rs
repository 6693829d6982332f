use super::*;
use crate::animation::kind::AnimationType;
use crate::animation::params::ParameterSet;

fn spec(looping: bool, ping_pong: bool) -> AnimationSpec {
    let mut s = AnimationSpec::new(AnimationType::Linear, ParameterSet::new(), 4.0);
    s.looping = looping;
    s.ping_pong = ping_pong;
    s
}

fn approx(a: Option<f64>, b: f64) -> bool {
    a.is_some_and(|a| (a - b).abs() < 1e-12)
}

#[test]
fn one_shot_holds_end() {
    let s = spec(false, false);
    assert!(approx(normalized_time(1.0, &s, 0.0), 0.25));
    assert!(approx(normalized_time(9.0, &s, 0.0), 1.0));
    assert!(is_complete(4.0, &s, 0.0));
    assert!(!is_complete(4.0, &s, 1.0));
}

#[test]
fn start_offset_delays_track() {
    let s = spec(true, false);
    assert_eq!(normalized_time(0.4, &s, 0.5), None);
    assert!(approx(normalized_time(1.5, &s, 0.5), 0.25));
}

#[test]
fn loop_wraps() {
    let s = spec(true, false);
    assert!(approx(normalized_time(5.0, &s, 0.0), 0.25));
    assert!(!is_complete(100.0, &s, 0.0));
}

#[test]
fn ping_pong_round_trips_within_a_pass() {
    let s = spec(true, true);
    assert!(approx(normalized_time(1.0, &s, 0.0), 0.5));
    assert!(approx(normalized_time(2.0, &s, 0.0), 1.0));
    assert!(approx(normalized_time(3.0, &s, 0.0), 0.5));
    assert!(approx(normalized_time(5.0, &s, 0.0), 0.5));

    let once = spec(false, true);
    assert!(approx(normalized_time(3.0, &once, 0.0), 0.5));
    assert!(approx(normalized_time(6.0, &once, 0.0), 0.0));
}
