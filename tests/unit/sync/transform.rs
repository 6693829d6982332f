use super::*;
use crate::animation::kind::AnimationType;

fn p(x: f64, y: f64, z: f64) -> Position {
    Position::new(x, y, z)
}

fn linear() -> AnimationSpec {
    AnimationSpec::new(
        AnimationType::Linear,
        ParameterSet::new()
            .with("startPosition", p(0.0, 0.0, 0.0))
            .with("endPosition", p(4.0, 0.0, 0.0)),
        2.0,
    )
}

#[test]
fn mode_tags_round_trip() {
    for mode in SyncMode::ALL {
        assert_eq!(mode.as_str().parse::<SyncMode>().unwrap(), mode);
        let json = serde_json::to_string(&mode).unwrap();
        assert_eq!(json, format!("\"{}\"", mode.as_str()));
    }
    assert_eq!("isobarycenter".parse::<SyncMode>().unwrap(), SyncMode::Formation);
    let m: SyncMode = serde_json::from_str("\"isobarycenter\"").unwrap();
    assert_eq!(m, SyncMode::Formation);
    assert!("mirror".parse::<SyncMode>().is_err());
}

#[test]
fn parameters_for_merges_public_patch_keys() {
    let mut t = Transform {
        mode: SyncMode::PositionRelative,
        ..Transform::default()
    };
    t.per_track.insert(
        "b".to_owned(),
        TrackPlan {
            parameter_patch: ParameterSet::new()
                .with("startPosition", p(1.0, 1.0, 0.0))
                .with("_note", "internal"),
            start_time_offset_seconds: 0.0,
        },
    );
    let base = linear().parameters;
    let merged = t.parameters_for("b", &base);
    assert_eq!(merged.position("startPosition"), Some(p(1.0, 1.0, 0.0)));
    assert_eq!(merged.position("endPosition"), Some(p(4.0, 0.0, 0.0)));
    assert!(!merged.contains_key("_note"));
    assert_eq!(t.parameters_for("missing", &base), base);
}

#[test]
fn rigid_plan_adds_track_offset() {
    let mut t = Transform {
        mode: SyncMode::Formation,
        centroid: Some(p(0.0, 0.0, 0.0)),
        ..Transform::default()
    };
    t.per_track.insert(
        "a".to_owned(),
        TrackPlan {
            parameter_patch: ParameterSet::new()
                .with(ISOBARYCENTER_KEY, p(0.0, 0.0, 0.0))
                .with(TRACK_OFFSET_KEY, p(0.0, 2.0, 0.0)),
            start_time_offset_seconds: 0.0,
        },
    );
    let reg = MotionRegistry::builtin();
    let spec = linear();
    assert!(
        t.position_at(reg, &spec, "a", 0.5)
            .approx_eq(p(2.0, 2.0, 0.0), 1e-12)
    );
    assert_eq!(t.track_offset("other"), Position::ZERO);
}

#[test]
fn position_at_time_honors_start_offset() {
    let mut t = Transform {
        mode: SyncMode::PhaseOffset,
        phase_offset_seconds: Some(0.5),
        ..Transform::default()
    };
    t.per_track.insert(
        "late".to_owned(),
        TrackPlan {
            parameter_patch: ParameterSet::new(),
            start_time_offset_seconds: 0.5,
        },
    );
    let reg = MotionRegistry::builtin();
    let spec = linear();
    assert_eq!(t.position_at_time(reg, &spec, "late", 0.25), None);
    let pos = t.position_at_time(reg, &spec, "late", 1.5).unwrap();
    assert!(pos.approx_eq(p(2.0, 0.0, 0.0), 1e-12));
}

#[test]
fn json_shape_is_camel_case() {
    let mut t = Transform {
        mode: SyncMode::PhaseOffset,
        phase_offset_seconds: Some(0.5),
        ..Transform::default()
    };
    t.per_track.insert("x".to_owned(), TrackPlan::default());
    let v: serde_json::Value = serde_json::to_value(&t).unwrap();
    assert_eq!(v["mode"], "phase-offset");
    assert_eq!(v["phaseOffsetSeconds"], 0.5);
    assert_eq!(v["perTrack"]["x"]["startTimeOffsetSeconds"], 0.0);
    assert!(v.get("centroid").is_none());
    let back: Transform = serde_json::from_value(v).unwrap();
    assert_eq!(back, t);
}
