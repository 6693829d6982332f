use super::*;
use crate::animation::sampler::AnimationSpec;

fn p(x: f64, y: f64, z: f64) -> Position {
    Position::new(x, y, z)
}

fn three_tracks() -> Vec<TrackSnapshot> {
    vec![
        TrackSnapshot::at("a", p(0.0, 0.0, 0.0)),
        TrackSnapshot::at("b", p(2.0, 0.0, 0.0)),
        TrackSnapshot::at("c", p(4.0, 0.0, 0.0)),
    ]
}

fn composer() -> TransformComposer<'static> {
    TransformComposer::new(MotionRegistry::builtin())
}

#[test]
fn identical_gives_empty_patches() {
    let params = ParameterSet::new().with("center", p(0.0, 0.0, 0.0)).with("radius", 2.0);
    let req = TransformRequest::new(
        SyncMode::Identical,
        three_tracks(),
        AnimationType::Circular,
        params,
    );
    let t = composer().build(&req).unwrap();
    assert_eq!(t.mode, SyncMode::Identical);
    assert_eq!(t.per_track.len(), 3);
    for plan in t.per_track.values() {
        assert!(plan.parameter_patch.is_empty());
        assert_eq!(plan.start_time_offset_seconds, 0.0);
    }
    assert_eq!(t.centroid, None);
    assert_eq!(t.phase_offset_seconds, None);
}

#[test]
fn phase_offset_staggers_in_selection_order() {
    let req = TransformRequest::new(
        SyncMode::PhaseOffset,
        three_tracks(),
        AnimationType::Linear,
        ParameterSet::new(),
    )
    .phase_offset_seconds(0.5);
    let t = composer().build(&req).unwrap();
    let offsets: Vec<f64> = ["a", "b", "c"].iter().map(|id| t.start_offset(id)).collect();
    assert_eq!(offsets, vec![0.0, 0.5, 1.0]);
    assert_eq!(t.phase_offset_seconds, Some(0.5));
}

#[test]
fn negative_phase_offset_is_clamped() {
    let req = TransformRequest::new(
        SyncMode::PhaseOffset,
        three_tracks(),
        AnimationType::Linear,
        ParameterSet::new(),
    )
    .phase_offset_seconds(-1.0);
    let t = composer().build(&req).unwrap();
    assert!(t.per_track.values().all(|p| p.start_time_offset_seconds == 0.0));
}

#[test]
fn default_phase_offset_comes_from_opts() {
    let opts = ComposerOpts {
        default_phase_offset_seconds: 0.25,
        ..ComposerOpts::default()
    };
    let req = TransformRequest::new(
        SyncMode::PhaseOffsetRelative,
        three_tracks(),
        AnimationType::Circular,
        MotionRegistry::builtin().default_parameters(AnimationType::Circular, Position::ZERO),
    );
    let t = TransformComposer::with_opts(MotionRegistry::builtin(), opts)
        .build(&req)
        .unwrap();
    assert_eq!(t.start_offset("c"), 0.5);
    assert_eq!(
        t.per_track["b"].parameter_patch.position("center"),
        Some(p(2.0, 0.0, 0.0))
    );
}

#[test]
fn position_relative_moves_anchor_and_linked_keys() {
    let reg = MotionRegistry::builtin();
    let params = reg.default_parameters(AnimationType::Linear, p(0.0, 0.0, 0.0));
    let req = TransformRequest::new(
        SyncMode::PositionRelative,
        three_tracks(),
        AnimationType::Linear,
        params,
    );
    let t = composer().build(&req).unwrap();
    assert!(t.per_track["a"].parameter_patch.is_empty());
    let b = &t.per_track["b"].parameter_patch;
    assert_eq!(b.position("startPosition"), Some(p(2.0, 0.0, 0.0)));
    // Default end is 5 units along x from the start.
    assert_eq!(b.position("endPosition"), Some(p(7.0, 0.0, 0.0)));
    assert_eq!(t.start_offset("c"), 0.0);
}

#[test]
fn position_relative_translates_array_anchor() {
    let params = ParameterSet::new().with(
        "controlPoints",
        vec![p(0.0, 0.0, 0.0), p(1.0, 1.0, 0.0), p(2.0, 0.0, 0.0)],
    );
    let req = TransformRequest::new(
        SyncMode::PositionRelative,
        three_tracks(),
        AnimationType::CatmullRom,
        params.clone(),
    )
    .original_parameters(params);
    let t = composer().build(&req).unwrap();
    let c = t.per_track["c"].parameter_patch.positions("controlPoints").unwrap();
    assert_eq!(c, &[p(4.0, 0.0, 0.0), p(5.0, 1.0, 0.0), p(6.0, 0.0, 0.0)][..]);
}

#[test]
fn position_relative_keeps_relative_motion_for_offset_anchors() {
    let reg = MotionRegistry::builtin();
    let tracks = vec![
        TrackSnapshot::at("a", p(0.0, 0.0, 0.0)),
        TrackSnapshot::at("b", p(5.0, 0.0, 0.0)),
    ];
    for kind in [
        AnimationType::Pendulum,
        AnimationType::Doppler,
        AnimationType::Circular,
        AnimationType::Bezier,
    ] {
        let params = reg.default_parameters(kind, p(0.0, 0.0, 0.0));
        let req = TransformRequest::new(SyncMode::PositionRelative, tracks.clone(), kind, params);
        let t = composer().build(&req).unwrap();
        let spec = AnimationSpec::new(kind, req.parameters.clone(), 4.0);
        for step in 0..=4 {
            let time = step as f64 / 4.0;
            let rel_a = t.position_at(reg, &spec, "a", time) - tracks[0].current_position;
            let rel_b = t.position_at(reg, &spec, "b", time) - tracks[1].current_position;
            assert!(rel_a.approx_eq(rel_b, 1e-9), "{kind} at t={time}");
        }
    }
}

#[test]
fn missing_anchor_is_placed_per_track() {
    let params = ParameterSet::new().with("radius", 2.0);
    let req = TransformRequest::new(
        SyncMode::PositionRelative,
        three_tracks(),
        AnimationType::Circular,
        params,
    );
    let t = composer().build(&req).unwrap();
    for (id, x) in [("a", 0.0), ("b", 2.0), ("c", 4.0)] {
        assert_eq!(
            t.per_track[id].parameter_patch.position("center"),
            Some(p(x, 0.0, 0.0))
        );
    }
}

#[test]
fn user_modified_anchor_is_kept() {
    let reg = MotionRegistry::builtin();
    let original = reg.default_parameters(AnimationType::Circular, p(0.0, 0.0, 0.0));
    let edited = original.clone().with("center", p(9.0, 9.0, 0.0));
    let req = TransformRequest::new(
        SyncMode::PositionRelative,
        three_tracks(),
        AnimationType::Circular,
        edited,
    )
    .original_parameters(original);
    let t = composer().build(&req).unwrap();
    assert!(t.per_track.values().all(|p| p.parameter_patch.is_empty()));
}

#[test]
fn unmodified_against_defaults_re_anchors() {
    let reg = MotionRegistry::builtin();
    let params = reg.default_parameters(AnimationType::Circular, p(0.0, 0.0, 0.0));
    let req = TransformRequest::new(
        SyncMode::PositionRelative,
        three_tracks(),
        AnimationType::Circular,
        params,
    );
    let t = composer().build(&req).unwrap();
    assert_eq!(
        t.per_track["c"].parameter_patch.position("center"),
        Some(p(4.0, 0.0, 0.0))
    );
}

#[test]
fn formation_stores_centroid_and_offsets() {
    let req = TransformRequest::new(
        SyncMode::Formation,
        three_tracks(),
        AnimationType::Circular,
        ParameterSet::new(),
    );
    let t = composer().build(&req).unwrap();
    assert_eq!(t.centroid, Some(p(2.0, 0.0, 0.0)));
    let mut sum = Position::ZERO;
    for (id, expect) in [("a", -2.0), ("b", 0.0), ("c", 2.0)] {
        let patch = &t.per_track[id].parameter_patch;
        assert_eq!(patch.position(ISOBARYCENTER_KEY), Some(p(2.0, 0.0, 0.0)));
        let off = patch.position(TRACK_OFFSET_KEY).unwrap();
        assert_eq!(off, p(expect, 0.0, 0.0));
        sum += off;
    }
    assert!(sum.approx_eq(Position::ZERO, 1e-12));
}

#[test]
fn formation_uses_weighted_center() {
    let req = TransformRequest::new(
        SyncMode::Formation,
        three_tracks(),
        AnimationType::Circular,
        ParameterSet::new(),
    )
    .weights(vec![0.5, 0.25, 0.25]);
    let t = composer().build(&req).unwrap();
    assert_eq!(t.centroid, Some(p(1.5, 0.0, 0.0)));
    assert_eq!(t.track_offset("a"), p(-1.5, 0.0, 0.0));
    assert_eq!(t.track_offset("c"), p(2.5, 0.0, 0.0));

    let uneven = req.clone().weights(vec![0.5, 0.5]);
    assert!(matches!(composer().build(&uneven), Err(TrajectoryError::Validation(_))));
    let unnormalized = req.weights(vec![1.0, 1.0, 1.0]);
    assert!(composer().build(&unnormalized).is_err());
}

#[test]
fn centered_uses_custom_center() {
    let req = TransformRequest::new(
        SyncMode::Centered,
        three_tracks(),
        AnimationType::Circular,
        ParameterSet::new(),
    )
    .custom_center(p(0.0, 1.0, 0.0));
    let t = composer().build(&req).unwrap();
    assert_eq!(t.centroid, Some(p(0.0, 1.0, 0.0)));
    assert_eq!(t.track_offset("c"), p(4.0, -1.0, 0.0));

    let no_center = TransformRequest::new(
        SyncMode::Centered,
        three_tracks(),
        AnimationType::Circular,
        ParameterSet::new(),
    );
    let t = composer().build(&no_center).unwrap();
    assert_eq!(t.centroid, Some(p(2.0, 0.0, 0.0)));
}

#[test]
fn single_track_degenerates_to_identical() {
    let one = vec![TrackSnapshot::at("solo", p(3.0, 3.0, 3.0))];
    for mode in [
        SyncMode::PositionRelative,
        SyncMode::PhaseOffsetRelative,
        SyncMode::Formation,
        SyncMode::Centered,
    ] {
        let req =
            TransformRequest::new(mode, one.clone(), AnimationType::Linear, ParameterSet::new());
        let t = composer().build(&req).unwrap();
        assert_eq!(t.mode, SyncMode::Identical, "{mode}");
        assert!(t.per_track["solo"].parameter_patch.is_empty());
        assert_eq!(t.track_offset("solo"), Position::ZERO);
    }
}

#[test]
fn initial_position_source() {
    let tracks = vec![
        TrackSnapshot {
            id: "a".into(),
            current_position: p(10.0, 0.0, 0.0),
            initial_position: p(0.0, 0.0, 0.0),
        },
        TrackSnapshot {
            id: "b".into(),
            current_position: p(10.0, 0.0, 0.0),
            initial_position: p(2.0, 0.0, 0.0),
        },
    ];
    let opts = ComposerOpts {
        position_source: PositionSource::Initial,
        ..ComposerOpts::default()
    };
    let req = TransformRequest::new(
        SyncMode::Formation,
        tracks,
        AnimationType::Linear,
        ParameterSet::new(),
    );
    let t = TransformComposer::with_opts(MotionRegistry::builtin(), opts)
        .build(&req)
        .unwrap();
    assert_eq!(t.centroid, Some(p(1.0, 0.0, 0.0)));
}

#[test]
fn malformed_tracks_are_rejected() {
    let dup = vec![
        TrackSnapshot::at("a", p(0.0, 0.0, 0.0)),
        TrackSnapshot::at("a", p(1.0, 0.0, 0.0)),
    ];
    let req =
        TransformRequest::new(SyncMode::Identical, dup, AnimationType::Linear, ParameterSet::new());
    assert!(matches!(composer().build(&req), Err(TrajectoryError::Validation(_))));

    let nan = vec![TrackSnapshot::at("a", p(f64::NAN, 0.0, 0.0))];
    let req =
        TransformRequest::new(SyncMode::Identical, nan, AnimationType::Linear, ParameterSet::new());
    assert!(composer().build(&req).is_err());
}

#[test]
fn free_function_fails_fast_on_unknown_type() {
    let err = build_transform(
        SyncMode::Identical,
        &three_tracks(),
        "warp",
        &ParameterSet::new(),
        None,
        None,
    )
    .unwrap_err();
    assert!(matches!(err, TrajectoryError::UnknownAnimationType(_)));

    let t = build_transform(
        SyncMode::PhaseOffset,
        &three_tracks(),
        "circular",
        &ParameterSet::new(),
        None,
        Some(0.5),
    )
    .unwrap();
    assert_eq!(t.start_offset("c"), 1.0);
}
