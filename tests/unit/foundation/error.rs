use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        TrajectoryError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        TrajectoryError::unknown_type("warp")
            .to_string()
            .contains("unknown animation type: 'warp'")
    );
    assert!(
        TrajectoryError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn missing_parameter_names_kind_and_key() {
    let msg = TrajectoryError::missing("circular", "center").to_string();
    assert!(msg.contains("'center'"));
    assert!(msg.contains("'circular'"));
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = TrajectoryError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

#[test]
fn json_errors_map_to_serde() {
    let err: TrajectoryError = serde_json::from_str::<f64>("{").unwrap_err().into();
    assert!(matches!(err, TrajectoryError::Serde(_)));
}
