use super::*;

#[test]
fn tags_parse_back_to_their_type() {
    for kind in AnimationType::ALL {
        assert_eq!(kind.as_str().parse::<AnimationType>().unwrap(), kind);
    }
}

#[test]
fn serde_uses_kebab_case_tags() {
    assert_eq!(
        serde_json::to_string(&AnimationType::CatmullRom).unwrap(),
        "\"catmull-rom\""
    );
    let kind: AnimationType = serde_json::from_str("\"attract-repel\"").unwrap();
    assert_eq!(kind, AnimationType::AttractRepel);
}

#[test]
fn unknown_tag_fails_fast() {
    let err = "teleport".parse::<AnimationType>().unwrap_err();
    assert!(matches!(err, TrajectoryError::UnknownAnimationType(tag) if tag == "teleport"));
}

#[test]
fn tags_are_unique() {
    let mut tags: Vec<_> = AnimationType::ALL.iter().map(|k| k.as_str()).collect();
    tags.sort_unstable();
    tags.dedup();
    assert_eq!(tags.len(), AnimationType::ALL.len());
}
