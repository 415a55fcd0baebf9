use super::*;

#[test]
fn test_color_levels_high_is_good() {
    assert_eq!(ColorLevel::for_percentage(80.0, ScoreScale::HighIsGood), ColorLevel::Excellent);
    assert_eq!(ColorLevel::for_percentage(79.9, ScoreScale::HighIsGood), ColorLevel::Good);
    assert_eq!(ColorLevel::for_percentage(40.0, ScoreScale::HighIsGood), ColorLevel::Fair);
    assert_eq!(ColorLevel::for_percentage(20.0, ScoreScale::HighIsGood), ColorLevel::Poor);
    assert_eq!(ColorLevel::for_percentage(0.0, ScoreScale::HighIsGood), ColorLevel::Critical);
    assert_eq!(ColorLevel::Excellent.hex(), "#4CAF50");
    assert_eq!(ColorLevel::Critical.hex(), "#F44336");
}

#[test]
fn test_color_levels_low_is_good() {
    assert_eq!(ColorLevel::for_percentage(10.0, ScoreScale::LowIsGood), ColorLevel::Excellent);
    assert_eq!(ColorLevel::for_percentage(25.0, ScoreScale::LowIsGood), ColorLevel::Good);
    assert_eq!(ColorLevel::for_percentage(50.0, ScoreScale::LowIsGood), ColorLevel::Fair);
    assert_eq!(ColorLevel::for_percentage(75.0, ScoreScale::LowIsGood), ColorLevel::Poor);
    assert_eq!(ColorLevel::for_percentage(95.0, ScoreScale::LowIsGood), ColorLevel::Critical);
}

#[test]
fn test_unavailable_score_is_grey() {
    let s = Score::unavailable();
    assert_eq!(s.value(), None);
    assert_eq!(s.color.hex(), "#757575");
    let json = serde_json::to_string(&s).unwrap();
    assert!(json.contains("\"unavailable\""));
}

#[test]
fn test_bundle_serializes_with_labels_in_order() {
    let mut bundle = ScoreBundle::new();
    bundle.insert(ScoreKey::PresenceOfMoons, Score::percent(20.0));
    bundle.insert(ScoreKey::Esi, Score::percent(100.0));
    let json = serde_json::to_string(&bundle).unwrap();
    let esi = json.find("\"ESI\"").unwrap();
    let moons = json.find("\"Presence of Moons\"").unwrap();
    assert!(esi < moons);
    assert_eq!(bundle.value(ScoreKey::Esi), Some(100.0));
}

#[test]
fn test_describe_score() {
    assert_eq!(describe_score(70.0), "Likely");
    assert_eq!(describe_score(40.0), "Possible");
    assert_eq!(describe_score(39.9), "Unlikely");
}
