use super::*;

fn earth_params() -> PlanetParams {
    PlanetParams {
        radius: Some(1.0),
        mass: Some(1.0),
        density: Some(5.51),
        eq_temp: Some(255.0),
        ..PlanetParams::default()
    }
}

#[test]
fn test_esi_weights_mode_defaults_to_100() {
    let weights = WeightConfig::default();
    assert_eq!(esi_from_weights(&weights), 100.0);
}

#[test]
fn test_esi_weights_mode_uses_present_components() {
    let mut weights = WeightConfig::default();
    weights.habitability.remove(W_DENSITY);
    weights.habitability.insert(W_SIZE.to_string(), 0.5);
    weights.habitability.insert(W_HABITABLE_ZONE.to_string(), f64::NAN);
    assert_eq!(esi_from_weights(&weights), 50.0);

    weights.habitability.clear();
    assert_eq!(esi_from_weights(&weights), 0.0);
}

#[test]
fn test_esi_similarity_mode_earth_is_100() {
    let weights = WeightConfig::default().with_esi_mode(EsiMode::Similarity);
    let esi = calculate_esi(&earth_params(), &weights);
    assert!((esi - 100.0).abs() < 1e-9);

    let mut far = earth_params();
    far.radius = Some(11.0);
    far.eq_temp = Some(120.0);
    let esi_far = calculate_esi(&far, &weights);
    assert!(esi_far < esi);
    assert!(esi_far > 0.0);

    assert_eq!(esi_from_similarity(&PlanetParams::default(), &weights), 0.0);
}

#[test]
fn test_sph_reference_points() {
    assert!((calculate_sph(Some(288.0)) - 87.82).abs() < 1e-9);
    assert_eq!(calculate_sph(Some(298.15)), 100.0);
    assert_eq!(calculate_sph(Some(260.0)), 40.0);
    assert_eq!(calculate_sph(Some(400.0)), 10.0);
    assert_eq!(calculate_sph(None), 0.0);
}

#[test]
fn test_phi_defaults_and_clamp() {
    let weights = WeightConfig::default();
    assert_eq!(calculate_phi(&weights.phi), 100.0);

    let mut phi = BTreeMap::new();
    phi.insert("Solid Surface".to_string(), 1.0);
    phi.insert("Stable Orbit".to_string(), -1.0);
    assert_eq!(calculate_phi(&phi), 100.0);

    assert_eq!(calculate_phi(&BTreeMap::new()), 0.0);
}

#[test]
fn test_suggest_phi_weights() {
    let tags = ClassTags::from_label("Terran | Mesoplanet (Temperate 1)");
    let w = suggest_phi_weights(&tags, Some("G2 V"), Some(4.6), Some(0.0167));
    assert_eq!(w.get(PHI_SOLID_SURFACE), Some(&(0.25 * 0.8)));
    assert_eq!(w.get(PHI_STABLE_ENERGY), Some(&(0.25 * 0.7)));
    assert_eq!(w.get(PHI_LIFE_COMPOUNDS), Some(&0.0));
    assert_eq!(w.get(PHI_STABLE_ORBIT), Some(&(0.25 * 0.9)));

    let tags = ClassTags::from_label("Jovian | Hyperthermoplanet (Hot)");
    let w = suggest_phi_weights(&tags, Some("M4"), Some(4.6), Some(0.5));
    assert!(w.values().all(|&v| v == 0.0));
    assert_eq!(calculate_phi(&w), 0.0);
}

#[test]
fn test_unknown_weight_keys_leave_indices_unchanged() {
    let baseline = WeightConfig::default();
    let config = WeightConfig::from_json(
        r#"{"habitability": {"Vibes": 0.0}, "phi": {"Legacy Factor": 0.0}}"#,
    )
    .unwrap();
    assert!(config.phi.contains_key("Legacy Factor"));
    assert_eq!(calculate_phi(&config.phi), calculate_phi(&baseline.phi));
    assert_eq!(calculate_phi(&config.phi), 100.0);
    assert_eq!(esi_from_weights(&config), esi_from_weights(&baseline));

    let similarity = config.with_esi_mode(EsiMode::Similarity);
    let baseline = baseline.with_esi_mode(EsiMode::Similarity);
    let mut params = earth_params();
    params.radius = Some(1.5);
    assert_eq!(
        calculate_esi(&params, &similarity),
        calculate_esi(&params, &baseline)
    );
}
