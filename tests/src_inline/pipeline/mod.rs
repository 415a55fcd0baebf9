use super::*;
use crate::model::record::RecordValue;
use crate::model::weights::PHI_SOLID_SURFACE;

fn earth_record() -> ParameterRecord {
    let mut record: ParameterRecord = [
        ("pl_rade", 1.0),
        ("pl_masse", 1.0),
        ("pl_dens", 5.51),
        ("pl_eqt", 288.0),
        ("pl_orbsmax", 1.0),
        ("pl_orbper", 365.25),
        ("pl_orbeccen", 0.0167),
        ("st_teff", 5778.0),
        ("st_rad", 1.0),
        ("st_mass", 1.0),
        ("st_lum", 0.0),
        ("st_age", 4.6),
        ("st_met", 0.0),
        ("sy_dist", 10.0),
        ("hz_ohzin", 0.75),
        ("hz_chzin", 0.95),
        ("hz_chzout", 1.67),
        ("hz_ohzout", 1.77),
    ]
    .into_iter()
    .collect();
    record.set("hostname", "Sun");
    record.set("st_spectype", "G2 V");
    record.set("discoverymethod", "Imaging");
    record
}

fn jupiter_record() -> ParameterRecord {
    let mut record: ParameterRecord = [
        ("pl_rade", 11.2),
        ("pl_masse", 317.8),
        ("pl_eqt", 110.0),
        ("pl_orbsmax", 5.2),
        ("pl_orbper", 4332.6),
        ("pl_orbeccen", 0.049),
        ("st_teff", 5778.0),
        ("st_rad", 1.0),
        ("st_mass", 1.0),
        ("st_age", 4.6),
    ]
    .into_iter()
    .collect();
    record.set("st_spectype", "G2 V");
    record
}

fn all_values(report: &PlanetReport) -> Vec<f64> {
    report
        .scores
        .iter()
        .filter_map(|(_, s)| s.value())
        .chain(report.sephi.iter().filter_map(|(_, s)| s.value()))
        .collect()
}

#[test]
fn test_earth_report() {
    let engine = HabitabilityEngine::default();
    let report = engine.process_planet("Earth", &earth_record());
    assert_eq!(
        report.classification.label(),
        "Terran | Mesoplanet (Temperate 2 - Optimal for Earth Life)"
    );
    assert_eq!(report.scores.len(), 15);
    assert_eq!(report.sephi.len(), 5);
    let sephi = report.sephi_value().unwrap();
    assert!((70.0..=100.0).contains(&sephi));
    assert_eq!(report.score(ScoreKey::HabitableZonePosition), Some(95.0));
    assert_eq!(report.score(ScoreKey::HostStarType), Some(95.0));
    assert_eq!(report.star_info.get("name"), Some("Sun"));
    assert_eq!(report.star_info.get("temperature_k"), Some("5778"));
    assert_eq!(report.star_info.get("distance_ly"), Some("32.62"));
    assert_eq!(report.orbit_info.get("eccentricity"), Some("0.017"));
    assert_eq!(report.display_fields.get("discoverymethod"), Some("Imaging"));
    assert_eq!(report.display_fields.get("disc_year"), Some("N/A"));
    assert_eq!(
        report.habitable_zone.description,
        "1.00 AU (Cons: 0.95-1.67 AU, Opt: 0.75-1.77 AU, Src: HZ Gallery)"
    );
    assert_eq!(report.travel[2].time, "32.6 years");
}

#[test]
fn test_jupiter_is_jovian() {
    let report = HabitabilityEngine::default().process_planet("Jupiter", &jupiter_record());
    assert!(report.classification.label().contains("Jovian"));
    assert_eq!(
        report.scores.get(ScoreKey::PresenceOfMoons).unwrap().description.as_deref(),
        Some("Likely")
    );
}

#[test]
fn test_all_scores_bounded() {
    let engine = HabitabilityEngine::default();
    let similarity =
        HabitabilityEngine::new(EngineConfig::default().with_esi_mode(EsiMode::Similarity));
    for record in [earth_record(), jupiter_record(), ParameterRecord::new()] {
        for e in [&engine, &similarity] {
            let report = e.process_planet("x", &record);
            for v in all_values(&report) {
                assert!((0.0..=100.0).contains(&v), "{v} out of range");
            }
        }
    }
}

#[test]
fn test_default_weights_never_inflate() {
    let report = HabitabilityEngine::default().process_planet("Earth", &earth_record());
    assert_eq!(report.score(ScoreKey::Esi), Some(100.0));
    assert_eq!(report.score(ScoreKey::Phi), Some(100.0));
    assert!(all_values(&report).iter().all(|v| *v <= 100.0));
}

#[test]
fn test_empty_record_degrades() {
    let report = HabitabilityEngine::default().process_planet("Nothing", &ParameterRecord::new());
    assert_eq!(
        report.classification.label(),
        "Unknown Mass Class | Unknown Temperature Class"
    );
    assert_eq!(report.score(ScoreKey::Sph), Some(0.0));
    assert_eq!(report.score(ScoreKey::Size), Some(0.0));
    assert_eq!(report.score(ScoreKey::HabitableZonePosition), Some(10.0));
    assert!(report.sephi.iter().all(|(_, s)| s.value().is_none()));
    assert!(report.travel.iter().all(|t| t.time == "N/A"));
    assert_eq!(report.habitable_zone.description, "N/A");
}

#[test]
fn test_process_planet_is_deterministic() {
    let engine = HabitabilityEngine::default();
    let a = engine.process_planet("Earth", &earth_record());
    let b = engine.process_planet("Earth", &earth_record());
    assert_eq!(a, b);
    assert_eq!(
        serde_json::to_string(&a).unwrap(),
        serde_json::to_string(&b).unwrap()
    );
}

#[test]
fn test_seeded_phi_weights() {
    let engine = HabitabilityEngine::new(EngineConfig::default().with_seeded_phi(true));
    let report = engine.process_planet("Earth", &earth_record());
    assert_eq!(report.phi_weights_used.get(PHI_SOLID_SURFACE), Some(&0.2));
    let phi = report.score(ScoreKey::Phi).unwrap();
    assert!(phi > 0.0 && phi < 100.0);
}

#[test]
fn test_catalog_fields_shown_when_present() {
    let mut record = earth_record();
    record.set("pl_esi_hwc", RecordValue::Number(87.0));
    let report = HabitabilityEngine::default().process_planet("Earth", &record);
    assert_eq!(report.display_fields.get("pl_esi_hwc"), Some("87.00"));
    assert_eq!(report.display_fields.get("hwc_phi_category"), None);
}
