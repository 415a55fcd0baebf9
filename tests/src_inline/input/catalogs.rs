use super::*;
use crate::input::table::{Delimiter, parse_table};
use std::io::Cursor;

fn csv(text: &str) -> Table {
    parse_table(Cursor::new(text.as_bytes()), Delimiter::Comma, Path::new("c.csv")).unwrap()
}

fn planets() -> PlanetTable {
    let mut earth_like = ParameterRecord::new();
    earth_like.set(PL_RADE, 1.1);
    earth_like.set(PL_MASSE, RecordValue::Missing);
    let mut other = ParameterRecord::new();
    other.set(PL_RADE, 3.0);
    [
        ("Kepler-22 b".to_string(), earth_like),
        ("Other b".to_string(), other),
    ]
    .into_iter()
    .collect()
}

#[test]
fn test_hwc_fills_gaps_and_overwrites_esi() {
    let table = csv(
        "P_NAME,P_MASS,P_RADIUS,P_SURFACE_TEMP_C,P_ESI,P_HABITABLE,S_AGE\n\
         kepler-22 B,9.1,2.4,22,0.71,1,\n",
    );
    let catalog = Catalog::from_table(CatalogKind::Hwc, &table, Path::new("hwc.csv")).unwrap();
    let mut planets = planets();
    assert!(planets.get("Kepler-22 b").unwrap().is_missing(PL_MASSE));

    assert_eq!(catalog.merge_into(&mut planets), 1);
    let record = planets.get("Kepler-22 b").unwrap();
    assert_eq!(record.number(PL_MASSE), Some(9.1));
    assert_eq!(record.number(PL_RADE), Some(1.1));
    assert!((record.number(PL_EQT).unwrap() - 295.15).abs() < 1e-9);
    assert!((record.number(PL_ESI_HWC).unwrap() - 71.0).abs() < 1e-9);
    assert_eq!(record.number(HWC_PHI_CATEGORY), Some(0.5));
    assert!(record.is_missing(ST_AGE));

    let other = planets.get("Other b").unwrap();
    assert!(other.is_missing(PL_MASSE));
}

#[test]
fn test_phi_category_mapping() {
    assert_eq!(phi_category(0.0), 0.0);
    assert_eq!(phi_category(1.0), 0.5);
    assert_eq!(phi_category(2.0), 1.0);
}

#[test]
fn test_hz_gallery_fills_boundaries() {
    let table = csv("PLANET,OHZIN,CHZIN,CHZOUT,OHZOUT,TEQA\nKepler-22 b,0.5,0.6,1.1,1.2,262\n");
    let catalog =
        Catalog::from_table(CatalogKind::HzGallery, &table, Path::new("hz.csv")).unwrap();
    let mut planets = planets();
    if let Some((_, record)) = planets.iter_mut().next() {
        record.set(HZ_OHZIN, 0.45);
    }
    catalog.merge_into(&mut planets);
    let record = planets.get("kepler-22 b").unwrap();
    assert_eq!(record.number(HZ_OHZIN), Some(0.45));
    assert_eq!(record.number(HZ_CHZIN), Some(0.6));
    assert_eq!(record.number(HZ_OHZOUT), Some(1.2));
    assert_eq!(record.number(HZ_TEQA), Some(262.0));
}

#[test]
fn test_first_catalog_row_wins() {
    let table = csv("PLANET,OHZIN\nEarth,0.7\nearth,0.9\n");
    let catalog =
        Catalog::from_table(CatalogKind::HzGallery, &table, Path::new("hz.csv")).unwrap();
    assert_eq!(catalog.len(), 1);
    assert_eq!(catalog.get("EARTH").unwrap().fill.get(HZ_OHZIN), Some(&0.7));
}

#[test]
fn test_catalog_without_name_column_is_error() {
    let table = csv("NAME,OHZIN\nEarth,0.7\n");
    let err =
        Catalog::from_table(CatalogKind::HzGallery, &table, Path::new("hz.csv")).unwrap_err();
    assert!(err.to_string().contains("PLANET"));
}

#[test]
fn test_unparseable_catalog_values_are_ignored() {
    let table = csv("P_NAME,P_MASS,P_ESI\nEarth,heavy,\n");
    let catalog = Catalog::from_table(CatalogKind::Hwc, &table, Path::new("hwc.csv")).unwrap();
    let entry = catalog.get("earth").unwrap();
    assert!(entry.fill.is_empty());
    assert!(entry.overwrite.is_empty());
}
