use super::*;
use crate::input::table::{Delimiter, parse_table};
use std::io::Cursor;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

static DIR_COUNTER: AtomicUsize = AtomicUsize::new(0);

fn make_temp_dir() -> PathBuf {
    let mut dir = std::env::temp_dir();
    let id = DIR_COUNTER.fetch_add(1, Ordering::SeqCst);
    dir.push(format!("lifesearch_planets_test_{}_{}", std::process::id(), id));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

fn table(text: &str) -> Table {
    parse_table(Cursor::new(text.as_bytes()), Delimiter::Tab, Path::new("p.tsv")).unwrap()
}

#[test]
fn test_planets_from_table_parses_cells() {
    let t = table("pl_name\tpl_rade\tst_spectype\tpl_masse\nKepler-452 b\t1.63\tG2 V\t\n");
    let planets = planets_from_table(&t, Path::new("p.tsv")).unwrap();
    assert_eq!(planets.len(), 1);
    let record = planets.get("kepler-452 B").unwrap();
    assert_eq!(record.number("pl_rade"), Some(1.63));
    assert_eq!(record.text("st_spectype").as_deref(), Some("G2 V"));
    assert!(record.is_missing("pl_masse"));
    assert_eq!(record.text("pl_name").as_deref(), Some("Kepler-452 b"));
}

#[test]
fn test_rows_without_name_are_skipped() {
    let t = table("pl_name\tpl_rade\n\t1.0\nEarth\t1.0\n");
    let planets = planets_from_table(&t, Path::new("p.tsv")).unwrap();
    assert_eq!(planets.len(), 1);
    assert!(planets.get("Earth").is_some());
}

#[test]
fn test_missing_name_column_is_error() {
    let t = table("name\tpl_rade\nEarth\t1.0\n");
    let err = planets_from_table(&t, Path::new("p.tsv")).unwrap_err();
    assert!(matches!(err, InputError::MissingColumn { .. }));
}

#[test]
fn test_duplicate_rows_keep_last_in_first_position() {
    let t = table("pl_name\tpl_rade\nEarth\t1.0\nMars\t0.5\nearth\t2.0\n");
    let planets = planets_from_table(&t, Path::new("p.tsv")).unwrap();
    let names: Vec<&str> = planets.iter().map(|(n, _)| n).collect();
    assert_eq!(names, vec!["earth", "Mars"]);
    assert_eq!(planets.get("Earth").unwrap().number("pl_rade"), Some(2.0));
}

#[test]
fn test_retain_names() {
    let t = table("pl_name\nEarth\nMars\nVenus\n");
    let mut planets = planets_from_table(&t, Path::new("p.tsv")).unwrap();
    planets.retain_names(&["venus".to_string(), "EARTH".to_string(), "Pluto".to_string()]);
    let names: Vec<&str> = planets.iter().map(|(n, _)| n).collect();
    assert_eq!(names, vec!["Earth", "Venus"]);
}

#[test]
fn test_load_planets_csv() {
    let dir = make_temp_dir();
    let path = dir.join("planets.csv");
    std::fs::write(&path, "pl_name,pl_rade,sy_dist\n\"TRAPPIST-1 e\",0.92,12.43\n").unwrap();
    let planets = load_planets(&path).unwrap();
    let record = planets.get("trappist-1 e").unwrap();
    assert_eq!(record.number("sy_dist"), Some(12.43));
}
