use super::*;
use flate2::Compression;
use flate2::write::GzEncoder;
use std::io::Write;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

static DIR_COUNTER: AtomicUsize = AtomicUsize::new(0);

fn make_temp_dir() -> PathBuf {
    let mut dir = std::env::temp_dir();
    let id = DIR_COUNTER.fetch_add(1, Ordering::SeqCst);
    dir.push(format!("lifesearch_reader_test_{}_{}", std::process::id(), id));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

fn read_all(path: &Path) -> String {
    let mut out = String::new();
    let mut reader = open_maybe_gz(path).unwrap();
    std::io::Read::read_to_string(&mut reader, &mut out).unwrap();
    out
}

#[test]
fn test_open_plain_and_gzip() {
    let dir = make_temp_dir();
    let plain = dir.join("planets.tsv");
    std::fs::write(&plain, "pl_name\nEarth\n").unwrap();

    let gz = dir.join("planets.tsv.gz");
    let mut enc = GzEncoder::new(std::fs::File::create(&gz).unwrap(), Compression::default());
    enc.write_all(b"pl_name\nEarth\n").unwrap();
    enc.finish().unwrap();

    assert_eq!(read_all(&plain), "pl_name\nEarth\n");
    assert_eq!(read_all(&gz), "pl_name\nEarth\n");
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = make_temp_dir();
    let err = open_maybe_gz(&dir.join("absent.csv")).err().unwrap();
    assert!(matches!(err, InputError::Io { .. }));
    assert!(err.to_string().contains("absent.csv"));
}

#[test]
fn test_is_gzip() {
    assert!(is_gzip(Path::new("a.csv.gz")));
    assert!(!is_gzip(Path::new("a.csv")));
}
