//! Matrix Market ingestion through the facade

use std::fs;
use std::path::PathBuf;

use sparmat::{ListMatrix, MapMatrix, NormKind, SparseError};

const SAMPLE: &str = "\
%%MatrixMarket matrix coordinate real general
% generated fixture
3 4 5
1 1 8.0
3 3 4.0
1 4 -2.0
2 2 -3.0
2 4 4.0
";

fn write_temp(name: &str, contents: &str) -> PathBuf {
    let mut path = std::env::temp_dir();
    path.push(format!("sparmat-{}-{}", std::process::id(), name));
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn read_file_into_dynamic_matrix() {
    let path = write_temp("sample.mtx", SAMPLE);
    let m: ListMatrix<f64> = ListMatrix::from_market_file(&path).unwrap();
    fs::remove_file(&path).unwrap();

    assert_eq!(m.dimensions(), (3, 4));
    assert_eq!(m.nnz(), 5);
    assert_eq!(m.get(0, 0).unwrap(), 8.0);
    assert_eq!(m.get(0, 3).unwrap(), -2.0);
    assert_eq!(m.norm(NormKind::Infinity), 10.0);
}

#[test]
fn loaded_matrix_compresses() {
    let path = write_temp("compress.mtx", SAMPLE);
    let mut m: MapMatrix<f64> = MapMatrix::from_market_file(&path).unwrap();
    fs::remove_file(&path).unwrap();

    m.compress().unwrap();
    assert!(m.is_compressed());
    assert_eq!(m.get(1, 1).unwrap(), -3.0);
    assert_eq!(m.nnz(), 5);
}

#[test]
fn missing_file_is_malformed() {
    let err = ListMatrix::<f64>::from_market_file("/nonexistent/never.mtx").unwrap_err();
    assert_eq!(err, SparseError::MalformedFile);
}

#[test]
fn truncated_file_is_malformed() {
    let path = write_temp("truncated.mtx", "%%MatrixMarket matrix coordinate real general\n3 4 5\n1 1 8.0\n");
    let err = ListMatrix::<f64>::from_market_file(&path).unwrap_err();
    fs::remove_file(&path).unwrap();
    assert_eq!(err, SparseError::MalformedFile);
}

#[test]
fn out_of_extent_entry_is_rejected() {
    let path = write_temp(
        "oob.mtx",
        "%%MatrixMarket matrix coordinate real general\n2 2 1\n3 1 5.0\n",
    );
    let err = ListMatrix::<f64>::from_market_file(&path).unwrap_err();
    fs::remove_file(&path).unwrap();
    assert_eq!(err, SparseError::OutOfBounds);
}
