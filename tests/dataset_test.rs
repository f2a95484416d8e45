//! Integration tests for CSV loading and validation

mod common;

use tempfile::TempDir;

use common::write_csv;
use tendencia::dataset::{Dataset, DatasetError};

#[test]
fn loads_columns_in_csv_order() {
    let dir = TempDir::new().unwrap();
    let csv = write_csv(
        &dir,
        "orden.csv",
        "Date,Zebra,Apple,Mango\n2024-01-01,1,2,3\n",
    );

    let dataset = Dataset::from_csv(&csv).unwrap();
    assert_eq!(dataset.keywords(), vec!["Zebra", "Apple", "Mango"]);
}

#[test]
fn rejects_csv_without_date_column() {
    let dir = TempDir::new().unwrap();
    let csv = write_csv(&dir, "sinfecha.csv", "Dia,Python\n2024-01-01,10\n");

    let err = Dataset::from_csv(&csv).unwrap_err();
    assert!(matches!(err, DatasetError::MissingDateColumn));
}

#[test]
fn rejects_non_numeric_cells_with_position() {
    let dir = TempDir::new().unwrap();
    let csv = write_csv(
        &dir,
        "malos.csv",
        "Date,Python,Java\n2024-01-01,10,5\n2024-01-02,veinte,5\n",
    );

    match Dataset::from_csv(&csv).unwrap_err() {
        DatasetError::NonNumericValue { column, row, value } => {
            assert_eq!(column, "Python");
            assert_eq!(row, 2);
            assert_eq!(value, "veinte");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn rejects_ragged_rows() {
    let dir = TempDir::new().unwrap();
    let csv = write_csv(&dir, "ragged.csv", "Date,Python,Java\n2024-01-01,10\n");

    let err = Dataset::from_csv(&csv).unwrap_err();
    assert!(matches!(err, DatasetError::Csv(_)));
}

#[test]
fn header_only_csv_is_an_empty_dataset() {
    let dir = TempDir::new().unwrap();
    let csv = write_csv(&dir, "vacio.csv", "Date,Python\n");

    let dataset = Dataset::from_csv(&csv).unwrap();
    assert!(dataset.is_empty());
    assert_eq!(dataset.keywords(), vec!["Python"]);
}
