//! Dataset model and CSV loader
//!
//! A [`Dataset`] is the validated, column-ordered form of a Google Trends
//! style CSV export: one `Date` column plus N numeric keyword columns
//! aligned by row index. All validation happens once at load time; after
//! `from_csv` returns, every keyword series is a clean `Vec<f64>` of the
//! same length as the date column.

use std::path::Path;

use thiserror::Error;

/// Name of the mandatory date column.
pub const DATE_COLUMN: &str = "Date";

/// Errors that can occur while loading or validating a dataset
#[derive(Debug, Error)]
pub enum DatasetError {
    /// The CSV has no column literally named `Date`
    #[error("CSV file must contain a '{DATE_COLUMN}' column")]
    MissingDateColumn,

    /// A keyword cell could not be parsed as a number
    #[error("column '{column}', row {row}: '{value}' is not a number")]
    NonNumericValue {
        column: String,
        row: usize,
        value: String,
    },

    /// Underlying CSV reader error (I/O, ragged rows, encoding)
    #[error("CSV read error: {0}")]
    Csv(#[from] csv::Error),
}

/// Result type for dataset operations
pub type DatasetResult<T> = Result<T, DatasetError>;

/// In-memory keyword-interest dataset
///
/// Invariants, established by [`Dataset::from_csv`]:
/// - every keyword series has exactly one value per date row;
/// - keyword columns keep their original CSV order;
/// - dates are kept as opaque strings, exactly as they appeared in the file.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    dates: Vec<String>,
    columns: Vec<(String, Vec<f64>)>,
}

impl Dataset {
    /// Build a dataset directly from columns (used by tests and tooling).
    ///
    /// Callers must uphold the row-alignment invariant themselves.
    #[must_use]
    pub fn new(dates: Vec<String>, columns: Vec<(String, Vec<f64>)>) -> Self {
        Self { dates, columns }
    }

    /// Load and validate a dataset from a CSV file.
    ///
    /// # Arguments
    /// * `path` - Path to a CSV file with a header row
    ///
    /// # Errors
    /// * [`DatasetError::MissingDateColumn`] if no `Date` header exists
    /// * [`DatasetError::NonNumericValue`] on the first cell that fails to
    ///   parse as `f64` (row numbers are 1-based data rows)
    /// * [`DatasetError::Csv`] for I/O and malformed-CSV errors
    pub fn from_csv(path: &Path) -> DatasetResult<Self> {
        let mut reader = csv::Reader::from_path(path)?;

        let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();

        let date_idx = headers
            .iter()
            .position(|h| h == DATE_COLUMN)
            .ok_or(DatasetError::MissingDateColumn)?;

        let mut dates = Vec::new();
        let mut columns: Vec<(String, Vec<f64>)> = headers
            .iter()
            .enumerate()
            .filter(|(idx, _)| *idx != date_idx)
            .map(|(_, name)| (name.clone(), Vec::new()))
            .collect();

        for (row_no, record) in reader.records().enumerate() {
            let record = record?;

            dates.push(record.get(date_idx).unwrap_or("").to_string());

            // Columns after the date slot are shifted down by one.
            for (slot, (name, series)) in columns.iter_mut().enumerate() {
                let field_idx = if slot < date_idx { slot } else { slot + 1 };
                let raw = record.get(field_idx).unwrap_or("");

                let value =
                    raw.trim()
                        .parse::<f64>()
                        .map_err(|_| DatasetError::NonNumericValue {
                            column: name.clone(),
                            row: row_no + 1,
                            value: raw.to_string(),
                        })?;

                series.push(value);
            }
        }

        tracing::debug!(
            rows = dates.len(),
            keywords = columns.len(),
            path = %path.display(),
            "dataset loaded"
        );

        Ok(Self { dates, columns })
    }

    /// Number of rows (dates)
    #[must_use]
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// Check whether the dataset has no rows
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Keyword column names in original CSV order
    #[must_use]
    pub fn keywords(&self) -> Vec<&str> {
        self.columns.iter().map(|(name, _)| name.as_str()).collect()
    }

    /// Look up a keyword series by name
    #[must_use]
    pub fn series(&self, keyword: &str) -> Option<&[f64]> {
        self.columns
            .iter()
            .find(|(name, _)| name == keyword)
            .map(|(_, series)| series.as_slice())
    }

    /// Iterate over `(keyword, series)` pairs in original column order
    pub fn columns(&self) -> impl Iterator<Item = (&str, &[f64])> {
        self.columns
            .iter()
            .map(|(name, series)| (name.as_str(), series.as_slice()))
    }

    /// Date cell per row, in file order
    #[must_use]
    pub fn dates(&self) -> &[String] {
        &self.dates
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_load_valid_csv() {
        let file = write_csv("Date,Python,Java\n2024-01-01,10,5\n2024-01-02,20,5\n");
        let dataset = Dataset::from_csv(file.path()).unwrap();

        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.keywords(), vec!["Python", "Java"]);
        assert_eq!(dataset.series("Python"), Some(&[10.0, 20.0][..]));
        assert_eq!(dataset.series("Java"), Some(&[5.0, 5.0][..]));
        assert_eq!(dataset.dates(), &["2024-01-01", "2024-01-02"]);
    }

    #[test]
    fn test_date_column_not_first() {
        let file = write_csv("Python,Date,Java\n10,2024-01-01,5\n");
        let dataset = Dataset::from_csv(file.path()).unwrap();

        // Keyword order skips the date slot but keeps CSV order otherwise
        assert_eq!(dataset.keywords(), vec!["Python", "Java"]);
        assert_eq!(dataset.series("Python"), Some(&[10.0][..]));
        assert_eq!(dataset.series("Java"), Some(&[5.0][..]));
        assert_eq!(dataset.dates(), &["2024-01-01"]);
    }

    #[test]
    fn test_missing_date_column() {
        let file = write_csv("Fecha,Python\n2024-01-01,10\n");
        let err = Dataset::from_csv(file.path()).unwrap_err();
        assert!(matches!(err, DatasetError::MissingDateColumn));
    }

    #[test]
    fn test_non_numeric_value() {
        let file = write_csv("Date,Python\n2024-01-01,10\n2024-01-02,N/A\n");
        let err = Dataset::from_csv(file.path()).unwrap_err();

        match err {
            DatasetError::NonNumericValue { column, row, value } => {
                assert_eq!(column, "Python");
                assert_eq!(row, 2);
                assert_eq!(value, "N/A");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_whitespace_around_numbers() {
        let file = write_csv("Date,Python\n2024-01-01, 42 \n");
        let dataset = Dataset::from_csv(file.path()).unwrap();
        assert_eq!(dataset.series("Python"), Some(&[42.0][..]));
    }

    #[test]
    fn test_empty_dataset_loads() {
        let file = write_csv("Date,Python\n");
        let dataset = Dataset::from_csv(file.path()).unwrap();
        assert!(dataset.is_empty());
        assert_eq!(dataset.keywords(), vec!["Python"]);
    }

    #[test]
    fn test_unknown_series_lookup() {
        let dataset = Dataset::new(vec!["d1".into()], vec![("Python".into(), vec![1.0])]);
        assert!(dataset.series("Rust").is_none());
    }
}
