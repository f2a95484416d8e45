//! Text report rendering and export
//!
//! Formats [`ResultsMap`] entries as the human-readable per-keyword blocks
//! that go both to the console and to the flat UTF-8 text artifact
//! (`resumen.txt` by default). Labels and decimal precision come from
//! [`ReportConfig`], not from hardcoded format strings.

use std::fmt::Write as _;
use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

use thiserror::Error;

use crate::analytics::{KeywordStats, ResultsMap, Selection};
use crate::config::ReportConfig;

/// Failure to write the text artifact.
///
/// Non-fatal by policy: the caller logs it and continues with the
/// comparison and plot.
#[derive(Debug, Error)]
#[error("failed to write report file {}: {source}", path.display())]
pub struct ReportError {
    /// Artifact path that could not be written
    pub path: PathBuf,

    #[source]
    pub source: io::Error,
}

/// Renders and exports per-keyword statistic blocks
pub struct ReportRenderer<'a> {
    config: &'a ReportConfig,
}

impl<'a> ReportRenderer<'a> {
    /// Create a renderer over a report configuration
    #[must_use]
    pub fn new(config: &'a ReportConfig) -> Self {
        Self { config }
    }

    /// Render the block for a single keyword.
    ///
    /// Layout: label line with the keyword name, then one line per
    /// statistic, then a blank separator line.
    #[must_use]
    pub fn render_block(&self, keyword: &str, stats: &KeywordStats) -> String {
        let p = self.config.decimal_places;
        let mut block = String::new();

        // write! to a String cannot fail
        let _ = writeln!(block, "{keyword}");
        let _ = writeln!(block, "{}: {:.p$}", self.config.label_mean, stats.mean);
        let _ = writeln!(block, "{}: {}", self.config.label_max, stats.max_date);
        let _ = writeln!(block, "{}: {}", self.config.label_min, stats.min_date);
        let _ = writeln!(
            block,
            "{}: {:.p$}",
            self.config.label_volatility, stats.volatility
        );
        block.push('\n');

        block
    }

    /// Render every keyword block in original column order
    #[must_use]
    pub fn render_all(&self, results: &ResultsMap) -> String {
        let mut out = String::new();
        for (keyword, stats) in results.iter() {
            out.push_str(&self.render_block(keyword, stats));
        }
        out
    }

    /// Write the full report to the configured text artifact.
    ///
    /// # Returns
    /// Path of the written file.
    pub fn export(&self, results: &ResultsMap) -> Result<PathBuf, ReportError> {
        let path = self.config.output_path.clone();
        let content = self.render_all(results);

        let write = |path: &PathBuf| -> io::Result<()> {
            let mut file = File::create(path)?;
            file.write_all(content.as_bytes())
        };

        write(&path).map_err(|source| ReportError {
            path: path.clone(),
            source,
        })?;

        tracing::debug!(path = %path.display(), keywords = results.len(), "report exported");
        Ok(path)
    }

    /// Print the comparison for a keyword selection to stdout.
    ///
    /// Unknown keywords produce a per-occurrence warning line; all other
    /// requested keywords are still printed.
    pub fn print_comparison(&self, selections: &[Selection]) {
        println!("\nComparación de palabras clave:");

        for selection in selections {
            match selection {
                Selection::Found { keyword, stats } => {
                    print!("\n{}", self.render_block(keyword, stats));
                }
                Selection::NotFound { keyword } => {
                    println!("'{keyword}' no encontrado en el CSV.");
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::compute_statistics;
    use crate::config::Config;
    use crate::dataset::Dataset;
    use tempfile::TempDir;

    fn sample_results() -> ResultsMap {
        let dataset = Dataset::new(
            vec![
                "2024-01-01".into(),
                "2024-01-02".into(),
                "2024-01-03".into(),
            ],
            vec![
                ("Python".into(), vec![10.0, 20.0, 30.0]),
                ("Java".into(), vec![5.0, 5.0, 5.0]),
            ],
        );
        compute_statistics(&dataset).unwrap()
    }

    #[test]
    fn test_block_layout() {
        let config = Config::default();
        let renderer = ReportRenderer::new(&config.report);
        let results = sample_results();

        let block = renderer.render_block("Python", results.get("Python").unwrap());
        let lines: Vec<&str> = block.lines().collect();

        assert_eq!(lines[0], "Python");
        assert_eq!(lines[1], "Promedio: 20.00");
        assert_eq!(lines[2], "Máximo interés: 2024-01-03");
        assert_eq!(lines[3], "Mínimo interés: 2024-01-01");
        assert_eq!(lines[4], "Volatilidad: 10.00");
        // Trailing blank separator line
        assert!(block.ends_with("\n\n"));
    }

    #[test]
    fn test_render_all_preserves_column_order() {
        let config = Config::default();
        let renderer = ReportRenderer::new(&config.report);
        let report = renderer.render_all(&sample_results());

        let python_pos = report.find("Python").unwrap();
        let java_pos = report.find("Java").unwrap();
        assert!(python_pos < java_pos);
    }

    #[test]
    fn test_decimal_places_from_config() {
        let mut config = Config::default();
        config.report.decimal_places = 4;
        let renderer = ReportRenderer::new(&config.report);
        let results = sample_results();

        let block = renderer.render_block("Java", results.get("Java").unwrap());
        assert!(block.contains("Promedio: 5.0000"));
        assert!(block.contains("Volatilidad: 0.0000"));
    }

    #[test]
    fn test_export_writes_utf8_artifact() {
        let temp_dir = TempDir::new().unwrap();
        let mut config = Config::default();
        config.report.output_path = temp_dir.path().join("resumen.txt");

        let renderer = ReportRenderer::new(&config.report);
        let path = renderer.export(&sample_results()).unwrap();

        assert!(path.exists());
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("Máximo interés: 2024-01-03"));
        assert!(content.contains("Volatilidad: 0.00"));
    }

    #[test]
    fn test_export_to_unwritable_path_fails() {
        let mut config = Config::default();
        config.report.output_path = PathBuf::from("/nonexistent-dir/resumen.txt");

        let renderer = ReportRenderer::new(&config.report);
        assert!(renderer.export(&sample_results()).is_err());
    }
}
