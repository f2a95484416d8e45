//! Shared fixtures for integration tests

use std::io::Write;
use std::path::PathBuf;

use tempfile::TempDir;

use tendencia::config::Config;

/// Write a CSV file into `dir` and return its path.
pub fn write_csv(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(content.as_bytes()).unwrap();
    path
}

/// Three days of Python/Java interest, the reference comparison scenario.
#[allow(dead_code)]
pub const TRENDS_CSV: &str = "\
Date,Python,Java
2024-01-01,10,5
2024-01-02,20,5
2024-01-03,30,5
";

/// Default config with all output redirected into `dir`.
#[allow(dead_code)]
pub fn sandboxed_config(dir: &TempDir) -> Config {
    let mut config = Config::default();
    config.report.output_path = dir.path().join("resumen.txt");
    config.plot.output_path = dir.path().join("tendencias.svg");
    config
}
