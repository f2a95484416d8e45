//! Configuration management for the trend analyzer
//!
//! This module handles loading and validating configuration from environment
//! variables and TOML files. Report labels and number formatting live here
//! rather than as hardcoded format strings, so they can be tested and
//! localized without touching the renderer.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Text report configuration
    pub report: ReportConfig,

    /// Plot output configuration
    pub plot: PlotConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Text report configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Path of the exported text artifact
    pub output_path: PathBuf,

    /// Decimal places for mean and volatility
    pub decimal_places: usize,

    /// Label for the mean line
    pub label_mean: String,

    /// Label for the maximum-interest date line
    pub label_max: String,

    /// Label for the minimum-interest date line
    pub label_min: String,

    /// Label for the volatility line
    pub label_volatility: String,
}

/// Plot output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlotConfig {
    /// Path of the rendered SVG chart
    pub output_path: PathBuf,

    /// Chart width in pixels
    pub width: u32,

    /// Chart height in pixels
    pub height: u32,

    /// Chart caption
    pub title: String,

    /// X axis description
    pub x_label: String,

    /// Y axis description
    pub y_label: String,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Log format (text, json)
    pub format: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(path) = std::env::var("TENDENCIA_REPORT_PATH") {
            config.report.output_path = path.into();
        }

        if let Some(decimals) = std::env::var("TENDENCIA_DECIMALS")
            .ok()
            .and_then(|v| v.parse::<usize>().ok())
        {
            config.report.decimal_places = decimals;
        }

        if let Ok(path) = std::env::var("TENDENCIA_PLOT_PATH") {
            config.plot.output_path = path.into();
        }

        if let Some(width) = std::env::var("TENDENCIA_PLOT_WIDTH")
            .ok()
            .and_then(|v| v.parse::<u32>().ok())
        {
            config.plot.width = width;
        }

        if let Some(height) = std::env::var("TENDENCIA_PLOT_HEIGHT")
            .ok()
            .and_then(|v| v.parse::<u32>().ok())
        {
            config.plot.height = height;
        }

        if let Ok(level) = std::env::var("TENDENCIA_LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Ok(format) = std::env::var("TENDENCIA_LOG_FORMAT") {
            config.logging.format = format;
        }

        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse TOML config file: {}", path.display()))?;

        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.report.decimal_places > 17 {
            anyhow::bail!("decimal_places must be at most 17");
        }

        if self.plot.width == 0 || self.plot.height == 0 {
            anyhow::bail!("plot dimensions must be greater than 0");
        }

        if self.report.output_path.as_os_str().is_empty() {
            anyhow::bail!("report output_path must not be empty");
        }

        if self.plot.output_path.as_os_str().is_empty() {
            anyhow::bail!("plot output_path must not be empty");
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            report: ReportConfig {
                output_path: PathBuf::from("resumen.txt"),
                decimal_places: 2,
                label_mean: String::from("Promedio"),
                label_max: String::from("Máximo interés"),
                label_min: String::from("Mínimo interés"),
                label_volatility: String::from("Volatilidad"),
            },
            plot: PlotConfig {
                output_path: PathBuf::from("tendencias.svg"),
                width: 1000,
                height: 500,
                title: String::from("Tendencias de palabras clave"),
                x_label: String::from("Fecha"),
                y_label: String::from("Interés de búsqueda"),
            },
            logging: LoggingConfig {
                level: String::from("info"),
                format: String::from("text"),
            },
        }
    }
}
