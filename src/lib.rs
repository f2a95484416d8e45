//! tendencia - Keyword-interest trend analyzer
//!
//! Computes summary statistics over time-series keyword-interest data
//! (search-trend volume per keyword per date), exports a textual report,
//! and optionally plots selected keyword series.
//!
//! # Architecture
//!
//! The library is organized into several modules:
//!
//! - [`config`] - Configuration management and report/plot settings
//! - [`dataset`] - CSV loading and the validated dataset model
//! - [`analytics`] - Per-keyword statistics and subset selection (the core)
//! - [`report`] - Text report rendering and export
//! - [`plot`] - SVG line-chart rendering
//! - [`commands`] - CLI command pipeline
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use tendencia::analytics::compute_statistics;
//! use tendencia::dataset::Dataset;
//!
//! fn main() -> anyhow::Result<()> {
//!     let dataset = Dataset::from_csv(Path::new("datos.csv"))?;
//!     let results = compute_statistics(&dataset)?;
//!     for (keyword, stats) in results.iter() {
//!         println!("{keyword}: media {:.2}", stats.mean);
//!     }
//!     Ok(())
//! }
//! ```

pub mod analytics;
pub mod commands;
pub mod config;
pub mod dataset;
pub mod error;
pub mod plot;
pub mod report;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::analytics::{
        compute_statistics, select_keywords, KeywordStats, ResultsMap, Selection,
    };
    pub use crate::config::Config;
    pub use crate::dataset::Dataset;
    pub use crate::error::{Error, Result};
    pub use crate::report::ReportRenderer;
}
