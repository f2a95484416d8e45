//! Unified error handling for the tendencia crate
//!
//! Domain-specific errors live next to their modules ([`DatasetError`],
//! [`AnalyticsError`], [`PlotError`]); this module consolidates them into a
//! single [`Error`] enum for use across module boundaries, and classifies
//! which failures abort the run.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

// Re-export domain-specific errors for convenience
pub use crate::analytics::AnalyticsError;
pub use crate::dataset::DatasetError;
pub use crate::plot::PlotError;
pub use crate::report::ReportError;

/// Unified error type for the tendencia crate
#[derive(Error, Debug)]
pub enum Error {
    /// Input CSV path does not exist
    #[error("input file not found: {}", .0.display())]
    MissingFile(PathBuf),

    /// Dataset loading and validation errors
    #[error("dataset error: {0}")]
    Dataset(#[from] DatasetError),

    /// Statistics computation errors
    #[error("analytics error: {0}")]
    Analytics(#[from] AnalyticsError),

    /// Chart rendering errors
    #[error("plot error: {0}")]
    Plot(#[from] PlotError),

    /// Text artifact write errors
    #[error("report error: {0}")]
    Report(#[from] ReportError),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Configuration errors
    #[error("config error: {0}")]
    Config(String),
}

impl Error {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Whether this error must abort the run with exit code 1.
    ///
    /// A failed report export is reported and the run continues with the
    /// comparison and plot; everything else aborts before any further
    /// output is produced. Unknown keywords never reach this enum at all.
    #[must_use]
    pub fn is_fatal(&self) -> bool {
        match self {
            Self::MissingFile(_)
            | Self::Dataset(_)
            | Self::Analytics(_)
            | Self::Plot(_)
            | Self::Io(_)
            | Self::Config(_) => true,
            Self::Report(_) => false,
        }
    }
}

/// Result type alias using the unified Error type
pub type Result<T> = std::result::Result<T, Error>;
