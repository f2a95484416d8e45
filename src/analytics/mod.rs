//! Analytics module: per-keyword summary statistics and subset selection

pub mod stats;

pub use stats::{
    compute_statistics, select_keywords, AnalyticsError, AnalyticsResult, KeywordStats,
    ResultsMap, Selection,
};
