//! Summary statistics over keyword-interest time series
//!
//! This module is the analytical core of the tool:
//! - per-keyword mean, extremum dates and volatility ([`compute_statistics`])
//! - selection of a keyword subset for comparison ([`select_keywords`])
//!
//! Volatility is the *sample* standard deviation (divisor n-1). On a
//! single-row dataset it is therefore undefined and reported as `NaN`;
//! callers must tolerate that.

use std::collections::HashMap;

use thiserror::Error;

use crate::dataset::Dataset;

/// Errors that can occur during statistics computation
#[derive(Debug, Error)]
pub enum AnalyticsError {
    /// A keyword column has no rows, so extremum dates do not exist
    #[error("keyword '{0}' has no data rows to analyze")]
    EmptySeries(String),
}

/// Result type for analytics operations
pub type AnalyticsResult<T> = Result<T, AnalyticsError>;

/// Derived statistics for a single keyword series
#[derive(Debug, Clone, PartialEq)]
pub struct KeywordStats {
    /// Arithmetic mean of the interest values
    pub mean: f64,

    /// Date of the first occurrence of the maximum value
    pub max_date: String,

    /// Date of the first occurrence of the minimum value
    pub min_date: String,

    /// Sample standard deviation (NaN for single-row series)
    pub volatility: f64,
}

/// Keyword-to-statistics map preserving original column order
///
/// Built once by [`compute_statistics`] and read-only afterward.
#[derive(Debug, Clone, Default)]
pub struct ResultsMap {
    order: Vec<String>,
    stats: HashMap<String, KeywordStats>,
}

impl ResultsMap {
    fn insert(&mut self, keyword: String, stats: KeywordStats) {
        if !self.stats.contains_key(&keyword) {
            self.order.push(keyword.clone());
        }
        self.stats.insert(keyword, stats);
    }

    /// Look up statistics for a keyword
    #[must_use]
    pub fn get(&self, keyword: &str) -> Option<&KeywordStats> {
        self.stats.get(keyword)
    }

    /// Keyword names in original column order
    #[must_use]
    pub fn keywords(&self) -> &[String] {
        &self.order
    }

    /// Iterate over `(keyword, stats)` pairs in original column order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &KeywordStats)> {
        self.order
            .iter()
            .filter_map(|name| self.stats.get(name).map(|s| (name.as_str(), s)))
    }

    /// Number of keywords
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Check whether the map has no entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

/// Outcome of looking up one requested keyword in a [`ResultsMap`]
#[derive(Debug, Clone, PartialEq)]
pub enum Selection {
    /// The keyword exists; statistics attached
    Found {
        keyword: String,
        stats: KeywordStats,
    },

    /// The keyword is not a column of the dataset
    NotFound { keyword: String },
}

impl Selection {
    /// Keyword name this selection refers to
    #[must_use]
    pub fn keyword(&self) -> &str {
        match self {
            Self::Found { keyword, .. } | Self::NotFound { keyword } => keyword,
        }
    }
}

/// Compute per-keyword summary statistics over a dataset.
///
/// Produces exactly one [`KeywordStats`] entry per keyword column, in
/// original column order. Pure function: the dataset is not modified.
///
/// # Errors
/// [`AnalyticsError::EmptySeries`] if a keyword column exists but the
/// dataset has zero rows; extremum dates are undefined in that case.
pub fn compute_statistics(dataset: &Dataset) -> AnalyticsResult<ResultsMap> {
    let mut results = ResultsMap::default();

    for (keyword, series) in dataset.columns() {
        if series.is_empty() {
            return Err(AnalyticsError::EmptySeries(keyword.to_string()));
        }

        let n = series.len();
        let mean = series.iter().sum::<f64>() / n as f64;

        // Strict comparisons keep the first occurrence on ties.
        let mut max_idx = 0;
        let mut min_idx = 0;
        for (idx, &value) in series.iter().enumerate() {
            if value > series[max_idx] {
                max_idx = idx;
            }
            if value < series[min_idx] {
                min_idx = idx;
            }
        }

        let volatility = if n > 1 {
            let sum_sq: f64 = series.iter().map(|&v| (v - mean).powi(2)).sum();
            (sum_sq / (n - 1) as f64).sqrt()
        } else {
            f64::NAN
        };

        results.insert(
            keyword.to_string(),
            KeywordStats {
                mean,
                max_date: dataset.dates()[max_idx].clone(),
                min_date: dataset.dates()[min_idx].clone(),
                volatility,
            },
        );
    }

    Ok(results)
}

/// Resolve a requested keyword subset against computed results.
///
/// Unknown keywords yield [`Selection::NotFound`] and processing continues;
/// duplicates in the request are preserved. An empty request selects every
/// keyword in original column order.
#[must_use]
pub fn select_keywords(results: &ResultsMap, requested: &[String]) -> Vec<Selection> {
    if requested.is_empty() {
        return results
            .iter()
            .map(|(keyword, stats)| Selection::Found {
                keyword: keyword.to_string(),
                stats: stats.clone(),
            })
            .collect();
    }

    requested
        .iter()
        .map(|keyword| match results.get(keyword) {
            Some(stats) => Selection::Found {
                keyword: keyword.clone(),
                stats: stats.clone(),
            },
            None => {
                tracing::warn!(keyword = %keyword, "requested keyword not in dataset");
                Selection::NotFound {
                    keyword: keyword.clone(),
                }
            }
        })
        .collect()
}
