//! Batch analysis over many indicator pairs.
//!
//! Each (X, Y) pair is independent, so the batch is embarrassingly parallel;
//! results come back in input order. Per-pair failures stay attached to their
//! pair instead of aborting the batch. Whether to skip or report a failed
//! indicator is the caller's call.

use rayon::prelude::*;

use crate::analysis::facade::analyze;
use crate::domain::{AnnualSeries, RegressionResult};
use crate::error::AnalysisError;

/// One named indicator pair queued for analysis.
#[derive(Debug, Clone)]
pub struct BatchItem {
    pub name: String,
    pub x: AnnualSeries,
    pub y: AnnualSeries,
}

/// Per-pair outcome, in input order.
#[derive(Debug, Clone)]
pub struct BatchOutcome {
    pub name: String,
    pub result: Result<RegressionResult, AnalysisError>,
}

/// Analyze every pair in parallel.
pub fn run_batch(items: &[BatchItem], max_lag_years: i64) -> Vec<BatchOutcome> {
    items
        .par_iter()
        .map(|item| BatchOutcome {
            name: item.name.clone(),
            result: analyze(&item.x, &item.y, max_lag_years),
        })
        .collect()
}
