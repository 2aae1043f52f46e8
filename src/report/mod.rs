//! Reporting utilities: per-year fit rows and formatted terminal output.
//!
//! We keep formatting code in one place so:
//! - the math/analysis code stays clean and testable
//! - output changes are localized (important for future snapshot tests)

pub mod format;

pub use format::*;

use crate::analysis::align_with_lag;
use crate::domain::{AnnualSeries, RegressionResult};
use crate::error::AnalysisError;

/// One row of the aligned fit: effective year, lagged predictor, observed and
/// fitted target, residual.
#[derive(Debug, Clone)]
pub struct YearFit {
    pub year: i32,
    pub x_lagged: f64,
    pub y_obs: f64,
    pub y_fit: f64,
    pub residual: f64,
}

/// Compute fitted values and residuals over the aligned window of a result.
pub fn compute_fit_table(
    x: &AnnualSeries,
    y: &AnnualSeries,
    result: &RegressionResult,
) -> Result<Vec<YearFit>, AnalysisError> {
    let pair = align_with_lag(x, y, result.lag)?;

    let mut out = Vec::with_capacity(pair.len());
    for i in 0..pair.len() {
        let xv = pair.x()[i];
        let y_obs = pair.y()[i];
        let y_fit = result.intercept + result.slope * xv;
        out.push(YearFit {
            year: pair.years()[i],
            x_lagged: xv,
            y_obs,
            y_fit,
            residual: y_obs - y_fit,
        });
    }
    Ok(out)
}
