//! Single-call analysis entry point.

use crate::analysis::lag_scan::find_optimal_lag;
use crate::analysis::regression::fit_and_predict;
use crate::domain::{AnnualSeries, RegressionResult};
use crate::error::AnalysisError;

/// Run the full pipeline: lag search, then the lagged regression fit.
///
/// This is the sole entry point external consumers need; intermediate
/// alignment and search state stays internal. Errors from either stage
/// propagate unchanged; fallback behavior (e.g., skipping an indicator
/// pair) is the caller's decision.
pub fn analyze(
    x: &AnnualSeries,
    y: &AnnualSeries,
    max_lag_years: i64,
) -> Result<RegressionResult, AnalysisError> {
    let scan = find_optimal_lag(x, y, max_lag_years)?;
    fit_and_predict(x, y, scan.lag)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DEFAULT_MAX_LAG_YEARS;

    fn ramp(start: i32, values: &[f64]) -> AnnualSeries {
        AnnualSeries::from_pairs(
            values
                .iter()
                .enumerate()
                .map(|(i, &v)| (start + i as i32, v)),
        )
    }

    #[test]
    fn analyze_combines_scan_and_fit() {
        let x = ramp(1990, &[1.0, 2.0, 3.0, 4.0, 5.0]);
        let y = ramp(1991, &[1.0, 2.0, 3.0, 4.0, 5.0]);

        let result = analyze(&x, &y, DEFAULT_MAX_LAG_YEARS).unwrap();
        assert_eq!(result.lag, 1);
        assert!((result.slope - 1.0).abs() < 1e-9);
        assert!((result.r_squared - 1.0).abs() < 1e-9);
    }

    #[test]
    fn analyze_propagates_scan_errors_unchanged() {
        let x = ramp(2000, &[5.0, 5.0, 5.0]);
        let y = ramp(2000, &[1.0, 2.0, 3.0]);

        assert_eq!(
            analyze(&x, &y, DEFAULT_MAX_LAG_YEARS).unwrap_err(),
            AnalysisError::UndefinedCorrelation
        );
    }
}
