//! Formatted terminal output.

use crate::analysis::BatchOutcome;
use crate::domain::{LagScanResult, RegressionResult};
use crate::report::YearFit;

/// Format the single-pair analysis summary.
pub fn format_analysis_summary(
    name: &str,
    scan: &LagScanResult,
    result: &RegressionResult,
    max_lag_years: i64,
) -> String {
    let mut out = String::new();

    out.push_str("=== leadlag - Lead-Lag Regression ===\n");
    out.push_str(&format!("Pair: {name}\n"));
    out.push_str(&format!("Lag window: [0, {max_lag_years}] years\n"));
    out.push_str(&format!(
        "Best lag: {} (scan correlation ~{:.4})\n",
        scan.lag, scan.correlation
    ));

    out.push_str("\nRegression (Y ~ b0 + b1 * X_lagged):\n");
    out.push_str(&format!(
        "  b0={:.4} | b1={:.4}\n",
        result.intercept, result.slope
    ));
    out.push_str(&format!(
        "  pearson={:.4} | R2={:.4} | rmse={:.4} | mae={:.4} | aic={:.2} | n={}\n",
        result.correlation,
        result.r_squared,
        result.quality.rmse,
        result.quality.mae,
        result.quality.aic,
        result.quality.n,
    ));
    out.push_str(&format!("\nNext-period forecast: {:.4}\n", result.prediction));

    out
}

/// Format the per-year fit table.
pub fn format_fit_table(rows: &[YearFit]) -> String {
    let mut out = String::new();
    out.push_str("\nYear    X_lagged        Y_obs        Y_fit     residual\n");
    for row in rows {
        out.push_str(&format!(
            "{:<6} {:>10.4} {:>12.4} {:>12.4} {:>12.4}\n",
            row.year, row.x_lagged, row.y_obs, row.y_fit, row.residual
        ));
    }
    out
}

/// Format the batch summary table, one line per pair.
///
/// Failed pairs print their error instead of metrics; the batch itself never
/// hides them.
pub fn format_batch_table(outcomes: &[BatchOutcome]) -> String {
    let mut out = String::new();
    out.push_str("=== leadlag - Batch Analysis ===\n");
    out.push_str(&format!("Pairs: {}\n\n", outcomes.len()));
    out.push_str("Pair             lag   pearson        R2   forecast\n");

    for o in outcomes {
        match &o.result {
            Ok(r) => out.push_str(&format!(
                "{:<16} {:>3} {:>9.4} {:>9.4} {:>10.4}\n",
                o.name, r.lag, r.correlation, r.r_squared, r.prediction
            )),
            Err(e) => out.push_str(&format!("{:<16} FAILED: {e}\n", o.name)),
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::FitQuality;

    fn result() -> RegressionResult {
        RegressionResult {
            lag: 2,
            prediction: 41.5,
            intercept: 1.0,
            slope: 0.5,
            correlation: 0.93,
            r_squared: 0.86,
            quality: FitQuality {
                rmse: 1.2,
                mae: 0.9,
                aic: 33.0,
                n: 18,
            },
        }
    }

    #[test]
    fn summary_mentions_lag_and_forecast() {
        let scan = LagScanResult {
            lag: 2,
            correlation: 0.91,
        };
        let s = format_analysis_summary("gdp-vs-hiring", &scan, &result(), 10);
        assert!(s.contains("gdp-vs-hiring"));
        assert!(s.contains("Best lag: 2"));
        assert!(s.contains("41.5"));
    }

    #[test]
    fn batch_table_prints_failures_inline() {
        let outcomes = vec![
            BatchOutcome {
                name: "ok".to_string(),
                result: Ok(result()),
            },
            BatchOutcome {
                name: "bad".to_string(),
                result: Err(crate::error::AnalysisError::EmptyIntersection),
            },
        ];
        let s = format_batch_table(&outcomes);
        assert!(s.contains("ok"));
        assert!(s.contains("FAILED"));
        assert!(s.contains("overlapping valid year range"));
    }
}
