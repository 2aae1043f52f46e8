//! Lag-correlation search.
//!
//! Finds the integer lag (in years) at which the predictor series best
//! explains the target, by cross-correlating the standardized series across
//! candidate shifts and picking the peak.
//!
//! Only non-negative lags are considered: the predictor is assumed to lead
//! the target, never trail it. This is a domain rule, not an implementation
//! artifact, and callers relying on negative lags must preprocess their
//! series instead.

use std::collections::BTreeMap;

use crate::analysis::align::align_on_valid_range;
use crate::domain::{AnnualSeries, LagScanResult};
use crate::error::AnalysisError;
use crate::math::zscore;

/// Search `[0, max_lag_years]` for the lag maximizing cross-correlation.
///
/// Algorithm:
///
/// 1. Validate the unshifted overlap (at least 2 shared years).
/// 2. Z-score each series over its own valid observations (population std;
///    zero variance fails with `UndefinedCorrelation`).
/// 3. Cross-correlate: `c(k) = Σ_y Xn(y - k) · Yn(y)` over every candidate
///    shift with at least one overlapping observation.
/// 4. Restrict candidates to `[0, max_lag_years]`, capped by the available
///    overlap, and take the stable argmax (ties go to the smaller lag).
/// 5. Normalize the winning raw value by the shorter series' length. The
///    result approximates a Pearson coefficient in `[-1, 1]`; the regression
///    stage computes the exact figure separately.
pub fn find_optimal_lag(
    x: &AnnualSeries,
    y: &AnnualSeries,
    max_lag_years: i64,
) -> Result<LagScanResult, AnalysisError> {
    if max_lag_years < 0 {
        return Err(AnalysisError::InvalidLagWindow(format!(
            "max_lag_years must be non-negative, got {max_lag_years}"
        )));
    }

    let base = align_on_valid_range(x, y)?;
    if base.len() < 2 {
        return Err(AnalysisError::InsufficientData {
            needed: 2,
            got: base.len(),
        });
    }

    let (x_years, x_vals): (Vec<i32>, Vec<f64>) = x.iter().unzip();
    let (y_years, y_vals): (Vec<i32>, Vec<f64>) = y.iter().unzip();

    let xz = zscore(&x_vals)?;
    let yz = zscore(&y_vals)?;

    let xn: BTreeMap<i64, f64> = x_years
        .iter()
        .zip(xz.iter())
        .map(|(&year, &v)| (year as i64, v))
        .collect();

    // Shifts beyond `y_last - x_first` have no overlapping observation, so the
    // candidate window shrinks to what the data supports.
    let last_y = y.last_year().ok_or(AnalysisError::EmptyIntersection)? as i64;
    let first_x = x.first_year().ok_or(AnalysisError::EmptyIntersection)? as i64;
    let cap = max_lag_years.min(last_y - first_x);

    let mut best: Option<(i64, f64)> = None;
    for lag in 0..=cap {
        let mut raw = 0.0;
        let mut terms = 0usize;
        for (&year, &yv) in y_years.iter().zip(yz.iter()) {
            if let Some(&xv) = xn.get(&(year as i64 - lag)) {
                raw += xv * yv;
                terms += 1;
            }
        }
        if terms == 0 {
            continue;
        }
        // Stable argmax: replace only on a strictly larger value.
        match best {
            Some((_, best_raw)) if raw <= best_raw => {}
            _ => best = Some((lag, raw)),
        }
    }

    let Some((lag, raw)) = best else {
        return Err(AnalysisError::InvalidLagWindow(
            "no candidate lag has overlapping observations".to_string(),
        ));
    };

    let min_len = x.len().min(y.len()) as f64;
    Ok(LagScanResult {
        lag,
        correlation: raw / min_len,
    })
}
