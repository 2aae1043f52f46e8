//! Lagged OLS regression and forecast.
//!
//! Given the lag chosen by the scan, we re-align the series, fit
//! `Y ≈ β0 + β1 · X_lagged` with an explicit intercept, and evaluate the
//! fitted line at the most recent lagged predictor value to produce the
//! one-step-ahead forecast.
//!
//! The Pearson correlation reported here is exact and supersedes the
//! approximate value from the lag scan when the two disagree.

use nalgebra::DVector;

use crate::analysis::align::align_with_lag;
use crate::domain::{AnnualSeries, FitQuality, RegressionResult};
use crate::error::AnalysisError;
use crate::math::{design_with_intercept, mean, pearson, solve_least_squares, std_pop};

/// Number of fitted parameters (intercept + slope), used by the AIC term.
const N_PARAMS: usize = 2;

/// Fit the lagged linear model and derive the next-period forecast.
///
/// Deterministic given identical inputs. Fails with `InsufficientData` below
/// 2 aligned observations and with `SingularDesign` when the lagged predictor
/// is constant (perfect collinearity with the intercept).
pub fn fit_and_predict(
    x: &AnnualSeries,
    y: &AnnualSeries,
    best_lag: i64,
) -> Result<RegressionResult, AnalysisError> {
    let pair = align_with_lag(x, y, best_lag)?;
    let n = pair.len();
    if n < 2 {
        return Err(AnalysisError::InsufficientData { needed: 2, got: n });
    }

    let xs = pair.x();
    let ys = pair.y();

    if !(std_pop(xs) > 0.0) {
        return Err(AnalysisError::SingularDesign);
    }

    let design = design_with_intercept(xs);
    let yv = DVector::from_column_slice(ys);
    let beta = solve_least_squares(&design, &yv).ok_or(AnalysisError::SingularDesign)?;
    let intercept = beta[0];
    let slope = beta[1];

    // Implied target value one effective period past the last observation.
    let prediction = intercept + slope * xs[n - 1];

    let correlation = pearson(xs, ys)?;

    let y_mean = mean(ys);
    let mut rss = 0.0;
    let mut tss = 0.0;
    let mut abs_err = 0.0;
    for i in 0..n {
        let fitted = intercept + slope * xs[i];
        let r = ys[i] - fitted;
        rss += r * r;
        abs_err += r.abs();
        let d = ys[i] - y_mean;
        tss += d * d;
    }

    // `pearson` succeeding guarantees tss > 0.
    let r_squared = 1.0 - rss / tss;
    let n_f = n as f64;
    let rmse = (rss / n_f).sqrt();
    let mae = abs_err / n_f;
    // AIC under Gaussian errors: n * ln(RSS/n) + 2k, RSS floored for exact fits.
    let aic = n_f * (rss / n_f).max(1e-12).ln() + 2.0 * N_PARAMS as f64;

    Ok(RegressionResult {
        lag: best_lag,
        prediction,
        intercept,
        slope,
        correlation,
        r_squared,
        quality: FitQuality { rmse, mae, aic, n },
    })
}
