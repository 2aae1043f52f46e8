//! Summary statistics over dense value sequences.
//!
//! Conventions:
//!
//! - Standard deviations are **population** standard deviations (divide by
//!   `n`, not `n - 1`). The z-scores fed into the cross-correlation and the
//!   Pearson coefficient both use this convention, so the two stages stay
//!   consistent with each other.
//! - Zero variance is a defined failure (`UndefinedCorrelation`), never a
//!   silent divide-by-zero.

use crate::error::AnalysisError;

/// Arithmetic mean. Returns 0.0 for an empty slice.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population standard deviation.
pub fn std_pop(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let m = mean(values);
    let var = values.iter().map(|v| (v - m) * (v - m)).sum::<f64>() / values.len() as f64;
    var.sqrt()
}

/// Z-score a sequence: subtract the mean, divide by the population std.
///
/// Fails with `UndefinedCorrelation` if the sequence has zero variance.
pub fn zscore(values: &[f64]) -> Result<Vec<f64>, AnalysisError> {
    let m = mean(values);
    let s = std_pop(values);
    if !(s > 0.0) {
        return Err(AnalysisError::UndefinedCorrelation);
    }
    Ok(values.iter().map(|v| (v - m) / s).collect())
}

/// Exact Pearson correlation coefficient of two equal-length sequences.
///
/// Fails with `InsufficientData` below 2 points and `UndefinedCorrelation`
/// when either sequence has zero variance.
pub fn pearson(a: &[f64], b: &[f64]) -> Result<f64, AnalysisError> {
    let n = a.len().min(b.len());
    if n < 2 {
        return Err(AnalysisError::InsufficientData { needed: 2, got: n });
    }

    let ma = mean(a);
    let mb = mean(b);

    let mut cov = 0.0;
    let mut var_a = 0.0;
    let mut var_b = 0.0;
    for i in 0..n {
        let da = a[i] - ma;
        let db = b[i] - mb;
        cov += da * db;
        var_a += da * da;
        var_b += db * db;
    }

    if !(var_a > 0.0) || !(var_b > 0.0) {
        return Err(AnalysisError::UndefinedCorrelation);
    }

    Ok(cov / (var_a.sqrt() * var_b.sqrt()))
}
