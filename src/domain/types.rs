//! Shared domain types.
//!
//! These types are intentionally kept lightweight and serializable so they can be:
//!
//! - used in-memory during the lag search and regression
//! - exported to JSON/CSV
//! - reloaded later for comparisons across indicator pairs

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Default bound on the lag search window, in years.
pub const DEFAULT_MAX_LAG_YEARS: i64 = 10;

/// An annual time series: an ordered mapping from year to observed value.
///
/// Years need not be contiguous; a missing year simply has no entry. Inserting
/// a non-finite value marks that year as missing, mirroring how upstream
/// cleaning represents absent observations. Duplicate years are impossible by
/// construction (later inserts replace earlier ones).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnnualSeries {
    values: BTreeMap<i32, f64>,
}

impl AnnualSeries {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a series from `(year, value)` pairs.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (i32, f64)>) -> Self {
        let mut out = Self::new();
        for (year, value) in pairs {
            out.insert(year, value);
        }
        out
    }

    /// Insert an observation. Non-finite values remove the year instead.
    ///
    /// Returns the previous value for that year, if any.
    pub fn insert(&mut self, year: i32, value: f64) -> Option<f64> {
        if value.is_finite() {
            self.values.insert(year, value)
        } else {
            self.values.remove(&year)
        }
    }

    pub fn get(&self, year: i32) -> Option<f64> {
        self.values.get(&year).copied()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Earliest year with a valid observation.
    pub fn first_year(&self) -> Option<i32> {
        self.values.keys().next().copied()
    }

    /// Latest year with a valid observation.
    pub fn last_year(&self) -> Option<i32> {
        self.values.keys().next_back().copied()
    }

    /// First and last valid years, if the series is non-empty.
    pub fn valid_range(&self) -> Option<(i32, i32)> {
        Some((self.first_year()?, self.last_year()?))
    }

    /// Iterate observations in ascending year order.
    pub fn iter(&self) -> impl Iterator<Item = (i32, f64)> + '_ {
        self.values.iter().map(|(&y, &v)| (y, v))
    }
}

/// Two series restricted to a shared effective year range and positionally
/// synchronized: entry `i` of each sequence belongs to effective year
/// `years()[i]`, pairing `X` at `year - lag` with `Y` at `year`.
///
/// Created fresh per alignment call and never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct AlignedPair {
    lag: i64,
    years: Vec<i32>,
    x: Vec<f64>,
    y: Vec<f64>,
}

impl AlignedPair {
    pub(crate) fn new(lag: i64, years: Vec<i32>, x: Vec<f64>, y: Vec<f64>) -> Self {
        debug_assert_eq!(years.len(), x.len());
        debug_assert_eq!(years.len(), y.len());
        Self { lag, years, x, y }
    }

    /// The lag applied to the predictor (0 for plain alignment).
    pub fn lag(&self) -> i64 {
        self.lag
    }

    /// Effective years, ascending. Position `i` pairs `X` at `years[i] - lag`
    /// with `Y` at `years[i]`.
    pub fn years(&self) -> &[i32] {
        &self.years
    }

    /// Lag-shifted predictor values, dense from position 0.
    pub fn x(&self) -> &[f64] {
        &self.x
    }

    /// Target values, dense from position 0.
    pub fn y(&self) -> &[f64] {
        &self.y
    }

    pub fn len(&self) -> usize {
        self.years.len()
    }

    pub fn is_empty(&self) -> bool {
        self.years.is_empty()
    }
}

/// Outcome of the lag-correlation search.
///
/// `correlation` is the raw cross-correlation peak divided by the length of
/// the shorter input sequence. It approximates a Pearson coefficient; the
/// exact Pearson figure computed by the regression stage is authoritative
/// when the two disagree.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LagScanResult {
    pub lag: i64,
    pub correlation: f64,
}

/// Fit diagnostics for the regression stage.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FitQuality {
    pub rmse: f64,
    pub mae: f64,
    pub aic: f64,
    pub n: usize,
}

/// Final analysis output: the chosen lag, the one-step-ahead forecast, the
/// exact Pearson correlation of the lag-aligned series, and the model's R².
///
/// Immutable once returned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegressionResult {
    pub lag: i64,
    pub prediction: f64,
    pub intercept: f64,
    pub slope: f64,
    pub correlation: f64,
    pub r_squared: f64,
    pub quality: FitQuality,
}

/// A saved analysis result (JSON).
///
/// The "portable" representation of one analyzed pair: the scan outcome, the
/// fitted model, and the window it was searched under.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultFile {
    pub tool: String,
    pub pair: String,
    pub max_lag_years: i64,
    pub scan: LagScanResult,
    pub result: RegressionResult,
}

/// Configuration for a single synthetic-pair demo run.
///
/// This is derived from CLI flags (plus defaults).
#[derive(Debug, Clone)]
pub struct DemoConfig {
    pub start_year: i32,
    pub years: usize,
    pub true_lag: i64,
    pub intercept: f64,
    pub slope: f64,
    pub noise: f64,
    pub seed: u64,
    pub max_lag_years: i64,

    pub table: bool,

    pub export_json: Option<PathBuf>,
    pub export_csv: Option<PathBuf>,
}

/// Configuration for a batch run over several synthetic pairs.
#[derive(Debug, Clone)]
pub struct BatchConfig {
    pub pairs: usize,
    pub start_year: i32,
    pub years: usize,
    pub noise: f64,
    pub seed: u64,
    pub max_lag_years: i64,
}
