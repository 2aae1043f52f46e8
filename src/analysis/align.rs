//! Series alignment.
//!
//! Both entry points restrict two annual series to a shared effective year
//! range and return dense, positionally synchronized sequences. Alignment is
//! a pure function of its inputs; the returned [`AlignedPair`] is consumed
//! immediately by the correlation or regression stage.

use crate::domain::{AlignedPair, AnnualSeries};
use crate::error::AnalysisError;

/// Align two series on their common valid year range.
///
/// The window is `[max(first_X, first_Y), min(last_X, last_Y)]`; within it,
/// years missing from either series are dropped pairwise. Fails with
/// `EmptyIntersection` when the window is empty or no year inside it is
/// observed in both series.
pub fn align_on_valid_range(
    x: &AnnualSeries,
    y: &AnnualSeries,
) -> Result<AlignedPair, AnalysisError> {
    align_with_lag_inner(x, y, 0)
}

/// Align `Y` against `X` shifted backward by `lag` years.
///
/// Position `i` of the output pairs `X` at year `years[i] - lag` with `Y` at
/// `years[i]`. `lag = 0` is a synchronous comparison. A negative lag, or a
/// lag that pushes the shifted ranges past each other, fails with
/// `InvalidLagWindow`; series that do not overlap even unshifted fail with
/// `EmptyIntersection`.
pub fn align_with_lag(
    x: &AnnualSeries,
    y: &AnnualSeries,
    lag: i64,
) -> Result<AlignedPair, AnalysisError> {
    if lag < 0 {
        return Err(AnalysisError::InvalidLagWindow(format!(
            "lag must be non-negative, got {lag}"
        )));
    }
    align_with_lag_inner(x, y, lag)
}

fn align_with_lag_inner(
    x: &AnnualSeries,
    y: &AnnualSeries,
    lag: i64,
) -> Result<AlignedPair, AnalysisError> {
    let (x0, x1) = x.valid_range().ok_or(AnalysisError::EmptyIntersection)?;
    let (y0, y1) = y.valid_range().ok_or(AnalysisError::EmptyIntersection)?;

    let start = (y0 as i64).max(x0 as i64 + lag);
    let end = (y1 as i64).min(x1 as i64 + lag);

    if start > end {
        // Distinguish a data problem (ranges disjoint even unshifted) from a
        // lag request that exceeds the usable window.
        if x0.max(y0) > x1.min(y1) {
            return Err(AnalysisError::EmptyIntersection);
        }
        return Err(AnalysisError::InvalidLagWindow(format!(
            "lag {lag} leaves no shared years between X [{x0}, {x1}] and Y [{y0}, {y1}]"
        )));
    }

    let mut years = Vec::new();
    let mut xs = Vec::new();
    let mut ys = Vec::new();
    for year in start..=end {
        let x_year = (year - lag) as i32;
        if let (Some(xv), Some(yv)) = (x.get(x_year), y.get(year as i32)) {
            years.push(year as i32);
            xs.push(xv);
            ys.push(yv);
        }
    }

    if years.is_empty() {
        return Err(AnalysisError::EmptyIntersection);
    }

    Ok(AlignedPair::new(lag, years, xs, ys))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ramp(start: i32, values: &[f64]) -> AnnualSeries {
        AnnualSeries::from_pairs(
            values
                .iter()
                .enumerate()
                .map(|(i, &v)| (start + i as i32, v)),
        )
    }

    #[test]
    fn valid_range_alignment_matches_intersection_bounds() {
        let x = ramp(1990, &[1.0, 2.0, 3.0, 4.0, 5.0]);
        let y = ramp(1992, &[10.0, 11.0, 12.0, 13.0, 14.0]);

        let pair = align_on_valid_range(&x, &y).unwrap();
        assert_eq!(pair.len(), 3);
        assert_eq!(pair.x().len(), pair.y().len());
        assert_eq!(pair.years().first(), Some(&1992));
        assert_eq!(pair.years().last(), Some(&1994));
        assert_eq!(pair.x(), &[3.0, 4.0, 5.0]);
        assert_eq!(pair.y(), &[10.0, 11.0, 12.0]);
    }

    #[test]
    fn zero_lag_matches_valid_range_alignment() {
        let x = ramp(1985, &[2.0, 4.0, 8.0, 16.0, 32.0, 64.0]);
        let y = ramp(1987, &[1.0, 3.0, 5.0, 7.0]);

        let plain = align_on_valid_range(&x, &y).unwrap();
        let lagged = align_with_lag(&x, &y, 0).unwrap();
        assert_eq!(plain, lagged);
    }

    #[test]
    fn lagged_alignment_pairs_shifted_years() {
        let x = ramp(1990, &[1.0, 2.0, 3.0, 4.0, 5.0]);
        let y = ramp(1991, &[1.0, 2.0, 3.0, 4.0, 5.0]);

        let pair = align_with_lag(&x, &y, 1).unwrap();
        assert_eq!(pair.lag(), 1);
        assert_eq!(pair.years(), &[1991, 1992, 1993, 1994, 1995]);
        assert_eq!(pair.x(), &[1.0, 2.0, 3.0, 4.0, 5.0]);
        assert_eq!(pair.y(), &[1.0, 2.0, 3.0, 4.0, 5.0]);
    }

    #[test]
    fn interior_gaps_are_dropped_pairwise() {
        let mut x = ramp(2000, &[1.0, 2.0, 3.0, 4.0]);
        x.insert(2002, f64::NAN);
        let y = ramp(2000, &[5.0, 6.0, 7.0, 8.0]);

        let pair = align_on_valid_range(&x, &y).unwrap();
        assert_eq!(pair.years(), &[2000, 2001, 2003]);
        assert_eq!(pair.x(), &[1.0, 2.0, 4.0]);
        assert_eq!(pair.y(), &[5.0, 6.0, 8.0]);
    }

    #[test]
    fn disjoint_ranges_fail_with_empty_intersection() {
        let x = ramp(1980, &[1.0, 2.0]);
        let y = ramp(1990, &[1.0, 2.0]);

        assert_eq!(
            align_on_valid_range(&x, &y).unwrap_err(),
            AnalysisError::EmptyIntersection
        );
        assert_eq!(
            align_with_lag(&x, &y, 0).unwrap_err(),
            AnalysisError::EmptyIntersection
        );
    }

    #[test]
    fn negative_lag_is_a_bounds_error() {
        let x = ramp(1990, &[1.0, 2.0, 3.0]);
        let y = ramp(1990, &[1.0, 2.0, 3.0]);

        let err = align_with_lag(&x, &y, -1).unwrap_err();
        assert!(matches!(err, AnalysisError::InvalidLagWindow(_)));
    }

    #[test]
    fn excessive_lag_is_a_bounds_error_not_an_empty_pair() {
        let x = ramp(1990, &[1.0, 2.0, 3.0]);
        let y = ramp(1990, &[1.0, 2.0, 3.0]);

        let err = align_with_lag(&x, &y, 10).unwrap_err();
        assert!(matches!(err, AnalysisError::InvalidLagWindow(_)));
    }

    #[test]
    fn empty_series_fails_with_empty_intersection() {
        let x = AnnualSeries::new();
        let y = ramp(1990, &[1.0]);
        assert_eq!(
            align_on_valid_range(&x, &y).unwrap_err(),
            AnalysisError::EmptyIntersection
        );
    }
}
