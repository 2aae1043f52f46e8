//! Least squares solver.
//!
//! The regression stage solves one small linear problem per analysis:
//!
//! ```text
//! minimize Σ (y_i - β0 - β1 x_i)^2
//! ```
//!
//! Implementation choices:
//! - We build an explicit `[1, x]` design matrix and solve an ordinary
//!   least squares problem.
//! - We use SVD to solve the least-squares problem robustly even though the
//!   design matrix is tall (many annual observations, two columns).
//!   (Nalgebra's `QR::solve` is intended for square systems and will panic
//!   for non-square matrices.)
//! - With only two columns, SVD performance is a non-issue even for long
//!   historical series.

use nalgebra::{DMatrix, DVector};

/// Build the `n x 2` design matrix `[1, x]` for an intercept + slope fit.
pub fn design_with_intercept(x: &[f64]) -> DMatrix<f64> {
    let n = x.len();
    DMatrix::from_fn(n, 2, |i, j| if j == 0 { 1.0 } else { x[i] })
}

/// Solve a least squares problem using SVD.
///
/// Returns `None` if the system is too ill-conditioned to solve robustly.
pub fn solve_least_squares(x: &DMatrix<f64>, y: &DVector<f64>) -> Option<DVector<f64>> {
    let svd = x.clone().svd(true, true);

    // Try progressively looser tolerances if strict solve fails. Near-constant
    // predictor sequences produce nearly collinear columns, so we balance
    // numerical stability with solution acceptance.
    for &tol in &[1e-10, 1e-8, 1e-6] {
        if let Ok(beta) = svd.solve(y, tol) {
            if beta.iter().all(|v| v.is_finite()) {
                return Some(beta);
            }
        }
    }

    None
}
