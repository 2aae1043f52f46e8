//! Mathematical utilities: summary statistics and the least-squares solver.

pub mod ols;
pub mod stats;

pub use ols::*;
pub use stats::*;
