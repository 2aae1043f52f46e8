//! Lag-correlation analysis pipeline.
//!
//! Responsibilities:
//!
//! - align two annual series to a shared effective year range (`align`)
//! - search a bounded lag window for the correlation peak (`lag_scan`)
//! - fit the lagged OLS model and derive the forecast (`regression`)
//! - orchestrate the above into a single callable (`facade`)
//! - run many indicator pairs at once (`batch`)

pub mod align;
pub mod batch;
pub mod facade;
pub mod lag_scan;
pub mod regression;

pub use align::*;
pub use batch::*;
pub use facade::*;
pub use lag_scan::*;
pub use regression::*;
