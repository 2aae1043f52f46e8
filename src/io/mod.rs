//! Output helpers.
//!
//! - result JSON write (`export`)
//! - aligned fit CSV write (`export`)
//!
//! There is deliberately no reader side for series data: ingestion happens
//! upstream of this tool.

pub mod export;

pub use export::*;
