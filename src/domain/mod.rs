//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - the annual input series (`AnnualSeries`)
//! - alignment output (`AlignedPair`)
//! - analysis outputs (`LagScanResult`, `RegressionResult`, `FitQuality`)
//! - run configuration for the CLI front-end (`DemoConfig`, `BatchConfig`)

pub mod types;

pub use types::*;
