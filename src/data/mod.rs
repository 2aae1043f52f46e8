//! Data sources for the front-end.
//!
//! Only synthetic generation lives here: ingestion of real indicator files is
//! upstream of this tool and out of scope.

pub mod sample;

pub use sample::*;
