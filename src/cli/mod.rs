//! Command-line parsing for the lead-lag analyzer.
//!
//! The goal of this module is to keep **argument parsing** and **command dispatch**
//! separate from the analysis/math code.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::domain::DEFAULT_MAX_LAG_YEARS;

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(
    name = "leadlag",
    version,
    about = "Lead-lag cross-correlation search + regression forecaster"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate a synthetic indicator/target pair with a known lead, analyze
    /// it, and print the report (optionally exporting JSON/CSV).
    Demo(DemoArgs),
    /// Generate several synthetic pairs and analyze them in parallel,
    /// printing a one-line summary per pair.
    Batch(BatchArgs),
}

/// Options for the single-pair demo.
#[derive(Debug, Parser, Clone)]
pub struct DemoArgs {
    /// First year of the generated indicator series.
    #[arg(long, default_value_t = 1980)]
    pub start_year: i32,

    /// Number of indicator observations to generate.
    #[arg(short = 'n', long, default_value_t = 40)]
    pub years: usize,

    /// Planted lead of the indicator over the target, in years.
    #[arg(long, default_value_t = 3)]
    pub true_lag: i64,

    /// Intercept of the planted linear relation.
    #[arg(long, default_value_t = 12.0)]
    pub intercept: f64,

    /// Slope of the planted linear relation.
    #[arg(long, default_value_t = 0.8)]
    pub slope: f64,

    /// Std dev of the additive target noise.
    #[arg(long, default_value_t = 0.5)]
    pub noise: f64,

    /// Random seed for sample generation.
    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    /// Upper bound of the lag search window (years).
    #[arg(long = "max-lag", default_value_t = DEFAULT_MAX_LAG_YEARS)]
    pub max_lag_years: i64,

    /// Print the per-year aligned fit table.
    #[arg(long)]
    pub table: bool,

    /// Export the analysis result to JSON.
    #[arg(long)]
    pub export: Option<PathBuf>,

    /// Export the aligned per-year fit to CSV.
    #[arg(long = "export-csv")]
    pub export_csv: Option<PathBuf>,
}

/// Options for the batch run.
#[derive(Debug, Parser, Clone)]
pub struct BatchArgs {
    /// Number of synthetic pairs to generate and analyze.
    #[arg(short = 'p', long, default_value_t = 8)]
    pub pairs: usize,

    /// First year of each generated indicator series.
    #[arg(long, default_value_t = 1980)]
    pub start_year: i32,

    /// Number of indicator observations per pair.
    #[arg(short = 'n', long, default_value_t = 40)]
    pub years: usize,

    /// Std dev of the additive target noise.
    #[arg(long, default_value_t = 0.5)]
    pub noise: f64,

    /// Base random seed (pair i uses seed + i).
    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    /// Upper bound of the lag search window (years).
    #[arg(long = "max-lag", default_value_t = DEFAULT_MAX_LAG_YEARS)]
    pub max_lag_years: i64,
}
