//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - generates synthetic samples
//! - runs the lag search + regression pipeline
//! - prints reports
//! - writes optional exports

use clap::Parser;

use crate::cli::{BatchArgs, Command, DemoArgs};
use crate::domain::{BatchConfig, DemoConfig};
use crate::error::AppError;

pub mod pipeline;

/// Entry point for the `leadlag` binary.
pub fn run() -> Result<(), AppError> {
    // We want bare `leadlag` and `leadlag --seed 7` to behave like
    // `leadlag demo ...`.
    //
    // Clap requires a subcommand name, so we do a small, explicit rewrite of
    // the argv list before parsing. This preserves a clean clap structure
    // while retaining the convenient default.
    let argv = rewrite_args(std::env::args().collect());
    let cli = crate::cli::Cli::parse_from(argv);

    match cli.command {
        Command::Demo(args) => handle_demo(args),
        Command::Batch(args) => handle_batch(args),
    }
}

fn handle_demo(args: DemoArgs) -> Result<(), AppError> {
    let config = demo_config_from_args(&args);
    let run = pipeline::run_demo(&config)?;

    println!(
        "{}",
        crate::report::format_analysis_summary(
            &run.pair.name,
            &run.scan,
            &run.result,
            config.max_lag_years,
        )
    );
    println!(
        "Planted lag: {} | recovered lag: {}",
        run.pair.true_lag, run.result.lag
    );

    if config.table {
        println!("{}", crate::report::format_fit_table(&run.fit_table));
    }

    if let Some(path) = &config.export_json {
        crate::io::write_result_json(
            path,
            &run.pair.name,
            config.max_lag_years,
            &run.scan,
            &run.result,
        )?;
    }
    if let Some(path) = &config.export_csv {
        crate::io::write_fit_csv(path, &run.fit_table)?;
    }

    Ok(())
}

fn handle_batch(args: BatchArgs) -> Result<(), AppError> {
    let config = batch_config_from_args(&args);
    let outcomes = pipeline::run_synthetic_batch(&config)?;

    println!("{}", crate::report::format_batch_table(&outcomes));
    Ok(())
}

pub fn demo_config_from_args(args: &DemoArgs) -> DemoConfig {
    DemoConfig {
        start_year: args.start_year,
        years: args.years,
        true_lag: args.true_lag,
        intercept: args.intercept,
        slope: args.slope,
        noise: args.noise,
        seed: args.seed,
        max_lag_years: args.max_lag_years,
        table: args.table,
        export_json: args.export.clone(),
        export_csv: args.export_csv.clone(),
    }
}

pub fn batch_config_from_args(args: &BatchArgs) -> BatchConfig {
    BatchConfig {
        pairs: args.pairs,
        start_year: args.start_year,
        years: args.years,
        noise: args.noise,
        seed: args.seed,
        max_lag_years: args.max_lag_years,
    }
}

/// Rewrite argv so `leadlag` defaults to `leadlag demo`.
///
/// Rules:
/// - `leadlag`                     -> `leadlag demo`
/// - `leadlag --seed 7 ...`        -> `leadlag demo --seed 7 ...`
/// - `leadlag --help/--version/-h` -> unchanged (show top-level help/version)
fn rewrite_args(mut argv: Vec<String>) -> Vec<String> {
    let Some(arg1) = argv.get(1).cloned() else {
        argv.push("demo".to_string());
        return argv;
    };

    let is_top_level_help_or_version =
        matches!(arg1.as_str(), "-h" | "--help" | "-V" | "--version" | "help");
    if is_top_level_help_or_version {
        return argv;
    }

    let is_subcommand = matches!(arg1.as_str(), "demo" | "batch");
    if is_subcommand {
        return argv;
    }

    // If the first token is a flag, treat it as "demo flags".
    if arg1.starts_with('-') {
        argv.insert(1, "demo".to_string());
        return argv;
    }

    // Otherwise, leave as-is.
    argv
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn bare_invocation_defaults_to_demo() {
        assert_eq!(rewrite_args(args(&["leadlag"])), args(&["leadlag", "demo"]));
    }

    #[test]
    fn leading_flag_defaults_to_demo() {
        assert_eq!(
            rewrite_args(args(&["leadlag", "--seed", "7"])),
            args(&["leadlag", "demo", "--seed", "7"])
        );
    }

    #[test]
    fn explicit_subcommands_and_help_pass_through() {
        assert_eq!(
            rewrite_args(args(&["leadlag", "batch"])),
            args(&["leadlag", "batch"])
        );
        assert_eq!(
            rewrite_args(args(&["leadlag", "--help"])),
            args(&["leadlag", "--help"])
        );
    }
}
