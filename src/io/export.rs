//! Export analysis outputs.
//!
//! The JSON export is the machine-readable record of one analyzed pair; the
//! CSV export is the aligned per-year fit, easy to consume in spreadsheets or
//! downstream scripts.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::domain::{LagScanResult, RegressionResult, ResultFile};
use crate::error::AppError;
use crate::report::YearFit;

/// Write a result JSON file.
pub fn write_result_json(
    path: &Path,
    pair_name: &str,
    max_lag_years: i64,
    scan: &LagScanResult,
    result: &RegressionResult,
) -> Result<(), AppError> {
    let file = File::create(path).map_err(|e| {
        AppError::new(2, format!("Failed to create result JSON '{}': {e}", path.display()))
    })?;

    let record = ResultFile {
        tool: "leadlag".to_string(),
        pair: pair_name.to_string(),
        max_lag_years,
        scan: *scan,
        result: result.clone(),
    };

    serde_json::to_writer_pretty(file, &record)
        .map_err(|e| AppError::new(2, format!("Failed to write result JSON: {e}")))?;

    Ok(())
}

/// Write the aligned per-year fit to a CSV file.
pub fn write_fit_csv(path: &Path, rows: &[YearFit]) -> Result<(), AppError> {
    let mut file = File::create(path).map_err(|e| {
        AppError::new(2, format!("Failed to create fit CSV '{}': {e}", path.display()))
    })?;

    writeln!(file, "year,x_lagged,y_obs,y_fit,residual")
        .map_err(|e| AppError::new(2, format!("Failed to write fit CSV header: {e}")))?;

    for row in rows {
        writeln!(
            file,
            "{},{:.10},{:.10},{:.10},{:.10}",
            row.year, row.x_lagged, row.y_obs, row.y_fit, row.residual
        )
        .map_err(|e| AppError::new(2, format!("Failed to write fit CSV row: {e}")))?;
    }

    Ok(())
}
