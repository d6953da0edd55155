//! Report and export writers for the analysis results

use crate::structs::{AnalysisResult, DepartmentTurnover, EmployeeRecord, Result};
use serde::Serialize;
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

/// Build the console report: turnover per department, then the correlation
#[must_use]
pub fn format_report(result: &AnalysisResult) -> String {
    let mut report = String::from("Employee Turnover by Department:\n");
    for group in &result.turnover {
        let _ = writeln!(report, "{:<15}{:.6}", group.department.label(), group.rate);
    }

    let _ = writeln!(
        report,
        "\nCorrelation between Job Satisfaction and Turnover: {}",
        format_correlation(result.correlation)
    );
    report
}

#[must_use]
pub fn format_correlation(correlation: Option<f64>) -> String {
    correlation.map_or_else(|| "undefined".to_string(), |r| r.to_string())
}

/// Write the final table as CSV with the dataset's column names
///
/// # Errors
/// Returns error if the file cannot be created or written
pub fn write_dataset_csv(path: &Path, records: &[EmployeeRecord]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;
    Ok(())
}

/// Write a machine-readable summary of the run
///
/// # Errors
/// Returns error if the file cannot be written
pub fn write_summary_json(path: &Path, result: &AnalysisResult, charts: &[PathBuf]) -> Result<()> {
    let summary = SummaryOutput {
        row_count: result.records.len(),
        turnover_by_department: &result.turnover,
        satisfaction_turnover_correlation: result.correlation,
        charts,
    };

    let json = serde_json::to_string_pretty(&summary)?;
    fs::write(path, json)?;
    Ok(())
}

// JSON output structures

#[derive(Serialize)]
struct SummaryOutput<'a> {
    row_count: usize,
    turnover_by_department: &'a [DepartmentTurnover],
    satisfaction_turnover_correlation: Option<f64>,
    charts: &'a [PathBuf],
}
