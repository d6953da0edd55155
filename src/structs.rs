//! Consolidated public types for the hr-turnover crate
//!
//! This module contains the error type, the per-stage employee tables and the
//! analysis results shared across the pipeline.

use serde::Serialize;
use std::fmt;
use thiserror::Error;

// ============================================================================
// Error Types
// ============================================================================

#[derive(Error, Debug)]
pub enum HrError {
    #[error("Data generation error: {0}")]
    DataGeneration(String),

    #[error("Data cleaning error: {0}")]
    DataCleaning(String),

    #[error("Computation error: {0}")]
    Computation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Chart error: {0}")]
    Chart(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, HrError>;

// ============================================================================
// Department
// ============================================================================

/// Department an employee belongs to
///
/// `Unknown` only appears in raw synthesized data and `Other` only after
/// cleaning has relabeled it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Department {
    Sales,
    Marketing,
    Engineering,
    #[serde(rename = "HR")]
    Hr,
    Finance,
    Unknown,
    Other,
}

impl Department {
    /// Departments the synthesizer draws from
    pub const REAL: [Self; 5] = [
        Self::Sales,
        Self::Marketing,
        Self::Engineering,
        Self::Hr,
        Self::Finance,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Sales => "Sales",
            Self::Marketing => "Marketing",
            Self::Engineering => "Engineering",
            Self::Hr => "HR",
            Self::Finance => "Finance",
            Self::Unknown => "Unknown",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ============================================================================
// Employee Tables
// ============================================================================

/// A synthesized employee row, defects included
#[derive(Debug, Clone, PartialEq)]
pub struct RawEmployee {
    pub employee_id: u32,
    pub age: u32,
    pub department: Department,
    /// Stored as text, with the "10" -> "10.0" corruption applied
    pub years_of_experience: String,
    pub salary: Option<f64>,
    pub job_satisfaction: u8,
    pub performance_rating: u8,
    pub left_company: u8,
    pub bonus: u8,
}

/// An employee row after cleaning: no gaps, no sentinel department
#[derive(Debug, Clone, PartialEq)]
pub struct CleanEmployee {
    pub employee_id: u32,
    pub age: u32,
    pub department: Department,
    pub years_of_experience: f64,
    pub salary: f64,
    pub job_satisfaction: u8,
    pub performance_rating: u8,
    pub left_company: u8,
    pub bonus: u8,
}

/// Final employee row carrying the derived compensation column
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct EmployeeRecord {
    #[serde(rename = "EmployeeID")]
    pub employee_id: u32,
    pub age: u32,
    pub department: Department,
    pub years_of_experience: f64,
    pub salary: f64,
    pub job_satisfaction: u8,
    pub performance_rating: u8,
    pub left_company: u8,
    pub bonus: u8,
    pub total_compensation: f64,
}

// ============================================================================
// Analysis Types
// ============================================================================

/// Turnover for one department group
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DepartmentTurnover {
    pub department: Department,
    pub employees: usize,
    pub departures: usize,
    /// Fraction of `employees` with `LeftCompany = 1`
    pub rate: f64,
}

/// Everything the reporting stage needs
#[derive(Debug, Clone)]
pub struct AnalysisResult {
    pub records: Vec<EmployeeRecord>,
    pub turnover: Vec<DepartmentTurnover>,
    /// `None` when either input column is constant
    pub correlation: Option<f64>,
}
