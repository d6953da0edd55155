//! Job satisfaction vs. turnover correlation

use crate::analysis::stats::pearson;
use crate::structs::{EmployeeRecord, Result};

/// Pearson correlation of `JobSatisfaction` against `LeftCompany` over all rows
///
/// # Errors
/// Returns error if fewer than 2 records are given
pub fn satisfaction_turnover_correlation(records: &[EmployeeRecord]) -> Result<Option<f64>> {
    let satisfaction: Vec<f64> = records
        .iter()
        .map(|r| f64::from(r.job_satisfaction))
        .collect();
    let left: Vec<f64> = records.iter().map(|r| f64::from(r.left_company)).collect();

    pearson(&satisfaction, &left)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clean::clean;
    use crate::features::derive;
    use crate::structs::Department;
    use crate::synth::{generate, SynthConfig};

    fn record(job_satisfaction: u8, left_company: u8) -> EmployeeRecord {
        EmployeeRecord {
            employee_id: 1,
            age: 40,
            department: Department::Finance,
            years_of_experience: 5.0,
            salary: 60_000.0,
            job_satisfaction,
            performance_rating: 3,
            left_company,
            bonus: 0,
            total_compensation: 60_000.0,
        }
    }

    #[test]
    fn test_unhappy_employees_leave() {
        let records = vec![record(1, 1), record(2, 1), record(4, 0), record(5, 0)];
        let corr = satisfaction_turnover_correlation(&records)
            .expect("correlate")
            .expect("defined");
        assert!(corr < -0.8);
    }

    #[test]
    fn test_nobody_left_is_undefined() {
        let records = vec![record(1, 0), record(3, 0), record(5, 0)];
        assert_eq!(
            satisfaction_turnover_correlation(&records).expect("correlate"),
            None
        );
    }

    #[test]
    fn test_generated_table_in_range() {
        let raw = generate(&SynthConfig::default()).expect("generate");
        let records = derive(&clean(&raw).expect("clean"));
        let corr = satisfaction_turnover_correlation(&records)
            .expect("correlate")
            .expect("defined");
        assert!((-1.0..=1.0).contains(&corr));
    }
}
