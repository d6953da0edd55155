//! Turnover rate per department

use crate::structs::{Department, DepartmentTurnover, EmployeeRecord, HrError, Result};
use std::collections::BTreeMap;

/// Group records by department and compute the fraction that left
///
/// Groups come back ordered by department label. Every department present in
/// `records` yields exactly one group.
///
/// # Errors
/// Returns error if `records` is empty
#[allow(clippy::cast_precision_loss)]
pub fn turnover_by_department(records: &[EmployeeRecord]) -> Result<Vec<DepartmentTurnover>> {
    if records.is_empty() {
        return Err(HrError::Computation(
            "cannot group turnover over zero rows".into(),
        ));
    }

    let mut groups: BTreeMap<&'static str, (Department, usize, usize)> = BTreeMap::new();
    for r in records {
        let entry = groups
            .entry(r.department.label())
            .or_insert((r.department, 0, 0));
        entry.1 += 1;
        entry.2 += usize::from(r.left_company);
    }

    Ok(groups
        .into_values()
        .map(|(department, employees, departures)| DepartmentTurnover {
            department,
            employees,
            departures,
            rate: departures as f64 / employees as f64,
        })
        .collect())
}
