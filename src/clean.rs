//! Cleaning stage: mean imputation, numeric coercion and sentinel relabeling

use crate::analysis::stats::mean;
use crate::structs::{CleanEmployee, Department, HrError, RawEmployee, Result};
use tracing::debug;

/// Clean the raw table into a gap-free one
///
/// Salary is imputed first, then years of experience are coerced and
/// imputed, then `Unknown` departments are relabeled `Other`.
///
/// # Errors
/// Returns error if a column has no present values to impute from
pub fn clean(raw: &[RawEmployee]) -> Result<Vec<CleanEmployee>> {
    let salaries: Vec<Option<f64>> = raw.iter().map(|r| r.salary).collect();
    let missing_salaries = salaries.iter().filter(|s| s.is_none()).count();
    let salaries = impute_mean("Salary", &salaries)?;

    let experience_text: Vec<&str> = raw.iter().map(|r| r.years_of_experience.as_str()).collect();
    let experience = coerce_numeric(&experience_text);
    let unparsed = experience.iter().filter(|v| v.is_none()).count();
    let experience = impute_mean("YearsOfExperience", &experience)?;

    debug!(
        imputed_salaries = missing_salaries,
        imputed_experience = unparsed,
        "cleaned raw table"
    );

    Ok(raw
        .iter()
        .zip(salaries)
        .zip(experience)
        .map(|((r, salary), years_of_experience)| CleanEmployee {
            employee_id: r.employee_id,
            age: r.age,
            department: relabel_department(r.department),
            years_of_experience,
            salary,
            job_satisfaction: r.job_satisfaction,
            performance_rating: r.performance_rating,
            left_company: r.left_company,
            bonus: r.bonus,
        })
        .collect())
}

/// Replace every gap with the mean of the values present before imputation
///
/// # Errors
/// Returns error if no value is present
pub fn impute_mean(column: &str, values: &[Option<f64>]) -> Result<Vec<f64>> {
    let present: Vec<f64> = values.iter().flatten().copied().collect();
    if present.len() == values.len() {
        return Ok(present);
    }

    let fill = mean(&present).ok_or_else(|| {
        HrError::DataCleaning(format!(
            "cannot impute {column}: all {} values are missing",
            values.len()
        ))
    })?;

    Ok(values.iter().map(|v| v.unwrap_or(fill)).collect())
}

/// Parse each token as a float; unparseable or non-finite tokens become `None`
#[must_use]
pub fn coerce_numeric(values: &[&str]) -> Vec<Option<f64>> {
    values
        .iter()
        .map(|s| s.trim().parse::<f64>().ok().filter(|v| v.is_finite()))
        .collect()
}

#[must_use]
pub fn relabel_department(department: Department) -> Department {
    match department {
        Department::Unknown => Department::Other,
        other => other,
    }
}
