use crate::structs::{CleanEmployee, EmployeeRecord};

/// Uplift applied to salary when an employee has a bonus
pub const BONUS_UPLIFT: f64 = 0.1;

/// Salary plus a 10% uplift when `bonus` is 1
#[must_use]
pub fn total_compensation(salary: f64, bonus: u8) -> f64 {
    salary + f64::from(bonus) * salary * BONUS_UPLIFT
}

/// Attach `TotalCompensation` to every cleaned row
#[must_use]
pub fn derive(cleaned: &[CleanEmployee]) -> Vec<EmployeeRecord> {
    cleaned
        .iter()
        .map(|r| EmployeeRecord {
            employee_id: r.employee_id,
            age: r.age,
            department: r.department,
            years_of_experience: r.years_of_experience,
            salary: r.salary,
            job_satisfaction: r.job_satisfaction,
            performance_rating: r.performance_rating,
            left_company: r.left_company,
            bonus: r.bonus,
            total_compensation: total_compensation(r.salary, r.bonus),
        })
        .collect()
}
