//! Synthetic HR dataset generation with deliberately injected defects

use crate::structs::{Department, HrError, RawEmployee, Result};
use rand::rngs::StdRng;
use rand::seq::{index, SliceRandom};
use rand::{Rng, SeedableRng};
use tracing::debug;

pub const DEFAULT_ROWS: usize = 500;
pub const DEFAULT_SEED: u64 = 42;
pub const DEFAULT_MISSING_SALARIES: usize = 50;
pub const DEFAULT_UNKNOWN_DEPARTMENTS: usize = 20;

const LEFT_PROBABILITY: f64 = 0.2;
const BONUS_PROBABILITY: f64 = 0.3;

/// Parameters for the synthesizer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynthConfig {
    pub rows: usize,
    pub seed: u64,
    pub missing_salaries: usize,
    pub unknown_departments: usize,
}

impl Default for SynthConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            seed: DEFAULT_SEED,
            missing_salaries: DEFAULT_MISSING_SALARIES,
            unknown_departments: DEFAULT_UNKNOWN_DEPARTMENTS,
        }
    }
}

/// Generate the raw employee table
///
/// Every column is drawn fully populated, then three corruptions are applied
/// from the same RNG: nulled salaries, `Unknown` departments, and text-mangled
/// years of experience.
///
/// # Errors
/// Returns error if `rows` is zero or a corruption sample exceeds the row count
pub fn generate(config: &SynthConfig) -> Result<Vec<RawEmployee>> {
    if config.rows == 0 {
        return Err(HrError::DataGeneration("row count must be positive".into()));
    }
    for (what, size) in [
        ("missing salaries", config.missing_salaries),
        ("unknown departments", config.unknown_departments),
    ] {
        if size > config.rows {
            return Err(HrError::DataGeneration(format!(
                "cannot inject {size} {what} into {} rows",
                config.rows
            )));
        }
    }
    let employee_count = u32::try_from(config.rows).map_err(|_| {
        HrError::DataGeneration(format!("row count {} exceeds u32", config.rows))
    })?;

    let mut rng = StdRng::seed_from_u64(config.seed);

    let mut rows: Vec<RawEmployee> = (1..=employee_count)
        .map(|employee_id| {
            let department = Department::REAL
                .choose(&mut rng)
                .copied()
                .unwrap_or(Department::Sales);
            let years: u32 = rng.gen_range(0..30);
            RawEmployee {
                employee_id,
                age: rng.gen_range(20..60),
                department,
                years_of_experience: corrupt_experience_text(years),
                salary: Some(f64::from(rng.gen_range(40_000_u32..150_000))),
                job_satisfaction: rng.gen_range(1..=5),
                performance_rating: rng.gen_range(1..=5),
                left_company: u8::from(rng.gen_bool(LEFT_PROBABILITY)),
                bonus: u8::from(rng.gen_bool(BONUS_PROBABILITY)),
            }
        })
        .collect();

    for idx in index::sample(&mut rng, config.rows, config.missing_salaries) {
        rows[idx].salary = None;
    }
    for idx in index::sample(&mut rng, config.rows, config.unknown_departments) {
        rows[idx].department = Department::Unknown;
    }

    debug!(
        rows = config.rows,
        seed = config.seed,
        missing_salaries = config.missing_salaries,
        unknown_departments = config.unknown_departments,
        "synthesized raw table"
    );

    Ok(rows)
}

/// Render years of experience as text, replacing every "10" with "10.0"
///
/// This is a plain substring replace, so a value such as 100 becomes "10.00".
#[must_use]
pub fn corrupt_experience_text(years: u32) -> String {
    years.to_string().replace("10", "10.0")
}
