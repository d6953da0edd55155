//! Analysis pipeline that orchestrates generate, clean, derive and aggregate

use crate::structs::{AnalysisResult, Result};
use crate::synth::SynthConfig;
use std::path::PathBuf;
use tracing::info;

/// Configuration for a pipeline run
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub synth: SynthConfig,
    /// Directory the two charts are written to
    pub output_dir: PathBuf,
    /// Optional CSV export of the final table
    pub export_csv: Option<PathBuf>,
    /// Optional JSON export of the analysis summary
    pub summary_json: Option<PathBuf>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            synth: SynthConfig::default(),
            output_dir: PathBuf::from("."),
            export_csv: None,
            summary_json: None,
        }
    }
}

/// Run every in-memory stage of the pipeline
///
/// # Errors
/// Returns error if generation, cleaning or aggregation fails
pub fn run_pipeline(config: &PipelineConfig) -> Result<AnalysisResult> {
    info!(rows = config.synth.rows, seed = config.synth.seed, "generating synthetic employees");
    let raw = crate::synth::generate(&config.synth)?;

    info!("cleaning dataset");
    let cleaned = crate::clean::clean(&raw)?;

    info!("deriving TotalCompensation");
    let records = crate::features::derive(&cleaned);

    info!("aggregating turnover and correlation");
    let turnover = super::turnover::turnover_by_department(&records)?;
    let correlation = super::correlation::satisfaction_turnover_correlation(&records)?;

    Ok(AnalysisResult {
        records,
        turnover,
        correlation,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structs::{Department, HrError};

    #[test]
    fn test_full_pipeline() {
        let result = run_pipeline(&PipelineConfig::default()).expect("pipeline");

        assert_eq!(result.records.len(), crate::synth::DEFAULT_ROWS);
        assert!(!result.turnover.is_empty());
        assert!(result
            .records
            .iter()
            .all(|r| r.department != Department::Unknown));
        if let Some(corr) = result.correlation {
            assert!((-1.0..=1.0).contains(&corr));
        }
    }

    #[test]
    fn test_pipeline_is_deterministic() {
        let a = run_pipeline(&PipelineConfig::default()).expect("pipeline");
        let b = run_pipeline(&PipelineConfig::default()).expect("pipeline");

        assert_eq!(a.records, b.records);
        assert_eq!(a.turnover, b.turnover);
        assert_eq!(a.correlation, b.correlation);
    }

    #[test]
    fn test_pipeline_propagates_generation_error() {
        let mut config = PipelineConfig::default();
        config.synth.rows = 0;
        assert!(matches!(
            run_pipeline(&config),
            Err(HrError::DataGeneration(_))
        ));
    }
}
