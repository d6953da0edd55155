#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::uninlined_format_args)]

mod analysis;
mod clean;
mod features;
mod structs;
mod synth;

use analysis::pipeline::PipelineConfig;
use clap::Parser;
use std::path::PathBuf;
use structs::Result;
use synth::SynthConfig;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Generate a synthetic HR dataset, clean it, and chart employee turnover
#[derive(Parser, Debug)]
#[command(name = "hr-turnover")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Directory the two charts are written to
    #[arg(short, long, default_value = ".")]
    output_dir: PathBuf,

    /// Seed for the synthetic data generator
    #[arg(long, default_value_t = synth::DEFAULT_SEED)]
    seed: u64,

    /// Also write the cleaned dataset to this CSV file
    #[arg(long)]
    export_csv: Option<PathBuf>,

    /// Also write a JSON summary of the analysis to this file
    #[arg(long)]
    summary_json: Option<PathBuf>,
}

impl From<Args> for PipelineConfig {
    fn from(args: Args) -> Self {
        Self {
            synth: SynthConfig {
                seed: args.seed,
                ..SynthConfig::default()
            },
            output_dir: args.output_dir,
            export_csv: args.export_csv,
            summary_json: args.summary_json,
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(Args::parse().into()) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(config: PipelineConfig) -> Result<()> {
    let result = analysis::pipeline::run_pipeline(&config)?;

    print!("{}", analysis::output::format_report(&result));

    let charts =
        analysis::charts::write_charts(&config.output_dir, &result.turnover, &result.records)?;
    for chart in &charts {
        println!("Plot saved to {}", chart.display());
    }

    if let Some(path) = &config.export_csv {
        analysis::output::write_dataset_csv(path, &result.records)?;
        info!(path = %path.display(), "dataset exported");
    }
    if let Some(path) = &config.summary_json {
        analysis::output::write_summary_json(path, &result, &charts)?;
        info!(path = %path.display(), "summary written");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_bare_invocation_defaults() {
        let config: PipelineConfig = Args::parse_from(["hr-turnover"]).into();
        let defaults = PipelineConfig::default();

        assert_eq!(config.synth, defaults.synth);
        assert_eq!(config.output_dir, defaults.output_dir);
        assert!(config.export_csv.is_none());
        assert!(config.summary_json.is_none());
    }

    #[test]
    fn test_run_writes_outputs() {
        let dir = TempDir::new().expect("create temp dir");
        let csv_path = dir.path().join("employees.csv");
        let json_path = dir.path().join("summary.json");
        let out = dir.path().to_string_lossy().to_string();
        let csv_arg = csv_path.to_string_lossy().to_string();
        let json_arg = json_path.to_string_lossy().to_string();

        let args = Args::parse_from([
            "hr-turnover",
            "--output-dir",
            out.as_str(),
            "--seed",
            "7",
            "--export-csv",
            csv_arg.as_str(),
            "--summary-json",
            json_arg.as_str(),
        ]);
        assert_eq!(args.seed, 7);

        run(args.into()).expect("run");

        assert!(dir.path().join(analysis::charts::TURNOVER_CHART).exists());
        assert!(dir.path().join(analysis::charts::SATISFACTION_CHART).exists());

        let rows = std::fs::read_to_string(&csv_path).expect("read csv").lines().count();
        assert_eq!(rows, synth::DEFAULT_ROWS + 1);
        assert!(json_path.exists());
    }
}
