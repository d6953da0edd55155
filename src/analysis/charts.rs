//! PNG chart rendering for the turnover analysis

use crate::structs::{DepartmentTurnover, EmployeeRecord, HrError, Result};
use plotters::coord::ranged1d::{IntoSegmentedCoord, SegmentValue};
use plotters::prelude::*;
use plotters::style::FontTransform;
use std::collections::BTreeMap;
use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

pub const TURNOVER_CHART: &str = "turnover_by_department.png";
pub const SATISFACTION_CHART: &str = "job_satisfaction_vs_turnover.png";

const TURNOVER_TITLE: &str = "Employee Turnover Rate by Department";
const SATISFACTION_TITLE: &str = "Job Satisfaction vs. Turnover";

type DrawResult = std::result::Result<(), Box<dyn Error>>;

/// Render both charts into `output_dir`, returning the paths written
///
/// # Errors
/// Returns error if the directory cannot be created or a chart fails to render
pub fn write_charts(
    output_dir: &Path,
    turnover: &[DepartmentTurnover],
    records: &[EmployeeRecord],
) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(output_dir)?;

    let turnover_path = output_dir.join(TURNOVER_CHART);
    render_atomically(&turnover_path, |partial| draw_turnover(partial, turnover))?;

    let satisfaction_path = output_dir.join(SATISFACTION_CHART);
    render_atomically(&satisfaction_path, |partial| {
        draw_satisfaction(partial, records)
    })?;

    Ok(vec![turnover_path, satisfaction_path])
}

/// Draw into a hidden sibling file and rename it over `path` once complete
fn render_atomically<F>(path: &Path, draw: F) -> Result<()>
where
    F: FnOnce(&Path) -> DrawResult,
{
    let partial = partial_path(path);
    if let Err(e) = draw(&partial) {
        let _ = fs::remove_file(&partial);
        return Err(HrError::Chart(format!("{}: {e}", path.display())));
    }
    fs::rename(&partial, path)?;
    info!(path = %path.display(), "chart written");
    Ok(())
}

/// `dir/name.png` -> `dir/.name.partial.png`, keeping the extension the backend keys on
fn partial_path(path: &Path) -> PathBuf {
    let stem = path
        .file_stem()
        .map_or_else(|| "chart".into(), |s| s.to_string_lossy());
    path.with_file_name(format!(".{stem}.partial.png"))
}

fn draw_turnover(path: &Path, turnover: &[DepartmentTurnover]) -> DrawResult {
    let root = BitMapBackend::new(path, (1000, 600)).into_drawing_area();
    root.fill(&WHITE)?;

    let labels: Vec<&str> = turnover.iter().map(|g| g.department.label()).collect();
    let y_max = turnover.iter().map(|g| g.rate).fold(0.05, f64::max) * 1.15;

    let mut chart = ChartBuilder::on(&root)
        .caption(TURNOVER_TITLE, ("sans-serif", 28))
        .margin(20)
        .x_label_area_size(120)
        .y_label_area_size(70)
        .build_cartesian_2d((0..labels.len()).into_segmented(), 0.0..y_max)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(labels.len())
        .x_label_formatter(&|v| match v {
            SegmentValue::Exact(i) | SegmentValue::CenterOf(i) => {
                labels.get(*i).map_or_else(String::new, |l| (*l).to_string())
            }
            SegmentValue::Last => String::new(),
        })
        .x_label_style(
            ("sans-serif", 16)
                .into_font()
                .transform(FontTransform::Rotate90),
        )
        .y_label_formatter(&|y| format!("{y:.2}"))
        .x_desc("Department")
        .y_desc("Turnover Rate")
        .draw()?;

    chart.draw_series(turnover.iter().enumerate().map(|(i, group)| {
        let mut bar = Rectangle::new(
            [
                (SegmentValue::Exact(i), 0.0),
                (SegmentValue::Exact(i + 1), group.rate),
            ],
            BLUE.mix(0.6).filled(),
        );
        bar.set_margin(0, 0, 10, 10);
        bar
    }))?;

    root.present()?;
    Ok(())
}

fn draw_satisfaction(path: &Path, records: &[EmployeeRecord]) -> DrawResult {
    let root = BitMapBackend::new(path, (800, 600)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(SATISFACTION_TITLE, ("sans-serif", 26))
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(70)
        .build_cartesian_2d(0.5_f64..5.5_f64, -0.25_f64..1.25_f64)?;

    chart
        .configure_mesh()
        .x_labels(5)
        .x_label_formatter(&|x| format!("{x:.0}"))
        .y_label_formatter(&|y| format!("{y:.1}"))
        .x_desc("Job Satisfaction")
        .y_desc("Left Company (0=No, 1=Yes)")
        .draw()?;

    // Hue by department, one series per label so the legend lists each once
    let mut by_department: BTreeMap<&str, Vec<(f64, f64)>> = BTreeMap::new();
    for r in records {
        by_department
            .entry(r.department.label())
            .or_default()
            .push((f64::from(r.job_satisfaction), f64::from(r.left_company)));
    }

    for (idx, (label, points)) in by_department.into_iter().enumerate() {
        let color = Palette99::pick(idx).to_rgba();
        chart
            .draw_series(
                points
                    .into_iter()
                    .map(|(x, y)| Circle::new((x, y), 5, color.filled())),
            )?
            .label(label)
            .legend(move |(x, y)| Circle::new((x, y), 5, color.filled()));
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::MiddleRight)
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}
