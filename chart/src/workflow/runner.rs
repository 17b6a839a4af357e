use crate::workflow::config::ChartConfig;
use anyhow::Context;
use splcore::color::ColorScale;
use splcore::figure::SurfaceFigure;
use splcore::processing::{GridSummary, PowerGrid};
use splcore::telemetry::LogManager;
use std::fs;
use std::path::{Path, PathBuf};

/// Everything produced by one evaluation, before anything touches disk.
pub struct Chart {
    pub grid: PowerGrid,
    pub summary: GridSummary,
    pub html: String,
}

impl Chart {
    /// Writes the page to `path`, replacing whatever is there.
    pub fn write<P: AsRef<Path>>(&self, path: P) -> anyhow::Result<usize> {
        let path_ref = path.as_ref();
        fs::write(path_ref, self.html.as_bytes())
            .with_context(|| format!("writing chart {}", path_ref.display()))?;
        Ok(self.html.len())
    }
}

/// Evaluates the grid and renders the page without side effects.
pub fn build_chart(config: &ChartConfig) -> anyhow::Result<Chart> {
    let grid = PowerGrid::evaluate(&config.to_grid_config()).context("evaluating watts grid")?;
    let layout = config.to_figure_layout();
    let html = SurfaceFigure::from_grid(&grid, &ColorScale::watts_bands(), &layout).to_html();
    let summary = grid.summary();

    Ok(Chart {
        grid,
        summary,
        html,
    })
}

pub struct RunReport {
    pub summary: GridSummary,
    pub output: PathBuf,
    pub bytes_written: usize,
}

#[derive(Clone)]
pub struct Runner {
    config: ChartConfig,
}

impl Runner {
    pub fn new(config: ChartConfig) -> Self {
        Self { config }
    }

    pub fn execute(&self) -> anyhow::Result<RunReport> {
        let logger = LogManager::new("runner");
        let chart = build_chart(&self.config)?;
        let (rows, cols) = chart.grid.shape();
        logger.record(&format!(
            "grid {}x{} watts {:.4}..{:.1}",
            rows, cols, chart.summary.min_watts, chart.summary.max_watts
        ));

        let bytes_written = chart.write(&self.config.output)?;
        logger.record(&format!(
            "wrote {} bytes to {}",
            bytes_written,
            self.config.output.display()
        ));

        Ok(RunReport {
            summary: chart.summary,
            output: self.config.output.clone(),
            bytes_written,
        })
    }
}
