use anyhow::Context;
use serde::{Deserialize, Serialize};
use splcore::figure::FigureLayout;
use splcore::math::AxisRange;
use splcore::prelude::{
    GridConfig, SENSITIVITY_MAX, SENSITIVITY_MIN, SENSITIVITY_STEP, TARGET_MAX, TARGET_MIN,
    TARGET_STEP,
};
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_OUTPUT: &str = "spl_watts_chart.html";

/// Every knob of a chart run. Keys missing from YAML take the defaults.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    pub sensitivity_min: i32,
    pub sensitivity_max: i32,
    pub sensitivity_step: i32,
    pub target_min: i32,
    pub target_max: i32,
    pub target_step: i32,
    pub output: PathBuf,
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub margin: u32,
}

impl Default for ChartConfig {
    fn default() -> Self {
        let layout = FigureLayout::default();
        Self {
            sensitivity_min: SENSITIVITY_MIN,
            sensitivity_max: SENSITIVITY_MAX,
            sensitivity_step: SENSITIVITY_STEP,
            target_min: TARGET_MIN,
            target_max: TARGET_MAX,
            target_step: TARGET_STEP,
            output: PathBuf::from(DEFAULT_OUTPUT),
            title: layout.title,
            width: layout.width,
            height: layout.height,
            margin: layout.margin,
        }
    }
}

impl ChartConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path_ref = path.as_ref();
        let contents = fs::read_to_string(path_ref)
            .with_context(|| format!("reading chart config {}", path_ref.display()))?;
        let config: ChartConfig = serde_yaml::from_str(&contents)
            .with_context(|| format!("parsing chart config {}", path_ref.display()))?;
        Ok(config)
    }

    pub fn from_args(sensitivity: AxisRange, target: AxisRange, output: PathBuf) -> Self {
        Self {
            sensitivity_min: sensitivity.min,
            sensitivity_max: sensitivity.max,
            sensitivity_step: sensitivity.step,
            target_min: target.min,
            target_max: target.max,
            target_step: target.step,
            output,
            ..Default::default()
        }
    }

    pub fn to_grid_config(&self) -> GridConfig {
        GridConfig {
            sensitivity: AxisRange::new(
                self.sensitivity_min,
                self.sensitivity_max,
                self.sensitivity_step,
            ),
            target: AxisRange::new(self.target_min, self.target_max, self.target_step),
        }
    }

    pub fn to_figure_layout(&self) -> FigureLayout {
        FigureLayout {
            title: self.title.clone(),
            width: self.width,
            height: self.height,
            margin: self.margin,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn default_config_matches_reference_chart() {
        let cfg = ChartConfig::default();
        assert_eq!(cfg.to_grid_config(), GridConfig::default());
        assert_eq!(cfg.to_figure_layout(), FigureLayout::default());
        assert_eq!(cfg.output, PathBuf::from("spl_watts_chart.html"));
    }

    #[test]
    fn config_from_args_produces_grid_config() {
        let cfg = ChartConfig::from_args(
            AxisRange::new(86, 96, 2),
            AxisRange::new(90, 120, 1),
            PathBuf::from("out.html"),
        );
        let grid = cfg.to_grid_config();
        assert_eq!(grid.sensitivity, AxisRange::new(86, 96, 2));
        assert_eq!(grid.target.max, 120);
        assert_eq!(cfg.title, "Watts Required for Target SPL");
    }

    #[test]
    fn config_load_reads_partial_yaml() {
        let mut temp = NamedTempFile::new().unwrap();
        temp.write_all(b"sensitivity_min: 88\ntarget_max: 110\nwidth: 1024\noutput: custom.html\n")
            .unwrap();
        let path = temp.into_temp_path();
        let cfg = ChartConfig::load(&path).unwrap();
        assert_eq!(cfg.sensitivity_min, 88);
        assert_eq!(cfg.sensitivity_max, 98);
        assert_eq!(cfg.target_max, 110);
        assert_eq!(cfg.width, 1024);
        assert_eq!(cfg.height, 600);
        assert_eq!(cfg.output, PathBuf::from("custom.html"));
    }

    #[test]
    fn config_load_reports_missing_file() {
        let err = ChartConfig::load("/nonexistent/spl.yaml").unwrap_err();
        assert!(format!("{:#}", err).contains("reading chart config"));
    }
}
