use crate::color::{ColorBar, ColorScale, ColorStop};
use crate::processing::PowerGrid;
use plotly::Trace;
use serde::Serialize;

/// plotly.js `surface` trace. Colour follows the watts values themselves.
#[derive(Debug, Clone, Serialize)]
pub struct SurfaceTrace {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub z: Vec<Vec<f64>>,
    pub surfacecolor: Vec<Vec<f64>>,
    pub colorscale: Vec<ColorStop>,
    pub cmin: f64,
    pub cmax: f64,
    pub colorbar: ColorBar,
}

impl SurfaceTrace {
    pub fn from_grid(grid: &PowerGrid, scale: &ColorScale, colorbar: ColorBar) -> Self {
        let z = grid.watts_rows();
        Self {
            kind: "surface",
            x: grid.sensitivity.to_vec(),
            y: grid.target_db.to_vec(),
            surfacecolor: z.clone(),
            z,
            colorscale: scale.stops.clone(),
            cmin: scale.cmin,
            cmax: scale.cmax,
            colorbar,
        }
    }
}

impl Trace for SurfaceTrace {
    fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prelude::GridConfig;
    use serde_json::Value;

    #[test]
    fn trace_json_colours_surface_by_watts() {
        let grid = PowerGrid::evaluate(&GridConfig::default()).unwrap();
        let trace = SurfaceTrace::from_grid(&grid, &ColorScale::watts_bands(), ColorBar::watts_bands());
        let value: Value = serde_json::from_str(&Trace::to_json(&trace)).unwrap();

        assert_eq!(value["type"], "surface");
        assert_eq!(value["x"].as_array().unwrap().len(), 15);
        assert_eq!(value["y"].as_array().unwrap().len(), 41);
        assert_eq!(value["z"].as_array().unwrap().len(), 41);
        assert_eq!(value["z"][0].as_array().unwrap().len(), 15);
        assert_eq!(value["z"], value["surfacecolor"]);
        assert_eq!(value["cmin"], 0.0);
        assert_eq!(value["cmax"], 1000.0);
        assert_eq!(value["colorscale"][2][1], "rgb(255, 255, 0)");
        assert_eq!(value["colorbar"]["ticktext"][3], "> 200");
    }
}
