//! Surface figure rendered through the `plotly` crate.

pub mod layout;
pub mod surface;

pub use layout::FigureLayout;
pub use surface::SurfaceTrace;

use crate::color::{ColorBar, ColorScale};
use crate::processing::PowerGrid;
use plotly::Plot;

/// A single-trace figure ready to hand to the charting library.
#[derive(Debug, Clone)]
pub struct SurfaceFigure {
    pub trace: SurfaceTrace,
    pub layout: FigureLayout,
}

impl SurfaceFigure {
    pub fn from_grid(grid: &PowerGrid, scale: &ColorScale, layout: &FigureLayout) -> Self {
        Self {
            trace: SurfaceTrace::from_grid(grid, scale, ColorBar::watts_bands()),
            layout: layout.clone(),
        }
    }

    pub fn to_plot(&self) -> Plot {
        let mut plot = Plot::new();
        plot.add_trace(Box::new(self.trace.clone()));
        plot.set_layout(self.layout.to_layout());
        plot
    }

    /// Standalone page with plotly.js inlined, so it renders offline.
    pub fn to_html(&self) -> String {
        self.to_plot().to_html()
    }
}
