use plotly::common::Title;
use plotly::layout::{Axis, AxisType, LayoutScene, Margin};
use plotly::Layout;
use serde::{Deserialize, Serialize};

pub const DEFAULT_TITLE: &str = "Watts Required for Target SPL";
pub const DEFAULT_WIDTH: u32 = 800;
pub const DEFAULT_HEIGHT: u32 = 600;
pub const DEFAULT_MARGIN: u32 = 50;

pub const SENSITIVITY_AXIS_TITLE: &str = "Speaker Sensitivity (dB @ 1W)";
pub const TARGET_AXIS_TITLE: &str = "Target SPL (dB)";
pub const WATTS_AXIS_TITLE: &str = "Watts Required";

/// User-facing knobs for the figure layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FigureLayout {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub margin: u32,
}

impl Default for FigureLayout {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.into(),
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            margin: DEFAULT_MARGIN,
        }
    }
}

impl FigureLayout {
    /// Log-scaled watts axis over a sensitivity/target floor.
    pub fn to_layout(&self) -> Layout {
        let margin = self.margin as usize;
        Layout::new()
            .title(Title::with_text(&self.title))
            .scene(
                LayoutScene::new()
                    .x_axis(Axis::new().title(Title::with_text(SENSITIVITY_AXIS_TITLE)))
                    .y_axis(Axis::new().title(Title::with_text(TARGET_AXIS_TITLE)))
                    .z_axis(
                        Axis::new()
                            .title(Title::with_text(WATTS_AXIS_TITLE))
                            .type_(AxisType::Log),
                    ),
            )
            .width(self.width as usize)
            .height(self.height as usize)
            .margin(
                Margin::new()
                    .left(margin)
                    .right(margin)
                    .bottom(margin)
                    .top(margin),
            )
    }
}
