use super::band::{Band, GREEN_LIMIT_WATTS, YELLOW_LIMIT_WATTS};
use serde::{Serialize, Serializer};
use std::fmt;

/// Watts that the colour positions are expressed against. Not derived from
/// the grid: anything at or above it renders as the top colour.
pub const COLOR_SCALE_MAX_WATTS: f64 = 1000.0;

/// 8-bit RGB colour, serialized as a CSS `rgb(r, g, b)` string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    fn lerp(self, other: Rgb, t: f64) -> Rgb {
        let mix = |a: u8, b: u8| (f64::from(a) + (f64::from(b) - f64::from(a)) * t).round() as u8;
        Rgb::new(mix(self.r, other.r), mix(self.g, other.g), mix(self.b, other.b))
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// One `[position, colour]` breakpoint, position in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ColorStop(pub f64, pub Rgb);

impl ColorStop {
    pub fn position(&self) -> f64 {
        self.0
    }

    pub fn color(&self) -> Rgb {
        self.1
    }
}

/// Piecewise colour scale with explicit saturation bounds.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorScale {
    pub stops: Vec<ColorStop>,
    pub cmin: f64,
    pub cmax: f64,
}

impl ColorScale {
    /// Green to 100 W, yellow to 200 W, red above, as fractions of 1000 W.
    pub fn watts_bands() -> Self {
        let green_edge = GREEN_LIMIT_WATTS / COLOR_SCALE_MAX_WATTS;
        let yellow_edge = YELLOW_LIMIT_WATTS / COLOR_SCALE_MAX_WATTS;
        let (green, yellow, red) = (
            Band::Green.color(),
            Band::Yellow.color(),
            Band::Red.color(),
        );
        Self {
            stops: vec![
                ColorStop(0.0, green),
                ColorStop(green_edge, green),
                ColorStop(green_edge, yellow),
                ColorStop(yellow_edge, yellow),
                ColorStop(yellow_edge, red),
                ColorStop(1.0, red),
            ],
            cmin: 0.0,
            cmax: COLOR_SCALE_MAX_WATTS,
        }
    }

    /// Maps a value onto `[0, 1]` between `cmin` and `cmax`, saturating at both ends.
    pub fn normalize(&self, value: f64) -> f64 {
        let span = self.cmax - self.cmin;
        if span <= 0.0 {
            return 0.0;
        }
        ((value - self.cmin) / span).clamp(0.0, 1.0)
    }

    /// Colour for `value`. A value sitting exactly on a hard edge takes the
    /// lower band's colour, matching [`Band::classify`].
    pub fn color_for(&self, value: f64) -> Rgb {
        let t = self.normalize(value);
        for pair in self.stops.windows(2) {
            let (lo, hi) = (pair[0], pair[1]);
            if t > hi.position() {
                continue;
            }
            let width = hi.position() - lo.position();
            if width <= 0.0 {
                return hi.color();
            }
            let local = ((t - lo.position()) / width).clamp(0.0, 1.0);
            return lo.color().lerp(hi.color(), local);
        }
        self.stops
            .last()
            .map(ColorStop::color)
            .unwrap_or(Rgb::new(0, 0, 0))
    }
}

/// Colourbar title block.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColorBarTitle {
    pub text: String,
    pub side: String,
}

/// Legend shown beside the surface, in the charting library's schema.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColorBar {
    pub title: ColorBarTitle,
    pub tickmode: String,
    pub tickvals: Vec<f64>,
    pub ticktext: Vec<String>,
    pub ticks: String,
}

impl ColorBar {
    /// Ticks at 0, 100 and 200 W, plus a "> 200" label parked at 500 W.
    pub fn watts_bands() -> Self {
        Self {
            title: ColorBarTitle {
                text: "Watts Required".into(),
                side: "right".into(),
            },
            tickmode: "array".into(),
            tickvals: vec![0.0, GREEN_LIMIT_WATTS, YELLOW_LIMIT_WATTS, 500.0],
            ticktext: vec!["0".into(), "100".into(), "200".into(), "> 200".into()],
            ticks: "outside".into(),
        }
    }
}
