use super::scale::Rgb;
use serde::{Deserialize, Serialize};

/// Upper bound of the green band, watts.
pub const GREEN_LIMIT_WATTS: f64 = 100.0;
/// Upper bound of the yellow band, watts.
pub const YELLOW_LIMIT_WATTS: f64 = 200.0;

/// Power band a grid cell falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Band {
    Green,
    Yellow,
    Red,
}

impl Band {
    /// Green up to 100 W, yellow up to 200 W, red beyond.
    pub fn classify(watts: f64) -> Self {
        if watts <= GREEN_LIMIT_WATTS {
            Band::Green
        } else if watts <= YELLOW_LIMIT_WATTS {
            Band::Yellow
        } else {
            Band::Red
        }
    }

    pub fn color(self) -> Rgb {
        match self {
            Band::Green => Rgb::new(0, 255, 0),
            Band::Yellow => Rgb::new(255, 255, 0),
            Band::Red => Rgb::new(255, 0, 0),
        }
    }
}

/// Number of grid cells per band.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BandCounts {
    pub green: usize,
    pub yellow: usize,
    pub red: usize,
}

impl BandCounts {
    pub fn tally<'a, I>(values: I) -> Self
    where
        I: IntoIterator<Item = &'a f64>,
    {
        values
            .into_iter()
            .fold(Self::default(), |mut counts, &watts| {
                match Band::classify(watts) {
                    Band::Green => counts.green += 1,
                    Band::Yellow => counts.yellow += 1,
                    Band::Red => counts.red += 1,
                }
                counts
            })
    }

    pub fn total(&self) -> usize {
        self.green + self.yellow + self.red
    }
}
