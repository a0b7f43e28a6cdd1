use serde::{Deserialize, Serialize};

/// A position in the map's geographic frame (EPSG:4326, x = lon, y = lat).
///
/// The map surface hands coordinates over already expressed in this frame;
/// nothing in the core reprojects them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub x: f64,
    pub y: f64,
}

impl Coordinate {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub const fn lon(self) -> f64 {
        self.x
    }

    pub const fn lat(self) -> f64 {
        self.y
    }
}

impl From<[f64; 2]> for Coordinate {
    fn from([x, y]: [f64; 2]) -> Self {
        Self { x, y }
    }
}

impl From<Coordinate> for [f64; 2] {
    fn from(c: Coordinate) -> Self {
        [c.x, c.y]
    }
}
