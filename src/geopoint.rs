//! Coordinate pair in a caller-chosen coordinate reference system.

use serde::{Deserialize, Serialize};

/// A coordinate `(x, y)`.
///
/// For the default `EPSG:4326` system `x` is longitude and `y` latitude,
/// both in degrees. Serializes as a two-element array `[x, y]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "(f64, f64)", into = "(f64, f64)")]
pub struct GeoPoint {
    pub x: f64,
    pub y: f64,
}

impl GeoPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// True when both components are finite numbers.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(f64, f64)> for GeoPoint {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

impl From<GeoPoint> for (f64, f64) {
    fn from(point: GeoPoint) -> Self {
        (point.x, point.y)
    }
}
