//! Decoded orthodromy paths.
//!
//! A path is the ordered vertex list the service returned, start point first.
//! Decoding is lenient, so a path may be empty or hold `NaN` components; the
//! checks here let callers tell a usable path from a degraded one.

use serde::{Deserialize, Serialize};

use crate::geopoint::GeoPoint;

/// Ordered vertices of a sampled great-circle path.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PathPoints {
    points: Vec<GeoPoint>,
}

impl PathPoints {
    pub fn new(points: Vec<GeoPoint>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[GeoPoint] {
        &self.points
    }

    pub fn into_points(self) -> Vec<GeoPoint> {
        self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// True when every vertex has finite components. An empty path is finite.
    pub fn is_finite(&self) -> bool {
        self.points.iter().all(GeoPoint::is_finite)
    }

    /// Copy of the path without vertices that carry non-finite components.
    pub fn finite_points(&self) -> PathPoints {
        self.points
            .iter()
            .copied()
            .filter(GeoPoint::is_finite)
            .collect()
    }

    pub fn first(&self) -> Option<&GeoPoint> {
        self.points.first()
    }

    pub fn last(&self) -> Option<&GeoPoint> {
        self.points.last()
    }
}

impl FromIterator<GeoPoint> for PathPoints {
    fn from_iter<I: IntoIterator<Item = GeoPoint>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl From<Vec<(f64, f64)>> for PathPoints {
    fn from(pairs: Vec<(f64, f64)>) -> Self {
        pairs.into_iter().map(GeoPoint::from).collect()
    }
}

impl IntoIterator for PathPoints {
    type Item = GeoPoint;
    type IntoIter = std::vec::IntoIter<GeoPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.into_iter()
    }
}
