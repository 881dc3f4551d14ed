//! Query construction for the orthodromy endpoint.

use crate::geopoint::GeoPoint;

/// Path of the orthodromy endpoint on the remote service.
pub const ORTHODROMY_PATH: &str = "/api/orthodromy";

/// Vertex count requested when the caller does not pick one.
pub const DEFAULT_COUNT: u32 = 10;

/// Coordinate reference system used when the caller does not pick one.
pub const DEFAULT_CRS: &str = "EPSG:4326";

/// Coordinate reference systems the orthodromy service understands.
///
/// The client never rejects other identifiers; these exist so callers do not
/// have to spell the codes by hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KnownCrs {
    /// WGS 84 longitude/latitude degrees.
    Wgs84,
    /// Pulkovo 1942 longitude/latitude degrees.
    Pulkovo1942,
    /// Web Mercator metres.
    WebMercator,
}

impl KnownCrs {
    pub const ALL: [KnownCrs; 3] = [KnownCrs::Wgs84, KnownCrs::Pulkovo1942, KnownCrs::WebMercator];

    pub fn as_str(&self) -> &'static str {
        match self {
            KnownCrs::Wgs84 => "EPSG:4326",
            KnownCrs::Pulkovo1942 => "EPSG:4284",
            KnownCrs::WebMercator => "EPSG:3857",
        }
    }

    pub fn from_identifier(identifier: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|crs| crs.as_str() == identifier)
    }
}

/// Parameters for one orthodromy request.
///
/// `count` is a hint for how many vertices the service should return; it is
/// passed through unchecked.
#[derive(Debug, Clone, PartialEq)]
pub struct SamplingRequest {
    pub point1: GeoPoint,
    pub point2: GeoPoint,
    pub count: u32,
    pub crs: String,
}

impl SamplingRequest {
    /// Request between two points with the default count and CRS.
    pub fn new(point1: impl Into<GeoPoint>, point2: impl Into<GeoPoint>) -> Self {
        Self {
            point1: point1.into(),
            point2: point2.into(),
            count: DEFAULT_COUNT,
            crs: DEFAULT_CRS.to_string(),
        }
    }

    pub fn with_count(mut self, count: u32) -> Self {
        self.count = count;
        self
    }

    pub fn with_crs(mut self, crs: impl Into<String>) -> Self {
        self.crs = crs.into();
        self
    }

    /// Path and query string for this request, relative to the service root.
    ///
    /// The `&&` after `cs` is what the service has always received and is kept
    /// as is.
    pub fn locator(&self) -> String {
        format!(
            "{}?cs={}&&count={}&point1={}&point2={}",
            ORTHODROMY_PATH,
            self.crs,
            self.count,
            wkt_point(&self.point1),
            wkt_point(&self.point2)
        )
    }

    /// Absolute URL of this request against `base_url`.
    pub fn url(&self, base_url: &str) -> String {
        format!("{}{}", base_url.trim_end_matches('/'), self.locator())
    }
}

fn wkt_point(point: &GeoPoint) -> String {
    format!("POINT({} {})", point.x, point.y)
}
