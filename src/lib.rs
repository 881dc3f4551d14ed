//! orthodromy-client
//!
//! Requests sampled great-circle paths from a remote orthodromy service and
//! decodes the WKT answer into coordinate pairs.

pub mod client;
pub mod error;
pub mod geopoint;
pub mod path;
pub mod request;
pub mod transport;
pub mod wkt;

pub use client::OrthodromyClient;
pub use error::{DecodeError, OrthodromyError, Result};
pub use geopoint::GeoPoint;
pub use path::PathPoints;
pub use request::{KnownCrs, SamplingRequest};
pub use transport::{HttpTransport, OrthodromyConfig, Transport, TransportResponse};
