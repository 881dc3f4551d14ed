//! WKT `LINESTRING` decoding and encoding.
//!
//! The service answers with a single `LINESTRING(x1 y1,x2 y2,...)` literal.
//! [`decode_linestring`] never fails: missing geometry gives an empty path
//! and unreadable numbers become `NaN`. [`decode_linestring_strict`] reports
//! the same problems as errors instead.

use crate::error::DecodeError;
use crate::geopoint::GeoPoint;
use crate::path::PathPoints;

const LINESTRING_MARKER: &str = "LINESTRING(";

/// Decode the last `LINESTRING(` literal in `text`.
///
/// Anything before the marker and after the first `)` that follows it is
/// ignored. Components past the second (Z/M) are dropped; a missing
/// component is `NaN`.
pub fn decode_linestring(text: &str) -> PathPoints {
    let Some(interior) = interior(text) else {
        return PathPoints::default();
    };

    interior
        .split(',')
        .filter(|vertex| !vertex.trim().is_empty())
        .map(|vertex| {
            let mut components = vertex.split_whitespace().map(parse_component);
            let x = components.next().unwrap_or(f64::NAN);
            let y = components.next().unwrap_or(f64::NAN);
            GeoPoint::new(x, y)
        })
        .collect()
}

/// Like [`decode_linestring`], but every vertex must be exactly two numbers.
pub fn decode_linestring_strict(text: &str) -> Result<PathPoints, DecodeError> {
    let interior = interior(text).ok_or(DecodeError::MissingLineString)?;
    if interior.trim().is_empty() {
        return Ok(PathPoints::default());
    }

    interior
        .split(',')
        .enumerate()
        .map(|(index, vertex)| {
            let tokens: Vec<&str> = vertex.split_whitespace().collect();
            let [x, y] = tokens.as_slice() else {
                return Err(DecodeError::WrongArity {
                    vertex: index,
                    found: tokens.len(),
                });
            };
            Ok(GeoPoint::new(
                parse_strict(index, x)?,
                parse_strict(index, y)?,
            ))
        })
        .collect()
}

/// Render `points` the way the orthodromy service does: `LINESTRING(x y,x y)`.
pub fn encode_linestring(points: &[GeoPoint]) -> String {
    let vertices = points
        .iter()
        .map(|point| format!("{} {}", point.x, point.y))
        .collect::<Vec<_>>()
        .join(",");
    format!("{}{})", LINESTRING_MARKER, vertices)
}

fn interior(text: &str) -> Option<&str> {
    let (_, tail) = text.rsplit_once(LINESTRING_MARKER)?;
    Some(tail.split_once(')').map_or(tail, |(head, _)| head))
}

fn parse_component(token: &str) -> f64 {
    token.trim().parse().unwrap_or(f64::NAN)
}

fn parse_strict(vertex: usize, token: &str) -> Result<f64, DecodeError> {
    token.trim().parse().map_err(|_| DecodeError::InvalidNumber {
        vertex,
        token: token.to_string(),
    })
}
