//! Error types for orthodromy requests.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum OrthodromyError {
    /// The service answered with a non-success status. Displays as the
    /// status description alone, e.g. `Not Found`.
    #[error("{reason}")]
    Status { status: u16, reason: String },

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Malformed orthodromy response: {0}")]
    Decode(#[from] DecodeError),
}

/// Failures reported by the strict WKT decoder.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DecodeError {
    #[error("no LINESTRING literal found")]
    MissingLineString,

    #[error("vertex {vertex} has {found} components, expected 2")]
    WrongArity { vertex: usize, found: usize },

    #[error("vertex {vertex} has non-numeric component {token:?}")]
    InvalidNumber { vertex: usize, token: String },
}

pub type Result<T> = std::result::Result<T, OrthodromyError>;
