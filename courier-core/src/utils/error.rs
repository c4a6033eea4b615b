#[cfg(test)]
#[path = "../../tests/unit/utils/error_test.rs"]
mod error_test;

use std::fmt::{Display, Formatter};

/// An error type returned by the routing engine.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum GenericError {
    /// Missing or malformed input data: unknown location, bad metric, invalid weight, etc.
    Data(String),

    /// A requested resource does not exist, e.g. a policy table which was never saved.
    NotFound(String),

    /// The sequencer was asked to enumerate more stops than it supports.
    TooManyStops {
        /// Amount of stops requested.
        actual: usize,
        /// Max amount of stops supported.
        limit: usize,
    },
}

/// A type alias for result type with `GenericError`.
pub type GenericResult<T> = Result<T, GenericError>;

impl Display for GenericError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            GenericError::Data(msg) => write!(f, "data error: {msg}"),
            GenericError::NotFound(msg) => write!(f, "not found: {msg}"),
            GenericError::TooManyStops { actual, limit } => {
                write!(f, "too many stops to sequence: {actual}, supported at most {limit}")
            }
        }
    }
}

impl std::error::Error for GenericError {}

impl From<String> for GenericError {
    fn from(msg: String) -> Self {
        Self::Data(msg)
    }
}

impl<'a> From<&'a str> for GenericError {
    fn from(msg: &'a str) -> Self {
        Self::Data(msg.to_string())
    }
}

impl From<std::io::Error> for GenericError {
    fn from(err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => Self::NotFound(err.to_string()),
            _ => Self::Data(err.to_string()),
        }
    }
}
