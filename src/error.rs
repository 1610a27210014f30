//! Errors reported by the crate.

use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Invalid sampling plan or domain.
    #[error("fine: invalid configuration: {0}")]
    Config(String),

    /// Access to a point outside of a curve.
    #[error("fine: index {index} out of range for a curve of {len} points")]
    Index { index: usize, len: usize },

    /// A function refused to be evaluated at `x`.
    #[error("fine: cannot evaluate at x = {x}: {reason}")]
    Evaluation { x: f64, reason: String },

    /// Invalid samples given to a [`DataFunction`](crate::DataFunction).
    #[error("fine: invalid data: {0}")]
    Data(String),

    /// Malformed line in the tabular text format of a curve.
    #[error("fine: line {line}: {msg}")]
    Parse { line: usize, msg: String },

    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
