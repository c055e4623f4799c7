// error.rs - Engine error type and Result alias

//! Error types for the ecosystem engine.
//!
//! Every operation validates its inputs before touching state, so an `Err`
//! always means nothing changed.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EcosystemError {
    /// A coordinate outside the grid was addressed
    #[error("cell ({row}, {col}) is outside the {rows}x{cols} grid")]
    IndexOutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    /// Zero dimensions, a zero interval, or a density outside [0, 1]
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

pub type Result<T> = std::result::Result<T, EcosystemError>;

impl EcosystemError {
    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidParameter(msg.into())
    }
}
