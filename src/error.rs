//! Error kinds returned across the crate's external surface.
//!
//! Nothing in this crate recovers silently: every failure reaches the
//! caller as one of these variants.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("invalid move string: {0}")]
    InvalidMoveString(String),

    #[error("invalid transform string: {0}")]
    InvalidTransformString(String),

    #[error("invalid cube format {format}: {detail}")]
    InvalidCubeFormat { format: String, detail: String },

    #[error("cube is not consistent (invalid piece index or orientation bits)")]
    InconsistentCube,

    #[error("cube is consistent but not solvable (parity/orientation sum fails)")]
    UnsolvableCube,

    #[error("unknown solver: {0}")]
    UnknownSolver(String),

    #[error("unsupported options string {0:?} for this solver")]
    UnsupportedOptions(String),

    #[error("table size mismatch: expected {expected} bytes, got {got}")]
    TableSizeMismatch { expected: usize, got: usize },

    #[error("buffer too small: need {needed} bytes, have {have}")]
    BufferTooSmall { needed: usize, have: usize },

    #[error("ran out of space writing table data")]
    IoOutOfSpace,

    #[error("persistence error: {0}")]
    Persistence(String),
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Persistence(e.to_string())
    }
}

impl From<bincode::error::EncodeError> for Error {
    fn from(e: bincode::error::EncodeError) -> Self {
        Error::Persistence(e.to_string())
    }
}

impl From<bincode::error::DecodeError> for Error {
    fn from(e: bincode::error::DecodeError) -> Self {
        Error::Persistence(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
