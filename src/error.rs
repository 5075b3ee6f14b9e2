//! Crate-wide error type.

use thiserror::Error;

use crate::{
    config::ConfigError, encode::EncodeFault, export::ExportFault, persist::StorageFault,
    validate::ValidationError,
};

/// Any failure a scouting operation can report to the operator.
#[derive(Debug, Error)]
pub enum Error {
    /// Form input was rejected.
    #[error("invalid input: {0}")]
    Validation(#[from] ValidationError),
    /// The database could not be used.
    #[error(transparent)]
    Storage(#[from] StorageFault),
    /// Export failed.
    #[error(transparent)]
    Export(#[from] ExportFault),
    /// QR encoding failed.
    #[error(transparent)]
    Encode(#[from] EncodeFault),
    /// Configuration could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Result alias over [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
