//! # Application Errors
//!
//! Errors raised outside the catalog: configuration, file I/O and seed
//! parsing. Catalog errors pass through unchanged.

use filmorate_core::FilmorateError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    /// A catalog operation was rejected.
    #[error(transparent)]
    Catalog(#[from] FilmorateError),

    /// The configuration file or an environment override is invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Reading a file or binding a socket failed.
    #[error("I/O error: {0}")]
    Io(String),

    /// A seed file could not be parsed or applied.
    #[error("Seed error: {0}")]
    Seed(String),
}
