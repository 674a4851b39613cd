//! The module contains the error the engine can throw.
//!
//! The errors are:
//!
//! - [`OutOfRange`] thrown when an id does not address any stored record.
//! - [`NotFound`] thrown when a budget category is not present.
//! - [`Malformed`] thrown when an input body misses or mistypes a field.
//!
//!  [`OutOfRange`]: EngineError::OutOfRange
//!  [`NotFound`]: EngineError::NotFound
//!  [`Malformed`]: EngineError::Malformed
use thiserror::Error;

/// Engine custom errors.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum EngineError {
    #[error("id {0} is out of range")]
    OutOfRange(u64),
    #[error("\"{0}\" key not found!")]
    NotFound(String),
    #[error("Malformed input: {0}")]
    Malformed(String),
}
