//! Error types for railgen
//!
//! Each layer owns a `thiserror` enum; `RailError` rolls them up for callers
//! that only need a single error type.

use std::path::PathBuf;
use thiserror::Error;

use crate::application::SessionError;
use crate::domain::entities::CatalogError;
use crate::domain::ports::ServiceError;
use crate::domain::value_objects::ValidationError;

/// Result type alias for railgen operations
pub type RailResult<T> = Result<T, RailError>;

/// Main error type for railgen operations
#[derive(Error, Debug)]
pub enum RailError {
    /// Config file could not be parsed
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// A value passed on the command line or via env is not recognised
    #[error("invalid value '{value}' for {field}")]
    InvalidValue { field: &'static str, value: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Service(#[from] ServiceError),

    #[error(transparent)]
    Session(#[from] SessionError),
}
