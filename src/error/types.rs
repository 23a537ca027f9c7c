use thiserror::Error;

use crate::logging::LoggingError;

/// Unified result type for the layout engine.
pub type Result<T> = std::result::Result<T, LayoutError>;

/// Errors surfaced by the layout engine.
///
/// Parsing, binding and resolving are permissive by design and never
/// fail; only ambient concerns (log sinks) can error a pass.
#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("logging failure: {0}")]
    Logging(#[from] LoggingError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
