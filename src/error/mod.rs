//! Crate-wide error types.

mod types;

pub use types::{LayoutError, Result};
