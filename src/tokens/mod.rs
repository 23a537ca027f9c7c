//! Tokenizer for the layout DSL.
//!
//! Downstream code imports token types from here while the implementation
//! lives in the private `core` module.

mod core;

pub use core::{Token, tokenize};
