//! Client binding: matching an ordered client snapshot onto a scheme.
//!
//! Binding consumes a [`ClientQueue`] in tree order and produces a fully
//! owned [`BoundNode`] tree; the installed scheme is never mutated.

mod core;

pub use core::{BoundNode, ClientQueue, bind};
