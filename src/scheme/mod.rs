//! Layout scheme model and parser.
//!
//! A scheme is the parsed form of a layout S-expression: a tree of
//! containers and client slots that stays installed until the next
//! parse. Implementation details live in the private `core` and `parse`
//! modules.

mod core;
mod parse;

pub use core::{LayoutNode, NodeKind};
pub use parse::{parse, parse_str};
