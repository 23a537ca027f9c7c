//! Geometry resolution: turning a bound tree and a frame into one
//! rectangle per bound client.

mod core;

pub use core::{Placement, resolve};
