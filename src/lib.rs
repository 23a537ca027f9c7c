//! S-expression driven tiling layout engine.
//!
//! A scheme like `h c (v ...)` describes how a workspace is carved up:
//! containers split their frame horizontally or vertically by weight
//! (or overlap it, for monocle), leaves claim clients from an ordered
//! queue. The pipeline is tokenize → parse → bind → resolve:
//!
//! ```
//! use sxp_layout::{Rect, SchemeEngine, Workspace};
//!
//! struct Host {
//!     windows: Vec<u32>,
//!     placed: Vec<(u32, Rect)>,
//! }
//!
//! impl Workspace for Host {
//!     type Client = u32;
//!     fn clients(&self) -> Vec<u32> {
//!         self.windows.clone()
//!     }
//!     fn frame(&self) -> Rect {
//!         Rect::new(0, 0, 1920, 1080)
//!     }
//!     fn apply(&mut self, client: &u32, rect: Rect, _interact: bool) {
//!         self.placed.push((*client, rect));
//!     }
//! }
//!
//! let mut host = Host { windows: vec![1, 2, 3], placed: Vec::new() };
//! let mut engine = SchemeEngine::new();
//! engine.set_scheme("h c (v ...)").unwrap();
//! let summary = engine.run_pass(&mut host).unwrap();
//! assert_eq!(summary.placed, 3);
//! ```

pub mod bind;
pub mod engine;
pub mod error;
pub mod geometry;
pub mod logging;
pub mod metrics;
pub mod resolve;
pub mod scheme;
pub mod tokens;

pub use bind::{BoundNode, ClientQueue, bind};
pub use engine::{EngineConfig, PassSummary, SchemeEngine, Workspace};
pub use error::{LayoutError, Result};
pub use geometry::Rect;
pub use logging::{
    FileSink, LogEvent, LogFields, LogLevel, LogSink, Logger, LoggingError, LoggingResult,
};
pub use metrics::{EngineMetrics, MetricSnapshot};
pub use resolve::{Placement, resolve};
pub use scheme::{LayoutNode, NodeKind, parse, parse_str};
pub use tokens::{Token, tokenize};
