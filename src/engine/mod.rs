//! Pass runner: owns the active scheme and drives bind + resolve + apply
//! against a host [`Workspace`].

use std::sync::{Arc, Mutex};
use std::time::Instant;

use serde_json::json;

use crate::bind::{ClientQueue, bind};
use crate::error::Result;
use crate::geometry::Rect;
use crate::logging::{LogLevel, Logger, event_with_fields, json_kv};
use crate::metrics::{EngineMetrics, MetricSnapshot};
use crate::resolve::resolve;
use crate::scheme::{LayoutNode, parse_str};

/// Host boundary the engine works against.
///
/// The host owns the live client list, the workspace rectangle and the
/// routine that actually moves a client. The engine only ever reads the
/// first two and calls the third once per resolved placement.
pub trait Workspace {
    /// Opaque client handle.
    type Client: Clone;

    /// Ordered snapshot of the clients eligible for tiling, taken at
    /// the start of a pass.
    fn clients(&self) -> Vec<Self::Client>;

    /// Rectangle seeding the top-level resolve.
    fn frame(&self) -> Rect;

    /// Apply a final rectangle to one client. `interact` is passed
    /// through uninterpreted.
    fn apply(&mut self, client: &Self::Client, rect: Rect, interact: bool);
}

/// Configuration knobs for the engine.
#[derive(Clone)]
pub struct EngineConfig {
    /// Optional structured logger for install and pass events.
    pub logger: Option<Logger>,
    /// Metrics accumulator shared with the host.
    pub metrics: Option<Arc<Mutex<EngineMetrics>>>,
    /// Target field stamped on emitted log events.
    pub log_target: String,
}

impl EngineConfig {
    pub fn new() -> Self {
        Self {
            logger: None,
            metrics: None,
            log_target: "sxp::engine".to_string(),
        }
    }

    /// Enable metrics collection if it has not already been configured.
    pub fn enable_metrics(&mut self) {
        if self.metrics.is_none() {
            self.metrics = Some(Arc::new(Mutex::new(EngineMetrics::new())));
        }
    }

    pub fn disable_metrics(&mut self) {
        self.metrics = None;
    }

    /// Access the shared metrics handle if metrics are enabled.
    pub fn metrics_handle(&self) -> Option<Arc<Mutex<EngineMetrics>>> {
        self.metrics.as_ref().map(Arc::clone)
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Outcome of one layout pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PassSummary {
    /// Clients that received a rectangle.
    pub placed: usize,
    /// Clients left over after every slot was filled.
    pub dropped: usize,
}

/// Holds the active scheme and runs layout passes.
///
/// The scheme starts empty (passes are no-ops) and is replaced wholesale
/// by [`SchemeEngine::set_scheme`]. A pass is one synchronous call
/// chain: snapshot clients, bind, resolve, apply; the queue and bound
/// tree never outlive it.
pub struct SchemeEngine {
    scheme: Option<LayoutNode>,
    config: EngineConfig,
    started: Instant,
}

impl SchemeEngine {
    pub fn new() -> Self {
        Self::with_config(EngineConfig::new())
    }

    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            scheme: None,
            config,
            started: Instant::now(),
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut EngineConfig {
        &mut self.config
    }

    /// The currently installed scheme, if any.
    pub fn scheme(&self) -> Option<&LayoutNode> {
        self.scheme.as_ref()
    }

    /// Drop the active scheme; subsequent passes place nothing.
    pub fn clear_scheme(&mut self) {
        self.scheme = None;
    }

    /// Parse `text` and install the result as the active scheme.
    ///
    /// The previous tree is released wholesale. Text that establishes no
    /// node installs an empty scheme rather than erroring; the host is
    /// expected to trigger a layout pass afterwards either way.
    pub fn set_scheme(&mut self, text: &str) -> Result<()> {
        self.scheme = parse_str(text);
        let slots = self.scheme.as_ref().map_or(0, LayoutNode::slot_count);

        if let Some(metrics) = &self.config.metrics {
            metrics.lock().expect("metrics mutex poisoned").record_scheme();
        }
        if let Some(logger) = &self.config.logger {
            logger.log_event(event_with_fields(
                LogLevel::Info,
                &self.config.log_target,
                "scheme_installed",
                [
                    json_kv("text", json!(text)),
                    json_kv("installed", json!(self.scheme.is_some())),
                    json_kv("slots", json!(slots)),
                ],
            ))?;
        }
        Ok(())
    }

    /// Run one bind + resolve + apply cycle against the workspace.
    ///
    /// Clients beyond the scheme's slots are silently left alone; an
    /// empty or missing scheme applies nothing. Never re-entered: the
    /// host serializes layout triggers.
    pub fn run_pass<W: Workspace>(&mut self, workspace: &mut W) -> Result<PassSummary> {
        let Some(scheme) = self.scheme.as_ref() else {
            return Ok(PassSummary::default());
        };

        let mut queue = ClientQueue::new(workspace.clients());
        let snapshot_len = queue.len();

        let bound = bind(scheme, &mut queue);
        let placements = match &bound {
            Some(tree) => resolve(tree, workspace.frame()),
            None => Vec::new(),
        };

        for placement in &placements {
            workspace.apply(&placement.client, placement.rect, false);
        }

        let summary = PassSummary {
            placed: placements.len(),
            dropped: queue.len(),
        };

        if let Some(metrics) = &self.config.metrics {
            metrics
                .lock()
                .expect("metrics mutex poisoned")
                .record_pass(summary.placed, summary.dropped);
        }
        if let Some(logger) = &self.config.logger {
            logger.log_event(event_with_fields(
                LogLevel::Debug,
                &self.config.log_target,
                "pass_complete",
                [
                    json_kv("clients", json!(snapshot_len)),
                    json_kv("placed", json!(summary.placed)),
                    json_kv("dropped", json!(summary.dropped)),
                ],
            ))?;
        }

        Ok(summary)
    }

    /// Snapshot the shared metrics with the engine's uptime.
    pub fn metrics_snapshot(&self) -> Option<MetricSnapshot> {
        self.config.metrics.as_ref().map(|metrics| {
            metrics
                .lock()
                .expect("metrics mutex poisoned")
                .snapshot(self.started.elapsed())
        })
    }
}

impl Default for SchemeEngine {
    fn default() -> Self {
        Self::new()
    }
}
