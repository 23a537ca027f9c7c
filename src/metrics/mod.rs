//! Counters accumulated across scheme installs and layout passes.

use std::time::Duration;

use serde_json::json;

use crate::logging::{LogEvent, LogFields, LogLevel};

/// Saturating counters maintained by the engine.
#[derive(Debug, Default, Clone)]
pub struct EngineMetrics {
    schemes_installed: u64,
    passes: u64,
    clients_placed: u64,
    clients_dropped: u64,
}

impl EngineMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_scheme(&mut self) {
        self.schemes_installed = self.schemes_installed.saturating_add(1);
    }

    pub fn record_pass(&mut self, placed: usize, dropped: usize) {
        self.passes = self.passes.saturating_add(1);
        self.clients_placed = self.clients_placed.saturating_add(placed as u64);
        self.clients_dropped = self.clients_dropped.saturating_add(dropped as u64);
    }

    pub fn snapshot(&self, uptime: Duration) -> MetricSnapshot {
        MetricSnapshot {
            uptime_ms: uptime.as_millis() as u64,
            schemes_installed: self.schemes_installed,
            passes: self.passes,
            clients_placed: self.clients_placed,
            clients_dropped: self.clients_dropped,
        }
    }
}

/// Point-in-time copy of the engine counters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricSnapshot {
    pub uptime_ms: u64,
    pub schemes_installed: u64,
    pub passes: u64,
    pub clients_placed: u64,
    pub clients_dropped: u64,
}

impl MetricSnapshot {
    pub fn as_fields(&self) -> LogFields {
        let mut map = LogFields::new();
        map.insert("uptime_ms".to_string(), json!(self.uptime_ms));
        map.insert("schemes_installed".to_string(), json!(self.schemes_installed));
        map.insert("passes".to_string(), json!(self.passes));
        map.insert("clients_placed".to_string(), json!(self.clients_placed));
        map.insert("clients_dropped".to_string(), json!(self.clients_dropped));
        map
    }

    pub fn to_log_event(&self, target: &str) -> LogEvent {
        LogEvent::with_fields(
            LogLevel::Info,
            target.to_string(),
            "engine_metrics".to_string(),
            self.as_fields(),
        )
    }
}
