//! Metrics collection for observability

use once_cell::sync::Lazy;
use prometheus::{
    register_counter_vec_with_registry, register_histogram_with_registry, CounterVec, Histogram,
    Opts, Registry, TextEncoder,
};
use std::sync::Arc;

/// Global metrics registry
pub static METRICS: Lazy<Arc<Metrics>> =
    Lazy::new(|| Arc::new(Metrics::new().expect("Failed to initialize metrics")));

/// Metrics collector
pub struct Metrics {
    registry: Registry,

    // Identify API metrics
    pub identify_requests: CounterVec,
    pub identify_request_duration: Histogram,
}

impl Metrics {
    /// Create a new metrics collector
    pub fn new() -> Result<Self, Box<dyn std::error::Error>> {
        let registry = Registry::new();

        let identify_requests = register_counter_vec_with_registry!(
            Opts::new("identify_requests_total", "Total part identification requests"),
            &["status"],
            registry
        )?;

        let identify_request_duration = register_histogram_with_registry!(
            "identify_request_duration_seconds",
            "Part identification request duration in seconds",
            registry
        )?;

        Ok(Self {
            registry,
            identify_requests,
            identify_request_duration,
        })
    }

    /// Record an identification request outcome
    pub fn record_identify(&self, success: bool) {
        let status = if success { "success" } else { "error" };
        self.identify_requests.with_label_values(&[status]).inc();
    }

    /// Render the registry in Prometheus text exposition format
    pub fn gather(&self) -> String {
        let encoder = TextEncoder::new();
        encoder
            .encode_to_string(&self.registry.gather())
            .unwrap_or_default()
    }
}
