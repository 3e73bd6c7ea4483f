//! Data-consumption contracts, one per telemetry signal.
//!
//! Payloads use the `opentelemetry_sdk` data model, the same types the SDK
//! hands to its own exporters.
use async_trait::async_trait;
use opentelemetry_sdk::error::OTelSdkResult;
use opentelemetry_sdk::logs::LogBatch;
use opentelemetry_sdk::metrics::data::ResourceMetrics;
use opentelemetry_sdk::trace::SpanData;

/// What a consumer does with the data it receives.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Capabilities {
    /// Set when the consumer modifies the data handed to it, so upstream
    /// fan-out knows to give it its own copy.
    pub mutates_data: bool,
}

/// Base of the signal-specific consumer traits.
pub trait Consumer: Send + Sync {
    /// Defaults to a consumer that leaves data untouched.
    fn capabilities(&self) -> Capabilities {
        Capabilities::default()
    }
}

/// Consumes batches of spans.
#[async_trait]
pub trait TracesConsumer: Consumer {
    /// Receives one batch of finished spans.
    async fn consume_traces(&self, batch: Vec<SpanData>) -> OTelSdkResult;
}

/// Consumes collected metrics.
#[async_trait]
pub trait MetricsConsumer: Consumer {
    /// Receives the metrics of one collection cycle.
    async fn consume_metrics(&self, metrics: &ResourceMetrics) -> OTelSdkResult;
}

/// Consumes batches of log records.
#[async_trait]
pub trait LogsConsumer: Consumer {
    /// Receives one batch of log records with their instrumentation scopes.
    async fn consume_logs(&self, batch: LogBatch<'_>) -> OTelSdkResult;
}
