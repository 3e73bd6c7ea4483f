//! # OpenTelemetry Component
//!
//! Capability-based registration of pluggable exporters for telemetry
//! pipelines.
//!
//! An exporter type registers a single [`ExporterFactory`]. The factory
//! advertises, for each of traces, metrics and logs, whether it can build an
//! exporter for that signal and how mature that support is
//! ([`StabilityLevel`]). Pipeline wiring later asks the factory for a default
//! configuration and for live exporter instances.
//!
//! Factories are assembled once from a configuration type, a default
//! configuration constructor and an ordered list of options, and are
//! immutable afterwards.
//!
//! # Examples
//!
//! ```
//! use opentelemetry_component::config::{ExporterConfig, Type};
//! use opentelemetry_component::exporter::factory::{new_exporter_factory, with_traces_exporter};
//! use opentelemetry_component::exporter::{ExporterCreateSettings, TracesExporter};
//! use opentelemetry_component::{ComponentError, ComponentResult, StabilityLevel};
//! use tokio_util::sync::CancellationToken;
//!
//! #[derive(Debug, Default)]
//! struct OtlpConfig {
//!     endpoint: String,
//! }
//!
//! impl ExporterConfig for OtlpConfig {}
//!
//! fn create_traces(
//!     _cancellation: &CancellationToken,
//!     _settings: &ExporterCreateSettings,
//!     _config: &dyn ExporterConfig,
//! ) -> ComponentResult<Box<dyn TracesExporter>> {
//!     Err(ComponentError::InvalidConfig("endpoint is required".into()))
//! }
//!
//! let factory = new_exporter_factory(
//!     Type::new("otlp").unwrap(),
//!     || Box::new(OtlpConfig::default()),
//!     [with_traces_exporter(create_traces, StabilityLevel::Beta)],
//! );
//!
//! assert_eq!(factory.traces_exporter_stability(), StabilityLevel::Beta);
//! assert_eq!(factory.metrics_exporter_stability(), StabilityLevel::Undefined);
//! ```
#![warn(
    future_incompatible,
    missing_debug_implementations,
    missing_docs,
    nonstandard_style,
    rust_2018_idioms,
    unreachable_pub,
    unused
)]
#![cfg_attr(docsrs, feature(doc_cfg), deny(rustdoc::broken_intra_doc_links))]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/open-telemetry/opentelemetry-rust/main/assets/logo.svg"
)]

pub mod component;
pub mod config;
pub mod consumer;
pub mod error;
pub mod exporter;
pub mod factories;
pub mod stability;

pub use component::{BuildInfo, Component, Factory, TelemetrySettings};
pub use config::{DataType, ExporterConfig, Type};
pub use error::{ComponentError, ComponentResult};
pub use exporter::factory::{
    new_exporter_factory, with_logs_exporter, with_metrics_exporter, with_traces_exporter,
    ExporterFactory, ExporterFactoryBuilder, ExporterFactoryOption,
};
pub use exporter::{
    Exporter, ExporterCreateSettings, LogsExporter, MetricsExporter, TracesExporter,
};
pub use factories::make_exporter_factory_map;
pub use stability::StabilityLevel;
