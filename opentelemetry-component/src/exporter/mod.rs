//! # Exporters
//!
//! An exporter delivers telemetry from the pipeline to an external
//! destination. The capability traits here compose the base [`Component`]
//! contract with one consumer trait each:
//!
//! * [`TracesExporter`] is an [`Exporter`] that is a [`TracesConsumer`].
//! * [`MetricsExporter`] is an [`Exporter`] that is a [`MetricsConsumer`].
//! * [`LogsExporter`] is an [`Exporter`] that is a [`LogsConsumer`].
//!
//! All of them are implemented automatically: a type that implements
//! [`Component`] and a consumer trait is the matching exporter. Which
//! capabilities are offered to a pipeline is decided by the
//! [`ExporterFactory`](factory::ExporterFactory), not by the type.
use crate::component::{BuildInfo, Component, TelemetrySettings};
use crate::consumer::{LogsConsumer, MetricsConsumer, TracesConsumer};

pub mod factory;

/// A component exporting telemetry out of the pipeline.
pub trait Exporter: Component {}

impl<T: Component + ?Sized> Exporter for T {}

/// An [`Exporter`] that can consume traces.
pub trait TracesExporter: Exporter + TracesConsumer {}

impl<T: Exporter + TracesConsumer + ?Sized> TracesExporter for T {}

/// An [`Exporter`] that can consume metrics.
pub trait MetricsExporter: Exporter + MetricsConsumer {}

impl<T: Exporter + MetricsConsumer + ?Sized> MetricsExporter for T {}

/// An [`Exporter`] that can consume logs.
pub trait LogsExporter: Exporter + LogsConsumer {}

impl<T: Exporter + LogsConsumer + ?Sized> LogsExporter for T {}

/// Context passed, unchanged, to every exporter constructor call.
#[derive(Clone, Debug, Default)]
pub struct ExporterCreateSettings {
    /// Telemetry plumbing for the exporter's own logs, spans and metrics.
    pub telemetry: TelemetrySettings,

    /// Build metadata, for informational purposes.
    pub build_info: BuildInfo,
}
