//! The base component contract and the context handed to component
//! constructors.
use crate::config::Type;
use async_trait::async_trait;
use opentelemetry::global::{self, BoxedTracer, GlobalTracerProvider};
use opentelemetry::metrics::{Meter, MeterProvider};
use opentelemetry::trace::TracerProvider as _;
use opentelemetry::InstrumentationScope;
use opentelemetry_sdk::error::OTelSdkResult;
use opentelemetry_sdk::Resource;
use std::fmt;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

/// Lifecycle shared by every pipeline component.
///
/// Both methods default to doing nothing, which suits components without
/// background work.
#[async_trait]
pub trait Component: Send + Sync + fmt::Debug {
    /// Starts the component. Long running work spawned here should stop once
    /// `cancellation` is cancelled.
    async fn start(&self, _cancellation: &CancellationToken) -> OTelSdkResult {
        Ok(())
    }

    /// Stops the component and releases its resources.
    async fn shutdown(&self) -> OTelSdkResult {
        Ok(())
    }
}

pub(crate) mod private {
    /// Restricts [`Factory`](super::Factory) implementations to this crate.
    #[allow(unreachable_pub)]
    pub trait Sealed {}
}

/// Behavior shared by all component factories.
///
/// This trait is sealed: factories are obtained from the constructors in this
/// crate, such as [`new_exporter_factory`](crate::new_exporter_factory).
pub trait Factory: private::Sealed + Send + Sync + fmt::Debug {
    /// The configuration type this factory builds components for.
    fn config_type(&self) -> &Type;
}

/// Build metadata of the running binary.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BuildInfo {
    /// Executable name, e.g. `otelcol`.
    pub command: String,
    /// Full name of the distribution.
    pub description: String,
    /// Version string of the distribution.
    pub version: String,
}

impl Default for BuildInfo {
    fn default() -> Self {
        BuildInfo {
            command: "otelcol".into(),
            description: "OpenTelemetry Collector".into(),
            version: "latest".into(),
        }
    }
}

/// Telemetry plumbing a component uses to report on itself.
#[derive(Clone)]
pub struct TelemetrySettings {
    /// Provider for the component's own spans.
    pub tracer_provider: GlobalTracerProvider,
    /// Provider for the component's own metrics.
    pub meter_provider: Arc<dyn MeterProvider + Send + Sync>,
    /// Resource describing the process hosting the component.
    pub resource: Resource,
}

impl TelemetrySettings {
    /// Returns a tracer scoped to the component.
    pub fn tracer(&self, scope: InstrumentationScope) -> BoxedTracer {
        self.tracer_provider.tracer_with_scope(scope)
    }

    /// Returns a meter scoped to the component.
    pub fn meter(&self, scope: InstrumentationScope) -> Meter {
        self.meter_provider.meter_with_scope(scope)
    }
}

impl Default for TelemetrySettings {
    /// Uses the globally registered providers and an empty resource.
    fn default() -> Self {
        TelemetrySettings {
            tracer_provider: global::tracer_provider(),
            meter_provider: global::meter_provider(),
            resource: Resource::builder_empty().build(),
        }
    }
}

impl fmt::Debug for TelemetrySettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TelemetrySettings")
            .field("resource", &self.resource)
            .finish_non_exhaustive()
    }
}
