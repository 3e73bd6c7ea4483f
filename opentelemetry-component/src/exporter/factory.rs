//! Exporter factories.
//!
//! A factory is assembled once per exporter type from a configuration
//! [`Type`], a default configuration constructor and a list of
//! [`ExporterFactoryOption`]s. Each option registers the constructor for one
//! telemetry signal together with its [`StabilityLevel`]. Signals without an
//! option stay unsupported: their constructor fails with
//! [`ComponentError::DataTypeNotSupported`] and their stability is
//! [`StabilityLevel::Undefined`].
//!
//! ```
//! use opentelemetry_component::exporter::factory::{
//!     with_logs_exporter, with_traces_exporter, ExporterFactoryBuilder,
//! };
//! use opentelemetry_component::exporter::{ExporterCreateSettings, LogsExporter, TracesExporter};
//! use opentelemetry_component::{ComponentResult, ExporterConfig, StabilityLevel, Type};
//! use tokio_util::sync::CancellationToken;
//!
//! #[derive(Debug, Default)]
//! struct FileConfig {
//!     path: String,
//! }
//!
//! impl ExporterConfig for FileConfig {}
//!
//! fn create_traces(
//!     _: &CancellationToken,
//!     _: &ExporterCreateSettings,
//!     _: &dyn ExporterConfig,
//! ) -> ComponentResult<Box<dyn TracesExporter>> {
//!     Err("not wired in this example".into())
//! }
//!
//! fn create_logs(
//!     _: &CancellationToken,
//!     _: &ExporterCreateSettings,
//!     _: &dyn ExporterConfig,
//! ) -> ComponentResult<Box<dyn LogsExporter>> {
//!     Err("not wired in this example".into())
//! }
//!
//! let factory = ExporterFactoryBuilder::new(Type::new("file").unwrap(), || {
//!     Box::new(FileConfig::default())
//! })
//! .with_option(with_traces_exporter(create_traces, StabilityLevel::Alpha))
//! .with_logs_exporter(create_logs, StabilityLevel::Development)
//! .build();
//!
//! assert_eq!(factory.config_type().as_str(), "file");
//! assert_eq!(factory.logs_exporter_stability(), StabilityLevel::Development);
//! ```
use crate::component::{private, Factory};
use crate::config::{DataType, ExporterConfig, Type};
use crate::error::{ComponentError, ComponentResult};
use crate::exporter::{ExporterCreateSettings, LogsExporter, MetricsExporter, TracesExporter};
use crate::stability::StabilityLevel;
use opentelemetry::otel_debug;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

/// Builds the default configuration of an exporter type.
///
/// Every call must return a new, independent configuration.
pub type CreateDefaultConfigFunc = Arc<dyn Fn() -> Box<dyn ExporterConfig> + Send + Sync>;

/// Builds a [`TracesExporter`] from a configuration.
pub type CreateTracesExporterFunc = Arc<
    dyn Fn(
            &CancellationToken,
            &ExporterCreateSettings,
            &dyn ExporterConfig,
        ) -> ComponentResult<Box<dyn TracesExporter>>
        + Send
        + Sync,
>;

/// Builds a [`MetricsExporter`] from a configuration.
pub type CreateMetricsExporterFunc = Arc<
    dyn Fn(
            &CancellationToken,
            &ExporterCreateSettings,
            &dyn ExporterConfig,
        ) -> ComponentResult<Box<dyn MetricsExporter>>
        + Send
        + Sync,
>;

/// Builds a [`LogsExporter`] from a configuration.
pub type CreateLogsExporterFunc = Arc<
    dyn Fn(
            &CancellationToken,
            &ExporterCreateSettings,
            &dyn ExporterConfig,
        ) -> ComponentResult<Box<dyn LogsExporter>>
        + Send
        + Sync,
>;

/// Factory for exporters of one configuration type.
///
/// This trait is sealed. Use [`new_exporter_factory`] or
/// [`ExporterFactoryBuilder`] to obtain one.
pub trait ExporterFactory: Factory {
    /// Creates the default configuration for the exporter.
    ///
    /// May be called any number of times, e.g. once per pipeline, and never
    /// returns two configurations sharing mutable state.
    fn create_default_config(&self) -> Box<dyn ExporterConfig>;

    /// Creates a [`TracesExporter`] from `config`.
    ///
    /// Fails with [`ComponentError::DataTypeNotSupported`] if the factory has
    /// no traces constructor. Otherwise returns whatever the registered
    /// constructor returns.
    fn create_traces_exporter(
        &self,
        cancellation: &CancellationToken,
        settings: &ExporterCreateSettings,
        config: &dyn ExporterConfig,
    ) -> ComponentResult<Box<dyn TracesExporter>>;

    /// Stability of the traces exporter, [`StabilityLevel::Undefined`] when
    /// traces are not supported.
    fn traces_exporter_stability(&self) -> StabilityLevel {
        self.stability(DataType::Traces)
    }

    /// Creates a [`MetricsExporter`] from `config`.
    ///
    /// Fails with [`ComponentError::DataTypeNotSupported`] if the factory has
    /// no metrics constructor. Otherwise returns whatever the registered
    /// constructor returns.
    fn create_metrics_exporter(
        &self,
        cancellation: &CancellationToken,
        settings: &ExporterCreateSettings,
        config: &dyn ExporterConfig,
    ) -> ComponentResult<Box<dyn MetricsExporter>>;

    /// Stability of the metrics exporter, [`StabilityLevel::Undefined`] when
    /// metrics are not supported.
    fn metrics_exporter_stability(&self) -> StabilityLevel {
        self.stability(DataType::Metrics)
    }

    /// Creates a [`LogsExporter`] from `config`.
    ///
    /// Fails with [`ComponentError::DataTypeNotSupported`] if the factory has
    /// no logs constructor. Otherwise returns whatever the registered
    /// constructor returns.
    fn create_logs_exporter(
        &self,
        cancellation: &CancellationToken,
        settings: &ExporterCreateSettings,
        config: &dyn ExporterConfig,
    ) -> ComponentResult<Box<dyn LogsExporter>>;

    /// Stability of the logs exporter, [`StabilityLevel::Undefined`] when logs
    /// are not supported.
    fn logs_exporter_stability(&self) -> StabilityLevel {
        self.stability(DataType::Logs)
    }

    /// Stability declared for `data_type`, [`StabilityLevel::Undefined`] when
    /// it is not supported.
    fn stability(&self, data_type: DataType) -> StabilityLevel;
}

/// A directive applied while an exporter factory is assembled.
///
/// Options are applied in the order they are given. Created by
/// [`with_traces_exporter`], [`with_metrics_exporter`] and
/// [`with_logs_exporter`].
pub struct ExporterFactoryOption(Box<dyn FnOnce(&mut SdkExporterFactory) + Send>);

impl ExporterFactoryOption {
    fn apply(self, factory: &mut SdkExporterFactory) {
        (self.0)(factory)
    }
}

impl fmt::Debug for ExporterFactoryOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ExporterFactoryOption")
    }
}

/// Registers `create` as the traces constructor, with stability `level`.
///
/// Replaces any traces constructor and stability set by an earlier option.
pub fn with_traces_exporter<F>(create: F, level: StabilityLevel) -> ExporterFactoryOption
where
    F: Fn(
            &CancellationToken,
            &ExporterCreateSettings,
            &dyn ExporterConfig,
        ) -> ComponentResult<Box<dyn TracesExporter>>
        + Send
        + Sync
        + 'static,
{
    let create: CreateTracesExporterFunc = Arc::new(create);
    ExporterFactoryOption(Box::new(move |factory: &mut SdkExporterFactory| {
        let replaced = factory.create_traces.replace(create).is_some();
        factory.install(DataType::Traces, level, replaced);
    }))
}

/// Registers `create` as the metrics constructor, with stability `level`.
///
/// Replaces any metrics constructor and stability set by an earlier option.
pub fn with_metrics_exporter<F>(create: F, level: StabilityLevel) -> ExporterFactoryOption
where
    F: Fn(
            &CancellationToken,
            &ExporterCreateSettings,
            &dyn ExporterConfig,
        ) -> ComponentResult<Box<dyn MetricsExporter>>
        + Send
        + Sync
        + 'static,
{
    let create: CreateMetricsExporterFunc = Arc::new(create);
    ExporterFactoryOption(Box::new(move |factory: &mut SdkExporterFactory| {
        let replaced = factory.create_metrics.replace(create).is_some();
        factory.install(DataType::Metrics, level, replaced);
    }))
}

/// Registers `create` as the logs constructor, with stability `level`.
///
/// Replaces any logs constructor and stability set by an earlier option.
pub fn with_logs_exporter<F>(create: F, level: StabilityLevel) -> ExporterFactoryOption
where
    F: Fn(
            &CancellationToken,
            &ExporterCreateSettings,
            &dyn ExporterConfig,
        ) -> ComponentResult<Box<dyn LogsExporter>>
        + Send
        + Sync
        + 'static,
{
    let create: CreateLogsExporterFunc = Arc::new(create);
    ExporterFactoryOption(Box::new(move |factory: &mut SdkExporterFactory| {
        let replaced = factory.create_logs.replace(create).is_some();
        factory.install(DataType::Logs, level, replaced);
    }))
}

/// Assembles an exporter factory.
///
/// `create_default_config` is mandatory; `options` are applied in order and
/// the last option for a signal wins. The returned factory is immutable and
/// can be shared freely between threads.
pub fn new_exporter_factory<F, I>(
    cfg_type: Type,
    create_default_config: F,
    options: I,
) -> Arc<dyn ExporterFactory>
where
    F: Fn() -> Box<dyn ExporterConfig> + Send + Sync + 'static,
    I: IntoIterator<Item = ExporterFactoryOption>,
{
    ExporterFactoryBuilder::new(cfg_type, create_default_config)
        .with_options(options)
        .build()
}

/// Step-by-step assembly of an exporter factory.
///
/// Each option is applied as soon as it is added. [`build`](Self::build)
/// consumes the builder, after which the factory can no longer change.
#[derive(Debug)]
pub struct ExporterFactoryBuilder {
    factory: SdkExporterFactory,
}

impl ExporterFactoryBuilder {
    /// Starts a factory for `cfg_type` with no supported signals.
    pub fn new<F>(cfg_type: Type, create_default_config: F) -> Self
    where
        F: Fn() -> Box<dyn ExporterConfig> + Send + Sync + 'static,
    {
        ExporterFactoryBuilder {
            factory: SdkExporterFactory {
                cfg_type,
                stability: HashMap::new(),
                create_default_config: Arc::new(create_default_config),
                create_traces: None,
                create_metrics: None,
                create_logs: None,
            },
        }
    }

    /// Applies `option`.
    pub fn with_option(mut self, option: ExporterFactoryOption) -> Self {
        option.apply(&mut self.factory);
        self
    }

    /// Applies every option in `options`, in order.
    pub fn with_options<I>(self, options: I) -> Self
    where
        I: IntoIterator<Item = ExporterFactoryOption>,
    {
        options
            .into_iter()
            .fold(self, |builder, option| builder.with_option(option))
    }

    /// Shorthand for `with_option(with_traces_exporter(create, level))`.
    pub fn with_traces_exporter<F>(self, create: F, level: StabilityLevel) -> Self
    where
        F: Fn(
                &CancellationToken,
                &ExporterCreateSettings,
                &dyn ExporterConfig,
            ) -> ComponentResult<Box<dyn TracesExporter>>
            + Send
            + Sync
            + 'static,
    {
        self.with_option(with_traces_exporter(create, level))
    }

    /// Shorthand for `with_option(with_metrics_exporter(create, level))`.
    pub fn with_metrics_exporter<F>(self, create: F, level: StabilityLevel) -> Self
    where
        F: Fn(
                &CancellationToken,
                &ExporterCreateSettings,
                &dyn ExporterConfig,
            ) -> ComponentResult<Box<dyn MetricsExporter>>
            + Send
            + Sync
            + 'static,
    {
        self.with_option(with_metrics_exporter(create, level))
    }

    /// Shorthand for `with_option(with_logs_exporter(create, level))`.
    pub fn with_logs_exporter<F>(self, create: F, level: StabilityLevel) -> Self
    where
        F: Fn(
                &CancellationToken,
                &ExporterCreateSettings,
                &dyn ExporterConfig,
            ) -> ComponentResult<Box<dyn LogsExporter>>
            + Send
            + Sync
            + 'static,
    {
        self.with_option(with_logs_exporter(create, level))
    }

    /// Freezes the factory.
    pub fn build(self) -> Arc<dyn ExporterFactory> {
        let factory = self.factory;
        otel_debug!(
            name: "ExporterFactory.Built",
            exporter_type = factory.cfg_type.as_str(),
            traces = factory.stability(DataType::Traces).as_str(),
            metrics = factory.stability(DataType::Metrics).as_str(),
            logs = factory.stability(DataType::Logs).as_str()
        );
        Arc::new(factory)
    }
}

/// The only [`ExporterFactory`] implementation.
pub(crate) struct SdkExporterFactory {
    cfg_type: Type,
    stability: HashMap<DataType, StabilityLevel>,
    create_default_config: CreateDefaultConfigFunc,
    create_traces: Option<CreateTracesExporterFunc>,
    create_metrics: Option<CreateMetricsExporterFunc>,
    create_logs: Option<CreateLogsExporterFunc>,
}

impl SdkExporterFactory {
    /// Records the stability of a signal whose constructor was just set.
    fn install(&mut self, data_type: DataType, level: StabilityLevel, replaced: bool) {
        if replaced {
            otel_debug!(
                name: "ExporterFactory.ConstructorReplaced",
                exporter_type = self.cfg_type.as_str(),
                data_type = data_type.as_str(),
                stability = level.as_str()
            );
        }
        self.stability.insert(data_type, level);
    }

    fn has_constructor(&self, data_type: DataType) -> bool {
        match data_type {
            DataType::Traces => self.create_traces.is_some(),
            DataType::Metrics => self.create_metrics.is_some(),
            DataType::Logs => self.create_logs.is_some(),
        }
    }

    fn not_supported<T>(&self, data_type: DataType) -> ComponentResult<T> {
        otel_debug!(
            name: "ExporterFactory.DataTypeNotSupported",
            exporter_type = self.cfg_type.as_str(),
            data_type = data_type.as_str()
        );
        Err(ComponentError::DataTypeNotSupported)
    }
}

impl private::Sealed for SdkExporterFactory {}

impl Factory for SdkExporterFactory {
    fn config_type(&self) -> &Type {
        &self.cfg_type
    }
}

impl ExporterFactory for SdkExporterFactory {
    fn create_default_config(&self) -> Box<dyn ExporterConfig> {
        (self.create_default_config)()
    }

    fn create_traces_exporter(
        &self,
        cancellation: &CancellationToken,
        settings: &ExporterCreateSettings,
        config: &dyn ExporterConfig,
    ) -> ComponentResult<Box<dyn TracesExporter>> {
        match &self.create_traces {
            Some(create) => create(cancellation, settings, config),
            None => self.not_supported(DataType::Traces),
        }
    }

    fn create_metrics_exporter(
        &self,
        cancellation: &CancellationToken,
        settings: &ExporterCreateSettings,
        config: &dyn ExporterConfig,
    ) -> ComponentResult<Box<dyn MetricsExporter>> {
        match &self.create_metrics {
            Some(create) => create(cancellation, settings, config),
            None => self.not_supported(DataType::Metrics),
        }
    }

    fn create_logs_exporter(
        &self,
        cancellation: &CancellationToken,
        settings: &ExporterCreateSettings,
        config: &dyn ExporterConfig,
    ) -> ComponentResult<Box<dyn LogsExporter>> {
        match &self.create_logs {
            Some(create) => create(cancellation, settings, config),
            None => self.not_supported(DataType::Logs),
        }
    }

    fn stability(&self, data_type: DataType) -> StabilityLevel {
        if !self.has_constructor(data_type) {
            return StabilityLevel::Undefined;
        }
        self.stability
            .get(&data_type)
            .copied()
            .unwrap_or_default()
    }
}

impl fmt::Debug for SdkExporterFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExporterFactory")
            .field("cfg_type", &self.cfg_type)
            .field("stability", &self.stability)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::Component;
    use crate::consumer::{Consumer, MetricsConsumer, TracesConsumer};
    use async_trait::async_trait;
    use opentelemetry_sdk::error::OTelSdkResult;
    use opentelemetry_sdk::metrics::data::ResourceMetrics;
    use opentelemetry_sdk::trace::SpanData;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    #[derive(Debug, Clone, PartialEq)]
    struct TestConfig {
        endpoints: Vec<String>,
    }

    impl ExporterConfig for TestConfig {}

    fn default_config() -> Box<dyn ExporterConfig> {
        Box::new(TestConfig {
            endpoints: vec!["localhost:4317".to_string()],
        })
    }

    #[derive(Debug)]
    struct TestExporter {
        name: &'static str,
    }

    impl Component for TestExporter {}
    impl Consumer for TestExporter {}

    #[async_trait]
    impl TracesConsumer for TestExporter {
        async fn consume_traces(&self, _batch: Vec<SpanData>) -> OTelSdkResult {
            Ok(())
        }
    }

    #[async_trait]
    impl MetricsConsumer for TestExporter {
        async fn consume_metrics(&self, _metrics: &ResourceMetrics) -> OTelSdkResult {
            Ok(())
        }
    }

    fn traces_named(
        name: &'static str,
    ) -> impl Fn(
        &CancellationToken,
        &ExporterCreateSettings,
        &dyn ExporterConfig,
    ) -> ComponentResult<Box<dyn TracesExporter>>
           + Send
           + Sync
           + 'static {
        move |_: &CancellationToken, _: &ExporterCreateSettings, _: &dyn ExporterConfig| {
            Ok(Box::new(TestExporter { name }) as Box<dyn TracesExporter>)
        }
    }

    fn test_type() -> Type {
        Type::new("test").unwrap()
    }

    #[test]
    fn no_options_supports_nothing() {
        let factory = new_exporter_factory(test_type(), default_config, []);
        let token = CancellationToken::new();
        let settings = ExporterCreateSettings::default();
        let cfg = factory.create_default_config();

        assert_eq!(factory.config_type(), &test_type());
        assert!(matches!(
            factory.create_traces_exporter(&token, &settings, cfg.as_ref()),
            Err(ComponentError::DataTypeNotSupported)
        ));
        assert!(matches!(
            factory.create_metrics_exporter(&token, &settings, cfg.as_ref()),
            Err(ComponentError::DataTypeNotSupported)
        ));
        assert!(matches!(
            factory.create_logs_exporter(&token, &settings, cfg.as_ref()),
            Err(ComponentError::DataTypeNotSupported)
        ));
        assert_eq!(factory.traces_exporter_stability(), StabilityLevel::Undefined);
        assert_eq!(factory.metrics_exporter_stability(), StabilityLevel::Undefined);
        assert_eq!(factory.logs_exporter_stability(), StabilityLevel::Undefined);
    }

    #[test]
    fn default_config_instances_are_independent() {
        let factory = new_exporter_factory(test_type(), default_config, []);
        let first = factory.create_default_config();
        let mut second = factory.create_default_config();

        second
            .downcast_mut::<TestConfig>()
            .unwrap()
            .endpoints
            .push("collector:4317".into());

        assert_eq!(
            first.downcast_ref::<TestConfig>().unwrap().endpoints,
            vec!["localhost:4317".to_string()]
        );
        assert_eq!(
            second.downcast_ref::<TestConfig>().unwrap().endpoints.len(),
            2
        );
    }

    #[test]
    fn traces_option_delegates_arguments() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let recorder = Arc::clone(&seen);
        let factory = new_exporter_factory(
            test_type(),
            default_config,
            [with_traces_exporter(
                move |token: &CancellationToken,
                      settings: &ExporterCreateSettings,
                      cfg: &dyn ExporterConfig| {
                    recorder.lock().unwrap().push((
                        token.is_cancelled(),
                        settings.build_info.version.clone(),
                        cfg.downcast_ref::<TestConfig>().cloned(),
                    ));
                    Ok(Box::new(TestExporter { name: "traces" }) as Box<dyn TracesExporter>)
                },
                StabilityLevel::Beta,
            )],
        );

        let token = CancellationToken::new();
        token.cancel();
        let mut settings = ExporterCreateSettings::default();
        settings.build_info.version = "1.2.3".into();
        let cfg = TestConfig {
            endpoints: vec!["a:1".into()],
        };

        let exporter = factory
            .create_traces_exporter(&token, &settings, &cfg)
            .unwrap();
        assert_eq!(format!("{exporter:?}"), "TestExporter { name: \"traces\" }");
        assert_eq!(factory.traces_exporter_stability(), StabilityLevel::Beta);
        assert_eq!(
            *seen.lock().unwrap(),
            vec![(true, "1.2.3".to_string(), Some(cfg.clone()))]
        );
    }

    #[test]
    fn constructor_errors_pass_through() {
        let factory = new_exporter_factory(
            test_type(),
            default_config,
            [with_metrics_exporter(
                |_: &CancellationToken, _: &ExporterCreateSettings, _: &dyn ExporterConfig| {
                    Err(ComponentError::InvalidConfig("no endpoint".into()))
                },
                StabilityLevel::Alpha,
            )],
        );

        let err = factory
            .create_metrics_exporter(
                &CancellationToken::new(),
                &ExporterCreateSettings::default(),
                factory.create_default_config().as_ref(),
            )
            .unwrap_err();
        assert!(matches!(err, ComponentError::InvalidConfig(msg) if msg == "no endpoint"));
        assert_eq!(factory.metrics_exporter_stability(), StabilityLevel::Alpha);
    }

    #[test]
    fn unsupported_signal_never_calls_user_code() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let factory = new_exporter_factory(
            test_type(),
            default_config,
            [with_traces_exporter(
                move |_: &CancellationToken, _: &ExporterCreateSettings, _: &dyn ExporterConfig| {
                    counter.fetch_add(1, Ordering::SeqCst);
                    Ok(Box::new(TestExporter { name: "traces" }) as Box<dyn TracesExporter>)
                },
                StabilityLevel::Stable,
            )],
        );

        let result = factory.create_logs_exporter(
            &CancellationToken::new(),
            &ExporterCreateSettings::default(),
            factory.create_default_config().as_ref(),
        );
        assert!(matches!(result, Err(ComponentError::DataTypeNotSupported)));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn last_option_wins_for_both_fields() {
        let factory = new_exporter_factory(
            test_type(),
            default_config,
            [
                with_traces_exporter(traces_named("first"), StabilityLevel::Alpha),
                with_traces_exporter(traces_named("second"), StabilityLevel::Stable),
            ],
        );

        let exporter = factory
            .create_traces_exporter(
                &CancellationToken::new(),
                &ExporterCreateSettings::default(),
                factory.create_default_config().as_ref(),
            )
            .unwrap();
        assert_eq!(format!("{exporter:?}"), "TestExporter { name: \"second\" }");
        assert_eq!(factory.traces_exporter_stability(), StabilityLevel::Stable);
    }

    #[test]
    fn builder_and_options_agree() {
        let from_options = new_exporter_factory(
            test_type(),
            default_config,
            [with_traces_exporter(traces_named("a"), StabilityLevel::Beta)],
        );
        let from_builder = ExporterFactoryBuilder::new(test_type(), default_config)
            .with_traces_exporter(traces_named("a"), StabilityLevel::Beta)
            .build();

        for data_type in DataType::ALL {
            assert_eq!(
                from_options.stability(data_type),
                from_builder.stability(data_type)
            );
        }
    }

    #[test]
    fn stability_by_data_type() {
        let factory = ExporterFactoryBuilder::new(test_type(), default_config)
            .with_traces_exporter(traces_named("t"), StabilityLevel::Deprecated)
            .build();

        assert_eq!(
            factory.stability(DataType::Traces),
            StabilityLevel::Deprecated
        );
        assert_eq!(factory.stability(DataType::Metrics), StabilityLevel::Undefined);
        assert_eq!(factory.stability(DataType::Logs), StabilityLevel::Undefined);
    }

    #[test]
    fn debug_lists_type_and_stability() {
        let factory = ExporterFactoryBuilder::new(test_type(), default_config)
            .with_traces_exporter(traces_named("t"), StabilityLevel::Beta)
            .build();
        let debug = format!("{factory:?}");
        assert!(debug.starts_with("ExporterFactory { cfg_type: \"test\""));
        assert!(debug.contains("Traces: Beta"));
    }
}
