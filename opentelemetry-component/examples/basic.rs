//! run with `$ cargo run --example basic`
//!
//! Registers a small stdout exporter factory, then wires it the way a pipeline
//! would: look the factory up by configured type, create its default
//! configuration and build one exporter per supported signal.

use async_trait::async_trait;
use opentelemetry_component::consumer::{Consumer, LogsConsumer, TracesConsumer};
use opentelemetry_component::exporter::factory::{with_logs_exporter, with_traces_exporter};
use opentelemetry_component::exporter::{ExporterCreateSettings, LogsExporter, TracesExporter};
use opentelemetry_component::{
    make_exporter_factory_map, new_exporter_factory, Component, ComponentError, ComponentResult,
    DataType, ExporterConfig, ExporterFactory, StabilityLevel, Type,
};
use opentelemetry_sdk::error::OTelSdkResult;
use opentelemetry_sdk::logs::LogBatch;
use opentelemetry_sdk::trace::SpanData;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::filter::LevelFilter;

#[derive(Debug, Clone)]
struct StdoutConfig {
    pretty: bool,
}

impl ExporterConfig for StdoutConfig {}

#[derive(Debug)]
struct StdoutExporter {
    pretty: bool,
}

#[async_trait]
impl Component for StdoutExporter {
    async fn start(&self, _cancellation: &CancellationToken) -> OTelSdkResult {
        println!("stdout exporter started (pretty = {})", self.pretty);
        Ok(())
    }
}

impl Consumer for StdoutExporter {}

#[async_trait]
impl TracesConsumer for StdoutExporter {
    async fn consume_traces(&self, batch: Vec<SpanData>) -> OTelSdkResult {
        println!("received {} spans", batch.len());
        Ok(())
    }
}

#[async_trait]
impl LogsConsumer for StdoutExporter {
    async fn consume_logs(&self, batch: LogBatch<'_>) -> OTelSdkResult {
        println!("received {} log records", batch.iter().count());
        Ok(())
    }
}

fn stdout_exporter(config: &dyn ExporterConfig) -> ComponentResult<StdoutExporter> {
    let config = config
        .downcast_ref::<StdoutConfig>()
        .ok_or_else(|| ComponentError::InvalidConfig("expected a stdout config".into()))?;
    Ok(StdoutExporter {
        pretty: config.pretty,
    })
}

fn stdout_factory() -> ComponentResult<Arc<dyn ExporterFactory>> {
    Ok(new_exporter_factory(
        Type::new("stdout")?,
        || Box::new(StdoutConfig { pretty: true }),
        [
            with_traces_exporter(
                |_: &CancellationToken, _: &ExporterCreateSettings, config: &dyn ExporterConfig| {
                    Ok(Box::new(stdout_exporter(config)?) as Box<dyn TracesExporter>)
                },
                StabilityLevel::Stable,
            ),
            with_logs_exporter(
                |_: &CancellationToken, _: &ExporterCreateSettings, config: &dyn ExporterConfig| {
                    Ok(Box::new(stdout_exporter(config)?) as Box<dyn LogsExporter>)
                },
                StabilityLevel::Development,
            ),
        ],
    ))
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Show the factory's own debug events.
    tracing_subscriber::fmt()
        .with_max_level(LevelFilter::DEBUG)
        .init();

    let factories = make_exporter_factory_map([stdout_factory()?])?;
    let factory = &factories[&"stdout".parse::<Type>()?];

    for data_type in DataType::ALL {
        let level = factory.stability(data_type);
        println!("{data_type}: {level} ({})", level.log_message());
    }

    let cancellation = CancellationToken::new();
    let settings = ExporterCreateSettings::default();
    let config = factory.create_default_config();

    let traces = factory.create_traces_exporter(&cancellation, &settings, config.as_ref())?;
    traces.start(&cancellation).await?;
    traces.consume_traces(Vec::new()).await?;
    traces.shutdown().await?;

    let logs = factory.create_logs_exporter(&cancellation, &settings, config.as_ref())?;
    logs.consume_logs(LogBatch::new(&[])).await?;
    logs.shutdown().await?;

    match factory.create_metrics_exporter(&cancellation, &settings, config.as_ref()) {
        Err(ComponentError::DataTypeNotSupported) => println!("metrics: not supported"),
        Err(err) => return Err(err.into()),
        Ok(_) => println!("metrics: unexpectedly supported"),
    }

    cancellation.cancel();
    Ok(())
}
