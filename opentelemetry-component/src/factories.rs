//! Lookup tables of registered factories.
use crate::config::Type;
use crate::error::{ComponentError, ComponentResult};
use crate::exporter::factory::ExporterFactory;
use opentelemetry::otel_debug;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::Arc;

/// Indexes exporter factories by their configuration type.
///
/// Fails with [`ComponentError::DuplicateFactory`] if two factories share a
/// type. Factories that support no signal at all are accepted; deciding
/// whether such a factory is usable is left to the pipeline.
pub fn make_exporter_factory_map<I>(
    factories: I,
) -> ComponentResult<HashMap<Type, Arc<dyn ExporterFactory>>>
where
    I: IntoIterator<Item = Arc<dyn ExporterFactory>>,
{
    let mut map = HashMap::new();
    for factory in factories {
        match map.entry(factory.config_type().clone()) {
            Entry::Occupied(entry) => {
                return Err(ComponentError::DuplicateFactory(entry.key().clone()));
            }
            Entry::Vacant(entry) => {
                otel_debug!(
                    name: "ExporterFactoryMap.Registered",
                    exporter_type = factory.config_type().as_str()
                );
                entry.insert(factory);
            }
        }
    }
    Ok(map)
}
