//! Enricher for global fields

use super::{Enricher, PropertyFactory};
use crate::config::Fields;
use crate::event::{LogEvent, LogEventProperty, PropertyValue};

/// Attaches the configured global fields to every event.
///
/// Fields already present on the event win. Custom fields with blank names
/// are dropped at construction.
#[derive(Debug, Clone, Default)]
pub struct FieldsEnricher {
    properties: Vec<LogEventProperty>,
}

impl FieldsEnricher {
    /// Create an enricher from global fields configuration
    #[must_use]
    pub fn new(fields: &Fields) -> Self {
        let named = [
            ("service", &fields.service),
            ("env", &fields.env),
            ("version", &fields.version),
            ("instance", &fields.instance),
            ("region", &fields.region),
        ];

        let mut properties: Vec<LogEventProperty> = named
            .into_iter()
            .filter_map(|(name, value)| {
                value
                    .as_deref()
                    .map(|v| LogEventProperty::new(name, v))
            })
            .collect();

        properties.extend(fields.custom.iter().filter_map(|(name, value)| {
            LogEventProperty::try_new(name.as_str(), PropertyValue::from(value.clone())).ok()
        }));

        Self { properties }
    }

    /// Check whether there is anything to attach
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

impl Enricher for FieldsEnricher {
    fn enrich(&self, event: &mut LogEvent, factory: &dyn PropertyFactory) {
        for property in &self.properties {
            event.add_property_if_absent(
                factory.create_property(property.name(), property.value().clone()),
            );
        }
    }

    fn name(&self) -> &'static str {
        "fields"
    }
}
