//! Field visitor collecting `tracing` fields into properties

use std::fmt;

use tracing::field::{Field, Visit};

use crate::config::Level;
use crate::event::{LogEvent, Properties, PropertyValue, ScalarValue};

/// Records event fields in declaration order; `message` becomes the
/// rendered message rather than a property.
#[derive(Debug, Default)]
pub(crate) struct PropertyVisitor {
    message: Option<String>,
    properties: Properties,
}

impl PropertyVisitor {
    fn insert(&mut self, field: &Field, value: impl Into<PropertyValue>) {
        self.properties.insert(field.name().to_string(), value.into());
    }

    /// Finish into a log event
    pub(crate) fn into_event(self, level: Level, target: &str) -> LogEvent {
        let mut event = LogEvent::new(level, self.message.unwrap_or_default()).with_target(target);
        for (name, value) in self.properties {
            event = event.with_property(name, value);
        }
        event
    }
}

impl Visit for PropertyVisitor {
    fn record_f64(&mut self, field: &Field, value: f64) {
        self.insert(field, value);
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.insert(field, value);
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        self.insert(field, value);
    }

    fn record_i128(&mut self, field: &Field, value: i128) {
        match i64::try_from(value) {
            Ok(v) => self.insert(field, v),
            Err(_) => self.insert(field, value.to_string()),
        }
    }

    fn record_u128(&mut self, field: &Field, value: u128) {
        match u64::try_from(value) {
            Ok(v) => self.insert(field, v),
            Err(_) => self.insert(field, value.to_string()),
        }
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        self.insert(field, value);
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message = Some(value.to_string());
        } else {
            self.insert(field, value);
        }
    }

    fn record_error(&mut self, field: &Field, value: &(dyn std::error::Error + 'static)) {
        self.insert(field, ScalarValue::Str(value.to_string()));
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.message = Some(format!("{value:?}"));
        } else {
            self.insert(field, format!("{value:?}"));
        }
    }
}
