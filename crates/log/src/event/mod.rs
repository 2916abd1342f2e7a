//! Log event model
//!
//! A [`LogEvent`] is one structured record: timestamp, level, target, the
//! rendered message and an ordered set of named [`PropertyValue`]s.
//! Enrichers receive `&mut LogEvent` and may only add properties through
//! [`LogEvent::add_property_if_absent`] or [`LogEvent::add_or_update_property`].

mod property;
mod value;

pub use property::LogEventProperty;
pub use value::{PropertyValue, ScalarValue, StructureValue};

use indexmap::IndexMap;
use time::OffsetDateTime;

use crate::config::Level;

/// Ordered mapping from property name to value
pub type Properties = IndexMap<String, PropertyValue>;

/// One structured log record
#[derive(Debug, Clone, PartialEq)]
pub struct LogEvent {
    timestamp: OffsetDateTime,
    level: Level,
    target: String,
    message: String,
    properties: Properties,
}

impl LogEvent {
    /// Create an event stamped with the current UTC time
    pub fn new(level: Level, message: impl Into<String>) -> Self {
        Self {
            timestamp: OffsetDateTime::now_utc(),
            level,
            target: String::new(),
            message: message.into(),
            properties: Properties::new(),
        }
    }

    /// Set the target (module path or logger name)
    #[must_use]
    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = target.into();
        self
    }

    /// Override the timestamp
    #[must_use]
    pub fn with_timestamp(mut self, timestamp: OffsetDateTime) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// Add or replace a property
    #[must_use]
    pub fn with_property(mut self, name: impl Into<String>, value: impl Into<PropertyValue>) -> Self {
        self.properties.insert(name.into(), value.into());
        self
    }

    /// When the event occurred
    #[must_use]
    pub fn timestamp(&self) -> OffsetDateTime {
        self.timestamp
    }

    /// Event level
    #[must_use]
    pub fn level(&self) -> Level {
        self.level
    }

    /// Event target
    #[must_use]
    pub fn target(&self) -> &str {
        &self.target
    }

    /// Rendered message
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// All properties in insertion order
    #[must_use]
    pub fn properties(&self) -> &Properties {
        &self.properties
    }

    /// Look up a property by name
    #[must_use]
    pub fn property(&self, name: &str) -> Option<&PropertyValue> {
        self.properties.get(name)
    }

    /// Check whether a property with this name exists
    #[must_use]
    pub fn contains_property(&self, name: &str) -> bool {
        self.properties.contains_key(name)
    }

    /// Add the property unless one with the same name already exists.
    ///
    /// Returns `true` if the property was added. An existing value is never
    /// touched.
    pub fn add_property_if_absent(&mut self, property: LogEventProperty) -> bool {
        if self.properties.contains_key(property.name()) {
            return false;
        }
        let (name, value) = property.into_parts();
        self.properties.insert(name, value);
        true
    }

    /// Add the property, replacing any existing value in place
    pub fn add_or_update_property(&mut self, property: LogEventProperty) {
        let (name, value) = property.into_parts();
        self.properties.insert(name, value);
    }

    /// Remove a property, keeping the order of the remaining ones
    pub fn remove_property(&mut self, name: &str) -> Option<PropertyValue> {
        self.properties.shift_remove(name)
    }
}
