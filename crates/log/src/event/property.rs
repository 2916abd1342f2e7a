//! Named log event properties

use super::PropertyValue;
use crate::core::{LogError, LogResult};

/// A single named value attached to a log event
#[derive(Debug, Clone, PartialEq)]
pub struct LogEventProperty {
    name: String,
    value: PropertyValue,
}

impl LogEventProperty {
    /// Create a property without validating its name
    pub fn new(name: impl Into<String>, value: impl Into<PropertyValue>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Create a property, rejecting empty or whitespace-only names
    pub fn try_new(name: impl Into<String>, value: impl Into<PropertyValue>) -> LogResult<Self> {
        let name = name.into();
        if !Self::is_valid_name(&name) {
            return Err(LogError::Config(format!("Invalid property name: '{name}'")));
        }
        Ok(Self::new(name, value))
    }

    /// Property names must contain at least one non-whitespace character
    #[inline]
    #[must_use]
    pub fn is_valid_name(name: &str) -> bool {
        !name.trim().is_empty()
    }

    /// Property name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Property value
    #[must_use]
    pub fn value(&self) -> &PropertyValue {
        &self.value
    }

    /// Split into name and value
    #[must_use]
    pub fn into_parts(self) -> (String, PropertyValue) {
        (self.name, self.value)
    }
}
