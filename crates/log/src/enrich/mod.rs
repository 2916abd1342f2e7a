//! Event enrichment
//!
//! An [`Enricher`] runs once per event, synchronously, on the thread that
//! emitted it. Enrichers are shared between threads and must not keep
//! per-event state.
//!
//! # Example
//!
//! ```rust
//! use fieldlog::enrich::{DefaultPropertyFactory, Enricher, MessageFieldsEnricher};
//! use fieldlog::event::LogEvent;
//! use fieldlog::Level;
//!
//! let mut event = LogEvent::new(Level::Info, "User: joegauchoii Context: Development")
//!     .with_property("Username", "joegauchoii")
//!     .with_property("Environment", "Development");
//!
//! MessageFieldsEnricher::new(["Environment"]).enrich(&mut event, &DefaultPropertyFactory);
//!
//! let fields = event.property("MessageFields").and_then(|v| v.as_dictionary()).unwrap();
//! assert_eq!(fields.len(), 1);
//! assert!(fields.contains_key("Username"));
//! ```

mod extensions;
mod fields;
mod message_fields;

pub use extensions::MessageFieldsExt;
pub use fields::FieldsEnricher;
pub use message_fields::MessageFieldsEnricher;

use crate::event::{LogEvent, LogEventProperty, PropertyValue};

/// A pipeline stage that adds properties to events before they are rendered
pub trait Enricher: Send + Sync {
    /// Enrich the event in place
    fn enrich(&self, event: &mut LogEvent, factory: &dyn PropertyFactory);

    /// Name used in diagnostics
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

/// Builds properties on behalf of enrichers
pub trait PropertyFactory {
    /// Create a property from a name and an already-structured value
    fn create_property(&self, name: &str, value: PropertyValue) -> LogEventProperty;
}

/// Factory that wraps the value unchanged
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultPropertyFactory;

impl PropertyFactory for DefaultPropertyFactory {
    fn create_property(&self, name: &str, value: PropertyValue) -> LogEventProperty {
        LogEventProperty::new(name, value)
    }
}

impl<E: Enricher + ?Sized> Enricher for std::sync::Arc<E> {
    fn enrich(&self, event: &mut LogEvent, factory: &dyn PropertyFactory) {
        (**self).enrich(event, factory);
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}
