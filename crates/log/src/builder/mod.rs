//! Logger builder implementation
//!
//! [`LoggerBuilder`] is the configuration object. Its enrichment chain is
//! extended through the [`Enrichment`] receiver returned by
//! [`LoggerBuilder::enrich`]:
//!
//! ```rust
//! use fieldlog::{LoggerBuilder, MessageFieldsExt};
//!
//! let builder = LoggerBuilder::new()
//!     .enrich()
//!     .with_message_fields_except(&["Password"]);
//! assert_eq!(builder.enrichers().len(), 1);
//! ```

// Standard library
use std::sync::Arc;

// External dependencies
use tracing_subscriber::{
    EnvFilter, Registry, fmt::MakeWriter, fmt::writer::BoxMakeWriter, layer::SubscriberExt,
    util::SubscriberInitExt,
};

// Internal crates
use crate::config::{Config, Format, WriterConfig};
use crate::core::{LogError, LogResult};
use crate::enrich::{Enricher, FieldsEnricher, MessageFieldsEnricher};
use crate::layer::EnrichLayer;

/// Logger builder
#[derive(Clone)]
pub struct LoggerBuilder {
    config: Config,
    enrichers: Vec<Arc<dyn Enricher>>,
}

/// Receiver for registering enrichers on a [`LoggerBuilder`]
#[derive(Debug)]
pub struct Enrichment {
    builder: LoggerBuilder,
}

impl std::fmt::Debug for LoggerBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<_> = self.enrichers.iter().map(|e| e.name()).collect();
        f.debug_struct("LoggerBuilder")
            .field("config", &self.config)
            .field("enrichers", &names)
            .finish()
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl LoggerBuilder {
    /// Create a builder with default config and no enrichers
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: Config::default(),
            enrichers: Vec::new(),
        }
    }

    /// Create builder from config
    ///
    /// Registers the `MessageFields` enricher (when enabled) before the
    /// global fields enricher, so `MessageFields` only carries the fields
    /// recorded by the event itself.
    #[must_use]
    pub fn from_config(config: Config) -> Self {
        let mut enrichers: Vec<Arc<dyn Enricher>> = Vec::new();
        if config.message_fields.enabled {
            enrichers.push(Arc::new(MessageFieldsEnricher::new(
                config.message_fields.omit.iter().cloned(),
            )));
        }
        let fields = FieldsEnricher::new(&config.fields);
        if !fields.is_empty() {
            enrichers.push(Arc::new(fields));
        }
        Self { config, enrichers }
    }

    /// Start registering enrichers
    #[must_use]
    pub fn enrich(self) -> Enrichment {
        Enrichment { builder: self }
    }

    /// Set the level filter directive
    #[must_use]
    pub fn level(mut self, level: impl Into<String>) -> Self {
        self.config.level = level.into();
        self
    }

    /// Set the output format
    #[must_use]
    pub fn format(mut self, format: Format) -> Self {
        self.config.format = format;
        self
    }

    /// Current configuration
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Registered enrichers, in the order they run
    #[must_use]
    pub fn enrichers(&self) -> &[Arc<dyn Enricher>] {
        &self.enrichers
    }

    /// Build the enriching layer writing to the configured destination
    #[must_use]
    pub fn layer(&self) -> EnrichLayer<BoxMakeWriter> {
        let writer = match self.config.writer {
            WriterConfig::Stdout => BoxMakeWriter::new(std::io::stdout),
            WriterConfig::Stderr => BoxMakeWriter::new(std::io::stderr),
        };
        self.layer_with_writer(writer)
    }

    /// Build the enriching layer writing to a custom writer
    #[must_use]
    pub fn layer_with_writer<W>(&self, writer: W) -> EnrichLayer<W>
    where
        W: for<'w> MakeWriter<'w> + 'static,
    {
        EnrichLayer::new(self.enrichers.iter().cloned(), self.config.format, writer)
    }

    /// Build and install the global subscriber
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - Filter string cannot be parsed
    /// - A global subscriber is already installed
    pub fn build(self) -> LogResult<()> {
        let filter = EnvFilter::try_new(&self.config.level)
            .map_err(|e| LogError::Filter(format!("{}: {}", &self.config.level, e)))?;

        Registry::default()
            .with(filter)
            .with(self.layer())
            .try_init()
            .map_err(|e| LogError::Init(e.to_string()))?;

        tracing::debug!(
            enrichers = self.enrichers.len(),
            format = ?self.config.format,
            "Logger initialized"
        );
        Ok(())
    }
}

impl Enrichment {
    /// Append an enricher to the chain and return the builder
    pub fn with<E: Enricher + 'static>(self, enricher: E) -> LoggerBuilder {
        let mut builder = self.builder;
        tracing::debug!(enricher = enricher.name(), "Registering enricher");
        builder.enrichers.push(Arc::new(enricher));
        builder
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Fields;

    #[test]
    fn test_from_config_registers_message_fields_first() {
        let mut config = Config::default();
        config.fields = Fields {
            service: Some("billing".into()),
            ..Fields::default()
        };

        let builder = LoggerBuilder::from_config(config);
        let names: Vec<_> = builder.enrichers().iter().map(|e| e.name()).collect();
        assert_eq!(names, ["message_fields", "fields"]);
    }

    #[test]
    fn test_from_config_respects_disabled_message_fields() {
        let mut config = Config::default();
        config.message_fields.enabled = false;

        assert!(LoggerBuilder::from_config(config).enrichers().is_empty());
    }

    #[test]
    fn test_with_appends_in_order() {
        let builder = LoggerBuilder::new()
            .enrich()
            .with(FieldsEnricher::default())
            .enrich()
            .with(MessageFieldsEnricher::default());

        let names: Vec<_> = builder.enrichers().iter().map(|e| e.name()).collect();
        assert_eq!(names, ["fields", "message_fields"]);
    }

    #[test]
    fn test_invalid_filter_rejected() {
        let err = LoggerBuilder::new().level("info,fieldlog=notalevel").build().unwrap_err();
        assert!(matches!(err, LogError::Filter(_)));
    }

    #[test]
    fn test_debug_lists_enricher_names() {
        let builder = LoggerBuilder::new().enrich().with(MessageFieldsEnricher::default());
        assert!(format!("{builder:?}").contains("message_fields"));
    }
}
