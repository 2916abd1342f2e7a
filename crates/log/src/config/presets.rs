//! Configuration presets for common scenarios

use super::{Config, Fields, Format, MessageFieldsConfig};

impl Config {
    /// Create configuration from environment variables
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create configuration from an arbitrary variable lookup.
    ///
    /// Recognised keys: `FIELDLOG` / `RUST_LOG`, `FIELDLOG_FORMAT`,
    /// `FIELDLOG_MESSAGE_FIELDS`, `FIELDLOG_MESSAGE_FIELDS_OMIT` and the
    /// global field keys read by [`Fields`].
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        // Parse FIELDLOG or RUST_LOG
        if let Some(level) = lookup("FIELDLOG").or_else(|| lookup("RUST_LOG")) {
            config.level = level;
        }

        if let Some(format) = lookup("FIELDLOG_FORMAT") {
            config.format = match format.to_lowercase().as_str() {
                "json" => Format::Json,
                _ => Format::Compact,
            };
        }

        if let Some(v) = lookup("FIELDLOG_MESSAGE_FIELDS") {
            config.message_fields.enabled = is_enabled(&v);
        }
        if let Some(omit) = lookup("FIELDLOG_MESSAGE_FIELDS_OMIT") {
            config.message_fields.omit = MessageFieldsConfig::parse_omit(&omit);
        }

        config.fields = Fields::from_lookup(&lookup);

        config
    }

    /// Development configuration (compact, debug level)
    #[must_use]
    pub fn development() -> Self {
        Self {
            level: "debug".to_string(),
            format: Format::Compact,
            ..Self::default()
        }
    }

    /// Production configuration (JSON, info level)
    #[must_use]
    pub fn production() -> Self {
        Self {
            level: "info".to_string(),
            format: Format::Json,
            ..Self::default()
        }
    }
}

/// Flag values are on unless they spell out "off" in some form
fn is_enabled(value: &str) -> bool {
    !matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "0" | "false" | "no" | "off"
    )
}
