//! Global fields and MessageFields configuration

use serde::{Deserialize, Serialize};

/// Global fields configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Fields {
    /// Service name
    pub service: Option<String>,
    /// Environment (dev/staging/prod)
    pub env: Option<String>,
    /// Version
    pub version: Option<String>,
    /// Instance ID
    pub instance: Option<String>,
    /// Region
    pub region: Option<String>,
    /// Custom fields
    #[serde(flatten)]
    pub custom: std::collections::BTreeMap<String, serde_json::Value>,
}

impl Fields {
    /// Create fields from a variable lookup (`FIELDLOG_SERVICE`, `FIELDLOG_ENV`, ...)
    pub(super) fn from_lookup(lookup: &impl Fn(&str) -> Option<String>) -> Self {
        Self {
            service: lookup("FIELDLOG_SERVICE"),
            env: lookup("FIELDLOG_ENV"),
            version: lookup("FIELDLOG_VERSION"),
            instance: lookup("FIELDLOG_INSTANCE"),
            region: lookup("FIELDLOG_REGION"),
            custom: std::collections::BTreeMap::default(),
        }
    }

    /// Check if fields are empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.service.is_none()
            && self.env.is_none()
            && self.version.is_none()
            && self.instance.is_none()
            && self.region.is_none()
            && self.custom.is_empty()
    }
}

/// Settings for the `MessageFields` enricher
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MessageFieldsConfig {
    /// Register the enricher when building from config
    pub enabled: bool,
    /// Property names left out of `MessageFields`
    pub omit: Vec<String>,
}

impl Default for MessageFieldsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            omit: Vec::new(),
        }
    }
}

impl MessageFieldsConfig {
    /// Parse a comma-separated omission list, dropping blank entries
    pub(super) fn parse_omit(raw: &str) -> Vec<String> {
        raw.split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_omit() {
        assert_eq!(
            MessageFieldsConfig::parse_omit(" Password, Token ,,Environment"),
            ["Password", "Token", "Environment"]
        );
        assert!(MessageFieldsConfig::parse_omit("").is_empty());
    }

    #[test]
    fn test_custom_fields_flatten() {
        let fields: Fields =
            serde_json::from_str(r#"{"service":"api","team":"payments"}"#).unwrap();
        assert_eq!(fields.service.as_deref(), Some("api"));
        assert_eq!(fields.custom["team"], serde_json::json!("payments"));
        assert!(!fields.is_empty());
        assert!(Fields::default().is_empty());
    }
}
