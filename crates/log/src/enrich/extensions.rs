//! Fluent registration of the `MessageFields` enricher

use super::MessageFieldsEnricher;
use crate::builder::{Enrichment, LoggerBuilder};
use crate::core::{LogError, LogResult};

/// Registers a [`MessageFieldsEnricher`] on an enrichment receiver.
///
/// Implemented for [`Enrichment`], where registration cannot fail, and for
/// `Option<Enrichment>`, where a missing receiver is reported as
/// [`LogError::NullArgument`] before anything is registered.
///
/// ```rust
/// use fieldlog::{LoggerBuilder, MessageFieldsExt};
///
/// let builder = LoggerBuilder::new()
///     .enrich()
///     .with_message_fields()
///     .enrich()
///     .with_message_fields_omitting(vec!["Password".to_string()]);
/// assert_eq!(builder.enrichers().len(), 2);
///
/// let missing: Option<fieldlog::Enrichment> = None;
/// assert!(missing.with_message_fields().unwrap_err().is_null_argument());
/// ```
pub trait MessageFieldsExt: Sized {
    /// What registration returns
    type Output;

    /// Register the enricher, leaving the given names out of `MessageFields`
    fn with_message_fields_omitting<I, S>(self, omit: I) -> Self::Output
    where
        I: IntoIterator<Item = S>,
        S: Into<String>;

    /// Register the enricher without omissions
    fn with_message_fields(self) -> Self::Output {
        self.with_message_fields_omitting(std::iter::empty::<String>())
    }

    /// Register the enricher, leaving the listed names out of `MessageFields`
    fn with_message_fields_except(self, omit: &[&str]) -> Self::Output {
        self.with_message_fields_omitting(omit.iter().copied())
    }
}

impl MessageFieldsExt for Enrichment {
    type Output = LoggerBuilder;

    fn with_message_fields_omitting<I, S>(self, omit: I) -> LoggerBuilder
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.with(MessageFieldsEnricher::new(omit))
    }
}

impl MessageFieldsExt for Option<Enrichment> {
    type Output = LogResult<LoggerBuilder>;

    fn with_message_fields_omitting<I, S>(self, omit: I) -> LogResult<LoggerBuilder>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let enrichment = self.ok_or_else(|| LogError::null_argument("enrichment"))?;
        Ok(enrichment.with_message_fields_omitting(omit))
    }
}
