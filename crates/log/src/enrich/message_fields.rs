//! The `MessageFields` enricher
//!
//! Copies an event's properties into one nested property so that sinks which
//! flatten properties still expose the message's own fields as a group:
//!
//! ```text
//! info!(Username = "joegauchoii", Environment = "Development", "login");
//!
//! { ..., "Username": "joegauchoii", "Environment": "Development",
//!   "MessageFields": { "Username": "joegauchoii", "Environment": "Development" } }
//! ```

use std::collections::HashSet;

use super::{Enricher, PropertyFactory};
use crate::event::{LogEvent, Properties, PropertyValue};

/// Adds a `MessageFields` property holding a copy of the event's properties
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageFieldsEnricher {
    omit: HashSet<String>,
}

impl MessageFieldsEnricher {
    /// Name of the property this enricher adds
    pub const PROPERTY_NAME: &'static str = "MessageFields";

    /// Create an enricher leaving the given names out of `MessageFields`.
    ///
    /// Names are copied; duplicates collapse and names that never occur on an
    /// event are simply never matched.
    pub fn new<I, S>(omit: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            omit: omit.into_iter().map(Into::into).collect(),
        }
    }

    /// Names left out of `MessageFields`
    #[must_use]
    pub fn omitted(&self) -> &HashSet<String> {
        &self.omit
    }

    /// Check whether a property name is left out
    #[inline]
    #[must_use]
    pub fn is_omitted(&self, name: &str) -> bool {
        self.omit.contains(name)
    }
}

impl Enricher for MessageFieldsEnricher {
    fn enrich(&self, event: &mut LogEvent, factory: &dyn PropertyFactory) {
        let fields: Properties = event
            .properties()
            .iter()
            .filter(|(name, _)| !self.is_omitted(name))
            .map(|(name, value)| (name.clone(), value.clone()))
            .collect();

        let property = factory.create_property(Self::PROPERTY_NAME, PropertyValue::Dictionary(fields));
        event.add_property_if_absent(property);
    }

    fn name(&self) -> &'static str {
        "message_fields"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Level;
    use crate::enrich::DefaultPropertyFactory;
    use crate::event::LogEventProperty;
    use pretty_assertions::assert_eq;
    use proptest::collection::{btree_map, vec};
    use proptest::prelude::*;
    use proptest::sample::subsequence;
    use rstest::rstest;
    use std::collections::BTreeMap;

    fn login_event() -> LogEvent {
        LogEvent::new(Level::Info, "User: joegauchoii Context: Development")
            .with_property("Username", "joegauchoii")
            .with_property("Environment", "Development")
    }

    fn message_fields(event: &LogEvent) -> &Properties {
        event
            .property(MessageFieldsEnricher::PROPERTY_NAME)
            .and_then(PropertyValue::as_dictionary)
            .expect("MessageFields should be a mapping")
    }

    fn keys(map: &Properties) -> Vec<&str> {
        map.keys().map(String::as_str).collect()
    }

    #[test]
    fn test_copies_all_fields_without_omissions() {
        let mut event = login_event();
        MessageFieldsEnricher::default().enrich(&mut event, &DefaultPropertyFactory);

        let fields = message_fields(&event);
        assert_eq!(keys(fields), ["Username", "Environment"]);
        assert_eq!(fields["Username"].as_str(), Some("joegauchoii"));
        assert_eq!(fields["Environment"].as_str(), Some("Development"));
    }

    #[test]
    fn test_omits_named_field() {
        let mut event = login_event();
        MessageFieldsEnricher::new(["Environment"]).enrich(&mut event, &DefaultPropertyFactory);

        let fields = message_fields(&event);
        assert_eq!(keys(fields), ["Username"]);
        assert_eq!(fields["Username"].as_str(), Some("joegauchoii"));
        // The source properties are untouched
        assert!(event.contains_property("Environment"));
    }

    #[test]
    fn test_omitting_everything_still_adds_empty_mapping() {
        let mut event = login_event();
        MessageFieldsEnricher::new(["Username", "Environment"])
            .enrich(&mut event, &DefaultPropertyFactory);

        assert!(message_fields(&event).is_empty());
    }

    #[test]
    fn test_existing_message_fields_left_unchanged() {
        let mut event = login_event().with_property(MessageFieldsEnricher::PROPERTY_NAME, "preset");
        MessageFieldsEnricher::default().enrich(&mut event, &DefaultPropertyFactory);

        assert_eq!(
            event.property(MessageFieldsEnricher::PROPERTY_NAME),
            Some(&PropertyValue::from("preset"))
        );
    }

    #[test]
    fn test_second_enrichment_is_noop() {
        let enricher = MessageFieldsEnricher::default();
        let mut event = login_event();
        enricher.enrich(&mut event, &DefaultPropertyFactory);
        let first = event.clone();

        enricher.enrich(&mut event, &DefaultPropertyFactory);
        assert_eq!(event, first);
    }

    #[test]
    fn test_event_without_properties_gets_empty_mapping() {
        let mut event = LogEvent::new(Level::Debug, "no fields");
        MessageFieldsEnricher::default().enrich(&mut event, &DefaultPropertyFactory);

        assert!(message_fields(&event).is_empty());
        assert_eq!(event.properties().len(), 1);
    }

    #[rstest]
    #[case::empty_name(vec![""])]
    #[case::unknown_name(vec!["NotThere"])]
    #[case::duplicates(vec!["NotThere", "NotThere"])]
    fn test_unmatched_omissions_are_tolerated(#[case] omit: Vec<&str>) {
        let mut event = login_event();
        MessageFieldsEnricher::new(omit).enrich(&mut event, &DefaultPropertyFactory);

        assert_eq!(keys(message_fields(&event)), ["Username", "Environment"]);
    }

    #[test]
    fn test_construction_snapshots_omissions() {
        let mut names = vec!["Environment".to_string()];
        let enricher = MessageFieldsEnricher::new(names.clone());
        names.push("Username".to_string());
        names.clear();

        assert_eq!(enricher.omitted().len(), 1);
        assert!(enricher.is_omitted("Environment"));
    }

    #[test]
    fn test_nested_values_copied_verbatim() {
        let nested = PropertyValue::from(serde_json::json!({"id": 1, "roles": ["admin"]}));
        let mut event = LogEvent::new(Level::Info, "nested").with_property("User", nested.clone());
        MessageFieldsEnricher::default().enrich(&mut event, &DefaultPropertyFactory);

        assert_eq!(message_fields(&event)["User"], nested);
    }

    struct RenamingFactory;

    impl PropertyFactory for RenamingFactory {
        fn create_property(&self, name: &str, value: PropertyValue) -> LogEventProperty {
            LogEventProperty::new(format!("x_{name}"), value)
        }
    }

    #[test]
    fn test_property_built_through_factory() {
        let mut event = login_event();
        MessageFieldsEnricher::default().enrich(&mut event, &RenamingFactory);

        assert!(event.contains_property("x_MessageFields"));
        assert!(!event.contains_property(MessageFieldsEnricher::PROPERTY_NAME));
    }

    /// Properties plus an omission list mixing real keys and unknown names
    fn properties_and_omissions() -> impl Strategy<Value = (BTreeMap<String, i64>, Vec<String>)> {
        btree_map("[A-Za-z]{1,8}", any::<i64>(), 0..12)
            .prop_flat_map(|props| {
                let keys: Vec<String> = props.keys().cloned().collect();
                let len = keys.len();
                (
                    Just(props),
                    subsequence(keys, 0..=len),
                    vec("[A-Za-z]{1,8}", 0..3),
                )
            })
            .prop_map(|(props, mut omit, unknown)| {
                omit.extend(unknown);
                (props, omit)
            })
    }

    proptest! {
        #[test]
        fn prop_keys_are_properties_minus_omissions(
            (props, omit) in properties_and_omissions(),
        ) {
            let mut event = LogEvent::new(Level::Info, "generated");
            for (name, value) in &props {
                event = event.with_property(name.clone(), *value);
            }

            let enricher = MessageFieldsEnricher::new(omit.clone());
            enricher.enrich(&mut event, &DefaultPropertyFactory);

            let fields = message_fields(&event);
            let expected: Vec<&str> = props
                .keys()
                .map(String::as_str)
                .filter(|name| !omit.iter().any(|o| o.as_str() == *name))
                .collect();
            prop_assert_eq!(keys(fields), expected);

            for name in &omit {
                prop_assert!(!fields.contains_key(name));
            }
            for (name, value) in fields {
                prop_assert_eq!(Some(value), event.property(name));
            }
        }
    }
}
