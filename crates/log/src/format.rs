//! Event rendering (JSON and compact text)

use std::borrow::Cow;
use std::fmt::Write as _;

use serde::ser::{Serialize, SerializeMap, Serializer};
use time::{OffsetDateTime, format_description::well_known::Rfc3339};

use crate::core::LogResult;
use crate::event::{LogEvent, PropertyValue};

/// Keys written by the formatter itself; properties with these names are
/// prefixed with `_` in JSON output until the key is unique.
const RESERVED: [&str; 4] = ["timestamp", "level", "target", "message"];

/// Render as a single-line JSON object with properties at the top level
pub(crate) fn render_json(event: &LogEvent) -> LogResult<String> {
    Ok(serde_json::to_string(&JsonEvent(event))?)
}

/// Render as `timestamp LEVEL target: message key=value ...`
pub(crate) fn render_compact(event: &LogEvent) -> LogResult<String> {
    let mut line = format!(
        "{} {:>5} {}: {}",
        format_timestamp(event.timestamp()),
        event.level().as_upper_str(),
        event.target(),
        event.message()
    );
    for (name, value) in event.properties() {
        let _ = write!(line, " {name}={}", render_value(value)?);
    }
    Ok(line)
}

fn render_value(value: &PropertyValue) -> LogResult<String> {
    Ok(serde_json::to_string(value)?)
}

/// Output key for a property; every key in a rendered object is unique
fn json_key<'a>(name: &'a str, event: &LogEvent) -> Cow<'a, str> {
    if !RESERVED.contains(&name) {
        return Cow::Borrowed(name);
    }
    let mut key = format!("_{name}");
    while RESERVED.contains(&key.as_str()) || event.contains_property(&key) {
        key.insert(0, '_');
    }
    Cow::Owned(key)
}

fn format_timestamp(timestamp: OffsetDateTime) -> String {
    timestamp
        .format(&Rfc3339)
        .unwrap_or_else(|_| timestamp.unix_timestamp().to_string())
}

struct JsonEvent<'a>(&'a LogEvent);

impl Serialize for JsonEvent<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let event = self.0;
        let mut map = serializer.serialize_map(Some(RESERVED.len() + event.properties().len()))?;
        map.serialize_entry("timestamp", &format_timestamp(event.timestamp()))?;
        map.serialize_entry("level", &event.level().to_string())?;
        map.serialize_entry("target", event.target())?;
        map.serialize_entry("message", event.message())?;
        for (name, value) in event.properties() {
            map.serialize_entry(json_key(name, event).as_ref(), value)?;
        }
        map.end()
    }
}
