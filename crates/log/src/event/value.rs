//! Structured property values
//!
//! [`PropertyValue`] is the closed set of shapes a property can take. Values
//! are immutable once attached to an event; enrichers copy them, they never
//! rewrite them.

use indexmap::IndexMap;
use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

use super::LogEventProperty;
use crate::core::LogResult;

/// A single scalar
#[derive(Debug, Clone, PartialEq)]
pub enum ScalarValue {
    /// Absent / null value
    Null,
    /// Boolean
    Bool(bool),
    /// Signed integer
    I64(i64),
    /// Unsigned integer
    U64(u64),
    /// Floating point number
    F64(f64),
    /// Text
    Str(String),
}

/// A structured object with an optional type tag
#[derive(Debug, Clone, PartialEq)]
pub struct StructureValue {
    type_tag: Option<String>,
    properties: Vec<LogEventProperty>,
}

/// Value of a log event property
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
    /// A single scalar
    Scalar(ScalarValue),
    /// An ordered sequence of values
    Sequence(Vec<PropertyValue>),
    /// A structured object (named properties, optional type tag)
    Structure(StructureValue),
    /// An ordered mapping from key to value
    Dictionary(IndexMap<String, PropertyValue>),
}

impl StructureValue {
    /// Create a structure from its properties
    #[must_use]
    pub fn new(properties: Vec<LogEventProperty>) -> Self {
        Self {
            type_tag: None,
            properties,
        }
    }

    /// Set the type tag rendered as `$type`
    #[must_use]
    pub fn with_type_tag(mut self, tag: impl Into<String>) -> Self {
        self.type_tag = Some(tag.into());
        self
    }

    /// Type tag, if any
    #[must_use]
    pub fn type_tag(&self) -> Option<&str> {
        self.type_tag.as_deref()
    }

    /// Properties in declaration order
    #[must_use]
    pub fn properties(&self) -> &[LogEventProperty] {
        &self.properties
    }
}

impl PropertyValue {
    /// Convert any serializable value into a property value.
    ///
    /// Structs and maps become [`PropertyValue::Dictionary`], sequences become
    /// [`PropertyValue::Sequence`], everything else a scalar.
    pub fn from_serialize<T: Serialize + ?Sized>(value: &T) -> LogResult<Self> {
        Ok(serde_json::to_value(value)?.into())
    }

    /// Borrow the mapping if this is a dictionary
    #[must_use]
    pub fn as_dictionary(&self) -> Option<&IndexMap<String, PropertyValue>> {
        match self {
            Self::Dictionary(map) => Some(map),
            _ => None,
        }
    }

    /// Borrow the scalar if this is one
    #[must_use]
    pub fn as_scalar(&self) -> Option<&ScalarValue> {
        match self {
            Self::Scalar(scalar) => Some(scalar),
            _ => None,
        }
    }

    /// Borrow the text if this is a string scalar
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Scalar(ScalarValue::Str(s)) => Some(s),
            _ => None,
        }
    }
}

impl From<serde_json::Value> for PropertyValue {
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value;

        match value {
            Value::Null => Self::Scalar(ScalarValue::Null),
            Value::Bool(b) => Self::Scalar(ScalarValue::Bool(b)),
            Value::Number(n) => {
                let scalar = if let Some(i) = n.as_i64() {
                    ScalarValue::I64(i)
                } else if let Some(u) = n.as_u64() {
                    ScalarValue::U64(u)
                } else {
                    ScalarValue::F64(n.as_f64().unwrap_or(f64::NAN))
                };
                Self::Scalar(scalar)
            }
            Value::String(s) => Self::Scalar(ScalarValue::Str(s)),
            Value::Array(items) => Self::Sequence(items.into_iter().map(Into::into).collect()),
            Value::Object(map) => {
                Self::Dictionary(map.into_iter().map(|(k, v)| (k, v.into())).collect())
            }
        }
    }
}

impl From<ScalarValue> for PropertyValue {
    fn from(value: ScalarValue) -> Self {
        Self::Scalar(value)
    }
}

macro_rules! scalar_from {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for PropertyValue {
                fn from(value: $ty) -> Self {
                    Self::Scalar(ScalarValue::$variant(value.into()))
                }
            }
        )*
    };
}

scalar_from! {
    bool => Bool,
    i32 => I64,
    i64 => I64,
    u32 => U64,
    u64 => U64,
    f64 => F64,
    String => Str,
    &str => Str,
}

impl From<IndexMap<String, PropertyValue>> for PropertyValue {
    fn from(map: IndexMap<String, PropertyValue>) -> Self {
        Self::Dictionary(map)
    }
}

impl From<StructureValue> for PropertyValue {
    fn from(value: StructureValue) -> Self {
        Self::Structure(value)
    }
}

impl Serialize for ScalarValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Null => serializer.serialize_unit(),
            Self::Bool(b) => serializer.serialize_bool(*b),
            Self::I64(i) => serializer.serialize_i64(*i),
            Self::U64(u) => serializer.serialize_u64(*u),
            Self::F64(f) => serializer.serialize_f64(*f),
            Self::Str(s) => serializer.serialize_str(s),
        }
    }
}

impl Serialize for PropertyValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Scalar(scalar) => scalar.serialize(serializer),
            Self::Sequence(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Self::Structure(structure) => {
                let len = structure.properties.len() + usize::from(structure.type_tag.is_some());
                let mut map = serializer.serialize_map(Some(len))?;
                if let Some(tag) = &structure.type_tag {
                    map.serialize_entry("$type", tag)?;
                }
                for prop in &structure.properties {
                    map.serialize_entry(prop.name(), prop.value())?;
                }
                map.end()
            }
            Self::Dictionary(entries) => {
                let mut map = serializer.serialize_map(Some(entries.len()))?;
                for (key, value) in entries {
                    map.serialize_entry(key, value)?;
                }
                map.end()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_json_object_becomes_dictionary() {
        let value = PropertyValue::from(json!({"id": 7, "tags": ["a", "b"], "ok": true}));
        let map = value.as_dictionary().expect("dictionary");
        assert_eq!(map["id"], PropertyValue::from(7i64));
        assert_eq!(
            map["tags"],
            PropertyValue::Sequence(vec!["a".into(), "b".into()])
        );
        assert_eq!(map["ok"], PropertyValue::from(true));
    }

    #[test]
    fn test_from_serialize_struct() {
        #[derive(serde::Serialize)]
        struct User {
            name: &'static str,
            age: u32,
        }

        let value = PropertyValue::from_serialize(&User {
            name: "joe",
            age: 41,
        })
        .unwrap();
        let map = value.as_dictionary().unwrap();
        assert_eq!(map["name"].as_str(), Some("joe"));
        assert_eq!(map["age"], PropertyValue::from(41i64));
    }

    #[test]
    fn test_large_unsigned_stays_unsigned() {
        let value = PropertyValue::from(json!(u64::MAX));
        assert_eq!(value.as_scalar(), Some(&ScalarValue::U64(u64::MAX)));
    }

    #[test]
    fn test_structure_serializes_type_tag_first() {
        let structure = StructureValue::new(vec![
            LogEventProperty::new("X", 1i64),
            LogEventProperty::new("Y", 2i64),
        ])
        .with_type_tag("Point");

        let rendered = serde_json::to_string(&PropertyValue::from(structure)).unwrap();
        assert_eq!(rendered, r#"{"$type":"Point","X":1,"Y":2}"#);
    }

    #[test]
    fn test_dictionary_preserves_insertion_order() {
        let mut map = IndexMap::new();
        map.insert("zeta".to_string(), PropertyValue::from(1i64));
        map.insert("alpha".to_string(), PropertyValue::from(2i64));

        let rendered = serde_json::to_string(&PropertyValue::Dictionary(map)).unwrap();
        assert_eq!(rendered, r#"{"zeta":1,"alpha":2}"#);
    }
}
