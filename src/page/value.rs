//! Tagged metadata values.

use serde::Serialize;

use crate::utils::date::DateTimeUtc;

/// Keys whose textual values are promoted to `MetaValue::Date` on load.
pub const DATE_KEYS: [&str; 2] = ["date", "modified"];

/// A single metadata value.
///
/// Metadata coming from the host is heterogeneous; keeping dates as a
/// distinct variant makes the date-only rendering in tag output explicit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum MetaValue {
    Text(String),
    Date(DateTimeUtc),
    Bool(bool),
}

impl MetaValue {
    /// Borrow the text payload, if this is a text value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Render for a tag value. Dates keep only the calendar date.
    pub fn to_tag_value(&self) -> String {
        match self {
            Self::Text(s) => s.clone(),
            Self::Date(dt) => dt.to_iso_date(),
            Self::Bool(b) => b.to_string(),
        }
    }

    /// Build a value from raw JSON, promoting well-known date keys.
    ///
    /// Returns `None` for `null`, arrays and objects: those carry nothing a
    /// tag could use.
    pub fn from_json(key: &str, value: serde_json::Value) -> Option<Self> {
        use serde_json::Value;

        match value {
            Value::Bool(b) => Some(Self::Bool(b)),
            Value::Number(n) => Some(Self::Text(n.to_string())),
            Value::String(s) => {
                if DATE_KEYS.contains(&key)
                    && let Some(dt) = DateTimeUtc::parse(&s)
                {
                    return Some(Self::Date(dt));
                }
                Some(Self::Text(s))
            }
            Value::Null | Value::Array(_) | Value::Object(_) => None,
        }
    }
}

impl From<&str> for MetaValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_owned())
    }
}

impl From<String> for MetaValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<DateTimeUtc> for MetaValue {
    fn from(dt: DateTimeUtc) -> Self {
        Self::Date(dt)
    }
}

impl From<bool> for MetaValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}
