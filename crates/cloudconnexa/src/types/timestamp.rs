//! Lenient timestamp type for resource fields.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A timestamp field that tolerates unparseable values.
///
/// The API reports `created_at`/`updated_at` as ISO 8601 strings, usually
/// with a Zulu suffix. Values that parse become structured instants; values
/// that do not are kept as the raw string rather than failing the whole
/// response.
#[derive(Clone, Debug, PartialEq)]
pub enum Timestamp {
    /// A successfully parsed instant, normalized to UTC.
    Parsed(DateTime<Utc>),
    /// The original string, kept verbatim because it did not parse.
    Raw(String),
}

impl Timestamp {
    /// Parse a timestamp string, falling back to the raw value.
    ///
    /// Accepts RFC 3339 with either a `Z` suffix or an explicit offset;
    /// both normalize to the same UTC instant.
    pub fn parse(s: impl Into<String>) -> Self {
        let s = s.into();
        match DateTime::parse_from_rfc3339(&s) {
            Ok(dt) => Timestamp::Parsed(dt.with_timezone(&Utc)),
            Err(_) => Timestamp::Raw(s),
        }
    }

    /// Returns the parsed instant, if this timestamp parsed.
    pub fn as_datetime(&self) -> Option<DateTime<Utc>> {
        match self {
            Timestamp::Parsed(dt) => Some(*dt),
            Timestamp::Raw(_) => None,
        }
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Timestamp::Parsed(dt) => write!(f, "{}", dt.to_rfc3339()),
            Timestamp::Raw(s) => write!(f, "{s}"),
        }
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(Timestamp::parse(s))
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Timestamp::Parsed(dt) => serializer.serialize_str(&dt.to_rfc3339()),
            Timestamp::Raw(s) => serializer.serialize_str(s),
        }
    }
}
