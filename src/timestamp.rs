//! Fixed-format timestamp codec for the wire protocol.
//!
//! Every timestamp on the wire is a JSON string shaped like
//! `2024-01-15T10:30:00Z`. Use the module as a field strategy:
//!
//! ```
//! use chrono::{DateTime, Utc};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Serialize, Deserialize)]
//! struct Window {
//!     #[serde(with = "tempodb_models::timestamp")]
//!     start: DateTime<Utc>,
//! }
//! ```

use std::fmt;

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::de::{self, Unexpected, Visitor};
use serde::{Deserializer, Serializer};

use crate::error::{Result, TempoError};

/// Layout used to produce every timestamp, and the primary layout accepted.
pub const ISO8601_FMT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Offset form also accepted when parsing, e.g. `2024-01-15T12:30:00+02:00`.
pub const ISO8601_OFFSET_FMT: &str = "%Y-%m-%dT%H:%M:%S%:z";

/// Expectation reported by the deserializer. Error classification keys on it.
pub const EXPECTING: &str = "an ISO-8601 timestamp string (YYYY-MM-DDTHH:MM:SSZ)";

/// Sub-second precision is truncated.
pub fn format(ts: &DateTime<Utc>) -> String {
    ts.format(ISO8601_FMT).to_string()
}

pub fn parse(s: &str) -> Result<DateTime<Utc>> {
    if let Ok(naive) = NaiveDateTime::parse_from_str(s, ISO8601_FMT) {
        return Ok(naive.and_utc());
    }

    DateTime::parse_from_str(s, ISO8601_OFFSET_FMT)
        .map(|ts| ts.with_timezone(&Utc))
        .map_err(|e| TempoError::Format(format!("{:?} does not match {}: {}", s, ISO8601_FMT, e)))
}

pub fn serialize<S>(ts: &DateTime<Utc>, serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format(ts))
}

pub fn deserialize<'de, D>(deserializer: D) -> std::result::Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_str(TimestampVisitor)
}

struct TimestampVisitor;

impl<'de> Visitor<'de> for TimestampVisitor {
    type Value = DateTime<Utc>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(EXPECTING)
    }

    fn visit_str<E>(self, v: &str) -> std::result::Result<Self::Value, E>
    where
        E: de::Error,
    {
        parse(v).map_err(|_| E::invalid_value(Unexpected::Str(v), &self))
    }
}
