//! Timestamp normalization at the deserialization boundary.
//!
//! Snapshots written by different front ends carry timestamps as RFC 3339
//! strings, epoch milliseconds, or Firestore `{seconds, nanoseconds}` objects.
//! Everything is converted to `DateTime<Utc>` here so nothing downstream has to
//! inspect the source shape. Serialization always writes RFC 3339.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Deserializer};

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawTimestamp {
    Text(String),
    Millis(i64),
    FractionalMillis(f64),
    Firestore {
        #[serde(alias = "_seconds")]
        seconds: i64,
        #[serde(default, alias = "_nanoseconds")]
        nanoseconds: u32,
    },
}

impl RawTimestamp {
    fn normalize(self) -> Option<DateTime<Utc>> {
        match self {
            Self::Text(s) => DateTime::parse_from_rfc3339(s.trim())
                .ok()
                .map(|dt| dt.with_timezone(&Utc)),
            Self::Millis(ms) => Utc.timestamp_millis_opt(ms).single(),
            Self::FractionalMillis(ms) if ms.is_finite() => {
                Utc.timestamp_millis_opt(ms.round() as i64).single()
            }
            Self::FractionalMillis(_) => None,
            Self::Firestore {
                seconds,
                nanoseconds,
            } => Utc.timestamp_opt(seconds, nanoseconds).single(),
        }
    }
}

/// Parse an RFC 3339 string into UTC.
pub fn parse_rfc3339(s: &str) -> Option<DateTime<Utc>> {
    RawTimestamp::Text(s.to_string()).normalize()
}

/// Deserialize a required timestamp from any supported shape.
pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = RawTimestamp::deserialize(deserializer)?;
    raw.normalize()
        .ok_or_else(|| serde::de::Error::custom("unrecognized timestamp"))
}

/// Deserialize an optional timestamp. `null` and unrecognized values become `None`.
pub fn deserialize_option<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(raw
        .and_then(|v| serde_json::from_value::<RawTimestamp>(v).ok())
        .and_then(RawTimestamp::normalize))
}
