//! Serde helpers for the `changeDate` timestamp of IONOS records.
//!
//! - serialize: `DateTime<Utc>` -> RFC 3339 string
//! - deserialize: RFC 3339 string or Unix timestamp (seconds or milliseconds) -> `DateTime<Utc>`

use chrono::{DateTime, Utc};
use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serializer};

/// Serialize `Option<DateTime<Utc>>` as an optional RFC 3339 string.
#[allow(clippy::ref_option)]
pub fn serialize<S>(dt: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match dt {
        Some(dt) => serializer.serialize_some(&dt.to_rfc3339()),
        None => serializer.serialize_none(),
    }
}

/// Deserialize an RFC 3339 string or a Unix timestamp.
///
/// `changeDate` is read-only metadata: a value in any other format is logged
/// and decoded as `None` instead of failing the whole response.
pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawTimestamp {
        Text(String),
        Number(i64),
        Other(IgnoredAny),
    }

    let parsed = match Option::<RawTimestamp>::deserialize(deserializer)? {
        None => return Ok(None),
        Some(RawTimestamp::Text(s)) if s.is_empty() => return Ok(None),
        Some(RawTimestamp::Text(s)) => DateTime::parse_from_rfc3339(&s)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(|e| format!("'{s}' is not an RFC 3339 timestamp: {e}")),
        Some(RawTimestamp::Number(ts)) => {
            from_unix_timestamp(ts).ok_or_else(|| format!("{ts} is out of range"))
        }
        Some(RawTimestamp::Other(_)) => Err("unexpected JSON type".to_string()),
    };

    Ok(parsed
        .inspect_err(|reason| log::warn!("[ionos] Ignoring changeDate: {reason}"))
        .ok())
}

/// Values above 10^11 are taken as milliseconds, everything else as seconds.
fn from_unix_timestamp(ts: i64) -> Option<DateTime<Utc>> {
    if ts > 100_000_000_000 {
        DateTime::from_timestamp_millis(ts)
    } else {
        DateTime::from_timestamp(ts, 0)
    }
}
