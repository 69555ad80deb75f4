use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// `null` 与缺失字段一样按默认值处理
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// ============ Zones ============

/// A DNS zone owned by the account, as returned by `GET /v1/zones`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Zone {
    /// Vendor-assigned zone identifier (UUID).
    #[serde(default)]
    pub id: String,
    /// Zone name, e.g. `example.com`.
    #[serde(default)]
    pub name: String,
    /// Zone type as reported by the API (`NATIVE` or `SLAVE`).
    #[serde(rename = "type", default)]
    pub zone_type: String,
}

/// A zone together with its records, as returned by `GET /v1/zones/{zoneId}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerZone {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type", default)]
    pub zone_type: String,
    /// Records of the zone, narrowed by the request's filter if one was given.
    #[serde(default, deserialize_with = "null_as_default")]
    pub records: Vec<Record>,
}

// ============ Records ============

/// A DNS resource record.
///
/// Used both for reads (every field the API knows is filled in) and for
/// writes, where only `name`, `record_type`, `content` and the optional
/// metadata are meaningful. Empty fields are left out of the JSON body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    /// Vendor-assigned record identifier; `None` for records built locally.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Fully qualified record name, e.g. `www.example.com`.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    /// Name of the zone the record belongs to (read-only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root_name: Option<String>,
    /// Record type, e.g. `A`, `AAAA`, `TXT`, `CNAME`, `MX`.
    #[serde(rename = "type", default, skip_serializing_if = "String::is_empty")]
    pub record_type: String,
    /// Record content, e.g. an address or the TXT payload.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub content: String,
    /// Last modification time (read-only).
    #[serde(
        default,
        with = "crate::utils::datetime",
        skip_serializing_if = "Option::is_none"
    )]
    pub change_date: Option<DateTime<Utc>>,
    /// Time to live in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ttl: Option<u32>,
    /// Priority (MX, SRV).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prio: Option<u16>,
    /// Whether the record is disabled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disabled: Option<bool>,
}

impl Record {
    /// Build a record for a write request.
    pub fn new(
        name: impl Into<String>,
        record_type: impl Into<String>,
        content: impl Into<String>,
        ttl: u32,
    ) -> Self {
        Self {
            name: name.into(),
            record_type: record_type.into(),
            content: content.into(),
            ttl: Some(ttl),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_prio(mut self, prio: u16) -> Self {
        self.prio = Some(prio);
        self
    }

    #[must_use]
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = Some(disabled);
        self
    }
}

// ============ Filter ============

/// Optional query parameters narrowing `get_records`.
///
/// Each field maps to exactly one query parameter; `None` and empty values
/// are not sent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordsFilter {
    /// Only records whose name ends with this suffix (`suffix`).
    pub suffix: Option<String>,
    /// Only records with exactly this name (`recordName`).
    pub record_name: Option<String>,
    /// Only records of this type (`recordType`).
    pub record_type: Option<String>,
}

impl RecordsFilter {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = Some(suffix.into());
        self
    }

    #[must_use]
    pub fn record_name(mut self, record_name: impl Into<String>) -> Self {
        self.record_name = Some(record_name.into());
        self
    }

    #[must_use]
    pub fn record_type(mut self, record_type: impl Into<String>) -> Self {
        self.record_type = Some(record_type.into());
        self
    }

    /// Query parameters for this filter, sorted by key.
    pub fn to_query_pairs(&self) -> Vec<(&'static str, &str)> {
        [
            ("recordName", self.record_name.as_deref()),
            ("recordType", self.record_type.as_deref()),
            ("suffix", self.suffix.as_deref()),
        ]
        .into_iter()
        .filter_map(|(key, value)| match value {
            Some(v) if !v.is_empty() => Some((key, v)),
            _ => None,
        })
        .collect()
    }

    /// Percent-encoded query string (without the leading `?`).
    ///
    /// Empty when no field is set.
    pub fn to_query_string(&self) -> String {
        self.to_query_pairs()
            .into_iter()
            .map(|(key, value)| format!("{key}={}", urlencoding::encode(value)))
            .collect::<Vec<_>>()
            .join("&")
    }
}
