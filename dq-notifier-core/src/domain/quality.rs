// dq-notifier-core/src/domain/quality.rs

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::domain::error::DomainError;

/// Outcome of one ruleset evaluation, in the shape of `glue:GetDataQualityResult`.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct QualityResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result_id: Option<String>,

    #[serde(deserialize_with = "deserialize_timestamp")]
    pub started_on: DateTime<Utc>,
    #[serde(deserialize_with = "deserialize_timestamp")]
    pub completed_on: DateTime<Utc>,

    #[serde(default)]
    pub rule_results: Vec<RuleResult>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct RuleResult {
    pub name: String,
    pub result: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evaluation_message: Option<String>,
}

/// Accepts RFC 3339, naive ISO-8601 (read as UTC) and fractional epoch seconds.
pub fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, DomainError> {
    let raw = raw.trim();

    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Ok(ts.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Ok(naive.and_utc());
    }
    if let Ok(secs) = raw.parse::<f64>() {
        return from_epoch_seconds(secs);
    }

    Err(DomainError::InvalidTimestamp(raw.to_string()))
}

fn from_epoch_seconds(secs: f64) -> Result<DateTime<Utc>, DomainError> {
    if !secs.is_finite() {
        return Err(DomainError::InvalidTimestamp(secs.to_string()));
    }
    let whole = secs.floor();
    let nanos = ((secs - whole) * 1e9).round().min(999_999_999.0) as u32;
    DateTime::from_timestamp(whole as i64, nanos)
        .ok_or_else(|| DomainError::InvalidTimestamp(secs.to_string()))
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawTimestamp {
    Text(String),
    Epoch(f64),
}

fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let parsed = match RawTimestamp::deserialize(deserializer)? {
        RawTimestamp::Text(raw) => parse_timestamp(&raw),
        RawTimestamp::Epoch(secs) => from_epoch_seconds(secs),
    };
    parsed.map_err(serde::de::Error::custom)
}
