use std::fmt;

use chrono::{DateTime, FixedOffset, NaiveDateTime};

use rmcp::schemars;
use serde::{Deserialize, Serialize};

/// ISO 8601 timestamp as sent by the remote: RFC 3339, or a bare date-time
/// without offset (claims). Validated on the way in, original text kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Timestamp(String);

const NAIVE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

impl Timestamp {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Parsed instant; offset-less values are read as UTC.
    pub fn to_datetime(&self) -> Option<DateTime<FixedOffset>> {
        parse(&self.0)
    }
}

fn parse(raw: &str) -> Option<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(raw).ok().or_else(|| {
        NaiveDateTime::parse_from_str(raw, NAIVE_FORMAT)
            .ok()
            .map(|naive| naive.and_utc().fixed_offset())
    })
}

impl TryFrom<String> for Timestamp {
    type Error = String;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        if parse(&raw).is_none() {
            return Err(format!("invalid ISO 8601 timestamp {raw:?}"));
        }
        Ok(Self(raw))
    }
}

impl From<Timestamp> for String {
    fn from(ts: Timestamp) -> Self {
        ts.0
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Product rating left by a buyer, 1 to 5 stars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct Rating(u8);

impl Rating {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<i64> for Rating {
    type Error = String;

    fn try_from(v: i64) -> Result<Self, Self::Error> {
        if v < i64::from(Self::MIN) || v > i64::from(Self::MAX) {
            return Err(format!("rating must be between 1 and 5, got {v}"));
        }
        Ok(Self(v as u8))
    }
}

impl From<Rating> for i64 {
    fn from(r: Rating) -> Self {
        i64::from(r.0)
    }
}

/// Sort order by creation date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum SortOrder {
    /// Oldest first.
    DateAsc,
    /// Newest first.
    DateDesc,
}
