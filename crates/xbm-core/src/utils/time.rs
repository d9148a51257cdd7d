//! Timestamp formatting.

use chrono::{DateTime, SecondsFormat, Utc};

/// Current time as RFC 3339 UTC with millisecond precision,
/// e.g. `2026-02-20T00:00:00.000Z`.
pub fn now_timestamp() -> String {
    format_timestamp(Utc::now())
}

pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}
