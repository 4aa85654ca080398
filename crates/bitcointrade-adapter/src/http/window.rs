/*
[INPUT]:  A window length in hours and the current instant
[OUTPUT]: Start/end timestamps formatted for trade-history query strings
[POS]:    HTTP layer - exchange-local time-window construction
[UPDATE]: When the exchange changes its timestamp format or time zone
*/

use chrono::{DateTime, Duration, FixedOffset, SecondsFormat, Utc};

/// The exchange reports and filters in Brasília time. The region has kept a
/// fixed -03:00 offset since DST was abolished in 2019.
const EXCHANGE_UTC_OFFSET_SECS: i32 = -3 * 3600;

/// A `[now - hours, now]` window in exchange-local time, with both bounds
/// pre-formatted as offset-qualified timestamps ready to embed in a query
/// string. No further URL-encoding is applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeWindow {
    pub start: String,
    pub end: String,
}

impl TimeWindow {
    /// Window covering the last `hours` hours, ending now.
    pub fn last_hours(hours: i64) -> Self {
        Self::ending_at(Utc::now(), hours)
    }

    /// Window of `hours` hours ending at the given instant. Split out so
    /// tests can pin the clock.
    pub(crate) fn ending_at(end: DateTime<Utc>, hours: i64) -> Self {
        let offset = FixedOffset::east_opt(EXCHANGE_UTC_OFFSET_SECS)
            .expect("offset is a valid constant");
        let end_local = end.with_timezone(&offset);
        let start_local = end_local - Duration::hours(hours);

        Self {
            start: format_timestamp(start_local),
            end: format_timestamp(end_local),
        }
    }
}

/// RFC 3339 with whole seconds and a numeric offset, e.g.
/// `2026-08-27T10:15:00-03:00`.
fn format_timestamp(t: DateTime<FixedOffset>) -> String {
    t.to_rfc3339_opts(SecondsFormat::Secs, false)
}
