use chrono::{DateTime, SecondsFormat, Utc};

/// Format `now` as an ISO-8601 timestamp with millisecond precision and a `Z` suffix, e.g. `2024-03-01T12:00:00.000Z`.
pub fn timestamp(now: DateTime<Utc>) -> String {
	now.to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[test]
fn test_timestamp() {
	use chrono::TimeZone;
	let now = Utc.ymd(2024, 3, 1).and_hms_milli(12, 30, 5, 42);
	assert_eq!(timestamp(now), "2024-03-01T12:30:05.042Z");
}
