use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Utc};

/// `2025-11-29T10:00:00.000Z`, the shape the content API uses for timestamps.
pub fn iso_timestamp(instant: DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Parses the date formats seen in issue payloads: RFC 3339 timestamps, naive
/// timestamps (read as UTC) and bare `YYYY-MM-DD` dates (midnight UTC).
pub fn parse_issue_date(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();

    if let Ok(instant) = DateTime::parse_from_rfc3339(raw) {
        return Some(instant.with_timezone(&Utc));
    }
    if let Ok(instant) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(instant.and_utc());
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|instant| instant.and_utc())
}

/// `Nov 29, 2025`. Dates that cannot be parsed are shown as they came in.
pub fn format_short(raw: &str) -> String {
    match parse_issue_date(raw) {
        Some(instant) => instant.format("%b %-d, %Y").to_string(),
        None => raw.to_string(),
    }
}
