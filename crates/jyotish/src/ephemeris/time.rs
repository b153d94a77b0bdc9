use crate::error::EngineError;
use chrono::{DateTime, NaiveDate, TimeZone, Utc};

/// 2000-01-01T00:00:00Z, the mean-motion epoch, in Unix milliseconds
pub const EPOCH_UNIX_MILLIS: i64 = 946_684_800_000;
pub const MILLIS_PER_DAY: f64 = 86_400_000.0;
const UNIX_EPOCH_JULIAN_DAY: f64 = 2_440_587.5;

/// Fractional days elapsed since the mean-motion epoch (negative before it).
pub fn days_since_epoch(dt: DateTime<Utc>) -> f64 {
    (dt.timestamp_millis() - EPOCH_UNIX_MILLIS) as f64 / MILLIS_PER_DAY
}

/// Convert UTC datetime to Julian Day
pub fn julian_day(dt: DateTime<Utc>) -> f64 {
    dt.timestamp_millis() as f64 / MILLIS_PER_DAY + UNIX_EPOCH_JULIAN_DAY
}

/// Parse a request date. `None` or an empty string means now.
///
/// Accepts `YYYY-MM-DD` (midnight UTC) or an RFC 3339 timestamp.
pub fn parse_date(input: Option<&str>) -> Result<DateTime<Utc>, EngineError> {
    let raw = match input.map(str::trim) {
        None | Some("") => return Ok(Utc::now()),
        Some(raw) => raw,
    };

    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return midnight_utc(date);
    }

    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| EngineError::InvalidInput(format!("Unparseable date '{raw}': {e}")))
}

/// Midnight UTC at the start of a calendar date.
pub fn midnight_utc(date: NaiveDate) -> Result<DateTime<Utc>, EngineError> {
    let naive = date
        .and_hms_opt(0, 0, 0)
        .ok_or_else(|| EngineError::InvalidInput(format!("Invalid date {date}")))?;
    Ok(Utc.from_utc_datetime(&naive))
}
