//! Calendar-day window arithmetic
//!
//! The daily-limit and deleted-today rules both work on "today" as seen from
//! a fixed UTC offset. Both checks call this one function so they can never
//! disagree about where the day boundary falls.

use chrono::{DateTime, Duration, NaiveTime, Utc};

/// UTC bounds `[start, end)` of the calendar day containing `now` at the
/// given fixed offset (in minutes east of UTC).
pub fn day_bounds(now: DateTime<Utc>, offset_minutes: i32) -> (DateTime<Utc>, DateTime<Utc>) {
    let offset = Duration::minutes(i64::from(offset_minutes));
    let local = now + offset;
    let start_local = local.date_naive().and_time(NaiveTime::MIN);
    let start = start_local.and_utc() - offset;
    (start, start + Duration::days(1))
}
