//! Date arithmetic and formatting helpers
//!
//! Every helper works on `DateTime<Tz>` for any `chrono` time zone. Helpers
//! that depend on the current time take `now` as a parameter; the `*_local`
//! variants read the system clock in the local zone.

use std::fmt::{Display, Write as _};

use chrono::{
    format::{Item, StrftimeItems},
    DateTime, Datelike, Days, Local, LocalResult, Months, NaiveDate, NaiveDateTime, NaiveTime,
    Offset, TimeZone, Timelike, Utc,
};
use tracing::trace;

use super::formats::YYYY_MM_DD_HH_MM_SS_SSS;
use crate::error::{DateError, Result};

/// Milliseconds since the Unix epoch
pub fn timestamp() -> i64 {
    Utc::now().timestamp_millis()
}

/// `a - b` in milliseconds
pub fn interval<A: TimeZone, B: TimeZone>(a: &DateTime<A>, b: &DateTime<B>) -> i64 {
    a.timestamp_millis() - b.timestamp_millis()
}

fn check_pattern(pattern: &str) -> Result<()> {
    if StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error)) {
        return Err(DateError::InvalidField(format!("bad pattern: {}", pattern)).into());
    }
    Ok(())
}

/// Formats `dt` with a strftime pattern (see [`super::formats`]).
pub fn format<Tz: TimeZone>(dt: &DateTime<Tz>, pattern: &str) -> Result<String>
where
    Tz::Offset: Display,
{
    check_pattern(pattern)?;
    let mut out = String::new();
    write!(out, "{}", dt.format(pattern))
        .map_err(|_| DateError::InvalidField(format!("cannot format with: {}", pattern)))?;
    Ok(out)
}

/// Parses `text` as a local time in `tz`. Date-only patterns yield midnight.
pub fn parse_date<Tz: TimeZone>(text: &str, tz: &Tz, pattern: &str) -> Result<DateTime<Tz>> {
    check_pattern(pattern)?;
    let naive = match NaiveDateTime::parse_from_str(text, pattern) {
        Ok(naive) => naive,
        Err(_) => NaiveDate::parse_from_str(text, pattern)
            .map_err(DateError::from)?
            .and_time(NaiveTime::MIN),
    };
    localize(tz, naive)
}

fn localize<Tz: TimeZone>(tz: &Tz, naive: NaiveDateTime) -> Result<DateTime<Tz>> {
    match tz.from_local_datetime(&naive) {
        LocalResult::Single(dt) => Ok(dt),
        _ => Err(DateError::Ambiguous(naive.to_string()).into()),
    }
}

/// Same calendar day as `dt`, at the given wall-clock time.
pub fn set_time<Tz: TimeZone>(dt: &DateTime<Tz>, hour: u32, min: u32, sec: u32, ms: u32) -> Result<DateTime<Tz>> {
    let time = NaiveTime::from_hms_milli_opt(hour, min, sec, ms)
        .ok_or_else(|| DateError::InvalidField(format!("{:02}:{:02}:{:02}.{:03}", hour, min, sec, ms)))?;
    localize(&dt.timezone(), dt.naive_local().date().and_time(time))
}

/// Same wall-clock time as `dt`, on the given date.
pub fn set_date<Tz: TimeZone>(dt: &DateTime<Tz>, year: i32, month: u32, day: u32) -> Result<DateTime<Tz>> {
    let date = NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| DateError::InvalidField(format!("{:04}-{:02}-{:02}", year, month, day)))?;
    localize(&dt.timezone(), date.and_time(dt.naive_local().time()))
}

/// Whether both instants fall in the same year and month, seen from `a`'s zone.
pub fn is_same_month<A: TimeZone, B: TimeZone>(a: &DateTime<A>, b: &DateTime<B>) -> bool {
    let b = b.with_timezone(&a.timezone());
    a.year() == b.year() && a.month() == b.month()
}

/// Earliest instant strictly after `now` whose wall-clock time is the given one.
pub fn next_near_day<Tz: TimeZone>(now: &DateTime<Tz>, hour: u32, min: u32, sec: u32, ms: u32) -> Result<DateTime<Tz>> {
    let next = set_time(now, hour, min, sec, ms)?;
    if next > *now {
        return Ok(next);
    }
    trace!("time already passed today, moving to tomorrow");
    let tomorrow = now
        .naive_local()
        .date()
        .checked_add_days(Days::new(1))
        .ok_or_else(|| DateError::InvalidField("date out of range".into()))?;
    localize(&now.timezone(), tomorrow.and_time(next.naive_local().time()))
}

/// Given day-of-month and time in the current month, or the following month
/// when that instant is already before `now`.
///
/// Days that do not exist in the target month are rejected.
pub fn next_near_month<Tz: TimeZone>(
    now: &DateTime<Tz>,
    day: u32,
    hour: u32,
    min: u32,
    sec: u32,
    ms: u32,
) -> Result<DateTime<Tz>> {
    let next = set_date(now, now.year(), now.month(), day)?;
    let next = set_time(&next, hour, min, sec, ms)?;
    if next >= *now {
        return Ok(next);
    }
    let naive = next
        .naive_local()
        .checked_add_months(Months::new(1))
        .filter(|n| n.day() == day)
        .ok_or_else(|| DateError::InvalidField(format!("day {} in next month", day)))?;
    localize(&now.timezone(), naive)
}

pub fn next_near_day_local(hour: u32, min: u32, sec: u32, ms: u32) -> Result<DateTime<Local>> {
    next_near_day(&Local::now(), hour, min, sec, ms)
}

pub fn next_near_month_local(day: u32, hour: u32, min: u32, sec: u32, ms: u32) -> Result<DateTime<Local>> {
    next_near_month(&Local::now(), day, hour, min, sec, ms)
}

/// Debug-friendly rendering: `2024-05-01 08:30:00.000 (GMT+8:00)`.
pub fn to_display_string<Tz: TimeZone>(dt: &DateTime<Tz>) -> String
where
    Tz::Offset: Display,
{
    let offset = dt.offset().fix().local_minus_utc();
    let hours = offset / 3600;
    let minutes = (offset / 60 - hours * 60).abs();
    let zone = if hours > 0 {
        format!("(GMT+{}:{:02})", hours, minutes)
    } else {
        format!("(GMT{}:{:02})", hours, minutes)
    };
    format!("{} {}", dt.format(YYYY_MM_DD_HH_MM_SS_SSS), zone)
}

/// Repairs an instant that was computed from wall-clock text read in the wrong
/// zone: shifts it by the difference between the two zones' offsets at that
/// instant.
pub fn correct_time_zone<From: TimeZone, To: TimeZone>(dt: &DateTime<Utc>, from: &From, to: &To) -> DateTime<Utc> {
    let naive = dt.naive_utc();
    let from_offset = from.offset_from_utc_datetime(&naive).fix().local_minus_utc();
    let to_offset = to.offset_from_utc_datetime(&naive).fix().local_minus_utc();
    *dt + chrono::Duration::seconds(i64::from(to_offset - from_offset))
}

/// Milliseconds part of the wall-clock time
pub fn millis<Tz: TimeZone>(dt: &DateTime<Tz>) -> u32 {
    dt.nanosecond() / 1_000_000
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datetime::formats::{YYYY_MM_DD, YYYY_MM_DD_HH_MM_SS};
    use crate::error::Error;
    use chrono::FixedOffset;

    fn utc8() -> FixedOffset {
        FixedOffset::east_opt(8 * 3600).unwrap()
    }

    fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<FixedOffset> {
        utc8().with_ymd_and_hms(y, mo, d, h, mi, s).unwrap()
    }

    #[test]
    fn test_interval() {
        let a = at(2024, 1, 1, 0, 0, 1);
        let b = at(2024, 1, 1, 0, 0, 0);
        assert_eq!(interval(&a, &b), 1000);
        assert_eq!(interval(&b, &a), -1000);
        assert_eq!(interval(&a, &a.with_timezone(&Utc)), 0);
    }

    #[test]
    fn test_format_and_parse() {
        let dt = at(2024, 3, 9, 7, 5, 0);
        assert_eq!(format(&dt, YYYY_MM_DD_HH_MM_SS).unwrap(), "2024-03-09 07:05:00");
        assert!(format(&dt, "%Q").is_err());

        let parsed = parse_date("2024-03-09 07:05:00", &utc8(), YYYY_MM_DD_HH_MM_SS).unwrap();
        assert_eq!(parsed, dt);
        let midnight = parse_date("2024-03-09", &utc8(), YYYY_MM_DD).unwrap();
        assert_eq!(midnight, at(2024, 3, 9, 0, 0, 0));

        let err = parse_date("not a date", &utc8(), YYYY_MM_DD).unwrap_err();
        assert!(matches!(err, Error::DateError(DateError::Parse(_))));
    }

    #[test]
    fn test_set_time_and_date() {
        let dt = at(2024, 3, 9, 7, 5, 0);
        let moved = set_time(&dt, 23, 59, 58, 250).unwrap();
        assert_eq!(format(&moved, YYYY_MM_DD_HH_MM_SS_SSS).unwrap(), "2024-03-09 23:59:58.250");
        assert_eq!(millis(&moved), 250);
        assert!(set_time(&dt, 24, 0, 0, 0).is_err());

        let moved = set_date(&dt, 2020, 2, 29).unwrap();
        assert_eq!(moved, at(2020, 2, 29, 7, 5, 0));
        assert!(matches!(set_date(&dt, 2021, 2, 29), Err(Error::DateError(DateError::InvalidField(_)))));
    }

    #[test]
    fn test_is_same_month() {
        assert!(is_same_month(&at(2024, 5, 1, 0, 0, 0), &at(2024, 5, 31, 23, 0, 0)));
        assert!(!is_same_month(&at(2024, 5, 1, 0, 0, 0), &at(2023, 5, 1, 0, 0, 0)));
        // 2024-05-01 00:30 at +8 is still April in UTC, compared in +8 here.
        let a = at(2024, 5, 1, 0, 30, 0);
        assert!(is_same_month(&a, &a.with_timezone(&Utc)));
    }

    #[test]
    fn test_next_near_day() {
        let now = at(2024, 3, 9, 12, 0, 0);
        assert_eq!(next_near_day(&now, 18, 0, 0, 0).unwrap(), at(2024, 3, 9, 18, 0, 0));
        assert_eq!(next_near_day(&now, 9, 0, 0, 0).unwrap(), at(2024, 3, 10, 9, 0, 0));
        // the exact same instant is not "after now"
        assert_eq!(next_near_day(&now, 12, 0, 0, 0).unwrap(), at(2024, 3, 10, 12, 0, 0));
    }

    #[test]
    fn test_next_near_month() {
        let now = at(2024, 3, 15, 12, 0, 0);
        assert_eq!(next_near_month(&now, 20, 8, 0, 0, 0).unwrap(), at(2024, 3, 20, 8, 0, 0));
        assert_eq!(next_near_month(&now, 10, 8, 0, 0, 0).unwrap(), at(2024, 4, 10, 8, 0, 0));
        assert_eq!(next_near_month(&now, 15, 12, 0, 0, 0).unwrap(), now);

        let now = at(2024, 1, 31, 12, 0, 0);
        assert!(next_near_month(&now, 31, 8, 0, 0, 0).is_err());
    }

    #[test]
    fn test_display_string() {
        let dt = at(2024, 3, 9, 7, 5, 0);
        assert_eq!(to_display_string(&dt), "2024-03-09 07:05:00.000 (GMT+8:00)");

        let west = FixedOffset::west_opt(4 * 3600 + 1800).unwrap();
        let dt = west.with_ymd_and_hms(2024, 3, 9, 7, 5, 0).unwrap();
        assert_eq!(to_display_string(&dt), "2024-03-09 07:05:00.000 (GMT-4:30)");
    }

    #[test]
    fn test_correct_time_zone() {
        // 08:00 read as UTC but meant as +8: true instant is 00:00 UTC.
        let wrong = Utc.with_ymd_and_hms(2024, 3, 9, 8, 0, 0).unwrap();
        let fixed = correct_time_zone(&wrong, &utc8(), &Utc);
        assert_eq!(fixed, Utc.with_ymd_and_hms(2024, 3, 9, 0, 0, 0).unwrap());
    }
}
