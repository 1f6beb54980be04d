//! Timestamp normalizer.
//!
//! Hobby logs record dates in whatever notation was convenient at the time:
//! full dates in a handful of layouts, bare years, winter seasons written as
//! `"2018/2019"`, and inclusive year ranges written as `"2015-2019"`. This
//! module converts all of them into epoch-second integers, the universal
//! timestamp representation of the series store.

use chrono::{Datelike, NaiveDate, Utc};

/// Date layouts accepted by [`parse_date`], tried in order.
const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%m/%d/%Y",
    "%m/%d/%y",
    "%Y/%m/%d",
    "%B %d, %Y",
    "%b %d, %Y",
    "%d %B %Y",
    "%d %b %Y",
];

/// Datetime layouts accepted by [`parse_date`] after the date-only ones.
const DATETIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

/// Parse a free-form date string into epoch seconds at midnight UTC.
///
/// A bare 4-digit year is accepted too: the missing month and day default to
/// today's, per [`year_to_timestamp`]. Only the year is semantically
/// meaningful for such inputs, so callers must tolerate the approximation.
///
/// Returns `None` for anything unparseable (including pre-epoch dates, which
/// cannot be represented as an unsigned timestamp).
pub fn parse_date(s: &str) -> Option<u64> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    // Bare year, e.g. "2019".
    if s.len() == 4 && s.bytes().all(|b| b.is_ascii_digit()) {
        return year_to_timestamp(s.parse().ok()?);
    }

    // A format may match but land outside the unsigned epoch range, e.g.
    // "%m/%d/%Y" reads "01/01/22" as year 22; keep trying the later
    // two-digit-year layout instead of giving up.
    for fmt in DATE_FORMATS {
        if let Some(ts) = NaiveDate::parse_from_str(s, fmt)
            .ok()
            .and_then(date_to_epoch)
        {
            return Some(ts);
        }
    }

    for fmt in DATETIME_FORMATS {
        if let Some(ts) = chrono::NaiveDateTime::parse_from_str(s, fmt)
            .ok()
            .and_then(|dt| u64::try_from(dt.and_utc().timestamp()).ok())
        {
            return Some(ts);
        }
    }

    None
}

/// Convert a bare year to epoch seconds: today's month and day with the
/// given year, at midnight UTC.
///
/// If today's month/day does not exist in the target year (Feb 29), the day
/// is clamped to 28.
pub fn year_to_timestamp(year: i32) -> Option<u64> {
    let today = Utc::now().date_naive();
    let date = NaiveDate::from_ymd_opt(year, today.month(), today.day())
        .or_else(|| NaiveDate::from_ymd_opt(year, today.month(), 28))?;
    date_to_epoch(date)
}

/// Resolve the `Years` column of a trip-count log into a list of years.
///
/// * `"2018/2019"` — season notation; the latter year represents the season.
/// * `"2015-2019"` — inclusive range, `[2015, 2016, 2017, 2018, 2019]`.
/// * `"2019"` — a single year.
///
/// Returns `None` for anything else (non-numeric parts, reversed ranges).
pub fn resolve_year_field(s: &str) -> Option<Vec<i32>> {
    let s = s.trim();

    if let Some((_, latter)) = s.split_once('/') {
        return Some(vec![latter.trim().parse().ok()?]);
    }

    if let Some((start, end)) = s.split_once('-') {
        let start: i32 = start.trim().parse().ok()?;
        let end: i32 = end.trim().parse().ok()?;
        if end < start {
            return None;
        }
        return Some((start..=end).collect());
    }

    Some(vec![s.parse().ok()?])
}

fn date_to_epoch(date: NaiveDate) -> Option<u64> {
    let midnight = date.and_hms_opt(0, 0, 0)?;
    u64::try_from(midnight.and_utc().timestamp()).ok()
}
