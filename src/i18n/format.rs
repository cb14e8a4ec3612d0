// SPDX-License-Identifier: MPL-2.0
//! Locale-aware date and time formatting.

use super::catalog::LocaleConfig;
use crate::config::{DAYS_LIMIT, HOURS_LIMIT, JUST_NOW_LIMIT_SECS, MINUTES_LIMIT};
use chrono::{DateTime, Duration, TimeZone};
use std::fmt::Display;

/// Calendar date in the locale's long form, e.g. `16 October 2026`.
pub fn format_date<Tz: TimeZone>(locale: &LocaleConfig, date: &DateTime<Tz>) -> String
where
    Tz::Offset: Display,
{
    date.format_localized(locale.date_pattern, locale.time_locale)
        .to_string()
}

/// Time of day, e.g. `14:05` or `2:05 PM`.
pub fn format_time<Tz: TimeZone>(locale: &LocaleConfig, date: &DateTime<Tz>) -> String
where
    Tz::Offset: Display,
{
    date.format_localized(locale.time_pattern, locale.time_locale)
        .to_string()
}

pub fn format_date_time<Tz: TimeZone>(locale: &LocaleConfig, date: &DateTime<Tz>) -> String
where
    Tz::Offset: Display,
{
    format!("{}, {}", format_date(locale, date), format_time(locale, date))
}

/// How an elapsed duration is expressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelativeBucket {
    JustNow,
    Minutes(i64),
    Hours(i64),
    Days(i64),
    /// Too old for a relative phrase; show the calendar date.
    Calendar,
}

/// Buckets `elapsed` using fixed thresholds.
///
/// Negative durations (timestamps in the future) read as "just now".
pub fn relative_bucket(elapsed: Duration) -> RelativeBucket {
    if elapsed.num_seconds() < JUST_NOW_LIMIT_SECS {
        return RelativeBucket::JustNow;
    }
    let minutes = elapsed.num_minutes();
    if minutes < MINUTES_LIMIT {
        return RelativeBucket::Minutes(minutes);
    }
    let hours = elapsed.num_hours();
    if hours < HOURS_LIMIT {
        return RelativeBucket::Hours(hours);
    }
    let days = elapsed.num_days();
    if days < DAYS_LIMIT {
        return RelativeBucket::Days(days);
    }
    RelativeBucket::Calendar
}
