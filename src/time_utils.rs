// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared helpers for date/time formatting.

use chrono::{DateTime, Datelike, Local, SecondsFormat, TimeZone, Utc};

/// English month names, indexed from January = 0. Not locale-aware.
pub const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Format a UTC timestamp as RFC3339 with millisecond precision and a `Z` suffix.
pub fn format_utc_rfc3339(date: DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Format the local calendar day of a timestamp as `"<Month> <day>"`.
pub fn month_day(date: DateTime<Utc>) -> String {
    month_day_in(date, &Local)
}

/// Format the calendar day of a timestamp in `tz` as `"<Month> <day>"`.
pub fn month_day_in<Tz: TimeZone>(date: DateTime<Utc>, tz: &Tz) -> String {
    let local = date.with_timezone(tz);
    format!("{} {}", MONTHS[local.month0() as usize], local.day())
}
