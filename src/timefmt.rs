// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Clock-time rendering helpers.
//!
//! Thin wrappers over chrono's `format` with two conventions attached:
//! a leading `24:` hour (produced by the `%k`-style patterns of some
//! locales) normalizes to `00:`, and rounding to the minute is half-up
//! on the seconds.

use chrono::{Duration, NaiveDateTime, Timelike};

/// Format a datetime with a chrono pattern (e.g. `"%H:%M"`).
///
/// A rendered hour of `24:` is rewritten to `00:` so midnight never
/// shows as hour twenty-four.
pub fn format_time(dt: &NaiveDateTime, fmt: &str) -> String {
    let out = dt.format(fmt).to_string();
    if let Some(rest) = out.strip_prefix("24:") {
        format!("00:{rest}")
    } else {
        out
    }
}

/// Round to the nearest minute, half-up: 30 seconds or more rounds
/// forward, under 30 truncates. Sub-second precision is discarded
/// either way.
pub fn round_to_minute(dt: NaiveDateTime) -> Option<NaiveDateTime> {
    let bump = if dt.second() >= 30 {
        Duration::minutes(1)
    } else {
        Duration::zero()
    };
    Some(dt.with_second(0)?.with_nanosecond(0)? + bump)
}

/// Round to the minute and format in one step.
///
/// `None` input (a time that does not exist for the day) stays `None`,
/// so the helper chains directly off the solar queries.
pub fn round_and_format_time(dt: Option<NaiveDateTime>, fmt: &str) -> Option<String> {
    let rounded = round_to_minute(dt?)?;
    Some(format_time(&rounded, fmt))
}
