// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Absolute day counts (Rata Die) and proleptic-Gregorian conversions.
//!
//! [`RataDie`] is the linear day axis everything else in the crate is
//! anchored to: day 1 is January 1 of year 1 on the proleptic Gregorian
//! calendar, and the count is strictly monotonic with calendar date.
//! The Hebrew conversions in [`crate::hdate`] and the weekday helpers
//! below all reduce to arithmetic on this integer.

use chrono::{Datelike, NaiveDate, Weekday};
use std::ops::{Add, AddAssign, Sub, SubAssign};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Days in the 400/100/4/1-year Gregorian cycles.
const DAYS_PER_400_YEARS: i64 = 146_097;
const DAYS_PER_100_YEARS: i64 = 36_524;
const DAYS_PER_4_YEARS: i64 = 1_461;
const DAYS_PER_YEAR: i64 = 365;

/// A point on the absolute day axis.
///
/// Stores the count of days since December 31 of 1 BCE (proleptic
/// Gregorian), so `RataDie::new(1)` is January 1 of year 1. The type is
/// `Copy` and layout-identical to an `i64`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RataDie(i64);

impl RataDie {
    /// Create from a raw day count.
    #[inline]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// The underlying day count.
    #[inline]
    pub const fn value(&self) -> i64 {
        self.0
    }

    /// Absolute day of a proleptic-Gregorian calendar date.
    ///
    /// Days in prior complete years (with the Gregorian leap rule) plus
    /// the ordinal day within the target year.
    pub fn from_gregorian(date: NaiveDate) -> Self {
        let prior = i64::from(date.year()) - 1;
        Self(
            DAYS_PER_YEAR * prior + prior.div_euclid(4) - prior.div_euclid(100)
                + prior.div_euclid(400)
                + i64::from(date.ordinal()),
        )
    }

    /// Gregorian calendar date of this absolute day.
    ///
    /// Splits the day count into complete 400-, 100-, 4- and 1-year
    /// cycles to bound the year, then delegates the ordinal-to-month
    /// step to chrono. Exact inverse of [`RataDie::from_gregorian`].
    /// Returns `None` if the year falls outside chrono's representable
    /// range.
    pub fn to_gregorian(self) -> Option<NaiveDate> {
        let d0 = self.0 - 1;
        let n400 = d0.div_euclid(DAYS_PER_400_YEARS);
        let d1 = d0.rem_euclid(DAYS_PER_400_YEARS);
        let n100 = d1 / DAYS_PER_100_YEARS;
        let d2 = d1 % DAYS_PER_100_YEARS;
        let n4 = d2 / DAYS_PER_4_YEARS;
        let d3 = d2 % DAYS_PER_4_YEARS;
        let n1 = d3 / DAYS_PER_YEAR;

        let year = 400 * n400 + 100 * n100 + 4 * n4 + n1;
        if n100 == 4 || n1 == 4 {
            // Last day of a leap year closing a 4- or 400-year cycle.
            NaiveDate::from_ymd_opt(i32::try_from(year).ok()?, 12, 31)
        } else {
            let ordinal = u32::try_from(d3 % DAYS_PER_YEAR + 1).ok()?;
            NaiveDate::from_yo_opt(i32::try_from(year + 1).ok()?, ordinal)
        }
    }

    /// Day of the week of this absolute day.
    ///
    /// Day 1 (January 1 of year 1) was a Monday.
    pub fn weekday(self) -> Weekday {
        match self.0.rem_euclid(7) {
            0 => Weekday::Sun,
            1 => Weekday::Mon,
            2 => Weekday::Tue,
            3 => Weekday::Wed,
            4 => Weekday::Thu,
            5 => Weekday::Fri,
            _ => Weekday::Sat,
        }
    }

    /// The closest day with the given weekday on or before this day.
    ///
    /// Applying this to `self + 6` yields the weekday on or *after*
    /// `self`, and to `self + 3` the nearest such weekday.
    pub fn day_on_or_before(self, weekday: Weekday) -> Self {
        let dow = i64::from(weekday.num_days_from_sunday());
        Self(self.0 - (self.0 - dow).rem_euclid(7))
    }
}

impl std::fmt::Display for RataDie {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "R.D. {}", self.0)
    }
}

// ── Arithmetic ────────────────────────────────────────────────────────────

impl Add<i64> for RataDie {
    type Output = Self;
    #[inline]
    fn add(self, rhs: i64) -> Self {
        Self(self.0 + rhs)
    }
}

impl AddAssign<i64> for RataDie {
    #[inline]
    fn add_assign(&mut self, rhs: i64) {
        self.0 += rhs;
    }
}

impl Sub<i64> for RataDie {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: i64) -> Self {
        Self(self.0 - rhs)
    }
}

impl SubAssign<i64> for RataDie {
    #[inline]
    fn sub_assign(&mut self, rhs: i64) {
        self.0 -= rhs;
    }
}

impl Sub for RataDie {
    type Output = i64;
    #[inline]
    fn sub(self, rhs: Self) -> i64 {
        self.0 - rhs.0
    }
}

// ── Free helpers ──────────────────────────────────────────────────────────

/// Gregorian leap-year rule: divisible by 4, except centuries not
/// divisible by 400.
#[inline]
pub const fn is_gregorian_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Number of days in a Gregorian month (1 = January).
pub const fn days_in_gregorian_month(month: u32, year: i32) -> u32 {
    match month {
        2 => {
            if is_gregorian_leap_year(year) {
                29
            } else {
                28
            }
        }
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}
