// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Hebrew calendar dates and their absolute-day conversions.
//!
//! [`HebrewDate`] is a plain (year, month, day) value; the bijection
//! with [`RataDie`] goes through [`crate::hebrew::elapsed_days`] plus a
//! civil-order month offset. Validation happens once, in
//! [`HebrewDate::new`] — the conversion routines assume a valid triple.

use crate::error::{CalendarError, Result};
use crate::greg::RataDie;
use crate::hebrew::{days_in_month, elapsed_days, is_leap_year, months_in_year, Month};
use chrono::{NaiveDate, Weekday};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Absolute day just before Tishrei 1 of Hebrew year 1, so that
/// `HEBREW_EPOCH + elapsed_days(y)` is Tishrei 1 of year `y`.
const HEBREW_EPOCH: i64 = -1_373_428;

/// Mean Hebrew year length in days, used only to seed the year scan.
const MEAN_YEAR_DAYS: f64 = 365.2468;

/// A date on the Hebrew calendar.
///
/// `month` uses the Biblical numbering (Nisan = 1, Tishrei = 7); `day`
/// is 1-based. Construct through [`HebrewDate::new`] to get the
/// month-in-year and day-in-month checks.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HebrewDate {
    year: i32,
    month: Month,
    day: u8,
}

impl HebrewDate {
    /// Create a validated Hebrew date.
    ///
    /// Rejects month 13 in a common year and any day past the month's
    /// length for that year.
    pub fn new(year: i32, month: Month, day: u8) -> Result<Self> {
        if month.number() > months_in_year(year) {
            return Err(CalendarError::InvalidMonth {
                month: month.number(),
                year,
            });
        }
        if day == 0 || day > days_in_month(month, year) {
            return Err(CalendarError::InvalidDay {
                day,
                month: month.number(),
                year,
            });
        }
        Ok(Self { year, month, day })
    }

    /// Hebrew year.
    #[inline]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Hebrew month.
    #[inline]
    pub const fn month(&self) -> Month {
        self.month
    }

    /// Day of month, 1–30.
    #[inline]
    pub const fn day(&self) -> u8 {
        self.day
    }

    /// Absolute day of this Hebrew date.
    pub fn to_rata_die(&self) -> RataDie {
        RataDie::new(
            HEBREW_EPOCH
                + elapsed_days(self.year)
                + days_before_month(self.year, self.month)
                + i64::from(self.day),
        ) - 1
    }

    /// Hebrew date of an absolute day. Exact inverse of
    /// [`HebrewDate::to_rata_die`] for every valid date.
    ///
    /// Seeds the year from the mean year length, then corrects with a
    /// bounded scan (at most a few steps — the estimate is off by at
    /// most one or two years), and finally walks the months in civil
    /// order (at most 13 steps).
    pub fn from_rata_die(rd: RataDie) -> Self {
        let d = rd.value();

        let mut year = (((d - HEBREW_EPOCH) as f64) / MEAN_YEAR_DAYS) as i32;
        if year < 1 {
            year = 1;
        }
        while year > 1 && d < first_of_year(year) {
            year -= 1;
        }
        while d >= first_of_year(year + 1) {
            year += 1;
        }

        // The year scan guarantees d falls before Tishrei 1 of year+1,
        // so this loop terminates within months_in_year(year) steps.
        let mut month = Month::Tishrei;
        loop {
            let first = first_of_year(year) + days_before_month(year, month);
            let len = i64::from(days_in_month(month, year));
            if d < first + len {
                return Self {
                    year,
                    month,
                    day: (d - first + 1) as u8,
                };
            }
            month = month.next_in_year(year);
        }
    }

    /// Hebrew date of a Gregorian calendar date.
    pub fn from_gregorian(date: NaiveDate) -> Self {
        Self::from_rata_die(RataDie::from_gregorian(date))
    }

    /// Gregorian calendar date of this Hebrew date, `None` outside
    /// chrono's representable range.
    pub fn to_gregorian(&self) -> Option<NaiveDate> {
        self.to_rata_die().to_gregorian()
    }

    /// Day of the week of this date.
    pub fn weekday(&self) -> Weekday {
        self.to_rata_die().weekday()
    }
}

impl std::fmt::Display for HebrewDate {
    /// Renders like "23 Kislev 5769".
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.day,
            self.month.name(is_leap_year(self.year)),
            self.year
        )
    }
}

/// Tishrei 1 of `year` on the absolute day axis.
fn first_of_year(year: i32) -> i64 {
    HEBREW_EPOCH + elapsed_days(year)
}

/// Days of the year preceding `month`, iterating the civil order
/// Tishrei → Elul (months before Tishrei in the Biblical numbering come
/// at the end of the civil year).
fn days_before_month(year: i32, month: Month) -> i64 {
    let mut days = 0i64;
    let mut m = Month::Tishrei;
    while m != month {
        days += i64::from(days_in_month(m, year));
        m = m.next_in_year(year);
    }
    days
}
