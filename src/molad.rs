// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Mean lunar conjunction (molad) arithmetic.
//!
//! The molad of a month is the epoch molad plus one mean synodic month
//! (29 d 12 h 793 parts) per elapsed month, reduced modulo the 7-day
//! week. Hours are shifted from the 18:00-based Hebrew day start to
//! civil midnight, so `hour` reads like a clock.

use crate::hebrew::{
    self, months_in_year, Month, HOURS_PER_DAY, MOLAD_EPOCH_HOURS, MOLAD_EPOCH_PARTS, MONTH_DAYS,
    MONTH_EXTRA_HOURS, MONTH_EXTRA_PARTS, PARTS_PER_HOUR,
};
use chrono::Weekday;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Chalakim per minute: 1080 parts/hour over 60 minutes.
const PARTS_PER_MINUTE: i64 = PARTS_PER_HOUR / 60;

/// Shift from the 18:00 Hebrew day start to civil midnight.
const CIVIL_HOUR_SHIFT: i64 = 6;

/// The mean conjunction instant for one Hebrew month.
///
/// An immutable value computed on demand by [`Molad::new`]; the time of
/// week is exact to the chelek (1/1080 hour).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Molad {
    year: i32,
    month: Month,
    /// Day of week, 0 = Sunday.
    day_of_week: u8,
    /// Civil hour of day, 0–23.
    hour: u8,
    /// Minutes past the hour, 0–59.
    minutes: u8,
    /// Parts past the minute, 0–17.
    chalakim: u8,
}

impl Molad {
    /// Compute the molad for a month of a Hebrew year.
    ///
    /// Deterministic for any year/month pair; months before Tishrei in
    /// the Biblical numbering belong to the civil year that started the
    /// previous Tishrei.
    pub fn new(year: i32, month: Month) -> Self {
        let mut month_offset = i64::from(month.number()) - i64::from(Month::Tishrei.number());
        if month_offset < 0 {
            month_offset += i64::from(months_in_year(year));
        }
        let months = hebrew::months_elapsed(year) + month_offset;

        let parts_elapsed = MOLAD_EPOCH_PARTS + MONTH_EXTRA_PARTS * months.rem_euclid(PARTS_PER_HOUR);
        let hours_elapsed = MOLAD_EPOCH_HOURS
            + MONTH_EXTRA_HOURS * months
            + MONTH_EXTRA_PARTS * months.div_euclid(PARTS_PER_HOUR)
            + parts_elapsed.div_euclid(PARTS_PER_HOUR)
            - CIVIL_HOUR_SHIFT;
        let day = 1 + MONTH_DAYS * months + hours_elapsed.div_euclid(HOURS_PER_DAY);
        let parts_of_hour = parts_elapsed.rem_euclid(PARTS_PER_HOUR);

        Self {
            year,
            month,
            day_of_week: day.rem_euclid(7) as u8,
            hour: hours_elapsed.rem_euclid(HOURS_PER_DAY) as u8,
            minutes: (parts_of_hour / PARTS_PER_MINUTE) as u8,
            chalakim: (parts_of_hour % PARTS_PER_MINUTE) as u8,
        }
    }

    /// Hebrew year this molad belongs to.
    #[inline]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Month this molad announces.
    #[inline]
    pub const fn month(&self) -> Month {
        self.month
    }

    /// Day of week, 0 = Sunday through 6 = Saturday.
    #[inline]
    pub const fn day_of_week(&self) -> u8 {
        self.day_of_week
    }

    /// Civil hour of day, 0–23.
    #[inline]
    pub const fn hour(&self) -> u8 {
        self.hour
    }

    /// Minutes past the hour, 0–59.
    #[inline]
    pub const fn minutes(&self) -> u8 {
        self.minutes
    }

    /// Parts past the minute, 0–17.
    #[inline]
    pub const fn chalakim(&self) -> u8 {
        self.chalakim
    }

    /// Day of week as a chrono [`Weekday`].
    pub const fn weekday(&self) -> Weekday {
        match self.day_of_week {
            0 => Weekday::Sun,
            1 => Weekday::Mon,
            2 => Weekday::Tue,
            3 => Weekday::Wed,
            4 => Weekday::Thu,
            5 => Weekday::Fri,
            _ => Weekday::Sat,
        }
    }
}

const DOW_SHORT: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

impl std::fmt::Display for Molad {
    /// Renders like "Sat, 10 minutes and 16 chalakim after 16:00".
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}, {} minutes and {} chalakim after {}:00",
            DOW_SHORT[usize::from(self.day_of_week)],
            self.minutes,
            self.chalakim,
            self.hour
        )
    }
}
