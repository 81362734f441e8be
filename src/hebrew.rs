// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Hebrew calendar arithmetic.
//!
//! The fixed Hebrew calendar is driven by two mechanisms:
//!
//! 1. The 19-year Metonic cycle, which intercalates a 13th month in
//!    years 3, 6, 8, 11, 14, 17 and 19 of each cycle.
//! 2. The mean lunar conjunction (molad) of Tishrei, postponed by the
//!    four dechiyot rules to pick the actual weekday of Rosh Hashanah.
//!
//! Everything else — year lengths, the variable months Cheshvan and
//! Kislev, month lengths — derives from [`elapsed_days`].
//!
//! # Month numbering
//!
//! Months follow the Biblical numbering (Nisan = 1, Tishrei = 7), but
//! the civil year begins at Tishrei; iteration helpers therefore walk
//! the civil order Tishrei → Elul. In a common year month 12 *is* Adar;
//! Adar II (13) exists only in leap years.
//!
//! | Constant | Value | Meaning |
//! |----------|-------|---------|
//! | `MOLAD_EPOCH_HOURS`/`_PARTS` | 5 h 204 p | epoch molad (BaHaRaD: Monday, 5 h 204 parts) |
//! | `MONTH_DAYS`/`_EXTRA_HOURS`/`_EXTRA_PARTS` | 29 d 12 h 793 p | mean synodic month |
//! | `MOLAD_ZAKEN_PARTS` | 19 440 | 18 h — conjunction at/after midday |
//! | `GATARAD_PARTS` | 9 924 | 9 h 204 p — Tuesday molad, common year |
//! | `BETUTAKPAT_PARTS` | 16 789 | 15 h 589 p — Monday molad after leap year |

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ── Calendar constants ────────────────────────────────────────────────────

/// Chalakim (parts) per hour; one chelek is 1/1080 of an hour (3⅓ s).
pub(crate) const PARTS_PER_HOUR: i64 = 1_080;
pub(crate) const HOURS_PER_DAY: i64 = 24;

/// Epoch molad (BaHaRaD): day 2 of the week, 5 hours, 204 parts,
/// counted from the 18:00 start of the Hebrew day.
pub(crate) const MOLAD_EPOCH_HOURS: i64 = 5;
pub(crate) const MOLAD_EPOCH_PARTS: i64 = 204;

/// Mean synodic month: 29 days, 12 hours, 793 parts.
pub(crate) const MONTH_DAYS: i64 = 29;
pub(crate) const MONTH_EXTRA_HOURS: i64 = 12;
pub(crate) const MONTH_EXTRA_PARTS: i64 = 793;

/// Months in each 19-year Metonic cycle: 12 × 12 + 7 × 13.
const MONTHS_PER_CYCLE: i64 = 235;
const YEARS_PER_CYCLE: i64 = 19;

/// Dechiya thresholds, in parts past 18:00 of the conjunction day.
const MOLAD_ZAKEN_PARTS: i64 = 18 * PARTS_PER_HOUR; // 19 440
const GATARAD_PARTS: i64 = 9 * PARTS_PER_HOUR + 204; // 9 924
const BETUTAKPAT_PARTS: i64 = 15 * PARTS_PER_HOUR + 589; // 16 789

/// The six admissible Hebrew year lengths.
pub const YEAR_LENGTHS: [i64; 6] = [353, 354, 355, 383, 384, 385];

// ── Months ────────────────────────────────────────────────────────────────

/// Hebrew month, Biblical numbering (Nisan = 1, Tishrei = 7).
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(u8)]
pub enum Month {
    Nisan = 1,
    Iyyar,
    Sivan,
    Tamuz,
    Av,
    Elul,
    Tishrei,
    Cheshvan,
    Kislev,
    Tevet,
    Shvat,
    /// Adar in common years, Adar I in leap years.
    AdarI,
    /// Only exists in leap years.
    AdarII,
}

impl Month {
    /// Biblical month number, 1–13.
    #[inline]
    pub const fn number(self) -> u8 {
        self as u8
    }

    /// Month from its Biblical number, `None` outside 1–13.
    pub const fn from_number(n: u8) -> Option<Self> {
        Some(match n {
            1 => Self::Nisan,
            2 => Self::Iyyar,
            3 => Self::Sivan,
            4 => Self::Tamuz,
            5 => Self::Av,
            6 => Self::Elul,
            7 => Self::Tishrei,
            8 => Self::Cheshvan,
            9 => Self::Kislev,
            10 => Self::Tevet,
            11 => Self::Shvat,
            12 => Self::AdarI,
            13 => Self::AdarII,
            _ => return None,
        })
    }

    /// Next month in civil order (Tishrei → Elul) within the given year:
    /// Elul wraps to Tishrei, and the Adar of the year (I or II per leap
    /// status) is followed by Nisan.
    pub fn next_in_year(self, year: i32) -> Self {
        let n = self.number() % months_in_year(year) + 1;
        // n stays within 1..=13 for every month valid in `year`.
        Self::from_number(n).expect("month arithmetic stays in 1..=13")
    }

    /// Untranslated English month name; Adar I renders as plain "Adar"
    /// in common years.
    pub const fn name(self, leap: bool) -> &'static str {
        match self {
            Self::Nisan => "Nisan",
            Self::Iyyar => "Iyyar",
            Self::Sivan => "Sivan",
            Self::Tamuz => "Tamuz",
            Self::Av => "Av",
            Self::Elul => "Elul",
            Self::Tishrei => "Tishrei",
            Self::Cheshvan => "Cheshvan",
            Self::Kislev => "Kislev",
            Self::Tevet => "Tevet",
            Self::Shvat => "Sh'vat",
            Self::AdarI => {
                if leap {
                    "Adar I"
                } else {
                    "Adar"
                }
            }
            Self::AdarII => "Adar II",
        }
    }
}

impl TryFrom<u8> for Month {
    type Error = crate::CalendarError;

    fn try_from(n: u8) -> Result<Self, Self::Error> {
        Self::from_number(n).ok_or(crate::CalendarError::InvalidMonth { month: n, year: 0 })
    }
}

// ── Year arithmetic ───────────────────────────────────────────────────────

/// True if the Hebrew year intercalates a 13th month.
///
/// Leap years sit at positions 0, 3, 6, 8, 11, 14 and 17 of the cycle,
/// which the closed form `(7y + 1) mod 19 < 7` selects.
#[inline]
pub fn is_leap_year(year: i32) -> bool {
    (7 * i64::from(year) + 1).rem_euclid(YEARS_PER_CYCLE) < 7
}

/// Months in the Hebrew year: 13 in leap years, 12 otherwise.
#[inline]
pub fn months_in_year(year: i32) -> u8 {
    if is_leap_year(year) {
        13
    } else {
        12
    }
}

/// Complete months from the calendar epoch to Tishrei of `year`.
pub(crate) fn months_elapsed(year: i32) -> i64 {
    let prior = i64::from(year) - 1;
    let cycles = prior.div_euclid(YEARS_PER_CYCLE);
    let year_in_cycle = prior.rem_euclid(YEARS_PER_CYCLE);
    MONTHS_PER_CYCLE * cycles + 12 * year_in_cycle + (year_in_cycle * 7 + 1) / YEARS_PER_CYCLE
}

/// Days from the Sunday before the calendar epoch to the (postponed)
/// day of Tishrei 1 in `year`.
///
/// Computes the mean conjunction of Tishrei from the epoch molad plus
/// one synodic month per elapsed month, then applies the dechiyot. The
/// rule order is historically fixed; reordering changes the Rosh
/// Hashanah weekday for edge-case years.
pub fn elapsed_days(year: i32) -> i64 {
    let months = months_elapsed(year);
    let parts_elapsed = MOLAD_EPOCH_PARTS + MONTH_EXTRA_PARTS * (months % PARTS_PER_HOUR);
    let hours_elapsed = MOLAD_EPOCH_HOURS
        + MONTH_EXTRA_HOURS * months
        + MONTH_EXTRA_PARTS * (months / PARTS_PER_HOUR)
        + parts_elapsed / PARTS_PER_HOUR;
    let parts = parts_elapsed % PARTS_PER_HOUR + PARTS_PER_HOUR * (hours_elapsed % HOURS_PER_DAY);
    let day = 1 + MONTH_DAYS * months + hours_elapsed / HOURS_PER_DAY;

    // Dechiyot 1, 3 and 4. The weekday residues are 0 = Sunday.
    //   molad zaken:  conjunction at/after midday postpones one day;
    //   GaTaRaD:      Tuesday molad >= 9h 204p in a common year;
    //   BeTUTaKPaT:   Monday molad >= 15h 589p following a leap year.
    let day = if parts >= MOLAD_ZAKEN_PARTS
        || (day % 7 == 2 && parts >= GATARAD_PARTS && !is_leap_year(year))
        || (day % 7 == 1 && parts >= BETUTAKPAT_PARTS && is_leap_year(year - 1))
    {
        day + 1
    } else {
        day
    };

    // Dechiya 2 (lo ADU Rosh): never Sunday, Wednesday or Friday.
    match day % 7 {
        0 | 3 | 5 => day + 1,
        _ => day,
    }
}

/// Length of the Hebrew year in days.
///
/// Always one of [`YEAR_LENGTHS`]; anything else is an arithmetic
/// defect in [`elapsed_days`].
pub fn days_in_year(year: i32) -> i64 {
    let length = elapsed_days(year + 1) - elapsed_days(year);
    debug_assert!(YEAR_LENGTHS.contains(&length), "year {year} has impossible length {length}");
    length
}

/// True if Cheshvan has 30 days in `year` (355- or 385-day years).
#[inline]
pub fn long_cheshvan(year: i32) -> bool {
    days_in_year(year) % 10 == 5
}

/// True if Kislev has 29 days in `year` (353- or 383-day years).
#[inline]
pub fn short_kislev(year: i32) -> bool {
    days_in_year(year) % 10 == 3
}

/// Days in a Hebrew month for the given year, 29 or 30.
pub fn days_in_month(month: Month, year: i32) -> u8 {
    match month {
        Month::Iyyar | Month::Tamuz | Month::Elul | Month::Tevet | Month::AdarII => 29,
        Month::AdarI if !is_leap_year(year) => 29,
        Month::Cheshvan if !long_cheshvan(year) => 29,
        Month::Kislev if short_kislev(year) => 29,
        _ => 30,
    }
}
