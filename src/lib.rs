// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Hebrew Calendar Module
//!
//! This module provides Hebrew-calendar types and halachic solar-time
//! abstractions built on a single absolute day axis.
//!
//! # Core types
//!
//! - [`RataDie`] — absolute day count; day 1 is January 1 of year 1
//!   (proleptic Gregorian).
//! - [`HebrewDate`] — validated (year, month, day) triple with exact
//!   [`RataDie`] and Gregorian conversions.
//! - [`Month`] — Hebrew months in the Biblical numbering (Nisan = 1).
//! - [`Molad`] — mean lunar conjunction of a month, exact to the chelek.
//! - [`Zmanim<S>`] — halachic times for one day at one location, over a
//!   caller-supplied [`SolarPosition`] provider.
//! - [`SunTimes`] — the full named-time catalog in one value.
//! - [`CalendarError`] — everything the fallible constructors reject.
//!
//! # Calendar arithmetic
//!
//! Year shape is fixed by the classical rules:
//!
//! | Rule | Effect |
//! |------|--------|
//! | Metonic cycle | years with `(7y + 1) mod 19 < 7` are leap |
//! | Molad zaken | conjunction at/after noon delays Rosh Hashanah |
//! | Lo ADU Rosh | Rosh Hashanah never falls Sun/Wed/Fri |
//! | GaTaRaD / BeTuTaKPaT | postponements keeping year lengths legal |
//!
//! Every year is 353, 354, 355, 383, 384 or 385 days; Cheshvan and
//! Kislev flex to absorb the difference.
//!
//! # Solar times
//!
//! The crate performs no ephemeris computation. [`Zmanim`] turns any
//! [`SolarPosition`] implementation into the full zmanim catalog —
//! sunrise, sunset, twilight angles, and proportional halachic hours —
//! with `Option` marking times that do not exist for the day (polar
//! latitudes). Durations are reported as [`qtty::Seconds`].

mod error;
mod greg;
mod hdate;
mod hebrew;
mod molad;
mod timefmt;
mod zmanim;

// ── Re-exports ────────────────────────────────────────────────────────────

pub use error::{CalendarError, Result};
pub use greg::{days_in_gregorian_month, is_gregorian_leap_year, RataDie};
pub use hdate::HebrewDate;
pub use hebrew::{
    days_in_month, days_in_year, is_leap_year, long_cheshvan, months_in_year, short_kislev, Month,
    YEAR_LENGTHS,
};
pub use molad::Molad;
pub use timefmt::{format_time, round_and_format_time, round_to_minute};
pub use zmanim::{
    DateSpec, SolarPosition, SunTimes, Zmanim, ALOT_HASHACHAR_ANGLE, CIVIL_TWILIGHT_ANGLE,
    MISHEYAKIR_ANGLE, MISHEYAKIR_MACHMIR_ANGLE, SUNRISE_SUNSET_ANGLE, TZEIT_3_MEDIUM_STARS,
    TZEIT_3_SMALL_STARS,
};
