// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Crate error types.

/// Errors reported by fallible constructors.
///
/// Conversion routines themselves are infallible over their documented
/// preconditions; validation happens once, at the boundary.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalendarError {
    /// Latitude is NaN or infinite.
    #[error("latitude {0} is not a finite number")]
    NonFiniteLatitude(f64),

    /// Latitude outside [-90, 90].
    #[error("latitude {0} out of range [-90,90]")]
    LatitudeRange(f64),

    /// Longitude is NaN or infinite.
    #[error("longitude {0} is not a finite number")]
    NonFiniteLongitude(f64),

    /// Longitude outside [-180, 180].
    #[error("longitude {0} out of range [-180,180]")]
    LongitudeRange(f64),

    /// Month number not present in the given Hebrew year
    /// (13 only exists in leap years).
    #[error("month {month} out of range for Hebrew year {year}")]
    InvalidMonth { month: u8, year: i32 },

    /// Day of month exceeds the month's length for that year.
    #[error("day {day} out of range for month {month} of Hebrew year {year}")]
    InvalidDay { day: u8, month: u8, year: i32 },

    /// A date fell outside chrono's representable range.
    #[error("date outside the representable range")]
    DateOutOfRange,
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, CalendarError>;
