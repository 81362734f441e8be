// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Halachic solar times (zmanim).
//!
//! [`Zmanim`] derives the catalog of named times of day — sunrise,
//! sunset, twilight angles and proportional "halachic hour" offsets —
//! for one calendar day at one location. The raw angle-to-instant solar
//! computation is *not* implemented here: it enters through the
//! [`SolarPosition`] trait, and a crossing that does not exist (polar
//! day/night) is `None`, which every derived quantity propagates.
//!
//! # Angle catalog
//!
//! | Time | Depression angle |
//! |------|------------------|
//! | sunrise / sunset | 0.833333° (horizon dip + refraction) |
//! | dawn / dusk | 6° (civil twilight) |
//! | alot haShachar | 16.1° |
//! | misheyakir | 11.5° |
//! | misheyakir machmir | 10.2° |
//! | tzeit (3 small stars) | 8.5° |
//! | tzeit (3 medium stars) | 7.083° |
//!
//! The reference instant handed to the solar provider is always local
//! midday of the target day, so twilight times near midnight cannot
//! slip onto an adjacent calendar day.

use crate::error::{CalendarError, Result};
use crate::hdate::HebrewDate;
use crate::timefmt::{format_time, round_and_format_time};
use chrono::{Duration, NaiveDate, NaiveDateTime, Timelike};
use qtty::Seconds;

// ── Solar depression angles, in degrees below the horizon ────────────────

/// Upper limb touching the horizon, with standard refraction.
pub const SUNRISE_SUNSET_ANGLE: f64 = 0.833333;
/// Civil twilight.
pub const CIVIL_TWILIGHT_ANGLE: f64 = 6.0;
/// Dawn, first light.
pub const ALOT_HASHACHAR_ANGLE: f64 = 16.1;
/// Earliest tallit and tefillin.
pub const MISHEYAKIR_ANGLE: f64 = 11.5;
/// Stricter misheyakir.
pub const MISHEYAKIR_MACHMIR_ANGLE: f64 = 10.2;
/// Nightfall: three small stars visible.
pub const TZEIT_3_SMALL_STARS: f64 = 8.5;
/// Nightfall: three medium stars visible.
pub const TZEIT_3_MEDIUM_STARS: f64 = 7.083;

/// Sun's center at the geometric horizon edge.
const SUN_EDGE_ANGLE: f64 = 0.3;
const NAUTICAL_TWILIGHT_ANGLE: f64 = 12.0;
const ASTRONOMICAL_TWILIGHT_ANGLE: f64 = 18.0;
/// Negative: the sun is *above* the horizon during golden hour.
const GOLDEN_HOUR_ANGLE: f64 = -6.0;

/// Halachic hours between sunrise and the fixed prayer deadlines.
const SHMA_HOURS: f64 = 3.0;
const TFILLA_HOURS: f64 = 4.0;
const CHATZOT_HOURS: f64 = 6.0;
const MINCHA_GEDOLA_HOURS: f64 = 6.5;
const MINCHA_KETANA_HOURS: f64 = 9.5;
const PLAG_HAMINCHA_HOURS: f64 = 10.75;

// ── The solar primitive seam ──────────────────────────────────────────────

/// Supplied solar-position capability.
///
/// Implementations answer "when does the sun cross `angle_deg` below
/// the horizon on this day", on the rising (`rising = true`) or setting
/// side. `None` is the invalid sentinel: no such crossing exists for
/// the date/location (extreme latitudes). The engine treats the
/// implementation as a pure function and calls it synchronously.
///
/// `Clone` is required because night-hour computations construct a
/// second engine for the previous calendar day.
pub trait SolarPosition: Clone {
    /// Instant the sun reaches `angle_deg` below the horizon.
    ///
    /// `reference` is local midday of the target day; negative angles
    /// are above the horizon.
    fn time_at_angle(
        &self,
        reference: NaiveDateTime,
        latitude: f64,
        longitude: f64,
        angle_deg: f64,
        rising: bool,
    ) -> Option<NaiveDateTime>;

    /// Instant of solar transit (local apparent noon).
    fn solar_noon(
        &self,
        reference: NaiveDateTime,
        latitude: f64,
        longitude: f64,
    ) -> Option<NaiveDateTime>;
}

// ── Polymorphic date input ────────────────────────────────────────────────

/// Date argument accepted at the engine boundary.
///
/// The discriminated union is resolved to a Gregorian day once, at
/// construction; nothing downstream re-probes the variant.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum DateSpec {
    /// A Gregorian calendar day.
    Gregorian(NaiveDate),
    /// A Hebrew calendar day, normalized to Gregorian at construction.
    Hebrew(HebrewDate),
}

impl DateSpec {
    /// The Gregorian day this spec denotes, `None` outside chrono's
    /// representable range.
    pub fn gregorian(&self) -> Option<NaiveDate> {
        match self {
            Self::Gregorian(date) => Some(*date),
            Self::Hebrew(hd) => hd.to_gregorian(),
        }
    }
}

impl From<NaiveDate> for DateSpec {
    fn from(date: NaiveDate) -> Self {
        Self::Gregorian(date)
    }
}

impl From<NaiveDateTime> for DateSpec {
    /// Time-of-day components are ignored, as the engine re-anchors to
    /// local midday.
    fn from(dt: NaiveDateTime) -> Self {
        Self::Gregorian(dt.date())
    }
}

impl From<HebrewDate> for DateSpec {
    fn from(hd: HebrewDate) -> Self {
        Self::Hebrew(hd)
    }
}

// ── Full catalog result ───────────────────────────────────────────────────

/// Every named time the engine knows for one day, in one shot.
///
/// Any individual entry may be `None` where the crossing does not
/// exist for the date/location.
#[derive(Debug, Clone, PartialEq)]
pub struct SunTimes {
    pub solar_noon: Option<NaiveDateTime>,
    pub sunrise: Option<NaiveDateTime>,
    pub sunset: Option<NaiveDateTime>,
    /// Sun's lower limb clears the horizon.
    pub sunrise_end: Option<NaiveDateTime>,
    pub sunset_start: Option<NaiveDateTime>,
    pub dawn: Option<NaiveDateTime>,
    pub dusk: Option<NaiveDateTime>,
    pub nautical_dawn: Option<NaiveDateTime>,
    pub nautical_dusk: Option<NaiveDateTime>,
    /// Astronomical twilight ends (morning) / begins (evening).
    pub night_end: Option<NaiveDateTime>,
    pub night: Option<NaiveDateTime>,
    pub golden_hour_end: Option<NaiveDateTime>,
    pub golden_hour: Option<NaiveDateTime>,
    pub alot_hashachar: Option<NaiveDateTime>,
    pub misheyakir: Option<NaiveDateTime>,
    pub misheyakir_machmir: Option<NaiveDateTime>,
    pub tzeit: Option<NaiveDateTime>,
}

// ── The engine ────────────────────────────────────────────────────────────

/// Halachic time engine for one day at one location.
///
/// Immutable after construction; every query is a pure derivation from
/// the normalized reference instant, the coordinates, and the solar
/// provider.
#[derive(Debug, Clone)]
pub struct Zmanim<S: SolarPosition> {
    sun: S,
    /// Local midday of the target day.
    date: NaiveDateTime,
    latitude: f64,
    longitude: f64,
}

impl<S: SolarPosition> Zmanim<S> {
    /// Build an engine for a date and location.
    ///
    /// Accepts a Gregorian or Hebrew date (see [`DateSpec`]); the time
    /// of day of a datetime argument is discarded. Coordinates are
    /// validated here and never re-checked.
    pub fn new(sun: S, date: impl Into<DateSpec>, latitude: f64, longitude: f64) -> Result<Self> {
        if !latitude.is_finite() {
            return Err(CalendarError::NonFiniteLatitude(latitude));
        }
        if !longitude.is_finite() {
            return Err(CalendarError::NonFiniteLongitude(longitude));
        }
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(CalendarError::LatitudeRange(latitude));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(CalendarError::LongitudeRange(longitude));
        }
        let day = date.into().gregorian().ok_or(CalendarError::DateOutOfRange)?;
        let midday = day.and_hms_opt(12, 0, 0).ok_or(CalendarError::DateOutOfRange)?;
        Ok(Self {
            sun,
            date: midday,
            latitude,
            longitude,
        })
    }

    /// The normalized reference instant (local midday of the target day).
    #[inline]
    pub const fn reference(&self) -> NaiveDateTime {
        self.date
    }

    /// Latitude in degrees.
    #[inline]
    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude in degrees.
    #[inline]
    pub const fn longitude(&self) -> f64 {
        self.longitude
    }

    #[inline]
    fn at_angle(&self, angle_deg: f64, rising: bool) -> Option<NaiveDateTime> {
        self.sun
            .time_at_angle(self.date, self.latitude, self.longitude, angle_deg, rising)
    }

    // ── Solar events ──────────────────────────────────────────────────

    /// Local apparent noon.
    pub fn solar_noon(&self) -> Option<NaiveDateTime> {
        self.sun.solar_noon(self.date, self.latitude, self.longitude)
    }

    /// Sunrise (upper limb, refracted).
    pub fn sunrise(&self) -> Option<NaiveDateTime> {
        self.at_angle(SUNRISE_SUNSET_ANGLE, true)
    }

    /// Sunset (upper limb, refracted).
    pub fn sunset(&self) -> Option<NaiveDateTime> {
        self.at_angle(SUNRISE_SUNSET_ANGLE, false)
    }

    /// Civil dawn (6° below horizon).
    pub fn dawn(&self) -> Option<NaiveDateTime> {
        self.at_angle(CIVIL_TWILIGHT_ANGLE, true)
    }

    /// Civil dusk (6° below horizon).
    pub fn dusk(&self) -> Option<NaiveDateTime> {
        self.at_angle(CIVIL_TWILIGHT_ANGLE, false)
    }

    /// Dawn, first light (16.1°).
    pub fn alot_hashachar(&self) -> Option<NaiveDateTime> {
        self.at_angle(ALOT_HASHACHAR_ANGLE, true)
    }

    /// Earliest tallit and tefillin (11.5°).
    pub fn misheyakir(&self) -> Option<NaiveDateTime> {
        self.at_angle(MISHEYAKIR_ANGLE, true)
    }

    /// Stricter misheyakir (10.2°).
    pub fn misheyakir_machmir(&self) -> Option<NaiveDateTime> {
        self.at_angle(MISHEYAKIR_MACHMIR_ANGLE, true)
    }

    /// Nightfall at the default 8.5° (three small stars).
    pub fn tzeit(&self) -> Option<NaiveDateTime> {
        self.tzeit_at(TZEIT_3_SMALL_STARS)
    }

    /// Nightfall at a caller-chosen depression angle; 7.083° is the
    /// customary three-medium-stars alternative.
    pub fn tzeit_at(&self, angle_deg: f64) -> Option<NaiveDateTime> {
        self.at_angle(angle_deg, false)
    }

    /// Sunrise, by its halachic name.
    pub fn neitz_hachama(&self) -> Option<NaiveDateTime> {
        self.sunrise()
    }

    /// Sunset, by its halachic name.
    pub fn shkiah(&self) -> Option<NaiveDateTime> {
        self.sunset()
    }

    /// The full named-time catalog for the day.
    pub fn sun_times(&self) -> SunTimes {
        SunTimes {
            solar_noon: self.solar_noon(),
            sunrise: self.sunrise(),
            sunset: self.sunset(),
            sunrise_end: self.at_angle(SUN_EDGE_ANGLE, true),
            sunset_start: self.at_angle(SUN_EDGE_ANGLE, false),
            dawn: self.dawn(),
            dusk: self.dusk(),
            nautical_dawn: self.at_angle(NAUTICAL_TWILIGHT_ANGLE, true),
            nautical_dusk: self.at_angle(NAUTICAL_TWILIGHT_ANGLE, false),
            night_end: self.at_angle(ASTRONOMICAL_TWILIGHT_ANGLE, true),
            night: self.at_angle(ASTRONOMICAL_TWILIGHT_ANGLE, false),
            golden_hour_end: self.at_angle(GOLDEN_HOUR_ANGLE, true),
            golden_hour: self.at_angle(GOLDEN_HOUR_ANGLE, false),
            alot_hashachar: self.alot_hashachar(),
            misheyakir: self.misheyakir(),
            misheyakir_machmir: self.misheyakir_machmir(),
            tzeit: self.tzeit(),
        }
    }

    // ── Proportional hours ────────────────────────────────────────────

    /// Daytime span in integer milliseconds (matching the original
    /// engine's millisecond arithmetic).
    fn day_span_ms(&self) -> Option<i64> {
        Some((self.sunset()? - self.sunrise()?).num_milliseconds())
    }

    fn night_span_ms(&self) -> Option<i64> {
        Some((self.sunrise()? - self.greg_eve()?).num_milliseconds())
    }

    /// Length of one daytime halachic hour: (sunset − sunrise) / 12.
    pub fn hour(&self) -> Option<Seconds> {
        let ms = self.day_span_ms()?;
        Some(Seconds::new(ms as f64 / 12_000.0))
    }

    /// Daytime halachic hour in minutes.
    pub fn hour_mins(&self) -> Option<f64> {
        Some(self.hour()?.value() / 60.0)
    }

    /// Sunset of the previous Gregorian day.
    ///
    /// Built from a second engine instance, since night hours span two
    /// calendar days.
    pub fn greg_eve(&self) -> Option<NaiveDateTime> {
        let prev = Self {
            sun: self.sun.clone(),
            date: self.date - Duration::days(1),
            latitude: self.latitude,
            longitude: self.longitude,
        };
        prev.sunset()
    }

    /// Length of one nighttime halachic hour:
    /// (sunrise − previous-day sunset) / 12.
    pub fn night_hour(&self) -> Option<Seconds> {
        let ms = self.night_span_ms()?;
        Some(Seconds::new(ms as f64 / 12_000.0))
    }

    /// Nighttime halachic hour in minutes.
    pub fn night_hour_mins(&self) -> Option<f64> {
        Some(self.night_hour()?.value() / 60.0)
    }

    /// Sunrise plus `hours` halachic hours.
    pub fn hour_offset(&self, hours: f64) -> Option<NaiveDateTime> {
        let sunrise = self.sunrise()?;
        let hour_ms = self.day_span_ms()? as f64 / 12.0;
        Some(sunrise + Duration::milliseconds((hour_ms * hours).round() as i64))
    }

    /// Halachic midday: six hours into the day.
    pub fn chatzot(&self) -> Option<NaiveDateTime> {
        self.hour_offset(CHATZOT_HOURS)
    }

    /// Halachic midnight: six night hours before sunrise.
    pub fn chatzot_night(&self) -> Option<NaiveDateTime> {
        let sunrise = self.sunrise()?;
        let night_hour_ms = self.night_span_ms()? as f64 / 12.0;
        Some(sunrise - Duration::milliseconds((night_hour_ms * CHATZOT_HOURS).round() as i64))
    }

    /// Latest Shma (Gra): three hours into the day.
    pub fn sof_zman_shma(&self) -> Option<NaiveDateTime> {
        self.hour_offset(SHMA_HOURS)
    }

    /// Latest Shacharit (Gra): four hours into the day.
    pub fn sof_zman_tfilla(&self) -> Option<NaiveDateTime> {
        self.hour_offset(TFILLA_HOURS)
    }

    /// Earliest Mincha: six and a half hours.
    pub fn mincha_gedola(&self) -> Option<NaiveDateTime> {
        self.hour_offset(MINCHA_GEDOLA_HOURS)
    }

    /// Preferable earliest Mincha: nine and a half hours.
    pub fn mincha_ketana(&self) -> Option<NaiveDateTime> {
        self.hour_offset(MINCHA_KETANA_HOURS)
    }

    /// Plag haMincha: ten and three-quarter hours.
    pub fn plag_hamincha(&self) -> Option<NaiveDateTime> {
        self.hour_offset(PLAG_HAMINCHA_HOURS)
    }

    // ── Candle-lighting / Havdalah helpers ────────────────────────────

    /// Sunset plus a signed minute offset.
    ///
    /// For positive (Havdalah-style) offsets the base sunset is rounded
    /// half-up to the minute first — never down; seconds are always
    /// discarded.
    pub fn sunset_offset(&self, minutes: i64) -> Option<NaiveDateTime> {
        let sunset = self.sunset()?;
        let mut offset = minutes;
        if offset > 0 && sunset.second() >= 30 {
            offset += 1;
        }
        let base = sunset.with_second(0)?.with_nanosecond(0)?;
        Some(base + Duration::minutes(offset))
    }

    /// Sunset-plus-offset instant paired with its formatted rendering;
    /// `None` when the day has no sunset.
    pub fn sunset_offset_time(&self, minutes: i64, fmt: &str) -> Option<(NaiveDateTime, String)> {
        let dt = self.sunset_offset(minutes)?;
        let time = format_time(&dt, fmt);
        Some((dt, time))
    }

    /// Nightfall instant paired with its rounded, formatted rendering;
    /// `None` when the angle is never reached.
    pub fn tzeit_time(&self, angle_deg: f64, fmt: &str) -> Option<(NaiveDateTime, String)> {
        let dt = self.tzeit_at(angle_deg)?;
        let time = round_and_format_time(Some(dt), fmt)?;
        Some((dt, time))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hebrew::Month;

    /// Symmetric solar model over a flat horizon: each degree of
    /// depression is worth four minutes from a 06:00/18:00 day.
    #[derive(Debug, Clone)]
    struct FlatHorizon;

    impl SolarPosition for FlatHorizon {
        fn time_at_angle(
            &self,
            reference: NaiveDateTime,
            _latitude: f64,
            _longitude: f64,
            angle_deg: f64,
            rising: bool,
        ) -> Option<NaiveDateTime> {
            let noon = reference.date().and_hms_opt(12, 0, 0)?;
            let offset_secs = ((360.0 + angle_deg * 4.0) * 60.0).round() as i64;
            Some(if rising {
                noon - Duration::seconds(offset_secs)
            } else {
                noon + Duration::seconds(offset_secs)
            })
        }

        fn solar_noon(
            &self,
            reference: NaiveDateTime,
            _latitude: f64,
            _longitude: f64,
        ) -> Option<NaiveDateTime> {
            reference.date().and_hms_opt(12, 0, 0)
        }
    }

    /// Polar night: the sun never crosses any depression angle.
    #[derive(Debug, Clone)]
    struct PolarNight;

    impl SolarPosition for PolarNight {
        fn time_at_angle(
            &self,
            _reference: NaiveDateTime,
            _latitude: f64,
            _longitude: f64,
            _angle_deg: f64,
            _rising: bool,
        ) -> Option<NaiveDateTime> {
            None
        }

        fn solar_noon(
            &self,
            reference: NaiveDateTime,
            _latitude: f64,
            _longitude: f64,
        ) -> Option<NaiveDateTime> {
            reference.date().and_hms_opt(12, 0, 0)
        }
    }

    /// Fixed sunset with 31 seconds past the minute, for rounding tests.
    #[derive(Debug, Clone)]
    struct FixedSunset;

    impl SolarPosition for FixedSunset {
        fn time_at_angle(
            &self,
            reference: NaiveDateTime,
            _latitude: f64,
            _longitude: f64,
            _angle_deg: f64,
            rising: bool,
        ) -> Option<NaiveDateTime> {
            if rising {
                reference.date().and_hms_opt(6, 0, 0)
            } else {
                reference.date().and_hms_opt(18, 0, 31)
            }
        }

        fn solar_noon(
            &self,
            reference: NaiveDateTime,
            _latitude: f64,
            _longitude: f64,
        ) -> Option<NaiveDateTime> {
            reference.date().and_hms_opt(12, 0, 0)
        }
    }

    fn engine() -> Zmanim<FlatHorizon> {
        let day = NaiveDate::from_ymd_opt(2008, 12, 19).unwrap();
        Zmanim::new(FlatHorizon, day, 41.85, -87.65).unwrap()
    }

    fn hms(engine: &Zmanim<FlatHorizon>, h: u32, m: u32, s: u32) -> NaiveDateTime {
        engine.reference().date().and_hms_opt(h, m, s).unwrap()
    }

    #[test]
    fn construction_validates_coordinates() {
        let day = NaiveDate::from_ymd_opt(2020, 6, 1).unwrap();
        assert_eq!(
            Zmanim::new(FlatHorizon, day, 95.0, 0.0).unwrap_err(),
            CalendarError::LatitudeRange(95.0)
        );
        assert_eq!(
            Zmanim::new(FlatHorizon, day, 0.0, -200.0).unwrap_err(),
            CalendarError::LongitudeRange(-200.0)
        );
        assert!(matches!(
            Zmanim::new(FlatHorizon, day, f64::NAN, 0.0).unwrap_err(),
            CalendarError::NonFiniteLatitude(_)
        ));
        assert!(matches!(
            Zmanim::new(FlatHorizon, day, 0.0, f64::INFINITY).unwrap_err(),
            CalendarError::NonFiniteLongitude(_)
        ));
        assert!(Zmanim::new(FlatHorizon, day, -90.0, 180.0).is_ok());
    }

    #[test]
    fn reference_is_normalized_to_midday() {
        let dt = NaiveDate::from_ymd_opt(2020, 6, 1)
            .unwrap()
            .and_hms_opt(23, 59, 58)
            .unwrap();
        let z = Zmanim::new(FlatHorizon, dt, 0.0, 0.0).unwrap();
        assert_eq!(
            z.reference(),
            NaiveDate::from_ymd_opt(2020, 6, 1)
                .unwrap()
                .and_hms_opt(12, 0, 0)
                .unwrap()
        );
    }

    #[test]
    fn hebrew_and_gregorian_dates_agree() {
        let hd = HebrewDate::new(5769, Month::Kislev, 22).unwrap();
        let greg = hd.to_gregorian().unwrap();
        let from_hebrew = Zmanim::new(FlatHorizon, hd, 31.78, 35.22).unwrap();
        let from_greg = Zmanim::new(FlatHorizon, greg, 31.78, 35.22).unwrap();
        assert_eq!(from_hebrew.reference(), from_greg.reference());
    }

    #[test]
    fn twilight_angles_order_correctly() {
        let z = engine();
        let alot = z.alot_hashachar().unwrap();
        let misheyakir = z.misheyakir().unwrap();
        let machmir = z.misheyakir_machmir().unwrap();
        let sunrise = z.sunrise().unwrap();
        let noon = z.solar_noon().unwrap();
        let sunset = z.sunset().unwrap();
        let tzeit = z.tzeit().unwrap();
        let tzeit_medium = z.tzeit_at(TZEIT_3_MEDIUM_STARS).unwrap();

        assert!(alot < misheyakir);
        assert!(misheyakir < machmir);
        assert!(machmir < sunrise);
        assert!(sunrise < noon);
        assert!(noon < sunset);
        assert!(sunset < tzeit_medium);
        assert!(tzeit_medium < tzeit);
        assert_eq!(z.neitz_hachama(), z.sunrise());
        assert_eq!(z.shkiah(), z.sunset());
    }

    #[test]
    fn flat_horizon_times_are_exact() {
        let z = engine();
        // 0.833333 deg * 4 min = 3 min 20 s either side of 06:00/18:00.
        assert_eq!(z.sunrise().unwrap(), hms(&z, 5, 56, 40));
        assert_eq!(z.sunset().unwrap(), hms(&z, 18, 3, 20));
        // 8.5 deg * 4 min = 34 min past 18:00.
        assert_eq!(z.tzeit().unwrap(), hms(&z, 18, 34, 0));
        assert_eq!(z.dawn().unwrap(), hms(&z, 5, 36, 0));
        assert_eq!(z.dusk().unwrap(), hms(&z, 18, 24, 0));
    }

    #[test]
    fn halachic_hour_and_offsets() {
        let z = engine();
        // Day span 12 h 6 min 40 s = 43 600 s; one hour is 3 633.33 s.
        let hour = z.hour().unwrap();
        assert!((hour.value() - 43_600.0 / 12.0).abs() < 1e-9);
        assert!((z.hour_mins().unwrap() - 43_600.0 / 720.0).abs() < 1e-9);

        // Six hours after sunrise is solar noon on a symmetric day.
        assert_eq!(z.chatzot().unwrap(), hms(&z, 12, 0, 0));
        assert_eq!(z.sof_zman_shma().unwrap(), hms(&z, 8, 58, 20));
        // 4 * 3 633 333.33 ms rounds to 14 533 333 ms past sunrise.
        assert_eq!(
            z.sof_zman_tfilla().unwrap(),
            hms(&z, 9, 58, 53) + Duration::milliseconds(333)
        );
        assert!(z.mincha_gedola().unwrap() > z.chatzot().unwrap());
        assert!(z.mincha_ketana().unwrap() < z.plag_hamincha().unwrap());
        assert!(z.plag_hamincha().unwrap() < z.sunset().unwrap());
    }

    #[test]
    fn night_hours_span_two_days() {
        let z = engine();
        let eve = z.greg_eve().unwrap();
        assert_eq!(
            eve,
            (z.reference().date() - Duration::days(1))
                .and_hms_opt(18, 3, 20)
                .unwrap()
        );
        // Night span 11 h 53 min 20 s = 42 800 s.
        let night_hour = z.night_hour().unwrap();
        assert!((night_hour.value() - 42_800.0 / 12.0).abs() < 1e-9);
        // Six night hours before sunrise on a symmetric day is midnight.
        assert_eq!(z.chatzot_night().unwrap(), hms(&z, 0, 0, 0));
    }

    #[test]
    fn polar_night_propagates_the_sentinel() {
        let day = NaiveDate::from_ymd_opt(2020, 12, 21).unwrap();
        let z = Zmanim::new(PolarNight, day, 78.22, 15.63).unwrap();
        assert_eq!(z.sunrise(), None);
        assert_eq!(z.sunset(), None);
        assert_eq!(z.hour(), None);
        assert_eq!(z.hour_offset(3.0), None);
        assert_eq!(z.chatzot_night(), None);
        assert_eq!(z.sunset_offset(42), None);
        assert_eq!(z.sunset_offset_time(42, "%H:%M"), None);
        assert_eq!(z.tzeit_time(TZEIT_3_SMALL_STARS, "%H:%M"), None);
        let times = z.sun_times();
        assert_eq!(times.sunrise, None);
        assert_eq!(times.tzeit, None);
        assert!(times.solar_noon.is_some());
    }

    #[test]
    fn sunset_offset_rounding_convention() {
        let day = NaiveDate::from_ymd_opt(2020, 6, 5).unwrap();
        let z = Zmanim::new(FixedSunset, day, 32.08, 34.78).unwrap();
        // Sunset 18:00:31 — positive offsets round the base up first.
        assert_eq!(
            z.sunset_offset(42).unwrap(),
            day.and_hms_opt(18, 43, 0).unwrap()
        );
        // Negative offsets only truncate the seconds.
        assert_eq!(
            z.sunset_offset(-18).unwrap(),
            day.and_hms_opt(17, 42, 0).unwrap()
        );
        let (dt, time) = z.sunset_offset_time(42, "%H:%M").unwrap();
        assert_eq!(dt, day.and_hms_opt(18, 43, 0).unwrap());
        assert_eq!(time, "18:43");
    }

    #[test]
    fn sunset_offset_below_half_minute_truncates() {
        let z = engine();
        // Sunset 18:03:20 — 20 s < 30 s, no bump even for positive offsets.
        assert_eq!(z.sunset_offset(42).unwrap(), hms(&z, 18, 45, 0));
        assert_eq!(z.sunset_offset(-18).unwrap(), hms(&z, 17, 45, 0));
    }

    #[test]
    fn tzeit_time_rounds_and_formats() {
        let z = engine();
        let (dt, time) = z.tzeit_time(TZEIT_3_SMALL_STARS, "%H:%M").unwrap();
        assert_eq!(dt, hms(&z, 18, 34, 0));
        assert_eq!(time, "18:34");
    }

    #[test]
    fn sun_times_catalog_is_consistent() {
        let z = engine();
        let times = z.sun_times();
        assert_eq!(times.sunrise, z.sunrise());
        assert_eq!(times.tzeit, z.tzeit());
        // Golden hour sits inside the bright day, nautical dawn before
        // civil dawn, astronomical night after nautical dusk.
        assert!(times.golden_hour_end.unwrap() > times.sunrise.unwrap());
        assert!(times.nautical_dawn.unwrap() < times.dawn.unwrap());
        assert!(times.night.unwrap() > times.nautical_dusk.unwrap());
        assert!(times.sunrise_end.unwrap() > times.sunrise.unwrap());
        assert!(times.sunset_start.unwrap() < times.sunset.unwrap());
    }
}
