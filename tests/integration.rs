use chrono::{Duration, NaiveDate, NaiveDateTime, Weekday};
use luach::{
    days_in_month, is_leap_year, months_in_year, HebrewDate, Molad, Month, RataDie, SolarPosition,
    Zmanim, TZEIT_3_SMALL_STARS,
};
use qtty::Seconds;

#[test]
fn molad_announcement_weekend() {
    // Molad Tevet 5769, as announced on Shabbat Mevarchim 23 Kislev.
    let shabbat = HebrewDate::new(5769, Month::Kislev, 23).unwrap();
    assert_eq!(shabbat.weekday(), Weekday::Sat);
    assert_eq!(
        shabbat.to_gregorian(),
        NaiveDate::from_ymd_opt(2008, 12, 20)
    );

    let molad = Molad::new(5769, Month::Tevet);
    assert_eq!(
        molad.to_string(),
        "Sat, 10 minutes and 16 chalakim after 16:00"
    );
}

#[test]
fn hebrew_gregorian_roundtrip_across_centuries() {
    for year in (3761..=9761).step_by(200) {
        let rh = HebrewDate::new(year, Month::Tishrei, 1).unwrap();
        let rd = rh.to_rata_die();
        assert_eq!(HebrewDate::from_rata_die(rd), rh, "year {year}");
        // Lo ADU Rosh: Rosh Hashanah avoids Sun, Wed and Fri.
        assert!(
            !matches!(rd.weekday(), Weekday::Sun | Weekday::Wed | Weekday::Fri),
            "year {year} starts {:?}",
            rd.weekday()
        );
        if let Some(greg) = rd.to_gregorian() {
            assert_eq!(RataDie::from_gregorian(greg), rd, "year {year}");
            assert_eq!(HebrewDate::from_gregorian(greg), rh, "year {year}");
        }
    }
}

#[test]
fn every_month_of_a_leap_year_is_reachable() {
    assert!(is_leap_year(5771));
    assert_eq!(months_in_year(5771), 13);
    for n in 1..=13 {
        let month = Month::from_number(n).unwrap();
        let last = days_in_month(month, 5771);
        let hd = HebrewDate::new(5771, month, last).unwrap();
        assert_eq!(HebrewDate::from_rata_die(hd.to_rata_die()), hd);
    }
}

/// Symmetric 06:00/18:00 solar day, four minutes per degree.
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
        let offset = Duration::seconds(((360.0 + angle_deg * 4.0) * 60.0).round() as i64);
        Some(if rising { noon - offset } else { noon + offset })
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

#[test]
fn zmanim_accept_hebrew_and_gregorian_dates_interchangeably() {
    let hd = HebrewDate::new(5769, Month::Kislev, 23).unwrap();
    let greg = hd.to_gregorian().unwrap();

    let a = Zmanim::new(FlatHorizon, hd, 31.78, 35.22).unwrap();
    let b = Zmanim::new(FlatHorizon, greg, 31.78, 35.22).unwrap();

    assert_eq!(a.sunrise(), b.sunrise());
    assert_eq!(a.tzeit(), b.tzeit());
    assert_eq!(a.chatzot(), b.chatzot());

    let hour = a.hour().unwrap();
    assert!((hour - Seconds::new(43_600.0 / 12.0)).abs() < Seconds::new(1e-9));

    // Sunset 18:03:20 — seconds below 30 truncate before the offset.
    let (_, havdalah) = a.sunset_offset_time(50, "%H:%M").unwrap();
    assert_eq!(havdalah, "18:53");
    let (_, tzeit) = a.tzeit_time(TZEIT_3_SMALL_STARS, "%H:%M").unwrap();
    assert_eq!(tzeit, "18:34");
}

#[cfg(feature = "serde")]
#[test]
fn serde_hebrew_date_roundtrip() {
    let hd = HebrewDate::new(5769, Month::Kislev, 23).unwrap();
    let json = serde_json::to_string(&hd).unwrap();
    assert!(json.contains("\"Kislev\""));
    assert_eq!(serde_json::from_str::<HebrewDate>(&json).unwrap(), hd);

    let molad = Molad::new(5769, Month::Tevet);
    let json = serde_json::to_string(&molad).unwrap();
    assert_eq!(serde_json::from_str::<Molad>(&json).unwrap(), molad);
}
