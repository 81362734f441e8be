use chrono::Utc;
use luach::{HebrewDate, Molad, Month, RataDie};

fn main() {
    let today = Utc::now().date_naive();
    let hd = HebrewDate::from_gregorian(today);
    let rd = RataDie::from_gregorian(today);

    println!("Gregorian: {today}");
    println!("Hebrew: {hd}");
    println!("Absolute: {rd}");
    println!("Weekday: {}", hd.weekday());

    let molad = Molad::new(hd.year(), Month::Tishrei);
    println!("Molad Tishrei {}: {molad}", hd.year());
}
