//! French public holidays.
//!
//! Eight fixed dates plus three movable feasts derived from Easter Sunday
//! (Easter Monday, Ascension, Whit Monday), eleven holidays per year.

use chrono::{Duration, NaiveDate};

const FIXED: [(u32, u32); 8] = [
    (1, 1),   // Jour de l'an
    (5, 1),   // Fête du Travail
    (5, 8),   // Victoire 1945
    (7, 14),  // Fête Nationale
    (8, 15),  // Assomption
    (11, 1),  // Toussaint
    (11, 11), // Armistice 1918
    (12, 25), // Noël
];

/// Easter Sunday via the Meeus/Jones/Butcher computus (Gregorian calendar).
fn easter_sunday(year: i32) -> Option<NaiveDate> {
    let a = year % 19;
    let b = year / 100;
    let c = year % 100;
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15) % 30;
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k) % 7;
    let m = (a + 11 * h + 22 * l) / 451;
    let month = (h + l - 7 * m + 114) / 31;
    let day = (h + l - 7 * m + 114) % 31 + 1;
    NaiveDate::from_ymd_opt(year, month as u32, day as u32)
}

/// All public holidays of `year`, sorted.
pub(crate) fn public_holidays(year: i32) -> Vec<NaiveDate> {
    let mut days: Vec<NaiveDate> = FIXED
        .iter()
        .filter_map(|&(month, day)| NaiveDate::from_ymd_opt(year, month, day))
        .collect();
    if let Some(easter) = easter_sunday(year) {
        days.push(easter + Duration::days(1)); // Lundi de Pâques
        days.push(easter + Duration::days(39)); // Ascension
        days.push(easter + Duration::days(50)); // Lundi de Pentecôte
    }
    days.sort_unstable();
    days
}
