//! Static table of French school-vacation periods.
//!
//! Zones are encoded as a bitmask so periods shared by all zones take a
//! single row. Ranges are inclusive on both ends. The table covers the
//! 2013-2014 through 2024-2025 school years; dates outside it simply match
//! nothing.

use chrono::{Datelike, NaiveDate};

pub(crate) const ZONE_A: u8 = 0b001;
pub(crate) const ZONE_B: u8 = 0b010;
pub(crate) const ZONE_C: u8 = 0b100;
const ALL: u8 = ZONE_A | ZONE_B | ZONE_C;

struct Period {
    start: (i32, u32, u32),
    end: (i32, u32, u32),
    zones: u8,
}

const fn p(start: (i32, u32, u32), end: (i32, u32, u32), zones: u8) -> Period {
    Period { start, end, zones }
}

static PERIODS: &[Period] = &[
    // 2013-2014 tail: winter and spring breaks landing in 2014.
    p((2014, 2, 15), (2014, 3, 3), ZONE_C),
    p((2014, 2, 22), (2014, 3, 10), ZONE_B),
    p((2014, 3, 1), (2014, 3, 17), ZONE_A),
    p((2014, 4, 12), (2014, 4, 28), ZONE_C),
    p((2014, 4, 19), (2014, 5, 5), ZONE_B),
    p((2014, 4, 26), (2014, 5, 12), ZONE_A),
    p((2014, 7, 5), (2014, 9, 1), ALL),
    p((2014, 10, 18), (2014, 11, 3), ALL),
    p((2014, 12, 20), (2015, 1, 5), ALL),
    // 2014-2015
    p((2015, 2, 7), (2015, 2, 23), ZONE_A),
    p((2015, 2, 14), (2015, 3, 2), ZONE_C),
    p((2015, 2, 21), (2015, 3, 9), ZONE_B),
    p((2015, 4, 11), (2015, 4, 27), ZONE_A),
    p((2015, 4, 18), (2015, 5, 4), ZONE_C),
    p((2015, 4, 25), (2015, 5, 11), ZONE_B),
    p((2015, 7, 4), (2015, 8, 31), ALL),
    p((2015, 10, 17), (2015, 11, 2), ALL),
    p((2015, 12, 19), (2016, 1, 4), ALL),
    // 2015-2016
    p((2016, 2, 6), (2016, 2, 22), ZONE_B),
    p((2016, 2, 13), (2016, 2, 29), ZONE_A),
    p((2016, 2, 20), (2016, 3, 7), ZONE_C),
    p((2016, 4, 2), (2016, 4, 18), ZONE_B),
    p((2016, 4, 9), (2016, 4, 25), ZONE_A),
    p((2016, 4, 16), (2016, 5, 2), ZONE_C),
    p((2016, 7, 5), (2016, 9, 1), ALL),
    p((2016, 10, 19), (2016, 11, 3), ALL),
    p((2016, 12, 17), (2017, 1, 3), ALL),
    // 2016-2017
    p((2017, 2, 4), (2017, 2, 20), ZONE_C),
    p((2017, 2, 11), (2017, 2, 27), ZONE_B),
    p((2017, 2, 18), (2017, 3, 6), ZONE_A),
    p((2017, 4, 1), (2017, 4, 18), ZONE_C),
    p((2017, 4, 8), (2017, 4, 24), ZONE_B),
    p((2017, 4, 15), (2017, 5, 2), ZONE_A),
    p((2017, 7, 8), (2017, 9, 4), ALL),
    p((2017, 10, 21), (2017, 11, 6), ALL),
    p((2017, 12, 23), (2018, 1, 8), ALL),
    // 2017-2018
    p((2018, 2, 10), (2018, 2, 26), ZONE_A),
    p((2018, 2, 17), (2018, 3, 5), ZONE_C),
    p((2018, 2, 24), (2018, 3, 12), ZONE_B),
    p((2018, 4, 7), (2018, 4, 23), ZONE_A),
    p((2018, 4, 14), (2018, 4, 30), ZONE_C),
    p((2018, 4, 21), (2018, 5, 7), ZONE_B),
    p((2018, 7, 7), (2018, 9, 3), ALL),
    p((2018, 10, 20), (2018, 11, 5), ALL),
    p((2018, 12, 22), (2019, 1, 7), ALL),
    // 2018-2019
    p((2019, 2, 9), (2019, 2, 25), ZONE_B),
    p((2019, 2, 16), (2019, 3, 4), ZONE_A),
    p((2019, 2, 23), (2019, 3, 11), ZONE_C),
    p((2019, 4, 6), (2019, 4, 23), ZONE_B),
    p((2019, 4, 13), (2019, 4, 29), ZONE_A),
    p((2019, 4, 20), (2019, 5, 6), ZONE_C),
    p((2019, 7, 6), (2019, 9, 2), ALL),
    p((2019, 10, 19), (2019, 11, 4), ALL),
    p((2019, 12, 21), (2020, 1, 6), ALL),
    // 2019-2020
    p((2020, 2, 8), (2020, 2, 24), ZONE_C),
    p((2020, 2, 15), (2020, 3, 2), ZONE_B),
    p((2020, 2, 22), (2020, 3, 9), ZONE_A),
    p((2020, 4, 4), (2020, 4, 20), ZONE_C),
    p((2020, 4, 11), (2020, 4, 27), ZONE_B),
    p((2020, 4, 18), (2020, 5, 4), ZONE_A),
    p((2020, 7, 4), (2020, 9, 1), ALL),
    p((2020, 10, 17), (2020, 11, 2), ALL),
    p((2020, 12, 19), (2021, 1, 4), ALL),
    // 2020-2021 (spring break unified across zones that year)
    p((2021, 2, 6), (2021, 2, 22), ZONE_A),
    p((2021, 2, 13), (2021, 3, 1), ZONE_C),
    p((2021, 2, 20), (2021, 3, 8), ZONE_B),
    p((2021, 4, 10), (2021, 4, 26), ALL),
    p((2021, 7, 6), (2021, 9, 2), ALL),
    p((2021, 10, 23), (2021, 11, 8), ALL),
    p((2021, 12, 18), (2022, 1, 3), ALL),
    // 2021-2022
    p((2022, 2, 5), (2022, 2, 21), ZONE_B),
    p((2022, 2, 12), (2022, 2, 28), ZONE_A),
    p((2022, 2, 19), (2022, 3, 7), ZONE_C),
    p((2022, 4, 9), (2022, 4, 25), ZONE_B),
    p((2022, 4, 16), (2022, 5, 2), ZONE_A),
    p((2022, 4, 23), (2022, 5, 9), ZONE_C),
    p((2022, 7, 7), (2022, 9, 1), ALL),
    p((2022, 10, 22), (2022, 11, 7), ALL),
    p((2022, 12, 17), (2023, 1, 3), ALL),
    // 2022-2023
    p((2023, 2, 4), (2023, 2, 20), ZONE_A),
    p((2023, 2, 11), (2023, 2, 27), ZONE_B),
    p((2023, 2, 18), (2023, 3, 6), ZONE_C),
    p((2023, 4, 8), (2023, 4, 24), ZONE_A),
    p((2023, 4, 15), (2023, 5, 2), ZONE_B),
    p((2023, 4, 22), (2023, 5, 9), ZONE_C),
    p((2023, 7, 8), (2023, 9, 4), ALL),
    p((2023, 10, 21), (2023, 11, 6), ALL),
    p((2023, 12, 23), (2024, 1, 8), ALL),
    // 2023-2024
    p((2024, 2, 10), (2024, 2, 26), ZONE_C),
    p((2024, 2, 17), (2024, 3, 4), ZONE_A),
    p((2024, 2, 24), (2024, 3, 11), ZONE_B),
    p((2024, 4, 6), (2024, 4, 22), ZONE_C),
    p((2024, 4, 13), (2024, 4, 29), ZONE_A),
    p((2024, 4, 20), (2024, 5, 6), ZONE_B),
    p((2024, 7, 6), (2024, 9, 2), ALL),
    p((2024, 10, 19), (2024, 11, 4), ALL),
    p((2024, 12, 21), (2025, 1, 6), ALL),
];

/// Bitmask of zones on school vacation at `date`.
pub(crate) fn zones_on_vacation(date: NaiveDate) -> u8 {
    let key = (date.year(), date.month(), date.day());
    PERIODS
        .iter()
        .filter(|period| period.start <= key && key <= period.end)
        .fold(0, |mask, period| mask | period.zones)
}
