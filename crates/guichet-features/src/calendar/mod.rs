//! Release-calendar enrichment.
//!
//! Joins French school-vacation and public-holiday indicators onto the
//! release date, and adds the month plus its cosine encoding so December
//! and January read as neighbours.

mod public;
mod school;

use std::collections::HashSet;
use std::f64::consts::PI;

use chrono::{Datelike, NaiveDate};
use polars::prelude::*;

use crate::columns::date_rows;
use crate::stage::{FeatureError, FeatureStage, ensure_columns};

/// French school-holiday zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Zone {
    /// Zone A (Besançon, Bordeaux, Clermont-Ferrand, Dijon, Grenoble, ...).
    A,
    /// Zone B (Aix-Marseille, Amiens, Lille, Nancy-Metz, Nice, Rennes, ...).
    B,
    /// Zone C (Créteil, Montpellier, Paris, Toulouse, Versailles).
    C,
}

impl Zone {
    fn bit(self) -> u8 {
        match self {
            Self::A => school::ZONE_A,
            Self::B => school::ZONE_B,
            Self::C => school::ZONE_C,
        }
    }
}

/// Holiday lookup scoped to a set of years.
///
/// Built explicitly from the years present in a batch rather than behind a
/// global cache, so concurrent pipelines share nothing.
#[derive(Debug)]
pub struct HolidayCalendar {
    public_days: HashSet<NaiveDate>,
}

impl HolidayCalendar {
    /// Build the lookup, computing each distinct year once.
    pub fn for_years(years: &[i32]) -> Self {
        let distinct: HashSet<i32> = years.iter().copied().collect();
        let mut public_days = HashSet::new();
        for year in distinct {
            public_days.extend(public::public_holidays(year));
        }
        Self { public_days }
    }

    /// Whether `date` is a French public holiday.
    pub fn is_public_holiday(&self, date: NaiveDate) -> bool {
        self.public_days.contains(&date)
    }

    /// Whether `zone` is on school vacation at `date`.
    pub fn is_school_holiday(&self, date: NaiveDate, zone: Zone) -> bool {
        school::zones_on_vacation(date) & zone.bit() != 0
    }
}

/// CalendarEnricher appends the calendar feature columns.
///
/// `vacances_zone_{a,b,c}` and `jour_ferie` are 0/1 indicators, `holiday`
/// is their sum, `month` is the release month and
/// `cos_month = 2·cos(2π·month/12)`. Dates outside the vacation table get
/// zero indicators.
#[derive(Debug, Default)]
pub struct CalendarEnricher;

impl CalendarEnricher {
    /// Create the enricher.
    pub const fn new() -> Self {
        Self
    }
}

fn cos_month(month: f64) -> f64 {
    2.0 * (2.0 * PI * month / 12.0).cos()
}

impl FeatureStage for CalendarEnricher {
    fn name(&self) -> &str {
        "calendar_enricher"
    }

    fn required_columns(&self) -> &[&str] {
        &["release_date"]
    }

    fn apply(&self, data: &DataFrame) -> Result<DataFrame, FeatureError> {
        ensure_columns(self, data)?;
        let dates = date_rows(data, "release_date")?;

        let years: Vec<i32> = dates.iter().flatten().map(Datelike::year).collect();
        let calendar = HolidayCalendar::for_years(&years);

        let n = dates.len();
        let mut zone_a = Vec::with_capacity(n);
        let mut zone_b = Vec::with_capacity(n);
        let mut zone_c = Vec::with_capacity(n);
        let mut jour_ferie = Vec::with_capacity(n);
        let mut holiday = Vec::with_capacity(n);
        let mut month = Vec::with_capacity(n);
        let mut cos = Vec::with_capacity(n);

        for date in &dates {
            match date {
                Some(date) => {
                    let a = f64::from(calendar.is_school_holiday(*date, Zone::A));
                    let b = f64::from(calendar.is_school_holiday(*date, Zone::B));
                    let c = f64::from(calendar.is_school_holiday(*date, Zone::C));
                    let jf = f64::from(calendar.is_public_holiday(*date));
                    let m = f64::from(date.month());
                    zone_a.push(a);
                    zone_b.push(b);
                    zone_c.push(c);
                    jour_ferie.push(jf);
                    holiday.push(a + b + c + jf);
                    month.push(m);
                    cos.push(cos_month(m));
                }
                None => {
                    zone_a.push(0.0);
                    zone_b.push(0.0);
                    zone_c.push(0.0);
                    jour_ferie.push(0.0);
                    holiday.push(0.0);
                    month.push(0.0);
                    cos.push(0.0);
                }
            }
        }

        let mut out = data.clone();
        out.with_column(Column::from(Series::new("vacances_zone_a".into(), zone_a)))?;
        out.with_column(Column::from(Series::new("vacances_zone_b".into(), zone_b)))?;
        out.with_column(Column::from(Series::new("vacances_zone_c".into(), zone_c)))?;
        out.with_column(Column::from(Series::new("jour_ferie".into(), jour_ferie)))?;
        out.with_column(Column::from(Series::new("holiday".into(), holiday)))?;
        out.with_column(Column::from(Series::new("month".into(), month)))?;
        out.with_column(Column::from(Series::new("cos_month".into(), cos)))?;
        Ok(out)
    }
}
