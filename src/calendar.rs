use chrono::{Datelike, NaiveDate, TimeDelta, Utc};

use crate::types::{BloomError, Locale};

pub fn date_from_day_of_year(year: i32, day_of_year: f64) -> Result<NaiveDate, BloomError> {
    let err = || BloomError::InvalidDate {
        year,
        day: day_of_year,
    };
    if !day_of_year.is_finite() {
        return Err(err());
    }
    let jan1 = NaiveDate::from_ymd_opt(year, 1, 1).ok_or_else(err)?;
    // Day 1 is Jan 1; day 0 and negatives roll back into the previous
    // year, days past the year's length roll forward into the next
    let offset = TimeDelta::try_days(day_of_year.trunc() as i64 - 1).ok_or_else(err)?;
    jan1.checked_add_signed(offset).ok_or_else(err)
}

pub fn day_of_year(date: NaiveDate) -> i32 {
    date.ordinal() as i32
}

pub fn format_date(date: NaiveDate, locale: Locale, include_year: bool) -> String {
    match (locale, include_year) {
        (Locale::En, false) => date.format("%b %-d").to_string(),
        (Locale::En, true) => date.format("%b %-d, %Y").to_string(),
        (Locale::Jp, false) => format!("{}月{}日", date.month(), date.day()),
        (Locale::Jp, true) => format!("{}年{}月{}日", date.year(), date.month(), date.day()),
    }
}

pub fn bloom_season_year(today: NaiveDate) -> i32 {
    if today.month() < 6 {
        today.year()
    } else {
        today.year() + 1
    }
}

pub fn current_bloom_season_year() -> i32 {
    bloom_season_year(Utc::now().date_naive())
}
