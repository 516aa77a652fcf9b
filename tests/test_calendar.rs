use bloom_tracker::calendar::*;
use bloom_tracker::types::{BloomError, Locale};
use chrono::NaiveDate;

fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

// ── DayOfYear to date ──

#[test]
fn test_day_one_is_january_first() {
    assert_eq!(date_from_day_of_year(2026, 1.0).unwrap(), ymd(2026, 1, 1));
    assert_eq!(date_from_day_of_year(1953, 1.0).unwrap(), ymd(1953, 1, 1));
}

#[test]
fn test_known_days() {
    let cases: &[(i32, f64, (i32, u32, u32))] = &[
        (2024, 32.0, (2024, 2, 1)),
        (2026, 32.0, (2026, 2, 1)),
        (2026, 80.0, (2026, 3, 21)),
        (2026, 160.0, (2026, 6, 9)),
        (2026, 365.0, (2026, 12, 31)),
    ];
    for &(year, day, (y, m, d)) in cases {
        assert_eq!(
            date_from_day_of_year(year, day).unwrap(),
            ymd(y, m, d),
            "year={} day={}",
            year,
            day
        );
    }
}

#[test]
fn test_leap_year_days() {
    assert_eq!(date_from_day_of_year(2024, 60.0).unwrap(), ymd(2024, 2, 29));
    assert_eq!(date_from_day_of_year(2024, 61.0).unwrap(), ymd(2024, 3, 1));
    assert_eq!(date_from_day_of_year(2024, 366.0).unwrap(), ymd(2024, 12, 31));
    assert_eq!(date_from_day_of_year(2025, 60.0).unwrap(), ymd(2025, 3, 1));
}

#[test]
fn test_rolls_into_next_year() {
    assert_eq!(date_from_day_of_year(2025, 366.0).unwrap(), ymd(2026, 1, 1));
    assert_eq!(date_from_day_of_year(2024, 367.0).unwrap(), ymd(2025, 1, 1));
    assert_eq!(date_from_day_of_year(2025, 400.0).unwrap(), ymd(2026, 2, 4));
}

#[test]
fn test_rolls_into_previous_year() {
    assert_eq!(date_from_day_of_year(2026, 0.0).unwrap(), ymd(2025, 12, 31));
    assert_eq!(date_from_day_of_year(2026, -30.0).unwrap(), ymd(2025, 12, 1));
}

#[test]
fn test_fractional_days_truncate() {
    assert_eq!(date_from_day_of_year(2026, 80.5).unwrap(), ymd(2026, 3, 21));
    assert_eq!(date_from_day_of_year(2026, 80.9).unwrap(), ymd(2026, 3, 21));
}

#[test]
fn test_non_finite_day_is_invalid() {
    assert!(matches!(
        date_from_day_of_year(2026, f64::NAN),
        Err(BloomError::InvalidDate { year: 2026, .. })
    ));
    assert!(matches!(
        date_from_day_of_year(2026, f64::INFINITY),
        Err(BloomError::InvalidDate { .. })
    ));
    assert!(matches!(
        date_from_day_of_year(2026, f64::NEG_INFINITY),
        Err(BloomError::InvalidDate { .. })
    ));
}

#[test]
fn test_absurd_inputs_are_invalid() {
    assert!(date_from_day_of_year(2026, 1e18).is_err());
    assert!(date_from_day_of_year(2026, -1e18).is_err());
    assert!(date_from_day_of_year(400_000, 1.0).is_err());
}

// ── Date to DayOfYear ──

#[test]
fn test_day_of_year_roundtrip() {
    let cases: &[(i32, u32, u32)] = &[
        (2026, 1, 1),
        (2026, 3, 21),
        (2026, 12, 31),
        (2024, 2, 29),
        (2024, 12, 31),
    ];
    for &(y, m, d) in cases {
        let date = ymd(y, m, d);
        let doy = day_of_year(date);
        assert_eq!(
            date_from_day_of_year(y, doy as f64).unwrap(),
            date,
            "{}-{}-{}",
            y,
            m,
            d
        );
    }
}

// ── Formatting ──

#[test]
fn test_format_english() {
    assert_eq!(format_date(ymd(2024, 2, 1), Locale::En, false), "Feb 1");
    assert_eq!(format_date(ymd(2026, 3, 21), Locale::En, false), "Mar 21");
    assert_eq!(format_date(ymd(2026, 1, 5), Locale::En, false), "Jan 5");
}

#[test]
fn test_format_english_with_year() {
    assert_eq!(format_date(ymd(2024, 2, 1), Locale::En, true), "Feb 1, 2024");
    assert_eq!(format_date(ymd(2026, 4, 5), Locale::En, true), "Apr 5, 2026");
}

#[test]
fn test_format_japanese() {
    assert_eq!(format_date(ymd(2024, 2, 1), Locale::Jp, false), "2月1日");
    assert_eq!(format_date(ymd(2026, 3, 21), Locale::Jp, false), "3月21日");
}

#[test]
fn test_format_japanese_with_year() {
    assert_eq!(format_date(ymd(2024, 2, 1), Locale::Jp, true), "2024年2月1日");
    assert_eq!(
        format_date(ymd(2026, 12, 31), Locale::Jp, true),
        "2026年12月31日"
    );
}

#[test]
fn test_formatting_day_32_both_locales() {
    let date = date_from_day_of_year(2024, 32.0).unwrap();
    assert_eq!(format_date(date, Locale::En, false), "Feb 1");
    assert_eq!(format_date(date, Locale::Jp, false), "2月1日");
}

// ── Bloom season year ──

#[test]
fn test_bloom_season_spring_months_keep_year() {
    for month in 1..=5 {
        assert_eq!(bloom_season_year(ymd(2026, month, 15)), 2026, "month={}", month);
    }
}

#[test]
fn test_bloom_season_after_may_advances_year() {
    for month in 6..=12 {
        assert_eq!(bloom_season_year(ymd(2026, month, 15)), 2027, "month={}", month);
    }
}

#[test]
fn test_bloom_season_boundary() {
    assert_eq!(bloom_season_year(ymd(2026, 5, 31)), 2026);
    assert_eq!(bloom_season_year(ymd(2026, 6, 1)), 2027);
}

#[test]
fn test_current_bloom_season_year_matches_clock() {
    let today = chrono::Utc::now().date_naive();
    assert_eq!(current_bloom_season_year(), bloom_season_year(today));
}
