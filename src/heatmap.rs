use chrono::NaiveDate;

use crate::calendar::{bloom_season_year, date_from_day_of_year, format_date};
use crate::colormap::{color_at, palette_stops};
use crate::types::{BloomError, HeatmapPoint, HeatmapScale, Locale, Rgb};

pub fn heatmap_from_json(json: &str) -> Result<Vec<HeatmapPoint>, BloomError> {
    let points: Vec<HeatmapPoint> = serde_json::from_str(json)?;
    Ok(points)
}

pub fn value_range(points: &[HeatmapPoint]) -> Option<(f64, f64)> {
    let mut range: Option<(f64, f64)> = None;
    for point in points {
        let Some(v) = point.value else { continue };
        range = Some(match range {
            None => (v, v),
            Some((lo, hi)) => (lo.min(v), hi.max(v)),
        });
    }
    range
}

pub fn contains_predictions(points: &[HeatmapPoint]) -> bool {
    points.iter().any(|p| p.is_prediction)
}

pub fn point_color(scale: &HeatmapScale, value: f64) -> Rgb {
    color_at(
        palette_stops(scale.palette),
        value,
        scale.min_day_of_year,
        scale.max_day_of_year,
    )
}

pub fn point_label(point: &HeatmapPoint, year: i32, locale: Locale) -> Option<String> {
    let value = point.value?;
    let date = date_from_day_of_year(year, value).ok()?;
    let name = match locale {
        Locale::Jp if !point.city_jp.is_empty() => &point.city_jp,
        _ => &point.city,
    };
    Some(format!("{}: {}", name, format_date(date, locale, false)))
}

pub fn year_bounds(scale: &HeatmapScale, today: NaiveDate) -> (i32, i32) {
    (scale.first_year, bloom_season_year(today))
}

pub fn year_label(year: i32, contains_predictions: bool) -> String {
    if contains_predictions {
        format!("{}*", year)
    } else {
        year.to_string()
    }
}

pub fn color_bar_labels(
    scale: &HeatmapScale,
    year: i32,
    locale: Locale,
) -> Result<[String; 3], BloomError> {
    let min = scale.min_day_of_year;
    let max = scale.max_day_of_year;
    let tick = |day: f64| -> Result<String, BloomError> {
        let date = date_from_day_of_year(year, day)?;
        Ok(format_date(date, locale, false))
    };
    Ok([tick(min)?, tick((min + max) / 2.0)?, tick(max)?])
}
