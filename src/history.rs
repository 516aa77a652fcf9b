use chrono::NaiveDate;

use crate::calendar::{date_from_day_of_year, format_date};
use crate::colormap::css_color;
use crate::heatmap::point_color;
use crate::trend::{fill_gaps, fit_linear};
use crate::types::{
    BloomError, BloomHistory, ExampleResult, HeatmapScale, HistoryPoint, Locale, Prediction,
    Sample,
};

pub fn history_from_json(json: &str) -> Result<BloomHistory, BloomError> {
    let history: BloomHistory = serde_json::from_str(json)?;
    Ok(history)
}

pub fn history_samples(history: &BloomHistory) -> Vec<Sample> {
    history
        .points
        .iter()
        .map(|p| Sample {
            year: p.year,
            value: p.value,
        })
        .collect()
}

pub fn history_prediction(history: &BloomHistory) -> Prediction {
    Prediction {
        year: history.prediction_year,
        q10: history.prediction_q10,
        q50: history.prediction_q50,
        q90: history.prediction_q90,
    }
}

pub fn median_bloom_date(prediction: &Prediction) -> Result<NaiveDate, BloomError> {
    quantile_date(prediction.year, prediction.q50)
}

pub fn prediction_interval(prediction: &Prediction) -> Result<(NaiveDate, NaiveDate), BloomError> {
    let low = quantile_date(prediction.year, prediction.q10)?;
    let high = quantile_date(prediction.year, prediction.q90)?;
    Ok((low, high))
}

fn quantile_date(year: i32, quantile: f64) -> Result<NaiveDate, BloomError> {
    if !quantile.is_finite() {
        return Err(BloomError::InvalidDate {
            year,
            day: quantile,
        });
    }
    date_from_day_of_year(year, quantile.round())
}

pub fn example_calculation() -> ExampleResult {
    let history = BloomHistory {
        points: vec![
            HistoryPoint { year: 2016, value: Some(89.0) },
            HistoryPoint { year: 2017, value: Some(92.0) },
            HistoryPoint { year: 2018, value: Some(83.0) },
            HistoryPoint { year: 2019, value: Some(86.0) },
            HistoryPoint { year: 2021, value: Some(81.0) },
            HistoryPoint { year: 2022, value: Some(86.0) },
            HistoryPoint { year: 2023, value: Some(77.0) },
            HistoryPoint { year: 2024, value: Some(88.0) },
            HistoryPoint { year: 2025, value: Some(83.0) },
        ],
        prediction_year: 2026,
        prediction_q10: 78.4,
        prediction_q50: 84.2,
        prediction_q90: 90.8,
    };

    let series = fill_gaps(&history_samples(&history));
    let trend = fit_linear(&series).unwrap();
    let prediction = history_prediction(&history);
    let median = median_bloom_date(&prediction).unwrap();
    let interval = prediction_interval(&prediction).unwrap();
    let color = point_color(&HeatmapScale::default(), prediction.q50);

    println!("=== Bloom Trend Calculation Example ===");
    println!("City: Tokyo ({} observed springs)", history.points.len());
    println!();
    println!("--- Linear Trend ---");
    println!("Slope: {:.3} days/year", trend.slope);
    println!("Intercept: {:.1}", trend.intercept);
    println!("Correlation (r): {:.3}", trend.correlation);
    println!();
    println!("--- Prediction ({}) ---", prediction.year);
    println!(
        "Estimated bloom date: {}",
        format_date(median, Locale::En, true)
    );
    println!(
        "80% prediction interval: {} – {}",
        format_date(interval.0, Locale::En, true),
        format_date(interval.1, Locale::En, true)
    );
    println!("Marker color: {}", css_color(color));
    println!();

    ExampleResult {
        trend,
        median_date: median,
        interval,
        marker_color: color,
    }
}
