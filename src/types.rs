use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Locale {
    En,
    Jp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Palette {
    Jet,
    Hot,
    Coolwarm,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub year: i32,
    pub value: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrendResult {
    pub slope: f64,
    pub intercept: f64,
    pub correlation: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Prediction {
    pub year: i32,
    pub q10: f64,
    pub q50: f64,
    pub q90: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeatmapPoint {
    pub city: String,
    #[serde(default)]
    pub city_jp: String,
    pub lat: f64,
    pub lng: f64,
    #[serde(default)]
    pub value: Option<f64>,
    #[serde(default)]
    pub is_prediction: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HistoryPoint {
    pub year: i32,
    #[serde(default)]
    pub value: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BloomHistory {
    pub points: Vec<HistoryPoint>,
    pub prediction_year: i32,
    pub prediction_q10: f64,
    pub prediction_q50: f64,
    pub prediction_q90: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeatmapScale {
    pub min_day_of_year: f64,
    pub max_day_of_year: f64,
    pub first_year: i32,
    pub palette: Palette,
}

impl Default for HeatmapScale {
    fn default() -> Self {
        Self {
            min_day_of_year: 1.0,
            max_day_of_year: 160.0,
            first_year: 1953,
            palette: Palette::Hot,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExampleResult {
    pub trend: TrendResult,
    pub median_date: NaiveDate,
    pub interval: (NaiveDate, NaiveDate),
    pub marker_color: Rgb,
}

#[derive(Debug, Error)]
pub enum BloomError {
    #[error("invalid date: year {year}, day-of-year {day}")]
    InvalidDate { year: i32, day: f64 },
    #[error("regression needs at least 2 observed samples, got {0}")]
    NotEnoughSamples(usize),
    #[error("degenerate regression input: {0}")]
    DegenerateRegression(&'static str),
    #[error("malformed payload: {0}")]
    MalformedPayload(#[from] serde_json::Error),
}
