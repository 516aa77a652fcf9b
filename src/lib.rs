pub mod calendar;
pub mod colormap;
pub mod heatmap;
pub mod history;
pub mod trend;
pub mod types;

pub use calendar::{
    bloom_season_year, current_bloom_season_year, date_from_day_of_year, day_of_year, format_date,
};

pub use colormap::{color_at, css_color, css_gradient, palette_stops, COOLWARM, HOT, JET};

pub use heatmap::{
    color_bar_labels, contains_predictions, heatmap_from_json, point_color, point_label,
    value_range, year_bounds, year_label,
};

pub use history::{
    example_calculation, history_from_json, history_prediction, history_samples, median_bloom_date,
    prediction_interval,
};

pub use trend::{fill_gaps, fit_linear, trend_value, trend_values};

pub use types::{
    BloomError, BloomHistory, ExampleResult, HeatmapPoint, HeatmapScale, HistoryPoint, Locale,
    Palette, Prediction, Rgb, Sample, TrendResult,
};
