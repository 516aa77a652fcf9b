use std::collections::HashMap;

use crate::types::{BloomError, Sample, TrendResult};

pub fn fit_linear(samples: &[Sample]) -> Result<TrendResult, BloomError> {
    let mut n = 0usize;
    let (mut sum_x, mut sum_y) = (0.0f64, 0.0f64);
    let (mut sum_xx, mut sum_yy, mut sum_xy) = (0.0f64, 0.0f64, 0.0f64);

    for sample in samples {
        let Some(y) = sample.value else { continue };
        let x = sample.year as f64;
        n += 1;
        sum_x += x;
        sum_y += y;
        sum_xx += x * x;
        sum_yy += y * y;
        sum_xy += x * y;
    }

    if n < 2 {
        return Err(BloomError::NotEnoughSamples(n));
    }

    let nf = n as f64;
    let sxx = nf * sum_xx - sum_x * sum_x;
    let syy = nf * sum_yy - sum_y * sum_y;
    if sxx == 0.0 {
        return Err(BloomError::DegenerateRegression("zero variance in x"));
    }
    if syy == 0.0 {
        return Err(BloomError::DegenerateRegression("zero variance in y"));
    }

    let sxy = nf * sum_xy - sum_x * sum_y;
    let slope = sxy / sxx;
    let intercept = (sum_y - slope * sum_x) / nf;
    let correlation = sxy / (sxx * syy).sqrt();

    if !slope.is_finite() || !intercept.is_finite() || !correlation.is_finite() {
        return Err(BloomError::DegenerateRegression("non-finite fit"));
    }

    Ok(TrendResult {
        slope,
        intercept,
        correlation,
    })
}

pub fn fill_gaps(samples: &[Sample]) -> Vec<Sample> {
    let mut years = samples.iter().map(|s| s.year);
    let Some(first) = years.next() else {
        return Vec::new();
    };
    let (min_year, max_year) = years.fold((first, first), |(lo, hi), y| (lo.min(y), hi.max(y)));

    // Last entry wins on duplicate years
    let mut by_year: HashMap<i32, Option<f64>> = HashMap::new();
    for sample in samples {
        by_year.insert(sample.year, sample.value);
    }

    (min_year..=max_year)
        .map(|year| Sample {
            year,
            value: by_year.get(&year).copied().flatten(),
        })
        .collect()
}

pub fn trend_value(trend: &TrendResult, year: i32) -> f64 {
    trend.slope * year as f64 + trend.intercept
}

pub fn trend_values(trend: &TrendResult, samples: &[Sample]) -> Vec<f64> {
    samples
        .iter()
        .map(|sample| trend_value(trend, sample.year))
        .collect()
}
