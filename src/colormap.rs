use crate::types::{Palette, Rgb};

pub const JET: [Rgb; 5] = [
    Rgb { r: 0, g: 0, b: 255 },
    Rgb { r: 0, g: 255, b: 255 },
    Rgb { r: 0, g: 255, b: 0 },
    Rgb { r: 255, g: 255, b: 0 },
    Rgb { r: 255, g: 0, b: 0 },
];

pub const HOT: [Rgb; 4] = [
    Rgb { r: 0, g: 0, b: 0 },
    Rgb { r: 255, g: 0, b: 0 },
    Rgb { r: 255, g: 255, b: 0 },
    Rgb { r: 255, g: 255, b: 255 },
];

pub const COOLWARM: [Rgb; 3] = [
    Rgb { r: 59, g: 76, b: 192 },
    Rgb { r: 221, g: 221, b: 221 },
    Rgb { r: 180, g: 4, b: 38 },
];

pub fn palette_stops(palette: Palette) -> &'static [Rgb] {
    match palette {
        Palette::Jet => &JET,
        Palette::Hot => &HOT,
        Palette::Coolwarm => &COOLWARM,
    }
}

pub fn color_at(stops: &[Rgb], value: f64, min: f64, max: f64) -> Rgb {
    let Some(&last) = stops.last() else {
        return Rgb { r: 0, g: 0, b: 0 };
    };
    // Degenerate range maps everything onto the hottest end
    if stops.len() == 1 || max == min {
        return last;
    }

    let ratio = ((value - min) / (max - min)).clamp(0.0, 1.0);
    let segments = stops.len() - 1;
    let segment = ((ratio * segments as f64) as usize).min(segments - 1);
    let local = ratio * segments as f64 - segment as f64;

    let a = stops[segment];
    let b = stops[segment + 1];
    Rgb {
        r: lerp_channel(a.r, b.r, local),
        g: lerp_channel(a.g, b.g, local),
        b: lerp_channel(a.b, b.b, local),
    }
}

fn lerp_channel(from: u8, to: u8, t: f64) -> u8 {
    (from as f64 + t * (to as f64 - from as f64)).round() as u8
}

pub fn css_color(color: Rgb) -> String {
    format!("rgb({}, {}, {})", color.r, color.g, color.b)
}

pub fn css_gradient(stops: &[Rgb]) -> String {
    let denom = stops.len().saturating_sub(1).max(1) as f64;
    let parts: Vec<String> = stops
        .iter()
        .enumerate()
        .map(|(i, c)| {
            let pct = (i as f64 / denom) * 100.0;
            format!("rgb({}, {}, {}) {}%", c.r, c.g, c.b, pct)
        })
        .collect();
    format!("linear-gradient(to right, {})", parts.join(", "))
}
