//! Axis layout shared by the on-screen chart and every exported image.
//!
//! The layout is computed in world (data) coordinates; renderers map it into their
//! own pixel space through [`ChartLayout::to_unit`].

use crate::constants;
use crate::types::{CircleSpec, PointSet};
use std::f64::consts::TAU;

/// Bounds, ticks, and labels for one rendering of a [`PointSet`].
#[derive(Debug, Clone, PartialEq)]
pub struct ChartLayout {
    /// Inclusive x range of the plot area
    pub x_range: (f64, f64),
    /// Inclusive y range of the plot area
    pub y_range: (f64, f64),
    /// Tick positions along x
    pub x_ticks: Vec<f64>,
    /// Tick positions along y
    pub y_ticks: Vec<f64>,
    /// Title summarizing the computation
    pub title: String,
    /// Label under the x axis
    pub x_label: String,
    /// Label beside the y axis
    pub y_label: String,
    unit: String,
}

impl ChartLayout {
    /// Computes the layout for `set`, labelling axes with `unit`.
    pub fn new(set: &PointSet, unit: &str) -> Self {
        let spec = set.spec();
        let (cx, cy) = spec.center;
        let half = if spec.radius > 0.0 {
            spec.radius * (1.0 + constants::AXIS_MARGIN)
        } else {
            constants::DEGENERATE_HALF_SPAN
        };
        let x_range = axis_range(cx, half);
        let y_range = axis_range(cy, half);

        Self {
            x_ticks: nice_ticks(x_range.0, x_range.1, constants::TARGET_TICKS),
            y_ticks: nice_ticks(y_range.0, y_range.1, constants::TARGET_TICKS),
            x_range,
            y_range,
            title: chart_title(spec, unit),
            x_label: format!("x [{}]", unit),
            y_label: format!("y [{}]", unit),
            unit: unit.to_string(),
        }
    }

    /// Formats a tick value with the axis unit, e.g. `2.5 m`.
    pub fn tick_label(&self, value: f64) -> String {
        with_unit(&format_general(value), &self.unit)
    }

    /// Maps a world point to `[0, 1]²` with y growing upward.
    pub fn to_unit(&self, x: f64, y: f64) -> (f64, f64) {
        (unit_offset(x, self.x_range), unit_offset(y, self.y_range))
    }
}

/// `center ± half`, widened when the sum rounds back onto the center.
fn axis_range(center: f64, half: f64) -> (f64, f64) {
    let range = (center - half, center + half);
    if range.1 - range.0 > 0.0 {
        return range;
    }
    // Far from zero a span of 1 can vanish too; grow it to a few ulps of the center.
    let half = constants::DEGENERATE_HALF_SPAN.max(center.abs() * f64::EPSILON * 8.0);
    (center - half, center + half)
}

// Halved operands keep spans near f64::MAX from overflowing to infinity.
fn unit_offset(v: f64, (lo, hi): (f64, f64)) -> f64 {
    (v * 0.5 - lo * 0.5) / (hi * 0.5 - lo * 0.5)
}

/// Samples of the ideal circle outline, closed (first sample repeated at the end).
pub fn circle_outline(spec: &CircleSpec) -> Vec<(f64, f64)> {
    let (cx, cy) = spec.center;
    let n = constants::CIRCLE_SAMPLES;
    (0..=n)
        .map(|i| {
            let t = TAU * i as f64 / n as f64;
            (cx + spec.radius * t.cos(), cy + spec.radius * t.sin())
        })
        .collect()
}

/// Title line, e.g. `Points: 12 | radius 5 m | center (0, 0)`.
pub fn chart_title(spec: &CircleSpec, unit: &str) -> String {
    format!(
        "Points: {} | radius {} | center ({}, {})",
        spec.count,
        with_unit(&format_general(spec.radius), unit),
        format_general(spec.center.0),
        format_general(spec.center.1)
    )
}

fn with_unit(value: &str, unit: &str) -> String {
    if unit.trim().is_empty() {
        value.to_string()
    } else {
        format!("{} {}", value, unit.trim())
    }
}

/// Tick positions at a "nice" step (1, 2, 2.5, 5 × 10^k) inside `[min, max]`.
pub fn nice_ticks(min: f64, max: f64, target: usize) -> Vec<f64> {
    if !(min.is_finite() && max.is_finite()) || max <= min || target == 0 {
        return Vec::new();
    }
    let raw = (max * 0.5 - min * 0.5) / target as f64 * 2.0;
    if !raw.is_finite() || raw <= 0.0 {
        return Vec::new();
    }
    let exp = raw.log10().floor() as i32;
    let scale = 10f64.powi(exp.abs());
    // Dividing by an exact power of ten keeps values like 0.6 from drifting.
    let at = |units: f64| if exp >= 0 { units * scale } else { units / scale };
    let mantissa = [1.0, 2.0, 2.5, 5.0, 10.0]
        .into_iter()
        .find(|m| at(*m) >= raw)
        .unwrap_or(10.0);
    let step = at(mantissa);

    let first = (min / step).ceil() as i64;
    let last = (max / step).floor() as i64;
    (first..=last)
        .map(|k| {
            let v = at(k as f64 * mantissa);
            if v == 0.0 { 0.0 } else { v }
        })
        .filter(|v| v.is_finite())
        .collect()
}

/// Formats like C's `%g`: 6 significant digits, trailing zeros removed,
/// scientific notation for very small or large magnitudes.
pub fn format_general(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    if !value.is_finite() {
        return value.to_string();
    }
    let sci = format!("{:.5e}", value);
    let (mantissa, exp) = match sci.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (sci.as_str(), 0),
    };
    if (-4..6).contains(&exp) {
        let decimals = (5 - exp).max(0) as usize;
        trim_zeros(&format!("{:.*}", decimals, value))
    } else {
        let sign = if exp < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", trim_zeros(mantissa), sign, exp.abs())
    }
}

fn trim_zeros(s: &str) -> String {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        s.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::generate;

    #[test]
    fn general_format_matches_printf_g() {
        assert_eq!(format_general(0.0), "0");
        assert_eq!(format_general(-0.0), "0");
        assert_eq!(format_general(5.0), "5");
        assert_eq!(format_general(2.5), "2.5");
        assert_eq!(format_general(-3.75), "-3.75");
        assert_eq!(format_general(0.30000000000000004), "0.3");
        assert_eq!(format_general(123456.0), "123456");
        assert_eq!(format_general(1234567.0), "1.23457e+06");
        assert_eq!(format_general(0.0001), "0.0001");
        assert_eq!(format_general(0.00001), "1e-05");
    }

    #[test]
    fn ticks_use_nice_steps_inside_range() {
        let ticks = nice_ticks(-5.25, 5.25, 7);
        assert_eq!(ticks, vec![-4.0, -2.0, 0.0, 2.0, 4.0]);

        let ticks = nice_ticks(0.0, 1.0, 7);
        assert_eq!(ticks.first(), Some(&0.0));
        assert_eq!(ticks.last(), Some(&1.0));
        assert!(ticks.contains(&0.2));
    }

    #[test]
    fn degenerate_range_has_no_ticks() {
        assert!(nice_ticks(1.0, 1.0, 7).is_empty());
        assert!(nice_ticks(0.0, f64::NAN, 7).is_empty());
    }

    #[test]
    fn layout_is_centered_with_margin() {
        let set = generate((2.0, -1.0), 10.0, 6, 0.0).unwrap();
        let layout = ChartLayout::new(&set, "m");
        assert!((layout.x_range.0 - (2.0 - 10.5)).abs() < 1e-12);
        assert!((layout.y_range.1 - (-1.0 + 10.5)).abs() < 1e-12);
        let (u, v) = layout.to_unit(2.0, -1.0);
        assert!((u - 0.5).abs() < 1e-12 && (v - 0.5).abs() < 1e-12);
    }

    #[test]
    fn zero_radius_uses_unit_span() {
        let set = generate((4.0, 4.0), 0.0, 3, 0.0).unwrap();
        let layout = ChartLayout::new(&set, "m");
        assert_eq!(layout.x_range, (3.0, 5.0));
        assert!(!layout.x_ticks.is_empty());
    }

    #[test]
    fn labels_carry_the_unit() {
        let set = generate((0.0, 0.0), 5.0, 12, 0.0).unwrap();
        let layout = ChartLayout::new(&set, "cm");
        assert_eq!(layout.tick_label(2.5), "2.5 cm");
        assert_eq!(layout.x_label, "x [cm]");
        assert_eq!(layout.title, "Points: 12 | radius 5 cm | center (0, 0)");
    }

    #[test]
    fn empty_unit_leaves_bare_numbers() {
        let set = generate((0.0, 0.0), 1.0, 2, 0.0).unwrap();
        let layout = ChartLayout::new(&set, "");
        assert_eq!(layout.tick_label(-1.0), "-1");
    }

    #[test]
    fn tiny_radius_far_from_origin_maps_to_finite_coordinates() {
        let set = generate((1e10, 1e10), 1e-10, 4, 0.0).unwrap();
        let layout = ChartLayout::new(&set, "m");
        assert!(layout.x_range.1 > layout.x_range.0);
        assert!(layout.y_range.1 > layout.y_range.0);
        for p in set.points() {
            let (u, v) = layout.to_unit(p.x, p.y);
            assert!(u.is_finite() && v.is_finite());
            assert!((u - 0.5).abs() < 1e-6 && (v - 0.5).abs() < 1e-6);
        }
    }

    #[test]
    fn huge_radius_keeps_ticks_and_coordinates_finite() {
        let set = generate((0.0, 0.0), 1e308, 4, 0.0).unwrap();
        let layout = ChartLayout::new(&set, "m");
        assert!(!layout.x_ticks.is_empty());
        assert!(layout.x_ticks.iter().chain(&layout.y_ticks).all(|t| t.is_finite()));
        assert!(!layout.tick_label(layout.x_ticks[0]).contains("NaN"));
        let (u, v) = layout.to_unit(set.points()[0].x, set.points()[0].y);
        assert!(u.is_finite() && v.is_finite());
        assert!(u > 0.5 && u < 1.0);
    }

    #[test]
    fn outline_is_closed_and_on_circle() {
        let spec = CircleSpec::new((1.0, 1.0), 2.0, 3, 0.0);
        let outline = circle_outline(&spec);
        assert_eq!(outline.len(), constants::CIRCLE_SAMPLES + 1);
        let (first, last) = (outline[0], outline[outline.len() - 1]);
        assert!((first.0 - last.0).abs() < 1e-12 && (first.1 - last.1).abs() < 1e-12);
    }
}
