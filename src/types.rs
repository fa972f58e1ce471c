//! Core data types and structures for circle point generation.
//!
//! This module defines the input parameters of a computation, the ordered
//! output coordinates, and the presentation settings consumed by the chart,
//! table, and report exports.

use serde::{Deserialize, Serialize};

/// Errors raised when a [`CircleSpec`] cannot produce a point set.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InvalidInput {
    /// The point count was below one.
    #[error("point count must be at least 1, got {count}")]
    Count {
        /// The rejected count
        count: i64,
    },
    /// The radius was negative or not a finite number.
    #[error("radius must be a finite, non-negative number, got {radius}")]
    Radius {
        /// The rejected radius
        radius: f64,
    },
    /// The center or angle offset was not a finite number.
    #[error("{field} must be a finite number, got {value}")]
    NotFinite {
        /// Name of the offending field
        field: &'static str,
        /// The rejected value
        value: f64,
    },
}

/// Input parameters defining a circle and its point layout.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CircleSpec {
    /// Circle center as (x, y)
    pub center: (f64, f64),
    /// Circle radius, must be >= 0
    pub radius: f64,
    /// Number of points, must be >= 1
    pub count: usize,
    /// Rotation of the first point, in degrees counter-clockwise from +x
    pub angle_offset_deg: f64,
}

impl CircleSpec {
    /// Creates a new spec. No validation happens until generation.
    pub fn new(center: (f64, f64), radius: f64, count: usize, angle_offset_deg: f64) -> Self {
        Self {
            center,
            radius,
            count,
            angle_offset_deg,
        }
    }

    /// Checks the spec against the generation preconditions.
    pub fn validate(&self) -> Result<(), InvalidInput> {
        if self.count < 1 {
            return Err(InvalidInput::Count { count: self.count as i64 });
        }
        if !self.radius.is_finite() || self.radius < 0.0 {
            return Err(InvalidInput::Radius { radius: self.radius });
        }
        for (field, value) in [
            ("center x", self.center.0),
            ("center y", self.center.1),
            ("angle offset", self.angle_offset_deg),
        ] {
            if !value.is_finite() {
                return Err(InvalidInput::NotFinite { field, value });
            }
        }
        Ok(())
    }
}

impl Default for CircleSpec {
    fn default() -> Self {
        Self::new(
            (0.0, 0.0),
            crate::constants::DEFAULT_RADIUS,
            crate::constants::DEFAULT_COUNT,
            0.0,
        )
    }
}

/// A single generated coordinate with its 1-based index.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CirclePoint {
    /// 1-based position in generation order
    pub index: usize,
    /// X coordinate
    pub x: f64,
    /// Y coordinate
    pub y: f64,
}

/// The ordered coordinates derived from a [`CircleSpec`].
#[derive(Debug, Clone, PartialEq)]
pub struct PointSet {
    spec: CircleSpec,
    points: Vec<CirclePoint>,
}

impl PointSet {
    pub(crate) fn new(spec: CircleSpec, points: Vec<CirclePoint>) -> Self {
        Self { spec, points }
    }

    /// The spec this set was generated from.
    pub fn spec(&self) -> &CircleSpec {
        &self.spec
    }

    /// The points in index order.
    pub fn points(&self) -> &[CirclePoint] {
        &self.points
    }

    /// Number of points in the set.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the set holds no points. Never true for a generated set.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// sRGB color used for point markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointColor(pub [u8; 3]);

impl PointColor {
    /// Formats the color as `#rrggbb`.
    pub fn to_hex(self) -> String {
        let [r, g, b] = self.0;
        format!("#{:02x}{:02x}{:02x}", r, g, b)
    }

    /// Parses `#rrggbb` or `rrggbb`.
    pub fn from_hex(s: &str) -> Option<Self> {
        let hex = s.trim().trim_start_matches('#');
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        Some(Self([channel(0)?, channel(2)?, channel(4)?]))
    }
}

impl Default for PointColor {
    fn default() -> Self {
        Self(crate::constants::DEFAULT_POINT_COLOR)
    }
}

/// Presentation settings shared by the chart and every export.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartStyle {
    /// Marker fill color
    pub color: PointColor,
    /// Axis unit label appended to ticks and coordinates
    pub unit: String,
    /// Whether to draw point indices next to markers
    pub show_labels: bool,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            color: PointColor::default(),
            unit: crate::constants::DEFAULT_UNIT.to_string(),
            show_labels: true,
        }
    }
}

/// Options controlling the contents of the PDF report.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReportOptions {
    /// Whether page 1 lists the circle parameters
    pub include_parameters: bool,
    /// Optional author name for attribution
    pub author: String,
    /// Optional contact for attribution
    pub contact: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_spec_is_valid() {
        assert!(CircleSpec::default().validate().is_ok());
    }

    #[test]
    fn zero_count_is_rejected() {
        let spec = CircleSpec::new((0.0, 0.0), 1.0, 0, 0.0);
        assert_eq!(spec.validate(), Err(InvalidInput::Count { count: 0 }));
    }

    #[test]
    fn negative_and_nan_radius_are_rejected() {
        let spec = CircleSpec::new((0.0, 0.0), -0.5, 3, 0.0);
        assert!(matches!(spec.validate(), Err(InvalidInput::Radius { .. })));
        let spec = CircleSpec::new((0.0, 0.0), f64::NAN, 3, 0.0);
        assert!(matches!(spec.validate(), Err(InvalidInput::Radius { .. })));
    }

    #[test]
    fn infinite_center_is_rejected() {
        let spec = CircleSpec::new((f64::INFINITY, 0.0), 1.0, 3, 0.0);
        assert!(matches!(
            spec.validate(),
            Err(InvalidInput::NotFinite { field: "center x", .. })
        ));
    }

    #[test]
    fn color_hex_round_trips() {
        let color = PointColor([0x1f, 0x77, 0xb4]);
        assert_eq!(color.to_hex(), "#1f77b4");
        assert_eq!(PointColor::from_hex("#1f77b4"), Some(color));
        assert_eq!(PointColor::from_hex("1F77B4"), Some(color));
        assert_eq!(PointColor::from_hex("#1f77"), None);
        assert_eq!(PointColor::from_hex("#zz77b4"), None);
    }

    #[test]
    fn error_messages_name_the_value() {
        let err = InvalidInput::Count { count: 0 };
        assert_eq!(err.to_string(), "point count must be at least 1, got 0");
    }
}
