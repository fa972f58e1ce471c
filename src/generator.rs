//! Evenly spaced point placement on a circle.

use crate::types::{CirclePoint, CircleSpec, InvalidInput, PointSet};
use std::f64::consts::TAU;

/// Generates `count` points evenly spaced on the circle described by the arguments.
///
/// Point 1 sits `angle_offset_deg` degrees counter-clockwise from the positive x-axis;
/// each following point advances by `360 / count` degrees.
///
/// # Errors
///
/// Returns [`InvalidInput`] when `count` is zero, `radius` is negative or non-finite,
/// or the center/offset are non-finite.
///
/// # Example
///
/// ```
/// use circle_points::generate;
///
/// let set = generate((2.0, 3.0), 1.0, 1, 90.0).unwrap();
/// let p = set.points()[0];
/// assert!((p.x - 2.0).abs() < 1e-12 && (p.y - 4.0).abs() < 1e-12);
/// ```
pub fn generate(
    center: (f64, f64),
    radius: f64,
    count: usize,
    angle_offset_deg: f64,
) -> Result<PointSet, InvalidInput> {
    generate_from_spec(&CircleSpec::new(center, radius, count, angle_offset_deg))
}

/// Same as [`generate`], taking a prepared [`CircleSpec`].
pub fn generate_from_spec(spec: &CircleSpec) -> Result<PointSet, InvalidInput> {
    spec.validate()?;

    let offset = spec.angle_offset_deg.to_radians();
    let (cx, cy) = spec.center;
    let points = (0..spec.count)
        .map(|i| {
            let angle = offset + TAU * i as f64 / spec.count as f64;
            CirclePoint {
                index: i + 1,
                x: cx + spec.radius * angle.cos(),
                y: cy + spec.radius * angle.sin(),
            }
        })
        .collect();

    Ok(PointSet::new(*spec, points))
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn assert_close(actual: (f64, f64), expected: (f64, f64)) {
        assert!(
            (actual.0 - expected.0).abs() < EPS && (actual.1 - expected.1).abs() < EPS,
            "expected {:?}, got {:?}",
            expected,
            actual
        );
    }

    #[test]
    fn four_points_on_radius_five() {
        let set = generate((0.0, 0.0), 5.0, 4, 0.0).unwrap();
        let coords: Vec<_> = set.points().iter().map(|p| (p.x, p.y)).collect();
        assert_close(coords[0], (5.0, 0.0));
        assert_close(coords[1], (0.0, 5.0));
        assert_close(coords[2], (-5.0, 0.0));
        assert_close(coords[3], (0.0, -5.0));
    }

    #[test]
    fn single_point_sits_at_offset() {
        let set = generate((2.0, 3.0), 1.0, 1, 90.0).unwrap();
        assert_eq!(set.len(), 1);
        assert_eq!(set.points()[0].index, 1);
        assert_close((set.points()[0].x, set.points()[0].y), (2.0, 4.0));
    }

    #[test]
    fn zero_offset_starts_on_positive_x_axis() {
        let set = generate((-1.5, 7.25), 3.0, 9, 0.0).unwrap();
        let first = set.points()[0];
        assert_eq!(first.x, -1.5 + 3.0);
        assert_eq!(first.y, 7.25);
    }

    #[test]
    fn every_point_is_on_the_circle() {
        for &(center, radius, count, offset) in &[
            ((0.0, 0.0), 1.0, 3usize, 0.0),
            ((10.0, -4.0), 250.0, 17, 33.3),
            ((-0.5, 0.5), 0.001, 100, -720.0),
            ((1e3, 1e3), 42.0, 360, 1e4),
        ] {
            let set = generate(center, radius, count, offset).unwrap();
            assert_eq!(set.len(), count);
            for p in set.points() {
                let d = ((p.x - center.0).powi(2) + (p.y - center.1).powi(2)).sqrt();
                assert!((d - radius).abs() <= 1e-9 * radius.max(1.0), "distance {d} != {radius}");
            }
        }
    }

    #[test]
    fn consecutive_points_are_evenly_spaced_counter_clockwise() {
        let count = 7;
        let set = generate((1.0, 2.0), 4.0, count, 15.0).unwrap();
        let step = 360.0 / count as f64;
        let angles: Vec<f64> = set
            .points()
            .iter()
            .map(|p| (p.y - 2.0).atan2(p.x - 1.0).to_degrees())
            .collect();
        assert!((angles[0] - 15.0).abs() < 1e-9);
        for pair in angles.windows(2) {
            let diff = (pair[1] - pair[0]).rem_euclid(360.0);
            assert!((diff - step).abs() < 1e-9, "step {diff} != {step}");
        }
    }

    #[test]
    fn indices_are_one_based_and_ordered() {
        let set = generate((0.0, 0.0), 1.0, 5, 0.0).unwrap();
        let indices: Vec<usize> = set.points().iter().map(|p| p.index).collect();
        assert_eq!(indices, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn zero_radius_collapses_onto_center() {
        let set = generate((3.0, -2.0), 0.0, 6, 45.0).unwrap();
        for p in set.points() {
            assert_eq!((p.x, p.y), (3.0, -2.0));
        }
    }

    #[test]
    fn generation_is_deterministic() {
        let a = generate((0.3, 0.7), 2.5, 13, 12.5).unwrap();
        let b = generate((0.3, 0.7), 2.5, 13, 12.5).unwrap();
        for (p, q) in a.points().iter().zip(b.points()) {
            assert_eq!(p.x.to_bits(), q.x.to_bits());
            assert_eq!(p.y.to_bits(), q.y.to_bits());
        }
    }

    #[test]
    fn invalid_inputs_are_rejected() {
        assert_eq!(
            generate((0.0, 0.0), 1.0, 0, 0.0),
            Err(InvalidInput::Count { count: 0 })
        );
        assert!(matches!(
            generate((0.0, 0.0), -1.0, 3, 0.0),
            Err(InvalidInput::Radius { .. })
        ));
    }

    #[test]
    fn offset_wraps_by_periodicity() {
        let a = generate((0.0, 0.0), 2.0, 5, 30.0).unwrap();
        let b = generate((0.0, 0.0), 2.0, 5, 390.0).unwrap();
        for (p, q) in a.points().iter().zip(b.points()) {
            assert_close((p.x, p.y), (q.x, q.y));
        }
    }

    #[test]
    fn set_remembers_its_spec() {
        let set = generate((1.0, 1.0), 2.0, 3, 10.0).unwrap();
        assert_eq!(set.spec(), &CircleSpec::new((1.0, 1.0), 2.0, 3, 10.0));
    }
}
