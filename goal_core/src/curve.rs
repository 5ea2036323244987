//! Quadratic Bézier ball paths
//!
//! Sampling via [`QuadraticBezier::point_at`] is by arc length, so the ball moves at
//! constant speed and cards placed at equal parameter steps are equally spaced.

use glam::Vec3;

use crate::params::Params;

#[derive(Debug, Clone, PartialEq)]
pub struct QuadraticBezier {
    pub start: Vec3,
    pub control: Vec3,
    pub end: Vec3,
    /// Cumulative chord lengths at `ARC_LENGTH_DIVISIONS + 1` evenly spaced raw parameters
    lengths: Vec<f32>,
}

impl QuadraticBezier {
    pub fn new(start: Vec3, control: Vec3, end: Vec3) -> Self {
        let mut curve = Self {
            start,
            control,
            end,
            lengths: Vec::new(),
        };
        curve.lengths = curve.cumulative_lengths(Params::ARC_LENGTH_DIVISIONS);
        curve
    }

    /// Point at raw Bézier parameter `t` in [0, 1]
    pub fn point(&self, t: f32) -> Vec3 {
        let k = 1.0 - t;
        self.start * (k * k) + self.control * (2.0 * k * t) + self.end * (t * t)
    }

    /// Point at fraction `u` of the curve's length
    pub fn point_at(&self, u: f32) -> Vec3 {
        self.point(self.raw_parameter(u))
    }

    pub fn length(&self) -> f32 {
        self.lengths.last().copied().unwrap_or(0.0)
    }

    /// Map an arc-length fraction to the raw Bézier parameter
    pub fn raw_parameter(&self, u: f32) -> f32 {
        let u = u.clamp(0.0, 1.0);
        let total = self.length();
        let last = self.lengths.len().saturating_sub(1);
        if total <= 0.0 || last == 0 {
            return u;
        }

        let target = u * total;
        let i = self
            .lengths
            .partition_point(|&l| l <= target)
            .saturating_sub(1)
            .min(last - 1);

        let before = self.lengths[i];
        let segment = self.lengths[i + 1] - before;
        let fraction = if segment > 0.0 {
            (target - before) / segment
        } else {
            0.0
        };
        ((i as f32 + fraction) / last as f32).clamp(0.0, 1.0)
    }

    /// `segments + 1` points at evenly spaced raw parameters, for drawing the path
    pub fn sample_points(&self, segments: usize) -> Vec<Vec3> {
        let segments = segments.max(1);
        (0..=segments)
            .map(|i| self.point(i as f32 / segments as f32))
            .collect()
    }

    fn cumulative_lengths(&self, divisions: usize) -> Vec<f32> {
        let mut lengths = Vec::with_capacity(divisions + 1);
        let mut total = 0.0;
        let mut previous = self.point(0.0);
        lengths.push(0.0);
        for i in 1..=divisions {
            let current = self.point(i as f32 / divisions as f32);
            total += current.distance(previous);
            lengths.push(total);
            previous = current;
        }
        lengths
    }
}

/// Build one curve per `[control, end]` pair, all starting at `start`
pub fn curves_from(start: Vec3, controls: &[[Vec3; 2]]) -> Vec<QuadraticBezier> {
    controls
        .iter()
        .map(|[control, end]| QuadraticBezier::new(start, *control, *end))
        .collect()
}

/// Periodic lap parameter: `(elapsed / lap) mod 1`
pub fn lap_parameter(elapsed_ms: f64, lap_ms: f64) -> f32 {
    if lap_ms <= 0.0 {
        return 0.0;
    }
    (elapsed_ms / lap_ms).rem_euclid(1.0) as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn centre_curve() -> QuadraticBezier {
        QuadraticBezier::new(
            Vec3::new(0.0, 0.0, 100.0),
            Vec3::new(20.0, 20.0, 50.0),
            Vec3::new(5.0, 15.0, -120.0),
        )
    }

    #[test]
    fn test_endpoints() {
        let curve = centre_curve();
        assert!((curve.point_at(0.0) - curve.start).length() < 1e-4);
        assert!((curve.point_at(1.0) - curve.end).length() < 1e-3);
        assert!((curve.point(0.5) - Vec3::new(11.25, 13.75, 20.0)).length() < 1e-4);
    }

    #[test]
    fn test_arc_length_sampling_is_uniform() {
        let curve = centre_curve();
        let steps = 20;
        let expected = curve.length() / steps as f32;
        for i in 0..steps {
            let a = curve.point_at(i as f32 / steps as f32);
            let b = curve.point_at((i + 1) as f32 / steps as f32);
            let d = a.distance(b);
            assert!(
                (d - expected).abs() < expected * 0.02,
                "Step {i} covers {d}, expected about {expected}"
            );
        }
    }

    #[test]
    fn test_straight_line_length() {
        let line = QuadraticBezier::new(Vec3::ZERO, Vec3::new(5.0, 0.0, 0.0), Vec3::new(10.0, 0.0, 0.0));
        assert!((line.length() - 10.0).abs() < 1e-3);
        assert!((line.point_at(0.25) - Vec3::new(2.5, 0.0, 0.0)).length() < 1e-3);
    }

    #[test]
    fn test_degenerate_curve() {
        let dot = QuadraticBezier::new(Vec3::ONE, Vec3::ONE, Vec3::ONE);
        assert_eq!(dot.length(), 0.0);
        assert_eq!(dot.point_at(0.7), Vec3::ONE);
    }

    #[test]
    fn test_lap_parameter_wraps() {
        assert_eq!(lap_parameter(0.0, 5000.0), 0.0);
        assert!((lap_parameter(2500.0, 5000.0) - 0.5).abs() < 1e-6);
        assert!(lap_parameter(4999.0, 5000.0) > 0.99);
        assert!(lap_parameter(5001.0, 5000.0) < 0.01);
        assert_eq!(lap_parameter(1000.0, 0.0), 0.0);
    }

    #[test]
    fn test_sampling_is_continuous_across_wrap() {
        // Sampled positions just after the wrap match a lap later
        let curve = centre_curve();
        let lap = 5000.0;
        for elapsed in [10.0, 1234.0, 4990.0] {
            let a = curve.point_at(lap_parameter(elapsed, lap));
            let b = curve.point_at(lap_parameter(elapsed + lap, lap));
            assert!((a - b).length() < 1e-3);
        }
        // Just before the wrap the ball is near the end, just after near the start
        let before = curve.point_at(lap_parameter(lap - 1.0, lap));
        let after = curve.point_at(lap_parameter(lap + 1.0, lap));
        assert!(before.distance(curve.end) < 1.0);
        assert!(after.distance(curve.start) < 1.0);
    }

    #[test]
    fn test_sample_points_count() {
        let curve = centre_curve();
        let points = curve.sample_points(50);
        assert_eq!(points.len(), 51);
        assert_eq!(points[0], curve.start);
    }

    #[test]
    fn test_curves_from_share_start() {
        let start = Vec3::new(0.0, 0.0, 100.0);
        let curves = curves_from(
            start,
            &[
                [Vec3::new(-30.0, 0.0, 50.0), Vec3::new(-40.0, 5.0, -120.0)],
                [Vec3::new(25.0, 0.0, 50.0), Vec3::new(50.0, 30.0, -115.0)],
            ],
        );
        assert_eq!(curves.len(), 2);
        assert!(curves.iter().all(|c| c.start == start));
    }
}
