//! Arc length parameterization utilities for splines.
//!
//! Converts between arc length and t-parameter space so that splines can be
//! queried by distance.

use bevy::prelude::*;

use super::Spline;

/// Default number of samples for arc length calculations.
pub const DEFAULT_ARC_LENGTH_SAMPLES: usize = 256;

/// Arc length lookup table for efficient t-to-length and length-to-t conversion.
///
/// The table is built by sampling the curve at regular t intervals and
/// accumulating the distance between samples.
#[derive(Debug, Clone)]
pub struct ArcLengthTable {
    /// (t, cumulative_length) pairs, always starting with (0.0, 0.0).
    samples: Vec<(f32, f32)>,
}

impl ArcLengthTable {
    /// Compute an arc length table for a spline.
    pub fn compute(spline: &Spline, samples: usize) -> Self {
        Self::from_fn(samples, |t| spline.evaluate(t))
    }

    /// Compute an arc length table for any curve given as `t -> position`.
    ///
    /// Parameters where `evaluate` returns `None` reuse the previous point.
    pub fn from_fn(samples: usize, evaluate: impl Fn(f32) -> Option<Vec3>) -> Self {
        let samples = samples.max(1);
        let mut table = Vec::with_capacity(samples + 1);
        let mut cumulative_length = 0.0;
        let mut prev_point = evaluate(0.0).unwrap_or(Vec3::ZERO);

        table.push((0.0, 0.0));

        for i in 1..=samples {
            let t = i as f32 / samples as f32;
            let point = evaluate(t).unwrap_or(prev_point);
            cumulative_length += (point - prev_point).length();
            table.push((t, cumulative_length));
            prev_point = point;
        }

        Self { samples: table }
    }

    /// Get the total arc length of the curve.
    pub fn total_length(&self) -> f32 {
        self.samples.last().map(|(_, l)| *l).unwrap_or(0.0)
    }

    /// Find the t parameter for a given arc length.
    ///
    /// Lengths outside `[0, total_length]` are clamped.
    pub fn length_to_t(&self, target_length: f32) -> f32 {
        let total_length = self.total_length();
        if total_length <= 0.0 {
            return 0.0;
        }

        let target = target_length.clamp(0.0, total_length);

        // First sample at or beyond the target; the segment ends there.
        let end = self
            .samples
            .partition_point(|(_, l)| *l < target)
            .clamp(1, self.samples.len() - 1);

        let (t0, l0) = self.samples[end - 1];
        let (t1, l1) = self.samples[end];

        if (l1 - l0).abs() < 1e-6 {
            return t0;
        }

        let alpha = (target - l0) / (l1 - l0);
        t0 + alpha * (t1 - t0)
    }

    /// Get the arc length at a given t parameter.
    pub fn t_to_length(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);

        // Samples are evenly spaced in t.
        let samples = self.samples.len();
        let float_idx = t * (samples - 1) as f32;
        let idx = (float_idx as usize).min(samples - 2);

        let (t0, l0) = self.samples[idx];
        let (t1, l1) = self.samples[idx + 1];

        if (t1 - t0).abs() < 1e-6 {
            return l0;
        }

        let alpha = (t - t0) / (t1 - t0);
        l0 + alpha * (l1 - l0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spline::SplineType;

    fn straight_spline() -> Spline {
        Spline::new(
            SplineType::CatmullRom,
            vec![
                Vec3::new(0.0, 0.0, 0.0),
                Vec3::new(1.0, 0.0, 0.0),
                Vec3::new(2.0, 0.0, 0.0),
                Vec3::new(3.0, 0.0, 0.0),
            ],
        )
    }

    #[test]
    fn test_arc_length_endpoints() {
        let table = ArcLengthTable::compute(&straight_spline(), 100);

        assert!((table.t_to_length(0.0) - 0.0).abs() < 0.01);
        assert!((table.length_to_t(0.0) - 0.0).abs() < 0.01);
        assert!((table.t_to_length(1.0) - table.total_length()).abs() < 0.01);
        assert!((table.length_to_t(table.total_length()) - 1.0).abs() < 0.01);
    }

    #[test]
    fn test_straight_segment_length() {
        // Catmull-Rom over collinear, evenly spaced points runs from p1 to p2.
        let table = ArcLengthTable::compute(&straight_spline(), 64);
        assert!((table.total_length() - 1.0).abs() < 1e-3);
        assert!((table.length_to_t(0.5) - 0.5).abs() < 1e-3);
    }

    #[test]
    fn test_lengths_are_clamped() {
        let table = ArcLengthTable::from_fn(10, |t| Some(Vec3::new(t * 10.0, 0.0, 0.0)));
        assert_eq!(table.length_to_t(-5.0), 0.0);
        assert!((table.length_to_t(50.0) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_degenerate_curve_has_zero_length() {
        let table = ArcLengthTable::from_fn(8, |_| None);
        assert_eq!(table.total_length(), 0.0);
        assert_eq!(table.length_to_t(3.0), 0.0);
    }
}
