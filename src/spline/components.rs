use bevy::prelude::*;

use super::types::{SplineEvaluator, SplineType};

/// A 3D spline component that can be attached to entities.
/// Fully serializable with Bevy's scene system.
#[derive(Component, Debug, Clone, Reflect, Default)]
#[reflect(Component)]
pub struct Spline {
    /// The type of spline interpolation.
    pub spline_type: SplineType,
    /// Control points defining the spline shape.
    pub control_points: Vec<Vec3>,
    /// Whether the spline forms a closed loop.
    pub closed: bool,
}

impl Spline {
    /// Create a new spline with the given type and control points.
    pub fn new(spline_type: SplineType, control_points: Vec<Vec3>) -> Self {
        Self {
            spline_type,
            control_points,
            closed: false,
        }
    }

    /// Create a new closed spline.
    pub fn closed(spline_type: SplineType, control_points: Vec<Vec3>) -> Self {
        Self {
            spline_type,
            control_points,
            closed: true,
        }
    }

    /// Evaluate the spline at parameter t (0.0 to 1.0).
    pub fn evaluate(&self, t: f32) -> Option<Vec3> {
        self.spline_type
            .evaluate(&self.control_points, t, self.closed)
    }

    /// Evaluate the tangent at parameter t.
    pub fn evaluate_tangent(&self, t: f32) -> Option<Vec3> {
        self.spline_type
            .evaluate_tangent(&self.control_points, t, self.closed)
    }

    /// Parameter t at which the spline passes control point `index`, if it is an anchor.
    pub fn anchor_t(&self, index: usize) -> Option<f32> {
        self.spline_type
            .anchor_t(self.control_points.len(), index, self.closed)
    }

    /// Get the number of segments in this spline.
    pub fn segment_count(&self) -> usize {
        self.spline_type
            .segment_count(&self.control_points, self.closed)
    }

    /// Check if the spline has enough points to be valid.
    pub fn is_valid(&self) -> bool {
        self.control_points.len() >= self.spline_type.min_points()
    }

    /// Sample the spline into a series of points.
    pub fn sample(&self, samples_per_segment: usize) -> Vec<Vec3> {
        let segment_count = self.segment_count();
        if segment_count == 0 || samples_per_segment == 0 {
            return Vec::new();
        }

        let total_samples = segment_count * samples_per_segment + 1;
        (0..total_samples)
            .filter_map(|i| self.evaluate(i as f32 / (total_samples - 1) as f32))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spline::{Curve, Polyline, SplineCurve};

    fn square() -> Vec<Vec3> {
        vec![
            Vec3::new(-100.0, 0.0, -100.0),
            Vec3::new(100.0, 0.0, -100.0),
            Vec3::new(100.0, 0.0, 100.0),
            Vec3::new(-100.0, 0.0, 100.0),
        ]
    }

    #[test]
    fn test_closed_spline_sample_loops() {
        let spline = Spline::closed(SplineType::CatmullRom, square());
        assert_eq!(spline.segment_count(), 4);

        let points = spline.sample(4);
        assert_eq!(points.len(), 17);
        assert!((points[0] - square()[0]).length() < 1e-3);
        assert!((points[16] - points[0]).length() < 1e-3);
    }

    #[test]
    fn test_invalid_spline_samples_nothing() {
        let spline = Spline::new(SplineType::BSpline, square()[..3].to_vec());
        assert!(!spline.is_valid());
        assert!(spline.sample(8).is_empty());
        assert_eq!(spline.evaluate(0.5), None);
    }

    #[test]
    fn test_sampled_polyline_matches_arc_length() {
        let spline = Spline::closed(SplineType::CatmullRom, square());
        let curve = SplineCurve::new(&spline).unwrap();
        let polyline = Polyline::from(spline.sample(64));

        assert_eq!(curve.spline().control_points.len(), 4);
        assert_eq!(polyline.points().len(), 257);
        assert!((polyline.length() - curve.length()).abs() < 1.0);
    }
}
