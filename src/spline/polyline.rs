use bevy::prelude::*;

use super::Curve;

/// A piecewise-linear curve through sampled points.
///
/// Every vertex is an anchor. The tangent on a segment is the segment vector
/// itself, so its magnitude is the segment length.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Polyline {
    points: Vec<Vec3>,
    /// Cumulative length at each vertex, starting at 0.
    distances: Vec<f32>,
}

impl Polyline {
    /// Build a polyline through `points`, measuring each vertex's distance.
    pub fn new(points: Vec<Vec3>) -> Self {
        let mut distances = Vec::with_capacity(points.len());
        let mut total = 0.0;
        for (i, point) in points.iter().enumerate() {
            if i > 0 {
                total += point.distance(points[i - 1]);
            }
            distances.push(total);
        }
        Self { points, distances }
    }

    /// The vertices in order.
    pub fn points(&self) -> &[Vec3] {
        &self.points
    }

    /// Index of the segment containing `distance`, clamped to the curve.
    fn segment_at(&self, distance: f32) -> usize {
        let end = self.distances.partition_point(|d| *d < distance);
        end.clamp(1, self.points.len() - 1) - 1
    }
}

impl From<Vec<Vec3>> for Polyline {
    fn from(points: Vec<Vec3>) -> Self {
        Self::new(points)
    }
}

impl Curve for Polyline {
    fn length(&self) -> f32 {
        self.distances.last().copied().unwrap_or(0.0)
    }

    fn position_at_distance(&self, distance: f32) -> Vec3 {
        match self.points.len() {
            0 => Vec3::ZERO,
            1 => self.points[0],
            _ => {
                let distance = distance.clamp(0.0, self.length());
                let i = self.segment_at(distance);
                let span = self.distances[i + 1] - self.distances[i];
                if span <= f32::EPSILON {
                    return self.points[i];
                }
                let alpha = (distance - self.distances[i]) / span;
                self.points[i].lerp(self.points[i + 1], alpha)
            }
        }
    }

    fn tangent_at_distance(&self, distance: f32) -> Vec3 {
        if self.points.len() < 2 {
            return Vec3::ZERO;
        }
        let i = self.segment_at(distance.clamp(0.0, self.length()));
        self.points[i + 1] - self.points[i]
    }

    fn distance_at_point(&self, index: usize) -> Option<f32> {
        self.distances.get(index).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn l_shape() -> Polyline {
        Polyline::new(vec![
            Vec3::ZERO,
            Vec3::new(300.0, 0.0, 0.0),
            Vec3::new(300.0, 0.0, 400.0),
        ])
    }

    #[test]
    fn test_length_and_anchors() {
        let line = l_shape();
        assert_eq!(line.length(), 700.0);
        assert_eq!(line.distance_at_point(1), Some(300.0));
        assert_eq!(line.distance_at_point(2), Some(700.0));
        assert_eq!(line.distance_at_point(3), None);
    }

    #[test]
    fn test_position_and_tangent() {
        let line = l_shape();
        assert_eq!(line.position_at_distance(150.0), Vec3::new(150.0, 0.0, 0.0));
        assert_eq!(line.position_at_distance(500.0), Vec3::new(300.0, 0.0, 200.0));
        assert_eq!(line.tangent_at_distance(100.0), Vec3::new(300.0, 0.0, 0.0));
        assert_eq!(line.tangent_at_distance(650.0), Vec3::new(0.0, 0.0, 400.0));
    }

    #[test]
    fn test_out_of_range_is_clamped() {
        let line = l_shape();
        assert_eq!(line.position_at_distance(-10.0), Vec3::ZERO);
        assert_eq!(line.position_at_distance(1e6), Vec3::new(300.0, 0.0, 400.0));
    }

    #[test]
    fn test_empty_and_single_point() {
        let empty = Polyline::default();
        assert_eq!(empty.length(), 0.0);
        assert_eq!(empty.position_at_distance(5.0), Vec3::ZERO);

        let single = Polyline::new(vec![Vec3::ONE]);
        assert_eq!(single.position_at_distance(5.0), Vec3::ONE);
        assert_eq!(single.tangent_at_distance(0.0), Vec3::ZERO);
    }
}
