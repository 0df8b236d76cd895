use bevy::prelude::*;

/// The type of spline interpolation to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Reflect)]
#[reflect(Default)]
pub enum SplineType {
    /// Cubic Bézier spline - 4 control points per segment.
    /// Points 0 and 3 are on the curve, 1 and 2 are handles.
    #[default]
    CubicBezier,
    /// Catmull-Rom spline - passes through all control points.
    /// Requires at least 4 points, curve is defined between points 1 and n-2.
    CatmullRom,
    /// B-Spline - smooth curve with local control.
    /// Does not pass through control points except endpoints.
    BSpline,
}

impl SplineType {
    /// Minimum number of control points required for this spline type.
    pub fn min_points(&self) -> usize {
        4
    }

    /// Global parameter `t` at which the curve passes the control point `index`.
    ///
    /// Bézier anchors are the on-curve points (every third point). Catmull-Rom
    /// anchors are the interpolated points; for B-Splines this is the knot
    /// where the point has the most influence. Handles and the outer
    /// Catmull-Rom/B-Spline guide points of an open spline have no anchor.
    pub fn anchor_t(&self, point_count: usize, index: usize, closed: bool) -> Option<f32> {
        let segments = self.segment_count_for(point_count, closed);
        if segments == 0 || index >= point_count {
            return None;
        }

        let knot = match self {
            Self::CubicBezier => {
                if index % 3 != 0 || index / 3 > segments {
                    return None;
                }
                index / 3
            }
            Self::CatmullRom if closed => index,
            Self::BSpline if closed => (index + point_count - 1) % point_count,
            Self::CatmullRom | Self::BSpline => {
                if index == 0 || index - 1 > segments {
                    return None;
                }
                index - 1
            }
        };

        Some(knot as f32 / segments as f32)
    }

    fn segment_count_for(&self, point_count: usize, closed: bool) -> usize {
        if point_count < self.min_points() {
            return 0;
        }
        match self {
            Self::CubicBezier => (point_count - 1) / 3,
            Self::CatmullRom | Self::BSpline if closed => point_count,
            Self::CatmullRom | Self::BSpline => point_count - 3,
        }
    }

    /// Split a global `t` into the segment index and the local parameter.
    fn locate(&self, point_count: usize, t: f32, closed: bool) -> Option<(usize, f32)> {
        let segments = self.segment_count_for(point_count, closed);
        if segments == 0 {
            return None;
        }
        let t_scaled = t * segments as f32;
        let segment = (t_scaled.max(0.0).floor() as usize).min(segments - 1);
        Some((segment, t_scaled - segment as f32))
    }

    /// The four control points that shape `segment`.
    fn window(&self, points: &[Vec3], segment: usize, closed: bool) -> [Vec3; 4] {
        let n = points.len();
        match self {
            Self::CubicBezier => {
                let i = segment * 3;
                [points[i], points[i + 1], points[i + 2], points[i + 3]]
            }
            Self::CatmullRom if closed => [
                points[(segment + n - 1) % n],
                points[segment % n],
                points[(segment + 1) % n],
                points[(segment + 2) % n],
            ],
            Self::BSpline if closed => [
                points[segment % n],
                points[(segment + 1) % n],
                points[(segment + 2) % n],
                points[(segment + 3) % n],
            ],
            Self::CatmullRom | Self::BSpline => [
                points[segment],
                points[segment + 1],
                points[segment + 2],
                points[segment + 3],
            ],
        }
    }
}

/// Trait for evaluating spline curves.
pub trait SplineEvaluator {
    /// Evaluate the spline at parameter t (0.0 to 1.0 across entire spline).
    fn evaluate(&self, points: &[Vec3], t: f32, closed: bool) -> Option<Vec3>;

    /// Evaluate the tangent (derivative with respect to the segment parameter) at t.
    fn evaluate_tangent(&self, points: &[Vec3], t: f32, closed: bool) -> Option<Vec3>;

    /// Get the number of segments in the spline.
    fn segment_count(&self, points: &[Vec3], closed: bool) -> usize;
}

impl SplineEvaluator for SplineType {
    fn evaluate(&self, points: &[Vec3], t: f32, closed: bool) -> Option<Vec3> {
        let (segment, local_t) = self.locate(points.len(), t, closed)?;
        let [p0, p1, p2, p3] = self.window(points, segment, closed);
        Some(match self {
            Self::CubicBezier => cubic_bezier(p0, p1, p2, p3, local_t),
            Self::CatmullRom => catmull_rom(p0, p1, p2, p3, local_t),
            Self::BSpline => bspline(p0, p1, p2, p3, local_t),
        })
    }

    fn evaluate_tangent(&self, points: &[Vec3], t: f32, closed: bool) -> Option<Vec3> {
        let (segment, local_t) = self.locate(points.len(), t, closed)?;
        let [p0, p1, p2, p3] = self.window(points, segment, closed);
        Some(match self {
            Self::CubicBezier => cubic_bezier_derivative(p0, p1, p2, p3, local_t),
            Self::CatmullRom => catmull_rom_derivative(p0, p1, p2, p3, local_t),
            Self::BSpline => bspline_derivative(p0, p1, p2, p3, local_t),
        })
    }

    fn segment_count(&self, points: &[Vec3], closed: bool) -> usize {
        self.segment_count_for(points.len(), closed)
    }
}

fn cubic_bezier(p0: Vec3, p1: Vec3, p2: Vec3, p3: Vec3, t: f32) -> Vec3 {
    let t2 = t * t;
    let t3 = t2 * t;
    let mt = 1.0 - t;
    let mt2 = mt * mt;
    let mt3 = mt2 * mt;

    p0 * mt3 + p1 * 3.0 * mt2 * t + p2 * 3.0 * mt * t2 + p3 * t3
}

fn cubic_bezier_derivative(p0: Vec3, p1: Vec3, p2: Vec3, p3: Vec3, t: f32) -> Vec3 {
    let t2 = t * t;
    let mt = 1.0 - t;
    let mt2 = mt * mt;

    (p1 - p0) * 3.0 * mt2 + (p2 - p1) * 6.0 * mt * t + (p3 - p2) * 3.0 * t2
}

fn catmull_rom(p0: Vec3, p1: Vec3, p2: Vec3, p3: Vec3, t: f32) -> Vec3 {
    let t2 = t * t;
    let t3 = t2 * t;

    0.5 * ((2.0 * p1)
        + (-p0 + p2) * t
        + (2.0 * p0 - 5.0 * p1 + 4.0 * p2 - p3) * t2
        + (-p0 + 3.0 * p1 - 3.0 * p2 + p3) * t3)
}

fn catmull_rom_derivative(p0: Vec3, p1: Vec3, p2: Vec3, p3: Vec3, t: f32) -> Vec3 {
    let t2 = t * t;

    0.5 * ((-p0 + p2)
        + (2.0 * p0 - 5.0 * p1 + 4.0 * p2 - p3) * 2.0 * t
        + (-p0 + 3.0 * p1 - 3.0 * p2 + p3) * 3.0 * t2)
}

// Uniform cubic B-Spline
fn bspline(p0: Vec3, p1: Vec3, p2: Vec3, p3: Vec3, t: f32) -> Vec3 {
    let t2 = t * t;
    let t3 = t2 * t;

    (1.0 / 6.0)
        * ((1.0 - 3.0 * t + 3.0 * t2 - t3) * p0
            + (4.0 - 6.0 * t2 + 3.0 * t3) * p1
            + (1.0 + 3.0 * t + 3.0 * t2 - 3.0 * t3) * p2
            + t3 * p3)
}

fn bspline_derivative(p0: Vec3, p1: Vec3, p2: Vec3, p3: Vec3, t: f32) -> Vec3 {
    let t2 = t * t;

    (1.0 / 6.0)
        * ((-3.0 + 6.0 * t - 3.0 * t2) * p0
            + (-12.0 * t + 9.0 * t2) * p1
            + (3.0 + 6.0 * t - 9.0 * t2) * p2
            + 3.0 * t2 * p3)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(n: usize) -> Vec<Vec3> {
        (0..n).map(|i| Vec3::new(i as f32, 0.0, 0.0)).collect()
    }

    #[test]
    fn test_catmull_rom_passes_through_anchors() {
        let points = vec![
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.0, 2.0, 0.0),
            Vec3::new(2.0, 0.0, 1.0),
            Vec3::new(3.0, 1.0, 0.0),
            Vec3::new(4.0, 0.0, 0.0),
        ];
        let spline = SplineType::CatmullRom;
        for index in 1..=3 {
            let t = spline.anchor_t(points.len(), index, false).unwrap();
            let p = spline.evaluate(&points, t, false).unwrap();
            assert!((p - points[index]).length() < 1e-4, "anchor {index} at {p}");
        }
        assert_eq!(spline.anchor_t(points.len(), 0, false), None);
        assert_eq!(spline.anchor_t(points.len(), 4, false), None);
    }

    #[test]
    fn test_bezier_anchors_are_every_third_point() {
        let points = line(7);
        let spline = SplineType::CubicBezier;
        assert_eq!(spline.anchor_t(7, 0, false), Some(0.0));
        assert_eq!(spline.anchor_t(7, 3, false), Some(0.5));
        assert_eq!(spline.anchor_t(7, 6, false), Some(1.0));
        assert_eq!(spline.anchor_t(7, 1, false), None);

        let end = spline.evaluate(&points, 1.0, false).unwrap();
        assert!((end - points[6]).length() < 1e-5);
    }

    #[test]
    fn test_too_few_points() {
        let points = line(3);
        assert!(SplineType::BSpline.evaluate(&points, 0.5, false).is_none());
        assert!(SplineType::CatmullRom.evaluate_tangent(&points, 0.5, false).is_none());
        assert_eq!(SplineType::CubicBezier.segment_count(&points, false), 0);
        assert_eq!(SplineType::CatmullRom.anchor_t(3, 1, false), None);
    }

    #[test]
    fn test_closed_segment_count() {
        let points = line(5);
        assert_eq!(SplineType::CatmullRom.segment_count(&points, true), 5);
        assert_eq!(SplineType::BSpline.segment_count(&points, false), 2);
    }
}
