use bevy::prelude::*;

use crate::error::PlacementError;
use crate::geometry::level_rotation;
use crate::spline::Curve;

/// Evenly spaced transforms from the start of `curve` to its end.
///
/// The spacing is shrunk so both ends receive a transform: a curve of length
/// `L` gets `ceil(L / dist_between_objects) + 1` transforms. With `facing_up`
/// each rotation keeps its heading but is leveled, and scale is forced to one.
pub fn transforms_along_curve(
    curve: &impl Curve,
    dist_between_objects: f32,
    facing_up: bool,
) -> Result<Vec<Transform>, PlacementError> {
    if !(dist_between_objects > 0.0 && dist_between_objects.is_finite()) {
        return Err(PlacementError::InvalidSpacing(dist_between_objects));
    }

    let length = curve.length();
    let count = (length / dist_between_objects).ceil() as usize;
    if count == 0 {
        return Ok(vec![place(curve, 0.0, facing_up)]);
    }

    let step = length / count as f32;
    Ok((0..=count)
        .map(|i| place(curve, step * i as f32, facing_up))
        .collect())
}

fn place(curve: &impl Curve, distance: f32, facing_up: bool) -> Transform {
    let mut transform = curve.transform_at_distance(distance);
    if facing_up {
        transform.rotation = level_rotation(transform.rotation);
        transform.scale = Vec3::ONE;
    }
    transform
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spline::Polyline;
    use approx::assert_relative_eq;

    #[test]
    fn test_even_spacing_includes_both_ends() {
        let line = Polyline::new(vec![Vec3::ZERO, Vec3::new(1000.0, 0.0, 0.0)]);
        let transforms = transforms_along_curve(&line, 100.0, false).unwrap();

        assert_eq!(transforms.len(), 11);
        for (i, transform) in transforms.iter().enumerate() {
            assert_relative_eq!(transform.translation.x, i as f32 * 100.0, epsilon = 1e-3);
        }
    }

    #[test]
    fn test_spacing_shrinks_to_fit() {
        let line = Polyline::new(vec![Vec3::ZERO, Vec3::new(250.0, 0.0, 0.0)]);
        let transforms = transforms_along_curve(&line, 100.0, false).unwrap();

        // ceil(2.5) = 3 gaps of 83.3.
        assert_eq!(transforms.len(), 4);
        assert_relative_eq!(transforms[1].translation.x, 250.0 / 3.0, epsilon = 1e-3);
        assert_relative_eq!(transforms[3].translation.x, 250.0, epsilon = 1e-3);
    }

    #[test]
    fn test_zero_length_curve_yields_one_transform() {
        let point = Polyline::new(vec![Vec3::new(4.0, 5.0, 6.0)]);
        let transforms = transforms_along_curve(&point, 10.0, true).unwrap();

        assert_eq!(transforms.len(), 1);
        assert_eq!(transforms[0].translation, Vec3::new(4.0, 5.0, 6.0));
    }

    #[test]
    fn test_invalid_spacing() {
        let line = Polyline::new(vec![Vec3::ZERO, Vec3::X]);
        assert_eq!(
            transforms_along_curve(&line, 0.0, false),
            Err(PlacementError::InvalidSpacing(0.0))
        );
        assert!(transforms_along_curve(&line, f32::NAN, false).is_err());
        assert!(transforms_along_curve(&line, -1.0, false).is_err());
    }

    #[test]
    fn test_facing_up_levels_slopes() {
        let ramp = Polyline::new(vec![Vec3::ZERO, Vec3::new(100.0, 100.0, 0.0)]);

        let tilted = transforms_along_curve(&ramp, 50.0, false).unwrap();
        assert!(tilted[1].forward().y > 0.5);

        let level = transforms_along_curve(&ramp, 50.0, true).unwrap();
        let forward = level[1].forward();
        assert_relative_eq!(forward.y, 0.0, epsilon = 1e-4);
        assert!(forward.x > 0.99);
        assert_eq!(level[1].scale, Vec3::ONE);
        assert_eq!(level[1].translation, tilted[1].translation);
    }
}
