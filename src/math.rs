//! Scalar helpers shared by the catenary solver and samplers.

/// Below this magnitude `sinh(z)/z` and its derivative are evaluated from
/// their Taylor series; the closed forms cancel catastrophically in f32.
const SMALL_Z: f32 = 1e-2;

/// Hyperbolic sine.
#[inline]
pub fn sinh(x: f32) -> f32 {
    x.sinh()
}

/// Hyperbolic cosine.
#[inline]
pub fn cosh(x: f32) -> f32 {
    x.cosh()
}

/// Linear interpolation between `a` and `b`.
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// `sinh(z) / z`, continuous through `z = 0` where it tends to 1.
///
/// Overflows to infinity for large `|z|`.
pub fn sinh_ratio(z: f32) -> f32 {
    if z.abs() < SMALL_Z {
        let z2 = z * z;
        return 1.0 + z2 / 6.0 + z2 * z2 / 120.0;
    }
    sinh(z) / z
}

/// Derivative of [`sinh_ratio`] with respect to `z`.
///
/// May be NaN once `sinh`/`cosh` overflow.
pub fn sinh_ratio_derivative(z: f32) -> f32 {
    if z.abs() < SMALL_Z {
        return z / 3.0 + z * z * z / 30.0;
    }
    (cosh(z) * z - sinh(z)) / (z * z)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp_endpoints() {
        assert_eq!(lerp(2.0, 6.0, 0.0), 2.0);
        assert_eq!(lerp(2.0, 6.0, 1.0), 6.0);
        assert!((lerp(2.0, 6.0, 0.25) - 3.0).abs() < 1e-6);
    }

    #[test]
    fn test_sinh_ratio_near_zero() {
        assert!((sinh_ratio(0.0) - 1.0).abs() < 1e-6);
        assert!((sinh_ratio(1e-5) - 1.0).abs() < 1e-6);
        assert_eq!(sinh_ratio_derivative(0.0), 0.0);
    }

    #[test]
    fn test_series_meets_closed_form_at_cutoff() {
        let below = SMALL_Z * 0.999;
        let above = SMALL_Z * 1.001;
        assert!((sinh_ratio(below) - sinh_ratio(above)).abs() < 1e-5);
        assert!((sinh_ratio_derivative(below) - below / 3.0).abs() < 1e-6);
        assert!((sinh_ratio_derivative(above) - sinh_ratio_derivative(below)).abs() < 1e-3);
    }

    #[test]
    fn test_sinh_ratio_is_increasing() {
        let mut previous = sinh_ratio(0.01);
        for i in 2..200 {
            let z = i as f32 * 0.05;
            let ratio = sinh_ratio(z);
            assert!(ratio > previous, "not increasing at z = {z}");
            assert!(sinh_ratio_derivative(z) > 0.0);
            previous = ratio;
        }
    }

    #[test]
    fn test_sinh_ratio_overflows_to_infinity() {
        assert!(sinh_ratio(200.0).is_infinite());
    }
}
