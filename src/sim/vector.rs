//! 2D vector helpers for reflection
//!
//! Facing vectors are kept unit length; every reflection goes through
//! [`reflect`] and then [`normalize`].

use std::f64::consts::FRAC_1_SQRT_2;

use glam::DVec2;

/// Straight up (screen y grows downward)
pub const UP_NORM: DVec2 = DVec2::new(0.0, -1.0);
/// Up-left diagonal
pub const LEFT_NORM: DVec2 = DVec2::new(-FRAC_1_SQRT_2, -FRAC_1_SQRT_2);
/// Up-right diagonal
pub const RIGHT_NORM: DVec2 = DVec2::new(FRAC_1_SQRT_2, -FRAC_1_SQRT_2);

#[inline]
pub fn dot(a: DVec2, b: DVec2) -> f64 {
    a.dot(b)
}

/// Scale `v` to unit length
///
/// # Panics
/// If `v` has zero length. A zero facing means the reflection math is broken,
/// so there is nothing sensible to continue with.
pub fn normalize(v: DVec2) -> DVec2 {
    let length = v.length();
    assert!(
        length > 0.0,
        "cannot normalize a zero-length vector ({}, {})",
        v.x,
        v.y
    );
    v / length
}

/// Reflect `incident` off a surface with the given normal
///
/// r = i - 2(i·n)n
///
/// `normal` is expected to be unit length but is not checked; the blended
/// paddle normals are deliberately passed unnormalized.
#[inline]
pub fn reflect(normal: DVec2, incident: DVec2) -> DVec2 {
    incident - 2.0 * dot(incident, normal) * normal
}

/// -1, 0 or 1. Unlike `f64::signum`, zero maps to 0.
#[inline]
pub fn sign(value: f64) -> i8 {
    if value > 0.0 {
        1
    } else if value < 0.0 {
        -1
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_dot() {
        assert_eq!(dot(DVec2::new(1.0, 2.0), DVec2::new(3.0, 4.0)), 11.0);
        assert_eq!(dot(DVec2::new(1.0, 0.0), DVec2::new(0.0, 1.0)), 0.0);
    }

    #[test]
    fn test_reflect_straight_down_bounces_up() {
        let r = reflect(UP_NORM, DVec2::new(0.0, 1.0));
        assert!((r - DVec2::new(0.0, -1.0)).length() < EPS);
    }

    #[test]
    fn test_reflect_off_vertical_wall() {
        let r = reflect(DVec2::new(1.0, 0.0), DVec2::new(1.0, 1.0));
        assert!((r - DVec2::new(-1.0, 1.0)).length() < EPS);
    }

    #[test]
    fn test_normalize() {
        let n = normalize(DVec2::new(3.0, 4.0));
        assert!((n - DVec2::new(0.6, 0.8)).length() < EPS);
    }

    #[test]
    #[should_panic(expected = "zero-length")]
    fn test_normalize_zero_panics() {
        normalize(DVec2::ZERO);
    }

    #[test]
    fn test_diagonal_normals_are_unit() {
        assert!((LEFT_NORM.length() - 1.0).abs() < EPS);
        assert!((RIGHT_NORM.length() - 1.0).abs() < EPS);
    }

    #[test]
    fn test_sign() {
        assert_eq!(sign(3.5), 1);
        assert_eq!(sign(-0.1), -1);
        assert_eq!(sign(0.0), 0);
        assert_eq!(sign(-0.0), 0);
    }

    proptest! {
        #[test]
        fn prop_reflect_then_normalize_is_unit(
            angle in 0.0f64..std::f64::consts::TAU,
            normal_angle in 0.0f64..std::f64::consts::TAU,
            blend in prop::bool::ANY,
        ) {
            let facing = DVec2::new(angle.cos(), angle.sin());
            let mut normal = DVec2::new(normal_angle.cos(), normal_angle.sin());
            if blend {
                // Unnormalized like the paddle's blended normals
                normal += UP_NORM;
                prop_assume!(normal.length() >= 1.0);
            }
            let out = normalize(reflect(normal, facing));
            prop_assert!((out.length() - 1.0).abs() < EPS);
        }

        #[test]
        fn prop_unit_reflection_preserves_length(
            angle in 0.0f64..std::f64::consts::TAU,
            normal_angle in 0.0f64..std::f64::consts::TAU,
        ) {
            let facing = DVec2::new(angle.cos(), angle.sin());
            let normal = DVec2::new(normal_angle.cos(), normal_angle.sin());
            prop_assert!((reflect(normal, facing).length() - 1.0).abs() < EPS);
        }
    }
}
