//! Easing curves and value interpolation for camera transitions

use glam::Vec3;

/// Symmetric ease-in-ease-out curve (smoothstep). Low velocity at both
/// endpoints, highest velocity at the midpoint. Input is clamped to [0, 1].
pub fn ease_in_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Linear interpolation between two values of the same type.
///
/// Each animated camera parameter group (position, orientation, look-at,
/// zoom) is tweened through this trait with an eased `t`.
pub trait Lerp: Copy {
    fn lerp(a: Self, b: Self, t: f32) -> Self;
}

impl Lerp for f32 {
    fn lerp(a: Self, b: Self, t: f32) -> Self {
        a + (b - a) * t
    }
}

impl Lerp for Vec3 {
    fn lerp(a: Self, b: Self, t: f32) -> Self {
        a.lerp(b, t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ease_endpoints_exact() {
        assert_eq!(ease_in_out(0.0), 0.0);
        assert_eq!(ease_in_out(1.0), 1.0);
    }

    #[test]
    fn ease_midpoint_is_half() {
        assert!((ease_in_out(0.5) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn ease_clamps_out_of_range() {
        assert_eq!(ease_in_out(-1.0), 0.0);
        assert_eq!(ease_in_out(2.5), 1.0);
    }

    #[test]
    fn ease_is_symmetric() {
        for i in 0..=10 {
            let t = i as f32 / 10.0;
            assert!((ease_in_out(t) - (1.0 - ease_in_out(1.0 - t))).abs() < 1e-5);
        }
    }

    #[test]
    fn ease_is_monotonic() {
        let mut prev = 0.0;
        for i in 1..=100 {
            let v = ease_in_out(i as f32 / 100.0);
            assert!(v >= prev);
            prev = v;
        }
    }

    #[test]
    fn lerp_scalar_and_vector() {
        assert_eq!(f32::lerp(0.0, 10.0, 0.25), 2.5);
        let v = Vec3::lerp(Vec3::ZERO, Vec3::new(2.0, 4.0, 6.0), 0.5);
        assert_eq!(v, Vec3::new(1.0, 2.0, 3.0));
    }
}
