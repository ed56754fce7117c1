//! Angle-based kinematics
//!
//! Headings are in degrees using the screen convention: 0° points up (+y) and
//! angles grow clockwise toward +x. That is `atan2(dx, dy)`, with the x delta in
//! the numerator, not the usual `atan2(dy, dx)`.

use glam::Vec2;

use crate::normalize_degrees;

/// Heading (degrees, [0, 360)) from `from` toward `to`
#[inline]
pub fn heading_to(from: Vec2, to: Vec2) -> f32 {
    let delta = to - from;
    normalize_degrees(delta.x.atan2(delta.y).to_degrees())
}

/// Split a scalar speed into per-axis deltas for the given heading
///
/// The speed is the hypotenuse of a right triangle whose angle at the
/// origin is the heading; the leg opposite the heading is the x delta and
/// the adjacent leg is the y delta. Moving by this vector from a point
/// goes straight toward whatever `heading_to` was aimed at.
#[inline]
pub fn decompose_velocity(speed: f32, heading: f32) -> Vec2 {
    let (sin, cos) = heading.to_radians().sin_cos();
    Vec2::new(speed * sin, speed * cos)
}

/// Rotation the renderer applies to a sprite facing `heading`
#[inline]
pub fn display_angle(heading: f32) -> f32 {
    normalize_degrees(360.0 - heading)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_heading_cardinal_directions() {
        let origin = Vec2::ZERO;
        assert!(heading_to(origin, Vec2::new(0.0, 10.0)).abs() < 1e-4);
        assert!((heading_to(origin, Vec2::new(10.0, 0.0)) - 90.0).abs() < 1e-4);
        assert!((heading_to(origin, Vec2::new(0.0, -10.0)) - 180.0).abs() < 1e-4);
        assert!((heading_to(origin, Vec2::new(-10.0, 0.0)) - 270.0).abs() < 1e-4);
    }

    #[test]
    fn test_velocity_points_toward_target() {
        let from = Vec2::new(-120.0, 40.0);
        let to = Vec2::new(400.0, 300.0);
        let step = decompose_velocity(4.0, heading_to(from, to));
        let before = from.distance(to);
        let after = (from + step).distance(to);
        assert!((before - after - 4.0).abs() < 1e-3);
    }

    #[test]
    fn test_velocity_up_is_positive_y() {
        let v = decompose_velocity(30.0, 0.0);
        assert!(v.x.abs() < 1e-4);
        assert!((v.y - 30.0).abs() < 1e-4);

        let v = decompose_velocity(30.0, 90.0);
        assert!((v.x - 30.0).abs() < 1e-4);
        assert!(v.y.abs() < 1e-4);
    }

    #[test]
    fn test_display_angle_is_complement() {
        assert_eq!(display_angle(0.0), 0.0);
        assert!((display_angle(90.0) - 270.0).abs() < 1e-4);
        assert!((display_angle(270.0) - 90.0).abs() < 1e-4);
    }

    proptest! {
        #[test]
        fn velocity_magnitude_matches_speed(heading in 0.0f32..360.0, speed in 0.0f32..100.0) {
            let v = decompose_velocity(speed, heading);
            prop_assert!((v.length() - speed).abs() < 1e-3);
        }

        #[test]
        fn heading_is_translation_invariant(
            fx in -1000.0f32..1000.0, fy in -1000.0f32..1000.0,
            tx in -1000.0f32..1000.0, ty in -1000.0f32..1000.0,
            sx in -500.0f32..500.0, sy in -500.0f32..500.0,
        ) {
            let from = Vec2::new(fx, fy);
            let to = Vec2::new(tx, ty);
            prop_assume!(from.distance(to) > 1.0);
            let shift = Vec2::new(sx, sy);
            let a = heading_to(from, to);
            let b = heading_to(from + shift, to + shift);
            // compare on the circle so 359.99 and 0.0 count as equal
            let diff = (a - b).abs();
            prop_assert!(diff.min(360.0 - diff) < 0.05);
        }

        #[test]
        fn heading_stays_in_range(x in -1000.0f32..1000.0, y in -1000.0f32..1000.0) {
            let h = heading_to(Vec2::ZERO, Vec2::new(x, y));
            prop_assert!((0.0..360.0).contains(&h));
        }
    }
}
