//! Hit tests between points and sprite boxes
//!
//! Sprites are axis-aligned squares anchored at their bottom-left corner.
//! A hit is a point landing inside (or on the edge of) a box; there is no
//! box-box overlap test.

use glam::Vec2;

use super::state::Enemy;

/// Inclusive point-in-box test for a box anchored at `origin`
#[inline]
pub fn point_in_box(origin: Vec2, size: Vec2, point: Vec2) -> bool {
    point.x >= origin.x
        && point.x <= origin.x + size.x
        && point.y >= origin.y
        && point.y <= origin.y + size.y
}

/// Index of the first live enemy in roster order whose box contains `point`
pub fn first_hit(enemies: &[Enemy], point: Vec2) -> Option<usize> {
    enemies
        .iter()
        .position(|e| e.is_alive() && e.contains_point(point))
}
