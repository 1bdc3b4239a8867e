//! Collision tests for axis-aligned boxes and circles
//!
//! World coordinates are screen-oriented: y grows downward, so "above" means a
//! smaller y.

use glam::Vec2;

/// True when the open horizontal spans `[a_x, a_x + a_w)` and `[b_x, b_x + b_w)` intersect
#[inline]
pub fn overlaps_x(a_x: f32, a_w: f32, b_x: f32, b_w: f32) -> bool {
    a_x + a_w > b_x && a_x < b_x + b_w
}

/// Check whether a falling box comes to rest on a surface.
///
/// The box qualifies while moving down (or resting) with its foot inside the band
/// from the surface top to `surface_height + tolerance` below it, overlapping the
/// surface horizontally.
pub fn lands_on(
    box_pos: Vec2,
    box_size: Vec2,
    vel_y: f32,
    surface_pos: Vec2,
    surface_size: Vec2,
    tolerance: f32,
) -> bool {
    let foot = box_pos.y + box_size.y;
    vel_y >= 0.0
        && overlaps_x(box_pos.x, box_size.x, surface_pos.x, surface_size.x)
        && foot > surface_pos.y
        && foot <= surface_pos.y + surface_size.y + tolerance
}

/// Closest point on a box to `point`
#[inline]
pub fn closest_point_on_rect(point: Vec2, rect_pos: Vec2, rect_size: Vec2) -> Vec2 {
    point.clamp(rect_pos, rect_pos + rect_size)
}

/// Circle vs axis-aligned box overlap
pub fn circle_rect_overlap(center: Vec2, radius: f32, rect_pos: Vec2, rect_size: Vec2) -> bool {
    let closest = closest_point_on_rect(center, rect_pos, rect_size);
    center.distance_squared(closest) < radius * radius
}

/// Which walls a circle touched while being kept inside a box
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WallHits {
    pub x: bool,
    pub y: bool,
}

impl WallHits {
    #[inline]
    pub fn any(&self) -> bool {
        self.x || self.y
    }
}

/// Keep a circle inside `[min, max]`, reflecting the velocity component of any wall it crossed
pub fn bounce_in_bounds(pos: &mut Vec2, vel: &mut Vec2, radius: f32, min: Vec2, max: Vec2) -> WallHits {
    let mut hits = WallHits::default();

    if pos.x - radius < min.x {
        pos.x = min.x + radius;
        vel.x = vel.x.abs();
        hits.x = true;
    } else if pos.x + radius > max.x {
        pos.x = max.x - radius;
        vel.x = -vel.x.abs();
        hits.x = true;
    }

    if pos.y - radius < min.y {
        pos.y = min.y + radius;
        vel.y = vel.y.abs();
        hits.y = true;
    } else if pos.y + radius > max.y {
        pos.y = max.y - radius;
        vel.y = -vel.y.abs();
        hits.y = true;
    }

    hits
}
