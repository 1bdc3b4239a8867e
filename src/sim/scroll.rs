//! Camera-relative world scrolling
//!
//! The player is pinned at the threshold; everything else moves by the same delta.

use super::state::World;

/// Shift the world down if the player climbed above the scroll threshold.
///
/// Returns the applied delta. Must run once per tick, after physics and before the
/// hazard comparison.
pub fn apply(world: &mut World) -> Option<f32> {
    let threshold = world.viewport.scroll_threshold();
    if world.player.pos.y >= threshold {
        return None;
    }

    let delta = threshold - world.player.pos.y;
    world.player.pos.y = threshold;

    for obstacle in &mut world.obstacles {
        obstacle.pos.y += delta;
    }
    for decoration in &mut world.decorations {
        decoration.pos.y += delta;
    }
    for projectile in &mut world.projectiles {
        projectile.pos.y += delta;
    }
    world.hazard.level += delta;
    world.scroll_offset += delta;

    Some(delta)
}
