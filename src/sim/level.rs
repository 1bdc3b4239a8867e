//! Procedural obstacle placement
//!
//! Obstacles are placed a fixed offset above a base height at a random x. A
//! candidate is rejected when it sits within the spacing band of an existing
//! obstacle and overlaps it horizontally.

use glam::Vec2;
use rand::Rng;

use super::collision::overlaps_x;
use super::state::{Decoration, Obstacle, World};

/// Try to place one obstacle above `base_y`.
///
/// Returns the new obstacle's ID, or `None` when every attempt was rejected (or
/// there are no words). Exhaustion is not an error; callers retry on a later tick.
pub fn generate(world: &mut World, base_y: f32) -> Option<u32> {
    let y = base_y - world.tuning.generate_height_offset;
    let margin = world.tuning.generate_margin;
    let spacing = world.tuning.platform_spacing;

    for _ in 0..world.tuning.generate_attempts {
        let word = world.words.choose(&mut world.rng)?.to_string();
        let width = word.chars().count() as f32 * world.tuning.obstacle_char_width;
        let span = (world.viewport.width - width - margin * 2.0).max(0.0);
        let x = margin + world.rng.random::<f32>() * span;
        let patrol_dir = if world.rng.random_bool(0.5) { 1.0 } else { -1.0 };

        if placement_clear(&world.obstacles, x, y, width, spacing) {
            let id = world.next_entity_id();
            let obstacle = Obstacle::new(id, Vec2::new(x, y), &word, &world.tuning, patrol_dir);
            world.obstacles.push(obstacle);
            return Some(id);
        }
    }

    log::debug!(
        "No room for an obstacle at y={:.1} after {} attempts",
        y,
        world.tuning.generate_attempts
    );
    None
}

/// No existing obstacle within `spacing` vertically may overlap `[x, x + width)`
pub fn placement_clear(obstacles: &[Obstacle], x: f32, y: f32, width: f32, spacing: f32) -> bool {
    !obstacles
        .iter()
        .any(|o| (o.pos.y - y).abs() < spacing && overlaps_x(x, width, o.pos.x, o.size.x))
}

/// Seed a fresh round: a long climbing chain of obstacles plus ground scenery
pub fn seed_level(world: &mut World) {
    let step_min = world.tuning.seed_step_min;
    let step_range = (world.tuning.seed_step_max - step_min).max(0.0);
    let mut base_y = world.viewport.height - world.tuning.grass_height;

    for _ in 0..world.tuning.initial_obstacles {
        generate(world, base_y);
        let last_y = world
            .obstacles
            .last()
            .map_or(base_y - world.tuning.generate_height_offset, |o| o.pos.y);
        base_y = last_y - (step_min + world.rng.random::<f32>() * step_range);
    }

    seed_decorations(world);
}

/// Scatter decorations along the ground line
pub fn seed_decorations(world: &mut World) {
    let ground_y = world.ground_y();
    world.decorations.clear();
    for _ in 0..world.tuning.decoration_count {
        let size = 20.0 + world.rng.random::<f32>() * 20.0;
        let x = world.rng.random::<f32>() * world.viewport.width;
        let front = world.rng.random_bool(0.5);
        world.decorations.push(Decoration {
            pos: Vec2::new(x, ground_y),
            size,
            front,
        });
    }
}

/// Per-tick level upkeep: patrol, prune far-below obstacles, spawn ahead
pub fn step(world: &mut World) {
    patrol(world);
    prune_below(world);
    spawn_ahead(world);
}

/// Drift inactive obstacles, turning around at the viewport edges
pub fn patrol(world: &mut World) {
    let width = world.viewport.width;
    for obstacle in world.obstacles.iter_mut().filter(|o| !o.active) {
        obstacle.pos.x += obstacle.patrol_speed * obstacle.patrol_dir;
        if obstacle.pos.x <= 0.0 {
            obstacle.patrol_dir = 1.0;
        }
        if obstacle.pos.x + obstacle.size.x >= width {
            obstacle.patrol_dir = -1.0;
        }
    }
}

/// Drop obstacles more than two viewports below the player
pub fn prune_below(world: &mut World) {
    let limit = world.player.pos.y + world.viewport.height * 2.0;
    world.obstacles.retain(|o| o.pos.y < limit);
}

/// Generate a new obstacle above the player once every obstacle has fallen a viewport below
pub fn spawn_ahead(world: &mut World) -> Option<u32> {
    let topmost = world
        .obstacles
        .iter()
        .map(|o| o.pos.y)
        .fold(f32::INFINITY, f32::min);

    if topmost > world.player.pos.y + world.viewport.height {
        let base_y = world.player.pos.y - world.tuning.platform_spacing;
        return generate(world, base_y);
    }
    None
}
