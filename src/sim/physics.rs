//! Player integration, landings and jumps

use super::collision::lands_on;
use super::state::{GameEvent, Obstacle, Player, World};
use crate::input::InputIntent;
use crate::tuning::{Tuning, Viewport};

/// Advance the player one fixed step: intent, gravity, integration, landings
pub fn step(world: &mut World) {
    integrate(&mut world.player, &world.intent, &world.tuning, &world.viewport);

    let ground = world.hazard.ground_visible.then(|| world.ground_y());
    resolve_landings(
        &mut world.player,
        &world.obstacles,
        ground,
        world.hazard.level,
        &world.tuning,
    );
}

/// Apply intent and gravity, then move and clamp to the viewport's width
pub fn integrate(player: &mut Player, intent: &InputIntent, tuning: &Tuning, viewport: &Viewport) {
    let dir = intent.direction();
    if dir != 0.0 {
        player.vel.x = dir * tuning.walk_speed;
    } else {
        player.vel.x *= tuning.walk_decay;
        if player.vel.x.abs() < tuning.walk_epsilon {
            player.vel.x = 0.0;
        }
    }

    player.vel.y += tuning.gravity;
    player.pos += player.vel;

    let max_x = (viewport.width - player.size.x).max(0.0);
    player.pos.x = player.pos.x.clamp(0.0, max_x);
}

/// Stop the fall on any active obstacle, or on the ground while it is visible.
///
/// `ground` is the ground surface y, `None` once the hazard has covered it. The
/// ground only catches a player whose foot is still above `hazard_level`.
pub fn resolve_landings(
    player: &mut Player,
    obstacles: &[Obstacle],
    ground: Option<f32>,
    hazard_level: f32,
    tuning: &Tuning,
) {
    player.grounded = false;

    for obstacle in obstacles.iter().filter(|o| o.active) {
        if lands_on(
            player.pos,
            player.size,
            player.vel.y,
            obstacle.pos,
            obstacle.size,
            tuning.landing_tolerance,
        ) {
            land(player, obstacle.pos.y);
        }
    }

    if let Some(ground_y) = ground {
        let foot = player.foot();
        if foot >= ground_y && foot < hazard_level {
            land(player, ground_y);
        }
    }
}

fn land(player: &mut Player, surface_y: f32) {
    player.pos.y = surface_y - player.size.y;
    player.vel.y = 0.0;
    player.grounded = true;
    player.jump_count = 0;
}

/// Apply a jump impulse if any jumps remain.
///
/// Returns `Some(double)` when a jump happened.
pub fn jump(player: &mut Player, tuning: &Tuning) -> Option<bool> {
    if player.jump_count >= tuning.max_jumps {
        return None;
    }
    let double = player.jump_count > 0;
    player.vel.y = if double {
        -tuning.double_jump_impulse()
    } else {
        -tuning.jump_impulse
    };
    player.jump_count += 1;
    Some(double)
}

/// Jump request from the key handler
pub fn request_jump(world: &mut World) {
    if let Some(double) = jump(&mut world.player, &world.tuning) {
        world.push_event(GameEvent::Jump { double });
    }
}
