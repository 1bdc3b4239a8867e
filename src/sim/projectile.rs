//! Bouncing projectiles
//!
//! Spawned from a viewport corner after enough completed words. A bouncing
//! projectile reflects off the viewport walls; stomping it from above turns it
//! into an inert falling body and launches the player. Any other contact is lethal.

use glam::Vec2;
use rand::Rng;

use super::collision::{bounce_in_bounds, circle_rect_overlap};
use super::state::{GameEvent, LethalCause, Player, Projectile, ProjectileMode, World};

/// Spawn a projectile once the completed-word counter reaches this round's threshold
pub fn maybe_spawn(world: &mut World) -> Option<u32> {
    let threshold = world.tuning.spawn_threshold(world.round);
    if threshold == 0 || world.words_since_spawn < threshold {
        return None;
    }
    world.words_since_spawn = 0;
    let corner = world.rng.random_range(0..4);
    Some(spawn_at_corner(world, corner))
}

/// Spawn at corner 0..4 (top-left, top-right, bottom-left, bottom-right), heading diagonally inward
pub fn spawn_at_corner(world: &mut World, corner: u8) -> u32 {
    let r = world.tuning.projectile_radius;
    let (w, h) = (world.viewport.width, world.viewport.height);
    let axis_speed = world.tuning.projectile_speed / std::f32::consts::SQRT_2;

    let (pos, dir) = match corner % 4 {
        0 => (Vec2::new(r, r), Vec2::new(1.0, 1.0)),
        1 => (Vec2::new(w - r, r), Vec2::new(-1.0, 1.0)),
        2 => (Vec2::new(r, h - r), Vec2::new(1.0, -1.0)),
        _ => (Vec2::new(w - r, h - r), Vec2::new(-1.0, -1.0)),
    };

    let id = world.next_entity_id();
    world.projectiles.push(Projectile {
        id,
        pos,
        vel: dir * axis_speed,
        radius: r,
        mode: ProjectileMode::Bouncing,
    });
    log::debug!("Projectile {} spawned at corner {}", id, corner % 4);
    world.push_event(GameEvent::ProjectileSpawned { projectile_id: id });
    id
}

/// Move every projectile one tick and drop fallen ones
pub fn advance(world: &mut World) {
    let max = Vec2::new(world.viewport.width, world.viewport.height);
    let gravity = world.tuning.projectile_gravity;

    for projectile in &mut world.projectiles {
        match projectile.mode {
            ProjectileMode::Bouncing => {
                projectile.pos += projectile.vel;
                let hits = bounce_in_bounds(
                    &mut projectile.pos,
                    &mut projectile.vel,
                    projectile.radius,
                    Vec2::ZERO,
                    max,
                );
                if hits.any() {
                    log::trace!("Projectile {} bounced off a wall ({:?})", projectile.id, hits);
                }
            }
            ProjectileMode::Falling => {
                projectile.vel.y += gravity;
                projectile.pos += projectile.vel;
            }
        }
    }

    world
        .projectiles
        .retain(|p| !(p.mode == ProjectileMode::Falling && p.pos.y - p.radius > max.y));
}

/// How a player touching a projectile is resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Contact {
    None,
    /// Player fell onto it from above
    Stomp,
    Lethal,
}

/// Classify contact between the player and a projectile
pub fn classify_contact(player: &Player, projectile: &Projectile) -> Contact {
    if projectile.mode != ProjectileMode::Bouncing
        || !circle_rect_overlap(projectile.pos, projectile.radius, player.pos, player.size)
    {
        return Contact::None;
    }
    if player.vel.y >= 0.0 && player.foot() <= projectile.pos.y {
        Contact::Stomp
    } else {
        Contact::Lethal
    }
}

/// Resolve player contacts. Returns `Some` on a lethal hit.
pub fn resolve_contacts(world: &mut World) -> Option<LethalCause> {
    let mut lethal = None;
    let mut bounced = Vec::new();

    for projectile in &mut world.projectiles {
        match classify_contact(&world.player, projectile) {
            Contact::None => {}
            Contact::Stomp => {
                world.player.vel.y = -world.tuning.jump_impulse;
                world.player.grounded = false;
                world.player.jump_count = 0;
                projectile.mode = ProjectileMode::Falling;
                projectile.vel = Vec2::ZERO;
                bounced.push(projectile.id);
            }
            Contact::Lethal => lethal = Some(LethalCause::Projectile),
        }
    }

    for projectile_id in bounced {
        log::debug!("Bounced off projectile {}", projectile_id);
        world.push_event(GameEvent::Bounce { projectile_id });
    }
    lethal
}

/// Per-tick projectile update: spawn, move, collide
pub fn step(world: &mut World) -> Option<LethalCause> {
    maybe_spawn(world);
    advance(world);
    resolve_contacts(world)
}
