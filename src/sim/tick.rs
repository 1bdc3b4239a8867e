//! Per-tick simulation and lifecycle
//!
//! One call to [`tick`] advances every subsystem in a fixed order:
//! physics, scroll, hazard, level upkeep, projectiles, then the lethal-contact
//! check. Key events go through [`handle_key`] between ticks.

use super::state::{GameEvent, LethalCause, Phase, World};
use super::{hazard, level, physics, projectile, scroll, typing};
use crate::error::GameError;
use crate::input::KeyEvent;

/// Advance the world by one tick; `dt_ms` is the wall-clock time since the last tick
pub fn tick(world: &mut World, dt_ms: f64) {
    match world.phase {
        Phase::Idle | Phase::Over => {}
        Phase::Running => {
            if !world.paused {
                run_frame(world, dt_ms);
            }
        }
        Phase::Frozen { remaining_ms } => {
            let remaining_ms = remaining_ms - dt_ms;
            if remaining_ms <= 0.0 {
                // Time past the delay counts toward the fade
                world.set_phase(Phase::Fading { opacity: 0.0 });
                advance_fade(world, 0.0, -remaining_ms);
            } else {
                world.phase = Phase::Frozen { remaining_ms };
            }
        }
        Phase::Fading { opacity } => advance_fade(world, opacity, dt_ms),
    }
}

fn advance_fade(world: &mut World, opacity: f32, dt_ms: f64) {
    let opacity = opacity + (dt_ms / world.tuning.fade_duration_ms) as f32;
    if opacity >= 1.0 {
        world.set_phase(Phase::Over);
    } else {
        world.phase = Phase::Fading { opacity };
    }
}

fn run_frame(world: &mut World, dt_ms: f64) {
    physics::step(world);
    scroll::apply(world);
    let hazard_hit = hazard::advance(world, dt_ms).then_some(LethalCause::HazardFront);
    level::step(world);
    let projectile_hit = projectile::step(world);
    world.time_ticks += 1;

    if let Some(cause) = hazard_hit.or(projectile_hit) {
        freeze(world, cause);
    }
}

/// Stop the round after a lethal contact; the fade starts after the freeze delay
fn freeze(world: &mut World, cause: LethalCause) {
    log::info!("Lethal contact ({:?}) after {} ticks", cause, world.time_ticks);
    world.push_event(GameEvent::LethalContact { cause });
    world.set_phase(Phase::Frozen {
        remaining_ms: world.tuning.freeze_delay_ms,
    });
}

/// Dispatch one key event.
///
/// Only a start request can fail (no usable words). Events that make no sense in
/// the current phase are ignored.
pub fn handle_key(world: &mut World, event: KeyEvent) -> Result<(), GameError> {
    if world.intent.apply(event) {
        return Ok(());
    }

    match event {
        KeyEvent::Start => start(world)?,
        KeyEvent::Restart => restart(world),
        KeyEvent::PauseToggle => toggle_pause(world),
        KeyEvent::Jump if accepts_play_input(world) => physics::request_jump(world),
        KeyEvent::Backspace if accepts_play_input(world) => {
            typing::backspace(world);
        }
        KeyEvent::Letter(c) if accepts_play_input(world) => {
            typing::type_letter(world, c);
        }
        _ => {}
    }
    Ok(())
}

fn accepts_play_input(world: &World) -> bool {
    world.phase == Phase::Running && !world.paused
}

/// Begin a round from `idle`. No-op in any other phase.
pub fn start(world: &mut World) -> Result<(), GameError> {
    if world.phase != Phase::Idle {
        return Ok(());
    }
    let (min, max) = (world.tuning.word_min_len, world.tuning.word_max_len);
    if let Err(err) = world.words.require_non_empty(min, max) {
        log::warn!("Refusing to start: {}", err);
        return Err(err);
    }

    world.reset_round();
    world.round += 1;
    level::seed_level(world);
    log::info!(
        "Round {} started (seed {}, {} obstacles, {} words)",
        world.round,
        world.seed,
        world.obstacles.len(),
        world.words.len()
    );
    world.set_phase(Phase::Running);
    Ok(())
}

/// Clear the finished round and return to `idle`. No-op unless the round is over.
pub fn restart(world: &mut World) {
    if world.phase != Phase::Over {
        return;
    }
    world.reset_round();
    world.set_phase(Phase::Idle);
}

/// Suspend or resume ticking inside `running`. No-op in other phases.
pub fn toggle_pause(world: &mut World) {
    if world.phase == Phase::Running {
        world.paused = !world.paused;
        log::info!("{}", if world.paused { "Paused" } else { "Resumed" });
    }
}
