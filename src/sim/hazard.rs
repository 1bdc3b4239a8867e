//! Rising hazard front
//!
//! Idle for a grace period, then climbs at a speed that grows linearly with
//! elapsed time up to a cap. Timing uses wall-clock milliseconds; the climb
//! itself is applied once per tick.

use super::state::{HazardFront, Player, World};
use crate::tuning::Tuning;

/// Climb speed (units per tick) after `elapsed_ms` of running time
pub fn climb_speed(tuning: &Tuning, elapsed_ms: f64) -> f32 {
    if elapsed_ms <= tuning.hazard_grace_ms {
        return 0.0;
    }
    let since_grace = (elapsed_ms - tuning.hazard_grace_ms) as f32;
    (tuning.hazard_base_speed + since_grace * tuning.hazard_acceleration).min(tuning.hazard_max_speed)
}

/// Advance the hazard clock by `dt_ms`. Returns true when the front has reached the player.
///
/// Runs after the scroll transform so the front's position reflects this tick's shift.
pub fn advance(world: &mut World, dt_ms: f64) -> bool {
    let hazard = &mut world.hazard;
    hazard.elapsed_ms += dt_ms;

    if hazard.elapsed_ms > world.tuning.hazard_grace_ms {
        hazard.grace_active = false;
        hazard.countdown = 0;
        hazard.climb_speed = climb_speed(&world.tuning, hazard.elapsed_ms);
        hazard.level -= hazard.climb_speed;
    } else {
        hazard.climb_speed = 0.0;
        hazard.countdown = ((world.tuning.hazard_grace_ms - hazard.elapsed_ms) / 1000.0).ceil() as u32;
    }

    if hazard.level > world.viewport.height {
        hazard.level = world.viewport.height - 1.0;
        let limit = world.viewport.height * 2.0;
        world.obstacles.retain(|o| o.pos.y < limit);
    }

    let ground_y = world.ground_y();
    cover_ground(&mut world.hazard, ground_y);

    reaches(&world.hazard, &world.player, world.tuning.hazard_tolerance)
}

/// Clear `ground_visible` once the front is at or above the ground. Never sets it back.
pub fn cover_ground(hazard: &mut HazardFront, ground_y: f32) {
    if hazard.ground_visible && hazard.level <= ground_y {
        hazard.ground_visible = false;
        log::debug!("Hazard covered the ground at y={:.1}", ground_y);
    }
}

/// Whether the player's lower edge has met the front
#[inline]
pub fn reaches(hazard: &HazardFront, player: &Player, tolerance: f32) -> bool {
    player.foot() >= hazard.level - tolerance
}
