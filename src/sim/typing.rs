//! Per-obstacle typing state machine
//!
//! An obstacle is inactive-empty, inactive-partial, or active. Correct letters
//! extend `typed_progress`; a wrong letter is only flagged; completing the word
//! activates the obstacle and clears its progress in the same event.

use super::state::{GameEvent, Obstacle, World};

/// Result of feeding one key to the matcher
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeOutcome {
    /// Not an ASCII letter
    Ignored,
    /// No inactive obstacle above the player
    NoTarget,
    Advanced,
    Mismatch,
    /// Word finished; obstacle is now active
    Completed { obstacle_id: u32, letters: u32 },
}

/// Pick the obstacle that should receive letters.
///
/// Keeps `current` while it still exists, is inactive and is not below the player.
/// Otherwise returns the nearest inactive obstacle above the player.
pub fn resolve_target(obstacles: &[Obstacle], player_y: f32, current: Option<u32>) -> Option<u32> {
    let still_valid = current
        .and_then(|id| obstacles.iter().find(|o| o.id == id))
        .filter(|o| !o.active && o.pos.y <= player_y);
    if let Some(target) = still_valid {
        return Some(target.id);
    }

    obstacles
        .iter()
        .filter(|o| !o.active && o.pos.y < player_y)
        .max_by(|a, b| a.pos.y.total_cmp(&b.pos.y))
        .map(|o| o.id)
}

/// Feed one typed character
pub fn type_letter(world: &mut World, typed: char) -> TypeOutcome {
    if !typed.is_ascii_alphabetic() {
        return TypeOutcome::Ignored;
    }
    let typed = typed.to_ascii_lowercase();

    world.typing_target = resolve_target(&world.obstacles, world.player.pos.y, world.typing_target);
    let Some(target_id) = world.typing_target else {
        return TypeOutcome::NoTarget;
    };
    let Some(obstacle) = world.obstacle_mut(target_id) else {
        return TypeOutcome::NoTarget;
    };

    let outcome = match obstacle.expected_char() {
        Some(expected) if expected.eq_ignore_ascii_case(&typed) => {
            obstacle.typed_progress.push(typed);
            obstacle.incorrect_char = None;
            if obstacle.typed_progress.chars().count() == obstacle.letters() {
                obstacle.active = true;
                obstacle.typed_progress.clear();
                TypeOutcome::Completed {
                    obstacle_id: obstacle.id,
                    letters: obstacle.letters() as u32,
                }
            } else {
                TypeOutcome::Advanced
            }
        }
        _ => {
            if !obstacle.typed_progress.is_empty() {
                obstacle.incorrect_char = Some(typed);
            }
            TypeOutcome::Mismatch
        }
    };
    debug_assert!(obstacle.active || obstacle.progress_is_prefix());

    if let TypeOutcome::Completed { obstacle_id, letters } = outcome {
        world.score += letters;
        world.words_since_spawn += 1;
        log::debug!("Word completed on obstacle {} (+{}, score {})", obstacle_id, letters, world.score);
        world.push_event(GameEvent::WordCompleted { obstacle_id, letters });
    }
    outcome
}

/// Remove the last typed letter on the current target. Returns whether anything changed.
pub fn backspace(world: &mut World) -> bool {
    let Some(target_id) = world.typing_target else {
        return false;
    };
    let Some(obstacle) = world.obstacle_mut(target_id) else {
        return false;
    };

    let had_flag = obstacle.incorrect_char.take().is_some();
    let popped = obstacle.typed_progress.pop().is_some();
    had_flag || popped
}
