//! Game balance and viewport geometry
//!
//! Every field defaults from [`crate::consts`]; a JSON blob only needs the keys it
//! overrides.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::GameError;

/// Host viewport in world units
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Player altitude above which the world scrolls instead
    #[inline]
    pub fn scroll_threshold(&self) -> f32 {
        self.height / 4.0
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(640.0, 960.0)
    }
}

/// Tunable gameplay parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Player ===
    pub gravity: f32,
    pub walk_speed: f32,
    pub walk_decay: f32,
    pub walk_epsilon: f32,
    pub player_width: f32,
    pub player_height: f32,
    pub jump_impulse: f32,
    pub double_jump_factor: f32,
    pub max_jumps: u8,
    pub landing_tolerance: f32,

    // === World ===
    pub grass_height: f32,
    pub obstacle_height: f32,
    pub obstacle_char_width: f32,
    pub patrol_speed: f32,

    // === Level generation ===
    pub platform_spacing: f32,
    pub generate_height_offset: f32,
    pub generate_margin: f32,
    pub generate_attempts: u32,
    pub seed_step_min: f32,
    pub seed_step_max: f32,
    pub initial_obstacles: usize,
    pub decoration_count: usize,
    pub word_min_len: usize,
    pub word_max_len: usize,

    // === Hazard ===
    pub hazard_grace_ms: f64,
    pub hazard_base_speed: f32,
    pub hazard_acceleration: f32,
    pub hazard_max_speed: f32,
    pub hazard_tolerance: f32,

    // === Lifecycle ===
    pub freeze_delay_ms: f64,
    pub fade_duration_ms: f64,

    // === Projectiles ===
    pub projectile_radius: f32,
    pub projectile_speed: f32,
    pub projectile_gravity: f32,
    pub spawn_words_first_round: u32,
    pub spawn_words: u32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            walk_speed: WALK_SPEED,
            walk_decay: WALK_DECAY,
            walk_epsilon: WALK_EPSILON,
            player_width: PLAYER_WIDTH,
            player_height: PLAYER_HEIGHT,
            jump_impulse: JUMP_IMPULSE,
            double_jump_factor: DOUBLE_JUMP_FACTOR,
            max_jumps: MAX_JUMPS,
            landing_tolerance: LANDING_TOLERANCE,

            grass_height: GRASS_HEIGHT,
            obstacle_height: OBSTACLE_HEIGHT,
            obstacle_char_width: OBSTACLE_CHAR_WIDTH,
            patrol_speed: PATROL_SPEED,

            platform_spacing: PLATFORM_SPACING,
            generate_height_offset: GENERATE_HEIGHT_OFFSET,
            generate_margin: GENERATE_MARGIN,
            generate_attempts: GENERATE_ATTEMPTS,
            seed_step_min: SEED_STEP_MIN,
            seed_step_max: SEED_STEP_MAX,
            initial_obstacles: INITIAL_OBSTACLES,
            decoration_count: DECORATION_COUNT,
            word_min_len: WORD_MIN_LEN,
            word_max_len: WORD_MAX_LEN,

            hazard_grace_ms: HAZARD_GRACE_MS,
            hazard_base_speed: HAZARD_BASE_SPEED,
            hazard_acceleration: HAZARD_ACCELERATION,
            hazard_max_speed: HAZARD_MAX_SPEED,
            hazard_tolerance: HAZARD_TOLERANCE,

            freeze_delay_ms: FREEZE_DELAY_MS,
            fade_duration_ms: FADE_DURATION_MS,

            projectile_radius: PROJECTILE_RADIUS,
            projectile_speed: PROJECTILE_SPEED,
            projectile_gravity: PROJECTILE_GRAVITY,
            spawn_words_first_round: SPAWN_WORDS_FIRST_ROUND,
            spawn_words: SPAWN_WORDS,
        }
    }
}

impl Tuning {
    /// Parse tuning overrides; missing keys keep their defaults
    pub fn from_json(json: &str) -> Result<Self, GameError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, GameError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Second jump impulse
    #[inline]
    pub fn double_jump_impulse(&self) -> f32 {
        self.jump_impulse * self.double_jump_factor
    }

    /// Completed words needed for a projectile in the given round (1-based)
    pub fn spawn_threshold(&self, round: u32) -> u32 {
        if round <= 1 {
            self.spawn_words_first_round
        } else {
            self.spawn_words
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_override_keeps_defaults() {
        let tuning = Tuning::from_json(r#"{ "gravity": 0.8, "max_jumps": 3 }"#).unwrap();
        assert_eq!(tuning.gravity, 0.8);
        assert_eq!(tuning.max_jumps, 3);
        assert_eq!(tuning.walk_speed, WALK_SPEED);
        assert_eq!(tuning.hazard_grace_ms, HAZARD_GRACE_MS);
    }

    #[test]
    fn test_malformed_json_is_error() {
        let err = Tuning::from_json("{ gravity: }").unwrap_err();
        assert!(matches!(err, GameError::Tuning(_)));
    }

    #[test]
    fn test_json_lists_every_section() {
        let json = Tuning::default().to_json().unwrap();
        for key in ["\"gravity\"", "\"platform_spacing\"", "\"hazard_grace_ms\"", "\"spawn_words\""] {
            assert!(json.contains(key), "missing {key}");
        }
    }

    #[test]
    fn test_spawn_threshold_by_round() {
        let tuning = Tuning::default();
        assert_eq!(tuning.spawn_threshold(1), 5);
        assert_eq!(tuning.spawn_threshold(2), 4);
        assert_eq!(tuning.spawn_threshold(9), 4);
    }

    #[test]
    fn test_double_jump_is_weaker() {
        let tuning = Tuning::default();
        assert!((tuning.double_jump_impulse() - 9.75).abs() < 1e-5);
    }

    #[test]
    fn test_scroll_threshold_tracks_height() {
        let mut viewport = Viewport::new(400.0, 800.0);
        assert_eq!(viewport.scroll_threshold(), 200.0);
        viewport.height = 1000.0;
        assert_eq!(viewport.scroll_threshold(), 250.0);
    }
}
