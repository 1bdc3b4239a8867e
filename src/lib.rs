//! Type Jumper - a typing-gated vertical platformer
//!
//! Core modules:
//! - `sim`: Simulation (physics, scrolling, level generation, typing, hazard, projectiles)
//! - `tuning`: Data-driven game balance
//! - `words`: Word source filtering
//! - `input`: Key events and held-direction intent
//! - `platform`: Browser host bindings

pub mod error;
pub mod input;
pub mod platform;
pub mod sim;
pub mod tuning;
pub mod words;

pub use error::GameError;
pub use input::{InputIntent, KeyEvent};
pub use tuning::{Tuning, Viewport};
pub use words::WordList;

/// Default gameplay constants.
///
/// Distances are in world units (pixels at 1:1 zoom), velocities in units per tick,
/// durations in milliseconds.
pub mod consts {
    /// Per-tick downward acceleration on the player
    pub const GRAVITY: f32 = 0.5;
    /// Horizontal speed while a direction is held
    pub const WALK_SPEED: f32 = 5.0;
    /// Horizontal velocity multiplier per tick with no direction held
    pub const WALK_DECAY: f32 = 0.9;
    /// Horizontal velocity below this snaps to zero
    pub const WALK_EPSILON: f32 = 0.1;

    /// Player box
    pub const PLAYER_WIDTH: f32 = 20.0;
    pub const PLAYER_HEIGHT: f32 = 40.0;

    /// First jump upward impulse (applied as negative vy)
    pub const JUMP_IMPULSE: f32 = 13.0;
    /// Second jump strength relative to the first
    pub const DOUBLE_JUMP_FACTOR: f32 = 0.75;
    pub const MAX_JUMPS: u8 = 2;
    /// Extra depth below a surface top that still counts as a landing
    pub const LANDING_TOLERANCE: f32 = 5.0;

    /// Height of the ground band at the bottom of the first screen
    pub const GRASS_HEIGHT: f32 = 100.0;

    /// Obstacle geometry
    pub const OBSTACLE_HEIGHT: f32 = 20.0;
    pub const OBSTACLE_CHAR_WIDTH: f32 = 10.0;
    /// Horizontal drift of inactive obstacles
    pub const PATROL_SPEED: f32 = 1.5;

    /// Level generation
    pub const PLATFORM_SPACING: f32 = 150.0;
    pub const GENERATE_HEIGHT_OFFSET: f32 = 80.0;
    pub const GENERATE_MARGIN: f32 = 20.0;
    pub const GENERATE_ATTEMPTS: u32 = 10;
    pub const SEED_STEP_MIN: f32 = 40.0;
    pub const SEED_STEP_MAX: f32 = 100.0;
    pub const INITIAL_OBSTACLES: usize = 1000;
    pub const DECORATION_COUNT: usize = 20;

    /// Word source filter (inclusive, in characters)
    pub const WORD_MIN_LEN: usize = 3;
    pub const WORD_MAX_LEN: usize = 10;

    /// Hazard front
    pub const HAZARD_GRACE_MS: f64 = 10_000.0;
    pub const HAZARD_BASE_SPEED: f32 = 0.05;
    pub const HAZARD_ACCELERATION: f32 = 0.000_01;
    pub const HAZARD_MAX_SPEED: f32 = 1.0;
    pub const HAZARD_TOLERANCE: f32 = 1.0;

    /// Lifecycle timers
    pub const FREEZE_DELAY_MS: f64 = 1000.0;
    pub const FADE_DURATION_MS: f64 = 2000.0;

    /// Projectiles
    pub const PROJECTILE_RADIUS: f32 = 12.0;
    pub const PROJECTILE_SPEED: f32 = 3.0;
    pub const PROJECTILE_GRAVITY: f32 = 0.5;
    /// Completed words per projectile in the first round, then in later rounds
    pub const SPAWN_WORDS_FIRST_ROUND: u32 = 5;
    pub const SPAWN_WORDS: u32 = 4;

    /// Nominal host frame interval, used by the native demo loop
    pub const FRAME_MS: f64 = 1000.0 / 60.0;
}
