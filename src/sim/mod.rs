//! Simulation module
//!
//! All gameplay logic lives here. Everything is driven through [`World`]:
//! - One fixed physics step per tick; timers use the tick's wall-clock delta
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod collision;
pub mod hazard;
pub mod level;
pub mod physics;
pub mod projectile;
pub mod scroll;
pub mod state;
pub mod tick;
pub mod typing;

pub use state::{
    Decoration, GameEvent, HazardFront, LethalCause, Obstacle, Phase, Player, Projectile,
    ProjectileMode, Snapshot, World,
};
pub use tick::{handle_key, restart, start, tick, toggle_pause};
pub use typing::{TypeOutcome, resolve_target};
