//! Type Jumper native entry point
//!
//! The browser build is driven from JavaScript through `platform::web`. Natively
//! this runs a headless round with a simple autopilot and logs what happens.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Type Jumper (native, headless) starting...");

    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(7);
    demo::run(seed);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is platform::web::init, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
mod demo {
    use type_jumper::consts::FRAME_MS;
    use type_jumper::sim::{self, GameEvent, Phase, World, resolve_target};
    use type_jumper::{KeyEvent, Tuning, Viewport};

    const WORDS: &str = "cat\ndog\nfish\nlantern\nhorizon\nmaple\nriver\nember\nquartz\nsummit\n";
    /// Simulated time cap
    const MAX_TICKS: u64 = 60 * 90;
    /// Ticks between autopilot keystrokes
    const TYPE_INTERVAL: u64 = 6;

    pub fn run(seed: u64) {
        let mut world = World::new(seed, Tuning::default(), Viewport::new(640.0, 960.0));
        world.load_words(WORDS);
        if let Err(err) = sim::start(&mut world) {
            log::error!("Could not start: {}", err);
            return;
        }

        let mut ticks = 0;
        while world.phase != Phase::Over && ticks < MAX_TICKS {
            if ticks % TYPE_INTERVAL == 0 {
                autopilot(&mut world);
            }
            sim::tick(&mut world, FRAME_MS);
            report(&mut world);
            ticks += 1;
        }

        log::info!(
            "Demo finished after {} ticks: phase {}, score {}, climbed {:.0}",
            ticks,
            world.phase.name(),
            world.score,
            world.scroll_offset
        );
    }

    /// Type toward the nearest obstacle above, then walk under it and jump
    fn autopilot(world: &mut World) {
        let player_y = world.player.pos.y;
        let next_letter = resolve_target(&world.obstacles, player_y, world.typing_target)
            .and_then(|id| world.obstacle(id))
            .and_then(|o| o.expected_char());
        if let Some(letter) = next_letter {
            press(world, KeyEvent::Letter(letter));
        }

        // Climb onto the closest active obstacle above
        let step = world
            .obstacles
            .iter()
            .filter(|o| o.active && o.pos.y < player_y)
            .max_by(|a, b| a.pos.y.total_cmp(&b.pos.y))
            .map(|o| o.pos.x + o.size.x / 2.0);

        let player_mid = world.player.pos.x + world.player.size.x / 2.0;
        press(world, KeyEvent::MoveLeftEnd);
        press(world, KeyEvent::MoveRightEnd);
        if let Some(goal) = step {
            if goal < player_mid - 8.0 {
                press(world, KeyEvent::MoveLeftStart);
            } else if goal > player_mid + 8.0 {
                press(world, KeyEvent::MoveRightStart);
            } else if world.player.grounded || world.player.vel.y > 0.0 {
                press(world, KeyEvent::Jump);
            }
        }
    }

    fn press(world: &mut World, key: KeyEvent) {
        if let Err(err) = sim::handle_key(world, key) {
            log::warn!("{}", err);
        }
    }

    fn report(world: &mut World) {
        for event in world.take_events() {
            match event {
                GameEvent::WordCompleted { letters, .. } => {
                    log::info!("+{} (score {})", letters, world.score)
                }
                GameEvent::ProjectileSpawned { projectile_id } => {
                    log::info!("Projectile {} incoming", projectile_id)
                }
                GameEvent::Bounce { .. } => log::info!("Stomped a projectile"),
                GameEvent::LethalContact { cause } => log::info!("Hit by {:?}", cause),
                GameEvent::Jump { .. } | GameEvent::PhaseChanged { .. } => {}
            }
        }
    }
}
