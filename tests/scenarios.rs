use glam::Vec2;
use type_jumper::consts::FRAME_MS;
use type_jumper::sim::{
    self, GameEvent, LethalCause, Obstacle, Phase, Projectile, ProjectileMode, World,
};
use type_jumper::{KeyEvent, Tuning, Viewport, WordList};

fn running_world() -> World {
    let tuning = Tuning {
        initial_obstacles: 80,
        ..Default::default()
    };
    let mut world = World::new(2024, tuning, Viewport::new(480.0, 900.0));
    world.set_words(WordList::from_words(["cat", "dog", "fish"], 3, 10));
    sim::handle_key(&mut world, KeyEvent::Start).unwrap();
    world.take_events();
    world
}

fn place(world: &mut World, x: f32, y: f32, word: &str, active: bool) -> u32 {
    let id = world.next_entity_id();
    let tuning = world.tuning.clone();
    let mut obstacle = Obstacle::new(id, Vec2::new(x, y), word, &tuning, 1.0);
    obstacle.active = active;
    world.obstacles.push(obstacle);
    id
}

fn type_word(world: &mut World, word: &str) {
    for c in word.chars() {
        sim::handle_key(world, KeyEvent::Letter(c)).unwrap();
    }
}

#[test]
fn test_typing_cat_activates_nearest_cat() {
    let mut world = running_world();
    tick_n(&mut world, 3);
    world.obstacles.clear();
    let dog = place(&mut world, 100.0, 300.0, "dog", false);
    let cat = place(&mut world, 200.0, 600.0, "cat", false);

    type_word(&mut world, "cat");

    let obstacle = world.obstacle(cat).unwrap();
    assert!(obstacle.active);
    assert!(obstacle.typed_progress.is_empty());
    assert!(!world.obstacle(dog).unwrap().active);
    assert_eq!(world.score, 3);
    assert!(
        world
            .take_events()
            .contains(&GameEvent::WordCompleted { obstacle_id: cat, letters: 3 })
    );
}

#[test]
fn test_typing_through_seeded_level() {
    let mut world = running_world();
    tick_n(&mut world, 3);
    let target = sim::resolve_target(&world.obstacles, world.player.pos.y, None).unwrap();
    let word = world.obstacle(target).unwrap().word.clone();

    type_word(&mut world, &word.to_uppercase());

    assert!(world.obstacle(target).unwrap().active);
    assert_eq!(world.score as usize, word.len());
}

#[test]
fn test_jump_then_double_jump_then_nothing() {
    let mut world = running_world();
    tick_n(&mut world, 3);
    assert!(world.player.grounded);

    sim::handle_key(&mut world, KeyEvent::Jump).unwrap();
    assert_eq!(world.player.jump_count, 1);
    assert_eq!(world.player.vel.y, -13.0);

    sim::handle_key(&mut world, KeyEvent::Jump).unwrap();
    assert_eq!(world.player.jump_count, 2);
    assert!((world.player.vel.y + 9.75).abs() < 1e-5);

    sim::handle_key(&mut world, KeyEvent::Jump).unwrap();
    assert_eq!(world.player.jump_count, 2);
    assert!((world.player.vel.y + 9.75).abs() < 1e-5);

    assert_eq!(
        world.take_events(),
        [GameEvent::Jump { double: false }, GameEvent::Jump { double: true }]
    );
}

#[test]
fn test_scroll_shifts_every_entity_by_same_delta() {
    let mut world = running_world();
    tick_n(&mut world, 3);
    let id = world.next_entity_id();
    world.projectiles.push(Projectile {
        id,
        pos: Vec2::new(240.0, 450.0),
        vel: Vec2::ZERO,
        radius: 12.0,
        mode: ProjectileMode::Bouncing,
    });

    let threshold = world.viewport.scroll_threshold();
    world.player.pos.y = threshold + 5.0;
    world.player.vel.y = -13.0;
    // Keep the front inside the viewport so the shift is not clamped away
    world.hazard.level = 600.0;

    let obstacles_before: Vec<(u32, f32)> = world.obstacles.iter().map(|o| (o.id, o.pos.y)).collect();
    let decorations_before: Vec<f32> = world.decorations.iter().map(|d| d.pos.y).collect();
    let projectile_before = world.projectiles[0].pos.y;
    let hazard_before = world.hazard.level;
    let offset_before = world.scroll_offset;

    sim::tick(&mut world, FRAME_MS);

    let delta = world.scroll_offset - offset_before;
    assert!((delta - 7.5).abs() < 1e-4);
    assert_eq!(world.player.pos.y, threshold);
    for (id, y) in obstacles_before {
        if let Some(obstacle) = world.obstacle(id) {
            assert!((obstacle.pos.y - (y + delta)).abs() < 1e-3);
        }
    }
    for (decoration, y) in world.decorations.iter().zip(decorations_before) {
        assert!((decoration.pos.y - (y + delta)).abs() < 1e-3);
    }
    assert!((world.projectiles[0].pos.y - (projectile_before + delta)).abs() < 1e-3);
    assert!((world.hazard.level - (hazard_before + delta)).abs() < 1e-3);
}

#[test]
fn test_hazard_reaching_player_freezes_then_fades() {
    let mut world = running_world();
    world.obstacles.clear();
    place(&mut world, 200.0, 500.0, "cat", true);
    world.player.pos = Vec2::new(210.0, 460.0);
    world.player.vel = Vec2::ZERO;
    world.hazard.elapsed_ms = 20_000.0;
    world.hazard.level = 501.0;
    world.hazard.ground_visible = false;

    sim::tick(&mut world, FRAME_MS);

    assert!(world.player.grounded, "standing on the obstacle");
    assert_eq!(world.phase, Phase::Frozen { remaining_ms: 1000.0 });
    let events = world.take_events();
    assert!(events.contains(&GameEvent::LethalContact { cause: LethalCause::HazardFront }));

    sim::tick(&mut world, 999.0);
    assert!(matches!(world.phase, Phase::Frozen { .. }));
    sim::tick(&mut world, 1.0);
    assert_eq!(world.phase, Phase::Fading { opacity: 0.0 });
}

#[test]
fn test_stomping_projectile_through_tick() {
    let mut world = running_world();
    world.obstacles.clear();
    let id = world.next_entity_id();
    world.projectiles.push(Projectile {
        id,
        pos: Vec2::new(110.0, 350.0),
        vel: Vec2::ZERO,
        radius: 12.0,
        mode: ProjectileMode::Bouncing,
    });
    world.player.pos = Vec2::new(100.0, 300.0);
    world.player.vel = Vec2::new(0.0, 2.0);

    sim::tick(&mut world, FRAME_MS);

    assert_eq!(world.phase, Phase::Running);
    assert_eq!(world.player.vel.y, -13.0);
    assert_eq!(world.player.jump_count, 0);
    let projectile = world.projectiles.iter().find(|p| p.id == id).unwrap();
    assert_eq!(projectile.mode, ProjectileMode::Falling);
    assert_eq!(projectile.vel, Vec2::ZERO);
    assert!(world.take_events().contains(&GameEvent::Bounce { projectile_id: id }));
}

#[test]
fn test_projectile_side_hit_ends_round() {
    let mut world = running_world();
    world.obstacles.clear();
    let id = world.next_entity_id();
    world.projectiles.push(Projectile {
        id,
        pos: Vec2::new(130.0, 330.0),
        vel: Vec2::ZERO,
        radius: 12.0,
        mode: ProjectileMode::Bouncing,
    });
    world.player.pos = Vec2::new(100.0, 300.0);
    world.player.vel = Vec2::ZERO;

    sim::tick(&mut world, FRAME_MS);

    assert!(matches!(world.phase, Phase::Frozen { .. }));
    assert!(world.take_events().contains(&GameEvent::LethalContact { cause: LethalCause::Projectile }));
}

#[test]
fn test_fifth_word_spawns_projectile() {
    let mut world = running_world();
    tick_n(&mut world, 3);
    world.obstacles.clear();
    let words = ["cat", "dog", "fish", "cat", "dog"];
    for (i, word) in words.iter().enumerate() {
        place(&mut world, 40.0 + i as f32 * 70.0, 700.0 - i as f32 * 100.0, word, false);
    }
    for word in words {
        type_word(&mut world, word);
    }
    assert_eq!(world.words_since_spawn, 5);
    assert!(world.projectiles.is_empty());

    sim::tick(&mut world, FRAME_MS);
    assert_eq!(world.projectiles.len(), 1);
    assert_eq!(world.words_since_spawn, 0);
}

#[test]
fn test_restart_from_over_clears_world() {
    let mut world = running_world();
    world.score = 42;
    let id = world.next_entity_id();
    world.projectiles.push(Projectile {
        id,
        pos: Vec2::new(100.0, 100.0),
        vel: Vec2::ONE,
        radius: 12.0,
        mode: ProjectileMode::Bouncing,
    });

    // Drive the round to its end through the hazard
    world.hazard.elapsed_ms = 20_000.0;
    world.hazard.level = world.player.foot();
    sim::tick(&mut world, FRAME_MS);
    sim::tick(&mut world, 1000.0);
    sim::tick(&mut world, 2000.0);
    assert_eq!(world.phase, Phase::Over);

    sim::handle_key(&mut world, KeyEvent::Restart).unwrap();
    assert_eq!(world.phase, Phase::Idle);
    assert!(world.obstacles.is_empty());
    assert!(world.projectiles.is_empty());
    assert_eq!(world.score, 0);
    assert_eq!(world.scroll_offset, 0.0);
    assert!(world.hazard.ground_visible);
    assert_eq!(world.hazard.elapsed_ms, 0.0);

    sim::tick(&mut world, FRAME_MS);
    assert!(world.obstacles.is_empty());

    sim::handle_key(&mut world, KeyEvent::Start).unwrap();
    assert_eq!(world.phase, Phase::Running);
    assert!(!world.obstacles.is_empty());
}

#[test]
fn test_snapshot_json_for_host() {
    let mut world = running_world();
    tick_n(&mut world, 2);
    let json = serde_json::to_value(world.snapshot()).unwrap();
    assert_eq!(json["phase"]["state"], "running");
    assert_eq!(json["score"], 0);
    assert!(json["obstacles"].as_array().unwrap().len() > 10);
    assert_eq!(json["hazard"]["ground_visible"], true);
}

fn tick_n(world: &mut World, n: usize) {
    for _ in 0..n {
        sim::tick(world, FRAME_MS);
    }
}
