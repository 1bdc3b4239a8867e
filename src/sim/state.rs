//! World state and core simulation types
//!
//! Everything a tick reads or writes is owned by [`World`]; subsystems receive it
//! explicitly and hold no state of their own.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::input::InputIntent;
use crate::tuning::{Tuning, Viewport};
use crate::words::WordList;

/// Round lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum Phase {
    /// Waiting for a start request
    Idle,
    /// All subsystems tick
    Running,
    /// Lethal contact happened; the world is still, waiting out the delay
    Frozen { remaining_ms: f64 },
    /// Fade-out overlay accumulating toward 1.0
    Fading { opacity: f32 },
    /// Terminal until a restart request
    Over,
}

impl Phase {
    pub fn name(&self) -> &'static str {
        match self {
            Phase::Idle => "idle",
            Phase::Running => "running",
            Phase::Frozen { .. } => "frozen",
            Phase::Fading { .. } => "fading",
            Phase::Over => "over",
        }
    }
}

/// The climbing player
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Top-left corner
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: Vec2,
    pub grounded: bool,
    /// Jumps used since last landing
    pub jump_count: u8,
}

impl Player {
    /// Player standing in the middle of the ground band
    pub fn spawn(tuning: &Tuning, viewport: &Viewport) -> Self {
        Self {
            pos: Vec2::new(
                viewport.width / 2.0 - tuning.player_width / 2.0,
                viewport.height - tuning.grass_height - 20.0,
            ),
            vel: Vec2::ZERO,
            size: Vec2::new(tuning.player_width, tuning.player_height),
            grounded: false,
            jump_count: 0,
        }
    }

    /// Y of the lower edge
    #[inline]
    pub fn foot(&self) -> f32 {
        self.pos.y + self.size.y
    }
}

/// A typing-gated platform
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Obstacle {
    pub id: u32,
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    pub word: String,
    /// Solid once the word has been typed
    pub active: bool,
    /// Lowercased prefix of `word` typed so far
    pub typed_progress: String,
    /// Last mismatched letter, for feedback only
    pub incorrect_char: Option<char>,
    /// Horizontal drift while inactive (units per tick)
    pub patrol_speed: f32,
    /// +1.0 or -1.0
    pub patrol_dir: f32,
}

impl Obstacle {
    pub fn new(id: u32, pos: Vec2, word: &str, tuning: &Tuning, patrol_dir: f32) -> Self {
        let letters = word.chars().count() as f32;
        Self {
            id,
            pos,
            size: Vec2::new(letters * tuning.obstacle_char_width, tuning.obstacle_height),
            word: word.to_string(),
            active: false,
            typed_progress: String::new(),
            incorrect_char: None,
            patrol_speed: tuning.patrol_speed,
            patrol_dir,
        }
    }

    /// Word length in characters
    #[inline]
    pub fn letters(&self) -> usize {
        self.word.chars().count()
    }

    /// Next letter the player has to type
    pub fn expected_char(&self) -> Option<char> {
        self.word.chars().nth(self.typed_progress.chars().count())
    }

    /// Whether `typed_progress` is still a strict prefix of the word (ignoring case)
    pub fn progress_is_prefix(&self) -> bool {
        let typed = self.typed_progress.chars().count();
        typed < self.letters()
            && self
                .typed_progress
                .chars()
                .zip(self.word.chars())
                .all(|(t, w)| t.eq_ignore_ascii_case(&w))
    }
}

/// Ground-line scenery, moved by scrolling only
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Decoration {
    pub pos: Vec2,
    pub size: f32,
    /// Drawn in front of the player
    pub front: bool,
}

/// Projectile motion mode; `Bouncing -> Falling` is one-way
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectileMode {
    Bouncing,
    Falling,
}

/// A bouncing hazard
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    pub id: u32,
    /// Center
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub mode: ProjectileMode,
}

/// The rising destructive front
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HazardFront {
    /// World y of the front's top edge; decreases as it rises
    pub level: f32,
    /// Climb speed applied on the last tick (units per tick)
    pub climb_speed: f32,
    /// Running time since round start, pauses excluded
    pub elapsed_ms: f64,
    pub grace_active: bool,
    /// Whole seconds left in the grace period
    pub countdown: u32,
    /// Cleared once the front reaches the ground; stays cleared for the round
    pub ground_visible: bool,
}

impl HazardFront {
    pub fn new(tuning: &Tuning, viewport: &Viewport) -> Self {
        Self {
            level: viewport.height - 1.0,
            climb_speed: 0.0,
            elapsed_ms: 0.0,
            grace_active: true,
            countdown: (tuning.hazard_grace_ms / 1000.0).ceil() as u32,
            ground_visible: true,
        }
    }
}

/// What ended the round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LethalCause {
    HazardFront,
    Projectile,
}

/// Notifications for the presentation layer (sound, particles, HUD)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum GameEvent {
    Jump { double: bool },
    WordCompleted { obstacle_id: u32, letters: u32 },
    ProjectileSpawned { projectile_id: u32 },
    Bounce { projectile_id: u32 },
    LethalContact { cause: LethalCause },
    PhaseChanged { from: Phase, to: Phase },
}

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct World {
    pub tuning: Tuning,
    pub viewport: Viewport,
    pub words: WordList,
    pub phase: Phase,
    /// Suspends ticking inside `Running` without a phase change
    pub paused: bool,
    /// Rounds started since creation (1 during the first round)
    pub round: u32,
    pub seed: u64,
    pub player: Player,
    pub intent: InputIntent,
    pub obstacles: Vec<Obstacle>,
    pub decorations: Vec<Decoration>,
    pub projectiles: Vec<Projectile>,
    pub hazard: HazardFront,
    pub score: u32,
    /// Total scroll applied this round
    pub scroll_offset: f32,
    /// Obstacle currently receiving letters
    pub typing_target: Option<u32>,
    /// Completed words since the last projectile spawn
    pub words_since_spawn: u32,
    /// Simulation ticks this round
    pub time_ticks: u64,
    pub(crate) events: Vec<GameEvent>,
    pub(crate) rng: Pcg32,
    next_id: u32,
}

impl World {
    /// Create an idle world with no words loaded
    pub fn new(seed: u64, tuning: Tuning, viewport: Viewport) -> Self {
        Self {
            player: Player::spawn(&tuning, &viewport),
            hazard: HazardFront::new(&tuning, &viewport),
            tuning,
            viewport,
            words: WordList::default(),
            phase: Phase::Idle,
            paused: false,
            round: 0,
            seed,
            intent: InputIntent::default(),
            obstacles: Vec::new(),
            decorations: Vec::new(),
            projectiles: Vec::new(),
            score: 0,
            scroll_offset: 0.0,
            typing_target: None,
            words_since_spawn: 0,
            time_ticks: 0,
            events: Vec::new(),
            rng: Pcg32::seed_from_u64(seed),
            next_id: 1,
        }
    }

    /// Replace the word source from a newline-delimited blob. Returns the kept count.
    pub fn load_words(&mut self, text: &str) -> usize {
        self.words = WordList::parse(text, self.tuning.word_min_len, self.tuning.word_max_len);
        log::info!("Loaded {} words", self.words.len());
        self.words.len()
    }

    pub fn set_words(&mut self, words: WordList) {
        self.words = words;
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// World y of the ground surface under the current scroll
    #[inline]
    pub fn ground_y(&self) -> f32 {
        self.viewport.height - self.tuning.grass_height + self.scroll_offset
    }

    pub fn obstacle(&self, id: u32) -> Option<&Obstacle> {
        self.obstacles.iter().find(|o| o.id == id)
    }

    pub fn obstacle_mut(&mut self, id: u32) -> Option<&mut Obstacle> {
        self.obstacles.iter_mut().find(|o| o.id == id)
    }

    pub fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Drain the events raised since the last call
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Move to `to`, logging and announcing the change
    pub fn set_phase(&mut self, to: Phase) {
        let from = self.phase;
        self.phase = to;
        if from.name() != to.name() {
            log::info!("Phase {} -> {} (score {})", from.name(), to.name(), self.score);
            self.push_event(GameEvent::PhaseChanged { from, to });
        }
    }

    /// Drop every per-round entity and timer
    pub fn reset_round(&mut self) {
        self.player = Player::spawn(&self.tuning, &self.viewport);
        self.hazard = HazardFront::new(&self.tuning, &self.viewport);
        self.obstacles.clear();
        self.decorations.clear();
        self.projectiles.clear();
        self.score = 0;
        self.scroll_offset = 0.0;
        self.typing_target = None;
        self.words_since_spawn = 0;
        self.time_ticks = 0;
        self.paused = false;
        self.intent.clear();
    }

    /// Borrowed view for renderers
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            phase: self.phase,
            paused: self.paused,
            score: self.score,
            scroll_offset: self.scroll_offset,
            ground_y: self.hazard.ground_visible.then(|| self.ground_y()),
            viewport: self.viewport,
            player: &self.player,
            obstacles: &self.obstacles,
            decorations: &self.decorations,
            projectiles: &self.projectiles,
            hazard: &self.hazard,
            typing_target: self.typing_target,
        }
    }
}

/// Per-tick render view of the world
#[derive(Debug, Serialize)]
pub struct Snapshot<'a> {
    pub phase: Phase,
    pub paused: bool,
    pub score: u32,
    pub scroll_offset: f32,
    /// `None` once the hazard has covered the ground
    pub ground_y: Option<f32>,
    pub viewport: Viewport,
    pub player: &'a Player,
    pub obstacles: &'a [Obstacle],
    pub decorations: &'a [Decoration],
    pub projectiles: &'a [Projectile],
    pub hazard: &'a HazardFront,
    pub typing_target: Option<u32>,
}
