/// All game entity types.  Pure data, plus the one-step movement each
/// entity applies to itself.

use crate::settings::{ENEMY_SPEED, PLAYER_SPAWN_Y, PLAYER_SPEED, POWERUP_SPEED, WIDTH};
use crate::sprites::{self, Sprite};

// ── Geometry ──────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    pub const fn right(&self) -> i32 {
        self.x + self.w
    }

    pub const fn bottom(&self) -> i32 {
        self.y + self.h
    }

    /// Strict overlap: rectangles that merely share an edge do not count
    /// as touching.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }
}

// ── Input snapshot ────────────────────────────────────────────────────────────

/// Which direction keys are held during the current frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InputState {
    pub left: bool,
    pub right: bool,
}

// ── The entity contract ───────────────────────────────────────────────────────

/// Shared shape of everything that lives in the world: a bounding box,
/// a sprite to draw in it, and a one-frame position update.
pub trait Entity {
    fn rect(&self) -> Rect;
    fn sprite(&self) -> &'static Sprite;
    /// Advance one frame.  Only the player reads the input snapshot.
    fn update(&mut self, input: &InputState);
}

// ── Player ────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    pub rect: Rect,
    /// Horizontal pixels per frame.  Grows by one per power-up collected
    /// and is never reset while the process lives.
    pub speed: i32,
}

impl Player {
    pub fn new() -> Self {
        let sprite = &sprites::PLAYER;
        let mut player = Self {
            rect: Rect::new(0, 0, sprite.width, sprite.height),
            speed: PLAYER_SPEED,
        };
        player.recenter();
        player
    }

    /// Put the player back on its spawn point: horizontally centred,
    /// vertical midpoint on the spawn row.
    pub fn recenter(&mut self) {
        self.rect.x = (WIDTH - self.rect.w) / 2;
        self.rect.y = PLAYER_SPAWN_Y - self.rect.h / 2;
    }
}

impl Entity for Player {
    fn rect(&self) -> Rect {
        self.rect
    }

    fn sprite(&self) -> &'static Sprite {
        &sprites::PLAYER
    }

    /// Slide by the held direction, clamped so the box never leaves the
    /// world horizontally.  Vertical position never changes.
    fn update(&mut self, input: &InputState) {
        if input.left {
            self.rect.x -= self.speed;
        }
        if input.right {
            self.rect.x += self.speed;
        }
        self.rect.x = self.rect.x.max(0).min(WIDTH - self.rect.w);
    }
}

// ── Enemy ─────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Enemy {
    pub rect: Rect,
    pub speed: i32,
}

impl Enemy {
    /// A new enemy parked just above the visible world at column `x`.
    pub fn new(x: i32) -> Self {
        let sprite = &sprites::ENEMY;
        Self {
            rect: Rect::new(x, -sprite.height, sprite.width, sprite.height),
            speed: ENEMY_SPEED,
        }
    }
}

impl Entity for Enemy {
    fn rect(&self) -> Rect {
        self.rect
    }

    fn sprite(&self) -> &'static Sprite {
        &sprites::ENEMY
    }

    fn update(&mut self, _input: &InputState) {
        self.rect.y += self.speed;
    }
}

// ── Power-up ──────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct PowerUp {
    pub rect: Rect,
    pub speed: i32,
}

impl PowerUp {
    pub fn new(x: i32) -> Self {
        let sprite = &sprites::POWERUP;
        Self {
            rect: Rect::new(x, -sprite.height, sprite.width, sprite.height),
            speed: POWERUP_SPEED,
        }
    }
}

impl Entity for PowerUp {
    fn rect(&self) -> Rect {
        self.rect
    }

    fn sprite(&self) -> &'static Sprite {
        &sprites::POWERUP
    }

    fn update(&mut self, _input: &InputState) {
        self.rect.y += self.speed;
    }
}

// ── Screens ───────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub enum Mode {
    Menu,
    Playing,
    GameOver,
}

// ── Master game state ─────────────────────────────────────────────────────────

/// The entire game state.  Cloneable so pure update functions can
/// return a new copy without mutating the original.
#[derive(Clone, Debug, PartialEq)]
pub struct GameState {
    pub player: Player,
    /// Enemies currently falling, oldest first.
    pub enemies: Vec<Enemy>,
    /// Power-ups currently falling, oldest first.
    pub powerups: Vec<PowerUp>,
    pub score: u32,
    pub mode: Mode,
    /// Frames simulated since the current run started; drives spawning.
    pub ticks: u64,
}
