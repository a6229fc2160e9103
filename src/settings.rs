/// Fixed world and pacing constants.  Everything that defines the feel of
/// the game lives here; nothing below is computed at runtime.

// ── World ─────────────────────────────────────────────────────────────────────

pub const WIDTH: i32 = 800; // world width, px
pub const HEIGHT: i32 = 600; // world height, px

/// Simulation and render rate, frames per second.
pub const FPS: u64 = 60;

// ── Speeds (pixels per frame) ─────────────────────────────────────────────────

pub const PLAYER_SPEED: i32 = 5;
pub const ENEMY_SPEED: i32 = 3;
pub const POWERUP_SPEED: i32 = 2;

// ── Spawn cadence (ticks between arrivals) ────────────────────────────────────

/// An enemy enters whenever the tick counter hits a multiple of this.
pub const ENEMY_SPAWN_INTERVAL: u64 = 60;
/// Same for power-ups.  Shares multiples with the enemy interval, so at
/// tick 300, 600, ... both spawn on the same tick.
pub const POWERUP_SPAWN_INTERVAL: u64 = 300;

// ── Player spawn point ────────────────────────────────────────────────────────

/// Vertical centre of the player's spawn position.
pub const PLAYER_SPAWN_Y: i32 = 500;
