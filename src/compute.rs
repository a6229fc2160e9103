/// Pure game-logic functions.
///
/// Every public function takes an immutable reference to the current
/// `GameState` (and, where needed, an RNG handle) and returns a brand-new
/// `GameState`.  Side effects are limited to the injected RNG.

use rand::Rng;

use crate::entities::{Enemy, Entity, GameState, InputState, Mode, Player, PowerUp};
use crate::settings::{ENEMY_SPAWN_INTERVAL, HEIGHT, POWERUP_SPAWN_INTERVAL, WIDTH};
use crate::sprites;

// ── Constructors ─────────────────────────────────────────────────────────────

/// Build the state the process starts in: the menu screen, with an idle
/// player parked on its spawn point and nothing falling yet.
pub fn init_state() -> GameState {
    GameState {
        player: Player::new(),
        enemies: Vec::new(),
        powerups: Vec::new(),
        score: 0,
        mode: Mode::Menu,
        ticks: 0,
    }
}

// ── Screen transitions (pure) ────────────────────────────────────────────────

/// Leave the menu and begin a fresh run: score cleared, both collections
/// emptied, the player back on its spawn point.  Speed earned from
/// power-ups carries over between runs.  Anywhere but the menu this is
/// a no-op.
pub fn start_game(state: &GameState) -> GameState {
    if state.mode != Mode::Menu {
        return state.clone();
    }
    let mut player = state.player.clone();
    player.recenter();
    GameState {
        player,
        enemies: Vec::new(),
        powerups: Vec::new(),
        score: 0,
        mode: Mode::Playing,
        ticks: 0,
    }
}

/// Dismiss the game-over screen and return to the menu.  Nothing is
/// reset here; the wipe happens when the next run starts.
pub fn acknowledge_game_over(state: &GameState) -> GameState {
    if state.mode != Mode::GameOver {
        return state.clone();
    }
    GameState {
        mode: Mode::Menu,
        ..state.clone()
    }
}

// ── Per-frame tick ───────────────────────────────────────────────────────────

/// Advance the simulation by one frame.  All randomness comes through `rng`
/// so callers control determinism (useful for tests with a seeded RNG).
pub fn tick(state: &GameState, input: &InputState, rng: &mut impl Rng) -> GameState {
    let ticks = state.ticks + 1;

    // ── 1. Move the player ───────────────────────────────────────────────────
    let mut player = state.player.clone();
    player.update(input);

    // ── 2. Spawn on the tick schedule ────────────────────────────────────────
    // The two checks fire independently; on a shared multiple (tick 300,
    // 600, ...) an enemy and a power-up enter together.
    let mut enemies = state.enemies.clone();
    if ticks % ENEMY_SPAWN_INTERVAL == 0 {
        let x = rng.gen_range(0..=WIDTH - sprites::ENEMY.width);
        enemies.push(Enemy::new(x));
    }
    let mut powerups = state.powerups.clone();
    if ticks % POWERUP_SPAWN_INTERVAL == 0 {
        let x = rng.gen_range(0..=WIDTH - sprites::POWERUP.width);
        powerups.push(PowerUp::new(x));
    }

    // ── 3. Everything falls (new spawns included) ────────────────────────────
    for enemy in &mut enemies {
        enemy.update(input);
    }
    for powerup in &mut powerups {
        powerup.update(input);
    }

    // ── 4. Enemies: a touch ends the run, a clean escape scores ──────────────
    // Both checks run for every enemy: one that clips the player on the
    // very tick it leaves the world ends the game and still scores.
    let player_box = player.rect();
    let mut hit = false;
    let mut score = state.score;
    let mut escaped: Vec<usize> = Vec::new();

    for (i, enemy) in enemies.iter().enumerate() {
        if enemy.rect().overlaps(&player_box) {
            hit = true;
        }
        if enemy.rect().y > HEIGHT {
            escaped.push(i);
            score += 1;
        }
    }

    let enemies: Vec<Enemy> = enemies
        .iter()
        .enumerate()
        .filter(|(i, _)| !escaped.contains(i))
        .map(|(_, e)| e.clone())
        .collect();

    // ── 5. Power-ups: leaving the world beats being collected ────────────────
    let mut used: Vec<usize> = Vec::new();

    for (i, powerup) in powerups.iter().enumerate() {
        if powerup.rect().y > HEIGHT {
            used.push(i);
        } else if powerup.rect().overlaps(&player_box) {
            used.push(i);
            player.speed += 1;
        }
    }

    let powerups: Vec<PowerUp> = powerups
        .iter()
        .enumerate()
        .filter(|(i, _)| !used.contains(i))
        .map(|(_, p)| p.clone())
        .collect();

    // ── 6. Resolve the mode ──────────────────────────────────────────────────
    let mode = if hit { Mode::GameOver } else { state.mode.clone() };

    GameState {
        player,
        enemies,
        powerups,
        score,
        mode,
        ticks,
    }
}
