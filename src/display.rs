/// Rendering layer — all terminal I/O lives here.
///
/// Each function receives a mutable writer and an immutable view of the
/// game state.  No game logic is performed; this module only translates
/// state into terminal commands.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};

use sky_dodge::entities::{Entity, GameState};
use sky_dodge::settings::{HEIGHT, WIDTH};

// ── Colour palette ────────────────────────────────────────────────────────────

const C_SKY: Color = Color::Rgb { r: 255, g: 255, b: 255 };
const C_INK: Color = Color::Rgb { r: 0, g: 0, b: 0 };
const C_MENU_BG: Color = Color::Rgb { r: 30, g: 30, b: 30 };
const C_MENU_TEXT: Color = Color::Rgb { r: 255, g: 255, b: 255 };
const C_TITLE: Color = Color::Cyan;
const C_GAME_OVER: Color = Color::Red;
const C_BORDER: Color = Color::DarkBlue;
const C_HINT: Color = Color::DarkGrey;
const C_PLAYER: Color = Color::Blue;
const C_ENEMY: Color = Color::Red;
const C_POWERUP: Color = Color::DarkGreen;

// ── Playfield geometry ────────────────────────────────────────────────────────

/// The world is projected onto a fixed grid of terminal cells so the
/// game looks the same on any terminal big enough to hold it.
const VIEW_COLS: i32 = 80;
const VIEW_ROWS: i32 = 24;

/// Terminal cell of the playfield's top-left corner (inside the border).
const VIEW_LEFT: u16 = 1;
const VIEW_TOP: u16 = 1;

/// Smallest terminal that fits the playfield, its border and the key
/// hint underneath.
pub const MIN_COLS: u16 = VIEW_COLS as u16 + 2;
pub const MIN_ROWS: u16 = VIEW_ROWS as u16 + 3;

/// World position → playfield cell.  May land outside the view
/// vertically (entities spawn above it and exit below it); callers clip.
fn to_cell(x: i32, y: i32) -> (i32, i32) {
    (x * VIEW_COLS / WIDTH, y * VIEW_ROWS / HEIGHT)
}

// ── Screens ───────────────────────────────────────────────────────────────────

/// Render the title screen.
pub fn render_menu<W: Write>(out: &mut W) -> std::io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    draw_border(out)?;
    fill_playfield(out, C_MENU_BG)?;

    draw_centered(out, VIEW_TOP + 10, "★  SKY  DODGE  ★", C_TITLE)?;
    draw_centered(out, VIEW_TOP + 12, "Press SPACE to start", C_MENU_TEXT)?;

    draw_hint(out, "SPACE : Start   Q : Quit")?;
    present(out)
}

/// Render one frame of play: the sky, every live entity, the score.
pub fn render_playing<W: Write>(out: &mut W, state: &GameState) -> std::io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    draw_border(out)?;
    fill_playfield(out, C_SKY)?;

    draw_sprite(out, &state.player, C_PLAYER)?;
    for enemy in &state.enemies {
        draw_sprite(out, enemy, C_ENEMY)?;
    }
    for powerup in &state.powerups {
        draw_sprite(out, powerup, C_POWERUP)?;
    }
    draw_score(out, state.score)?;

    draw_hint(out, "← → / A D : Move   Q : Quit")?;
    present(out)
}

/// Render the game-over screen with the finished run's score.
pub fn render_game_over<W: Write>(out: &mut W, state: &GameState) -> std::io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    draw_border(out)?;
    fill_playfield(out, C_MENU_BG)?;

    draw_centered(out, VIEW_TOP + 10, "Game Over!", C_GAME_OVER)?;
    draw_centered(out, VIEW_TOP + 12, &format!("Score: {}", state.score), C_MENU_TEXT)?;
    draw_centered(out, VIEW_TOP + 14, "Press SPACE to return to the menu", C_MENU_TEXT)?;

    draw_hint(out, "SPACE : Menu   Q : Quit")?;
    present(out)
}

// ── Border ────────────────────────────────────────────────────────────────────

fn draw_border<W: Write>(out: &mut W) -> std::io::Result<()> {
    let w = VIEW_COLS as usize;

    out.queue(style::ResetColor)?;
    out.queue(style::SetForegroundColor(C_BORDER))?;

    out.queue(cursor::MoveTo(VIEW_LEFT - 1, VIEW_TOP - 1))?;
    out.queue(Print(format!("┌{}┐", "─".repeat(w))))?;

    out.queue(cursor::MoveTo(VIEW_LEFT - 1, VIEW_TOP + VIEW_ROWS as u16))?;
    out.queue(Print(format!("└{}┘", "─".repeat(w))))?;

    for row in 0..VIEW_ROWS as u16 {
        out.queue(cursor::MoveTo(VIEW_LEFT - 1, VIEW_TOP + row))?;
        out.queue(Print("│"))?;
        out.queue(cursor::MoveTo(VIEW_LEFT + VIEW_COLS as u16, VIEW_TOP + row))?;
        out.queue(Print("│"))?;
    }

    Ok(())
}

// ── Playfield ─────────────────────────────────────────────────────────────────

/// Paint the whole playfield in one colour.  Leaves that colour set as
/// the background for whatever is drawn next.
fn fill_playfield<W: Write>(out: &mut W, bg: Color) -> std::io::Result<()> {
    out.queue(style::SetBackgroundColor(bg))?;
    for row in 0..VIEW_ROWS as u16 {
        out.queue(cursor::MoveTo(VIEW_LEFT, VIEW_TOP + row))?;
        out.queue(Print(" ".repeat(VIEW_COLS as usize)))?;
    }
    Ok(())
}

/// Blit one entity's sprite onto the playfield, skipping art rows that
/// fall outside the view.  Spawn bounds and the player clamp keep every
/// sprite inside the view horizontally, so only rows need the check.
fn draw_sprite<W: Write>(out: &mut W, entity: &dyn Entity, color: Color) -> std::io::Result<()> {
    let rect = entity.rect();
    let (col, row) = to_cell(rect.x, rect.y);

    out.queue(style::SetForegroundColor(color))?;
    for (i, line) in entity.sprite().art.iter().enumerate() {
        let r = row + i as i32;
        if r < 0 || r >= VIEW_ROWS {
            continue;
        }
        out.queue(cursor::MoveTo(VIEW_LEFT + col as u16, VIEW_TOP + r as u16))?;
        out.queue(Print(line))?;
    }
    Ok(())
}

/// Score counter in the playfield's top-left corner.
fn draw_score<W: Write>(out: &mut W, score: u32) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(VIEW_LEFT + 1, VIEW_TOP))?;
    out.queue(style::SetForegroundColor(C_INK))?;
    out.queue(Print(format!("Score: {}", score)))?;
    Ok(())
}

// ── Text helpers ──────────────────────────────────────────────────────────────

fn draw_centered<W: Write>(out: &mut W, row: u16, text: &str, color: Color) -> std::io::Result<()> {
    let cx = VIEW_LEFT + VIEW_COLS as u16 / 2;
    let col = cx.saturating_sub(text.chars().count() as u16 / 2);
    out.queue(cursor::MoveTo(col, row))?;
    out.queue(style::SetForegroundColor(color))?;
    out.queue(Print(text))?;
    Ok(())
}

/// Controls hint on the row below the border.
fn draw_hint<W: Write>(out: &mut W, text: &str) -> std::io::Result<()> {
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(VIEW_LEFT, VIEW_TOP + VIEW_ROWS as u16 + 1))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print(text))?;
    Ok(())
}

/// Park the cursor in a harmless spot and flush the frame.
fn present<W: Write>(out: &mut W) -> std::io::Result<()> {
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, VIEW_TOP + VIEW_ROWS as u16 + 1))?;
    out.flush()?;
    Ok(())
}
