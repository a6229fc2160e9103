mod display;

use std::collections::HashMap;
use std::io::{stdout, BufWriter, Write};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use crossterm::{
    cursor,
    event::{
        self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers,
        KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    terminal,
    ExecutableCommand,
};
use rand::thread_rng;

use sky_dodge::compute::{acknowledge_game_over, init_state, start_game, tick};
use sky_dodge::entities::{InputState, Mode};
use sky_dodge::settings::FPS;

const FRAME: Duration = Duration::from_micros(1_000_000 / FPS); // ≈60 FPS

/// A key is considered "held" if its last press/repeat event arrived within
/// this many frames.  Covers terminals that don't emit key-release events:
/// the OS key-repeat rate is ≥ 15 Hz, so a window of 8 frames (≈133 ms) is
/// always refreshed before expiry.
const HOLD_WINDOW: u64 = 8;

/// Returns true if `key` was seen within the last `HOLD_WINDOW` frames.
fn is_held(key_frame: &HashMap<KeyCode, u64>, key: &KeyCode, frame: u64) -> bool {
    key_frame
        .get(key)
        .map(|&last| frame.saturating_sub(last) <= HOLD_WINDOW)
        .unwrap_or(false)
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Drive the fixed-rate loop until the player quits.
///
/// Input model: instead of acting on each key event individually, we keep
/// a `key_frame` map recording the frame number of the last press/repeat
/// event for every key.  Each frame we check which direction keys are
/// still "fresh" (within `HOLD_WINDOW` frames) and hand the result to the
/// simulation as the held-key snapshot.  Screen changes (start, dismiss,
/// quit) act on the press event itself.
///
/// Works on two classes of terminal:
/// * **Keyboard-enhancement capable** (Ghostty, kitty, etc.): proper
///   `Press` / `Repeat` / `Release` events, so keys drop out on release.
/// * **Classic terminals**: only `Press` events (OS key-repeat shows as
///   repeated `Press`).  Keys expire naturally after `HOLD_WINDOW` frames
///   of silence, which is shorter than the OS repeat interval, so a held
///   key stays live while it keeps generating repeats.
fn run<W: Write>(out: &mut W, rx: &mpsc::Receiver<Event>) -> std::io::Result<()> {
    let mut rng = thread_rng();
    let mut state = init_state();

    // Maps each held key → the frame it was last seen (press or repeat).
    let mut key_frame: HashMap<KeyCode, u64> = HashMap::new();
    let mut frame: u64 = 0;

    loop {
        let frame_start = Instant::now();
        frame += 1;

        // ── Drain all pending input events (non-blocking) ─────────────────────
        while let Ok(Event::Key(KeyEvent { code, kind, modifiers, .. })) = rx.try_recv() {
            match kind {
                // Press: record key + handle the discrete transitions
                KeyEventKind::Press => {
                    key_frame.insert(code.clone(), frame);
                    match code {
                        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                            return Ok(());
                        }
                        KeyCode::Char('c')
                            if modifiers.contains(KeyModifiers::CONTROL) =>
                        {
                            return Ok(());
                        }
                        KeyCode::Char(' ') => {
                            if state.mode == Mode::Menu {
                                state = start_game(&state);
                            } else if state.mode == Mode::GameOver {
                                state = acknowledge_game_over(&state);
                            }
                        }
                        _ => {}
                    }
                }
                // Repeat: refresh timestamp so the key stays "held"
                KeyEventKind::Repeat => {
                    key_frame.insert(code.clone(), frame);
                }
                // Release: remove key immediately (keyboard-enhancement path)
                KeyEventKind::Release => {
                    key_frame.remove(&code);
                }
            }
        }

        // ── Advance and draw the current screen ────────────────────────────────
        if state.mode == Mode::Playing {
            let input = InputState {
                left: is_held(&key_frame, &KeyCode::Left, frame)
                    || is_held(&key_frame, &KeyCode::Char('a'), frame)
                    || is_held(&key_frame, &KeyCode::Char('A'), frame),
                right: is_held(&key_frame, &KeyCode::Right, frame)
                    || is_held(&key_frame, &KeyCode::Char('d'), frame)
                    || is_held(&key_frame, &KeyCode::Char('D'), frame),
            };
            state = tick(&state, &input, &mut rng);
            // Draw the frame the tick produced even when it ended the run;
            // the game-over screen takes over on the next iteration.
            display::render_playing(out, &state)?;
        } else if state.mode == Mode::Menu {
            display::render_menu(out)?;
        } else {
            display::render_game_over(out, &state)?;
        }

        let elapsed = frame_start.elapsed();
        if elapsed < FRAME {
            std::thread::sleep(FRAME - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> std::io::Result<()> {
    // Check the terminal fits before touching any of its modes, so the
    // message prints on the normal screen.
    let (cols, rows) = terminal::size()?;
    if cols < display::MIN_COLS || rows < display::MIN_ROWS {
        return Err(std::io::Error::new(
            std::io::ErrorKind::Other,
            format!(
                "terminal too small: need at least {}x{}, have {}x{}",
                display::MIN_COLS,
                display::MIN_ROWS,
                cols,
                rows
            ),
        ));
    }

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;
    out.execute(terminal::SetTitle("Sky Dodge"))?;

    // Request key-release (and key-repeat) events from the terminal.
    // Ghostty / kitty-protocol terminals support this; others fall back gracefully.
    let keyboard_enhanced = out
        .execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))
        .is_ok();

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the game loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || {
        loop {
            match event::read() {
                Ok(ev) => {
                    if tx.send(ev).is_err() {
                        break; // receiver dropped → program exiting
                    }
                }
                Err(_) => break,
            }
        }
    });

    let result = run(&mut out, &rx);

    // Always restore the terminal
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    result
}
