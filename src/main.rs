//! Skyraid entry point
//!
//! Owns everything the simulation must not: the terminal, the wall clock,
//! and the keyboard. Runs the match loop at a fixed 50 ticks per second,
//! feeding one `TickInput` per frame into the sim and handing the result
//! to the terminal renderer.

use std::collections::HashMap;
use std::io::{BufWriter, Write, stdout};
use std::path::PathBuf;
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use crossterm::{
    ExecutableCommand, cursor,
    event::{
        self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, KeyboardEnhancementFlags,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    terminal,
};

use skyraid::Tuning;
use skyraid::consts::TICK_RATE;
use skyraid::render::{draw_frame, term::TermRenderer};
use skyraid::sim::{MatchState, TickInput, tick};

const FRAME: Duration = Duration::from_millis(1000 / TICK_RATE as u64);

/// A key counts as "held" if its last press/repeat event arrived within
/// this many frames. Covers terminals that never emit key-release events:
/// OS key-repeat refreshes the timestamp faster than the window expires.
const HOLD_WINDOW: u64 = 4;

fn is_held(key_frame: &HashMap<KeyCode, u64>, key: KeyCode, frame: u64) -> bool {
    key_frame
        .get(&key)
        .map(|&last| frame.saturating_sub(last) <= HOLD_WINDOW)
        .unwrap_or(false)
}

fn any_held(key_frame: &HashMap<KeyCode, u64>, keys: &[KeyCode], frame: u64) -> bool {
    keys.iter().any(|&k| is_held(key_frame, k, frame))
}

fn tuning_path() -> PathBuf {
    std::env::var_os("SKYRAID_TUNING")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("skyraid.tuning.json"))
}

/// Drive one match to completion. Returns early on a quit key.
fn match_loop<W: Write>(
    renderer: &mut TermRenderer<W>,
    state: &mut MatchState,
    rx: &mpsc::Receiver<Event>,
) -> std::io::Result<()> {
    // Maps each held key to the frame it was last seen (press or repeat).
    let mut key_frame: HashMap<KeyCode, u64> = HashMap::new();
    let mut frame: u64 = 0;

    loop {
        let frame_start = Instant::now();
        frame += 1;

        // One-shot actions for this frame, latched from discrete events.
        let mut fire = false;
        let mut discharge = false;
        let mut pause = false;

        // Drain all pending input events without blocking.
        loop {
            match rx.try_recv() {
                Ok(Event::Key(KeyEvent {
                    code,
                    kind,
                    modifiers,
                    ..
                })) => match kind {
                    KeyEventKind::Press => {
                        key_frame.insert(code, frame);
                        match code {
                            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                                return Ok(());
                            }
                            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                                return Ok(());
                            }
                            KeyCode::Char(' ') => fire = true,
                            KeyCode::Char('b') | KeyCode::Char('B') => discharge = true,
                            KeyCode::Char('p') | KeyCode::Char('P') => pause = true,
                            _ => {}
                        }
                    }
                    KeyEventKind::Repeat => {
                        key_frame.insert(code, frame);
                    }
                    KeyEventKind::Release => {
                        key_frame.remove(&code);
                    }
                },
                Ok(Event::Resize(cols, rows)) => renderer.set_dimensions(cols, rows),
                Ok(_) => {}
                Err(_) => break,
            }
        }

        let input = TickInput {
            up: any_held(
                &key_frame,
                &[KeyCode::Up, KeyCode::Char('w'), KeyCode::Char('W')],
                frame,
            ),
            down: any_held(
                &key_frame,
                &[KeyCode::Down, KeyCode::Char('s'), KeyCode::Char('S')],
                frame,
            ),
            left: any_held(
                &key_frame,
                &[KeyCode::Left, KeyCode::Char('a'), KeyCode::Char('A')],
                frame,
            ),
            right: any_held(
                &key_frame,
                &[KeyCode::Right, KeyCode::Char('d'), KeyCode::Char('D')],
                frame,
            ),
            fire,
            discharge,
            pause,
        };

        tick(state, &input);
        draw_frame(renderer, state)?;

        if state.finished() {
            return Ok(());
        }

        let elapsed = frame_start.elapsed();
        if elapsed < FRAME {
            thread::sleep(FRAME - elapsed);
        }
    }
}

fn main() -> std::io::Result<()> {
    env_logger::init();

    let tuning = Tuning::load_or_default(&tuning_path());
    let seed = tuning.seed.unwrap_or_else(rand::random);
    log::info!("starting match with seed {seed}");

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    // Ask for key-release events where the terminal supports them; others
    // fall back to the hold-window heuristic.
    let keyboard_enhanced = out
        .execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))
        .is_ok();

    // Dedicate a thread to blocking event reads so the match loop never
    // waits on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || {
        loop {
            match event::read() {
                Ok(ev) => {
                    if tx.send(ev).is_err() {
                        break; // receiver dropped, program exiting
                    }
                }
                Err(_) => break,
            }
        }
    });

    let mut state = MatchState::new(tuning, seed);

    let result = {
        let (cols, rows) = terminal::size()?;
        let mut renderer = TermRenderer::new(&mut out, cols, rows);
        match_loop(&mut renderer, &mut state, &rx)
    };

    // Always restore the terminal
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    log::info!(
        "final score {} after {} ticks",
        state.score.value(),
        state.tick
    );

    result
}
