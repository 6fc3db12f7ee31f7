mod display;

use std::collections::HashMap;
use std::fs::File;
use std::io::{stdout, BufWriter, Write};
use std::path::PathBuf;
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use crossterm::{
    cursor,
    event::{
        self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, KeyboardEnhancementFlags,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    terminal, ExecutableCommand,
};
use log::{info, warn};
use rand::thread_rng;

use display::TerminalSurface;
use viper_shooter::{Config, Game, GameError, InputSnapshot, Key};

const FRAME: Duration = Duration::from_millis(16); // ≈60 FPS

/// Names a JSON config file to load instead of the defaults.
const CONFIG_ENV: &str = "VIPER_CONFIG";
/// Names a file that receives the log; without it logging stays off so the
/// alternate screen is left alone.
const LOG_ENV: &str = "VIPER_LOG";

/// How often readiness is polled before the first tick.
const READY_POLL: Duration = Duration::from_millis(100);

// ── Simultaneous-input constants ──────────────────────────────────────────────

/// A key is considered "held" if its last press/repeat event arrived within
/// this many frames.  Covers terminals that don't emit key-release events:
/// the OS key-repeat rate is ≥ 15 Hz, so a window of 8 frames (≈128 ms at
/// 16 ms a frame) is always refreshed before expiry.
const HOLD_WINDOW: u64 = 8;

/// Returns true if `key` was seen within the last `HOLD_WINDOW` frames.
fn is_held(key_frame: &HashMap<KeyCode, u64>, key: &KeyCode, frame: u64) -> bool {
    key_frame
        .get(key)
        .map(|&last| frame.saturating_sub(last) <= HOLD_WINDOW)
        .unwrap_or(false)
}

fn bindings(key: Key) -> &'static [KeyCode] {
    const LEFT: &[KeyCode] = &[KeyCode::Left, KeyCode::Char('a'), KeyCode::Char('A')];
    const RIGHT: &[KeyCode] = &[KeyCode::Right, KeyCode::Char('d'), KeyCode::Char('D')];
    const UP: &[KeyCode] = &[KeyCode::Up, KeyCode::Char('w'), KeyCode::Char('W')];
    const DOWN: &[KeyCode] = &[KeyCode::Down, KeyCode::Char('s'), KeyCode::Char('S')];
    const FIRE: &[KeyCode] = &[KeyCode::Char(' '), KeyCode::Char('z'), KeyCode::Char('Z')];
    const RESTART: &[KeyCode] = &[KeyCode::Enter];
    match key {
        Key::Left => LEFT,
        Key::Right => RIGHT,
        Key::Up => UP,
        Key::Down => DOWN,
        Key::Fire => FIRE,
        Key::Restart => RESTART,
    }
}

/// Snapshot of every bound key that is live this frame.
fn snapshot(key_frame: &HashMap<KeyCode, u64>, frame: u64) -> InputSnapshot {
    let mut input = InputSnapshot::default();
    for key in [Key::Left, Key::Right, Key::Up, Key::Down, Key::Fire] {
        let down = bindings(key)
            .iter()
            .any(|code| is_held(key_frame, code, frame));
        input.set(key, down);
    }
    input
}

// ── Setup ─────────────────────────────────────────────────────────────────────

fn init_logging() -> Result<(), GameError> {
    let mut builder = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(
        if std::env::var_os(LOG_ENV).is_some() {
            "info"
        } else {
            "off"
        },
    ));
    if let Some(path) = std::env::var_os(LOG_ENV) {
        let file = File::create(PathBuf::from(path))?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }
    builder.init();
    Ok(())
}

fn load_config() -> Result<Config, GameError> {
    match std::env::var_os(CONFIG_ENV) {
        Some(path) => Ok(Config::load(&PathBuf::from(path))?),
        None => Ok(Config::default()),
    }
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Runs until the player quits.
///
/// Input model: instead of acting on each key event individually, we maintain
/// a `key_frame` map that records the frame number of the last press/repeat
/// event for every key.  Each frame we check which keys are still "fresh"
/// (within `HOLD_WINDOW` frames) and hand the whole set to the simulation as
/// one `InputSnapshot`, so movement and fire can be held together.
///
/// Works on two classes of terminal:
/// * **Keyboard-enhancement capable** (Ghostty, kitty, etc.): proper
///   `Press` / `Repeat` / `Release` events → keys are removed on release.
/// * **Classic terminals**: only `Press` events (OS key-repeat shows as
///   repeated `Press`).  Keys expire naturally after `HOLD_WINDOW` frames of
///   silence.
fn game_loop<W: Write>(
    out: &mut W,
    game: &mut Game,
    surface: &mut TerminalSurface,
    rx: &mpsc::Receiver<Event>,
    clock: Instant,
) -> Result<(), GameError> {
    let mut rng = thread_rng();
    let mut key_frame: HashMap<KeyCode, u64> = HashMap::new();
    let mut frame: u64 = 0;

    loop {
        let frame_start = Instant::now();
        frame += 1;
        let mut restart = false;

        // ── Drain all pending input events (non-blocking) ─────────────────────
        while let Ok(ev) = rx.try_recv() {
            let Event::Key(KeyEvent {
                code,
                kind,
                modifiers,
                ..
            }) = ev
            else {
                continue;
            };
            match kind {
                KeyEventKind::Press => {
                    key_frame.insert(code, frame);
                    match code {
                        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                            return Ok(());
                        }
                        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                            return Ok(());
                        }
                        KeyCode::Enter => restart = true,
                        _ => {}
                    }
                }
                KeyEventKind::Repeat => {
                    key_frame.insert(code, frame);
                }
                KeyEventKind::Release => {
                    key_frame.remove(&code);
                }
            }
        }

        let mut input = snapshot(&key_frame, frame);
        input.restart = restart;

        let now_ms = clock.elapsed().as_millis() as u64;
        game.update_tick(input, now_ms, &mut rng, surface);
        surface.present(out)?;
        display::draw_controls_hint(out, surface.rows())?;

        let elapsed = frame_start.elapsed();
        if elapsed < FRAME {
            thread::sleep(FRAME - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> Result<(), GameError> {
    init_logging()?;
    let config = load_config()?;

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    // Request key-release (and key-repeat) events from the terminal.
    // Ghostty / kitty-protocol terminals support this; others fall back gracefully.
    let keyboard_enhanced = out
        .execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))
        .is_ok();
    if !keyboard_enhanced {
        warn!("terminal has no key release events; using the hold window");
    }

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the game loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || loop {
        match event::read() {
            Ok(ev) => {
                if tx.send(ev).is_err() {
                    break; // receiver dropped → program exiting
                }
            }
            Err(_) => break,
        }
    });

    let result = run(&mut out, config, &rx);

    // Always restore the terminal
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    result
}

fn run<W: Write>(out: &mut W, config: Config, rx: &mpsc::Receiver<Event>) -> Result<(), GameError> {
    let clock = Instant::now();
    let mut surface = TerminalSurface::new(&config.viewport)?;
    let mut game = Game::new(config, 0, &mut thread_rng())?;

    loop {
        game.load_sprites(&surface);
        if game.all_ready() {
            break;
        }
        thread::sleep(READY_POLL);
    }
    info!("sprites ready after {} ms", clock.elapsed().as_millis());

    game_loop(out, &mut game, &mut surface, rx, clock)
}
