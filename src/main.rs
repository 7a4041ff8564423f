use std::io::{stdout, BufWriter, Write};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use crossterm::{
    cursor,
    event::{self, Event, KeyEvent, KeyEventKind, KeyModifiers, KeyCode},
    terminal,
    ExecutableCommand,
};
use rand::thread_rng;

use garden_snake::compute::{self, Command};
use garden_snake::config::Config;
use garden_snake::display;
use garden_snake::entities::GameState;
use garden_snake::input::map_key;
use garden_snake::scores::HighScores;

/// Render cadence; game logic advances on the session's own tick interval.
const FRAME: Duration = Duration::from_millis(33); // ≈30 FPS

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> std::io::Result<()> {
    env_logger::init();

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

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

    let result = run(&mut out, &rx);

    // Always restore the terminal
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    result
}

// ── Game loop ─────────────────────────────────────────────────────────────────

fn run<W: Write>(out: &mut W, rx: &mpsc::Receiver<Event>) -> std::io::Result<()> {
    let config = Config::default();
    let mut scores = HighScores::load(config.score_file.clone());
    let mut rng = thread_rng();

    let mut session = compute::new_session(&config, scores.best(), &mut rng);
    let mut last_tick = Instant::now();

    loop {
        let frame_start = Instant::now();

        // ── Drain all pending input events (non-blocking) ─────────────────────
        while let Ok(ev) = rx.try_recv() {
            let Event::Key(KeyEvent { code, kind, modifiers, .. }) = ev else {
                continue;
            };
            if kind == KeyEventKind::Release {
                continue;
            }
            if code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL) {
                return Ok(());
            }
            let Some(cmd) = map_key(code, &session.state) else {
                continue;
            };
            if cmd == Command::Quit {
                return Ok(());
            }
            let was_playing = session.state == GameState::Playing;
            session = compute::apply(&session, cmd, &config, &mut rng);
            // A fresh session should not inherit a stale tick deadline.
            if !was_playing && session.state == GameState::Playing {
                last_tick = Instant::now();
            }
        }

        // ── Advance game logic on the session's tick interval ─────────────────
        if session.state == GameState::Playing
            && last_tick.elapsed() >= Duration::from_millis(session.tick_ms)
        {
            session = compute::tick(&session, &config, &mut rng);
            last_tick = Instant::now();

            if session.state == GameState::GameOver {
                scores.record(session.score);
                session.high_score = scores.best();
            }
        }

        display::render(out, &session)?;

        let elapsed = frame_start.elapsed();
        if elapsed < FRAME {
            std::thread::sleep(FRAME - elapsed);
        }
    }
}
