//! Terminal match-3 runner (default binary).
//!
//! Interactive play with crossterm input and the framebuffer renderer, or
//! `replay --seed N --swap A:B ...` for a headless JSON-lines event dump.

use std::io;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::{anyhow, Result};
use crossterm::event::{self, Event, KeyEventKind};

use sweet_match::core::{GameConfig, GameState};
use sweet_match::engine::{PacedGame, Pacing};
use sweet_match::input::{handle_key_event, should_quit, Cursor, InputIntent};
use sweet_match::logging::{self, LogConfig};
use sweet_match::replay::{parse_replay_args, run_replay};
use sweet_match::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use sweet_match::types::TICK_MS;

fn main() -> Result<()> {
    logging::init(&LogConfig::from_env()?)?;

    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = GameConfig::from_env().map_err(|e| anyhow!("config: {}", e))?;

    if let Some(replay) = parse_replay_args(&args)? {
        let stdout = io::stdout();
        let summary = run_replay(config, &replay, &mut stdout.lock())?;
        log::info!(
            "replay done: {} swaps, {} events, score {}",
            summary.applied,
            summary.events,
            summary.score
        );
        return Ok(());
    }
    if let Some(extra) = args.first() {
        return Err(anyhow!("unknown command: {}", extra));
    }

    let seed = seed_from_env()?;
    let game = GameState::new(config, seed).map_err(|e| anyhow!("config: {}", e))?;
    log::info!("starting game with seed {}", seed);

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, PacedGame::new(game, Pacing::default()));

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

/// `SWEET_MATCH_SEED`, or the wall clock when unset.
fn seed_from_env() -> Result<u32> {
    match std::env::var("SWEET_MATCH_SEED") {
        Ok(v) if !v.trim().is_empty() => v
            .trim()
            .parse::<u32>()
            .map_err(|_| anyhow!("invalid SWEET_MATCH_SEED: {}", v)),
        _ => Ok(SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
            .unwrap_or(1)),
    }
}

fn run(term: &mut TerminalRenderer, mut game: PacedGame) -> Result<()> {
    let config = game.state().config().clone();
    let view = GameView::for_tiles(&config.tiles);
    let mut cursor = Cursor::new(config.rows, config.cols);
    let mut fb = FrameBuffer::new(0, 0);
    let mut celebrated = false;

    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&game.snapshot(), Some(cursor.index()), Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    let intent = handle_key_event(key).and_then(|action| cursor.apply(action));
                    match intent {
                        Some(InputIntent::PointerSelect(index)) => {
                            game.select(index);
                        }
                        Some(InputIntent::Restart) => {
                            game.restart();
                            celebrated = false;
                        }
                        None => {}
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        // Tick.
        let elapsed = last_tick.elapsed();
        if elapsed >= tick_duration {
            last_tick = Instant::now();
            game.tick(elapsed.as_millis() as u32);

            if !celebrated && game.celebration_due() {
                celebrated = true;
                log::info!("celebration after {} moves", game.state().moves());
            }
        }

        for ev in game.drain_events() {
            if log::log_enabled!(log::Level::Debug) {
                log::debug!("{} {}", ev.name(), serde_json::to_string(&ev)?);
            }
        }
    }
}
