//! Terminal runner (default binary).
//!
//! The host loop: latch at most one input per tick, call `tick()` on a fixed
//! cadence, and redraw between ticks. All gameplay rules live in the core;
//! this file only wires the collaborators together.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use cubewell::core::GameLogic;
use cubewell::highscore::HighScoreStore;
use cubewell::input::{handle_key_event, should_quit, should_restart};
use cubewell::term::{GameView, TerminalRenderer};
use cubewell::types::TICK_MS;

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let mut game = GameLogic::new(wall_clock_seed());
    let view = GameView::new();
    let store = HighScoreStore::new(HighScoreStore::default_path());
    let mut best = store.load();
    let mut best_recorded = false;

    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS);

    loop {
        // Render between ticks; the view reads core state without mutating it.
        let rows = view.render(&game, Some(best));
        term.draw(&rows)?;

        // Input with timeout until next tick. Multiple key events between
        // ticks overwrite the latch: last key wins.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if should_restart(key) {
                        game.new_game();
                        best_recorded = false;
                    } else if let Some(action) = handle_key_event(key) {
                        game.queue_input(action);
                    }
                }
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            game.tick();

            if game.is_over() && !best_recorded {
                // A failed write keeps the in-memory best; the game goes on.
                if let Ok(new_best) = store.record(game.score()) {
                    best = new_best;
                }
                best_recorded = true;
            }
        }
    }
}

/// Seed the piece sequence from wall-clock time so every run differs.
fn wall_clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as u32)
        .unwrap_or(1)
}
