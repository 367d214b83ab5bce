//! Terminal runner (default binary).
//!
//! Renders the engine, polls at most one key per iteration and fires gravity
//! when the fall interval has elapsed. On game over it shows the final score
//! and waits for one key before exiting.

use std::time::{Duration, Instant};

use anyhow::Result;
use tracing::info;

use termtris::core::{Engine, SeededPieces};
use termtris::input::{poll_key, wait_for_key, KeyInput};
use termtris::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use termtris::types::FRAME_MS;
use termtris::{logging, GameConfig};

fn main() -> Result<()> {
    let config = GameConfig::from_env()?;
    logging::init(&config)?;

    let seed = config.resolve_seed();
    info!(seed, width = config.width, height = config.height, "starting game");
    let mut engine = Engine::new(config.width, config.height, SeededPieces::new(seed));

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut engine);

    // Always try to restore terminal state.
    let _ = term.exit();

    info!(score = engine.score(), lines = engine.lines(), "game finished");
    result
}

fn viewport() -> Viewport {
    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    Viewport::new(w, h)
}

fn run(term: &mut TerminalRenderer, engine: &mut Engine<SeededPieces>) -> Result<()> {
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut last_fall = Instant::now();

    while !engine.game_over() {
        view.render_into(engine, viewport(), &mut fb);
        term.draw(&fb)?;

        // Wait for input, but never past the next gravity step.
        let timeout = engine
            .fall_interval()
            .saturating_sub(last_fall.elapsed())
            .min(Duration::from_millis(FRAME_MS as u64));

        match poll_key(timeout)? {
            Some(KeyInput::Quit) => {
                info!("quit requested");
                return Ok(());
            }
            Some(KeyInput::Action(action)) => engine.apply_action(action),
            Some(KeyInput::Ignored) | None => {}
        }

        if last_fall.elapsed() > engine.fall_interval() {
            engine.tick();
            last_fall = Instant::now();
        }
    }

    let board = engine.board();
    view.render_game_over_into(
        engine.score(),
        board.width(),
        board.height(),
        viewport(),
        &mut fb,
    );
    term.draw(&fb)?;
    wait_for_key()
}
