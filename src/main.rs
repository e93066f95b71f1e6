//! Hex map viewer (default binary).
//!
//! Builds the board once, then runs a fixed 30 Hz loop: read keys, step the
//! viewport, redraw only when the view changed.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use hexwar::core::{Board, SimpleRng, Tileset, Viewport};
use hexwar::input::{should_quit, ScrollInput};
use hexwar::term::{FrameBuffer, MapLayout, MapView, TermSize, TerminalRenderer};
use hexwar::types::{
    HEX_HEIGHT, HEX_SHORT_WIDTH, HEX_WIDTH, TERRAIN_PALETTE, TICK_MS, TILE_KEY_COLOR,
};
use hexwar::{logging, AppConfig};

fn main() -> Result<()> {
    let config = AppConfig::from_env()?;
    logging::init(&config)?;

    let tiles = Tileset::generated(
        HEX_WIDTH,
        HEX_HEIGHT,
        HEX_SHORT_WIDTH,
        &TERRAIN_PALETTE,
        TILE_KEY_COLOR,
    )?;
    let grid = config.grid()?;
    let board = Board::new(grid, &tiles, &mut SimpleRng::new(config.seed))?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &board, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    if let Err(err) = &result {
        log::error!("viewer stopped: {err:#}");
    }
    result
}

fn run(term: &mut TerminalRenderer, board: &Board, config: &AppConfig) -> Result<()> {
    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    let mut layout = MapLayout::for_terminal(TermSize::new(w, h), config.panel_cols);
    let (visible_w, visible_h) = layout.visible_pixels();
    let mut viewport = Viewport::new(board.grid().pixel_size(), visible_w, visible_h);

    // With release events the held-key timeout would only add lag.
    let mut input = if term.key_release_events() {
        ScrollInput::new().without_release_timeout()
    } else {
        ScrollInput::new()
    };

    let view = MapView::new();
    let mut fb = FrameBuffer::new(w, h);

    let tick_duration = Duration::from_millis(TICK_MS as u64);
    let mut last_tick = Instant::now();
    let mut force_redraw = true;

    loop {
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => match key.kind {
                    KeyEventKind::Press | KeyEventKind::Repeat => {
                        if should_quit(key) {
                            return Ok(());
                        }
                        input.handle_key_press(key.code);
                    }
                    KeyEventKind::Release => input.handle_key_release(key.code),
                },
                Event::Resize(w, h) => {
                    layout = MapLayout::for_terminal(TermSize::new(w, h), config.panel_cols);
                    let (visible_w, visible_h) = layout.visible_pixels();
                    viewport.resize(visible_w, visible_h);
                    term.invalidate();
                    force_redraw = true;
                    log::debug!("terminal resized to {w}x{h}");
                }
                Event::FocusLost => input.clear(),
                _ => {}
            }
        }

        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            input.tick(TICK_MS);

            if viewport.step(input.intent(), force_redraw) {
                view.render_into(board, &viewport, layout, &mut fb);
                term.draw_swap(&mut fb)?;
            }
            force_redraw = false;
        }
    }
}
