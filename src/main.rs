//! Terminal ASCII rasterizer demo (default binary).
//!
//! Renders the built-in scenes into a fixed-size canvas and flushes every
//! frame to the alternate screen. Logs go to stderr; set `RUST_LOG` to see
//! them.

use std::io;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use asciirast::config::AppConfig;
use asciirast::core::Canvas;
use asciirast::engine::{Engine, SpiralScene, StarScene};
use asciirast::input::{handle_key_event, should_quit, HeldKeys};
use asciirast::term::TerminalRenderer;
use asciirast::types::color::{BLACK, WHITE};
use asciirast::types::{SceneAction, DEFAULT_GLYPH};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let config = AppConfig::from_env();
    info!(?config, "starting");

    let canvas = Canvas::new(config.width, config.height, WHITE, BLACK, DEFAULT_GLYPH)?;
    let mut engine = Engine::new(canvas, Box::new(StarScene::new()))
        .with_scene(Box::new(SpiralScene::new()));
    if !engine.select_scene(&config.scene) {
        warn!(scene = %config.scene, "unknown scene, keeping {}", engine.scene_name());
    }

    let mut term = TerminalRenderer::new(config.mode);
    term.enter()?;

    let result = run(&mut term, &mut engine, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, engine: &mut Engine, config: &AppConfig) -> Result<()> {
    let frame_duration = Duration::from_millis(config.frame_ms() as u64);
    let mut held = HeldKeys::new();
    let mut last_frame = Instant::now();

    term.draw(engine.render())?;

    loop {
        let timeout = frame_duration
            .checked_sub(last_frame.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => match key.kind {
                    KeyEventKind::Press | KeyEventKind::Repeat => {
                        if should_quit(key) {
                            return Ok(());
                        }
                        match handle_key_event(key) {
                            Some(action @ (SceneAction::RotateLeft | SceneAction::RotateRight)) => {
                                held.press(action);
                            }
                            Some(action) if key.kind == KeyEventKind::Press => {
                                engine.apply_action(action);
                            }
                            _ => {}
                        }
                    }
                    KeyEventKind::Release => {
                        if let Some(action) = handle_key_event(key) {
                            held.release(action);
                        }
                    }
                },
                Event::Resize(..) => term.invalidate()?,
                _ => {}
            }
        }

        // Frame.
        let elapsed = last_frame.elapsed();
        if elapsed >= frame_duration {
            last_frame = Instant::now();
            let dt_ms = elapsed.as_millis().min(u32::MAX as u128) as u32;

            held.update(dt_ms);
            engine.tick(dt_ms, held.rotation());
            term.draw(engine.render())?;
        }
    }
}
