//! Frame loop state: canvas, scene list and timing.

use tracing::{debug, info};

use crate::context::SceneContext;
use crate::core::Canvas;
use crate::scene::Scene;
use crate::types::SceneAction;

/// Owns the canvas and drives the active scene through
/// `clear -> update -> render` once per frame.
pub struct Engine {
    canvas: Canvas,
    scenes: Vec<Box<dyn Scene>>,
    current: usize,
    paused: bool,
    frame: u64,
    elapsed_ms: u64,
    rotation_input: i32,
}

impl Engine {
    pub fn new(canvas: Canvas, first: Box<dyn Scene>) -> Self {
        info!(scene = first.name(), "engine started");
        Self {
            canvas,
            scenes: vec![first],
            current: 0,
            paused: false,
            frame: 0,
            elapsed_ms: 0,
            rotation_input: 0,
        }
    }

    pub fn with_scene(mut self, scene: Box<dyn Scene>) -> Self {
        self.scenes.push(scene);
        self
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn scene_name(&self) -> &'static str {
        self.scenes[self.current].name()
    }

    pub fn scene_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.scenes.iter().map(|s| s.name())
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn context(&self) -> SceneContext {
        SceneContext {
            width: self.canvas.width(),
            height: self.canvas.height(),
            frame: self.frame,
            elapsed_ms: self.elapsed_ms,
            rotation_input: self.rotation_input,
        }
    }

    /// Switch to the scene called `name`. Returns false if none matches.
    pub fn select_scene(&mut self, name: &str) -> bool {
        match self.scenes.iter().position(|s| s.name() == name) {
            Some(i) => {
                self.current = i;
                info!(scene = name, "scene selected");
                true
            }
            None => false,
        }
    }

    pub fn apply_action(&mut self, action: SceneAction) {
        match action {
            SceneAction::NextScene => {
                self.current = (self.current + 1) % self.scenes.len();
                info!(scene = self.scene_name(), "scene switched");
            }
            SceneAction::TogglePause => {
                self.paused = !self.paused;
                debug!(paused = self.paused, "pause toggled");
            }
            _ => self.scenes[self.current].on_action(action),
        }
    }

    /// Advance the active scene by `dt_ms` with the given held rotation.
    pub fn tick(&mut self, dt_ms: u32, rotation_input: i32) {
        self.rotation_input = rotation_input.signum();
        if self.paused {
            return;
        }
        self.elapsed_ms += dt_ms as u64;
        let ctx = self.context();
        self.scenes[self.current].update(&ctx, dt_ms);
    }

    /// Clear the canvas and render the active scene into it.
    pub fn render(&mut self) -> &Canvas {
        let ctx = self.context();
        self.canvas.clear();
        self.scenes[self.current].render(&ctx, &mut self.canvas);
        self.frame += 1;
        &self.canvas
    }
}
