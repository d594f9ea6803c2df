//! Pentagram with labelled tips.

use crate::context::{rotate, SceneContext};
use crate::core::{draw_line, draw_point, Canvas, Point, Segment};
use crate::scenes::{slope_glyph, ROTATE_DEG_PER_MS};
use crate::types::color::{BLACK, GREEN, WHITE};
use crate::types::SceneAction;
use crate::Scene;

const TIPS: usize = 5;
const TIP_STEP_DEG: f32 = 144.0;
const MIN_ZOOM: f32 = 0.1;
const MAX_ZOOM: f32 = 1.5;
const ZOOM_STEP: f32 = 0.1;

/// Labels sit above edges, which sit above the underscores.
const LABEL_DEPTH: f32 = 1.0;
const EDGE_DEPTH: f32 = 0.5;
const UNDERLINE_DEPTH: f32 = 0.0;

#[derive(Debug, Clone)]
pub struct StarScene {
    angle_deg: f32,
    zoom: f32,
}

impl Default for StarScene {
    fn default() -> Self {
        Self {
            angle_deg: 0.0,
            zoom: 0.6,
        }
    }
}

impl StarScene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn angle_deg(&self) -> f32 {
        self.angle_deg
    }

    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    /// Tip positions in normalized device coordinates.
    pub fn tips(&self) -> [Point; TIPS] {
        let base = Point::new(self.zoom, -self.zoom);
        std::array::from_fn(|l| {
            rotate(base, (self.angle_deg + TIP_STEP_DEG * l as f32).to_radians())
        })
    }
}

impl Scene for StarScene {
    fn name(&self) -> &'static str {
        "star"
    }

    fn on_action(&mut self, action: SceneAction) {
        match action {
            SceneAction::ZoomIn => self.zoom = (self.zoom + ZOOM_STEP).min(MAX_ZOOM),
            SceneAction::ZoomOut => self.zoom = (self.zoom - ZOOM_STEP).max(MIN_ZOOM),
            _ => {}
        }
    }

    fn update(&mut self, ctx: &SceneContext, dt_ms: u32) {
        self.angle_deg -= ctx.rotation_input as f32 * ROTATE_DEG_PER_MS * dt_ms as f32;
        self.angle_deg = self.angle_deg.rem_euclid(360.0);
    }

    fn render(&self, ctx: &SceneContext, canvas: &mut Canvas) {
        let tips = self.tips().map(|p| ctx.to_pixel(p));
        let label_fg = GREEN.scale(0.7);

        for (l, &tip) in tips.iter().enumerate() {
            let next = tips[(l + 1) % TIPS];
            let glyph = slope_glyph(next.x - tip.x, next.y - tip.y);
            draw_line(
                canvas,
                &Segment::new(tip, next, EDGE_DEPTH, WHITE, BLACK, glyph),
            );

            draw_point(canvas, tip, LABEL_DEPTH, label_fg, BLACK, b'0' + l as u8);
            draw_point(canvas, Point::new(tip.x - 1.0, tip.y), LABEL_DEPTH, WHITE, BLACK, b'[');
            draw_point(canvas, Point::new(tip.x + 1.0, tip.y), LABEL_DEPTH, WHITE, BLACK, b']');
            draw_point(canvas, Point::new(tip.x, tip.y + 1.0), UNDERLINE_DEPTH, WHITE, BLACK, b'_');
        }
    }
}
