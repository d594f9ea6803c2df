//! Six spiral arms fading from red to yellow.

use crate::context::{rotate, SceneContext};
use crate::core::{draw_line, draw_point, Canvas, Point, Segment};
use crate::scenes::{ROTATE_DEG_PER_MS, SHORT_PALETTE};
use crate::types::color::{BLACK, RED, YELLOW};
use crate::types::{Rgb, SceneAction};
use crate::Scene;

const ARMS: usize = 6;
const POINTS_PER_ARM: usize = 7;
const ARM_STEP_DEG: f32 = 60.0;
const POINT_STEP_DEG: f32 = 20.0;
const DEFAULT_SPIN_DEG_PER_MS: f32 = 0.03;

#[derive(Debug, Clone)]
pub struct SpiralScene {
    angle_deg: f32,
    spin_deg_per_ms: f32,
}

impl Default for SpiralScene {
    fn default() -> Self {
        Self {
            angle_deg: 0.0,
            spin_deg_per_ms: DEFAULT_SPIN_DEG_PER_MS,
        }
    }
}

impl SpiralScene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn angle_deg(&self) -> f32 {
        self.angle_deg
    }

    pub fn with_spin(mut self, spin_deg_per_ms: f32) -> Self {
        self.spin_deg_per_ms = spin_deg_per_ms;
        self
    }

    /// Point `i` of arm `o` in normalized device coordinates.
    fn arm_point(&self, o: usize, i: usize) -> Point {
        let r = 0.6 - 0.1 * i as f32;
        let deg = self.angle_deg - POINT_STEP_DEG * i as f32 - ARM_STEP_DEG * o as f32;
        rotate(Point::new(r, r), deg.to_radians())
    }
}

fn lerp_color(a: Rgb, b: Rgb, t: f32) -> Rgb {
    let ch = |x: u8, y: u8| (x as f32 + (y as f32 - x as f32) * t).round() as u8;
    Rgb::new(ch(a.r, b.r), ch(a.g, b.g), ch(a.b, b.b))
}

impl Scene for SpiralScene {
    fn name(&self) -> &'static str {
        "spiral"
    }

    fn on_action(&mut self, action: SceneAction) {
        // Space pauses at the engine level; zoom keys change the spin speed.
        match action {
            SceneAction::ZoomIn => self.spin_deg_per_ms *= 1.5,
            SceneAction::ZoomOut => self.spin_deg_per_ms /= 1.5,
            _ => {}
        }
    }

    fn update(&mut self, ctx: &SceneContext, dt_ms: u32) {
        let held = -(ctx.rotation_input as f32) * ROTATE_DEG_PER_MS;
        self.angle_deg += (self.spin_deg_per_ms + held) * dt_ms as f32;
        self.angle_deg = self.angle_deg.rem_euclid(360.0);
    }

    fn render(&self, ctx: &SceneContext, canvas: &mut Canvas) {
        for o in 0..ARMS {
            let mut prev: Option<Point> = None;
            for i in 0..POINTS_PER_ARM {
                let t = i as f32 / (POINTS_PER_ARM - 1) as f32;
                let fg = lerp_color(RED, YELLOW, t);
                let p = ctx.to_pixel(self.arm_point(o, i));

                // Outer points are nearer than the inner ones.
                let depth = 1.0 - 0.5 * t;
                if let Some(q) = prev {
                    let seg = Segment::new(q, p, depth * 0.5, fg.scale(0.5), BLACK, b'.');
                    draw_line(canvas, &seg);
                }
                draw_point(canvas, p, depth, fg, BLACK, SHORT_PALETTE[i]);
                prev = Some(p);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::color::WHITE;

    #[test]
    fn spins_without_input() {
        let ctx = SceneContext::new(40, 20);
        let mut scene = SpiralScene::new().with_spin(0.1);
        scene.update(&ctx, 100);
        assert!((scene.angle_deg() - 10.0).abs() < 1e-4);
    }

    #[test]
    fn renders_palette_glyphs() {
        let ctx = SceneContext::new(60, 30);
        let mut canvas = Canvas::new(60, 30, WHITE, BLACK, b' ').unwrap();
        SpiralScene::new().render(&ctx, &mut canvas);

        let glyphs = canvas.glyph_values();
        assert!(glyphs.contains(&b'@'));
        assert!(glyphs.contains(&b'.'));
    }

    #[test]
    fn color_lerp_endpoints() {
        assert_eq!(lerp_color(RED, YELLOW, 0.0), RED);
        assert_eq!(lerp_color(RED, YELLOW, 1.0), YELLOW);
        assert_eq!(lerp_color(RED, YELLOW, 0.5), Rgb::new(255, 128, 0));
    }
}
