//! Per-frame context handed to scene callbacks.

use crate::core::Point;

/// Read-only view of the frame being produced.
///
/// Scenes receive this explicitly instead of reaching into shared engine
/// state, so a scene can be driven headlessly in tests.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneContext {
    pub width: u32,
    pub height: u32,
    pub frame: u64,
    pub elapsed_ms: u64,
    /// Held rotation input: `-1` left, `1` right, `0` none.
    pub rotation_input: i32,
}

impl SceneContext {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            frame: 0,
            elapsed_ms: 0,
            rotation_input: 0,
        }
    }

    /// Terminal cells are roughly twice as tall as they are wide.
    pub fn aspect_ratio(&self) -> f32 {
        self.width as f32 / (2.0 * self.height as f32)
    }

    /// Map normalized device coordinates (`[-1, 1]`, +y up) to continuous
    /// pixel coordinates (`[0, W-1] x [0, H-1]`, row 0 at the top).
    pub fn to_pixel(&self, ndc: Point) -> Point {
        let max_x = self.width.saturating_sub(1) as f32;
        let max_y = self.height.saturating_sub(1) as f32;
        Point::new(
            (ndc.x + 1.0) * 0.5 * max_x,
            (1.0 - (ndc.y + 1.0) * 0.5) * max_y,
        )
    }
}

/// Rotate `p` around the origin by `radians`.
pub fn rotate(p: Point, radians: f32) -> Point {
    let (sin, cos) = radians.sin_cos();
    Point::new(p.x * cos - p.y * sin, p.x * sin + p.y * cos)
}
