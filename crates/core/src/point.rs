//! Single-cell point primitive.

use crate::canvas::Canvas;
use crate::clip::{round_half_up, Point};
use crate::types::Rgb;

/// Round `p` to the nearest cell and plot it if it lies on the canvas.
///
/// Points that round outside the canvas are culled rather than treated as a
/// caller error. Returns whether the depth test was won.
pub fn draw_point(canvas: &mut Canvas, p: Point, depth: f32, fg: Rgb, bg: Rgb, glyph: u8) -> bool {
    let x = round_half_up(p.x);
    let y = round_half_up(p.y);

    if x < 0 || y < 0 || x >= canvas.width() as i64 || y >= canvas.height() as i64 {
        return false;
    }
    canvas.plot(x as u32, y as u32, depth, fg, bg, glyph)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::color::{BLACK, GREEN, WHITE};

    #[test]
    fn point_rounds_half_up() {
        let mut canvas = Canvas::new(3, 3, WHITE, BLACK, b' ').unwrap();
        assert!(draw_point(&mut canvas, Point::new(0.5, 1.49), 0.5, GREEN, BLACK, b'o'));
        assert_eq!(canvas.cell(1, 1).unwrap().glyph, b'o');
    }

    #[test]
    fn point_outside_is_culled() {
        let mut canvas = Canvas::new(3, 3, WHITE, BLACK, b' ').unwrap();
        assert!(!draw_point(&mut canvas, Point::new(-0.6, 1.0), 0.5, GREEN, BLACK, b'o'));
        assert!(!draw_point(&mut canvas, Point::new(2.5, 1.0), 0.5, GREEN, BLACK, b'o'));
        assert!(!draw_point(&mut canvas, Point::new(1.0, 3.0), 0.5, GREEN, BLACK, b'o'));
        assert!(canvas.glyph_values().iter().all(|&g| g == b' '));
    }

    #[test]
    fn point_respects_depth_test() {
        let mut canvas = Canvas::new(2, 2, WHITE, BLACK, b' ').unwrap();
        assert!(draw_point(&mut canvas, Point::new(0.0, 0.0), 0.9, GREEN, BLACK, b'a'));
        assert!(!draw_point(&mut canvas, Point::new(0.2, 0.2), 0.1, GREEN, BLACK, b'b'));
        assert_eq!(canvas.cell(0, 0).unwrap().glyph, b'a');
    }
}
