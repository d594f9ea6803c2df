//! Line segments: clipping, rounding and Bresenham rasterization.

use crate::canvas::Canvas;
use crate::clip::{round_half_up, Point};
use crate::types::Rgb;

/// A line segment in continuous pixel space with constant attributes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub p0: Point,
    pub p1: Point,
    pub depth: f32,
    pub fg: Rgb,
    pub bg: Rgb,
    pub glyph: u8,
}

impl Segment {
    pub fn new(p0: Point, p1: Point, depth: f32, fg: Rgb, bg: Rgb, glyph: u8) -> Self {
        Self {
            p0,
            p1,
            depth,
            fg,
            bg,
            glyph,
        }
    }
}

/// Clip `seg` against the canvas, round its endpoints and plot every cell.
///
/// Returns the number of cells visited (zero when the segment was rejected).
pub fn draw_line(canvas: &mut Canvas, seg: &Segment) -> usize {
    let Some((p0, p1)) = canvas.aabb().clip(seg.p0, seg.p1) else {
        return 0;
    };

    // The clip box is f32, so past 2^24 an edge can round one cell outward.
    let max_x = canvas.width() as i64 - 1;
    let max_y = canvas.height() as i64 - 1;
    let (x0, y0) = (round_half_up(p0.x).clamp(0, max_x), round_half_up(p0.y).clamp(0, max_y));
    let (x1, y1) = (round_half_up(p1.x).clamp(0, max_x), round_half_up(p1.y).clamp(0, max_y));

    let mut visited = 0;
    rasterize_line(x0, y0, x1, y1, |x, y| {
        canvas.plot(x as u32, y as u32, seg.depth, seg.fg, seg.bg, seg.glyph);
        visited += 1;
    });
    visited
}

/// Visit every cell of the integer segment `(x0, y0)-(x1, y1)`.
///
/// The visited set does not depend on endpoint order. Both endpoints are
/// always visited; a zero-length segment visits exactly one cell.
pub fn rasterize_line(x0: i64, y0: i64, x1: i64, y1: i64, mut plot: impl FnMut(i64, i64)) {
    if (y1 - y0).abs() < (x1 - x0).abs() {
        // x-major: step left to right.
        let (x0, y0, x1, y1) = if x0 <= x1 { (x0, y0, x1, y1) } else { (x1, y1, x0, y0) };
        if y0 == y1 {
            for x in x0..=x1 {
                plot(x, y0);
            }
        } else {
            step_major(x0, y0, x1, y1, |major, minor| plot(major, minor));
        }
    } else {
        // y-major: step bottom to top.
        let (x0, y0, x1, y1) = if y0 <= y1 { (x0, y0, x1, y1) } else { (x1, y1, x0, y0) };
        if x0 == x1 {
            for y in y0..=y1 {
                plot(x0, y);
            }
        } else {
            step_major(y0, x0, y1, x1, |major, minor| plot(minor, major));
        }
    }
}

/// Bresenham stepping along a major axis with `major0 <= major1` and
/// `|minor1 - minor0| <= major1 - major0`.
#[inline]
fn step_major(
    major0: i64,
    minor0: i64,
    major1: i64,
    minor1: i64,
    mut plot: impl FnMut(i64, i64),
) {
    let d_major = major1 - major0;
    let d_minor_signed = minor1 - minor0;
    let dir = if d_minor_signed < 0 { -1 } else { 1 };
    let d_minor = d_minor_signed.abs();

    debug_assert!(d_major >= d_minor);

    let mut minor = minor0;
    let mut d = 2 * d_minor - d_major;
    for major in major0..=major1 {
        plot(major, minor);
        if d > 0 {
            minor += dir;
            d -= 2 * d_major;
        }
        d += 2 * d_minor;
    }
}
