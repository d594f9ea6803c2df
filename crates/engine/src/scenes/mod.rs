//! Built-in demo scenes.

pub mod spiral;
pub mod star;

pub use spiral::SpiralScene;
pub use star::StarScene;

/// Ordered from dense to sparse.
pub const SHORT_PALETTE: &[u8] = b"@%#*+=-:. ";

/// Degrees of rotation per millisecond of held input.
pub(crate) const ROTATE_DEG_PER_MS: f32 = 0.1;

/// Pick a line glyph that follows the slope of `dx, dy` in pixel space.
pub fn slope_glyph(dx: f32, dy: f32) -> u8 {
    let (ax, ay) = (dx.abs(), dy.abs());
    if ay * 2.0 < ax {
        b'-'
    } else if ax * 2.0 < ay {
        b'|'
    } else if (dx > 0.0) == (dy > 0.0) {
        // Pixel y grows downwards.
        b'\\'
    } else {
        b'/'
    }
}
