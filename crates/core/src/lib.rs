//! Rasterization core - canvas, clipper and line rasterizer
//!
//! This crate holds the numerically delicate part of the renderer. It has
//! **no I/O**: it writes into an in-memory [`Canvas`] that a presenter
//! (see `asciirast-term`) later serializes to the terminal.
//!
//! # Module Structure
//!
//! - [`canvas`]: struct-of-arrays frame buffer with a per-cell depth test
//! - [`clip`]: Cohen-Sutherland segment clipping in continuous pixel space
//! - [`line`]: integer Bresenham rasterization over all eight octants
//! - [`point`]: single-cell point primitive
//!
//! # Depth Test
//!
//! Depths are `f32` in `[0, 1]`. A write replaces a cell when its depth is
//! greater than or equal to the stored depth, so larger values are nearer
//! and ties go to the most recent write. Cleared cells hold the canvas's
//! default depth (`0.0` unless configured).
//!
//! # Example
//!
//! ```
//! use asciirast_core::{draw_line, Canvas, Point, Segment};
//! use asciirast_core::types::color::{BLACK, WHITE};
//!
//! let mut canvas = Canvas::new(4, 4, WHITE, BLACK, b' ').unwrap();
//! let seg = Segment::new(Point::new(0.0, 0.0), Point::new(3.0, 3.0), 0.5, WHITE, BLACK, b'\\');
//!
//! assert_eq!(draw_line(&mut canvas, &seg), 4);
//! assert_eq!(canvas.cell(2, 2).unwrap().glyph, b'\\');
//! assert_eq!(canvas.cell(2, 1).unwrap().glyph, b' ');
//! ```

pub mod canvas;
pub mod clip;
pub mod line;
pub mod point;

pub use asciirast_types as types;

// Re-export commonly used types for convenience
pub use canvas::{Canvas, CanvasError, CellView};
pub use clip::{round_half_up, Aabb, Point};
pub use line::{draw_line, rasterize_line, Segment};
pub use point::draw_point;
