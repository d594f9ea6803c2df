//! Depth-buffered character canvas.
//!
//! Cells are stored as four parallel buffers (struct-of-arrays) so that bulk
//! passes such as [`Canvas::clear`] and the terminal presenter walk one
//! contiguous slice at a time.

use thiserror::Error;
use tracing::{debug, warn};

use crate::clip::Aabb;
use crate::types::{is_printable_ascii, Rgb, DEFAULT_DEPTH};

/// Reasons a canvas cannot be constructed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CanvasError {
    #[error("canvas dimensions must be non-zero (got {width}x{height})")]
    ZeroDimension { width: u32, height: u32 },

    #[error("canvas dimensions {width}x{height} overflow the cell count")]
    DimensionOverflow { width: u32, height: u32 },

    #[error("default glyph {0:#04x} is not printable ASCII")]
    InvalidGlyph(u8),

    #[error("default depth {0} is outside [0, 1]")]
    InvalidDepth(f32),

    #[error("failed to allocate {cells} canvas cells")]
    Allocation { cells: usize },
}

/// Decoded copy of a single cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellView {
    pub fg: Rgb,
    pub bg: Rgb,
    pub depth: f32,
    pub glyph: u8,
}

/// 2D frame buffer of colored ASCII cells with a per-cell depth test.
#[derive(Debug, Clone)]
pub struct Canvas {
    width: u32,
    height: u32,
    fg: Vec<u32>,
    bg: Vec<u32>,
    depth: Vec<f32>,
    glyph: Vec<u8>,
    default_fg: u32,
    default_bg: u32,
    default_depth: f32,
    default_glyph: u8,
}

impl Canvas {
    /// Create a canvas whose cells start at depth `0.0`.
    pub fn new(
        width: u32,
        height: u32,
        default_fg: Rgb,
        default_bg: Rgb,
        default_glyph: u8,
    ) -> Result<Self, CanvasError> {
        Self::with_default_depth(
            width,
            height,
            default_fg,
            default_bg,
            default_glyph,
            DEFAULT_DEPTH,
        )
    }

    pub fn with_default_depth(
        width: u32,
        height: u32,
        default_fg: Rgb,
        default_bg: Rgb,
        default_glyph: u8,
        default_depth: f32,
    ) -> Result<Self, CanvasError> {
        if width == 0 || height == 0 {
            return Err(CanvasError::ZeroDimension { width, height });
        }
        let cells = (width as usize)
            .checked_mul(height as usize)
            .ok_or(CanvasError::DimensionOverflow { width, height })?;
        if !is_printable_ascii(default_glyph) {
            return Err(CanvasError::InvalidGlyph(default_glyph));
        }
        if !(0.0..=1.0).contains(&default_depth) {
            return Err(CanvasError::InvalidDepth(default_depth));
        }

        // Buffers that were reserved before a failure are dropped on return.
        let mut canvas = Self {
            width,
            height,
            fg: alloc_buffer(cells)?,
            bg: alloc_buffer(cells)?,
            depth: alloc_buffer(cells)?,
            glyph: alloc_buffer(cells)?,
            default_fg: default_fg.encode(),
            default_bg: default_bg.encode(),
            default_depth,
            default_glyph,
        };
        canvas.fg.resize(cells, canvas.default_fg);
        canvas.bg.resize(cells, canvas.default_bg);
        canvas.depth.resize(cells, canvas.default_depth);
        canvas.glyph.resize(cells, canvas.default_glyph);

        debug!(width, height, cells, "canvas created");
        Ok(canvas)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Continuous clip rectangle `[0, W-1] x [0, H-1]`.
    pub fn aabb(&self) -> Aabb {
        Aabb::for_canvas(self.width, self.height)
    }

    /// Reset every cell to the construction defaults.
    pub fn clear(&mut self) {
        self.glyph.fill(self.default_glyph);
        self.fg.fill(self.default_fg);
        self.bg.fill(self.default_bg);
        self.depth.fill(self.default_depth);
    }

    /// Write one cell if `depth` is at least the stored depth.
    ///
    /// Returns `true` when the cell was overwritten. Out-of-range coordinates,
    /// non-printable glyphs and depths outside `[0, 1]` are caller bugs: they
    /// panic in debug builds and are ignored in release builds.
    pub fn plot(&mut self, x: u32, y: u32, depth: f32, fg: Rgb, bg: Rgb, glyph: u8) -> bool {
        debug_assert!(x < self.width, "plot x={x} outside width {}", self.width);
        debug_assert!(y < self.height, "plot y={y} outside height {}", self.height);
        debug_assert!(is_printable_ascii(glyph), "glyph {glyph:#04x} is not printable");
        debug_assert!((0.0..=1.0).contains(&depth), "depth {depth} outside [0, 1]");

        let Some(i) = self.idx(x, y) else {
            warn!(x, y, "plot outside canvas ignored");
            return false;
        };
        if !is_printable_ascii(glyph) {
            warn!(glyph, "plot with non-printable glyph ignored");
            return false;
        }

        if !(0.0..=1.0).contains(&depth) {
            warn!(depth, "plot with depth outside [0, 1] ignored");
            return false;
        }

        if depth < self.depth[i] {
            return false;
        }

        self.glyph[i] = glyph;
        self.fg[i] = fg.encode();
        self.bg[i] = bg.encode();
        self.depth[i] = depth;
        true
    }

    pub fn cell(&self, x: u32, y: u32) -> Option<CellView> {
        self.idx(x, y).map(|i| CellView {
            fg: Rgb::decode(self.fg[i]),
            bg: Rgb::decode(self.bg[i]),
            depth: self.depth[i],
            glyph: self.glyph[i],
        })
    }

    pub fn fg_values(&self) -> &[u32] {
        &self.fg
    }

    pub fn bg_values(&self) -> &[u32] {
        &self.bg
    }

    pub fn depth_values(&self) -> &[f32] {
        &self.depth
    }

    pub fn glyph_values(&self) -> &[u8] {
        &self.glyph
    }

    #[inline(always)]
    fn idx(&self, x: u32, y: u32) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }
}

fn alloc_buffer<T>(cells: usize) -> Result<Vec<T>, CanvasError> {
    let mut buf = Vec::new();
    buf.try_reserve_exact(cells)
        .map_err(|_| CanvasError::Allocation { cells })?;
    Ok(buf)
}
