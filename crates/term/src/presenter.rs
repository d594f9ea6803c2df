//! Presenter: serializes a canvas into 24-bit color escape sequences.
//!
//! This module is pure formatting. It only reads the canvas buffers and
//! writes bytes into any `Write`; it never touches terminal modes.

use std::io::Write;

use anyhow::Result;

use crossterm::{
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    QueueableCommand,
};

use crate::core::Canvas;
use crate::types::Rgb;

/// Which colors are emitted per cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PresentMode {
    /// Foreground and background (`ESC[38;2;..m ESC[48;2;..m`).
    #[default]
    WithBackground,
    /// Foreground only; the terminal's own background shows through.
    ForegroundOnly,
}

/// Canvas-to-bytes encoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Presenter {
    mode: PresentMode,
    newline: &'static str,
    coalesce: bool,
}

impl Default for Presenter {
    fn default() -> Self {
        Self::new(PresentMode::default())
    }
}

impl Presenter {
    pub fn new(mode: PresentMode) -> Self {
        Self {
            mode,
            newline: "\n",
            coalesce: false,
        }
    }

    /// Row terminator. Raw-mode terminals need `"\r\n"`.
    pub fn with_newline(mut self, newline: &'static str) -> Self {
        self.newline = newline;
        self
    }

    /// Skip the color sequences when a cell has the same colors as the
    /// previous one.
    pub fn with_style_coalescing(mut self, coalesce: bool) -> Self {
        self.coalesce = coalesce;
        self
    }

    pub fn mode(&self) -> PresentMode {
        self.mode
    }

    /// Encode every row of `canvas` into `out`, then reset colors and flush.
    pub fn encode_into<W: Write>(&self, canvas: &Canvas, out: &mut W) -> Result<()> {
        let width = canvas.width() as usize;
        let fg = canvas.fg_values();
        let bg = canvas.bg_values();
        let glyphs = canvas.glyph_values();

        let mut current: Option<(u32, u32)> = None;
        for row in 0..canvas.height() as usize {
            let start = row * width;
            for i in start..start + width {
                let style = match self.mode {
                    PresentMode::WithBackground => (fg[i], bg[i]),
                    PresentMode::ForegroundOnly => (fg[i], 0),
                };
                if !self.coalesce || current != Some(style) {
                    out.queue(SetForegroundColor(packed_to_color(fg[i])))?;
                    if self.mode == PresentMode::WithBackground {
                        out.queue(SetBackgroundColor(packed_to_color(bg[i])))?;
                    }
                    current = Some(style);
                }
                out.queue(Print(glyphs[i] as char))?;
            }
            out.queue(Print(self.newline))?;
        }

        out.queue(ResetColor)?;
        out.flush()?;
        Ok(())
    }
}

/// Encode `canvas` with the default row terminator and no style coalescing.
pub fn encode_canvas_into<W: Write>(canvas: &Canvas, mode: PresentMode, out: &mut W) -> Result<()> {
    Presenter::new(mode).encode_into(canvas, out)
}

fn packed_to_color(packed: u32) -> Color {
    let Rgb { r, g, b } = Rgb::decode(packed);
    Color::Rgb { r, g, b }
}
