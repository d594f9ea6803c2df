//! Terminal presentation layer.
//!
//! The rasterizer core never performs I/O. This crate turns a finished
//! [`Canvas`](crate::core::Canvas) into 24-bit color escape sequences and
//! manages the terminal modes needed to show frames in place.
//!
//! - [`presenter`]: pure canvas-to-bytes encoding, testable against a `Vec<u8>`
//! - [`renderer`]: raw mode, alternate screen and per-frame flushing to stdout

pub mod presenter;
pub mod renderer;

pub use asciirast_core as core;
pub use asciirast_types as types;

pub use presenter::{encode_canvas_into, PresentMode, Presenter};
pub use renderer::TerminalRenderer;
