//! TerminalRenderer: flushes a canvas to a real terminal.
//!
//! Every frame is a full redraw from the top-left corner of the alternate
//! screen. The encoded bytes are staged in a reusable buffer and written with
//! a single `write_all`.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{Attribute, ResetColor, SetAttribute},
    terminal, QueueableCommand,
};
use tracing::{debug, info};

use crate::core::Canvas;
use crate::presenter::{PresentMode, Presenter};

pub struct TerminalRenderer {
    stdout: io::Stdout,
    presenter: Presenter,
    buf: Vec<u8>,
    frames: u64,
}

impl TerminalRenderer {
    pub fn new(mode: PresentMode) -> Self {
        Self {
            stdout: io::stdout(),
            // Raw mode disables the implicit carriage return on '\n'.
            presenter: Presenter::new(mode)
                .with_newline("\r\n")
                .with_style_coalescing(true),
            buf: Vec::with_capacity(64 * 1024),
            frames: 0,
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.buf.queue(terminal::Clear(terminal::ClearType::All))?;
        self.flush_buf()?;
        info!(mode = ?self.presenter.mode(), "terminal renderer entered");
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        info!(frames = self.frames, "terminal renderer exited");
        Ok(())
    }

    /// Force the next draw to wipe the screen first.
    ///
    /// Useful on terminal resize events, when the old frame may be larger.
    pub fn invalidate(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(terminal::Clear(terminal::ClearType::All))?;
        self.flush_buf()?;
        debug!("terminal cleared");
        Ok(())
    }

    /// Draw one frame.
    pub fn draw(&mut self, canvas: &Canvas) -> Result<()> {
        self.buf.clear();
        self.buf.queue(cursor::MoveTo(0, 0))?;
        self.presenter.encode_into(canvas, &mut self.buf)?;
        self.flush_buf()?;
        self.frames += 1;
        Ok(())
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}
