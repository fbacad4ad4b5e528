//! TerminalRenderer: flushes text rows to a real terminal.
//!
//! Owns the terminal lifecycle (raw mode, alternate screen, cursor) so the
//! host can always restore the user's shell on the way out, even after an
//! error. Drawing is a full redraw per frame; the view is small enough that
//! diffing would buy nothing.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::Print,
    terminal::{self, Clear, ClearType},
    QueueableCommand,
};

pub struct TerminalRenderer {
    stdout: io::Stdout,
    buf: Vec<u8>,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            buf: Vec::with_capacity(8 * 1024),
        }
    }

    /// Switch the terminal into game mode
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.flush_buf()?;
        Ok(())
    }

    /// Restore the terminal for the shell
    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Draw the given rows starting at the top-left corner
    pub fn draw(&mut self, rows: &[String]) -> Result<()> {
        self.buf.clear();
        self.buf.queue(Clear(ClearType::All))?;
        for (y, row) in rows.iter().enumerate() {
            self.buf.queue(cursor::MoveTo(0, y as u16))?;
            self.buf.queue(Print(row))?;
        }
        self.flush_buf()?;
        Ok(())
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}
