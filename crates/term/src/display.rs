//! Display targets for rendered frames.
//!
//! The driver only needs two capabilities: clear the visible area and write
//! a frame. [`TerminalDisplay`] does this with crossterm escape sequences;
//! [`MemoryDisplay`] records calls for tests.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{cursor, style::Print, terminal, QueueableCommand};

/// Something frames can be shown on.
pub trait Display {
    /// Clear the visible area and home the cursor.
    fn clear(&mut self) -> Result<()>;

    /// Show one rendered frame.
    fn write_frame(&mut self, frame: &str) -> Result<()>;
}

/// Terminal display over any writer (stdout by default).
///
/// No raw mode and no alternate screen: the process can be killed at any
/// point without leaving terminal state to restore.
pub struct TerminalDisplay<W: Write = io::Stdout> {
    out: W,
}

impl TerminalDisplay<io::Stdout> {
    pub fn new() -> Self {
        Self { out: io::stdout() }
    }
}

impl Default for TerminalDisplay<io::Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> TerminalDisplay<W> {
    pub fn with_writer(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Display for TerminalDisplay<W> {
    fn clear(&mut self) -> Result<()> {
        self.out.queue(terminal::Clear(terminal::ClearType::All))?;
        self.out.queue(cursor::MoveTo(0, 0))?;
        self.out.flush()?;
        Ok(())
    }

    fn write_frame(&mut self, frame: &str) -> Result<()> {
        self.out.queue(Print(frame))?;
        self.out.flush()?;
        Ok(())
    }
}

/// A recorded display call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayEvent {
    Clear,
    Frame(String),
}

/// In-memory display that records every call in order.
#[derive(Debug, Default)]
pub struct MemoryDisplay {
    events: Vec<DisplayEvent>,
}

impl MemoryDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[DisplayEvent] {
        &self.events
    }

    /// Frames written so far, oldest first.
    pub fn frames(&self) -> impl Iterator<Item = &str> + '_ {
        self.events.iter().filter_map(|e| match e {
            DisplayEvent::Frame(f) => Some(f.as_str()),
            DisplayEvent::Clear => None,
        })
    }

    pub fn clear_count(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, DisplayEvent::Clear))
            .count()
    }
}

impl Display for MemoryDisplay {
    fn clear(&mut self) -> Result<()> {
        self.events.push(DisplayEvent::Clear);
        Ok(())
    }

    fn write_frame(&mut self, frame: &str) -> Result<()> {
        self.events.push(DisplayEvent::Frame(frame.to_owned()));
        Ok(())
    }
}
