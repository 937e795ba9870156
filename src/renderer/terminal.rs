//! Differential terminal renderer for fullscreen mode.
//!
//! Compares the current frame to the previous one line by line and only
//! rewrites lines that changed. Output is queued and flushed once per frame.
//!
//! # Algorithm
//!
//! 1. For each row up to the taller of the two frames:
//!    - unchanged line: skip
//!    - otherwise: move to the row, clear it, write the new line
//! 2. Flush (single syscall)
//! 3. Store the frame as previous for the next comparison

use std::io::{self, Stdout, Write};

use crossterm::style::{Attribute, Print, SetAttribute};
use crossterm::terminal::{self, ClearType};
use crossterm::{cursor, queue};

use super::frame::{Frame, Line};
use crate::types::Attr;

/// Differential renderer writing to stdout.
pub struct TerminalRenderer {
    out: Stdout,
    previous: Option<Frame>,
}

impl TerminalRenderer {
    /// Create a new renderer.
    pub fn new() -> Self {
        Self {
            out: io::stdout(),
            previous: None,
        }
    }

    /// Render a frame, rewriting only changed lines.
    ///
    /// Returns true if any line was written.
    pub fn render(&mut self, frame: &Frame) -> io::Result<bool> {
        let rows = changed_rows(self.previous.as_ref(), frame);

        for &row in &rows {
            let Ok(y) = u16::try_from(row) else {
                break;
            };
            queue!(
                self.out,
                cursor::MoveTo(0, y),
                terminal::Clear(ClearType::CurrentLine)
            )?;
            if let Some(line) = frame.lines().get(row) {
                write_line(&mut self.out, line)?;
            }
        }
        self.out.flush()?;

        self.previous = Some(frame.clone());
        Ok(!rows.is_empty())
    }

    /// Invalidate the previous frame.
    ///
    /// Next render will be a full redraw.
    pub fn invalidate(&mut self) {
        self.previous = None;
    }

    /// Check if we have a previous frame to diff against.
    pub fn has_previous(&self) -> bool {
        self.previous.is_some()
    }

    /// Enter raw mode and the alternate screen.
    pub fn enter_fullscreen(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        queue!(
            self.out,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            terminal::Clear(ClearType::All)
        )?;
        self.out.flush()?;
        self.invalidate();
        Ok(())
    }

    /// Leave the alternate screen and raw mode.
    pub fn exit_fullscreen(&mut self) -> io::Result<()> {
        queue!(
            self.out,
            SetAttribute(Attribute::Reset),
            cursor::Show,
            terminal::LeaveAlternateScreen
        )?;
        self.out.flush()?;
        terminal::disable_raw_mode()
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Rows addressable by the terminal cursor.
const MAX_ROWS: usize = u16::MAX as usize + 1;

/// Rows that must be rewritten to turn `previous` into `next`.
///
/// Rows past [`MAX_ROWS`] are never drawn.
fn changed_rows(previous: Option<&Frame>, next: &Frame) -> Vec<usize> {
    let Some(previous) = previous else {
        return (0..next.height().min(MAX_ROWS)).collect();
    };
    let rows = previous.height().max(next.height()).min(MAX_ROWS);
    (0..rows)
        .filter(|&row| previous.lines().get(row) != next.lines().get(row))
        .collect()
}

fn write_line(out: &mut impl Write, line: &Line) -> io::Result<()> {
    for attribute in attributes(line.attrs) {
        queue!(out, SetAttribute(attribute))?;
    }
    queue!(out, Print(&line.text), SetAttribute(Attribute::Reset))
}

fn attributes(attrs: Attr) -> Vec<Attribute> {
    let table = [
        (Attr::BOLD, Attribute::Bold),
        (Attr::DIM, Attribute::Dim),
        (Attr::ITALIC, Attribute::Italic),
        (Attr::UNDERLINE, Attribute::Underlined),
        (Attr::INVERSE, Attribute::Reverse),
    ];
    table
        .into_iter()
        .filter(|(flag, _)| attrs.contains(*flag))
        .map(|(_, attribute)| attribute)
        .collect()
}

// =============================================================================
// Tests
// =============================================================================
