//! Full-screen redraw through `crossterm` commands.
//!
//! Commands are queued on the caller's writer and go out with its next flush.

use std::io::Write;

use crossterm::{
    cursor::MoveTo,
    queue,
    terminal::{Clear, ClearType},
};

/// Erase the screen.
pub fn clear<W: Write>(out: &mut W) -> std::io::Result<()> {
    queue!(*out, Clear(ClearType::All))
}

/// Move the cursor to the 0-indexed `(row, col)`.
pub fn set_cursor<W: Write>(out: &mut W, row: u16, col: u16) -> std::io::Result<()> {
    queue!(*out, MoveTo(col, row))
}
