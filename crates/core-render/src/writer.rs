//! Frame writer.
//!
//! A frame is assembled as one append-only byte buffer and handed to the
//! terminal in a single `write_bytes` call, so the terminal never shows a
//! half-drawn screen.

use core_terminal::{Terminal, TerminalError, ansi};

#[derive(Debug, Default)]
pub struct FrameWriter {
    buf: Vec<u8>,
}

impl FrameWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(bytes: usize) -> Self {
        Self {
            buf: Vec::with_capacity(bytes),
        }
    }

    pub fn hide_cursor(&mut self) {
        self.buf.extend_from_slice(ansi::HIDE_CURSOR);
    }

    pub fn show_cursor(&mut self) {
        self.buf.extend_from_slice(ansi::SHOW_CURSOR);
    }

    pub fn home(&mut self) {
        self.buf.extend_from_slice(ansi::CURSOR_HOME);
    }

    /// Position the cursor; `row` and `col` are 1-indexed.
    pub fn move_to(&mut self, row: usize, col: usize) {
        ansi::cursor_to(&mut self.buf, row, col);
    }

    /// Erase the rest of the current line.
    pub fn clear_line(&mut self) {
        self.buf.extend_from_slice(ansi::CLEAR_LINE);
    }

    pub fn inverse(&mut self, on: bool) {
        self.buf
            .extend_from_slice(if on { ansi::INVERSE_ON } else { ansi::INVERSE_OFF });
    }

    pub fn newline(&mut self) {
        self.buf.extend_from_slice(ansi::NEWLINE);
    }

    pub fn print(&mut self, bytes: &[u8]) {
        self.buf.extend_from_slice(bytes);
    }

    pub fn bytes(&self) -> &[u8] {
        &self.buf
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Hand the whole frame to the terminal in one write. Returns the number
    /// of bytes written.
    pub fn flush<T: Terminal + ?Sized>(self, term: &mut T) -> Result<usize, TerminalError> {
        term.write_bytes(&self.buf)?;
        Ok(self.buf.len())
    }
}
