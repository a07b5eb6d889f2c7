//! Editor modes.
//!
//! `Mode` is a tagged enum: each variant carries only the data its key
//! interpretation needs. Normal mode remembers a pending prefix byte (the
//! first `g` of `gg`); Command mode owns the accumulating command line and
//! the cursor it will restore on exit.

use crate::Cursor;

/// Upper bound on accumulated command bytes.
pub const COMMAND_CAPACITY: usize = 80;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Normal { pending: Option<u8> },
    Insert,
    Command(CommandLine),
}

impl Default for Mode {
    fn default() -> Self {
        Mode::normal()
    }
}

impl Mode {
    pub const fn normal() -> Self {
        Mode::Normal { pending: None }
    }

    /// Message-bar label. Command mode shows only the `:` prompt.
    pub fn label(&self) -> &'static str {
        match self {
            Mode::Normal { .. } => "-- NORMAL --",
            Mode::Insert => "-- INSERT --",
            Mode::Command(_) => ":",
        }
    }

    pub fn is_normal(&self) -> bool {
        matches!(self, Mode::Normal { .. })
    }

    pub fn is_insert(&self) -> bool {
        matches!(self, Mode::Insert)
    }

    pub fn command_line(&self) -> Option<&CommandLine> {
        match self {
            Mode::Command(cl) => Some(cl),
            _ => None,
        }
    }

    pub fn command_line_mut(&mut self) -> Option<&mut CommandLine> {
        match self {
            Mode::Command(cl) => Some(cl),
            _ => None,
        }
    }
}

/// Returned when a byte would grow the command line past `COMMAND_CAPACITY`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandLineFull;

/// Command-line capture. Bytes typed here never reach the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    buf: Vec<u8>,
    saved: Cursor,
}

impl CommandLine {
    pub fn new(saved: Cursor) -> Self {
        Self {
            buf: Vec::with_capacity(COMMAND_CAPACITY),
            saved,
        }
    }

    pub fn bytes(&self) -> &[u8] {
        &self.buf
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Cursor position captured on entering Command mode.
    pub fn saved(&self) -> Cursor {
        self.saved
    }

    pub fn push(&mut self, byte: u8) -> Result<(), CommandLineFull> {
        if self.buf.len() >= COMMAND_CAPACITY {
            return Err(CommandLineFull);
        }
        self.buf.push(byte);
        Ok(())
    }

    pub fn backspace(&mut self) -> Option<u8> {
        self.buf.pop()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_match_message_bar_text() {
        assert_eq!(Mode::normal().label(), "-- NORMAL --");
        assert_eq!(Mode::Insert.label(), "-- INSERT --");
        assert_eq!(
            Mode::Command(CommandLine::new(Cursor::default())).label(),
            ":"
        );
    }

    #[test]
    fn pending_prefix_is_still_normal() {
        let m = Mode::Normal {
            pending: Some(b'g'),
        };
        assert!(m.is_normal());
        assert_eq!(m.label(), "-- NORMAL --");
    }

    #[test]
    fn command_line_refuses_bytes_past_capacity() {
        let mut cl = CommandLine::new(Cursor::new(3, 1));
        for _ in 0..COMMAND_CAPACITY {
            cl.push(b'9').unwrap();
        }
        assert_eq!(cl.push(b'9'), Err(CommandLineFull));
        assert_eq!(cl.len(), COMMAND_CAPACITY);
        assert_eq!(cl.saved(), Cursor::new(3, 1));
    }

    #[test]
    fn backspace_pops_last_byte() {
        let mut cl = CommandLine::new(Cursor::default());
        cl.push(b'w').unwrap();
        cl.push(b'q').unwrap();
        assert_eq!(cl.backspace(), Some(b'q'));
        assert_eq!(cl.bytes(), b"w");
        cl.backspace();
        assert_eq!(cl.backspace(), None);
    }
}
