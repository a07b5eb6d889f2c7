//! Input vocabulary for the editor.
//!
//! The terminal delivers single bytes in raw mode. `Key::from_byte` is the
//! one place that classifies them; everything above works on `Key`.
//! Multi-byte escape sequences (arrow keys and the like) are not decoded: the
//! leading `ESC` arrives as `Key::Escape` and the rest as ordinary bytes.

use std::fmt;

pub const ESC: u8 = 0x1b;
pub const DEL: u8 = 0x7f;

/// The control byte produced by Ctrl+`letter`.
#[inline]
pub const fn ctrl(letter: u8) -> u8 {
    letter & 0x1f
}

/// Quit combo accepted in Normal mode (Ctrl-Q).
pub const QUIT: Key = Key::Ctrl(b'q');

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Printable ASCII, space included.
    Char(u8),
    Tab,
    Enter,
    Escape,
    Backspace,
    /// Ctrl+letter, carrying the lowercase letter.
    Ctrl(u8),
    /// Anything else (high bytes, stray control codes).
    Other(u8),
}

impl Key {
    pub fn from_byte(b: u8) -> Self {
        match b {
            ESC => Key::Escape,
            b'\r' | b'\n' => Key::Enter,
            b'\t' => Key::Tab,
            DEL | 0x08 => Key::Backspace,
            0x20..=0x7e => Key::Char(b),
            0x01..=0x1a => Key::Ctrl(b'a' + b - 1),
            _ => Key::Other(b),
        }
    }

    /// The byte this key inserts into a row, if it inserts one.
    pub fn insertable(self) -> Option<u8> {
        match self {
            Key::Char(b) => Some(b),
            Key::Tab => Some(b'\t'),
            _ => None,
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Char(b) => write!(f, "{}", *b as char),
            Key::Tab => f.write_str("<Tab>"),
            Key::Enter => f.write_str("<CR>"),
            Key::Escape => f.write_str("<Esc>"),
            Key::Backspace => f.write_str("<BS>"),
            Key::Ctrl(b) => write!(f, "<C-{}>", *b as char),
            Key::Other(b) => write!(f, "<0x{b:02x}>"),
        }
    }
}

/// One iteration's worth of input: a key, or an idle wakeup when the
/// terminal's read timed out without delivering a byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Key(Key),
    Idle,
}

impl From<Option<u8>> for InputEvent {
    fn from(read: Option<u8>) -> Self {
        read.map_or(InputEvent::Idle, |b| InputEvent::Key(Key::from_byte(b)))
    }
}
