//! Editor state: the single owned record every stage of the loop works on.
//!
//! One `EditorState` holds the document, cursor, viewport, mode, and the
//! transient status message. The main loop passes it by reference to the
//! viewport recompute, the compositor, and the input state machine in strict
//! sequence; there is no process-wide state.
//!
//! Cursor invariants (outside Command mode):
//! * `0 <= cursor.line <= buffer.num_rows()`; the row past the end is where
//!   Insert mode appends.
//! * `cursor.column <= max(0, row_len - 1)` in Normal mode. Insert mode may
//!   sit one past the last byte.
//! * `cursor.render_column` is refreshed by the viewport recompute before
//!   each frame.
//!
//! In Command mode the cursor is parked on a synthetic row
//! (`num_rows + 1`); the saved position lives in the `CommandLine`.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use core_text::LineBuffer;

pub mod mode;
pub mod viewport;

pub use mode::{COMMAND_CAPACITY, CommandLine, CommandLineFull, Mode};
pub use viewport::{RESERVED_ROWS, Viewport};

/// How long a status message stays on the message bar by default.
pub const DEFAULT_MESSAGE_SUSTAIN: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cursor {
    /// Raw byte column within the row.
    pub column: usize,
    pub line: usize,
    /// `column` mapped through the row's tab expansion.
    pub render_column: usize,
}

impl Cursor {
    pub fn new(column: usize, line: usize) -> Self {
        Self {
            column,
            line,
            render_column: 0,
        }
    }
}

/// Transient message shown on the message bar while younger than the
/// sustain window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub set_at: Instant,
}

impl StatusMessage {
    pub fn is_fresh(&self, now: Instant, sustain: Duration) -> bool {
        !self.text.is_empty() && now.saturating_duration_since(self.set_at) < sustain
    }
}

#[derive(Debug, Clone)]
pub struct EditorState {
    pub buffer: LineBuffer,
    pub cursor: Cursor,
    pub viewport: Viewport,
    pub mode: Mode,
    pub status: Option<StatusMessage>,
    pub file_name: Option<PathBuf>,
}

impl EditorState {
    pub fn new(buffer: LineBuffer, viewport: Viewport) -> Self {
        Self {
            buffer,
            cursor: Cursor::default(),
            viewport,
            mode: Mode::normal(),
            status: None,
            file_name: None,
        }
    }

    pub fn with_file_name(mut self, path: impl Into<PathBuf>) -> Self {
        self.file_name = Some(path.into());
        self
    }

    pub fn set_status<S: Into<String>>(&mut self, msg: S) {
        self.set_status_at(msg, Instant::now());
    }

    pub fn set_status_at<S: Into<String>>(&mut self, msg: S, now: Instant) {
        let text = msg.into();
        tracing::debug!(target: "state", len = text.len(), "status_message_set");
        self.status = Some(StatusMessage { text, set_at: now });
    }

    /// Status text if one is set and still inside the sustain window.
    pub fn fresh_status(&self, now: Instant, sustain: Duration) -> Option<&str> {
        self.status
            .as_ref()
            .filter(|m| m.is_fresh(now, sustain))
            .map(|m| m.text.as_str())
    }

    pub fn num_rows(&self) -> usize {
        self.buffer.num_rows()
    }

    /// Raw length of the cursor's row (zero on the virtual row past the end).
    pub fn current_row_len(&self) -> usize {
        self.buffer.row_len(self.cursor.line)
    }

    /// Re-establish the cursor invariants after a motion or mode change:
    /// the line stays within `[0, num_rows]` and the column within
    /// `[0, max(0, row_len - 1)]`.
    pub fn clamp_cursor(&mut self) {
        if self.cursor.line > self.num_rows() {
            self.cursor.line = self.num_rows();
        }
        let len = self.current_row_len();
        if self.cursor.column >= len {
            self.cursor.column = len.saturating_sub(1);
        }
    }

    /// Clamp for Insert mode, where the cursor may rest one past the last byte.
    pub fn clamp_cursor_for_insert(&mut self) {
        if self.cursor.line > self.num_rows() {
            self.cursor.line = self.num_rows();
        }
        let len = self.current_row_len();
        if self.cursor.column > len {
            self.cursor.column = len;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(lines: &[&str]) -> EditorState {
        let buffer = LineBuffer::from_lines(4, lines.iter().map(|l| l.as_bytes()));
        EditorState::new(buffer, Viewport::new(22, 80))
    }

    #[test]
    fn new_state_starts_in_normal_mode_at_origin() {
        let st = state(&[]);
        assert!(st.mode.is_normal());
        assert_eq!(st.cursor, Cursor::default());
        assert!(st.file_name.is_none());
    }

    #[test]
    fn clamp_pulls_column_onto_last_character() {
        let mut st = state(&["hello", "hi"]);
        st.cursor = Cursor::new(4, 1);
        st.clamp_cursor();
        assert_eq!(st.cursor.column, 1);
    }

    #[test]
    fn clamp_on_empty_row_is_column_zero() {
        let mut st = state(&["", "x"]);
        st.cursor = Cursor::new(7, 0);
        st.clamp_cursor();
        assert_eq!(st.cursor.column, 0);
    }

    #[test]
    fn clamp_line_limited_to_virtual_row() {
        let mut st = state(&["a", "b"]);
        st.cursor.line = 9;
        st.clamp_cursor();
        assert_eq!(st.cursor.line, 2);
        assert_eq!(st.cursor.column, 0);
    }

    #[test]
    fn insert_clamp_allows_one_past_end() {
        let mut st = state(&["abc"]);
        st.cursor.column = 10;
        st.clamp_cursor_for_insert();
        assert_eq!(st.cursor.column, 3);
    }

    #[test]
    fn status_expires_after_sustain_window() {
        let mut st = state(&[]);
        let t0 = Instant::now();
        st.set_status_at("saved", t0);
        let sustain = Duration::from_secs(5);
        assert_eq!(st.fresh_status(t0 + Duration::from_secs(4), sustain), Some("saved"));
        assert_eq!(st.fresh_status(t0 + Duration::from_secs(5), sustain), None);
    }

    #[test]
    fn empty_status_is_never_shown() {
        let mut st = state(&[]);
        let t0 = Instant::now();
        st.set_status_at("", t0);
        assert_eq!(st.fresh_status(t0, DEFAULT_MESSAGE_SUSTAIN), None);
    }
}
