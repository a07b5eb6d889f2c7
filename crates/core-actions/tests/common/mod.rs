#![allow(dead_code)] // Shared across integration tests; each test binary uses a subset of helpers.

use core_actions::{DispatchResult, step};
use core_events::Key;
use core_state::{EditorState, Viewport};
use core_text::LineBuffer;

pub fn state(lines: &[&str]) -> EditorState {
    let buffer = LineBuffer::from_lines(4, lines.iter().map(|l| l.as_bytes()));
    EditorState::new(buffer, Viewport::new(22, 80))
}

/// Feed raw bytes through the state machine, returning the last result.
pub fn press(state: &mut EditorState, bytes: &[u8]) -> DispatchResult {
    let mut last = DispatchResult::clean();
    for &b in bytes {
        last = step(state, Key::from_byte(b));
        if last.quit {
            break;
        }
    }
    last
}

pub fn row(state: &EditorState, line: usize) -> String {
    String::from_utf8_lossy(state.buffer.row(line).map_or(&[][..], |r| r.raw())).into_owned()
}

pub fn status(state: &EditorState) -> &str {
    state.status.as_ref().map_or("", |m| m.text.as_str())
}
