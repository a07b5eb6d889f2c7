//! Normal-mode cursor motions.
//!
//! Motions work in raw columns and finish with `clamp_cursor`, so the column
//! never rests past the last byte of the row it lands on.

use super::DispatchResult;
use crate::MotionKind;
use core_state::EditorState;

pub(crate) fn handle_motion(kind: MotionKind, state: &mut EditorState) -> DispatchResult {
    let before = state.cursor;
    let cursor = &mut state.cursor;
    let row_len = state.buffer.row_len(cursor.line);
    match kind {
        MotionKind::Left => cursor.column = cursor.column.saturating_sub(1),
        MotionKind::Right => {
            if cursor.column + 1 < row_len {
                cursor.column += 1;
            }
        }
        MotionKind::Up => cursor.line = cursor.line.saturating_sub(1),
        MotionKind::Down => {
            if cursor.line < state.buffer.num_rows() {
                cursor.line += 1;
            }
        }
        MotionKind::LineStart => cursor.column = 0,
        MotionKind::LineEnd => cursor.column = row_len.saturating_sub(1),
        MotionKind::DocumentStart => cursor.line = 0,
        MotionKind::DocumentEnd => cursor.line = state.buffer.num_rows().saturating_sub(1),
    }
    state.clamp_cursor();
    if state.cursor == before {
        return DispatchResult::clean();
    }
    tracing::trace!(
        target: "actions.dispatch",
        op = ?kind,
        from_line = before.line,
        from_col = before.column,
        to_line = state.cursor.line,
        to_col = state.cursor.column,
        "motion"
    );
    DispatchResult::dirty()
}
