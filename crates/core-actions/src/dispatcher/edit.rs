//! Insert-mode buffer mutation (insert byte, split row, backspace).
//!
//! Edits only apply in Insert mode. The cursor follows the edit: one column
//! right after an insert, column zero of the new row after a split, and the
//! join point after a backspace at column zero.

use super::DispatchResult;
use crate::EditKind;
use core_state::EditorState;

pub(crate) fn handle_edit(kind: EditKind, state: &mut EditorState) -> DispatchResult {
    if !state.mode.is_insert() {
        return DispatchResult::clean();
    }
    state.clamp_cursor_for_insert();
    let before = state.cursor;
    match kind {
        EditKind::InsertByte(b) => {
            let at = state.buffer.insert_char(before.line, before.column, b);
            state.cursor.column = at + 1;
        }
        EditKind::Newline => {
            state.buffer.insert_newline(before.line, before.column);
            state.cursor.line += 1;
            state.cursor.column = 0;
        }
        EditKind::Backspace => match state.buffer.delete_char_before(before.line, before.column) {
            Some((line, column)) => {
                state.cursor.line = line;
                state.cursor.column = column;
            }
            None => return DispatchResult::clean(),
        },
    }
    tracing::trace!(
        target: "actions.dispatch",
        op = kind.label(),
        line = before.line,
        col = before.column,
        to_line = state.cursor.line,
        to_col = state.cursor.column,
        rows = state.num_rows(),
        "edit"
    );
    DispatchResult::dirty()
}
