//! Mode transitions: Normal <-> Insert, and entering Command.

use super::DispatchResult;
use crate::ModeChange;
use core_state::{CommandLine, EditorState, Mode};

pub(crate) fn handle_mode_change(mc: ModeChange, state: &mut EditorState) -> DispatchResult {
    match mc {
        ModeChange::EnterInsert => {
            state.mode = Mode::Insert;
        }
        ModeChange::Append => {
            let len = state.current_row_len();
            state.cursor.column = (state.cursor.column + 1).min(len);
            state.mode = Mode::Insert;
        }
        ModeChange::AppendAtLineEnd => {
            state.cursor.column = state.current_row_len();
            state.mode = Mode::Insert;
        }
        ModeChange::LeaveInsert => {
            state.mode = Mode::normal();
            state.clamp_cursor();
        }
        ModeChange::EnterCommand => {
            // Park the cursor on the synthetic row below the document; the
            // saved position comes back when the command finishes.
            let saved = state.cursor;
            state.mode = Mode::Command(CommandLine::new(saved));
            state.cursor.line = state.num_rows() + 1;
            state.cursor.column = 0;
        }
    }
    tracing::debug!(target: "actions.dispatch", op = ?mc, mode = state.mode.label(), "mode_change");
    DispatchResult::dirty()
}
