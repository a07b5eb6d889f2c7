//! Command line editing and execution (`:w`, `:q`, `:<line>`).
//!
//! Capture never touches the document. On execute or cancel the mode
//! returns to Normal with the cursor restored to the saved position, unless
//! a line jump moved it; either way the cursor is re-clamped.

use super::DispatchResult;
use super::command_parser::{CommandOp, CommandParser, ParsedCommand};
use crate::Action;
use crate::io_ops::{SaveError, write_document};
use core_state::{COMMAND_CAPACITY, CommandLine, EditorState, Mode};

pub(crate) fn handle_command_action(action: Action, state: &mut EditorState) -> DispatchResult {
    match action {
        Action::CommandChar(b) => {
            let Some(cl) = state.mode.command_line_mut() else {
                return DispatchResult::clean();
            };
            if cl.push(b).is_err() {
                tracing::debug!(target: "actions.command", capacity = COMMAND_CAPACITY, "command_line_full");
                state.set_status(format!("Command too long (max {COMMAND_CAPACITY} bytes)"));
            }
            DispatchResult::dirty()
        }
        Action::CommandBackspace => {
            if let Some(cl) = state.mode.command_line_mut() {
                cl.backspace();
            }
            DispatchResult::dirty()
        }
        Action::CommandCancel => {
            if let Some(cl) = leave_command_mode(state) {
                tracing::debug!(target: "actions.command", len = cl.len(), "command_cancelled");
            }
            DispatchResult::dirty()
        }
        Action::CommandExecute => match leave_command_mode(state) {
            Some(cl) => execute_command(&cl, state),
            None => DispatchResult::clean(),
        },
        _ => DispatchResult::clean(),
    }
}

/// Switch back to Normal, restoring the saved cursor. Returns the command
/// line that was active, if any.
fn leave_command_mode(state: &mut EditorState) -> Option<CommandLine> {
    match std::mem::replace(&mut state.mode, Mode::normal()) {
        Mode::Command(cl) => {
            state.cursor = cl.saved();
            state.clamp_cursor();
            Some(cl)
        }
        other => {
            state.mode = other;
            None
        }
    }
}

fn execute_command(cl: &CommandLine, state: &mut EditorState) -> DispatchResult {
    let raw = cl.bytes();
    let parsed = CommandParser::parse(raw);
    tracing::debug!(target: "actions.command", kind = parsed.label(), len = raw.len(), "command_execute");
    match parsed {
        ParsedCommand::Empty => DispatchResult::dirty(),
        ParsedCommand::GotoLine(n) => {
            let last = state.num_rows().saturating_sub(1);
            state.cursor.line = n.saturating_sub(1).min(last);
            state.clamp_cursor();
            DispatchResult::dirty()
        }
        ParsedCommand::Unknown(cmd) => {
            report_unknown(state, &cmd);
            DispatchResult::dirty()
        }
        ParsedCommand::Ops(ops) => {
            for op in ops {
                match op {
                    CommandOp::Write => {
                        if !handle_write(state) {
                            break;
                        }
                    }
                    CommandOp::Quit => {
                        tracing::info!(target: "actions.command", "quit_command");
                        return DispatchResult::quit();
                    }
                    CommandOp::Unknown(_) => {
                        report_unknown(state, &String::from_utf8_lossy(raw));
                        break;
                    }
                }
            }
            DispatchResult::dirty()
        }
    }
}

fn report_unknown(state: &mut EditorState, cmd: &str) {
    tracing::debug!(target: "actions.command", len = cmd.len(), "unknown_command");
    state.set_status(format!("Unknown command '{cmd}'"));
}

/// Save the document; the outcome becomes the status message. Returns true
/// on success.
fn handle_write(state: &mut EditorState) -> bool {
    match write_document(state) {
        Ok(n) => {
            let name = state
                .file_name
                .as_deref()
                .map(|p| p.display().to_string())
                .unwrap_or_default();
            state.set_status(format!("Wrote {n} bytes to \"{name}\""));
            true
        }
        Err(SaveError::NoFileName) => {
            state.set_status(SaveError::NoFileName.to_string());
            false
        }
        Err(e) => {
            state.set_status(format!("Failed to save: {e}"));
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_state::{Cursor, Viewport};
    use core_text::LineBuffer;

    fn command_state(lines: &[&str], cmd: &[u8], saved: Cursor) -> EditorState {
        let buffer = LineBuffer::from_lines(4, lines.iter().map(|l| l.as_bytes()));
        let mut st = EditorState::new(buffer, Viewport::new(20, 80));
        let mut cl = CommandLine::new(saved);
        for &b in cmd {
            cl.push(b).unwrap();
        }
        st.mode = Mode::Command(cl);
        st.cursor.line = st.num_rows() + 1;
        st
    }

    fn status(st: &EditorState) -> &str {
        st.status.as_ref().map(|m| m.text.as_str()).unwrap_or("")
    }

    #[test]
    fn cancel_restores_cursor() {
        let mut st = command_state(&["abc", "def"], b"w", Cursor::new(2, 1));
        handle_command_action(Action::CommandCancel, &mut st);
        assert!(st.mode.is_normal());
        assert_eq!(st.cursor, Cursor::new(2, 1));
        assert!(st.status.is_none());
    }

    #[test]
    fn line_jump_is_one_indexed_and_keeps_column() {
        let lines = ["aaaa", "bbbb", "cc", "dddd"];
        let mut st = command_state(&lines, b"3", Cursor::new(3, 0));
        handle_command_action(Action::CommandExecute, &mut st);
        assert_eq!(st.cursor, Cursor::new(1, 2));
    }

    #[test]
    fn line_jump_clamps_to_last_row_and_zero_to_first() {
        let mut st = command_state(&["a", "b"], b"99", Cursor::new(0, 0));
        handle_command_action(Action::CommandExecute, &mut st);
        assert_eq!(st.cursor.line, 1);
        let mut st = command_state(&["a", "b"], b"0", Cursor::new(0, 1));
        handle_command_action(Action::CommandExecute, &mut st);
        assert_eq!(st.cursor.line, 0);
    }

    #[test]
    fn unknown_command_reports_and_returns_to_normal() {
        let mut st = command_state(&["a"], b"x", Cursor::new(0, 0));
        let r = handle_command_action(Action::CommandExecute, &mut st);
        assert!(!r.quit);
        assert!(st.mode.is_normal());
        assert_eq!(status(&st), "Unknown command 'x'");
        assert_eq!(st.cursor, Cursor::new(0, 0));
    }

    #[test]
    fn write_without_file_name_stops_before_quit() {
        let mut st = command_state(&["a"], b"wq", Cursor::new(0, 0));
        let r = handle_command_action(Action::CommandExecute, &mut st);
        assert!(!r.quit);
        assert_eq!(status(&st), "No file name");
    }

    #[test]
    fn overflowing_byte_is_refused_with_message() {
        let mut st = command_state(&[], &[b'w'; COMMAND_CAPACITY], Cursor::default());
        handle_command_action(Action::CommandChar(b'q'), &mut st);
        assert_eq!(st.mode.command_line().unwrap().len(), COMMAND_CAPACITY);
        assert!(status(&st).starts_with("Command too long"));
    }

    #[test]
    fn backspace_removes_last_byte() {
        let mut st = command_state(&[], b"wq", Cursor::default());
        handle_command_action(Action::CommandBackspace, &mut st);
        assert_eq!(st.mode.command_line().unwrap().bytes(), b"w");
    }
}
