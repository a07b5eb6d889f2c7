//! Dispatcher applying `Action` to the editor state.
//!
//! Sub-modules:
//! * `motion`  - cursor movement in Normal mode
//! * `mode`    - Normal <-> Insert, entering Command
//! * `edit`    - Insert-mode buffer mutation
//! * `command` - command line editing and execution
//! * `command_parser` - pure classification of the accumulated command
//!
//! Every handler leaves the cursor invariants intact for the mode it ends
//! in.

use crate::Action;
use crate::key_translator::translate_key;
use core_events::Key;
use core_state::{EditorState, Mode};

mod command;
pub mod command_parser;
mod edit;
mod mode;
mod motion;

/// Result of dispatching a single `Action`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DispatchResult {
    pub dirty: bool,
    pub quit: bool,
}

impl DispatchResult {
    pub fn dirty() -> Self {
        Self {
            dirty: true,
            quit: false,
        }
    }
    pub fn clean() -> Self {
        Self {
            dirty: false,
            quit: false,
        }
    }
    pub fn quit() -> Self {
        Self {
            dirty: true,
            quit: true,
        }
    }
}

/// Apply an action to editor state. Returns whether a render is needed
/// (`dirty`) or the editor should exit (`quit`).
pub fn dispatch(action: Action, state: &mut EditorState) -> DispatchResult {
    tracing::trace!(target: "actions.dispatch", action = action.label(), "dispatch");
    if let Mode::Normal { pending } = &mut state.mode {
        *pending = match action {
            Action::SetPending(b) => Some(b),
            _ => None,
        };
    }
    match action {
        Action::Motion(kind) => motion::handle_motion(kind, state),
        Action::ModeChange(mc) => mode::handle_mode_change(mc, state),
        Action::Edit(kind) => edit::handle_edit(kind, state),
        Action::SetPending(_) | Action::ClearPending => DispatchResult::clean(),
        Action::CommandChar(_)
        | Action::CommandBackspace
        | Action::CommandExecute
        | Action::CommandCancel => command::handle_command_action(action, state),
        Action::Quit => {
            tracing::info!(target: "actions.dispatch", "quit_requested");
            DispatchResult::quit()
        }
    }
}

/// Translate `key` in the current mode and dispatch the result.
pub fn step(state: &mut EditorState, key: Key) -> DispatchResult {
    match translate_key(&state.mode, key) {
        Some(action) => dispatch(action, state),
        None => {
            tracing::trace!(target: "actions.dispatch", %key, mode = state.mode.label(), "unmapped_key");
            DispatchResult::clean()
        }
    }
}
