//! Input state machine: key translation, action dispatch, and the file I/O
//! boundary.
//!
//! Each loop iteration feeds one decoded `Key` through
//! [`key_translator::translate_key`], which looks only at the current `Mode`
//! and yields at most one `Action`. [`dispatcher::dispatch`] then applies the
//! action to the owned `EditorState`. [`step`] is the two combined.
//!
//! Keys without a meaning in the current mode translate to nothing and
//! leave the state untouched.

pub mod dispatcher;
pub mod io_ops;
pub mod key_translator;

pub use dispatcher::{DispatchResult, dispatch, step};
pub use io_ops::{LoadError, SaveError, load_file, save_file, write_document};
pub use key_translator::translate_key;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotionKind {
    Left,
    Right,
    Up,
    Down,
    LineStart,
    LineEnd,
    DocumentStart,
    DocumentEnd,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeChange {
    /// `i`: Insert at the cursor.
    EnterInsert,
    /// `a`: Insert one past the cursor.
    Append,
    /// `A`: Insert at the end of the row.
    AppendAtLineEnd,
    LeaveInsert,
    /// `:` or space.
    EnterCommand,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditKind {
    InsertByte(u8),
    Newline,
    Backspace,
}

impl EditKind {
    /// Name without the inserted byte, for logging.
    pub fn label(&self) -> &'static str {
        match self {
            EditKind::InsertByte(_) => "insert_byte",
            EditKind::Newline => "newline",
            EditKind::Backspace => "backspace",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Motion(MotionKind),
    ModeChange(ModeChange),
    Edit(EditKind),
    /// Remember a prefix byte (the first `g` of `gg`).
    SetPending(u8),
    /// Drop a pending prefix without doing anything else.
    ClearPending,
    CommandChar(u8),
    CommandBackspace,
    CommandExecute,
    CommandCancel,
    Quit,
}

impl Action {
    /// Name without any typed byte, for logging. Document and command text
    /// never reach the log.
    pub fn label(&self) -> &'static str {
        match self {
            Action::Motion(_) => "motion",
            Action::ModeChange(_) => "mode_change",
            Action::Edit(kind) => kind.label(),
            Action::SetPending(_) => "set_pending",
            Action::ClearPending => "clear_pending",
            Action::CommandChar(_) => "command_char",
            Action::CommandBackspace => "command_backspace",
            Action::CommandExecute => "command_execute",
            Action::CommandCancel => "command_cancel",
            Action::Quit => "quit",
        }
    }
}
