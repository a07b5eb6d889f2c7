//! Key -> Action translation.
//!
//! Translation is a pure function of the current mode and the key. The only
//! multi-key sequence (`gg`) keeps its prefix in `Mode::Normal { pending }`,
//! so there is no translator-side state to reset on mode transitions.
//!
//! Normal:
//! * `h j k l` move, `0 $` row start / end, `gg G` document start / end.
//! * `i a A` enter Insert; `:` or space enter Command.
//! * `Ctrl-Q` quits.
//! * After a pending `g`, any key other than `g` is consumed.
//!
//! Insert: printable bytes and tab insert, `Enter` splits the row,
//! `Backspace` deletes or joins, `Esc` returns to Normal.
//!
//! Command: printable bytes accumulate, `Backspace` edits, `Enter`
//! executes, `Esc` cancels.

use crate::{Action, EditKind, ModeChange, MotionKind};
use core_events::{Key, QUIT};
use core_state::Mode;

pub fn translate_key(mode: &Mode, key: Key) -> Option<Action> {
    match mode {
        Mode::Normal { pending } => translate_normal(*pending, key),
        Mode::Insert => translate_insert(key),
        Mode::Command(_) => translate_command(key),
    }
}

fn translate_normal(pending: Option<u8>, key: Key) -> Option<Action> {
    if pending == Some(b'g') {
        return Some(match key {
            Key::Char(b'g') => Action::Motion(MotionKind::DocumentStart),
            _ => Action::ClearPending,
        });
    }
    if key == QUIT {
        return Some(Action::Quit);
    }
    let Key::Char(c) = key else {
        return None;
    };
    let action = match c {
        b'h' => Action::Motion(MotionKind::Left),
        b'j' => Action::Motion(MotionKind::Down),
        b'k' => Action::Motion(MotionKind::Up),
        b'l' => Action::Motion(MotionKind::Right),
        b'0' => Action::Motion(MotionKind::LineStart),
        b'$' => Action::Motion(MotionKind::LineEnd),
        b'G' => Action::Motion(MotionKind::DocumentEnd),
        b'g' => Action::SetPending(b'g'),
        b'i' => Action::ModeChange(ModeChange::EnterInsert),
        b'a' => Action::ModeChange(ModeChange::Append),
        b'A' => Action::ModeChange(ModeChange::AppendAtLineEnd),
        b':' | b' ' => Action::ModeChange(ModeChange::EnterCommand),
        _ => return None,
    };
    Some(action)
}

fn translate_insert(key: Key) -> Option<Action> {
    match key {
        Key::Escape => Some(Action::ModeChange(ModeChange::LeaveInsert)),
        Key::Enter => Some(Action::Edit(EditKind::Newline)),
        Key::Backspace => Some(Action::Edit(EditKind::Backspace)),
        _ => key
            .insertable()
            .map(|b| Action::Edit(EditKind::InsertByte(b))),
    }
}

fn translate_command(key: Key) -> Option<Action> {
    match key {
        Key::Enter => Some(Action::CommandExecute),
        Key::Escape => Some(Action::CommandCancel),
        Key::Backspace => Some(Action::CommandBackspace),
        Key::Char(c) => Some(Action::CommandChar(c)),
        _ => None,
    }
}
