//! Status bar and message bar composition.
//!
//! Two-stage pipeline for the status bar:
//! 1. `compose_status` produces the ordered segments (`StatusSegment`).
//! 2. `format_status` lays them out in a fixed width: the left segment is
//!    clipped to the width, then spaces pad the line until the remaining
//!    width exactly fits the right segment. If it never fits (narrow
//!    terminal, long left segment) the right segment is dropped and the
//!    line is padded with spaces only.
//!
//! Both bars are returned as plain bytes; the compositor adds the inverse
//! video and line-clearing sequences.

use std::borrow::Cow;
use std::path::Path;

use core_state::Mode;

/// Longest file name prefix shown on the status bar, in bytes.
pub const FILE_NAME_MAX: usize = 20;

/// Longest status message shown on the message bar, in bytes.
pub const MESSAGE_MAX: usize = 80;

pub const NO_NAME: &str = "[No Name]";

/// What the status bar needs from the editor state.
pub struct StatusContext<'a> {
    pub file_name: Option<&'a Path>,
    pub num_rows: usize,
    /// 0-based line the cursor is on (the saved line while in Command mode).
    pub line: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusSegment<'a> {
    /// `<name> - <n> lines`, left aligned.
    FileInfo { name: Cow<'a, str>, num_rows: usize },
    /// `<line>/<total>`, right aligned. `line_1` is 1-based.
    Position { line_1: usize, num_rows: usize },
}

impl StatusSegment<'_> {
    fn text(&self) -> String {
        match self {
            StatusSegment::FileInfo { name, num_rows } => format!("{name} - {num_rows} lines"),
            StatusSegment::Position { line_1, num_rows } => format!("{line_1}/{num_rows}"),
        }
    }
}

/// Truncate `s` to at most `max` bytes without splitting a character.
fn clip(s: &str, max: usize) -> &str {
    if s.len() <= max {
        return s;
    }
    let mut end = max;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}

pub fn compose_status<'a>(ctx: &'a StatusContext<'a>) -> Vec<StatusSegment<'a>> {
    let name: Cow<'a, str> = match ctx.file_name {
        Some(path) => match path.to_string_lossy() {
            Cow::Borrowed(s) => Cow::Borrowed(clip(s, FILE_NAME_MAX)),
            Cow::Owned(s) => Cow::Owned(clip(&s, FILE_NAME_MAX).to_owned()),
        },
        None => Cow::Borrowed(NO_NAME),
    };
    vec![
        StatusSegment::FileInfo {
            name,
            num_rows: ctx.num_rows,
        },
        StatusSegment::Position {
            line_1: ctx.line + 1,
            num_rows: ctx.num_rows,
        },
    ]
}

/// Lay segments out across exactly `width` bytes.
pub fn format_status(segments: &[StatusSegment<'_>], width: usize) -> Vec<u8> {
    let mut left = String::new();
    let mut right = String::new();
    for seg in segments {
        match seg {
            StatusSegment::FileInfo { .. } => left.push_str(&seg.text()),
            StatusSegment::Position { .. } => right.push_str(&seg.text()),
        }
    }
    let mut out = Vec::with_capacity(width);
    out.extend_from_slice(&left.as_bytes()[..left.len().min(width)]);
    while out.len() < width {
        if width - out.len() == right.len() {
            out.extend_from_slice(right.as_bytes());
            break;
        }
        out.push(b' ');
    }
    out
}

pub fn compose_status_bar(ctx: &StatusContext<'_>, width: usize) -> Vec<u8> {
    format_status(&compose_status(ctx), width)
}

/// Message bar contents: the mode label followed by the fresh status message
/// (if any), or `:` plus the pending command while in Command mode.
pub fn compose_message_bar(mode: &Mode, message: Option<&str>, width: usize) -> Vec<u8> {
    let mut out = Vec::with_capacity(width);
    match mode.command_line() {
        Some(cmd) => {
            out.extend_from_slice(mode.label().as_bytes());
            out.extend_from_slice(cmd.bytes());
        }
        None => {
            out.extend_from_slice(mode.label().as_bytes());
            out.push(b' ');
            if let Some(msg) = message {
                out.extend_from_slice(clip(msg, MESSAGE_MAX.min(width)).as_bytes());
            }
        }
    }
    out.truncate(width);
    out
}
