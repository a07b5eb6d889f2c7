//! Window size discovery.
//!
//! The OS query is tried first. When it fails (or reports zero columns, as
//! some pseudo terminals do) the size is measured: the cursor is pushed to
//! the far corner and its position requested with `ESC[6n`, whose reply
//! `ESC[<rows>;<cols>R` is parsed here.

use crate::{Terminal, TerminalError, ansi};

/// Longest cursor-position report we are willing to buffer.
const REPORT_MAX: usize = 32;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowSize {
    pub rows: u16,
    pub cols: u16,
}

impl WindowSize {
    pub const fn new(rows: u16, cols: u16) -> Self {
        Self { rows, cols }
    }
}

/// Parse a cursor-position report (`ESC[<rows>;<cols>R`). The trailing `R`
/// may be present or already stripped.
pub fn parse_cursor_report(report: &[u8]) -> Result<WindowSize, TerminalError> {
    let bad = || TerminalError::WindowSize(format!("malformed cursor report {report:?}"));
    let body = report.strip_prefix(b"\x1b[").ok_or_else(bad)?;
    let body = body.strip_suffix(b"R").unwrap_or(body);
    let text = std::str::from_utf8(body).map_err(|_| bad())?;
    let (rows, cols) = text.split_once(';').ok_or_else(bad)?;
    let rows = rows.trim().parse::<u16>().map_err(|_| bad())?;
    let cols = cols.trim().parse::<u16>().map_err(|_| bad())?;
    Ok(WindowSize { rows, cols })
}

/// Measure the window by moving to the far corner and asking where the
/// cursor ended up.
pub fn probe_window_size<T: Terminal + ?Sized>(term: &mut T) -> Result<WindowSize, TerminalError> {
    term.write_bytes(&[ansi::CURSOR_FAR_CORNER, ansi::CURSOR_POSITION_QUERY].concat())?;
    let mut report = Vec::with_capacity(REPORT_MAX);
    while report.len() < REPORT_MAX {
        match term.read_byte()? {
            Some(b'R') => break,
            Some(b) => report.push(b),
            None => break,
        }
    }
    let size = parse_cursor_report(&report)?;
    tracing::debug!(target: "terminal", rows = size.rows, cols = size.cols, "window_size_probed");
    Ok(size)
}
