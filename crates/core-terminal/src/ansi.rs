//! Escape sequences the editor emits.
//!
//! These are written byte-for-byte; terminals are matched on the exact
//! forms below (`ESC[H` rather than `ESC[1;1H`, `ESC[m` rather than
//! `ESC[0m`).

pub const CLEAR_SCREEN: &[u8] = b"\x1b[2J";
pub const CURSOR_HOME: &[u8] = b"\x1b[H";
pub const HIDE_CURSOR: &[u8] = b"\x1b[?25l";
pub const SHOW_CURSOR: &[u8] = b"\x1b[?25h";
/// Erase from the cursor to the end of the line.
pub const CLEAR_LINE: &[u8] = b"\x1b[K";
pub const INVERSE_ON: &[u8] = b"\x1b[7m";
pub const INVERSE_OFF: &[u8] = b"\x1b[m";
/// Device status report: the terminal answers `ESC[<rows>;<cols>R`.
pub const CURSOR_POSITION_QUERY: &[u8] = b"\x1b[6n";
/// Push the cursor to the bottom-right corner (both moves clamp at the edge).
pub const CURSOR_FAR_CORNER: &[u8] = b"\x1b[999C\x1b[999B";
pub const NEWLINE: &[u8] = b"\r\n";

/// Append a cursor-position sequence. `row` and `col` are 1-indexed.
pub fn cursor_to(out: &mut Vec<u8>, row: usize, col: usize) {
    out.extend_from_slice(format!("\x1b[{row};{col}H").as_bytes());
}

/// Clear the screen and home the cursor, as done on exit.
pub fn clear_and_home() -> Vec<u8> {
    [CLEAR_SCREEN, CURSOR_HOME].concat()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_to_is_one_indexed_row_then_column() {
        let mut out = Vec::new();
        cursor_to(&mut out, 3, 17);
        assert_eq!(out, b"\x1b[3;17H".to_vec());
    }

    #[test]
    fn clear_and_home_order() {
        assert_eq!(clear_and_home(), b"\x1b[2J\x1b[H".to_vec());
    }
}
