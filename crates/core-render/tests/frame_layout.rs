use std::time::Instant;

use core_render::{Compositor, recompute};
use core_state::{Cursor, EditorState, Viewport};
use core_terminal::WindowSize;
use core_terminal::scripted::ScriptedTerminal;
use core_text::LineBuffer;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn frame_rows(frame: &[u8]) -> Vec<String> {
    let text = String::from_utf8_lossy(frame).into_owned();
    let body = text
        .strip_prefix("\x1b[?25l\x1b[H")
        .expect("frame prefix");
    body.split("\r\n").map(str::to_owned).collect()
}

#[test]
fn empty_document_welcome_screen() {
    // 24 text rows, 80 columns.
    let state = EditorState::new(LineBuffer::new(4), Viewport::new(24, 80));
    let mut term = ScriptedTerminal::new(WindowSize::new(26, 80));
    Compositor::default()
        .render(&state, &mut term, Instant::now())
        .unwrap();
    assert_eq!(term.writes().len(), 1, "frame must be a single write");

    let rows = frame_rows(&term.output());
    assert_eq!(rows.len(), 24 + 2);
    for (y, row) in rows.iter().take(24).enumerate() {
        if y == 8 {
            let banner = "Bon Jour -- version 0.0.1";
            let pad = (80 - banner.len()) / 2;
            let expected = format!("~{}{}\x1b[K", " ".repeat(pad - 1), banner);
            assert_eq!(row, &expected);
        } else {
            assert_eq!(row, "~\x1b[K");
        }
    }
    let status = &rows[24];
    assert!(status.starts_with("\x1b[7m[No Name] - 0 lines"));
    assert!(status.ends_with("1/0\x1b[m"));
    assert_eq!(status.len(), "\x1b[7m".len() + 80 + "\x1b[m".len());
    assert_eq!(rows[25], "\x1b[K-- NORMAL -- \x1b[1;1H\x1b[?25h");
}

#[test]
fn tabbed_row_scrolled_horizontally() {
    let buffer = LineBuffer::from_lines(4, ["\tabcdefghijklmnop"]);
    let mut state = EditorState::new(buffer, Viewport::new(1, 8));
    state.cursor = Cursor::new(9, 0);
    recompute(&mut state);
    // Raw 9 is render 12: the window scrolls to keep it in the last column.
    assert_eq!(state.cursor.render_column, 12);
    assert_eq!(state.viewport.col_offset, 5);
    let frame = Compositor::default().compose(&state, Instant::now());
    let rows = frame_rows(frame.bytes());
    assert_eq!(rows[0], "bcdefghi\x1b[K");
    assert!(rows[2].ends_with("\x1b[1;8H\x1b[?25h"));
}

proptest! {
    #[test]
    fn cursor_is_visible_after_recompute(
        lines in prop::collection::vec("[a-z\t ]{0,40}", 1..60),
        line_pick in 0usize..200,
        col_pick in 0usize..80,
        rows in 1usize..30,
        cols in 1usize..50,
    ) {
        let buffer = LineBuffer::from_lines(4, lines.iter().map(String::as_bytes));
        let mut state = EditorState::new(buffer, Viewport::new(rows, cols));
        state.cursor = Cursor::new(col_pick, line_pick % state.num_rows());
        state.clamp_cursor();
        recompute(&mut state);
        let vp = state.viewport;
        prop_assert!(vp.contains(state.cursor.line, state.cursor.render_column));
        // Frame has exactly rows + 2 lines regardless of content.
        let frame = Compositor::default().compose(&state, Instant::now());
        prop_assert_eq!(frame_rows(frame.bytes()).len(), rows + 2);
    }
}
