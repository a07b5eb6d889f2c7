//! Viewport recompute: keep the cursor visible before each frame.
//!
//! Runs once per loop iteration ahead of the compositor:
//! 1. map the cursor's raw column to its render column through the row's
//!    tab expansion;
//! 2. scroll vertically so `row_offset <= line < row_offset + screen_rows`;
//! 3. scroll horizontally, in render coordinates, so
//!    `col_offset <= render_column < col_offset + screen_cols`.
//!
//! The document is never touched. In Command mode the cursor is parked on
//! the synthetic command row, so the viewport stays where it was.

use core_state::{EditorState, Mode};

/// Returns true when the viewport scrolled.
pub fn recompute(state: &mut EditorState) -> bool {
    if matches!(state.mode, Mode::Command(_)) {
        return false;
    }
    let render_column = state
        .buffer
        .render_column(state.cursor.line, state.cursor.column);
    state.cursor.render_column = render_column;
    let scrolled = state.viewport.reveal(state.cursor.line, render_column);
    if scrolled {
        tracing::trace!(
            target: "render.viewport",
            row_offset = state.viewport.row_offset,
            col_offset = state.viewport.col_offset,
            line = state.cursor.line,
            render_column,
            "scrolled"
        );
    }
    scrolled
}
