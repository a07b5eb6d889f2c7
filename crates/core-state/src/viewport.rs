//! Viewport state: the visible window into the document.
//!
//! Offsets are in render coordinates for columns and row indices for lines.
//! `reveal` is the scroll rule; computing the cursor's render column is the
//! caller's job (see `core-render::viewport::recompute`).

/// Terminal rows reserved below the text area (status bar, message bar).
pub const RESERVED_ROWS: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Viewport {
    pub row_offset: usize,
    pub col_offset: usize,
    /// Visible text rows (window rows minus the reserved bars).
    pub screen_rows: usize,
    pub screen_cols: usize,
}

impl Viewport {
    pub fn new(screen_rows: usize, screen_cols: usize) -> Self {
        Self {
            row_offset: 0,
            col_offset: 0,
            screen_rows,
            screen_cols,
        }
    }

    /// Size the text area from the full terminal window.
    pub fn from_window(window_rows: usize, window_cols: usize) -> Self {
        Self::new(window_rows.saturating_sub(RESERVED_ROWS), window_cols)
    }

    /// Adjust offsets so `(line, render_col)` falls inside the window.
    /// Returns true if either offset changed.
    pub fn reveal(&mut self, line: usize, render_col: usize) -> bool {
        let before = (self.row_offset, self.col_offset);
        if line < self.row_offset {
            self.row_offset = line;
        }
        if self.screen_rows > 0 && line >= self.row_offset + self.screen_rows {
            self.row_offset = line + 1 - self.screen_rows;
        }
        if render_col < self.col_offset {
            self.col_offset = render_col;
        }
        if self.screen_cols > 0 && render_col >= self.col_offset + self.screen_cols {
            self.col_offset = render_col + 1 - self.screen_cols;
        }
        before != (self.row_offset, self.col_offset)
    }

    pub fn contains(&self, line: usize, render_col: usize) -> bool {
        (self.row_offset..self.row_offset + self.screen_rows).contains(&line)
            && (self.col_offset..self.col_offset + self.screen_cols).contains(&render_col)
    }
}
