//! Byte-oriented line buffer.
//!
//! The document is an ordered `Vec<Row>`; each `Row` owns its raw bytes and a
//! cached render form with tabs expanded. Every mutating method recomputes
//! the render form before returning, so readers never observe a stale
//! expansion.
//!
//! Coordinates:
//! * `line` indexes rows. `line == num_rows()` is the virtual row past the
//!   end; inserting there appends an empty row first.
//! * `column` is a raw byte index into the row. Render columns are derived
//!   through [`Row::render_column`].
//!
//! Allocation failure aborts the process; there is no partial-buffer state
//! to recover.

pub mod lines;
pub mod tab;

pub use tab::DEFAULT_TAB_STOP;

/// One line of the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    raw: Vec<u8>,
    render: Vec<u8>,
}

impl Row {
    pub fn new(raw: impl Into<Vec<u8>>, tab_stop: usize) -> Self {
        let raw = raw.into();
        let render = tab::expand_tabs(&raw, tab_stop);
        Self { raw, render }
    }

    pub fn raw(&self) -> &[u8] {
        &self.raw
    }

    pub fn render(&self) -> &[u8] {
        &self.render
    }

    /// Raw length in bytes.
    pub fn len(&self) -> usize {
        self.raw.len()
    }

    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    pub fn render_len(&self) -> usize {
        self.render.len()
    }

    /// Render column of the raw column `col`.
    pub fn render_column(&self, col: usize, tab_stop: usize) -> usize {
        tab::raw_to_render_column(&self.raw, col, tab_stop)
    }

    /// Render bytes visible from `offset`, at most `width` cells wide. Empty
    /// when `offset` lies past the end of the row.
    pub fn render_slice(&self, offset: usize, width: usize) -> &[u8] {
        if offset >= self.render.len() {
            return &[];
        }
        let end = offset.saturating_add(width).min(self.render.len());
        &self.render[offset..end]
    }

    fn update_render(&mut self, tab_stop: usize) {
        self.render = tab::expand_tabs(&self.raw, tab_stop);
    }

    /// Insert `byte` at `at` (clamped to the row length). Returns the index
    /// actually used.
    fn insert(&mut self, at: usize, byte: u8, tab_stop: usize) -> usize {
        let at = at.min(self.raw.len());
        self.raw.insert(at, byte);
        self.update_render(tab_stop);
        at
    }

    fn remove(&mut self, at: usize, tab_stop: usize) -> Option<u8> {
        if at >= self.raw.len() {
            return None;
        }
        let byte = self.raw.remove(at);
        self.update_render(tab_stop);
        Some(byte)
    }

    fn split_off(&mut self, at: usize, tab_stop: usize) -> Row {
        let at = at.min(self.raw.len());
        let tail = self.raw.split_off(at);
        self.update_render(tab_stop);
        Row::new(tail, tab_stop)
    }

    fn append(&mut self, bytes: &[u8], tab_stop: usize) {
        self.raw.extend_from_slice(bytes);
        self.update_render(tab_stop);
    }
}

/// The document: rows in line order plus the tab-stop width used for every
/// render form it holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineBuffer {
    rows: Vec<Row>,
    tab_stop: usize,
}

impl Default for LineBuffer {
    fn default() -> Self {
        Self::new(DEFAULT_TAB_STOP)
    }
}

impl LineBuffer {
    pub fn new(tab_stop: usize) -> Self {
        Self {
            rows: Vec::new(),
            tab_stop: tab_stop.max(1),
        }
    }

    /// Build a buffer from lines, applying the load-time whitespace trim.
    pub fn from_lines<I, L>(tab_stop: usize, lines: I) -> Self
    where
        I: IntoIterator<Item = L>,
        L: AsRef<[u8]>,
    {
        let mut buffer = Self::new(tab_stop);
        buffer.load_from_text(lines);
        buffer
    }

    pub fn tab_stop(&self) -> usize {
        self.tab_stop
    }

    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn row(&self, line: usize) -> Option<&Row> {
        self.rows.get(line)
    }

    pub fn rows(&self) -> impl Iterator<Item = &Row> {
        self.rows.iter()
    }

    /// Raw length of `line`; zero for the virtual row past the end.
    pub fn row_len(&self, line: usize) -> usize {
        self.rows.get(line).map_or(0, Row::len)
    }

    /// Render column of `(line, column)`; zero when `line` has no row.
    pub fn render_column(&self, line: usize, column: usize) -> usize {
        self.rows
            .get(line)
            .map_or(0, |row| row.render_column(column, self.tab_stop))
    }

    /// Sum of raw row lengths (newlines excluded).
    pub fn byte_len(&self) -> usize {
        self.rows.iter().map(Row::len).sum()
    }

    /// Append a row holding a copy of `text`.
    pub fn append_row(&mut self, text: &[u8]) {
        self.rows.push(Row::new(text, self.tab_stop));
    }

    /// Replace the contents with one row per input line, trimming trailing
    /// whitespace from each.
    pub fn load_from_text<I, L>(&mut self, lines: I)
    where
        I: IntoIterator<Item = L>,
        L: AsRef<[u8]>,
    {
        self.rows.clear();
        for line in lines {
            let trimmed = lines::trim_trailing_whitespace(line.as_ref());
            self.append_row(trimmed);
        }
    }

    /// Insert `byte` at `(line, column)`. When `line` is the virtual row past
    /// the end an empty row is appended first; `column` is clamped to the
    /// row length. Returns the column the byte landed on.
    ///
    /// # Panics
    /// If `line > num_rows()`.
    pub fn insert_char(&mut self, line: usize, column: usize, byte: u8) -> usize {
        if line == self.rows.len() {
            self.append_row(b"");
        }
        let tab_stop = self.tab_stop;
        self.rows[line].insert(column, byte, tab_stop)
    }

    /// Split `line` at `column`; the tail becomes a new row right after it.
    /// On the virtual row past the end this just appends an empty row.
    pub fn insert_newline(&mut self, line: usize, column: usize) {
        if line >= self.rows.len() {
            self.append_row(b"");
            return;
        }
        let tab_stop = self.tab_stop;
        let tail = self.rows[line].split_off(column, tab_stop);
        self.rows.insert(line + 1, tail);
    }

    /// Delete the byte before `(line, column)`. At column zero the row is
    /// joined onto the previous one. Returns the resulting cursor position,
    /// or `None` when there was nothing to delete.
    pub fn delete_char_before(&mut self, line: usize, column: usize) -> Option<(usize, usize)> {
        if line > self.rows.len() || (line == 0 && column == 0) {
            return None;
        }
        let tab_stop = self.tab_stop;
        if column == 0 {
            let prev_len = self.rows[line - 1].len();
            if line < self.rows.len() {
                let row = self.rows.remove(line);
                self.rows[line - 1].append(row.raw(), tab_stop);
            }
            return Some((line - 1, prev_len));
        }
        let row = self.rows.get_mut(line)?;
        let at = column.min(row.len());
        if at == 0 {
            return None;
        }
        row.remove(at - 1, tab_stop);
        Some((line, at - 1))
    }

    /// Serialize every row followed by `\n`, in row order.
    pub fn rows_to_bytes(&self) -> Vec<u8> {
        let total = self.byte_len() + self.rows.len();
        let mut out = Vec::with_capacity(total);
        for row in &self.rows {
            out.extend_from_slice(row.raw());
            out.push(b'\n');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buffer(lines: &[&str]) -> LineBuffer {
        LineBuffer::from_lines(4, lines.iter().map(|l| l.as_bytes()))
    }

    #[test]
    fn append_row_copies_text_and_renders() {
        let mut b = LineBuffer::new(4);
        b.append_row(b"\tx");
        assert_eq!(b.num_rows(), 1);
        assert_eq!(b.row(0).unwrap().raw(), b"\tx");
        assert_eq!(b.row(0).unwrap().render(), b"    x");
    }

    #[test]
    fn insert_char_splices_and_rerenders() {
        let mut b = buffer(&["abcde"]);
        let at = b.insert_char(0, 2, b'X');
        assert_eq!(at, 2);
        assert_eq!(b.row(0).unwrap().raw(), b"abXcde");
        assert_eq!(b.row(0).unwrap().render(), b"abXcde");
    }

    #[test]
    fn insert_char_clamps_column_to_row_length() {
        let mut b = buffer(&["ab"]);
        assert_eq!(b.insert_char(0, 99, b'!'), 2);
        assert_eq!(b.row(0).unwrap().raw(), b"ab!");
    }

    #[test]
    fn insert_on_virtual_row_appends_first() {
        let mut b = LineBuffer::new(4);
        b.insert_char(0, 0, b'a');
        assert_eq!(b.num_rows(), 1);
        assert_eq!(b.row(0).unwrap().raw(), b"a");
    }

    #[test]
    fn inserting_tab_updates_render_form() {
        let mut b = buffer(&["ab"]);
        b.insert_char(0, 1, b'\t');
        assert_eq!(b.row(0).unwrap().render(), b"a   b");
        assert_eq!(b.render_column(0, 2), 4);
    }

    #[test]
    fn newline_splits_row_at_column() {
        let mut b = buffer(&["hello world"]);
        b.insert_newline(0, 5);
        assert_eq!(b.num_rows(), 2);
        assert_eq!(b.row(0).unwrap().raw(), b"hello");
        assert_eq!(b.row(1).unwrap().raw(), b" world");
    }

    #[test]
    fn backspace_joins_rows_at_column_zero() {
        let mut b = buffer(&["ab", "cd"]);
        assert_eq!(b.delete_char_before(1, 0), Some((0, 2)));
        assert_eq!(b.num_rows(), 1);
        assert_eq!(b.row(0).unwrap().raw(), b"abcd");
    }

    #[test]
    fn backspace_removes_previous_byte() {
        let mut b = buffer(&["abc"]);
        assert_eq!(b.delete_char_before(0, 2), Some((0, 1)));
        assert_eq!(b.row(0).unwrap().raw(), b"ac");
    }

    #[test]
    fn backspace_at_origin_is_noop() {
        let mut b = buffer(&["abc"]);
        assert_eq!(b.delete_char_before(0, 0), None);
        assert_eq!(b.row(0).unwrap().raw(), b"abc");
    }

    #[test]
    fn backspace_on_virtual_row_moves_to_previous_end() {
        let mut b = buffer(&["abc"]);
        assert_eq!(b.delete_char_before(1, 0), Some((0, 3)));
        assert_eq!(b.num_rows(), 1);
    }

    #[test]
    fn rows_to_bytes_terminates_every_row() {
        let b = buffer(&["one", "", "three"]);
        assert_eq!(b.rows_to_bytes(), b"one\n\nthree\n".to_vec());
        assert_eq!(LineBuffer::new(4).rows_to_bytes(), Vec::<u8>::new());
    }

    #[test]
    fn load_trims_trailing_whitespace_and_replaces_rows() {
        let mut b = buffer(&["stale"]);
        b.load_from_text(["keep  ", "tabs\t\t", "\tlead"]);
        assert_eq!(b.num_rows(), 3);
        assert_eq!(b.row(0).unwrap().raw(), b"keep");
        assert_eq!(b.row(1).unwrap().raw(), b"tabs");
        assert_eq!(b.row(2).unwrap().raw(), b"\tlead");
    }

    #[test]
    fn render_slice_clips_to_offset_and_width() {
        let b = buffer(&["abcdef"]);
        let row = b.row(0).unwrap();
        assert_eq!(row.render_slice(2, 3), b"cde");
        assert_eq!(row.render_slice(4, 80), b"ef");
        assert_eq!(row.render_slice(10, 3), b"");
    }
}
