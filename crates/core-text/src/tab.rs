//! Tab expansion between raw and render coordinates.
//!
//! A raw tab byte occupies a variable number of screen cells: it advances
//! the render column to the next multiple of the tab-stop width. Every
//! other byte occupies exactly one cell. Edits address raw columns while
//! the viewport and cursor placement work in render columns, so the two
//! helpers here are the only place the mapping lives.
//!
//! Both functions are pure; `Row` caches the expanded form and recomputes it
//! on every mutation.

pub const TAB: u8 = b'\t';

/// Default tab-stop width used when no configuration overrides it.
pub const DEFAULT_TAB_STOP: usize = 4;

#[inline]
fn next_stop(render_col: usize, tab_stop: usize) -> usize {
    render_col + (tab_stop - render_col % tab_stop)
}

/// Expand every tab in `raw` with spaces up to the next tab stop; all other
/// bytes are copied unchanged.
pub fn expand_tabs(raw: &[u8], tab_stop: usize) -> Vec<u8> {
    let tab_stop = tab_stop.max(1);
    let tabs = raw.iter().filter(|&&b| b == TAB).count();
    let mut out = Vec::with_capacity(raw.len() + tabs * (tab_stop - 1));
    for &b in raw {
        if b == TAB {
            let target = next_stop(out.len(), tab_stop);
            out.resize(target, b' ');
        } else {
            out.push(b);
        }
    }
    out
}

/// Map a raw column to its render column.
///
/// Columns past the end of `raw` (the Insert-mode append position) count one
/// cell each, keeping the mapping monotone.
pub fn raw_to_render_column(raw: &[u8], raw_col: usize, tab_stop: usize) -> usize {
    let tab_stop = tab_stop.max(1);
    let walked = raw_col.min(raw.len());
    let mut rx = 0usize;
    for &b in &raw[..walked] {
        if b == TAB {
            rx = next_stop(rx, tab_stop);
        } else {
            rx += 1;
        }
    }
    rx + (raw_col - walked)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expands_leading_tab_to_full_stop() {
        assert_eq!(expand_tabs(b"\tx", 4), b"    x".to_vec());
    }

    #[test]
    fn expands_mid_row_tab_to_next_stop_only() {
        assert_eq!(expand_tabs(b"ab\tc", 4), b"ab  c".to_vec());
        assert_eq!(expand_tabs(b"abcd\te", 4), b"abcd    e".to_vec());
    }

    #[test]
    fn non_tab_bytes_copied_verbatim() {
        assert_eq!(expand_tabs(b"plain text", 8), b"plain text".to_vec());
    }

    #[test]
    fn render_column_accounts_for_tabs_before_cursor() {
        let raw = b"\tab\tc";
        assert_eq!(raw_to_render_column(raw, 0, 4), 0);
        assert_eq!(raw_to_render_column(raw, 1, 4), 4);
        assert_eq!(raw_to_render_column(raw, 3, 4), 6);
        assert_eq!(raw_to_render_column(raw, 4, 4), 8);
        assert_eq!(raw_to_render_column(raw, 5, 4), 9);
    }

    #[test]
    fn render_column_past_end_counts_single_cells() {
        assert_eq!(raw_to_render_column(b"\t", 2, 4), 5);
    }

    #[test]
    fn zero_tab_stop_treated_as_one() {
        assert_eq!(expand_tabs(b"a\tb", 0), b"a b".to_vec());
        assert_eq!(raw_to_render_column(b"a\tb", 3, 0), 3);
    }
}
