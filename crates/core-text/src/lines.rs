//! Splitting persisted text into rows.
//!
//! The on-disk format is plain text with `\n` separators. A final newline
//! terminates the last line rather than opening an empty one, so content
//! produced by `LineBuffer::rows_to_bytes` splits back into the same rows.
//! Trailing whitespace (including a `\r` left by CRLF files) is stripped per
//! line at load time.

/// Whitespace as classified by C `isspace` in the "C" locale.
#[inline]
pub fn is_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r' | 0x0b | 0x0c)
}

/// Return `line` without its trailing whitespace.
pub fn trim_trailing_whitespace(line: &[u8]) -> &[u8] {
    let end = line
        .iter()
        .rposition(|&b| !is_space(b))
        .map_or(0, |idx| idx + 1);
    &line[..end]
}

/// Split raw file content into lines (without their `\n` terminators).
pub fn split_lines(content: &[u8]) -> Vec<&[u8]> {
    if content.is_empty() {
        return Vec::new();
    }
    let body = content.strip_suffix(b"\n").unwrap_or(content);
    body.split(|&b| b == b'\n').collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_newline_does_not_open_a_line() {
        assert_eq!(split_lines(b"a\nb\n"), vec![&b"a"[..], &b"b"[..]]);
        assert_eq!(split_lines(b"a\nb"), vec![&b"a"[..], &b"b"[..]]);
    }

    #[test]
    fn blank_lines_survive_split() {
        assert_eq!(
            split_lines(b"\n\nx\n"),
            vec![&b""[..], &b""[..], &b"x"[..]]
        );
    }

    #[test]
    fn empty_content_has_no_lines() {
        assert!(split_lines(b"").is_empty());
    }

    #[test]
    fn trims_spaces_tabs_and_carriage_returns() {
        assert_eq!(trim_trailing_whitespace(b"code \t\r"), b"code");
        assert_eq!(trim_trailing_whitespace(b"  \t"), b"");
        assert_eq!(trim_trailing_whitespace(b"\tindented"), b"\tindented");
    }
}
