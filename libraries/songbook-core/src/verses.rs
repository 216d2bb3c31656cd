//! Lyric verse splitting

/// Verse delimiter: one blank line
pub const VERSE_DELIMITER: &str = "\n\n";

/// Split lyric text into verses on the literal `"\n\n"` delimiter.
///
/// The split is exact: `"\r\n\r\n"` is not a delimiter and runs of blank
/// lines produce empty verses. Empty text yields a single empty verse.
pub fn split(text: &str) -> Vec<&str> {
    text.split(VERSE_DELIMITER).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_two_verses() {
        assert_eq!(split("v1\n\nv2"), vec!["v1", "v2"]);
    }

    #[test]
    fn test_split_keeps_single_newlines_inside_verse() {
        let text = "line one\nline two\n\nline three";
        assert_eq!(split(text), vec!["line one\nline two", "line three"]);
    }

    #[test]
    fn test_split_empty_text_is_one_empty_verse() {
        assert_eq!(split(""), vec![""]);
    }

    #[test]
    fn test_split_does_not_collapse_blank_lines() {
        assert_eq!(split("a\n\n\n\nb"), vec!["a", "", "b"]);
    }

    #[test]
    fn test_split_ignores_crlf() {
        assert_eq!(split("a\r\n\r\nb"), vec!["a\r\n\r\nb"]);
    }

    #[test]
    fn test_split_trailing_delimiter() {
        assert_eq!(split("a\n\n"), vec!["a", ""]);
    }
}
