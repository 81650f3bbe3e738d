//! Section locator.
//!
//! A single pass over the lines of an INI file that tags every line with the
//! section it belongs to, relative to one target header.

use crate::section::{header_matches, parse_header};

/// Where a line sits relative to the target section
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// Before the first header of the file
    Preamble,
    /// Header line of the target section
    TargetHeader,
    /// Any line under the target header, up to the next header
    TargetBody,
    /// Header line of some other section
    OtherHeader,
    /// Any line under some other header
    OtherBody,
}

/// Which sections titled like the target count as the target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Matches {
    /// Only the first one; later duplicates are treated like any other section
    First,
    /// Every one of them
    Every,
}

/// Tag each line with its [`LineKind`].
pub fn classify_lines(lines: &[&str], target: &str, matches: Matches) -> Vec<LineKind> {
    let mut kinds = Vec::with_capacity(lines.len());
    let mut current = LineKind::Preamble;
    let mut found = false;

    for line in lines {
        let kind = match parse_header(line) {
            Some(header)
                if (!found || matches == Matches::Every) && header_matches(header, target) =>
            {
                found = true;
                current = LineKind::TargetBody;
                LineKind::TargetHeader
            }
            Some(_) => {
                current = LineKind::OtherBody;
                LineKind::OtherHeader
            }
            None => current,
        };
        kinds.push(kind);
    }

    kinds
}

/// Split text into lines, keeping each line's terminator.
pub fn split_lines(text: &str) -> Vec<&str> {
    text.split_inclusive('\n').collect()
}

/// Whether any line of `kinds` is a header
pub fn has_sections(kinds: &[LineKind]) -> bool {
    kinds
        .iter()
        .any(|k| matches!(k, LineKind::TargetHeader | LineKind::OtherHeader))
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::LineKind::*;

    #[test]
    fn test_classify_basic() {
        let text = "# top\n[a]\nx = 1\n\n[b]\ny = 2\n\n[c]\nz = 3\n";
        let lines = split_lines(text);
        assert_eq!(
            classify_lines(&lines, "b", Matches::First),
            vec![
                Preamble,
                OtherHeader,
                OtherBody,
                OtherBody,
                TargetHeader,
                TargetBody,
                TargetBody,
                OtherHeader,
                OtherBody
            ]
        );
    }

    #[test]
    fn test_classify_duplicate_headers() {
        let lines = split_lines("[a]\n[b]\nx = 1\n[a]\ny = 2\n");
        assert_eq!(
            classify_lines(&lines, "a", Matches::First),
            vec![TargetHeader, OtherHeader, OtherBody, OtherHeader, OtherBody]
        );
        assert_eq!(
            classify_lines(&lines, "a", Matches::Every),
            vec![TargetHeader, OtherHeader, OtherBody, TargetHeader, TargetBody]
        );
    }

    #[test]
    fn test_classify_comment_is_not_header() {
        let lines = split_lines("[a]\n# [b]\n");
        assert_eq!(classify_lines(&lines, "b", Matches::First), vec![OtherHeader, OtherBody]);
    }

    #[test]
    fn test_split_lines_keeps_missing_final_newline() {
        assert_eq!(split_lines("[a]\nx = 1"), vec!["[a]\n", "x = 1"]);
        assert!(split_lines("").is_empty());
    }

    #[test]
    fn test_has_sections() {
        assert!(!has_sections(&classify_lines(&split_lines("x = 1\n"), "a", Matches::First)));
        assert!(has_sections(&classify_lines(&split_lines("[b]\n"), "a", Matches::First)));
    }
}
