//! Section rewriter.
//!
//! Produces new file text with one section removed or emptied, leaving every
//! other byte of the file as it was.

use crate::locate::{LineKind, Matches, classify_lines, split_lines};

const SEPARATOR: &str = "\n";

/// What to do with the target section
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RewriteMode {
    /// Drop the header and its body
    Delete,
    /// Keep the header line, drop the body, so the section can be refilled at
    /// the same position
    DeleteKeepMarker,
    /// Drop the section; the caller appends a fresh one at end of file
    Replace,
}

impl RewriteMode {
    fn keeps_marker(self) -> bool {
        matches!(self, Self::DeleteKeepMarker)
    }

    /// Deleting drops every copy of a duplicated section; emptying only
    /// touches the first.
    fn matches(self) -> Matches {
        if self.keeps_marker() {
            Matches::First
        } else {
            Matches::Every
        }
    }
}

/// Rewrite a sequence of lines, returning the lines to keep.
///
/// Under [`RewriteMode::DeleteKeepMarker`] the blank line that used to end the
/// dropped body is restored as a single separator before the next header.
/// Under the deleting modes the body's trailing blank line goes with it, so
/// the following section moves up cleanly.
pub fn rewrite_lines<'a>(lines: &[&'a str], target: &str, mode: RewriteMode) -> Vec<&'a str> {
    let kinds = classify_lines(lines, target, mode.matches());
    let mut out = Vec::with_capacity(lines.len() + 1);
    let mut suppressing = false;

    for (line, kind) in lines.iter().zip(kinds) {
        match kind {
            LineKind::TargetHeader => {
                if mode.keeps_marker() {
                    out.push(*line);
                }
                suppressing = true;
            }
            LineKind::TargetBody => {}
            LineKind::OtherHeader => {
                if suppressing && mode.keeps_marker() {
                    out.push(SEPARATOR);
                }
                suppressing = false;
                out.push(*line);
            }
            LineKind::Preamble | LineKind::OtherBody => out.push(*line),
        }
    }

    out
}

/// Rewrite `text` with the section titled `target` deleted or emptied.
///
/// A missing section leaves the text unchanged.
pub fn rewrite(text: &str, target: &str, mode: RewriteMode) -> String {
    rewrite_lines(&split_lines(text), target, mode).concat()
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO: &str = "[x]\na = 1\n\n[y]\nb = 2\n";
    const THREE: &str = "[default]\nregion = us-east-1\n\n\
                         [profile dev]\nregion = eu-west-1\noutput = json\n\n\
                         [profile prod]\nregion = us-west-2\n";

    #[test]
    fn test_delete_missing_section_is_noop() {
        assert_eq!(rewrite(THREE, "profile nope", RewriteMode::Delete), THREE);
        assert_eq!(rewrite(THREE, "profile nope", RewriteMode::DeleteKeepMarker), THREE);
        assert_eq!(rewrite("", "x", RewriteMode::Delete), "");
    }

    #[test]
    fn test_delete_first_section() {
        assert_eq!(rewrite(TWO, "x", RewriteMode::Delete), "[y]\nb = 2\n");
    }

    #[test]
    fn test_delete_last_section() {
        assert_eq!(rewrite(TWO, "y", RewriteMode::Delete), "[x]\na = 1\n\n");
    }

    #[test]
    fn test_delete_middle_section() {
        assert_eq!(
            rewrite(THREE, "profile dev", RewriteMode::Delete),
            "[default]\nregion = us-east-1\n\n[profile prod]\nregion = us-west-2\n"
        );
    }

    #[test]
    fn test_delete_is_idempotent() {
        for header in ["default", "profile dev", "profile prod", "missing"] {
            let once = rewrite(THREE, header, RewriteMode::Delete);
            assert_eq!(rewrite(&once, header, RewriteMode::Delete), once);
        }

        let duplicated = "[x]\na = 1\n\n[y]\nb = 2\n\n[x]\nc = 3\n";
        let once = rewrite(duplicated, "x", RewriteMode::Delete);
        assert_eq!(once, "[y]\nb = 2\n\n");
        assert_eq!(rewrite(&once, "x", RewriteMode::Delete), once);
    }

    #[test]
    fn test_replace_drops_like_delete() {
        for header in ["default", "profile dev", "profile prod"] {
            assert_eq!(
                rewrite(THREE, header, RewriteMode::Replace),
                rewrite(THREE, header, RewriteMode::Delete)
            );
        }
    }

    #[test]
    fn test_keep_marker_restores_separator() {
        assert_eq!(
            rewrite(THREE, "profile dev", RewriteMode::DeleteKeepMarker),
            "[default]\nregion = us-east-1\n\n[profile dev]\n\n[profile prod]\nregion = us-west-2\n"
        );
    }

    #[test]
    fn test_keep_marker_last_section_adds_nothing() {
        assert_eq!(
            rewrite(TWO, "y", RewriteMode::DeleteKeepMarker),
            "[x]\na = 1\n\n[y]\n"
        );
    }

    #[test]
    fn test_keep_marker_without_blank_line_before_next_header() {
        assert_eq!(
            rewrite("[x]\na = 1\n[y]\nb = 2\n", "x", RewriteMode::DeleteKeepMarker),
            "[x]\n\n[y]\nb = 2\n"
        );
    }

    #[test]
    fn test_duplicate_sections() {
        let text = "[x]\na = 1\n\n[y]\nb = 2\n\n[x]\nc = 3\n";
        assert_eq!(rewrite(text, "x", RewriteMode::Delete), "[y]\nb = 2\n\n");
        assert_eq!(rewrite(text, "x", RewriteMode::Replace), "[y]\nb = 2\n\n");
        assert_eq!(
            rewrite(text, "x", RewriteMode::DeleteKeepMarker),
            "[x]\n\n[y]\nb = 2\n\n[x]\nc = 3\n"
        );
    }

    #[test]
    fn test_preamble_and_comments_preserved() {
        let text = "# managed by hand\n\n[x]\na = 1\n\n; keep me\n[y]\nb = 2\n";
        assert_eq!(
            rewrite(text, "y", RewriteMode::Delete),
            "# managed by hand\n\n[x]\na = 1\n\n; keep me\n"
        );
    }

    #[test]
    fn test_quoted_profile_header_is_matched() {
        let text = "[default]\na = 1\n\n[profile \"dev\"]\nb = 2\n";
        assert_eq!(
            rewrite(text, "profile dev", RewriteMode::Delete),
            "[default]\na = 1\n\n"
        );
    }
}
