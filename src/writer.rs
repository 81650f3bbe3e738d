//! Section writer.
//!
//! Serializes options as `key = value` lines and splices them into file text,
//! then writes the file back.

use std::borrow::Cow;
use std::path::Path;

use tracing::debug;

use crate::error::Result;
use crate::fs_utils::{read_text, write_atomic};
use crate::ini::parse_option;
use crate::key_value::Options;
use crate::locate::{LineKind, Matches, classify_lines, has_sections, split_lines};
use crate::rewrite::{RewriteMode, rewrite};

fn option_line(key: &str, value: &str) -> String {
    format!("{key} = {value}\n")
}

fn ensure_newline(line: &mut Cow<'_, str>) {
    if !line.ends_with('\n') {
        line.to_mut().push('\n');
    }
}

/// Splice `options` into the section titled `header`.
///
/// Inside an existing section, an option line whose key is supplied is
/// rewritten in place and the remaining options are inserted after the last
/// option line (or right after the header). A missing section is appended at
/// the end of the text, preceded by one blank line when the text already has
/// sections and does not already end in a blank line.
pub fn splice_section(text: &str, header: &str, options: &Options) -> String {
    let lines = split_lines(text);
    let kinds = classify_lines(&lines, header, Matches::First);
    let mut out: Vec<Cow<'_, str>> = lines.iter().map(|l| Cow::Borrowed(*l)).collect();

    let Some(start) = kinds.iter().position(|k| *k == LineKind::TargetHeader) else {
        if let Some(last) = out.last_mut() {
            ensure_newline(last);
        }
        let ends_blank = lines.last().is_some_and(|l| l.trim().is_empty());
        if has_sections(&kinds) && !ends_blank {
            out.push(Cow::Borrowed("\n"));
        }
        out.push(Cow::Owned(format!("[{header}]\n")));
        for kv in options {
            out.push(Cow::Owned(option_line(&kv.key, &kv.value)));
        }
        return out.concat();
    };

    let mut pending = options.clone();
    let mut insert_after = start;
    let mut idx = start + 1;
    while idx < lines.len() && kinds[idx] == LineKind::TargetBody {
        let line = lines[idx];
        if let Some((key, _)) = parse_option(line) {
            insert_after = idx;
            // Indented lines belong to a nested value, never a top-level key.
            if !line.starts_with([' ', '\t']) {
                if let Some(value) = pending.get(key).map(str::to_string) {
                    out[idx] = Cow::Owned(option_line(key, &value));
                    pending = pending
                        .iter()
                        .filter(|kv| kv.key != key)
                        .cloned()
                        .collect();
                }
            }
        }
        idx += 1;
    }

    if pending.is_empty() {
        return out.concat();
    }

    ensure_newline(&mut out[insert_after]);
    let inserted: String = pending
        .iter()
        .map(|kv| option_line(&kv.key, &kv.value))
        .collect();
    out.insert(insert_after + 1, Cow::Owned(inserted));
    out.concat()
}

/// Write `options` into the section `header` of the file at `path`.
///
/// With `merge` the section keeps its position in the file; otherwise it is
/// removed and appended fresh at the end. Either way the section ends up
/// holding exactly `options`: keys it held before that are not supplied are
/// dropped. An empty `options` leaves a header-only section.
pub fn write_section(path: &Path, header: &str, options: &Options, merge: bool) -> Result<()> {
    let text = read_text(path)?.unwrap_or_default();
    let mode = if merge {
        RewriteMode::DeleteKeepMarker
    } else {
        RewriteMode::Replace
    };
    debug!(path = %path.display(), header, ?mode, keys = options.len(), "writing section");

    let cleared = rewrite(&text, header, mode);
    let updated = splice_section(&cleared, header, options);
    write_atomic(path, &updated)
}
