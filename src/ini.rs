//! Read-only view of an INI file, used to answer `get` and `list`.
//!
//! Keys keep their case. Both `=` and `:` separate a key from its value.
//! Indented lines following an option continue that option's value, which is
//! how nested blocks such as `s3 =` are written in the config file.

use crate::key_value::Options;
use crate::section::{header_matches, parse_header};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IniSection {
    pub header: String,
    pub options: Options,
}

#[derive(Debug, Clone, Default)]
pub struct IniDocument {
    sections: Vec<IniSection>,
}

/// Whether a line is blank or a `#`/`;` comment
pub fn is_comment_or_blank(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with(';')
}

/// Split an option line into trimmed key and value at the first `=` or `:`.
pub fn parse_option(line: &str) -> Option<(&str, &str)> {
    if is_comment_or_blank(line) {
        return None;
    }
    let at = line.find(['=', ':'])?;
    let key = line[..at].trim();
    if key.is_empty() {
        return None;
    }
    Some((key, line[at + 1..].trim()))
}

fn is_continuation(line: &str) -> bool {
    line.starts_with([' ', '\t']) && !is_comment_or_blank(line)
}

impl IniDocument {
    pub fn parse(text: &str) -> Self {
        let mut sections: Vec<IniSection> = Vec::new();
        let mut last_key: Option<String> = None;

        for line in text.lines() {
            if let Some(header) = parse_header(line) {
                sections.push(IniSection {
                    header: header.to_string(),
                    options: Options::new(),
                });
                last_key = None;
                continue;
            }

            // Options before the first header have nowhere to live.
            let Some(section) = sections.last_mut() else {
                continue;
            };

            if is_continuation(line) {
                if let Some(value) = last_key
                    .as_deref()
                    .and_then(|key| section.options.get_mut(key))
                {
                    if !value.is_empty() {
                        value.push('\n');
                    }
                    value.push_str(line.trim());
                    continue;
                }
            }

            if let Some((key, value)) = parse_option(line) {
                section.options.insert(key, value);
                last_key = Some(key.to_string());
            }
        }

        Self { sections }
    }

    /// First section titled `header`
    pub fn section(&self, header: &str) -> Option<&IniSection> {
        self.sections
            .iter()
            .find(|s| header_matches(&s.header, header))
    }

    pub fn headers(&self) -> impl Iterator<Item = &str> {
        self.sections.iter().map(|s| s.header.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_option() {
        assert_eq!(parse_option("region = us-east-1\n"), Some(("region", "us-east-1")));
        assert_eq!(parse_option("region=us-east-1"), Some(("region", "us-east-1")));
        assert_eq!(parse_option("output: json"), Some(("output", "json")));
        assert_eq!(parse_option("s3 ="), Some(("s3", "")));
        assert_eq!(
            parse_option("role_arn = arn:aws:iam::1:role/x"),
            Some(("role_arn", "arn:aws:iam::1:role/x"))
        );
        assert_eq!(parse_option("# region = x"), None);
        assert_eq!(parse_option("   "), None);
        assert_eq!(parse_option("= value"), None);
        assert_eq!(parse_option("no separator"), None);
    }

    #[test]
    fn test_parse_document() {
        let doc = IniDocument::parse(
            "[default]\nregion = us-east-1\n\n\
             [profile dev]\n# comment\nRegion=eu-west-1\noutput = json\n",
        );
        assert_eq!(doc.headers().collect::<Vec<_>>(), ["default", "profile dev"]);

        let dev = doc.section("profile dev").unwrap();
        assert_eq!(dev.options.keys().collect::<Vec<_>>(), ["Region", "output"]);
        assert_eq!(dev.options.get("Region"), Some("eu-west-1"));
        assert!(doc.section("profile prod").is_none());
    }

    #[test]
    fn test_nested_values_are_continuations() {
        let doc = IniDocument::parse(
            "[default]\ns3 =\n  max_concurrent_requests = 20\n  multipart_threshold = 64MB\n\
             region = us-east-1\n",
        );
        let section = doc.section("default").unwrap();
        assert_eq!(
            section.options.get("s3"),
            Some("max_concurrent_requests = 20\nmultipart_threshold = 64MB")
        );
        assert_eq!(section.options.get("region"), Some("us-east-1"));
        assert_eq!(section.options.len(), 2);
    }

    #[test]
    fn test_first_duplicate_section_wins() {
        let doc = IniDocument::parse("[x]\na = 1\n\n[x]\na = 2\n");
        assert_eq!(doc.section("x").unwrap().options.get("a"), Some("1"));
    }

    #[test]
    fn test_options_before_first_header_are_ignored() {
        let doc = IniDocument::parse("stray = 1\n[x]\na = 1\n");
        assert_eq!(doc.headers().count(), 1);
        assert_eq!(doc.section("x").unwrap().options.len(), 1);
    }
}
