//! Section naming and header recognition.
//!
//! The config file and the credentials file disagree on how a profile's section
//! is titled: credentials use the bare profile name, config prefixes every
//! profile except `default` with `profile `.

/// Name used when no `--profile` is given
pub const DEFAULT_PROFILE: &str = "default";

const CONFIG_PROFILE_PREFIX: &str = "profile ";

/// Header of a profile's section in the config file
pub fn section_header_for_config(profile_name: &str) -> String {
    if profile_name == DEFAULT_PROFILE {
        DEFAULT_PROFILE.to_string()
    } else {
        format!("{CONFIG_PROFILE_PREFIX}{profile_name}")
    }
}

/// Header of a profile's section in the credentials file
pub fn section_header_for_credentials(profile_name: &str) -> String {
    profile_name.to_string()
}

/// Profile name for a config file header, or `None` for non-profile sections
/// such as `sso-session` or `services` blocks.
pub fn profile_name_from_config_header(header: &str) -> Option<&str> {
    if header == DEFAULT_PROFILE {
        return Some(DEFAULT_PROFILE);
    }
    let name = header.strip_prefix(CONFIG_PROFILE_PREFIX)?.trim();
    let name = name
        .strip_prefix('"')
        .and_then(|n| n.strip_suffix('"'))
        .unwrap_or(name);
    if name.is_empty() { None } else { Some(name) }
}

/// Recognize a section header line and return the text between the brackets.
///
/// Leading whitespace is allowed and anything after the closing bracket is
/// ignored. Comment lines never count as headers.
pub fn parse_header(line: &str) -> Option<&str> {
    let trimmed = line.trim_start();
    if trimmed.starts_with('#') || trimmed.starts_with(';') {
        return None;
    }
    let rest = trimmed.strip_prefix('[')?;
    let end = rest.find(']')?;
    if end == 0 { None } else { Some(&rest[..end]) }
}

/// Whether a header found in a file names the `target` section.
///
/// `profile dev` also matches the quoted spelling `profile "dev"`.
pub fn header_matches(found: &str, target: &str) -> bool {
    if found == target {
        return true;
    }
    match target.split_once(' ') {
        Some((kind, name)) => found == format!("{kind} \"{name}\""),
        None => false,
    }
}
