//! Profile store.
//!
//! Implements `list`, `get`, `set` and `delete` on top of the section
//! rewriter and writer. Every operation reads the files it needs, computes the
//! new content and writes it back; nothing is cached between operations.
//!
//! Known limitations: there is no locking, so two processes editing the same
//! files can lose each other's changes, and a `set` touching both files writes
//! them one after another without rolling back the first if the second fails.

use std::fmt;
use std::path::Path;

use tracing::debug;

use crate::error::{ProfileError, Result};
use crate::fs_utils::{read_text, write_atomic};
use crate::ini::IniDocument;
use crate::key_value::{KeyValue, Options, split_key_value};
use crate::paths::Paths;
use crate::rewrite::{RewriteMode, rewrite};
use crate::section::{
    profile_name_from_config_header, section_header_for_config, section_header_for_credentials,
};
use crate::writer::write_section;

/// Keys that are stored in the credentials file instead of the config file
pub const CREDENTIAL_KEYS: [&str; 3] = [
    "aws_access_key_id",
    "aws_secret_access_key",
    "aws_session_token",
];

pub fn is_credential_key(key: &str) -> bool {
    CREDENTIAL_KEYS.contains(&key)
}

/// One of the two files a profile is split across
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileFile {
    Config,
    Credentials,
}

impl ProfileFile {
    /// Section header of `profile` in this file
    pub fn header(self, profile: &str) -> String {
        match self {
            Self::Config => section_header_for_config(profile),
            Self::Credentials => section_header_for_credentials(profile),
        }
    }

    pub fn path(self, paths: &Paths) -> &Path {
        match self {
            Self::Config => &paths.config_file,
            Self::Credentials => &paths.credentials_file,
        }
    }
}

impl fmt::Display for ProfileFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config => write!(f, "config"),
            Self::Credentials => write!(f, "credentials"),
        }
    }
}

/// Which files `delete` touches
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteScope {
    ConfigOnly,
    CredentialsOnly,
    Both,
}

impl DeleteScope {
    /// Both files unless exactly one of the flags narrows the scope
    pub fn from_flags(config: bool, credentials: bool) -> Self {
        match (config, credentials) {
            (true, false) => Self::ConfigOnly,
            (false, true) => Self::CredentialsOnly,
            _ => Self::Both,
        }
    }

    pub fn files(self) -> &'static [ProfileFile] {
        match self {
            Self::ConfigOnly => &[ProfileFile::Config],
            Self::CredentialsOnly => &[ProfileFile::Credentials],
            Self::Both => &[ProfileFile::Config, ProfileFile::Credentials],
        }
    }
}

/// Arguments of a `set`
#[derive(Debug, Clone, Default)]
pub struct SetRequest {
    /// Raw `key=value` tokens
    pub options: Vec<String>,
    pub empty_config: bool,
    pub empty_credentials: bool,
}

/// A write performed by `set`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetStep {
    /// The profile's section in this file was emptied
    Emptied(ProfileFile),
    /// The profile's section in this file now holds these keys
    Wrote(ProfileFile, Vec<String>),
}

/// Result of deleting a profile's section from one file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteOutcome {
    pub file: ProfileFile,
    pub removed: bool,
}

/// Split `key=value` tokens into config and credentials options.
///
/// Fails on the first malformed token, before anything is written.
pub fn partition_options(tokens: &[String]) -> Result<(Options, Options)> {
    let mut config = Options::new();
    let mut credentials = Options::new();
    for token in tokens {
        let KeyValue { key, value } = split_key_value(token, '=')?;
        if is_credential_key(&key) {
            credentials.insert(key, value);
        } else {
            config.insert(key, value);
        }
    }
    Ok((config, credentials))
}

#[derive(Debug, Clone)]
pub struct ProfileStore {
    paths: Paths,
}

impl ProfileStore {
    pub fn new(paths: Paths) -> Self {
        Self { paths }
    }

    pub fn paths(&self) -> &Paths {
        &self.paths
    }

    fn read_document(&self, file: ProfileFile) -> Result<Option<IniDocument>> {
        Ok(read_text(file.path(&self.paths))?.map(|text| IniDocument::parse(&text)))
    }

    /// Profile names found in the config file, in file order
    pub fn list(&self) -> Result<Vec<String>> {
        let Some(doc) = self.read_document(ProfileFile::Config)? else {
            return Ok(Vec::new());
        };

        let mut names: Vec<String> = Vec::new();
        for name in doc.headers().filter_map(profile_name_from_config_header) {
            if !names.iter().any(|n| n == name) {
                names.push(name.to_string());
            }
        }
        Ok(names)
    }

    /// Options of `profile` in the config file.
    ///
    /// With no `keys`, every option is returned in file order. Otherwise the
    /// requested keys are returned in the order asked, and a key missing from
    /// the section is an error.
    pub fn get(&self, profile: &str, keys: &[String]) -> Result<Vec<KeyValue>> {
        let file = ProfileFile::Config;
        let header = file.header(profile);
        let path = file.path(&self.paths);
        let missing_section = || ProfileError::MissingSection {
            section: header.clone(),
            path: path.to_path_buf(),
        };

        let doc = self.read_document(file)?.ok_or_else(missing_section)?;
        let section = doc.section(&header).ok_or_else(missing_section)?;

        if keys.is_empty() {
            return Ok(section.options.iter().cloned().collect());
        }

        keys.iter()
            .map(|key| {
                section
                    .options
                    .get(key)
                    .map(|value| KeyValue {
                        key: key.clone(),
                        value: value.to_string(),
                    })
                    .ok_or_else(|| ProfileError::MissingKey {
                        key: key.clone(),
                        section: header.clone(),
                    })
            })
            .collect()
    }

    /// Write exactly `options` into the profile's section of `file`, keeping
    /// the section's position. Previously held keys not in `options` are
    /// dropped.
    pub fn write_options(&self, file: ProfileFile, profile: &str, options: &Options) -> Result<()> {
        write_section(file.path(&self.paths), &file.header(profile), options, true)
    }

    /// Leave the profile's section in `file` with a header and no options
    pub fn empty(&self, file: ProfileFile, profile: &str) -> Result<()> {
        self.write_options(file, profile, &Options::new())
    }

    /// Parse `request` and write it into both files.
    ///
    /// Credential keys go to the credentials file, everything else to the
    /// config file. All tokens are parsed before any file is touched.
    pub fn set(&self, profile: &str, request: &SetRequest) -> Result<Vec<SetStep>> {
        let (config, credentials) = partition_options(&request.options)?;
        let mut steps = Vec::new();

        for (file, empty_first, options) in [
            (ProfileFile::Config, request.empty_config, &config),
            (ProfileFile::Credentials, request.empty_credentials, &credentials),
        ] {
            if empty_first {
                debug!(%file, profile, "emptying profile section");
                self.empty(file, profile)?;
                steps.push(SetStep::Emptied(file));
            }
            if !options.is_empty() {
                debug!(%file, profile, keys = options.len(), "setting profile options");
                self.write_options(file, profile, options)?;
                steps.push(SetStep::Wrote(file, options.keys().map(str::to_string).collect()));
            }
        }

        Ok(steps)
    }

    /// Remove the profile's section from `file`.
    ///
    /// A missing file or section is left alone and reported as not removed.
    pub fn delete_section(&self, file: ProfileFile, profile: &str) -> Result<bool> {
        let path = file.path(&self.paths);
        let Some(text) = read_text(path)? else {
            return Ok(false);
        };

        let updated = rewrite(&text, &file.header(profile), RewriteMode::Delete);
        if updated == text {
            return Ok(false);
        }
        debug!(%file, profile, path = %path.display(), "deleting profile section");
        write_atomic(path, &updated)?;
        Ok(true)
    }

    pub fn delete(&self, profile: &str, scope: DeleteScope) -> Result<Vec<DeleteOutcome>> {
        scope
            .files()
            .iter()
            .map(|&file| {
                self.delete_section(file, profile)
                    .map(|removed| DeleteOutcome { file, removed })
            })
            .collect()
    }
}
