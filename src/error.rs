use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ProfileError>;

#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("invalid key value '{token}' expected format '<key>{separator}<value>'")]
    InvalidFormat { token: String, separator: char },
    #[error("no section [{section}] in {}", .path.display())]
    MissingSection { section: String, path: PathBuf },
    #[error("no option '{key}' in section [{section}]")]
    MissingKey { key: String, section: String },
    #[error("failed to access {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ProfileError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
