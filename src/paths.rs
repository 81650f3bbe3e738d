use anyhow::{Context, Result};
use directories::BaseDirs;
use std::path::{Path, PathBuf};

/// Environment variable overriding the config file location
pub const CONFIG_FILE_ENV: &str = "AWS_CONFIG_FILE";
/// Environment variable overriding the credentials file location
pub const CREDENTIALS_FILE_ENV: &str = "AWS_SHARED_CREDENTIALS_FILE";

/// Locations of the two files a profile is split across
#[derive(Debug, Clone)]
pub struct Paths {
    /// ~/.aws/config
    pub config_file: PathBuf,
    /// ~/.aws/credentials
    pub credentials_file: PathBuf,
}

impl Paths {
    /// Resolve both files, preferring explicit paths, then the provider's
    /// environment variables, then the defaults under `~/.aws`.
    pub fn resolve(
        config_file: Option<PathBuf>,
        credentials_file: Option<PathBuf>,
    ) -> Result<Self> {
        let base_dirs = BaseDirs::new().context("Failed to determine home directory")?;
        let home = base_dirs.home_dir();
        let aws_dir = home.join(".aws");

        let config_file = config_file
            .or_else(|| std::env::var_os(CONFIG_FILE_ENV).map(PathBuf::from))
            .map(|p| expand_home(&p, home))
            .unwrap_or_else(|| aws_dir.join("config"));
        let credentials_file = credentials_file
            .or_else(|| std::env::var_os(CREDENTIALS_FILE_ENV).map(PathBuf::from))
            .map(|p| expand_home(&p, home))
            .unwrap_or_else(|| aws_dir.join("credentials"));

        Ok(Self {
            config_file,
            credentials_file,
        })
    }
}

/// Replace a leading `~` component with `home`.
pub fn expand_home(path: &Path, home: &Path) -> PathBuf {
    match path.strip_prefix("~") {
        Ok(rest) => home.join(rest),
        Err(_) => path.to_path_buf(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        // SAFETY: tests touching the environment run serially.
        unsafe {
            std::env::remove_var(CONFIG_FILE_ENV);
            std::env::remove_var(CREDENTIALS_FILE_ENV);
        }
    }

    #[test]
    fn test_expand_home() {
        let home = Path::new("/home/me");
        assert_eq!(
            expand_home(Path::new("~/.aws/config"), home),
            PathBuf::from("/home/me/.aws/config")
        );
        assert_eq!(expand_home(Path::new("~"), home), PathBuf::from("/home/me"));
        assert_eq!(expand_home(Path::new("/etc/aws"), home), PathBuf::from("/etc/aws"));
        assert_eq!(expand_home(Path::new("~other/x"), home), PathBuf::from("~other/x"));
    }

    #[test]
    #[serial]
    fn test_default_paths() {
        clear_env();
        let paths = Paths::resolve(None, None).unwrap();
        assert!(paths.config_file.ends_with(".aws/config"));
        assert!(paths.credentials_file.ends_with(".aws/credentials"));
    }

    #[test]
    #[serial]
    fn test_env_overrides() {
        clear_env();
        // SAFETY: serialized with the other environment tests.
        unsafe {
            std::env::set_var(CONFIG_FILE_ENV, "/tmp/aws-config");
            std::env::set_var(CREDENTIALS_FILE_ENV, "~/creds");
        }
        let paths = Paths::resolve(None, None).unwrap();
        clear_env();

        assert_eq!(paths.config_file, PathBuf::from("/tmp/aws-config"));
        assert!(paths.credentials_file.is_absolute());
        assert!(paths.credentials_file.ends_with("creds"));
    }

    #[test]
    #[serial]
    fn test_explicit_paths_beat_env() {
        clear_env();
        // SAFETY: serialized with the other environment tests.
        unsafe {
            std::env::set_var(CONFIG_FILE_ENV, "/tmp/from-env");
        }
        let paths = Paths::resolve(Some(PathBuf::from("/tmp/from-flag")), None).unwrap();
        clear_env();

        assert_eq!(paths.config_file, PathBuf::from("/tmp/from-flag"));
    }
}
