//! Test utilities shared across test modules
//!
//! This module provides common helper functions for testing, avoiding duplication
//! across multiple test suites.

use crate::paths::Paths;
use tempfile::TempDir;

/// Create a Paths struct for testing using a temporary directory
///
/// Both files live under `.aws/` inside the temp directory, mimicking the real
/// ~/.aws/ layout. Neither file is created.
pub fn setup_test_paths(temp_dir: &TempDir) -> Paths {
    Paths {
        config_file: temp_dir.path().join(".aws/config"),
        credentials_file: temp_dir.path().join(".aws/credentials"),
    }
}
