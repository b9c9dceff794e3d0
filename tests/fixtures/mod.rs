//! Shared fixtures for integration tests

use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

/// Path to the sample config document
pub fn sample_config_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/booster.yaml")
}

/// Write `contents` to a temporary config document
pub fn config_file(contents: &str) -> NamedTempFile {
    let mut temp = NamedTempFile::new().unwrap();
    temp.write_all(contents.as_bytes()).unwrap();
    temp.flush().unwrap();
    temp
}
