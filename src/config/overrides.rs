//! Command-line override set
//!
//! Built once by the entry point from parsed flags and handed to the
//! resolver by value. Empty strings mean "not given".

use std::path::PathBuf;

use super::defaults::{DEFAULT_INIT_BINARY, DEFAULT_OUTPUT};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliOverrides {
    /// Output initrd file
    pub output: PathBuf,

    /// Overwrite an existing output file
    pub force: bool,

    /// Booster `init` binary location
    pub init_binary: PathBuf,

    /// Output compression; wins over the document when non-empty
    pub compression: String,

    /// Kernel to build for; the running kernel when empty
    pub kernel_version: String,

    pub debug: bool,

    /// OR-ed with the document value
    pub universal: bool,

    /// OR-ed with the document value
    pub strip: bool,
}

impl Default for CliOverrides {
    fn default() -> Self {
        Self {
            output: PathBuf::from(DEFAULT_OUTPUT),
            force: false,
            init_binary: PathBuf::from(DEFAULT_INIT_BINARY),
            compression: String::new(),
            kernel_version: String::new(),
            debug: false,
            universal: false,
            strip: false,
        }
    }
}
