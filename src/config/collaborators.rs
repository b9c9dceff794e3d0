//! Late-bound handles forwarded to the image generator
//!
//! The resolver never calls these itself. It only decides which
//! implementation the generator gets to use.

use std::collections::BTreeSet;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::debug;
use walkdir::WalkDir;

use super::defaults::{HOST_MODULES_FILE, SYSFS_DEVICES};

type AliasFn = dyn Fn() -> io::Result<BTreeSet<String>> + Send + Sync;

/// Enumerates the modalias strings of the devices present on the host
#[derive(Clone)]
pub struct AliasReader(Arc<AliasFn>);

impl AliasReader {
    pub fn new<F>(read: F) -> Self
    where
        F: Fn() -> io::Result<BTreeSet<String>> + Send + Sync + 'static,
    {
        Self(Arc::new(read))
    }

    /// Reader scanning the live sysfs device tree
    pub fn sysfs() -> Self {
        Self::new(|| read_modaliases(Path::new(SYSFS_DEVICES)))
    }

    pub fn read(&self) -> io::Result<BTreeSet<String>> {
        (self.0)()
    }
}

impl Default for AliasReader {
    fn default() -> Self {
        Self::sysfs()
    }
}

impl fmt::Debug for AliasReader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AliasReader(..)")
    }
}

/// Collect the contents of every `modalias` file below `root`.
///
/// Unreadable entries are skipped; sysfs has plenty of them.
pub fn read_modaliases(root: &Path) -> io::Result<BTreeSet<String>> {
    if !root.is_dir() {
        return Err(io::Error::new(
            io::ErrorKind::NotFound,
            format!("{} is not a directory", root.display()),
        ));
    }

    let mut aliases = BTreeSet::new();
    for entry in WalkDir::new(root).follow_links(false).into_iter().filter_map(Result::ok) {
        if !entry.file_type().is_file() || entry.file_name() != "modalias" {
            continue;
        }
        match fs::read_to_string(entry.path()) {
            Ok(content) => {
                let alias = content.trim();
                if !alias.is_empty() {
                    aliases.insert(alias.to_string());
                }
            }
            Err(e) => debug!("skipping {}: {}", entry.path().display(), e),
        }
    }

    Ok(aliases)
}

/// Handles the resolver copies into every configuration it produces
#[derive(Debug, Clone)]
pub struct Collaborators {
    pub device_aliases: AliasReader,
    pub host_modules_file: PathBuf,
}

impl Default for Collaborators {
    fn default() -> Self {
        Self {
            device_aliases: AliasReader::sysfs(),
            host_modules_file: PathBuf::from(HOST_MODULES_FILE),
        }
    }
}
