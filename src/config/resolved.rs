//! Resolved generator configuration
//!
//! The single value handed to the image generator. It is only built by
//! [`Resolver`](super::Resolver) and cannot be changed afterwards.

use serde::Serialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use super::collaborators::AliasReader;
use super::document::DocumentSource;

/// Static network settings, passed through unvalidated
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StaticNetwork {
    pub ip: String,
    pub gateway: String,
    pub dns_servers: String,
}

/// How the initramfs brings up networking
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum NetworkConfig {
    #[default]
    None,
    Dhcp,
    Static(StaticNetwork),
}

#[derive(Debug, Clone, Serialize)]
pub struct GeneratorConfig {
    pub(crate) network: NetworkConfig,
    pub(crate) universal: bool,
    pub(crate) modules: Vec<String>,
    pub(crate) compression: String,
    pub(crate) extra_files: Vec<String>,
    pub(crate) mount_timeout: Option<Duration>,

    pub(crate) output: PathBuf,
    pub(crate) force_overwrite: bool,
    pub(crate) init_binary: PathBuf,

    pub(crate) kernel_version: String,
    pub(crate) modules_dir: PathBuf,

    pub(crate) debug: bool,
    pub(crate) strip_binaries: bool,

    #[serde(skip)]
    pub(crate) device_aliases: AliasReader,
    pub(crate) host_modules_file: PathBuf,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) document: Option<DocumentSource>,
}

impl GeneratorConfig {
    pub fn network(&self) -> &NetworkConfig {
        &self.network
    }

    pub fn universal(&self) -> bool {
        self.universal
    }

    /// Extra modules to force into the image, in document order
    pub fn modules(&self) -> &[String] {
        &self.modules
    }

    pub fn compression(&self) -> &str {
        &self.compression
    }

    pub fn extra_files(&self) -> &[String] {
        &self.extra_files
    }

    /// `None` means init waits for the root filesystem forever
    pub fn mount_timeout(&self) -> Option<Duration> {
        self.mount_timeout
    }

    pub fn output(&self) -> &Path {
        &self.output
    }

    pub fn force_overwrite(&self) -> bool {
        self.force_overwrite
    }

    pub fn init_binary(&self) -> &Path {
        &self.init_binary
    }

    pub fn kernel_version(&self) -> &str {
        &self.kernel_version
    }

    pub fn modules_dir(&self) -> &Path {
        &self.modules_dir
    }

    pub fn debug(&self) -> bool {
        self.debug
    }

    pub fn strip_binaries(&self) -> bool {
        self.strip_binaries
    }

    pub fn device_aliases(&self) -> &AliasReader {
        &self.device_aliases
    }

    pub fn host_modules_file(&self) -> &Path {
        &self.host_modules_file
    }

    /// The document this configuration was read from, if any
    pub fn document(&self) -> Option<&DocumentSource> {
        self.document.as_ref()
    }

    /// Serialize to JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
