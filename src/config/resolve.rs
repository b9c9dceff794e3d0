//! Configuration resolution
//!
//! Combines the optional config document with the command-line override
//! set into one [`GeneratorConfig`]. Resolution is all-or-nothing: the
//! first problem aborts it and is returned to the caller.

use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use super::collaborators::Collaborators;
use super::defaults::{modules_dir_for, DEFAULT_COMPRESSION};
use super::document::{LoadedDocument, UserConfig};
use super::merge::{either, first_non_empty};
use super::overrides::CliOverrides;
use super::resolved::GeneratorConfig;
use crate::host::{HostError, KernelRelease, Uname};

/// Produces generator configurations.
///
/// Holds only the injected host capabilities; nothing is cached between
/// calls to [`Resolver::resolve`].
#[derive(Debug, Clone)]
pub struct Resolver<K> {
    inspector: K,
    collaborators: Collaborators,
}

impl Resolver<Uname> {
    /// Resolver backed by the live host
    pub fn host() -> Self {
        Self::new(Uname)
    }
}

impl<K: KernelRelease> Resolver<K> {
    pub fn new(inspector: K) -> Self {
        Self {
            inspector,
            collaborators: Collaborators::default(),
        }
    }

    /// Replace the handles forwarded to the image generator
    pub fn with_collaborators(mut self, collaborators: Collaborators) -> Self {
        self.collaborators = collaborators;
        self
    }

    /// Resolve the configuration.
    ///
    /// `document` of `None` behaves like an empty config file.
    pub fn resolve(
        &self,
        document: Option<&Path>,
        overrides: CliOverrides,
    ) -> Result<GeneratorConfig, ConfigError> {
        let (user, source) = match document {
            Some(path) => {
                let loaded = LoadedDocument::load(path)?;
                debug!(
                    "loaded config {} (sha256 {})",
                    loaded.source.path.display(),
                    loaded.source.digest
                );
                (loaded.config, Some(loaded.source))
            }
            None => (UserConfig::default(), None),
        };

        user.validate()?;

        let network = user.network_config();
        let modules = user.module_list();
        let extra_files = user.extra_file_list();
        let mount_timeout = user.mount_timeout()?;

        let compression = first_non_empty([overrides.compression.as_str(), user.compression()])
            .unwrap_or(DEFAULT_COMPRESSION)
            .to_string();

        let kernel_version = if overrides.kernel_version.is_empty() {
            let release = self.inspector.kernel_release()?;
            debug!("using running kernel {}", release);
            release
        } else {
            overrides.kernel_version
        };
        let modules_dir = modules_dir_for(&kernel_version);

        let config = GeneratorConfig {
            network,
            universal: either(user.universal(), overrides.universal),
            modules,
            compression,
            extra_files,
            mount_timeout,
            output: overrides.output,
            force_overwrite: overrides.force,
            init_binary: overrides.init_binary,
            kernel_version,
            modules_dir,
            debug: overrides.debug,
            strip_binaries: either(user.strip(), overrides.strip),
            device_aliases: self.collaborators.device_aliases.clone(),
            host_modules_file: self.collaborators.host_modules_file.clone(),
            document: source,
        };

        debug!(
            kernel = config.kernel_version(),
            compression = config.compression(),
            universal = config.universal(),
            strip = config.strip_binaries(),
            "resolved generator config"
        );
        Ok(config)
    }
}

/// Pick the config document to read.
///
/// An explicit path is always used. Otherwise `default` is used when it
/// exists; a missing default means no document at all.
pub fn select_document(
    explicit: Option<PathBuf>,
    default: &Path,
) -> Result<Option<PathBuf>, ConfigError> {
    if let Some(path) = explicit.filter(|p| !p.as_os_str().is_empty()) {
        return Ok(Some(path));
    }

    match default.metadata() {
        Ok(_) => {
            info!("using config {}", default.display());
            Ok(Some(default.to_path_buf()))
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            debug!("{} not found, using empty config", default.display());
            Ok(None)
        }
        Err(e) => Err(ConfigError::Read {
            path: default.to_path_buf(),
            source: e,
        }),
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse YAML: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Config file is not valid UTF-8: {0}")]
    Encoding(String),

    #[error("Unable to parse mount timeout value {value:?}: {reason}")]
    Duration { value: String, reason: String },

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Unable to determine kernel version: {0}")]
    Host(#[from] HostError),
}
