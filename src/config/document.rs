//! User config document (/etc/booster.yaml)
//!
//! The declarative half of the generator configuration. Every key is
//! optional and unknown keys are ignored, so an empty file and a missing
//! file mean the same thing.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use super::duration::parse_duration;
use super::merge::split_list;
use super::resolved::{NetworkConfig, StaticNetwork};
use super::ConfigError;

/// `network` section of the document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkSection {
    #[serde(default)]
    pub dhcp: Option<bool>,

    /// e.g. 10.0.2.15/24
    #[serde(default)]
    pub ip: Option<String>,

    /// e.g. 10.0.2.255
    #[serde(default)]
    pub gateway: Option<String>,

    /// Comma-separated list of ips, e.g. 10.0.1.1,8.8.8.8
    #[serde(default)]
    pub dns_servers: Option<String>,
}

impl NetworkSection {
    fn dhcp(&self) -> bool {
        self.dhcp.unwrap_or(false)
    }

    fn has_static_address(&self) -> bool {
        let set = |v: &Option<String>| v.as_deref().is_some_and(|s| !s.is_empty());
        set(&self.ip) || set(&self.gateway)
    }
}

/// The document as written by the user
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserConfig {
    #[serde(default)]
    pub network: Option<NetworkSection>,

    /// Add a wide range of modules so the image boots on other machines
    #[serde(default)]
    pub universal: Option<bool>,

    /// Comma-separated list of extra modules
    #[serde(default)]
    pub modules: Option<String>,

    /// Output file compression, checked by the image builder
    #[serde(default)]
    pub compression: Option<String>,

    /// How long init waits for the root filesystem
    #[serde(default)]
    pub mount_timeout: Option<String>,

    /// Comma-separated list of files to add to the image
    #[serde(default)]
    pub extra_files: Option<String>,

    /// Strip symbols from binaries, shared libraries and kernel modules
    #[serde(default)]
    pub strip: Option<bool>,
}

impl UserConfig {
    /// Parse a document. Cross-field rules are checked by [`validate`](Self::validate).
    pub fn parse(s: &str) -> Result<Self, ConfigError> {
        if is_blank(s) {
            return Ok(UserConfig::default());
        }
        // a document of just `~` or `null`
        let config: Option<UserConfig> = serde_yaml::from_str(s)?;
        Ok(config.unwrap_or_default())
    }

    /// Check the rules that span more than one key
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(net) = &self.network {
            if net.dhcp() && net.has_static_address() {
                return Err(ConfigError::Validation(
                    "network.(ip|gateway) cannot be used together with network.dhcp".to_string(),
                ));
            }
        }
        Ok(())
    }

    pub fn network_config(&self) -> NetworkConfig {
        match &self.network {
            None => NetworkConfig::None,
            Some(net) if net.dhcp() => NetworkConfig::Dhcp,
            Some(net) => NetworkConfig::Static(StaticNetwork {
                ip: net.ip.clone().unwrap_or_default(),
                gateway: net.gateway.clone().unwrap_or_default(),
                dns_servers: net.dns_servers.clone().unwrap_or_default(),
            }),
        }
    }

    pub fn universal(&self) -> bool {
        self.universal.unwrap_or(false)
    }

    pub fn strip(&self) -> bool {
        self.strip.unwrap_or(false)
    }

    pub fn module_list(&self) -> Vec<String> {
        split_list(self.modules.as_deref().unwrap_or_default())
    }

    pub fn extra_file_list(&self) -> Vec<String> {
        split_list(self.extra_files.as_deref().unwrap_or_default())
    }

    pub fn compression(&self) -> &str {
        self.compression.as_deref().unwrap_or_default()
    }

    /// Parsed `mount_timeout`; `None` when unset or zero
    pub fn mount_timeout(&self) -> Result<Option<Duration>, ConfigError> {
        let raw = match self.mount_timeout.as_deref() {
            None | Some("") => return Ok(None),
            Some(raw) => raw,
        };
        let timeout = parse_duration(raw).map_err(|e| ConfigError::Duration {
            value: raw.to_string(),
            reason: e.to_string(),
        })?;
        Ok(Some(timeout).filter(|t| !t.is_zero()))
    }
}

/// Where a document came from
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentSource {
    pub path: PathBuf,

    /// SHA-256 of the raw file bytes
    pub digest: String,
}

/// A document read from disk together with its provenance
#[derive(Debug, Clone)]
pub struct LoadedDocument {
    pub config: UserConfig,
    pub source: DocumentSource,
}

impl LoadedDocument {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let bytes = fs::read(path).map_err(|e| ConfigError::Read {
            path: path.to_path_buf(),
            source: e,
        })?;

        let mut hasher = Sha256::new();
        hasher.update(&bytes);
        let digest = hex::encode(hasher.finalize());

        let contents = String::from_utf8(bytes)
            .map_err(|e| ConfigError::Encoding(format!("{}: {}", path.display(), e)))?;
        let config = UserConfig::parse(&contents)?;

        Ok(Self {
            config,
            source: DocumentSource {
                path: path.to_path_buf(),
                digest,
            },
        })
    }
}

/// True when the text holds no YAML content at all
fn is_blank(s: &str) -> bool {
    s.lines().map(str::trim).all(|l| l.is_empty() || l.starts_with('#'))
}
