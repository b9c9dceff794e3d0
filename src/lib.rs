//! Booster generator - initramfs build configuration
//!
//! Resolves the configuration for a booster initramfs image from the
//! optional `/etc/booster.yaml` document, command-line overrides and the
//! running kernel, then hands it to the image generator.

pub mod config;
pub mod generator;
pub mod host;
pub mod logging;

pub use config::{CliOverrides, ConfigError, GeneratorConfig, NetworkConfig, Resolver};
pub use generator::{GenerateError, ImageGenerator, PlanWriter};
pub use host::{FixedRelease, HostError, KernelRelease, Uname};
