//! Generator configuration
//!
//! Resolves the build configuration from two sources:
//! 1. The optional config document (/etc/booster.yaml)
//! 2. Command-line overrides
//!
//! plus the running kernel's release when no kernel version is given.

mod collaborators;
pub mod defaults;
mod document;
mod duration;
mod merge;
mod overrides;
mod resolve;
mod resolved;

pub use collaborators::{read_modaliases, AliasReader, Collaborators};
pub use document::{DocumentSource, LoadedDocument, NetworkSection, UserConfig};
pub use duration::{parse_duration, DurationError};
pub use merge::{either, first_non_empty, split_list};
pub use overrides::CliOverrides;
pub use resolve::{select_document, ConfigError, Resolver};
pub use resolved::{GeneratorConfig, NetworkConfig, StaticNetwork};
