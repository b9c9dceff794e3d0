//! Built-in defaults
//!
//! Fixed values used when neither the config document nor the command
//! line provides one.

use std::path::{Path, PathBuf};

/// Config document read when `--config` is not given
pub const DEFAULT_CONFIG_PATH: &str = "/etc/booster.yaml";

/// Output image path
pub const DEFAULT_OUTPUT: &str = "booster.img";

/// Location of the booster `init` binary
pub const DEFAULT_INIT_BINARY: &str = "/usr/lib/booster/init";

/// Codec used when no compression is configured anywhere
pub const DEFAULT_COMPRESSION: &str = "zstd";

/// Root of the per-kernel module trees
pub const MODULES_ROOT: &str = "/usr/lib/modules";

/// Live list of loaded modules
pub const HOST_MODULES_FILE: &str = "/proc/modules";

/// Root scanned for device `modalias` files
pub const SYSFS_DEVICES: &str = "/sys/devices";

/// Module directory for a kernel release.
pub fn modules_dir_for(kernel_version: &str) -> PathBuf {
    Path::new(MODULES_ROOT).join(kernel_version)
}
