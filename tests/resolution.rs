//! Resolution tests
//!
//! Drives the public resolver API through the precedence and validation
//! rules a config document and the command line are combined under.

mod fixtures;

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::time::Duration;

use booster_generator::config::{
    AliasReader, CliOverrides, Collaborators, ConfigError, NetworkConfig, Resolver,
    StaticNetwork,
};
use booster_generator::host::{FixedRelease, HostError, KernelRelease};
use booster_generator::logging;

fn resolver() -> Resolver<FixedRelease> {
    logging::init_test();
    Resolver::new(FixedRelease::new("6.6.8-arch1-1"))
}

fn resolve_doc(contents: &str, overrides: CliOverrides) -> Result<booster_generator::GeneratorConfig, ConfigError> {
    let doc = fixtures::config_file(contents);
    resolver().resolve(Some(doc.path()), overrides)
}

// =============================================================================
// Network
// =============================================================================

mod network_tests {
    use super::*;

    #[test]
    fn test_dhcp_with_static_fields_rejected() {
        for doc in [
            "network:\n  dhcp: true\n  ip: 10.0.2.15/24\n",
            "network:\n  dhcp: true\n  gateway: 10.0.2.255\n",
            "network:\n  dhcp: true\n  ip: 10.0.2.15/24\n  gateway: 10.0.2.255\n",
        ] {
            let err = resolve_doc(doc, CliOverrides::default()).unwrap_err();
            assert!(
                matches!(err, ConfigError::Validation(_)),
                "expected validation error for {:?}, got {}",
                doc,
                err
            );
        }
    }

    #[test]
    fn test_no_network_key() {
        let config = resolve_doc("universal: true\n", CliOverrides::default()).unwrap();
        assert_eq!(config.network(), &NetworkConfig::None);
    }

    #[test]
    fn test_dhcp_mode() {
        let config = resolve_doc("network:\n  dhcp: true\n", CliOverrides::default()).unwrap();
        assert_eq!(config.network(), &NetworkConfig::Dhcp);
    }

    #[test]
    fn test_static_values_passed_verbatim() {
        let config = resolve_doc(
            "network:\n  ip: not-an-ip\n  dns_servers: 1.1.1.1,9.9.9.9\n",
            CliOverrides::default(),
        )
        .unwrap();
        assert_eq!(
            config.network(),
            &NetworkConfig::Static(StaticNetwork {
                ip: "not-an-ip".to_string(),
                gateway: String::new(),
                dns_servers: "1.1.1.1,9.9.9.9".to_string(),
            })
        );
    }
}

// =============================================================================
// Precedence
// =============================================================================

mod precedence_tests {
    use super::*;

    #[test]
    fn test_default_compression() {
        let config = resolver().resolve(None, CliOverrides::default()).unwrap();
        assert_eq!(config.compression(), "zstd");
    }

    #[test]
    fn test_cli_compression_beats_document() {
        let overrides = CliOverrides {
            compression: "gzip".to_string(),
            ..Default::default()
        };
        let config = resolve_doc("compression: zstd\n", overrides).unwrap();
        assert_eq!(config.compression(), "gzip");
    }

    #[test]
    fn test_universal_either_source() {
        let cli_on = CliOverrides {
            universal: true,
            ..Default::default()
        };
        assert!(resolve_doc("universal: false\n", cli_on).unwrap().universal());
        assert!(resolve_doc("universal: true\n", CliOverrides::default())
            .unwrap()
            .universal());
        assert!(!resolve_doc("universal: false\n", CliOverrides::default())
            .unwrap()
            .universal());
    }

    #[test]
    fn test_strip_either_source() {
        let cli_on = CliOverrides {
            strip: true,
            ..Default::default()
        };
        assert!(resolve_doc("strip: false\n", cli_on).unwrap().strip_binaries());
        assert!(resolve_doc("strip: true\n", CliOverrides::default())
            .unwrap()
            .strip_binaries());
    }

    #[test]
    fn test_explicit_kernel_version() {
        struct NeverCalled;
        impl KernelRelease for NeverCalled {
            fn kernel_release(&self) -> Result<String, HostError> {
                panic!("host must not be queried when the kernel version is given");
            }
        }

        let overrides = CliOverrides {
            kernel_version: "5.10.0".to_string(),
            ..Default::default()
        };
        let config = Resolver::new(NeverCalled).resolve(None, overrides).unwrap();
        assert_eq!(config.kernel_version(), "5.10.0");
        assert_eq!(config.modules_dir(), Path::new("/usr/lib/modules/5.10.0"));
    }

    #[test]
    fn test_host_kernel_version() {
        let config = resolver().resolve(None, CliOverrides::default()).unwrap();
        assert_eq!(config.kernel_version(), "6.6.8-arch1-1");
        assert_eq!(
            config.modules_dir(),
            Path::new("/usr/lib/modules/6.6.8-arch1-1")
        );
    }

    #[test]
    fn test_empty_host_release_is_fatal() {
        let err = Resolver::new(FixedRelease::new(""))
            .resolve(None, CliOverrides::default())
            .unwrap_err();
        assert!(matches!(err, ConfigError::Host(HostError::Empty)));
    }
}

// =============================================================================
// Document fields
// =============================================================================

mod document_tests {
    use super::*;

    #[test]
    fn test_module_order() {
        let config = resolve_doc("modules: a,b,c\n", CliOverrides::default()).unwrap();
        assert_eq!(config.modules(), ["a", "b", "c"]);
    }

    #[test]
    fn test_empty_or_absent_modules() {
        let config = resolve_doc("modules: \"\"\n", CliOverrides::default()).unwrap();
        assert!(config.modules().is_empty());
        let config = resolve_doc("strip: false\n", CliOverrides::default()).unwrap();
        assert!(config.modules().is_empty());
    }

    #[test]
    fn test_mount_timeout() {
        let config = resolve_doc("mount_timeout: 10s\n", CliOverrides::default()).unwrap();
        assert_eq!(config.mount_timeout(), Some(Duration::from_secs(10)));
    }

    #[test]
    fn test_bogus_mount_timeout() {
        let err = resolve_doc("mount_timeout: bogus\n", CliOverrides::default()).unwrap_err();
        assert!(matches!(err, ConfigError::Duration { .. }));
        assert!(err.to_string().contains("bogus"));
    }

    #[test]
    fn test_malformed_document() {
        let err = resolve_doc("network: [\n", CliOverrides::default()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_sample_document() {
        let path = fixtures::sample_config_path();
        let config = resolver()
            .resolve(Some(&path), CliOverrides::default())
            .unwrap();

        assert_eq!(config.modules(), ["nvme", "xhci_pci", "usbhid"]);
        assert_eq!(config.extra_files(), ["/usr/bin/fsck.ext4", "/etc/crypttab"]);
        assert_eq!(config.mount_timeout(), Some(Duration::from_secs(90)));
        assert!(config.strip_binaries());
        assert!(!config.universal());
        assert!(matches!(config.network(), NetworkConfig::Static(_)));

        let source = config.document().unwrap();
        assert_eq!(source.path, path);
        assert_eq!(source.digest.len(), 64);
    }

    #[test]
    fn test_missing_explicit_document() {
        let temp = tempfile::TempDir::new().unwrap();
        let missing: PathBuf = temp.path().join("absent.yaml");
        let err = resolver()
            .resolve(Some(&missing), CliOverrides::default())
            .unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
        assert!(err.to_string().contains("absent.yaml"));
    }
}

// =============================================================================
// Collaborators
// =============================================================================

mod collaborator_tests {
    use super::*;

    #[test]
    fn test_injected_collaborators_forwarded() {
        let collaborators = Collaborators {
            device_aliases: AliasReader::new(|| {
                Ok(BTreeSet::from(["pci:v00008086d00001533".to_string()]))
            }),
            host_modules_file: PathBuf::from("/tmp/modules"),
        };
        let config = resolver()
            .with_collaborators(collaborators)
            .resolve(None, CliOverrides::default())
            .unwrap();

        assert_eq!(config.host_modules_file(), Path::new("/tmp/modules"));
        let aliases = config.device_aliases().read().unwrap();
        assert!(aliases.contains("pci:v00008086d00001533"));
    }
}
