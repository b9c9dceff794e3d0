//! Host inspection
//!
//! Reads ambient host state that cannot be expressed as a flag or a
//! config option. Currently this is only the release identifier of the
//! running kernel, which picks the module tree the image is built from.

mod uname;

pub use uname::{release_from_buffer, Uname};

use std::io;

/// Errors raised while querying the host
#[derive(Debug, thiserror::Error)]
pub enum HostError {
    #[error("uname() failed: {0}")]
    Query(#[source] io::Error),

    #[error("kernel release is not valid UTF-8: {0}")]
    Encoding(#[from] std::str::Utf8Error),

    #[error("kernel release is empty")]
    Empty,

    #[error("querying the kernel release is not supported on this platform")]
    Unsupported,
}

/// Source of the running kernel's release string.
///
/// The resolver only consults this when no kernel version was given on
/// the command line.
pub trait KernelRelease {
    fn kernel_release(&self) -> Result<String, HostError>;
}

/// A kernel release known up front
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedRelease(pub String);

impl FixedRelease {
    pub fn new(release: impl Into<String>) -> Self {
        Self(release.into())
    }
}

impl KernelRelease for FixedRelease {
    fn kernel_release(&self) -> Result<String, HostError> {
        if self.0.is_empty() {
            return Err(HostError::Empty);
        }
        Ok(self.0.clone())
    }
}

impl<T: KernelRelease + ?Sized> KernelRelease for &T {
    fn kernel_release(&self) -> Result<String, HostError> {
        (**self).kernel_release()
    }
}
