//! Kernel release lookup via `uname(2)`

use super::{HostError, KernelRelease};

/// Reads the release of the running kernel from the OS.
#[derive(Debug, Clone, Copy, Default)]
pub struct Uname;

impl KernelRelease for Uname {
    #[cfg(unix)]
    fn kernel_release(&self) -> Result<String, HostError> {
        use std::io;

        let mut uts: libc::utsname = unsafe { std::mem::zeroed() };
        let result = unsafe { libc::uname(&mut uts) };
        if result != 0 {
            return Err(HostError::Query(io::Error::last_os_error()));
        }

        // c_char is i8 on some targets
        let bytes: Vec<u8> = uts.release.iter().map(|&c| c as u8).collect();
        release_from_buffer(&bytes)
    }

    #[cfg(not(unix))]
    fn kernel_release(&self) -> Result<String, HostError> {
        Err(HostError::Unsupported)
    }
}

/// Decode a NUL-padded release field.
///
/// Everything up to the first NUL is the release; a buffer without a NUL
/// is taken whole.
pub fn release_from_buffer(buf: &[u8]) -> Result<String, HostError> {
    let end = buf.iter().position(|&b| b == 0).unwrap_or(buf.len());
    let release = std::str::from_utf8(&buf[..end])?;
    if release.is_empty() {
        return Err(HostError::Empty);
    }
    Ok(release.to_string())
}
