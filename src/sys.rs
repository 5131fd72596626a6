//! Host facts that need a system call.

use std::io;

/// Maximum host name length accepted from the OS, including the NUL.
#[cfg(unix)]
const HOST_NAME_MAX: usize = 256;

/// The host's network name.
#[cfg(unix)]
pub fn hostname() -> io::Result<String> {
    let mut buf = vec![0u8; HOST_NAME_MAX];
    // SAFETY: buf is valid for writes of buf.len() bytes, and gethostname
    // never writes past the length it is given.
    let rc = unsafe { libc::gethostname(buf.as_mut_ptr().cast(), buf.len()) };
    if rc != 0 {
        return Err(io::Error::last_os_error());
    }
    // Truncated names are not guaranteed to be NUL-terminated
    let end = buf.iter().position(|&b| b == 0).unwrap_or(buf.len());
    buf.truncate(end);
    non_empty(String::from_utf8_lossy(&buf).into_owned())
}

/// The host's network name.
#[cfg(windows)]
pub fn hostname() -> io::Result<String> {
    let name = std::env::var("COMPUTERNAME")
        .map_err(|e| io::Error::new(io::ErrorKind::NotFound, e))?;
    non_empty(name)
}

/// The host's network name.
#[cfg(not(any(unix, windows)))]
pub fn hostname() -> io::Result<String> {
    Err(io::Error::new(
        io::ErrorKind::Unsupported,
        "hostname lookup is not supported on this platform",
    ))
}

#[cfg(any(unix, windows))]
fn non_empty(name: String) -> io::Result<String> {
    if name.is_empty() {
        Err(io::Error::new(io::ErrorKind::NotFound, "empty hostname"))
    } else {
        Ok(name)
    }
}
