//! Descriptions for codes no registered block claims.
//!
//! Anything foreign to the registry is assumed to be a platform errno. The
//! description is formatted into the caller's scratch space when it fits,
//! like `strerror_r`:
//!
//! - Default build: a fixed errno table (`EPERM` through `ERANGE`), the
//!   messages every Linux libc agrees on. Other codes read
//!   `"Unknown error <code>"`. Output is identical on every host.
//! - `os_strerror` feature: the host's own description through
//!   `std::io::Error::from_raw_os_error`, without its `" (os error N)"`
//!   suffix. The standard library renders that text into a heap `String`,
//!   so with this feature foreign lookups allocate. The default build never
//!   does.
//!
//! When the text does not fit, the scratch space is cleared and the static
//! `"System error"` is returned instead, so callers always get something
//! readable.

use std::fmt::{self, Write};
use std::str;
use zeroize::Zeroize;

/// Returned when a description does not fit the scratch space.
pub const SYSTEM_ERROR_FALLBACK: &str = "System error";

/// Where the description of a system error ended up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SystemMessage<'a> {
    /// Written at the start of the scratch space.
    Written(&'a str),
    /// A static string; the scratch space holds nothing.
    Static(&'static str),
}

impl SystemMessage<'_> {
    /// The description text.
    #[inline]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Written(text) => text,
            Self::Static(text) => text,
        }
    }
}

/// Describe platform error `errnum` using `scratch` as output space.
///
/// Text written to `scratch` is NUL-terminated, so it needs at least one
/// spare byte.
///
/// # Example
///
/// ```rust
/// use uds_errors::{system_string_error, SystemMessage};
///
/// let mut scratch = [0u8; 64];
/// let text = system_string_error(2, &mut scratch);
/// assert!(matches!(text, SystemMessage::Written(_)));
/// assert!(!text.as_str().is_empty());
///
/// let mut tiny = [0u8; 4];
/// assert_eq!(system_string_error(2, &mut tiny), SystemMessage::Static("System error"));
/// ```
pub fn system_string_error(errnum: i32, scratch: &mut [u8]) -> SystemMessage<'_> {
    let mut out = FitWriter {
        buf: &mut *scratch,
        len: 0,
    };

    let len = match describe(errnum, &mut out) {
        Ok(()) => out.len,
        Err(fmt::Error) => return fallback(scratch),
    };

    scratch[len..].zeroize();
    match str::from_utf8(&scratch[..len]) {
        Ok(text) => SystemMessage::Written(text),
        // FitWriter only ever copies whole &str values
        Err(_) => SystemMessage::Static(SYSTEM_ERROR_FALLBACK),
    }
}

fn fallback(scratch: &mut [u8]) -> SystemMessage<'static> {
    scratch.zeroize();
    SystemMessage::Static(SYSTEM_ERROR_FALLBACK)
}

#[cfg(not(feature = "os_strerror"))]
fn describe(errnum: i32, out: &mut FitWriter<'_>) -> fmt::Result {
    match errno_message(errnum) {
        Some(message) => out.write_str(message),
        None => write!(out, "Unknown error {}", errnum),
    }
}

// The suffix comes off before the fit check, so only the text the caller
// keeps has to fit.
#[cfg(feature = "os_strerror")]
fn describe(errnum: i32, out: &mut FitWriter<'_>) -> fmt::Result {
    let text = std::io::Error::from_raw_os_error(errnum).to_string();
    out.write_str(strip_os_suffix(&text))
}

#[cfg(feature = "os_strerror")]
fn strip_os_suffix(text: &str) -> &str {
    match text.rfind(" (os error ") {
        Some(pos) => &text[..pos],
        None => text,
    }
}

/// Messages for the classic errno values.
pub const fn errno_message(errnum: i32) -> Option<&'static str> {
    let message = match errnum {
        1 => "Operation not permitted",          // EPERM
        2 => "No such file or directory",        // ENOENT
        3 => "No such process",                  // ESRCH
        4 => "Interrupted system call",          // EINTR
        5 => "Input/output error",               // EIO
        6 => "No such device or address",        // ENXIO
        7 => "Argument list too long",           // E2BIG
        8 => "Exec format error",                // ENOEXEC
        9 => "Bad file descriptor",              // EBADF
        10 => "No child processes",              // ECHILD
        11 => "Resource temporarily unavailable", // EAGAIN
        12 => "Cannot allocate memory",          // ENOMEM
        13 => "Permission denied",               // EACCES
        14 => "Bad address",                     // EFAULT
        15 => "Block device required",           // ENOTBLK
        16 => "Device or resource busy",         // EBUSY
        17 => "File exists",                     // EEXIST
        18 => "Invalid cross-device link",       // EXDEV
        19 => "No such device",                  // ENODEV
        20 => "Not a directory",                 // ENOTDIR
        21 => "Is a directory",                  // EISDIR
        22 => "Invalid argument",                // EINVAL
        23 => "Too many open files in system",   // ENFILE
        24 => "Too many open files",             // EMFILE
        25 => "Inappropriate ioctl for device",  // ENOTTY
        26 => "Text file busy",                  // ETXTBSY
        27 => "File too large",                  // EFBIG
        28 => "No space left on device",         // ENOSPC
        29 => "Illegal seek",                    // ESPIPE
        30 => "Read-only file system",           // EROFS
        31 => "Too many links",                  // EMLINK
        32 => "Broken pipe",                     // EPIPE
        33 => "Numerical argument out of domain", // EDOM
        34 => "Numerical result out of range",   // ERANGE
        _ => return None,
    };
    Some(message)
}

/// Writer that refuses text it cannot hold in full, keeping one byte spare.
struct FitWriter<'a> {
    buf: &'a mut [u8],
    len: usize,
}

impl Write for FitWriter<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let end = self.len + s.len();
        if end >= self.buf.len() {
            return Err(fmt::Error);
        }
        self.buf[self.len..end].copy_from_slice(s.as_bytes());
        self.len = end;
        Ok(())
    }
}
