//! # UDS Errors
//!
//! Extensible, namespaced error codes for the deduplication index.
//!
//! Every subsystem owns one contiguous block of integer codes. The index
//! itself ships two blocks (`"UDS Error"` and `"UDS Internal Error"`), and
//! other components register theirs at start-up. Any `i32` can then be
//! turned into readable text:
//!
//! - codes in a registered block read `"<block>: <message>"`;
//! - reserved but unmapped codes read `"Unknown <block> <code>"`;
//! - everything else is treated as a platform errno.
//!
//! Codes with the `UDS_UNRECOVERABLE` bit set keep their identity but are
//! reported with an `"Unrecoverable error: "` prefix.
//!
//! ## Quick Start
//!
//! ```rust
//! use uds_errors::{define_error_infos, register_error_block, string_error, string_error_name};
//! use uds_errors::ERRBUF_SIZE;
//!
//! define_error_infos! {
//!     /// Errors raised by the journal writer.
//!     pub const JOURNAL_INFOS, base = 4096 => {
//!         JOURNAL_FULL = 0 => "Journal is full",
//!         JOURNAL_TORN_WRITE = 1 => "Torn journal write",
//!     }
//! }
//!
//! register_error_block("Journal", 4096, 4096 + 64, JOURNAL_INFOS)?;
//!
//! let mut buf = [0u8; ERRBUF_SIZE];
//! assert_eq!(string_error(JOURNAL_FULL, &mut buf), Some("Journal: Journal is full"));
//! assert_eq!(string_error(4100, &mut buf), Some("Unknown Journal 4100"));
//! assert_eq!(string_error_name(JOURNAL_TORN_WRITE, &mut buf), Some("JOURNAL_TORN_WRITE"));
//! # Ok::<(), uds_errors::RegistryError>(())
//! ```
//!
//! ## Local Registries
//!
//! The free functions above use one process-wide table. Tools and tests
//! that want isolation build their own [`ErrorRegistry`] and call
//! [`format_message`] / [`format_name`] directly.
//!
//! ## Features
//!
//! - `os_strerror`: describe foreign codes with the host's own `strerror`
//!   text instead of the built-in errno table.

#![warn(missing_docs)]
#![warn(clippy::all)]

use std::result;
use std::sync::{LazyLock, RwLock, RwLockReadGuard, RwLockWriteGuard};

pub mod buffer;
pub mod codes;
pub mod definitions;
pub mod format;
pub mod logging;
pub mod registry;
pub mod system;

pub use buffer::*;
pub use codes::*;
pub use definitions::*;
pub use format::*;
pub use logging::*;
pub use registry::*;
pub use system::*;

/// Type alias for Results using our error type.
pub type Result<T> = result::Result<T, RegistryError>;

/// Buffer size that holds any message produced by the built-in blocks.
pub const ERRBUF_SIZE: usize = 128;

// ============================================================================
// Process-wide Registry
// ============================================================================

static REGISTERED_ERRORS: LazyLock<RwLock<ErrorRegistry>> =
    LazyLock::new(|| RwLock::new(ErrorRegistry::with_builtins()));

// A panic while holding the lock cannot leave the table half-updated:
// `register` validates everything before its single push.
fn read_registry() -> RwLockReadGuard<'static, ErrorRegistry> {
    match REGISTERED_ERRORS.read() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}

fn write_registry() -> RwLockWriteGuard<'static, ErrorRegistry> {
    match REGISTERED_ERRORS.write() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}

/// Register a block in the process-wide registry.
///
/// Same rules as [`ErrorRegistry::register`]. Safe to call from any thread;
/// concurrent lookups see the table either before or after the new block.
pub fn register_error_block(
    name: &'static str,
    first: i32,
    last_reserved: i32,
    infos: &'static [ErrorInfo],
) -> Result<()> {
    write_registry().register(name, first, last_reserved, infos)
}

/// Message for `code` from the process-wide registry, written into `buf`.
///
/// See [`format_message`].
pub fn string_error(code: i32, buf: &mut [u8]) -> Option<&str> {
    format_message(&read_registry(), code, buf)
}

/// Symbolic name for `code` from the process-wide registry, written into `buf`.
///
/// See [`format_name`].
pub fn string_error_name(code: i32, buf: &mut [u8]) -> Option<&str> {
    format_name(&read_registry(), code, buf)
}

/// Run `f` with shared access to the process-wide registry.
///
/// Registration blocks until `f` returns, so keep it short.
///
/// ```rust
/// let mut summary = String::new();
/// uds_errors::with_registry(|registry| registry.write_summary(&mut summary))?;
/// assert!(summary.starts_with("block='UDS Error'"));
/// # Ok::<(), std::fmt::Error>(())
/// ```
pub fn with_registry<R>(f: impl FnOnce(&ErrorRegistry) -> R) -> R {
    f(&read_registry())
}

// ============================================================================
// Tests
// ============================================================================
