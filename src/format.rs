//! Turning error codes into text.
//!
//! Two flavours, both writing into a caller-supplied buffer and both total:
//! every code yields some readable text, because code that is busy reporting
//! an error must not fail while building the report.
//!
//! | Resolution         | `format_message`              | `format_name`          |
//! |--------------------|-------------------------------|------------------------|
//! | mapped             | `"<block>: <message>"`        | `"<SYMBOLIC_NAME>"`    |
//! | reserved, unmapped | `"Unknown <block> <code>"`    | `"<block> <code>"`     |
//! | success sentinel   | `"Success"`                   | `"UDS_SUCCESS"`        |
//! | foreign            | platform description          | platform description   |
//!
//! Only `format_message` distinguishes unrecoverable codes: it prefixes
//! `"Unrecoverable error: "` and formats the flag-cleared code. Symbolic
//! names never carry the prefix.
//!
//! Neither function allocates.
//!
//! # Example
//!
//! ```rust
//! use uds_errors::{format_message, format_name, make_unrecoverable, ErrorRegistry, UDS_NO_INDEX};
//!
//! let registry = ErrorRegistry::with_builtins();
//! let mut buf = [0u8; 128];
//!
//! assert_eq!(
//!     format_message(&registry, UDS_NO_INDEX, &mut buf),
//!     Some("UDS Error: No index found")
//! );
//! assert_eq!(
//!     format_message(&registry, make_unrecoverable(UDS_NO_INDEX), &mut buf),
//!     Some("Unrecoverable error: UDS Error: No index found")
//! );
//! assert_eq!(format_name(&registry, UDS_NO_INDEX, &mut buf), Some("UDS_NO_INDEX"));
//! ```

use crate::buffer::BoundedBuf;
use crate::codes::{is_unrecoverable, sans_unrecoverable, UNRECOVERABLE_PREFIX};
use crate::registry::{ErrorRegistry, Resolution};
use crate::system::{system_string_error, SystemMessage};

/// Write the full message for `code` into `buf`.
///
/// Returns `None` only when `buf` is empty. Otherwise returns the text,
/// borrowed from `buf`, which also holds it NUL-terminated. Text longer than
/// the buffer is truncated at a character boundary.
pub fn format_message<'b>(
    registry: &ErrorRegistry,
    code: i32,
    buf: &'b mut [u8],
) -> Option<&'b str> {
    if buf.is_empty() {
        return None;
    }

    let mut out = BoundedBuf::new(buf);
    let mut code = code;

    if is_unrecoverable(code) {
        out.push_str(UNRECOVERABLE_PREFIX);
        code = sans_unrecoverable(code);
    }

    match registry.resolve(code) {
        Resolution::Known { block, info } => {
            out.append(format_args!("{}: {}", block.name(), info.message()));
        }
        Resolution::Reserved { block } => {
            out.append(format_args!("Unknown {} {}", block.name(), code));
        }
        Resolution::Success(info) => out.push_str(info.message()),
        Resolution::Foreign => append_system_error(&mut out, code),
    }

    Some(out.into_str())
}

/// Write the symbolic name for `code` into `buf`.
///
/// The unrecoverable flag is ignored. Returns `None` only when `buf` is
/// empty.
pub fn format_name<'b>(
    registry: &ErrorRegistry,
    code: i32,
    buf: &'b mut [u8],
) -> Option<&'b str> {
    if buf.is_empty() {
        return None;
    }

    let mut out = BoundedBuf::new(buf);
    let code = sans_unrecoverable(code);

    match registry.resolve(code) {
        Resolution::Known { info, .. } | Resolution::Success(info) => out.push_str(info.name()),
        Resolution::Reserved { block } => {
            out.append(format_args!("{} {}", block.name(), code));
        }
        Resolution::Foreign => append_system_error(&mut out, code),
    }

    Some(out.into_str())
}

/// Describe a foreign code in the space left in `out`.
///
/// Text the platform wrote in place is kept by moving the cursor past it;
/// a static description is appended instead.
fn append_system_error(out: &mut BoundedBuf<'_>, code: i32) {
    let in_place = match system_string_error(code, out.remaining_mut()) {
        SystemMessage::Written(text) => Ok(text.len()),
        SystemMessage::Static(text) => Err(text),
    };

    match in_place {
        Ok(len) => out.advance(len),
        Err(text) => out.push_str(text),
    }
}
