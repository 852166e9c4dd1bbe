//! Raw error code conventions shared by every subsystem.
//!
//! Error codes are plain `i32` values. They cross subsystem boundaries as
//! integers, so everything in this module is a convention on that integer
//! space rather than a wrapper type:
//!
//! - `UDS_SUCCESS` (zero) is the success sentinel and belongs to no block.
//! - Each subsystem owns a contiguous block of codes (see `registry`).
//! - Bit 17 (`UDS_UNRECOVERABLE`) marks a code as unrecoverable. It is a
//!   stable wire-level flag: other subsystems construct and test flagged codes
//!   directly, so the encode/decode functions below are `const fn` and must
//!   never change meaning.
//!
//! # Zero-Allocation Guarantee
//!
//! `ErrorInfo` holds only `&'static str` pairs. Tables are declared as
//! `const` slices and the registry borrows them, it never copies or frees.
//!
//! # Example Usage
//!
//! ```rust
//! use uds_errors::{define_error_infos, make_unrecoverable, is_unrecoverable, sans_unrecoverable};
//!
//! const CACHE_BASE: i32 = 4096;
//!
//! define_error_infos! {
//!     /// Error table of the cache subsystem.
//!     pub const CACHE_INFOS, base = CACHE_BASE => {
//!         CACHE_MISS = 0 => "Entry not present in cache",
//!         CACHE_FULL = 1 => "Cache capacity exhausted",
//!     }
//! }
//!
//! assert_eq!(CACHE_FULL, 4097);
//! assert_eq!(CACHE_INFOS[1].name(), "CACHE_FULL");
//!
//! let flagged = make_unrecoverable(CACHE_FULL);
//! assert!(is_unrecoverable(flagged));
//! assert_eq!(sans_unrecoverable(flagged), CACHE_FULL);
//! ```

use std::fmt;

/// The success sentinel. Never part of any registered block.
pub const UDS_SUCCESS: i32 = 0;

/// Bit flag marking an error code as unrecoverable.
pub const UDS_UNRECOVERABLE: i32 = 1 << 17;

/// Prefix the message formatter puts in front of unrecoverable codes.
pub const UNRECOVERABLE_PREFIX: &str = "Unrecoverable error: ";

// ============================================================================
// Error Info
// ============================================================================

/// Symbolic name and human-readable message for one error code.
///
/// Instances live in static tables supplied by the owning subsystem. The
/// registry holds a borrowed slice plus the block base and finds an entry by
/// `code - base`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ErrorInfo {
    name: &'static str,
    message: &'static str,
}

impl ErrorInfo {
    /// Create an info entry. Usable in const tables.
    #[inline]
    pub const fn new(name: &'static str, message: &'static str) -> Self {
        Self { name, message }
    }

    /// Symbolic constant name, e.g. `"UDS_NO_INDEX"`.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Human-readable message, e.g. `"No index found"`.
    #[inline]
    pub const fn message(&self) -> &'static str {
        self.message
    }
}

impl fmt::Display for ErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.message, self.name)
    }
}

/// Info reported for `UDS_SUCCESS`.
pub const SUCCESS_INFO: ErrorInfo = ErrorInfo::new("UDS_SUCCESS", "Success");

// ============================================================================
// Unrecoverable Flag
// ============================================================================

/// Mark a code as unrecoverable.
///
/// `UDS_SUCCESS` is returned unchanged: success cannot be unrecoverable.
#[inline]
pub const fn make_unrecoverable(code: i32) -> i32 {
    if code == UDS_SUCCESS {
        code
    } else {
        code | UDS_UNRECOVERABLE
    }
}

/// Check whether the unrecoverable flag is set.
#[inline]
pub const fn is_unrecoverable(code: i32) -> bool {
    code & UDS_UNRECOVERABLE != 0
}

/// Clear the unrecoverable flag, leaving every other bit untouched.
#[inline]
pub const fn sans_unrecoverable(code: i32) -> i32 {
    code & !UDS_UNRECOVERABLE
}

// ============================================================================
// Table Definition Macro
// ============================================================================

/// Whether `offsets[i] == i` for every entry. Used by `define_error_infos!`.
#[doc(hidden)]
pub const fn offsets_are_positional(offsets: &[i32]) -> bool {
    let mut i = 0;
    while i < offsets.len() {
        if offsets[i] as i64 != i as i64 {
            return false;
        }
        i += 1;
    }
    true
}

/// Declare a block's error constants and its `ErrorInfo` table in one list.
///
/// Each entry names the constant, its offset from `base`, and its message.
/// The constant becomes `base + offset` and the table entry carries the
/// constant's name verbatim. The table is indexed by `code - base`, so
/// offsets must run `0, 1, 2, ...` in listing order; anything else fails to
/// compile.
///
/// # Example
///
/// ```rust
/// # use uds_errors::define_error_infos;
/// define_error_infos! {
///     pub const JOURNAL_INFOS, base = 9000 => {
///         JOURNAL_TORN_WRITE = 0 => "Torn write detected",
///         JOURNAL_REPLAY_FAILED = 1 => "Journal replay failed",
///     }
/// }
/// assert_eq!(JOURNAL_REPLAY_FAILED, 9001);
/// assert_eq!(JOURNAL_INFOS.len(), 2);
/// ```
///
/// A gap in the offsets is rejected:
///
/// ```compile_fail
/// # use uds_errors::define_error_infos;
/// define_error_infos! {
///     const GAP_INFOS, base = 100 => {
///         GAP_A = 0 => "First",
///         GAP_B = 5 => "Second",
///     }
/// }
/// ```
///
/// The code constants share the table's visibility:
///
/// ```compile_fail
/// mod journal {
///     uds_errors::define_error_infos! {
///         const JOURNAL_INFOS, base = 9000 => {
///             JOURNAL_TORN_WRITE = 0 => "Torn write detected",
///         }
///     }
/// }
/// let _ = journal::JOURNAL_TORN_WRITE;
/// ```
#[macro_export]
macro_rules! define_error_infos {
    (
        $(#[$meta:meta])*
        $vis:vis const $table:ident, base = $base:expr => {
            $( $name:ident = $offset:expr => $message:literal ),+ $(,)?
        }
    ) => {
        const _: () = assert!(
            $crate::codes::offsets_are_positional(&[$($offset),+]),
            "error info offsets must run 0, 1, 2, ... in listing order"
        );

        $(
            #[doc = $message]
            $vis const $name: i32 = $base + $offset;
        )+

        $(#[$meta])*
        $vis const $table: &[$crate::ErrorInfo] = &[
            $( $crate::ErrorInfo::new(stringify!($name), $message), )+
        ];
    };
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_is_never_flagged() {
        assert_eq!(make_unrecoverable(UDS_SUCCESS), UDS_SUCCESS);
        assert!(!is_unrecoverable(make_unrecoverable(UDS_SUCCESS)));
    }

    #[test]
    fn flag_round_trips() {
        let code = 1024 + 37;
        let flagged = make_unrecoverable(code);

        assert_ne!(flagged, code);
        assert!(is_unrecoverable(flagged));
        assert!(!is_unrecoverable(code));
        assert_eq!(sans_unrecoverable(flagged), code);
        assert_eq!(sans_unrecoverable(code), code);
    }

    #[test]
    fn flagging_twice_is_idempotent() {
        let once = make_unrecoverable(66_580);
        assert_eq!(make_unrecoverable(once), once);
    }

    #[test]
    fn flag_survives_negative_codes() {
        let flagged = make_unrecoverable(-5);
        assert!(is_unrecoverable(flagged));
        assert_eq!(sans_unrecoverable(flagged), -5 & !UDS_UNRECOVERABLE);
    }

    #[test]
    fn success_info_is_fixed() {
        assert_eq!(SUCCESS_INFO.name(), "UDS_SUCCESS");
        assert_eq!(SUCCESS_INFO.message(), "Success");
        assert_eq!(SUCCESS_INFO.to_string(), "Success (UDS_SUCCESS)");
    }

    #[test]
    fn macro_defines_constants_and_table() {
        define_error_infos! {
            const TEST_INFOS, base = 500 => {
                TEST_FIRST = 0 => "First test error",
                TEST_SECOND = 1 => "Second test error",
                TEST_THIRD = 2 => "Third test error",
            }
        }

        assert_eq!(TEST_FIRST, 500);
        assert_eq!(TEST_THIRD, 502);
        assert_eq!(TEST_INFOS.len(), 3);
        assert_eq!(TEST_INFOS[1], ErrorInfo::new("TEST_SECOND", "Second test error"));
        assert_eq!(TEST_INFOS[(TEST_THIRD - 500) as usize].name(), "TEST_THIRD");
    }

    #[test]
    fn offsets_must_match_positions() {
        assert!(offsets_are_positional(&[0]));
        assert!(offsets_are_positional(&[0, 1, 2, 3]));
        assert!(!offsets_are_positional(&[0, 5]));
        assert!(!offsets_are_positional(&[1, 2]));
        assert!(!offsets_are_positional(&[0, 2, 1]));
    }
}
