//! Bounded, NUL-terminated output buffer for error text.
//!
//! Formatting an error must never fail and never overrun, even when the
//! caller only has a tiny stack buffer. `BoundedBuf` wraps a caller-owned
//! `&mut [u8]` and behaves like repeated bounded `snprintf` appends:
//!
//! - The last byte is kept for a NUL terminator, so C-style readers of the
//!   same buffer always find a terminated string.
//! - Text that does not fit is cut at a UTF-8 character boundary and every
//!   later append is dropped, so the result is always valid UTF-8.
//! - The whole buffer is wiped with `zeroize` when wrapped. A reused buffer
//!   never shows a tail of an older, longer message.
//!
//! # Example
//!
//! ```rust
//! use uds_errors::BoundedBuf;
//!
//! let mut storage = [0xffu8; 8];
//! let mut out = BoundedBuf::new(&mut storage);
//! out.push_str("Unknown ");
//! out.push_str("block");
//! assert_eq!(out.as_str(), "Unknown");
//! assert!(out.is_truncated());
//! ```

use std::fmt;
use std::str;
use zeroize::Zeroize;

/// Append-only writer over a caller-supplied byte buffer.
pub struct BoundedBuf<'a> {
    buf: &'a mut [u8],
    len: usize,
    truncated: bool,
}

impl<'a> BoundedBuf<'a> {
    /// Wrap `buf`, wiping its previous contents.
    pub fn new(buf: &'a mut [u8]) -> Self {
        buf.zeroize();
        Self {
            buf,
            len: 0,
            truncated: false,
        }
    }

    /// Maximum text length, excluding the NUL terminator.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buf.len().saturating_sub(1)
    }

    /// Bytes of text written so far.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether nothing has been written.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Whether some appended text had to be dropped.
    #[inline]
    pub fn is_truncated(&self) -> bool {
        self.truncated
    }

    /// Append `s`, truncating at a character boundary if it does not fit.
    pub fn push_str(&mut self, s: &str) {
        if self.truncated {
            return;
        }

        let room = self.capacity().saturating_sub(self.len);
        let mut take = s.len().min(room);
        while take > 0 && !s.is_char_boundary(take) {
            take -= 1;
        }

        self.buf[self.len..self.len + take].copy_from_slice(&s.as_bytes()[..take]);
        self.len += take;
        self.truncated = take < s.len();
    }

    /// Append formatted text with the same truncation rule as `push_str`.
    pub fn append(&mut self, args: fmt::Arguments<'_>) {
        // write_str below never fails
        let _ = fmt::Write::write_fmt(self, args);
    }

    /// Unused tail of the buffer, terminator byte included.
    ///
    /// Lets a collaborator format directly in place; follow up with
    /// [`advance`](Self::advance) for the text it wrote there.
    pub fn remaining_mut(&mut self) -> &mut [u8] {
        if self.truncated {
            return &mut [];
        }
        &mut self.buf[self.len..]
    }

    /// Move the cursor past `n` bytes written through `remaining_mut`.
    ///
    /// The cursor never moves beyond the text capacity, and only whole
    /// UTF-8 characters are kept.
    pub fn advance(&mut self, n: usize) {
        let end = (self.len + n).min(self.capacity());
        let valid = match str::from_utf8(&self.buf[self.len..end]) {
            Ok(text) => text.len(),
            Err(err) => err.valid_up_to(),
        };
        self.buf[self.len + valid..].zeroize();
        self.len += valid;
    }

    /// Text written so far.
    pub fn as_str(&self) -> &str {
        text_of(&self.buf[..self.len])
    }

    /// Give up the writer and keep the text, borrowed from the caller's buffer.
    pub fn into_str(self) -> &'a str {
        let Self { buf, len, .. } = self;
        let buf: &'a [u8] = buf;
        text_of(&buf[..len])
    }
}

impl fmt::Write for BoundedBuf<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.push_str(s);
        Ok(())
    }
}

impl fmt::Debug for BoundedBuf<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoundedBuf")
            .field("text", &self.as_str())
            .field("capacity", &self.capacity())
            .field("truncated", &self.truncated)
            .finish()
    }
}

/// Longest valid UTF-8 prefix of `bytes`.
fn text_of(bytes: &[u8]) -> &str {
    match str::from_utf8(bytes) {
        Ok(text) => text,
        Err(err) => str::from_utf8(&bytes[..err.valid_up_to()]).unwrap_or_default(),
    }
}
