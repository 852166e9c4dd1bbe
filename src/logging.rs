//! Structured log entries for the block table.
//!
//! Registration happens once, during start-up, and is exactly when an
//! operator wants to see which subsystem claimed which code range. The
//! entries here borrow from the registry (or from the registration call)
//! and write a single `key=value` line onto any `fmt::Write`. The caller's
//! logger decides where that line goes; nothing in this crate prints.
//!
//! Block names come from subsystems, so every string field is capped at
//! `MAX_FIELD_OUTPUT_LEN` bytes and marked when cut.
//!
//! # Example
//!
//! ```rust
//! use uds_errors::{ErrorRegistry, RegistrationLog};
//!
//! let mut registry = ErrorRegistry::with_builtins();
//! let result = registry.register("Bio", 3000, 3100, &[]);
//!
//! let mut line = String::new();
//! RegistrationLog::new("Bio", 3000, 3100, 0, &result).write_to(&mut line)?;
//! assert_eq!(line, "register block='Bio' range=[3000, 3100) mapped=0 outcome=UDS_SUCCESS");
//! # Ok::<(), std::fmt::Error>(())
//! ```

use crate::registry::{ErrorBlock, RegistryError};
use std::borrow::Cow;
use std::fmt;

/// Maximum length for any string field in formatted output.
const MAX_FIELD_OUTPUT_LEN: usize = 128;

/// Truncation indicator appended to truncated strings
const TRUNCATION_INDICATOR: &str = "...[TRUNCATED]";

/// Log entry describing one registered block.
#[derive(Debug, Clone, Copy)]
pub struct BlockLog<'a> {
    block: &'a ErrorBlock,
}

impl<'a> BlockLog<'a> {
    /// Borrow `block` for logging.
    #[inline]
    pub const fn new(block: &'a ErrorBlock) -> Self {
        Self { block }
    }

    /// The logged block.
    #[inline]
    pub const fn block(&self) -> &'a ErrorBlock {
        self.block
    }

    /// Write `block='<name>' base=.. last=.. max=.. mapped=.. reserved=..`.
    pub fn write_to(&self, f: &mut impl fmt::Write) -> fmt::Result {
        let block = self.block;
        write!(
            f,
            "block='{}' base={} last={} max={} mapped={} reserved={}",
            truncate_with_indicator(block.name()),
            block.base(),
            block.last(),
            block.max(),
            block.mapped_len(),
            block.reserved_len()
        )
    }
}

/// Log entry recording one registration attempt and its outcome.
#[derive(Debug, Clone, Copy)]
pub struct RegistrationLog<'a> {
    name: &'a str,
    first: i32,
    last_reserved: i32,
    mapped: usize,
    outcome: Result<(), &'a RegistryError>,
}

impl<'a> RegistrationLog<'a> {
    /// Record a registration of `name` over `[first, last_reserved)` with
    /// `mapped` info entries, and what `register` returned.
    pub fn new(
        name: &'a str,
        first: i32,
        last_reserved: i32,
        mapped: usize,
        outcome: &'a crate::Result<()>,
    ) -> Self {
        Self {
            name,
            first,
            last_reserved,
            mapped,
            outcome: outcome.as_ref().map(|_| ()),
        }
    }

    /// Whether the registration went through.
    #[inline]
    pub fn succeeded(&self) -> bool {
        self.outcome.is_ok()
    }

    /// Symbolic code of the outcome.
    #[inline]
    pub fn outcome_name(&self) -> &'static str {
        match self.outcome {
            Ok(()) => "UDS_SUCCESS",
            Err(err) => err.code_name(),
        }
    }

    /// Write `register block='<name>' range=[a, b) mapped=n outcome=<CODE>`,
    /// followed by `reason='<text>'` on failure.
    pub fn write_to(&self, f: &mut impl fmt::Write) -> fmt::Result {
        write!(
            f,
            "register block='{}' range=[{}, {}) mapped={} outcome={}",
            truncate_with_indicator(self.name),
            self.first,
            self.last_reserved,
            self.mapped,
            self.outcome_name()
        )?;

        if let Err(err) = self.outcome {
            write!(f, " reason='{}'", err)?;
        }

        Ok(())
    }
}

impl fmt::Display for RegistrationLog<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_to(f)
    }
}

/// Truncate a string for display.
///
/// If the string exceeds MAX_FIELD_OUTPUT_LEN, it's truncated with an indicator
/// to make the truncation visible to operators.
///
/// Returns a Cow<str> to avoid allocation when no truncation is needed.
fn truncate_with_indicator(s: &str) -> Cow<'_, str> {
    if s.len() <= MAX_FIELD_OUTPUT_LEN {
        return Cow::Borrowed(s);
    }

    let max_content_len = MAX_FIELD_OUTPUT_LEN.saturating_sub(TRUNCATION_INDICATOR.len());

    let mut idx = max_content_len;
    while idx > 0 && !s.is_char_boundary(idx) {
        idx -= 1;
    }

    if idx == 0 {
        return Cow::Borrowed(TRUNCATION_INDICATOR);
    }

    let mut result = String::with_capacity(idx + TRUNCATION_INDICATOR.len());
    result.push_str(&s[..idx]);
    result.push_str(TRUNCATION_INDICATOR);
    Cow::Owned(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::ErrorRegistry;

    #[test]
    fn block_log_lists_ranges() {
        let registry = ErrorRegistry::with_builtins();
        let mut line = String::new();
        registry.blocks()[0].log().write_to(&mut line).unwrap();

        assert_eq!(
            line,
            "block='UDS Error' base=1024 last=1079 max=1464 mapped=55 reserved=385"
        );
    }

    #[test]
    fn registration_log_reports_failure_reason() {
        let mut registry = ErrorRegistry::with_builtins();
        let result = registry.register("UDS Error", 3000, 3100, &[]);
        let log = RegistrationLog::new("UDS Error", 3000, 3100, 0, &result);

        assert!(!log.succeeded());
        assert_eq!(log.outcome_name(), "UDS_DUPLICATE_NAME");
        assert_eq!(
            log.to_string(),
            "register block='UDS Error' range=[3000, 3100) mapped=0 \
             outcome=UDS_DUPLICATE_NAME reason='error block 'UDS Error' is already registered'"
        );
    }

    #[test]
    fn long_names_are_truncated() {
        let mut registry = ErrorRegistry::empty();
        let name: &'static str = Box::leak("n".repeat(MAX_FIELD_OUTPUT_LEN + 10).into_boxed_str());
        registry.register(name, 1, 2, &[]).unwrap();

        let mut line = String::new();
        registry.blocks()[0].log().write_to(&mut line).unwrap();
        assert!(line.contains(TRUNCATION_INDICATOR));
        assert!(!line.contains(name));
    }

    #[test]
    fn no_truncate_when_under_limit() {
        let truncated = truncate_with_indicator("UDS Internal Error");
        assert!(matches!(truncated, Cow::Borrowed(_)));
        assert_eq!(truncated, "UDS Internal Error");
    }

    #[test]
    fn truncate_utf8_boundary() {
        let s = "й".repeat(MAX_FIELD_OUTPUT_LEN);
        let truncated = truncate_with_indicator(&s);

        assert!(truncated.len() <= MAX_FIELD_OUTPUT_LEN);
        assert!(truncated.ends_with(TRUNCATION_INDICATOR));
    }

    #[test]
    fn exactly_at_limit() {
        let s = "a".repeat(MAX_FIELD_OUTPUT_LEN);
        let truncated = truncate_with_indicator(&s);

        assert!(matches!(truncated, Cow::Borrowed(_)));
        assert_eq!(truncated.len(), MAX_FIELD_OUTPUT_LEN);
    }
}
