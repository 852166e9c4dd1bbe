//! Block table: the set of registered error-code namespaces.
//!
//! Every subsystem that defines its own error codes registers one
//! `ErrorBlock` at start-up. A block reserves the half-open range
//! `[base, max)` and maps the leading `[base, last)` part to `ErrorInfo`
//! entries; `[last, max)` stays reserved for codes the subsystem may add
//! later.
//!
//! # Invariants
//!
//! - `base <= last <= max` and `base < max` for every block.
//! - The `[base, max)` ranges of any two blocks are disjoint.
//! - No two blocks share a name.
//! - Blocks are only ever appended; registration order is scan order.
//!
//! # Capacity
//!
//! The table holds at most `MAX_ERROR_BLOCKS` blocks stored inline. It never
//! grows: registration happens a handful of times at start-up, and a full
//! table is reported as `RegistryError::Overflow`.
//!
//! # Concurrency
//!
//! `register` takes `&mut self` while `resolve` takes `&self`, so the borrow
//! checker already rules out registering while lookups run on the same
//! instance. For the process-wide registry see [`crate::register_error_block`].

use crate::codes::{ErrorInfo, SUCCESS_INFO, UDS_SUCCESS};
use crate::definitions::{
    BUILTIN_BLOCKS, UDS_ALREADY_REGISTERED, UDS_ASSERTION_FAILED, UDS_DUPLICATE_NAME, UDS_OVERFLOW,
};
use crate::logging::BlockLog;
use smallvec::SmallVec;
use std::fmt;

/// Maximum number of blocks a registry can hold, built-ins included.
pub const MAX_ERROR_BLOCKS: usize = 6;

// ============================================================================
// Error Block
// ============================================================================

/// One contiguous namespace of error codes owned by a subsystem.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ErrorBlock {
    name: &'static str,
    base: i32,
    last: i32,
    max: i32,
    infos: &'static [ErrorInfo],
}

impl ErrorBlock {
    /// Build a block whose mapped range is exactly the table length.
    ///
    /// Callers guarantee `base < max` and `infos.len() <= max - base`;
    /// `ErrorRegistry::register` checks both before calling this.
    #[inline]
    pub(crate) const fn from_table(
        name: &'static str,
        base: i32,
        max: i32,
        infos: &'static [ErrorInfo],
    ) -> Self {
        Self {
            name,
            base,
            last: base + infos.len() as i32,
            max,
            infos,
        }
    }

    /// Name of the owning subsystem.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// First code of the namespace (inclusive).
    #[inline]
    pub const fn base(&self) -> i32 {
        self.base
    }

    /// First code without an info entry.
    #[inline]
    pub const fn last(&self) -> i32 {
        self.last
    }

    /// First code beyond the namespace (exclusive).
    #[inline]
    pub const fn max(&self) -> i32 {
        self.max
    }

    /// The info table, indexed by `code - base`.
    #[inline]
    pub const fn infos(&self) -> &'static [ErrorInfo] {
        self.infos
    }

    /// Number of codes with an info entry.
    #[inline]
    pub const fn mapped_len(&self) -> usize {
        self.infos.len()
    }

    /// Number of codes reserved but not yet mapped.
    #[inline]
    pub const fn reserved_len(&self) -> usize {
        (self.max as i64 - self.last as i64) as usize
    }

    /// Whether `code` has an info entry in this block.
    #[inline]
    pub const fn maps(&self, code: i32) -> bool {
        code >= self.base && code < self.last
    }

    /// Whether `code` lies anywhere in `[base, max)`.
    #[inline]
    pub const fn contains(&self, code: i32) -> bool {
        code >= self.base && code < self.max
    }

    /// Whether `[first, last_reserved)` intersects `[base, max)`.
    #[inline]
    pub const fn overlaps(&self, first: i32, last_reserved: i32) -> bool {
        first < self.max && last_reserved > self.base
    }

    /// Info entry for `code`, if the code is mapped by this block.
    #[inline]
    pub fn info(&self, code: i32) -> Option<&'static ErrorInfo> {
        if self.maps(code) {
            self.infos.get((code - self.base) as usize)
        } else {
            None
        }
    }

    /// Structured log entry describing this block.
    #[inline]
    pub fn log(&self) -> BlockLog<'_> {
        BlockLog::new(self)
    }
}

// ============================================================================
// Registration Errors
// ============================================================================

/// Reasons a block registration is refused.
///
/// Registration is all-or-nothing: whenever one of these is returned the
/// registry is exactly as it was before the call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistryError {
    /// The block name is empty.
    EmptyName,
    /// `first >= last_reserved`, or the info table is longer than the range.
    InvalidRange {
        /// Requested first code.
        first: i32,
        /// Requested end of the reservation.
        last_reserved: i32,
        /// Length of the supplied info table.
        infos: usize,
    },
    /// The table already holds `MAX_ERROR_BLOCKS` blocks.
    Overflow {
        /// Fixed capacity of the table.
        capacity: usize,
    },
    /// A block with the same name is already registered.
    DuplicateName {
        /// The rejected name.
        name: &'static str,
    },
    /// The requested range intersects an existing block's reservation.
    AlreadyRegistered {
        /// The rejected block name.
        name: &'static str,
        /// Name of the block whose reservation was hit.
        owner: &'static str,
    },
}

impl RegistryError {
    /// The registry's own error code for this failure.
    ///
    /// Lets callers that propagate integer codes forward the failure
    /// unchanged, and formats through the registry like any other code.
    pub const fn code(&self) -> i32 {
        match self {
            Self::EmptyName | Self::InvalidRange { .. } => UDS_ASSERTION_FAILED,
            Self::Overflow { .. } => UDS_OVERFLOW,
            Self::DuplicateName { .. } => UDS_DUPLICATE_NAME,
            Self::AlreadyRegistered { .. } => UDS_ALREADY_REGISTERED,
        }
    }

    /// Symbolic name of [`code`](Self::code).
    pub const fn code_name(&self) -> &'static str {
        match self {
            Self::EmptyName | Self::InvalidRange { .. } => "UDS_ASSERTION_FAILED",
            Self::Overflow { .. } => "UDS_OVERFLOW",
            Self::DuplicateName { .. } => "UDS_DUPLICATE_NAME",
            Self::AlreadyRegistered { .. } => "UDS_ALREADY_REGISTERED",
        }
    }
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => f.write_str("error block name is empty"),
            Self::InvalidRange {
                first,
                last_reserved,
                infos,
            } => write!(
                f,
                "bad error block range [{}, {}) for {} info entries",
                first, last_reserved, infos
            ),
            Self::Overflow { capacity } => {
                write!(f, "error block table is full ({} blocks)", capacity)
            }
            Self::DuplicateName { name } => {
                write!(f, "error block '{}' is already registered", name)
            }
            Self::AlreadyRegistered { name, owner } => write!(
                f,
                "error range of '{}' overlaps block '{}'",
                name, owner
            ),
        }
    }
}

impl std::error::Error for RegistryError {}

// ============================================================================
// Resolution
// ============================================================================

/// Outcome of looking a code up in the registry.
///
/// The four cases are exhaustive: a code is the success sentinel, mapped by
/// a block, reserved by a block without a mapping, or foreign to the
/// registry (usually a platform errno).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution<'a> {
    /// The success sentinel. Owned by no block.
    Success(&'static ErrorInfo),
    /// Code mapped by `block`.
    Known {
        /// Owning block.
        block: &'a ErrorBlock,
        /// Info entry for the code.
        info: &'static ErrorInfo,
    },
    /// Code inside `block`'s reservation with no assigned meaning yet.
    Reserved {
        /// Owning block.
        block: &'a ErrorBlock,
    },
    /// Code belongs to no registered block.
    Foreign,
}

impl Resolution<'_> {
    /// Owning block name, when some block claims the code.
    #[inline]
    pub const fn owner(&self) -> Option<&'static str> {
        match self {
            Self::Known { block, .. } | Self::Reserved { block } => Some(block.name()),
            Self::Success(_) | Self::Foreign => None,
        }
    }

    /// Info entry, when the code has one.
    #[inline]
    pub const fn info(&self) -> Option<&'static ErrorInfo> {
        match self {
            Self::Success(info) | Self::Known { info, .. } => Some(*info),
            Self::Reserved { .. } | Self::Foreign => None,
        }
    }

    /// Whether no block claims the code and it is not the success sentinel.
    #[inline]
    pub const fn is_foreign(&self) -> bool {
        matches!(self, Self::Foreign)
    }
}

// ============================================================================
// Registry
// ============================================================================

/// Fixed-capacity, append-only table of error blocks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorRegistry {
    blocks: SmallVec<[ErrorBlock; MAX_ERROR_BLOCKS]>,
}

impl ErrorRegistry {
    /// A registry holding only the two built-in blocks.
    ///
    /// # Example
    ///
    /// ```rust
    /// use uds_errors::{ErrorRegistry, UDS_NO_INDEX};
    ///
    /// let registry = ErrorRegistry::with_builtins();
    /// assert_eq!(registry.len(), 2);
    /// assert_eq!(registry.resolve(UDS_NO_INDEX).owner(), Some("UDS Error"));
    /// ```
    pub fn with_builtins() -> Self {
        Self {
            blocks: SmallVec::from_slice(&BUILTIN_BLOCKS),
        }
    }

    /// A registry with no blocks at all.
    ///
    /// Only the success sentinel resolves; every other code is foreign.
    pub fn empty() -> Self {
        Self {
            blocks: SmallVec::new(),
        }
    }

    /// Register a new block reserving `[first, last_reserved)`.
    ///
    /// `infos` maps the leading codes of the range; the rest stays reserved
    /// for future growth.
    ///
    /// # Errors
    ///
    /// Checked in this order, against the table as it was before the call:
    ///
    /// - `EmptyName` if `name` is empty.
    /// - `InvalidRange` if `first >= last_reserved` or `infos` does not fit
    ///   in the range.
    /// - `Overflow` if the table is full.
    /// - `DuplicateName` / `AlreadyRegistered` for the first existing block,
    ///   in registration order, that has the same name or an overlapping
    ///   range.
    ///
    /// On error nothing is registered.
    ///
    /// # Example
    ///
    /// ```rust
    /// use uds_errors::{define_error_infos, ErrorRegistry, RegistryError};
    ///
    /// define_error_infos! {
    ///     const VDO_INFOS, base = 2048 => {
    ///         VDO_OUT_OF_RANGE = 0 => "Out of range",
    ///         VDO_REF_COUNT_INVALID = 1 => "Reference count would become invalid",
    ///     }
    /// }
    ///
    /// let mut registry = ErrorRegistry::with_builtins();
    /// registry.register("VDO Status", 2048, 2048 + 100, VDO_INFOS)?;
    ///
    /// let again = registry.register("VDO Status", 9000, 9100, VDO_INFOS);
    /// assert!(matches!(again, Err(RegistryError::DuplicateName { .. })));
    /// # Ok::<(), RegistryError>(())
    /// ```
    pub fn register(
        &mut self,
        name: &'static str,
        first: i32,
        last_reserved: i32,
        infos: &'static [ErrorInfo],
    ) -> crate::Result<()> {
        if name.is_empty() {
            return Err(RegistryError::EmptyName);
        }

        let invalid_range = RegistryError::InvalidRange {
            first,
            last_reserved,
            infos: infos.len(),
        };

        if first >= last_reserved {
            return Err(invalid_range);
        }

        let span = i64::from(last_reserved) - i64::from(first);
        if infos.len() as u64 > span as u64 {
            return Err(invalid_range);
        }

        if self.is_full() {
            return Err(RegistryError::Overflow {
                capacity: MAX_ERROR_BLOCKS,
            });
        }

        for block in &self.blocks {
            if block.name == name {
                return Err(RegistryError::DuplicateName { name });
            }
            if block.overlaps(first, last_reserved) {
                return Err(RegistryError::AlreadyRegistered {
                    name,
                    owner: block.name,
                });
            }
        }

        self.blocks
            .push(ErrorBlock::from_table(name, first, last_reserved, infos));
        Ok(())
    }

    /// Find what the registry knows about `code`.
    ///
    /// Total and read-only. The success sentinel is answered before the
    /// table is consulted; otherwise blocks are scanned in registration
    /// order and the first one claiming the code wins.
    pub fn resolve(&self, code: i32) -> Resolution<'_> {
        if code == UDS_SUCCESS {
            return Resolution::Success(&SUCCESS_INFO);
        }

        for block in &self.blocks {
            if let Some(info) = block.info(code) {
                return Resolution::Known { block, info };
            }
            if block.contains(code) {
                return Resolution::Reserved { block };
            }
        }

        Resolution::Foreign
    }

    /// Registered blocks in registration order.
    #[inline]
    pub fn blocks(&self) -> &[ErrorBlock] {
        &self.blocks
    }

    /// Look a block up by name.
    pub fn block(&self, name: &str) -> Option<&ErrorBlock> {
        self.blocks.iter().find(|block| block.name == name)
    }

    /// Number of registered blocks.
    #[inline]
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Whether no block is registered.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Whether another registration would overflow.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.blocks.len() >= MAX_ERROR_BLOCKS
    }

    /// Fixed capacity of the table.
    #[inline]
    pub const fn capacity(&self) -> usize {
        MAX_ERROR_BLOCKS
    }

    /// Write one structured log line per block, in registration order.
    pub fn write_summary(&self, f: &mut impl fmt::Write) -> fmt::Result {
        for block in &self.blocks {
            block.log().write_to(f)?;
            f.write_char('\n')?;
        }
        Ok(())
    }
}

impl Default for ErrorRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::define_error_infos;
    use crate::definitions::*;

    define_error_infos! {
        const TEST_INFOS, base = 5000 => {
            TEST_ALPHA = 0 => "Alpha failure",
            TEST_BETA = 1 => "Beta failure",
            TEST_GAMMA = 2 => "Gamma failure",
        }
    }

    const EMPTY_INFOS: &[ErrorInfo] = &[];

    // ========================================================================
    // Built-ins
    // ========================================================================

    #[test]
    fn builtins_are_preregistered_in_order() {
        let registry = ErrorRegistry::with_builtins();
        let names: Vec<_> = registry.blocks().iter().map(ErrorBlock::name).collect();
        assert_eq!(names, ["UDS Error", "UDS Internal Error"]);
        assert_eq!(registry, ErrorRegistry::default());
    }

    #[test]
    fn empty_registry_only_knows_success() {
        let registry = ErrorRegistry::empty();
        assert!(registry.is_empty());
        assert_eq!(registry.resolve(UDS_SUCCESS), Resolution::Success(&SUCCESS_INFO));
        assert_eq!(registry.resolve(UDS_NO_INDEX), Resolution::Foreign);
    }

    // ========================================================================
    // Registration
    // ========================================================================

    #[test]
    fn register_appends_block() {
        let mut registry = ErrorRegistry::with_builtins();
        registry.register("Test", 5000, 5100, TEST_INFOS).unwrap();

        let block = registry.block("Test").unwrap();
        assert_eq!(block.base(), 5000);
        assert_eq!(block.last(), 5003);
        assert_eq!(block.max(), 5100);
        assert_eq!(block.mapped_len(), 3);
        assert_eq!(block.reserved_len(), 97);
        assert_eq!(registry.blocks().last(), Some(block));
    }

    #[test]
    fn register_rejects_inverted_range() {
        let mut registry = ErrorRegistry::with_builtins();
        let before = registry.clone();

        let err = registry.register("Test", 5100, 5000, TEST_INFOS).unwrap_err();
        assert!(matches!(err, RegistryError::InvalidRange { first: 5100, .. }));
        assert_eq!(err.code(), UDS_ASSERTION_FAILED);

        let err = registry.register("Test", 5000, 5000, EMPTY_INFOS).unwrap_err();
        assert!(matches!(err, RegistryError::InvalidRange { .. }));
        assert_eq!(registry, before);
    }

    #[test]
    fn register_rejects_empty_name() {
        let mut registry = ErrorRegistry::with_builtins();
        let before = registry.clone();

        let err = registry.register("", 5000, 5100, TEST_INFOS).unwrap_err();
        assert_eq!(err, RegistryError::EmptyName);
        assert_eq!(err.code(), UDS_ASSERTION_FAILED);
        assert_eq!(err.to_string(), "error block name is empty");
        assert_eq!(registry, before);
    }

    #[test]
    fn register_rejects_table_larger_than_range() {
        let mut registry = ErrorRegistry::with_builtins();
        let err = registry.register("Test", 5000, 5002, TEST_INFOS).unwrap_err();
        assert_eq!(
            err,
            RegistryError::InvalidRange {
                first: 5000,
                last_reserved: 5002,
                infos: 3
            }
        );
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn register_accepts_table_filling_range() {
        let mut registry = ErrorRegistry::with_builtins();
        registry.register("Test", 5000, 5003, TEST_INFOS).unwrap();
        assert_eq!(registry.block("Test").unwrap().reserved_len(), 0);
    }

    #[test]
    fn register_rejects_duplicate_name() {
        let mut registry = ErrorRegistry::with_builtins();
        let before = registry.clone();

        let err = registry
            .register(UDS_ERROR_BLOCK_NAME, 5000, 5100, TEST_INFOS)
            .unwrap_err();
        assert_eq!(err, RegistryError::DuplicateName { name: "UDS Error" });
        assert_eq!(err.code(), UDS_DUPLICATE_NAME);
        assert_eq!(registry, before);
    }

    #[test]
    fn register_name_match_is_exact() {
        let mut registry = ErrorRegistry::with_builtins();
        registry.register("uds error", 5000, 5100, TEST_INFOS).unwrap();
        registry.register("UDS Error ", 6000, 6100, EMPTY_INFOS).unwrap();
        assert_eq!(registry.len(), 4);
    }

    #[test]
    fn register_rejects_overlap_with_reserved_space() {
        let mut registry = ErrorRegistry::with_builtins();
        let before = registry.clone();

        // Starts inside the unmapped tail of the public block.
        let err = registry
            .register("Test", UDS_ERROR_CODE_BLOCK_END - 1, 5000, TEST_INFOS)
            .unwrap_err();
        assert_eq!(
            err,
            RegistryError::AlreadyRegistered {
                name: "Test",
                owner: "UDS Error"
            }
        );
        assert_eq!(err.code(), UDS_ALREADY_REGISTERED);

        // Encloses the internal block entirely.
        let err = registry.register("Test", 60000, 70000, TEST_INFOS).unwrap_err();
        assert!(matches!(
            err,
            RegistryError::AlreadyRegistered { owner: "UDS Internal Error", .. }
        ));
        assert_eq!(registry, before);
    }

    #[test]
    fn register_allows_adjacent_ranges() {
        let mut registry = ErrorRegistry::with_builtins();
        registry
            .register("Below", 1000, UDS_ERROR_CODE_BASE, EMPTY_INFOS)
            .unwrap();
        registry
            .register("Above", UDS_ERROR_CODE_BLOCK_END, 2000, EMPTY_INFOS)
            .unwrap();
        assert_eq!(registry.len(), 4);
    }

    #[test]
    fn duplicate_name_reported_before_overlap_of_later_block() {
        let mut registry = ErrorRegistry::with_builtins();
        let err = registry
            .register(UDS_ERROR_BLOCK_NAME, UDS_INTERNAL_ERROR_CODE_BASE, 67000, EMPTY_INFOS)
            .unwrap_err();
        assert!(matches!(err, RegistryError::DuplicateName { .. }));
    }

    #[test]
    fn overlap_with_earlier_block_reported_before_later_duplicate_name() {
        let mut registry = ErrorRegistry::with_builtins();
        let err = registry
            .register(UDS_INTERNAL_BLOCK_NAME, UDS_ERROR_CODE_BASE, 1100, EMPTY_INFOS)
            .unwrap_err();
        assert!(matches!(
            err,
            RegistryError::AlreadyRegistered { owner: "UDS Error", .. }
        ));
    }

    #[test]
    fn register_overflows_at_capacity() {
        let mut registry = ErrorRegistry::with_builtins();
        let names = ["A", "B", "C", "D"];
        for (i, name) in names.iter().enumerate() {
            let base = 10_000 + (i as i32) * 100;
            registry.register(*name, base, base + 100, EMPTY_INFOS).unwrap();
        }
        assert!(registry.is_full());
        assert_eq!(registry.len(), registry.capacity());

        let before = registry.clone();
        let err = registry.register("E", 20_000, 20_100, EMPTY_INFOS).unwrap_err();
        assert_eq!(err, RegistryError::Overflow { capacity: MAX_ERROR_BLOCKS });
        assert_eq!(err.code(), UDS_OVERFLOW);
        assert_eq!(registry, before);
    }

    #[test]
    fn overflow_checked_before_name_and_overlap() {
        let mut registry = ErrorRegistry::empty();
        for i in 0..MAX_ERROR_BLOCKS as i32 {
            let name = ["A", "B", "C", "D", "E", "F"][i as usize];
            registry.register(name, i * 10 + 1, i * 10 + 11, EMPTY_INFOS).unwrap();
        }
        let err = registry.register("A", 1, 11, EMPTY_INFOS).unwrap_err();
        assert!(matches!(err, RegistryError::Overflow { .. }));
    }

    #[test]
    fn register_handles_extreme_ranges() {
        let mut registry = ErrorRegistry::empty();
        registry.register("Wide", i32::MIN, i32::MAX, TEST_INFOS).unwrap();
        assert_eq!(registry.resolve(i32::MIN).info().map(ErrorInfo::name), Some("TEST_ALPHA"));
        assert_eq!(registry.resolve(i32::MAX - 1).owner(), Some("Wide"));
        assert_eq!(registry.resolve(i32::MAX), Resolution::Foreign);
    }

    // ========================================================================
    // Resolution
    // ========================================================================

    #[test]
    fn resolve_success_sentinel() {
        let registry = ErrorRegistry::with_builtins();
        let resolution = registry.resolve(UDS_SUCCESS);
        assert_eq!(resolution.owner(), None);
        assert_eq!(resolution.info(), Some(&SUCCESS_INFO));
    }

    #[test]
    fn resolve_mapped_code() {
        let registry = ErrorRegistry::with_builtins();
        match registry.resolve(UDS_NO_INDEX) {
            Resolution::Known { block, info } => {
                assert_eq!(block.name(), "UDS Error");
                assert_eq!(info.name(), "UDS_NO_INDEX");
                assert_eq!(info.message(), "No index found");
            }
            other => panic!("unexpected resolution {:?}", other),
        }
    }

    #[test]
    fn resolve_reserved_code() {
        let registry = ErrorRegistry::with_builtins();
        let resolution = registry.resolve(UDS_ERROR_CODE_LAST);
        assert!(matches!(resolution, Resolution::Reserved { .. }));
        assert_eq!(resolution.owner(), Some("UDS Error"));
        assert_eq!(resolution.info(), None);

        let resolution = registry.resolve(UDS_INTERNAL_ERROR_CODE_BLOCK_END - 1);
        assert_eq!(resolution.owner(), Some("UDS Internal Error"));
    }

    #[test]
    fn resolve_foreign_code() {
        let registry = ErrorRegistry::with_builtins();
        for code in [1, 22, -1, UDS_ERROR_CODE_BASE - 1, UDS_ERROR_CODE_BLOCK_END, i32::MAX] {
            let resolution = registry.resolve(code);
            assert!(resolution.is_foreign(), "code {} resolved to {:?}", code, resolution);
            assert_eq!(resolution.owner(), None);
            assert_eq!(resolution.info(), None);
        }
    }

    #[test]
    fn resolve_round_trips_registered_table() {
        let mut registry = ErrorRegistry::with_builtins();
        registry.register("Test", 5000, 5100, TEST_INFOS).unwrap();

        for (offset, expected) in TEST_INFOS.iter().enumerate() {
            let info = registry.resolve(5000 + offset as i32).info().unwrap();
            assert_eq!(info, expected);
        }
        assert_eq!(registry.resolve(TEST_GAMMA).info().unwrap().name(), "TEST_GAMMA");
        assert!(matches!(registry.resolve(5003), Resolution::Reserved { .. }));
    }

    #[test]
    fn empty_table_block_is_all_reserved() {
        let mut registry = ErrorRegistry::empty();
        registry.register("Hollow", 100, 200, EMPTY_INFOS).unwrap();
        assert!(matches!(registry.resolve(100), Resolution::Reserved { .. }));
        assert!(matches!(registry.resolve(199), Resolution::Reserved { .. }));
        assert!(registry.resolve(200).is_foreign());
    }

    #[test]
    fn registry_errors_display_context() {
        let err = RegistryError::AlreadyRegistered {
            name: "Test",
            owner: "UDS Error",
        };
        assert_eq!(err.to_string(), "error range of 'Test' overlaps block 'UDS Error'");
        assert_eq!(err.code_name(), "UDS_ALREADY_REGISTERED");

        let err = RegistryError::InvalidRange {
            first: 10,
            last_reserved: 5,
            infos: 0,
        };
        assert_eq!(err.to_string(), "bad error block range [10, 5) for 0 info entries");
    }

    #[test]
    fn summary_lists_every_block() {
        let registry = ErrorRegistry::with_builtins();
        let mut out = String::new();
        registry.write_summary(&mut out).unwrap();

        let lines: Vec<_> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("block='UDS Error' base=1024"));
        assert!(lines[1].starts_with("block='UDS Internal Error' base=66560"));
    }
}
