//! Built-in error blocks of the deduplication index.
//!
//! Two namespaces are registered before any other subsystem gets a chance:
//!
//! | Block                | Base   | Reserved end | Purpose                         |
//! |----------------------|--------|--------------|---------------------------------|
//! | `UDS Error`          | 1024   | 1464         | Errors returned by the public API |
//! | `UDS Internal Error` | 66560  | 67000        | Errors internal to the library  |
//!
//! Both blocks reserve 440 codes, far more than they map, so new codes can be
//! appended without colliding with other registrants.
//!
//! # Governance
//!
//! Codes are append-only. Retired codes keep their slot as an
//! `*_UNUSED_*` placeholder so that numeric values never shift. The `tests`
//! module at the bottom checks that every table stays inside its reservation
//! and that a sample of constants still lands on its documented value.

use crate::define_error_infos;
use crate::registry::ErrorBlock;

/// Name of the public error block.
pub const UDS_ERROR_BLOCK_NAME: &str = "UDS Error";

/// Name of the internal error block.
pub const UDS_INTERNAL_BLOCK_NAME: &str = "UDS Internal Error";

/// Block range constants. Checked for consistency in `tests` module.
pub mod ranges {
    /// First public error code.
    pub const UDS_ERROR_CODE_BASE: i32 = 1024;
    /// First code beyond the public reservation.
    pub const UDS_ERROR_CODE_BLOCK_END: i32 = UDS_ERROR_CODE_BASE + 440;

    /// First internal error code.
    pub const UDS_INTERNAL_ERROR_CODE_BASE: i32 = 66560;
    /// First code beyond the internal reservation.
    pub const UDS_INTERNAL_ERROR_CODE_BLOCK_END: i32 = UDS_INTERNAL_ERROR_CODE_BASE + 440;
}

pub use ranges::*;

// -----------------------------------------------------------------------------
// UDS Error (1024-1463) - public API
// -----------------------------------------------------------------------------
define_error_infos! {
    /// Info table of the public `UDS Error` block.
    pub const UDS_ERROR_INFOS, base = UDS_ERROR_CODE_BASE => {
        UDS_UNINITIALIZED              = 0  => "UDS library is not initialized",
        UDS_SHUTTINGDOWN               = 1  => "UDS library is shutting down",
        UDS_EMODULE_LOAD               = 2  => "Could not load modules",
        UDS_ENOTHREADS                 = 3  => "Could not create a new thread",
        UDS_NOCONTEXT                  = 4  => "Could not find the requested library context",
        UDS_DISABLED                   = 5  => "UDS library context is disabled",
        UDS_CORRUPT_COMPONENT          = 6  => "Corrupt saved component",
        UDS_UNKNOWN_ERROR              = 7  => "Unknown error",
        UDS_UNUSED_CODE_8              = 8  => "Unused error code 8",
        UDS_UNUSED_CODE_9              = 9  => "Unused error code 9",
        UDS_UNSUPPORTED_VERSION        = 10 => "Unsupported version",
        UDS_NO_INDEXSESSION            = 11 => "Index session not known",
        UDS_CORRUPT_DATA               = 12 => "Index data in memory is corrupt",
        UDS_SHORT_READ                 = 13 => "Could not read requested number of bytes",
        UDS_UNUSED_CODE_14             = 14 => "Unused error code 14",
        UDS_RESOURCE_LIMIT_EXCEEDED    = 15 => "Internal resource limits exceeded",
        UDS_VOLUME_OVERFLOW            = 16 => "Memory overflow due to storage failure",
        UDS_UNUSED_CODE_17             = 17 => "Unused error code 17",
        UDS_UNUSED_CODE_18             = 18 => "Unused error code 18",
        UDS_UNUSED_CODE_19             = 19 => "Unused error code 19",
        UDS_CONF_PTR_REQUIRED          = 20 => "A configuration pointer is required",
        UDS_INDEX_STATS_PTR_REQUIRED   = 21 => "An index stats pointer is required",
        UDS_CONTEXT_STATS_PTR_REQUIRED = 22 => "A context stats pointer is required",
        UDS_UNUSED_CODE_23             = 23 => "Unused error code 23",
        UDS_UNUSED_CODE_24             = 24 => "Unused error code 24",
        UDS_UNUSED_CODE_25             = 25 => "Unused error code 25",
        UDS_UNUSED_CODE_26             = 26 => "Unused error code 26",
        UDS_UNUSED_CODE_27             = 27 => "Unused error code 27",
        UDS_INVALID_MEMORY_SIZE        = 28 => "Configured memory too small or unsupported size",
        UDS_UNUSED_CODE_29             = 29 => "Unused error code 29",
        UDS_INDEX_NAME_REQUIRED        = 30 => "An index name is required",
        UDS_CONF_REQUIRED              = 31 => "A configuration is required",
        UDS_UNUSED_CODE_32             = 32 => "Unused error code 32",
        UDS_UNUSED_CODE_33             = 33 => "Unused error code 33",
        UDS_UNUSED_CODE_34             = 34 => "Unused error code 34",
        UDS_UNUSED_CODE_35             = 35 => "Unused error code 35",
        UDS_UNUSED_CODE_36             = 36 => "Unused error code 36",
        UDS_NO_INDEX                   = 37 => "No index found",
        UDS_BAD_CHECKPOINT_FREQUENCY   = 38 => "Checkpoint frequency out of range",
        UDS_WRONG_INDEX_CONFIG         = 39 => "Wrong type of index configuration",
        UDS_UNUSED_CODE_40             = 40 => "Unused error code 40",
        UDS_UNUSED_CODE_41             = 41 => "Unused error code 41",
        UDS_UNUSED_CODE_42             = 42 => "Unused error code 42",
        UDS_UNUSED_CODE_43             = 43 => "Unused error code 43",
        UDS_END_OF_FILE                = 44 => "Unexpected end of file",
        UDS_INDEX_NOT_SAVED_CLEANLY    = 45 => "Index not saved cleanly",
        UDS_UNUSED_CODE_46             = 46 => "Unused error code 46",
        UDS_INSUFFICIENT_INDEX_SPACE   = 47 => "Insufficient index space",
        UDS_UNUSED_CODE_48             = 48 => "Unused error code 48",
        UDS_UNUSED_CODE_49             = 49 => "Unused error code 49",
        UDS_SUSPENDED                  = 50 => "Index suspended",
        UDS_INVALID_OPERATION          = 51 => "Invalid session operation",
        UDS_INDEXSESSION_IN_USE        = 52 => "Index session in use",
        UDS_CALLBACK_REQUIRED          = 53 => "A callback function is required",
        UDS_INVALID_OPERATION_TYPE     = 54 => "Invalid type of request operation",
    }
}

/// First public code without an info entry.
pub const UDS_ERROR_CODE_LAST: i32 = UDS_ERROR_CODE_BASE + UDS_ERROR_INFOS.len() as i32;

// -----------------------------------------------------------------------------
// UDS Internal Error (66560-66999) - library internals
// -----------------------------------------------------------------------------
define_error_infos! {
    /// Info table of the `UDS Internal Error` block.
    pub const UDS_INTERNAL_ERROR_INFOS, base = UDS_INTERNAL_ERROR_CODE_BASE => {
        UDS_INTERNAL_UNUSED_0     = 0  => "Unused internal error 0",
        UDS_OVERFLOW              = 1  => "Index overflow",
        UDS_INTERNAL_UNUSED_2     = 2  => "Unused internal error 2",
        UDS_INVALID_ARGUMENT      = 3  => "Invalid argument passed to internal routine",
        UDS_BAD_STATE             = 4  => "UDS data structures are in an invalid state",
        UDS_DUPLICATE_NAME        = 5  => "Attempt to enter the same name into a delta index twice",
        UDS_UNEXPECTED_RESULT     = 6  => "Unexpected result from internal routine",
        UDS_INJECTED_ERROR        = 7  => "Injected error",
        UDS_ASSERTION_FAILED      = 8  => "Assertion failed",
        UDS_INTERNAL_UNUSED_9     = 9  => "Unused internal error 9",
        UDS_QUEUED                = 10 => "Request queued",
        UDS_INTERNAL_UNUSED_11    = 11 => "Unused internal error 11",
        UDS_INTERNAL_UNUSED_12    = 12 => "Unused internal error 12",
        UDS_BUFFER_ERROR          = 13 => "Buffer error",
        UDS_INTERNAL_UNUSED_14    = 14 => "Unused internal error 14",
        UDS_INTERNAL_UNUSED_15    = 15 => "Unused internal error 15",
        UDS_NO_DIRECTORY          = 16 => "Expected directory is missing",
        UDS_CHECKPOINT_INCOMPLETE = 17 => "Checkpoint not completed",
        UDS_INTERNAL_UNUSED_18    = 18 => "Unused internal error 18",
        UDS_INTERNAL_UNUSED_19    = 19 => "Unused internal error 19",
        UDS_ALREADY_REGISTERED    = 20 => "Error range already registered",
        UDS_BAD_IO_DIRECTION      = 21 => "Bad I/O direction",
        UDS_INCORRECT_ALIGNMENT   = 22 => "Offset not at block alignment",
        UDS_OUT_OF_RANGE          = 23 => "Cannot access data outside specified limits",
    }
}

/// First internal code without an info entry.
pub const UDS_INTERNAL_ERROR_CODE_LAST: i32 =
    UDS_INTERNAL_ERROR_CODE_BASE + UDS_INTERNAL_ERROR_INFOS.len() as i32;

/// The blocks every registry starts with, in registration order.
pub(crate) const BUILTIN_BLOCKS: [ErrorBlock; 2] = [
    ErrorBlock::from_table(
        UDS_ERROR_BLOCK_NAME,
        UDS_ERROR_CODE_BASE,
        UDS_ERROR_CODE_BLOCK_END,
        UDS_ERROR_INFOS,
    ),
    ErrorBlock::from_table(
        UDS_INTERNAL_BLOCK_NAME,
        UDS_INTERNAL_ERROR_CODE_BASE,
        UDS_INTERNAL_ERROR_CODE_BLOCK_END,
        UDS_INTERNAL_ERROR_INFOS,
    ),
];
