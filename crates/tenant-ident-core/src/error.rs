// crates/tenant-ident-core/src/error.rs
// ============================================================================
// Module: Tenant Ident Errors
// Description: Error taxonomy shared by the identifier normalizers.
// Purpose: Report invalid input, GUID, and version failures with stable codes.
// Dependencies: thiserror
// ============================================================================

//! ## Overview
//! Every fallible normalizer returns [`NormalizeError`]. Errors are raised
//! synchronously and carry no partial output; callers decide whether to retry
//! with corrected input.

// ============================================================================
// SECTION: Imports
// ============================================================================

use thiserror::Error;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Errors emitted by the identifier normalizers.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
/// - [`NormalizeError::code`] labels never change between releases.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NormalizeError {
    /// Input was not text where text was required.
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// A batch element failed GUID format validation.
    #[error("not a GUID at index {index}: \"{value}\"")]
    InvalidGuid {
        /// Position of the first failing element.
        index: usize,
        /// Rendering of the failing element.
        value: String,
    },
    /// Version token outside the supported set.
    #[error("invalid AAD version: {0}")]
    InvalidVersion(String),
}

impl NormalizeError {
    /// Returns a stable label for the error kind.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::InvalidInput(_) => "invalid_input",
            Self::InvalidGuid {
                ..
            } => "invalid_guid",
            Self::InvalidVersion(_) => "invalid_version",
        }
    }
}
