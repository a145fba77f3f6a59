// crates/tenant-ident-core/src/guid.rs
// ============================================================================
// Module: GUID Detection and Canonicalization
// Description: Anchored GUID format scanner and canonical GUID rendering.
// Purpose: Classify GUID spellings and reduce them to one canonical form.
// Dependencies: serde, crate::error
// ============================================================================

//! ## Overview
//! A GUID is accepted in exactly one of four spellings (case-insensitive):
//! - 32 contiguous hex digits: `72f988bf86f141af91ab2d7cd011db47`
//! - hyphenated 8-4-4-4-12: `72f988bf-86f1-41af-91ab-2d7cd011db47`
//! - hyphenated, wrapped in braces: `{72f988bf-86f1-41af-91ab-2d7cd011db47}`
//! - hyphenated, wrapped in parentheses: `(72f988bf-86f1-41af-91ab-2d7cd011db47)`
//!
//! Detection is a whole-string byte scan; there is no substring matching and
//! spellings are never mixed. The canonical form is the lowercase hyphenated
//! spelling without a wrapper.
//!
//! Batch canonicalization is all-or-nothing: every element is validated
//! before any element is rewritten.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use serde::Serialize;

use crate::error::NormalizeError;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Length of the unhyphenated 32-digit GUID spelling.
pub const GUID_SIMPLE_LEN: usize = 32;
/// Length of the canonical hyphenated GUID spelling.
pub const GUID_CANONICAL_LEN: usize = 36;
/// Hyphen positions within the hyphenated spelling.
const HYPHEN_POSITIONS: [usize; 4] = [8, 13, 18, 23];
/// Digit offsets within the 32-digit payload where hyphens are re-inserted.
const GROUP_OFFSETS: [usize; 4] = [8, 12, 16, 20];

// ============================================================================
// SECTION: Detection
// ============================================================================

/// Returns true when `value` is a validly formatted GUID.
///
/// Never fails; anything that is not one of the accepted spellings, including
/// non-ASCII text, yields `false`.
#[must_use]
pub fn is_guid_str(value: &str) -> bool {
    let bytes = value.as_bytes();
    strip_wrapper(bytes).map_or_else(
        || is_simple(bytes) || is_hyphenated(bytes),
        is_hyphenated,
    )
}

/// Classifies each element of `values`, preserving order and length.
#[must_use]
pub fn is_guid<S: AsRef<str>>(values: &[S]) -> Vec<bool> {
    values.iter().map(|value| is_guid_str(value.as_ref())).collect()
}

/// Returns the payload inside a matching `{}` or `()` pair, if present.
fn strip_wrapper(bytes: &[u8]) -> Option<&[u8]> {
    let (&first, rest) = bytes.split_first()?;
    let (&last, inner) = rest.split_last()?;
    match (first, last) {
        (b'{', b'}') | (b'(', b')') => Some(inner),
        _ => None,
    }
}

/// Checks the 32-digit spelling.
fn is_simple(bytes: &[u8]) -> bool {
    bytes.len() == GUID_SIMPLE_LEN && bytes.iter().all(u8::is_ascii_hexdigit)
}

/// Checks the 8-4-4-4-12 hyphenated spelling.
fn is_hyphenated(bytes: &[u8]) -> bool {
    bytes.len() == GUID_CANONICAL_LEN
        && bytes.iter().enumerate().all(|(position, byte)| {
            if HYPHEN_POSITIONS.contains(&position) {
                *byte == b'-'
            } else {
                byte.is_ascii_hexdigit()
            }
        })
}

// ============================================================================
// SECTION: Canonicalization
// ============================================================================

/// Rewrites an already-validated GUID spelling into canonical form.
pub(crate) fn canonicalize(value: &str) -> String {
    let bytes = value.as_bytes();
    let payload = strip_wrapper(bytes).unwrap_or(bytes);
    let mut canonical = String::with_capacity(GUID_CANONICAL_LEN);
    for (offset, byte) in payload.iter().filter(|byte| **byte != b'-').enumerate() {
        if GROUP_OFFSETS.contains(&offset) {
            canonical.push('-');
        }
        canonical.push(char::from(byte.to_ascii_lowercase()));
    }
    canonical
}

/// Canonicalizes every element of `values`.
///
/// # Errors
///
/// Returns [`NormalizeError::InvalidGuid`] naming the first element that is
/// not a GUID. No element is canonicalized in that case.
pub fn normalize_guid<S: AsRef<str>>(values: &[S]) -> Result<Vec<String>, NormalizeError> {
    if let Some((index, value)) =
        values.iter().enumerate().find(|(_, value)| !is_guid_str(value.as_ref()))
    {
        return Err(NormalizeError::InvalidGuid {
            index,
            value: value.as_ref().to_string(),
        });
    }
    Ok(values.iter().map(|value| canonicalize(value.as_ref())).collect())
}

// ============================================================================
// SECTION: Guid Type
// ============================================================================

/// GUID held in canonical form.
///
/// # Invariants
/// - The inner string is always lowercase, hyphenated 8-4-4-4-12, unwrapped.
/// - Deserialization accepts any spelling and canonicalizes it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Guid(String);

impl Guid {
    /// Parses any accepted GUID spelling.
    ///
    /// # Errors
    ///
    /// Returns [`NormalizeError::InvalidGuid`] when `value` is not a GUID.
    pub fn parse(value: &str) -> Result<Self, NormalizeError> {
        if is_guid_str(value) {
            Ok(Self(canonicalize(value)))
        } else {
            Err(NormalizeError::InvalidGuid {
                index: 0,
                value: value.to_string(),
            })
        }
    }

    /// Returns the canonical spelling.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the GUID and returns the canonical spelling.
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }

    /// Renders the 32-digit spelling without hyphens.
    #[must_use]
    pub fn simple(&self) -> String {
        self.0.chars().filter(|ch| *ch != '-').collect()
    }

    /// Renders the brace-wrapped spelling.
    #[must_use]
    pub fn braced(&self) -> String {
        format!("{{{}}}", self.0)
    }
}

impl fmt::Display for Guid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Guid {
    type Err = NormalizeError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::parse(value)
    }
}

impl TryFrom<String> for Guid {
    type Error = NormalizeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Guid> for String {
    fn from(value: Guid) -> Self {
        value.0
    }
}
