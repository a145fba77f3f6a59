// crates/tenant-ident-core/src/version.rs
// ============================================================================
// Module: AAD Version Normalization
// Description: Resolution of AAD endpoint version tokens.
// Purpose: Map the closed set of version spellings to a numeric code.
// Dependencies: serde, crate::error
// ============================================================================

//! ## Overview
//! Callers name the endpoint version either by label (`"v1.0"`, `"v2.0"`) or
//! by number (`1`, `2`). [`normalize_version`] resolves both spellings into
//! [`AadVersion`] and rejects everything else. Labels are matched exactly;
//! the string `"1"` is a label, not a number, and is rejected.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

use crate::error::NormalizeError;

// ============================================================================
// SECTION: Types
// ============================================================================

/// Version token as supplied by a caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum VersionToken {
    /// Textual label such as `"v2.0"`.
    Label(String),
    /// Numeric code such as `2`.
    Number(f64),
}

impl VersionToken {
    /// Reads a command-line argument; numeric text becomes [`Self::Number`].
    #[must_use]
    pub fn parse_arg(arg: &str) -> Self {
        arg.trim()
            .parse::<f64>()
            .map_or_else(|_| Self::Label(arg.to_string()), Self::Number)
    }
}

impl From<&str> for VersionToken {
    fn from(value: &str) -> Self {
        Self::Label(value.to_string())
    }
}

impl From<u8> for VersionToken {
    fn from(value: u8) -> Self {
        Self::Number(f64::from(value))
    }
}

impl fmt::Display for VersionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Label(label) => write!(f, "\"{label}\""),
            Self::Number(number) => write!(f, "{number}"),
        }
    }
}

/// Resolved AAD endpoint version.
///
/// # Invariants
/// - Exactly two values exist; [`AadVersion::code`] is 1 or 2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AadVersion {
    /// Version 1.0 endpoint.
    V1,
    /// Version 2.0 endpoint.
    V2,
}

impl AadVersion {
    /// Returns the internal numeric code.
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::V1 => 1,
            Self::V2 => 2,
        }
    }

    /// Returns the textual label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::V1 => "v1.0",
            Self::V2 => "v2.0",
        }
    }
}

impl fmt::Display for AadVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ============================================================================
// SECTION: Normalization
// ============================================================================

/// Resolves a version token.
///
/// # Errors
///
/// Returns [`NormalizeError::InvalidVersion`] for anything other than
/// `"v1.0"`, `"v2.0"`, `1`, or `2`.
pub fn normalize_version(token: &VersionToken) -> Result<AadVersion, NormalizeError> {
    let resolved = match token {
        VersionToken::Label(label) => match label.as_str() {
            "v1.0" => Some(AadVersion::V1),
            "v2.0" => Some(AadVersion::V2),
            _ => None,
        },
        VersionToken::Number(number) => numeric_version(*number),
    };
    resolved.ok_or_else(|| NormalizeError::InvalidVersion(token.to_string()))
}

/// Matches a numeric code exactly; NaN and fractions never match.
fn numeric_version(number: f64) -> Option<AadVersion> {
    if number.total_cmp(&1.0).is_eq() {
        Some(AadVersion::V1)
    } else if number.total_cmp(&2.0).is_eq() {
        Some(AadVersion::V2)
    } else {
        None
    }
}
