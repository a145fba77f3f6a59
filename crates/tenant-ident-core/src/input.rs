// crates/tenant-ident-core/src/input.rs
// ============================================================================
// Module: Identifier Input Boundary
// Description: Typed view of untrusted JSON identifier batches.
// Purpose: Apply the text/non-text checks before any element-wise logic.
// Dependencies: serde_json, crate::guid, crate::tenant
// ============================================================================

//! ## Overview
//! Identifier batches arriving as JSON may hold values that are not text.
//! [`IdentifierInput`] resolves the type question once, at the boundary:
//! - [`is_guid_input`] reports non-text input as all-false and never fails.
//! - [`normalize_guid_input`] rejects non-text input as not a GUID.
//! - [`normalize_tenant_input`] and [`explain_tenant_input`] reject non-text
//!   input as invalid input.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde_json::Value;

use crate::error::NormalizeError;
use crate::guid::is_guid;
use crate::guid::normalize_guid;
use crate::tenant::TenantKind;
use crate::tenant::TenantPolicy;
use crate::tenant::explain_tenant_str_with;
use crate::tenant::normalize_tenant_with;

// ============================================================================
// SECTION: Input Type
// ============================================================================

/// Identifier batch after the type check.
///
/// # Invariants
/// - `Text` holds every element in input order.
/// - `NonText::len` is the array length, or 1 for a scalar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdentifierInput {
    /// Every element is a string.
    Text(Vec<String>),
    /// At least one element is not a string.
    NonText {
        /// Number of elements in the rejected input.
        len: usize,
        /// JSON type name of the first offending value.
        found: &'static str,
    },
}

impl IdentifierInput {
    /// Resolves a JSON value into a typed identifier batch.
    #[must_use]
    pub fn from_json(value: &Value) -> Self {
        match value {
            Value::String(text) => Self::Text(vec![text.clone()]),
            Value::Array(items) => {
                let mut texts = Vec::with_capacity(items.len());
                for item in items {
                    match item {
                        Value::String(text) => texts.push(text.clone()),
                        other => {
                            return Self::NonText {
                                len: items.len(),
                                found: json_type_name(other),
                            };
                        }
                    }
                }
                Self::Text(texts)
            }
            other => Self::NonText {
                len: 1,
                found: json_type_name(other),
            },
        }
    }

    /// Number of elements in the batch.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Text(values) => values.len(),
            Self::NonText {
                len, ..
            } => *len,
        }
    }

    /// Returns true when the batch holds no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<Vec<String>> for IdentifierInput {
    fn from(values: Vec<String>) -> Self {
        Self::Text(values)
    }
}

/// Returns the JSON type label used in diagnostics.
const fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

// ============================================================================
// SECTION: Boundary Operations
// ============================================================================

/// Classifies each element; non-text input is entirely `false`.
#[must_use]
pub fn is_guid_input(input: &IdentifierInput) -> Vec<bool> {
    match input {
        IdentifierInput::Text(values) => is_guid(values),
        IdentifierInput::NonText {
            len, ..
        } => vec![false; *len],
    }
}

/// Canonicalizes a GUID batch.
///
/// # Errors
///
/// Returns [`NormalizeError::InvalidGuid`] when any element is not a GUID,
/// including every element of non-text input.
pub fn normalize_guid_input(input: &IdentifierInput) -> Result<Vec<String>, NormalizeError> {
    match input {
        IdentifierInput::Text(values) => normalize_guid(values),
        IdentifierInput::NonText {
            found, ..
        } => Err(NormalizeError::InvalidGuid {
            index: 0,
            value: format!("<{found}>"),
        }),
    }
}

/// Normalizes a tenant batch under `policy`.
///
/// # Errors
///
/// Returns [`NormalizeError::InvalidInput`] when the input is not text; no
/// element is inspected in that case.
pub fn normalize_tenant_input(
    policy: &TenantPolicy,
    input: &IdentifierInput,
) -> Result<Vec<String>, NormalizeError> {
    tenant_text(input).map(|values| normalize_tenant_with(policy, values))
}

/// Normalizes a tenant batch under `policy`, pairing each output with its rule.
///
/// # Errors
///
/// Returns [`NormalizeError::InvalidInput`] when the input is not text.
pub fn explain_tenant_input(
    policy: &TenantPolicy,
    input: &IdentifierInput,
) -> Result<Vec<(TenantKind, String)>, NormalizeError> {
    tenant_text(input).map(|values| {
        values.iter().map(|value| explain_tenant_str_with(policy, value)).collect()
    })
}

/// Returns the text values of a tenant batch.
fn tenant_text(input: &IdentifierInput) -> Result<&[String], NormalizeError> {
    match input {
        IdentifierInput::Text(values) => Ok(values),
        IdentifierInput::NonText {
            found, ..
        } => Err(NormalizeError::InvalidInput(format!("tenant must be a string, found {found}"))),
    }
}
