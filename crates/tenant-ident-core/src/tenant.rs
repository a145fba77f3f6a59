// crates/tenant-ident-core/src/tenant.rs
// ============================================================================
// Module: Tenant Normalization
// Description: Classification and canonicalization of tenant identifiers.
// Purpose: Turn GUIDs, domains, and short names into identity provider form.
// Dependencies: crate::guid, crate::error
// ============================================================================

//! ## Overview
//! A tenant is lowercased once and then routed by the first matching rule:
//! 1. GUID spellings are canonicalized.
//! 2. Reserved aliases (`common` by default) pass through.
//! 3. Values without a `.` receive the domain suffix.
//! 4. Everything else is a domain name and passes through.
//!
//! The reserved check runs before the dot check so an alias that contains a
//! dot is never mistaken for a domain.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeSet;

use crate::error::NormalizeError;
use crate::guid::canonicalize;
use crate::guid::is_guid_str;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Suffix appended to short tenant names.
pub const DEFAULT_DOMAIN_SUFFIX: &str = ".onmicrosoft.com";
/// Multi-tenant alias that is never rewritten.
pub const COMMON_TENANT: &str = "common";

// ============================================================================
// SECTION: Policy
// ============================================================================

/// Suffix and reserved aliases applied during tenant normalization.
///
/// # Invariants
/// - `domain_suffix` is lowercase, starts with `.`, and is longer than `.`.
/// - `reserved` holds lowercase aliases and always contains [`COMMON_TENANT`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TenantPolicy {
    /// Suffix appended to short names.
    domain_suffix: String,
    /// Aliases left unchanged.
    reserved: BTreeSet<String>,
}

impl TenantPolicy {
    /// Creates a policy with the given suffix and only `common` reserved.
    ///
    /// # Errors
    ///
    /// Returns [`NormalizeError::InvalidInput`] when the suffix does not start
    /// with `.` or has nothing after it.
    pub fn new(domain_suffix: &str) -> Result<Self, NormalizeError> {
        let domain_suffix = domain_suffix.to_lowercase();
        if !domain_suffix.starts_with('.') || domain_suffix.len() < 2 {
            return Err(NormalizeError::InvalidInput(format!(
                "domain suffix must start with '.' and name a domain: \"{domain_suffix}\""
            )));
        }
        Ok(Self::with_suffix(domain_suffix))
    }

    /// Builds a policy from a validated suffix.
    fn with_suffix(domain_suffix: String) -> Self {
        let mut reserved = BTreeSet::new();
        reserved.insert(COMMON_TENANT.to_string());
        Self {
            domain_suffix,
            reserved,
        }
    }

    /// Adds a reserved alias (stored lowercase).
    #[must_use]
    pub fn with_reserved(mut self, alias: &str) -> Self {
        self.reserved.insert(alias.to_lowercase());
        self
    }

    /// Returns the suffix appended to short names.
    #[must_use]
    pub fn domain_suffix(&self) -> &str {
        &self.domain_suffix
    }

    /// Returns the reserved aliases in sorted order.
    pub fn reserved(&self) -> impl Iterator<Item = &str> {
        self.reserved.iter().map(String::as_str)
    }

    /// Returns true when the lowercased `value` is a reserved alias.
    #[must_use]
    pub fn is_reserved(&self, value: &str) -> bool {
        self.reserved.contains(value)
    }
}

impl Default for TenantPolicy {
    fn default() -> Self {
        Self::with_suffix(DEFAULT_DOMAIN_SUFFIX.to_string())
    }
}

// ============================================================================
// SECTION: Classification
// ============================================================================

/// Rule that applies to a tenant value.
///
/// # Invariants
/// - Variants are stable for diagnostics labeling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TenantKind {
    /// GUID spelling; canonicalized.
    Guid,
    /// Reserved alias; unchanged.
    Reserved,
    /// Contains a dot; unchanged.
    Domain,
    /// Bare name; suffix appended.
    ShortName,
}

impl TenantKind {
    /// Returns a stable label for the kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Guid => "guid",
            Self::Reserved => "reserved",
            Self::Domain => "domain",
            Self::ShortName => "short_name",
        }
    }
}

/// Applies the rule precedence to an already-lowercased value.
fn classify_lowered(policy: &TenantPolicy, lowered: &str) -> TenantKind {
    if is_guid_str(lowered) {
        TenantKind::Guid
    } else if policy.is_reserved(lowered) {
        TenantKind::Reserved
    } else if lowered.contains('.') {
        TenantKind::Domain
    } else {
        TenantKind::ShortName
    }
}

/// Classifies a tenant value under the default policy.
#[must_use]
pub fn classify_tenant(value: &str) -> TenantKind {
    classify_tenant_with(&TenantPolicy::default(), value)
}

/// Classifies a tenant value under `policy`.
#[must_use]
pub fn classify_tenant_with(policy: &TenantPolicy, value: &str) -> TenantKind {
    classify_lowered(policy, &value.to_lowercase())
}

// ============================================================================
// SECTION: Normalization
// ============================================================================

/// Normalizes one tenant value under `policy` and reports the rule applied.
#[must_use]
pub fn explain_tenant_str_with(policy: &TenantPolicy, value: &str) -> (TenantKind, String) {
    let mut lowered = value.to_lowercase();
    let kind = classify_lowered(policy, &lowered);
    let normalized = match kind {
        TenantKind::Guid => canonicalize(&lowered),
        TenantKind::Reserved | TenantKind::Domain => lowered,
        TenantKind::ShortName => {
            lowered.push_str(policy.domain_suffix());
            lowered
        }
    };
    (kind, normalized)
}

/// Normalizes one tenant value under `policy`.
#[must_use]
pub fn normalize_tenant_str_with(policy: &TenantPolicy, value: &str) -> String {
    explain_tenant_str_with(policy, value).1
}

/// Normalizes one tenant value under the default policy.
#[must_use]
pub fn normalize_tenant_str(value: &str) -> String {
    normalize_tenant_str_with(&TenantPolicy::default(), value)
}

/// Normalizes each tenant value under `policy`, preserving order and length.
#[must_use]
pub fn normalize_tenant_with<S: AsRef<str>>(policy: &TenantPolicy, values: &[S]) -> Vec<String> {
    values.iter().map(|value| normalize_tenant_str_with(policy, value.as_ref())).collect()
}

/// Normalizes each tenant value under the default policy.
#[must_use]
pub fn normalize_tenant<S: AsRef<str>>(values: &[S]) -> Vec<String> {
    normalize_tenant_with(&TenantPolicy::default(), values)
}
