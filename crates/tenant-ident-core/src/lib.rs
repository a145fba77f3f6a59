// crates/tenant-ident-core/src/lib.rs
// ============================================================================
// Module: Tenant Ident Core Library
// Description: GUID, tenant, and AAD version normalization.
// Purpose: Canonicalize identifiers before directory and token requests.
// Dependencies: serde, serde_json, thiserror
// ============================================================================

//! ## Overview
//! Tenant Ident Core turns caller-supplied identifiers into the canonical
//! forms an identity provider expects:
//! - [`is_guid`] classifies GUID spellings and never fails.
//! - [`normalize_guid`] canonicalizes a GUID batch, all or nothing.
//! - [`normalize_tenant`] routes tenants to GUID canonicalization,
//!   passthrough, or suffix expansion.
//! - [`normalize_version`] resolves an AAD version token.
//!
//! Invariants:
//! - Every operation is pure and safe to call concurrently.
//! - Batch outputs preserve input order and length.
//! - Normalizing a normalized value returns it unchanged.
//!
//! ```
//! use tenant_ident_core::normalize_tenant;
//!
//! let tenants = normalize_tenant(&["Microsoft", "72F988BF86F141AF91AB2D7CD011DB47"]);
//! assert_eq!(tenants, ["microsoft.onmicrosoft.com", "72f988bf-86f1-41af-91ab-2d7cd011db47"]);
//! ```

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod error;
pub mod guid;
pub mod input;
pub mod tenant;
pub mod version;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use error::NormalizeError;
pub use guid::GUID_CANONICAL_LEN;
pub use guid::GUID_SIMPLE_LEN;
pub use guid::Guid;
pub use guid::is_guid;
pub use guid::is_guid_str;
pub use guid::normalize_guid;
pub use input::IdentifierInput;
pub use input::explain_tenant_input;
pub use input::is_guid_input;
pub use input::normalize_guid_input;
pub use input::normalize_tenant_input;
pub use tenant::COMMON_TENANT;
pub use tenant::DEFAULT_DOMAIN_SUFFIX;
pub use tenant::TenantKind;
pub use tenant::TenantPolicy;
pub use tenant::classify_tenant;
pub use tenant::classify_tenant_with;
pub use tenant::explain_tenant_str_with;
pub use tenant::normalize_tenant;
pub use tenant::normalize_tenant_str;
pub use tenant::normalize_tenant_str_with;
pub use tenant::normalize_tenant_with;
pub use version::AadVersion;
pub use version::VersionToken;
pub use version::normalize_version;
