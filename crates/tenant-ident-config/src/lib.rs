// crates/tenant-ident-config/src/lib.rs
// ============================================================================
// Module: Tenant Ident Config Library
// Description: Configuration model, loader, and validation for Tenant Ident.
// Purpose: Resolve tenant policy and batch limits from TOML.
// Dependencies: serde, tenant-ident-core, thiserror, toml
// ============================================================================

//! ## Overview
//! Tenant Ident reads an optional `tenant-ident.toml` that tunes the tenant
//! policy (domain suffix and reserved aliases) and the batch limits enforced
//! by the CLI. A missing default file yields the built-in defaults, which
//! match [`tenant_ident_core::TenantPolicy::default`].
//! Invariants:
//! - Loading is fail-closed: oversized, non-UTF-8, or invalid files are errors.
//! - The reserved alias set always includes `common`.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod config;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use config::CONFIG_ENV_VAR;
pub use config::ConfigError;
pub use config::DEFAULT_CONFIG_NAME;
pub use config::LimitsConfig;
pub use config::TenantConfig;
pub use config::TenantIdentConfig;
