// crates/tenant-ident-core/tests/support/mod.rs
// ============================================================================
// Module: Core Test Support
// Description: Shared result type and assertion helper for integration tests.
// Purpose: Let tests report failures as values instead of panics.
// Dependencies: std
// ============================================================================

//! ## Overview
//! Shared helpers for tenant-ident-core integration tests.

#![allow(dead_code, reason = "Not every test binary uses every helper.")]

/// Result type returned by integration tests.
pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Fails with `message` when `condition` is false.
pub fn ensure(condition: bool, message: &str) -> TestResult {
    if condition { Ok(()) } else { Err(message.to_string().into()) }
}
