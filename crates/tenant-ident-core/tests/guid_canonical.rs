// crates/tenant-ident-core/tests/guid_canonical.rs
// ============================================================================
// Module: GUID Canonicalization Tests
// Description: Coverage for batch canonicalization and the `Guid` type.
// Purpose: Ensure all spellings reduce to one form and batches fail atomically.
// Dependencies: serde_json, tenant_ident_core::guid
// ============================================================================

//! ## Overview
//! Integration tests for [`tenant_ident_core::normalize_guid`] and
//! [`tenant_ident_core::Guid`].

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only output and panic-based assertions are permitted."
)]

mod support;

use support::TestResult;
use support::ensure;
use tenant_ident_core::Guid;
use tenant_ident_core::NormalizeError;
use tenant_ident_core::normalize_guid;

const CANONICAL: &str = "72f988bf-86f1-41af-91ab-2d7cd011db47";

/// Tests that every spelling reduces to the same canonical form.
#[test]
fn all_spellings_share_one_canonical_form() -> TestResult {
    let spellings = [
        "72F988BF86F141AF91AB2D7CD011DB47",
        "72f988bf-86f1-41af-91ab-2d7cd011db47",
        "{72F988BF-86F1-41AF-91AB-2D7CD011DB47}",
        "(72f988bf-86f1-41af-91ab-2d7cd011db47)",
    ];
    let normalized = normalize_guid(&spellings)?;
    ensure(normalized.len() == spellings.len(), "expected one output per input")?;
    ensure(normalized.iter().all(|value| value == CANONICAL), "expected canonical outputs")?;
    Ok(())
}

/// Tests that canonicalization is idempotent.
#[test]
fn normalizing_twice_is_a_no_op() -> TestResult {
    let once = normalize_guid(&["{72F988BF-86F1-41AF-91AB-2D7CD011DB47}"])?;
    let twice = normalize_guid(&once)?;
    ensure(once == twice, "expected idempotent canonicalization")?;
    Ok(())
}

/// Tests the all-or-nothing batch contract.
#[test]
fn one_bad_element_fails_the_whole_batch() -> TestResult {
    let result = normalize_guid(&[CANONICAL, "notAGuid", "also-not"]);
    match result {
        Err(NormalizeError::InvalidGuid {
            index,
            value,
        }) => {
            ensure(index == 1, "expected first failing index")?;
            ensure(value == "notAGuid", "expected failing value")?;
        }
        other => return Err(format!("expected InvalidGuid, got {other:?}").into()),
    }
    Ok(())
}

/// Tests that an empty batch canonicalizes to an empty batch.
#[test]
fn empty_batch_is_accepted() -> TestResult {
    let empty: Vec<String> = Vec::new();
    ensure(normalize_guid(&empty)?.is_empty(), "expected empty output")?;
    Ok(())
}

/// Tests the `Guid` renderings.
#[test]
fn guid_renders_alternate_spellings() -> TestResult {
    let guid: Guid = "(72F988BF-86F1-41AF-91AB-2D7CD011DB47)".parse()?;
    ensure(guid.as_str() == CANONICAL, "expected canonical storage")?;
    ensure(guid.simple() == "72f988bf86f141af91ab2d7cd011db47", "expected simple form")?;
    ensure(guid.braced() == format!("{{{CANONICAL}}}"), "expected braced form")?;
    ensure(guid.to_string() == CANONICAL, "expected display to use canonical form")?;
    ensure(Guid::parse(&guid.braced())? == guid, "expected braced form to round back")?;
    Ok(())
}

/// Tests that the `Guid` error carries the rejected value.
#[test]
fn guid_parse_rejects_non_guid() -> TestResult {
    let err = Guid::parse("microsoft").err().ok_or("expected parse failure")?;
    ensure(err.code() == "invalid_guid", "expected invalid_guid code")?;
    ensure(err.to_string().contains("microsoft"), "expected value in message")?;
    Ok(())
}

/// Tests that deserialization validates and canonicalizes.
#[test]
fn guid_deserialization_canonicalizes() -> TestResult {
    let guid: Guid = serde_json::from_str("\"72F988BF86F141AF91AB2D7CD011DB47\"")?;
    ensure(guid.as_str() == CANONICAL, "expected canonical form")?;
    ensure(serde_json::to_string(&guid)? == format!("\"{CANONICAL}\""), "expected canonical wire form")?;
    ensure(serde_json::from_str::<Guid>("\"common\"").is_err(), "expected rejection")?;
    Ok(())
}
