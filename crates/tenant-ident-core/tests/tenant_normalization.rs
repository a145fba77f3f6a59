// crates/tenant-ident-core/tests/tenant_normalization.rs
// ============================================================================
// Module: Tenant Normalization Tests
// Description: Coverage for tenant rule precedence and custom policies.
// Purpose: Ensure GUIDs, aliases, domains, and short names route correctly.
// Dependencies: tenant_ident_core::tenant
// ============================================================================

//! ## Overview
//! Integration tests for [`tenant_ident_core::normalize_tenant`] and
//! [`tenant_ident_core::TenantPolicy`].

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
use tenant_ident_core::TenantKind;
use tenant_ident_core::TenantPolicy;
use tenant_ident_core::classify_tenant;
use tenant_ident_core::classify_tenant_with;
use tenant_ident_core::explain_tenant_str_with;
use tenant_ident_core::normalize_tenant;
use tenant_ident_core::normalize_tenant_str;
use tenant_ident_core::normalize_tenant_with;

// ============================================================================
// SECTION: Default Policy
// ============================================================================

/// Tests that short names receive the domain suffix.
#[test]
fn short_name_gets_suffix() -> TestResult {
    ensure(normalize_tenant_str("microsoft") == "microsoft.onmicrosoft.com", "expected suffix")?;
    ensure(normalize_tenant_str("Contoso") == "contoso.onmicrosoft.com", "expected lowercase")?;
    Ok(())
}

/// Tests that domain names pass through lowercased.
#[test]
fn domain_passes_through() -> TestResult {
    ensure(normalize_tenant_str("microsoft.com") == "microsoft.com", "expected unchanged")?;
    ensure(
        normalize_tenant_str("Contoso.OnMicrosoft.com") == "contoso.onmicrosoft.com",
        "expected lowercase domain",
    )?;
    Ok(())
}

/// Tests that GUID tenants are canonicalized.
#[test]
fn guid_tenant_is_canonicalized() -> TestResult {
    let expected = "72f988bf-86f1-41af-91ab-2d7cd011db47";
    ensure(normalize_tenant_str(expected) == expected, "expected canonical passthrough")?;
    ensure(
        normalize_tenant_str("{72F988BF-86F1-41AF-91AB-2D7CD011DB47}") == expected,
        "expected wrapper removal",
    )?;
    Ok(())
}

/// Tests that the common alias is never suffixed.
#[test]
fn common_is_unchanged() -> TestResult {
    ensure(normalize_tenant_str("common") == "common", "expected common")?;
    ensure(normalize_tenant_str("COMMON") == "common", "expected folded common")?;
    ensure(classify_tenant("Common") == TenantKind::Reserved, "expected reserved kind")?;
    Ok(())
}

/// Tests that organizations is a short name under the default policy.
#[test]
fn default_policy_reserves_only_common() -> TestResult {
    ensure(
        normalize_tenant_str("organizations") == "organizations.onmicrosoft.com",
        "expected suffix for non-reserved alias",
    )?;
    Ok(())
}

/// Tests that mixed batches preserve order and length.
#[test]
fn mixed_batch_preserves_order() -> TestResult {
    let normalized = normalize_tenant(&["microsoft", "72f988bf86f141af91ab2d7cd011db47"]);
    ensure(
        normalized == ["microsoft.onmicrosoft.com", "72f988bf-86f1-41af-91ab-2d7cd011db47"],
        "expected element-wise normalization",
    )?;
    Ok(())
}

/// Tests that normalization is idempotent across every rule.
#[test]
fn normalization_is_idempotent() -> TestResult {
    let inputs = ["Microsoft", "microsoft.com", "common", "(72F988BF-86F1-41AF-91AB-2D7CD011DB47)"];
    let once = normalize_tenant(&inputs);
    let twice = normalize_tenant(&once);
    ensure(once == twice, "expected idempotent normalization")?;
    Ok(())
}

/// Tests that a malformed GUID is treated as a short name.
#[test]
fn near_guid_is_a_short_name() -> TestResult {
    let value = "72f988bf-86f1-41af-91ab-2d7cd011db47}";
    ensure(classify_tenant(value) == TenantKind::ShortName, "expected short name")?;
    ensure(
        normalize_tenant_str(value) == format!("{value}.onmicrosoft.com"),
        "expected suffix on malformed GUID",
    )?;
    Ok(())
}

// ============================================================================
// SECTION: Custom Policy
// ============================================================================

/// Tests a policy with a custom suffix and extra aliases.
#[test]
fn custom_policy_applies_suffix_and_aliases() -> TestResult {
    let policy = TenantPolicy::new(".partner.example")?
        .with_reserved("organizations")
        .with_reserved("consumers");
    let normalized =
        normalize_tenant_with(&policy, &["fabrikam", "Organizations", "consumers", "common"]);
    ensure(
        normalized == ["fabrikam.partner.example", "organizations", "consumers", "common"],
        "expected custom policy output",
    )?;
    ensure(
        classify_tenant_with(&policy, "fabrikam") == TenantKind::ShortName,
        "expected short name kind",
    )?;
    Ok(())
}

/// Tests that GUID detection outranks reserved aliases.
#[test]
fn guid_detection_outranks_aliases() -> TestResult {
    let guid = "72f988bf-86f1-41af-91ab-2d7cd011db47";
    let policy = TenantPolicy::default().with_reserved(guid);
    ensure(classify_tenant_with(&policy, guid) == TenantKind::Guid, "expected guid kind")?;
    Ok(())
}

/// Tests that the reported rule matches classification and normalization.
#[test]
fn explained_tenants_agree_with_normalization() -> TestResult {
    let policy = TenantPolicy::default().with_reserved("consumers");
    for value in ["{72F988BF-86F1-41AF-91AB-2D7CD011DB47}", "Consumers", "Contoso.COM", "Fabrikam"] {
        let (kind, normalized) = explain_tenant_str_with(&policy, value);
        ensure(kind == classify_tenant_with(&policy, value), &format!("kind mismatch for {value}"))?;
        ensure(
            normalized == normalize_tenant_with(&policy, &[value])[0],
            &format!("output mismatch for {value}"),
        )?;
    }
    let (kind, normalized) = explain_tenant_str_with(&policy, "Fabrikam");
    ensure(kind == TenantKind::ShortName, "expected short name kind")?;
    ensure(normalized == "fabrikam.onmicrosoft.com", "expected suffixed short name")?;
    Ok(())
}
