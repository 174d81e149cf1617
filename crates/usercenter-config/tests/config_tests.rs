// SPDX-FileCopyrightText: 2026 Usercenter Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integration tests for the configuration system.

use usercenter_config::diagnostic::ConfigError;
use usercenter_config::model::UserCenterConfig;
use usercenter_config::{load_and_validate_str, load_config_from_str};

/// Valid TOML with all known fields deserializes successfully.
#[test]
fn valid_toml_deserializes_into_config() {
    let toml = r#"
[general]
log_level = "debug"

[clerk]
publishable_key = "pk_test_abc"
secret_key = "sk_test_123"
frontend_api = "https://api.clerk.dev"
"#;

    let config = load_config_from_str(toml).expect("valid TOML should deserialize");
    assert_eq!(config.general.log_level, "debug");
    assert_eq!(config.clerk.publishable_key.as_deref(), Some("pk_test_abc"));
    assert_eq!(config.clerk.secret_key.as_deref(), Some("sk_test_123"));
    assert_eq!(
        config.clerk.frontend_api.as_deref(),
        Some("https://api.clerk.dev")
    );
    assert!(config.clerk.is_configured());
}

/// Missing sections use defaults without error.
#[test]
fn empty_toml_uses_defaults() {
    let config = load_config_from_str("").expect("empty TOML should use defaults");

    assert_eq!(config.general.log_level, "info");
    assert!(config.clerk.publishable_key.is_none());
    assert!(config.clerk.secret_key.is_none());
    assert!(config.clerk.frontend_api.is_none());
    assert!(!config.clerk.is_configured());
}

/// Unknown field in [clerk] produces an error naming the bad key.
#[test]
fn unknown_field_in_clerk_produces_error() {
    let toml = r#"
[clerk]
secert_key = "sk"
"#;

    let err = load_config_from_str(toml).expect_err("should reject unknown field");
    let err_str = format!("{err}");
    assert!(
        err_str.contains("unknown field") || err_str.contains("secert_key"),
        "error should mention unknown field or the bad key, got: {err_str}"
    );
}

/// Unknown keys become diagnostics carrying a suggestion and a source span.
#[test]
fn unknown_key_diagnostic_suggests_correction() {
    let toml = r#"
[clerk]
secert_key = "sk"
"#;

    let errors = load_and_validate_str(toml).expect_err("should reject unknown field");
    assert_eq!(errors.len(), 1);
    match &errors[0] {
        ConfigError::UnknownKey {
            key,
            suggestion,
            valid_keys,
            span,
            ..
        } => {
            assert_eq!(key, "secert_key");
            assert_eq!(suggestion.as_deref(), Some("secret_key"));
            assert!(valid_keys.contains("frontend_api"));
            assert!(span.is_some(), "inline source should resolve a span");
        }
        other => panic!("expected UnknownKey, got {other:?}"),
    }
}

/// Unknown top-level sections are rejected as well.
#[test]
fn unknown_section_is_rejected() {
    let errors = load_and_validate_str("[clark]\nsecret_key = \"sk\"\n")
        .expect_err("unknown section should be rejected");
    assert!(matches!(errors[0], ConfigError::UnknownKey { .. }));
}

/// Wrong value types produce an InvalidType diagnostic.
#[test]
fn wrong_type_produces_invalid_type() {
    let errors = load_and_validate_str("[clerk]\nsecret_key = 42\n")
        .expect_err("integer secret key should be rejected");
    assert!(
        matches!(&errors[0], ConfigError::InvalidType { key, .. } if key.contains("secret_key")),
        "got {:?}",
        errors[0]
    );
}

/// Validation errors surface through the high-level entry point.
#[test]
fn validation_runs_after_successful_load() {
    let toml = r#"
[general]
log_level = "shouty"

[clerk]
frontend_api = "api.clerk.dev"
"#;

    let errors = load_and_validate_str(toml).expect_err("invalid values should fail");
    assert_eq!(errors.len(), 2);
    assert!(errors
        .iter()
        .all(|e| matches!(e, ConfigError::Validation { .. })));
}

/// Partially configured credentials load fine; the bridge reports them later.
#[test]
fn partial_credentials_load_successfully() {
    let toml = r#"
[clerk]
publishable_key = "pk_test_abc"
"#;

    let config = load_and_validate_str(toml).expect("partial credentials are allowed");
    assert!(!config.clerk.is_configured());
}

/// Dotted overrides (what env vars map to) take precedence over TOML.
#[test]
fn dotted_override_sets_secret_key() {
    use figment::{
        providers::{Format, Serialized, Toml},
        Figment,
    };

    let config: UserCenterConfig = Figment::new()
        .merge(Serialized::defaults(UserCenterConfig::default()))
        .merge(Toml::string("[clerk]\nsecret_key = \"sk_file\"\n"))
        .merge(("clerk.secret_key", "sk_env"))
        .extract()
        .expect("should merge override");

    assert_eq!(config.clerk.secret_key.as_deref(), Some("sk_env"));
}

/// Missing config files are silently skipped.
#[test]
fn missing_config_file_is_skipped() {
    let config =
        usercenter_config::load_config_from_path(std::path::Path::new("/nonexistent/usercenter.toml"))
            .expect("missing file should be silently skipped");
    assert_eq!(config.general.log_level, "info");
}
