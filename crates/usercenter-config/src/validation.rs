// SPDX-FileCopyrightText: 2026 Usercenter Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.
//!
//! Missing Clerk credentials are deliberately not an error here; the bridge
//! reports them when it first needs a client.

use crate::diagnostic::ConfigError;
use crate::model::UserCenterConfig;

/// Log levels accepted by `general.log_level`.
pub const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Validate a deserialized configuration for semantic correctness.
///
/// Collects every validation error instead of failing fast.
pub fn validate_config(config: &UserCenterConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    let level = config.general.log_level.trim().to_ascii_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(ConfigError::Validation {
            message: format!(
                "general.log_level `{}` is not one of: {}",
                config.general.log_level,
                LOG_LEVELS.join(", ")
            ),
        });
    }

    if let Some(api) = config.clerk.frontend_api.as_deref()
        && !api.trim().is_empty()
        && !(api.starts_with("https://") || api.starts_with("http://"))
    {
        errors.push(ConfigError::Validation {
            message: format!("clerk.frontend_api `{api}` must be an http:// or https:// URL"),
        });
    }

    if !config.clerk.is_configured() {
        tracing::debug!("clerk credentials incomplete; the bridge will fail on first use");
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}
