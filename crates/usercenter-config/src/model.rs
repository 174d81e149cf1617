// SPDX-FileCopyrightText: 2026 Usercenter Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs.
//!
//! All structs use `#[serde(deny_unknown_fields)]` to reject unrecognized
//! config keys at startup, providing actionable error messages.

use serde::{Deserialize, Serialize};

/// Top-level configuration.
///
/// Loaded from TOML files following the XDG hierarchy, with environment
/// variable overrides. All sections are optional.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct UserCenterConfig {
    /// Process-wide settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Clerk identity provider credentials.
    #[serde(default)]
    pub clerk: ClerkConfig,
}

/// Process-wide settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct GeneralConfig {
    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Clerk credentials.
///
/// Every field is required for the bridge to work, but none is checked at
/// load time: a missing value surfaces as a configuration error the first
/// time the bridge needs its client.
#[derive(Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ClerkConfig {
    /// Publishable key used by Clerk.js on the frontend (`pk_...`).
    #[serde(default)]
    pub publishable_key: Option<String>,

    /// Secret key used to authenticate backend API calls (`sk_...`).
    #[serde(default)]
    pub secret_key: Option<String>,

    /// Base URL of the Clerk API, e.g. `https://api.clerk.dev`.
    #[serde(default)]
    pub frontend_api: Option<String>,
}

impl ClerkConfig {
    /// Returns true when the server-side credentials needed by the bridge are present.
    pub fn is_configured(&self) -> bool {
        is_set(&self.secret_key) && is_set(&self.frontend_api)
    }
}

fn is_set(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|v| !v.trim().is_empty())
}

impl std::fmt::Debug for ClerkConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClerkConfig")
            .field("publishable_key", &self.publishable_key)
            .field("secret_key", &self.secret_key.as_ref().map(|_| "[redacted]"))
            .field("frontend_api", &self.frontend_api)
            .finish()
    }
}
