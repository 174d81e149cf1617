// SPDX-FileCopyrightText: 2026 Usercenter Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Host contract types exchanged between user-center plugins and the host.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Health status reported by adapter health checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HealthStatus {
    /// Adapter is fully operational.
    Healthy,
    /// Adapter is operational but experiencing issues.
    Degraded(String),
    /// Adapter is not operational.
    Unhealthy(String),
}

/// A translation key resolved by the host's i18n layer.
///
/// Plugins never render user-facing names themselves; they hand the host a key
/// such as `clerk_user_center` and the host looks up the localized string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Translator(pub String);

impl Translator {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn key(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Translator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Descriptive metadata for a plugin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginInfo {
    pub name: Translator,
    /// Stable machine identifier (e.g. `clerk_user_center`).
    pub slug_name: String,
    pub description: Translator,
    pub author: String,
    pub version: String,
    pub link: String,
}

/// How a user-center plugin presents itself on the host's login page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserCenterDesc {
    pub name: Translator,
    /// Inline SVG markup.
    pub icon: String,
    /// Login route path on the host, e.g. `/login/clerk`.
    pub url: String,
    /// Display priority; higher sorts first.
    pub priority: i32,
}

/// A shortcut link shown in the host's control center.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlCenterItem {
    pub name: String,
    pub label: String,
    pub url: String,
}

/// Normalized user record handed back to the host.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UserCenterBasicUserInfo {
    /// Provider-side user identifier.
    pub external_id: String,
    pub username: String,
    pub display_name: String,
    /// Empty when the provider has no primary email for the user.
    pub email: String,
    pub avatar_url: String,
    pub roles: Vec<String>,
}

/// One page of users plus the provider-reported total.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UserList {
    pub users: Vec<UserCenterBasicUserInfo>,
    /// Total number of users known to the provider, 0 when unreported.
    pub total: u64,
}

/// Account status as seen by the host.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum UserStatus {
    Normal,
    Suspended,
    Deleted,
}

/// Link to the provider-hosted account settings page.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UserCenterSetting {
    pub name: String,
    pub label: String,
    pub url: String,
}

/// Personal branding surfaced next to a user's profile.
///
/// The default value (all fields empty) is a valid "nothing to show" record.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UserCenterBranding {
    pub avatar_url: String,
    pub nickname: String,
}

impl UserCenterBranding {
    pub fn is_empty(&self) -> bool {
        self.avatar_url.is_empty() && self.nickname.is_empty()
    }
}
