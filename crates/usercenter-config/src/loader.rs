// SPDX-FileCopyrightText: 2026 Usercenter Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports XDG hierarchy: `./usercenter.toml` > `~/.config/usercenter/usercenter.toml`
//! > `/etc/usercenter/usercenter.toml` with environment variable overrides via the
//! `USERCENTER_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::{Path, PathBuf};

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};

use crate::model::UserCenterConfig;

/// Local config file name, looked up in the working directory.
pub const LOCAL_CONFIG_FILE: &str = "usercenter.toml";

/// System-wide config file path.
pub const SYSTEM_CONFIG_FILE: &str = "/etc/usercenter/usercenter.toml";

/// Path of the per-user config file, if the platform has a config directory.
pub fn user_config_file() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("usercenter").join(LOCAL_CONFIG_FILE))
}

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/usercenter/usercenter.toml` (system-wide)
/// 3. `~/.config/usercenter/usercenter.toml` (user XDG config)
/// 4. `./usercenter.toml` (local directory)
/// 5. `USERCENTER_*` environment variables
pub fn load_config() -> Result<UserCenterConfig, figment::Error> {
    build_figment().extract()
}

/// Load configuration from a TOML string only (no files, no env).
pub fn load_config_from_str(toml_content: &str) -> Result<UserCenterConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(UserCenterConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<UserCenterConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(UserCenterConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Build the Figment used for hierarchy loading, before extraction.
pub fn build_figment() -> Figment {
    let mut figment = Figment::new()
        .merge(Serialized::defaults(UserCenterConfig::default()))
        .merge(Toml::file(SYSTEM_CONFIG_FILE));
    if let Some(user_file) = user_config_file() {
        figment = figment.merge(Toml::file(user_file));
    }
    figment.merge(Toml::file(LOCAL_CONFIG_FILE)).merge(env_provider())
}

/// Environment provider mapping `USERCENTER_<SECTION>_<KEY>` to `section.key`.
///
/// Uses `Env::map()` rather than `Env::split("_")` because key names contain
/// underscores: `USERCENTER_CLERK_SECRET_KEY` must become `clerk.secret_key`,
/// not `clerk.secret.key`.
pub fn env_provider() -> Env {
    Env::prefixed("USERCENTER_").map(|key| map_env_key(key.as_str()).into())
}

/// Maps a lowercased, prefix-stripped env var name to a dotted config path.
pub fn map_env_key(key: &str) -> String {
    for section in ["general", "clerk"] {
        if let Some(rest) = key.strip_prefix(section).and_then(|r| r.strip_prefix('_')) {
            return format!("{section}.{rest}");
        }
    }
    key.to_string()
}
