// SPDX-FileCopyrightText: 2026 Usercenter Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Registry of user-center plugins.
//!
//! The host's composition root constructs each bridge with its configuration
//! and registers it here explicitly; nothing registers itself at load time.
//! Entries are keyed by the plugin's slug name.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::info;
use usercenter_core::{PluginInfo, UserCenterAdapter, UserCenterDesc, UserCenterError};

/// Status of a plugin in the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PluginStatus {
    /// Plugin is active and offered on the login page.
    Enabled,
    /// Plugin is explicitly disabled by the operator.
    Disabled,
    /// Plugin is registered but missing required configuration.
    NotConfigured,
}

impl std::fmt::Display for PluginStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PluginStatus::Enabled => write!(f, "enabled"),
            PluginStatus::Disabled => write!(f, "disabled"),
            PluginStatus::NotConfigured => write!(f, "not-configured"),
        }
    }
}

/// A single entry in the registry.
///
/// Metadata and login descriptor are captured once at registration.
pub struct UserCenterEntry {
    pub info: PluginInfo,
    pub desc: UserCenterDesc,
    pub status: PluginStatus,
    pub adapter: Arc<dyn UserCenterAdapter>,
}

impl std::fmt::Debug for UserCenterEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserCenterEntry")
            .field("info", &self.info)
            .field("login_url", &self.desc.url)
            .field("status", &self.status)
            .finish()
    }
}

/// Registry of user-center plugins keyed by slug.
#[derive(Default)]
pub struct UserCenterRegistry {
    entries: HashMap<String, UserCenterEntry>,
}

impl UserCenterRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an adapter with status `Enabled`.
    pub fn register(&mut self, adapter: Arc<dyn UserCenterAdapter>) {
        self.register_with_status(adapter, PluginStatus::Enabled);
    }

    /// Register an adapter with an explicit status, replacing any entry with the same slug.
    pub fn register_with_status(&mut self, adapter: Arc<dyn UserCenterAdapter>, status: PluginStatus) {
        let info = adapter.info();
        let desc = adapter.description();
        let slug = info.slug_name.clone();
        info!(plugin = %slug, login_url = %desc.url, %status, "registered user-center plugin");
        self.entries.insert(
            slug,
            UserCenterEntry {
                info,
                desc,
                status,
                adapter,
            },
        );
    }

    /// Get an entry by slug, regardless of status.
    pub fn get(&self, slug: &str) -> Option<&UserCenterEntry> {
        self.entries.get(slug)
    }

    /// Get the adapter for `slug`, failing if it is unknown or not enabled.
    pub fn adapter(&self, slug: &str) -> Result<Arc<dyn UserCenterAdapter>, UserCenterError> {
        let entry = self
            .entries
            .get(slug)
            .ok_or_else(|| UserCenterError::PluginNotFound {
                slug: slug.to_string(),
            })?;
        match entry.status {
            PluginStatus::Enabled => Ok(Arc::clone(&entry.adapter)),
            status => Err(UserCenterError::Config(format!(
                "user-center plugin `{slug}` is {status}"
            ))),
        }
    }

    /// Enabled entries in display order (highest priority first).
    pub fn enabled(&self) -> Vec<&UserCenterEntry> {
        self.list_all()
            .into_iter()
            .filter(|e| e.status == PluginStatus::Enabled)
            .collect()
    }

    /// All entries, highest priority first, ties broken by slug.
    pub fn list_all(&self) -> Vec<&UserCenterEntry> {
        let mut entries: Vec<&UserCenterEntry> = self.entries.values().collect();
        entries.sort_by(|a, b| {
            b.desc
                .priority
                .cmp(&a.desc.priority)
                .then_with(|| a.info.slug_name.cmp(&b.info.slug_name))
        });
        entries
    }

    /// Find the enabled entry whose login route is `path` (e.g. `/login/clerk`).
    pub fn resolve_login_path(&self, path: &str) -> Option<&UserCenterEntry> {
        let path = path.trim_end_matches('/');
        self.entries
            .values()
            .find(|e| e.status == PluginStatus::Enabled && e.desc.url.trim_end_matches('/') == path)
    }

    /// Toggle a plugin between `Enabled` and `Disabled`.
    ///
    /// A `NotConfigured` entry keeps its status; it can only leave that state
    /// by being registered again with working configuration.
    pub fn set_enabled(&mut self, slug: &str, enabled: bool) -> Result<(), UserCenterError> {
        let entry = self
            .entries
            .get_mut(slug)
            .ok_or_else(|| UserCenterError::PluginNotFound {
                slug: slug.to_string(),
            })?;
        if entry.status == PluginStatus::NotConfigured {
            return Err(UserCenterError::Config(format!(
                "user-center plugin `{slug}` is {}",
                PluginStatus::NotConfigured
            )));
        }
        entry.status = if enabled {
            PluginStatus::Enabled
        } else {
            PluginStatus::Disabled
        };
        Ok(())
    }

    /// Returns the number of registered plugins.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no plugins are registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
