// SPDX-FileCopyrightText: 2026 Usercenter Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Base adapter trait that all plugins implement.

use async_trait::async_trait;

use crate::error::UserCenterError;
use crate::types::HealthStatus;

/// The base trait for all plugin adapters.
///
/// Provides identity, lifecycle, and health check capabilities independent of
/// what kind of plugin the adapter is.
#[async_trait]
pub trait PluginAdapter: Send + Sync + 'static {
    /// Returns the stable slug of this adapter instance.
    fn name(&self) -> &str;

    /// Returns the semantic version of this adapter.
    fn version(&self) -> semver::Version;

    /// Performs a health check and returns the adapter's current status.
    async fn health_check(&self) -> Result<HealthStatus, UserCenterError>;

    /// Gracefully shuts down the adapter, releasing any held resources.
    async fn shutdown(&self) -> Result<(), UserCenterError>;
}
