// SPDX-FileCopyrightText: 2026 Usercenter Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Plugin manifest parser and user-center registry.
//!
//! Bridges describe themselves with a bundled `plugin.toml`; the host
//! registers constructed bridges in a [`UserCenterRegistry`] and routes login
//! requests through it.

pub mod manifest;
pub mod registry;

pub use manifest::{parse_plugin_manifest, PluginManifest};
pub use registry::{PluginStatus, UserCenterEntry, UserCenterRegistry};
