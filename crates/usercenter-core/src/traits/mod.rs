// SPDX-FileCopyrightText: 2026 Usercenter Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Adapter trait definitions for the plugin architecture.
//!
//! All adapters extend the [`PluginAdapter`] base trait and use
//! `#[async_trait]` for dynamic dispatch compatibility.

pub mod adapter;
pub mod request;
pub mod user_center;

pub use adapter::PluginAdapter;
pub use request::RequestContext;
pub use user_center::UserCenterAdapter;
