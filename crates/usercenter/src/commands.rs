// SPDX-FileCopyrightText: 2026 Usercenter Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Command implementations for the `usercenter` binary.
//!
//! Each command runs against a registered adapter and returns its rendered
//! output, either as aligned text or pretty-printed JSON.

use std::collections::HashMap;
use std::sync::Arc;

use serde::Serialize;
use usercenter_clerk::{ClerkUserCenter, SESSION_TOKEN_PARAM};
use usercenter_config::ClerkConfig;
use usercenter_core::{
    ControlCenterItem, PluginInfo, UserCenterAdapter, UserCenterBasicUserInfo, UserCenterDesc,
    UserCenterError, UserList,
};
use usercenter_plugin::{PluginStatus, UserCenterEntry, UserCenterRegistry};

/// How command results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Plain,
    Json,
}

impl OutputFormat {
    pub fn from_json_flag(json: bool) -> Self {
        if json { Self::Json } else { Self::Plain }
    }
}

/// Builds the registry with the Clerk bridge constructed from `config`.
pub fn build_registry(config: &ClerkConfig) -> UserCenterRegistry {
    let bridge = Arc::new(ClerkUserCenter::new(config.clone()));
    let mut registry = UserCenterRegistry::new();
    register_clerk(&mut registry, bridge, config.is_configured());
    registry
}

/// Registers a Clerk bridge, marking it not configured when credentials are missing.
pub fn register_clerk(
    registry: &mut UserCenterRegistry,
    bridge: Arc<ClerkUserCenter>,
    configured: bool,
) {
    let status = if configured {
        PluginStatus::Enabled
    } else {
        PluginStatus::NotConfigured
    };
    registry.register_with_status(bridge, status);
}

fn render<T: Serialize>(value: &T, format: OutputFormat, plain: impl FnOnce(&T) -> String) -> String {
    match format {
        OutputFormat::Json => {
            serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
        }
        OutputFormat::Plain => plain(value),
    }
}

/// Structured output of `usercenter info`.
#[derive(Debug, Serialize)]
pub struct InfoOutput<'a> {
    pub info: &'a PluginInfo,
    pub login: &'a UserCenterDesc,
    pub status: String,
    pub control_center: Vec<ControlCenterItem>,
}

/// `usercenter info`: plugin metadata and login descriptor.
pub fn run_info(entry: &UserCenterEntry, format: OutputFormat) -> String {
    let output = InfoOutput {
        info: &entry.info,
        login: &entry.desc,
        status: entry.status.to_string(),
        control_center: entry.adapter.control_center_items(),
    };
    render(&output, format, |o| {
        let mut lines = vec![
            format!("  name:        {}", o.info.name),
            format!("  slug:        {}", o.info.slug_name),
            format!("  version:     {}", o.info.version),
            format!("  author:      {}", o.info.author),
            format!("  link:        {}", o.info.link),
            format!("  status:      {}", o.status),
            format!("  login url:   {}", o.login.url),
            format!("  priority:    {}", o.login.priority),
        ];
        for item in &o.control_center {
            lines.push(format!("  menu:        {} -> {}", item.label, item.url));
        }
        lines.join("\n")
    })
}

fn render_user(user: &UserCenterBasicUserInfo, format: OutputFormat) -> String {
    render(user, format, |u| {
        [
            format!("  external_id:  {}", u.external_id),
            format!("  username:     {}", u.username),
            format!("  display_name: {}", u.display_name),
            format!("  email:        {}", u.email),
            format!("  avatar_url:   {}", u.avatar_url),
            format!("  roles:        {}", u.roles.join(", ")),
        ]
        .join("\n")
    })
}

/// `usercenter login` / `usercenter signup`: runs a callback with `session_token`.
pub async fn run_callback(
    adapter: &dyn UserCenterAdapter,
    session_token: &str,
    signup: bool,
    format: OutputFormat,
) -> Result<String, UserCenterError> {
    let query = HashMap::from([(SESSION_TOKEN_PARAM.to_string(), session_token.to_string())]);
    let user = if signup {
        adapter.signup_callback(&query).await?
    } else {
        adapter.login_callback(&query).await?
    };
    Ok(render_user(&user, format))
}

/// `usercenter user ID`.
pub async fn run_user(
    adapter: &dyn UserCenterAdapter,
    external_id: &str,
    format: OutputFormat,
) -> Result<String, UserCenterError> {
    let user = adapter.user_info(external_id).await?;
    Ok(render_user(&user, format))
}

/// `usercenter list`.
pub async fn run_list(
    adapter: &dyn UserCenterAdapter,
    page: u32,
    page_size: u32,
    format: OutputFormat,
) -> Result<String, UserCenterError> {
    let list = adapter.user_list(page, page_size).await?;
    Ok(render(&list, format, |l: &UserList| {
        let mut lines = vec![format!(
            "  page {page} ({} shown, {} total)",
            l.users.len(),
            l.total
        )];
        lines.extend(l.users.iter().map(|u| {
            format!("  {:<32} {:<20} {}", u.external_id, u.username, u.email)
        }));
        lines.join("\n")
    }))
}

#[derive(Debug, Serialize)]
struct StatusOutput<'a> {
    external_id: &'a str,
    status: String,
}

/// `usercenter status ID`.
pub async fn run_status(
    adapter: &dyn UserCenterAdapter,
    external_id: &str,
    format: OutputFormat,
) -> String {
    let output = StatusOutput {
        external_id,
        status: adapter.user_status(external_id).await.to_string(),
    };
    render(&output, format, |o| format!("  {}: {}", o.external_id, o.status))
}

/// `usercenter settings ID`.
pub async fn run_settings(
    adapter: &dyn UserCenterAdapter,
    external_id: &str,
    format: OutputFormat,
) -> String {
    let settings = adapter.user_settings(external_id).await;
    render(&settings, format, |s| {
        format!("  {} ({}): {}", s.name, s.label, s.url)
    })
}

/// `usercenter branding ID`.
pub async fn run_branding(
    adapter: &dyn UserCenterAdapter,
    external_id: &str,
    format: OutputFormat,
) -> String {
    let branding = adapter.personal_branding(external_id).await;
    render(&branding, format, |b| {
        if b.is_empty() {
            "  (no branding)".to_string()
        } else {
            format!("  nickname:   {}\n  avatar_url: {}", b.nickname, b.avatar_url)
        }
    })
}
