// SPDX-FileCopyrightText: 2026 Usercenter Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `usercenter health` command implementation.
//!
//! Reports registry status and adapter health for every registered user
//! center. Health checks never contact the identity provider.

use serde::Serialize;
use usercenter_core::HealthStatus;
use usercenter_plugin::UserCenterRegistry;

use crate::commands::OutputFormat;

/// One row of the health report.
#[derive(Debug, Serialize)]
pub struct HealthReport {
    pub slug: String,
    pub status: String,
    pub health: String,
    pub detail: Option<String>,
}

impl HealthReport {
    fn is_healthy(&self) -> bool {
        self.health == "healthy"
    }
}

fn split_health(result: Result<HealthStatus, usercenter_core::UserCenterError>) -> (String, Option<String>) {
    match result {
        Ok(HealthStatus::Healthy) => ("healthy".to_string(), None),
        Ok(HealthStatus::Degraded(detail)) => ("degraded".to_string(), Some(detail)),
        Ok(HealthStatus::Unhealthy(detail)) => ("unhealthy".to_string(), Some(detail)),
        Err(e) => ("unhealthy".to_string(), Some(e.to_string())),
    }
}

/// Collects a health report for every registered plugin, highest priority first.
pub async fn collect_health(registry: &UserCenterRegistry) -> Vec<HealthReport> {
    let mut reports = Vec::with_capacity(registry.len());
    for entry in registry.list_all() {
        let (health, detail) = split_health(entry.adapter.health_check().await);
        reports.push(HealthReport {
            slug: entry.info.slug_name.clone(),
            status: entry.status.to_string(),
            health,
            detail,
        });
    }
    reports
}

/// Run the `usercenter health` command.
///
/// Colors are used only for plain output on a terminal.
pub async fn run_health(registry: &UserCenterRegistry, format: OutputFormat, use_color: bool) -> String {
    let reports = collect_health(registry).await;
    match format {
        OutputFormat::Json => {
            serde_json::to_string_pretty(&reports).unwrap_or_else(|_| "[]".to_string())
        }
        OutputFormat::Plain => render_plain(&reports, use_color),
    }
}

fn render_plain(reports: &[HealthReport], use_color: bool) -> String {
    let mut lines = vec![
        String::new(),
        "  usercenter health".to_string(),
        format!("  {}", "-".repeat(35)),
    ];

    if reports.is_empty() {
        lines.push("    (no user centers registered)".to_string());
    }

    for report in reports {
        let marker = match (report.is_healthy(), use_color) {
            (true, true) => {
                use colored::Colorize;
                format!("{} {}", "✓".green(), report.health.green())
            }
            (false, true) => {
                use colored::Colorize;
                format!("{} {}", "✗".red(), report.health.red())
            }
            (true, false) => format!("[OK] {}", report.health),
            (false, false) => format!("[FAIL] {}", report.health),
        };
        lines.push(format!("    {:<20} {marker} ({})", report.slug, report.status));
        if let Some(detail) = &report.detail {
            lines.push(format!("      {detail}"));
        }
    }

    lines.push(String::new());
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{build_registry, register_clerk};
    use usercenter_config::ClerkConfig;
    use usercenter_test_utils::TestHarness;

    #[tokio::test]
    async fn unconfigured_bridge_reports_unhealthy() {
        let registry = build_registry(&ClerkConfig::default());
        let reports = collect_health(&registry).await;
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].slug, "clerk_user_center");
        assert_eq!(reports[0].status, "not-configured");
        assert_eq!(reports[0].health, "unhealthy");

        let out = run_health(&registry, OutputFormat::Plain, false).await;
        assert!(out.contains("[FAIL] unhealthy"), "got: {out}");
    }

    #[tokio::test]
    async fn initialized_bridge_reports_healthy() {
        let harness = TestHarness::builder().build().await;
        harness.bridge.ensure_client().await.unwrap();

        let mut registry = UserCenterRegistry::new();
        register_clerk(&mut registry, harness.bridge.clone(), true);

        let out = run_health(&registry, OutputFormat::Json, false).await;
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value[0]["health"], "healthy");
        assert_eq!(value[0]["status"], "enabled");
        assert!(value[0]["detail"].is_null());
    }

    #[tokio::test]
    async fn empty_registry_renders_placeholder() {
        let out = run_health(&UserCenterRegistry::new(), OutputFormat::Plain, false).await;
        assert!(out.contains("no user centers registered"));
    }
}
