// SPDX-FileCopyrightText: 2026 Usercenter Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Plugin manifest parsing from `plugin.toml` files.
//!
//! Each bridge crate ships a `plugin.toml` describing the metadata the host
//! shows in its plugin list, plus the configuration keys it needs.

use serde::{Deserialize, Serialize};
use usercenter_core::{PluginInfo, Translator, UserCenterError};

/// Parsed plugin manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginManifest {
    /// Translation key for the plugin's display name.
    pub name: String,
    /// Stable machine identifier (e.g., "clerk_user_center").
    pub slug_name: String,
    /// Translation key for the plugin's description.
    pub description: String,
    pub author: String,
    /// Semantic version string.
    pub version: String,
    /// Project homepage.
    pub link: String,
    /// Required config keys (e.g., ["clerk.secret_key"]).
    pub config_keys: Vec<String>,
}

impl PluginManifest {
    /// Converts the manifest into the host-facing metadata record.
    pub fn to_info(&self) -> PluginInfo {
        PluginInfo {
            name: Translator::new(&self.name),
            slug_name: self.slug_name.clone(),
            description: Translator::new(&self.description),
            author: self.author.clone(),
            version: self.version.clone(),
            link: self.link.clone(),
        }
    }

    /// Parsed semantic version. Always succeeds for manifests built by
    /// [`parse_plugin_manifest`].
    pub fn semver(&self) -> Option<semver::Version> {
        semver::Version::parse(&self.version).ok()
    }
}

/// Intermediate TOML deserialization struct for `plugin.toml`.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct PluginManifestFile {
    plugin: PluginSection,
}

/// The `[plugin]` section of a `plugin.toml` file.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct PluginSection {
    name: String,
    slug_name: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    author: String,
    version: String,
    #[serde(default)]
    link: String,
    #[serde(default)]
    config_keys: Vec<String>,
}

/// Parse a plugin manifest from TOML content.
///
/// Validates that name and slug are non-empty and version is valid semver.
pub fn parse_plugin_manifest(toml_content: &str) -> Result<PluginManifest, UserCenterError> {
    let file: PluginManifestFile = toml::from_str(toml_content)
        .map_err(|e| UserCenterError::Config(format!("invalid plugin manifest: {e}")))?;

    let section = file.plugin;

    if section.name.trim().is_empty() {
        return Err(UserCenterError::Config(
            "plugin manifest: name must not be empty".to_string(),
        ));
    }

    if section.slug_name.trim().is_empty() {
        return Err(UserCenterError::Config(
            "plugin manifest: slug_name must not be empty".to_string(),
        ));
    }

    semver::Version::parse(&section.version).map_err(|e| {
        UserCenterError::Config(format!(
            "plugin manifest: version `{}` is not valid semver: {e}",
            section.version
        ))
    })?;

    Ok(PluginManifest {
        name: section.name,
        slug_name: section.slug_name,
        description: section.description,
        author: section.author,
        version: section.version,
        link: section.link,
        config_keys: section.config_keys,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_manifest() {
        let toml = r#"
[plugin]
name = "clerk_user_center"
slug_name = "clerk_user_center"
description = "clerk_user_center_description"
author = "Usercenter Contributors"
version = "0.1.0"
link = "https://example.com/usercenter"
config_keys = ["clerk.secret_key", "clerk.frontend_api"]
"#;
        let manifest = parse_plugin_manifest(toml).unwrap();
        assert_eq!(manifest.slug_name, "clerk_user_center");
        assert_eq!(manifest.config_keys, vec!["clerk.secret_key", "clerk.frontend_api"]);
        assert_eq!(manifest.semver(), Some(semver::Version::new(0, 1, 0)));

        let info = manifest.to_info();
        assert_eq!(info.name.key(), "clerk_user_center");
        assert_eq!(info.author, "Usercenter Contributors");
    }

    #[test]
    fn parse_minimal_manifest() {
        let toml = r#"
[plugin]
name = "minimal"
slug_name = "minimal"
version = "1.0.0"
"#;
        let manifest = parse_plugin_manifest(toml).unwrap();
        assert!(manifest.description.is_empty());
        assert!(manifest.config_keys.is_empty());
    }

    #[test]
    fn parse_empty_slug() {
        let toml = r#"
[plugin]
name = "x"
slug_name = " "
version = "0.1.0"
"#;
        let err = parse_plugin_manifest(toml).unwrap_err().to_string();
        assert!(err.contains("slug_name must not be empty"), "got: {err}");
    }

    #[test]
    fn parse_empty_name() {
        let toml = r#"
[plugin]
name = ""
slug_name = "x"
version = "0.1.0"
"#;
        let err = parse_plugin_manifest(toml).unwrap_err().to_string();
        assert!(err.contains("name must not be empty"), "got: {err}");
    }

    #[test]
    fn parse_invalid_version() {
        let toml = r#"
[plugin]
name = "x"
slug_name = "x"
version = "one"
"#;
        let err = parse_plugin_manifest(toml).unwrap_err().to_string();
        assert!(err.contains("not valid semver"), "got: {err}");
    }

    #[test]
    fn parse_unknown_field() {
        let toml = r#"
[plugin]
name = "x"
slug_name = "x"
version = "0.1.0"
adapter = "oops"
"#;
        let err = parse_plugin_manifest(toml).unwrap_err().to_string();
        assert!(err.contains("invalid plugin manifest"), "got: {err}");
    }
}
