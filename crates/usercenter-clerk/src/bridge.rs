// SPDX-FileCopyrightText: 2026 Usercenter Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The Clerk user center: implements [`UserCenterAdapter`] on top of [`ClerkApi`].

use std::sync::{Arc, LazyLock};

use async_trait::async_trait;
use tokio::sync::OnceCell;
use tracing::{debug, info};
use usercenter_config::ClerkConfig;
use usercenter_core::{
    ControlCenterItem, HealthStatus, PluginAdapter, PluginInfo, RequestContext, Translator,
    UserCenterAdapter, UserCenterBasicUserInfo, UserCenterBranding, UserCenterDesc,
    UserCenterError, UserCenterSetting, UserList, UserStatus,
};
use usercenter_plugin::{parse_plugin_manifest, PluginManifest};

use crate::api::{ClerkApi, ClerkConnector, ClerkCredentials, ListUsersParams};
use crate::client::HttpConnector;
use crate::mapping::{to_branding, to_user_info};
use crate::types::ClerkUser;

/// Query parameter carrying the Clerk session token on callbacks.
pub const SESSION_TOKEN_PARAM: &str = "session_token";

/// Login route the host exposes for this user center.
pub const LOGIN_URL: &str = "/login/clerk";

/// Login-page display priority.
pub const DISPLAY_PRIORITY: i32 = 10;

pub const DASHBOARD_URL: &str = "https://dashboard.clerk.com";

pub const ACCOUNT_SETTINGS_URL: &str = "https://dashboard.clerk.com/user";

const ICON_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24"><path d="M12 2C6.5 2 2 6.49 2 12s4.5 10 10 10 10-4.49 10-10S17.5 2 12 2zm0 18c-4.41 0-8-3.59-8-8s3.59-8 8-8 8 3.59 8 8-3.59 8-8 8z"/><path d="M11 6h2v6h-2zm0 8h2v2h-2z"/></svg>"#;

static MANIFEST: LazyLock<PluginManifest> = LazyLock::new(|| {
    parse_plugin_manifest(include_str!("../plugin.toml")).expect("bundled plugin.toml is valid")
});

/// Clerk-backed user center.
///
/// Holds the credentials it was constructed with and a client handle that is
/// built on first use. Nothing is cached besides the client: every lookup
/// goes to Clerk.
pub struct ClerkUserCenter {
    config: ClerkConfig,
    connector: Arc<dyn ClerkConnector>,
    client: OnceCell<Arc<dyn ClerkApi>>,
}

impl ClerkUserCenter {
    /// Creates a bridge that talks to Clerk over HTTP.
    pub fn new(config: ClerkConfig) -> Self {
        Self::with_connector(config, Arc::new(HttpConnector))
    }

    /// Creates a bridge whose client is produced by `connector`.
    pub fn with_connector(config: ClerkConfig, connector: Arc<dyn ClerkConnector>) -> Self {
        Self {
            config,
            connector,
            client: OnceCell::new(),
        }
    }

    /// The manifest bundled with this crate.
    pub fn manifest() -> &'static PluginManifest {
        &MANIFEST
    }

    /// Whether the client handle has been built.
    pub fn is_initialized(&self) -> bool {
        self.client.initialized()
    }

    /// Returns the client, building it on first call.
    ///
    /// Concurrent first calls are serialized so the client is built once. A
    /// failed build leaves the bridge uninitialized; the next call tries again.
    pub async fn ensure_client(&self) -> Result<Arc<dyn ClerkApi>, UserCenterError> {
        self.client
            .get_or_try_init(|| async {
                let credentials = ClerkCredentials::from_config(&self.config)?;
                let api = self.connector.connect(&credentials)?;
                info!(frontend_api = %credentials.frontend_api(), "clerk client initialized");
                Ok::<_, UserCenterError>(api)
            })
            .await
            .cloned()
    }

    async fn fetch_user(
        &self,
        api: &dyn ClerkApi,
        external_id: &str,
    ) -> Result<ClerkUser, UserCenterError> {
        api.user(external_id)
            .await
            .map_err(|e| UserCenterError::Lookup {
                external_id: external_id.to_string(),
                source: Box::new(e),
            })
    }
}

impl std::fmt::Debug for ClerkUserCenter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClerkUserCenter")
            .field("config", &self.config)
            .field("initialized", &self.is_initialized())
            .finish()
    }
}

#[async_trait]
impl PluginAdapter for ClerkUserCenter {
    fn name(&self) -> &str {
        &MANIFEST.slug_name
    }

    fn version(&self) -> semver::Version {
        MANIFEST
            .semver()
            .unwrap_or_else(|| semver::Version::new(0, 1, 0))
    }

    async fn health_check(&self) -> Result<HealthStatus, UserCenterError> {
        if !self.config.is_configured() {
            return Ok(HealthStatus::Unhealthy(
                "clerk secret key or frontend API is not configured".into(),
            ));
        }
        if self.is_initialized() {
            Ok(HealthStatus::Healthy)
        } else {
            Ok(HealthStatus::Degraded("clerk client not yet initialized".into()))
        }
    }

    async fn shutdown(&self) -> Result<(), UserCenterError> {
        Ok(())
    }
}

#[async_trait]
impl UserCenterAdapter for ClerkUserCenter {
    fn info(&self) -> PluginInfo {
        MANIFEST.to_info()
    }

    fn description(&self) -> UserCenterDesc {
        UserCenterDesc {
            name: Translator::new("Clerk SSO Login"),
            icon: ICON_SVG.to_string(),
            url: LOGIN_URL.to_string(),
            priority: DISPLAY_PRIORITY,
        }
    }

    fn control_center_items(&self) -> Vec<ControlCenterItem> {
        vec![ControlCenterItem {
            name: "Clerk Dashboard".into(),
            label: "Clerk Dashboard".into(),
            url: DASHBOARD_URL.into(),
        }]
    }

    async fn login_callback(
        &self,
        ctx: &dyn RequestContext,
    ) -> Result<UserCenterBasicUserInfo, UserCenterError> {
        let api = self.ensure_client().await?;

        let token = ctx
            .query(SESSION_TOKEN_PARAM)
            .filter(|t| !t.is_empty())
            .ok_or_else(|| UserCenterError::MissingParameter {
                name: SESSION_TOKEN_PARAM.to_string(),
            })?;

        let session = api
            .session_by_token(token)
            .await
            .map_err(|e| UserCenterError::Authentication {
                source: Box::new(e),
            })?;
        debug!(session_id = %session.id, user_id = %session.user_id, "session token verified");

        let user = self.fetch_user(api.as_ref(), &session.user_id).await?;
        Ok(to_user_info(&user))
    }

    async fn signup_callback(
        &self,
        ctx: &dyn RequestContext,
    ) -> Result<UserCenterBasicUserInfo, UserCenterError> {
        // Clerk owns the signup flow; the redirect looks the same as a login.
        self.login_callback(ctx).await
    }

    async fn user_info(&self, external_id: &str) -> Result<UserCenterBasicUserInfo, UserCenterError> {
        let api = self.ensure_client().await?;
        let user = self.fetch_user(api.as_ref(), external_id).await?;
        Ok(to_user_info(&user))
    }

    async fn user_status(&self, _external_id: &str) -> UserStatus {
        // TODO: map `ClerkUser::banned` to `UserStatus::Suspended` once the host
        // handles suspended external accounts.
        UserStatus::Normal
    }

    async fn user_list(&self, page: u32, page_size: u32) -> Result<UserList, UserCenterError> {
        let api = self.ensure_client().await?;
        let params = ListUsersParams::for_page(page, page_size);
        debug!(page, page_size, offset = params.offset, "listing clerk users");

        let result = api
            .list_users(params)
            .await
            .map_err(|e| UserCenterError::Listing {
                source: Box::new(e),
            })?;

        Ok(UserList {
            users: result.users.iter().map(to_user_info).collect(),
            total: result.total_count.unwrap_or(0),
        })
    }

    async fn user_settings(&self, _external_id: &str) -> UserCenterSetting {
        UserCenterSetting {
            name: "Clerk Settings".into(),
            label: "Manage my Clerk Account".into(),
            url: ACCOUNT_SETTINGS_URL.into(),
        }
    }

    async fn personal_branding(&self, external_id: &str) -> UserCenterBranding {
        let api = match self.ensure_client().await {
            Ok(api) => api,
            Err(e) => {
                debug!(error = %e, "clerk client unavailable; returning empty branding");
                return UserCenterBranding::default();
            }
        };
        match api.user(external_id).await {
            Ok(user) => to_branding(&user),
            Err(e) => {
                debug!(error = %e, external_id, "branding lookup failed; returning empty branding");
                UserCenterBranding::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tracing_test::traced_test;

    use crate::types::{ClerkSession, ClerkUserPage};

    /// Minimal in-crate stand-in; richer scenarios live in `tests/` with the
    /// shared mock from the test-utils crate.
    struct StaticApi;

    #[async_trait]
    impl ClerkApi for StaticApi {
        async fn session_by_token(&self, _token: &str) -> Result<ClerkSession, UserCenterError> {
            Err(UserCenterError::provider("not used", None))
        }

        async fn user(&self, user_id: &str) -> Result<ClerkUser, UserCenterError> {
            Ok(ClerkUser::new(user_id).with_username("static"))
        }

        async fn list_users(&self, _params: ListUsersParams) -> Result<ClerkUserPage, UserCenterError> {
            Ok(ClerkUserPage::default())
        }
    }

    #[derive(Default)]
    struct CountingConnector {
        connects: AtomicUsize,
    }

    impl ClerkConnector for CountingConnector {
        fn connect(&self, _credentials: &ClerkCredentials) -> Result<Arc<dyn ClerkApi>, UserCenterError> {
            self.connects.fetch_add(1, Ordering::SeqCst);
            Ok(Arc::new(StaticApi))
        }
    }

    fn configured() -> ClerkConfig {
        ClerkConfig {
            publishable_key: Some("pk_test".into()),
            secret_key: Some("sk_test".into()),
            frontend_api: Some("https://api.clerk.dev".into()),
        }
    }

    #[test]
    fn bundled_manifest_parses() {
        let manifest = ClerkUserCenter::manifest();
        assert_eq!(manifest.slug_name, "clerk_user_center");
        assert!(manifest.semver().is_some());
        assert!(manifest.config_keys.contains(&"clerk.secret_key".to_string()));
    }

    #[test]
    fn descriptors_match_host_contract() {
        let bridge = ClerkUserCenter::new(ClerkConfig::default());
        let info = bridge.info();
        assert_eq!(info.slug_name, "clerk_user_center");
        assert_eq!(bridge.name(), "clerk_user_center");

        let desc = bridge.description();
        assert_eq!(desc.url, "/login/clerk");
        assert_eq!(desc.priority, 10);
        assert!(desc.icon.starts_with("<svg"));

        let items = bridge.control_center_items();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].url, "https://dashboard.clerk.com");
    }

    #[tokio::test]
    #[traced_test]
    async fn first_use_initializes_once_and_logs() {
        let connector = Arc::new(CountingConnector::default());
        let bridge = ClerkUserCenter::with_connector(configured(), connector.clone());
        assert!(!bridge.is_initialized());

        bridge.ensure_client().await.unwrap();
        bridge.ensure_client().await.unwrap();

        assert!(bridge.is_initialized());
        assert_eq!(connector.connects.load(Ordering::SeqCst), 1);
        assert!(logs_contain("clerk client initialized"));
        assert!(!logs_contain("sk_test"));
    }

    #[tokio::test]
    async fn concurrent_first_use_builds_one_client() {
        let connector = Arc::new(CountingConnector::default());
        let bridge = Arc::new(ClerkUserCenter::with_connector(configured(), connector.clone()));

        let tasks: Vec<_> = (0..16)
            .map(|i| {
                let bridge = Arc::clone(&bridge);
                tokio::spawn(async move { bridge.user_info(&format!("user_{i}")).await })
            })
            .collect();
        for task in tasks {
            assert!(task.await.unwrap().is_ok());
        }

        assert_eq!(connector.connects.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn health_reflects_configuration_and_initialization() {
        let unconfigured = ClerkUserCenter::new(ClerkConfig::default());
        assert!(matches!(
            unconfigured.health_check().await.unwrap(),
            HealthStatus::Unhealthy(_)
        ));

        let bridge =
            ClerkUserCenter::with_connector(configured(), Arc::new(CountingConnector::default()));
        assert!(matches!(
            bridge.health_check().await.unwrap(),
            HealthStatus::Degraded(_)
        ));
        bridge.ensure_client().await.unwrap();
        assert_eq!(bridge.health_check().await.unwrap(), HealthStatus::Healthy);
        assert!(bridge.shutdown().await.is_ok());
    }

    #[test]
    fn debug_output_hides_secret() {
        let bridge = ClerkUserCenter::new(configured());
        let out = format!("{bridge:?}");
        assert!(!out.contains("sk_test"), "got: {out}");
        assert!(out.contains("initialized: false"));
    }
}
