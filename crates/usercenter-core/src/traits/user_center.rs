// SPDX-FileCopyrightText: 2026 Usercenter Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! User-center adapter trait for external identity providers.

use async_trait::async_trait;

use crate::error::UserCenterError;
use crate::traits::adapter::PluginAdapter;
use crate::traits::request::RequestContext;
use crate::types::{
    ControlCenterItem, PluginInfo, UserCenterBasicUserInfo, UserCenterBranding,
    UserCenterDesc, UserCenterSetting, UserList, UserStatus,
};

/// Adapter that replaces the host's built-in account system with an external
/// identity provider.
///
/// The host calls the login/signup callbacks when the provider redirects back,
/// and uses the lookup operations to keep its own user table in sync.
#[async_trait]
pub trait UserCenterAdapter: PluginAdapter {
    /// Plugin metadata shown in the host's plugin list.
    fn info(&self) -> PluginInfo;

    /// Login-page entry for this user center.
    fn description(&self) -> UserCenterDesc;

    /// Shortcut links shown in the host's control center.
    fn control_center_items(&self) -> Vec<ControlCenterItem>;

    /// Resolves the user behind a provider redirect to the login callback.
    async fn login_callback(
        &self,
        ctx: &dyn RequestContext,
    ) -> Result<UserCenterBasicUserInfo, UserCenterError>;

    /// Resolves the user behind a provider redirect to the signup callback.
    async fn signup_callback(
        &self,
        ctx: &dyn RequestContext,
    ) -> Result<UserCenterBasicUserInfo, UserCenterError>;

    /// Fetches a single user by provider-side identifier.
    async fn user_info(&self, external_id: &str) -> Result<UserCenterBasicUserInfo, UserCenterError>;

    /// Reports the account status of a user.
    async fn user_status(&self, external_id: &str) -> UserStatus;

    /// Lists users, `page` is 1-based.
    async fn user_list(&self, page: u32, page_size: u32) -> Result<UserList, UserCenterError>;

    /// Link to the provider-hosted settings page for a user.
    async fn user_settings(&self, external_id: &str) -> UserCenterSetting;

    /// Branding for a user's profile. Must not fail; returns an empty record instead.
    async fn personal_branding(&self, external_id: &str) -> UserCenterBranding;
}
