// SPDX-FileCopyrightText: 2026 Usercenter Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The provider boundary: what the bridge needs from Clerk, and how it gets a client.

use std::sync::Arc;

use async_trait::async_trait;
use secrecy::SecretString;
use usercenter_config::ClerkConfig;
use usercenter_core::UserCenterError;

use crate::types::{ClerkSession, ClerkUser, ClerkUserPage};

/// Clerk operations used by the bridge.
///
/// [`ClerkClient`](crate::ClerkClient) implements this over HTTP; tests use a
/// stand-in so the bridge can be exercised without network access.
#[async_trait]
pub trait ClerkApi: Send + Sync {
    /// Exchanges a session token for the session it identifies.
    async fn session_by_token(&self, token: &str) -> Result<ClerkSession, UserCenterError>;

    /// Fetches a single user by Clerk user ID.
    async fn user(&self, user_id: &str) -> Result<ClerkUser, UserCenterError>;

    /// Lists users with offset/limit pagination.
    async fn list_users(&self, params: ListUsersParams) -> Result<ClerkUserPage, UserCenterError>;
}

/// Offset/limit pagination as understood by the Clerk API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListUsersParams {
    pub limit: u64,
    pub offset: u64,
}

impl ListUsersParams {
    /// Translates a 1-based page number and page size into offset/limit.
    ///
    /// Page 0 is treated as page 1.
    pub fn for_page(page: u32, page_size: u32) -> Self {
        Self {
            limit: u64::from(page_size),
            offset: u64::from(page.saturating_sub(1)) * u64::from(page_size),
        }
    }
}

/// Validated server-side credentials.
#[derive(Debug)]
pub struct ClerkCredentials {
    /// Frontend key for the host's Clerk.js widget.
    publishable_key: Option<String>,
    secret_key: SecretString,
    frontend_api: String,
}

impl ClerkCredentials {
    pub fn new(secret_key: impl Into<String>, frontend_api: impl Into<String>) -> Self {
        Self {
            publishable_key: None,
            secret_key: SecretString::from(secret_key.into()),
            frontend_api: frontend_api.into(),
        }
    }

    /// Extracts credentials from configuration, failing if the secret key or
    /// frontend API is missing or blank.
    pub fn from_config(config: &ClerkConfig) -> Result<Self, UserCenterError> {
        let secret_key = non_blank(&config.secret_key);
        let frontend_api = non_blank(&config.frontend_api);

        match (secret_key, frontend_api) {
            (Some(secret_key), Some(frontend_api)) => Ok(Self {
                publishable_key: non_blank(&config.publishable_key).map(str::to_string),
                secret_key: SecretString::from(secret_key.to_string()),
                frontend_api: frontend_api.to_string(),
            }),
            (secret_key, frontend_api) => {
                let missing: Vec<&str> = [
                    secret_key.is_none().then_some("clerk.secret_key"),
                    frontend_api.is_none().then_some("clerk.frontend_api"),
                ]
                .into_iter()
                .flatten()
                .collect();
                Err(UserCenterError::Config(format!(
                    "clerk config is not set: missing {}",
                    missing.join(", ")
                )))
            }
        }
    }

    /// The frontend (`pk_...`) key. Not used for backend calls; carried so the
    /// host can hand it to Clerk.js on the login page.
    pub fn publishable_key(&self) -> Option<&str> {
        self.publishable_key.as_deref()
    }

    pub fn secret_key(&self) -> &SecretString {
        &self.secret_key
    }

    pub fn frontend_api(&self) -> &str {
        &self.frontend_api
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

/// Builds a [`ClerkApi`] handle from validated credentials.
///
/// Construction must not perform network I/O.
pub trait ClerkConnector: Send + Sync {
    fn connect(&self, credentials: &ClerkCredentials) -> Result<Arc<dyn ClerkApi>, UserCenterError>;
}
