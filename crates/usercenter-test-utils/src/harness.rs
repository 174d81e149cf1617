// SPDX-FileCopyrightText: 2026 Usercenter Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test harness wiring a [`ClerkUserCenter`] to a [`MockClerkApi`].

use std::sync::Arc;

use usercenter_clerk::{ClerkUser, ClerkUserCenter};
use usercenter_config::ClerkConfig;
use usercenter_core::{UserCenterAdapter, UserCenterBasicUserInfo, UserCenterError};

use crate::mock_clerk::MockClerkApi;
use crate::mock_request::MockRequest;

/// Credentials that pass configuration checks. Never sent anywhere.
pub fn test_clerk_config() -> ClerkConfig {
    ClerkConfig {
        publishable_key: Some("pk_test_harness".to_string()),
        secret_key: Some("sk_test_harness".to_string()),
        frontend_api: Some("https://api.clerk.test".to_string()),
    }
}

/// Builder for a bridge backed by in-memory Clerk state.
pub struct TestHarnessBuilder {
    config: ClerkConfig,
    users: Vec<ClerkUser>,
    sessions: Vec<(String, String)>,
    omit_total_count: bool,
}

impl TestHarnessBuilder {
    fn new() -> Self {
        Self {
            config: test_clerk_config(),
            users: Vec::new(),
            sessions: Vec::new(),
            omit_total_count: false,
        }
    }

    /// Replaces the Clerk configuration the bridge is constructed with.
    pub fn with_config(mut self, config: ClerkConfig) -> Self {
        self.config = config;
        self
    }

    /// Constructs the bridge with no credentials.
    pub fn unconfigured(self) -> Self {
        self.with_config(ClerkConfig::default())
    }

    pub fn with_user(mut self, user: ClerkUser) -> Self {
        self.users.push(user);
        self
    }

    /// Adds `count` users with IDs `user_000`, `user_001`, ...
    pub fn with_numbered_users(mut self, count: usize) -> Self {
        self.users.extend(
            (0..count).map(|i| ClerkUser::new(format!("user_{i:03}")).with_username(format!("u{i}"))),
        );
        self
    }

    /// Registers a session token resolving to `user_id`.
    pub fn with_session(mut self, token: impl Into<String>, user_id: impl Into<String>) -> Self {
        self.sessions.push((token.into(), user_id.into()));
        self
    }

    pub fn without_total_count(mut self) -> Self {
        self.omit_total_count = true;
        self
    }

    pub async fn build(self) -> TestHarness {
        let clerk = MockClerkApi::new();
        for user in self.users {
            clerk.add_user(user).await;
        }
        for (token, user_id) in self.sessions {
            clerk.add_session(token, user_id).await;
        }
        if self.omit_total_count {
            clerk.omit_total_count();
        }

        let bridge = Arc::new(ClerkUserCenter::with_connector(
            self.config,
            Arc::new(clerk.clone()),
        ));
        TestHarness { bridge, clerk }
    }
}

/// A bridge plus the mock it talks to.
pub struct TestHarness {
    pub bridge: Arc<ClerkUserCenter>,
    pub clerk: MockClerkApi,
}

impl TestHarness {
    pub fn builder() -> TestHarnessBuilder {
        TestHarnessBuilder::new()
    }

    /// Runs the login callback with `session_token=<token>`.
    pub async fn login(&self, token: &str) -> Result<UserCenterBasicUserInfo, UserCenterError> {
        self.bridge
            .login_callback(&MockRequest::with_session_token(token))
            .await
    }
}
