// SPDX-FileCopyrightText: 2026 Usercenter Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! In-memory Clerk stand-in for deterministic bridge tests.
//!
//! `MockClerkApi` implements both [`ClerkApi`] and [`ClerkConnector`], so a
//! single handle can be injected into a bridge and then inspected for the
//! calls it received.

use std::collections::{BTreeMap, HashMap};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use usercenter_clerk::{
    ClerkApi, ClerkConnector, ClerkCredentials, ClerkSession, ClerkUser, ClerkUserPage,
    ListUsersParams,
};
use usercenter_core::UserCenterError;

#[derive(Default)]
struct MockState {
    users: Mutex<BTreeMap<String, ClerkUser>>,
    sessions: Mutex<HashMap<String, ClerkSession>>,
    list_params: Mutex<Vec<ListUsersParams>>,
    omit_total_count: AtomicBool,
    fail_connect: AtomicBool,
    fail_users: AtomicBool,
    fail_list: AtomicBool,
    connects: AtomicUsize,
    session_calls: AtomicUsize,
    user_calls: AtomicUsize,
    list_calls: AtomicUsize,
}

/// Clerk stand-in backed by in-memory users and sessions.
///
/// Clones share state: the handle given to a bridge and the one kept by the
/// test observe the same counters.
#[derive(Clone, Default)]
pub struct MockClerkApi {
    state: Arc<MockState>,
}

impl MockClerkApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a user, replacing any existing user with the same ID.
    pub async fn add_user(&self, user: ClerkUser) {
        self.state.users.lock().await.insert(user.id.clone(), user);
    }

    /// Registers a session token that resolves to `user_id`.
    pub async fn add_session(&self, token: impl Into<String>, user_id: impl Into<String>) {
        let token = token.into();
        let index = self.state.sessions.lock().await.len() + 1;
        let session = ClerkSession {
            id: format!("sess_{index}"),
            user_id: user_id.into(),
            status: Some("active".to_string()),
        };
        self.state.sessions.lock().await.insert(token, session);
    }

    /// List responses carry no total count, like a bare-array response.
    pub fn omit_total_count(&self) {
        self.state.omit_total_count.store(true, Ordering::SeqCst);
    }

    /// Makes the next and all later `connect` calls fail.
    pub fn set_fail_connect(&self, fail: bool) {
        self.state.fail_connect.store(fail, Ordering::SeqCst);
    }

    /// Makes user lookups fail with a server error.
    pub fn set_fail_users(&self, fail: bool) {
        self.state.fail_users.store(fail, Ordering::SeqCst);
    }

    /// Makes user listing fail with a server error.
    pub fn set_fail_list(&self, fail: bool) {
        self.state.fail_list.store(fail, Ordering::SeqCst);
    }

    pub fn connects(&self) -> usize {
        self.state.connects.load(Ordering::SeqCst)
    }

    pub fn session_calls(&self) -> usize {
        self.state.session_calls.load(Ordering::SeqCst)
    }

    pub fn user_calls(&self) -> usize {
        self.state.user_calls.load(Ordering::SeqCst)
    }

    pub fn list_calls(&self) -> usize {
        self.state.list_calls.load(Ordering::SeqCst)
    }

    /// Total calls made against the provider, excluding `connect`.
    pub fn provider_calls(&self) -> usize {
        self.session_calls() + self.user_calls() + self.list_calls()
    }

    /// Pagination parameters of every `list_users` call, in order.
    pub async fn list_params(&self) -> Vec<ListUsersParams> {
        self.state.list_params.lock().await.clone()
    }
}

#[async_trait]
impl ClerkApi for MockClerkApi {
    async fn session_by_token(&self, token: &str) -> Result<ClerkSession, UserCenterError> {
        self.state.session_calls.fetch_add(1, Ordering::SeqCst);
        self.state
            .sessions
            .lock()
            .await
            .get(token)
            .cloned()
            .ok_or_else(|| {
                UserCenterError::provider("Clerk API error 401: session token is invalid", Some(401))
            })
    }

    async fn user(&self, user_id: &str) -> Result<ClerkUser, UserCenterError> {
        self.state.user_calls.fetch_add(1, Ordering::SeqCst);
        if self.state.fail_users.load(Ordering::SeqCst) {
            return Err(UserCenterError::provider("Clerk API error 500: internal", Some(500)));
        }
        self.state
            .users
            .lock()
            .await
            .get(user_id)
            .cloned()
            .ok_or_else(|| {
                UserCenterError::provider(
                    format!("Clerk API error 404: no user with id {user_id}"),
                    Some(404),
                )
            })
    }

    async fn list_users(&self, params: ListUsersParams) -> Result<ClerkUserPage, UserCenterError> {
        self.state.list_calls.fetch_add(1, Ordering::SeqCst);
        self.state.list_params.lock().await.push(params);
        if self.state.fail_list.load(Ordering::SeqCst) {
            return Err(UserCenterError::provider("Clerk API error 500: internal", Some(500)));
        }

        let users = self.state.users.lock().await;
        let offset = usize::try_from(params.offset).unwrap_or(usize::MAX);
        let limit = usize::try_from(params.limit).unwrap_or(usize::MAX);
        let page: Vec<ClerkUser> = users.values().skip(offset).take(limit).cloned().collect();
        let total_count = if self.state.omit_total_count.load(Ordering::SeqCst) {
            None
        } else {
            Some(users.len() as u64)
        };
        Ok(ClerkUserPage {
            users: page,
            total_count,
        })
    }
}

impl ClerkConnector for MockClerkApi {
    fn connect(&self, _credentials: &ClerkCredentials) -> Result<Arc<dyn ClerkApi>, UserCenterError> {
        self.state.connects.fetch_add(1, Ordering::SeqCst);
        if self.state.fail_connect.load(Ordering::SeqCst) {
            return Err(UserCenterError::Internal("mock connect failure".into()));
        }
        Ok(Arc::new(self.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn list_slices_users_in_id_order() {
        let mock = MockClerkApi::new();
        for i in 0..5 {
            mock.add_user(ClerkUser::new(format!("user_{i}"))).await;
        }

        let page = mock
            .list_users(ListUsersParams { limit: 2, offset: 2 })
            .await
            .unwrap();
        let ids: Vec<_> = page.users.iter().map(|u| u.id.as_str()).collect();
        assert_eq!(ids, ["user_2", "user_3"]);
        assert_eq!(page.total_count, Some(5));
        assert_eq!(mock.list_params().await.len(), 1);
    }

    #[tokio::test]
    async fn clones_share_counters() {
        let mock = MockClerkApi::new();
        let api = mock
            .connect(&ClerkCredentials::new("sk", "https://api.clerk.dev"))
            .unwrap();
        assert!(api.user("missing").await.is_err());
        assert_eq!(mock.connects(), 1);
        assert_eq!(mock.user_calls(), 1);
    }

    #[tokio::test]
    async fn unknown_token_is_rejected() {
        let mock = MockClerkApi::new();
        mock.add_session("tok_ok", "user_1").await;
        assert_eq!(mock.session_by_token("tok_ok").await.unwrap().user_id, "user_1");
        let err = mock.session_by_token("tok_bad").await.unwrap_err();
        assert_eq!(err.provider_status(), Some(401));
    }
}
