// SPDX-FileCopyrightText: 2026 Usercenter Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP client for the Clerk Backend API.
//!
//! Provides [`ClerkClient`], which authenticates every request with the
//! secret key and decodes Clerk's JSON and error bodies. Failures surface
//! immediately; there are no retries or timeouts.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, USER_AGENT};
use reqwest::{Method, Url};
use secrecy::ExposeSecret;
use serde::de::DeserializeOwned;
use tracing::debug;
use usercenter_core::UserCenterError;

use crate::api::{ClerkApi, ClerkConnector, ClerkCredentials, ListUsersParams};
use crate::types::{
    ApiErrorResponse, ClerkSession, ClerkUser, ClerkUserPage, UserListResponse,
    VerifySessionRequest,
};

/// API version path segment.
const API_VERSION: &str = "v1";

/// HTTP client for Clerk API communication.
#[derive(Debug, Clone)]
pub struct ClerkClient {
    client: reqwest::Client,
    base_url: Url,
}

impl ClerkClient {
    /// Creates a client for the given credentials. Performs no network I/O.
    pub fn new(credentials: &ClerkCredentials) -> Result<Self, UserCenterError> {
        let base_url = Url::parse(credentials.frontend_api()).map_err(|e| {
            UserCenterError::Config(format!(
                "invalid clerk frontend API URL `{}`: {e}",
                credentials.frontend_api()
            ))
        })?;
        if base_url.cannot_be_a_base() {
            return Err(UserCenterError::Config(format!(
                "clerk frontend API `{base_url}` cannot be used as a base URL"
            )));
        }

        let mut auth = HeaderValue::from_str(&format!(
            "Bearer {}",
            credentials.secret_key().expose_secret()
        ))
        .map_err(|e| UserCenterError::Config(format!("invalid secret key header value: {e}")))?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(
            USER_AGENT,
            HeaderValue::from_static(concat!("usercenter-clerk/", env!("CARGO_PKG_VERSION"))),
        );

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| UserCenterError::Provider {
                message: format!("failed to build HTTP client: {e}"),
                status: None,
                source: Some(Box::new(e)),
            })?;

        Ok(Self { client, base_url })
    }

    /// The API base URL requests are resolved against.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Builds `{base}/v1/{segments...}`, percent-encoding each segment.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, UserCenterError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| {
                UserCenterError::Config(format!("clerk frontend API `{}` is not a base URL", self.base_url))
            })?
            .pop_if_empty()
            .push(API_VERSION)
            .extend(segments);
        Ok(url)
    }

    /// Sends a request and decodes a successful JSON body into `T`.
    async fn execute<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
        operation: &'static str,
    ) -> Result<T, UserCenterError> {
        let response = request.send().await.map_err(|e| UserCenterError::Provider {
            message: format!("HTTP request failed: {e}"),
            status: None,
            source: Some(Box::new(e)),
        })?;

        let status = response.status();
        debug!(status = %status, operation, "clerk response received");

        let body = response.text().await.map_err(|e| UserCenterError::Provider {
            message: format!("failed to read response body: {e}"),
            status: Some(status.as_u16()),
            source: Some(Box::new(e)),
        })?;

        if !status.is_success() {
            let message = match serde_json::from_str::<ApiErrorResponse>(&body)
                .ok()
                .and_then(|api_err| api_err.summary())
            {
                Some(summary) => format!("Clerk API error {status}: {summary}"),
                None => format!("API returned {status}: {body}"),
            };
            return Err(UserCenterError::provider(message, Some(status.as_u16())));
        }

        serde_json::from_str(&body).map_err(|e| UserCenterError::Provider {
            message: format!("failed to parse {operation} response: {e}"),
            status: Some(status.as_u16()),
            source: Some(Box::new(e)),
        })
    }
}

#[async_trait]
impl ClerkApi for ClerkClient {
    async fn session_by_token(&self, token: &str) -> Result<ClerkSession, UserCenterError> {
        let url = self.endpoint(&["sessions", "verify"])?;
        let request = self
            .client
            .request(Method::POST, url)
            .json(&VerifySessionRequest { token });
        self.execute(request, "session verification").await
    }

    async fn user(&self, user_id: &str) -> Result<ClerkUser, UserCenterError> {
        let url = self.endpoint(&["users", user_id])?;
        self.execute(self.client.get(url), "user").await
    }

    async fn list_users(&self, params: ListUsersParams) -> Result<ClerkUserPage, UserCenterError> {
        let mut url = self.endpoint(&["users"])?;
        url.query_pairs_mut()
            .append_pair("limit", &params.limit.to_string())
            .append_pair("offset", &params.offset.to_string());
        let response: UserListResponse = self.execute(self.client.get(url), "user list").await?;
        Ok(response.into())
    }
}

/// Connector producing HTTP-backed [`ClerkClient`]s.
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpConnector;

impl ClerkConnector for HttpConnector {
    fn connect(&self, credentials: &ClerkCredentials) -> Result<Arc<dyn ClerkApi>, UserCenterError> {
        Ok(Arc::new(ClerkClient::new(credentials)?))
    }
}
