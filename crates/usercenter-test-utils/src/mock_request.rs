// SPDX-FileCopyrightText: 2026 Usercenter Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Request context stand-in carrying query parameters.

use std::collections::HashMap;

use usercenter_clerk::SESSION_TOKEN_PARAM;
use usercenter_core::RequestContext;

/// An inbound callback request with only query parameters.
#[derive(Debug, Clone, Default)]
pub struct MockRequest {
    query: HashMap<String, String>,
}

impl MockRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// A request carrying `session_token=<token>`.
    pub fn with_session_token(token: impl Into<String>) -> Self {
        Self::new().with_query(SESSION_TOKEN_PARAM, token)
    }

    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.insert(key.into(), value.into());
        self
    }
}

impl RequestContext for MockRequest {
    fn query(&self, key: &str) -> Option<&str> {
        self.query.get(key).map(String::as_str)
    }
}
