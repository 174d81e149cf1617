// SPDX-FileCopyrightText: 2026 Usercenter Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Inbound request abstraction handed to login and signup callbacks.

use std::collections::HashMap;

/// Read-only view of the host's inbound HTTP request.
///
/// Plugins only need query-parameter access; the host adapts whatever web
/// framework it runs on to this trait.
pub trait RequestContext: Send + Sync {
    /// Returns the value of the query parameter `key`, if present.
    fn query(&self, key: &str) -> Option<&str>;
}

impl RequestContext for HashMap<String, String> {
    fn query(&self, key: &str) -> Option<&str> {
        self.get(key).map(String::as_str)
    }
}
