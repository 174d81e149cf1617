// SPDX-FileCopyrightText: 2026 Usercenter Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for user-center plugins.

use thiserror::Error;

/// Boxed error used to carry the underlying provider failure.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// The primary error type returned by user-center adapters and their support crates.
#[derive(Debug, Error)]
pub enum UserCenterError {
    /// Missing or malformed provider configuration (secret key, frontend API).
    #[error("configuration error: {0}")]
    Config(String),

    /// A required request parameter was absent from the inbound request.
    #[error("missing request parameter `{name}`")]
    MissingParameter { name: String },

    /// The identity provider rejected the presented session token.
    #[error("invalid session token: {source}")]
    Authentication { source: BoxError },

    /// The identity provider failed to return the requested user.
    #[error("failed to get user info for `{external_id}`: {source}")]
    Lookup {
        external_id: String,
        source: BoxError,
    },

    /// The identity provider failed to list users.
    #[error("failed to list users: {source}")]
    Listing { source: BoxError },

    /// Raw outbound failure talking to the identity provider (transport, status, decoding).
    #[error("provider error: {message}")]
    Provider {
        message: String,
        /// HTTP status returned by the provider, if a response was received.
        status: Option<u16>,
        source: Option<BoxError>,
    },

    /// No plugin with the given slug is registered.
    #[error("user-center plugin not found: {slug}")]
    PluginNotFound { slug: String },

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}

impl UserCenterError {
    /// Builds a `Provider` error without an underlying source.
    pub fn provider(message: impl Into<String>, status: Option<u16>) -> Self {
        Self::Provider {
            message: message.into(),
            status,
            source: None,
        }
    }

    /// Returns the provider HTTP status carried by this error or its wrapped source.
    pub fn provider_status(&self) -> Option<u16> {
        match self {
            Self::Provider { status, .. } => *status,
            Self::Authentication { source }
            | Self::Lookup { source, .. }
            | Self::Listing { source } => source
                .downcast_ref::<UserCenterError>()
                .and_then(UserCenterError::provider_status),
            _ => None,
        }
    }
}
