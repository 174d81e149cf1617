// SPDX-FileCopyrightText: 2026 Usercenter Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Clerk Backend API request/response types.

use serde::{Deserialize, Serialize};

// --- Resource types ---

/// A Clerk user object. Only the fields the bridge reads are modeled.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ClerkUser {
    /// Clerk user ID (e.g. "user_2abc...").
    pub id: String,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    /// Profile image URL.
    #[serde(default)]
    pub image_url: Option<String>,
    /// ID of the primary entry in `email_addresses`, if any.
    #[serde(default)]
    pub primary_email_address_id: Option<String>,
    #[serde(default)]
    pub email_addresses: Vec<EmailAddress>,
    /// Ban flag. Read but not yet mapped to a host status.
    #[serde(default)]
    pub banned: bool,
}

impl ClerkUser {
    /// Creates a user with only an ID set.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    pub fn with_name(mut self, first: impl Into<String>, last: impl Into<String>) -> Self {
        self.first_name = Some(first.into());
        self.last_name = Some(last.into());
        self
    }

    pub fn with_image_url(mut self, url: impl Into<String>) -> Self {
        self.image_url = Some(url.into());
        self
    }

    /// Adds an email address and marks it primary.
    pub fn with_primary_email(mut self, address: impl Into<String>) -> Self {
        let id = format!("idn_{}", self.email_addresses.len() + 1);
        self.email_addresses.push(EmailAddress {
            id: id.clone(),
            email_address: address.into(),
        });
        self.primary_email_address_id = Some(id);
        self
    }

    /// The primary email address, if the user has one and it is present in the list.
    pub fn primary_email(&self) -> Option<&EmailAddress> {
        let primary_id = self.primary_email_address_id.as_deref()?;
        self.email_addresses.iter().find(|e| e.id == primary_id)
    }
}

/// One of a user's email addresses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailAddress {
    pub id: String,
    pub email_address: String,
}

/// A Clerk session, as returned by token verification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClerkSession {
    pub id: String,
    /// The user that owns this session.
    pub user_id: String,
    /// Session status (e.g. "active").
    #[serde(default)]
    pub status: Option<String>,
}

/// A page of users plus the total count, when the API reports one.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ClerkUserPage {
    pub users: Vec<ClerkUser>,
    pub total_count: Option<u64>,
}

// --- Wire types ---

/// Body for `POST /v1/sessions/verify`.
#[derive(Debug, Serialize)]
pub(crate) struct VerifySessionRequest<'a> {
    pub token: &'a str,
}

/// Response of `GET /v1/users`.
///
/// Paginated responses wrap the users with a total count; older API versions
/// return a bare array with no pagination metadata.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum UserListResponse {
    Paginated {
        data: Vec<ClerkUser>,
        #[serde(default)]
        total_count: Option<u64>,
    },
    Bare(Vec<ClerkUser>),
}

impl From<UserListResponse> for ClerkUserPage {
    fn from(response: UserListResponse) -> Self {
        match response {
            UserListResponse::Paginated { data, total_count } => Self {
                users: data,
                total_count,
            },
            UserListResponse::Bare(users) => Self {
                users,
                total_count: None,
            },
        }
    }
}

// --- Error response types ---

/// Error body returned by the Clerk API.
#[derive(Debug, Deserialize)]
pub(crate) struct ApiErrorResponse {
    #[serde(default)]
    pub errors: Vec<ApiErrorDetail>,
}

/// A single entry of an error body.
#[derive(Debug, Deserialize)]
pub(crate) struct ApiErrorDetail {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub long_message: Option<String>,
}

impl ApiErrorResponse {
    /// Human-readable summary of every error in the body.
    pub fn summary(&self) -> Option<String> {
        if self.errors.is_empty() {
            return None;
        }
        let parts: Vec<String> = self
            .errors
            .iter()
            .map(|e| {
                let text = e.long_message.as_deref().unwrap_or(&e.message);
                format!("{} ({})", text, e.code)
            })
            .collect();
        Some(parts.join("; "))
    }
}
