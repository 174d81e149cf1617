// SPDX-FileCopyrightText: 2026 Usercenter Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Clerk identity bridge for the user-center host.
//!
//! [`ClerkUserCenter`] implements [`UserCenterAdapter`](usercenter_core::UserCenterAdapter)
//! by verifying Clerk session tokens and reading users through the Clerk
//! Backend API. The HTTP client is built lazily on first use from
//! `[clerk]` configuration; see [`ClerkCredentials`].

pub mod api;
pub mod bridge;
pub mod client;
pub mod mapping;
pub mod types;

pub use api::{ClerkApi, ClerkConnector, ClerkCredentials, ListUsersParams};
pub use bridge::{ClerkUserCenter, LOGIN_URL, SESSION_TOKEN_PARAM};
pub use client::{ClerkClient, HttpConnector};
pub use mapping::{to_branding, to_user_info, MEMBER_ROLE};
pub use types::{ClerkSession, ClerkUser, ClerkUserPage, EmailAddress};
