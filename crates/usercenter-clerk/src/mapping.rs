// SPDX-FileCopyrightText: 2026 Usercenter Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mapping from Clerk users to host records.
//!
//! Every operation that hands a user to the host goes through
//! [`to_user_info`], so the email, display name and role rules are applied
//! identically everywhere.

use usercenter_core::{UserCenterBasicUserInfo, UserCenterBranding};

use crate::types::ClerkUser;

/// The only role the bridge assigns. Roles are not sourced from Clerk.
pub const MEMBER_ROLE: &str = "member";

/// First name, followed by the last name when it is non-empty.
pub fn display_name(first: &str, last: &str) -> String {
    if last.is_empty() {
        first.to_string()
    } else {
        format!("{first} {last}")
    }
}

/// Maps a Clerk user to the host's normalized user record.
pub fn to_user_info(user: &ClerkUser) -> UserCenterBasicUserInfo {
    UserCenterBasicUserInfo {
        external_id: user.id.clone(),
        username: user.username.clone().unwrap_or_default(),
        display_name: display_name(
            user.first_name.as_deref().unwrap_or_default(),
            user.last_name.as_deref().unwrap_or_default(),
        ),
        email: user
            .primary_email()
            .map(|e| e.email_address.clone())
            .unwrap_or_default(),
        avatar_url: user.image_url.clone().unwrap_or_default(),
        roles: vec![MEMBER_ROLE.to_string()],
    }
}

/// Branding shown next to a user's profile: avatar and username as nickname.
pub fn to_branding(user: &ClerkUser) -> UserCenterBranding {
    UserCenterBranding {
        avatar_url: user.image_url.clone().unwrap_or_default(),
        nickname: user.username.clone().unwrap_or_default(),
    }
}
