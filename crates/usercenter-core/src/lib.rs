// SPDX-FileCopyrightText: 2026 Usercenter Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for user-center plugins.
//!
//! This crate provides the host contract a user-center plugin implements: the
//! adapter traits, the normalized user record and descriptor types, and the
//! shared error type. Provider bridges depend on this crate only.

pub mod error;
pub mod traits;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::{BoxError, UserCenterError};
pub use types::{
    ControlCenterItem, HealthStatus, PluginInfo, Translator, UserCenterBasicUserInfo,
    UserCenterBranding, UserCenterDesc, UserCenterSetting, UserList, UserStatus,
};

pub use traits::{PluginAdapter, RequestContext, UserCenterAdapter};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_variants_render_messages() {
        let config = UserCenterError::Config("clerk secret key is not set".into());
        assert_eq!(
            config.to_string(),
            "configuration error: clerk secret key is not set"
        );

        let missing = UserCenterError::MissingParameter {
            name: "session_token".into(),
        };
        assert_eq!(missing.to_string(), "missing request parameter `session_token`");

        let auth = UserCenterError::Authentication {
            source: Box::new(UserCenterError::provider("session not found", Some(404))),
        };
        assert!(auth.to_string().contains("invalid session token"));
        assert!(auth.to_string().contains("session not found"));

        let lookup = UserCenterError::Lookup {
            external_id: "user_1".into(),
            source: Box::new(std::io::Error::other("boom")),
        };
        assert!(lookup.to_string().contains("user_1"));

        let listing = UserCenterError::Listing {
            source: Box::new(std::io::Error::other("boom")),
        };
        assert_eq!(listing.to_string(), "failed to list users: boom");

        let not_found = UserCenterError::PluginNotFound {
            slug: "nope".into(),
        };
        assert_eq!(not_found.to_string(), "user-center plugin not found: nope");

        let internal = UserCenterError::Internal("test".into());
        assert_eq!(internal.to_string(), "internal error: test");
    }

    #[test]
    fn wrapped_errors_expose_source_chain() {
        use std::error::Error;

        let err = UserCenterError::Listing {
            source: Box::new(UserCenterError::provider("API returned 500", Some(500))),
        };
        let source = err.source().expect("listing error carries a source");
        assert_eq!(source.to_string(), "provider error: API returned 500");
        assert_eq!(err.provider_status(), Some(500));
    }

    #[test]
    fn provider_status_absent_for_non_provider_errors() {
        let err = UserCenterError::Lookup {
            external_id: "user_1".into(),
            source: Box::new(std::io::Error::other("network down")),
        };
        assert_eq!(err.provider_status(), None);
        assert_eq!(UserCenterError::Config("x".into()).provider_status(), None);
    }

    #[test]
    fn user_status_string_roundtrip() {
        use std::str::FromStr;

        for status in [UserStatus::Normal, UserStatus::Suspended, UserStatus::Deleted] {
            let parsed = UserStatus::from_str(&status.to_string()).expect("should parse back");
            assert_eq!(status, parsed);
        }
        assert_eq!(UserStatus::Normal.to_string(), "normal");
    }

    #[test]
    fn user_record_serializes_snake_case() {
        let info = UserCenterBasicUserInfo {
            external_id: "user_1".into(),
            username: "ada".into(),
            display_name: "Ada".into(),
            email: "ada@x.com".into(),
            avatar_url: String::new(),
            roles: vec!["member".into()],
        };
        let json = serde_json::to_value(&info).expect("should serialize");
        assert_eq!(json["external_id"], "user_1");
        assert_eq!(json["roles"][0], "member");
    }

    #[test]
    fn translator_is_transparent() {
        let t = Translator::new("clerk_user_center");
        assert_eq!(serde_json::to_string(&t).unwrap(), "\"clerk_user_center\"");
        assert_eq!(t.key(), "clerk_user_center");
    }

    #[test]
    fn default_branding_is_empty() {
        assert!(UserCenterBranding::default().is_empty());
        let branded = UserCenterBranding {
            avatar_url: String::new(),
            nickname: "ada".into(),
        };
        assert!(!branded.is_empty());
    }

    #[test]
    fn all_traits_are_exported() {
        fn _assert_plugin_adapter<T: PluginAdapter>() {}
        fn _assert_user_center_adapter<T: UserCenterAdapter>() {}
        fn _assert_object_safe(_: &dyn UserCenterAdapter, _: &dyn RequestContext) {}
    }
}
