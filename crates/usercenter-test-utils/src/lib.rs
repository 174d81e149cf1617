// SPDX-FileCopyrightText: 2026 Usercenter Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test utilities for user-center integration tests.
//!
//! # Components
//!
//! - [`MockClerkApi`] - In-memory Clerk API and connector with call counters
//! - [`MockRequest`] - Callback request context with query parameters
//! - [`TestHarness`] - A Clerk bridge wired to a mock

pub mod harness;
pub mod mock_clerk;
pub mod mock_request;

pub use harness::{test_clerk_config, TestHarness, TestHarnessBuilder};
pub use mock_clerk::MockClerkApi;
pub use mock_request::MockRequest;
