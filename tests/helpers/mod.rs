// ABOUTME: Shared test helpers and utilities for integration tests
// ABOUTME: Exports the axum request driver and exercise store fixtures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Exercise Log Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
// Each test binary uses a different subset of the helpers
#![allow(dead_code)]

pub mod axum_test;
pub mod test_utils;
