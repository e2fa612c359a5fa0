// ABOUTME: HTTP middleware for request tracing, correlation ids, and CORS
// ABOUTME: Provides the tower layers wrapped around every route
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Exercise Log Contributors

/// CORS configuration
pub mod cors;
/// Request ids and per-request spans
pub mod tracing;

pub use cors::setup_cors;
pub use self::tracing::{
    create_request_span, propagate_request_id_layer, record_response, set_request_id_layer,
    trace_layer, MakeRequestSpan, RecordResponse,
};
