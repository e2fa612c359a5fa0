// ABOUTME: Request tracing middleware for correlation and structured logging
// ABOUTME: Generates x-request-id headers, opens one span per request, and records its outcome
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Exercise Log Contributors

use axum::body::Body;
use http::{HeaderName, Request, Response};
use std::time::Duration;
use tower_http::classify::{ServerErrorsAsFailures, SharedClassifier};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::{DefaultOnRequest, TraceLayer};
use tracing::{info, Span};

use crate::constants::REQUEST_ID_HEADER;

/// Span maker signature used by [`trace_layer`]
pub type MakeRequestSpan = fn(&Request<Body>) -> Span;

/// Response hook signature used by [`trace_layer`]
pub type RecordResponse = fn(&Response<Body>, Duration, &Span);

/// Create a tracing span for HTTP requests
///
/// Runs after [`set_request_id_layer`], so the id header is always present.
pub fn create_request_span(request: &Request<Body>) -> Span {
    let request_id = request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();

    tracing::info_span!(
        "http_request",
        method = %request.method(),
        path = %request.uri().path(),
        request_id = %request_id,
        status_code = tracing::field::Empty,
        duration_ms = tracing::field::Empty,
    )
}

/// Fill in the span's status and latency once the response is ready
pub fn record_response(response: &Response<Body>, latency: Duration, span: &Span) {
    let status_code = response.status().as_u16();
    let duration_ms = u64::try_from(latency.as_millis()).unwrap_or(u64::MAX);

    span.record("status_code", status_code);
    span.record("duration_ms", duration_ms);
    info!(status_code, duration_ms, "Request completed");
}

/// `TraceLayer` that opens a [`create_request_span`] span per request
/// and closes it with [`record_response`]
#[must_use]
pub fn trace_layer() -> TraceLayer<
    SharedClassifier<ServerErrorsAsFailures>,
    MakeRequestSpan,
    DefaultOnRequest,
    RecordResponse,
> {
    TraceLayer::new_for_http()
        .make_span_with(create_request_span as MakeRequestSpan)
        .on_response(record_response as RecordResponse)
}

/// Assigns a UUID `x-request-id` to requests that arrive without one
#[must_use]
pub fn set_request_id_layer() -> SetRequestIdLayer<MakeRequestUuid> {
    SetRequestIdLayer::new(request_id_header(), MakeRequestUuid)
}

/// Copies the request's `x-request-id` onto the response
#[must_use]
pub fn propagate_request_id_layer() -> PropagateRequestIdLayer {
    PropagateRequestIdLayer::new(request_id_header())
}

const fn request_id_header() -> HeaderName {
    HeaderName::from_static(REQUEST_ID_HEADER)
}
