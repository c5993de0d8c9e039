// Copyright 2025 Memophor Labs
// SPDX-License-Identifier: Apache-2.0

//! Response helpers.
//!
//! Every JSON body leaves the service as `application/json; charset=utf-8`,
//! which is what the clients of the real aggregator check for. `axum::Json`
//! omits the charset, so handlers use the wrappers below instead.

use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use serde::Serialize;

pub const APPLICATION_JSON: &str = "application/json; charset=utf-8";

/// Serializes `T` as the response body.
#[derive(Debug, Clone)]
pub struct ApiJson<T>(pub T);

impl<T: Serialize> IntoResponse for ApiJson<T> {
    fn into_response(self) -> Response {
        match serde_json::to_vec(&self.0) {
            Ok(body) => RawJson(body).into_response(),
            Err(error) => {
                tracing::error!(%error, "unable to serialize response body");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    [(header::CONTENT_TYPE, HeaderValue::from_static("text/plain; charset=utf-8"))],
                    "unable to serialize response",
                )
                    .into_response()
            }
        }
    }
}

/// Pre-serialized JSON written to the client byte for byte.
///
/// Stored report fixtures go through this type unparsed, so a deliberately
/// malformed fixture reaches the client exactly as it is on disk.
#[derive(Debug, Clone)]
pub struct RawJson<B>(pub B);

impl<B: Into<axum::body::Body>> IntoResponse for RawJson<B> {
    fn into_response(self) -> Response {
        let body: axum::body::Body = self.0.into();
        (
            [(header::CONTENT_TYPE, HeaderValue::from_static(APPLICATION_JSON))],
            body,
        )
            .into_response()
    }
}

/// A bare status code with an empty body.
pub fn empty(status: StatusCode) -> Response {
    status.into_response()
}
