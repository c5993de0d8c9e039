// Copyright 2025 Memophor Labs
// SPDX-License-Identifier: Apache-2.0

use axum::body::Bytes;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::AppError;

pub(crate) const STATUS_OK: &str = "ok";

/// Decodes a JSON request body; any decoding problem is the client's fault.
pub(crate) fn parse_body<T: DeserializeOwned>(body: &Bytes) -> Result<T, AppError> {
    serde_json::from_slice(body).map_err(|error| {
        tracing::warn!(%error, "wrong payload provided by client");
        AppError::bad_request(error.to_string())
    })
}

/// `{"status": "ok", "<key>": value}`, the common success envelope.
#[derive(Debug, Serialize)]
pub(crate) struct OkWith<T: Serialize> {
    status: &'static str,
    #[serde(flatten)]
    data: T,
}

impl<T: Serialize> OkWith<T> {
    pub(crate) fn new(data: T) -> Self {
        Self {
            status: STATUS_OK,
            data,
        }
    }
}
