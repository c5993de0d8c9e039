// Copyright 2025 Memophor Labs
// SPDX-License-Identifier: Apache-2.0

use std::collections::BTreeMap;

use axum::extract::State;
use axum::http::header;
use axum::response::IntoResponse;
use serde::Serialize;
use serde_json::Value;

use super::common::OkWith;
use super::AppState;
use crate::error::AppError;
use crate::model::{Group, StatusResponse};
use crate::response::ApiJson;

/// Version details compiled into the binary; unset values read `*not set*`.
pub fn build_info() -> BTreeMap<&'static str, &'static str> {
    const NOT_SET: &str = "*not set*";
    BTreeMap::from([
        ("BuildVersion", env!("CARGO_PKG_VERSION")),
        ("BuildBranch", option_env!("BUILD_BRANCH").unwrap_or(NOT_SET)),
        ("BuildCommit", option_env!("BUILD_COMMIT").unwrap_or(NOT_SET)),
        ("BuildTime", option_env!("BUILD_TIME").unwrap_or(NOT_SET)),
    ])
}

pub async fn main_endpoint() -> ApiJson<StatusResponse> {
    ApiJson(StatusResponse::ok())
}

#[derive(Serialize)]
pub struct Info {
    info: BTreeMap<&'static str, &'static str>,
}

pub async fn info() -> ApiJson<OkWith<Info>> {
    ApiJson(OkWith::new(Info { info: build_info() }))
}

#[derive(Serialize)]
pub struct Groups<'a> {
    groups: &'a [Group],
}

pub async fn groups(State(state): State<AppState>) -> impl IntoResponse {
    ApiJson(OkWith::new(Groups {
        groups: state.groups.as_slice(),
    }))
    .into_response()
}

#[derive(Serialize)]
pub struct ContentWithGroups<'a> {
    content: &'a [Value],
    groups: &'a [Group],
}

pub async fn content(State(state): State<AppState>) -> impl IntoResponse {
    ApiJson(OkWith::new(ContentWithGroups {
        content: state.content.as_slice(),
        groups: state.groups.as_slice(),
    }))
    .into_response()
}

pub async fn metrics(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let body = state.metrics.export()?;
    Ok((
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4; charset=utf-8")],
        body,
    ))
}

pub async fn exit(State(state): State<AppState>) -> ApiJson<StatusResponse> {
    tracing::info!("shutdown requested over the REST API");
    state.shutdown.notify_one();
    ApiJson(StatusResponse::ok())
}
