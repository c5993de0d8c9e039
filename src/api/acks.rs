// Copyright 2025 Memophor Labs
// SPDX-License-Identifier: Apache-2.0

//! Rule acknowledgements, compatible with the Advisor `ack` API.

use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use super::common::parse_body;
use super::AppState;
use crate::error::AppError;
use crate::model::{
    Acknowledge, AcknowledgementJustification, AcknowledgementRequest, AcknowledgementsMetadata,
    AcknowledgementsResponse,
};
use crate::response::{empty, ApiJson};
use crate::validation::validate_rule_selector;

pub async fn list(State(state): State<AppState>) -> ApiJson<AcknowledgementsResponse> {
    let data = state.acks.list().await;
    ApiJson(AcknowledgementsResponse {
        meta: AcknowledgementsMetadata { count: data.len() },
        data,
    })
}

/// 201 with the new record, or 200 with the record that was already there.
pub async fn acknowledge(State(state): State<AppState>, body: Bytes) -> Result<Response, AppError> {
    let request: AcknowledgementRequest = parse_body(&body)?;
    let selector = validate_rule_selector(&request.rule_selector)?;

    let outcome = state.acks.get_or_create(&selector, &request.justification).await;
    let status = if outcome.created {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };

    Ok((status, ApiJson(outcome.record)).into_response())
}

/// Never 404s: reading an unknown selector acknowledges it with the default
/// justification, the same way the Advisor API behaves.
pub async fn get(
    State(state): State<AppState>,
    Path(selector): Path<String>,
) -> Result<ApiJson<Acknowledge>, AppError> {
    let selector = validate_rule_selector(&selector)?;
    let outcome = state.acks.touch_or_create(&selector).await;
    if outcome.created {
        tracing::info!(rule = %selector, "acknowledgement created by read");
    }
    Ok(ApiJson(outcome.record))
}

pub async fn update(
    State(state): State<AppState>,
    Path(selector): Path<String>,
    body: Bytes,
) -> Result<ApiJson<Acknowledge>, AppError> {
    let selector = validate_rule_selector(&selector)?;
    if !state.acks.contains(&selector).await {
        return Err(justification_not_changed());
    }

    let request: AcknowledgementJustification = parse_body(&body)?;
    state
        .acks
        .update_justification(&selector, &request.justification)
        .await
        .map(ApiJson)
        // deleted between the check and the write
        .ok_or_else(justification_not_changed)
}

fn justification_not_changed() -> AppError {
    AppError::not_found("rule not found -> justification can not be changed")
}

pub async fn delete(State(state): State<AppState>, Path(selector): Path<String>) -> Result<Response, AppError> {
    let selector = validate_rule_selector(&selector)?;
    if !state.acks.delete(&selector).await {
        return Err(AppError::not_found("rule not found -> acknowledgement can not be deleted"));
    }
    Ok(empty(StatusCode::NO_CONTENT))
}
