// Copyright 2025 Memophor Labs
// SPDX-License-Identifier: Apache-2.0

//! Rule hits per cluster, votes and per-cluster rule toggles.

use axum::extract::{Path, State};
use serde::Serialize;

use super::common::OkWith;
use super::AppState;
use crate::acks::DEFAULT_USER;
use crate::clock::format_timestamp;
use crate::error::AppError;
use crate::model::{ClusterName, Component, ErrorKey, StatusResponse};
use crate::response::ApiJson;
use crate::storage::{RuleToggle, UserVote};
use crate::validation::{parse_rule_selector, validate_cluster_name, validate_rule_id};

#[derive(Serialize)]
pub struct ClustersDetailMeta {
    count: usize,
    component: Component,
    error_key: ErrorKey,
    generated_at: String,
}

#[derive(Serialize)]
pub struct ClustersDetail {
    meta: ClustersDetailMeta,
    data: Vec<ClusterName>,
}

pub async fn clusters_detail(
    State(state): State<AppState>,
    Path(selector): Path<String>,
) -> Result<ApiJson<ClustersDetail>, AppError> {
    let (component, error_key) = parse_rule_selector(&selector)?;
    let data = state.tables.clusters_hitting_rule(&component, &error_key);

    Ok(ApiJson(ClustersDetail {
        meta: ClustersDetailMeta {
            count: data.len(),
            component,
            error_key,
            generated_at: format_timestamp(state.clock.now()),
        },
        data,
    }))
}

fn cluster_and_rule(cluster: &str, rule_id: &str) -> Result<(ClusterName, String), AppError> {
    Ok((validate_cluster_name(cluster)?, validate_rule_id(rule_id)?))
}

async fn vote(state: &AppState, cluster: &str, rule_id: &str, vote: UserVote) -> Result<ApiJson<StatusResponse>, AppError> {
    let (cluster, rule_id) = cluster_and_rule(cluster, rule_id)?;
    state
        .feedback
        .vote_on_rule(&cluster, &rule_id, DEFAULT_USER, vote)
        .await?;
    Ok(ApiJson(StatusResponse::ok()))
}

pub async fn like(
    State(state): State<AppState>,
    Path((cluster, rule_id)): Path<(String, String)>,
) -> Result<ApiJson<StatusResponse>, AppError> {
    vote(&state, &cluster, &rule_id, UserVote::Like).await
}

pub async fn dislike(
    State(state): State<AppState>,
    Path((cluster, rule_id)): Path<(String, String)>,
) -> Result<ApiJson<StatusResponse>, AppError> {
    vote(&state, &cluster, &rule_id, UserVote::Dislike).await
}

pub async fn reset_vote(
    State(state): State<AppState>,
    Path((cluster, rule_id)): Path<(String, String)>,
) -> Result<ApiJson<StatusResponse>, AppError> {
    vote(&state, &cluster, &rule_id, UserVote::None).await
}

#[derive(Serialize)]
pub struct Vote {
    vote: UserVote,
}

pub async fn get_vote(
    State(state): State<AppState>,
    Path((cluster, rule_id)): Path<(String, String)>,
) -> Result<ApiJson<OkWith<Vote>>, AppError> {
    let (cluster, rule_id) = cluster_and_rule(&cluster, &rule_id)?;
    let feedback = state
        .feedback
        .get_user_feedback_on_rule(&cluster, &rule_id, DEFAULT_USER)
        .await?;
    Ok(ApiJson(OkWith::new(Vote { vote: feedback.vote })))
}

async fn toggle(state: &AppState, cluster: &str, rule_id: &str, toggle: RuleToggle) -> Result<ApiJson<StatusResponse>, AppError> {
    let (cluster, rule_id) = cluster_and_rule(cluster, rule_id)?;
    state
        .toggles
        .toggle_rule_for_cluster(&cluster, &rule_id, DEFAULT_USER, toggle)
        .await?;
    Ok(ApiJson(StatusResponse::ok()))
}

pub async fn disable(
    State(state): State<AppState>,
    Path((cluster, rule_id)): Path<(String, String)>,
) -> Result<ApiJson<StatusResponse>, AppError> {
    toggle(&state, &cluster, &rule_id, RuleToggle::Disable).await
}

pub async fn enable(
    State(state): State<AppState>,
    Path((cluster, rule_id)): Path<(String, String)>,
) -> Result<ApiJson<StatusResponse>, AppError> {
    toggle(&state, &cluster, &rule_id, RuleToggle::Enable).await
}
