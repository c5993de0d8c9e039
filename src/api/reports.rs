// Copyright 2025 Memophor Labs
// SPDX-License-Identifier: Apache-2.0

//! Organizations, clusters and their stored reports.

use std::collections::BTreeMap;

use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use serde_json::value::RawValue;

use super::common::{parse_body, OkWith, STATUS_OK};
use super::AppState;
use crate::clock::format_timestamp;
use crate::error::AppError;
use crate::model::{ClusterName, OrgId};
use crate::response::{empty, ApiJson, RawJson};
use crate::validation::{validate_cluster_name, validate_org_id};

/// Cluster names with this prefix answer with the status code spelled by
/// their last three characters, and no body.
const FAILURE_INJECTION_PREFIX: &str = "ffffffff-ffff-ffff-ffff-";

fn injected_status(cluster: &str) -> Option<Result<StatusCode, AppError>> {
    cluster.strip_prefix(FAILURE_INJECTION_PREFIX)?;

    let code = &cluster[cluster.len().saturating_sub(3)..];
    let status = code
        .parse::<u16>()
        .ok()
        .filter(|code| (200..=599).contains(code))
        .and_then(|code| StatusCode::from_u16(code).ok())
        .ok_or_else(|| AppError::bad_request(format!("unsupported status code '{code}' requested")));
    Some(status)
}

fn not_found_in_storage(cluster: &ClusterName) -> AppError {
    AppError::not_found(format!("Item with ID {cluster} was not found in the storage"))
}

#[derive(Serialize)]
pub struct Organizations {
    organizations: Vec<OrgId>,
}

pub async fn organizations(State(state): State<AppState>) -> Result<ApiJson<OkWith<Organizations>>, AppError> {
    let organizations = state.orgs.list_of_orgs().await?;
    Ok(ApiJson(OkWith::new(Organizations { organizations })))
}

#[derive(Serialize)]
pub struct Clusters {
    clusters: Vec<ClusterName>,
}

pub async fn clusters_for_organization(
    State(state): State<AppState>,
    Path(organization): Path<String>,
) -> Result<ApiJson<OkWith<Clusters>>, AppError> {
    let org = validate_org_id(&organization)?;
    let clusters = state.orgs.list_of_clusters_for_org(org).await.map_err(|error| {
        tracing::warn!(organization = %org, %error, "unable to list clusters");
        error
    })?;
    Ok(ApiJson(OkWith::new(Clusters { clusters })))
}

/// Shared by `/report/{cluster}`, `/clusters/{cluster}/report` and
/// `/cluster/{cluster}/report`.
pub async fn report_for_cluster(
    State(state): State<AppState>,
    Path(cluster): Path<String>,
) -> Result<Response, AppError> {
    let cluster = validate_cluster_name(&cluster)?;

    if let Some(status) = injected_status(cluster.as_str()) {
        let status = status?;
        tracing::info!(%cluster, status = status.as_u16(), "injected failure requested");
        return Ok(empty(status));
    }

    let report = state.reports.read_report_for_cluster(&cluster).await?;
    if report.is_empty() {
        return Err(not_found_in_storage(&cluster));
    }

    Ok(RawJson(report.into_string()).into_response())
}

pub async fn report_for_org_and_cluster(
    State(state): State<AppState>,
    Path((organization, cluster)): Path<(String, String)>,
) -> Result<Response, AppError> {
    let org = validate_org_id(&organization)?;
    let cluster = validate_cluster_name(&cluster)?;

    let report = state
        .reports
        .read_report_for_org_and_cluster(org, &cluster)
        .await?;
    if report.is_empty() {
        return Err(not_found_in_storage(&cluster));
    }

    Ok(RawJson(report.into_string()).into_response())
}

#[derive(Deserialize)]
struct ClusterList {
    clusters: Vec<String>,
}

/// Accumulated outcome of a multi-cluster lookup. Failures end up in
/// `errors` and never abort the batch.
#[derive(Serialize)]
pub struct ClusterReports {
    clusters: Vec<ClusterName>,
    errors: Vec<String>,
    reports: BTreeMap<ClusterName, Box<RawValue>>,
    generated_at: String,
    status: &'static str,
}

async fn collect_reports<I>(state: &AppState, names: I) -> ClusterReports
where
    I: IntoIterator<Item = String>,
{
    let mut clusters = Vec::new();
    let mut errors = Vec::new();
    let mut reports = BTreeMap::new();

    for name in names {
        let Ok(cluster) = validate_cluster_name(&name) else {
            tracing::warn!(cluster = %name, "invalid cluster name in batch");
            errors.push(name);
            continue;
        };

        let report = match state.reports.read_report_for_cluster(&cluster).await {
            Ok(report) if !report.is_empty() => report,
            Ok(_) => {
                tracing::warn!(%cluster, "no report for cluster in batch");
                errors.push(name);
                continue;
            }
            Err(error) => {
                tracing::warn!(%cluster, %error, "unable to read report in batch");
                errors.push(name);
                continue;
            }
        };

        match RawValue::from_string(report.into_string()) {
            Ok(report) => {
                clusters.push(cluster.clone());
                reports.insert(cluster, report);
            }
            Err(error) => {
                tracing::warn!(%cluster, %error, "stored report is not valid JSON");
                errors.push(name);
            }
        }
    }

    ClusterReports {
        clusters,
        errors,
        reports,
        generated_at: format_timestamp(state.clock.now()),
        status: STATUS_OK,
    }
}

/// `GET` and `POST /clusters` with `{"clusters": [...]}` in the body.
pub async fn reports_for_clusters(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<ApiJson<ClusterReports>, AppError> {
    let list: ClusterList = parse_body(&body)?;
    Ok(ApiJson(collect_reports(&state, list.clusters).await))
}

pub async fn reports_for_organization(
    State(state): State<AppState>,
    Path(organization): Path<String>,
) -> Result<ApiJson<ClusterReports>, AppError> {
    let org = validate_org_id(&organization)?;
    let clusters = state.orgs.list_of_clusters_for_org(org).await?;

    let names = clusters.into_iter().map(|cluster| cluster.as_str().to_string());
    Ok(ApiJson(collect_reports(&state, names).await))
}
