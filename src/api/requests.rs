// Copyright 2025 Memophor Labs
// SPDX-License-Identifier: Apache-2.0

//! Request IDs (archives sent by a cluster) and their simplified results.

use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

use super::common::{parse_body, STATUS_OK};
use super::AppState;
use crate::clock::format_timestamp;
use crate::error::AppError;
use crate::model::{ClusterName, RequestId, SimplifiedRuleHit};
use crate::response::ApiJson;
use crate::validation::{validate_cluster_name, validate_request_id};

const STATUS_PROCESSED: &str = "processed";
const STATUS_UNKNOWN: &str = "unknown";

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct RequestEntry {
    #[serde(rename = "requestID")]
    request_id: RequestId,
    valid: bool,
    received: String,
    processed: String,
}

/// Request `index` of a cluster arrived `(index + 1) * 10` minutes before
/// `now` and took thirty seconds to process.
fn request_entry(request_id: &RequestId, index: usize, now: DateTime<Utc>) -> RequestEntry {
    let received = now - Duration::minutes(10 * (index as i64 + 1));
    RequestEntry {
        request_id: request_id.clone(),
        valid: true,
        received: format_timestamp(received),
        processed: format_timestamp(received + Duration::seconds(30)),
    }
}

#[derive(Serialize)]
pub struct RequestList {
    cluster: ClusterName,
    requests: Vec<RequestEntry>,
    status: &'static str,
}

fn known_requests<'a>(state: &'a AppState, cluster: &ClusterName) -> Result<&'a [RequestId], AppError> {
    state
        .tables
        .request_ids_for_cluster(cluster.as_str())
        .ok_or_else(|| AppError::not_found(format!("cluster {cluster} not found")))
}

pub async fn list(
    State(state): State<AppState>,
    Path(cluster): Path<String>,
) -> Result<ApiJson<RequestList>, AppError> {
    let cluster = validate_cluster_name(&cluster)?;
    let now = state.clock.now();

    let requests = known_requests(&state, &cluster)?
        .iter()
        .enumerate()
        .map(|(index, request_id)| request_entry(request_id, index, now))
        .collect();

    Ok(ApiJson(RequestList {
        cluster,
        requests,
        status: STATUS_OK,
    }))
}

/// Body is a JSON array of request IDs; only the ones owned by the cluster
/// are listed, in the order they were asked for.
pub async fn filter(
    State(state): State<AppState>,
    Path(cluster): Path<String>,
    body: Bytes,
) -> Result<ApiJson<RequestList>, AppError> {
    let cluster = validate_cluster_name(&cluster)?;
    let owned = known_requests(&state, &cluster)?;

    let wanted: Vec<String> = parse_body(&body)?;
    let wanted = wanted
        .iter()
        .map(|raw| validate_request_id(raw))
        .collect::<Result<Vec<_>, _>>()?;

    let now = state.clock.now();
    let requests = wanted
        .iter()
        .filter_map(|request_id| {
            owned
                .iter()
                .position(|candidate| candidate == request_id)
                .map(|index| request_entry(request_id, index, now))
        })
        .collect();

    Ok(ApiJson(RequestList {
        cluster,
        requests,
        status: STATUS_OK,
    }))
}

#[derive(Serialize)]
pub struct RequestStatus {
    cluster: ClusterName,
    #[serde(rename = "requestID")]
    request_id: RequestId,
    status: &'static str,
}

pub async fn status(
    State(state): State<AppState>,
    Path((cluster, request_id)): Path<(String, String)>,
) -> Result<ApiJson<RequestStatus>, AppError> {
    let cluster = validate_cluster_name(&cluster)?;
    let request_id = validate_request_id(&request_id)?;

    let status = if known_requests(&state, &cluster)?.contains(&request_id) {
        STATUS_PROCESSED
    } else {
        STATUS_UNKNOWN
    };

    Ok(ApiJson(RequestStatus {
        cluster,
        request_id,
        status,
    }))
}

#[derive(Serialize)]
pub struct RequestReport<'a> {
    cluster: ClusterName,
    #[serde(rename = "requestID")]
    request_id: RequestId,
    status: &'static str,
    report: Option<&'a [SimplifiedRuleHit]>,
}

/// `report` is `null` when no simplified results exist for the pair.
pub async fn report(
    State(state): State<AppState>,
    Path((cluster, request_id)): Path<(String, String)>,
) -> Result<Response, AppError> {
    let cluster = validate_cluster_name(&cluster)?;
    let request_id = validate_request_id(&request_id)?;
    known_requests(&state, &cluster)?;

    let report = state
        .tables
        .simplified_rule_hits(cluster.as_str(), request_id.as_str());

    Ok(ApiJson(RequestReport {
        cluster,
        request_id,
        status: STATUS_PROCESSED,
        report,
    })
    .into_response())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn request_timestamps_step_back_ten_minutes() {
        let now = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let request_id = RequestId::new_unchecked("3nl2vda87ld6e3s25jlk7n2dna");

        let first = request_entry(&request_id, 0, now);
        let third = request_entry(&request_id, 2, now);

        assert_eq!(first.received, "2024-05-01T11:50:00Z");
        assert_eq!(first.processed, "2024-05-01T11:50:30Z");
        assert_eq!(third.received, "2024-05-01T11:30:00Z");
        assert!(first.valid);
    }
}
