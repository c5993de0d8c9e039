// Copyright 2025 Memophor Labs
// SPDX-License-Identifier: Apache-2.0

//! Upgrade risks prediction, for one cluster or a batch.
//!
//! A handful of fixed cluster names short-circuit to the failure answers the
//! real service can give, so clients can exercise those paths.

use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use super::common::{parse_body, STATUS_OK};
use super::AppState;
use crate::clock::format_timestamp;
use crate::error::AppError;
use crate::model::{
    Alert, ClusterName, OperatorCondition, UpgradeRiskPrediction, UpgradeRisksPredictors,
};
use crate::response::{empty, ApiJson};
use crate::validation::validate_cluster_name;

const MANAGED_CLUSTER: &str = "6cab9726-c2be-438e-af11-db846a678abb";
const SERVICE_UNAVAILABLE_CLUSTER: &str = "c60ba611-6af4-4d62-9b9e-36344da5e7bc";
const AMS_UNAVAILABLE_CLUSTER: &str = "f0e7c4b3-2fd6-4c4a-9d1a-c7bc6b8e5d21";
const NO_DATA_CLUSTER: &str = "234ec1a1-4679-4122-aacb-f0ae9f9e1a56";
const NOT_RECOMMENDED_CLUSTER: &str = "00000003-eeee-eeee-eeee-000000000001";

const SERVICE_UNAVAILABLE_MESSAGE: &str = "Upgrade Failure Prediction service is unreachable";
const AMS_UNAVAILABLE_MESSAGE: &str = "AMS API is unreachable";
const NO_DATA_MESSAGE: &str = "No data for the cluster";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    Managed,
    ServiceUnavailable,
    AmsUnavailable,
    NoData,
    Lookup,
}

impl Outcome {
    fn of(cluster: &ClusterName) -> Self {
        match cluster.as_str() {
            MANAGED_CLUSTER => Self::Managed,
            SERVICE_UNAVAILABLE_CLUSTER => Self::ServiceUnavailable,
            AMS_UNAVAILABLE_CLUSTER => Self::AmsUnavailable,
            NO_DATA_CLUSTER => Self::NoData,
            _ => Self::Lookup,
        }
    }
}

fn console_url(path: &str) -> String {
    format!("https://console.redhat.com/openshift/insights/advisor/{path}")
}

/// Fixed payload of the cluster that is never recommended for upgrade.
fn not_recommended() -> UpgradeRiskPrediction {
    let alert = |name: &str, namespace: &str, severity: &str| Alert {
        name: name.to_string(),
        namespace: namespace.to_string(),
        severity: severity.to_string(),
        url: console_url(&format!("alerts/{name}")),
    };
    let condition = |name: &str, condition: &str, reason: &str| OperatorCondition {
        name: name.to_string(),
        condition: condition.to_string(),
        reason: reason.to_string(),
        url: console_url(&format!("operators/{name}")),
    };

    UpgradeRiskPrediction {
        recommended: false,
        predictors: UpgradeRisksPredictors {
            alerts: vec![
                alert("APIRemovedInNextEUSReleaseInUse", "openshift-kube-apiserver", "info"),
                alert("KubeDeploymentReplicasMismatch", "openshift-monitoring", "warning"),
                alert("ClusterOperatorDegraded", "openshift-cluster-version", "critical"),
            ],
            operator_conditions: vec![
                condition("authentication", "Degraded", "OAuthServerDeployment_UnavailablePod"),
                condition("etcd", "Degraded", "EtcdMembersDegraded"),
                condition("ingress", "Available", "IngressUnavailable"),
                condition("machine-config", "Failing", "RequiredPoolsFailed"),
            ],
        },
    }
}

async fn lookup(state: &AppState, cluster: &ClusterName) -> Result<UpgradeRiskPrediction, AppError> {
    if cluster.as_str() == NOT_RECOMMENDED_CLUSTER {
        return Ok(not_recommended());
    }

    state
        .predictions
        .get_prediction_for_cluster(cluster)
        .await
        .map_err(|error| {
            tracing::error!(%cluster, %error, "error retrieving upgrade prediction from storage");
            AppError::not_found(error.to_string())
        })
}

#[derive(Serialize)]
pub struct PredictionMeta {
    last_checked_at: String,
}

#[derive(Serialize)]
pub struct ClusterPrediction {
    status: &'static str,
    meta: PredictionMeta,
    upgrade_recommendation: UpgradeRiskPrediction,
}

pub async fn for_cluster(
    State(state): State<AppState>,
    Path(cluster): Path<String>,
) -> Result<Response, AppError> {
    let cluster = validate_cluster_name(&cluster)?;

    match Outcome::of(&cluster) {
        Outcome::Managed => return Ok(empty(StatusCode::NO_CONTENT)),
        Outcome::ServiceUnavailable => return Err(AppError::service_unavailable(SERVICE_UNAVAILABLE_MESSAGE)),
        Outcome::AmsUnavailable => return Err(AppError::service_unavailable(AMS_UNAVAILABLE_MESSAGE)),
        Outcome::NoData => return Err(AppError::not_found(NO_DATA_MESSAGE)),
        Outcome::Lookup => {}
    }

    let upgrade_recommendation = lookup(&state, &cluster).await?;
    Ok(ApiJson(ClusterPrediction {
        status: STATUS_OK,
        meta: PredictionMeta {
            last_checked_at: format_timestamp(state.clock.now()),
        },
        upgrade_recommendation,
    })
    .into_response())
}

#[derive(Deserialize)]
struct ClusterList {
    clusters: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct PredictionEntry {
    cluster_id: ClusterName,
    prediction_status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    upgrade_recommended: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    upgrade_risks_predictors: Option<UpgradeRisksPredictors>,
    #[serde(skip_serializing_if = "Option::is_none")]
    last_checked_at: Option<String>,
}

impl PredictionEntry {
    fn failed(cluster: ClusterName, status: &str) -> Self {
        Self {
            cluster_id: cluster,
            prediction_status: status.to_string(),
            upgrade_recommended: None,
            upgrade_risks_predictors: None,
            last_checked_at: None,
        }
    }
}

#[derive(Serialize)]
pub struct Predictions {
    predictions: Vec<PredictionEntry>,
    status: &'static str,
}

/// Managed clusters are left out of the answer; every other failure is
/// reported per cluster.
pub async fn for_clusters(State(state): State<AppState>, body: Bytes) -> Result<ApiJson<Predictions>, AppError> {
    let list: ClusterList = parse_body(&body)?;
    let clusters = list
        .clusters
        .iter()
        .map(|cluster| validate_cluster_name(cluster))
        .collect::<Result<Vec<_>, _>>()?;

    let checked_at = format_timestamp(state.clock.now());
    let mut predictions = Vec::with_capacity(clusters.len());

    for cluster in clusters {
        let entry = match Outcome::of(&cluster) {
            Outcome::Managed => continue,
            Outcome::ServiceUnavailable => PredictionEntry::failed(cluster, SERVICE_UNAVAILABLE_MESSAGE),
            Outcome::AmsUnavailable => PredictionEntry::failed(cluster, AMS_UNAVAILABLE_MESSAGE),
            Outcome::NoData => PredictionEntry::failed(cluster, NO_DATA_MESSAGE),
            Outcome::Lookup => match lookup(&state, &cluster).await {
                Ok(prediction) => PredictionEntry {
                    cluster_id: cluster,
                    prediction_status: STATUS_OK.to_string(),
                    upgrade_recommended: Some(prediction.recommended),
                    upgrade_risks_predictors: Some(prediction.predictors),
                    last_checked_at: Some(checked_at.clone()),
                },
                Err(error) => PredictionEntry::failed(cluster, &error.to_string()),
            },
        };
        predictions.push(entry);
    }

    Ok(ApiJson(Predictions {
        predictions,
        status: STATUS_OK,
    }))
}
