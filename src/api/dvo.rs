// Copyright 2025 Memophor Labs
// SPDX-License-Identifier: Apache-2.0

//! DVO (deployment validation operator) namespaces.
//!
//! Everything here is aggregated on the fly from the canned workload table:
//! one namespace per distinct `namespace_uid`, one recommendation per
//! distinct rule within a namespace.

use std::collections::{BTreeMap, HashSet};

use axum::extract::{Path, State};
use serde::Serialize;

use super::common::STATUS_OK;
use super::AppState;
use crate::clock::format_timestamp;
use crate::error::AppError;
use crate::model::DvoWorkload;
use crate::response::ApiJson;
use crate::validation::validate_cluster_name;

const HIGHEST_SEVERITY: u8 = 4;

#[derive(Debug, Serialize)]
pub struct ClusterEntry {
    uuid: String,
    display_name: String,
}

impl ClusterEntry {
    fn new(cluster: &str) -> Self {
        Self {
            uuid: cluster.to_string(),
            display_name: format!("Cluster name {cluster}"),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct NamespaceEntry {
    uuid: String,
    name: String,
}

impl NamespaceEntry {
    fn new(namespace: &str) -> Self {
        Self {
            uuid: namespace.to_string(),
            name: format!("Namespace name {namespace}"),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MetadataEntry {
    recommendations: usize,
    objects: usize,
    reported_at: String,
    last_checked_at: String,
    highest_severity: u8,
    hits_by_severity: BTreeMap<&'static str, usize>,
}

impl MetadataEntry {
    /// All hits are reported at the highest severity.
    fn new(workloads: &[DvoWorkload], namespace: &str, checked_at: &str) -> Self {
        let recommendations = recommendation_count(workloads, namespace);
        Self {
            recommendations,
            objects: object_count(workloads, namespace),
            reported_at: checked_at.to_string(),
            last_checked_at: checked_at.to_string(),
            highest_severity: HIGHEST_SEVERITY,
            hits_by_severity: BTreeMap::from([("1", 0), ("2", 0), ("3", 0), ("4", recommendations)]),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct Workload {
    cluster: ClusterEntry,
    namespace: NamespaceEntry,
    metadata: MetadataEntry,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct DvoObject {
    kind: String,
    uid: String,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct DvoRecommendation {
    check: String,
    description: String,
    resolution: String,
    objects: Vec<DvoObject>,
}

/// Distinct namespaces in order of first appearance.
pub fn namespaces(workloads: &[DvoWorkload]) -> Vec<&str> {
    let mut seen = HashSet::new();
    workloads
        .iter()
        .map(|workload| workload.namespace_uid.as_str())
        .filter(|namespace| seen.insert(*namespace))
        .collect()
}

fn in_namespace<'a>(workloads: &'a [DvoWorkload], namespace: &'a str) -> impl Iterator<Item = &'a DvoWorkload> {
    workloads
        .iter()
        .filter(move |workload| workload.namespace_uid == namespace)
}

pub fn recommendation_count(workloads: &[DvoWorkload], namespace: &str) -> usize {
    in_namespace(workloads, namespace)
        .map(|workload| workload.rule.as_str())
        .collect::<HashSet<_>>()
        .len()
}

pub fn object_count(workloads: &[DvoWorkload], namespace: &str) -> usize {
    in_namespace(workloads, namespace).count()
}

/// One recommendation per rule, in order of first appearance, each carrying
/// every object of the namespace flagged by that rule.
pub fn recommendations_for_namespace(workloads: &[DvoWorkload], namespace: &str) -> Vec<DvoRecommendation> {
    let mut seen = HashSet::new();
    in_namespace(workloads, namespace)
        .filter(|workload| seen.insert(workload.rule.as_str()))
        .map(|workload| DvoRecommendation {
            check: workload.rule.clone(),
            description: workload.check_description.clone(),
            resolution: workload.check_remediation.clone(),
            objects: in_namespace(workloads, namespace)
                .filter(|other| other.rule == workload.rule)
                .map(|other| DvoObject {
                    kind: other.kind.clone(),
                    uid: other.uid.clone(),
                })
                .collect(),
        })
        .collect()
}

#[derive(Serialize)]
pub struct AllNamespaces {
    status: &'static str,
    workloads: Vec<Workload>,
}

pub async fn all_namespaces(State(state): State<AppState>) -> ApiJson<AllNamespaces> {
    let checked_at = format_timestamp(state.clock.now());

    let workloads = state
        .tables
        .dvo_workloads()
        .flat_map(|(cluster, workloads)| {
            let checked_at = checked_at.as_str();
            namespaces(workloads).into_iter().map(move |namespace| Workload {
                cluster: ClusterEntry::new(cluster.as_str()),
                namespace: NamespaceEntry::new(namespace),
                metadata: MetadataEntry::new(workloads, namespace, checked_at),
            })
        })
        .collect();

    ApiJson(AllNamespaces {
        status: STATUS_OK,
        workloads,
    })
}

#[derive(Serialize)]
pub struct NamespaceDetail {
    status: &'static str,
    cluster: ClusterEntry,
    namespace: NamespaceEntry,
    metadata: MetadataEntry,
    recommendations: Vec<DvoRecommendation>,
}

fn namespace_detail(state: &AppState, cluster: &str, namespace: &str) -> Result<ApiJson<NamespaceDetail>, AppError> {
    let cluster = validate_cluster_name(cluster)?;
    let workloads = state
        .tables
        .dvo_workloads_for_cluster(cluster.as_str())
        .ok_or_else(|| AppError::not_found(format!("DVO namespaces for cluster {cluster} not found")))?;

    let checked_at = format_timestamp(state.clock.now());
    Ok(ApiJson(NamespaceDetail {
        status: STATUS_OK,
        cluster: ClusterEntry::new(cluster.as_str()),
        namespace: NamespaceEntry::new(namespace),
        metadata: MetadataEntry::new(workloads, namespace, &checked_at),
        recommendations: recommendations_for_namespace(workloads, namespace),
    }))
}

pub async fn namespace_for_cluster(
    State(state): State<AppState>,
    Path((cluster, namespace)): Path<(String, String)>,
) -> Result<ApiJson<NamespaceDetail>, AppError> {
    namespace_detail(&state, &cluster, &namespace)
}

pub async fn cluster_for_namespace(
    State(state): State<AppState>,
    Path((namespace, cluster)): Path<(String, String)>,
) -> Result<ApiJson<NamespaceDetail>, AppError> {
    namespace_detail(&state, &cluster, &namespace)
}
