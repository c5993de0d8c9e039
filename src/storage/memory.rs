// Copyright 2025 Memophor Labs
// SPDX-License-Identifier: Apache-2.0

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::{DateTime, Timelike, Utc};

use super::{OrgDirectory, PredictionStore, ReportStore, StorageError};
use crate::clock::SharedClock;
use crate::model::{ClusterName, ClusterReport, OrgId, UpgradeRiskPrediction};
use crate::validation::validate_cluster_name;

pub const FORBIDDEN_ORG_MESSAGE: &str = "You have no permissions to get or change info about this organization";

const ALLOWED_ORG: OrgId = OrgId(11789772);
const FORBIDDEN_ORG: OrgId = OrgId(11940171);

const ORG_CLUSTERS: [&str; 5] = [
    "34c3ecc5-624a-49a5-bab8-4fdc5e51a266",
    "74ae54aa-6577-4e80-85e7-697cb646ff37",
    "a7467445-8d6a-43cc-b82c-7007664bdf69",
    "ee7d2bf4-8933-4a3a-8634-3328fe806e08",
    "eeeeeeee-eeee-eeee-eeee-000000000001",
];

const PLACEHOLDER_ORG: OrgId = OrgId(42);

const CHANGING_CLUSTERS: &[(&str, &[&str])] = &[
    (
        "cccccccc-cccc-cccc-cccc-000000000001",
        &[
            "34c3ecc5-624a-49a5-bab8-4fdc5e51a266",
            "74ae54aa-6577-4e80-85e7-697cb646ff37",
            "a7467445-8d6a-43cc-b82c-7007664bdf69",
            "ee7d2bf4-8933-4a3a-8634-3328fe806e08",
        ],
    ),
    (
        "cccccccc-cccc-cccc-cccc-000000000002",
        &[
            "34c3ecc5-624a-49a5-bab8-4fdc5e51a266",
            "74ae54aa-6577-4e80-85e7-697cb646ff37",
        ],
    ),
];

const BUCKET_MINUTES: u32 = 15;

/// Maps a changing cluster onto the fixture it stands for at `now`; any other
/// cluster maps onto itself.
pub fn resolve_changing_cluster(cluster: &str, now: DateTime<Utc>) -> &str {
    let Some((_, candidates)) = CHANGING_CLUSTERS.iter().find(|(name, _)| *name == cluster) else {
        return cluster;
    };

    let bucket = (now.minute() / BUCKET_MINUTES) as usize;
    candidates[bucket % candidates.len()]
}

/// Report fixtures held in memory, plus the fixed organization tables.
pub struct MemoryStorage {
    reports: HashMap<ClusterName, ClusterReport>,
    clock: SharedClock,
}

impl MemoryStorage {
    /// Reads every `report_<cluster>.json` below `dir`.
    pub fn load(dir: &Path, clock: SharedClock) -> Result<Self> {
        let entries = fs::read_dir(dir)
            .with_context(|| format!("unable to read mock data directory {}", dir.display()))?;

        let mut reports = HashMap::new();
        for entry in entries {
            let path = entry?.path();
            let Some(cluster) = path
                .file_name()
                .and_then(|name| name.to_str())
                .and_then(|name| name.strip_prefix("report_"))
                .and_then(|name| name.strip_suffix(".json"))
            else {
                continue;
            };

            let Ok(cluster) = validate_cluster_name(cluster) else {
                tracing::warn!(path = %path.display(), "skipping report fixture with malformed cluster name");
                continue;
            };

            let raw = fs::read_to_string(&path)
                .with_context(|| format!("unable to read report fixture {}", path.display()))?;
            reports.insert(cluster, ClusterReport::new(raw));
        }

        tracing::info!(count = reports.len(), dir = %dir.display(), "report fixtures loaded");

        Ok(Self { reports, clock })
    }

    pub fn from_reports<I>(reports: I, clock: SharedClock) -> Self
    where
        I: IntoIterator<Item = (ClusterName, ClusterReport)>,
    {
        Self {
            reports: reports.into_iter().collect(),
            clock,
        }
    }

    pub fn reports_count(&self) -> usize {
        self.reports.len()
    }

    fn lookup(&self, cluster: &ClusterName) -> Option<&ClusterReport> {
        let resolved = resolve_changing_cluster(cluster.as_str(), self.clock.now());
        if resolved != cluster.as_str() {
            tracing::debug!(%cluster, resolved, "changing cluster resolved");
        }
        self.reports.get(resolved)
    }
}

#[async_trait]
impl ReportStore for MemoryStorage {
    async fn read_report_for_cluster(&self, cluster: &ClusterName) -> Result<ClusterReport, StorageError> {
        Ok(self.lookup(cluster).cloned().unwrap_or_default())
    }

    async fn read_report_for_org_and_cluster(
        &self,
        org: OrgId,
        cluster: &ClusterName,
    ) -> Result<ClusterReport, StorageError> {
        if org == FORBIDDEN_ORG {
            return Err(StorageError::Forbidden(FORBIDDEN_ORG_MESSAGE.to_string()));
        }
        self.read_report_for_cluster(cluster).await
    }
}

#[async_trait]
impl OrgDirectory for MemoryStorage {
    async fn list_of_orgs(&self) -> Result<Vec<OrgId>, StorageError> {
        Ok(vec![ALLOWED_ORG, FORBIDDEN_ORG])
    }

    async fn list_of_clusters_for_org(&self, org: OrgId) -> Result<Vec<ClusterName>, StorageError> {
        match org {
            FORBIDDEN_ORG => Err(StorageError::Forbidden(FORBIDDEN_ORG_MESSAGE.to_string())),
            ALLOWED_ORG => Ok(ORG_CLUSTERS.iter().map(|c| ClusterName::new_unchecked(*c)).collect()),
            _ => Ok(Vec::new()),
        }
    }

    async fn get_org_id_by_cluster_id(&self, _cluster: &ClusterName) -> Result<OrgId, StorageError> {
        Ok(PLACEHOLDER_ORG)
    }
}

#[async_trait]
impl PredictionStore for MemoryStorage {
    async fn get_prediction_for_cluster(&self, _cluster: &ClusterName) -> Result<UpgradeRiskPrediction, StorageError> {
        Ok(UpgradeRiskPrediction::recommended())
    }
}
