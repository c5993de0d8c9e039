// Copyright 2025 Memophor Labs
// SPDX-License-Identifier: Apache-2.0

//! Canned, read-only lookup tables.
//!
//! Everything is built once by [`Tables::seeded`] and shared through the
//! application state. Lookups are linear scans or hash probes over a few
//! hundred entries at most.

mod dvo_workloads;
mod request_ids;
mod rule_hits;
mod simplified_rule_hits;

use std::collections::{BTreeMap, HashMap};

use crate::model::{ClusterName, Component, DvoWorkload, ErrorKey, RequestId, RuleHit, SimplifiedRuleHit};

use self::simplified_rule_hits::ResultsByRequest;

#[derive(Debug, Clone)]
pub struct Tables {
    rule_hits: Vec<RuleHit>,
    request_ids: HashMap<ClusterName, Vec<RequestId>>,
    simplified_rule_hits: HashMap<ClusterName, ResultsByRequest>,
    dvo_workloads: BTreeMap<ClusterName, Vec<DvoWorkload>>,
}

impl Tables {
    pub fn seeded() -> Self {
        Self {
            rule_hits: rule_hits::load(),
            request_ids: request_ids::load(),
            simplified_rule_hits: simplified_rule_hits::load(),
            dvo_workloads: dvo_workloads::load(),
        }
    }

    /// Clusters hitting the rule, in table order, duplicates kept.
    pub fn clusters_hitting_rule(&self, component: &Component, error_key: &ErrorKey) -> Vec<ClusterName> {
        self.rule_hits
            .iter()
            .filter(|hit| &hit.component == component && &hit.error_key == error_key)
            .map(|hit| hit.cluster.clone())
            .collect()
    }

    /// `None` for a cluster the table does not know; `Some(&[])` for a known
    /// cluster without any request.
    pub fn request_ids_for_cluster(&self, cluster: &str) -> Option<&[RequestId]> {
        self.request_ids.get(cluster).map(Vec::as_slice)
    }

    pub fn simplified_rule_hits(&self, cluster: &str, request_id: &str) -> Option<&[SimplifiedRuleHit]> {
        self.simplified_rule_hits
            .get(cluster)?
            .as_ref()?
            .get(request_id)
            .map(Vec::as_slice)
    }

    pub fn dvo_workloads_for_cluster(&self, cluster: &str) -> Option<&[DvoWorkload]> {
        self.dvo_workloads.get(cluster).map(Vec::as_slice)
    }

    /// All DVO records, clusters in ascending order.
    pub fn dvo_workloads(&self) -> impl Iterator<Item = (&ClusterName, &[DvoWorkload])> {
        self.dvo_workloads
            .iter()
            .map(|(cluster, workloads)| (cluster, workloads.as_slice()))
    }
}

impl Default for Tables {
    fn default() -> Self {
        Self::seeded()
    }
}
