// Copyright 2025 Memophor Labs
// SPDX-License-Identifier: Apache-2.0

use async_trait::async_trait;
use serde::Serialize;

use super::{MemoryStorage, RuleToggleStore, StorageError};
use crate::model::ClusterName;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleToggle {
    Enable,
    Disable,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisabledRule {
    pub rule_id: String,
    pub description: String,
    pub details: String,
    pub disabled_at: String,
}

#[async_trait]
impl RuleToggleStore for MemoryStorage {
    async fn toggle_rule_for_cluster(
        &self,
        cluster: &ClusterName,
        rule_id: &str,
        user_id: &str,
        toggle: RuleToggle,
    ) -> Result<(), StorageError> {
        tracing::debug!(%cluster, rule_id, user_id, ?toggle, "rule toggle ignored");
        Ok(())
    }

    async fn list_disabled_rules_for_cluster(
        &self,
        _cluster: &ClusterName,
        _user_id: &str,
    ) -> Result<Vec<DisabledRule>, StorageError> {
        Ok(Vec::new())
    }

    async fn delete_from_rule_cluster_toggle(
        &self,
        _cluster: &ClusterName,
        _rule_id: &str,
        _user_id: &str,
    ) -> Result<(), StorageError> {
        Ok(())
    }
}
