// Copyright 2025 Memophor Labs
// SPDX-License-Identifier: Apache-2.0

//! Storage capabilities used by the handlers.
//!
//! The aggregator's storage surface is split into narrow traits so handlers
//! only see what they use. [`MemoryStorage`] implements all of them.

mod feedback;
mod memory;
mod toggle;

use async_trait::async_trait;
use thiserror::Error;

use crate::error::AppError;
use crate::model::{ClusterName, ClusterReport, OrgId, UpgradeRiskPrediction};

pub use self::feedback::{UserFeedbackOnRule, UserVote};
pub use self::memory::{resolve_changing_cluster, MemoryStorage, FORBIDDEN_ORG_MESSAGE};
pub use self::toggle::{DisabledRule, RuleToggle};

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("{0}")]
    Forbidden(String),
    #[error("{0}")]
    NotFound(String),
}

impl From<StorageError> for AppError {
    fn from(error: StorageError) -> Self {
        match error {
            StorageError::Forbidden(message) => AppError::forbidden(message),
            StorageError::NotFound(message) => AppError::NotFound(message),
        }
    }
}

#[async_trait]
pub trait ReportStore: Send + Sync {
    /// Empty report for a cluster without a fixture.
    async fn read_report_for_cluster(&self, cluster: &ClusterName) -> Result<ClusterReport, StorageError>;

    /// Organization permission check, then the same lookup as above.
    async fn read_report_for_org_and_cluster(
        &self,
        org: OrgId,
        cluster: &ClusterName,
    ) -> Result<ClusterReport, StorageError>;
}

#[async_trait]
pub trait OrgDirectory: Send + Sync {
    async fn list_of_orgs(&self) -> Result<Vec<OrgId>, StorageError>;

    /// Forbidden organizations fail; unknown ones have no clusters.
    async fn list_of_clusters_for_org(&self, org: OrgId) -> Result<Vec<ClusterName>, StorageError>;

    async fn get_org_id_by_cluster_id(&self, cluster: &ClusterName) -> Result<OrgId, StorageError>;
}

#[async_trait]
pub trait PredictionStore: Send + Sync {
    async fn get_prediction_for_cluster(&self, cluster: &ClusterName) -> Result<UpgradeRiskPrediction, StorageError>;
}

/// Rule votes and free-text feedback. The mock keeps nothing.
#[async_trait]
pub trait FeedbackStore: Send + Sync {
    async fn vote_on_rule(
        &self,
        cluster: &ClusterName,
        rule_id: &str,
        user_id: &str,
        vote: UserVote,
    ) -> Result<(), StorageError>;

    async fn add_or_update_feedback_on_rule(
        &self,
        cluster: &ClusterName,
        rule_id: &str,
        user_id: &str,
        message: &str,
    ) -> Result<(), StorageError>;

    async fn get_user_feedback_on_rule(
        &self,
        cluster: &ClusterName,
        rule_id: &str,
        user_id: &str,
    ) -> Result<UserFeedbackOnRule, StorageError>;
}

/// Per-cluster rule enable/disable switches. The mock keeps nothing.
#[async_trait]
pub trait RuleToggleStore: Send + Sync {
    async fn toggle_rule_for_cluster(
        &self,
        cluster: &ClusterName,
        rule_id: &str,
        user_id: &str,
        toggle: RuleToggle,
    ) -> Result<(), StorageError>;

    async fn list_disabled_rules_for_cluster(
        &self,
        cluster: &ClusterName,
        user_id: &str,
    ) -> Result<Vec<DisabledRule>, StorageError>;

    async fn delete_from_rule_cluster_toggle(
        &self,
        cluster: &ClusterName,
        rule_id: &str,
        user_id: &str,
    ) -> Result<(), StorageError>;
}
