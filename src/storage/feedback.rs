// Copyright 2025 Memophor Labs
// SPDX-License-Identifier: Apache-2.0

use async_trait::async_trait;
use serde::Serialize;

use super::{FeedbackStore, MemoryStorage, StorageError};
use crate::model::ClusterName;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(into = "i8")]
pub enum UserVote {
    Dislike,
    #[default]
    None,
    Like,
}

impl From<UserVote> for i8 {
    fn from(vote: UserVote) -> Self {
        match vote {
            UserVote::Dislike => -1,
            UserVote::None => 0,
            UserVote::Like => 1,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserFeedbackOnRule {
    pub cluster: Option<ClusterName>,
    pub rule_id: String,
    pub user_id: String,
    pub message: String,
    pub vote: UserVote,
}

#[async_trait]
impl FeedbackStore for MemoryStorage {
    async fn vote_on_rule(
        &self,
        cluster: &ClusterName,
        rule_id: &str,
        user_id: &str,
        vote: UserVote,
    ) -> Result<(), StorageError> {
        tracing::debug!(%cluster, rule_id, user_id, ?vote, "vote on rule ignored");
        Ok(())
    }

    async fn add_or_update_feedback_on_rule(
        &self,
        cluster: &ClusterName,
        rule_id: &str,
        user_id: &str,
        _message: &str,
    ) -> Result<(), StorageError> {
        tracing::debug!(%cluster, rule_id, user_id, "feedback on rule ignored");
        Ok(())
    }

    async fn get_user_feedback_on_rule(
        &self,
        _cluster: &ClusterName,
        _rule_id: &str,
        _user_id: &str,
    ) -> Result<UserFeedbackOnRule, StorageError> {
        Ok(UserFeedbackOnRule::default())
    }
}
