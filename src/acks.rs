// Copyright 2025 Memophor Labs
// SPDX-License-Identifier: Apache-2.0

//! Rule acknowledgement store.
//!
//! The only table mutated at runtime. Every check-then-write sequence runs
//! under a single write guard so concurrent requests on one selector can not
//! lose updates or create a record twice.

use std::collections::BTreeMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::clock::{format_timestamp, SharedClock};
use crate::model::{Acknowledge, RuleSelector};

pub const DEFAULT_USER: &str = "onlineTester";
pub const DEFAULT_JUSTIFICATION: &str = "?";

const SEED_TIMESTAMP: &str = "2021-09-04T17:11:35.130Z";

const SEEDED_RULES: [&str; 5] = [
    "ccx_rules_ocp.external.rules.nodes_requirements_check.report|NODES_MINIMUM_REQUIREMENTS_NOT_MET",
    "ccx_rules_ocp.external.bug_rules.bug_1766907.report|BUGZILLA_BUG_1766907",
    "ccx_rules_ocp.external.rules.nodes_kubelet_version_check.report|NODE_KUBELET_VERSION",
    "ccx_rules_ocp.external.rules.samples_op_failed_image_import_check.report|SAMPLES_FAILED_IMAGE_IMPORT_ERR",
    "ccx_rules_ocp.external.rules.cluster_wide_proxy_auth_check.report|AUTH_OPERATOR_PROXY_ERROR",
];

#[derive(Clone)]
pub struct AckStore {
    inner: Arc<RwLock<BTreeMap<RuleSelector, Acknowledge>>>,
    clock: SharedClock,
}

#[derive(Debug, Clone)]
pub struct AckWriteOutcome {
    pub record: Acknowledge,
    pub created: bool,
}

impl AckStore {
    pub fn new(clock: SharedClock) -> Self {
        Self {
            inner: Arc::new(RwLock::new(BTreeMap::new())),
            clock,
        }
    }

    /// Store holding the five acknowledgements clients expect at startup.
    pub fn seeded(clock: SharedClock) -> Self {
        let records: BTreeMap<_, _> = SEEDED_RULES
            .iter()
            .enumerate()
            .map(|(index, rule)| {
                let ack = Acknowledge {
                    acknowledged: true,
                    rule: rule.to_string(),
                    justification: format!("Justification{}", index + 1),
                    created_by: format!("tester{}", index + 1),
                    created_at: SEED_TIMESTAMP.to_string(),
                    updated_at: SEED_TIMESTAMP.to_string(),
                };
                (RuleSelector::new_unchecked(*rule), ack)
            })
            .collect();

        Self {
            inner: Arc::new(RwLock::new(records)),
            clock,
        }
    }

    pub async fn list(&self) -> Vec<Acknowledge> {
        self.inner.read().await.values().cloned().collect()
    }

    pub async fn contains(&self, selector: &RuleSelector) -> bool {
        self.inner.read().await.contains_key(selector)
    }

    /// Returns the existing record untouched, or creates one with `justification`.
    pub async fn get_or_create(&self, selector: &RuleSelector, justification: &str) -> AckWriteOutcome {
        let mut guard = self.inner.write().await;
        if let Some(existing) = guard.get(selector) {
            return AckWriteOutcome {
                record: existing.clone(),
                created: false,
            };
        }

        let record = self.new_record(selector, justification);
        guard.insert(selector.clone(), record.clone());
        drop(guard);

        tracing::debug!(rule = %selector, "acknowledgement created");

        AckWriteOutcome {
            record,
            created: true,
        }
    }

    /// Bumps `updated_at` of an existing record, or creates a default one.
    pub async fn touch_or_create(&self, selector: &RuleSelector) -> AckWriteOutcome {
        let now = format_timestamp(self.clock.now());
        let mut guard = self.inner.write().await;

        if let Some(existing) = guard.get_mut(selector) {
            existing.updated_at = now;
            return AckWriteOutcome {
                record: existing.clone(),
                created: false,
            };
        }

        let record = self.new_record(selector, DEFAULT_JUSTIFICATION);
        guard.insert(selector.clone(), record.clone());

        AckWriteOutcome {
            record,
            created: true,
        }
    }

    /// `None` when there is nothing to update. `created_at` is never changed.
    pub async fn update_justification(&self, selector: &RuleSelector, justification: &str) -> Option<Acknowledge> {
        let now = format_timestamp(self.clock.now());
        let mut guard = self.inner.write().await;

        let existing = guard.get_mut(selector)?;
        existing.justification = justification.to_string();
        existing.updated_at = now;

        Some(existing.clone())
    }

    pub async fn delete(&self, selector: &RuleSelector) -> bool {
        self.inner.write().await.remove(selector).is_some()
    }

    fn new_record(&self, selector: &RuleSelector, justification: &str) -> Acknowledge {
        let now = format_timestamp(self.clock.now());
        Acknowledge {
            acknowledged: true,
            rule: selector.to_string(),
            justification: justification.to_string(),
            created_by: DEFAULT_USER.to_string(),
            created_at: now.clone(),
            updated_at: now,
        }
    }
}
