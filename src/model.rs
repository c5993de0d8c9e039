// Copyright 2025 Memophor Labs
// SPDX-License-Identifier: Apache-2.0

//! Domain types shared by the tables, the storage layer and the handlers.
//!
//! Identifier newtypes are only constructed through [`crate::validation`]
//! (or by the static tables, whose contents are known to be well formed).

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Wraps `value` without checking it.
            pub fn new_unchecked<T: Into<String>>(value: T) -> Self {
                Self(value.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl Borrow<str> for $name {
            fn borrow(&self) -> &str {
                &self.0
            }
        }
    };
}

string_id!(
    /// Cluster identifier in the hyphenated UUID form.
    ClusterName
);
string_id!(
    /// Alphanumeric tracker of one analysis submission.
    RequestId
);
string_id!(
    /// `component|error_key`.
    RuleSelector
);
string_id!(Component);
string_id!(ErrorKey);

impl From<&str> for Component {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<&str> for ErrorKey {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrgId(pub u32);

impl fmt::Display for OrgId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Report document kept exactly as it was read from disk.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClusterReport(String);

impl ClusterReport {
    pub fn new<T: Into<String>>(raw: T) -> Self {
        Self(raw.into())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

/// Body of every plain status answer, errors included.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StatusResponse {
    pub status: String,
}

impl StatusResponse {
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleHit {
    pub component: Component,
    pub error_key: ErrorKey,
    pub cluster: ClusterName,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SimplifiedRuleHit {
    pub rule_fqdn: String,
    pub error_key: String,
    pub description: String,
    pub total_risk: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Acknowledge {
    #[serde(skip)]
    pub acknowledged: bool,
    pub rule: String,
    pub justification: String,
    pub created_by: String,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct AcknowledgementsMetadata {
    pub count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct AcknowledgementsResponse {
    pub meta: AcknowledgementsMetadata,
    pub data: Vec<Acknowledge>,
}

/// `POST /ack` payload.
#[derive(Debug, Clone, Deserialize)]
pub struct AcknowledgementRequest {
    #[serde(rename = "rule_id")]
    pub rule_selector: String,
    #[serde(default)]
    pub justification: String,
}

/// `PUT /ack/{selector}` payload.
#[derive(Debug, Clone, Deserialize)]
pub struct AcknowledgementJustification {
    #[serde(default)]
    pub justification: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DvoWorkload {
    pub rule: String,
    pub check_description: String,
    pub check_remediation: String,
    pub kind: String,
    pub namespace_uid: String,
    pub uid: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Alert {
    pub name: String,
    pub namespace: String,
    pub severity: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OperatorCondition {
    pub name: String,
    pub condition: String,
    pub reason: String,
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UpgradeRisksPredictors {
    pub alerts: Vec<Alert>,
    pub operator_conditions: Vec<OperatorCondition>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpgradeRiskPrediction {
    #[serde(rename = "upgrade_recommended")]
    pub recommended: bool,
    #[serde(rename = "upgrade_risks_predictors")]
    pub predictors: UpgradeRisksPredictors,
}

impl UpgradeRiskPrediction {
    pub fn recommended() -> Self {
        Self {
            recommended: true,
            predictors: UpgradeRisksPredictors::default(),
        }
    }
}

/// Rule group as listed by `/groups`. Read from YAML as `name`, served as `title`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    #[serde(rename(serialize = "title", deserialize = "name"))]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
}
