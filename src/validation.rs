// Copyright 2025 Memophor Labs
// SPDX-License-Identifier: Apache-2.0

//! Identifier validators.
//!
//! Pure functions turning raw path/body strings into the typed identifiers
//! used by the lookup tables. Each failure is reported as a
//! [`ValidationError`], which handlers surface as HTTP 400.

use std::sync::OnceLock;

use regex::Regex;
use thiserror::Error;
use uuid::Uuid;

use crate::model::{ClusterName, Component, ErrorKey, OrgId, RequestId, RuleSelector};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("invalid cluster name: '{0}'. Error: invalid UUID format")]
    InvalidClusterName(String),
    #[error("invalid request ID: '{0}'")]
    InvalidRequestId(String),
    #[error("invalid rule ID, it must contain only rule ID and error key separated by |")]
    RuleSelectorShape,
    #[error("invalid rule ID, each part of ID must contain only latin characters, number, underscores or dots")]
    RuleSelectorCharacters,
    #[error("invalid rule ID: '{0}'")]
    InvalidRuleId(String),
    #[error("the parameter '{name}' must be a positive integer, got '{value}'")]
    InvalidParam { name: String, value: String },
}

fn rule_part_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[a-zA-Z_0-9.]+$").expect("static regex"))
}

fn request_id_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[a-zA-Z0-9]+$").expect("static regex"))
}

/// Accepts only the hyphenated 8-4-4-4-12 form and returns it unchanged.
pub fn validate_cluster_name(raw: &str) -> Result<ClusterName, ValidationError> {
    // Uuid::try_parse also takes the simple, braced and URN forms; all of
    // them have a different length than the hyphenated one.
    if raw.len() != 36 || Uuid::try_parse(raw).is_err() {
        return Err(ValidationError::InvalidClusterName(raw.to_string()));
    }

    Ok(ClusterName::new_unchecked(raw))
}

pub fn validate_request_id(raw: &str) -> Result<RequestId, ValidationError> {
    if !request_id_pattern().is_match(raw) {
        return Err(ValidationError::InvalidRequestId(raw.to_string()));
    }

    Ok(RequestId::new_unchecked(raw))
}

/// Splits `component|error_key`; both halves must match `[a-zA-Z_0-9.]+`.
pub fn parse_rule_selector(raw: &str) -> Result<(Component, ErrorKey), ValidationError> {
    let parts: Vec<&str> = raw.split('|').collect();
    let [component, error_key] = parts.as_slice() else {
        return Err(ValidationError::RuleSelectorShape);
    };

    let pattern = rule_part_pattern();
    if !pattern.is_match(component) || !pattern.is_match(error_key) {
        return Err(ValidationError::RuleSelectorCharacters);
    }

    Ok((Component::from(*component), ErrorKey::from(*error_key)))
}

/// Parses and returns the selector itself, for handlers keyed by the whole string.
pub fn validate_rule_selector(raw: &str) -> Result<RuleSelector, ValidationError> {
    parse_rule_selector(raw)?;
    Ok(RuleSelector::new_unchecked(raw))
}

/// Rule module optionally followed by `|ERROR_KEY`.
pub fn validate_rule_id(raw: &str) -> Result<String, ValidationError> {
    let valid = match raw.split_once('|') {
        Some(_) => parse_rule_selector(raw).is_ok(),
        None => rule_part_pattern().is_match(raw),
    };

    if !valid {
        return Err(ValidationError::InvalidRuleId(raw.to_string()));
    }

    Ok(raw.to_string())
}

/// Unsigned decimal integer, zero rejected.
pub fn validate_positive_int(name: &str, raw: &str) -> Result<u64, ValidationError> {
    let digits_only = !raw.is_empty() && raw.bytes().all(|b| b.is_ascii_digit());
    match raw.parse::<u64>() {
        Ok(value) if digits_only && value > 0 => Ok(value),
        _ => Err(ValidationError::InvalidParam {
            name: name.to_string(),
            value: raw.to_string(),
        }),
    }
}

pub fn validate_org_id(raw: &str) -> Result<OrgId, ValidationError> {
    let value = validate_positive_int("organization", raw)?;
    u32::try_from(value)
        .map(OrgId)
        .map_err(|_| ValidationError::InvalidParam {
            name: "organization".to_string(),
            value: raw.to_string(),
        })
}
