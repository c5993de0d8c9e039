// Copyright 2025 Memophor Labs
// SPDX-License-Identifier: Apache-2.0

//! Rule groups file.
//!
//! A YAML mapping from group key to `{name, description, tags}`. Groups are
//! listed in key order.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::model::Group;

pub fn parse_groups(raw: &str) -> Result<Vec<Group>> {
    let groups: BTreeMap<String, Group> =
        serde_yaml::from_str(raw).context("unable to parse groups configuration")?;
    Ok(groups.into_values().collect())
}

pub fn load_groups(path: &Path) -> Result<Vec<Group>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("unable to read groups configuration file {}", path.display()))?;
    let groups = parse_groups(&raw)?;
    tracing::info!(count = groups.len(), path = %path.display(), "rule groups loaded");
    Ok(groups)
}
