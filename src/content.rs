// Copyright 2025 Memophor Labs
// SPDX-License-Identifier: Apache-2.0

//! Rule content file: a JSON array served back untouched by `/content`.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde_json::Value;

pub fn parse_content(raw: &str) -> Result<Vec<Value>> {
    let value: Value = serde_json::from_str(raw).context("unable to parse rule content")?;
    match value {
        Value::Array(items) => Ok(items),
        other => bail!("rule content must be a JSON array, got {}", kind(&other)),
    }
}

pub fn load_content(path: &Path) -> Result<Vec<Value>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("unable to read rule content file {}", path.display()))?;
    let content = parse_content(&raw)?;
    tracing::info!(rules = content.len(), path = %path.display(), "rule content loaded");
    Ok(content)
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
