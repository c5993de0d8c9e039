// Copyright 2025 Memophor Labs
// SPDX-License-Identifier: Apache-2.0

//! Service configuration.
//!
//! Layers, lowest first: built-in defaults, a TOML file, then environment
//! variables such as `INSIGHTS_RESULTS_AGGREGATOR_MOCK__SERVER__ADDRESS`.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

pub const ENV_PREFIX: &str = "INSIGHTS_RESULTS_AGGREGATOR_MOCK";
pub const CONFIG_FILE_ENV: &str = "INSIGHTS_RESULTS_AGGREGATOR_MOCK_CONFIG_FILE";
const DEFAULT_CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub content: ContentConfig,
    pub groups: GroupsConfig,
    pub paths: PathsConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub address: String,
    pub api_prefix: String,
    pub api_spec_file: PathBuf,
    /// Enables `PUT /exit`.
    pub debug: bool,
    pub enable_cors: bool,
    pub read_header_timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            address: "localhost:8080".to_string(),
            api_prefix: "/api/insights-results-aggregator/v2".to_string(),
            api_spec_file: PathBuf::from("openapi.json"),
            debug: false,
            enable_cors: false,
            read_header_timeout_secs: 3,
        }
    }
}

impl ServerConfig {
    pub fn read_header_timeout(&self) -> Duration {
        Duration::from_secs(self.read_header_timeout_secs)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentConfig {
    pub path: PathBuf,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("content.json"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GroupsConfig {
    pub path: PathBuf,
}

impl Default for GroupsConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("groups_config.yaml"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    pub mock_data: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            mock_data: PathBuf::from("mock_data"),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub json: bool,
}

impl AppConfig {
    /// Reads `config.toml` if present, or the file named by
    /// `INSIGHTS_RESULTS_AGGREGATOR_MOCK_CONFIG_FILE`, which then must exist.
    pub fn load() -> Result<Self> {
        let (path, required) = match env::var(CONFIG_FILE_ENV) {
            Ok(path) => (path, true),
            Err(_) => (DEFAULT_CONFIG_FILE.to_string(), false),
        };

        Self::from_sources(Some((path.as_str(), required)), environment())
    }

    pub fn from_sources(file: Option<(&str, bool)>, env: Environment) -> Result<Self> {
        let mut builder = Config::builder();
        if let Some((path, required)) = file {
            builder = builder.add_source(File::new(path, FileFormat::Toml).required(required));
        }

        let settings = builder
            .add_source(env)
            .build()
            .context("unable to load configuration")?;

        settings
            .try_deserialize()
            .context("invalid configuration")
    }
}

/// `INSIGHTS_RESULTS_AGGREGATOR_MOCK__SECTION__KEY` style overrides.
pub fn environment() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}
