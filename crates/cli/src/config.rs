// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # CLI Configuration
//!
//! Optional YAML file with defaults for the command-line flags.
//!
//! ## Example
//!
//! ```yaml
//! log_filter: xml_assist=debug
//! pretty: true
//! schema: schemas/person.yaml
//! ```
//!
//! Every key is optional. Flags given on the command line take precedence.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    /// `tracing` filter directive used when `RUST_LOG` is unset
    pub log_filter: String,

    /// Pretty-print JSON output
    pub pretty: bool,

    /// Schema used by `validate` when `--schema` is not given
    pub schema: Option<PathBuf>,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_filter: "warn".to_string(),
            pretty: false,
            schema: None,
        }
    }
}

impl CliConfig {
    pub fn from_yaml_str(source: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(source)?)
    }

    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&source)
    }

    /// Validate the configuration
    ///
    /// Checks that:
    /// - the log filter parses as an `EnvFilter` directive
    /// - the schema path, if any, has a YAML or JSON extension
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Err(err) = EnvFilter::try_new(&self.log_filter) {
            return Err(ConfigError::InvalidLogFilter {
                filter: self.log_filter.clone(),
                reason: err.to_string(),
            });
        }

        if let Some(schema) = &self.schema {
            let ext = schema.extension().and_then(|ext| ext.to_str());
            if !matches!(ext, Some("yaml" | "yml" | "json")) {
                return Err(ConfigError::InvalidSchemaPath {
                    path: schema.clone(),
                });
            }
        }

        Ok(())
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Invalid log filter '{filter}': {reason}")]
    InvalidLogFilter { filter: String, reason: String },

    #[error("Schema path {} must end in .yaml, .yml or .json", path.display())]
    InvalidSchemaPath { path: PathBuf },
}
