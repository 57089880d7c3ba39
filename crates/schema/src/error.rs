// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details
//
//! # Error types for schema loading
//!
//! Validation findings are not errors; they are reported as
//! [`crate::ValidationIssue`]s. These errors only cover reading a schema.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for schema operations
pub type SchemaResult<T> = Result<T, SchemaError>;

/// Errors that can occur while loading a schema
#[derive(Debug, Error)]
pub enum SchemaError {
    /// Schema file could not be read
    #[error("Failed to read schema file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// YAML schema is malformed (includes invalid value patterns)
    #[error("Invalid YAML schema: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON schema is malformed (includes invalid value patterns)
    #[error("Invalid JSON schema: {0}")]
    Json(#[from] serde_json::Error),

    /// File extension is neither YAML nor JSON
    #[error("Unsupported schema format: {0} (expected .yaml, .yml or .json)")]
    UnsupportedFormat(String),
}
