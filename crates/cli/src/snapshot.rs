// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Parsed-document snapshots

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;
use xml_assist_ast::XmlDocument;
use xml_assist_cst::DocumentCst;

pub type SnapshotResult<T> = Result<T, SnapshotError>;

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("Failed to read snapshot {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid snapshot: {0}")]
    Json(#[from] serde_json::Error),
}

/// CST and AST of one parse of a document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub cst: DocumentCst,
    pub ast: XmlDocument,
}

impl Snapshot {
    pub fn from_json_str(source: &str) -> SnapshotResult<Self> {
        let snapshot: Self = serde_json::from_str(source)?;
        debug!(elements = snapshot.ast.elements.len(), "Loaded snapshot");
        Ok(snapshot)
    }

    pub fn from_path(path: &Path) -> SnapshotResult<Self> {
        let source = std::fs::read_to_string(path).map_err(|source| SnapshotError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&source)
    }
}
