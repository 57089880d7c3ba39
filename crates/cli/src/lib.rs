// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # XML Content Assist - CLI support
//!
//! Configuration and input loading for the `xml-assist` binary.
//!
//! The binary works on snapshots: a JSON file holding a parsed document as
//! `{ "cst": ..., "ast": ... }`, as produced by an editor-side parser.

pub mod config;
pub mod output;
pub mod snapshot;

pub use config::{CliConfig, ConfigError};
pub use output::{ValidationReport, render_context, render_issues};
pub use snapshot::{Snapshot, SnapshotError, SnapshotResult};

/// Install the global `tracing` subscriber
///
/// `RUST_LOG` wins over `default_filter` when set. Logs go to stderr so
/// command output on stdout stays machine-readable.
pub fn init_tracing(default_filter: &str) {
    use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .init();
}
