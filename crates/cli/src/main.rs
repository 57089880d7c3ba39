// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! `xml-assist` command-line tool

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use tracing::{debug, info};
use xml_assist_cli::{CliConfig, Snapshot, init_tracing, render_context, render_issues};
use xml_assist_schema::{SchemaElement, SchemaValidator};

#[derive(Parser)]
#[command(name = "xml-assist")]
#[command(about = "Completion context and schema validation for parsed XML documents")]
#[command(version)]
#[command(
    long_about = "Works on snapshot files: JSON documents of the form {\"cst\": ..., \"ast\": ...}.\n\
\n\
Examples:\n  \
xml-assist context --input note.json --offset 42\n  \
xml-assist validate --input person.json --schema person.yaml"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path
    #[arg(short, long, global = true, env = "XML_ASSIST_CONFIG")]
    config: Option<PathBuf>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pretty: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the completion context at a cursor offset
    Context {
        /// Snapshot file
        #[arg(short, long)]
        input: PathBuf,

        /// Zero-based character offset of the cursor
        #[arg(short, long)]
        offset: usize,
    },

    /// Validate a snapshot document against a schema
    Validate {
        /// Snapshot file
        #[arg(short, long)]
        input: PathBuf,

        /// Schema file (.yaml, .yml or .json)
        #[arg(short, long)]
        schema: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("error: {err:#}");
            return ExitCode::FAILURE;
        }
    };
    init_tracing(&config.log_filter);

    match run(cli, config) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn load_config(path: Option<&std::path::Path>) -> Result<CliConfig> {
    let config = match path {
        Some(path) => CliConfig::from_path(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => CliConfig::default(),
    };
    config.validate()?;
    Ok(config)
}

fn run(cli: Cli, config: CliConfig) -> Result<ExitCode> {
    let pretty = cli.pretty || config.pretty;

    match cli.command {
        Commands::Context { input, offset } => {
            let snapshot = Snapshot::from_path(&input)?;
            debug!(offset, input = %input.display(), "Resolving completion context");

            println!("{}", render_context(&snapshot, offset, pretty)?);
            Ok(ExitCode::SUCCESS)
        }

        Commands::Validate { input, schema } => {
            let Some(schema_path) = schema.or(config.schema) else {
                bail!("No schema given; pass --schema or set `schema` in the config file");
            };
            let schema = SchemaElement::from_path(&schema_path)
                .with_context(|| format!("Failed to load schema {}", schema_path.display()))?;
            let snapshot = Snapshot::from_path(&input)?;

            let report = render_issues(&snapshot, &SchemaValidator::new(schema), pretty)?;
            info!(issues = report.issue_count, "Validation complete");
            println!("{}", report.json);

            Ok(if report.has_errors {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            })
        }
    }
}
