// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! MEP-Lite CLI - connectivity graphs and riser tag plans from model exports.
//!
//! # Commands
//!
//! - `discover` - Walk the network connected to a seed element and emit node-link JSON
//! - `risers` - Classify the vertical pipes of the exported view and plan their tags
//!
//! Logs go to stderr so stdout can be piped.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use mep_lite_core::{ElementId, ModelSnapshot, ViewRange};
use mep_lite_network::{discover_network, to_edge_list_text, to_node_link_json, DiscoveryOptions};
use mep_lite_risers::{
    classify_view, plan_tags, RiserClassification, RiserOptions, TagPlacement, TagTypeMapping,
};

mod config;
mod error;

use config::Config;
use error::CliError;

#[derive(Parser)]
#[command(name = "mep-lite", version, about = "MEP network discovery and riser tagging")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Discover the network connected to a seed element.
    Discover {
        /// Model export (JSON).
        #[arg(long)]
        model: PathBuf,
        /// Element id to start from.
        #[arg(long)]
        seed: i64,
        /// Output file (stdout when omitted).
        #[arg(long)]
        out: Option<PathBuf>,
        /// Drop system nodes and their edges before output.
        #[arg(long)]
        strip_systems: bool,
        /// Abort once the graph grows past this many nodes.
        #[arg(long)]
        max_nodes: Option<usize>,
        /// Plain-text node and edge listing instead of JSON.
        #[arg(long)]
        text: bool,
    },
    /// Classify vertical pipes in the exported view and plan riser tags.
    Risers {
        /// Model export (JSON).
        #[arg(long)]
        model: PathBuf,
        /// Maximum deviation from plumb, in degrees.
        #[arg(long)]
        tolerance: Option<f64>,
        /// Annotation family of the riser tags.
        #[arg(long)]
        tag_family: Option<String>,
        /// Output file (stdout when omitted).
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

/// JSON report of the `risers` command.
#[derive(Serialize)]
struct RiserReport<'a> {
    model: &'a str,
    view_range: ViewRange,
    pipes_in_view: usize,
    vertical_pipes: usize,
    classification: &'a RiserClassification,
    required_tag_types: Vec<String>,
    tags: Vec<TagPlacement>,
}

fn main() -> ExitCode {
    let config = Config::from_env();
    init_logging(&config);

    let cli = Cli::parse();
    match run(cli.command, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %format!("{err:#}"), "Command failed");
            eprintln!("error: {err:#}");
            let code = err.downcast_ref::<CliError>().map_or(1, CliError::exit_code);
            ExitCode::from(code)
        }
    }
}

fn init_logging(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,mep_lite=debug"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if config.log_json {
        builder.json().init();
    } else {
        builder.pretty().init();
    }
}

fn run(command: Command, config: &Config) -> anyhow::Result<()> {
    match command {
        Command::Discover {
            model,
            seed,
            out,
            strip_systems,
            max_nodes,
            text,
        } => {
            let snapshot = load_model(&model)?;
            let options = DiscoveryOptions {
                max_nodes: max_nodes.or(config.max_nodes),
                source_model: None,
            };
            let mut graph = discover_network(&snapshot, ElementId(seed), &options)
                .map_err(CliError::from)
                .with_context(|| format!("Discovery from element {seed} failed"))?;

            if strip_systems {
                let removed = graph.remove_systems();
                tracing::debug!(removed, "Stripped system nodes");
            }
            tracing::info!(
                nodes = graph.node_count(),
                edges = graph.edge_count(),
                "Network discovered"
            );

            let rendered = if text {
                to_edge_list_text(&graph)
            } else {
                to_node_link_json(&graph).map_err(CliError::from)?
            };
            write_output(out.as_deref(), &rendered)
        }
        Command::Risers {
            model,
            tolerance,
            tag_family,
            out,
        } => {
            let snapshot = load_model(&model)?;
            let options = RiserOptions {
                vertical_tolerance_deg: tolerance.unwrap_or(config.vertical_tolerance_deg),
            };
            let mapping = TagTypeMapping::new(tag_family.unwrap_or_else(|| config.tag_family.clone()));

            let risers = classify_view(&snapshot, &options)
                .map_err(CliError::from)
                .context("Riser classification failed")?;
            let tags = plan_tags(
                &risers.classification,
                &risers.vertical_pipes,
                &risers.view_range,
                &mapping,
            );
            tracing::info!(tags = tags.len(), family = %mapping.family_name, "Riser tags planned");

            let report = RiserReport {
                model: &snapshot.name,
                view_range: risers.view_range,
                pipes_in_view: risers.pipes_in_view,
                vertical_pipes: risers.vertical_pipes.len(),
                classification: &risers.classification,
                required_tag_types: mapping.required_tag_names(),
                tags,
            };
            let rendered = serde_json::to_string_pretty(&report).map_err(CliError::from)?;
            write_output(out.as_deref(), &rendered)
        }
    }
}

fn load_model(path: &Path) -> anyhow::Result<ModelSnapshot> {
    let json = fs::read_to_string(path)
        .map_err(CliError::ModelRead)
        .with_context(|| format!("Loading {}", path.display()))?;
    let snapshot = ModelSnapshot::from_json(&json)
        .map_err(CliError::from)
        .with_context(|| format!("Parsing {}", path.display()))?;
    tracing::info!(
        path = %path.display(),
        model = %snapshot.name,
        elements = snapshot.element_count(),
        "Model loaded"
    );
    Ok(snapshot)
}

fn write_output(out: Option<&Path>, contents: &str) -> anyhow::Result<()> {
    match out {
        Some(path) => {
            fs::write(path, contents)
                .map_err(CliError::Output)
                .with_context(|| format!("Writing {}", path.display()))?;
            tracing::info!(path = %path.display(), bytes = contents.len(), "Output written");
        }
        None => println!("{contents}"),
    }
    Ok(())
}
