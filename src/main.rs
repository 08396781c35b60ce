//! `userdir` - one-shot lookups against a user directory document.
#![cfg_attr(not(test), deny(clippy::unwrap_used))]

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use serde_json::json;
use userdir::{DirectoryConfig, SearchCriterion, TracingDiagnostics, open_store};

/// `userdir` command arguments.
#[derive(Debug, Parser)]
#[command(
    name = "userdir",
    about = "Look up users by id or search them by field criteria",
    version
)]
struct Cli {
    /// Path to the JSON user document.
    #[arg(long, value_name = "path", required_unless_present = "config")]
    data: Option<PathBuf>,
    /// Path to a YAML directory configuration. Ignored when `--data` is given.
    #[arg(long, value_name = "path")]
    config: Option<PathBuf>,
    /// Log filter for diagnostics written to stderr.
    #[arg(long, value_name = "filter", default_value = "warn")]
    log_level: String,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Fetch one user by id.
    Get {
        #[arg(value_parser = parse_id_arg)]
        id: i32,
    },
    /// Fetch several users from a comma-separated id list, e.g. `1,2,3`.
    Ids {
        #[arg(value_parser = parse_id_list_arg)]
        ids: IdList,
    },
    /// Search users matching every `field=value` criterion.
    Search {
        #[arg(value_name = "field=value", value_parser = parse_criterion)]
        criteria: Vec<SearchCriterion>,
    },
    /// Print the number of loaded users and the id range.
    Stats,
}

#[derive(Debug, Clone)]
struct IdList(Vec<i32>);

fn parse_id_arg(raw: &str) -> Result<i32, String> {
    userdir::parse_id(raw).map_err(|err| err.to_string())
}

fn parse_id_list_arg(raw: &str) -> Result<IdList, String> {
    userdir::parse_id_list(raw)
        .map(IdList)
        .map_err(|err| err.to_string())
}

fn parse_criterion(raw: &str) -> Result<SearchCriterion, String> {
    raw.split_once('=')
        .map(|(field, value)| SearchCriterion::new(field, value))
        .ok_or_else(|| format!("expected field=value, got {raw:?}"))
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(cli.log_level.as_str())
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config = match (cli.data, cli.config) {
        (Some(path), _) => DirectoryConfig::for_path(path),
        (None, Some(path)) => DirectoryConfig::from_file(&path)
            .with_context(|| format!("loading config {}", path.display()))?,
        (None, None) => anyhow::bail!("either --data or --config is required"),
    };

    let store = open_store(&config, Arc::new(TracingDiagnostics))
        .with_context(|| format!("opening {}", config.source.path.display()))?;

    let output = match cli.command {
        Command::Get { id } => serde_json::to_value(store.get_by_id(id)?)?,
        Command::Ids { ids: IdList(ids) } => json!({ "users": store.get_by_ids(&ids) }),
        Command::Search { criteria } => json!({ "users": store.search(&criteria)? }),
        Command::Stats => {
            let ids = store.ids();
            json!({
                "records": store.len(),
                "min_id": ids.first(),
                "max_id": ids.last(),
            })
        }
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
