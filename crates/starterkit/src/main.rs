// SPDX-FileCopyrightText: 2026 StarterKit Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! StarterKit - command-line client for the StarterKit website plugin.
//!
//! This is the binary entry point.

#[cfg(not(target_env = "msvc"))]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

mod commands;

use std::io::IsTerminal;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use starterkit_config::StarterKitConfig;
use starterkit_core::{Address, ErrorKind, StarterKitError};
use starterkit_plugin::{RevertClassifier, StarterKitClient};
use starterkit_rpc::JsonRpcTransport;
use tracing::debug;

use crate::commands::OutputMode;

/// StarterKit - read and write website plugin configuration.
#[derive(Parser, Debug)]
#[command(name = "starterkit", version, about, long_about = None)]
struct Cli {
    /// Configuration file to use instead of the standard lookup.
    #[arg(long = "config", global = true, value_name = "PATH")]
    config_path: Option<PathBuf>,

    /// Plugin contract address (overrides plugin.address).
    #[arg(long, global = true)]
    plugin: Option<String>,

    /// Output as JSON.
    #[arg(long, global = true)]
    json: bool,

    /// Disable colors.
    #[arg(long, global = true)]
    plain: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Show plugin metadata.
    Info,
    /// Show the frontend, admin and static-frontend module addresses.
    Modules,
    /// Read or write the configuration of a website version.
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
    /// Ask the contract whether it supports an interface (name or 0x-id).
    Supports {
        interface: String,
    },
    /// Search the local catalog of known interface ids.
    Interfaces {
        query: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigAction {
    /// Print the configuration.
    Get {
        #[arg(long)]
        website: Option<String>,
        #[arg(long, allow_negative_numbers = true)]
        version: Option<String>,
    },
    /// Replace the configuration. No segments writes the site root.
    Set {
        #[arg(long)]
        website: Option<String>,
        #[arg(long, allow_negative_numbers = true)]
        version: Option<String>,
        segments: Vec<String>,
    },
}

/// Process exit code for an error category.
fn exit_code(kind: ErrorKind) -> i32 {
    match kind {
        ErrorKind::MalformedInput | ErrorKind::Config => 2,
        ErrorKind::NotFound => 3,
        ErrorKind::Unauthorized => 4,
        ErrorKind::TransportFailure => 5,
        ErrorKind::Rejected => 6,
        ErrorKind::Abi | ErrorKind::Internal => 1,
    }
}

fn load_config(path: Option<&PathBuf>) -> Result<StarterKitConfig, Vec<starterkit_config::ConfigError>> {
    match path {
        Some(path) => starterkit_config::load_and_validate_path(path),
        None => starterkit_config::load_and_validate(),
    }
}

fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    // `starterkit` prefixes every workspace crate's target.
    let log_level = log_level.to_ascii_lowercase();
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("starterkit={log_level},warn")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

fn connect(
    cli: &Cli,
    config: &StarterKitConfig,
) -> Result<StarterKitClient<JsonRpcTransport>, StarterKitError> {
    let contract = match &cli.plugin {
        Some(text) => text.parse::<Address>()?,
        None => config.plugin.address.ok_or_else(|| {
            StarterKitError::Config(
                "no plugin contract address (use --plugin or set plugin.address)".to_string(),
            )
        })?,
    };
    let transport = JsonRpcTransport::new(&config.rpc)?;
    debug!(%contract, "client ready");
    Ok(StarterKitClient::new(transport, contract)
        .with_classifier(RevertClassifier::new(&config.errors)))
}

async fn run(cli: &Cli, config: &StarterKitConfig, mode: OutputMode) -> Result<String, StarterKitError> {
    match &cli.command {
        Commands::Interfaces { query } => {
            commands::run_interfaces(query.as_deref().unwrap_or(""), mode)
        }
        Commands::Info => commands::run_info(&connect(cli, config)?, mode).await,
        Commands::Modules => commands::run_modules(&connect(cli, config)?, mode).await,
        Commands::Supports { interface } => {
            let id = commands::resolve_interface(interface)?;
            commands::run_supports(&connect(cli, config)?, id, mode).await
        }
        Commands::Config {
            action: ConfigAction::Get { website, version },
        } => {
            let (website, version) =
                commands::resolve_target(website.as_deref(), version.as_deref(), &config.website)?;
            commands::run_config_get(&connect(cli, config)?, website, version, mode).await
        }
        Commands::Config {
            action:
                ConfigAction::Set {
                    website,
                    version,
                    segments,
                },
        } => {
            let (website, version) =
                commands::resolve_target(website.as_deref(), version.as_deref(), &config.website)?;
            commands::run_config_set(&connect(cli, config)?, website, version, segments.clone(), mode)
                .await
        }
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match load_config(cli.config_path.as_ref()) {
        Ok(config) => config,
        Err(errors) => {
            starterkit_config::render_errors(&errors);
            std::process::exit(2);
        }
    };

    init_tracing(&config.client.log_level);

    let mode = OutputMode {
        json: cli.json,
        color: !cli.plain && std::io::stdout().is_terminal(),
    };

    match run(&cli, &config, mode).await {
        Ok(output) => {
            print!("{output}");
            if cli.json {
                println!();
            }
        }
        Err(err) => {
            let kind = err.kind();
            if cli.json {
                let body = serde_json::json!({"error": kind.to_string(), "message": err.to_string()});
                println!("{body}");
            } else if mode.color {
                use colored::Colorize;
                eprintln!("{} {err}", "error:".red().bold());
            } else {
                eprintln!("error: {err}");
            }
            std::process::exit(exit_code(kind));
        }
    }
}
