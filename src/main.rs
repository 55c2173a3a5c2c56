//! srcfix: one-shot source patches for the talent risk dashboard
//!
//! `fix-comments` cleans up the dashboard component and `add-cors-header`
//! lets browsers send an extra header to the API server. Both default to
//! the paths and values they were written for, relative to the working
//! directory.

use anyhow::Result;
use clap::{Parser, Subcommand};
use owo_colors::OwoColorize;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use srcfix::config;

mod commands;

use commands::utils::WriteOptions;

#[derive(Parser)]
#[command(name = "srcfix")]
#[command(about = "One-shot source patches for the talent risk dashboard", long_about = None)]
#[command(version)]
struct Cli {
    /// Log each modification (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Drop the duplicated "// Fetch employees" comment and re-indent apiUrl
    FixComments {
        /// Component file to rewrite
        #[arg(short, long, default_value = config::DASHBOARD_COMPONENT)]
        file: PathBuf,

        /// Show the diff without writing
        #[arg(short = 'n', long)]
        dry_run: bool,

        /// Keep a timestamped copy of the file before writing
        #[arg(short, long, conflicts_with = "dry_run")]
        backup: bool,
    },

    /// Add a header to the CORS allowedHeaders list
    AddCorsHeader {
        /// Server entry file to rewrite
        #[arg(short, long, default_value = config::SERVER_ENTRY)]
        file: PathBuf,

        /// Header name to add
        #[arg(long, default_value = config::CORS_HEADER)]
        header: String,

        /// Existing header to insert after
        #[arg(long, default_value = config::CORS_ANCHOR_HEADER)]
        after: String,

        /// Show the diff without writing
        #[arg(short = 'n', long)]
        dry_run: bool,

        /// Keep a timestamped copy of the file before writing
        #[arg(short, long, conflicts_with = "dry_run")]
        backup: bool,
    },

    /// Show whether each patch is pending or already applied
    Status {
        /// Dashboard component checked by fix-comments
        #[arg(long, default_value = config::DASHBOARD_COMPONENT)]
        component: PathBuf,

        /// Server entry file checked by add-cors-header
        #[arg(long, default_value = config::SERVER_ENTRY)]
        server_entry: PathBuf,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::default().add_directive(level.into()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::FixComments {
            file,
            dry_run,
            backup,
        } => {
            if dry_run {
                println!("{}", "(DRY-RUN MODE - no changes will be made)".blue());
            }
            commands::fix_comments::execute(&file, &WriteOptions { dry_run, backup })?;
        }

        Commands::AddCorsHeader {
            file,
            header,
            after,
            dry_run,
            backup,
        } => {
            if dry_run {
                println!("{}", "(DRY-RUN MODE - no changes will be made)".blue());
            }
            commands::add_cors_header::execute(
                &file,
                &header,
                &after,
                &WriteOptions { dry_run, backup },
            )?;
        }

        Commands::Status {
            component,
            server_entry,
            json,
        } => {
            commands::status::execute(&component, &server_entry, json)?;
        }
    }

    Ok(())
}
