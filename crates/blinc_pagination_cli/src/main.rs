//! Blinc Pagination CLI
//!
//! Inspect the pagination view for a set of props and replay scripted
//! interaction sessions.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use blinc_pagination::{Pagination, PaginationConfig, PaginationProps};

mod render;
mod script;

use render::render_line;
use script::{replay, Script};

/// Looked up in the working directory when `--config` is not given
const DEFAULT_CONFIG_FILE: &str = "pagination.toml";

#[derive(Parser)]
#[command(name = "blinc-pagination")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Blinc pagination inspector", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file (defaults to ./pagination.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the pagination bar for the given props
    Show {
        /// Comma separated page sizes (defaults to the configured sizes)
        #[arg(long, value_delimiter = ',')]
        page_sizes: Option<Vec<usize>>,

        /// Total number of items
        #[arg(long)]
        total_items: Option<usize>,

        /// Controlled page
        #[arg(long)]
        page: Option<usize>,

        /// Controlled page size
        #[arg(long)]
        page_size: Option<usize>,

        /// Hide the page count
        #[arg(long)]
        pages_unknown: bool,

        /// The current page is the last one (with --pages-unknown)
        #[arg(long)]
        last_page: bool,

        /// Render disabled
        #[arg(long)]
        disabled: bool,

        /// Print the view as JSON
        #[arg(long)]
        json: bool,
    },

    /// Replay an interaction script
    Replay {
        /// Script file (TOML)
        script: PathBuf,

        /// Print step records as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Show {
            page_sizes,
            total_items,
            page,
            page_size,
            pages_unknown,
            last_page,
            disabled,
            json,
        } => {
            let mut props =
                PaginationProps::new(page_sizes.unwrap_or_else(|| config.defaults.page_sizes.clone()))
                    .pages_unknown(pages_unknown)
                    .disabled(disabled)
                    .text(config.text());
            if props.page_sizes.is_empty() {
                anyhow::bail!("--page-sizes must list at least one size");
            }
            props.total_items = total_items;
            props.page = page;
            props.page_size = page_size;
            if last_page {
                if !pages_unknown {
                    warn!("--last-page only applies with --pages-unknown");
                }
                props = props.is_last_page(true);
            }
            cmd_show(props, json)
        }
        Commands::Replay { script, json } => cmd_replay(&script, &config, json),
    }
}

fn load_config(path: Option<&Path>) -> Result<PaginationConfig> {
    let path = match path {
        Some(path) => path.to_path_buf(),
        None => {
            let fallback = PathBuf::from(DEFAULT_CONFIG_FILE);
            if !fallback.exists() {
                return Ok(PaginationConfig::default());
            }
            fallback
        }
    };

    let config = PaginationConfig::load(&path)
        .with_context(|| format!("Failed to load config {}", path.display()))?;
    info!("Using config {}", path.display());
    Ok(config)
}

fn cmd_show(props: PaginationProps, json: bool) -> Result<()> {
    let view = Pagination::new(props).view();
    if json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        println!("{}", render_line(&view));
    }
    Ok(())
}

fn cmd_replay(path: &Path, config: &PaginationConfig, json: bool) -> Result<()> {
    let script = Script::load(path)?;
    let records = replay(script, config);

    if json {
        println!("{}", serde_json::to_string_pretty(&records)?);
        return Ok(());
    }

    for record in &records {
        println!("#{} {:?}", record.index, record.step);
        for change in &record.changes {
            println!("   on_change page={} page_size={}", change.page, change.page_size);
        }
        println!("   {}", render_line(&record.view));
    }
    info!("Replayed {} steps", records.len());
    Ok(())
}
