//! # matdiscover
//!
//! Command-line front end for the MatDiscover landing page.
//!
//! ## Usage
//!
//! ```bash
//! # Static page with default branding
//! matdiscover render --out dist/index.html
//!
//! # Preview with the demo results already open
//! matdiscover render --config site.json --formula TiO2 --show-results
//!
//! # Chart data as JSON
//! matdiscover datasets --pretty
//! ```
//!
//! Logs go to stderr; stdout carries only command output.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{debug, info};

use matdiscover_site::data::DATASETS;
use matdiscover_site::{DemoForm, SiteConfig, render_page_with};

// ============================================================================
// CLI Arguments
// ============================================================================

#[derive(Parser, Debug)]
#[command(name = "matdiscover")]
#[command(about = "Prerender the MatDiscover landing page and export its chart data")]
#[command(version)]
struct Args {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write the landing page as a static HTML file
    Render {
        /// JSON file with brand, page_title, asset_base and copyright
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,

        /// Output path
        #[arg(long, value_name = "FILE", default_value = "index.html")]
        out: PathBuf,

        /// Value shown in the demo formula field
        #[arg(long, value_name = "TEXT")]
        formula: Option<String>,

        /// Prerender the demo results panel as if Predict was pressed
        #[arg(long)]
        show_results: bool,
    },
    /// Print the four chart datasets as JSON
    Datasets {
        /// Indent the output
        #[arg(long)]
        pretty: bool,
    },
}

// ============================================================================
// Commands
// ============================================================================

fn load_config(path: Option<&Path>) -> Result<SiteConfig> {
    match path {
        Some(path) => SiteConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display())),
        None => Ok(SiteConfig::default()),
    }
}

fn render(
    config: Option<&Path>,
    out: &Path,
    formula: Option<String>,
    show_results: bool,
) -> Result<()> {
    let config = load_config(config)?;

    let mut form = DemoForm::new();
    if let Some(formula) = formula {
        form.set_formula(formula);
    }
    if show_results {
        form.submit();
    }

    let html = render_page_with(&config, form);

    if let Some(parent) = out.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    std::fs::write(out, &html).with_context(|| format!("Failed to write {}", out.display()))?;

    info!(path = %out.display(), bytes = html.len(), "page written");
    Ok(())
}

fn datasets(pretty: bool) -> Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(&DATASETS)
    } else {
        serde_json::to_string(&DATASETS)
    }
    .context("Failed to serialize datasets")?;

    debug!(bytes = json.len(), "datasets serialized");
    println!("{}", json);
    Ok(())
}

fn run() -> Result<()> {
    let args = Args::parse();

    // stdout is reserved for command output
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| args.log_level.parse().unwrap_or_default()),
        )
        .init();

    debug!("matdiscover v{}", env!("CARGO_PKG_VERSION"));

    match args.command {
        Command::Render {
            config,
            out,
            formula,
            show_results,
        } => render(config.as_deref(), &out, formula, show_results),
        Command::Datasets { pretty } => datasets(pretty),
    }
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
