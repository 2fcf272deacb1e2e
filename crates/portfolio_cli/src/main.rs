//! Command-line driver for the project card pipeline.
//!
//! # Responsibility
//! - Read scraped project JSON, run extraction/rendering, print the result.
//! - Keep stdout reserved for output; diagnostics go through `log`.

use clap::{Parser, Subcommand};
use log::error;
use portfolio_core::{
    category_for_icon, core_version, default_log_level, extract, init_logging, initialize,
    load_config, PortfolioConfig, ProjectsDocument,
};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "portfolio-cards")]
#[command(about = "Render portfolio project cards from scraped text", long_about = None)]
struct Cli {
    /// Log level (trace|debug|info|warn|error).
    #[arg(long, global = true)]
    log_level: Option<String>,
    /// Absolute directory for rotating log files. Logs go to stderr when unset.
    #[arg(long, global = true)]
    log_dir: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render the projects section as HTML.
    Render {
        /// JSON document with `projects: [{icon_class, title, blocks}]`.
        #[arg(short, long)]
        input: PathBuf,
        /// Optional JSON config file.
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Fail when a block matches no known marker.
        #[arg(long)]
        strict: bool,
    },
    /// Print extracted fields for each project as JSON.
    Extract {
        #[arg(short, long)]
        input: PathBuf,
    },
    /// Print the category label for an icon class list.
    Category { icon: String },
    /// Print the core version.
    Version,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            error!("event=cli_run module=cli status=error error={message}");
            eprintln!("error: {message}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), String> {
    match cli.command {
        Command::Render {
            input,
            config,
            strict,
        } => {
            let mut config = match config {
                Some(path) => load_config(&path).map_err(|err| err.to_string())?,
                None => PortfolioConfig::default(),
            };
            config.strict |= strict;
            let level = cli
                .log_level
                .or_else(|| config.log_level.clone())
                .unwrap_or_else(|| default_log_level().to_string());
            init_logging(&level, cli.log_dir.as_deref())?;

            let document = read_document(&input)?;
            let section = initialize(&document, &config).map_err(|err| err.to_string())?;
            println!("{}", section.html);
        }
        Command::Extract { input } => {
            let level = cli
                .log_level
                .unwrap_or_else(|| default_log_level().to_string());
            init_logging(&level, cli.log_dir.as_deref())?;

            let document = read_document(&input)?;
            let extracted = document
                .projects
                .iter()
                .map(|project| {
                    serde_json::json!({
                        "title": project.title,
                        "category": category_for_icon(&project.icon_class),
                        "data": extract(&project.block_refs()),
                    })
                })
                .collect::<Vec<_>>();
            let json = serde_json::to_string_pretty(&extracted)
                .map_err(|err| format!("failed to encode output: {err}"))?;
            println!("{json}");
        }
        Command::Category { icon } => {
            println!("{}", category_for_icon(&icon));
        }
        Command::Version => {
            println!("portfolio_core version={}", core_version());
        }
    }
    Ok(())
}

fn read_document(path: &Path) -> Result<ProjectsDocument, String> {
    let raw = std::fs::read_to_string(path)
        .map_err(|err| format!("failed to read input `{}`: {err}", path.display()))?;
    serde_json::from_str(&raw)
        .map_err(|err| format!("failed to parse input `{}`: {err}", path.display()))
}
