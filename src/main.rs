//! Static route generator (v1)
//!
//! Renders the GET routes of a running web application into static
//! `index.html` files that any file server can host.
//!
//! # Architecture Overview
//!
//! ```text
//!   ┌──────────────────────────────────────────────────────────────────┐
//!   │                        STATIC ROUTES                              │
//!   │                                                                   │
//!   │  ┌─────────┐   ┌───────────┐   ┌───────────┐   ┌──────────────┐   │
//!   │  │ config  │──▶│  routing  │──▶│ generator │──▶│    http      │   │
//!   │  │ (toml)  │   │ table +   │   │ pipeline  │   │  simulator   │──┼──▶ App (in-process
//!   │  └─────────┘   │ exclusion │   └─────┬─────┘   └──────────────┘   │     or loopback)
//!   │                └───────────┘         │                            │
//!   │                                      ▼                            │
//!   │                               ┌────────────┐                      │
//!   │                               │   output   │──────────────────────┼──▶ {out}/{uri}/index.html
//!   │                               │   tree     │                      │
//!   │                               └────────────┘                      │
//!   │  ┌──────────────────────┐  ┌─────────────────────────┐            │
//!   │  │    observability     │  │       lifecycle         │            │
//!   │  │  tracing subscriber  │  │ startup / Ctrl+C cancel │            │
//!   │  └──────────────────────┘  └─────────────────────────┘            │
//!   └──────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The binary has no application linked in, so it fetches routes from a
//! locally running instance (`source.base_url`). Applications that embed
//! the library use `RouteTable` and the in-process simulator instead.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use static_routes::config::loader::{finalize, load_config, load_or_default};
use static_routes::lifecycle::{run_loopback, signals, Shutdown};
use static_routes::observability::init_logging;

const DEFAULT_CONFIG: &str = "static-routes.toml";

#[derive(Parser)]
#[command(name = "static-routes")]
#[command(about = "Generate static index.html files from an application's routes", long_about = None)]
#[command(version)]
struct Cli {
    /// Config file (defaults apply if the default file is absent)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log level, overridden by RUST_LOG
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Clear the output directory and generate every GET route
    Generate(GenerateArgs),
}

#[derive(Args)]
struct GenerateArgs {
    /// Output directory (replaces output_path)
    #[arg(short, long)]
    output: Option<String>,

    /// Additional excluded path prefix, repeatable
    #[arg(short, long = "exclude")]
    excludes: Vec<String>,

    /// Base URL of the running application (replaces source.base_url)
    #[arg(long)]
    base_url: Option<String>,

    /// Additional route to generate, repeatable
    #[arg(short, long = "route")]
    routes: Vec<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => load_or_default(&PathBuf::from(DEFAULT_CONFIG))?,
    };

    let level = cli
        .log_level
        .clone()
        .unwrap_or_else(|| config.observability.log_level.clone());
    init_logging(&level);

    tracing::info!("static-routes v{} starting", env!("CARGO_PKG_VERSION"));

    match cli.command {
        Commands::Generate(args) => {
            if let Some(output) = args.output {
                config.output_path = output;
            }
            config.excluded_paths.extend(args.excludes);
            if let Some(base_url) = args.base_url {
                config.source.base_url = Some(base_url);
            }
            config.source.routes.extend(args.routes);
            let config = finalize(config)?;

            tracing::info!(
                output_path = %config.output_path,
                excluded_paths = ?config.excluded_paths,
                "Configuration loaded"
            );

            let shutdown = Shutdown::new();
            let _signals = signals::spawn_ctrl_c_handler(shutdown.clone());

            let report = run_loopback(&config, Some(shutdown.subscribe())).await?;

            tracing::info!(
                written = report.written.len(),
                skipped = report.total() - report.written.len(),
                "Done"
            );
        }
    }

    Ok(())
}
