//! Sure Circle CLI
//!
//! - `serve`: host the compiled UI with health routes
//! - `seed`: print the mock dataset as JSON
//! - `config`: print a default config file
//!
//! # Configuration
//!
//! Config is read from `--config`, else `~/.config/sure-circle/config.toml`
//! or `./sure-circle.toml`. `SURE_CIRCLE_*` environment variables override
//! it and `RUST_LOG` overrides the log filter.

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use sure_circle::config::{generate_default_config, Config, LoggingConfig};
use sure_circle::seed::AppData;

#[derive(Parser)]
#[command(name = "sure-circle")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Peer-to-peer insurance pool demo")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the compiled UI
    Serve {
        /// Config file path
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Host to bind to
        #[arg(long)]
        host: Option<String>,
        /// Port to listen on
        #[arg(short, long)]
        port: Option<u16>,
        /// Directory with the compiled UI
        #[arg(long)]
        dist: Option<PathBuf>,
    },

    /// Print the seeded mock dataset
    Seed {
        /// Indent the JSON
        #[arg(long)]
        pretty: bool,
    },

    /// Print a default config file
    Config,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve {
            config,
            host,
            port,
            dist,
        } => {
            let report = match config {
                Some(path) => Config::load_with_env(&path)
                    .with_context(|| format!("loading {}", path.display()))?,
                None => Config::load_default(),
            };
            let mut config = report.config.clone();
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }
            if let Some(dist) = dist {
                config.server.dist_dir = dist;
            }

            init_tracing(&config.logging);
            report.log();
            tracing::info!("Starting Sure Circle v{}", env!("CARGO_PKG_VERSION"));
            tracing::info!("UI directory: {:?}", config.server.dist_dir);

            sure_circle::server::serve(config.server).await?;
        }

        Commands::Seed { pretty } => {
            let data = AppData::seeded();
            let json = if pretty {
                serde_json::to_string_pretty(&data)?
            } else {
                serde_json::to_string(&data)?
            };
            println!("{}", json);
        }

        Commands::Config => {
            print!("{}", generate_default_config());
        }
    }

    Ok(())
}

fn init_tracing(logging: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| logging.filter_directive().into());

    let registry = tracing_subscriber::registry().with(filter);
    if logging.is_json() {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}
