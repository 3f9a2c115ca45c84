//! # Filmorate Server
//!
//! The main binary for the Filmorate catalog.
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────┐
//! │            apps/filmorate (THE BINARY)        │
//! │                                               │
//! │  ┌─────────────┐          ┌─────────────┐     │
//! │  │   CLI       │          │   HTTP API  │     │
//! │  │  (clap)     │          │   (axum)    │     │
//! │  └──────┬──────┘          └──────┬──────┘     │
//! │         └───────────┬────────────┘            │
//! │                     ▼                         │
//! │           ┌──────────────────┐                │
//! │           │  filmorate-core  │                │
//! │           │   (THE LOGIC)    │                │
//! │           └──────────────────┘                │
//! └───────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```bash
//! # Start the HTTP server
//! filmorate server --host 0.0.0.0 --port 8080 --seed seed.json
//!
//! # Validate a seed file
//! filmorate check-seed -f seed.json
//!
//! # Show the effective configuration
//! filmorate --config filmorate.toml config --json-mode
//! ```

use clap::Parser;
use filmorate::cli;
use filmorate::config::{LogFormat, ServerConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// =============================================================================
// APPLICATION ENTRY POINT
// =============================================================================

#[tokio::main]
async fn main() {
    let cli = cli::Cli::parse();

    let config = match ServerConfig::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    init_tracing(config.log_format);

    if !cli.quiet {
        print_banner();
    }

    if let Err(e) = cli::execute(cli, config).await {
        tracing::error!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Install the global subscriber. `RUST_LOG` overrides the default filter.
fn init_tracing(format: LogFormat) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "filmorate=info,tower_http=debug".into());

    match format {
        LogFormat::Json => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().json())
                .init();
        }
        LogFormat::Text => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer())
                .init();
        }
    }
}

fn print_banner() {
    println!(
        r#"
  ┌─┐┬┬  ┌┬┐┌─┐┬─┐┌─┐┌┬┐┌─┐
  ├┤ ││  ││││ │├┬┘├─┤ │ ├┤
  └  ┴┴─┘┴ ┴└─┘┴└─┴ ┴ ┴ └─┘

  Filmorate v{}
"#,
        env!("CARGO_PKG_VERSION")
    );
}
