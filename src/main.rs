//! COVID-19 Dashboard
//!
//! Serves the dashboard, or prints chart figures from the command line.
//!
//! Run with: cargo run -- serve
//!
//! # Configuration
//!
//! Config file (`--config`, or the default search path) with environment
//! overrides:
//! - `COVID_DASH_HOST`: Host to bind to (default: 0.0.0.0)
//! - `COVID_DASH_PORT`: Port to listen on (default: 8051)
//! - `COVID_DASH_DEFAULT_COUNTRY`: Initially selected country (default: United States)
//! - `COVID_DASH_LOG_LEVEL` / `COVID_DASH_LOG_FORMAT`: Logging
//! - `RUST_LOG`: Full filter directive, wins over the configured level

use anyhow::Context;
use clap::{Parser, Subcommand};
use covid_dashboard::api::{serve, AppState};
use covid_dashboard::charts::ChartKind;
use covid_dashboard::config::{generate_default_config, Config, LoggingConfig};
use covid_dashboard::dataset::Dataset;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "covid-dashboard")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Interactive COVID-19 dashboard with five chart panels")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Config file (default: search standard locations)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the dashboard server (default)
    Serve {
        /// Host to bind to
        #[arg(long)]
        host: Option<String>,
        /// Port to listen on
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Print one chart's figure JSON
    Chart {
        /// Chart name (line, bar, choropleth, heatmap, pie) or panel id
        kind: String,
        /// Country to select (default: configured default)
        #[arg(short, long)]
        country: Option<String>,
        /// Pretty-print the JSON
        #[arg(long)]
        pretty: bool,
    },

    /// List selectable countries
    Countries,

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_with_env(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => Config::load_default(),
    };

    init_logging(&config.logging);

    let command = cli.command.unwrap_or(Commands::Serve {
        host: None,
        port: None,
    });

    match command {
        Commands::Serve { host, port } => {
            if let Some(host) = host {
                config.api.host = host;
            }
            if let Some(port) = port {
                config.api.port = port;
            }
            run_server(config).await?;
        }
        Commands::Chart {
            kind,
            country,
            pretty,
        } => {
            let dataset = load_dataset()?;
            let kind: ChartKind = kind.parse()?;
            let country = country.unwrap_or_else(|| config.dashboard.default_country.clone());

            let figure = kind.derive(&dataset, &country)?;
            let json = if pretty {
                serde_json::to_string_pretty(&figure)?
            } else {
                serde_json::to_string(&figure)?
            };
            println!("{}", json);
        }
        Commands::Countries => {
            let dataset = load_dataset()?;
            for country in dataset.countries() {
                let marker = if country == config.dashboard.default_country {
                    " (default)"
                } else {
                    ""
                };
                println!("{}{}", country, marker);
            }
        }
        Commands::Config { output } => {
            let content = generate_default_config();
            match output {
                Some(path) => {
                    std::fs::write(&path, content)
                        .with_context(|| format!("writing config to {}", path.display()))?;
                    tracing::info!("Config written to {}", path.display());
                }
                None => print!("{}", content),
            }
        }
    }

    Ok(())
}

async fn run_server(config: Config) -> anyhow::Result<()> {
    tracing::info!("Starting COVID-19 dashboard v{}", env!("CARGO_PKG_VERSION"));

    let dataset = Arc::new(load_dataset()?);
    tracing::info!(
        observations = dataset.len(),
        countries = dataset.countries().len(),
        "Dataset loaded"
    );

    let state = AppState::new(dataset, config);
    serve(state).await.context("dashboard server failed")?;

    tracing::info!("COVID-19 dashboard stopped");
    Ok(())
}

/// The embedded literal must parse; a failure here aborts startup
fn load_dataset() -> anyhow::Result<Dataset> {
    Dataset::embedded().context("embedded dataset is malformed")
}

/// Logs go to stderr so `chart` output stays pipeable
fn init_logging(config: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "covid_dashboard={},tower_http={}",
            config.level, config.level
        ))
    });

    let registry = tracing_subscriber::registry().with(filter);

    if config.format.eq_ignore_ascii_case("json") {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}
