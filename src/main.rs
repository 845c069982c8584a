use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use clap::{Parser, Subcommand};
use neonfolio_contact::{EmailJsRelay, RelayCredentials};

/// neonfolio - portfolio site server
#[derive(Parser)]
#[command(name = "neonfolio")]
#[command(about = "Server-rendered portfolio site with a relay-backed contact form", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Server host address (overrides config file)
        #[arg(long)]
        host: Option<String>,

        /// Server port (overrides config file)
        #[arg(long)]
        port: Option<u16>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = neonfolio::config::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    neonfolio::observability::init_observability(&config.observability.log_level)?;

    match cli.command {
        Commands::Serve { host, port } => serve_command(config, host, port).await,
    }
}

#[tracing::instrument(skip(config))]
async fn serve_command(
    config: neonfolio::config::Config,
    host_override: Option<String>,
    port_override: Option<u16>,
) -> Result<()> {
    tracing::info!("Starting neonfolio server...");

    let host = host_override.unwrap_or_else(|| config.server.host.clone());
    let port = port_override.unwrap_or(config.server.port);

    if config.relay.service_id.is_empty()
        || config.relay.template_id.is_empty()
        || config.relay.public_key.is_empty()
    {
        tracing::warn!(
            "Relay credentials are not fully configured; contact form submissions will fail"
        );
    }

    let relay = EmailJsRelay::new(
        config.relay.endpoint.clone(),
        RelayCredentials {
            service_id: config.relay.service_id.clone(),
            template_id: config.relay.template_id.clone(),
            public_key: config.relay.public_key.clone(),
        },
        config.relay.to_name.clone(),
        Duration::from_secs(config.relay.timeout_secs),
    )?;

    let app = neonfolio::create_app(config, Arc::new(relay));

    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
