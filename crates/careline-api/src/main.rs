//! Careline CLI and REST API entry point.
//!
//! Binary name: `careline`
//!
//! Loads `.env` and the config file, sets up tracing, then either serves the
//! HTTP API or runs the terminal chat client.

use std::path::Path;

use clap::Parser;

use careline_api::cli::{Cli, Commands};
use careline_api::http::router::build_router;
use careline_api::state::AppState;
use careline_infra::config::{DEFAULT_CONFIG_FILE, load_config, read_config};
use careline_observe::tracing_setup::{init_tracing, shutdown_tracing};
use careline_types::config::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // First, so env-backed flags and RUST_LOG from .env apply.
    let dotenv = dotenvy::dotenv();
    let cli = Cli::parse();

    init_tracing(cli.log_filter(), cli.otel)
        .map_err(|e| anyhow::anyhow!("failed to initialize tracing: {e}"))?;

    match &dotenv {
        Ok(path) => tracing::debug!("Loaded environment from {}", path.display()),
        Err(e) if e.not_found() => tracing::debug!("No .env file found"),
        Err(e) => tracing::warn!("Failed to load .env: {e}"),
    }

    let config = match &cli.config {
        Some(path) => read_config(path).await?,
        None => load_config(Path::new(DEFAULT_CONFIG_FILE)).await,
    };

    let result = run(cli, config).await;
    shutdown_tracing();
    result
}

async fn run(cli: Cli, mut config: AppConfig) -> anyhow::Result<()> {
    cli.apply_overrides(&mut config);

    match cli.command {
        Commands::Serve { .. } => {
            let state = AppState::init(&config)?;

            let addr = format!("{}:{}", config.server.host, config.server.port);
            let listener = tokio::net::TcpListener::bind(&addr).await?;
            tracing::info!(%addr, "Listening");

            if !cli.quiet {
                println!(
                    "  {} Careline API listening on {}",
                    console::style(">").bold(),
                    console::style(format!("http://{addr}")).cyan()
                );
                println!("  {}", console::style("Press Ctrl+C to stop").dim());
            }

            let router = build_router(state);

            axum::serve(listener, router)
                .with_graceful_shutdown(shutdown_signal())
                .await?;

            if !cli.quiet {
                println!("\n  Server stopped.");
            }
        }

        Commands::Chat { url } => {
            let url = url.unwrap_or_else(|| {
                format!("http://{}:{}", config.server.host, config.server.port)
            });
            careline_api::cli::chat::loop_runner::run_chat_loop(&url, cli.json).await?;
        }
    }

    Ok(())
}

/// Wait for Ctrl+C or SIGTERM for graceful shutdown.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
