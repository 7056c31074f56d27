//! CLI command definitions for the `careline` binary.
//!
//! Uses clap derive macros for argument parsing.

pub mod chat;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use careline_types::config::AppConfig;

/// Healthcare triage chat backend and terminal client.
#[derive(Parser, Debug)]
#[command(name = "careline", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Config file (defaults to ./careline.toml if present).
    #[arg(long, global = true, env = "CARELINE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Print raw JSON responses instead of styled text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress all output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Also export spans through OpenTelemetry (stdout exporter).
    #[arg(long, global = true, env = "CARELINE_OTEL")]
    pub otel: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the HTTP API server.
    Serve {
        /// Port to listen on [default: 8000].
        #[arg(short, long)]
        port: Option<u16>,

        /// Host to bind to [default: 127.0.0.1].
        #[arg(long)]
        host: Option<String>,
    },

    /// Chat with a running server from the terminal.
    Chat {
        /// Server base URL [default: from config, http://127.0.0.1:8000].
        #[arg(long)]
        url: Option<String>,
    },
}

impl Cli {
    /// Log filter for the chosen verbosity. `RUST_LOG` still overrides it.
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 if self.quiet => "error",
            0 => match self.command {
                Commands::Serve { .. } => "info",
                Commands::Chat { .. } => "warn",
            },
            1 => "info,careline_api=debug,careline_core=debug,careline_infra=debug",
            _ => "trace",
        }
    }

    /// Apply `serve --host/--port` on top of the loaded config.
    pub fn apply_overrides(&self, config: &mut AppConfig) {
        if let Commands::Serve { port, host } = &self.command {
            if let Some(port) = port {
                config.server.port = *port;
            }
            if let Some(host) = host {
                config.server.host = host.clone();
            }
        }
    }
}
