//! CLI command definitions for the `relay` binary.
//!
//! Uses clap derive macros for argument parsing.

pub mod chat;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// Relay chat messages between a terminal (or browser) and a generative-language API.
#[derive(Parser)]
#[command(name = "relay", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Suppress all output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the chat proxy server.
    Serve {
        /// Port to listen on (overrides the PORT environment variable).
        #[arg(short, long)]
        port: Option<u16>,

        /// Host to bind to.
        #[arg(long, default_value = "0.0.0.0")]
        host: String,

        /// Also export tracing spans through OpenTelemetry (stdout exporter).
        #[arg(long)]
        otel: bool,
    },

    /// Chat interactively through a running relay server.
    Chat {
        /// Base URL of the relay server.
        #[arg(long, env = "RELAY_SERVER", default_value = "http://localhost:5000")]
        server: String,
    },

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}

impl Cli {
    /// Default log directive when `RUST_LOG` is unset.
    pub fn log_directive(&self) -> &'static str {
        match self.verbose {
            0 if self.quiet => "error",
            0 => "warn",
            1 => "info,relay=debug",
            _ => "trace",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_valid() {
        <Cli as clap::CommandFactory>::command().debug_assert();
    }

    #[test]
    fn serve_parses_port_and_host() {
        let cli = Cli::parse_from(["relay", "serve", "--port", "8080", "--host", "127.0.0.1"]);
        match cli.command {
            Commands::Serve { port, host, otel } => {
                assert_eq!(port, Some(8080));
                assert_eq!(host, "127.0.0.1");
                assert!(!otel);
            }
            _ => panic!("expected serve"),
        }
    }

    #[test]
    fn serve_port_defaults_to_config() {
        let cli = Cli::parse_from(["relay", "serve"]);
        assert!(matches!(cli.command, Commands::Serve { port: None, .. }));
    }

    #[test]
    fn verbosity_selects_log_directive() {
        assert_eq!(Cli::parse_from(["relay", "serve"]).log_directive(), "warn");
        assert_eq!(Cli::parse_from(["relay", "-v", "serve"]).log_directive(), "info,relay=debug");
        assert_eq!(Cli::parse_from(["relay", "--quiet", "serve"]).log_directive(), "error");
        assert_eq!(Cli::parse_from(["relay", "-vv", "serve"]).log_directive(), "trace");
    }
}
