//! CLI argument definitions and command implementations.

pub mod conversation;
pub mod status;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// FAQ-constrained customer support chat backend.
#[derive(Debug, Parser)]
#[command(name = "deskbot", version, about)]
pub struct Cli {
    /// Increase logging verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Emit machine-readable JSON instead of tables
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Start the REST API server
    Serve {
        /// Address to bind
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Port to listen on
        #[arg(short, long, default_value_t = 5000)]
        port: u16,
    },

    /// List stored conversations
    List,

    /// Delete a conversation
    Delete {
        /// Session id of the conversation to delete
        session_id: String,
    },

    /// Show data directory and storage status
    Status,

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serve_defaults() {
        let cli = Cli::parse_from(["deskbot", "serve"]);
        match cli.command {
            Commands::Serve { host, port } => {
                assert_eq!(host, "127.0.0.1");
                assert_eq!(port, 5000);
            }
            other => panic!("expected Serve, got {other:?}"),
        }
    }

    #[test]
    fn test_delete_takes_session_id() {
        let cli = Cli::parse_from(["deskbot", "delete", "sess-42"]);
        match cli.command {
            Commands::Delete { session_id } => assert_eq!(session_id, "sess-42"),
            other => panic!("expected Delete, got {other:?}"),
        }
    }

    #[test]
    fn test_global_json_flag() {
        let cli = Cli::parse_from(["deskbot", "list", "--json"]);
        assert!(cli.json);
        assert!(matches!(cli.command, Commands::List));
    }
}
