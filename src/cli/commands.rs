//! CLI command definitions using clap

use crate::config::Config;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// idl-harvest - Fetch Anchor IDLs for a list of programs and save them as JSON
#[derive(Debug, Parser)]
#[command(name = "idl-harvest")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// RPC URL (overrides config)
    #[arg(short, long, global = true)]
    pub url: Option<String>,

    /// File with one program ID per line
    #[arg(short, long, global = true)]
    pub input: Option<PathBuf>,

    /// Directory to write <program_id>_idl.json files into
    #[arg(short, long, global = true)]
    pub out_dir: Option<PathBuf>,

    /// Pause between program IDs, in milliseconds
    #[arg(long, global = true)]
    pub delay_ms: Option<u64>,

    /// Commitment level: processed, confirmed or finalized
    #[arg(long, global = true)]
    pub commitment: Option<String>,

    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Fetch every IDL listed in the input file (default)
    Fetch,

    /// Manage idl-harvest configuration
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
}

#[derive(Debug, Clone, Subcommand)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,

    /// Save the given --url, --input, --out-dir, --delay-ms and --commitment values
    Set,
}

impl Cli {
    /// Parse CLI arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }

    /// Whether any config-backed flag was given
    pub fn has_overrides(&self) -> bool {
        self.url.is_some()
            || self.input.is_some()
            || self.out_dir.is_some()
            || self.delay_ms.is_some()
            || self.commitment.is_some()
    }

    /// Overlay command-line flags on top of a loaded config
    pub fn apply_overrides(&self, mut config: Config) -> Config {
        if let Some(url) = &self.url {
            config.rpc_url = url.clone();
        }
        if let Some(input) = &self.input {
            config.input_file = input.clone();
        }
        if let Some(out_dir) = &self.out_dir {
            config.output_dir = out_dir.clone();
        }
        if let Some(delay_ms) = self.delay_ms {
            config.delay_ms = delay_ms;
        }
        if let Some(commitment) = &self.commitment {
            config.commitment = commitment.clone();
        }
        config
    }
}
