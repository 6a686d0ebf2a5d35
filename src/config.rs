//! Configuration management for idl-harvest
//!
//! Config is stored at ~/.config/idl-harvest/config.toml. Every field has a
//! default, so a missing or partial file is fine. CLI flags take precedence.

use crate::error::{HarvestError, HarvestResult};
use crate::input::DEFAULT_INPUT_FILE;
use crate::pacer::DEFAULT_DELAY_MS;
use serde::{Deserialize, Serialize};
use solana_sdk::commitment_config::{CommitmentConfig, CommitmentLevel};
use std::fs;
use std::path::PathBuf;
use std::str::FromStr;

/// Default RPC URL (mainnet-beta)
pub const DEFAULT_RPC_URL: &str = "https://api.mainnet-beta.solana.com";

/// Default commitment for reads
pub const DEFAULT_COMMITMENT: &str = "confirmed";

/// Config directory name
const CONFIG_DIR: &str = "idl-harvest";

/// Config file name
const CONFIG_FILE: &str = "config.toml";

/// idl-harvest configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// RPC URL for fetching IDLs
    #[serde(default = "default_rpc_url")]
    pub rpc_url: String,

    /// processed, confirmed or finalized
    #[serde(default = "default_commitment")]
    pub commitment: String,

    /// File listing one program ID per line
    #[serde(default = "default_input_file")]
    pub input_file: PathBuf,

    /// Directory that receives `<program_id>_idl.json` files
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Pause between program IDs, in milliseconds
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,
}

fn default_rpc_url() -> String {
    DEFAULT_RPC_URL.to_string()
}

fn default_commitment() -> String {
    DEFAULT_COMMITMENT.to_string()
}

fn default_input_file() -> PathBuf {
    PathBuf::from(DEFAULT_INPUT_FILE)
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_delay_ms() -> u64 {
    DEFAULT_DELAY_MS
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rpc_url: default_rpc_url(),
            commitment: default_commitment(),
            input_file: default_input_file(),
            output_dir: default_output_dir(),
            delay_ms: default_delay_ms(),
        }
    }
}

impl Config {
    /// Get the config directory path (~/.config/idl-harvest/)
    pub fn dir_path() -> HarvestResult<PathBuf> {
        dirs::config_dir()
            .map(|p| p.join(CONFIG_DIR))
            .ok_or_else(|| {
                HarvestError::ConfigError("Could not determine config directory".into())
            })
    }

    /// Get the config file path (~/.config/idl-harvest/config.toml)
    pub fn file_path() -> HarvestResult<PathBuf> {
        Self::dir_path().map(|p| p.join(CONFIG_FILE))
    }

    /// Check if config file exists
    pub fn exists() -> bool {
        Self::file_path().map(|p| p.exists()).unwrap_or(false)
    }

    /// Load config from file, returning defaults if file doesn't exist
    pub fn load() -> HarvestResult<Self> {
        let Ok(path) = Self::file_path() else {
            return Ok(Self::default());
        };

        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)?;
        Self::parse(&contents)
    }

    /// Parse TOML contents. Blank contents yield the defaults.
    pub fn parse(contents: &str) -> HarvestResult<Self> {
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }

        toml::from_str(contents)
            .map_err(|e| HarvestError::ConfigError(format!("Failed to parse config: {}", e)))
    }

    /// Save config to file, creating directories if needed
    pub fn save(&self) -> HarvestResult<()> {
        let dir = Self::dir_path()?;
        let path = Self::file_path()?;

        if !dir.exists() {
            fs::create_dir_all(&dir)?;
        }

        let contents = toml::to_string_pretty(self).map_err(|e| {
            HarvestError::ConfigError(format!("Failed to serialize config: {}", e))
        })?;

        fs::write(&path, contents)?;

        Ok(())
    }

    /// Validate the config values
    pub fn validate(&self) -> HarvestResult<()> {
        if !self.rpc_url.starts_with("http://") && !self.rpc_url.starts_with("https://") {
            return Err(HarvestError::ConfigError(
                "RPC URL must start with http:// or https://".into(),
            ));
        }

        self.commitment_config()?;

        Ok(())
    }

    pub fn commitment_config(&self) -> HarvestResult<CommitmentConfig> {
        parse_commitment(&self.commitment)
    }
}

/// Parse a commitment level name
pub fn parse_commitment(level: &str) -> HarvestResult<CommitmentConfig> {
    CommitmentLevel::from_str(level)
        .map(|commitment| CommitmentConfig { commitment })
        .map_err(|_| {
            HarvestError::ConfigError(format!(
                "Invalid commitment '{}': expected processed, confirmed or finalized",
                level
            ))
        })
}
