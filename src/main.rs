use anyhow::Result;

use idl_harvest::cli::{Cli, Commands, ConfigCommands};
use idl_harvest::config::Config;
use idl_harvest::display::{display_complete, display_config, display_error};
use idl_harvest::logging::init_tracing;
use idl_harvest::{harvest_from_config, ChainIdlFetcher, ReadOnlyProvider};
use tracing::debug;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse_args();
    init_tracing(cli.verbose);

    let result = run(cli).await;

    if let Err(e) = &result {
        display_error(&e.to_string());
        std::process::exit(1);
    }

    Ok(())
}

async fn run(cli: Cli) -> Result<()> {
    match &cli.command {
        None | Some(Commands::Fetch) => cmd_fetch(&cli).await,
        Some(Commands::Config { action }) => cmd_config(&cli, action),
    }
}

// ============================================================================
// Command handlers
// ============================================================================

/// Handle the default `fetch` command - harvest every IDL in the input file
async fn cmd_fetch(cli: &Cli) -> Result<()> {
    let config = cli.apply_overrides(Config::load()?);
    debug!(?config, "effective configuration");

    let report = harvest_from_config(&config, |config| {
        let provider = ReadOnlyProvider::new(&config.rpc_url, config.commitment_config()?);
        Ok(ChainIdlFetcher::new(provider))
    })
    .await?;

    display_complete(&report);
    Ok(())
}

/// Handle `config` subcommands
fn cmd_config(cli: &Cli, action: &ConfigCommands) -> Result<()> {
    match action {
        ConfigCommands::Show => {
            let config = Config::load()?;
            display_config(&config, &Config::file_path()?, Config::exists());
            Ok(())
        }
        ConfigCommands::Set => {
            if !cli.has_overrides() {
                println!("No value provided to set.");
                println!("Usage: idl-harvest config set [--url <RPC_URL>] [--commitment <LEVEL>] [--input <PATH>] [--out-dir <DIR>] [--delay-ms <MS>]");
                return Ok(());
            }

            // Load existing config or defaults, then apply the given flags
            let config = cli.apply_overrides(Config::load()?);
            config.validate()?;
            config.save()?;

            let config_path = Config::file_path()?;
            println!("Saved configuration to {}", config_path.display());
            display_config(&config, &config_path, true);
            Ok(())
        }
    }
}
