//! idl-harvest - Batch-fetch Anchor program IDLs from chain
//!
//! Reads program IDs from a text file, fetches the IDL published for each
//! one through a read-only RPC context, and writes `<program_id>_idl.json`
//! files. Failures are per program and never stop the run.
//!
//! # Quick Start
//!
//! ```ignore
//! use idl_harvest::{open_program_ids, ChainIdlFetcher, Harvester, OutputWriter, Pacer, ReadOnlyProvider};
//! use solana_sdk::commitment_config::CommitmentConfig;
//!
//! let provider = ReadOnlyProvider::new("https://api.mainnet-beta.solana.com", CommitmentConfig::confirmed());
//! let harvester = Harvester::new(ChainIdlFetcher::new(provider), OutputWriter::new("."), Pacer::default());
//!
//! let report = harvester.run(open_program_ids("programid.txt")?).await?;
//! println!("{} written, {} failed", report.written.len(), report.failed.len());
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod harvest;
pub mod idl;
pub mod input;
pub mod logging;
pub mod output;
pub mod pacer;

// Public re-exports for library users
pub use error::{HarvestError, HarvestResult};
pub use harvest::{harvest_from_config, FailedIdl, HarvestReport, Harvester, WrittenIdl};
pub use idl::{
    decode_idl_account, get_idl_address, parse_program_id, ChainIdlFetcher, IdlDocument,
    IdlFetcher, IdlSummary, ReadOnlyProvider, ReadOnlyWallet,
};
pub use input::{open_program_ids, ProgramIds};
pub use output::{idl_file_name, OutputWriter};
pub use pacer::Pacer;
