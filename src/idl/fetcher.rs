//! On-chain IDL fetching

use crate::error::{HarvestError, HarvestResult};
use crate::idl::{IdlDocument, ReadOnlyProvider};
use async_trait::async_trait;
use flate2::read::{DeflateDecoder, ZlibDecoder};
use solana_sdk::pubkey::Pubkey;
use std::io::Read;
use std::str::FromStr;
use tracing::debug;

pub const IDL_SEED: &str = "anchor:idl";

const DISCRIMINATOR_SIZE: usize = 8;
const AUTHORITY_SIZE: usize = 32;
const DATA_LEN_SIZE: usize = 4;
const DATA_LEN_OFFSET: usize = DISCRIMINATOR_SIZE + AUTHORITY_SIZE;
const HEADER_SIZE: usize = DATA_LEN_OFFSET + DATA_LEN_SIZE;

/// Looks up the IDL published for a program.
#[async_trait]
pub trait IdlFetcher: Send + Sync {
    async fn fetch_idl(&self, program_id: &str) -> HarvestResult<IdlDocument>;
}

/// Fetches IDLs from Anchor IDL accounts over RPC.
pub struct ChainIdlFetcher {
    provider: ReadOnlyProvider,
}

impl ChainIdlFetcher {
    pub fn new(provider: ReadOnlyProvider) -> Self {
        Self { provider }
    }
}

#[async_trait]
impl IdlFetcher for ChainIdlFetcher {
    async fn fetch_idl(&self, program_id: &str) -> HarvestResult<IdlDocument> {
        let program_id = parse_program_id(program_id)?;
        let idl_address = get_idl_address(&program_id)?;
        debug!(%program_id, %idl_address, "fetching IDL account");

        let data = self
            .provider
            .get_account_data(&idl_address)
            .await?
            .ok_or_else(|| HarvestError::IdlNotFound(program_id.to_string()))?;
        debug!(%program_id, bytes = data.len(), "fetched IDL account");

        decode_idl_account(&data)
    }
}

/// Parse a base58 program ID.
pub fn parse_program_id(program_id: &str) -> HarvestResult<Pubkey> {
    Pubkey::from_str(program_id).map_err(|_| HarvestError::InvalidProgramId(program_id.to_string()))
}

/// Derive the IDL account address for a program.
pub fn get_idl_address(program_id: &Pubkey) -> HarvestResult<Pubkey> {
    let (program_signer, _bump) = Pubkey::find_program_address(&[], program_id);

    let idl_address = Pubkey::create_with_seed(&program_signer, IDL_SEED, program_id)
        .map_err(|e| HarvestError::InvalidProgramId(e.to_string()))?;

    Ok(idl_address)
}

/// Decode raw IDL account data into a JSON document.
///
/// Layout: discriminator (8) | authority (32) | data_len (u32 LE) | compressed data.
pub fn decode_idl_account(data: &[u8]) -> HarvestResult<IdlDocument> {
    if data.len() < HEADER_SIZE {
        return Err(HarvestError::DecompressionError(
            "Account data too small for IDL header".to_string(),
        ));
    }

    let data_len_bytes: [u8; 4] = data[DATA_LEN_OFFSET..HEADER_SIZE]
        .try_into()
        .map_err(|_| HarvestError::DecompressionError("Failed to read data_len".to_string()))?;
    let data_len = u32::from_le_bytes(data_len_bytes) as usize;

    if data_len == 0 {
        return Err(HarvestError::DecompressionError(
            "IDL compressed data is empty".to_string(),
        ));
    }

    if data.len() < HEADER_SIZE + data_len {
        return Err(HarvestError::DecompressionError(format!(
            "Compressed data truncated: expected {} bytes, got {}",
            data_len,
            data.len() - HEADER_SIZE
        )));
    }

    let compressed = &data[HEADER_SIZE..HEADER_SIZE + data_len];
    let json_bytes = decompress_idl_data(compressed)?;

    let json_str = std::str::from_utf8(&json_bytes)
        .map_err(|_| HarvestError::DecompressionError("Invalid UTF-8".to_string()))?;

    Ok(IdlDocument::new(serde_json::from_str(json_str)?))
}

fn decompress_idl_data(compressed: &[u8]) -> HarvestResult<Vec<u8>> {
    if let Ok(bytes) = decompress_zlib(compressed) {
        return Ok(bytes);
    }

    if let Ok(bytes) = decompress_deflate(compressed) {
        return Ok(bytes);
    }

    Err(HarvestError::DecompressionError(
        "Failed to decompress IDL data".to_string(),
    ))
}

fn decompress_zlib(data: &[u8]) -> std::io::Result<Vec<u8>> {
    let mut decoder = ZlibDecoder::new(data);
    let mut bytes = Vec::new();
    decoder.read_to_end(&mut bytes)?;
    Ok(bytes)
}

fn decompress_deflate(data: &[u8]) -> std::io::Result<Vec<u8>> {
    let mut decoder = DeflateDecoder::new(data);
    let mut bytes = Vec::new();
    decoder.read_to_end(&mut bytes)?;
    Ok(bytes)
}
