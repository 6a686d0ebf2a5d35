//! Read-only RPC context
//!
//! Reading public IDL accounts needs no signatures. The wallet here is an
//! ephemeral public key whose secret is discarded on creation, and the
//! provider only exposes account reads.

use crate::error::HarvestResult;
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_sdk::commitment_config::CommitmentConfig;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::{Keypair, Signer};
use tracing::debug;

/// Identity that can never sign anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadOnlyWallet {
    pubkey: Pubkey,
}

impl ReadOnlyWallet {
    /// Generate a throwaway identity. Only the public key is retained.
    pub fn ephemeral() -> Self {
        Self {
            pubkey: Keypair::new().pubkey(),
        }
    }

    pub fn pubkey(&self) -> Pubkey {
        self.pubkey
    }
}

/// RPC connection paired with a [`ReadOnlyWallet`].
pub struct ReadOnlyProvider {
    client: RpcClient,
    wallet: ReadOnlyWallet,
}

impl ReadOnlyProvider {
    pub fn new(rpc_url: &str, commitment: CommitmentConfig) -> Self {
        let wallet = ReadOnlyWallet::ephemeral();
        debug!(rpc_url, wallet = %wallet.pubkey(), ?commitment, "created read-only provider");

        Self {
            client: RpcClient::new_with_commitment(rpc_url.to_string(), commitment),
            wallet,
        }
    }

    pub fn wallet(&self) -> &ReadOnlyWallet {
        &self.wallet
    }

    pub fn commitment(&self) -> CommitmentConfig {
        self.client.commitment()
    }

    pub fn url(&self) -> String {
        self.client.url()
    }

    /// Fetch raw account data, or `None` if the account does not exist.
    pub async fn get_account_data(&self, address: &Pubkey) -> HarvestResult<Option<Vec<u8>>> {
        let response = self
            .client
            .get_account_with_commitment(address, self.client.commitment())
            .await?;

        Ok(response.value.map(|account| account.data))
    }
}
