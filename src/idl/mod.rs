//! IDL fetching and documents
//!
//! This module handles fetching Anchor IDLs from on-chain IDL accounts
//! through a read-only RPC context.

mod document;
mod fetcher;
mod provider;

pub use document::*;
pub use fetcher::*;
pub use provider::*;
