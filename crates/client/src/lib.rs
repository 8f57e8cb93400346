//! Transports for each layer.
//!
//! Contract resolution never talks to a node; these providers are what callers attach
//! to bound contracts and bridge adapters once they want to.

use alloy_network::EthereumWallet;
use alloy_provider::{DynProvider, Provider, ProviderBuilder};
use alloy_signer_local::PrivateKeySigner;
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum ClientError {
    /// Error parsing or validating URLs
    #[error("Invalid RPC URL: {0}")]
    InvalidUrl(String),

    /// Error with private key
    #[error("Invalid private key: {0}")]
    InvalidPrivateKey(String),
}

/// Create a read-only HTTP provider from url.
pub fn create_provider(rpc_url: &str) -> Result<impl Provider + Clone, ClientError> {
    let url = rpc_url
        .parse()
        .map_err(|e| ClientError::InvalidUrl(format!("{}", e)))?;
    let provider = ProviderBuilder::new().connect_http(url);

    Ok(provider)
}

/// Create a provider with wallet signing capability from a private key.
pub fn create_wallet_provider(
    rpc_url: &str,
    private_key: &str,
) -> Result<impl Provider + Clone, ClientError> {
    let url = rpc_url
        .parse()
        .map_err(|e| ClientError::InvalidUrl(format!("{}", e)))?;

    let signer: PrivateKeySigner = private_key
        .parse()
        .map_err(|e| ClientError::InvalidPrivateKey(format!("{}", e)))?;

    let wallet = EthereumWallet::from(signer);

    let provider = ProviderBuilder::new().wallet(wallet).connect_http(url);

    Ok(provider)
}

/// Connect to one layer, signing with `private_key` when given.
///
/// Both flavours are erased to [`DynProvider`] so L1 and L2 transports share a type
/// regardless of how each one signs.
pub fn connect(rpc_url: &str, private_key: Option<&str>) -> Result<DynProvider, ClientError> {
    let provider = match private_key {
        Some(private_key) => create_wallet_provider(rpc_url, private_key)?.erased(),
        None => create_provider(rpc_url)?.erased(),
    };
    debug!(signer = private_key.is_some(), "Connected transport");

    Ok(provider)
}
