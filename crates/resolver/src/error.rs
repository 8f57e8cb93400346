use config::{ContractName, L1Contract};
use thiserror::Error;

/// Contract resolution failures.
///
/// All of these are configuration errors; retrying without changing the inputs
/// gives the same result.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// Chain id missing from the deployment registry and the overrides do not
    /// cover every L1 contract
    #[error("unknown L1 chain id {chain_id}, overrides required for {missing:?}")]
    UnknownNetwork {
        chain_id: u64,
        missing: Vec<L1Contract>,
    },

    /// No address after applying every override and registry layer
    #[error("no address for {contract} on L1 chain id {chain_id}, an address override is required")]
    InvalidAddress { contract: ContractName, chain_id: u64 },

    /// Interface registry has nothing under the (normalized) name
    #[error("no interface registered as {interface} for {contract}")]
    UnknownInterface {
        contract: ContractName,
        interface: &'static str,
    },
}
