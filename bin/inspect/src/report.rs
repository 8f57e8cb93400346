//! Printable summary of a resolved deployment.

use crate::Resolved;
use adapter::BridgeAdapterSpec;
use alloy_primitives::Address;
use config::{Chain, L1Contract, L2Contract};
use resolver::BoundContract;
use serde::Serialize;
use std::{collections::BTreeMap, fmt};

/// One bound contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContractReport {
    pub address: Address,
    /// Interface registry name the contract was bound with
    pub interface: &'static str,
    pub connected: bool,
}

impl<P> From<&BoundContract<P>> for ContractReport {
    fn from(contract: &BoundContract<P>) -> Self {
        Self {
            address: contract.address(),
            interface: contract.interface().name(),
            connected: contract.is_connected(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub l1_chain_id: u64,
    pub l2_chain_id: u64,
    /// Name of the L1 network, when it has a built-in deployment
    pub network: Option<Chain>,
    pub l1: BTreeMap<L1Contract, ContractReport>,
    pub l2: BTreeMap<L2Contract, ContractReport>,
    pub bridges: BTreeMap<String, BridgeAdapterSpec>,
}

impl Report {
    pub fn new<P>(resolved: &Resolved<P>, l1_chain_id: u64, l2_chain_id: u64) -> Self {
        Self {
            l1_chain_id,
            l2_chain_id,
            network: Chain::from_id(l1_chain_id),
            l1: resolved
                .contracts
                .l1
                .iter()
                .map(|(name, contract)| (*name, contract.into()))
                .collect(),
            l2: resolved
                .contracts
                .l2
                .iter()
                .map(|(name, contract)| (*name, contract.into()))
                .collect(),
            bridges: resolved
                .bridges
                .iter()
                .map(|(label, adapter)| (label.clone(), adapter.spec()))
                .collect(),
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let network = self
            .network
            .map_or_else(|| "custom".to_string(), |chain| chain.to_string());
        writeln!(
            f,
            "L1 chain {} ({network}) / L2 chain {}",
            self.l1_chain_id, self.l2_chain_id
        )?;

        writeln!(f, "\nL1 contracts:")?;
        for (name, contract) in &self.l1 {
            writeln!(f, "  {:<28} {}", name.as_str(), contract.address)?;
        }

        writeln!(f, "\nL2 contracts:")?;
        for (name, contract) in &self.l2 {
            writeln!(f, "  {:<28} {}", name.as_str(), contract.address)?;
        }

        writeln!(f, "\nBridges:")?;
        for (label, spec) in &self.bridges {
            writeln!(
                f,
                "  {:<10} {:<9} l1={} l2={}",
                label,
                spec.kind,
                spec.l1_bridge,
                spec.l2_bridge
            )?;
        }

        Ok(())
    }
}
