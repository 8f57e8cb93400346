//! Caller-supplied overrides.
//!
//! Overrides are keyed by caller-facing contract names and take precedence over
//! registry values when contracts are bound. They never modify a registry.
//!
//! ```toml
//! [contracts.l1]
//! AddressManager = "0x5FbDB2315678afecb367f032d93F642f64180aa3"
//!
//! [contracts.l2]
//! WETH = "0x4200000000000000000000000000000000000006"
//!
//! [bridges.DAI]
//! kind = "dai"
//! l1_bridge = "0x10E6593CDda8c58a1d0f14C5164B376352a55f2F"
//! l2_bridge = "0x467194771dAe2967Aef3ECbEDD3Bf9a310C76C65"
//! ```

use crate::{
    bridges::BridgeSpecs,
    contracts::{ContractName, L1Contract, L2Contract},
};
use alloy_primitives::Address;
use serde::{Deserialize, Serialize};
use std::{collections::BTreeMap, path::Path};

/// Per-contract address overrides for each layer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContractOverrides {
    pub l1: BTreeMap<L1Contract, Address>,
    pub l2: BTreeMap<L2Contract, Address>,
}

impl ContractOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    /// Override an L1 contract address.
    pub fn with_l1(mut self, contract: L1Contract, address: Address) -> Self {
        self.l1.insert(contract, address);
        self
    }

    /// Override an L2 contract address.
    pub fn with_l2(mut self, contract: L2Contract, address: Address) -> Self {
        self.l2.insert(contract, address);
        self
    }

    pub fn l1(&self, contract: L1Contract) -> Option<Address> {
        self.l1.get(&contract).copied()
    }

    pub fn l2(&self, contract: L2Contract) -> Option<Address> {
        self.l2.get(&contract).copied()
    }

    /// Override for a role, looked up on the role's own layer only.
    pub fn get(&self, contract: ContractName) -> Option<Address> {
        match contract {
            ContractName::L1(contract) => self.l1(contract),
            ContractName::L2(contract) => self.l2(contract),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.l1.is_empty() && self.l2.is_empty()
    }
}

/// Bridge label → adapter spec, merged over the built-in bridges.
pub type BridgeOverrides = BridgeSpecs;

/// All overrides a caller can supply.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Overrides {
    pub contracts: ContractOverrides,
    pub bridges: BridgeOverrides,
}

impl Overrides {
    pub fn from_file(path: impl AsRef<Path>) -> eyre::Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(contents: &str) -> eyre::Result<Self> {
        let overrides: Self = toml::from_str(contents)?;

        Ok(overrides)
    }
}
