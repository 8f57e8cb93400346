//! Bridge adapter data per L1 network.

use crate::{
    contracts::{L1Contract, L2Contract},
    deployments::DeploymentRegistry,
};
use alloy_primitives::Address;
use serde::{Deserialize, Serialize};
use std::{
    collections::{BTreeMap, HashMap},
    fmt,
};

/// Label of the standard ERC20 bridge.
pub const STANDARD_BRIDGE: &str = "Standard";
/// Label of the native value bridge.
pub const ETH_BRIDGE: &str = "ETH";
/// Conventional label for the DAI bridge (override-only).
pub const DAI_BRIDGE: &str = "DAI";

/// Adapter implementation to instantiate for a bridge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdapterKind {
    /// Standard ERC20 bridge
    Standard,
    /// Native value deposits/withdrawals through the standard bridge
    Eth,
    /// Token bridge that mints and burns on L2 (DAI)
    Dai,
}

impl AdapterKind {
    /// Name used in override files.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Eth => "eth",
            Self::Dai => "dai",
        }
    }
}

impl fmt::Display for AdapterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Adapter kind and the bridge pair it is wired to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BridgeAdapterSpec {
    pub kind: AdapterKind,
    pub l1_bridge: Address,
    pub l2_bridge: Address,
}

impl BridgeAdapterSpec {
    pub const fn new(kind: AdapterKind, l1_bridge: Address, l2_bridge: Address) -> Self {
        Self {
            kind,
            l1_bridge,
            l2_bridge,
        }
    }
}

/// Bridge label → adapter spec.
pub type BridgeSpecs = BTreeMap<String, BridgeAdapterSpec>;

/// Read-only table of bridge adapter specs keyed by L1 chain id.
#[derive(Debug, Clone, Default)]
pub struct BridgeRegistry {
    entries: HashMap<u64, BridgeSpecs>,
}

impl BridgeRegistry {
    /// Empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Standard and ETH bridges for every network in `deployments`.
    ///
    /// Both are wired to the network's L1StandardBridge and the L2StandardBridge predeploy.
    pub fn builtin(deployments: &DeploymentRegistry) -> Self {
        deployments
            .chain_ids()
            .filter_map(|chain_id| deployments.lookup(chain_id).map(|entry| (chain_id, entry)))
            .fold(Self::new(), |registry, (chain_id, entry)| {
                let l1_bridge = entry.l1.get(L1Contract::L1StandardBridge);
                let l2_bridge = entry.l2.get(L2Contract::L2StandardBridge);
                let specs = BridgeSpecs::from([
                    (
                        STANDARD_BRIDGE.to_string(),
                        BridgeAdapterSpec::new(AdapterKind::Standard, l1_bridge, l2_bridge),
                    ),
                    (
                        ETH_BRIDGE.to_string(),
                        BridgeAdapterSpec::new(AdapterKind::Eth, l1_bridge, l2_bridge),
                    ),
                ]);
                registry.with_bridges(chain_id, specs)
            })
    }

    /// Add (or replace) the bridge set for `chain_id`.
    pub fn with_bridges(mut self, chain_id: u64, specs: BridgeSpecs) -> Self {
        self.entries.insert(chain_id, specs);
        self
    }

    /// Bridge set for `chain_id`, if the network is known.
    pub fn lookup(&self, chain_id: u64) -> Option<&BridgeSpecs> {
        self.entries.get(&chain_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{deployments::predeploys, network::Chain};

    #[test]
    fn test_builtin_bridges() {
        let deployments = DeploymentRegistry::builtin();
        let bridges = BridgeRegistry::builtin(&deployments);

        for chain in Chain::ALL {
            let specs = bridges.lookup(chain.id()).unwrap();
            let l1_bridge = deployments
                .lookup(chain.id())
                .unwrap()
                .l1
                .l1_standard_bridge;

            assert_eq!(specs.len(), 2);
            assert_eq!(specs[STANDARD_BRIDGE].kind, AdapterKind::Standard);
            assert_eq!(specs[ETH_BRIDGE].kind, AdapterKind::Eth);
            for spec in specs.values() {
                assert_eq!(spec.l1_bridge, l1_bridge);
                assert_eq!(spec.l2_bridge, predeploys::L2_STANDARD_BRIDGE);
            }
        }
    }

    #[test]
    fn test_kind_display_matches_serde() {
        for kind in [AdapterKind::Standard, AdapterKind::Eth, AdapterKind::Dai] {
            let spec = BridgeAdapterSpec::new(kind, Address::ZERO, Address::ZERO);
            let parsed: BridgeAdapterSpec = toml::from_str(&format!(
                "kind = \"{kind}\"\nl1_bridge = \"{}\"\nl2_bridge = \"{}\"",
                Address::ZERO,
                Address::ZERO
            ))
            .unwrap();
            assert_eq!(parsed, spec);
        }
        assert_eq!(format!("{:<9}|", AdapterKind::Eth), "eth      |");
    }

    #[test]
    fn test_unknown_network_has_no_bridges() {
        let bridges = BridgeRegistry::builtin(&DeploymentRegistry::builtin());
        assert!(bridges.lookup(1).is_none());
    }
}
