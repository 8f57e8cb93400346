//! L1 networks with a built-in deployment.

use serde::{Deserialize, Serialize};
use std::fmt;

/// L1 network with known system contract deployments.
///
/// Resolvers take raw `u64` chain ids so that unknown networks can still be
/// resolved through overrides; this enum only names the ones shipped in-tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Chain {
    Ropsten,
    Goerli,
    Kovan,
    HardhatLocal,
}

impl Chain {
    /// Every chain with a built-in deployment.
    pub const ALL: [Self; 4] = [Self::Ropsten, Self::Goerli, Self::Kovan, Self::HardhatLocal];

    /// L1 chain id.
    pub const fn id(self) -> u64 {
        match self {
            Self::Ropsten => 3,
            Self::Goerli => 5,
            Self::Kovan => 42,
            Self::HardhatLocal => 31337,
        }
    }

    /// Chain for an L1 chain id, if it is one of the known networks.
    pub const fn from_id(chain_id: u64) -> Option<Self> {
        match chain_id {
            3 => Some(Self::Ropsten),
            5 => Some(Self::Goerli),
            42 => Some(Self::Kovan),
            31337 => Some(Self::HardhatLocal),
            _ => None,
        }
    }
}

impl fmt::Display for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Ropsten => "ropsten",
            Self::Goerli => "goerli",
            Self::Kovan => "kovan",
            Self::HardhatLocal => "hardhat-local",
        };
        f.write_str(name)
    }
}
