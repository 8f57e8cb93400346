//! Contract roles on each layer.
//!
//! The names here are the caller-facing ones. Some differ from the artifact
//! names used by the interface registry; the resolver remaps them at bind time.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Contract roles deployed on L1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum L1Contract {
    AddressManager,
    L1CrossDomainMessenger,
    L1StandardBridge,
    StateCommitmentChain,
    CanonicalTransactionChain,
    BondManager,
    /// Native value token of the system (the token paying for L2 gas).
    #[serde(rename = "VMT")]
    Vmt,
}

impl L1Contract {
    pub const ALL: [Self; 7] = [
        Self::AddressManager,
        Self::L1CrossDomainMessenger,
        Self::L1StandardBridge,
        Self::StateCommitmentChain,
        Self::CanonicalTransactionChain,
        Self::BondManager,
        Self::Vmt,
    ];

    /// Role that holds the native value token rather than a system contract.
    pub const NATIVE_VALUE_TOKEN: Self = Self::Vmt;

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AddressManager => "AddressManager",
            Self::L1CrossDomainMessenger => "L1CrossDomainMessenger",
            Self::L1StandardBridge => "L1StandardBridge",
            Self::StateCommitmentChain => "StateCommitmentChain",
            Self::CanonicalTransactionChain => "CanonicalTransactionChain",
            Self::BondManager => "BondManager",
            Self::Vmt => "VMT",
        }
    }

    /// Whether this is the native value token role.
    ///
    /// The token is tracked in deployment tables but never bound as a system contract.
    pub const fn is_native_value_token(self) -> bool {
        matches!(self, Self::NATIVE_VALUE_TOKEN)
    }

    /// Roles bound as contracts when resolving a whole deployment.
    pub fn bound() -> impl Iterator<Item = Self> {
        Self::ALL
            .into_iter()
            .filter(|contract| !contract.is_native_value_token())
    }
}

/// Contract roles predeployed on L2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum L2Contract {
    L2CrossDomainMessenger,
    L2StandardBridge,
    #[serde(rename = "OVM_L1BlockNumber")]
    OvmL1BlockNumber,
    #[serde(rename = "OVM_L2ToL1MessagePasser")]
    OvmL2ToL1MessagePasser,
    #[serde(rename = "OVM_DeployerWhitelist")]
    OvmDeployerWhitelist,
    #[serde(rename = "OVM_ETH")]
    OvmEth,
    #[serde(rename = "OVM_GasPriceOracle")]
    OvmGasPriceOracle,
    #[serde(rename = "OVM_SequencerFeeVault")]
    OvmSequencerFeeVault,
    #[serde(rename = "WETH")]
    Weth,
}

impl L2Contract {
    pub const ALL: [Self; 9] = [
        Self::L2CrossDomainMessenger,
        Self::L2StandardBridge,
        Self::OvmL1BlockNumber,
        Self::OvmL2ToL1MessagePasser,
        Self::OvmDeployerWhitelist,
        Self::OvmEth,
        Self::OvmGasPriceOracle,
        Self::OvmSequencerFeeVault,
        Self::Weth,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::L2CrossDomainMessenger => "L2CrossDomainMessenger",
            Self::L2StandardBridge => "L2StandardBridge",
            Self::OvmL1BlockNumber => "OVM_L1BlockNumber",
            Self::OvmL2ToL1MessagePasser => "OVM_L2ToL1MessagePasser",
            Self::OvmDeployerWhitelist => "OVM_DeployerWhitelist",
            Self::OvmEth => "OVM_ETH",
            Self::OvmGasPriceOracle => "OVM_GasPriceOracle",
            Self::OvmSequencerFeeVault => "OVM_SequencerFeeVault",
            Self::Weth => "WETH",
        }
    }
}

/// A contract role on either layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ContractName {
    L1(L1Contract),
    L2(L2Contract),
}

impl ContractName {
    /// Every role on both layers, L1 first.
    pub fn all() -> impl Iterator<Item = Self> {
        L1Contract::ALL
            .into_iter()
            .map(Self::L1)
            .chain(L2Contract::ALL.into_iter().map(Self::L2))
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::L1(contract) => contract.as_str(),
            Self::L2(contract) => contract.as_str(),
        }
    }
}

impl From<L1Contract> for ContractName {
    fn from(contract: L1Contract) -> Self {
        Self::L1(contract)
    }
}

impl From<L2Contract> for ContractName {
    fn from(contract: L2Contract) -> Self {
        Self::L2(contract)
    }
}

impl fmt::Display for L1Contract {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for L2Contract {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for ContractName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
