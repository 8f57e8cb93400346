//! Contract addresses per L1 network.
//!
//! L1 contracts are deployed per network. L2 contracts are predeploys that sit at the
//! same address on every network, so each built-in entry carries the shared
//! [`L2Deployment::predeploys`] table.

use crate::{
    contracts::{L1Contract, L2Contract},
    network::Chain,
};
use alloy_primitives::{address, Address};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Fixed L2 predeploy addresses.
pub mod predeploys {
    use alloy_primitives::{address, Address};

    pub const L2_TO_L1_MESSAGE_PASSER: Address =
        address!("0x4200000000000000000000000000000000000000");
    pub const DEPLOYER_WHITELIST: Address = address!("0x4200000000000000000000000000000000000002");
    pub const WETH9: Address = address!("0x4200000000000000000000000000000000000006");
    pub const L2_CROSS_DOMAIN_MESSENGER: Address =
        address!("0x4200000000000000000000000000000000000007");
    pub const GAS_PRICE_ORACLE: Address = address!("0x420000000000000000000000000000000000000F");
    pub const L2_STANDARD_BRIDGE: Address = address!("0x4200000000000000000000000000000000000010");
    pub const SEQUENCER_FEE_VAULT: Address =
        address!("0x4200000000000000000000000000000000000011");
    pub const L1_BLOCK_NUMBER: Address = address!("0x4200000000000000000000000000000000000013");
    /// ERC20 view of the native value token on L2
    pub const OVM_ETH: Address = address!("0xDeadDeAddeAddEAddeadDEaDDEAdDeaDDeAD0000");
}

/// L1 contract addresses of one network.
///
/// Every role is a field, so a built-in entry is complete by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct L1Deployment {
    pub address_manager: Address,
    pub l1_cross_domain_messenger: Address,
    pub l1_standard_bridge: Address,
    pub state_commitment_chain: Address,
    pub canonical_transaction_chain: Address,
    pub bond_manager: Address,
    /// Native value token
    pub vmt: Address,
}

impl L1Deployment {
    /// Ropsten deployment.
    pub const fn ropsten() -> Self {
        Self {
            address_manager: address!("0xDF460AcBFD9eF9643F63bCAF59dc9430eE69eCDA"),
            l1_cross_domain_messenger: address!("0x63C9250c8d38e26E50fEe408f508dc512444604e"),
            l1_standard_bridge: address!("0x97f93753460Da366A6ac5Cb93B2C7808b817F2d6"),
            state_commitment_chain: address!("0xe4320c2717D97882bB4B50a3A4e663034Dc4B2C2"),
            canonical_transaction_chain: address!("0x1dB520BcB2D5CA8fd4d32F49b72e69121c7696AF"),
            bond_manager: address!("0x0dA8C6aC3072E15908e12B69a33aaD3cc647ACbA"),
            vmt: address!("0xda3870B989b4b1bF94cA79075A57145E1BBdaEFa"),
        }
    }

    /// Goerli deployment.
    pub const fn goerli() -> Self {
        Self {
            address_manager: address!("0xCa15BF465451e558E61A01982d19c16009CcE073"),
            l1_cross_domain_messenger: address!("0x8F11C69B4b0bc46075F35fAd0F59DE273C7C99F2"),
            l1_standard_bridge: address!("0xcCE335A319e91c1DDd349a5DAA276D9956C52a24"),
            state_commitment_chain: address!("0x20D8Fcfba4d9B55DD0ccAde19D26BB9e989b49ee"),
            canonical_transaction_chain: address!("0xa8146C03Da4a661e7DeF468faEc64497E404f4Dd"),
            bond_manager: address!("0xf3023Ae28B2dED81f2bA19b26cA8121A1d93BD85"),
            vmt: address!("0x7DcC8302D602613CdF8a82bD22d710266441fc23"),
        }
    }

    /// Kovan deployment. Shares its system contracts with Ropsten.
    pub const fn kovan() -> Self {
        Self {
            vmt: address!("0x7A73Be9ADDeF779F83d77A642B07c65f4a94f2b7"),
            ..Self::ropsten()
        }
    }

    /// Local hardhat deployment (deterministic deployer addresses).
    ///
    /// The value token is not deployed locally, so its slot is the zero address.
    pub const fn hardhat_local() -> Self {
        Self {
            address_manager: address!("0x5FbDB2315678afecb367f032d93F642f64180aa3"),
            l1_cross_domain_messenger: address!("0x8A791620dd6260079BF849Dc5567aDC3F2FdC318"),
            l1_standard_bridge: address!("0x610178dA211FEF7D417bC0e6FeD39F05609AD788"),
            state_commitment_chain: address!("0xDc64a140Aa3E981100a9becA4E685f962f0cF6C9"),
            canonical_transaction_chain: address!("0xCf7Ed3AccA5a467e9e704C703E8D87F634fB0Fc9"),
            bond_manager: address!("0x5FC8d32690cc91D4c39d9d3abcBD16989F875707"),
            vmt: Address::ZERO,
        }
    }

    /// Create the deployment for a known chain.
    pub const fn for_chain(chain: Chain) -> Self {
        match chain {
            Chain::Ropsten => Self::ropsten(),
            Chain::Goerli => Self::goerli(),
            Chain::Kovan => Self::kovan(),
            Chain::HardhatLocal => Self::hardhat_local(),
        }
    }

    /// Address of a role.
    pub const fn get(&self, contract: L1Contract) -> Address {
        match contract {
            L1Contract::AddressManager => self.address_manager,
            L1Contract::L1CrossDomainMessenger => self.l1_cross_domain_messenger,
            L1Contract::L1StandardBridge => self.l1_standard_bridge,
            L1Contract::StateCommitmentChain => self.state_commitment_chain,
            L1Contract::CanonicalTransactionChain => self.canonical_transaction_chain,
            L1Contract::BondManager => self.bond_manager,
            L1Contract::Vmt => self.vmt,
        }
    }
}

/// L2 contract addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct L2Deployment {
    pub l2_cross_domain_messenger: Address,
    pub l2_standard_bridge: Address,
    pub l1_block_number: Address,
    pub l2_to_l1_message_passer: Address,
    pub deployer_whitelist: Address,
    pub ovm_eth: Address,
    pub gas_price_oracle: Address,
    pub sequencer_fee_vault: Address,
    pub weth: Address,
}

impl L2Deployment {
    /// Default L2 contract set, identical on every network.
    pub const fn predeploys() -> Self {
        Self {
            l2_cross_domain_messenger: predeploys::L2_CROSS_DOMAIN_MESSENGER,
            l2_standard_bridge: predeploys::L2_STANDARD_BRIDGE,
            l1_block_number: predeploys::L1_BLOCK_NUMBER,
            l2_to_l1_message_passer: predeploys::L2_TO_L1_MESSAGE_PASSER,
            deployer_whitelist: predeploys::DEPLOYER_WHITELIST,
            ovm_eth: predeploys::OVM_ETH,
            gas_price_oracle: predeploys::GAS_PRICE_ORACLE,
            sequencer_fee_vault: predeploys::SEQUENCER_FEE_VAULT,
            weth: predeploys::WETH9,
        }
    }

    /// Address of a role.
    pub const fn get(&self, contract: L2Contract) -> Address {
        match contract {
            L2Contract::L2CrossDomainMessenger => self.l2_cross_domain_messenger,
            L2Contract::L2StandardBridge => self.l2_standard_bridge,
            L2Contract::OvmL1BlockNumber => self.l1_block_number,
            L2Contract::OvmL2ToL1MessagePasser => self.l2_to_l1_message_passer,
            L2Contract::OvmDeployerWhitelist => self.deployer_whitelist,
            L2Contract::OvmEth => self.ovm_eth,
            L2Contract::OvmGasPriceOracle => self.gas_price_oracle,
            L2Contract::OvmSequencerFeeVault => self.sequencer_fee_vault,
            L2Contract::Weth => self.weth,
        }
    }
}

impl Default for L2Deployment {
    fn default() -> Self {
        Self::predeploys()
    }
}

/// Contract addresses on both layers for one L1 network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeploymentEntry {
    pub l1: L1Deployment,
    pub l2: L2Deployment,
}

impl DeploymentEntry {
    /// Entry with the given L1 contracts and the default predeploys.
    pub const fn new(l1: L1Deployment) -> Self {
        Self {
            l1,
            l2: L2Deployment::predeploys(),
        }
    }

    /// Built-in entry for a known chain.
    pub const fn for_chain(chain: Chain) -> Self {
        Self::new(L1Deployment::for_chain(chain))
    }
}

/// Read-only table of deployments keyed by L1 chain id.
///
/// Built once (usually with [`DeploymentRegistry::builtin`]) and shared by reference
/// with every resolver. Entries can only be added while building.
#[derive(Debug, Clone, Default)]
pub struct DeploymentRegistry {
    entries: HashMap<u64, DeploymentEntry>,
}

impl DeploymentRegistry {
    /// Empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with every built-in deployment.
    pub fn builtin() -> Self {
        Chain::ALL.into_iter().fold(Self::new(), |registry, chain| {
            registry.with_entry(chain.id(), DeploymentEntry::for_chain(chain))
        })
    }

    /// Add (or replace) the entry for `chain_id`.
    pub fn with_entry(mut self, chain_id: u64, entry: DeploymentEntry) -> Self {
        self.entries.insert(chain_id, entry);
        self
    }

    /// Entry for `chain_id`, if the network is known.
    pub fn lookup(&self, chain_id: u64) -> Option<&DeploymentEntry> {
        self.entries.get(&chain_id)
    }

    /// Whether `chain_id` has an entry.
    pub fn contains(&self, chain_id: u64) -> bool {
        self.entries.contains_key(&chain_id)
    }

    /// Known chain ids, in no particular order.
    pub fn chain_ids(&self) -> impl Iterator<Item = u64> + '_ {
        self.entries.keys().copied()
    }
}
