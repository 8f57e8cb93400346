//! Interface registry keyed by deployment artifact names.
//!
//! A [`ContractInterface`] is the encoding/decoding half of a bound contract: it knows
//! which function selectors the contract exposes and how to decode calldata against them.
//! It is derived from the `SolInterface` implementation that `sol!` generates for each
//! interface in this crate.

use crate::{bridge, l1, l2, token};
use alloy_primitives::Selector;
use alloy_sol_types::SolInterface;
use std::{collections::HashMap, fmt};

/// Call encoding/decoding surface of a single contract.
#[derive(Clone, Copy)]
pub struct ContractInterface {
    name: &'static str,
    selector_count: usize,
    selector_at: fn(usize) -> Option<[u8; 4]>,
    valid_selector: fn([u8; 4]) -> bool,
    decode: fn(&[u8]) -> alloy_sol_types::Result<[u8; 4]>,
}

impl ContractInterface {
    /// Build the interface from a generated `<Name>Calls` enum.
    pub fn of<I: SolInterface>(name: &'static str) -> Self {
        Self {
            name,
            selector_count: I::COUNT,
            selector_at: I::selector_at,
            valid_selector: I::valid_selector,
            decode: decode_selector::<I>,
        }
    }

    /// Artifact name this interface is registered under.
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// All function selectors exposed by the contract.
    pub fn selectors(&self) -> impl Iterator<Item = Selector> + '_ {
        (0..self.selector_count)
            .filter_map(self.selector_at)
            .map(Selector::from)
    }

    /// Whether the contract exposes a function with this selector.
    pub fn supports(&self, selector: Selector) -> bool {
        (self.valid_selector)(selector.0)
    }

    /// Decode `calldata` against the interface and return the selector it targets.
    ///
    /// Fails if the selector is unknown or the arguments do not decode.
    pub fn decode_call(&self, calldata: &[u8]) -> alloy_sol_types::Result<Selector> {
        (self.decode)(calldata).map(Selector::from)
    }
}

impl fmt::Debug for ContractInterface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContractInterface")
            .field("name", &self.name)
            .field("functions", &self.selector_count)
            .finish()
    }
}

impl PartialEq for ContractInterface {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.selector_count == other.selector_count
            && self.selectors().eq(other.selectors())
    }
}

impl Eq for ContractInterface {}

fn decode_selector<I: SolInterface>(calldata: &[u8]) -> alloy_sol_types::Result<[u8; 4]> {
    I::abi_decode(calldata).map(|call| call.selector())
}

/// Source of contract interfaces by artifact name.
pub trait InterfaceProvider {
    /// Look up the interface registered under `name`.
    fn interface(&self, name: &str) -> Option<ContractInterface>;
}

impl<T: InterfaceProvider + ?Sized> InterfaceProvider for &T {
    fn interface(&self, name: &str) -> Option<ContractInterface> {
        (**self).interface(name)
    }
}

/// Artifact-name → interface table.
#[derive(Debug, Clone, Default)]
pub struct InterfaceRegistry {
    interfaces: HashMap<&'static str, ContractInterface>,
}

impl InterfaceRegistry {
    /// Empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with every interface bundled in this crate.
    pub fn builtin() -> Self {
        Self::new()
            // L1
            .with(ContractInterface::of::<l1::ILibAddressManager::ILibAddressManagerCalls>(
                "Lib_AddressManager",
            ))
            .with(ContractInterface::of::<
                l1::IL1CrossDomainMessenger::IL1CrossDomainMessengerCalls,
            >("L1CrossDomainMessenger"))
            .with(ContractInterface::of::<l1::IL1StandardBridge::IL1StandardBridgeCalls>(
                "L1StandardBridge",
            ))
            .with(ContractInterface::of::<
                l1::IStateCommitmentChain::IStateCommitmentChainCalls,
            >("StateCommitmentChain"))
            .with(ContractInterface::of::<
                l1::ICanonicalTransactionChain::ICanonicalTransactionChainCalls,
            >("CanonicalTransactionChain"))
            .with(ContractInterface::of::<l1::IBondManager::IBondManagerCalls>(
                "BondManager",
            ))
            // L2
            .with(ContractInterface::of::<
                l2::IL2CrossDomainMessenger::IL2CrossDomainMessengerCalls,
            >("L2CrossDomainMessenger"))
            .with(ContractInterface::of::<l2::IL2StandardBridge::IL2StandardBridgeCalls>(
                "L2StandardBridge",
            ))
            .with(ContractInterface::of::<l2::IL1BlockNumber::IL1BlockNumberCalls>(
                "iOVM_L1BlockNumber",
            ))
            .with(ContractInterface::of::<
                l2::IL2ToL1MessagePasser::IL2ToL1MessagePasserCalls,
            >("OVM_L2ToL1MessagePasser"))
            .with(ContractInterface::of::<l2::IDeployerWhitelist::IDeployerWhitelistCalls>(
                "OVM_DeployerWhitelist",
            ))
            .with(ContractInterface::of::<l2::IGasPriceOracle::IGasPriceOracleCalls>(
                "OVM_GasPriceOracle",
            ))
            .with(ContractInterface::of::<l2::ISequencerFeeVault::ISequencerFeeVaultCalls>(
                "OVM_SequencerFeeVault",
            ))
            // Tokens
            .with(ContractInterface::of::<token::IOVMETH::IOVMETHCalls>("OVM_ETH"))
            .with(ContractInterface::of::<token::IWETH9::IWETH9Calls>("WETH9"))
            .with(ContractInterface::of::<token::IERC20::IERC20Calls>("ERC20"))
            // Bridges
            .with(ContractInterface::of::<bridge::IL1DAITokenBridge::IL1DAITokenBridgeCalls>(
                "L1DAITokenBridge",
            ))
            .with(ContractInterface::of::<bridge::IL2DAITokenBridge::IL2DAITokenBridgeCalls>(
                "L2DAITokenBridge",
            ))
    }

    /// Add (or replace) an interface under its own name.
    pub fn with(mut self, interface: ContractInterface) -> Self {
        self.interfaces.insert(interface.name(), interface);
        self
    }

    /// Registered artifact names.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.interfaces.keys().copied()
    }
}

impl InterfaceProvider for InterfaceRegistry {
    fn interface(&self, name: &str) -> Option<ContractInterface> {
        self.interfaces.get(name).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::{address, U256};
    use alloy_sol_types::SolCall;

    #[test]
    fn test_builtin_contains_renamed_artifacts() {
        let registry = InterfaceRegistry::builtin();

        for name in ["Lib_AddressManager", "iOVM_L1BlockNumber", "WETH9"] {
            assert!(registry.interface(name).is_some(), "missing {name}");
        }
        // caller-facing names are not artifact names
        for name in ["AddressManager", "OVM_L1BlockNumber", "WETH"] {
            assert!(registry.interface(name).is_none(), "unexpected {name}");
        }
    }

    #[test]
    fn test_selectors_match_generated_calls() {
        let registry = InterfaceRegistry::builtin();
        let bond_manager = registry.interface("BondManager").unwrap();

        let selectors: Vec<_> = bond_manager.selectors().collect();
        assert_eq!(
            selectors,
            vec![Selector::from(l1::IBondManager::isCollateralizedCall::SELECTOR)]
        );
        assert!(bond_manager.supports(l1::IBondManager::isCollateralizedCall::SELECTOR.into()));
        assert!(!bond_manager.supports(token::IERC20::balanceOfCall::SELECTOR.into()));
    }

    #[test]
    fn test_decode_call() {
        let registry = InterfaceRegistry::builtin();
        let weth = registry.interface("WETH9").unwrap();

        let calldata = token::IWETH9::withdrawCall {
            wad: U256::from(1_000u64),
        }
        .abi_encode();
        assert_eq!(
            weth.decode_call(&calldata).unwrap(),
            Selector::from(token::IWETH9::withdrawCall::SELECTOR)
        );

        let foreign = l1::IBondManager::isCollateralizedCall {
            _who: address!("1111111111111111111111111111111111111111"),
        }
        .abi_encode();
        assert!(weth.decode_call(&foreign).is_err());
    }

    alloy_sol_types::sol! {
        interface IPause {
            function pause() external;
        }

        interface IUnpause {
            function unpause() external;
        }
    }

    #[test]
    fn test_equality_compares_selectors() {
        let pause = ContractInterface::of::<IPause::IPauseCalls>("Pausable");
        let unpause = ContractInterface::of::<IUnpause::IUnpauseCalls>("Pausable");

        assert_eq!(pause, ContractInterface::of::<IPause::IPauseCalls>("Pausable"));
        assert_ne!(pause, unpause);
    }

    #[test]
    fn test_with_replaces_by_name() {
        let registry = InterfaceRegistry::new()
            .with(ContractInterface::of::<token::IERC20::IERC20Calls>("Token"))
            .with(ContractInterface::of::<token::IWETH9::IWETH9Calls>("Token"));

        assert_eq!(registry.names().count(), 1);
        let entry = registry.interface("Token").unwrap();
        assert!(entry.supports(token::IWETH9::depositCall::SELECTOR.into()));
    }
}
