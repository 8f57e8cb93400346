//! Bridge adapters.
//!
//! A bridge adapter moves one asset class between L1 and L2. The set of adapter kinds
//! is closed ([`AdapterKind`]); [`BridgeAdapter`] dispatches over it and
//! [`resolve_bridges`] builds one adapter per bridge label of a network.
//!
//! Adapters only gain network behavior when the caller hands them a transport.

pub mod dai;
pub mod factory;
pub mod messenger;
pub mod standard;

use alloy_primitives::Address;
pub use config::{AdapterKind, BridgeAdapterSpec};
pub use dai::DaiBridgeAdapter;
pub use factory::{resolve_bridges, BridgeAdapters};
pub use messenger::CrossChainMessenger;
pub use standard::{EthBridgeAdapter, StandardBridgeAdapter};

/// Common surface of every bridge adapter.
pub trait Bridge {
    /// Kind of asset this adapter moves.
    fn kind(&self) -> AdapterKind;

    /// Bridge contract on L1.
    fn l1_bridge(&self) -> Address;

    /// Bridge contract on L2.
    fn l2_bridge(&self) -> Address;
}

/// One of the supported adapter implementations.
#[derive(Debug, Clone)]
pub enum BridgeAdapter<M> {
    Standard(StandardBridgeAdapter<M>),
    Eth(EthBridgeAdapter<M>),
    Dai(DaiBridgeAdapter<M>),
}

impl<M: CrossChainMessenger> BridgeAdapter<M> {
    /// Instantiate the adapter kind named by `spec`.
    pub const fn from_spec(spec: &BridgeAdapterSpec, messenger: M) -> Self {
        match spec.kind {
            AdapterKind::Standard => Self::Standard(StandardBridgeAdapter::new(
                messenger,
                spec.l1_bridge,
                spec.l2_bridge,
            )),
            AdapterKind::Eth => {
                Self::Eth(EthBridgeAdapter::new(messenger, spec.l1_bridge, spec.l2_bridge))
            }
            AdapterKind::Dai => {
                Self::Dai(DaiBridgeAdapter::new(messenger, spec.l1_bridge, spec.l2_bridge))
            }
        }
    }

    pub const fn messenger(&self) -> &M {
        match self {
            Self::Standard(adapter) => adapter.messenger(),
            Self::Eth(adapter) => adapter.messenger(),
            Self::Dai(adapter) => adapter.messenger(),
        }
    }

    /// Spec this adapter was built from.
    pub fn spec(&self) -> BridgeAdapterSpec {
        BridgeAdapterSpec::new(self.kind(), self.l1_bridge(), self.l2_bridge())
    }
}

impl<M: CrossChainMessenger> Bridge for BridgeAdapter<M> {
    fn kind(&self) -> AdapterKind {
        match self {
            Self::Standard(adapter) => adapter.kind(),
            Self::Eth(adapter) => adapter.kind(),
            Self::Dai(adapter) => adapter.kind(),
        }
    }

    fn l1_bridge(&self) -> Address {
        match self {
            Self::Standard(adapter) => adapter.l1_bridge(),
            Self::Eth(adapter) => adapter.l1_bridge(),
            Self::Dai(adapter) => adapter.l1_bridge(),
        }
    }

    fn l2_bridge(&self) -> Address {
        match self {
            Self::Standard(adapter) => adapter.l2_bridge(),
            Self::Eth(adapter) => adapter.l2_bridge(),
            Self::Dai(adapter) => adapter.l2_bridge(),
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::MockMessenger;
    use alloy_primitives::address;

    #[test]
    fn test_from_spec_dispatches_on_kind() {
        let l1_bridge = address!("1111111111111111111111111111111111111111");
        let l2_bridge = address!("2222222222222222222222222222222222222222");

        for kind in [AdapterKind::Standard, AdapterKind::Eth, AdapterKind::Dai] {
            let spec = BridgeAdapterSpec::new(kind, l1_bridge, l2_bridge);
            let adapter = BridgeAdapter::from_spec(&spec, MockMessenger::goerli());

            assert_eq!(adapter.kind(), kind);
            assert_eq!(adapter.spec(), spec);
            assert_eq!(adapter.messenger(), &MockMessenger::goerli());
        }
    }

    #[test]
    fn test_adapter_variants() {
        let spec = BridgeAdapterSpec::new(AdapterKind::Dai, Address::ZERO, Address::ZERO);
        assert!(matches!(
            BridgeAdapter::from_spec(&spec, MockMessenger::goerli()),
            BridgeAdapter::Dai(_)
        ));
    }
}
