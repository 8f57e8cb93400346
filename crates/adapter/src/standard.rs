//! Adapters for the standard bridge pair.

use crate::{messenger::CrossChainMessenger, Bridge};
use alloy_primitives::Address;
use alloy_provider::Provider;
use binding::{
    l1::IL1StandardBridge::{self, IL1StandardBridgeInstance},
    l2::IL2StandardBridge::{self, IL2StandardBridgeInstance},
};
use config::{predeploys, AdapterKind};

/// Adapter for ERC20 tokens bridged through the standard bridge.
#[derive(Debug, Clone)]
pub struct StandardBridgeAdapter<M> {
    messenger: M,
    l1_bridge: Address,
    l2_bridge: Address,
}

impl<M: CrossChainMessenger> StandardBridgeAdapter<M> {
    pub const fn new(messenger: M, l1_bridge: Address, l2_bridge: Address) -> Self {
        Self {
            messenger,
            l1_bridge,
            l2_bridge,
        }
    }

    pub const fn messenger(&self) -> &M {
        &self.messenger
    }

    /// L1StandardBridge on the given L1 transport.
    pub const fn l1_bridge_contract<P: Provider>(
        &self,
        provider: P,
    ) -> IL1StandardBridgeInstance<P> {
        IL1StandardBridge::new(self.l1_bridge, provider)
    }

    /// L2StandardBridge on the given L2 transport.
    pub const fn l2_bridge_contract<P: Provider>(
        &self,
        provider: P,
    ) -> IL2StandardBridgeInstance<P> {
        IL2StandardBridge::new(self.l2_bridge, provider)
    }
}

impl<M: CrossChainMessenger> Bridge for StandardBridgeAdapter<M> {
    fn kind(&self) -> AdapterKind {
        AdapterKind::Standard
    }

    fn l1_bridge(&self) -> Address {
        self.l1_bridge
    }

    fn l2_bridge(&self) -> Address {
        self.l2_bridge
    }
}

/// Adapter for the native value token, which moves through the standard bridge
/// using its ETH entry points.
#[derive(Debug, Clone)]
pub struct EthBridgeAdapter<M> {
    inner: StandardBridgeAdapter<M>,
}

impl<M: CrossChainMessenger> EthBridgeAdapter<M> {
    pub const fn new(messenger: M, l1_bridge: Address, l2_bridge: Address) -> Self {
        Self {
            inner: StandardBridgeAdapter::new(messenger, l1_bridge, l2_bridge),
        }
    }

    pub const fn messenger(&self) -> &M {
        self.inner.messenger()
    }

    /// Only the native token pair is supported: the zero address on L1 and
    /// OVM_ETH on L2.
    pub fn supports_token_pair(&self, l1_token: Address, l2_token: Address) -> bool {
        l1_token == Address::ZERO && l2_token == predeploys::OVM_ETH
    }

    pub const fn l1_bridge_contract<P: Provider>(
        &self,
        provider: P,
    ) -> IL1StandardBridgeInstance<P> {
        self.inner.l1_bridge_contract(provider)
    }

    pub const fn l2_bridge_contract<P: Provider>(
        &self,
        provider: P,
    ) -> IL2StandardBridgeInstance<P> {
        self.inner.l2_bridge_contract(provider)
    }
}

impl<M: CrossChainMessenger> Bridge for EthBridgeAdapter<M> {
    fn kind(&self) -> AdapterKind {
        AdapterKind::Eth
    }

    fn l1_bridge(&self) -> Address {
        self.inner.l1_bridge()
    }

    fn l2_bridge(&self) -> Address {
        self.inner.l2_bridge()
    }
}
