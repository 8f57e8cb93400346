//! Adapter for the DAI token bridge pair.

use crate::{messenger::CrossChainMessenger, Bridge};
use alloy_primitives::Address;
use alloy_provider::Provider;
use binding::bridge::{
    IL1DAITokenBridge::{self, IL1DAITokenBridgeInstance},
    IL2DAITokenBridge::{self, IL2DAITokenBridgeInstance},
};
use config::AdapterKind;

/// Adapter for DAI, which uses its own bridge pair that mints and burns the L2 token.
///
/// The bridged token pair lives on-chain (`l1Token()` / `l2Token()` of either bridge).
#[derive(Debug, Clone)]
pub struct DaiBridgeAdapter<M> {
    messenger: M,
    l1_bridge: Address,
    l2_bridge: Address,
}

impl<M: CrossChainMessenger> DaiBridgeAdapter<M> {
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

    pub const fn l1_bridge_contract<P: Provider>(
        &self,
        provider: P,
    ) -> IL1DAITokenBridgeInstance<P> {
        IL1DAITokenBridge::new(self.l1_bridge, provider)
    }

    pub const fn l2_bridge_contract<P: Provider>(
        &self,
        provider: P,
    ) -> IL2DAITokenBridgeInstance<P> {
        IL2DAITokenBridge::new(self.l2_bridge, provider)
    }
}

impl<M: CrossChainMessenger> Bridge for DaiBridgeAdapter<M> {
    fn kind(&self) -> AdapterKind {
        AdapterKind::Dai
    }

    fn l1_bridge(&self) -> Address {
        self.l1_bridge
    }

    fn l2_bridge(&self) -> Address {
        self.l2_bridge
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{MockMessenger, MockProvider};
    use alloy_primitives::address;

    const L1_DAI_BRIDGE: Address = address!("10E6593CDda8c58a1d0f14C5164B376352a55f2F");
    const L2_DAI_BRIDGE: Address = address!("467194771dAe2967Aef3ECbEDD3Bf9a310C76C65");

    #[test]
    fn test_bridge_contracts_use_adapter_addresses() {
        let adapter = DaiBridgeAdapter::new(MockMessenger::goerli(), L1_DAI_BRIDGE, L2_DAI_BRIDGE);

        let l1 = adapter.l1_bridge_contract(MockProvider);
        let l2 = adapter.l2_bridge_contract(MockProvider);
        assert_eq!(*l1.address(), L1_DAI_BRIDGE);
        assert_eq!(*l2.address(), L2_DAI_BRIDGE);
        assert_eq!(adapter.kind(), AdapterKind::Dai);
        assert_eq!(adapter.l1_bridge(), L1_DAI_BRIDGE);
        assert_eq!(adapter.l2_bridge(), L2_DAI_BRIDGE);
        assert_eq!(*adapter.messenger(), MockMessenger::goerli());
    }
}
