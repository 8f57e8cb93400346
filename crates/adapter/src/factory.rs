//! Bridge adapter construction per network.

use crate::{messenger::CrossChainMessenger, BridgeAdapter};
use config::{BridgeOverrides, BridgeRegistry};
use std::collections::BTreeMap;
use tracing::debug;

/// Bridge label → adapter.
pub type BridgeAdapters<M> = BTreeMap<String, BridgeAdapter<M>>;

/// Build every bridge adapter for the L1 network `chain_id`.
///
/// Built-in bridges of the network (none for an unknown network) are merged with
/// `overrides`; an override replaces the built-in entry with the same label entirely.
/// Each adapter gets its own clone of `messenger`.
pub fn resolve_bridges<M>(
    registry: &BridgeRegistry,
    chain_id: u64,
    messenger: M,
    overrides: Option<&BridgeOverrides>,
) -> BridgeAdapters<M>
where
    M: CrossChainMessenger + Clone,
{
    let mut specs = registry.lookup(chain_id).cloned().unwrap_or_default();
    if let Some(overrides) = overrides {
        specs.extend(
            overrides
                .iter()
                .map(|(label, spec)| (label.clone(), *spec)),
        );
    }

    specs
        .into_iter()
        .map(|(label, spec)| {
            debug!(
                chain_id,
                bridge = %label,
                kind = ?spec.kind,
                l1_bridge = %spec.l1_bridge,
                l2_bridge = %spec.l2_bridge,
                "Created bridge adapter"
            );
            let adapter = BridgeAdapter::from_spec(&spec, messenger.clone());
            (label, adapter)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{test_utils::MockMessenger, Bridge};
    use alloy_primitives::{address, Address};
    use config::{
        bridges::{DAI_BRIDGE, ETH_BRIDGE, STANDARD_BRIDGE},
        predeploys, AdapterKind, BridgeAdapterSpec, Chain, DeploymentRegistry, L1Deployment,
    };
    use std::sync::Arc;

    const DAI_L1: Address = address!("10E6593CDda8c58a1d0f14C5164B376352a55f2F");
    const DAI_L2: Address = address!("467194771dAe2967Aef3ECbEDD3Bf9a310C76C65");

    fn registry() -> BridgeRegistry {
        BridgeRegistry::builtin(&DeploymentRegistry::builtin())
    }

    #[test]
    fn test_builtin_adapters() {
        let adapters = resolve_bridges(&registry(), Chain::Goerli.id(), MockMessenger::goerli(), None);

        assert_eq!(adapters.len(), 2);
        assert!(matches!(adapters[STANDARD_BRIDGE], BridgeAdapter::Standard(_)));
        assert!(matches!(adapters[ETH_BRIDGE], BridgeAdapter::Eth(_)));
        for adapter in adapters.values() {
            assert_eq!(adapter.l1_bridge(), L1Deployment::goerli().l1_standard_bridge);
            assert_eq!(adapter.l2_bridge(), predeploys::L2_STANDARD_BRIDGE);
        }
    }

    #[test]
    fn test_unknown_network_has_only_overrides() {
        let messenger = MockMessenger::goerli();
        assert!(resolve_bridges(&registry(), 1, messenger.clone(), None).is_empty());

        let overrides = BridgeOverrides::from([(
            DAI_BRIDGE.to_string(),
            BridgeAdapterSpec::new(AdapterKind::Dai, DAI_L1, DAI_L2),
        )]);
        let adapters = resolve_bridges(&registry(), 1, messenger, Some(&overrides));
        assert_eq!(adapters.len(), 1);
        assert_eq!(adapters[DAI_BRIDGE].kind(), AdapterKind::Dai);
    }

    #[test]
    fn test_override_adds_new_label() {
        let overrides = BridgeOverrides::from([(
            DAI_BRIDGE.to_string(),
            BridgeAdapterSpec::new(AdapterKind::Dai, DAI_L1, DAI_L2),
        )]);

        let adapters = resolve_bridges(
            &registry(),
            Chain::Kovan.id(),
            MockMessenger::goerli(),
            Some(&overrides),
        );

        assert_eq!(adapters.len(), 3);
        assert_eq!(adapters[DAI_BRIDGE].l1_bridge(), DAI_L1);
        assert_eq!(adapters[DAI_BRIDGE].l2_bridge(), DAI_L2);
        assert_eq!(
            adapters[STANDARD_BRIDGE].l1_bridge(),
            L1Deployment::kovan().l1_standard_bridge
        );
    }

    #[test]
    fn test_override_replaces_existing_label() {
        let overrides = BridgeOverrides::from([(
            STANDARD_BRIDGE.to_string(),
            BridgeAdapterSpec::new(AdapterKind::Dai, DAI_L1, DAI_L2),
        )]);

        let adapters = resolve_bridges(
            &registry(),
            Chain::Goerli.id(),
            MockMessenger::goerli(),
            Some(&overrides),
        );

        assert_eq!(adapters.len(), 2);
        assert_eq!(
            adapters[STANDARD_BRIDGE].spec(),
            BridgeAdapterSpec::new(AdapterKind::Dai, DAI_L1, DAI_L2)
        );
        assert_eq!(adapters[ETH_BRIDGE].kind(), AdapterKind::Eth);
    }

    #[test]
    fn test_shared_messenger() {
        let messenger = Arc::new(MockMessenger::goerli());
        let adapters =
            resolve_bridges(&registry(), Chain::Goerli.id(), Arc::clone(&messenger), None);

        for adapter in adapters.values() {
            assert_eq!(adapter.messenger().l1_chain_id(), 5);
            assert_eq!(adapter.messenger().l2_chain_id(), 599);
        }
        // one handle per adapter plus ours; the clone passed in was consumed
        assert_eq!(Arc::strong_count(&messenger), 1 + adapters.len());

        drop(adapters);
        assert_eq!(Arc::strong_count(&messenger), 1);
    }

    #[test]
    fn test_borrowed_messenger() {
        let messenger = MockMessenger::goerli();
        let adapters = resolve_bridges(&registry(), Chain::Goerli.id(), &messenger, None);

        assert_eq!(adapters.len(), 2);
        for adapter in adapters.values() {
            assert_eq!(*adapter.messenger(), &messenger);
        }
    }
}
