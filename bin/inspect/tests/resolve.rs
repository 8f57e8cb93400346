//! Integration tests for resolving whole deployments.

use crate::setup::{chain_messenger, load_test_overrides, messenger, registries, CUSTOM_CHAIN_ID};
use alloy_primitives::{address, Address};
use config::{predeploys, Chain, ContractName, L1Contract, L2Contract, Overrides};
use inspect::{all_contracts, resolve};
use resolver::{normalize, registry_name, ResolveError};


#[test]
fn test_every_known_network_resolves() {
    let registries = registries();

    for chain in Chain::ALL {
        let resolved = resolve::<()>(
            &registries,
            chain_messenger(chain),
            &Overrides::default(),
            None,
            None,
        )
        .unwrap();
        let entry = registries.deployments.lookup(chain.id()).unwrap();

        assert_eq!(resolved.contracts.l1.len(), L1Contract::ALL.len() - 1);
        assert_eq!(resolved.contracts.l2.len(), L2Contract::ALL.len());
        assert!(resolved.contracts.l1(L1Contract::Vmt).is_none());
        for (contract, bound) in &resolved.contracts.l1 {
            assert_eq!(bound.address(), entry.l1.get(*contract), "{chain} {contract:?}");
        }
        for (contract, bound) in &resolved.contracts.l2 {
            assert_eq!(bound.address(), entry.l2.get(*contract), "{chain} {contract:?}");
        }
    }
}

#[test]
fn test_interfaces_use_registry_names() {
    let resolved = resolve::<()>(
        &registries(),
        chain_messenger(Chain::Kovan),
        &Overrides::default(),
        None,
        None,
    )
    .unwrap();

    for bound in all_contracts(&resolved.contracts) {
        let name = bound.name();
        assert_eq!(bound.interface().name(), registry_name(name));
        assert_eq!(normalize(bound.interface().name()), bound.interface().name());
    }
    assert_eq!(
        resolved
            .contracts
            .l1(L1Contract::AddressManager)
            .unwrap()
            .interface()
            .name(),
        "Lib_AddressManager"
    );
}

#[test]
fn test_override_wins_over_registry() {
    let custom: Address = address!("1111111111111111111111111111111111111111");
    let mut overrides = Overrides::default();
    overrides.contracts = overrides
        .contracts
        .with_l1(L1Contract::L1CrossDomainMessenger, custom)
        .with_l2(L2Contract::OvmGasPriceOracle, custom);

    let resolved = resolve::<()>(
        &registries(),
        chain_messenger(Chain::Goerli),
        &overrides,
        None,
        None,
    )
    .unwrap();

    assert_eq!(
        resolved
            .contracts
            .l1(L1Contract::L1CrossDomainMessenger)
            .unwrap()
            .address(),
        custom
    );
    assert_eq!(
        resolved
            .contracts
            .l2(L2Contract::OvmGasPriceOracle)
            .unwrap()
            .address(),
        custom
    );
    assert_eq!(
        resolved
            .contracts
            .l2(L2Contract::L2CrossDomainMessenger)
            .unwrap()
            .address(),
        predeploys::L2_CROSS_DOMAIN_MESSENGER
    );
}

#[test]
fn test_unknown_network_fails_without_overrides() {
    let err = resolve::<()>(
        &registries(),
        messenger(CUSTOM_CHAIN_ID),
        &Overrides::default(),
        None,
        None,
    )
    .unwrap_err();

    assert!(matches!(
        err,
        ResolveError::UnknownNetwork { chain_id: CUSTOM_CHAIN_ID, ref missing }
            if missing.len() == L1Contract::ALL.len() - 1
    ));
}

#[test]
fn test_unknown_network_resolves_from_overrides_file() {
    let overrides = load_test_overrides();

    let resolved = resolve::<()>(
        &registries(),
        messenger(CUSTOM_CHAIN_ID),
        &overrides,
        None,
        None,
    )
    .unwrap();

    for (contract, bound) in &resolved.contracts.l1 {
        assert_eq!(Some(bound.address()), overrides.contracts.l1(*contract));
    }
    assert_eq!(
        resolved.contracts.l2(L2Contract::Weth).unwrap().address(),
        address!("0165878A594ca255338adfa4d48449f69242Eb8F")
    );
    assert_eq!(
        resolved.contracts.l2(L2Contract::OvmEth).unwrap().address(),
        predeploys::OVM_ETH
    );
}

#[test]
fn test_transports_attach_per_layer() {
    let resolved = resolve(
        &registries(),
        chain_messenger(Chain::Ropsten),
        &Overrides::default(),
        Some("l1"),
        None,
    )
    .unwrap();

    assert!(resolved.contracts.l1.values().all(|c| c.is_connected()));
    assert!(resolved.contracts.l2.values().all(|c| !c.is_connected()));
    assert_eq!(
        all_contracts(&resolved.contracts).next().map(|c| c.name()),
        Some(ContractName::L1(L1Contract::AddressManager))
    );
}
