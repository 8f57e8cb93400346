//! Resolve contracts and bridge adapters of an L1/L2 pair and check them against live nodes.

pub mod report;

use adapter::{resolve_bridges, BridgeAdapters, CrossChainMessenger};
use alloy_primitives::Address;
use alloy_provider::Provider;
use binding::InterfaceRegistry;
use config::{BridgeRegistry, ContractName, DeploymentRegistry, Overrides};
use resolver::{BoundContract, ContractResolver, OpContracts, ResolveError, ResolveOptions};
use tracing::{info, warn};

/// Built-in registries, constructed once at startup.
#[derive(Debug, Clone)]
pub struct Registries {
    pub deployments: DeploymentRegistry,
    pub bridges: BridgeRegistry,
    pub interfaces: InterfaceRegistry,
}

impl Registries {
    pub fn builtin() -> Self {
        let deployments = DeploymentRegistry::builtin();
        let bridges = BridgeRegistry::builtin(&deployments);
        Self {
            deployments,
            bridges,
            interfaces: InterfaceRegistry::builtin(),
        }
    }
}

/// Messenger handed to bridge adapters; identifies the L1/L2 pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChainMessenger {
    pub l1_chain_id: u64,
    pub l2_chain_id: u64,
}

impl CrossChainMessenger for ChainMessenger {
    fn l1_chain_id(&self) -> u64 {
        self.l1_chain_id
    }

    fn l2_chain_id(&self) -> u64 {
        self.l2_chain_id
    }
}

/// Contracts and bridge adapters of one L1/L2 pair.
#[derive(Debug, Clone)]
pub struct Resolved<P> {
    pub contracts: OpContracts<P, P>,
    pub bridges: BridgeAdapters<ChainMessenger>,
}

/// Resolve every contract and bridge adapter for `messenger`'s L1 network.
pub fn resolve<P: Clone>(
    registries: &Registries,
    messenger: ChainMessenger,
    overrides: &Overrides,
    l1_transport: Option<P>,
    l2_transport: Option<P>,
) -> Result<Resolved<P>, ResolveError> {
    let chain_id = messenger.l1_chain_id;
    let resolver = ContractResolver::new(&registries.deployments, &registries.interfaces);

    let contracts = resolver.resolve_all(
        chain_id,
        ResolveOptions {
            l1_transport,
            l2_transport,
            overrides: Some(&overrides.contracts),
        },
    )?;
    let bridges = resolve_bridges(
        &registries.bridges,
        chain_id,
        messenger,
        Some(&overrides.bridges),
    );

    info!(
        chain_id,
        l1_contracts = contracts.l1.len(),
        l2_contracts = contracts.l2.len(),
        bridges = bridges.len(),
        "Resolved deployment"
    );

    Ok(Resolved { contracts, bridges })
}

/// Query deployed code for every contract with a transport attached and return the
/// ones with none.
pub async fn find_missing_code<P: Provider>(
    contracts: &OpContracts<P, P>,
) -> eyre::Result<Vec<(ContractName, Address)>> {
    let bound = all_contracts(contracts)
        .filter_map(|contract| contract.transport().map(|transport| (contract, transport)));

    let mut missing = Vec::new();
    for (contract, transport) in bound {
        let code = transport.get_code_at(contract.address()).await?;
        if code.is_empty() {
            warn!(contract = %contract.name(), address = %contract.address(), "No code at address");
            missing.push((contract.name(), contract.address()));
        }
    }

    Ok(missing)
}

/// Bound contracts of both layers, L1 first.
pub fn all_contracts<P>(contracts: &OpContracts<P, P>) -> impl Iterator<Item = &BoundContract<P>> {
    contracts.l1.values().chain(contracts.l2.values())
}
