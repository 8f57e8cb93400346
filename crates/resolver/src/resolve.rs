//! Resolve every system contract of an L1 network in one call.

use crate::{
    bind::{BindOptions, BoundContract, ContractBinder},
    error::ResolveError,
};
use binding::InterfaceProvider;
use config::{ContractName, ContractOverrides, DeploymentRegistry, L1Contract, L2Contract};
use std::collections::BTreeMap;
use tracing::{debug, warn};

/// Bound contracts on both layers.
///
/// The native value token role is never present in `l1`.
#[derive(Debug, Clone)]
pub struct OpContracts<P1, P2> {
    pub l1: BTreeMap<L1Contract, BoundContract<P1>>,
    pub l2: BTreeMap<L2Contract, BoundContract<P2>>,
}

impl<P1, P2> OpContracts<P1, P2> {
    pub fn l1(&self, contract: L1Contract) -> Option<&BoundContract<P1>> {
        self.l1.get(&contract)
    }

    pub fn l2(&self, contract: L2Contract) -> Option<&BoundContract<P2>> {
        self.l2.get(&contract)
    }
}

/// Inputs of [`ContractResolver::resolve_all`].
#[derive(Debug, Clone)]
pub struct ResolveOptions<'o, P1, P2> {
    /// Transport attached to every L1 contract
    pub l1_transport: Option<P1>,
    /// Transport attached to every L2 contract
    pub l2_transport: Option<P2>,
    pub overrides: Option<&'o ContractOverrides>,
}

impl<P1, P2> Default for ResolveOptions<'_, P1, P2> {
    fn default() -> Self {
        Self {
            l1_transport: None,
            l2_transport: None,
            overrides: None,
        }
    }
}

impl<'o, P1, P2> ResolveOptions<'o, P1, P2> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn l1_transport(mut self, transport: P1) -> Self {
        self.l1_transport = Some(transport);
        self
    }

    pub fn l2_transport(mut self, transport: P2) -> Self {
        self.l2_transport = Some(transport);
        self
    }

    pub const fn overrides(mut self, overrides: &'o ContractOverrides) -> Self {
        self.overrides = Some(overrides);
        self
    }
}

/// Resolves the full L1 + L2 contract set for a network.
pub struct ContractResolver<'r, I> {
    binder: ContractBinder<'r, I>,
}

impl<'r, I: InterfaceProvider> ContractResolver<'r, I> {
    pub const fn new(deployments: &'r DeploymentRegistry, interfaces: &'r I) -> Self {
        Self {
            binder: ContractBinder::new(deployments, interfaces),
        }
    }

    /// Binder for one-off contracts.
    pub const fn binder(&self) -> &ContractBinder<'r, I> {
        &self.binder
    }

    /// Bind every L1 contract (except the native value token) and every L2 contract.
    ///
    /// For a network missing from the registry, the overrides must provide every bound
    /// L1 contract; L2 contracts then default to the predeploys. Any failure fails the
    /// whole call.
    pub fn resolve_all<P1, P2>(
        &self,
        chain_id: u64,
        options: ResolveOptions<'_, P1, P2>,
    ) -> Result<OpContracts<P1, P2>, ResolveError>
    where
        P1: Clone,
        P2: Clone,
    {
        let ResolveOptions {
            l1_transport,
            l2_transport,
            overrides,
        } = options;

        if !self.binder.deployments().contains(chain_id) {
            let missing: Vec<_> = L1Contract::bound()
                .filter(|contract| overrides.and_then(|o| o.l1(*contract)).is_none())
                .collect();
            if !missing.is_empty() {
                return Err(ResolveError::UnknownNetwork { chain_id, missing });
            }
            warn!(chain_id, "L1 chain id not in deployment registry, using overrides");
        }

        let mut l1 = BTreeMap::new();
        for contract in L1Contract::bound() {
            let bound = self.binder.bind(
                ContractName::L1(contract),
                chain_id,
                BindOptions {
                    address: None,
                    overrides,
                    transport: l1_transport.clone(),
                },
            )?;
            l1.insert(contract, bound);
        }

        let mut l2 = BTreeMap::new();
        for contract in L2Contract::ALL {
            let bound = self.binder.bind(
                ContractName::L2(contract),
                chain_id,
                BindOptions {
                    address: None,
                    overrides,
                    transport: l2_transport.clone(),
                },
            )?;
            l2.insert(contract, bound);
        }

        debug!(
            chain_id,
            l1_contracts = l1.len(),
            l2_contracts = l2.len(),
            "Resolved contracts"
        );

        Ok(OpContracts { l1, l2 })
    }
}
