//! Binding a single contract role to an address and interface.

use crate::{error::ResolveError, normalize::registry_name};
use alloy_primitives::Address;
use binding::{ContractInterface, InterfaceProvider};
use config::{ContractName, ContractOverrides, DeploymentRegistry, L2Deployment};
use tracing::debug;

/// A contract role bound to an address, its interface, and optionally a transport.
///
/// The transport is whatever the caller connects with (a provider, a wallet-backed
/// provider, a reference to either). It is carried as-is and never used here.
#[derive(Debug, Clone)]
pub struct BoundContract<P> {
    name: ContractName,
    address: Address,
    interface: ContractInterface,
    transport: Option<P>,
}

impl<P> BoundContract<P> {
    /// Caller-facing role name.
    pub const fn name(&self) -> ContractName {
        self.name
    }

    pub const fn address(&self) -> Address {
        self.address
    }

    pub const fn interface(&self) -> &ContractInterface {
        &self.interface
    }

    pub const fn transport(&self) -> Option<&P> {
        self.transport.as_ref()
    }

    pub const fn is_connected(&self) -> bool {
        self.transport.is_some()
    }

    /// Same contract, attached to another transport.
    pub fn connect<Q>(self, transport: Q) -> BoundContract<Q> {
        BoundContract {
            name: self.name,
            address: self.address,
            interface: self.interface,
            transport: Some(transport),
        }
    }

    /// Build a typed contract instance (e.g. `IL1StandardBridge::new`) on the attached
    /// transport. `None` when no transport is attached.
    pub fn typed<C>(&self, ctor: impl FnOnce(Address, P) -> C) -> Option<C>
    where
        P: Clone,
    {
        self.transport
            .clone()
            .map(|transport| ctor(self.address, transport))
    }
}

/// Per-call binding inputs.
#[derive(Debug, Clone)]
pub struct BindOptions<'o, P> {
    /// Explicit address for this call; beats every other source
    pub address: Option<Address>,
    /// Overrides from an aggregate call
    pub overrides: Option<&'o ContractOverrides>,
    /// Transport to attach to the bound contract
    pub transport: Option<P>,
}

impl<P> Default for BindOptions<'_, P> {
    fn default() -> Self {
        Self {
            address: None,
            overrides: None,
            transport: None,
        }
    }
}

impl<'o, P> BindOptions<'o, P> {
    pub fn new() -> Self {
        Self::default()
    }

    pub const fn address(mut self, address: Address) -> Self {
        self.address = Some(address);
        self
    }

    pub const fn overrides(mut self, overrides: &'o ContractOverrides) -> Self {
        self.overrides = Some(overrides);
        self
    }

    pub fn transport(mut self, transport: P) -> Self {
        self.transport = Some(transport);
        self
    }
}

/// Binds contract roles against a deployment registry and an interface provider.
pub struct ContractBinder<'r, I> {
    deployments: &'r DeploymentRegistry,
    interfaces: &'r I,
}

impl<'r, I: InterfaceProvider> ContractBinder<'r, I> {
    pub const fn new(deployments: &'r DeploymentRegistry, interfaces: &'r I) -> Self {
        Self {
            deployments,
            interfaces,
        }
    }

    pub const fn deployments(&self) -> &'r DeploymentRegistry {
        self.deployments
    }

    /// Bind `contract` for the L1 network `chain_id`.
    ///
    /// The address is resolved first (see [`Self::resolve_address`]), then the interface
    /// is looked up under the normalized name. No network call is made.
    pub fn bind<P>(
        &self,
        contract: ContractName,
        chain_id: u64,
        options: BindOptions<'_, P>,
    ) -> Result<BoundContract<P>, ResolveError> {
        let address = self
            .resolve_address(contract, chain_id, options.address, options.overrides)
            .ok_or(ResolveError::InvalidAddress { contract, chain_id })?;

        let interface_name = registry_name(contract);
        let interface = self
            .interfaces
            .interface(interface_name)
            .ok_or(ResolveError::UnknownInterface {
                contract,
                interface: interface_name,
            })?;

        debug!(
            chain_id,
            contract = %contract,
            %address,
            interface = interface_name,
            connected = options.transport.is_some(),
            "Bound contract"
        );

        Ok(BoundContract {
            name: contract,
            address,
            interface,
            transport: options.transport,
        })
    }

    /// Resolve the address of `contract`, highest precedence first:
    /// 1. `address`, the explicit per-call address
    /// 2. the entry for `contract` in `overrides`
    /// 3. the registry entry for `chain_id`, on the contract's own layer only
    ///
    /// L2 contracts of networks missing from the registry fall back to the predeploys.
    pub fn resolve_address(
        &self,
        contract: ContractName,
        chain_id: u64,
        address: Option<Address>,
        overrides: Option<&ContractOverrides>,
    ) -> Option<Address> {
        address
            .or_else(|| overrides.and_then(|overrides| overrides.get(contract)))
            .or_else(|| self.registry_address(contract, chain_id))
    }

    fn registry_address(&self, contract: ContractName, chain_id: u64) -> Option<Address> {
        let entry = self.deployments.lookup(chain_id);
        match contract {
            ContractName::L1(contract) => entry.map(|entry| entry.l1.get(contract)),
            ContractName::L2(contract) => Some(
                entry
                    .map_or_else(L2Deployment::predeploys, |entry| entry.l2)
                    .get(contract),
            ),
        }
    }
}
