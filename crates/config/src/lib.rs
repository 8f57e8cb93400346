//! Deployment configuration for the L1/L2 system.
//!
//! This crate provides:
//! - Known L1 networks ([`Chain`])
//! - The closed set of contract roles on each layer ([`L1Contract`], [`L2Contract`])
//! - Built-in contract addresses per network ([`DeploymentRegistry`])
//! - Built-in bridge adapter data per network ([`BridgeRegistry`])
//! - Caller-supplied overrides, loadable from TOML ([`Overrides`])

pub mod bridges;
pub mod contracts;
pub mod deployments;
pub mod network;
pub mod overrides;

pub use bridges::{AdapterKind, BridgeAdapterSpec, BridgeRegistry, BridgeSpecs};
pub use contracts::{ContractName, L1Contract, L2Contract};
pub use deployments::{predeploys, DeploymentEntry, DeploymentRegistry, L1Deployment, L2Deployment};
pub use network::Chain;
pub use overrides::{BridgeOverrides, ContractOverrides, Overrides};
