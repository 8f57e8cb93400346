//! Contract bindings for the L1/L2 system contracts.
//!
//! This crate consolidates the Solidity interfaces the resolver binds against:
//! - L1 contracts (AddressManager, messenger, standard bridge, state/tx chains, bond manager)
//! - L2 predeploys (messenger, standard bridge, OVM system contracts, WETH9)
//! - Token and DAI bridge interfaces used by bridge adapters
//!
//! All bindings are generated using alloy's `sol!` macro. [`InterfaceRegistry`] indexes
//! them by the contract names used in deployment artifacts.

pub mod bridge;
pub mod interface;
pub mod l1;
pub mod l2;
pub mod token;

pub use interface::{ContractInterface, InterfaceProvider, InterfaceRegistry};
