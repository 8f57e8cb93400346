//! Contract resolution for the L1/L2 system.
//!
//! Given an L1 chain id, a [`DeploymentRegistry`](config::DeploymentRegistry) and optional
//! caller overrides, produce bound contract handles for every system contract on both
//! layers:
//! - [`normalize`]: caller-facing name → interface registry name
//! - [`bind`]: address precedence and [`BoundContract`] construction
//! - [`resolve`]: the whole L1 + L2 contract set in one call
//!
//! Nothing here performs network calls; transports are carried, never used.

pub mod bind;
pub mod error;
pub mod normalize;
pub mod resolve;

pub use bind::{BindOptions, BoundContract, ContractBinder};
pub use error::ResolveError;
pub use normalize::{normalize, registry_name};
pub use resolve::{ContractResolver, OpContracts, ResolveOptions};
