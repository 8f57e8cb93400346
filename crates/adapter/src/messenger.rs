//! Messenger handle shared by the bridge adapters.

use std::sync::Arc;

/// Cross-chain messenger the bridge adapters send through.
///
/// Adapters only hold on to it; the caller owns it and decides how it is shared
/// (by reference, `Arc`, or a cheap clone).
pub trait CrossChainMessenger: Send + Sync {
    /// Chain id of the L1 network.
    fn l1_chain_id(&self) -> u64;

    /// Chain id of the L2 network.
    fn l2_chain_id(&self) -> u64;
}

impl<M: CrossChainMessenger + ?Sized> CrossChainMessenger for &M {
    fn l1_chain_id(&self) -> u64 {
        (**self).l1_chain_id()
    }

    fn l2_chain_id(&self) -> u64 {
        (**self).l2_chain_id()
    }
}

impl<M: CrossChainMessenger + ?Sized> CrossChainMessenger for Arc<M> {
    fn l1_chain_id(&self) -> u64 {
        (**self).l1_chain_id()
    }

    fn l2_chain_id(&self) -> u64 {
        (**self).l2_chain_id()
    }
}
