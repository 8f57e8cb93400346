//! Integration tests against live nodes.
//!
//! Set L1_RPC_URL and L2_RPC_URL to a Kovan node pair to run them.

use crate::setup::{chain_messenger, registries, rpc_url};
use config::{Chain, Overrides};
use inspect::{find_missing_code, resolve};


#[tokio::test]
#[ignore]
async fn test_kovan_contracts_have_code() {
    let (Some(l1_url), Some(l2_url)) = (rpc_url("L1_RPC_URL"), rpc_url("L2_RPC_URL")) else {
        return;
    };

    let l1 = client::connect(&l1_url, None).expect("Failed to create L1 provider");
    let l2 = client::connect(&l2_url, None).expect("Failed to create L2 provider");

    let resolved = resolve(
        &registries(),
        chain_messenger(Chain::Kovan),
        &Overrides::default(),
        Some(l1),
        Some(l2),
    )
    .unwrap();

    let missing = find_missing_code(&resolved.contracts).await.unwrap();
    println!("Contracts without code: {missing:?}");
    assert!(missing.is_empty());
}
