//! Integration tests for the printed report.

use crate::setup::{chain_messenger, load_test_overrides, messenger, registries, CUSTOM_CHAIN_ID, L2_CHAIN_ID};
use config::{Chain, Overrides};
use inspect::{report::Report, resolve};


#[test]
fn test_json_report() {
    let resolved = resolve::<()>(
        &registries(),
        chain_messenger(Chain::Goerli),
        &Overrides::default(),
        None,
        None,
    )
    .unwrap();
    let report = Report::new(&resolved, Chain::Goerli.id(), L2_CHAIN_ID);

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["l1_chain_id"], 5);
    assert_eq!(json["l2_chain_id"], 420);
    assert_eq!(json["network"], "goerli");
    assert_eq!(json["l1"]["AddressManager"]["interface"], "Lib_AddressManager");
    assert_eq!(json["l1"]["AddressManager"]["connected"], false);
    assert!(json["l1"].get("VMT").is_none());
    assert_eq!(json["l2"]["OVM_L1BlockNumber"]["interface"], "iOVM_L1BlockNumber");
    assert_eq!(json["l2"]["WETH"]["interface"], "WETH9");
    assert_eq!(json["bridges"]["Standard"]["kind"], "standard");
    assert_eq!(json["bridges"]["ETH"]["kind"], "eth");
}

#[test]
fn test_text_report() {
    let resolved = resolve::<()>(
        &registries(),
        messenger(CUSTOM_CHAIN_ID),
        &load_test_overrides(),
        None,
        None,
    )
    .unwrap();
    let report = Report::new(&resolved, CUSTOM_CHAIN_ID, L2_CHAIN_ID);
    let text = report.to_string();

    assert!(report.network.is_none());
    assert!(text.starts_with("L1 chain 900 (custom) / L2 chain 420"));
    assert!(text.contains("CanonicalTransactionChain"));
    assert!(text.contains("OVM_SequencerFeeVault"));
    assert!(text.contains("DAI        dai "));
    assert!(!text.contains("VMT"));
}
