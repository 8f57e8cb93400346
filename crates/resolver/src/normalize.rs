//! Caller-facing contract names → interface registry names.
//!
//! A few roles were given nicer names than their deployment artifacts. The remap is
//! applied once, when a contract is bound; lookups and overrides keep caller-facing names.

use config::ContractName;

/// Caller-facing name → artifact name, for the names that differ.
const NAME_REMAPPING: [(&str, &str); 3] = [
    ("AddressManager", "Lib_AddressManager"),
    ("OVM_L1BlockNumber", "iOVM_L1BlockNumber"),
    ("WETH", "WETH9"),
];

/// Map a contract name to the name the interface registry knows it by.
///
/// Identity for every name outside the remap table, so artifact names map to themselves.
pub fn normalize(name: &str) -> &str {
    NAME_REMAPPING
        .iter()
        .find(|(from, _)| *from == name)
        .map_or(name, |&(_, to)| to)
}

/// Interface registry name of a contract role.
pub fn registry_name(contract: ContractName) -> &'static str {
    normalize(contract.as_str())
}
