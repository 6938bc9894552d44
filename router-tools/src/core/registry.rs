// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Wrapped native token (WETH) deployments per network.
//!
//! These addresses are sample values carried over from earlier deployments and should be checked
//! against chain data before they are relied on.

use std::collections::BTreeMap;

use alloy::primitives::{address, Address};

use super::network::Network;

#[rustfmt::skip]
pub mod addresses {
    use alloy::primitives::{address, Address};

    pub const WETH_MAINNET: Address = address!("0xC02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2");
    pub const WETH_ROPSTEN: Address = address!("0xc778417E063141139Fce010982780140Aa0cD5Ab");
    pub const WETH_RINKEBY: Address = address!("0xc778417E063141139Fce010982780140Aa0cD5Ab");
    pub const WETH_GOERLI:  Address = address!("0xB4FBF271143F4FBf7B91A5ded31805e42b2208d6");
    pub const WETH_KOVAN:   Address = address!("0xd0A1E359811322d97991E03f863a0C30C2cF029C");
}

/// Account allowed to set the protocol fee recipient on the factory.
///
/// Informational only; the router constructor does not take it.
pub const FEE_TO_SETTER: Address = address!("0xa39700d35cefac22f6364b9add8adc5aefb273f0");

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("no wrapped native token registered for network {0:?}")]
    UnknownNetwork(String),
}

/// Immutable mapping from network name to its wrapped native token contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkAddressTable {
    entries: BTreeMap<String, Address>,
}

impl NetworkAddressTable {
    /// Table with the given entries merged over the built-in ones.
    pub fn with_entries(extra: impl IntoIterator<Item = (String, Address)>) -> Self {
        let mut table = Self::default();
        table.entries.extend(extra);
        table
    }

    /// Resolves the token address for `network`.
    pub fn lookup(&self, network: &str) -> Result<Address, RegistryError> {
        self.get(network)
            .ok_or_else(|| RegistryError::UnknownNetwork(network.to_string()))
    }

    pub fn get(&self, network: &str) -> Option<Address> {
        self.entries.get(network).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Address)> {
        self.entries.iter().map(|(name, addr)| (name.as_str(), *addr))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for NetworkAddressTable {
    fn default() -> Self {
        let entries = Network::ALL
            .into_iter()
            .map(|network| (network.name().to_string(), builtin(network)))
            .collect();
        Self { entries }
    }
}

fn builtin(network: Network) -> Address {
    use addresses::*;
    match network {
        Network::Mainnet => WETH_MAINNET,
        Network::Ropsten => WETH_ROPSTEN,
        Network::Rinkeby => WETH_RINKEBY,
        Network::Goerli => WETH_GOERLI,
        Network::Kovan => WETH_KOVAN,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_known_network_has_an_address() {
        let table = NetworkAddressTable::default();
        assert_eq!(table.len(), Network::ALL.len());
        for network in Network::ALL {
            let addr = table.lookup(network.name()).expect("missing entry");
            assert_ne!(addr, Address::ZERO);
            assert_eq!(addr.as_slice().len(), 20);
        }
    }

    #[test]
    fn resolves_sample_addresses() {
        let table = NetworkAddressTable::default();
        assert_eq!(
            table.lookup("mainnet").unwrap().to_checksum(None),
            "0xC02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2"
        );
        assert_eq!(table.lookup("ropsten"), table.lookup("rinkeby"));
        assert_eq!(
            table.lookup("kovan").unwrap(),
            address!("0xd0A1E359811322d97991E03f863a0C30C2cF029C")
        );
    }

    #[test]
    fn unknown_network_is_an_error() {
        let table = NetworkAddressTable::default();
        assert_eq!(table.get("sepolia"), None);
        assert_eq!(
            table.lookup("sepolia"),
            Err(RegistryError::UnknownNetwork("sepolia".to_string()))
        );
        // lookups are case sensitive, like the network names themselves
        assert!(table.lookup("Mainnet").is_err());
    }

    #[test]
    fn extra_entries_extend_the_table() {
        let dev = Address::repeat_byte(0x11);
        let table = NetworkAddressTable::with_entries([("development".to_string(), dev)]);
        assert_eq!(table.lookup("development"), Ok(dev));
        assert_eq!(table.len(), Network::ALL.len() + 1);
        assert!(table.lookup("mainnet").is_ok());
    }
}
