// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Well-known public networks.

use alloy::providers::Provider;

use crate::utils::color::Color;

/// Public Ethereum networks the router ships defaults for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Network {
    Mainnet,
    Ropsten,
    Rinkeby,
    Goerli,
    Kovan,
}

impl Network {
    pub const ALL: [Network; 5] = [
        Network::Mainnet,
        Network::Ropsten,
        Network::Rinkeby,
        Network::Goerli,
        Network::Kovan,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Mainnet => "mainnet",
            Self::Ropsten => "ropsten",
            Self::Rinkeby => "rinkeby",
            Self::Goerli => "goerli",
            Self::Kovan => "kovan",
        }
    }

    /// The chain id the network reports through `eth_chainId`.
    pub fn chain_id(&self) -> u64 {
        match self {
            Self::Mainnet => 1,
            Self::Ropsten => 3,
            Self::Rinkeby => 4,
            Self::Goerli => 5,
            Self::Kovan => 42,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum NetworkError {
    #[error(
        "endpoint for {} reports chain id {}, expected {}",
        .network,
        .actual.red(),
        .expected,
    )]
    ChainIdMismatch {
        network: String,
        expected: u64,
        actual: u64,
    },
    #[error("rpc error: {0}")]
    Rpc(#[from] alloy::transports::RpcError<alloy::transports::TransportErrorKind>),
}

/// Checks the connected node serves the chain the profile expects.
pub async fn check_chain_id(
    network: &str,
    expected: u64,
    provider: &impl Provider,
) -> Result<(), NetworkError> {
    let actual = provider.get_chain_id().await?;
    if actual != expected {
        return Err(NetworkError::ChainIdMismatch {
            network: network.to_string(),
            expected,
            actual,
        });
    }
    debug!(@grey, "connected to {network} (chain id {actual})");
    Ok(())
}
