// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Deploying a contract and tracking it to confirmation.

use std::time::Duration;

use alloy::primitives::{Address, TxHash, U256};

use crate::{
    core::{config::NetworkProfile, network::NetworkError},
    utils::color::{Color, DebugColor},
};

pub use confirm::ConfirmationPolicy;
pub use request::DeploymentRequest;
pub use rpc::RpcDeployer;

pub mod confirm;
pub mod request;
pub mod rpc;
#[cfg(test)]
pub(crate) mod testing;

/// Delay between receipt polls while waiting for confirmations.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(4);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeploymentConfig {
    pub network: String,
    pub chain_id: u64,
    /// Gas limit of the creation transaction. Estimates above it are rejected.
    pub gas_limit: u64,
    pub confirmations: u64,
    pub timeout_blocks: u64,
    pub skip_dry_run: bool,
    pub max_fee_per_gas_wei: Option<u128>,
    pub poll_interval: Duration,
    /// Stop after simulating and estimating; nothing is sent.
    pub simulate_only: bool,
}

impl DeploymentConfig {
    pub fn from_profile(network: impl Into<String>, profile: &NetworkProfile) -> Self {
        Self {
            network: network.into(),
            chain_id: profile.network_id,
            gas_limit: profile.gas,
            confirmations: profile.confirmations,
            timeout_blocks: profile.timeout_blocks,
            skip_dry_run: profile.skip_dry_run,
            max_fee_per_gas_wei: None,
            poll_interval: DEFAULT_POLL_INTERVAL,
            simulate_only: false,
        }
    }

    pub fn confirmation_policy(&self) -> ConfirmationPolicy {
        ConfirmationPolicy {
            confirmations: self.confirmations,
            timeout_blocks: self.timeout_blocks,
            poll_interval: self.poll_interval,
        }
    }
}

/// A contract that made it on chain with the required confirmations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployedContract {
    pub address: Address,
    pub transaction_hash: TxHash,
    pub block_number: Option<u64>,
    pub gas_used: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Deployment {
    /// Only simulated; nothing was sent.
    Simulated { gas_estimate: u64, max_fee_per_gas: u128 },
    Confirmed(DeployedContract),
}

impl Deployment {
    pub fn contract(&self) -> Option<&DeployedContract> {
        match self {
            Self::Simulated { .. } => None,
            Self::Confirmed(contract) => Some(contract),
        }
    }
}

/// Executes deployment requests on behalf of the migration.
#[allow(async_fn_in_trait)]
pub trait Deployer {
    async fn deploy(
        &mut self,
        request: &DeploymentRequest,
        sender: Address,
    ) -> Result<Deployment, DeploymentError>;
}

#[derive(Debug, thiserror::Error)]
pub enum DeploymentError {
    #[error("rpc error: {0}")]
    Rpc(#[from] alloy::transports::RpcError<alloy::transports::TransportErrorKind>),
    #[error("{0}")]
    Network(#[from] NetworkError),

    #[error("dry run failed: {0}")]
    DryRunFailed(String),
    #[error("deployment failed during gas estimation: {0}")]
    GasEstimationFailure(String),
    #[error(
        "estimated {} exceeds the configured gas limit of {gas_limit}",
        format!("{} gas", .estimate).red(),
    )]
    GasCeilingExceeded { estimate: u64, gas_limit: u64 },
    #[error(
        "not enough funds in account {} to pay for deployment\nbalance {} < {}",
        .from_address.red(),
        .balance.red(),
        format!("{} wei", .cost).red(),
    )]
    NotEnoughFunds {
        from_address: Address,
        balance: U256,
        cost: U256,
    },
    #[error("deploy tx reverted {}", .tx_hash.debug_red())]
    Reverted { tx_hash: TxHash },
    #[error("no contract address in receipt of {}", .tx_hash.debug_red())]
    MissingContractAddress { tx_hash: TxHash },
    #[error("tx {} not mined within {blocks} blocks", .tx_hash.debug_red())]
    Timeout { tx_hash: TxHash, blocks: u64 },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::EnvironmentConfig;

    #[test]
    fn config_follows_profile() {
        let env = EnvironmentConfig::default();
        let config = DeploymentConfig::from_profile("ropsten", env.profile("ropsten").unwrap());
        assert_eq!(config.chain_id, 3);
        assert_eq!(config.gas_limit, 8_000_000);
        assert!(config.skip_dry_run);
        assert!(!config.simulate_only);

        let policy = config.confirmation_policy();
        assert_eq!(policy.confirmations, 2);
        assert_eq!(policy.timeout_blocks, 200);
        assert_eq!(policy.poll_interval, DEFAULT_POLL_INTERVAL);
    }

    #[test]
    fn ceiling_error_mentions_limit() {
        let err = DeploymentError::GasCeilingExceeded {
            estimate: 6_000_000,
            gas_limit: 5_500_000,
        };
        let msg = err.to_string();
        assert!(msg.contains("6000000 gas"));
        assert!(msg.contains("5500000"));
    }
}
