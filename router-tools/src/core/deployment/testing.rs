// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Scripted JSON-RPC node for deployment tests.
//!
//! Responses are consumed in call order, whatever the method.

use std::time::Duration;

use alloy::{
    primitives::{address, b256, Address, Bloom, Bytes, TxHash, U256, U64},
    providers::{mock::Asserter, ProviderBuilder, RootProvider},
    rpc::types::FeeHistory,
};
use serde_json::{json, Value};

use super::DeploymentConfig;
use crate::core::config::EnvironmentConfig;

pub const SENDER: Address = address!("0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266");
pub const CREATED: Address = address!("0x5FbDB2315678afecb367f032d93F642f64180aa3");
pub const TX_HASH: TxHash =
    b256!("0x6d1c4a0b4b2f2c8e1f36b5b1d4a6f1a2c3e4d5f60718293a4b5c6d7e8f901234");

pub fn mock_provider() -> (RootProvider, Asserter) {
    let asserter = Asserter::new();
    let provider = ProviderBuilder::new()
        .disable_recommended_fillers()
        .connect_mocked_client(asserter.clone());
    (provider, asserter)
}

/// Mainnet profile with no poll delay.
pub fn mainnet_config() -> DeploymentConfig {
    let env = EnvironmentConfig::default();
    let mut config =
        DeploymentConfig::from_profile("mainnet", env.profile("mainnet").expect("builtin"));
    config.poll_interval = Duration::ZERO;
    config
}

pub trait ScriptedNode {
    fn quantity(&self, value: u64);
    fn balance(&self, wei: U256);
    fn call_output(&self);
    fn fee_history(&self);
    fn tx_hash(&self);
    fn no_receipt(&self);
    fn receipt(&self, block: u64, success: bool, contract: Option<Address>);
}

impl ScriptedNode for Asserter {
    fn quantity(&self, value: u64) {
        self.push_success(&U64::from(value));
    }

    fn balance(&self, wei: U256) {
        self.push_success(&wei);
    }

    fn call_output(&self) {
        self.push_success(&Bytes::new());
    }

    /// 1 gwei base fee, 1 gwei tip.
    fn fee_history(&self) {
        self.push_success(&FeeHistory {
            base_fee_per_gas: vec![1_000_000_000, 1_000_000_000],
            gas_used_ratio: vec![0.5],
            oldest_block: 100,
            reward: Some(vec![vec![1_000_000_000]]),
            ..Default::default()
        });
    }

    fn tx_hash(&self) {
        self.push_success(&TX_HASH);
    }

    fn no_receipt(&self) {
        self.push_success(&Value::Null);
    }

    fn receipt(&self, block: u64, success: bool, contract: Option<Address>) {
        self.push_success(&json!({
            "type": "0x2",
            "status": if success { "0x1" } else { "0x0" },
            "cumulativeGasUsed": "0x1e8480",
            "logs": [],
            "logsBloom": Bloom::ZERO,
            "transactionHash": TX_HASH,
            "transactionIndex": "0x0",
            "blockHash": b256!("0x1111111111111111111111111111111111111111111111111111111111111111"),
            "blockNumber": U64::from(block),
            "gasUsed": "0x1e8480",
            "effectiveGasPrice": "0x3b9aca00",
            "from": SENDER,
            "to": null,
            "contractAddress": contract,
        }));
    }
}
