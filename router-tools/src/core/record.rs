// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! On-disk record of where the router was deployed on each network.

use std::{
    fs,
    path::{Path, PathBuf},
};

use alloy::primitives::{Address, TxHash};
use serde::{Deserialize, Serialize};

use super::deployment::{DeployedContract, DeploymentRequest};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeploymentRecord {
    pub network: String,
    pub chain_id: u64,
    pub contract: String,
    pub address: Address,
    pub transaction_hash: TxHash,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block_number: Option<u64>,
    pub gas_used: u64,
    pub factory: Address,
    pub weth: Address,
}

impl DeploymentRecord {
    pub fn new(
        network: impl Into<String>,
        chain_id: u64,
        request: &DeploymentRequest,
        deployed: &DeployedContract,
    ) -> Self {
        Self {
            network: network.into(),
            chain_id,
            contract: request.contract().to_string(),
            address: deployed.address,
            transaction_hash: deployed.transaction_hash,
            block_number: deployed.block_number,
            gas_used: deployed.gas_used,
            factory: request.factory(),
            weth: request.weth(),
        }
    }

    /// Path of the record for `network` inside `dir`.
    pub fn path(dir: impl AsRef<Path>, network: &str) -> PathBuf {
        dir.as_ref().join(format!("{network}.json"))
    }

    /// Writes the record to `<dir>/<network>.json`, replacing any earlier deployment.
    pub fn write(&self, dir: impl AsRef<Path>) -> crate::Result<PathBuf> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir)?;
        let path = Self::path(dir, &self.network);
        fs::write(&path, serde_json::to_string_pretty(self)?)?;
        Ok(path)
    }

    pub fn read(path: impl AsRef<Path>) -> crate::Result<Self> {
        let text = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }
}
