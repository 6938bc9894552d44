// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Waiting for a deployment to be mined and confirmed, measured in blocks.

use std::time::Duration;

use alloy::{
    primitives::TxHash,
    providers::Provider,
    rpc::types::TransactionReceipt,
};

use super::DeploymentError;
use crate::utils::color::DebugColor;

/// How long to wait for a submitted transaction, in blocks rather than wall-clock time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfirmationPolicy {
    /// Blocks required on top of the one that includes the transaction.
    pub confirmations: u64,
    /// Blocks after submission without a receipt before giving up. Zero waits forever.
    pub timeout_blocks: u64,
    pub poll_interval: Duration,
}

/// Number of blocks built on top of `mined_in` as of `head`.
pub fn confirmations_at(mined_in: u64, head: u64) -> u64 {
    head.saturating_sub(mined_in)
}

/// Whether a transaction submitted at `submitted_at` has waited too long as of `head`.
pub fn timed_out(submitted_at: u64, head: u64, timeout_blocks: u64) -> bool {
    timeout_blocks != 0 && head.saturating_sub(submitted_at) >= timeout_blocks
}

/// Polls the node until `tx_hash` has the required confirmations.
///
/// Returns the receipt whatever its status; the caller decides what a revert means.
pub async fn wait_for_confirmations(
    tx_hash: TxHash,
    submitted_at: u64,
    policy: &ConfirmationPolicy,
    provider: &impl Provider,
) -> Result<TransactionReceipt, DeploymentError> {
    let mut reported = None;
    loop {
        let head = provider.get_block_number().await?;
        match provider.get_transaction_receipt(tx_hash).await? {
            Some(receipt) => {
                let mined_in = receipt.block_number.unwrap_or(head);
                let confirmations = confirmations_at(mined_in, head);
                if confirmations >= policy.confirmations {
                    return Ok(receipt);
                }
                if reported != Some(confirmations) {
                    debug!(@grey,
                        "tx {} mined in block {mined_in}, {confirmations}/{} confirmations",
                        tx_hash.debug_lavender(),
                        policy.confirmations
                    );
                    reported = Some(confirmations);
                }
            }
            None => {
                if timed_out(submitted_at, head, policy.timeout_blocks) {
                    return Err(DeploymentError::Timeout {
                        tx_hash,
                        blocks: policy.timeout_blocks,
                    });
                }
            }
        }
        tokio::time::sleep(policy.poll_interval).await;
    }
}
