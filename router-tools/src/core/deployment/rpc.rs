// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Deploying through a JSON-RPC node.

use alloy::{
    network::TransactionBuilder,
    primitives::{utils::format_units, Address},
    providers::Provider,
    rpc::types::TransactionRequest,
};

use super::{
    confirm::wait_for_confirmations, DeployedContract, Deployer, Deployment, DeploymentConfig,
    DeploymentError, DeploymentRequest,
};
use crate::{
    core::network::check_chain_id,
    utils::{
        color::{DebugColor, GREY, LAVENDER},
        format_eth, format_gas, gas_cost,
    },
};

/// Sends deployments through `provider`, which must be able to sign for the sender.
#[derive(Debug)]
pub struct RpcDeployer<P> {
    provider: P,
    config: DeploymentConfig,
}

impl<P: Provider> RpcDeployer<P> {
    pub fn new(provider: P, config: DeploymentConfig) -> Self {
        Self { provider, config }
    }

    pub fn config(&self) -> &DeploymentConfig {
        &self.config
    }

    /// Simulates the creation, failing if the constructor would revert.
    async fn dry_run(&self, tx: &TransactionRequest) -> Result<(), DeploymentError> {
        info!(@grey, "simulating deployment on {}...", self.config.network);
        self.provider
            .call(tx.clone())
            .await
            .map_err(|err| DeploymentError::DryRunFailed(err.to_string()))?;
        Ok(())
    }

    async fn estimate_gas(&self, tx: &TransactionRequest) -> Result<u64, DeploymentError> {
        let gas = self
            .provider
            .estimate_gas(tx.clone())
            .await
            .map_err(|err| DeploymentError::GasEstimationFailure(err.to_string()))?;
        if gas > self.config.gas_limit {
            return Err(DeploymentError::GasCeilingExceeded {
                estimate: gas,
                gas_limit: self.config.gas_limit,
            });
        }
        Ok(gas)
    }

    /// Returns `(max_fee_per_gas, max_priority_fee_per_gas)`.
    async fn fees(&self) -> Result<(u128, u128), DeploymentError> {
        let estimate = self.provider.estimate_eip1559_fees().await?;
        Ok(match self.config.max_fee_per_gas_wei {
            Some(max_fee) => (
                max_fee,
                estimate.max_priority_fee_per_gas.min(max_fee),
            ),
            None => (estimate.max_fee_per_gas, estimate.max_priority_fee_per_gas),
        })
    }

    async fn check_balance(&self, sender: Address, max_fee: u128) -> Result<(), DeploymentError> {
        let cost = gas_cost(self.config.gas_limit, max_fee);
        let balance = self.provider.get_balance(sender).await?;
        if balance < cost {
            return Err(DeploymentError::NotEnoughFunds {
                from_address: sender,
                balance,
                cost,
            });
        }
        Ok(())
    }
}

impl<P: Provider> Deployer for RpcDeployer<P> {
    async fn deploy(
        &mut self,
        request: &DeploymentRequest,
        sender: Address,
    ) -> Result<Deployment, DeploymentError> {
        let config = &self.config;
        check_chain_id(&config.network, config.chain_id, &self.provider).await?;
        debug!(@grey, "sender address: {}", sender.debug_lavender());

        let tx = request.tx(sender);
        if !config.skip_dry_run || config.simulate_only {
            self.dry_run(&tx).await?;
        }
        let gas = self.estimate_gas(&tx).await?;
        let (max_fee, priority_fee) = self.fees().await?;

        if config.simulate_only {
            let gwei = format_units(max_fee, "gwei").unwrap_or_else(|_| max_fee.to_string());
            greyln!("estimates");
            greyln!("deployment tx gas: {}", gas.debug_lavender());
            greyln!("max fee per gas: {} gwei", gwei.debug_lavender());
            greyln!("deployment tx total cost: {}", format_eth(gas_cost(gas, max_fee)));
            return Ok(Deployment::Simulated {
                gas_estimate: gas,
                max_fee_per_gas: max_fee,
            });
        }

        self.check_balance(sender, max_fee).await?;

        let tx = tx
            .with_gas_limit(config.gas_limit)
            .with_max_fee_per_gas(max_fee)
            .with_max_priority_fee_per_gas(priority_fee);

        let submitted_at = self.provider.get_block_number().await?;
        let pending = self.provider.send_transaction(tx).await?;
        let tx_hash = *pending.tx_hash();
        info!(@grey,
            "sent {} deploy tx {} {GREY}(estimated {}{GREY}, limit {LAVENDER}{}{GREY})",
            request.contract(),
            tx_hash.debug_lavender(),
            format_gas(gas.into()),
            config.gas_limit
        );

        let receipt =
            wait_for_confirmations(tx_hash, submitted_at, &config.confirmation_policy(), &self.provider)
                .await?;
        if !receipt.status() {
            return Err(DeploymentError::Reverted { tx_hash });
        }
        let address = receipt
            .contract_address
            .ok_or(DeploymentError::MissingContractAddress { tx_hash })?;

        info!(@grey, "deployed code at address: {}", address.debug_lavender());
        debug!(@grey, "gas used: {}", format_gas(receipt.gas_used.into()));
        info!(@grey, "deployment tx hash: {}", tx_hash.debug_lavender());

        Ok(Deployment::Confirmed(DeployedContract {
            address,
            transaction_hash: tx_hash,
            block_number: receipt.block_number,
            gas_used: receipt.gas_used,
        }))
    }
}
