// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! The router migration: one deployment per run, parameterised by the active network.

use alloy::primitives::{address, Address};
use typed_builder::TypedBuilder;

use super::{
    artifact::Artifact,
    deployment::{Deployer, Deployment, DeploymentError, DeploymentRequest},
    registry::{NetworkAddressTable, RegistryError},
};
use crate::utils::color::DebugColor;

/// Already deployed Uniswap V2 factory the router is bound to.
pub const FACTORY_ADDRESS: Address = address!("0x4207CD6E113E364220EC08e2Ff446973437859fd");

#[derive(Debug, thiserror::Error)]
pub enum MigrationError {
    #[error("{0}")]
    Registry(#[from] RegistryError),
    #[error("no accounts available to send the deployment from")]
    NoAccounts,
    #[error("{0}")]
    Deployment(#[from] DeploymentError),
}

/// Deploys the router with `(factory, weth)` constructor arguments.
#[derive(Debug, TypedBuilder)]
pub struct Migration {
    artifact: Artifact,
    #[builder(default)]
    addresses: NetworkAddressTable,
    #[builder(default = FACTORY_ADDRESS)]
    factory: Address,
}

impl Migration {
    pub fn artifact(&self) -> &Artifact {
        &self.artifact
    }

    pub fn factory(&self) -> Address {
        self.factory
    }

    /// Builds the deployment request for `network` without sending anything.
    pub fn request(&self, network: &str) -> Result<DeploymentRequest, MigrationError> {
        let weth = self.addresses.lookup(network)?;
        Ok(DeploymentRequest::new(&self.artifact, self.factory, weth))
    }

    /// Submits exactly one deployment through `deployer`, sent from the first account.
    pub async fn run(
        &self,
        deployer: &mut impl Deployer,
        network: &str,
        accounts: &[Address],
    ) -> Result<Deployment, MigrationError> {
        let request = self.request(network)?;
        let sender = *accounts.first().ok_or(MigrationError::NoAccounts)?;
        info!(@grey,
            "deploying {} to {network} with factory {} and WETH {}",
            request.contract(),
            request.factory().debug_lavender(),
            request.weth().debug_lavender()
        );
        Ok(deployer.deploy(&request, sender).await?)
    }
}
